//! Access-control decisions: pure functions over verified claims, so the
//! rules stay testable without HTTP or a database. A `false` from any of
//! these maps to 403; a missing or unverifiable token never reaches them
//! and maps to 401.

use crate::auth::claims::{Claims, Role};

/// A request is authenticated iff a token was presented and verified.
pub fn is_authenticated(claims: Option<&Claims>) -> bool {
    claims.is_some()
}

/// Caller owns the target record. Subject ids are normalized to `i64` at
/// token decode time, so numeric and string `sub` forms compare equal here.
pub fn is_self(claims: &Claims, owner_id: i64) -> bool {
    claims.sub == owner_id
}

pub fn is_admin(claims: &Claims) -> bool {
    claims.role == Role::Admin
}

/// Mutating a user record: the owner or an admin.
pub fn can_act_on_user(claims: &Claims, owner_id: i64) -> bool {
    is_self(claims, owner_id) || is_admin(claims)
}

/// Listing every account is admin-only.
pub fn can_list_users(claims: &Claims) -> bool {
    is_admin(claims)
}

/// Email is PII: only the owner or an admin gets to see it.
pub fn can_view_email(claims: &Claims, owner_id: i64) -> bool {
    is_self(claims, owner_id) || is_admin(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: i64, role: Role) -> Claims {
        Claims {
            sub,
            role,
            iat: 0,
            exp: 0,
        }
    }

    #[test]
    fn authenticated_means_claims_present() {
        let c = claims(1, Role::User);
        assert!(is_authenticated(Some(&c)));
        assert!(!is_authenticated(None));
    }

    #[test]
    fn self_matches_only_own_id() {
        let c = claims(5, Role::User);
        assert!(is_self(&c, 5));
        assert!(!is_self(&c, 6));
    }

    #[test]
    fn owner_and_admin_can_act_on_user() {
        let owner = claims(5, Role::User);
        let admin = claims(1, Role::Admin);
        let other = claims(9, Role::User);
        assert!(can_act_on_user(&owner, 5));
        assert!(can_act_on_user(&admin, 5));
        assert!(!can_act_on_user(&other, 5));
    }

    #[test]
    fn only_admin_lists_users() {
        assert!(can_list_users(&claims(1, Role::Admin)));
        assert!(!can_list_users(&claims(1, Role::User)));
    }

    #[test]
    fn email_visible_to_owner_and_admin_only() {
        assert!(can_view_email(&claims(5, Role::User), 5));
        assert!(can_view_email(&claims(1, Role::Admin), 5));
        assert!(!can_view_email(&claims(9, Role::User), 5));
    }
}
