use serde::{Deserialize, Serialize};

/// Account role, stored in the users table and copied into token claims at
/// issuance time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// JWT payload used for authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(with = "subject_id")]
    pub sub: i64,   // user ID
    pub role: Role, // role at issuance time
    pub iat: usize, // issued at (unix timestamp)
    pub exp: usize, // expires at (unix timestamp)
}

/// RFC 7519 types `sub` as StringOrURI, so tokens in the wild carry it as
/// either a JSON number or a decimal string. Accept both on decode, emit a
/// string.
mod subject_id {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(i64),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(n),
            Raw::Text(s) => s.trim().parse().map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_round_trips_as_string() {
        let claims = Claims {
            sub: 42,
            role: Role::User,
            iat: 0,
            exp: 0,
        };
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["sub"], "42");

        let back: Claims = serde_json::from_value(value).unwrap();
        assert_eq!(back.sub, 42);
    }

    #[test]
    fn sub_accepts_number_and_string() {
        let from_num: Claims =
            serde_json::from_value(serde_json::json!({"sub": 5, "role": "admin", "iat": 1, "exp": 2}))
                .unwrap();
        let from_str: Claims =
            serde_json::from_value(serde_json::json!({"sub": "5", "role": "admin", "iat": 1, "exp": 2}))
                .unwrap();
        assert_eq!(from_num.sub, from_str.sub);
        assert_eq!(from_num.role, Role::Admin);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
    }
}
