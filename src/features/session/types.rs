//! Signed-in user data as seen by the navigation chrome, and the pure display
//! derivations built on it. Every field may be missing while the parent is
//! still loading, so the derivations return empty values instead of failing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role used to decide which destinations are listed. Only the exact string
/// `"admin"` grants the administrative section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    #[default]
    Member,
}

impl UserRole {
    pub fn parse(value: &str) -> Self {
        if value == "admin" {
            Self::Admin
        } else {
            Self::Member
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// The subset of the authenticated user the sidebar reads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub email: Option<String>,
}

/// The parent shell's view of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    pub fn current_user(&self) -> CurrentUser {
        CurrentUser {
            email: self.email.clone(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Name shown next to the avatar: the explicit name, else the email, else empty.
pub fn display_name(user_name: Option<&str>, current_user: Option<&CurrentUser>) -> String {
    non_empty(user_name)
        .or_else(|| non_empty(current_user.and_then(|user| user.email.as_deref())))
        .unwrap_or_default()
        .to_string()
}

/// Uppercased first character of the email, if there is one.
pub fn avatar_initial(current_user: Option<&CurrentUser>) -> Option<String> {
    let email = non_empty(current_user.and_then(|user| user.email.as_deref()))?;
    email.chars().next().map(|first| first.to_uppercase().collect())
}

pub fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "Administrator",
        UserRole::Member => "Member",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: Option<&str>) -> CurrentUser {
        CurrentUser {
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn role_parse_is_exact() {
        assert_eq!(UserRole::parse("admin"), UserRole::Admin);
        assert_eq!(UserRole::parse("Admin"), UserRole::Member);
        assert_eq!(UserRole::parse(" admin"), UserRole::Member);
        assert_eq!(UserRole::parse("editor"), UserRole::Member);
        assert_eq!(UserRole::parse(""), UserRole::Member);
    }

    #[test]
    fn avatar_initial_uppercases_the_first_email_character() {
        assert_eq!(avatar_initial(Some(&user(Some("ada@example.com")))), Some("A".to_string()));
        assert_eq!(avatar_initial(Some(&user(Some("ßeta@example.com")))), Some("SS".to_string()));
    }

    #[test]
    fn avatar_initial_degrades_without_email() {
        assert_eq!(avatar_initial(None), None);
        assert_eq!(avatar_initial(Some(&user(None))), None);
        assert_eq!(avatar_initial(Some(&user(Some("   ")))), None);
    }

    #[test]
    fn display_name_prefers_user_name_then_email() {
        let current = user(Some("ada@example.com"));
        assert_eq!(display_name(Some("Ada"), Some(&current)), "Ada");
        assert_eq!(display_name(Some("  "), Some(&current)), "ada@example.com");
        assert_eq!(display_name(None, Some(&current)), "ada@example.com");
        assert_eq!(display_name(None, Some(&user(None))), "");
        assert_eq!(display_name(None, None), "");
    }

    #[test]
    fn session_user_deserializes_with_missing_fields() {
        let session: SessionUser =
            serde_json::from_str(r#"{"role":"admin","email":"root@example.com"}"#)
                .expect("Failed to deserialize");
        assert_eq!(session.role, UserRole::Admin);
        assert_eq!(session.name, None);
        assert_eq!(session.current_user().email.as_deref(), Some("root@example.com"));

        let empty: SessionUser = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(empty.role, UserRole::Member);
        assert_eq!(avatar_initial(Some(&empty.current_user())), None);
    }

    #[test]
    fn role_serializes_as_string() {
        let json = serde_json::to_string(&UserRole::Admin).expect("Failed to serialize");
        assert_eq!(json, r#""admin""#);
    }
}
