//! User roles.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Role discriminator carried by every user profile.
///
/// Role strings from the server are matched case-insensitively. A role the
/// client does not know is kept verbatim in [`Role::Unrecognized`] instead of
/// failing the whole profile; callers decide how to treat it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Browses content without a business profile.
    Viewer,
    /// Founder account pitching a startup.
    Startup,
    /// Investor account reviewing pitches.
    Investor,
    /// Incubator or accelerator account.
    Incubator,
    /// Platform administrator.
    Admin,
    /// Any other role string, preserved as received.
    Unrecognized(String),
}

impl Role {
    /// All roles the client knows about.
    pub const KNOWN: [Role; 5] = [
        Role::Viewer,
        Role::Startup,
        Role::Investor,
        Role::Incubator,
        Role::Admin,
    ];

    /// Parses a role string, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "viewer" => Self::Viewer,
            "startup" => Self::Startup,
            "investor" => Self::Investor,
            "incubator" => Self::Incubator,
            "admin" => Self::Admin,
            _ => Self::Unrecognized(value.to_string()),
        }
    }

    /// Canonical wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Viewer => "viewer",
            Self::Startup => "startup",
            Self::Investor => "investor",
            Self::Incubator => "incubator",
            Self::Admin => "admin",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns true for one of the five known roles.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Role::parse("Startup"), Role::Startup);
        assert_eq!(Role::parse(" INVESTOR "), Role::Investor);
        assert_eq!(Role::parse("incubator"), Role::Incubator);
    }

    #[test]
    fn test_unknown_role_is_preserved() {
        let role = Role::parse("Mentor");
        assert_eq!(role, Role::Unrecognized("Mentor".to_string()));
        assert!(!role.is_known());
        assert_eq!(role.as_str(), "Mentor");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");

        let parsed: Role = serde_json::from_str("\"VIEWER\"").unwrap();
        assert_eq!(parsed, Role::Viewer);
    }

    #[test]
    fn test_known_roles_round_trip_through_names() {
        for role in Role::KNOWN {
            assert_eq!(Role::parse(role.as_str()), role);
            assert!(role.is_known());
        }
    }
}
