//! Membership-office profiles, 1:1 with user accounts.
//!
//! A profile carries the display name and the role used by the shell header.
//! It is resolved lazily after a session is established; a missing or
//! unresolvable profile never invalidates the session itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Office a profile holds in the church administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Pastor,
    Secretary,
    Leader,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Pastor => "pastor",
            Role::Secretary => "secretary",
            Role::Leader => "leader",
            Role::Member => "member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "pastor" => Ok(Role::Pastor),
            "secretary" => Ok(Role::Secretary),
            "leader" => Ok(Role::Leader),
            "member" => Ok(Role::Member),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Full profile record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Profile {
    /// Convert to ProfileInfo for client consumption. An unknown role value in
    /// the database is logged and demoted to the least-privileged one.
    pub fn to_info(&self) -> ProfileInfo {
        let role = self.role.parse().unwrap_or_else(|e| {
            tracing::warn!("profile {}: {e}", self.id);
            Role::Member
        });
        ProfileInfo {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            role,
            full_name: self.full_name.clone(),
        }
    }
}

/// Profile information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileInfo {
    pub id: String,
    pub user_id: String,
    pub role: Role,
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_strings() {
        for role in [
            Role::Admin,
            Role::Pastor,
            Role::Secretary,
            Role::Leader,
            Role::Member,
        ] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn unknown_role_strings_are_rejected() {
        assert!("deacon".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }
}
