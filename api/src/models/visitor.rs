//! Visitor records (`visitors` table). Read-only to this client.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::NaiveDate;
#[cfg(feature = "server")]
use sqlx::FromRow;

/// Full visitor record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Visitor {
    pub id: i64,
    pub name: String,
    pub visit_date: NaiveDate,
}

#[cfg(feature = "server")]
impl Visitor {
    pub fn to_info(&self) -> VisitorInfo {
        VisitorInfo {
            id: self.id,
            name: self.name.clone(),
            visit_date: self.visit_date.to_string(),
        }
    }
}

/// Visitor record safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitorInfo {
    pub id: i64,
    pub name: String,
    pub visit_date: String,
}
