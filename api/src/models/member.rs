//! Membership records (`members` table).
//!
//! The client only ever reads members. Two projections cross the wire: the
//! fixed listing subset [`MemberSummary`] and the full [`MemberDetail`].
//! Dates travel as ISO-8601 strings (`YYYY-MM-DD` for calendar dates, RFC 3339
//! for timestamps) and are formatted on the client.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, NaiveDate, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;

/// Full member record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: String,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub profession: Option<String>,
    pub marital_status: Option<String>,
    pub baptized: bool,
    pub baptism_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Member {
    pub fn to_detail(&self) -> MemberDetail {
        MemberDetail {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            status: self.status.clone(),
            address: self.address.clone(),
            birth_date: self.birth_date.map(|d| d.to_string()),
            profession: self.profession.clone(),
            marital_status: self.marital_status.clone(),
            baptized: self.baptized,
            baptism_date: self.baptism_date.map(|d| d.to_string()),
            notes: self.notes.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Listing projection row: only the columns the member table view shows.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct MemberListRow {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl MemberListRow {
    pub fn to_summary(&self) -> MemberSummary {
        MemberSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            status: self.status.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Member row as shown in the listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberSummary {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// Complete member record as shown on the detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberDetail {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: String,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    pub profession: Option<String>,
    pub marital_status: Option<String>,
    pub baptized: bool,
    pub baptism_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}
