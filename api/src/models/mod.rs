//! Database models and their client-safe projections.
//!
//! Each record type follows the same split: a server-only struct deriving
//! [`sqlx::FromRow`] with the full column set, and a `*Info` / `*Summary` /
//! `*Detail` projection that is `Serialize + Deserialize + PartialEq` and can
//! cross the server/client boundary via server functions. Projections carry ids
//! as `String` and dates as ISO-8601 strings so they work in WASM without
//! pulling `uuid`/`chrono` into the client build.

mod member;
mod profile;
mod user;
mod visitor;

pub use member::{MemberDetail, MemberSummary};
pub use profile::{ProfileInfo, Role};
pub use user::UserInfo;
pub use visitor::VisitorInfo;

#[cfg(feature = "server")]
pub use member::{Member, MemberListRow};
#[cfg(feature = "server")]
pub use profile::Profile;
#[cfg(feature = "server")]
pub use user::User;
#[cfg(feature = "server")]
pub use visitor::Visitor;
