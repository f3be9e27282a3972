//! This crate contains all shared UI for the workspace: the authentication
//! context, the list-query controller, and the navigation/pagination
//! components used by the web views.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    use_auth, use_session, AuthProvider, AuthState, Session, SessionEvent, SessionEvents,
    Subscription, PROFILE_TIMEOUT,
};

mod paged;
pub use paged::{use_paged_query, PagedQuery, StaleGuard};

mod pagination;
pub use pagination::Pagination;

mod sidebar;
pub use sidebar::{NavSection, Sidebar};

pub mod format;
