//! # API crate: shared fullstack server functions for Semeando Família
//!
//! This crate is the data boundary of the membership-administration app. It
//! defines every Dioxus server function the web frontend calls, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | none | Password hashing (Argon2id), session keys, auth error taxonomy |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | none | Database rows (`User`, `Profile`, `Member`, `Visitor`) and their client-safe projections |
//! | [`query`] | none | Page math and `ILIKE` search patterns shared with the UI |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin client
//! stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `get_profile`, `login_password`,
//!   `register`, `logout`
//! - **Listings**: `list_members`, `list_visitors`: fixed 10-row pages ordered
//!   by name, exact counts, optional case-insensitive name search
//! - **Details**: `get_member`, `get_visitor`: `Ok(None)` for zero rows,
//!   `Err` for a failed query
//! - **Dashboard**: `get_totals`

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod auth;
pub mod db;
pub mod models;
pub mod query;

pub use models::{MemberDetail, MemberSummary, ProfileInfo, Role, UserInfo, VisitorInfo};
pub use query::{Page, PAGE_SIZE};

/// Record totals shown on the home dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DashboardTotals {
    pub members: i64,
    pub visitors: i64,
}

/// Resolve the session to a live user row, rejecting sessions minted under an
/// older auth generation (retired by a global sign-out).
#[cfg(feature = "server")]
async fn session_user(
    session: &tower_sessions::Session,
    pool: &sqlx::PgPool,
) -> Result<Option<models::User>, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let generation: Option<i64> = session
        .get(auth::SESSION_AUTH_GENERATION_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (Some(user_id), Some(generation)) = (user_id, generation) else {
        return Ok(None);
    };

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Ok(None);
    };

    if user.auth_generation != generation {
        tracing::debug!(user = %user.id, "session retired by global sign-out");
        return Ok(None);
    }

    Ok(Some(user))
}

/// Require an authenticated session; used by every data-reading function.
#[cfg(feature = "server")]
async fn require_user(
    session: &tower_sessions::Session,
    pool: &sqlx::PgPool,
) -> Result<models::User, ServerFnError> {
    session_user(session, pool)
        .await?
        .ok_or_else(|| ServerFnError::new(auth::AuthError::NotAuthenticated.to_string()))
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = session_user(&session, pool).await?;
    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Get the profile associated with the current session's user, if any.
#[cfg(feature = "server")]
#[get("/api/auth/profile", session: tower_sessions::Session)]
pub async fn get_profile() -> Result<Option<ProfileInfo>, ServerFnError> {
    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = session_user(&session, pool).await? else {
        return Ok(None);
    };

    let profile: Option<models::Profile> =
        sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user.id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profile.map(|p| p.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/profile")]
pub async fn get_profile() -> Result<Option<ProfileInfo>, ServerFnError> {
    Ok(None)
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    let email = email.trim().to_lowercase();

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new(
            auth::AuthError::InvalidCredentials.to_string(),
        ));
    };

    let valid =
        auth::verify_password(&password, &user.password_hash).map_err(ServerFnError::new)?;

    if !valid {
        return Err(ServerFnError::new(
            auth::AuthError::InvalidCredentials.to_string(),
        ));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .insert(auth::SESSION_AUTH_GENERATION_KEY, user.auth_generation)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Register a new account with email and password. The matching profile is
/// created in the same transaction with the least-privileged role.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    full_name: String,
) -> Result<UserInfo, ServerFnError> {
    let email = email.trim().to_lowercase();
    let full_name = full_name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Email inválido"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "A senha deve ter pelo menos 8 caracteres",
        ));
    }
    if full_name.is_empty() {
        return Err(ServerFnError::new("Nome é obrigatório"));
    }

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1::BIGINT as n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            auth::AuthError::EmailTaken.to_string(),
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: models::User =
        sqlx::query_as("INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *")
            .bind(&email)
            .bind(&password_hash)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("INSERT INTO profiles (user_id, role, full_name) VALUES ($1, $2, $3)")
        .bind(user.id)
        .bind(Role::Member.as_str())
        .bind(&full_name)
        .execute(&mut *tx)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .insert(auth::SESSION_AUTH_GENERATION_KEY, user.auth_generation)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    full_name: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Global-scope sign-out: bump the account's auth generation (retiring every
/// outstanding session for it) and flush the current session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Some(user) = session_user(&session, pool).await? {
        sqlx::query("UPDATE users SET auth_generation = auth_generation + 1, updated_at = now() WHERE id = $1")
            .bind(user.id)
            .execute(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// One page of the member listing plus the exact total for the same search
/// term. The count and the page share the same predicate; rows are ordered by
/// name ascending and only the listing columns are selected.
#[cfg(feature = "server")]
#[get("/api/members", session: tower_sessions::Session)]
pub async fn list_members(page: u32, search: String) -> Result<Page<MemberSummary>, ServerFnError> {
    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    require_user(&session, pool).await?;

    let pattern = query::ilike_pattern(&search);

    let total: i64 = match &pattern {
        Some(p) => sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE name ILIKE $1")
            .bind(p)
            .fetch_one(pool)
            .await,
        None => {
            sqlx::query_scalar("SELECT COUNT(*) FROM members")
                .fetch_one(pool)
                .await
        }
    }
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    const COLUMNS: &str = "id, name, email, phone, status, created_at";
    let rows: Vec<models::MemberListRow> = match &pattern {
        Some(p) => {
            sqlx::query_as(&format!(
                "SELECT {COLUMNS} FROM members WHERE name ILIKE $1 ORDER BY name ASC LIMIT $2 OFFSET $3"
            ))
            .bind(p)
            .bind(i64::from(PAGE_SIZE))
            .bind(query::offset(page))
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as(&format!(
                "SELECT {COLUMNS} FROM members ORDER BY name ASC LIMIT $1 OFFSET $2"
            ))
            .bind(i64::from(PAGE_SIZE))
            .bind(query::offset(page))
            .fetch_all(pool)
            .await
        }
    }
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(Page {
        rows: rows.iter().map(|r| r.to_summary()).collect(),
        total,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/members")]
pub async fn list_members(page: u32, search: String) -> Result<Page<MemberSummary>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single member by id. `Ok(None)` means no such row; `Err` means the
/// query itself failed.
#[cfg(feature = "server")]
#[get("/api/members/:id", session: tower_sessions::Session)]
pub async fn get_member(id: i64) -> Result<Option<MemberDetail>, ServerFnError> {
    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    require_user(&session, pool).await?;

    let member: Option<models::Member> = sqlx::query_as("SELECT * FROM members WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(member.map(|m| m.to_detail()))
}

#[cfg(not(feature = "server"))]
#[get("/api/members/:id")]
pub async fn get_member(id: i64) -> Result<Option<MemberDetail>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// One page of the visitor listing plus the exact total for the same search
/// term.
#[cfg(feature = "server")]
#[get("/api/visitors", session: tower_sessions::Session)]
pub async fn list_visitors(page: u32, search: String) -> Result<Page<VisitorInfo>, ServerFnError> {
    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    require_user(&session, pool).await?;

    let pattern = query::ilike_pattern(&search);

    let total: i64 = match &pattern {
        Some(p) => sqlx::query_scalar("SELECT COUNT(*) FROM visitors WHERE name ILIKE $1")
            .bind(p)
            .fetch_one(pool)
            .await,
        None => {
            sqlx::query_scalar("SELECT COUNT(*) FROM visitors")
                .fetch_one(pool)
                .await
        }
    }
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<models::Visitor> = match &pattern {
        Some(p) => {
            sqlx::query_as(
                "SELECT * FROM visitors WHERE name ILIKE $1 ORDER BY name ASC LIMIT $2 OFFSET $3",
            )
            .bind(p)
            .bind(i64::from(PAGE_SIZE))
            .bind(query::offset(page))
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as("SELECT * FROM visitors ORDER BY name ASC LIMIT $1 OFFSET $2")
                .bind(i64::from(PAGE_SIZE))
                .bind(query::offset(page))
                .fetch_all(pool)
                .await
        }
    }
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(Page {
        rows: rows.iter().map(|v| v.to_info()).collect(),
        total,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/visitors")]
pub async fn list_visitors(page: u32, search: String) -> Result<Page<VisitorInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single visitor by id.
#[cfg(feature = "server")]
#[get("/api/visitors/:id", session: tower_sessions::Session)]
pub async fn get_visitor(id: i64) -> Result<Option<VisitorInfo>, ServerFnError> {
    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    require_user(&session, pool).await?;

    let visitor: Option<models::Visitor> = sqlx::query_as("SELECT * FROM visitors WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(visitor.map(|v| v.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/visitors/:id")]
pub async fn get_visitor(id: i64) -> Result<Option<VisitorInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Record totals for the home dashboard cards.
#[cfg(feature = "server")]
#[get("/api/totals", session: tower_sessions::Session)]
pub async fn get_totals() -> Result<DashboardTotals, ServerFnError> {
    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    require_user(&session, pool).await?;

    let members: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let visitors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visitors")
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(DashboardTotals { members, visitors })
}

#[cfg(not(feature = "server"))]
#[get("/api/totals")]
pub async fn get_totals() -> Result<DashboardTotals, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
