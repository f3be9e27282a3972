//! Authentication support: password hashing, session keys, error taxonomy.

#[cfg(feature = "server")]
mod password;
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
pub use session::{SESSION_AUTH_GENERATION_KEY, SESSION_USER_ID_KEY};

/// Authentication failures surfaced to the client. Messages are user-facing
/// (shown verbatim in the sign-in form) and deliberately do not distinguish an
/// unknown email from a wrong password.
#[cfg(feature = "server")]
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email ou senha inválidos")]
    InvalidCredentials,
    #[error("Não autenticado")]
    NotAuthenticated,
    #[error("Já existe uma conta com este email")]
    EmailTaken,
}
