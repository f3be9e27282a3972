//! Session record keys.
//!
//! A session stores the account id plus the `auth_generation` the account had
//! when the session was minted. `get_current_user` compares the stored
//! generation against the account's current one, so a global sign-out (which
//! bumps the counter) retires every outstanding session at once without having
//! to enumerate them in the session store.

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Key for storing the auth generation the session was minted under.
pub const SESSION_AUTH_GENERATION_KEY: &str = "auth_generation";
