//! Authentication context and session manager.
//!
//! [`AuthProvider`] owns the process-wide authentication state: the current
//! user, the lazily resolved profile, and the initial loading flag. It restores
//! the session on mount, subscribes to session-change events for its lifetime,
//! and exposes the state read-only through [`use_auth`]. All mutation flows
//! through the sign-in/sign-out operations on [`Session`].
//!
//! Profile resolution is raced against a fixed timer so a stalled lookup can
//! never wedge the sign-in flow: if the timer wins, the user stays signed in
//! with no profile.

use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::pin::pin;
use std::rc::{Rc, Weak};
use std::time::Duration;

use api::{ProfileInfo, UserInfo};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use futures::future::{select, Either};

/// How long a profile lookup may run before it is treated as failed.
pub const PROFILE_TIMEOUT: Duration = Duration::from_secs(10);

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub profile: Option<ProfileInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            profile: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Terminal unauthenticated state.
    pub fn signed_out() -> Self {
        Self {
            user: None,
            profile: None,
            loading: false,
        }
    }

    /// A session exists; the profile is still pending resolution.
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            profile: None,
            loading: false,
        }
    }
}

/// Session-change notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A session was established (sign-in or registration).
    SignedIn(UserInfo),
    /// The session ended. Consumers must treat this as a terminal reset.
    SignedOut,
}

type Listener = Rc<dyn Fn(&SessionEvent)>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Session-change notification bus. Clones share the same listener table.
#[derive(Clone, Default)]
pub struct SessionEvents {
    inner: Rc<RefCell<ListenerTable>>,
}

impl SessionEvents {
    /// Register a listener. The returned handle unsubscribes it when dropped.
    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) -> Subscription {
        let mut table = self.inner.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            table: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver an event to every current listener. The table is snapshotted
    /// first so a listener may subscribe or unsubscribe while handling.
    pub fn emit(&self, event: SessionEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(&event);
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Disposable subscription handle. Dropping it removes the listener exactly
/// once; the handle cannot be cloned, so a double removal is unrepresentable.
pub struct Subscription {
    id: u64,
    table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
    /// Explicit teardown; equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Race a profile lookup against a timer. The timer winning counts as a
/// failed resolution; either failure mode degrades to `None` and is logged.
async fn resolve_with_timeout<F, E>(lookup: F, timeout: Duration) -> Option<ProfileInfo>
where
    F: Future<Output = Result<Option<ProfileInfo>, E>>,
    E: Display,
{
    let timer = sleep(timeout);
    match select(pin!(lookup), pin!(timer)).await {
        Either::Left((Ok(profile), _)) => profile,
        Either::Left((Err(e), _)) => {
            tracing::warn!("profile lookup failed: {e}");
            None
        }
        Either::Right(_) => {
            tracing::warn!("profile lookup timed out after {timeout:?}");
            None
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Wipe all client-persisted state.
fn clear_local_storage() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.clear();
            }
        }
    }
}

/// Hard navigation to the root route.
fn redirect_to_root() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    }
}

/// Sign-in/sign-out operations bound to the provider's event bus.
#[derive(Clone)]
pub struct Session {
    events: SessionEvents,
}

impl Session {
    /// Delegate credential verification to the server. On rejection the
    /// server's message is returned verbatim for inline display; on success
    /// the new session propagates through the session-change event.
    pub async fn sign_in(&self, email: String, password: String) -> Result<(), String> {
        match api::login_password(email, password).await {
            Ok(user) => {
                self.events.emit(SessionEvent::SignedIn(user));
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        }
    }

    /// Create an account and sign in with it.
    pub async fn register(
        &self,
        email: String,
        password: String,
        full_name: String,
    ) -> Result<(), String> {
        match api::register(email, password, full_name).await {
            Ok(user) => {
                self.events.emit(SessionEvent::SignedIn(user));
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        }
    }

    /// Global-scope sign-out. Local state is wiped before the remote call,
    /// and the signed-out reset (including the redirect to `/`) runs even
    /// when the remote call fails.
    pub async fn sign_out(&self) {
        clear_local_storage();
        if let Err(e) = api::logout().await {
            tracing::warn!("remote sign-out failed: {e}");
        }
        self.events.emit(SessionEvent::SignedOut);
    }
}

/// Get the current authentication state. Read-only; mutation goes through
/// [`Session`].
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the sign-in/sign-out operations.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    let events = use_hook(SessionEvents::default);

    use_context_provider(|| auth_state);
    use_context_provider({
        let events = events.clone();
        move || Session {
            events: events.clone(),
        }
    });

    // Restore the current session on mount.
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(user)) => {
                auth_state.set(AuthState::signed_in(user));
                let profile = resolve_with_timeout(api::get_profile(), PROFILE_TIMEOUT).await;
                auth_state.with_mut(|state| {
                    if state.user.is_some() {
                        state.profile = profile;
                    }
                });
            }
            Ok(None) => auth_state.set(AuthState::signed_out()),
            Err(e) => {
                tracing::warn!("session restore failed: {e}");
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    // Session-change subscription, held until the provider is torn down.
    let subscription = use_hook(|| {
        Rc::new(RefCell::new(Some(events.subscribe(
            move |event| {
                let mut auth_state = auth_state;
                match event {
                SessionEvent::SignedOut => {
                    auth_state.set(AuthState::signed_out());
                    clear_local_storage();
                    redirect_to_root();
                }
                SessionEvent::SignedIn(user) => {
                    auth_state.set(AuthState::signed_in(user.clone()));
                    // Detached from the emitting component's scope: the sign-in
                    // view unmounts as soon as the user is set, and the profile
                    // resolution must survive that.
                    spawn_forever(async move {
                        let profile =
                            resolve_with_timeout(api::get_profile(), PROFILE_TIMEOUT).await;
                        auth_state.with_mut(|state| {
                            // A sign-out may have landed while the lookup ran.
                            if state.user.is_some() {
                                state.profile = profile;
                            }
                        });
                    });
                }
            }
            },
        ))))
    });
    use_drop(move || {
        subscription.borrow_mut().take();
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;
    use std::cell::Cell;

    fn profile() -> ProfileInfo {
        ProfileInfo {
            id: "p-1".into(),
            user_id: "u-1".into(),
            role: Role::Secretary,
            full_name: "Maria da Silva".into(),
        }
    }

    fn user() -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            email: "maria@example.com".into(),
        }
    }

    #[test]
    fn initial_state_is_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
        assert!(state.profile.is_none());
    }

    #[test]
    fn signed_in_state_has_pending_profile() {
        let state = AuthState::signed_in(user());
        assert!(!state.loading);
        assert_eq!(state.user, Some(user()));
        assert!(state.profile.is_none());
    }

    #[test]
    fn signed_out_clears_everything() {
        let state = AuthState::signed_out();
        assert_eq!(state, AuthState { user: None, profile: None, loading: false });
    }

    #[test]
    fn subscription_receives_events_until_dropped() {
        let events = SessionEvents::default();
        let seen = Rc::new(Cell::new(0));

        let sub = events.subscribe({
            let seen = seen.clone();
            move |_| seen.set(seen.get() + 1)
        });
        assert_eq!(events.listener_count(), 1);

        events.emit(SessionEvent::SignedOut);
        assert_eq!(seen.get(), 1);

        sub.unsubscribe();
        assert_eq!(events.listener_count(), 0);

        events.emit(SessionEvent::SignedOut);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn listeners_may_unsubscribe_while_an_event_is_delivered() {
        let events = SessionEvents::default();
        let other = events.subscribe(|_| {});
        drop(other);
        // Emitting with an empty table after a drop must not panic.
        events.emit(SessionEvent::SignedIn(user()));
    }

    #[tokio::test]
    async fn profile_lookup_that_never_resolves_times_out_to_none() {
        let lookup = std::future::pending::<Result<Option<ProfileInfo>, String>>();
        let resolved = resolve_with_timeout(lookup, Duration::from_millis(50)).await;
        assert_eq!(resolved, None);
    }

    #[tokio::test]
    async fn prompt_profile_lookup_wins_the_race() {
        let lookup = async { Ok::<_, String>(Some(profile())) };
        let resolved = resolve_with_timeout(lookup, Duration::from_secs(10)).await;
        assert_eq!(resolved, Some(profile()));
    }

    #[tokio::test]
    async fn failed_profile_lookup_degrades_to_none() {
        let lookup = async { Err::<Option<ProfileInfo>, _>("boom".to_string()) };
        let resolved = resolve_with_timeout(lookup, Duration::from_secs(10)).await;
        assert_eq!(resolved, None);
    }
}
