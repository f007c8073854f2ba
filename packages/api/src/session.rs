//! # Auth session store
//!
//! [`Session`] owns the signed-in identity and the bearer credential for the
//! lifetime of the tab. It is created once at startup and handed down the
//! component tree (and into [`crate::ApiClient`]); nothing else holds auth
//! state.
//!
//! ## Mutations
//!
//! | Operation | Who calls it | Effect |
//! |-----------|--------------|--------|
//! | [`login`](Session::login) | auth pages after a successful sign-in | sets user + credential, persists the credential |
//! | [`logout`](Session::logout) | logout button | clears both, removes the persisted slot |
//! | [`expire`](Session::expire) | [`crate::ApiClient`] on 401/403 | like logout, then emits [`SessionEvent::LoginRequired`] |
//!
//! Each mutation updates the in-memory snapshot and the persisted slot under
//! the same lock, so observers never see the two disagree.
//!
//! ## Observers
//!
//! [`subscribe`](Session::subscribe) hands out a `watch` receiver that always
//! holds the latest [`AuthSnapshot`]. [`navigation`](Session::navigation)
//! hands out a `broadcast` receiver for [`SessionEvent`]s; the top-level
//! router listens there and performs the redirect.

use std::sync::Arc;

use store::{SlotStore, User, CREDENTIAL_SLOT};
use tokio::sync::{broadcast, watch};

use crate::auth::claims;

/// Point-in-time view of the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub credential: Option<String>,
}

impl AuthSnapshot {
    /// A credential is the only signal of being signed in.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The credential was rejected by the server; show the login screen.
    LoginRequired,
}

#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

struct Inner {
    slots: Box<dyn SlotStore>,
    state: watch::Sender<AuthSnapshot>,
    events: broadcast::Sender<SessionEvent>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("Session")
            .field("user", &snapshot.user)
            .field("authenticated", &snapshot.is_authenticated())
            .finish()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Session {
    /// An empty session that persists into `slots`. Does not read the slot.
    pub fn new(slots: impl SlotStore) -> Self {
        Self::with_snapshot(Box::new(slots), AuthSnapshot::default())
    }

    /// Rebuild the session from whatever a previous page load persisted.
    ///
    /// - JWT credentials have their claims decoded into a [`User`].
    /// - A JWT whose `exp` is at or before `now` (unix seconds) is dropped
    ///   and the slot cleared.
    /// - Opaque credentials are kept with an unknown user.
    pub fn restore(slots: impl SlotStore, now: i64) -> Self {
        let credential = slots.get(CREDENTIAL_SLOT).filter(|c| !c.is_empty());

        let snapshot = match credential {
            None => AuthSnapshot::default(),
            Some(token) => match claims::decode(&token) {
                Some(claims) if claims.is_expired(now) => {
                    tracing::info!("Persisted credential has expired, discarding");
                    slots.remove(CREDENTIAL_SLOT);
                    AuthSnapshot::default()
                }
                Some(claims) => AuthSnapshot {
                    user: claims.into_user(),
                    credential: Some(token),
                },
                None => AuthSnapshot {
                    user: None,
                    credential: Some(token),
                },
            },
        };

        Self::with_snapshot(Box::new(slots), snapshot)
    }

    fn with_snapshot(slots: Box<dyn SlotStore>, snapshot: AuthSnapshot) -> Self {
        let (state, _) = watch::channel(snapshot);
        let (events, _) = broadcast::channel(16);
        Self {
            inner: Arc::new(Inner {
                slots,
                state,
                events,
            }),
        }
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn credential(&self) -> Option<String> {
        self.inner.state.borrow().credential.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.inner.state.subscribe()
    }

    pub fn navigation(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Sign in. Last write wins if two logins race.
    pub fn login(&self, user: User, credential: String) {
        tracing::info!(user_id = %user.id, "Signed in");
        let slots = &self.inner.slots;
        self.inner.state.send_modify(|state| {
            slots.set(CREDENTIAL_SLOT, &credential);
            state.user = Some(user);
            state.credential = Some(credential);
        });
    }

    pub fn logout(&self) {
        let slots = &self.inner.slots;
        let was_signed_in = self.inner.state.send_if_modified(|state| {
            slots.remove(CREDENTIAL_SLOT);
            let changed = state.credential.is_some() || state.user.is_some();
            *state = AuthSnapshot::default();
            changed
        });
        if was_signed_in {
            tracing::info!("Signed out");
        }
    }

    /// Reset after the server rejected `sent`, the credential attached to the
    /// failed request.
    ///
    /// Only acts if `sent` is still the active credential, so a burst of
    /// failing requests resets the session and emits
    /// [`SessionEvent::LoginRequired`] once, and a late failure from before a
    /// fresh login leaves that login alone. Returns whether it acted.
    pub fn expire(&self, sent: Option<&str>) -> bool {
        let Some(sent) = sent else {
            return false;
        };

        let slots = &self.inner.slots;
        let expired = self.inner.state.send_if_modified(|state| {
            if state.credential.as_deref() != Some(sent) {
                return false;
            }
            slots.remove(CREDENTIAL_SLOT);
            *state = AuthSnapshot::default();
            true
        });

        if expired {
            tracing::warn!("Credential rejected by server, session cleared");
            // No receivers just means nobody is routing yet.
            let _ = self.inner.events.send(SessionEvent::LoginRequired);
        }
        expired
    }
}
