// Pattern: Observer
// A registry of listeners that fans a text message out to every one of them,
// in registration order. Dispatch works on a snapshot of the list, so handlers
// may register or unregister listeners (even on the same registry) mid-dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::config::ObserverConfig;

/// Error type a listener handler may return.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

// ============================================================================
// Listener capability
// ============================================================================

/// Anything that can receive a broadcast text message.
pub trait Listener: Send + Sync {
    fn update(&self, message: &str) -> Result<(), HandlerError>;

    /// Human-readable name used in logs and failure reports.
    fn label(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

// Closures are listeners too
impl<F> Listener for F
where
    F: Fn(&str) -> Result<(), HandlerError> + Send + Sync,
{
    fn update(&self, message: &str) -> Result<(), HandlerError> {
        self(message)
    }
}

/// Handle for one registration, issued by [`NotificationRegistry::register`].
///
/// Ids come from a process-wide counter and are never reused, so a stale id
/// cannot remove a listener registered later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

// Address of the shared allocation. Only compared against entries that still
// hold their `Arc`, so a live allocation can never alias a removed one.
fn addr_of<T: ?Sized>(listener: &Arc<T>) -> usize {
    Arc::as_ptr(listener).cast::<()>() as usize
}

// ============================================================================
// Dispatch policy and errors
// ============================================================================

/// What `notify` does when a handler returns an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPolicy {
    /// Stop at the first failing handler; later listeners are not invoked.
    #[default]
    FailFast,
    /// Invoke every listener and report all failures at the end.
    ContinueOnError,
}

#[derive(Error, Debug)]
#[error("{label} ({listener}) failed at position {position}: {cause}")]
pub struct HandlerFailure {
    pub listener: ListenerId,
    pub label: String,
    /// Index of the listener in the dispatch snapshot.
    pub position: usize,
    #[source]
    pub cause: HandlerError,
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notification aborted: {0}")]
    HandlerFailed(#[source] HandlerFailure),

    #[error("{} of {} listener(s) failed", failures.len(), delivered + failures.len())]
    PartialDelivery {
        delivered: usize,
        failures: Vec<HandlerFailure>,
    },
}

impl NotifyError {
    pub fn failures(&self) -> &[HandlerFailure] {
        match self {
            NotifyError::HandlerFailed(failure) => std::slice::from_ref(failure),
            NotifyError::PartialDelivery { failures, .. } => failures,
        }
    }
}

// ============================================================================
// Notification registry
// ============================================================================

#[derive(Clone)]
struct Entry {
    id: ListenerId,
    addr: usize,
    listener: Arc<dyn Listener>,
}

struct State {
    entries: Vec<Entry>,
    policy: DispatchPolicy,
}

/// Ordered multiset of listeners with synchronous fan-out.
///
/// The registry holds `Arc`s but never decides when a listener dies; dropping
/// the registry only drops its references.
pub struct NotificationRegistry {
    state: RwLock<State>,
}

impl NotificationRegistry {
    pub fn new() -> Self {
        Self::with_policy(DispatchPolicy::default())
    }

    pub fn with_policy(policy: DispatchPolicy) -> Self {
        Self {
            state: RwLock::new(State {
                entries: Vec::new(),
                policy,
            }),
        }
    }

    pub fn from_config(config: &ObserverConfig) -> Self {
        Self::with_policy(config.dispatch_policy)
    }

    // The list is never left half-updated, so a poisoned lock is still usable
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.read().policy
    }

    pub fn set_policy(&self, policy: DispatchPolicy) {
        self.write().policy = policy;
    }

    /// Appends `listener` and returns the id of this registration.
    ///
    /// Registering the same `Arc` twice is allowed: it gets two ids and two
    /// invocations per `notify`.
    pub fn register(&self, listener: Arc<dyn Listener>) -> ListenerId {
        let id = ListenerId::next();
        let addr = addr_of(&listener);
        let mut state = self.write();
        state.entries.push(Entry { id, addr, listener });
        debug!(listener = %id, total = state.entries.len(), "listener registered");
        id
    }

    /// Removes every entry holding `listener` and returns how many were
    /// removed. Unknown listeners are a no-op.
    pub fn unregister<T: ?Sized>(&self, listener: &Arc<T>) -> usize {
        let addr = addr_of(listener);
        let mut state = self.write();
        let before = state.entries.len();
        state.entries.retain(|entry| entry.addr != addr);
        let removed = before - state.entries.len();
        debug!(removed, "listener unregistered");
        removed
    }

    /// Removes the single registration `id`. Returns `false` if it is no
    /// longer registered.
    pub fn unregister_id(&self, id: ListenerId) -> bool {
        let mut state = self.write();
        match state.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                state.entries.remove(index);
                debug!(listener = %id, "registration removed");
                true
            }
            None => false,
        }
    }

    pub fn contains<T: ?Sized>(&self, listener: &Arc<T>) -> bool {
        let addr = addr_of(listener);
        self.read().entries.iter().any(|entry| entry.addr == addr)
    }

    pub fn contains_id(&self, id: ListenerId) -> bool {
        self.read().entries.iter().any(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    pub fn clear(&self) {
        self.write().entries.clear();
    }

    /// Invokes every registered listener with `message`, in registration order.
    ///
    /// The list is copied before dispatch and no lock is held while handlers
    /// run. Returns the number of successful invocations.
    pub fn notify(&self, message: &str) -> Result<usize, NotifyError> {
        let (snapshot, policy) = {
            let state = self.read();
            (state.entries.clone(), state.policy)
        };

        let mut delivered = 0;
        let mut failures = Vec::new();

        for (position, entry) in snapshot.iter().enumerate() {
            trace!(listener = %entry.id, position, "dispatching");
            match entry.listener.update(message) {
                Ok(()) => delivered += 1,
                Err(cause) => {
                    let failure = HandlerFailure {
                        listener: entry.id,
                        label: entry.listener.label(),
                        position,
                        cause,
                    };
                    warn!(
                        listener = %failure.listener,
                        label = %failure.label,
                        position,
                        error = %failure.cause,
                        "listener handler failed"
                    );
                    match policy {
                        DispatchPolicy::FailFast => {
                            return Err(NotifyError::HandlerFailed(failure))
                        }
                        DispatchPolicy::ContinueOnError => failures.push(failure),
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(delivered)
        } else {
            Err(NotifyError::PartialDelivery {
                delivered,
                failures,
            })
        }
    }
}

impl Default for NotificationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NotificationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("NotificationRegistry")
            .field("listeners", &state.entries.len())
            .field("policy", &state.policy)
            .finish()
    }
}

// ============================================================================
// Concrete listener: a user with an inbox
// ============================================================================

#[derive(Debug)]
pub struct User {
    name: String,
    inbox: Mutex<Vec<String>>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inbox: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inbox(&self) -> Vec<String> {
        self.inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Listener for User {
    fn update(&self, message: &str) -> Result<(), HandlerError> {
        let line = format!("{} recebeu a notificação: {}", self.name, message);
        println!("{}", line);
        self.inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
        Ok(())
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

// ============================================================================
// Without the pattern: the sender addresses every user by hand
// ============================================================================

#[derive(Debug, Default)]
pub struct DirectNotifier;

impl DirectNotifier {
    pub fn send_notification(&self, user: &str, message: &str) -> String {
        let line = format!("Enviando notificação para {}: {}", user, message);
        println!("{}", line);
        line
    }
}

// ============================================================================
// Tests
// ============================================================================
