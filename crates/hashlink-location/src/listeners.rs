//! Named callbacks fired when the hash changes.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

/// A hash-change callback.
pub type HashListener = Box<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

/// A listener that returned an error or panicked during dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerFailure {
    pub name: String,
    pub message: String,
}

/// Outcome of one [`HashListeners::dispatch_all`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Number of listeners invoked, failed ones included.
    pub invoked: usize,
    /// Listeners that failed, in dispatch order.
    pub failures: Vec<ListenerFailure>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Registry of hash-change listeners, keyed by name.
///
/// Listeners run in registration order. Registering a name again replaces
/// its callback but keeps its place in that order.
#[derive(Default)]
pub struct HashListeners {
    listeners: Vec<(String, HashListener)>,
}

impl HashListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` under `name`. Returns `true` if an earlier
    /// callback with the same name was replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F) -> bool
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let name = name.into();
        let callback: HashListener = Box::new(callback);
        match self.listeners.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => {
                *slot = callback;
                true
            }
            None => {
                self.listeners.push((name, callback));
                false
            }
        }
    }

    /// Remove the listener registered under `name`. Returns `false` if there
    /// was none.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(n, _)| n != name);
        self.listeners.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.listeners.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.listeners.iter().map(|(n, _)| n.as_str())
    }

    /// Invoke every listener.
    ///
    /// A listener that errors or panics is logged and recorded in the report;
    /// the remaining listeners still run.
    pub fn dispatch_all(&self) -> DispatchReport {
        let mut report = DispatchReport::default();
        for (name, callback) in &self.listeners {
            report.invoked += 1;
            let message = match panic::catch_unwind(AssertUnwindSafe(|| callback())) {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e.to_string(),
                Err(payload) => panic_message(&*payload),
            };
            warn!(listener = %name, error = %message, "hash listener failed");
            report.failures.push(ListenerFailure {
                name: name.clone(),
                message,
            });
        }
        debug!(
            invoked = report.invoked,
            failed = report.failures.len(),
            "hash listeners dispatched"
        );
        report
    }
}

impl fmt::Debug for HashListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}
