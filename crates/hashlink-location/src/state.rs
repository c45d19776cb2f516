//! The [`HashState`] facade: channel operations bound to one location.
//!
//! A viewer creates a single `HashState` at startup around its live address
//! bar, registers its hash listeners on it, and drops it on teardown. Writes
//! that change the hash fire the listeners once, after the write.

use hashlink_codec::ParamMapping;
use tracing::debug;

use crate::config::HashStateConfig;
use crate::error::LocationResult;
use crate::listeners::{DispatchReport, HashListeners};
use crate::params::{get_hash_params, has_hash_params, merge, remove, replace};
use crate::traits::Location;

/// Shareable viewer state held in one location's hash.
#[derive(Debug)]
pub struct HashState<L: Location> {
    location: L,
    listeners: HashListeners,
    config: HashStateConfig,
}

impl<L: Location> HashState<L> {
    /// Bind to `location` with the default configuration.
    pub fn new(location: L) -> Self {
        Self::with_config(location, HashStateConfig::default())
    }

    pub fn with_config(location: L, config: HashStateConfig) -> Self {
        Self {
            location,
            listeners: HashListeners::new(),
            config,
        }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn config(&self) -> &HashStateConfig {
        &self.config
    }

    pub fn listeners(&self) -> &HashListeners {
        &self.listeners
    }

    /// Release the location. Registered listeners are dropped.
    pub fn into_location(self) -> L {
        self.location
    }

    // ---- Channel operations ----

    pub fn get_params(&self, name: &str) -> LocationResult<Option<String>> {
        get_hash_params(&self.location, name)
    }

    pub fn has_params(&self, name: &str) -> LocationResult<bool> {
        has_hash_params(&self.location, name)
    }

    /// Merge `params` into channel `name` using the configured encoding.
    pub fn add_params(&self, name: &str, params: &ParamMapping) -> LocationResult<()> {
        self.add_params_with(name, params, self.config.include_names)
    }

    pub fn add_params_with(
        &self,
        name: &str,
        params: &ParamMapping,
        include_names: bool,
    ) -> LocationResult<()> {
        let reset = self.config.reset_on_empty;
        let changed = merge(&self.location, name, params, include_names, reset)?;
        self.after_write(name, changed);
        Ok(())
    }

    /// Replace channel `name` with `params` using the configured encoding.
    pub fn set_params(&self, name: &str, params: &ParamMapping) -> LocationResult<()> {
        self.set_params_with(name, params, self.config.include_names)
    }

    pub fn set_params_with(
        &self,
        name: &str,
        params: &ParamMapping,
        include_names: bool,
    ) -> LocationResult<()> {
        let reset = self.config.reset_on_empty;
        let changed = replace(&self.location, name, params, include_names, reset)?;
        self.after_write(name, changed);
        Ok(())
    }

    /// Remove `keys` from channel `name`, or the whole channel when `keys`
    /// is empty.
    pub fn remove_params<S: AsRef<str>>(&self, name: &str, keys: &[S]) -> LocationResult<()> {
        let changed = remove(&self.location, name, keys, self.config.reset_on_empty)?;
        self.after_write(name, changed);
        Ok(())
    }

    // ---- Listeners ----

    /// Register a hash-change listener under `name`, replacing any listener
    /// already registered under it.
    pub fn register_hash_listener<F>(&mut self, name: impl Into<String>, callback: F) -> bool
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.listeners.register(name, callback)
    }

    pub fn unregister_hash_listener(&mut self, name: &str) -> bool {
        self.listeners.unregister(name)
    }

    /// Report a hash change made outside this facade, such as the user
    /// editing the address bar or navigating back.
    pub fn notify_hash_change(&self) -> DispatchReport {
        self.listeners.dispatch_all()
    }

    fn after_write(&self, name: &str, changed: bool) {
        if !changed {
            debug!(channel = name, "hash unchanged");
            return;
        }
        if self.config.dispatch_on_change {
            self.listeners.dispatch_all();
        }
    }
}
