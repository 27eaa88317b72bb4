//! Handler construction.
//!
//! A job descriptor names its handler by an instance identifier. The runner asks a
//! [`Constructor`] for that instance, then asks the instance to [`JobHandler::resolve`]
//! the configured method. Resolution is the only "is this callable" check.

use crate::error::JobError;
use std::collections::BTreeMap;

/// A resolved, ready-to-call zero-argument method.
pub type JobMethod<'a> = Box<dyn FnOnce() -> Result<(), JobError> + 'a>;

pub trait JobHandler {
    /// Look up `method` on this handler. `None` means it cannot be called.
    fn resolve(&self, method: &str) -> Option<JobMethod<'_>>;
}

/// Builds handler instances from their identifiers.
pub trait Constructor {
    fn create(&self, instance: &str) -> Result<Box<dyn JobHandler>, JobError>;
}

type Factory = Box<dyn Fn(&str) -> Result<Box<dyn JobHandler>, JobError>>;

/// Constructor backed by registered factories.
///
/// Exact identifiers are checked first, then prefixes in registration order. A
/// prefix factory receives the identifier with the prefix stripped.
#[derive(Default)]
pub struct HandlerRegistry {
    exact: BTreeMap<String, Factory>,
    prefixed: Vec<(String, Factory)>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, instance: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Result<Box<dyn JobHandler>, JobError> + 'static,
    {
        self.exact
            .insert(instance.into(), Box::new(move |_: &str| factory()));
        self
    }

    pub fn register_prefix<F>(&mut self, prefix: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&str) -> Result<Box<dyn JobHandler>, JobError> + 'static,
    {
        self.prefixed.push((prefix.into(), Box::new(factory)));
        self
    }
}

impl Constructor for HandlerRegistry {
    fn create(&self, instance: &str) -> Result<Box<dyn JobHandler>, JobError> {
        if let Some(factory) = self.exact.get(instance) {
            return factory(instance);
        }
        for (prefix, factory) in &self.prefixed {
            if let Some(rest) = instance.strip_prefix(prefix.as_str()) {
                return factory(rest);
            }
        }
        Err(JobError::NotConstructible {
            instance: instance.to_string(),
            reason: "no handler registered for this identifier".into(),
        })
    }
}
