//! Named pseudo-properties backed by accessor functions.
//!
//! # Design
//! A host type publishes a table mapping conventional method names
//! (`getName`, `setName`, `issetName`, `unsetName`) to plain function
//! pointers over `Self`. External code reads and writes properties by name
//! through [`PropertyHost`]; the lookup derives the method name with
//! [`accessor_name`] and fails with [`MissingAccessor`] when the host did
//! not register it. Each registered function is fully typed against the
//! host, so only the name lookup is dynamic.
//!
//! The table is immutable once built and the delegator keeps no state of
//! its own. Accessors run on the caller's thread; a host is single-threaded
//! unless it documents otherwise.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{AccessMode, MissingAccessor, Result};

pub type Getter<T> = fn(&T) -> Value;
pub type Setter<T> = fn(&mut T, Value) -> Result<()>;
pub type IssetFn<T> = fn(&T) -> bool;
pub type UnsetFn<T> = fn(&mut T);

/// Method name implementing `mode` for `property`: the mode prefix followed
/// by the property name with its first ASCII letter uppercased.
pub fn accessor_name(mode: AccessMode, property: &str) -> String {
    let mut name = String::with_capacity(mode.prefix().len() + property.len());
    name.push_str(mode.prefix());
    let mut chars = property.chars();
    if let Some(first) = chars.next() {
        name.push(first.to_ascii_uppercase());
        name.push_str(chars.as_str());
    }
    name
}

/// Accessor table for a host type, one map per access mode, each keyed by
/// conventional method name.
pub struct Accessors<T> {
    getters: HashMap<String, Getter<T>>,
    setters: HashMap<String, Setter<T>>,
    issets: HashMap<String, IssetFn<T>>,
    unsets: HashMap<String, UnsetFn<T>>,
}

impl<T> Default for Accessors<T> {
    fn default() -> Self {
        Self {
            getters: HashMap::new(),
            setters: HashMap::new(),
            issets: HashMap::new(),
            unsets: HashMap::new(),
        }
    }
}

impl<T> Accessors<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn getter(mut self, property: &str, f: Getter<T>) -> Self {
        self.getters.insert(accessor_name(AccessMode::Get, property), f);
        self
    }

    pub fn setter(mut self, property: &str, f: Setter<T>) -> Self {
        self.setters.insert(accessor_name(AccessMode::Set, property), f);
        self
    }

    pub fn isset(mut self, property: &str, f: IssetFn<T>) -> Self {
        self.issets.insert(accessor_name(AccessMode::Isset, property), f);
        self
    }

    pub fn unset(mut self, property: &str, f: UnsetFn<T>) -> Self {
        self.unsets.insert(accessor_name(AccessMode::Unset, property), f);
        self
    }
}

fn resolve<F: Copy>(
    methods: &HashMap<String, F>,
    mode: AccessMode,
    property: &str,
) -> std::result::Result<F, MissingAccessor> {
    let method = accessor_name(mode, property);
    match methods.get(&method) {
        Some(f) => Ok(*f),
        None => {
            tracing::debug!(property, method = %method, "no accessor registered");
            Err(MissingAccessor {
                mode,
                property: property.to_string(),
                method,
            })
        }
    }
}

/// A type exposing pseudo-properties through an [`Accessors`] table.
///
/// Hosts implement only [`PropertyHost::accessors`], usually returning a
/// table built once inside a `OnceLock`.
pub trait PropertyHost: Sized + 'static {
    fn accessors() -> &'static Accessors<Self>;

    fn get_property(&self, property: &str) -> Result<Value> {
        let f = resolve(&Self::accessors().getters, AccessMode::Get, property)?;
        Ok(f(self))
    }

    fn set_property(&mut self, property: &str, value: Value) -> Result<()> {
        let f = resolve(&Self::accessors().setters, AccessMode::Set, property)?;
        f(self, value)
    }

    fn isset_property(&self, property: &str) -> Result<bool> {
        let f = resolve(&Self::accessors().issets, AccessMode::Isset, property)?;
        Ok(f(self))
    }

    fn unset_property(&mut self, property: &str) -> Result<()> {
        let f = resolve(&Self::accessors().unsets, AccessMode::Unset, property)?;
        f(self);
        Ok(())
    }
}
