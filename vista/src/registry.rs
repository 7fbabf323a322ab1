// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named viewport instances and request routing.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::command::{CommandError, Execute, Request};

/// A [`Request`] could not be carried out.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchError {
    /// The request's source tag is not accepted.
    ForeignSource(String),
    /// No instance is registered under the requested name.
    UnknownInstance(String),
    /// The instance rejected the command.
    Command(CommandError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignSource(source) => write!(f, "request source {source:?} is not accepted"),
            Self::UnknownInstance(name) => write!(f, "no viewport named {name:?}"),
            Self::Command(err) => write!(f, "command rejected: {err}"),
        }
    }
}

impl core::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Command(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CommandError> for DispatchError {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}

/// Named instances, registered and unregistered explicitly.
#[derive(Debug)]
pub struct Registry<T> {
    instances: HashMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Registers `instance` under `name`, returning the instance it replaced.
    pub fn register(&mut self, name: impl Into<String>, instance: T) -> Option<T> {
        let name = name.into();
        match self.instances.entry(name) {
            Entry::Occupied(mut slot) => {
                log::warn!("replacing viewport registered as {:?}", slot.key());
                Some(core::mem::replace(slot.get_mut(), instance))
            }
            Entry::Vacant(slot) => {
                log::debug!("registered viewport {:?}", slot.key());
                slot.insert(instance);
                None
            }
        }
    }

    /// Removes and returns the instance registered under `name`.
    pub fn unregister(&mut self, name: &str) -> Option<T> {
        let removed = self.instances.remove(name);
        if removed.is_some() {
            log::debug!("unregistered viewport {name:?}");
        }
        removed
    }

    /// Instance registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.instances.get(name)
    }

    /// Mutable instance registered under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.instances.get_mut(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.instances.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl<T: Execute> Registry<T> {
    /// Routes `request` to the instance it names.
    ///
    /// Returns whether the instance changed.
    pub fn dispatch(&mut self, request: &Request) -> Result<bool, DispatchError> {
        if !request.has_accepted_source() {
            log::warn!("dropping request from {:?}", request.source);
            return Err(DispatchError::ForeignSource(request.source.clone()));
        }
        let Some(instance) = self.instances.get_mut(request.canvas_name.as_str()) else {
            log::warn!(
                "dropping {:?} for unknown viewport {:?}",
                request.command,
                request.canvas_name
            );
            return Err(DispatchError::UnknownInstance(request.canvas_name.clone()));
        };
        instance.execute(request.command).map_err(|err| {
            log::warn!("{:?} rejected: {err}", request.command);
            DispatchError::from(err)
        })
    }
}
