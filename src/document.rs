// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! Document container classes that decoded BSON documents are materialized
//! into.

use crate::{CodecResult, error::Details};
use log::debug;
use serde_json::Value;
use std::{fmt, sync::Arc};

/// The capability set a decoded-document container must provide: an ordered,
/// mutable, key-unique associative container.
///
/// Implementations must preserve insertion order, keep keys unique (setting
/// an existing key overwrites its value in place), and support removal and
/// iteration. [`serde_json::Map`] and [`indexmap::IndexMap`] conform out of
/// the box; a custom container type can be registered with
/// [`DocumentClass::new`]. Conformance is verified at
/// [`CodecOptions`](crate::CodecOptions) construction time, never during
/// decoding.
pub trait MutableMapping {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Inserts `value` under `key`, overwriting in place if the key is
    /// already present.
    fn set(&mut self, key: &str, value: Value);

    /// Removes the entry under `key`, returning its value.
    fn delete(&mut self, key: &str) -> Option<Value>;

    /// Iterates over the entries in insertion order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_>;

    /// The number of entries in the container.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MutableMapping for serde_json::Map<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) -> Option<Value> {
        self.shift_remove(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_> {
        Box::new(self.iter().map(|(key, value)| (key.as_str(), value)))
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl MutableMapping for indexmap::IndexMap<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) -> Option<Value> {
        self.shift_remove(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_> {
        Box::new(self.iter().map(|(key, value)| (key.as_str(), value)))
    }

    fn len(&self) -> usize {
        self.len()
    }
}

type Factory = Arc<dyn Fn() -> Box<dyn MutableMapping> + Send + Sync>;

/// A named factory for the container type decoded documents are materialized
/// into.
///
/// Two classes compare equal when they name the same container type. The
/// canonical default is [`DocumentClass::document`].
#[derive(Clone)]
pub struct DocumentClass {
    name: &'static str,
    factory: Factory,
}

impl DocumentClass {
    /// Registers a container type under `name`.
    ///
    /// The name identifies the container type for equality and error
    /// messages; register each type under a distinct name.
    pub fn new<M>(name: &'static str) -> Self
    where
        M: MutableMapping + Default + 'static,
    {
        Self {
            name,
            factory: Arc::new(|| Box::new(M::default()) as Box<dyn MutableMapping>),
        }
    }

    /// The canonical ordered map class, backed by [`serde_json::Map`].
    pub fn document() -> Self {
        Self::new::<serde_json::Map<String, Value>>("document")
    }

    /// A class backed by [`indexmap::IndexMap`].
    pub fn index_map() -> Self {
        Self::new::<indexmap::IndexMap<String, Value>>("index_map")
    }

    /// The name the container type was registered under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Creates a fresh, empty container of this class.
    pub fn instantiate(&self) -> Box<dyn MutableMapping> {
        (self.factory)()
    }

    /// Verifies that containers of this class honor the mutable-mapping
    /// contract.
    ///
    /// A [`MutableMapping`] impl proves that the operations exist, not that
    /// they behave: a container could still drop entries, duplicate keys,
    /// reorder entries or refuse removal. This exercises a fresh instance and
    /// reports the first violated clause.
    pub(crate) fn check_mapping_contract(&self) -> CodecResult<()> {
        let mut probe = self.instantiate();
        if !probe.is_empty() {
            return Err(self.violation("fresh containers are not empty"));
        }
        // "b" before "a" so that key-sorted iteration differs from
        // insertion order.
        probe.set("b", Value::from(1));
        probe.set("a", Value::from(2));
        if probe.len() != 2 || probe.get("b") != Some(&Value::from(1)) {
            return Err(self.violation("inserted entries are not retained"));
        }
        probe.set("b", Value::from(3));
        if probe.len() != 2 {
            return Err(self.violation("keys are not kept unique"));
        }
        if probe.get("b") != Some(&Value::from(3)) {
            return Err(self.violation("setting an existing key does not overwrite its value"));
        }
        let keys: Vec<&str> = probe.entries().map(|(key, _)| key).collect();
        if keys != ["b", "a"] {
            return Err(self.violation("iteration does not preserve insertion order"));
        }
        if probe.delete("a") != Some(Value::from(2)) || probe.len() != 1 {
            return Err(self.violation("entries cannot be removed"));
        }
        Ok(())
    }

    fn violation(&self, violation: &'static str) -> crate::Error {
        debug!("rejecting document_class `{}`: {violation}", self.name);
        Details::DocumentClassContract {
            class: self.name.to_string(),
            violation,
        }
        .into()
    }
}

impl Default for DocumentClass {
    fn default() -> Self {
        Self::document()
    }
}

impl PartialEq for DocumentClass {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for DocumentClass {}

impl fmt::Debug for DocumentClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DocumentClass")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
