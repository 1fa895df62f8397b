// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;

use crate::Error;
use crate::diagnostic::Diagnostic;
use crate::diagnostic::Visitor;

/// A diagnostic that owns a fixed set of key-value pairs.
///
/// Populated once during configuration; every rendered record sees the same
/// pairs.
///
/// ## Example
///
/// ```rust
/// use logward::diagnostic::StaticDiagnostic;
///
/// let diagnostic = StaticDiagnostic::default()
///     .with("service", "billing")
///     .with("region", "eu-central");
/// ```
#[derive(Default, Debug, Clone)]
#[non_exhaustive]
pub struct StaticDiagnostic {
    kvs: BTreeMap<String, String>,
}

impl StaticDiagnostic {
    /// Adds a key-value pair, replacing an existing value for the key.
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(key, value);
        self
    }

    /// Inserts a key-value pair.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.kvs.insert(key.into(), value.into());
    }

    /// Removes a key-value pair.
    pub fn remove(&mut self, key: &str) {
        self.kvs.remove(key);
    }
}

impl Diagnostic for StaticDiagnostic {
    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), Error> {
        for (key, value) in self.kvs.iter() {
            visitor.visit(key.as_str().into(), value.as_str().into())?;
        }
        Ok(())
    }
}
