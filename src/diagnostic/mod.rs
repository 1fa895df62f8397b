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

//! Mapped Diagnostic Context (MDC) providers.
//!
//! A diagnostic provides ambient key-value pairs that the `%context`
//! directive renders alongside every record. Providers are installed at
//! startup, typically through [bootstrap hooks](crate::bootstrap).

use std::borrow::Cow;
use std::fmt;

use crate::Error;

pub use self::static_global::StaticDiagnostic;
pub use self::thread_local::ScopeGuard;
pub use self::thread_local::ThreadLocalDiagnostic;

mod static_global;
mod thread_local;

/// A visitor that walks diagnostic key-value pairs.
pub trait Visitor {
    /// Visits one key-value pair.
    fn visit(&mut self, key: Cow<'_, str>, value: Cow<'_, str>) -> Result<(), Error>;
}

/// A provider of ambient diagnostic key-values.
pub trait Diagnostic: fmt::Debug + Send + Sync + 'static {
    /// Visits the provider's current key-value pairs.
    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), Error>;
}

impl<T: Diagnostic> From<T> for Box<dyn Diagnostic> {
    fn from(diagnostic: T) -> Self {
        Box::new(diagnostic)
    }
}
