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

//! Filters that decide whether a log record is emitted.

pub use self::custom::CustomFilter;
pub use self::deny_all::DenyAllFilter;
pub use self::env::EnvFilter;
pub use self::level::LevelFilter;
pub use self::level::LevelRangeFilter;
pub use self::message::MessageFilter;
pub use self::target::TargetFilter;

mod custom;
mod deny_all;
mod env;
mod level;
mod message;
mod target;

#[cfg(test)]
mod tests;

use crate::record::Record;

/// The result of a filter decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    /// The record is emitted without consulting the rest of the chain.
    Accept,
    /// The record is dropped without consulting the rest of the chain.
    Deny,
    /// No decision; the next filter in the chain decides.
    Neutral,
}

/// A unit of admission policy.
///
/// Decision logic is infallible and side-effect-free with respect to the
/// chain it belongs to. A policy that cannot be constructed is a
/// configuration error surfaced when the chain is built, never a per-record
/// condition.
#[derive(Debug)]
pub enum Filter {
    /// A custom filter function.
    Custom(CustomFilter),
    /// An unconditional deny.
    DenyAll(DenyAllFilter),
    /// An env_logger-style spec filter.
    Env(EnvFilter),
    /// A level threshold filter.
    Level(LevelFilter),
    /// A level band filter.
    LevelRange(LevelRangeFilter),
    /// A message substring filter.
    Message(MessageFilter),
    /// A logger name prefix filter.
    Target(TargetFilter),
}

impl Filter {
    pub(crate) fn decide(&self, record: &Record) -> FilterResult {
        match self {
            Filter::Custom(filter) => filter.decide(record),
            Filter::DenyAll(filter) => filter.decide(record),
            Filter::Env(filter) => filter.decide(record),
            Filter::Level(filter) => filter.decide(record),
            Filter::LevelRange(filter) => filter.decide(record),
            Filter::Message(filter) => filter.decide(record),
            Filter::Target(filter) => filter.decide(record),
        }
    }
}

impl From<log::LevelFilter> for Filter {
    fn from(filter: log::LevelFilter) -> Self {
        LevelFilter::new(filter).into()
    }
}

impl<'a> From<&'a str> for Filter {
    fn from(spec: &'a str) -> Self {
        EnvFilter::from(spec).into()
    }
}

/// An ordered chain of filters with short-circuit evaluation.
///
/// A chain is built during configuration and immutable afterwards; concurrent
/// callers share it freely because evaluation only reads. Rebuilding a chain
/// is a configuration-time operation to be done while no records are in
/// flight.
#[derive(Debug, Default)]
pub struct FilterChain {
    filters: Vec<Filter>,
}

impl FilterChain {
    /// Creates an empty chain. An empty chain emits everything.
    pub fn new() -> Self {
        FilterChain { filters: vec![] }
    }

    /// Appends a filter to the end of the chain.
    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Decides whether `record` is emitted.
    ///
    /// Filters are consulted in order. [`Deny`](FilterResult::Deny) stops the
    /// walk and drops the record; [`Accept`](FilterResult::Accept) stops the
    /// walk and emits it; [`Neutral`](FilterResult::Neutral) defers to the
    /// next filter. A chain exhausted without an explicit decision emits the
    /// record.
    pub fn evaluate(&self, record: &Record) -> bool {
        for filter in &self.filters {
            match filter.decide(record) {
                FilterResult::Deny => return false,
                FilterResult::Accept => return true,
                FilterResult::Neutral => {}
            }
        }

        true
    }
}
