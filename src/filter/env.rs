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

use std::borrow::Cow;

pub use env_filter::Builder as EnvFilterBuilder;

use crate::filter::Filter;
use crate::filter::FilterResult;
use crate::record::Record;

const DEFAULT_FILTER_ENV: &str = "RUST_LOG";

/// A filter that respects the `RUST_LOG` environment variable.
///
/// Records the spec enables pass through as neutral; everything else is
/// denied. Read [the `env_logger` documentation](https://docs.rs/env_logger/#enabling-logging)
/// for the spec syntax.
#[derive(Debug)]
pub struct EnvFilter(env_filter::Filter);

impl EnvFilter {
    /// Initializes the filter from the environment using the default variable
    /// name `RUST_LOG`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logward::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env();
    /// ```
    pub fn from_default_env() -> Self {
        EnvFilter::from_env(DEFAULT_FILTER_ENV)
    }

    /// Initializes the filter from the environment using the default variable
    /// name `RUST_LOG`. If the variable is not set, the default spec is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logward::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env_or("info");
    /// ```
    pub fn from_default_env_or<'a, V>(default: V) -> Self
    where
        V: Into<Cow<'a, str>>,
    {
        EnvFilter::from_env_or(DEFAULT_FILTER_ENV, default)
    }

    /// Initializes the filter from the environment using a specific variable
    /// name.
    ///
    /// # Examples
    ///
    /// ```
    /// use logward::filter::EnvFilter;
    /// let filter = EnvFilter::from_env("MY_LOG");
    /// ```
    pub fn from_env<'a, E>(name: E) -> Self
    where
        E: Into<Cow<'a, str>>,
    {
        let mut builder = EnvFilterBuilder::new();
        let name = name.into();
        if let Ok(spec) = std::env::var(&*name) {
            builder.parse(&spec);
        }
        EnvFilter::new(builder)
    }

    /// Initializes the filter from the environment using a specific variable
    /// name. If the variable is not set, the default spec is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logward::filter::EnvFilter;
    /// let filter = EnvFilter::from_env_or("MY_LOG", "info");
    /// ```
    pub fn from_env_or<'a, 'b, E, V>(name: E, default: V) -> Self
    where
        E: Into<Cow<'a, str>>,
        V: Into<Cow<'b, str>>,
    {
        let mut builder = EnvFilterBuilder::new();
        let name = name.into();
        match std::env::var(&*name) {
            Ok(spec) => builder.parse(&spec),
            Err(_) => builder.parse(&default.into()),
        };
        EnvFilter::new(builder)
    }

    fn new(mut builder: EnvFilterBuilder) -> Self {
        EnvFilter(builder.build())
    }

    pub(crate) fn decide(&self, record: &Record) -> FilterResult {
        let metadata = log::Metadata::builder()
            .level(record.level())
            .target(record.target())
            .build();
        if self.0.enabled(&metadata) {
            FilterResult::Neutral
        } else {
            FilterResult::Deny
        }
    }
}

impl<'a> From<&'a str> for EnvFilter {
    fn from(spec: &'a str) -> Self {
        let mut builder = EnvFilterBuilder::new();
        builder.parse(spec);
        EnvFilter::new(builder)
    }
}

impl From<log::LevelFilter> for EnvFilter {
    fn from(level: log::LevelFilter) -> Self {
        let mut builder = EnvFilterBuilder::new();
        builder.filter_level(level);
        EnvFilter::new(builder)
    }
}

impl From<EnvFilter> for Filter {
    fn from(filter: EnvFilter) -> Self {
        Filter::Env(filter)
    }
}
