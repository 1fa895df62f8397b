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

use log::Level;

use crate::filter::Filter;
use crate::filter::FilterResult;
use crate::record::Record;

/// A filter that checks if the log level is at higher than the specified level.
///
/// From least to most verbose, the levels are:
///
/// - `Error`
/// - `Warn`
/// - `Info`
/// - `Debug`
/// - `Trace`
///
/// If the threshold is set to `Info`, records at `Error`, `Warn`, and `Info`
/// pass through as neutral; more verbose records are denied. If the threshold
/// is `Off`, every record is denied.
#[derive(Debug, Clone)]
pub struct LevelFilter(log::LevelFilter);

impl LevelFilter {
    /// Creates a filter with the given threshold.
    pub fn new(level: log::LevelFilter) -> Self {
        LevelFilter(level)
    }

    pub(crate) fn decide(&self, record: &Record) -> FilterResult {
        if record.level() <= self.0 {
            FilterResult::Neutral
        } else {
            FilterResult::Deny
        }
    }
}

impl From<LevelFilter> for Filter {
    fn from(filter: LevelFilter) -> Self {
        Filter::Level(filter)
    }
}

/// A filter that admits only records inside a band of levels.
///
/// `min` is the most severe admitted level and `max` the most verbose one,
/// in [`log::Level`]'s ordering (`Error < Trace`). Records outside the band
/// are denied; records inside it are neutral, or accepted outright when
/// [`accept_on_match`](LevelRangeFilter::accept_on_match) is set.
#[derive(Debug, Clone)]
pub struct LevelRangeFilter {
    min: Level,
    max: Level,
    accept_on_match: bool,
}

impl LevelRangeFilter {
    /// Creates a filter admitting levels between `min` and `max`, inclusive.
    pub fn new(min: Level, max: Level) -> Self {
        LevelRangeFilter {
            min,
            max,
            accept_on_match: false,
        }
    }

    /// Short-circuits the chain with an accept when a record is in the band.
    pub fn accept_on_match(mut self, accept: bool) -> Self {
        self.accept_on_match = accept;
        self
    }

    pub(crate) fn decide(&self, record: &Record) -> FilterResult {
        let level = record.level();
        if level < self.min || level > self.max {
            FilterResult::Deny
        } else if self.accept_on_match {
            FilterResult::Accept
        } else {
            FilterResult::Neutral
        }
    }
}

impl From<LevelRangeFilter> for Filter {
    fn from(filter: LevelRangeFilter) -> Self {
        Filter::LevelRange(filter)
    }
}
