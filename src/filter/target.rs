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

use crate::filter::Filter;
use crate::filter::FilterResult;
use crate::record::Record;

/// A filter that checks if the log level is higher than the specified level
/// for a specific logger name.
#[derive(Debug, Clone)]
pub struct TargetFilter {
    target: Cow<'static, str>,
    level: log::LevelFilter,
    not: bool,
}

impl TargetFilter {
    /// The filter applies only if the record's logger name **has** a prefix
    /// that matches `target`.
    pub fn level_for(target: impl Into<Cow<'static, str>>, level: log::LevelFilter) -> Self {
        TargetFilter {
            target: target.into(),
            level,
            not: false,
        }
    }

    /// The filter applies only if the record's logger name **does not have**
    /// a prefix that matches `target`.
    pub fn level_for_not(target: impl Into<Cow<'static, str>>, level: log::LevelFilter) -> Self {
        TargetFilter {
            target: target.into(),
            level,
            not: true,
        }
    }

    pub(crate) fn decide(&self, record: &Record) -> FilterResult {
        let matched = record.target().starts_with(self.target.as_ref());
        if matched != self.not {
            if record.level() <= self.level {
                FilterResult::Neutral
            } else {
                FilterResult::Deny
            }
        } else {
            FilterResult::Neutral
        }
    }
}

impl From<TargetFilter> for Filter {
    fn from(filter: TargetFilter) -> Self {
        Filter::Target(filter)
    }
}
