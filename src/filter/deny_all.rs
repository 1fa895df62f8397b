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

use crate::filter::Filter;
use crate::filter::FilterResult;
use crate::record::Record;

/// A filter that denies every record.
///
/// A chain exhausted without an explicit decision emits the record. Placing
/// this filter last turns that default-permit into default-deny, so only
/// records accepted by an earlier filter get through.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct DenyAllFilter {}

impl DenyAllFilter {
    /// Creates the filter.
    pub fn new() -> Self {
        DenyAllFilter {}
    }

    pub(crate) fn decide(&self, _record: &Record) -> FilterResult {
        FilterResult::Deny
    }
}

impl From<DenyAllFilter> for Filter {
    fn from(filter: DenyAllFilter) -> Self {
        Filter::DenyAll(filter)
    }
}
