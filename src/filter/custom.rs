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

use std::fmt::Debug;

use crate::filter::Filter;
use crate::filter::FilterResult;
use crate::record::Record;

/// A filter that you can pass the custom filter function.
///
/// The custom filter function accepts a [`&Record`][Record] and returns the
/// [`FilterResult`]. It must not fail and must not mutate the chain it is
/// part of. For example:
///
/// ```rust
/// use logward::Record;
/// use logward::filter::CustomFilter;
/// use logward::filter::FilterResult;
///
/// let filter = CustomFilter::new(|record: &Record| {
///     if record.target() == "my_crate" {
///         FilterResult::Accept
///     } else {
///         FilterResult::Neutral
///     }
/// });
/// ```
pub struct CustomFilter {
    f: Box<dyn Fn(&Record) -> FilterResult + Send + Sync + 'static>,
}

impl Debug for CustomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CustomFilter {{ ... }}")
    }
}

impl CustomFilter {
    /// Creates a filter from the given function.
    pub fn new(filter: impl Fn(&Record) -> FilterResult + Send + Sync + 'static) -> Self {
        CustomFilter {
            f: Box::new(filter),
        }
    }

    pub(crate) fn decide(&self, record: &Record) -> FilterResult {
        (self.f)(record)
    }
}

impl From<CustomFilter> for Filter {
    fn from(filter: CustomFilter) -> Self {
        Filter::Custom(filter)
    }
}
