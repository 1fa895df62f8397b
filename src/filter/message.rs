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

/// A filter that matches a substring of the rendered message.
///
/// A record whose message contains the needle is accepted, or denied when
/// [`deny_on_match`](MessageFilter::deny_on_match) is set. Records that do
/// not match are neutral.
#[derive(Debug, Clone)]
pub struct MessageFilter {
    needle: Cow<'static, str>,
    deny_on_match: bool,
}

impl MessageFilter {
    /// Creates a filter matching messages that contain `needle`.
    pub fn contains(needle: impl Into<Cow<'static, str>>) -> Self {
        MessageFilter {
            needle: needle.into(),
            deny_on_match: false,
        }
    }

    /// Denies matching records instead of accepting them.
    pub fn deny_on_match(mut self, deny: bool) -> Self {
        self.deny_on_match = deny;
        self
    }

    pub(crate) fn decide(&self, record: &Record) -> FilterResult {
        let message = record.args().to_string();
        if message.contains(self.needle.as_ref()) {
            if self.deny_on_match {
                FilterResult::Deny
            } else {
                FilterResult::Accept
            }
        } else {
            FilterResult::Neutral
        }
    }
}

impl From<MessageFilter> for Filter {
    fn from(filter: MessageFilter) -> Self {
        Filter::Message(filter)
    }
}
