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

//! The pattern-driven layout engine.
//!
//! A conversion pattern such as `"%date %-5level %logger: %message%newline"`
//! is parsed once, when the layout is built, into an ordered sequence of
//! literal segments and conversion directives. Rendering a record walks that
//! sequence and appends one fragment per segment; every fragment is derived
//! fresh from the record, so a layout is freely shared across threads.
//!
//! # Directives
//!
//! | Directive            | Fragment                                             |
//! |----------------------|------------------------------------------------------|
//! | `%context`           | key-values of the installed diagnostics              |
//! | `%date`              | record timestamp; `{strftime}` option                |
//! | `%file`              | source file of the call site                         |
//! | `%kv`                | key-values attached to the record                    |
//! | `%level`             | verbosity level                                      |
//! | `%line`              | source line of the call site                         |
//! | `%logger`            | logger name                                          |
//! | `%message`           | message body                                         |
//! | `%newline`           | a line feed                                          |
//! | `%stacktrace`        | call-stack frames; `{depth}` option, default 1       |
//! | `%stacktracedetail`  | frames with parameter lists; `{depth}` option        |
//! | `%%`                 | a literal percent sign                               |
//!
//! A directive may carry width modifiers between the percent sign and its
//! name, `%-MIN.MAXname`: the fragment is padded to at least `MIN` characters
//! (right-aligned unless `-` is present) and truncated to at most `MAX`
//! characters, keeping the tail.
//!
//! Malformed input never fails the build: unknown directives render as the
//! literal text they were written as, and the degradation is reported to the
//! [trap](crate::trap) at parse time.

use jiff::tz::TimeZone;

mod convert;
mod parse;
mod stack;


use self::parse::Chunk;
use crate::Error;
use crate::diagnostic::Diagnostic;
use crate::layout::Layout;
use crate::record::Record;

/// A layout that renders records according to a conversion pattern.
///
/// # Examples
///
/// ```
/// use logward::layout::PatternLayout;
///
/// let layout = PatternLayout::new("%-5level %logger: %message");
/// ```
#[derive(Debug)]
pub struct PatternLayout {
    chunks: Vec<Chunk>,
    tz: Option<TimeZone>,
}

impl PatternLayout {
    /// Parses `pattern` into a layout.
    pub fn new(pattern: &str) -> Self {
        PatternLayout {
            chunks: parse::parse(pattern),
            tz: None,
        }
    }

    /// Sets the timezone used by `%date`. Defaults to the system timezone.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logward::layout::PatternLayout;
    ///
    /// let layout = PatternLayout::new("%date %message").timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }
}

impl Layout for PatternLayout {
    fn format(&self, record: &Record, diagnostics: &[Box<dyn Diagnostic>]) -> Result<Vec<u8>, Error> {
        let mut out = String::new();
        for chunk in &self.chunks {
            match chunk {
                Chunk::Literal(text) => out.push_str(text),
                Chunk::Directive { converter, format } => {
                    let start = out.len();
                    converter.render(record, diagnostics, self.tz.as_ref(), &mut out);
                    format.apply(&mut out, start);
                }
            }
        }
        Ok(out.into_bytes())
    }
}
