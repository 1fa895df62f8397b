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
use std::fmt::Write;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Error;
use crate::diagnostic::Diagnostic;
use crate::diagnostic::Visitor;
use crate::layout::KvDisplay;
use crate::layout::pattern::stack::StackConverter;
use crate::record::Record;
use crate::trap;

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%6f%:z";

// Longest first, so a run of letters resolves to the longest registered name.
const KEYWORDS: &[&str] = &[
    "stacktracedetail",
    "stacktrace",
    "context",
    "message",
    "newline",
    "logger",
    "level",
    "date",
    "file",
    "line",
    "kv",
];

/// A conversion directive bound to its parsed per-directive state.
///
/// Each variant owns exactly one directive; literal text between directives
/// never reaches a converter.
#[derive(Debug)]
pub(crate) enum Converter {
    Context,
    Date(DateConverter),
    File,
    Kv,
    Level,
    Line,
    Logger,
    Message,
    Newline,
    Stack(StackConverter),
}

impl Converter {
    /// The longest registered directive name that prefixes `run`.
    pub(crate) fn longest_keyword(run: &str) -> Option<&'static str> {
        KEYWORDS.iter().copied().find(|keyword| run.starts_with(keyword))
    }

    pub(crate) fn from_directive(keyword: &str, option: Option<&str>) -> Option<Converter> {
        let converter = match keyword {
            "context" => Converter::Context,
            "date" => Converter::Date(DateConverter::new(option)),
            "file" => Converter::File,
            "kv" => Converter::Kv,
            "level" => Converter::Level,
            "line" => Converter::Line,
            "logger" => Converter::Logger,
            "message" => Converter::Message,
            "newline" => Converter::Newline,
            "stacktrace" => Converter::Stack(StackConverter::new(option, false)),
            "stacktracedetail" => Converter::Stack(StackConverter::new(option, true)),
            _ => return None,
        };

        if option.is_some() && !matches!(keyword, "date" | "stacktrace" | "stacktracedetail") {
            trap::report(
                Error::new("conversion directive takes no option")
                    .with_context("directive", keyword),
            );
        }

        Some(converter)
    }

    /// Appends this directive's fragment for `record` to `out`.
    ///
    /// Rendering failures are reported to the trap and degrade to an empty or
    /// partial fragment; the rest of the pattern still renders.
    pub(crate) fn render(
        &self,
        record: &Record,
        diagnostics: &[Box<dyn Diagnostic>],
        tz: Option<&TimeZone>,
        out: &mut String,
    ) {
        match self {
            Converter::Context => render_context(diagnostics, out),
            Converter::Date(date) => date.render(record, tz, out),
            Converter::File => out.push_str(record.file().unwrap_or_default()),
            Converter::Kv => {
                if let Some(source) = record.key_values().source() {
                    let _ = write!(out, "{}", KvDisplay::new(source));
                }
            }
            Converter::Level => {
                let _ = write!(out, "{}", record.level());
            }
            Converter::Line => {
                if let Some(line) = record.line() {
                    let _ = write!(out, "{line}");
                }
            }
            Converter::Logger => out.push_str(record.target()),
            Converter::Message => {
                let _ = write!(out, "{}", record.args());
            }
            Converter::Newline => out.push('\n'),
            Converter::Stack(stack) => stack.render(record, out),
        }
    }
}

/// Renders `%date` with a strftime format parsed from the directive option.
#[derive(Debug)]
pub(crate) struct DateConverter {
    format: String,
}

impl DateConverter {
    fn new(option: Option<&str>) -> Self {
        DateConverter {
            format: option.unwrap_or(DEFAULT_DATE_FORMAT).to_owned(),
        }
    }

    fn render(&self, record: &Record, tz: Option<&TimeZone>, out: &mut String) {
        let timestamp = match Timestamp::try_from(record.time()) {
            Ok(timestamp) => timestamp,
            Err(err) => {
                trap::report(
                    Error::new("record timestamp is unrepresentable").with_source(err),
                );
                return;
            }
        };
        let zoned = match tz {
            Some(tz) => timestamp.to_zoned(tz.clone()),
            None => timestamp.to_zoned(TimeZone::system()),
        };

        let start = out.len();
        if let Err(err) = write!(out, "{}", zoned.strftime(&self.format)) {
            out.truncate(start);
            trap::report(
                Error::new("failed to render the record timestamp")
                    .with_context("format", &self.format)
                    .with_source(err),
            );
        }
    }
}

fn render_context(diagnostics: &[Box<dyn Diagnostic>], out: &mut String) {
    let mut writer = ContextWriter { out, first: true };
    for diagnostic in diagnostics {
        if let Err(err) = diagnostic.visit(&mut writer) {
            trap::report(err.with_context("directive", "context"));
        }
    }
}

struct ContextWriter<'a> {
    out: &'a mut String,
    first: bool,
}

impl Visitor for ContextWriter<'_> {
    fn visit(&mut self, key: Cow<'_, str>, value: Cow<'_, str>) -> Result<(), Error> {
        if !self.first {
            self.out.push(' ');
        }
        self.first = false;
        write!(self.out, "{key}={value}")
            .map_err(|err| Error::new("failed to write a key-value pair").with_source(err))
    }
}
