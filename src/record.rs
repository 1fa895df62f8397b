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

//! Log record and metadata.

use std::fmt;
use std::time::SystemTime;

use log::Level;

use crate::frame::Frame;

/// The payload of a log message.
///
/// Records are borrowed by the pipeline for the duration of one evaluation
/// and one render; neither the filter chain nor the layout retains them.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    now: SystemTime,

    // the metadata
    metadata: Metadata<'a>,
    module_path: Option<&'a str>,
    file: Option<&'a str>,
    line: Option<u32>,

    // the payload
    args: fmt::Arguments<'a>,

    // structural logging
    kvs: KeyValues<'a>,

    // captured call-stack, innermost frame first
    call_stack: Option<&'a [Box<dyn Frame>]>,
}

impl<'a> Record<'a> {
    /// Bridges a record produced by the `log` facade.
    ///
    /// Call-stack information is not part of the facade's record; attach it
    /// with [`RecordBuilder`] when the front end captures frames.
    pub fn from_log(record: &'a log::Record<'a>) -> Record<'a> {
        Record {
            now: SystemTime::now(),
            metadata: Metadata {
                level: record.level(),
                target: record.target(),
            },
            module_path: record.module_path(),
            file: record.file(),
            line: record.line(),
            args: *record.args(),
            kvs: KeyValues(Some(record.key_values())),
            call_stack: None,
        }
    }

    /// The observed time.
    pub fn time(&self) -> SystemTime {
        self.now
    }

    /// Metadata about the log directive.
    pub fn metadata(&self) -> &Metadata<'a> {
        &self.metadata
    }

    /// The verbosity level of the message.
    pub fn level(&self) -> Level {
        self.metadata.level()
    }

    /// The name of the logger that produced the message.
    pub fn target(&self) -> &'a str {
        self.metadata.target()
    }

    /// The module path of the message.
    pub fn module_path(&self) -> Option<&'a str> {
        self.module_path
    }

    /// The source file containing the message.
    pub fn file(&self) -> Option<&'a str> {
        self.file
    }

    /// The line containing the message.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// The message body.
    pub fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }

    /// The key-values.
    pub fn key_values(&self) -> KeyValues<'a> {
        self.kvs
    }

    /// The captured call stack, innermost frame first, if any.
    pub fn call_stack(&self) -> Option<&'a [Box<dyn Frame>]> {
        self.call_stack
    }
}

/// Structured key-values attached to a record.
#[derive(Clone, Copy, Default)]
pub struct KeyValues<'a>(Option<&'a dyn log::kv::Source>);

impl fmt::Debug for KeyValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyValues {{ .. }}")
    }
}

impl<'a> KeyValues<'a> {
    /// The underlying source, if any key-values are attached.
    pub fn source(&self) -> Option<&'a dyn log::kv::Source> {
        self.0
    }
}

impl<'a> From<&'a dyn log::kv::Source> for KeyValues<'a> {
    fn from(source: &'a dyn log::kv::Source) -> Self {
        KeyValues(Some(source))
    }
}

/// Metadata about a log message.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Metadata<'a> {
    level: Level,
    target: &'a str,
}

impl<'a> Metadata<'a> {
    /// Get the level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Get the target.
    pub fn target(&self) -> &'a str {
        self.target
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                now: SystemTime::now(),
                metadata: Metadata {
                    level: Level::Info,
                    target: "",
                },
                module_path: None,
                file: None,
                line: None,
                args: format_args!(""),
                kvs: KeyValues::default(),
                call_stack: None,
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`time`](Record::time).
    pub fn time(mut self, now: SystemTime) -> Self {
        self.record.now = now;
        self
    }

    /// Set [`args`](Record::args).
    pub fn args(mut self, args: fmt::Arguments<'a>) -> Self {
        self.record.args = args;
        self
    }

    /// Set [`Metadata::level`].
    pub fn level(mut self, level: Level) -> Self {
        self.record.metadata.level = level;
        self
    }

    /// Set [`Metadata::target`].
    pub fn target(mut self, target: &'a str) -> Self {
        self.record.metadata.target = target;
        self
    }

    /// Set [`module_path`](Record::module_path).
    pub fn module_path(mut self, path: Option<&'a str>) -> Self {
        self.record.module_path = path;
        self
    }

    /// Set [`file`](Record::file).
    pub fn file(mut self, file: Option<&'a str>) -> Self {
        self.record.file = file;
        self
    }

    /// Set [`line`](Record::line).
    pub fn line(mut self, line: Option<u32>) -> Self {
        self.record.line = line;
        self
    }

    /// Set [`key_values`](Record::key_values).
    pub fn key_values(mut self, kvs: impl Into<KeyValues<'a>>) -> Self {
        self.record.kvs = kvs.into();
        self
    }

    /// Set [`call_stack`](Record::call_stack), innermost frame first.
    pub fn call_stack(mut self, frames: &'a [Box<dyn Frame>]) -> Self {
        self.record.call_stack = Some(frames);
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        self.record
    }
}
