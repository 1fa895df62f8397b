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

use std::fmt::Write;

use crate::Error;
use crate::frame::Frame;
use crate::record::Record;
use crate::trap;

const FRAME_SEPARATOR: &str = " > ";
const PARAMETER_SEPARATOR: &str = ", ";
const DEFAULT_DEPTH: usize = 1;

/// Renders `%stacktrace` and `%stacktracedetail` fragments.
///
/// A frame renders as `Type.Method`; the detail variant appends the formal
/// parameter list, `Type.Method(int x, string y)`. Frames render outermost
/// first, joined by `" > "`, ending at the logging call site.
#[derive(Debug)]
pub(crate) struct StackConverter {
    depth: usize,
    detail: bool,
}

impl StackConverter {
    /// Parses the `{depth}` option: the number of frames to render, default
    /// 1, with 0 meaning all captured frames.
    pub(crate) fn new(option: Option<&str>, detail: bool) -> Self {
        let depth = match option {
            None => DEFAULT_DEPTH,
            Some(raw) => match raw.trim().parse() {
                Ok(depth) => depth,
                Err(err) => {
                    trap::report(
                        Error::new("invalid stack depth option")
                            .with_context("option", raw)
                            .with_source(err),
                    );
                    DEFAULT_DEPTH
                }
            },
        };
        StackConverter { depth, detail }
    }

    pub(crate) fn render(&self, record: &Record, out: &mut String) {
        let Some(frames) = record.call_stack() else {
            return;
        };
        let depth = match self.depth {
            0 => frames.len(),
            depth => depth.min(frames.len()),
        };

        let mut first = true;
        for frame in frames[..depth].iter().rev() {
            let text = self.frame_text(frame.as_ref());
            if text.is_empty() {
                continue;
            }
            if !first {
                out.push_str(FRAME_SEPARATOR);
            }
            first = false;
            out.push_str(&text);
        }
    }

    /// Renders one frame, degrading on introspection failures: a failed
    /// parameter enumeration renders `()`, a failed base description renders
    /// nothing for the frame.
    fn frame_text(&self, frame: &dyn Frame) -> String {
        let descriptor = match frame.descriptor() {
            Ok(descriptor) => descriptor,
            Err(err) => {
                trap::report(err.with_context("while", "describing a stack frame"));
                return String::new();
            }
        };
        let mut text = descriptor.to_string();

        if !self.detail {
            return text;
        }

        let parameters = match frame.parameters() {
            Ok(parameters) => parameters,
            Err(err) => {
                trap::report(err.with_context("while", "enumerating frame parameters"));
                vec![]
            }
        };

        text.push('(');
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                text.push_str(PARAMETER_SEPARATOR);
            }
            let _ = write!(text, "{parameter}");
        }
        text.push(')');
        text
    }
}
