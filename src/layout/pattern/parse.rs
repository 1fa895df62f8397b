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

use crate::Error;
use crate::layout::pattern::convert::Converter;
use crate::trap;

/// One parsed segment of a conversion pattern.
#[derive(Debug)]
pub(crate) enum Chunk {
    Literal(String),
    Directive {
        converter: Converter,
        format: FormattingInfo,
    },
}

/// Width and alignment modifiers of a directive, `%-MIN.MAXname`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FormattingInfo {
    pub(crate) min: Option<usize>,
    pub(crate) max: Option<usize>,
    pub(crate) left_align: bool,
}

impl FormattingInfo {
    /// Applies the modifiers to `out[start..]`, the fragment a converter just
    /// rendered: truncate to `max` characters keeping the tail, then pad to
    /// `min` characters.
    pub(crate) fn apply(&self, out: &mut String, start: usize) {
        if let Some(max) = self.max {
            let len = out[start..].chars().count();
            if len > max {
                let cut = out[start..]
                    .char_indices()
                    .nth(len - max)
                    .map(|(at, _)| at)
                    .unwrap_or(0);
                out.replace_range(start..start + cut, "");
            }
        }

        if let Some(min) = self.min {
            let len = out[start..].chars().count();
            if len < min {
                let pad = " ".repeat(min - len);
                if self.left_align {
                    out.push_str(&pad);
                } else {
                    out.insert_str(start, &pad);
                }
            }
        }
    }
}

enum Parsed {
    Directive {
        converter: Converter,
        format: FormattingInfo,
        consumed: usize,
    },
    // the raw directive text stays in the output as written
    Unknown {
        consumed: usize,
    },
}

/// Parses a conversion pattern into chunks. Never fails: malformed directives
/// degrade to literal text and are reported to the trap.
pub(crate) fn parse(pattern: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    while let Some(at) = rest.find('%') {
        literal.push_str(&rest[..at]);
        rest = &rest[at + 1..];

        if let Some(stripped) = rest.strip_prefix('%') {
            literal.push('%');
            rest = stripped;
            continue;
        }

        match directive(rest) {
            Parsed::Directive {
                converter,
                format,
                consumed,
            } => {
                flush(&mut literal, &mut chunks);
                chunks.push(Chunk::Directive { converter, format });
                rest = &rest[consumed..];
            }
            Parsed::Unknown { consumed } => {
                trap::report(
                    Error::new("unrecognized conversion directive")
                        .with_context("directive", format!("%{}", &rest[..consumed]))
                        .with_context("pattern", pattern),
                );
                literal.push('%');
                literal.push_str(&rest[..consumed]);
                rest = &rest[consumed..];
            }
        }
    }

    literal.push_str(rest);
    flush(&mut literal, &mut chunks);
    chunks
}

fn flush(literal: &mut String, chunks: &mut Vec<Chunk>) {
    if !literal.is_empty() {
        chunks.push(Chunk::Literal(std::mem::take(literal)));
    }
}

/// Parses one directive at the start of `rest`, which follows a `%`.
fn directive(rest: &str) -> Parsed {
    let bytes = rest.as_bytes();
    let mut at = 0;
    let mut format = FormattingInfo::default();

    if bytes.get(at) == Some(&b'-') {
        format.left_align = true;
        at += 1;
    }
    let digits = count_digits(&bytes[at..]);
    if digits > 0 {
        format.min = rest[at..at + digits].parse().ok();
        at += digits;
    }
    if bytes.get(at) == Some(&b'.') {
        let digits = count_digits(&bytes[at + 1..]);
        if digits > 0 {
            format.max = rest[at + 1..at + 1 + digits].parse().ok();
            at += 1 + digits;
        } else {
            return Parsed::Unknown { consumed: at + 1 };
        }
    }

    let name_start = at;
    while bytes.get(at).is_some_and(|b| b.is_ascii_alphabetic()) {
        at += 1;
    }
    let run = &rest[name_start..at];

    let Some(keyword) = Converter::longest_keyword(run) else {
        return Parsed::Unknown { consumed: at };
    };
    let mut consumed = name_start + keyword.len();

    let mut option = None;
    if keyword.len() == run.len() {
        if let Some(tail) = rest[consumed..].strip_prefix('{') {
            match tail.find('}') {
                Some(close) => {
                    option = Some(&tail[..close]);
                    consumed += close + 2;
                }
                None => {
                    trap::report(
                        Error::new("unterminated directive option")
                            .with_context("directive", keyword),
                    );
                }
            }
        }
    }

    match Converter::from_directive(keyword, option) {
        Some(converter) => Parsed::Directive {
            converter,
            format,
            consumed,
        },
        None => Parsed::Unknown { consumed: at },
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
