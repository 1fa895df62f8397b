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

//! Logward is the admission-and-rendering core of a logging pipeline.
//!
//! # Overview
//!
//! A captured record passes through two pluggable chains: a
//! [filter chain](filter::FilterChain) decides whether the record is emitted
//! at all, and a [pattern layout](layout::PatternLayout) renders admitted
//! records into text, directive by directive. A third, smaller mechanism —
//! [bootstrap hooks](bootstrap) — installs process-wide providers in
//! priority order before the host's main configuration step runs.
//!
//! Logward does not own loggers or appenders: the host wires chains and
//! layouts into whatever dispatches records and performs I/O. Failures
//! inside the pipeline never reach the application being logged; they are
//! reported to the [trap](trap) and rendering degrades instead.
//!
//! # Examples
//!
//! ```
//! use logward::RecordBuilder;
//! use logward::filter::FilterChain;
//! use logward::layout::Layout;
//! use logward::layout::PatternLayout;
//!
//! let chain = FilterChain::new().filter(log::LevelFilter::Info);
//! let layout = PatternLayout::new("%level %logger: %message");
//!
//! let record = RecordBuilder::default()
//!     .level(log::Level::Info)
//!     .target("app::server")
//!     .args(format_args!("starting up"))
//!     .build();
//!
//! if chain.evaluate(&record) {
//!     let bytes = layout.format(&record, &[]).unwrap();
//!     assert_eq!(String::from_utf8(bytes).unwrap(), "INFO app::server: starting up");
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bootstrap;
pub mod diagnostic;
pub mod filter;
pub mod frame;
pub mod layout;
pub mod trap;

pub use diagnostic::Diagnostic;
pub use filter::Filter;
pub use filter::FilterChain;
pub use filter::FilterResult;
pub use frame::Frame;
pub use layout::Layout;

mod error;
pub use error::Error;

mod record;
pub use record::KeyValues;
pub use record::Metadata;
pub use record::Record;
pub use record::RecordBuilder;
