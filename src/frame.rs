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

//! Call-stack introspection for the stack-trace converters.

use std::fmt;

use crate::Error;

/// One call-stack frame attached to a record.
///
/// Implementations wrap whatever frame source the host runtime offers. Both
/// accessors may fail per frame; the stack-trace converters degrade on
/// failure instead of propagating, so a single bad frame never suppresses a
/// log line.
pub trait Frame: fmt::Debug {
    /// The declaring type and method name of this frame.
    fn descriptor(&self) -> Result<FrameDescriptor, Error>;

    /// The formal parameters of the method, in declaration order.
    fn parameters(&self) -> Result<Vec<Parameter>, Error>;
}

/// The base single-line description of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDescriptor {
    /// The type declaring the method, if known.
    pub declaring_type: Option<String>,
    /// The method name.
    pub method: String,
}

impl fmt::Display for FrameDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.declaring_type {
            Some(declaring_type) => write!(f, "{declaring_type}.{}", self.method),
            None => f.write_str(&self.method),
        }
    }
}

/// One formal method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// The parameter type.
    pub type_name: String,
    /// The parameter name.
    pub name: String,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// A frame captured eagerly into plain data.
///
/// Construction cannot fail, so the fallible [`Frame`] accessors always
/// succeed. Front ends that capture call sites by hand, and tests, use this.
#[derive(Debug, Clone, Default)]
pub struct CapturedFrame {
    declaring_type: Option<String>,
    method: String,
    parameters: Vec<Parameter>,
}

impl CapturedFrame {
    /// Creates a frame for the given method name.
    pub fn new(method: impl Into<String>) -> Self {
        CapturedFrame {
            declaring_type: None,
            method: method.into(),
            parameters: vec![],
        }
    }

    /// Sets the declaring type of the method.
    pub fn declaring_type(mut self, declaring_type: impl Into<String>) -> Self {
        self.declaring_type = Some(declaring_type.into());
        self
    }

    /// Appends one formal parameter.
    pub fn parameter(mut self, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            type_name: type_name.into(),
            name: name.into(),
        });
        self
    }
}

impl Frame for CapturedFrame {
    fn descriptor(&self) -> Result<FrameDescriptor, Error> {
        Ok(FrameDescriptor {
            declaring_type: self.declaring_type.clone(),
            method: self.method.clone(),
        })
    }

    fn parameters(&self) -> Result<Vec<Parameter>, Error> {
        Ok(self.parameters.clone())
    }
}
