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

//! Self-diagnostics for the pipeline.
//!
//! A logging pipeline must never crash the application it logs for, and it
//! cannot report its own failures through itself without recursing. Broken
//! configuration and rendering failures are therefore reported to a [`Trap`],
//! which by default writes to standard error.

use std::cell::RefCell;
use std::sync::RwLock;

use crate::Error;

pub use self::default::DefaultTrap;

mod default;

/// A sink for errors the pipeline reports about itself.
pub trait Trap: std::fmt::Debug + Send + Sync + 'static {
    /// Handles one reported error.
    fn trap(&self, err: &Error);
}

static GLOBAL: RwLock<Option<Box<dyn Trap>>> = RwLock::new(None);

thread_local! {
    static SCOPED: RefCell<Option<Box<dyn Trap>>> = const { RefCell::new(None) };
}

/// Installs the process-wide trap, replacing any previous one.
///
/// Intended to be called once at startup, before event traffic begins. Until
/// a trap is installed, reports go to [`DefaultTrap`].
pub fn set(trap: impl Trap) {
    let mut global = match GLOBAL.write() {
        Ok(global) => global,
        Err(poisoned) => poisoned.into_inner(),
    };
    *global = Some(Box::new(trap));
}

/// Runs `f` with `trap` installed for the current thread only, restoring the
/// previous scoped trap afterwards.
///
/// Reports from other threads are unaffected. This is the seam test harnesses
/// use to observe reports without cross-test interference.
pub fn scoped<R>(trap: impl Trap, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<Box<dyn Trap>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let prev = self.0.take();
            SCOPED.with(|cell| cell.replace(prev));
        }
    }

    let _restore = Restore(SCOPED.with(|cell| cell.replace(Some(Box::new(trap)))));
    f()
}

/// Reports one error to the active trap.
pub(crate) fn report(err: Error) {
    let handled = SCOPED.with(|cell| match cell.borrow().as_ref() {
        Some(trap) => {
            trap.trap(&err);
            true
        }
        None => false,
    });
    if handled {
        return;
    }

    let global = match GLOBAL.read() {
        Ok(global) => global,
        Err(poisoned) => poisoned.into_inner(),
    };
    match global.as_ref() {
        Some(trap) => trap.trap(&err),
        None => DefaultTrap::default().trap(&err),
    }
}
