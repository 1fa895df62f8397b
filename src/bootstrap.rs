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

//! Startup configuration hooks.
//!
//! Hooks run once, at process startup, strictly before event traffic begins.
//! Each hook carries a fixed priority; [`run`] invokes them in ascending
//! order, so hooks that install providers complete before the host's default
//! configuration step (registered at [`DEFAULT_CONFIGURATOR_PRIORITY`])
//! consumes what they installed.
//!
//! Provider types are resolved through an explicit [`ProviderRegistry`]
//! populated at startup, and installs land in a [`BootstrapContext`] the
//! host passes through its configuration path. Hook failures are reported to
//! the [trap](crate::trap) and never abort the run: configuration proceeds
//! in a degraded-but-running state.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::Error;
use crate::diagnostic::Diagnostic;
use crate::trap;

/// The fixed priority of the host's default configuration step.
///
/// Hooks that install providers must use a lower value so their installs are
/// visible when the default step runs.
pub const DEFAULT_CONFIGURATOR_PRIORITY: i32 = 10_000;

/// A startup configuration hook.
pub trait Hook: fmt::Debug {
    /// The hook's fixed priority. Lower values run earlier.
    fn priority(&self) -> i32;

    /// Applies the hook against the bootstrap state.
    fn configure(&mut self, registry: &ProviderRegistry, context: &mut BootstrapContext);
}

/// Runs `hooks` in ascending priority order.
///
/// The sort is stable: hooks with equal priorities keep their declaration
/// order.
pub fn run(
    hooks: &mut [Box<dyn Hook>],
    registry: &ProviderRegistry,
    context: &mut BootstrapContext,
) {
    hooks.sort_by_key(|hook| hook.priority());
    for hook in hooks.iter_mut() {
        hook.configure(registry, context);
    }
}

type Constructor = Box<dyn Fn() -> Result<Box<dyn Diagnostic>, Error> + Send + Sync>;

/// Maps provider keys to constructor functions.
///
/// Populated explicitly at program startup. Looking up a key yields a
/// ready-to-run constructor, so an installed provider is compatible by
/// construction; there is no dynamic type discovery to go wrong.
#[derive(Default)]
pub struct ProviderRegistry {
    constructors: BTreeMap<Cow<'static, str>, Constructor>,
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("keys", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constructor` under `key`, replacing any previous entry.
    pub fn register<K, F>(&mut self, key: K, constructor: F)
    where
        K: Into<Cow<'static, str>>,
        F: Fn() -> Result<Box<dyn Diagnostic>, Error> + Send + Sync + 'static,
    {
        self.constructors.insert(key.into(), Box::new(constructor));
    }

    fn construct(&self, key: &str) -> Option<Result<Box<dyn Diagnostic>, Error>> {
        self.constructors.get(key).map(|constructor| constructor())
    }
}

/// Process-scoped state produced by one bootstrap run.
///
/// The default provider is written only by hooks during [`run`] and read by
/// everything configured afterwards; there is exactly one initialization
/// point and no ambient global to race on.
#[derive(Debug, Default)]
pub struct BootstrapContext {
    default_provider: Option<Box<dyn Diagnostic>>,
}

impl BootstrapContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// The provider installed by the last provider hook that ran, if any.
    pub fn default_provider(&self) -> Option<&dyn Diagnostic> {
        self.default_provider.as_deref()
    }

    /// Consumes the context, yielding the installed provider.
    pub fn into_default_provider(self) -> Option<Box<dyn Diagnostic>> {
        self.default_provider
    }

    fn install(&mut self, provider: Box<dyn Diagnostic>) {
        self.default_provider = Some(provider);
    }
}

/// A hook that installs the process default diagnostic provider.
///
/// Declared at most once per host configuration source; a repeated
/// activation keeps the first install and reports the slip.
#[derive(Debug)]
pub struct ProviderHook {
    priority: i32,
    provider: Option<Cow<'static, str>>,
    installed: bool,
}

impl ProviderHook {
    /// Creates a hook with the given priority and no provider key.
    pub fn new(priority: i32) -> Self {
        ProviderHook {
            priority,
            provider: None,
            installed: false,
        }
    }

    /// Sets the registry key of the provider to install.
    pub fn provider(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.provider = Some(key.into());
        self
    }
}

impl Hook for ProviderHook {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn configure(&mut self, registry: &ProviderRegistry, context: &mut BootstrapContext) {
        if self.installed {
            trap::report(
                Error::new("provider hook activated twice; keeping the first install")
                    .with_context("priority", self.priority),
            );
            return;
        }
        self.installed = true;

        let Some(key) = self.provider.as_deref() else {
            trap::report(
                Error::new("provider hook declares no provider key")
                    .with_context("priority", self.priority),
            );
            return;
        };

        match registry.construct(key) {
            None => trap::report(
                Error::new("provider key is not registered").with_context("provider", key),
            ),
            Some(Err(err)) => trap::report(
                err.with_context("while", "constructing provider")
                    .with_context("provider", key),
            ),
            Some(Ok(provider)) => context.install(provider),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;
    use crate::diagnostic::StaticDiagnostic;
    use crate::diagnostic::Visitor;
    use crate::trap::Trap;

    #[derive(Debug, Default, Clone)]
    struct CollectingTrap(Arc<Mutex<Vec<String>>>);

    impl CollectingTrap {
        fn reports(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Trap for CollectingTrap {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.to_string());
        }
    }

    struct Collect(Vec<(String, String)>);

    impl Visitor for Collect {
        fn visit(&mut self, key: Cow<'_, str>, value: Cow<'_, str>) -> Result<(), Error> {
            self.0.push((key.into_owned(), value.into_owned()));
            Ok(())
        }
    }

    fn pairs(diagnostic: &dyn Diagnostic) -> Vec<(String, String)> {
        let mut collect = Collect(vec![]);
        diagnostic.visit(&mut collect).unwrap();
        collect.0
    }

    fn registry() -> ProviderRegistry {
        let mut registry = ProviderRegistry::new();
        registry.register("static", || {
            Ok(Box::new(StaticDiagnostic::default().with("provider", "static")))
        });
        registry.register("broken", || Err(Error::new("constructor exploded")));
        registry
    }

    #[test]
    fn installs_registered_provider() {
        let registry = registry();
        let mut context = BootstrapContext::new();
        let mut hooks: Vec<Box<dyn Hook>> =
            vec![Box::new(ProviderHook::new(50).provider("static"))];

        run(&mut hooks, &registry, &mut context);

        let provider = context.default_provider().expect("provider installed");
        assert_eq!(
            pairs(provider),
            vec![("provider".to_owned(), "static".to_owned())]
        );
    }

    #[test]
    fn missing_provider_key_installs_nothing() {
        let collector = CollectingTrap::default();
        let registry = registry();
        let mut context = BootstrapContext::new();
        let mut hooks: Vec<Box<dyn Hook>> = vec![Box::new(ProviderHook::new(50))];

        crate::trap::scoped(collector.clone(), || {
            run(&mut hooks, &registry, &mut context);
        });

        assert!(context.default_provider().is_none());
        assert_eq!(collector.reports().len(), 1);
    }

    #[test]
    fn unregistered_provider_key_installs_nothing() {
        let collector = CollectingTrap::default();
        let registry = registry();
        let mut context = BootstrapContext::new();
        let mut hooks: Vec<Box<dyn Hook>> =
            vec![Box::new(ProviderHook::new(50).provider("nonesuch"))];

        crate::trap::scoped(collector.clone(), || {
            run(&mut hooks, &registry, &mut context);
        });

        assert!(context.default_provider().is_none());
        assert_eq!(collector.reports().len(), 1);
    }

    #[test]
    fn failing_constructor_installs_nothing() {
        let collector = CollectingTrap::default();
        let registry = registry();
        let mut context = BootstrapContext::new();
        let mut hooks: Vec<Box<dyn Hook>> =
            vec![Box::new(ProviderHook::new(50).provider("broken"))];

        crate::trap::scoped(collector.clone(), || {
            run(&mut hooks, &registry, &mut context);
        });

        assert!(context.default_provider().is_none());
        let reports = collector.reports();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("constructor exploded"));
    }

    #[test]
    fn hooks_run_in_ascending_priority_order() {
        let mut registry = ProviderRegistry::new();
        registry.register("fifty", || {
            Ok(Box::new(StaticDiagnostic::default().with("installed_by", "50")))
        });
        registry.register("hundred", || {
            Ok(Box::new(StaticDiagnostic::default().with("installed_by", "100")))
        });

        // declared out of order on purpose
        let mut hooks: Vec<Box<dyn Hook>> = vec![
            Box::new(ProviderHook::new(100).provider("hundred")),
            Box::new(ProviderHook::new(50).provider("fifty")),
        ];
        let mut context = BootstrapContext::new();
        run(&mut hooks, &registry, &mut context);

        // the later (higher-priority) hook replaced the earlier install
        let provider = context.default_provider().expect("provider installed");
        assert_eq!(
            pairs(provider),
            vec![("installed_by".to_owned(), "100".to_owned())]
        );
    }

    #[test]
    fn repeated_activation_keeps_first_install() {
        let collector = CollectingTrap::default();
        let registry = registry();
        let mut context = BootstrapContext::new();

        let mut hook = ProviderHook::new(50).provider("static");
        crate::trap::scoped(collector.clone(), || {
            hook.configure(&registry, &mut context);
            hook.configure(&registry, &mut context);
        });

        assert!(context.default_provider().is_some());
        assert_eq!(collector.reports().len(), 1);
    }

    #[test]
    fn provider_hooks_precede_the_default_configurator() {
        #[derive(Debug)]
        struct DefaultConfigurator {
            saw_provider: Arc<Mutex<Option<bool>>>,
        }

        impl Hook for DefaultConfigurator {
            fn priority(&self) -> i32 {
                DEFAULT_CONFIGURATOR_PRIORITY
            }

            fn configure(&mut self, _: &ProviderRegistry, context: &mut BootstrapContext) {
                *self.saw_provider.lock().unwrap() =
                    Some(context.default_provider().is_some());
            }
        }

        let saw_provider = Arc::new(Mutex::new(None));
        let registry = registry();
        let mut context = BootstrapContext::new();
        let mut hooks: Vec<Box<dyn Hook>> = vec![
            Box::new(DefaultConfigurator {
                saw_provider: saw_provider.clone(),
            }),
            Box::new(ProviderHook::new(50).provider("static")),
        ];

        run(&mut hooks, &registry, &mut context);

        assert_eq!(*saw_provider.lock().unwrap(), Some(true));
    }
}
