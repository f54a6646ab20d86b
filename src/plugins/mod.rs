//! Plugin interface.
//!
//! A plugin is any type implementing [`Plugin`]. Every hook has a default body that does nothing or
//! answers "no opinion" (`None`), so a plugin implements only the hooks it cares about:
//!
//! ```
//! use contexts::plugins::{Plugin, Identity, ASSERTION};
//! use contexts::MethodRef;
//!
//! /// Treats every method ending in `_holds` as an assertion.
//! struct HoldsPlugin;
//!
//! impl Plugin for HoldsPlugin {
//!     fn identify_method(&mut self, method: &MethodRef) -> Option<Identity> {
//!         method.name().ends_with("_holds").then_some(ASSERTION)
//!     }
//! }
//! ```
//!
//! ## Lifecycle
//!
//! Reporting hooks are notifications observed in this order (not enforced here; the execution engine
//! drives them):
//!
//! ```text
//! test_run_started
//!   suite_started
//!     context_started
//!       assertion_started -> assertion_passed | assertion_failed | assertion_errored   (per assertion)
//!     context_ended | context_errored
//!   suite_ended
//! test_run_ended
//! get_exit_code
//! ```
//!
//! ## Sentinels
//!
//! Classification hooks answer with an [`Identity`]. Only identity comparison is meaningful: the `Debug`
//! rendering of a sentinel is **not** part of the stable contract and must not be displayed, stored or
//! parsed.

mod set;

pub use set::PluginSet;

use std::error::Error;
use std::path::Path;

use crate::Role;
use crate::spec::{MethodRef, SpecClass, SpecModule};

/// Classification answer returned by the `identify_*` hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Identity {
    /// From `identify_folder`: run the files in this folder.
    TestFolder,
    /// From `identify_file`: load this file as a test module.
    TestFile,
    /// From `identify_class`: treat this type as a spec.
    Context,
    /// From `identify_method`: the method supplies examples.
    Examples,
    /// From `identify_method`: the method is a setup step.
    Setup,
    /// From `identify_method`: the method is an action step.
    Action,
    /// From `identify_method`: the method is an assertion.
    Assertion,
    /// From `identify_method`: the method is a teardown step.
    Teardown,
}

impl Identity {
    /// The method role this identity names, if it is a method identity.
    pub fn role(self) -> Option<Role> {
        match self {
            Identity::Examples => Some(Role::Examples),
            Identity::Setup => Some(Role::Setup),
            Identity::Action => Some(Role::Action),
            Identity::Assertion => Some(Role::Assertion),
            Identity::Teardown => Some(Role::Teardown),
            Identity::TestFolder | Identity::TestFile | Identity::Context => None,
        }
    }
}

impl From<Role> for Identity {
    fn from(role: Role) -> Self {
        match role {
            Role::Setup => Identity::Setup,
            Role::Action => Identity::Action,
            Role::Assertion => Identity::Assertion,
            Role::Teardown => Identity::Teardown,
            Role::Examples => Identity::Examples,
        }
    }
}

pub const TEST_FOLDER: Identity = Identity::TestFolder;
pub const TEST_FILE: Identity = Identity::TestFile;
pub const CONTEXT: Identity = Identity::Context;
pub const EXAMPLES: Identity = Identity::Examples;
pub const SETUP: Identity = Identity::Setup;
pub const ACTION: Identity = Identity::Action;
pub const ASSERTION: Identity = Identity::Assertion;
pub const TEARDOWN: Identity = Identity::Teardown;

/// The example a context runs with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Example {
    /// The context is not parameterised.
    Absent,
    /// Rendered example value.
    Value(String),
}

/// Marker passed to context hooks when a context runs without an example.
pub const NO_EXAMPLE: Example = Example::Absent;

/// Extension points for observing and steering discovery and reporting.
///
/// Hooks are called one plugin at a time, in registration order, through [`PluginSet`].
#[allow(unused_variables)]
pub trait Plugin {
    /// Called at the beginning of a test run.
    fn test_run_started(&mut self) {}
    /// Called at the end of a test run.
    fn test_run_ended(&mut self) {}

    /// Called at the start of a suite.
    fn suite_started(&mut self, name: &str) {}
    /// Called at the end of a suite.
    fn suite_ended(&mut self, name: &str) {}

    fn context_started(&mut self, name: &str, example: &Example) {}
    fn context_ended(&mut self, name: &str, example: &Example) {}
    /// Called when a setup, action or teardown step (not an assertion) fails.
    fn context_errored(&mut self, name: &str, example: &Example, error: &(dyn Error + 'static)) {}

    fn assertion_started(&mut self, name: &str) {}
    fn assertion_passed(&mut self, name: &str) {}
    /// Called when an assertion fails because of an unexpected error rather than a failed expectation.
    fn assertion_errored(&mut self, name: &str, error: &(dyn Error + 'static)) {}
    /// Called when an assertion's expectation does not hold.
    fn assertion_failed(&mut self, name: &str, error: &(dyn Error + 'static)) {}

    /// Called when an error occurs outside of any context or assertion.
    fn unexpected_error(&mut self, error: &(dyn Error + 'static)) {}

    /// Should the runner descend into `folder`? Answer [`TEST_FOLDER`] or `None`.
    fn identify_folder(&mut self, folder: &Path) -> Option<Identity> {
        None
    }
    /// Should the runner load `file`? Answer [`TEST_FILE`] or `None`.
    fn identify_file(&mut self, file: &Path) -> Option<Identity> {
        None
    }
    /// Is `class` a spec? Answer [`CONTEXT`] or `None`.
    fn identify_class(&mut self, class: &SpecClass) -> Option<Identity> {
        None
    }
    /// Which role does `method` play? Answer one of [`EXAMPLES`], [`SETUP`], [`ACTION`], [`ASSERTION`],
    /// [`TEARDOWN`], or `None`.
    fn identify_method(&mut self, method: &MethodRef) -> Option<Identity> {
        None
    }

    /// Called with every module found. May reorder, filter or extend the list in place.
    fn process_module_list(&mut self, modules: &mut Vec<SpecModule>) {}
    /// Called with the spec classes found in one module. May reorder, filter or extend the list in place.
    fn process_class_list(&mut self, classes: &mut Vec<SpecClass>) {}
    /// Called with the assertions found on one spec. May reorder, filter or extend the list in place.
    fn process_assertion_list(&mut self, assertions: &mut Vec<MethodRef>) {}

    /// Supply the module `name` found under `location`, or `None` to defer to default loading.
    fn import_module(&mut self, location: &Path, name: &str) -> Option<SpecModule> {
        None
    }

    /// Override the process exit code, or `None` to keep the default.
    fn get_exit_code(&mut self) -> Option<i32> {
        None
    }
}
