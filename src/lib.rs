#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
//! Behaviour-driven test harness core.
//!
//! Specs are plain types whose methods play one of four roles: setup, action, assertion or teardown.
//! This crate discovers those roles (by explicit tag, plugin hook or naming convention), validates that
//! no method plays two roles, and assembles immutable [`Context`]s and [`Suite`]s for an execution
//! engine to run. The [`Plugin`] trait defines how external components observe and steer that process.
//!
//! ```
//! use contexts::{ConventionFinder, build_suite_from_instance};
//!
//! #[derive(Default)]
//! struct WhenAddingNumbers {
//!     total: i64,
//! }
//!
//! #[contexts::spec]
//! impl WhenAddingNumbers {
//!     fn given_an_empty_total(&mut self) {
//!         self.total = 0;
//!     }
//!
//!     fn because_two_and_three_are_added(&mut self) {
//!         self.total += 2 + 3;
//!     }
//!
//!     fn it_should_be_five(&self) {
//!         assert_eq!(self.total, 5);
//!     }
//! }
//!
//! let mut finder = ConventionFinder::new();
//! let suite = build_suite_from_instance(&mut finder, WhenAddingNumbers::default().into()).unwrap();
//! let context = &suite.contexts()[0];
//! assert_eq!(context.name(), "WhenAddingNumbers");
//! assert_eq!(context.assertions().len(), 1);
//! ```
//!
//! ## Panic Policy
//!
//! Library code returns `Result` and never unwraps; `.unwrap()` is fine in tests. Step bodies may panic
//! (`assert!`), which is the execution engine's concern, not this crate's.

extern crate self as contexts;

pub mod builders;
pub mod config;
pub mod errors;
pub mod finders;
pub mod model;
pub mod plugins;
pub mod spec;

pub use contexts_core::Role;
pub use contexts_derive::spec;

pub use builders::{
    assert_no_ambiguous_methods, build_assertion_name, build_context, build_suite_from_class,
    build_suite_from_instance, build_suite_from_iterable, build_suite_from_module,
};
pub use config::NamingConventions;
pub use errors::{BuildError, BuildResult, MethodNamingError};
pub use finders::{ConventionFinder, Finder};
pub use model::{Assertion, Context, Suite};
pub use plugins::{Example, Identity, Plugin, PluginSet};
pub use spec::{
    MethodBody, MethodDef, MethodInfo, MethodRef, Spec, SpecClass, SpecInfo, SpecInstance, SpecModule, StepError,
    StepResult,
};
