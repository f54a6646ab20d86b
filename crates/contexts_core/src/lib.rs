//! Provide the shared naming vocabulary for the `contexts` test harness.
//!
//! Both the runtime library (convention-based method classification) and the `#[spec]` procedural
//! macro (attribute tags) need to agree on the same spellings. Keeping them here avoids stringly-typed
//! checks scattered across crates.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, no dependencies.
//! - Matching helpers are pure functions over `&str`; configuration (overriding keyword lists) lives in the
//!   `contexts` crate.
//!
//! ## Examples
//! ```rust
//! use contexts_core::roles::{self, Role};
//!
//! assert_eq!(roles::from_attribute("setup"), Some(Role::Setup));
//! assert!(roles::keywords(Role::Assertion).contains(&"should"));
//! ```

pub mod conventions;
pub mod roles;

pub use roles::Role;
