//! Method role vocabulary registry.
//!
//! A spec method plays exactly one role in a context. This module centralizes, per role:
//! - the attribute spelling used for explicit tagging (`#[setup]`, `#[assertion]`, ...)
//! - the default naming-convention keywords used when a method carries no tag
//!
//! ## Notes
//! - Attribute matching is **case-sensitive** (Rust attribute paths are case-sensitive).
//! - Keyword matching is ASCII case-insensitive and word-based; see [`crate::conventions`].

/// Stable identifier for a method role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Arranges state before the action (`establish_...`, `given_...`).
    Setup,
    /// The behaviour under test (`because_...`, `when_...`).
    Action,
    /// A single observable expectation (`it_...`, `should_...`).
    Assertion,
    /// Releases resources after the assertions ran (`cleanup`).
    Teardown,
    /// Supplies example data for parameterised contexts. Never part of a context's step lists.
    Examples,
}

/// Metadata entry for a role.
#[derive(Debug, Clone, Copy)]
pub struct RoleInfo {
    pub id: Role,
    /// Attribute spelling accepted by `#[spec]` for explicit tagging.
    pub attribute: &'static str,
    /// Default naming-convention keywords.
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of all roles, in execution order.
pub const ROLES: &[RoleInfo] = &[
    RoleInfo {
        id: Role::Setup,
        attribute: "setup",
        keywords: &["establish", "context", "given"],
        description: "Arrange the state the context runs against.",
    },
    RoleInfo {
        id: Role::Action,
        attribute: "action",
        keywords: &["because", "when", "since", "after"],
        description: "Perform the behaviour under test.",
    },
    RoleInfo {
        id: Role::Assertion,
        attribute: "assertion",
        keywords: &["it", "should", "must", "will", "then"],
        description: "Check one expected outcome of the action.",
    },
    RoleInfo {
        id: Role::Teardown,
        attribute: "teardown",
        keywords: &["cleanup"],
        description: "Release resources acquired during setup.",
    },
    RoleInfo {
        id: Role::Examples,
        attribute: "examples",
        keywords: &["examples", "data"],
        description: "Provide example data for a parameterised context.",
    },
];

/// The four roles that make up a context, in execution order.
pub const STEP_ROLES: [Role; 4] = [Role::Setup, Role::Action, Role::Assertion, Role::Teardown];

/// Resolve an attribute spelling (`"setup"`, `"assertion"`, ...) to its role.
pub fn from_attribute(name: &str) -> Option<Role> {
    ROLES.iter().find(|r| r.attribute == name).map(|r| r.id)
}

/// Return the attribute spelling for a role.
pub fn as_attribute(id: Role) -> &'static str {
    info_for(id).attribute
}

/// Return the default naming-convention keywords for a role.
pub fn keywords(id: Role) -> &'static [&'static str] {
    info_for(id).keywords
}

/// Return the metadata entry for a role.
pub fn info_for(id: Role) -> &'static RoleInfo {
    match id {
        Role::Setup => &ROLES[0],
        Role::Action => &ROLES[1],
        Role::Assertion => &ROLES[2],
        Role::Teardown => &ROLES[3],
        Role::Examples => &ROLES[4],
    }
}
