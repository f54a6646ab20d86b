//! Immutable values handed to the execution engine: [`Assertion`], [`Context`] and [`Suite`].

use crate::spec::MethodRef;

/// An assertion step paired with its display name (`module.Type.method`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    method: MethodRef,
    name: String,
}

impl Assertion {
    pub fn new(method: MethodRef, name: impl Into<String>) -> Self {
        Self {
            method,
            name: name.into(),
        }
    }

    pub fn method(&self) -> &MethodRef {
        &self.method
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The steps of one spec, grouped by role, plus a display name.
///
/// Never mutated after construction; the engine runs setups, actions, each assertion, then teardowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    setups: Vec<MethodRef>,
    actions: Vec<MethodRef>,
    assertions: Vec<Assertion>,
    teardowns: Vec<MethodRef>,
    name: String,
}

impl Context {
    pub fn new(
        setups: Vec<MethodRef>,
        actions: Vec<MethodRef>,
        assertions: Vec<Assertion>,
        teardowns: Vec<MethodRef>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            setups,
            actions,
            assertions,
            teardowns,
            name: name.into(),
        }
    }

    pub fn setups(&self) -> &[MethodRef] {
        &self.setups
    }

    pub fn actions(&self) -> &[MethodRef] {
        &self.actions
    }

    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    pub fn teardowns(&self) -> &[MethodRef] {
        &self.teardowns
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered collection of contexts built from one input source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suite {
    contexts: Vec<Context>,
}

impl Suite {
    pub fn new(contexts: Vec<Context>) -> Self {
        Self { contexts }
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Context> {
        self.contexts.iter()
    }
}

impl IntoIterator for Suite {
    type Item = Context;
    type IntoIter = std::vec::IntoIter<Context>;

    fn into_iter(self) -> Self::IntoIter {
        self.contexts.into_iter()
    }
}

impl<'a> IntoIterator for &'a Suite {
    type Item = &'a Context;
    type IntoIter = std::slice::Iter<'a, Context>;

    fn into_iter(self) -> Self::IntoIter {
        self.contexts.iter()
    }
}
