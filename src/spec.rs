//! Spec model: user scenario types, their method tables, and bound methods.
//!
//! A spec is any `'static` type implementing [`Spec`]. The trait is usually generated by
//! `#[contexts::spec]`, but it can be written by hand with the [`MethodDef`] constructors:
//!
//! ```
//! use contexts::{MethodDef, Spec, SpecInfo};
//!
//! #[derive(Default)]
//! struct WhenPushing {
//!     stack: Vec<i32>,
//! }
//!
//! impl Spec for WhenPushing {
//!     fn spec_info() -> SpecInfo {
//!         SpecInfo::new("WhenPushing", module_path!())
//!     }
//!
//!     fn methods() -> Vec<MethodDef<Self>> {
//!         vec![
//!             MethodDef::action("WhenPushing", "push", |s: &mut Self| {
//!                 s.stack.push(1);
//!                 Ok(())
//!             }),
//!             MethodDef::assertion("WhenPushing", "has_one_item", |s: &mut Self| {
//!                 assert_eq!(s.stack.len(), 1);
//!                 Ok(())
//!             }),
//!         ]
//!     }
//! }
//! ```
//!
//! ## Ownership
//!
//! [`SpecInstance`] erases the concrete type. The instance lives behind `Rc<RefCell<_>>` shared by all of
//! its [`MethodRef`]s, so a context keeps its spec alive for as long as any step is reachable. Everything
//! here is single-threaded by construction (`!Send`).

use std::any::Any;
use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::Role;

/// Error returned by a failing step or a failing spec constructor.
pub type StepError = Box<dyn Error + Send + Sync + 'static>;

/// Outcome of running one step.
pub type StepResult = Result<(), StepError>;

/// Body of a step: a plain function over the spec instance.
pub type MethodBody<S> = fn(&mut S) -> StepResult;

/// Static identity of a spec type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecInfo {
    /// Type name, used as the context's display name.
    pub name: &'static str,
    /// Defining module path (`module_path!()` at the declaration site).
    pub module: &'static str,
}

impl SpecInfo {
    pub const fn new(name: &'static str, module: &'static str) -> Self {
        Self { name, module }
    }
}

/// Static identity of one spec method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodInfo {
    /// Qualified name of the type that defines the method.
    pub owner: &'static str,
    pub name: &'static str,
    /// Explicit role, if the method was tagged. Tags win over naming conventions.
    pub tag: Option<Role>,
}

impl MethodInfo {
    /// `"{owner}.{name}"`, e.g. `WhenAdding.it_should_sum`.
    pub fn qualname(&self) -> String {
        format!("{}.{}", self.owner, self.name)
    }
}

/// One entry of a spec's method table.
pub struct MethodDef<S> {
    pub info: MethodInfo,
    pub body: MethodBody<S>,
}

// Manual impls: derives would require `S: Clone`.
impl<S> Clone for MethodDef<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for MethodDef<S> {}

impl<S> fmt::Debug for MethodDef<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDef").field("info", &self.info).finish_non_exhaustive()
    }
}

impl<S> MethodDef<S> {
    pub fn new(owner: &'static str, name: &'static str, tag: Option<Role>, body: MethodBody<S>) -> Self {
        Self {
            info: MethodInfo { owner, name, tag },
            body,
        }
    }

    /// An untagged method; its role comes from plugins or naming conventions.
    pub fn untagged(owner: &'static str, name: &'static str, body: MethodBody<S>) -> Self {
        Self::new(owner, name, None, body)
    }

    pub fn setup(owner: &'static str, name: &'static str, body: MethodBody<S>) -> Self {
        Self::new(owner, name, Some(Role::Setup), body)
    }

    pub fn action(owner: &'static str, name: &'static str, body: MethodBody<S>) -> Self {
        Self::new(owner, name, Some(Role::Action), body)
    }

    pub fn assertion(owner: &'static str, name: &'static str, body: MethodBody<S>) -> Self {
        Self::new(owner, name, Some(Role::Assertion), body)
    }

    pub fn teardown(owner: &'static str, name: &'static str, body: MethodBody<S>) -> Self {
        Self::new(owner, name, Some(Role::Teardown), body)
    }

    pub fn examples(owner: &'static str, name: &'static str, body: MethodBody<S>) -> Self {
        Self::new(owner, name, Some(Role::Examples), body)
    }
}

/// A scenario type that can be assembled into a context.
///
/// `methods()` lists candidate steps in declaration order. Which role each plays is decided later by a
/// [`Finder`](crate::Finder); the table itself carries only names and optional tags.
pub trait Spec: Sized + 'static {
    fn spec_info() -> SpecInfo;

    fn methods() -> Vec<MethodDef<Self>>;
}

/// A method bound to one spec instance.
///
/// Two `MethodRef`s are equal when they refer to the same method of the same instance, mirroring
/// bound-method equality. The same method bound to two different instances is two different refs.
#[derive(Clone)]
pub struct MethodRef {
    spec: SpecInfo,
    info: MethodInfo,
    instance: usize,
    invoke: Rc<dyn Fn() -> StepResult>,
}

impl MethodRef {
    /// The spec type of the instance this method is bound to.
    pub fn spec(&self) -> SpecInfo {
        self.spec
    }

    pub fn info(&self) -> MethodInfo {
        self.info
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    pub fn qualname(&self) -> String {
        self.info.qualname()
    }

    /// Run the step against its instance.
    ///
    /// Fails without running the body if the instance is already mutably borrowed, which only happens
    /// when a step re-enters another step of the same spec.
    pub fn call(&self) -> StepResult {
        (self.invoke)()
    }
}

impl PartialEq for MethodRef {
    fn eq(&self, other: &Self) -> bool {
        self.instance == other.instance && self.info.owner == other.info.owner && self.info.name == other.info.name
    }
}

impl Eq for MethodRef {}

impl Hash for MethodRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instance.hash(state);
        self.info.owner.hash(state);
        self.info.name.hash(state);
    }
}

impl fmt::Debug for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodRef")
            .field("spec", &self.spec.name)
            .field("method", &self.info.qualname())
            .field("tag", &self.info.tag)
            .finish_non_exhaustive()
    }
}

/// A type-erased spec instance with its bound methods in declaration order.
#[derive(Clone)]
pub struct SpecInstance {
    info: SpecInfo,
    anchor: Rc<dyn Any>,
    methods: Vec<MethodRef>,
}

impl SpecInstance {
    pub fn new<S: Spec>(spec: S) -> Self {
        let info = S::spec_info();
        let cell = Rc::new(RefCell::new(spec));
        let instance = Rc::as_ptr(&cell) as *const () as usize;

        let methods = S::methods()
            .into_iter()
            .map(|def| {
                let target = Rc::clone(&cell);
                let body = def.body;
                MethodRef {
                    spec: info,
                    info: def.info,
                    instance,
                    invoke: Rc::new(move || {
                        let mut guard = target.try_borrow_mut()?;
                        body(&mut *guard)
                    }),
                }
            })
            .collect();

        Self {
            info,
            anchor: cell,
            methods,
        }
    }

    pub fn info(&self) -> SpecInfo {
        self.info
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    pub fn methods(&self) -> &[MethodRef] {
        &self.methods
    }

    /// Whether both handles refer to the same underlying spec value.
    pub fn same_instance(&self, other: &SpecInstance) -> bool {
        Rc::ptr_eq(&self.anchor, &other.anchor)
    }
}

impl<S: Spec> From<S> for SpecInstance {
    fn from(spec: S) -> Self {
        Self::new(spec)
    }
}

impl fmt::Debug for SpecInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecInstance")
            .field("info", &self.info)
            .field("methods", &self.methods.len())
            .finish()
    }
}

type Constructor = Rc<dyn Fn() -> Result<SpecInstance, StepError>>;

/// A spec type together with its zero-argument constructor.
#[derive(Clone)]
pub struct SpecClass {
    info: SpecInfo,
    construct: Constructor,
}

impl SpecClass {
    /// A class constructed through `Default`.
    pub fn of<S: Spec + Default>() -> Self {
        Self {
            info: S::spec_info(),
            construct: Rc::new(|| -> Result<SpecInstance, StepError> { Ok(SpecInstance::new(S::default())) }),
        }
    }

    /// A class with a fallible constructor. Constructor errors are surfaced unchanged by the builders.
    pub fn from_fn<S, F>(construct: F) -> Self
    where
        S: Spec,
        F: Fn() -> Result<S, StepError> + 'static,
    {
        Self {
            info: S::spec_info(),
            construct: Rc::new(move || construct().map(SpecInstance::new)),
        }
    }

    pub fn info(&self) -> SpecInfo {
        self.info
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    /// Create a fresh instance.
    pub fn instantiate(&self) -> Result<SpecInstance, StepError> {
        (self.construct)()
    }
}

impl fmt::Debug for SpecClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecClass").field("info", &self.info).finish_non_exhaustive()
    }
}

/// A named, ordered group of spec classes.
///
/// This stands in for a module object: discovery collaborators hand modules to the suite builder, and
/// plugins may supply their own through [`Plugin::import_module`](crate::Plugin::import_module).
#[derive(Debug, Clone)]
pub struct SpecModule {
    name: String,
    location: Option<PathBuf>,
    classes: Vec<SpecClass>,
}

impl SpecModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
            classes: Vec::new(),
        }
    }

    /// Set the folder the module was loaded from.
    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Register a class.
    pub fn with_class(mut self, class: SpecClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Register a `Default`-constructible spec type.
    pub fn with_spec<S: Spec + Default>(self) -> Self {
        self.with_class(SpecClass::of::<S>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    pub fn classes(&self) -> &[SpecClass] {
        &self.classes
    }
}
