//! Context and suite assembly.
//!
//! Every builder takes the [`Finder`] that classifies methods. Builders are all-or-nothing: the first
//! error aborts the build and no partial suite is returned.

use std::collections::HashSet;

use crate::errors::{BuildError, BuildResult, MethodNamingError};
use crate::finders::Finder;
use crate::model::{Assertion, Context, Suite};
use crate::spec::{MethodRef, SpecClass, SpecInstance, SpecModule};

/// Build one context per spec, preserving the iterator's order.
#[tracing::instrument(skip_all)]
pub fn build_suite_from_iterable<F, I>(finder: &mut F, specs: I) -> BuildResult<Suite>
where
    F: Finder + ?Sized,
    I: IntoIterator<Item = SpecInstance>,
{
    let contexts = specs
        .into_iter()
        .map(|spec| build_context(&mut *finder, &spec).map_err(BuildError::from))
        .collect::<BuildResult<Vec<_>>>()?;
    tracing::debug!(context_count = contexts.len(), "built suite");
    Ok(Suite::new(contexts))
}

/// Build a suite from the specs the finder extracts from `module`, in the order it returns them.
#[tracing::instrument(skip_all, fields(module = module.name()))]
pub fn build_suite_from_module<F>(finder: &mut F, module: &SpecModule) -> BuildResult<Suite>
where
    F: Finder + ?Sized,
{
    let specs = finder.get_contexts_from_module(module)?;
    build_suite_from_iterable(finder, specs)
}

/// Construct `class` with no arguments and build a single-context suite from the instance.
///
/// A constructor failure is returned as [`BuildError::Construction`] with the constructor's error as
/// its source.
#[tracing::instrument(skip_all, fields(class = class.name()))]
pub fn build_suite_from_class<F>(finder: &mut F, class: &SpecClass) -> BuildResult<Suite>
where
    F: Finder + ?Sized,
{
    let spec = class
        .instantiate()
        .map_err(|source| BuildError::construction(class.name(), source))?;
    build_suite_from_instance(finder, spec)
}

/// Build a suite holding exactly one context.
pub fn build_suite_from_instance<F>(finder: &mut F, spec: SpecInstance) -> BuildResult<Suite>
where
    F: Finder + ?Sized,
{
    let context = build_context(finder, &spec)?;
    Ok(Suite::new(vec![context]))
}

/// Classify the methods of `spec`, check that no method plays two roles, and assemble a [`Context`]
/// named after the spec type.
#[tracing::instrument(skip_all, fields(spec = spec.name()))]
pub fn build_context<F>(finder: &mut F, spec: &SpecInstance) -> Result<Context, MethodNamingError>
where
    F: Finder + ?Sized,
{
    let setups = finder.find_setups(spec);
    let actions = finder.find_actions(spec);
    let assertions = finder.find_assertions(spec);
    let teardowns = finder.find_teardowns(spec);
    let examples = finder.find_examples(spec);

    assert_no_ambiguous_methods(&[
        setups.as_slice(),
        actions.as_slice(),
        assertions.as_slice(),
        teardowns.as_slice(),
        examples.as_slice(),
    ])?;

    let assertions = assertions
        .into_iter()
        .map(|method| {
            let name = build_assertion_name(&method);
            Assertion::new(method, name)
        })
        .collect();

    Ok(Context::new(setups, actions, assertions, teardowns, spec.name()))
}

/// `"{module}.{Type}.{method}"`: the module of the bound instance's spec type, then the method's
/// qualified name.
pub fn build_assertion_name(method: &MethodRef) -> String {
    format!("{}.{}", method.spec().module, method.qualname())
}

/// Fail if any method appears in more than one bucket.
///
/// Every pair of buckets is intersected; the error lists the union of all overlaps, each method once,
/// in the order the overlaps were found.
pub fn assert_no_ambiguous_methods(buckets: &[&[MethodRef]]) -> Result<(), MethodNamingError> {
    let sets: Vec<HashSet<&MethodRef>> = buckets.iter().map(|bucket| bucket.iter().collect()).collect();

    let mut reported = HashSet::new();
    let mut ambiguous = Vec::new();
    for (i, bucket) in buckets.iter().enumerate() {
        for other in &sets[i + 1..] {
            for method in bucket.iter().filter(|m| other.contains(m)) {
                if reported.insert(method) {
                    ambiguous.push(method.qualname());
                }
            }
        }
    }

    if ambiguous.is_empty() {
        Ok(())
    } else {
        tracing::debug!(methods = ?ambiguous, "ambiguously named methods");
        Err(MethodNamingError::new(ambiguous))
    }
}
