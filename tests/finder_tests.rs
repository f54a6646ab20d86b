//! Integration tests for convention-based discovery and the plugin hooks it consults.

mod common;

use std::path::Path;

use common::Journal;
use contexts::plugins::{ACTION, ASSERTION, CONTEXT, SETUP, TEST_FILE, TEST_FOLDER};
use contexts::{
    BuildError, ConventionFinder, Finder, Identity, MethodRef, NamingConventions, Plugin, PluginSet, Role,
    SpecClass, SpecInstance, SpecModule, build_context, build_suite_from_module,
};

#[derive(Default)]
struct WhenTagged;

#[contexts::spec]
impl WhenTagged {
    #[setup]
    fn prepare(&mut self) {}

    #[action]
    fn act(&mut self) {}

    #[assertion]
    fn when_then_should(&self) {}

    #[teardown]
    fn tidy(&mut self) {}

    #[examples]
    fn it_examples(&self) {}
}

#[derive(Default)]
struct WhenUsingCustomWords;

#[contexts::spec]
impl WhenUsingCustomWords {
    fn arrange_the_order(&mut self) {}

    fn act_on_the_order(&mut self) {}

    fn order_total_holds(&self) {}

    fn order_is_shipped_holds(&self) {}
}

#[derive(Default)]
struct Helper;

#[contexts::spec]
impl Helper {
    fn it_is_not_a_spec(&self) {}
}

#[derive(Default)]
struct WhenDataIsSupplied;

#[contexts::spec]
impl WhenDataIsSupplied {
    fn examples(&self) {}

    fn because_we_run(&mut self) {}

    fn it_runs(&self) {}
}

#[derive(Default)]
struct WhenLoadingRows;

#[contexts::spec]
impl WhenLoadingRows {
    fn given_some_data(&mut self) {}

    fn because_rows_are_loaded(&mut self) {}

    fn it_should_return_the_data(&self) {}
}

fn names(methods: &[MethodRef]) -> Vec<&'static str> {
    methods.iter().map(MethodRef::name).collect()
}

/// Classifies by suffix, the way a project with its own naming scheme would.
struct SuffixPlugin;

impl Plugin for SuffixPlugin {
    fn identify_method(&mut self, method: &MethodRef) -> Option<Identity> {
        let name = method.name();
        if name.starts_with("arrange") {
            Some(SETUP)
        } else if name.starts_with("act_") {
            Some(ACTION)
        } else if name.ends_with("_holds") {
            Some(ASSERTION)
        } else {
            None
        }
    }
}

/// Keeps assertions in reverse order and drops anything mentioning `shipped`.
struct ReverseAssertions {
    journal: Journal,
}

impl Plugin for ReverseAssertions {
    fn process_assertion_list(&mut self, assertions: &mut Vec<MethodRef>) {
        self.journal.record(format!("process_assertion_list:{}", assertions.len()));
        assertions.retain(|m| !m.name().contains("shipped"));
        assertions.reverse();
    }
}

#[test]
fn test_tags_override_naming_conventions() {
    common::init_tracing();
    let mut finder = ConventionFinder::new();
    let spec = SpecInstance::new(WhenTagged);

    assert_eq!(names(&finder.find_setups(&spec)), vec!["prepare"]);
    assert_eq!(names(&finder.find_actions(&spec)), vec!["act"]);
    assert_eq!(names(&finder.find_assertions(&spec)), vec!["when_then_should"]);
    assert_eq!(names(&finder.find_teardowns(&spec)), vec!["tidy"]);
}

#[test]
fn test_examples_methods_are_not_steps() {
    let mut finder = ConventionFinder::new();
    let context = build_context(&mut finder, &SpecInstance::new(WhenDataIsSupplied)).unwrap();

    assert!(context.setups().is_empty());
    assert_eq!(names(context.actions()), vec!["because_we_run"]);
    assert_eq!(context.assertions().len(), 1);
    assert!(context.teardowns().is_empty());
}

#[test]
fn test_examples_keyword_next_to_a_step_keyword_is_ambiguous() {
    let mut finder = ConventionFinder::new();
    let spec = SpecInstance::new(WhenLoadingRows);

    assert_eq!(names(&finder.find_examples(&spec)), vec!["given_some_data", "it_should_return_the_data"]);
    let err = build_context(&mut finder, &spec).unwrap_err();

    assert_eq!(
        err.methods,
        vec!["WhenLoadingRows.given_some_data", "WhenLoadingRows.it_should_return_the_data"]
    );
    assert!(!err.mentions("WhenLoadingRows.because_rows_are_loaded"));
}

#[test]
fn test_tagged_examples_method_is_not_ambiguous() {
    let mut finder = ConventionFinder::new();
    let spec = SpecInstance::new(WhenTagged);

    assert_eq!(names(&finder.find_examples(&spec)), vec!["it_examples"]);
    assert!(build_context(&mut finder, &spec).is_ok());
}

#[test]
fn test_untagged_unconventional_methods_are_ignored() {
    let mut finder = ConventionFinder::new();
    let context = build_context(&mut finder, &SpecInstance::new(WhenUsingCustomWords)).unwrap();

    assert!(context.setups().is_empty());
    assert!(context.actions().is_empty());
    assert!(context.assertions().is_empty());
}

#[test]
fn test_plugin_identifies_methods() {
    let mut finder = ConventionFinder::new().with_plugins(PluginSet::new().with(SuffixPlugin));
    let context = build_context(&mut finder, &SpecInstance::new(WhenUsingCustomWords)).unwrap();

    assert_eq!(names(context.setups()), vec!["arrange_the_order"]);
    assert_eq!(names(context.actions()), vec!["act_on_the_order"]);
    let assertions: Vec<_> = context.assertions().iter().map(|a| a.method().name()).collect();
    assert_eq!(assertions, vec!["order_total_holds", "order_is_shipped_holds"]);
}

#[test]
fn test_custom_conventions_replace_keywords() {
    let conventions = NamingConventions::new()
        .with_role_keywords(Role::Setup, ["arrange"])
        .with_role_keywords(Role::Action, ["act"])
        .with_role_keywords(Role::Assertion, ["holds"]);
    let mut finder = ConventionFinder::new().with_conventions(conventions);

    let context = build_context(&mut finder, &SpecInstance::new(WhenUsingCustomWords)).unwrap();

    assert_eq!(names(context.setups()), vec!["arrange_the_order"]);
    assert_eq!(names(context.actions()), vec!["act_on_the_order"]);
    assert_eq!(context.assertions().len(), 2);
}

#[test]
fn test_process_assertion_list_can_filter_and_reorder() {
    let journal = Journal::default();
    let plugins = PluginSet::new()
        .with(SuffixPlugin)
        .with(ReverseAssertions { journal: journal.clone() });
    let mut finder = ConventionFinder::new().with_plugins(plugins);

    let context = build_context(&mut finder, &SpecInstance::new(WhenUsingCustomWords)).unwrap();

    let assertions: Vec<_> = context.assertions().iter().map(|a| a.method().name()).collect();
    assert_eq!(assertions, vec!["order_total_holds"]);
    assert_eq!(journal.entries(), vec!["process_assertion_list:2"]);
}

#[test]
fn test_plugin_answering_with_non_method_identity_is_ignored() {
    struct Confused;

    impl Plugin for Confused {
        fn identify_method(&mut self, _method: &MethodRef) -> Option<Identity> {
            Some(TEST_FOLDER)
        }
    }

    let mut finder = ConventionFinder::new().with_plugins(PluginSet::new().with(Confused));
    let spec = SpecInstance::new(WhenDataIsSupplied);

    assert_eq!(names(&finder.find_actions(&spec)), vec!["because_we_run"]);
}

#[test]
fn test_module_keeps_only_classes_that_look_like_specs() {
    let mut finder = ConventionFinder::new();
    let module = SpecModule::new("mixed").with_spec::<Helper>().with_spec::<WhenTagged>();

    let specs = finder.get_contexts_from_module(&module).unwrap();

    let names: Vec<_> = specs.iter().map(SpecInstance::name).collect();
    assert_eq!(names, vec!["WhenTagged"]);
}

#[test]
fn test_identify_class_and_process_class_list() {
    struct Classes {
        journal: Journal,
    }

    impl Plugin for Classes {
        fn identify_class(&mut self, class: &SpecClass) -> Option<Identity> {
            self.journal.record(format!("identify_class:{}", class.name()));
            (class.name() == "Helper").then_some(CONTEXT)
        }

        fn process_class_list(&mut self, classes: &mut Vec<SpecClass>) {
            classes.reverse();
        }
    }

    let journal = Journal::default();
    let mut finder =
        ConventionFinder::new().with_plugins(PluginSet::new().with(Classes { journal: journal.clone() }));
    let module = SpecModule::new("mixed").with_spec::<WhenTagged>().with_spec::<Helper>();

    let suite = build_suite_from_module(&mut finder, &module).unwrap();

    let names: Vec<_> = suite.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Helper", "WhenTagged"]);
    assert_eq!(journal.entries(), vec!["identify_class:WhenTagged", "identify_class:Helper"]);
}

#[test]
fn test_module_construction_failure_names_the_class() {
    let mut finder = ConventionFinder::new();
    let module = SpecModule::new("broken")
        .with_spec::<WhenTagged>()
        .with_class(SpecClass::from_fn::<WhenDataIsSupplied, _>(|| Err("fixture missing".into())));

    let err = build_suite_from_module(&mut finder, &module).unwrap_err();

    assert!(matches!(err, BuildError::Construction { ref class, .. } if class == "WhenDataIsSupplied"));
}

#[test]
fn test_location_conventions_and_plugin_overrides() {
    struct OnlyFeatures;

    impl Plugin for OnlyFeatures {
        fn identify_folder(&mut self, folder: &Path) -> Option<Identity> {
            folder.ends_with("features").then_some(TEST_FOLDER)
        }

        fn identify_file(&mut self, file: &Path) -> Option<Identity> {
            (file.extension()? == "feature").then_some(TEST_FILE)
        }
    }

    let mut finder = ConventionFinder::new();
    assert!(finder.is_test_folder(Path::new("project/tests")));
    assert!(!finder.is_test_folder(Path::new("project/src")));
    assert!(finder.is_test_file(Path::new("tests/stack_spec.rs")));
    assert!(!finder.is_test_file(Path::new("src/stack.rs")));

    finder.plugins_mut().push(OnlyFeatures);
    assert!(finder.is_test_folder(Path::new("project/features")));
    assert!(finder.is_test_file(Path::new("project/features/checkout.feature")));
    assert!(finder.is_test_file(Path::new("tests/stack_spec.rs")));
}

#[test]
fn test_plugins_are_handed_back_after_discovery() {
    let mut finder = ConventionFinder::new().with_plugins(PluginSet::new().with(SuffixPlugin));
    finder.plugins_mut().push(SuffixPlugin);

    let plugins = finder.into_plugins();

    assert_eq!(plugins.len(), 2);
}
