//! Method and spec discovery.
//!
//! [`Finder`] is the boundary the builders depend on; [`ConventionFinder`] is the default implementation,
//! classifying by explicit tags, plugin answers and naming conventions.

use std::path::Path;

use contexts_core::roles;

use crate::Role;
use crate::config::NamingConventions;
use crate::errors::{BuildError, BuildResult};
use crate::plugins::{CONTEXT, Plugin, PluginSet, TEST_FILE, TEST_FOLDER};
use crate::spec::{MethodRef, SpecInstance, SpecModule};

/// Classifies spec methods into roles and extracts specs from modules.
///
/// Each `find_*` returns methods in declaration order. The builders verify that the four step lists
/// and the examples list are disjoint, so an implementation may return the same method from several
/// finders; that is reported as a naming error rather than resolved here.
pub trait Finder {
    fn find_setups(&mut self, spec: &SpecInstance) -> Vec<MethodRef>;

    fn find_actions(&mut self, spec: &SpecInstance) -> Vec<MethodRef>;

    fn find_assertions(&mut self, spec: &SpecInstance) -> Vec<MethodRef>;

    fn find_teardowns(&mut self, spec: &SpecInstance) -> Vec<MethodRef>;

    /// Methods that supply example data. They never become steps, but they take part in the
    /// ambiguity check.
    #[allow(unused_variables)]
    fn find_examples(&mut self, spec: &SpecInstance) -> Vec<MethodRef> {
        Vec::new()
    }

    /// Instantiate the specs of a module, in the order they should run.
    fn get_contexts_from_module(&mut self, module: &SpecModule) -> BuildResult<Vec<SpecInstance>>;
}

/// Role claims for every method of one spec. A method may appear under several roles.
#[derive(Debug, Default)]
struct Classification {
    spec: Option<SpecInstance>,
    setups: Vec<MethodRef>,
    actions: Vec<MethodRef>,
    assertions: Vec<MethodRef>,
    teardowns: Vec<MethodRef>,
    examples: Vec<MethodRef>,
}

impl Classification {
    fn bucket_mut(&mut self, role: Role) -> &mut Vec<MethodRef> {
        match role {
            Role::Setup => &mut self.setups,
            Role::Action => &mut self.actions,
            Role::Assertion => &mut self.assertions,
            Role::Teardown => &mut self.teardowns,
            Role::Examples => &mut self.examples,
        }
    }
}

/// Default [`Finder`]: tags first, then plugins, then naming conventions.
///
/// For each method, in declaration order:
/// 1. an explicit tag (`#[setup]`, `MethodDef::setup`, ...) decides alone;
/// 2. otherwise the first plugin whose `identify_method` names a method role decides alone;
/// 3. otherwise the method is claimed by **every** role whose keywords match its name, so
///    `establish_because` ends up as both setup and action and the build fails.
///
/// Methods resolved to [`Role::Examples`] are returned by `find_examples` and left out of every step
/// list. A name that matches the examples keywords and a step keyword (`given_some_data`) is claimed by
/// both and reported as ambiguous.
#[derive(Debug, Default)]
pub struct ConventionFinder {
    conventions: NamingConventions,
    plugins: PluginSet,
    classification: Classification,
}

impl ConventionFinder {
    /// Create a finder with the default conventions and no plugins
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conventions(mut self, conventions: NamingConventions) -> Self {
        self.conventions = conventions;
        self
    }

    pub fn with_plugins(mut self, plugins: PluginSet) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn conventions(&self) -> &NamingConventions {
        &self.conventions
    }

    pub fn plugins_mut(&mut self) -> &mut PluginSet {
        self.classification = Classification::default();
        &mut self.plugins
    }

    /// Give the plugins back, e.g. to hand them to the execution engine.
    pub fn into_plugins(self) -> PluginSet {
        self.plugins
    }

    /// Whether the runner should descend into `folder`: a plugin answer first, the folder convention
    /// otherwise.
    pub fn is_test_folder(&mut self, folder: &Path) -> bool {
        if let Some(identity) = self.plugins.identify_folder(folder) {
            return identity == TEST_FOLDER;
        }
        file_name(folder).is_some_and(|name| self.conventions.folder_matches(name))
    }

    /// Whether the runner should load `file`: a plugin answer first, the file convention otherwise.
    pub fn is_test_file(&mut self, file: &Path) -> bool {
        if let Some(identity) = self.plugins.identify_file(file) {
            return identity == TEST_FILE;
        }
        file_name(file).is_some_and(|name| self.conventions.file_matches(name))
    }

    /// Roles claimed by one method.
    fn roles_of(&mut self, method: &MethodRef) -> Vec<Role> {
        if let Some(tag) = method.info().tag {
            return vec![tag];
        }
        if let Some(identity) = self.plugins.identify_method(method) {
            match identity.role() {
                Some(role) => {
                    tracing::debug!(method = %method.qualname(), ?role, "role assigned by plugin");
                    return vec![role];
                }
                None => tracing::warn!(
                    method = %method.qualname(),
                    "plugin answered identify_method with a non-method identity; ignoring it"
                ),
            }
        }
        roles::ROLES
            .iter()
            .map(|info| info.id)
            .filter(|role| self.conventions.method_matches(*role, method.name()))
            .collect()
    }

    /// Classify `spec`, reusing the previous result when asked about the same instance again.
    fn classify(&mut self, spec: &SpecInstance) -> &Classification {
        let cached = self
            .classification
            .spec
            .as_ref()
            .is_some_and(|previous| previous.same_instance(spec));
        if !cached {
            let mut classification = Classification {
                spec: Some(spec.clone()),
                ..Classification::default()
            };
            for method in spec.methods() {
                for role in self.roles_of(method) {
                    classification.bucket_mut(role).push(method.clone());
                }
            }
            self.plugins.process_assertion_list(&mut classification.assertions);
            tracing::debug!(
                spec = spec.name(),
                setups = classification.setups.len(),
                actions = classification.actions.len(),
                assertions = classification.assertions.len(),
                teardowns = classification.teardowns.len(),
                examples = classification.examples.len(),
                "classified spec methods"
            );
            self.classification = classification;
        }
        &self.classification
    }
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

impl Finder for ConventionFinder {
    fn find_setups(&mut self, spec: &SpecInstance) -> Vec<MethodRef> {
        self.classify(spec).setups.clone()
    }

    fn find_actions(&mut self, spec: &SpecInstance) -> Vec<MethodRef> {
        self.classify(spec).actions.clone()
    }

    fn find_assertions(&mut self, spec: &SpecInstance) -> Vec<MethodRef> {
        self.classify(spec).assertions.clone()
    }

    fn find_teardowns(&mut self, spec: &SpecInstance) -> Vec<MethodRef> {
        self.classify(spec).teardowns.clone()
    }

    fn find_examples(&mut self, spec: &SpecInstance) -> Vec<MethodRef> {
        self.classify(spec).examples.clone()
    }

    #[tracing::instrument(skip_all, fields(module = module.name(), class_count = module.classes().len()))]
    fn get_contexts_from_module(&mut self, module: &SpecModule) -> BuildResult<Vec<SpecInstance>> {
        let mut classes: Vec<_> = module
            .classes()
            .iter()
            .filter(|class| match self.plugins.identify_class(class) {
                Some(identity) => identity == CONTEXT,
                None => self.conventions.class_matches(class.name()),
            })
            .cloned()
            .collect();

        self.plugins.process_class_list(&mut classes);

        classes
            .iter()
            .map(|class| {
                class
                    .instantiate()
                    .map_err(|source| BuildError::construction(class.name(), source))
            })
            .collect()
    }
}
