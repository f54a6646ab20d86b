use std::error::Error;
use std::fmt;
use std::path::Path;

use super::{Example, Identity, Plugin};
use crate::spec::{MethodRef, SpecClass, SpecModule};

/// An ordered list of plugins that behaves as a single plugin.
///
/// - Notifications are broadcast to every plugin in registration order.
/// - List hooks are applied by every plugin in turn, each seeing the previous plugin's edits.
/// - Hooks that return an answer resolve to the first plugin that has an opinion; later plugins are not
///   consulted.
#[derive(Default)]
pub struct PluginSet {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin after all previously registered ones.
    pub fn push(&mut self, plugin: impl Plugin + 'static) {
        self.plugins.push(Box::new(plugin));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, plugin: impl Plugin + 'static) -> Self {
        self.push(plugin);
        self
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    fn first_answer<T>(&mut self, mut ask: impl FnMut(&mut dyn Plugin) -> Option<T>) -> Option<T> {
        self.plugins.iter_mut().find_map(|plugin| ask(plugin.as_mut()))
    }

    fn broadcast(&mut self, mut notify: impl FnMut(&mut dyn Plugin)) {
        for plugin in &mut self.plugins {
            notify(plugin.as_mut());
        }
    }
}

impl fmt::Debug for PluginSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginSet").field("len", &self.plugins.len()).finish()
    }
}

impl Plugin for PluginSet {
    fn test_run_started(&mut self) {
        self.broadcast(|p| p.test_run_started());
    }

    fn test_run_ended(&mut self) {
        self.broadcast(|p| p.test_run_ended());
    }

    fn suite_started(&mut self, name: &str) {
        self.broadcast(|p| p.suite_started(name));
    }

    fn suite_ended(&mut self, name: &str) {
        self.broadcast(|p| p.suite_ended(name));
    }

    fn context_started(&mut self, name: &str, example: &Example) {
        self.broadcast(|p| p.context_started(name, example));
    }

    fn context_ended(&mut self, name: &str, example: &Example) {
        self.broadcast(|p| p.context_ended(name, example));
    }

    fn context_errored(&mut self, name: &str, example: &Example, error: &(dyn Error + 'static)) {
        self.broadcast(|p| p.context_errored(name, example, error));
    }

    fn assertion_started(&mut self, name: &str) {
        self.broadcast(|p| p.assertion_started(name));
    }

    fn assertion_passed(&mut self, name: &str) {
        self.broadcast(|p| p.assertion_passed(name));
    }

    fn assertion_errored(&mut self, name: &str, error: &(dyn Error + 'static)) {
        self.broadcast(|p| p.assertion_errored(name, error));
    }

    fn assertion_failed(&mut self, name: &str, error: &(dyn Error + 'static)) {
        self.broadcast(|p| p.assertion_failed(name, error));
    }

    fn unexpected_error(&mut self, error: &(dyn Error + 'static)) {
        self.broadcast(|p| p.unexpected_error(error));
    }

    fn identify_folder(&mut self, folder: &Path) -> Option<Identity> {
        self.first_answer(|p| p.identify_folder(folder))
    }

    fn identify_file(&mut self, file: &Path) -> Option<Identity> {
        self.first_answer(|p| p.identify_file(file))
    }

    fn identify_class(&mut self, class: &SpecClass) -> Option<Identity> {
        self.first_answer(|p| p.identify_class(class))
    }

    fn identify_method(&mut self, method: &MethodRef) -> Option<Identity> {
        self.first_answer(|p| p.identify_method(method))
    }

    fn process_module_list(&mut self, modules: &mut Vec<SpecModule>) {
        self.broadcast(|p| p.process_module_list(modules));
    }

    fn process_class_list(&mut self, classes: &mut Vec<SpecClass>) {
        self.broadcast(|p| p.process_class_list(classes));
    }

    fn process_assertion_list(&mut self, assertions: &mut Vec<MethodRef>) {
        self.broadcast(|p| p.process_assertion_list(assertions));
    }

    fn import_module(&mut self, location: &Path, name: &str) -> Option<SpecModule> {
        self.first_answer(|p| p.import_module(location, name))
    }

    fn get_exit_code(&mut self) -> Option<i32> {
        self.first_answer(|p| p.get_exit_code())
    }
}
