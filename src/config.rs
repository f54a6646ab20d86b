//! Naming convention configuration.
//!
//! Defaults come from the `contexts_core` registry; each keyword list can be replaced with the `with_*`
//! setters.

use contexts_core::conventions::{self, CLASS_KEYWORDS, FILE_KEYWORDS, FOLDER_KEYWORDS};
use contexts_core::roles;

use crate::Role;

/// Keyword lists used to classify methods, spec types, files and folders by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConventions {
    pub setup_keywords: Vec<String>,
    pub action_keywords: Vec<String>,
    pub assertion_keywords: Vec<String>,
    pub teardown_keywords: Vec<String>,
    pub examples_keywords: Vec<String>,
    pub class_keywords: Vec<String>,
    pub file_keywords: Vec<String>,
    pub folder_keywords: Vec<String>,
}

fn owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}

impl Default for NamingConventions {
    fn default() -> Self {
        Self {
            setup_keywords: owned(roles::keywords(Role::Setup)),
            action_keywords: owned(roles::keywords(Role::Action)),
            assertion_keywords: owned(roles::keywords(Role::Assertion)),
            teardown_keywords: owned(roles::keywords(Role::Teardown)),
            examples_keywords: owned(roles::keywords(Role::Examples)),
            class_keywords: owned(CLASS_KEYWORDS),
            file_keywords: owned(FILE_KEYWORDS),
            folder_keywords: owned(FOLDER_KEYWORDS),
        }
    }
}

impl NamingConventions {
    /// Create conventions with the default keywords
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the keywords for one method role
    pub fn with_role_keywords<I, S>(mut self, role: Role, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.keywords_mut(role) = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the keywords that mark a type as a spec
    pub fn with_class_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the keywords that mark a file as a test file
    pub fn with_file_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the keywords that mark a folder as a test folder
    pub fn with_folder_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folder_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn keywords(&self, role: Role) -> &[String] {
        match role {
            Role::Setup => &self.setup_keywords,
            Role::Action => &self.action_keywords,
            Role::Assertion => &self.assertion_keywords,
            Role::Teardown => &self.teardown_keywords,
            Role::Examples => &self.examples_keywords,
        }
    }

    fn keywords_mut(&mut self, role: Role) -> &mut Vec<String> {
        match role {
            Role::Setup => &mut self.setup_keywords,
            Role::Action => &mut self.action_keywords,
            Role::Assertion => &mut self.assertion_keywords,
            Role::Teardown => &mut self.teardown_keywords,
            Role::Examples => &mut self.examples_keywords,
        }
    }

    /// Whether a method name matches the convention for `role`.
    pub fn method_matches(&self, role: Role, method_name: &str) -> bool {
        conventions::any_word_matches(&conventions::method_words(method_name), self.keywords(role))
    }

    /// Whether a type name looks like a spec.
    pub fn class_matches(&self, type_name: &str) -> bool {
        conventions::any_word_matches(&conventions::type_words(type_name), &self.class_keywords)
    }

    /// Whether a file name looks like a test file.
    pub fn file_matches(&self, file_name: &str) -> bool {
        conventions::any_word_matches(&conventions::path_words(file_name), &self.file_keywords)
    }

    /// Whether a folder name looks like a test folder.
    pub fn folder_matches(&self, folder_name: &str) -> bool {
        conventions::any_word_matches(&conventions::path_words(folder_name), &self.folder_keywords)
    }
}
