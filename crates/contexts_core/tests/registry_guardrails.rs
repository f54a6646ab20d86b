use std::collections::HashMap;

use contexts_core::conventions;
use contexts_core::roles::{self, Role};

#[test]
fn role_attributes_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, Role> = HashMap::new();

    for info in roles::ROLES {
        assert_eq!(
            roles::from_attribute(info.attribute),
            Some(info.id),
            "role attribute not resolvable: {}",
            info.attribute
        );
        if let Some(prev) = seen.insert(info.attribute, info.id) {
            panic!("duplicate role attribute {:?}: {:?} and {:?}", info.attribute, prev, info.id);
        }
    }
}

#[test]
fn role_keywords_do_not_collide_across_roles() {
    let mut seen: HashMap<&'static str, Role> = HashMap::new();

    for info in roles::ROLES {
        assert!(!info.keywords.is_empty(), "role {:?} has no keywords", info.id);
        for &keyword in info.keywords {
            assert_eq!(keyword, keyword.to_ascii_lowercase(), "keyword {keyword:?} must be lowercase");
            if let Some(prev) = seen.insert(keyword, info.id) {
                panic!("keyword {keyword:?} claimed by both {prev:?} and {:?}", info.id);
            }
        }
    }
}

#[test]
fn every_keyword_matches_itself_as_a_method_name() {
    for info in roles::ROLES {
        for &keyword in info.keywords {
            let name = format!("{keyword}_something");
            assert!(
                conventions::any_word_matches(&conventions::method_words(&name), info.keywords),
                "{name} should match {:?}",
                info.id
            );
        }
    }
}

#[test]
fn location_keywords_are_lowercase() {
    for list in [conventions::CLASS_KEYWORDS, conventions::FILE_KEYWORDS, conventions::FOLDER_KEYWORDS] {
        for keyword in list {
            assert_eq!(*keyword, keyword.to_ascii_lowercase());
        }
    }
}
