//! Pre-commit task map composition
//!
//! Builds the ordered file-glob to command map embedded under the
//! manifest's `lint-staged` key.

use crate::answers::{AnswerRecord, Feature, Language};
use indexmap::IndexMap;

/// Compose the lint-staged task map for the given answers
pub fn compose(answers: &AnswerRecord) -> IndexMap<String, String> {
    let mut tasks = IndexMap::new();

    tasks.insert("*.json".to_string(), "jsonlint --quiet".to_string());
    tasks.insert("*.{ts,md,yml}".to_string(), "prettier --write".to_string());

    if answers.has_code() {
        if let Some(language) = answers.language {
            let command = match language {
                Language::CoffeeScript => "coffeelint",
                Language::JavaScript | Language::TypeScript => "eslint --cache --fix",
            };
            tasks.insert(format!("*.{}", language.extension()), command.to_string());
        }
    }

    if answers.has_feature(Feature::Styles) {
        tasks.insert("*.{css,less}".to_string(), "stylelint --fix".to_string());
    }

    tasks
}
