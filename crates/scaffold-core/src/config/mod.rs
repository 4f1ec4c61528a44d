//! Configuration derivation - answers in, config documents out
//!
//! Every function in this module is a stateless pure computation over one
//! [`AnswerRecord`]; calling anything twice with the same record yields
//! identical output.

pub mod dependencies;
pub mod formatter;
pub mod lint_staged;
pub mod manifest;
pub mod scripts;

use crate::answers::{AnswerRecord, DerivedFields, Language};
use indexmap::IndexMap;
use serde::Serialize;

pub use formatter::PrettierOptions;
pub use manifest::PackageManifest;

/// Transpiler configuration document, emitted only for JavaScript packages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BabelConfig {
    pub presets: Vec<String>,
}

/// Everything derived from one answer record, owned by the caller
#[derive(Debug, Clone)]
pub struct DerivedConfigBundle {
    pub manifest: PackageManifest,
    pub babel_config: Option<BabelConfig>,
    pub formatter: Option<PrettierOptions>,
    pub lint_staged: IndexMap<String, String>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

/// Run every resolver and compose the full configuration bundle
pub fn derive_bundle(answers: &AnswerRecord, derived: &DerivedFields) -> DerivedConfigBundle {
    let (dependencies, dev_dependencies) = dependencies::resolve(answers);

    let babel_config = (answers.language == Some(Language::JavaScript)).then(|| {
        let mut presets = vec!["@babel/preset-env".to_string()];
        presets.extend(answers.babel_presets.iter().cloned());
        BabelConfig { presets }
    });

    let formatter = answers.eslint_config.as_deref().and_then(formatter::resolve);

    DerivedConfigBundle {
        manifest: manifest::compose(answers, derived),
        babel_config,
        formatter,
        lint_staged: lint_staged::compose(answers),
        dependencies,
        dev_dependencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Bundler, Feature};
    use crate::license::SpdxRegistry;

    fn javascript_answers() -> AnswerRecord {
        AnswerRecord {
            name: "test-package".to_string(),
            author: "someone".to_string(),
            license: "MIT".to_string(),
            features: vec![Feature::Code],
            language: Some(Language::JavaScript),
            bundler: Some(Bundler::Webpack),
            eslint_config: Some("airbnb".to_string()),
            babel_presets: vec!["@babel/preset-react".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_babel_config_only_for_javascript() {
        let answers = javascript_answers();
        let derived = DerivedFields::from_answers(&answers, &SpdxRegistry);
        let bundle = derive_bundle(&answers, &derived);

        let babel = bundle.babel_config.unwrap();
        assert_eq!(
            babel.presets,
            vec!["@babel/preset-env", "@babel/preset-react"]
        );

        let mut ts = javascript_answers();
        ts.language = Some(Language::TypeScript);
        ts.babel_presets.clear();
        let derived = DerivedFields::from_answers(&ts, &SpdxRegistry);
        assert!(derive_bundle(&ts, &derived).babel_config.is_none());
    }

    #[test]
    fn test_formatter_follows_eslint_preset() {
        let answers = javascript_answers();
        let derived = DerivedFields::from_answers(&answers, &SpdxRegistry);
        let bundle = derive_bundle(&answers, &derived);
        assert!(bundle.formatter.is_some());

        let mut unknown = javascript_answers();
        unknown.eslint_config = Some("custom-house-style".to_string());
        let derived = DerivedFields::from_answers(&unknown, &SpdxRegistry);
        assert!(derive_bundle(&unknown, &derived).formatter.is_none());
    }

    #[test]
    fn test_bundle_lists_match_resolver_output() {
        let answers = javascript_answers();
        let derived = DerivedFields::from_answers(&answers, &SpdxRegistry);
        let bundle = derive_bundle(&answers, &derived);

        let (runtime, dev) = dependencies::resolve(&answers);
        assert_eq!(bundle.dependencies, runtime);
        assert_eq!(bundle.dev_dependencies, dev);
    }
}
