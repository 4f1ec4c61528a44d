//! Package manifest composition
//!
//! Assembles the full package.json document from the answers plus the
//! computed scripts and task maps. The `dependencies`/`devDependencies`
//! objects are always serialized empty: the resolved lists travel
//! out-of-band to the installer, which rewrites the manifest on disk.

use crate::answers::{ActivationHook, AnswerRecord, DerivedFields, Feature, Language};
use crate::config::{lint_staged, scripts};
use indexmap::IndexMap;
use serde::Serialize;

/// Hosting pattern for repository/homepage/bugs URLs
const HOSTING_URL: &str = "https://github.com";

/// Supported editor version range for generated packages
const ENGINE_RANGE: &str = ">=1.56.0 <2.0.0";

pub const NOTHING_TO_ANALYZE: &str = "echo \"Nothing to analyze\"";
pub const NOTHING_TO_LINT: &str = "echo \"Nothing to lint\"";
pub const NOTHING_TO_TEST: &str = "echo \"Nothing to test\"";
const TEST_PLACEHOLDER: &str = "echo \"Error: no test specified\" && exit 1";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bugs {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Engines {
    pub atom: String,
}

/// The generated package descriptor, field order preserved on serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub private: bool,
    pub license: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    pub repository: Repository,
    pub homepage: String,
    pub bugs: Bugs,
    pub engines: Engines,
    pub scripts: IndexMap<String, String>,
    #[serde(rename = "activationCommands")]
    pub activation_commands: Vec<String>,
    #[serde(rename = "activationHooks")]
    pub activation_hooks: Vec<String>,
    #[serde(rename = "workspaceOpeners")]
    pub workspace_openers: Vec<String>,
    #[serde(rename = "package-deps")]
    pub package_deps: Vec<String>,
    pub dependencies: IndexMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
    #[serde(rename = "lint-staged")]
    pub lint_staged: IndexMap<String, String>,
}

impl PackageManifest {
    /// Serialize as the 2-space-indented JSON document written to disk
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Assemble the manifest document from answers and derived fields
pub fn compose(answers: &AnswerRecord, derived: &DerivedFields) -> PackageManifest {
    let code = answers.has_code();
    let repo_slug = format!("{}/{}", answers.author, derived.repository_name);

    let activation_commands = if code && answers.activation_commands {
        vec![format!("{}:hello-world", answers.name)]
    } else {
        Vec::new()
    };

    // Entries whose required answer is missing are dropped, never
    // serialized as null.
    let activation_hooks = if code {
        answers
            .activation_hooks
            .iter()
            .filter_map(|hook| match hook {
                ActivationHook::LoadedShellEnvironment => {
                    Some(ActivationHook::LoadedShellEnvironment.id().to_string())
                }
                ActivationHook::RootScopeUsed => answers.normalized_root_scope(),
                ActivationHook::GrammarUsed => answers.normalized_grammar(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let workspace_openers = if code {
        answers.workspace_openers()
    } else {
        Vec::new()
    };
    let package_deps = if code { answers.package_deps() } else { Vec::new() };

    PackageManifest {
        name: answers.name.clone(),
        version: "0.0.0".to_string(),
        description: answers.description.clone(),
        author: answers.author.clone(),
        private: answers.private,
        license: answers.license.clone(),
        main: code.then(|| format!("./lib/{}", answers.name)),
        repository: Repository {
            kind: "git".to_string(),
            url: format!("{HOSTING_URL}/{repo_slug}"),
        },
        homepage: format!("{HOSTING_URL}/{repo_slug}#readme"),
        bugs: Bugs {
            url: format!("{HOSTING_URL}/{repo_slug}/issues"),
        },
        engines: Engines {
            atom: ENGINE_RANGE.to_string(),
        },
        scripts: compose_scripts(answers),
        activation_commands,
        activation_hooks,
        workspace_openers,
        package_deps,
        dependencies: IndexMap::new(),
        dev_dependencies: IndexMap::new(),
        lint_staged: lint_staged::compose(answers),
    }
}

fn compose_scripts(answers: &AnswerRecord) -> IndexMap<String, String> {
    let code = answers.has_code();
    let styles = answers.has_feature(Feature::Styles);

    let mut map = IndexMap::new();
    map.insert(
        "analyze".to_string(),
        if code {
            "source-map-explorer lib/**/*.js".to_string()
        } else {
            NOTHING_TO_ANALYZE.to_string()
        },
    );
    map.insert("build".to_string(), scripts::build_script(answers));
    map.insert("start".to_string(), scripts::watch_script(answers));
    map.insert("lint:code".to_string(), lint_code_script(answers));
    map.insert(
        "lint:styles".to_string(),
        if styles {
            "stylelint --allow-empty-input ./styles/*.{css,less}".to_string()
        } else {
            NOTHING_TO_LINT.to_string()
        },
    );
    map.insert(
        "lint".to_string(),
        "npm-run-all --parallel lint:*".to_string(),
    );
    map.insert(
        "test".to_string(),
        if code {
            TEST_PLACEHOLDER.to_string()
        } else {
            NOTHING_TO_TEST.to_string()
        },
    );
    map
}

fn lint_code_script(answers: &AnswerRecord) -> String {
    if !answers.has_code() {
        return NOTHING_TO_LINT.to_string();
    }
    match answers.language {
        Some(Language::CoffeeScript) => "coffeelint ./src".to_string(),
        Some(language) => format!(
            "eslint --no-error-on-unmatched-pattern ./src/**/*.{}",
            language.extension()
        ),
        None => NOTHING_TO_LINT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Bundler;
    use crate::license::SpdxRegistry;

    fn derived(answers: &AnswerRecord) -> DerivedFields {
        DerivedFields::from_answers(answers, &SpdxRegistry)
    }

    fn base_answers() -> AnswerRecord {
        AnswerRecord {
            name: "hydrogen".to_string(),
            description: "Run code interactively".to_string(),
            author: "nteract".to_string(),
            license: "MIT".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_code_manifest_is_inert() {
        let mut answers = base_answers();
        answers.features = vec![Feature::Keymaps];
        answers.activation_commands = true;
        answers.atom_dependencies = Some("linter".to_string());

        let manifest = compose(&answers, &derived(&answers));

        assert_eq!(manifest.main, None);
        assert_eq!(manifest.scripts["build"], scripts::NOTHING_TO_BUILD);
        assert_eq!(manifest.scripts["start"], scripts::NOTHING_TO_WATCH);
        assert_eq!(manifest.scripts["lint:code"], NOTHING_TO_LINT);
        assert_eq!(manifest.scripts["test"], NOTHING_TO_TEST);
        assert!(manifest.activation_commands.is_empty());
        assert!(manifest.activation_hooks.is_empty());
        assert!(manifest.workspace_openers.is_empty());
        assert!(manifest.package_deps.is_empty());
    }

    #[test]
    fn test_code_manifest_scripts_and_main() {
        let mut answers = base_answers();
        answers.features = vec![Feature::Code, Feature::Styles];
        answers.language = Some(Language::JavaScript);
        answers.bundler = Some(Bundler::Webpack);
        answers.eslint_config = Some("standard".to_string());
        answers.stylelint_config = Some("standard".to_string());

        let manifest = compose(&answers, &derived(&answers));

        assert_eq!(manifest.main.as_deref(), Some("./lib/hydrogen"));
        assert_eq!(
            manifest.scripts["lint:code"],
            "eslint --no-error-on-unmatched-pattern ./src/**/*.js"
        );
        assert_eq!(
            manifest.scripts["lint:styles"],
            "stylelint --allow-empty-input ./styles/*.{css,less}"
        );
        assert_eq!(manifest.scripts["lint"], "npm-run-all --parallel lint:*");
        assert_eq!(
            manifest.scripts["test"],
            "echo \"Error: no test specified\" && exit 1"
        );
        assert_eq!(manifest.lint_staged.len(), 4);
    }

    #[test]
    fn test_hosting_urls() {
        let answers = base_answers();
        let manifest = compose(&answers, &derived(&answers));

        assert_eq!(
            manifest.repository.url,
            "https://github.com/nteract/atom-hydrogen"
        );
        assert_eq!(
            manifest.homepage,
            "https://github.com/nteract/atom-hydrogen#readme"
        );
        assert_eq!(
            manifest.bugs.url,
            "https://github.com/nteract/atom-hydrogen/issues"
        );
    }

    #[test]
    fn test_activation_command_requires_code_and_opt_in() {
        let mut answers = base_answers();
        answers.features = vec![Feature::Code];
        answers.language = Some(Language::TypeScript);
        answers.bundler = Some(Bundler::Rollup);
        answers.activation_commands = true;

        let manifest = compose(&answers, &derived(&answers));
        assert_eq!(manifest.activation_commands, vec!["hydrogen:hello-world"]);

        answers.activation_commands = false;
        let manifest = compose(&answers, &derived(&answers));
        assert!(manifest.activation_commands.is_empty());
    }

    #[test]
    fn test_activation_hooks_are_normalized_and_nulls_dropped() {
        let mut answers = base_answers();
        answers.features = vec![Feature::Code];
        answers.language = Some(Language::TypeScript);
        answers.bundler = Some(Bundler::Rollup);
        answers.activation_hooks = vec![
            ActivationHook::LoadedShellEnvironment,
            ActivationHook::RootScopeUsed,
            ActivationHook::GrammarUsed,
        ];
        answers.root_scope_used = Some("source.python".to_string());
        // grammar_used missing: the grammar-used entry must be dropped

        let manifest = compose(&answers, &derived(&answers));
        assert_eq!(
            manifest.activation_hooks,
            vec![
                "core:loaded-shell-environment",
                "source.python:root-scope-used"
            ]
        );
    }

    #[test]
    fn test_dependency_objects_are_always_empty() {
        let mut answers = base_answers();
        answers.features = vec![Feature::Code];
        answers.language = Some(Language::JavaScript);
        answers.bundler = Some(Bundler::Webpack);

        let manifest = compose(&answers, &derived(&answers));
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.dev_dependencies.is_empty());

        let json = manifest.to_json().unwrap();
        assert!(json.contains("\"dependencies\": {}"));
        assert!(json.contains("\"devDependencies\": {}"));
    }

    #[test]
    fn test_serialized_json_uses_two_space_indent() {
        let answers = base_answers();
        let json = compose(&answers, &derived(&answers)).to_json().unwrap();
        assert!(json.contains("\n  \"name\": \"hydrogen\""));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_composition_is_idempotent() {
        let mut answers = base_answers();
        answers.features = vec![Feature::Code, Feature::Styles];
        answers.language = Some(Language::CoffeeScript);
        answers.bundler = Some(Bundler::Rollup);

        let first = compose(&answers, &derived(&answers));
        let second = compose(&answers, &derived(&answers));
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }
}
