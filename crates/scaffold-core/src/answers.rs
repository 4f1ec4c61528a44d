//! Answer record types - the single input to every derivation function
//!
//! An [`AnswerRecord`] is collected once (interactively or from CLI flags)
//! and never mutated afterwards. Everything the engine computes from it
//! lands in a separate [`DerivedFields`] record.

use crate::error::ScaffoldError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Suffix appended to the root-scope activation hook value
pub const ROOT_SCOPE_SUFFIX: &str = ":root-scope-used";

/// Suffix appended to the grammar activation hook value
pub const GRAMMAR_SUFFIX: &str = ":grammar-used";

/// Namespace prefix for repository names
pub const REPOSITORY_PREFIX: &str = "atom-";

/// Optional helper dependency that requires a tracking id when selected
pub const METRICS_DEPENDENCY: &str = "atom-google-analytics";

static TRACKING_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^UA-\d{4,}-\d+$").unwrap());

/// Source languages a scaffolded package can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    CoffeeScript,
    JavaScript,
    TypeScript,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::CoffeeScript => "CoffeeScript",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }

    /// Identifier used in prompts and template directory names
    pub fn id(&self) -> &'static str {
        match self {
            Language::CoffeeScript => "coffeescript",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    /// File extension for source files in this language
    pub fn extension(&self) -> &'static str {
        match self {
            Language::CoffeeScript => "coffee",
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Language {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coffeescript" | "coffee" => Ok(Language::CoffeeScript),
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            _ => Err(ScaffoldError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Build-tool family chosen when the `code` feature is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bundler {
    Rollup,
    Webpack,
}

impl Bundler {
    pub fn id(&self) -> &'static str {
        match self {
            Bundler::Rollup => "rollup",
            Bundler::Webpack => "webpack",
        }
    }
}

impl fmt::Display for Bundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Bundler {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rollup" => Ok(Bundler::Rollup),
            "webpack" => Ok(Bundler::Webpack),
            _ => Err(ScaffoldError::UnsupportedBundler(s.to_string())),
        }
    }
}

/// Package manager used for install commands and the lint script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn id(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Command that runs the package's `lint` script
    pub fn lint_script(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run lint",
            PackageManager::Yarn => "yarn lint",
        }
    }

    /// Command that installs development dependencies
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install --save-dev",
            PackageManager::Yarn => "yarn add --dev",
        }
    }
}

impl FromStr for PackageManager {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            _ => Err(ScaffoldError::UnsupportedSelection {
                field: "package manager",
                value: s.to_string(),
            }),
        }
    }
}

/// Independent package capabilities a user may enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Code,
    Grammars,
    Keymaps,
    Menus,
    Snippets,
    Styles,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Code,
        Feature::Grammars,
        Feature::Keymaps,
        Feature::Menus,
        Feature::Snippets,
        Feature::Styles,
    ];

    /// Identifier used in prompts and template directory names
    pub fn id(&self) -> &'static str {
        match self {
            Feature::Code => "code",
            Feature::Grammars => "grammars",
            Feature::Keymaps => "keymaps",
            Feature::Menus => "menus",
            Feature::Snippets => "snippets",
            Feature::Styles => "styles",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Feature {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" => Ok(Feature::Code),
            "grammars" => Ok(Feature::Grammars),
            "keymaps" => Ok(Feature::Keymaps),
            "menus" => Ok(Feature::Menus),
            "snippets" => Ok(Feature::Snippets),
            "styles" => Ok(Feature::Styles),
            _ => Err(ScaffoldError::UnsupportedSelection {
                field: "feature",
                value: s.to_string(),
            }),
        }
    }
}

/// Deferred-activation hooks a package can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationHook {
    LoadedShellEnvironment,
    RootScopeUsed,
    GrammarUsed,
}

impl ActivationHook {
    pub const ALL: [ActivationHook; 3] = [
        ActivationHook::LoadedShellEnvironment,
        ActivationHook::RootScopeUsed,
        ActivationHook::GrammarUsed,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ActivationHook::LoadedShellEnvironment => "core:loaded-shell-environment",
            ActivationHook::RootScopeUsed => "root-scope-used",
            ActivationHook::GrammarUsed => "grammar-used",
        }
    }
}

impl FromStr for ActivationHook {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core:loaded-shell-environment" => Ok(ActivationHook::LoadedShellEnvironment),
            "root-scope-used" => Ok(ActivationHook::RootScopeUsed),
            "grammar-used" => Ok(ActivationHook::GrammarUsed),
            _ => Err(ScaffoldError::UnsupportedSelection {
                field: "activation hook",
                value: s.to_string(),
            }),
        }
    }
}

/// Validate a Google Analytics tracking id (`UA-XXXX-X` form)
pub fn validate_tracking_id(id: &str) -> Result<(), ScaffoldError> {
    if TRACKING_ID.is_match(id) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidTrackingId(id.to_string()))
    }
}

/// Everything the user chose, collected once before derivation starts
#[derive(Debug, Clone, Default)]
pub struct AnswerRecord {
    pub name: String,
    pub description: String,
    pub author: String,
    pub private: bool,
    /// License identifier (SPDX id from the registry)
    pub license: String,
    pub features: Vec<Feature>,
    /// Defined iff `features` contains [`Feature::Code`]
    pub language: Option<Language>,
    /// Defined iff `features` contains [`Feature::Code`]
    pub bundler: Option<Bundler>,
    pub package_manager: PackageManager,
    pub activation_commands: bool,
    pub activation_hooks: Vec<ActivationHook>,
    /// Required iff [`ActivationHook::RootScopeUsed`] was selected
    pub root_scope_used: Option<String>,
    /// Required iff [`ActivationHook::GrammarUsed`] was selected
    pub grammar_used: Option<String>,
    /// Comma-delimited URI list, present iff workspace openers were chosen
    pub workspace_opener_uris: Option<String>,
    /// Comma-delimited list of editor package identifiers
    pub atom_dependencies: Option<String>,
    pub additional_dependencies: Vec<String>,
    /// Defined iff `code` is selected and the language is not CoffeeScript
    pub eslint_config: Option<String>,
    /// Defined iff `features` contains [`Feature::Styles`]
    pub stylelint_config: Option<String>,
    /// Only relevant when `language` is JavaScript
    pub babel_presets: Vec<String>,
    /// Required iff the metrics dependency was chosen
    pub ga_tracking_id: Option<String>,
}

impl AnswerRecord {
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn has_code(&self) -> bool {
        self.has_feature(Feature::Code)
    }

    /// Root-scope hook value with its suffix guaranteed
    pub fn normalized_root_scope(&self) -> Option<String> {
        self.root_scope_used
            .as_deref()
            .map(|scope| ensure_suffix(scope, ROOT_SCOPE_SUFFIX))
    }

    /// Grammar hook value with its suffix guaranteed
    pub fn normalized_grammar(&self) -> Option<String> {
        self.grammar_used
            .as_deref()
            .map(|grammar| ensure_suffix(grammar, GRAMMAR_SUFFIX))
    }

    /// Workspace opener URIs split out of the comma-delimited answer
    pub fn workspace_openers(&self) -> Vec<String> {
        split_list(self.workspace_opener_uris.as_deref())
    }

    /// Editor package dependencies split out of the comma-delimited answer
    pub fn package_deps(&self) -> Vec<String> {
        split_list(self.atom_dependencies.as_deref())
    }

    /// Whether a tracking id must be present and valid
    pub fn needs_tracking_id(&self) -> bool {
        self.additional_dependencies
            .iter()
            .any(|dep| dep == METRICS_DEPENDENCY)
    }
}

/// Fields the engine computes from an [`AnswerRecord`], returned explicitly
/// instead of being accumulated onto the input
#[derive(Debug, Clone)]
pub struct DerivedFields {
    /// Identifier-safe PascalCase form of the package name
    pub class_name: String,
    /// Package name with the repository namespace prefix guaranteed
    pub repository_name: String,
    pub license_name: String,
    pub license_url: String,
    pub license_text: String,
    /// Command that runs the lint target for the chosen package manager
    pub lint_script: String,
}

impl DerivedFields {
    pub fn from_answers(
        answers: &AnswerRecord,
        registry: &impl crate::license::LicenseRegistry,
    ) -> Self {
        let license = registry.lookup(&answers.license);
        let (license_name, license_url, license_text) = match license {
            Some(info) => (info.name, info.url, info.text),
            None => (answers.license.clone(), String::new(), String::new()),
        };

        Self {
            class_name: pascal_case(&answers.name),
            repository_name: ensure_prefix(&answers.name, REPOSITORY_PREFIX),
            license_name,
            license_url,
            license_text,
            lint_script: answers.package_manager.lint_script().to_string(),
        }
    }
}

fn ensure_suffix(value: &str, suffix: &str) -> String {
    if value.ends_with(suffix) {
        value.to_string()
    } else {
        format!("{value}{suffix}")
    }
}

fn ensure_prefix(value: &str, prefix: &str) -> String {
    if value.starts_with(prefix) {
        value.to_string()
    } else {
        format!("{prefix}{value}")
    }
}

/// PascalCase an arbitrary package name (`my-package` -> `MyPackage`)
fn pascal_case(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::SpdxRegistry;

    #[test]
    fn test_parse_language() {
        assert_eq!("typescript".parse::<Language>().unwrap(), Language::TypeScript);
        assert_eq!("TS".parse::<Language>().unwrap(), Language::TypeScript);
        assert_eq!("coffee".parse::<Language>().unwrap(), Language::CoffeeScript);
    }

    #[test]
    fn test_parse_unknown_language_fails() {
        let err = "fortran".parse::<Language>().unwrap_err();
        assert!(matches!(err, ScaffoldError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_parse_unknown_bundler_fails() {
        let err = "grunt".parse::<Bundler>().unwrap_err();
        assert_eq!(err, ScaffoldError::UnsupportedBundler("grunt".to_string()));
    }

    #[test]
    fn test_root_scope_normalization() {
        let answers = AnswerRecord {
            root_scope_used: Some("foo".to_string()),
            ..Default::default()
        };
        assert_eq!(
            answers.normalized_root_scope().unwrap(),
            "foo:root-scope-used"
        );
    }

    #[test]
    fn test_root_scope_normalization_is_idempotent() {
        let answers = AnswerRecord {
            root_scope_used: Some("foo:root-scope-used".to_string()),
            ..Default::default()
        };
        assert_eq!(
            answers.normalized_root_scope().unwrap(),
            "foo:root-scope-used"
        );
    }

    #[test]
    fn test_grammar_normalization_checks_grammar_suffix() {
        // An already-suffixed grammar value must not be suffixed again.
        let answers = AnswerRecord {
            grammar_used: Some("source.js:grammar-used".to_string()),
            ..Default::default()
        };
        assert_eq!(
            answers.normalized_grammar().unwrap(),
            "source.js:grammar-used"
        );

        let bare = AnswerRecord {
            grammar_used: Some("source.js".to_string()),
            ..Default::default()
        };
        assert_eq!(bare.normalized_grammar().unwrap(), "source.js:grammar-used");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("my-package"), "MyPackage");
        assert_eq!(pascal_case("linter_ui"), "LinterUi");
        assert_eq!(pascal_case("simple"), "Simple");
    }

    #[test]
    fn test_repository_name_prefixing() {
        let plain = AnswerRecord {
            name: "beautify".to_string(),
            ..Default::default()
        };
        let derived = DerivedFields::from_answers(&plain, &SpdxRegistry);
        assert_eq!(derived.repository_name, "atom-beautify");

        let prefixed = AnswerRecord {
            name: "atom-beautify".to_string(),
            ..Default::default()
        };
        let derived = DerivedFields::from_answers(&prefixed, &SpdxRegistry);
        assert_eq!(derived.repository_name, "atom-beautify");
    }

    #[test]
    fn test_split_comma_lists() {
        let answers = AnswerRecord {
            atom_dependencies: Some("linter, busy-signal ,,intentions".to_string()),
            ..Default::default()
        };
        assert_eq!(
            answers.package_deps(),
            vec!["linter", "busy-signal", "intentions"]
        );
        assert!(answers.workspace_openers().is_empty());
    }

    #[test]
    fn test_tracking_id_validation() {
        assert!(validate_tracking_id("UA-1234-5").is_ok());
        assert!(validate_tracking_id("UA-123456-12").is_ok());
        assert!(validate_tracking_id("UA-123-5").is_err());
        assert!(validate_tracking_id("GA-1234-5").is_err());
        assert!(validate_tracking_id("UA-1234").is_err());
    }

    #[test]
    fn test_lint_script_follows_package_manager() {
        assert_eq!(PackageManager::Npm.lint_script(), "npm run lint");
        assert_eq!(PackageManager::Yarn.lint_script(), "yarn lint");
    }
}
