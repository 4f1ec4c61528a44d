//! Template and destination path resolution
//!
//! A logical key names a template file relative to the template root, with
//! its canonical extension (e.g. `src/hello-world.js`). Lookup prefers a
//! language-specific copy over the shared one; destinations get their
//! extension rewritten for the chosen language.

use crate::answers::Language;
use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};

/// Directory holding templates that apply to every language
pub const SHARED_DIR: &str = "shared";

/// Resolve a logical key to the template file to render. Language-specific
/// templates carry their native extension; the shared fallback keeps the
/// key's canonical one. The existence check is delegated to the injected
/// probe so callers can resolve against any backing store.
pub fn template_lookup_path(
    root: &Path,
    key: &str,
    language: Language,
    exists: impl Fn(&Path) -> bool,
) -> Result<PathBuf, ScaffoldError> {
    let specific = root.join(language.id()).join(destination_path(key, language));
    if exists(&specific) {
        return Ok(specific);
    }

    let shared = root.join(SHARED_DIR).join(key);
    if exists(&shared) {
        return Ok(shared);
    }

    Err(ScaffoldError::TemplateNotFound(key.to_string()))
}

/// Output path for a logical key: same relative location, extension
/// rewritten for the language. Language values outside the known set are
/// unrepresentable here; they fail earlier at [`Language::from_str`].
pub fn destination_path(key: &str, language: Language) -> PathBuf {
    PathBuf::from(key).with_extension(language.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_specific_template_wins() {
        let root = Path::new("templates");
        let path = template_lookup_path(root, "src/main.js", Language::TypeScript, |p| {
            p == Path::new("templates/typescript/src/main.ts")
        })
        .unwrap();
        assert_eq!(path, Path::new("templates/typescript/src/main.ts"));
    }

    #[test]
    fn test_falls_back_to_shared_template() {
        let root = Path::new("templates");
        let path = template_lookup_path(root, "src/main.js", Language::TypeScript, |p| {
            p == Path::new("templates/shared/src/main.js")
        })
        .unwrap();
        assert_eq!(path, Path::new("templates/shared/src/main.js"));
    }

    #[test]
    fn test_missing_template_fails() {
        let root = Path::new("templates");
        let err =
            template_lookup_path(root, "src/main.js", Language::JavaScript, |_| false).unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::TemplateNotFound("src/main.js".to_string())
        );
    }

    #[test]
    fn test_destination_extension_rewrite() {
        assert_eq!(
            destination_path("src/main.js", Language::TypeScript),
            Path::new("src/main.ts")
        );
        assert_eq!(
            destination_path("src/main.js", Language::CoffeeScript),
            Path::new("src/main.coffee")
        );
        assert_eq!(
            destination_path("src/main.js", Language::JavaScript),
            Path::new("src/main.js")
        );
    }
}
