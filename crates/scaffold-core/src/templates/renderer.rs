//! Placeholder rendering and file writing

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::Path;
use tokio::fs;

/// Substitution values keyed by placeholder name
pub type RenderContext = IndexMap<String, String>;

/// Replace every `{{key}}` placeholder with its context value. Unknown
/// placeholders pass through untouched.
pub fn render(template: &str, context: &RenderContext) -> String {
    let mut rendered = template.to_string();
    for (key, value) in context {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}

/// Write rendered text, creating parent directories as needed
pub async fn write_rendered(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, text)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(pairs: &[(&str, &str)]) -> RenderContext {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let ctx = context(&[("name", "hydrogen"), ("author", "nteract")]);
        assert_eq!(
            render("# {{name}} by {{author}}", &ctx),
            "# hydrogen by nteract"
        );
    }

    #[test]
    fn test_render_repeats_and_unknowns() {
        let ctx = context(&[("name", "x")]);
        assert_eq!(render("{{name}}/{{name}}/{{other}}", &ctx), "x/x/{{other}}");
    }

    #[test]
    fn test_render_without_placeholders_is_identity() {
        let ctx = context(&[("name", "x")]);
        assert_eq!(render("plain text", &ctx), "plain text");
    }
}
