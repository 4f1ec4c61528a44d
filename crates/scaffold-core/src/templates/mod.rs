//! Template resolution, rendering, and scaffold writing
//!
//! This module provides:
//! - Path resolution for logical template keys (language-specific over shared)
//! - `{{key}}` placeholder rendering
//! - Writing the derived config documents and template tree to disk

pub mod paths;
pub mod renderer;

use crate::answers::{AnswerRecord, Bundler, DerivedFields, Feature};
use crate::config::DerivedConfigBundle;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

pub use paths::{destination_path, template_lookup_path, SHARED_DIR};
pub use renderer::{render, write_rendered, RenderContext};

/// Logical keys rendered when the code feature is selected
const CODE_TEMPLATE_KEYS: &[&str] = &["src/main.js"];

/// Bundler config template written verbatim (no extension rewrite)
fn bundler_config_key(bundler: Bundler) -> &'static str {
    match bundler {
        Bundler::Webpack => "webpack.config.js",
        Bundler::Rollup => "rollup.config.js",
    }
}

/// Build the substitution context handed to every rendered template
pub fn render_context(answers: &AnswerRecord, derived: &DerivedFields) -> RenderContext {
    let mut context = RenderContext::new();
    context.insert("name".to_string(), answers.name.clone());
    context.insert("description".to_string(), answers.description.clone());
    context.insert("author".to_string(), answers.author.clone());
    context.insert("license".to_string(), answers.license.clone());
    context.insert("className".to_string(), derived.class_name.clone());
    context.insert(
        "repositoryName".to_string(),
        derived.repository_name.clone(),
    );
    context.insert("licenseName".to_string(), derived.license_name.clone());
    context.insert("licenseURL".to_string(), derived.license_url.clone());
    context.insert("lintScript".to_string(), derived.lint_script.clone());
    context
}

/// Write the derived configuration documents into the target directory
pub async fn write_configs(bundle: &DerivedConfigBundle, target: &Path) -> Result<Vec<String>> {
    let mut written = Vec::new();

    let manifest_json = bundle
        .manifest
        .to_json()
        .context("Failed to serialize package manifest")?;
    write_rendered(&target.join("package.json"), &manifest_json).await?;
    written.push("package.json".to_string());

    if let Some(babel) = &bundle.babel_config {
        let json =
            serde_json::to_string_pretty(babel).context("Failed to serialize babel config")?;
        write_rendered(&target.join(".babelrc"), &json).await?;
        written.push(".babelrc".to_string());
    }

    if let Some(formatter) = &bundle.formatter {
        let json = serde_json::to_string_pretty(formatter)
            .context("Failed to serialize formatter options")?;
        write_rendered(&target.join(".prettierrc"), &json).await?;
        written.push(".prettierrc".to_string());
    }

    Ok(written)
}

/// Render the template tree for the selected features into the target
/// directory and write the config documents alongside it. Returns the
/// relative paths of every file written.
pub async fn write_scaffold(
    template_root: &Path,
    target: &Path,
    answers: &AnswerRecord,
    derived: &DerivedFields,
    bundle: &DerivedConfigBundle,
) -> Result<Vec<String>> {
    let mut written = write_configs(bundle, target).await?;
    let context = render_context(answers, derived);

    if !derived.license_text.is_empty() {
        write_rendered(&target.join("LICENSE"), &derived.license_text).await?;
        written.push("LICENSE".to_string());
    }

    // Non-code features map 1:1 onto template subdirectories.
    for feature in &answers.features {
        if *feature == Feature::Code {
            continue;
        }
        let source_dir = template_root.join(feature.id());
        if !source_dir.is_dir() {
            continue;
        }
        for entry in WalkDir::new(&source_dir).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&source_dir)
                .context("Template path outside its feature directory")?
                .to_string_lossy()
                .to_string();
            let text = tokio::fs::read_to_string(entry.path())
                .await
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;

            // File names can carry placeholders too (e.g. grammars/{{name}}.cson).
            let dest_rel = format!("{}/{}", feature.id(), render(&rel, &context));
            write_rendered(&target.join(&dest_rel), &render(&text, &context)).await?;
            written.push(dest_rel);
        }
    }

    if answers.has_code() {
        if let Some(language) = answers.language {
            for key in CODE_TEMPLATE_KEYS {
                let source =
                    template_lookup_path(template_root, key, language, |p| p.exists())?;
                let text = tokio::fs::read_to_string(&source)
                    .await
                    .with_context(|| format!("Failed to read {}", source.display()))?;
                let dest_rel = destination_path(key, language);
                write_rendered(&target.join(&dest_rel), &render(&text, &context)).await?;
                written.push(dest_rel.to_string_lossy().to_string());
            }

            if let Some(bundler) = answers.bundler {
                let key = bundler_config_key(bundler);
                let source =
                    template_lookup_path(template_root, key, language, |p| p.exists())?;
                let text = tokio::fs::read_to_string(&source)
                    .await
                    .with_context(|| format!("Failed to read {}", source.display()))?;
                write_rendered(&target.join(key), &render(&text, &context)).await?;
                written.push(key.to_string());
            }
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::SpdxRegistry;

    #[test]
    fn test_render_context_carries_derived_fields() {
        let answers = AnswerRecord {
            name: "busy-signal".to_string(),
            author: "steelbrain".to_string(),
            license: "MIT".to_string(),
            ..Default::default()
        };
        let derived = DerivedFields::from_answers(&answers, &SpdxRegistry);
        let context = render_context(&answers, &derived);

        assert_eq!(context["name"], "busy-signal");
        assert_eq!(context["className"], "BusySignal");
        assert_eq!(context["repositoryName"], "atom-busy-signal");
        assert_eq!(context["licenseName"], "MIT License");
        assert_eq!(context["lintScript"], "npm run lint");
    }

    #[test]
    fn test_bundler_config_keys() {
        assert_eq!(bundler_config_key(Bundler::Webpack), "webpack.config.js");
        assert_eq!(bundler_config_key(Bundler::Rollup), "rollup.config.js");
    }
}
