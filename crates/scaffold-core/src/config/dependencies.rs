//! Dependency resolution for scaffolded packages
//!
//! Computes the runtime and development dependency lists for a given
//! answer record. The runtime list is always empty in this domain; the
//! dev list starts from a fixed process-tooling baseline and grows with
//! the bundler, language, and style choices.

use crate::answers::{AnswerRecord, Bundler, Feature, Language};

/// Process tooling every scaffolded package gets
const BASELINE_DEV: &[&str] = &[
    "husky",
    "jsonlint",
    "lint-staged",
    "npm-run-all",
    "prettier",
    "source-map-explorer",
    "stylelint",
];

const ROLLUP_TOOLCHAIN: &[&str] = &[
    "@rollup/plugin-commonjs",
    "@rollup/plugin-node-resolve",
    "rollup",
    "rollup-plugin-terser",
];

const WEBPACK_TOOLCHAIN: &[&str] = &[
    "css-loader",
    "style-loader",
    "webpack",
    "webpack-cli",
];

const COFFEESCRIPT_TOOLING: &[&str] = &["coffeelint", "coffeescript"];

const JAVASCRIPT_TOOLING: &[&str] = &["@babel/core", "@babel/preset-env", "eslint"];

const TYPESCRIPT_TOOLING: &[&str] = &[
    "@types/atom",
    "@types/node",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
    "eslint",
    "typescript",
];

/// Compute the `(runtime, dev)` dependency lists, each sorted ascending
/// with duplicates collapsed.
pub fn resolve(answers: &AnswerRecord) -> (Vec<String>, Vec<String>) {
    // Scaffolded packages declare no runtime dependencies by default.
    let runtime: Vec<String> = Vec::new();

    let mut dev: Vec<String> = BASELINE_DEV.iter().map(|s| (*s).to_string()).collect();

    if answers.has_code() {
        match answers.bundler {
            Some(Bundler::Rollup) => {
                dev.extend(owned(ROLLUP_TOOLCHAIN));
                match answers.language {
                    Some(Language::CoffeeScript) => {
                        dev.push("rollup-plugin-coffee-script".to_string());
                    }
                    Some(Language::TypeScript) => {
                        dev.push("@rollup/plugin-typescript".to_string());
                    }
                    _ => {}
                }
            }
            Some(Bundler::Webpack) => {
                dev.extend(owned(WEBPACK_TOOLCHAIN));
                if answers.language == Some(Language::CoffeeScript) {
                    dev.push("coffee-loader".to_string());
                }
            }
            None => {}
        }

        match answers.language {
            Some(Language::CoffeeScript) => dev.extend(owned(COFFEESCRIPT_TOOLING)),
            Some(Language::JavaScript) => {
                dev.extend(owned(JAVASCRIPT_TOOLING));
                if let Some(preset) = &answers.eslint_config {
                    dev.push(format!("eslint-config-{preset}"));
                }
                if answers.bundler == Some(Bundler::Webpack) {
                    dev.push("babel-loader".to_string());
                }
                dev.extend(answers.babel_presets.iter().cloned());
            }
            Some(Language::TypeScript) => {
                dev.extend(owned(TYPESCRIPT_TOOLING));
                if let Some(preset) = &answers.eslint_config {
                    dev.push(format!("eslint-config-{preset}"));
                }
                if answers.bundler == Some(Bundler::Webpack) {
                    dev.push("ts-loader".to_string());
                }
            }
            None => {}
        }
    }

    if answers.has_feature(Feature::Styles) {
        dev.push("stylelint".to_string());
        if let Some(preset) = &answers.stylelint_config {
            dev.push(format!("stylelint-config-{preset}"));
        }
    }

    dev.extend(answers.additional_dependencies.iter().cloned());

    dev.sort();
    dev.dedup();

    (runtime, dev)
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}
