//! Formatter option presets
//!
//! Maps a lint-style preset identifier to a fixed Prettier option bundle.
//! This is pure static data; unknown presets resolve to `None` and the
//! caller falls back to tool defaults.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowParens {
    Always,
    AsNeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteProps {
    AsNeeded,
    Consistent,
    Preserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    None,
    Es5,
    All,
}

/// One preset's worth of Prettier options. Absent fields are omitted from
/// the serialized document so tool defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow_parens: Option<ArrowParens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket_spacing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_props: Option<QuoteProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_quote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_comma: Option<TrailingComma>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
}

/// Resolve a preset identifier to its option bundle
pub fn resolve(preset: &str) -> Option<PrettierOptions> {
    let options = match preset {
        "airbnb" => PrettierOptions {
            arrow_parens: Some(ArrowParens::Always),
            bracket_spacing: Some(false),
            quote_props: Some(QuoteProps::AsNeeded),
            semi: Some(true),
            single_quote: Some(true),
            tab_width: Some(2),
            trailing_comma: Some(TrailingComma::All),
            use_tabs: Some(false),
        },
        "google" => PrettierOptions {
            arrow_parens: Some(ArrowParens::Always),
            bracket_spacing: Some(false),
            quote_props: Some(QuoteProps::Consistent),
            semi: Some(false),
            single_quote: Some(true),
            tab_width: Some(2),
            use_tabs: Some(false),
            ..Default::default()
        },
        "idiomatic" => PrettierOptions {
            arrow_parens: Some(ArrowParens::Always),
            bracket_spacing: Some(true),
            single_quote: Some(true),
            tab_width: Some(2),
            use_tabs: Some(false),
            ..Default::default()
        },
        "standard" => PrettierOptions {
            bracket_spacing: Some(false),
            semi: Some(false),
            single_quote: Some(true),
            tab_width: Some(2),
            use_tabs: Some(false),
            ..Default::default()
        },
        "semi" => PrettierOptions {
            bracket_spacing: Some(false),
            semi: Some(true),
            single_quote: Some(true),
            tab_width: Some(2),
            use_tabs: Some(false),
            ..Default::default()
        },
        "xo" => PrettierOptions {
            arrow_parens: Some(ArrowParens::AsNeeded),
            bracket_spacing: Some(false),
            semi: Some(true),
            single_quote: Some(false),
            tab_width: Some(2),
            use_tabs: Some(true),
            ..Default::default()
        },
        _ => return None,
    };
    Some(options)
}
