//! Build and watch command composition

use crate::answers::{AnswerRecord, Bundler};

pub const NOTHING_TO_BUILD: &str = "echo \"Nothing to build\"";
pub const NOTHING_TO_WATCH: &str = "echo \"Nothing to watch\"";

/// Production build command for the chosen bundler
pub fn build_script(answers: &AnswerRecord) -> String {
    match active_bundler(answers) {
        Some(Bundler::Webpack) => "webpack --mode production".to_string(),
        Some(Bundler::Rollup) => "rollup --config".to_string(),
        None => NOTHING_TO_BUILD.to_string(),
    }
}

/// Watch-mode command for the chosen bundler
pub fn watch_script(answers: &AnswerRecord) -> String {
    match active_bundler(answers) {
        Some(Bundler::Webpack) => "webpack --mode none --watch".to_string(),
        Some(Bundler::Rollup) => "rollup --config --watch".to_string(),
        None => NOTHING_TO_WATCH.to_string(),
    }
}

// The bundler only counts when the code feature is on.
fn active_bundler(answers: &AnswerRecord) -> Option<Bundler> {
    answers.bundler.filter(|_| answers.has_code())
}
