//! Charm-style CLI prompts using cliclack
//!
//! The answer collector: walks the user through every question, builds the
//! immutable [`AnswerRecord`], and hands it to the derivation engine. The
//! install command is printed as a next step, never executed here.

use crate::answers::{
    validate_tracking_id, ActivationHook, AnswerRecord, Bundler, DerivedFields, Feature, Language,
    PackageManager,
};
use crate::config::{derive_bundle, DerivedConfigBundle};
use crate::license::SpdxRegistry;
use crate::templates;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

const ESLINT_PRESETS: &[&str] = &["airbnb", "google", "idiomatic", "standard", "semi", "xo"];
const STYLELINT_PRESETS: &[&str] = &["standard", "recommended"];
const OPTIONAL_DEPENDENCIES: &[&str] = &[
    "atom-package-deps",
    "atom-satisfy-dependencies",
    crate::answers::METRICS_DEPENDENCY,
];

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory holding the scaffold templates
    pub template_dir: Option<PathBuf>,

    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Package name (skips the name prompt)
    pub name: Option<String>,

    /// Auto-confirm all prompts with defaults (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("Create a Pulsar package")?;

    let answers = collect_answers(&args)?;
    let derived = DerivedFields::from_answers(&answers, &SpdxRegistry);
    let bundle = derive_bundle(&answers, &derived);

    let project_dir = select_directory(&args, &answers.name)?;
    let template_root = args
        .template_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("templates"));

    let spinner = cliclack::spinner();
    spinner.start("Writing files...");
    let written =
        templates::write_scaffold(&template_root, &project_dir, &answers, &derived, &bundle)
            .await?;
    spinner.stop(format!(
        "Created {} files in {}",
        written.len(),
        project_dir.display()
    ));

    print_next_steps(&answers, &bundle, &project_dir)?;

    Ok(())
}

/// Sensible defaults for `--yes` mode
fn default_answers(name: String) -> AnswerRecord {
    AnswerRecord {
        name,
        license: "MIT".to_string(),
        features: vec![Feature::Code],
        language: Some(Language::JavaScript),
        bundler: Some(Bundler::Webpack),
        eslint_config: Some("standard".to_string()),
        ..Default::default()
    }
}

fn collect_answers(args: &CreateArgs) -> Result<AnswerRecord> {
    if args.yes {
        let name = args
            .name
            .clone()
            .ok_or_else(|| anyhow::anyhow!("--name is required with --yes"))?;
        cliclack::log::info(format!("Using defaults for '{}' (--yes mode)", name))?;
        return Ok(default_answers(name));
    }

    let name: String = match &args.name {
        Some(name) => {
            cliclack::log::info(format!("Package name: {}", name))?;
            name.clone()
        }
        None => cliclack::input("Package name")
            .placeholder("my-package")
            .validate(|input: &String| {
                if input.trim().is_empty() {
                    Err("Name may not be empty")
                } else {
                    Ok(())
                }
            })
            .interact()?,
    };

    let description: String = cliclack::input("Description")
        .placeholder("A short summary of the package")
        .required(false)
        .interact()?;

    let author: String = cliclack::input("Author (GitHub handle)")
        .placeholder("octocat")
        .required(false)
        .interact()?;

    let license = select_license()?;

    let private: bool = cliclack::confirm("Private package?")
        .initial_value(false)
        .interact()?;

    let features = select_features()?;
    let has_code = features.contains(&Feature::Code);
    let has_styles = features.contains(&Feature::Styles);

    let mut answers = AnswerRecord {
        name,
        description,
        author,
        private,
        license,
        features,
        ..Default::default()
    };

    if has_code {
        collect_code_answers(&mut answers)?;
    }

    if has_styles {
        let mut select = cliclack::select("Stylelint config preset");
        for preset in STYLELINT_PRESETS {
            select = select.item(*preset, *preset, "");
        }
        answers.stylelint_config = Some(select.interact()?.to_string());
    }

    answers.package_manager = cliclack::select("Package manager")
        .item(PackageManager::Npm, "npm", "")
        .item(PackageManager::Yarn, "yarn", "")
        .interact()?;

    let mut multi = cliclack::multiselect("Helper dependencies (optional)");
    for dep in OPTIONAL_DEPENDENCIES {
        multi = multi.item(*dep, *dep, "");
    }
    let additional: Vec<&str> = multi.required(false).interact()?;
    answers.additional_dependencies = additional.iter().map(|dep| dep.to_string()).collect();

    if answers.needs_tracking_id() {
        let tracking_id: String = cliclack::input("Google Analytics tracking id")
            .placeholder("UA-1234567-1")
            .validate(|input: &String| validate_tracking_id(input).map_err(|e| e.to_string()))
            .interact()?;
        answers.ga_tracking_id = Some(tracking_id);
    }

    Ok(answers)
}

fn select_license() -> Result<String> {
    let mut select = cliclack::select("License");
    for id in SpdxRegistry::identifiers() {
        select = select.item(id, id, "");
    }
    Ok(select.interact()?.to_string())
}

fn select_features() -> Result<Vec<Feature>> {
    let mut multi = cliclack::multiselect("Package features");
    for feature in Feature::ALL {
        multi = multi.item(feature, feature.id(), "");
    }
    Ok(multi.interact()?)
}

/// Questions that only apply when the code feature is on
fn collect_code_answers(answers: &mut AnswerRecord) -> Result<()> {
    let language: Language = cliclack::select("Language")
        .item(Language::CoffeeScript, Language::CoffeeScript.display_name(), "")
        .item(Language::JavaScript, Language::JavaScript.display_name(), "")
        .item(Language::TypeScript, Language::TypeScript.display_name(), "")
        .interact()?;
    answers.language = Some(language);

    answers.bundler = Some(
        cliclack::select("Bundler")
            .item(Bundler::Rollup, "Rollup", "")
            .item(Bundler::Webpack, "webpack", "")
            .interact()?,
    );

    if language != Language::CoffeeScript {
        let mut select = cliclack::select("ESLint config preset");
        for preset in ESLINT_PRESETS {
            select = select.item(*preset, *preset, "");
        }
        answers.eslint_config = Some(select.interact()?.to_string());
    }

    if language == Language::JavaScript {
        let presets: Vec<&str> = cliclack::multiselect("Additional Babel presets (optional)")
            .item("@babel/preset-flow", "@babel/preset-flow", "")
            .item("@babel/preset-react", "@babel/preset-react", "")
            .required(false)
            .interact()?;
        answers.babel_presets = presets.iter().map(|preset| preset.to_string()).collect();
    }

    answers.activation_commands = cliclack::confirm("Add an activation command?")
        .initial_value(true)
        .interact()?;

    let hooks: Vec<ActivationHook> = cliclack::multiselect("Activation hooks (optional)")
        .item(
            ActivationHook::LoadedShellEnvironment,
            "core:loaded-shell-environment",
            "",
        )
        .item(ActivationHook::RootScopeUsed, "root-scope-used", "")
        .item(ActivationHook::GrammarUsed, "grammar-used", "")
        .required(false)
        .interact()?;

    if hooks.contains(&ActivationHook::RootScopeUsed) {
        let scope: String = cliclack::input("Root scope")
            .placeholder("source.python")
            .interact()?;
        answers.root_scope_used = Some(scope);
    }
    if hooks.contains(&ActivationHook::GrammarUsed) {
        let grammar: String = cliclack::input("Grammar scope")
            .placeholder("source.js")
            .interact()?;
        answers.grammar_used = Some(grammar);
    }
    answers.activation_hooks = hooks;

    let wants_openers: bool = cliclack::confirm("Register workspace openers?")
        .initial_value(false)
        .interact()?;
    if wants_openers {
        let uris: String = cliclack::input("Workspace opener URIs (comma-separated)")
            .placeholder("atom://my-package")
            .interact()?;
        answers.workspace_opener_uris = Some(uris);
    }

    let deps: String = cliclack::input("Package dependencies (comma-separated, optional)")
        .placeholder("linter, busy-signal")
        .required(false)
        .interact()?;
    if !deps.trim().is_empty() {
        answers.atom_dependencies = Some(deps);
    }

    Ok(())
}

fn select_directory(args: &CreateArgs, name: &str) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Use --directory flag if provided
    let path = if let Some(dir) = &args.directory {
        let p = if dir.is_absolute() {
            dir.clone()
        } else {
            current_dir.join(dir)
        };
        cliclack::log::info(format!("Using directory: {}", p.display()))?;
        p
    } else if args.yes {
        current_dir.join(name)
    } else {
        let input: String = cliclack::input("Project directory")
            .placeholder(name)
            .default_input(name)
            .interact()?;

        let p = PathBuf::from(&input);
        if p.is_absolute() {
            p
        } else {
            current_dir.join(p)
        }
    };

    // Warn if directory exists and has files
    if path.exists() && path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!("Directory has {} existing items", count))?;

                let confirm = if args.yes {
                    true
                } else {
                    cliclack::confirm("Continue anyway?")
                        .initial_value(true)
                        .interact()?
                };

                if !confirm {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }

    Ok(path)
}

fn print_next_steps(
    answers: &AnswerRecord,
    bundle: &DerivedConfigBundle,
    project_dir: &PathBuf,
) -> Result<()> {
    let mut steps = Vec::new();

    let current = std::env::current_dir().ok();
    if current.as_ref() != Some(project_dir) {
        steps.push(format!("cd {}", project_dir.display()));
    }

    if !bundle.dev_dependencies.is_empty() {
        steps.push(format!(
            "{} {}",
            answers.package_manager.install_command(),
            bundle.dev_dependencies.join(" ")
        ));
    }
    steps.push(answers.package_manager.lint_script().to_string());

    println!();
    println!("  {}", "Next steps".bold());
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }

    cliclack::outro("Happy hacking!")?;

    Ok(())
}
