use std::path::Path;

use clap::Parser;

use diet_wizard_rs::cli::{Cli, Command};
use diet_wizard_rs::error::{PlannerError, Result};
use diet_wizard_rs::interface::{
    ExportFormat, ResultsAction, WizardOutcome, display_plan, prompt_export_path,
    prompt_results_action, run_wizard, write_export,
};
use diet_wizard_rs::models::{AnswerRecord, Field, PlanResult};
use diet_wizard_rs::planner::{RandomSuggestions, SuggestionSource};
use diet_wizard_rs::wizard::{Transition, Wizard};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let suggestions = match cli.seed {
        Some(seed) => RandomSuggestions::seeded(seed),
        None => RandomSuggestions::from_entropy(),
    };
    let mut wizard = Wizard::new(suggestions);

    match command {
        Command::Plan => cmd_plan(&mut wizard, cli.export.as_deref(), cli.format),
        Command::Generate { answers } => {
            cmd_generate(&mut wizard, &answers, cli.export.as_deref(), cli.format)
        }
    }
}

/// Run the wizard interactively, then offer export or a fresh start.
fn cmd_plan<S: SuggestionSource>(
    wizard: &mut Wizard<S>,
    export: Option<&Path>,
    format: ExportFormat,
) -> Result<()> {
    println!("Smart Meal Planner");
    println!("Your personalised meal plan in a few steps.");

    loop {
        if run_wizard(wizard)? == WizardOutcome::Quit {
            return Ok(());
        }

        let Some(plan) = wizard.plan() else {
            return Ok(());
        };
        display_plan(plan);

        if let Some(path) = export {
            export_plan(plan, path, format)?;
        }

        loop {
            match prompt_results_action()? {
                ResultsAction::Export => {
                    let (path, chosen) = prompt_export_path(format)?;
                    if let Some(plan) = wizard.plan() {
                        export_plan(plan, &path, chosen)?;
                    }
                }
                ResultsAction::StartOver => {
                    wizard.reset();
                    break;
                }
                ResultsAction::Quit => return Ok(()),
            }
        }
    }
}

/// Feed an answers file through the wizard without prompting.
fn cmd_generate<S: SuggestionSource>(
    wizard: &mut Wizard<S>,
    answers_path: &Path,
    export: Option<&Path>,
    format: ExportFormat,
) -> Result<()> {
    let content = std::fs::read_to_string(answers_path)?;
    let answers: AnswerRecord = serde_json::from_str(&content)?;

    for field in Field::ALL {
        if let Some(value) = answers.get(field) {
            wizard.set_field(field, value);
        }
    }

    loop {
        match wizard.advance() {
            Transition::Advanced(_) => continue,
            Transition::Completed | Transition::Unchanged => break,
            Transition::Blocked(err) => return Err(PlannerError::Validation(err)),
        }
    }

    let Some(plan) = wizard.plan() else {
        return Ok(());
    };
    display_plan(plan);

    if let Some(path) = export {
        export_plan(plan, path, format)?;
    }

    Ok(())
}

fn export_plan(plan: &PlanResult, path: &Path, format: ExportFormat) -> Result<()> {
    write_export(path, plan, format)?;
    println!("Plan saved to {}", path.display());
    Ok(())
}
