use std::path::PathBuf;

use clap::ValueEnum;
use dialoguer::{Input, Select};

use crate::error::Result;
use crate::interface::export::ExportFormat;
use crate::planner::constants::TOTAL_STEPS;
use crate::planner::suggestions::SuggestionSource;
use crate::wizard::steps::{self, InputKind, StepDescriptor};
use crate::wizard::{Transition, Wizard};

/// Typed in a text prompt to go back one step.
const BACK_KEYWORD: &str = "<";

/// How an interactive wizard session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed,
    Quit,
}

/// What to do once the plan is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    Export,
    StartOver,
    Quit,
}

enum StepAnswer {
    Answered,
    Back,
}

/// Ask every step in turn until a plan is generated or the user quits.
pub fn run_wizard<S: SuggestionSource>(wizard: &mut Wizard<S>) -> Result<WizardOutcome> {
    while !wizard.is_showing_results() {
        let descriptor = wizard.current_step();

        println!();
        println!(
            "Step {} of {} ({:.0}%)",
            wizard.step(),
            TOTAL_STEPS,
            wizard.progress_percent()
        );

        if let StepAnswer::Back = ask_step(wizard, descriptor)? {
            wizard.retreat();
            continue;
        }

        if let Transition::Blocked(err) = wizard.advance() {
            println!("{}", err);

            let options = [
                format!("Go back to the {} question", err.field()),
                "Start over".to_string(),
                "Quit".to_string(),
            ];
            let choice = Select::new()
                .with_prompt("How do you want to continue?")
                .items(&options)
                .default(0)
                .interact()?;

            match choice {
                0 => {
                    let target = steps::step_for_field(err.field()).map_or(1, |s| s.number);
                    while wizard.step() > target && wizard.retreat() {}
                }
                1 => wizard.reset(),
                _ => return Ok(WizardOutcome::Quit),
            }
        }
    }

    Ok(WizardOutcome::Completed)
}

fn ask_step<S: SuggestionSource>(
    wizard: &mut Wizard<S>,
    descriptor: &'static StepDescriptor,
) -> Result<StepAnswer> {
    let can_go_back = wizard.step() > 1;
    let existing = wizard.answers().get(descriptor.field).map(str::to_string);

    match descriptor.input {
        InputKind::Choice(options) => {
            let mut items: Vec<&str> = options.iter().map(|o| o.label).collect();
            if can_go_back {
                items.push("← Back");
            }

            let default = existing
                .as_deref()
                .and_then(|v| descriptor.option_index(v))
                .unwrap_or(0);

            let selection = Select::new()
                .with_prompt(descriptor.prompt)
                .items(&items)
                .default(default)
                .interact()?;

            if selection >= options.len() {
                return Ok(StepAnswer::Back);
            }

            let value = options[selection].value;
            wizard.set_field(descriptor.field, value);

            if let Some(follow_up) = descriptor.follow_up_for(value) {
                let previous = wizard.answers().get(follow_up.field).map(str::to_string);
                let mut input = Input::<String>::new()
                    .with_prompt(follow_up.prompt)
                    .allow_empty(true);
                if let Some(previous) = previous {
                    input = input.default(previous);
                }
                let text = input.interact_text()?;
                wizard.set_field(follow_up.field, text.trim());
            }
        }
        InputKind::Decimal { placeholder }
        | InputKind::Integer { placeholder }
        | InputKind::Text { placeholder } => {
            let prompt = if can_go_back {
                format!("{} (e.g. {}; {} to go back)", descriptor.prompt, placeholder, BACK_KEYWORD)
            } else {
                format!("{} (e.g. {})", descriptor.prompt, placeholder)
            };

            let mut input = Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(!descriptor.required)
                .validate_with(move |value: &String| -> std::result::Result<(), String> {
                    if can_go_back && value.trim() == BACK_KEYWORD {
                        return Ok(());
                    }
                    descriptor.check(Some(value)).map_err(|e| e.to_string())
                });
            if let Some(existing) = existing {
                input = input.default(existing);
            }

            let value = input.interact_text()?;
            if can_go_back && value.trim() == BACK_KEYWORD {
                return Ok(StepAnswer::Back);
            }
            wizard.set_field(descriptor.field, value.trim());
        }
    }

    Ok(StepAnswer::Answered)
}

/// Ask what to do with a finished plan.
pub fn prompt_results_action() -> Result<ResultsAction> {
    let options = ["Export / print the plan", "Start a new plan", "Quit"];
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => ResultsAction::Export,
        1 => ResultsAction::StartOver,
        _ => ResultsAction::Quit,
    })
}

/// Ask for an export format and destination file.
pub fn prompt_export_path(default_format: ExportFormat) -> Result<(PathBuf, ExportFormat)> {
    let formats = ExportFormat::value_variants();
    let names: Vec<String> = formats
        .iter()
        .map(|f| format!("{:?}", f).to_lowercase())
        .collect();
    let default = formats
        .iter()
        .position(|f| *f == default_format)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Export format")
        .items(&names)
        .default(default)
        .interact()?;
    let format = formats[selection];

    let path: String = Input::new()
        .with_prompt("Save to")
        .default(format!("meal_plan.{}", format.extension()))
        .interact_text()?;

    Ok((PathBuf::from(path.trim()), format))
}
