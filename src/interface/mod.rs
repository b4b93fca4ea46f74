pub mod export;
pub mod prompts;
pub mod render;

pub use export::{ExportFormat, export_to_string, render_print_document, write_export};
pub use prompts::{
    ResultsAction, WizardOutcome, prompt_export_path, prompt_results_action, run_wizard,
};
pub use render::{display_plan, format_plan};
