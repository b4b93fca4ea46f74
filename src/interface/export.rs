use std::fmt;
use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::{PlannerError, Result};
use crate::interface::render::format_plan;
use crate::models::PlanResult;

pub const DOCUMENT_TITLE: &str = "Smart Meal Planner";

const DISCLAIMER: &str = "This is a prototype. The generated information is for demonstration \
only and does not replace advice from a health professional.";

const PRINT_STYLE: &str = "\
body { font-family: sans-serif; margin: 20px; }
.print-header { text-align: center; margin-bottom: 20px; }
.print-header h1 { color: #166534; }
.print-header p { color: #2563eb; }
.print-summary { text-align: center; margin-bottom: 20px; font-size: 1.1em; }
.print-summary span { font-weight: bold; }
.print-day-title { font-size: 1.3em; color: #166534; margin-top: 20px; margin-bottom: 10px; border-bottom: 2px solid #d1d5db; padding-bottom: 5px; }
.print-meal-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 15px; }
.print-card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 15px; page-break-inside: avoid; }
.print-card-title { font-size: 1.1em; font-weight: bold; color: #15803d; margin-bottom: 5px; }
.print-card-desc { font-size: 0.9em; color: #6b7280; margin-bottom: 10px; }
.print-footer { text-align: center; margin-top: 30px; font-size: 0.8em; color: #6b7280; }
";

/// Output formats for an exported plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Printable HTML document.
    #[default]
    Html,
    /// Plain text, as shown in the terminal.
    Text,
    /// The full plan structure as JSON.
    Json,
    /// One row per meal.
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Render a plan in the requested format.
pub fn export_to_string(plan: &PlanResult, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Html => Ok(render_print_document(plan)),
        ExportFormat::Text => Ok(format_plan(plan)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
        ExportFormat::Csv => render_csv(plan),
    }
}

/// Write an exported plan to `path`.
pub fn write_export<P: AsRef<Path>>(path: P, plan: &PlanResult, format: ExportFormat) -> Result<()> {
    let content = export_to_string(plan, format)?;
    fs::write(path.as_ref(), content)?;
    log::info!("exported plan as {:?} to {}", format, path.as_ref().display());
    Ok(())
}

/// A standalone, print-ready HTML page for a plan.
pub struct PrintDocument<'a>(pub &'a PlanResult);

impl fmt::Display for PrintDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html>")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(f, "<title>{}</title>", DOCUMENT_TITLE)?;
        writeln!(f, "<style>\n{}</style>", PRINT_STYLE)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;

        writeln!(f, "<div class=\"print-header\">")?;
        writeln!(f, "<h1>{}</h1>", DOCUMENT_TITLE)?;
        writeln!(f, "<p>Your personalised meal plan.</p>")?;
        writeln!(f, "</div>")?;

        writeln!(f, "<div class=\"print-summary\">")?;
        writeln!(
            f,
            "<p>Estimated daily calories: <span>{} kcal</span></p>",
            plan.daily_calories
        )?;
        writeln!(
            f,
            "<p>Daily water target: <span>{} ml ({:.1} L)</span></p>",
            plan.water_intake_ml,
            plan.water_intake_litres()
        )?;
        writeln!(f, "</div>")?;

        for (day, meals) in plan.weekly_plan.days() {
            writeln!(f, "<h3 class=\"print-day-title\">{}</h3>", day)?;
            writeln!(f, "<div class=\"print-meal-grid\">")?;
            for (slot, meal) in meals.meals() {
                writeln!(f, "<div class=\"print-card\">")?;
                writeln!(
                    f,
                    "<div class=\"print-card-title\">{} ({})</div>",
                    slot.label(),
                    meal.time
                )?;
                writeln!(f, "<div class=\"print-card-desc\">~{} kcal</div>", meal.calories)?;
                writeln!(f, "<p>{}</p>", escape_html(&meal.suggestion))?;
                writeln!(f, "</div>")?;
            }
            writeln!(f, "</div>")?;
        }

        writeln!(f, "<div class=\"print-footer\">")?;
        writeln!(f, "<p>{}</p>", DISCLAIMER)?;
        writeln!(f, "</div>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

/// Render the print document to a string.
pub fn render_print_document(plan: &PlanResult) -> String {
    PrintDocument(plan).to_string()
}

fn render_csv(plan: &PlanResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["day", "meal", "time", "calories", "suggestion"])?;

    for (day, meals) in plan.weekly_plan.days() {
        for (slot, meal) in meals.meals() {
            let calories = meal.calories.to_string();
            wtr.write_record([
                day.name(),
                slot.label(),
                meal.time,
                calories.as_str(),
                meal.suggestion.as_str(),
            ])?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| PlannerError::InvalidInput(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| PlannerError::InvalidInput(e.to_string()))
}

/// Escape text for inclusion in HTML content.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>Fish & \"chips\"</b>"),
            "&lt;b&gt;Fish &amp; &quot;chips&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Html.extension(), "html");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }
}
