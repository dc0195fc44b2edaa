// Rendering of load reports for the command line

use crate::loader::{FragmentOrigin, LoadReport};
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

pub fn generate_load_report(report: &LoadReport, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => serde_json::to_string_pretty(report),
    }
}

pub fn render_text(report: &LoadReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Page: {}\n", report.location));
    out.push_str(&format!("Candidates tried: {}\n", report.attempted.join(", ")));
    match &report.resolved_base {
        Some(base) => out.push_str(&format!("Base path: {}\n", base)),
        None => out.push_str(&format!(
            "Base path: {}\n",
            "none (built-in fragments)".yellow()
        )),
    }

    out.push_str("\nComponents:\n");
    for outcome in &report.components {
        let placement = if outcome.injected {
            String::new()
        } else {
            format!(" {}", "(no placeholder)".bright_black())
        };

        match &outcome.origin {
            FragmentOrigin::Fetched { url } => {
                out.push_str(&format!(
                    "  {} {:<7} {}{}\n",
                    "✓".green(),
                    outcome.component.to_string(),
                    url,
                    placement
                ));
            }
            FragmentOrigin::Fallback { url, reason } => {
                let source = url.as_deref().unwrap_or("-");
                out.push_str(&format!(
                    "  {} {:<7} fallback ({}: {}){}\n",
                    "⚠".yellow(),
                    outcome.component.to_string(),
                    source,
                    reason,
                    placement
                ));
            }
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "Navigation: {}\n",
        if report.navigation_bound {
            "bound"
        } else {
            "not found"
        }
    ));
    out.push_str(&format!(
        "Active link: {}\n",
        report.active_link.as_deref().unwrap_or("none")
    ));

    out
}
