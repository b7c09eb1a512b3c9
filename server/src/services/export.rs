//! Document export — render a report (and optional recommendation) to
//! markdown for download.
//!
//! The artifact is opaque to the rest of the system: routes stream it with
//! attachment headers and nothing else reads it back.

use std::fmt::Write;

use reports::{Recommendation, Report, has_physical_symbols};

/// Suggested download filename for a report export.
#[must_use]
pub fn export_filename(report: &Report) -> String {
    format!("report-{}.md", report.id)
}

/// Render a report and optional stored recommendation as a markdown document.
#[must_use]
pub fn render_markdown(report: &Report, recommendation: Option<&Recommendation>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Incident Report — {}", report.student_name);
    let _ = writeln!(out);
    let _ = writeln!(out, "- **Report id:** {}", report.id);
    let _ = writeln!(out, "- **Student id:** {}", report.student_id);
    let _ = writeln!(out, "- **Reported:** {}", report.timestamp.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(out, "- **Status:** {}", report.status.label());
    let _ = writeln!(out);

    let _ = writeln!(out, "## Incident types");
    let _ = writeln!(out);
    for symbol in &report.symbols {
        let _ = writeln!(out, "- {} ({})", symbol.label, symbol.category.as_str());
    }
    let _ = writeln!(out);

    if has_physical_symbols(&report.symbols) && !report.body_map.is_empty() {
        let _ = writeln!(out, "## Body regions");
        let _ = writeln!(out);
        for (index, point) in report.body_map.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", index + 1, point.body_part.as_str());
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Circumstances");
    let _ = writeln!(out);
    let _ = writeln!(out, "- **Location:** {} {}", report.location.icon, report.location.name);
    let _ = writeln!(out, "- **Frequency:** {}", report.frequency.label());
    let _ = writeln!(
        out,
        "- **Emotional state:** level {}/5 ({})",
        report.emotion.level,
        report.emotion.label()
    );
    let _ = writeln!(
        out,
        "- **Safety:** level {}/5 ({})",
        report.safety.level,
        report.safety.label()
    );
    let _ = writeln!(out);

    if let Some(notes) = report.teacher_notes.as_deref() {
        if !notes.trim().is_empty() {
            let _ = writeln!(out, "## Teacher notes");
            let _ = writeln!(out);
            let _ = writeln!(out, "{notes}");
            let _ = writeln!(out);
        }
    }

    if let Some(rec) = recommendation {
        let _ = writeln!(out, "## Recommendations ({} urgency)", rec.urgency.as_str());
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", rec.summary);
        let _ = writeln!(out);
        render_action_list(&mut out, "Immediate actions", &rec.immediate_actions);
        render_action_list(&mut out, "Short-term actions", &rec.short_term_actions);
        render_action_list(&mut out, "Long-term actions", &rec.long_term_actions);
        render_action_list(&mut out, "Resources", &rec.resources);
        if !rec.notes.trim().is_empty() {
            let _ = writeln!(out, "### Analysis notes");
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", rec.notes);
            let _ = writeln!(out);
        }
    }

    out
}

fn render_action_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "### {title}");
    let _ = writeln!(out);
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
    let _ = writeln!(out);
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
