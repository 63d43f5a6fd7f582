//! Row and section markup.

use schedule_csv::{field_class, ScheduleRow};

use crate::section::SectionKind;

/// Render one row as an `outerrow` block, appending one line per element.
///
/// Every column gets a wrapper and a label. A present value adds a `content`
/// span; an absent value leaves an empty line in its place so that each field
/// keeps the same line layout.
pub fn render_row(row: &ScheduleRow, lines: &mut Vec<String>) {
    lines.push(r#"<div class="outerrow">"#.to_string());

    for (column, value) in row.fields() {
        lines.push(format!(
            "<div class='clearfix tablecolumn {}'>",
            field_class(column)
        ));
        lines.push(format!("\t<span class='label'>{}</span>", column));
        match value {
            Some(value) => lines.push(format!(
                "\t<span class='content'>{}</span>",
                escape_html(value)
            )),
            None => lines.push(String::new()),
        }
        lines.push("</div>".to_string());
    }

    lines.push("</div>".to_string());
}

/// Render a section: identified wrapper, heading, then every row in input order.
pub fn render_section(section: SectionKind, rows: &[ScheduleRow]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() * 60 + 3);

    lines.push(format!(r#"<div id="{}">"#, section.id()));
    lines.push(format!("<h1>{}</h1>", section.heading()));

    for row in rows {
        render_row(row, &mut lines);
    }

    lines.push("</div>".to_string());

    tracing::debug!("Rendered {} rows for section {}", rows.len(), section.id());

    lines
}

/// Escape HTML special characters, quotes included.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
