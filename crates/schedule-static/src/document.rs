//! Document assembly.

use schedule_csv::ScheduleRow;

use crate::assets::AssetPipeline;
use crate::render::render_section;
use crate::section::SectionKind;

/// Parsed rows for all three sections.
#[derive(Debug, Clone, Default)]
pub struct Schedules {
    pub institution: Vec<ScheduleRow>,
    pub statewide: Vec<ScheduleRow>,
    pub board: Vec<ScheduleRow>,
}

impl Schedules {
    /// Rows for one section.
    pub fn rows(&self, section: SectionKind) -> &[ScheduleRow] {
        match section {
            SectionKind::Institution => &self.institution,
            SectionKind::Statewide => &self.statewide,
            SectionKind::Board => &self.board,
        }
    }
}

/// A rendered page, one markup element per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Assemble styles, script, toolbar and the three sections in page order.
    pub fn assemble(schedules: &Schedules, minify_css: bool) -> Self {
        let mut lines = AssetPipeline::style_block(minify_css);
        lines.extend(AssetPipeline::script_block());
        lines.extend(AssetPipeline::toolbar_block());

        for section in SectionKind::ALL {
            lines.extend(render_section(section, schedules.rows(section)));
        }

        Self { lines }
    }

    /// Document lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The document as text, every line newline-terminated.
    pub fn to_text(&self) -> String {
        let len = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut text = String::with_capacity(len);
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}
