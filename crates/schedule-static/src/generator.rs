//! Schedule page generator.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use schedule_csv::{read_schedule, ParseError};

use crate::document::{Document, Schedules};
use crate::section::SectionKind;
use crate::templates::{ShellContext, TemplateEngine};

/// Reason reported when a conversion succeeds.
pub const SUCCESS_REASON: &str = "No Errors, Completed Successfully";

/// Configuration for generating a schedule page.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Institution-specific schedule export
    pub kstate: PathBuf,

    /// Statewide schedule export
    pub state: PathBuf,

    /// Governing-board schedule export
    pub regents: PathBuf,

    /// Output file, overwritten if it exists
    pub output: PathBuf,

    /// Wrap the page in a full HTML document
    pub standalone: bool,

    /// Document title, used when standalone
    pub title: String,

    /// Minify the style rules
    pub minify_css: bool,
}

impl GenerateConfig {
    /// Configuration with default options for the given paths.
    pub fn new(
        kstate: impl Into<PathBuf>,
        state: impl Into<PathBuf>,
        regents: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kstate: kstate.into(),
            state: state.into(),
            regents: regents.into(),
            output: output.into(),
            standalone: false,
            title: "Official Document Schedules".to_string(),
            minify_css: false,
        }
    }

    /// Input path for a section.
    pub fn input(&self, section: SectionKind) -> &Path {
        match section {
            SectionKind::Institution => &self.kstate,
            SectionKind::Statewide => &self.state,
            SectionKind::Board => &self.regents,
        }
    }
}

/// Row count for one rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    /// Section id
    pub id: &'static str,

    /// Number of rows rendered
    pub rows: usize,
}

/// Result of a generate operation.
#[derive(Debug)]
pub struct GenerateResult {
    /// Per-section row counts, in page order
    pub sections: Vec<SectionSummary>,

    /// Number of lines written
    pub lines: usize,

    /// Total generation time in milliseconds
    pub duration_ms: u64,

    /// Output file
    pub output: PathBuf,
}

impl GenerateResult {
    /// Total rows across all sections.
    pub fn total_rows(&self) -> usize {
        self.sections.iter().map(|s| s.rows).sum()
    }
}

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("File path(s) provided are not valid")]
    InvalidPath,

    #[error("Failed to parse schedule: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Status code and reason for a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionStatus {
    /// 0 on success, 1 on failure
    pub code: i32,

    /// Human-readable outcome
    pub reason: String,
}

impl ConversionStatus {
    pub fn success() -> Self {
        Self {
            code: 0,
            reason: SUCCESS_REASON.to_string(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            code: 1,
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

impl From<Result<GenerateResult, GenerateError>> for ConversionStatus {
    fn from(result: Result<GenerateResult, GenerateError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Convert the three schedule exports into one page at `output`.
///
/// Any existing file at `output` is overwritten without confirmation.
pub fn convert(
    kstate: impl AsRef<Path>,
    state: impl AsRef<Path>,
    regents: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> ConversionStatus {
    let config = GenerateConfig::new(
        kstate.as_ref(),
        state.as_ref(),
        regents.as_ref(),
        output.as_ref(),
    );

    DocumentGenerator::new(config).generate().into()
}

/// Schedule page generator.
pub struct DocumentGenerator {
    config: GenerateConfig,
}

impl DocumentGenerator {
    /// Create a new generator.
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Validate inputs, render the page and write it to the output path.
    ///
    /// The page is fully rendered in memory before the output file is touched,
    /// so a failure leaves any existing output as it was.
    pub fn generate(&self) -> Result<GenerateResult, GenerateError> {
        let start = Instant::now();

        self.validate()?;

        let schedules = self.load()?;
        let document = Document::assemble(&schedules, self.config.minify_css);
        let text = self.finish(&document)?;

        fs::write(&self.config.output, text).map_err(|e| {
            GenerateError::Write(format!("{}: {}", self.config.output.display(), e))
        })?;

        let sections = SectionKind::ALL
            .iter()
            .map(|&section| SectionSummary {
                id: section.id(),
                rows: schedules.rows(section).len(),
            })
            .collect();

        Ok(GenerateResult {
            sections,
            lines: document.lines().len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output: self.config.output.clone(),
        })
    }

    /// Check that every input path exists.
    pub fn validate(&self) -> Result<(), GenerateError> {
        for section in SectionKind::ALL {
            let path = self.config.input(section);
            if !path.exists() {
                tracing::debug!("Input for {} not found: {}", section.id(), path.display());
                return Err(GenerateError::InvalidPath);
            }
        }
        Ok(())
    }

    /// Parse all three inputs.
    fn load(&self) -> Result<Schedules, GenerateError> {
        let institution = read_schedule(self.config.input(SectionKind::Institution))?;
        let statewide = read_schedule(self.config.input(SectionKind::Statewide))?;
        let board = read_schedule(self.config.input(SectionKind::Board))?;

        Ok(Schedules {
            institution,
            statewide,
            board,
        })
    }

    /// Final output text, wrapped in the page shell when standalone.
    fn finish(&self, document: &Document) -> Result<String, GenerateError> {
        if !self.config.standalone {
            return Ok(document.to_text());
        }

        let engine =
            TemplateEngine::new().map_err(|e| GenerateError::Template(e.to_string()))?;

        let context = ShellContext {
            title: self.config.title.clone(),
            body: document.lines().join("\n"),
        };

        let mut html = engine
            .render_shell(&context)
            .map_err(|e| GenerateError::Template(e.to_string()))?;
        html.push('\n');

        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    const HEADER: &str = "Agency Code,Agency,Subagency1,Subagency2,Subagency3,Subagency4,Title,SeriesID,Description,Status,Approved,Retention,Disposition,Restrictions,Comments,Authority,KAR #,Format,Last Survey";

    fn record(title: &str, description: &str) -> String {
        format!("367,KSU,,,,,{title},S-1,\"{description}\",Active,,0,Destroy,,,,,Paper,")
    }

    fn write_csv(dir: &Path, name: &str, titles: &[&str]) -> PathBuf {
        let mut content = format!("{HEADER}\n");
        for title in titles {
            content.push_str(&record(title, "Plain"));
            content.push('\n');
        }
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn fixture() -> (TempDir, GenerateConfig) {
        let temp = tempdir().unwrap();
        let kstate = write_csv(temp.path(), "kstate.csv", &["K1", "K2"]);
        let state = write_csv(temp.path(), "state.csv", &["S1", "S2", "S3"]);
        let regents = write_csv(temp.path(), "regents.csv", &["R1"]);
        let output = temp.path().join("schedules.html");
        let config = GenerateConfig::new(kstate, state, regents, output);
        (temp, config)
    }

    /// Row-block titles per section id, in document order.
    fn section_titles(html: &str) -> Vec<(String, Vec<String>)> {
        let mut sections: Vec<(String, Vec<String>)> = Vec::new();
        let mut in_title = false;

        for line in html.lines() {
            if let Some(id) = line
                .strip_prefix("<div id=\"")
                .and_then(|rest| rest.strip_suffix("\">"))
                .filter(|id| *id != "searchdiv")
            {
                sections.push((id.to_string(), Vec::new()));
            } else if line == "\t<span class='label'>Title</span>" {
                in_title = true;
            } else if in_title {
                in_title = false;
                let title = line
                    .trim_start_matches("\t<span class='content'>")
                    .trim_end_matches("</span>");
                if let Some((_, titles)) = sections.last_mut() {
                    titles.push(title.to_string());
                }
            }
        }

        sections
    }

    #[test]
    fn generates_three_sections_in_order() {
        let (_temp, config) = fixture();
        let output = config.output.clone();

        let result = DocumentGenerator::new(config).generate().unwrap();

        assert_eq!(
            result.sections,
            vec![
                SectionSummary { id: "kstate", rows: 2 },
                SectionSummary { id: "state", rows: 3 },
                SectionSummary { id: "regents", rows: 1 },
            ]
        );
        assert_eq!(result.total_rows(), 6);

        let html = fs::read_to_string(output).unwrap();
        assert_eq!(html.matches(r#"<div class="outerrow">"#).count(), 6);
        assert_eq!(
            section_titles(&html),
            vec![
                ("kstate".to_string(), vec!["K1".to_string(), "K2".to_string()]),
                (
                    "state".to_string(),
                    vec!["S1".to_string(), "S2".to_string(), "S3".to_string()]
                ),
                ("regents".to_string(), vec!["R1".to_string()]),
            ]
        );
    }

    #[test]
    fn output_starts_with_styles() {
        let (_temp, config) = fixture();
        let output = config.output.clone();

        let result = DocumentGenerator::new(config).generate().unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.starts_with("<style>\n"));
        assert!(html.ends_with("</div>\n"));
        assert_eq!(html.lines().count(), result.lines);
    }

    #[test]
    fn escapes_cell_markup() {
        let temp = tempdir().unwrap();
        let content = format!(
            "{HEADER}\n{}\n",
            record("Injected", "<img src=x onerror=alert(1)> & \"\"quoted\"\"")
        );
        let kstate = temp.path().join("kstate.csv");
        fs::write(&kstate, content).unwrap();
        let state = write_csv(temp.path(), "state.csv", &[]);
        let regents = write_csv(temp.path(), "regents.csv", &[]);
        let output = temp.path().join("out.html");

        DocumentGenerator::new(GenerateConfig::new(kstate, state, regents, &output))
            .generate()
            .unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains(
            "<span class='content'>&lt;img src=x onerror=alert(1)&gt; &amp; &quot;quoted&quot;</span>"
        ));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn empty_cells_render_label_only() {
        let (_temp, config) = fixture();
        let output = config.output.clone();

        DocumentGenerator::new(config).generate().unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains(
            "<div class='clearfix tablecolumn Agency'>\n\t<span class='label'>Agency</span>\n\t<span class='content'>KSU</span>\n</div>"
        ));
        assert!(html.contains(
            "<div class='clearfix tablecolumn Approved'>\n\t<span class='label'>Approved</span>\n\n</div>"
        ));
        // "0" is a value, not an empty cell.
        assert!(html.contains(
            "<div class='clearfix tablecolumn Retention'>\n\t<span class='label'>Retention</span>\n\t<span class='content'>0</span>\n</div>"
        ));
        assert!(!html.contains(">nan<"));
    }

    #[test]
    fn missing_input_writes_nothing() {
        let (temp, mut config) = fixture();
        config.state = temp.path().join("missing.csv");
        let output = config.output.clone();

        let result = DocumentGenerator::new(config).generate();

        assert!(matches!(result, Err(GenerateError::InvalidPath)));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_leaves_existing_output() {
        let (temp, mut config) = fixture();
        config.regents = temp.path().join("missing.csv");
        fs::write(&config.output, "previous").unwrap();
        let output = config.output.clone();

        let status = ConversionStatus::from(DocumentGenerator::new(config).generate());

        assert_eq!(status, ConversionStatus::failure("File path(s) provided are not valid"));
        assert_eq!(fs::read_to_string(output).unwrap(), "previous");
    }

    #[test]
    fn malformed_row_writes_nothing() {
        let (temp, mut config) = fixture();
        let bad = temp.path().join("bad.csv");
        fs::write(&bad, format!("{HEADER}\n1,2,3\n")).unwrap();
        config.regents = bad;
        let output = config.output.clone();

        let result = DocumentGenerator::new(config).generate();

        assert!(matches!(
            result,
            Err(GenerateError::Parse(ParseError::ColumnCount { found: 3, .. }))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_is_write_error() {
        let (temp, mut config) = fixture();
        config.output = temp.path().join("no-such-dir").join("out.html");

        let result = DocumentGenerator::new(config).generate();

        assert!(matches!(result, Err(GenerateError::Write(_))));
    }

    #[test]
    fn overwrites_existing_output() {
        let (_temp, config) = fixture();
        fs::write(&config.output, "stale content").unwrap();
        let output = config.output.clone();

        DocumentGenerator::new(config).generate().unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(!html.contains("stale content"));
        assert!(html.contains(r#"<div id="kstate">"#));
    }

    #[test]
    fn output_is_deterministic() {
        let (_temp, config) = fixture();
        let output = config.output.clone();
        let generator = DocumentGenerator::new(config);

        generator.generate().unwrap();
        let first = fs::read(&output).unwrap();
        generator.generate().unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn standalone_wraps_document() {
        let (_temp, mut config) = fixture();
        config.standalone = true;
        let output = config.output.clone();

        DocumentGenerator::new(config).generate().unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Official Document Schedules</title>"));
        assert!(html.contains("<body>\n<style>\n"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn convert_reports_status() {
        let (_temp, config) = fixture();

        let status = convert(&config.kstate, &config.state, &config.regents, &config.output);

        assert!(status.is_success());
        assert_eq!(status.code, 0);
        assert_eq!(status.reason, SUCCESS_REASON);
        assert!(config.output.exists());
    }

    #[test]
    fn convert_reports_failure() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("out.html");

        let status = convert(
            temp.path().join("a.csv"),
            temp.path().join("b.csv"),
            temp.path().join("c.csv"),
            &output,
        );

        assert_eq!(status.code, 1);
        assert_eq!(status.reason, "File path(s) provided are not valid");
        assert!(!output.exists());
    }
}
