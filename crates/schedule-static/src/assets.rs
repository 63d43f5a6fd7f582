//! Page shell assets: style rules, client script and the search toolbar.

use schedule_csv::field_class;

use crate::section::SectionKind;

/// Columns kept in the markup for search but hidden from display.
pub const HIDDEN_COLUMNS: [&str; 11] = [
    "Agency Code",
    "Agency",
    "Subagency1",
    "Subagency2",
    "Subagency3",
    "Subagency4",
    "Approved",
    "Authority",
    "KAR#",
    "Format",
    "Last Survey",
];

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the style rules, without the surrounding `<style>` element.
    pub fn generate_css() -> String {
        let hidden = HIDDEN_COLUMNS
            .iter()
            .map(|column| class_selector(&field_class(column)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{}{} {{display:none;}}\n{}", LAYOUT_CSS, hidden, CONTROLS_CSS)
    }

    /// Style block lines, `<style>` through `</style>`.
    pub fn style_block(minify: bool) -> Vec<String> {
        let css = Self::generate_css();
        let css = if minify {
            match Self::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Keeping unminified styles: {}", e);
                    css
                }
            }
        } else {
            css
        };

        let mut lines = vec!["<style>".to_string()];
        lines.extend(css.lines().map(String::from));
        lines.push("</style>".to_string());
        lines
    }

    /// Script block lines, `<script>` through `</script>`.
    pub fn script_block() -> Vec<String> {
        let mut lines = vec![r#"<script type="text/javascript">"#.to_string()];
        lines.push("//<![CDATA[".to_string());
        lines.extend(SEARCH_JS.lines().map(String::from));
        lines.push("//]]>".to_string());
        lines.push("</script>".to_string());
        lines
    }

    /// Search toolbar lines: the search box, reset, one toggle per section and
    /// the export control.
    pub fn toolbar_block() -> Vec<String> {
        let mut lines = vec![r#"<div id="searchdiv">"#.to_string()];
        lines.push(
            "\t<input type=\"search\" id=\"searchinput\" title=\"Filter the schedules on this page by keyword\" placeholder=\"Search keyword..\"/>"
                .to_string(),
        );
        lines.push(
            "\t<button type=\"button\" id=\"resetbutton\" title=\"Reset the search and show all schedules\" onclick=\"resetSearch()\">Reset Search</button>"
                .to_string(),
        );

        for section in SectionKind::ALL {
            lines.push(format!(
                "\t<button type=\"button\" id=\"{button}\" title=\"{title}\" onclick=\"toggle_visibility('{id}','{button}');\">{label}</button>",
                button = section.button_id(),
                title = section.button_title(),
                id = section.id(),
                label = section.button_label(),
            ));
        }

        // No export behavior yet; the control is rendered inert.
        lines.push(
            "\t<button type=\"button\" id=\"exportbutton\" title=\"Export the selected schedules\">Export Selected Schedules</button>"
                .to_string(),
        );
        lines.push("</div>".to_string());
        lines
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

/// CSS class selector for a class name, escaping anything outside `[A-Za-z0-9_-]`.
fn class_selector(class: &str) -> String {
    let mut selector = String::from(".");
    for c in class.chars() {
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            selector.push('\\');
        }
        selector.push(c);
    }
    selector
}

const LAYOUT_CSS: &str = r##".outerrow {width:100%; border-top:1px dimgray solid; padding-top:15px; padding-bottom:15px; margin-top:15px; display:block;}
.tablecolumn {width:100%; display:block; clear:both; margin-bottom:1px; min-height:25px;}
.label {float:left; display:block; width:20%;}
.content {float:right; display:block; width:78%;}
"##;

const CONTROLS_CSS: &str = r##"#searchdiv button {padding:10px; background-color:#4f1d85; margin-right:20px; color:white; font-size:14px; font-weight:bold; cursor:pointer; margin-bottom:5px;}
#searchdiv button:hover, #searchdiv button:active {background-color:#663596;}
#searchdiv button#resetbutton {background-color:lightgray; color:black;}
#searchdiv button#resetbutton:hover {background-color:dimgray;}
input#searchinput {font-size:16px; margin-right:10px; border:2px black solid; padding:4px;}
.clearfix:after {
  content: " ";
  visibility: hidden;
  display: block;
  height: 0;
  clear: both;
}
.is-hidden {display:none;}"##;

// Rows are matched on textContent so columns hidden by CSS stay searchable.
const SEARCH_JS: &str = r##"function toggle_visibility(id, btn) {
  var section = document.getElementById(id);
  var button = document.getElementById(btn);
  if (section.style.display == "none") {
    section.style.display = "block";
    button.style.backgroundColor = "#4f1d85";
    button.style.color = "#efefef";
    button.style.textDecoration = "none";
  } else {
    section.style.display = "none";
    button.style.backgroundColor = "dimgray";
    button.style.color = "white";
    button.style.textDecoration = "line-through";
  }
}
function liveSearch() {
  var query = document.getElementById("searchinput").value.toLowerCase();
  var rows = document.getElementsByClassName("outerrow");
  for (var i = 0; i < rows.length; i++) {
    if (rows[i].textContent.toLowerCase().includes(query)) {
      rows[i].classList.remove("is-hidden");
    } else {
      rows[i].classList.add("is-hidden");
    }
  }
}
window.onload = function() {
  var typingTimer;
  var typeInterval = 100;
  var searchInput = document.getElementById("searchinput");
  searchInput.value = "";
  searchInput.addEventListener("keyup", function() {
    clearTimeout(typingTimer);
    typingTimer = setTimeout(liveSearch, typeInterval);
  });
};
function resetSearch() {
  document.getElementById("searchinput").value = "";
  liveSearch();
}"##;
