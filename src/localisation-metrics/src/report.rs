use crate::error::{
    Result,
    error::{JsonSnafu, RenderSnafu, WriteSnafu},
};
use async_trait::async_trait;
use localisation_core::{
    CoreResult, LocalisationReport, MetricsRow, REPORT_HEADER, ReportInbound,
};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use strum::{AsRefStr, Display, EnumString};
use tracing::{info, instrument};

const UNDEFINED: &str = "undefined";

const CSS: &str = r#"
table {
    border-collapse: collapse;
    font-family: sans-serif;
}
th, td {
    border: 1px solid #ccc;
    padding: 4px 8px;
    text-align: right;
}
th:first-child, td:first-child {
    text-align: left;
}
.unbreakable {
    page-break-inside: avoid;
}
"#;

#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    EnumString,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Text,
    Json,
}

/// Writes the rendered report to `dest_path`, replacing any existing file.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dest_path: PathBuf,
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(dest_path: PathBuf, format: ReportFormat) -> Self {
        Self { dest_path, format }
    }

    pub fn dest_path(&self) -> &Path {
        &self.dest_path
    }
}

#[async_trait]
impl ReportInbound for ReportWriter {
    #[instrument(skip_all, fields(app.format = %self.format))]
    async fn write_report(&self, report: &LocalisationReport) -> CoreResult<()> {
        let rendered = render_report(report, self.format)?;
        write_file(&self.dest_path, rendered).await?;
        info!("wrote report to '{}'", self.dest_path.display());
        Ok(())
    }
}

async fn write_file(path: &Path, contents: String) -> Result<()> {
    tokio::fs::write(path, contents).await.context(WriteSnafu {
        path: path.display().to_string(),
    })
}

pub fn render_report(report: &LocalisationReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Html => render_html(report).context(RenderSnafu),
        ReportFormat::Text => render_text(report).context(RenderSnafu),
        ReportFormat::Json => serde_json::to_string_pretty(report).context(JsonSnafu),
    }
}

/// Formats a metric with two decimals, undefined metrics are rendered as `undefined`.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => UNDEFINED.to_string(),
    }
}

fn row_cells(row: &MetricsRow) -> [String; 5] {
    [
        row.label(),
        format_metric(row.precision),
        format_metric(row.recall),
        format_metric(Some(row.accuracy)),
        format_metric(row.f1),
    ]
}

/// Category rows, a blank separator row and the overall row, in that order.
fn table_rows(report: &LocalisationReport) -> Vec<[String; 5]> {
    let mut rows: Vec<_> = report.categories.iter().map(row_cells).collect();
    if let Some(overall) = &report.overall {
        rows.push(Default::default());
        rows.push(row_cells(overall));
    }
    rows
}

fn render_html(report: &LocalisationReport) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "<style type=\"text/css\">{CSS}</style>")?;
    writeln!(out, "<h2>Fishing Localisation</h2>")?;
    writeln!(out, "<div class=\"unbreakable\">")?;
    writeln!(out, "  <table>")?;

    write!(out, "    <tr>")?;
    for h in REPORT_HEADER {
        write!(out, "<th>{}</th>", escape(h))?;
    }
    writeln!(out, "</tr>")?;

    for row in table_rows(report) {
        write!(out, "    <tr>")?;
        for cell in row {
            write!(out, "<td>{}</td>", escape(&cell))?;
        }
        writeln!(out, "</tr>")?;
    }

    writeln!(out, "  </table>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "<hr/>")?;

    Ok(out)
}

fn render_text(report: &LocalisationReport) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Fishing Localisation")?;
    writeln!(
        out,
        "{0: <32} | {1: <10} | {2: <10} | {3: <10} | {4: <10}",
        REPORT_HEADER[0], REPORT_HEADER[1], REPORT_HEADER[2], REPORT_HEADER[3], REPORT_HEADER[4],
    )?;
    writeln!(out, "{}", "-".repeat(84))?;

    for [label, precision, recall, accuracy, f1] in table_rows(report) {
        writeln!(
            out,
            "{0: <32} | {1: <10} | {2: <10} | {3: <10} | {4: <10}",
            label, precision, recall, accuracy, f1,
        )?;
    }

    Ok(out)
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
