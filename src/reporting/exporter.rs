use chrono::{DateTime, Local, SecondsFormat, Utc};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::constants::report;
use crate::core::error::{HumanizeError, Result};
use crate::reporting::logging;
use crate::reporting::page::RenderedPage;

/// A standalone report ready to be saved
#[derive(Debug, Clone)]
pub struct Report {
    pub filename: String,
    pub html: String,
    /// Stylesheets whose rules could not be captured
    pub skipped_stylesheets: usize,
}

/// Where a report was saved and how many stylesheets it lacks
#[derive(Debug, Clone, PartialEq)]
pub struct SavedReport {
    pub path: PathBuf,
    pub skipped_stylesheets: usize,
}

/// Snapshot exporter for the rendered results page
pub struct ReportExporter;

impl ReportExporter {
    /// Build the report and save it into `dir`, never overwriting a file
    pub fn export(page: &RenderedPage, dir: &Path) -> Result<SavedReport> {
        let report = Self::build(page, Utc::now());
        let path = Self::write(&report, dir)?;
        Ok(SavedReport {
            path,
            skipped_stylesheets: report.skipped_stylesheets,
        })
    }

    /// Assemble the standalone document from the page as it is right now
    pub fn build(page: &RenderedPage, now: DateTime<Utc>) -> Report {
        let (styles, skipped_stylesheets) = Self::collect_styles(page);
        let header = page.header_markup().unwrap_or_default();
        let main = page.main_markup().unwrap_or_default();

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - {}</title>
    <style>
{}
        body {{ background-color: {}; }}
    </style>
</head>
<body class="{}">
    {}
    <main class="{}">
        {}
    </main>
</body>
</html>
"#,
            report::TITLE_PREFIX,
            now.with_timezone(&Local).format("%Y-%m-%d"),
            styles,
            report::BODY_BACKGROUND,
            page.body_class(),
            header,
            report::MAIN_CLASS,
            main
        );

        Report {
            filename: Self::filename_for(now),
            html,
            skipped_stylesheets,
        }
    }

    /// Font import followed by the rules of every readable stylesheet.
    ///
    /// Unreadable sheets are skipped with a warning.
    pub fn collect_styles(page: &RenderedPage) -> (String, usize) {
        let mut styles = String::from(report::FONT_IMPORT);
        styles.push('\n');
        let mut skipped = 0;

        for sheet in page.stylesheets() {
            match sheet.read_rules() {
                Ok(rules) => {
                    styles.push_str(&rules);
                    styles.push('\n');
                }
                Err(reason) => {
                    logging::log_stylesheet_skipped(&sheet.to_string(), &reason);
                    skipped += 1;
                }
            }
        }

        (styles, skipped)
    }

    /// `Humanize_AI_Report_<ISO timestamp with ':' and '.' replaced by '-'>.html`
    pub fn filename_for(now: DateTime<Utc>) -> String {
        let timestamp = now
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace([':', '.'], "-");
        format!(
            "{}{}.{}",
            report::FILENAME_PREFIX,
            timestamp,
            report::FILENAME_EXTENSION
        )
    }

    fn write(report: &Report, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&report.filename);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                HumanizeError::Export(format!("Could not create '{}': {e}", path.display()))
            })?;

        if let Err(e) = file.write_all(report.html.as_bytes()).and_then(|()| file.flush()) {
            drop(file);
            return Err(Self::discard_partial(&path, e));
        }

        logging::log_report_written(&path, report.html.len());
        Ok(path)
    }

    /// Remove a partially written report and describe the failure
    fn discard_partial(path: &Path, cause: io::Error) -> HumanizeError {
        if let Err(e) = fs::remove_file(path) {
            logging::log_warning(&format!(
                "Could not remove incomplete report '{}': {e}",
                path.display()
            ));
        }
        HumanizeError::Export(format!("Could not write '{}': {cause}", path.display()))
    }
}
