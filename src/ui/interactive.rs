//! Interactive prompt loop
//!
//! Paste text, read the analysis, then download the report, start over or
//! quit. All state changes go through the controller; the rendered page is
//! refreshed after each one so a download always captures what is shown.

use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

use crate::analysis::Analyze;
use crate::core::error::Result;
use crate::reporting::{RenderedPage, ReportExporter, SavedReport};
use crate::session::{AppState, Controller};
use crate::ui::output::{self, OutputFormat};
use crate::ui::progress::ProgressReporter;

/// Menu shown once results are on screen
pub const RESULTS_MENU: [&str; 3] = ["Download report", "Analyze new text", "Quit"];

/// Menu shown after a failed analysis
pub const ERROR_MENU: [&str; 3] = ["Try again", "Edit text", "Quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DownloadReport,
    AnalyzeNew,
    Retry,
    EditText,
    Quit,
}

impl MenuChoice {
    pub fn from_results_menu(index: usize) -> Self {
        match index {
            0 => MenuChoice::DownloadReport,
            1 => MenuChoice::AnalyzeNew,
            _ => MenuChoice::Quit,
        }
    }

    pub fn from_error_menu(index: usize) -> Self {
        match index {
            0 => MenuChoice::Retry,
            1 => MenuChoice::EditText,
            _ => MenuChoice::Quit,
        }
    }
}

pub struct InteractiveSession<'a, A: Analyze + ?Sized> {
    analyzer: &'a A,
    controller: Controller,
    page: RenderedPage,
    model: String,
    report_dir: PathBuf,
    format: OutputFormat,
    show_progress: bool,
}

impl<'a, A: Analyze + ?Sized> InteractiveSession<'a, A> {
    pub fn new(analyzer: &'a A, page: RenderedPage, model: &str, report_dir: &Path) -> Self {
        let mut session = Self {
            analyzer,
            controller: Controller::new(),
            page,
            model: model.to_string(),
            report_dir: report_dir.to_path_buf(),
            format: OutputFormat::Text,
            show_progress: true,
        };
        session.refresh();
        session
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    pub fn state(&self) -> &AppState {
        self.controller.state()
    }

    pub fn page(&self) -> &RenderedPage {
        &self.page
    }

    /// Text last submitted, kept after a failure so it can be edited
    pub fn input(&self) -> &str {
        self.controller.input()
    }

    /// Replace the input and submit it. Returns `false` when nothing was sent.
    pub async fn analyze_text(&mut self, text: &str) -> bool {
        self.controller.set_input(text);
        self.submit_current().await
    }

    /// Submit the input already held by the controller
    pub async fn submit_current(&mut self) -> bool {
        if !self.controller.can_submit() {
            return false;
        }

        let mut progress = ProgressReporter::new(self.show_progress);
        progress.start_analysis(self.controller.input().chars().count(), &self.model);
        let submitted = self.controller.submit(self.analyzer).await;
        progress.finish_analysis(self.controller.result().is_some());

        self.refresh();
        submitted
    }

    /// Export the page as currently rendered
    pub fn download_report(&self) -> Result<SavedReport> {
        ReportExporter::export(&self.page, &self.report_dir)
    }

    pub fn start_over(&mut self) {
        self.controller.reset();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.page.render(&self.controller, &self.model);
    }

    /// Run the prompt loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        let theme = ColorfulTheme::default();

        loop {
            match self.controller.state() {
                AppState::Idle => {
                    let text: String = Input::with_theme(&theme)
                        .with_prompt("Paste your text (empty line to quit)")
                        .allow_empty(true)
                        .interact_text()?;
                    if text.trim().is_empty() {
                        return Ok(());
                    }
                    self.analyze_text(&text).await;
                    output::print_outcome(self.controller.state(), self.format)?;
                }
                AppState::Results(_) => {
                    let index = Select::with_theme(&theme)
                        .with_prompt("What next?")
                        .items(&RESULTS_MENU)
                        .default(0)
                        .interact()?;
                    match MenuChoice::from_results_menu(index) {
                        MenuChoice::DownloadReport => match self.download_report() {
                            Ok(saved) => output::print_report_saved(&saved),
                            Err(e) => output::print_report_failed(&e.to_string()),
                        },
                        MenuChoice::AnalyzeNew => self.start_over(),
                        _ => return Ok(()),
                    }
                }
                AppState::Error(_) => {
                    let index = Select::with_theme(&theme)
                        .with_prompt("The analysis failed")
                        .items(&ERROR_MENU)
                        .default(0)
                        .interact()?;
                    match MenuChoice::from_error_menu(index) {
                        MenuChoice::Retry => {
                            self.submit_current().await;
                            output::print_outcome(self.controller.state(), self.format)?;
                        }
                        MenuChoice::EditText => {
                            let text: String = Input::with_theme(&theme)
                                .with_prompt("Edit your text")
                                .with_initial_text(self.input())
                                .allow_empty(true)
                                .interact_text()?;
                            if text.trim().is_empty() {
                                self.start_over();
                                continue;
                            }
                            self.analyze_text(&text).await;
                            output::print_outcome(self.controller.state(), self.format)?;
                        }
                        _ => return Ok(()),
                    }
                }
                // submit_current always settles before returning
                AppState::Analyzing => return Ok(()),
            }
        }
    }
}
