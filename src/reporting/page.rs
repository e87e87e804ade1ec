//! The rendered page
//!
//! Holds the markup currently shown for the header and main regions plus the
//! stylesheets attached to the page. `render` refreshes the regions from the
//! session; the exporter reads the page as it is at that moment.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::reporting::view;
use crate::session::Controller;

/// Body classes of the application page
pub const BODY_CLASS: &str = "min-h-screen bg-gray-50";

/// A stylesheet attached to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSheet {
    /// Rules embedded in the page
    Inline(String),
    /// Local stylesheet file
    File(PathBuf),
    /// Remotely hosted stylesheet; its rules are not readable offline
    Remote(String),
}

impl StyleSheet {
    /// Interpret a configured stylesheet entry
    pub fn from_entry(entry: &str) -> Self {
        let entry = entry.trim();
        if entry.starts_with("http://") || entry.starts_with("https://") {
            StyleSheet::Remote(entry.to_string())
        } else {
            StyleSheet::File(PathBuf::from(entry))
        }
    }

    /// Textual rules of this sheet, or why they could not be read
    pub fn read_rules(&self) -> Result<String, String> {
        match self {
            StyleSheet::Inline(css) => Ok(css.clone()),
            StyleSheet::File(path) => fs::read_to_string(path).map_err(|e| e.to_string()),
            StyleSheet::Remote(_) => Err("cross-origin stylesheet rules are not accessible".to_string()),
        }
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSheet::Inline(_) => write!(f, "<inline>"),
            StyleSheet::File(path) => write!(f, "{}", path.display()),
            StyleSheet::Remote(href) => write!(f, "{href}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    body_class: String,
    stylesheets: Vec<StyleSheet>,
    header: Option<String>,
    main: Option<String>,
}

impl Default for RenderedPage {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderedPage {
    /// Empty page carrying the application stylesheet
    pub fn new() -> Self {
        Self {
            body_class: BODY_CLASS.to_string(),
            stylesheets: vec![StyleSheet::Inline(view::APP_STYLESHEET.to_string())],
            header: None,
            main: None,
        }
    }

    /// Page without any stylesheet or region
    #[cfg(test)]
    pub(crate) fn blank() -> Self {
        Self {
            body_class: String::new(),
            stylesheets: Vec::new(),
            header: None,
            main: None,
        }
    }

    /// Attach extra stylesheets from configuration entries
    pub fn with_stylesheets<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            self.attach_stylesheet(StyleSheet::from_entry(entry.as_ref()));
        }
        self
    }

    pub fn attach_stylesheet(&mut self, sheet: StyleSheet) {
        self.stylesheets.push(sheet);
    }

    /// Re-render both regions from the current session
    pub fn render(&mut self, controller: &Controller, model: &str) {
        self.set_header(Some(view::render_header(model)));
        self.set_main(Some(view::render_main(controller.state(), controller.input())));
    }

    pub fn set_header(&mut self, markup: Option<String>) {
        self.header = markup;
    }

    pub fn set_main(&mut self, markup: Option<String>) {
        self.main = markup;
    }

    pub fn body_class(&self) -> &str {
        &self.body_class
    }

    pub fn stylesheets(&self) -> &[StyleSheet] {
        &self.stylesheets
    }

    /// Outer markup of the header region
    pub fn header_markup(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Inner markup of the main region
    pub fn main_markup(&self) -> Option<&str> {
        self.main.as_deref()
    }
}
