//! Output pane for panel messages and query results.
//!
//! Stand-in for the output region a panel writes into: a status message
//! while a query runs, chart data once it returns, or nothing. Chart pixel
//! rendering belongs to the hosting widget; the pane holds the data.

use std::cell::RefCell;
use std::rc::Rc;

/// Data behind a bar chart: labelled bars plus axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// (bar label, bar value) in display order.
    pub bars: Vec<(String, f64)>,
}

/// What an output pane currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PaneContent {
    /// Nothing.
    #[default]
    Empty,
    /// A status or instruction message.
    Message(String),
    /// Chart data from a completed query.
    Chart(ChartData),
}

/// A display region owned by one panel.
#[derive(Debug, Default)]
pub struct OutputPane {
    content: PaneContent,
}

impl OutputPane {
    /// Create an empty pane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the pane.
    pub fn clear(&mut self) {
        self.content = PaneContent::Empty;
    }

    /// Replace the content with a message.
    pub fn set_message(&mut self, message: &str) {
        self.content = PaneContent::Message(message.to_string());
    }

    /// Replace the content with chart data.
    pub fn set_chart(&mut self, chart: ChartData) {
        self.content = PaneContent::Chart(chart);
    }

    /// The current content.
    pub fn content(&self) -> &PaneContent {
        &self.content
    }

    /// Whether the pane shows nothing.
    pub fn is_empty(&self) -> bool {
        self.content == PaneContent::Empty
    }

    /// The current message, if the pane shows one.
    pub fn message(&self) -> Option<&str> {
        match &self.content {
            PaneContent::Message(m) => Some(m),
            _ => None,
        }
    }
}

/// An output pane shared between a panel and the handlers that clear it.
///
/// The dashboard event model is single-threaded, so shared ownership uses
/// `Rc<RefCell<..>>` rather than a lock.
pub type SharedOutput = Rc<RefCell<OutputPane>>;

/// Create a new shared output pane.
pub fn shared_output() -> SharedOutput {
    Rc::new(RefCell::new(OutputPane::new()))
}
