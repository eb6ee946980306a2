//! Control panels: widget state, query actions, and output panes.
//!
//! Panels are request/response glue. Each collects its widget values into a
//! request, invokes the external query through a trait, and on success
//! replaces its display region's content with the result. When the
//! precondition (a drawn ROI) is missing, the query is skipped and a fixed
//! message shown instead.

mod aerial;
mod output;
mod state;
mod timeseries;
mod water;

pub use aerial::{AerialPanel, DRAW_PROMPT};
pub use output::{shared_output, ChartData, OutputPane, PaneContent, SharedOutput};
pub use state::PanelPhase;
pub use timeseries::{TimeSeriesPanel, MSG_CREATING, MSG_DRAW_ROI};
pub use water::{WaterPanel, MSG_COMPUTING_HISTOGRAM, MSG_COMPUTING_MONTHLY, MSG_DRAW_REGION};
