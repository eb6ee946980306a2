//! Panel lifecycle state.

/// Where a panel is in its request/response cycle.
///
/// ```text
/// Idle -> (drawROI) -> ReadyToQuery -> (apply) -> Busy -> IdleWithResult
/// ```
///
/// Reset returns any state to `Idle`, discarding the drawn ROI and result
/// layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    /// No ROI drawn, nothing pending.
    #[default]
    Idle,
    /// An ROI is drawn; a query can run.
    ReadyToQuery,
    /// A query is running. The event model is single-threaded, so this is
    /// only ever observed from within the query call itself.
    Busy,
    /// A query completed and its result is displayed.
    IdleWithResult,
}

impl PanelPhase {
    /// Whether a completed result is on display.
    pub fn has_result(&self) -> bool {
        matches!(self, PanelPhase::IdleWithResult)
    }
}
