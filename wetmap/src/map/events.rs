//! Map interaction events and handler registration.

use super::MapView;

/// Kind of interaction reported by the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    /// A mouse click on the map.
    Click,
    /// Any other interaction (move, drag, ...). Handlers ignore these.
    Other,
}

/// One interaction reported by the map widget.
///
/// Coordinates arrive in (lat, lon) order, the order map widgets report
/// them in. Conversion to query-point order happens in
/// [`crate::coord::to_query_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionEvent {
    /// What happened.
    pub kind: InteractionKind,
    /// Where it happened, as (lat, lon) in degrees.
    pub coordinates: (f64, f64),
}

impl InteractionEvent {
    /// A click at (lat, lon).
    pub fn click(lat: f64, lon: f64) -> Self {
        Self {
            kind: InteractionKind::Click,
            coordinates: (lat, lon),
        }
    }

    /// A non-click interaction at (lat, lon).
    pub fn other(lat: f64, lon: f64) -> Self {
        Self {
            kind: InteractionKind::Other,
            coordinates: (lat, lon),
        }
    }
}

/// A callback subscribed to a map's interaction stream.
///
/// Handlers run one at a time to completion; the `&mut MapView` argument is
/// the same map the handler is registered on, so mutation of map state from
/// inside a handler needs no synchronization.
pub trait InteractionHandler {
    /// React to one interaction event.
    fn handle(&mut self, map: &mut MapView, event: &InteractionEvent);
}
