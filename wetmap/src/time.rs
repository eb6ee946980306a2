//! Time-related utility functions.

use chrono::Datelike;

/// The current calendar year in local time.
///
/// Used as the upper bound of year sliders, so a dashboard deployed next
/// year picks up the new year without a code change.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
