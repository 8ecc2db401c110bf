//! Process-wide chart constants.

/// Viewports narrower than this many CSS pixels use the mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 900.0;

/// Resize events are folded into one state update per this many milliseconds.
pub const RESIZE_THROTTLE_MS: u32 = 150;

/// Columns stay collapsed this long after a period switch before growing back.
/// Must outlast one render/paint so the collapse is actually drawn.
pub const REGROW_DELAY_MS: u32 = 100;

/// Duration of the column grow transition.
pub const COLUMN_TRANSITION: &str = "0.5s";

/// Prefix of each period selector's root id; every instance appends its own
/// number so outside-click detection never resolves another chart's selector.
pub const PERIOD_SELECT_ID_PREFIX: &str = "earnings-period-select";
