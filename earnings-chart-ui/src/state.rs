//! Chart state machine.
//!
//! `ChartState` is owned by the `InteractiveChart` component and changes only
//! through [`reduce`]. Components dispatch [`ChartAction`]s; they never write
//! individual fields.

use crate::config::MOBILE_BREAKPOINT;
use earnings_data::GraphPeriod;

/// Period dropdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorState {
    pub current_period: GraphPeriod,
    pub is_open: bool,
}

/// Layout state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub is_mobile: bool,
    /// Forces every column to length 0 so the next render grows them again.
    pub is_zeroed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartState {
    pub selector: SelectorState,
    pub view: ViewState,
}

impl ChartState {
    /// Closed selector on the year period, columns at full length, layout
    /// taken from the first viewport measurement.
    pub fn new(viewport_width: f64) -> Self {
        Self {
            selector: SelectorState::default(),
            view: ViewState {
                is_mobile: is_mobile_width(viewport_width),
                is_zeroed: false,
            },
        }
    }

    pub fn is_month_period(&self) -> bool {
        self.selector.current_period == GraphPeriod::Month
    }
}

/// Events the chart reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartAction {
    ToggleSelector,
    OpenSelector,
    CloseSelector,
    /// Switch period, close the selector and collapse the columns.
    ChoosePeriod(GraphPeriod),
    /// Let collapsed columns grow back to their lengths.
    RestoreColumns,
    /// New viewport width in CSS pixels.
    ViewportResized(f64),
}

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

/// The only state transition function of the chart.
pub fn reduce(state: ChartState, action: ChartAction) -> ChartState {
    let ChartState {
        mut selector,
        mut view,
    } = state;

    match action {
        ChartAction::ToggleSelector => selector.is_open = !selector.is_open,
        ChartAction::OpenSelector => selector.is_open = true,
        ChartAction::CloseSelector => selector.is_open = false,
        ChartAction::ChoosePeriod(period) => {
            selector.current_period = period;
            selector.is_open = false;
            view.is_zeroed = true;
        }
        ChartAction::RestoreColumns => view.is_zeroed = false,
        ChartAction::ViewportResized(width) => view.is_mobile = is_mobile_width(width),
    }

    ChartState { selector, view }
}
