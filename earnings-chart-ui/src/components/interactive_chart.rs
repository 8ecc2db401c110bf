//! Period-selectable earnings chart.

use crate::components::{Graph, PeriodSelect};
use crate::config::{MOBILE_BREAKPOINT, REGROW_DELAY_MS, RESIZE_THROTTLE_MS};
use crate::dom_bridge::{viewport_width, DomEventHost, ListenerTarget};
use crate::resize::throttle_latest;
use crate::state::{reduce, ChartAction, ChartState};
use dioxus::prelude::*;
use earnings_data::{Donator, GraphColumnsByPeriod};
use earnings_scale::AxisScale;
use earnings_utils::labels::format_axis_value;
use earnings_utils::listener::ScopedListener;
use futures::channel::mpsc;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;

/// Apply `action` and write the state back only when it changed.
fn dispatch(mut state: Signal<ChartState>, action: ChartAction) {
    let current = *state.peek();
    let next = reduce(current, action);
    if next != current {
        log::debug!("{:?}: {:?} -> {:?}", action, current, next);
        state.set(next);
    }
}

/// Props for InteractiveChart
#[derive(Props, Clone, PartialEq)]
pub struct InteractiveChartProps {
    /// Parsed payload
    pub data: Donator,
    /// Value-axis breakpoints (defaults to the fixed 0..10000 scale)
    #[props(default)]
    pub scale: AxisScale,
}

/// Owns the chart state and wires the selector, the resize listener and the
/// column regrow timer around a [`Graph`].
#[component]
pub fn InteractiveChart(props: InteractiveChartProps) -> Element {
    let state = use_signal(|| {
        ChartState::new(viewport_width().unwrap_or(MOBILE_BREAKPOINT))
    });

    let columns = use_memo(use_reactive((&props.data,), |(data,)| {
        GraphColumnsByPeriod::from_donator(&data)
    }));

    // Window resizes go through a channel into a task that folds each burst
    // into one `ViewportResized` per throttle window.
    let resize = use_hook(move || {
        let (tx, rx) = mpsc::unbounded::<f64>();
        spawn(throttle_latest(
            rx,
            || TimeoutFuture::new(RESIZE_THROTTLE_MS),
            move |width| dispatch(state, ChartAction::ViewportResized(width)),
        ));

        let host = DomEventHost::new(ListenerTarget::Window, "resize", move |_| {
            if let Some(width) = viewport_width() {
                let _ = tx.unbounded_send(width);
            }
        });
        let mut listener = ScopedListener::new(host);
        listener.set_active(true);
        Rc::new(RefCell::new(listener))
    });
    use_drop(move || resize.borrow_mut().release());

    let on_change = move |period| {
        dispatch(state, ChartAction::ChoosePeriod(period));
        // Columns render collapsed first, then grow back with the transition.
        spawn(async move {
            TimeoutFuture::new(REGROW_DELAY_MS).await;
            dispatch(state, ChartAction::RestoreColumns);
        });
    };

    let current = state();
    let period = current.selector.current_period;
    let period_columns = columns.read().get(period).clone();
    let labels = props.scale.labels_for(period_columns.max_value);
    let summary = props
        .data
        .earnings()
        .map(|earnings| format_axis_value(earnings.sum_for(period)));

    rsx! {
        div {
            class: "interactive-chart",
            style: "display: flex; flex-direction: column; gap: 16px; padding: 16px; border: 1px solid #eee; border-radius: 8px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 12px;",
                PeriodSelect {
                    current_period: period,
                    is_open: current.selector.is_open,
                    on_toggle: move |_| dispatch(state, ChartAction::ToggleSelector),
                    on_open: move |_| dispatch(state, ChartAction::OpenSelector),
                    on_close: move |_| dispatch(state, ChartAction::CloseSelector),
                    on_change,
                }
                if let Some(sum) = summary {
                    span {
                        class: "period-earnings",
                        style: "font-weight: bold;",
                        "Earned: {sum}"
                    }
                }
            }
            Graph {
                columns: period_columns,
                labels,
                is_zeroed: current.view.is_zeroed,
                is_mobile: current.view.is_mobile,
                is_month_period: current.is_month_period(),
            }
        }
    }
}
