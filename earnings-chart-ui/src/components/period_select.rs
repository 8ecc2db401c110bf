//! Period dropdown with outside-click dismissal.

use crate::config::PERIOD_SELECT_ID_PREFIX;
use crate::dom_bridge::{outside_click_host, unique_element_id};
use dioxus::prelude::*;
use earnings_data::GraphPeriod;
use earnings_utils::listener::ScopedListener;
use futures::channel::mpsc;
use futures::StreamExt;
use std::cell::RefCell;
use std::rc::Rc;

/// Dropdown showing the current period; opening it lists the other two.
///
/// While open, a document-level `click` listener closes the dropdown on any
/// click outside its root. The listener is attached only while `is_open` and
/// is removed on close and on unmount. On the toggle, ArrowDown opens and
/// Escape closes.
#[component]
pub fn PeriodSelect(
    current_period: GraphPeriod,
    is_open: bool,
    on_toggle: EventHandler<()>,
    on_open: EventHandler<()>,
    on_close: EventHandler<()>,
    on_change: EventHandler<GraphPeriod>,
) -> Element {
    let root_id = use_hook(|| unique_element_id(PERIOD_SELECT_ID_PREFIX));

    let dismiss = use_hook({
        let root_id = root_id.clone();
        move || {
            // DOM callbacks only feed the channel; `on_close` runs inside the
            // component's own task.
            let (tx, mut rx) = mpsc::unbounded::<()>();
            spawn(async move {
                while rx.next().await.is_some() {
                    on_close.call(());
                }
            });

            let host = outside_click_host(root_id, move || {
                let _ = tx.unbounded_send(());
            });
            Rc::new(RefCell::new(ScopedListener::new(host)))
        }
    });

    let listener = dismiss.clone();
    use_effect(use_reactive((&is_open,), move |(is_open,)| {
        listener.borrow_mut().set_active(is_open);
    }));

    let on_unmount = dismiss.clone();
    use_drop(move || on_unmount.borrow_mut().release());

    let arrow = if is_open { "\u{25B2}" } else { "\u{25BC}" };
    let current_text = current_period.description();
    let options: Vec<(GraphPeriod, String, &'static str)> = current_period
        .others()
        .map(|period| (period, format!("period-option-{}", period.key()), period.description()))
        .collect();

    rsx! {
        div {
            id: "{root_id}",
            class: "period-select",
            style: "position: relative; display: inline-block;",
            button {
                class: "period-select-toggle",
                style: "display: flex; gap: 8px; align-items: center; padding: 6px 12px; border: 1px solid #ccc; border-radius: 6px; background: #fff; cursor: pointer;",
                onclick: move |_| on_toggle.call(()),
                onkeydown: move |evt: KeyboardEvent| match evt.key() {
                    Key::ArrowDown => on_open.call(()),
                    Key::Escape => on_close.call(()),
                    _ => {}
                },
                span { "{current_text}" }
                span { style: "font-size: 10px;", "{arrow}" }
            }
            if is_open {
                div {
                    class: "period-select-options",
                    style: "position: absolute; top: 100%; left: 0; z-index: 10; display: flex; flex-direction: column; min-width: 100%; margin-top: 4px; border: 1px solid #ccc; border-radius: 6px; background: #fff;",
                    for (period, option_id, text) in options {
                        button {
                            key: "{option_id}",
                            id: "{option_id}",
                            style: "padding: 6px 12px; border: none; background: none; text-align: left; cursor: pointer;",
                            onclick: move |_| on_change.call(period),
                            "{text}"
                        }
                    }
                }
            }
        }
    }
}
