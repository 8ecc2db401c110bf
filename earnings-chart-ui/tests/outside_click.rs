use earnings_chart_ui::dom_bridge::{event_is_outside, outside_click_host, unique_element_id};
use earnings_utils::listener::ScopedListener;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit};
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// A selector root holding a toggle and one option, plus a sibling of the root.
struct Page {
    root_id: String,
    root: Element,
    toggle: Element,
    option: Element,
    sibling: Element,
}

impl Page {
    fn mount() -> Self {
        let document = web_sys::window().unwrap().document().unwrap();
        let html = document.document_element().unwrap();

        let root_id = unique_element_id("test-period-select");
        let root = document.create_element("div").unwrap();
        root.set_id(&root_id);
        let toggle = document.create_element("button").unwrap();
        let option = document.create_element("button").unwrap();
        root.append_child(&toggle).unwrap();
        root.append_child(&option).unwrap();
        let sibling = document.create_element("div").unwrap();
        html.append_child(&root).unwrap();
        html.append_child(&sibling).unwrap();

        Self { root_id, root, toggle, option, sibling }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.root.remove();
        self.sibling.remove();
    }
}

fn click(target: &Element) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event
}

#[wasm_bindgen_test]
fn clicks_inside_root_are_not_outside() {
    let page = Page::mount();
    assert!(!event_is_outside(&page.root_id, &click(&page.toggle)));
    assert!(!event_is_outside(&page.root_id, &click(&page.option)));
    assert!(!event_is_outside(&page.root_id, &click(&page.root)));
    assert!(event_is_outside(&page.root_id, &click(&page.sibling)));
}

#[wasm_bindgen_test]
fn missing_root_never_counts_as_outside() {
    let page = Page::mount();
    assert!(!event_is_outside("no-such-select", &click(&page.sibling)));
}

#[wasm_bindgen_test]
fn outside_click_fires_once_while_attached() {
    let page = Page::mount();
    let closes = Rc::new(Cell::new(0));
    let counter = closes.clone();
    let mut listener = ScopedListener::new(outside_click_host(page.root_id.clone(), move || {
        counter.set(counter.get() + 1)
    }));

    listener.set_active(true);
    click(&page.toggle);
    click(&page.option);
    assert_eq!(closes.get(), 0);

    click(&page.sibling);
    assert_eq!(closes.get(), 1);

    // closed: later outside clicks reach nothing
    listener.set_active(false);
    click(&page.sibling);
    assert_eq!(closes.get(), 1);
}

#[wasm_bindgen_test]
fn two_selectors_only_react_to_their_own_root() {
    let first = Page::mount();
    let second = Page::mount();
    let closes = Rc::new(Cell::new(0));
    let counter = closes.clone();
    let mut listener = ScopedListener::new(outside_click_host(second.root_id.clone(), move || {
        counter.set(counter.get() + 1)
    }));
    listener.set_active(true);

    click(&second.toggle);
    assert_eq!(closes.get(), 0);
    click(&first.toggle);
    assert_eq!(closes.get(), 1);
}
