//! Typed wrappers around the browser APIs the chart needs.
//!
//! Everything that touches `web_sys` lives here: viewport measurement, the
//! payload fetch, and DOM event listeners. Listeners are registered through
//! [`DomEventHost`], which plugs into
//! [`ScopedListener`](earnings_utils::listener::ScopedListener) so every
//! `addEventListener` is paired with a `removeEventListener`.

use anyhow::{anyhow, bail};
use earnings_utils::listener::ListenerHost;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Current `window.innerWidth` in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// Fetch `url` and return the response body as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;

    let promise: js_sys::Promise = window.fetch_with_str(url);
    let response: web_sys::Response = JsFuture::from(promise)
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        bail!("GET {} failed with status {}", url, response.status());
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| anyhow!("GET {} returned a non-text body", url))
}

/// Whether `event` originated outside the element with id `element_id`.
///
/// A missing element counts as "not outside" so a stale listener can never
/// close anything.
pub fn event_is_outside(element_id: &str, event: &web_sys::Event) -> bool {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
    else {
        return false;
    };
    let target = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
    !root.contains(target.as_ref())
}

/// DOM id unique within the page, e.g. `earnings-period-select-3`.
pub fn unique_element_id(prefix: &str) -> String {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    format!("{}-{}", prefix, NEXT.fetch_add(1, Ordering::Relaxed))
}

/// Global object a listener is registered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    Window,
    Document,
}

impl ListenerTarget {
    fn event_target(self) -> Option<web_sys::EventTarget> {
        let window = web_sys::window()?;
        match self {
            ListenerTarget::Window => Some(window.into()),
            ListenerTarget::Document => window.document().map(Into::into),
        }
    }
}

/// Registers one callback for one event name on the window or document.
pub struct DomEventHost {
    target: ListenerTarget,
    event: &'static str,
    callback: Rc<dyn Fn(web_sys::Event)>,
}

impl DomEventHost {
    pub fn new(
        target: ListenerTarget,
        event: &'static str,
        callback: impl Fn(web_sys::Event) + 'static,
    ) -> Self {
        Self {
            target,
            event,
            callback: Rc::new(callback),
        }
    }
}

/// Document `click` listener calling `on_outside` for clicks that land
/// outside the element with id `root_id`.
pub fn outside_click_host(root_id: String, on_outside: impl Fn() + 'static) -> DomEventHost {
    DomEventHost::new(ListenerTarget::Document, "click", move |event| {
        if event_is_outside(&root_id, &event) {
            on_outside();
        }
    })
}

impl ListenerHost for DomEventHost {
    type Handle = Closure<dyn FnMut(web_sys::Event)>;

    fn attach(&mut self) -> Self::Handle {
        let callback = self.callback.clone();
        let closure = Closure::wrap(
            Box::new(move |event: web_sys::Event| callback(event)) as Box<dyn FnMut(web_sys::Event)>
        );

        match self.target.event_target() {
            Some(target) => {
                if let Err(e) = target
                    .add_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref())
                {
                    log::warn!("failed to attach {} listener: {:?}", self.event, e);
                }
            }
            None => log::warn!("no {:?} to attach {} listener to", self.target, self.event),
        }

        closure
    }

    fn detach(&mut self, handle: Self::Handle) {
        if let Some(target) = self.target.event_target() {
            if let Err(e) = target
                .remove_event_listener_with_callback(self.event, handle.as_ref().unchecked_ref())
            {
                log::warn!("failed to detach {} listener: {:?}", self.event, e);
            }
        }
        // `handle` drops here, after the browser no longer references it.
    }
}
