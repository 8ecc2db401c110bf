//! Donation earnings chart
//!
//! Data flow:
//! 1. On mount: fetch `./data.json` next to the page.
//! 2. If the fetch fails, fall back to the snapshot `build.rs` copied from
//!    `fixtures/donator.json` and `include_str!` embedded in the binary.
//! 3. Parse the payload into a `Donator` and hand it to `InteractiveChart`,
//!    which reshapes it into per-period columns once per payload.

use dioxus::prelude::*;
use earnings_chart_ui::components::{ChartHeader, InteractiveChart, LoadingSpinner};
use earnings_chart_ui::dom_bridge;
use earnings_data::Donator;

/// Payload served alongside the app.
const DATA_URL: &str = "./data.json";

const BUNDLED_DONATOR_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/donator.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("donation-earnings-root"))
        .launch(App);
}

/// Fetch the payload text, or the bundled snapshot when the fetch fails.
async fn load_payload_text() -> String {
    match dom_bridge::fetch_text(DATA_URL).await {
        Ok(text) => {
            log::info!("loaded payload from {}", DATA_URL);
            text
        }
        Err(e) => {
            log::warn!("fetching {} failed, using bundled snapshot: {:#}", DATA_URL, e);
            BUNDLED_DONATOR_JSON.to_string()
        }
    }
}

/// A payload that does not parse renders an empty chart.
fn parse_payload(text: &str) -> Donator {
    Donator::from_json(text).unwrap_or_else(|e| {
        log::warn!("{}, rendering an empty chart", e);
        Donator::default()
    })
}

#[component]
fn App() -> Element {
    let payload = use_resource(|| async move { parse_payload(&load_payload_text().await) });

    let body = match &*payload.read() {
        Some(donator) => rsx! {
            ChartHeader {
                nickname: donator.nickname.clone(),
                total: donator.finance.total.clone(),
            }
            InteractiveChart { data: donator.clone() }
        },
        None => rsx! { LoadingSpinner {} },
    };

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            {body}
        }
    }
}
