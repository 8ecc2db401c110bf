//! Placeholder shown while the payload is fetched.

use dioxus::prelude::*;

/// Skeleton of the chart: grey bars at staggered heights under a status line.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading earnings...".to_string())] label: String) -> Element {
    const SKELETON_HEIGHTS: [u32; 6] = [30, 55, 40, 80, 65, 45];

    rsx! {
        div {
            class: "earnings-loading",
            role: "status",
            style: "display: flex; flex-direction: column; align-items: center; gap: 12px; padding: 40px; color: #666;",
            ul {
                class: "earnings-loading-columns",
                style: "list-style: none; margin: 0; padding: 0; display: flex; align-items: flex-end; gap: 8px; height: 80px;",
                for (index, height) in SKELETON_HEIGHTS.iter().enumerate() {
                    li {
                        key: "{index}",
                        style: "width: 12px; height: {height}%; background: #e6e3fb; border-radius: 4px 4px 0 0;",
                    }
                }
            }
            span { "{label}" }
        }
    }
}
