//! Dioxus components and DOM bridge for the donation earnings chart.
//!
//! This crate provides:
//! - `state`: the chart state machine as a single pure `reduce` function
//! - `view`: the column/axis view model the `Graph` component renders
//! - `resize`: one viewport width per throttle window, last width wins
//! - `dom_bridge`: viewport, fetch and scoped DOM listeners via `web-sys`
//! - `config`: process-wide chart constants
//! - `components`: the RSX components (`InteractiveChart`, `Graph`, `PeriodSelect`, ..)

pub mod components;
pub mod config;
pub mod dom_bridge;
pub mod resize;
pub mod state;
pub mod view;
