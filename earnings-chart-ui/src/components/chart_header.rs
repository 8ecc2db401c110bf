//! Title block above the chart.

use dioxus::prelude::*;
use earnings_data::FinanceTotal;
use earnings_utils::labels::format_axis_value;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Recipient nickname, omitted when empty
    #[props(default = String::new())]
    pub nickname: String,
    /// All-time totals, shown once anyone has donated
    #[props(default)]
    pub total: FinanceTotal,
}

/// Header naming the recipient and their all-time totals.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let title = if props.nickname.is_empty() {
        "Donation earnings".to_string()
    } else {
        format!("Donation earnings of {}", props.nickname)
    };
    let total = &props.total;
    let totals = (total.donators_count > 0).then(|| {
        format!(
            "Total: {} from {} donators ({} regular)",
            format_axis_value(total.sum),
            total.donators_count,
            total.regular_donators_count
        )
    });

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{title}"
            }
            if let Some(totals) = totals {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{totals}"
                }
            }
        }
    }
}
