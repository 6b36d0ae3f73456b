//! Summary statistic cards for the analysed window.

use dioxus::prelude::*;
use gwd_wris::summary::GroundwaterSummary;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: GroundwaterSummary,
}

fn level_text(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2} m"),
        None => "N/A m".to_string(),
    }
}

/// The five headline cards: latest level, net change, average, maximum,
/// minimum. Net change is tinted by direction; a missing statistic
/// renders as `N/A m` instead of hiding the card.
#[component]
pub fn SummaryCards(props: SummaryCardsProps) -> Element {
    let summary = &props.summary;
    let latest = level_text(summary.latest_water_level.as_ref().and_then(|l| l.level));
    let net_change = level_text(summary.net_change);
    let net_change_color = if summary.net_change.map(|v| v >= 0.0).unwrap_or(false) {
        "#4ADE80"
    } else {
        "#F87171"
    };
    let cards = [
        ("Latest Water Level", latest, None),
        ("Net Change", net_change, Some(net_change_color)),
        ("Average Level", level_text(summary.average_level), None),
        ("Maximum Level", level_text(summary.max_level), None),
        ("Minimum Level", level_text(summary.min_level), None),
    ];

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px;",
            for (title, value, color) in cards {
                div {
                    key: "{title}",
                    style: "background: #1F2937; border: 1px solid #374151; border-radius: 8px; padding: 20px;",
                    h3 {
                        style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 500; color: #9CA3AF;",
                        "{title}"
                    }
                    div {
                        style: format!(
                            "font-size: 26px; font-weight: 700; color: {};",
                            color.unwrap_or("#F9FAFB")
                        ),
                        "{value}"
                    }
                }
            }
        }
    }
}
