use contracts::shared::progress::ProgressStatus;
use leptos::prelude::*;

use crate::shared::format::{format_money, format_percent};

fn status_modifier(status: Option<ProgressStatus>) -> &'static str {
    match status {
        Some(ProgressStatus::OnTrack) => "progress--success",
        Some(ProgressStatus::Warning) => "progress--warning",
        Some(ProgressStatus::Behind) => "progress--error",
        None => "progress--neutral",
    }
}

fn status_label(status: Option<ProgressStatus>) -> &'static str {
    match status {
        Some(ProgressStatus::OnTrack) => "On track",
        Some(ProgressStatus::Warning) => "Warning",
        Some(ProgressStatus::Behind) => "Behind",
        None => "No target",
    }
}

/// Bar + status dot showing cumulative sales against a static target.
#[component]
pub fn ProgressIndicator(
    /// Cumulative sales for the card
    current: f64,
    /// Static target resolved by the backend
    target: f64,
    /// Ratio current/target as a percentage, None when the target is not set
    percent: Option<f64>,
    /// Classified status matching the percentage
    status: Option<ProgressStatus>,
) -> impl IntoView {
    let modifier = status_modifier(status);
    let bar_width = percent.map(|p| p.clamp(0.0, 100.0)).unwrap_or(0.0);
    let bar_style = format!("width: {:.1}%", bar_width);

    view! {
        <div class=format!("progress {}", modifier)>
            <div class="progress__numbers">
                <span class="progress__current">{format_money(current)}</span>
                <span class="progress__target">{format!("of {}", format_money(target))}</span>
            </div>
            <div class="progress__track">
                <div class="progress__bar" style=bar_style></div>
            </div>
            <div class="progress__meta">
                <span class="progress__dot"></span>
                <span class="progress__status">{status_label(status)}</span>
                <span class="progress__percent">{format_percent(percent)}</span>
            </div>
        </div>
    }
}
