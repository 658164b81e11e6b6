use owo_colors::OwoColorize;
use std::fmt::Write;
use tripplan_types::PlanResponse;

use super::Palette;

/// Render the planning service's answer.
///
/// Uses the day-by-day layout when the body has an itinerary, otherwise prints
/// the JSON as received.
pub fn render_plan(response: &PlanResponse, palette: Palette) -> String {
    let mut out = String::new();

    let Some(days) = response.itinerary() else {
        let body = serde_json::to_string_pretty(response.as_json())
            .unwrap_or_else(|_| response.as_json().to_string());
        let _ = writeln!(out, "{}", body);
        return out;
    };

    let title = if palette.color {
        "Itinerary".bold().to_string()
    } else {
        "Itinerary".to_string()
    };
    let _ = writeln!(out, "{}", title);

    if days.is_empty() {
        let _ = writeln!(out, "  (no days planned)");
    }
    for day in days {
        let _ = writeln!(out, "  Day {:<3} {}", day.day, day.summary);
    }

    out
}
