use owo_colors::OwoColorize;
use std::fmt::Write;
use tripplan_runtime::{FormFeedback, HelperKind};

use super::Palette;

const SUBMIT_LABEL: &str = "Plan my trip";
const LABEL_WIDTH: usize = 11;

/// Render the form the way the page lays it out: each input with its inline
/// error beneath it, then the submit action and the helper line.
pub fn render_form(feedback: &FormFeedback, palette: Palette) -> String {
    let mut out = String::new();

    for field in &feedback.fields {
        let label = format!("{}:", field.label);
        let value = if field.value.is_empty() {
            dim(field.field.placeholder(), palette)
        } else {
            field.value.clone()
        };
        let _ = writeln!(out, "{:<width$}{}", label, value, width = LABEL_WIDTH);

        if let Some(error) = field.error {
            let _ = writeln!(
                out,
                "{:<width$}{}",
                "",
                red(&format!("✗ {}", error), palette),
                width = LABEL_WIDTH
            );
        }
    }

    let _ = writeln!(out);
    let button = if feedback.submit_enabled {
        format!("[ {} ]", SUBMIT_LABEL)
    } else {
        format!("[ {} ] (disabled)", SUBMIT_LABEL)
    };
    let _ = writeln!(out, "{}", button);

    let helper = match feedback.helper.kind {
        HelperKind::Error => red(&format!("✗ {}", feedback.helper.text), palette),
        HelperKind::Progress => format!("… {}", feedback.helper.text),
        HelperKind::Hint => dim(&feedback.helper.text, palette),
    };
    let _ = writeln!(out, "{}", helper);

    out
}

fn red(text: &str, palette: Palette) -> String {
    if palette.color {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

fn dim(text: &str, palette: Palette) -> String {
    if palette.color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
