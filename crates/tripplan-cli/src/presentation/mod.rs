//! Terminal and JSON rendering of the trip request form.

mod form_view;
mod plan_view;
mod report;

pub use form_view::render_form;
pub use plan_view::render_plan;
pub use report::FormReport;

use is_terminal::IsTerminal;

/// Whether to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Colors only when stdout is a terminal
    pub fn detect() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }
}
