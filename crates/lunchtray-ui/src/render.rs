//! Plain-text rendering of a [`ScreenView`].

use crate::model::{ButtonState, ScreenBody, ScreenView};

const DIVIDER: &str = "--------";

/// Render a screen as text, one line per row.
pub fn render(view: &ScreenView) -> String {
    let header = if view.app_bar.can_navigate_back {
        format!("< {}", view.app_bar.title)
    } else {
        view.app_bar.title.to_string()
    };
    let underline = "=".repeat(header.chars().count());
    let mut lines = vec![header, underline];

    match &view.body {
        ScreenBody::Start => {}
        ScreenBody::Menu { options, .. } => {
            for option in options {
                let marker = if option.selected { "(*)" } else { "( )" };
                lines.push(format!(
                    "{} {}. {} {}",
                    marker, option.number, option.name, option.price
                ));
                lines.push(format!("      {}", option.description));
            }
        }
        ScreenBody::Checkout(summary) => {
            lines.push("Order Summary".to_string());
            for line in &summary.lines {
                lines.push(format!("  {} {}", line.name, line.price));
            }
            lines.push(DIVIDER.to_string());
            lines.push(format!("Subtotal: {}", summary.subtotal));
            lines.push(format!("Tax: {}", summary.tax));
            lines.push(format!("Total: {}", summary.total));
        }
    }

    lines.push(
        view.buttons
            .iter()
            .map(render_button)
            .collect::<Vec<_>>()
            .join(" "),
    );
    lines.join("\n")
}

/// Enabled buttons in brackets, disabled ones in parentheses.
fn render_button(state: &ButtonState) -> String {
    if state.enabled {
        format!("[{}]", state.button.label())
    } else {
        format!("({})", state.button.label())
    }
}
