//! Pure formatting functions for UI output.
//!
//! Everything goes to stderr so stdout carries only the rendered result.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display a heading followed by aligned `key: value` rows.
///
/// # Arguments
/// * `title` - Heading printed in bold
/// * `rows` - Label and value pairs
pub fn display_table(title: &str, rows: &[(&str, String)]) {
    eprintln!("\n{}", style(title).bold());
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        eprintln!("  {:<width$}  {}", label, style(value).cyan(), width = width);
    }
}
