//! Word wrapping and chip flow.

use super::width::{truncate_to_width, visual_width};

/// Wrap a plain text string to the specified width.
/// Returns at least one line, even for empty input.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let lines: Vec<String> = textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Wrap text behind a marker (e.g. a bullet) with a hanging indent.
///
/// The first line starts with `marker`, continuation lines are indented by
/// the marker's width.
pub fn wrap_hanging(marker: &str, text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![marker.to_string()];
    }
    let indent = " ".repeat(visual_width(marker));
    let options = textwrap::Options::new(width.max(1))
        .initial_indent(marker)
        .subsequent_indent(&indent);
    textwrap::wrap(text, options)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

/// Bracketed label for a tag, e.g. `[Rust]`.
pub fn chip_label(tag: &str) -> String {
    format!("[{tag}]")
}

/// Flow tags as chips over rows no wider than `width`.
///
/// Chips are separated by one space and keep their order. A chip wider
/// than a whole row gets a row of its own, truncated to fit.
pub fn flow_chips<S: AsRef<str>>(tags: &[S], width: usize) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut used = 0;

    for tag in tags {
        let chip = chip_label(tag.as_ref());
        let chip_width = visual_width(&chip);
        let needed = if current.is_empty() {
            chip_width
        } else {
            used + 1 + chip_width
        };

        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }

        let chip = if chip_width > width {
            truncate_to_width(&chip, width)
        } else {
            chip
        };
        used = if current.is_empty() {
            visual_width(&chip)
        } else {
            used + 1 + visual_width(&chip)
        };
        current.push(chip);
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}
