//! Markup templates for the time column.
//!
//! Turns bound-annotated matrices into the markup string a hosting surface
//! displays. Output is deterministic for identical inputs; slots without
//! bounds (a layout pass that was skipped or fed an unparsable date key)
//! render nothing.

use std::fmt::Write;

use crate::models::event::EventViewModel;
use crate::models::matrix::PlacementMatrix;
use crate::models::options::GridVariant;

pub const EVENT_CLASS: &str = "timegrid-event";
pub const CROPPED_CLASS: &str = "timegrid-event-cropped";
pub const ROW_CLASS: &str = "timegrid-row";

/// Render the markup for a day's annotated matrices.
pub fn render_markup(matrices: &[PlacementMatrix], variant: GridVariant) -> String {
    let mut out = String::new();
    match variant {
        GridVariant::Normal => {
            out.push_str("<div class=\"timegrid-events\">\n");
            for matrix in matrices {
                for (_, _, event) in matrix.events() {
                    write_event_block(&mut out, event);
                }
            }
        }
        GridVariant::Split => {
            out.push_str("<div class=\"timegrid-events timegrid-events-split\">\n");
            for matrix in matrices {
                for row in &matrix.rows {
                    let _ = writeln!(out, "<div class=\"{}\">", ROW_CLASS);
                    for event in row.iter().flatten() {
                        write_event_block(&mut out, event);
                    }
                    out.push_str("</div>\n");
                }
            }
        }
    }
    out.push_str("</div>\n");
    out
}

fn write_event_block(out: &mut String, event: &EventViewModel) {
    let Some(bounds) = &event.bounds else {
        return;
    };

    let mut classes = EVENT_CLASS.to_string();
    if bounds.cropped {
        classes.push(' ');
        classes.push_str(CROPPED_CLASS);
    }

    let mut style = format!(
        "top: {}px; left: {}%; height: {}px;",
        bounds.top, bounds.left, bounds.height
    );
    if let Some(width) = bounds.width {
        let _ = write!(style, " width: {}%;", width);
    }
    if let Some(color) = &event.color {
        let _ = write!(style, " background-color: {};", color);
    }

    let _ = writeln!(
        out,
        "<div class=\"{}\" style=\"{}\">{}</div>",
        classes,
        style,
        escape(&event.title)
    );
}

/// Minimal markup escaping for event titles.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
