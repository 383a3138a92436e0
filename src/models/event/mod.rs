// Event view model module
// Per-day event instance plus the bounds computed for it by the layout pass

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Computed pixel/percent bounds for one event block.
///
/// `top` and `height` are pixels within the column; `left` and `width` are
/// percentages of the column width. `width` is `None` when the event has no
/// collisions and should be sized to the full row by the renderer ("auto").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBounds {
    pub top: f64,
    pub left: f64,
    pub width: Option<f64>,
    pub height: f64,
    /// True when the block extends past the visible hour window and was
    /// clipped at the bottom edge.
    pub cropped: bool,
}

/// One calendar event instance for a given day column.
///
/// Collision resolution happens upstream: `has_collide` and `extra_space`
/// arrive pre-computed together with the event's slot in a placement matrix.
/// `bounds` is empty until a layout pass produces an annotated copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventViewModel {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// True when this event overlaps at least one other event in its matrix.
    pub has_collide: bool,
    /// Number of additional visual columns this event may span beyond one.
    pub extra_space: u32,
    pub color: Option<String>,
    pub bounds: Option<EventBounds>,
}

impl EventViewModel {
    /// Create a new event view model with required fields
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time
    ///
    /// # Returns
    /// Returns `Result<EventViewModel, String>` with validation
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if end <= start {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(Self {
            title,
            start,
            end,
            has_collide: false,
            extra_space: 0,
            color: None,
            bounds: None,
        })
    }

    /// Mark the event as colliding, spanning `extra_space` extra columns.
    pub fn with_collision(mut self, extra_space: u32) -> Self {
        self.has_collide = true;
        self.extra_space = extra_space;
        self
    }

    /// Set the display color (hex string, e.g. "#4A90D9").
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Event duration in milliseconds, the unit the layout mapping works in.
    pub fn duration_ms(&self) -> i64 {
        self.duration().num_milliseconds()
    }
}
