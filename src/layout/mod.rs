//! Pure geometry for the time column.
//!
//! Maps event start/duration onto vertical pixels within the visible hour
//! window and splits the column width across collision columns. Everything
//! here is a pure function; the annotated matrices it returns are new values,
//! so callers never see half-laid-out state.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::event::{EventBounds, EventViewModel};
use crate::models::matrix::PlacementMatrix;
use crate::models::options::ColumnOptions;

/// Inputs shared by every bound computation within one layout pass.
#[derive(Debug, Clone)]
pub struct BoundContext<'a> {
    /// Start of the visible window (day start advanced to `hour_start`).
    pub day_start: NaiveDateTime,
    /// Millisecond span of the visible hour window.
    pub base_ms: f64,
    /// Pixel height representing that window (the container height).
    pub base_height: f64,
    /// Left offset percentage per visual column.
    pub base_left: &'a [f64],
    /// Uniform column width percentage.
    pub base_width: f64,
    pub min_height: f64,
    pub default_margin_bottom: f64,
    /// Target visual column for the event being laid out.
    pub column: usize,
}

/// Compute the bound for a single event.
///
/// The start offset is deliberately not clamped: an event starting before the
/// visible window gets a negative `top` and the renderer lets it hang off the
/// top edge. Heights that would run past the bottom edge are clipped and the
/// bound is flagged `cropped`.
///
/// The minimum-height floor applies to the raw (possibly clipped) height, and
/// the bottom gutter is subtracted after the floor. Reordering those two steps
/// changes the rendered size of tall events, so the order is fixed.
pub fn compute_event_bound(event: &EventViewModel, ctx: &BoundContext) -> EventBounds {
    let offset_ms = (event.start - ctx.day_start).num_milliseconds() as f64;
    let top = ctx.base_height * offset_ms / ctx.base_ms;
    let mut height = ctx.base_height * event.duration_ms() as f64 / ctx.base_ms;

    // Uncollided events are sized to the full row by the renderer.
    let width = if event.has_collide {
        Some(ctx.base_width * (event.extra_space as f64 + 1.0))
    } else {
        None
    };

    let mut cropped = false;
    if top + height > ctx.base_height {
        height = ctx.base_height - top;
        cropped = true;
    }

    let height = height.max(ctx.min_height) - ctx.default_margin_bottom;

    EventBounds {
        top,
        left: ctx.base_left.get(ctx.column).copied().unwrap_or(0.0),
        width,
        height,
        cropped,
    }
}

/// Lay out one day's placement matrices against a container height.
///
/// Returns a new set of matrices with every populated slot annotated with its
/// bound; empty slots pass through untouched. Each matrix derives its own
/// column split from its widest row.
///
/// Degenerate matrices (all rows empty) produce non-finite widths rather than
/// an error, matching the renderer's tolerance for zero-size blocks.
pub fn layout_day(
    matrices: Vec<PlacementMatrix>,
    date: NaiveDate,
    options: &ColumnOptions,
    container_height: f64,
) -> Vec<PlacementMatrix> {
    let day_start =
        date.and_time(NaiveTime::MIN) + Duration::hours(options.hour_start as i64);
    let base_ms = options.base_ms();

    matrices
        .into_iter()
        .map(|matrix| {
            let max_row_length = matrix.max_row_length();
            if max_row_length == 0 {
                log::warn!("placement matrix for {} has no slots", options.ymd);
            }
            // 0 slots divides to infinity; preserved rather than guarded.
            let base_width = 100.0 / max_row_length as f64;
            let base_left: Vec<f64> = (0..max_row_length)
                .map(|i| base_width * i as f64)
                .collect();

            let rows = matrix
                .rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .enumerate()
                        .map(|(col, slot)| {
                            slot.map(|event| {
                                let ctx = BoundContext {
                                    day_start,
                                    base_ms,
                                    base_height: container_height,
                                    base_left: &base_left,
                                    base_width,
                                    min_height: options.min_height,
                                    default_margin_bottom: options.default_margin_bottom,
                                    column: col,
                                };
                                let bounds = compute_event_bound(&event, &ctx);
                                EventViewModel {
                                    bounds: Some(bounds),
                                    ..event
                                }
                            })
                        })
                        .collect()
                })
                .collect();

            PlacementMatrix { rows }
        })
        .collect()
}

/// Vertical pixel offset of an instant within the visible hour window, for
/// placing the current-time indicator line. `None` when the instant falls on
/// another day or outside the window.
pub fn current_time_offset(
    now: NaiveDateTime,
    date: NaiveDate,
    options: &ColumnOptions,
    base_height: f64,
) -> Option<f64> {
    if now.date() != date {
        return None;
    }
    let day_start =
        date.and_time(NaiveTime::MIN) + Duration::hours(options.hour_start as i64);
    let offset_ms = (now - day_start).num_milliseconds() as f64;
    let base_ms = options.base_ms();
    if offset_ms < 0.0 || offset_ms > base_ms {
        return None;
    }
    Some(base_height * offset_ms / base_ms)
}
