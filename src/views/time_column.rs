//! The time column adapter.
//!
//! Owns one day column's container handle and static options, and wires the
//! pure layout pass to the markup template. The column itself keeps no render
//! state: every `render` call recomputes bounds from its inputs, so repeated
//! calls with identical inputs produce identical markup.

use chrono::NaiveDate;
use thiserror::Error;

use crate::layout;
use crate::models::matrix::PlacementMatrix;
use crate::models::options::{ColumnOptions, GridVariant};
use crate::utils::date::parse_date_key;
use crate::views::container::Container;
use crate::views::template;

/// Class applied to the container of the column representing today.
pub const TODAY_CLASS: &str = "timegrid-today";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    #[error("visible hour window {start}..{end} is out of range")]
    HourWindow { start: u32, end: u32 },
}

/// One vertical day-strip of the week view.
#[derive(Debug)]
pub struct TimeColumn<C: Container> {
    options: ColumnOptions,
    container: C,
    variant: GridVariant,
}

impl<C: Container> TimeColumn<C> {
    /// Create a column and position its container within the grid.
    ///
    /// The container is offset by `index * width` percent and tagged with the
    /// today class when the options say so. The only validation is the hour
    /// window; everything else degrades per the layout's numeric semantics.
    pub fn new(options: ColumnOptions, mut container: C) -> Result<Self, ColumnError> {
        if options.hour_start >= options.hour_end || options.hour_end > 24 {
            return Err(ColumnError::HourWindow {
                start: options.hour_start,
                end: options.hour_end,
            });
        }

        container.set_placement(options.left(), options.width);
        if options.is_today {
            container.add_class(TODAY_CLASS);
        }

        let variant = options.grid;
        Ok(Self {
            options,
            container,
            variant,
        })
    }

    /// The calendar day this column represents, from its configured date key.
    pub fn get_date(&self) -> Option<NaiveDate> {
        parse_date_key(&self.options.ymd)
    }

    /// Annotate a day's matrices with bounds against the container's current
    /// height.
    ///
    /// An unparsable date key yields the matrices unannotated rather than an
    /// error; the template then renders an empty column.
    pub fn layout_matrices(
        &self,
        date_key: &str,
        matrices: Vec<PlacementMatrix>,
    ) -> Vec<PlacementMatrix> {
        let Some(date) = parse_date_key(date_key) else {
            log::warn!("unparsable date key {:?}, skipping layout", date_key);
            return matrices;
        };
        layout::layout_day(matrices, date, &self.options, self.container.height())
    }

    /// Lay out the day's matrices and regenerate the container's markup.
    pub fn render(&mut self, date_key: &str, matrices: Vec<PlacementMatrix>) {
        let annotated = self.layout_matrices(date_key, matrices);
        let event_count: usize = annotated.iter().map(PlacementMatrix::event_count).sum();
        log::debug!(
            "rendering column {} for {}: {} events",
            self.options.index,
            date_key,
            event_count
        );
        let markup = template::render_markup(&annotated, self.variant);
        self.container.set_markup(markup);
    }

    pub fn options(&self) -> &ColumnOptions {
        &self.options
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }
}
