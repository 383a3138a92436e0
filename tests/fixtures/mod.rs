// Test fixtures - reusable test data
// Provides consistent test data across all test files
#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};

use time_column::models::event::EventViewModel;
use time_column::models::matrix::PlacementMatrix;
use time_column::models::options::{ColumnOptions, GridVariant};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// The reference day used across the suite
    pub fn jun_15_2023() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
    }

    /// A clock time on the reference day
    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        jun_15_2023().and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A timed event on the reference day
    pub fn timed(title: &str, hour: u32, minute: u32, duration_min: i64) -> EventViewModel {
        let start = dates::at(hour, minute);
        EventViewModel::new(title, start, start + Duration::minutes(duration_min)).unwrap()
    }

    /// A colliding event spanning `extra_space` extra columns
    pub fn colliding(
        title: &str,
        hour: u32,
        minute: u32,
        duration_min: i64,
        extra_space: u32,
    ) -> EventViewModel {
        timed(title, hour, minute, duration_min).with_collision(extra_space)
    }
}

/// Sample matrices for testing
pub mod matrices {
    use super::*;

    /// A matrix holding a single uncollided event
    pub fn single(event: EventViewModel) -> PlacementMatrix {
        PlacementMatrix::new(vec![vec![Some(event)]])
    }

    /// A matrix with one row of two collision columns
    pub fn side_by_side(a: EventViewModel, b: EventViewModel) -> PlacementMatrix {
        PlacementMatrix::new(vec![vec![Some(a), Some(b)]])
    }
}

/// Column options for a midnight-to-midnight window on the reference day
pub fn full_day_options() -> ColumnOptions {
    ColumnOptions {
        index: 0,
        width: 14.285,
        ymd: "20230615".to_string(),
        is_today: false,
        hour_start: 0,
        hour_end: 24,
        default_margin_bottom: 2.0,
        min_height: 18.5,
        grid: GridVariant::Normal,
    }
}
