// Integration tests for the full layout-and-render pipeline

mod fixtures;

use fixtures::{events, full_day_options, matrices};
use pretty_assertions::assert_eq;

use time_column::models::matrix::PlacementMatrix;
use time_column::models::options::GridVariant;
use time_column::views::time_column::TODAY_CLASS;
use time_column::views::{FixedPanel, TimeColumn};

#[test]
fn test_render_pipeline_annotates_and_writes_markup() {
    let matrix = matrices::side_by_side(
        events::colliding("Standup", 9, 0, 30, 0),
        events::colliding("Design review", 9, 15, 60, 0),
    );

    let mut column = TimeColumn::new(full_day_options(), FixedPanel::new(1200.0)).unwrap();
    column.render("20230615", vec![matrix]);

    let markup = &column.container().markup;
    // 09:00 in a 24h window over 1200px sits at 450px.
    assert!(markup.contains("top: 450px;"), "markup: {markup}");
    // Two collision columns split the row 50/50.
    assert!(markup.contains("left: 50%;"));
    assert!(markup.contains("width: 50%;"));
    assert!(markup.contains("Standup"));
    assert!(markup.contains("Design review"));
}

#[test]
fn test_worked_example_end_to_end() {
    // 24h window over 1200px; event at 01:00 for 30min with the default
    // min height 18.5 and gutter 2: top 50, final height 23.
    let matrix = matrices::single(events::timed("Early", 1, 0, 30));
    let column = TimeColumn::new(full_day_options(), FixedPanel::new(1200.0)).unwrap();

    let annotated = column.layout_matrices("20230615", vec![matrix]);
    let bounds = annotated[0].rows[0][0]
        .as_ref()
        .unwrap()
        .bounds
        .clone()
        .unwrap();

    assert_eq!(bounds.top, 50.0);
    assert_eq!(bounds.height, 23.0);
    assert_eq!(bounds.width, None);
    assert!(!bounds.cropped);
}

#[test]
fn test_event_past_window_bottom_is_cropped() {
    let matrix = matrices::single(events::timed("Late", 23, 0, 120));
    let column = TimeColumn::new(full_day_options(), FixedPanel::new(1200.0)).unwrap();

    let annotated = column.layout_matrices("20230615", vec![matrix]);
    let bounds = annotated[0].rows[0][0]
        .as_ref()
        .unwrap()
        .bounds
        .clone()
        .unwrap();

    assert!(bounds.cropped);
    // Clipped height is 50px, above the floor; gutter comes off after.
    assert_eq!(bounds.height, 48.0);

    let mut column = column;
    column.render("20230615", vec![matrices::single(events::timed("Late", 23, 0, 120))]);
    assert!(column.container().markup.contains("timegrid-event-cropped"));
}

#[test]
fn test_render_is_idempotent() {
    let build = || vec![matrices::single(events::timed("Standup", 9, 0, 30))];

    let mut column = TimeColumn::new(full_day_options(), FixedPanel::new(1200.0)).unwrap();
    column.render("20230615", build());
    let first = column.container().markup.clone();
    column.render("20230615", build());
    assert_eq!(column.container().markup, first);
}

#[test]
fn test_container_resize_changes_layout() {
    let build = || vec![matrices::single(events::timed("Standup", 9, 0, 30))];

    let mut column = TimeColumn::new(full_day_options(), FixedPanel::new(1200.0)).unwrap();
    column.render("20230615", build());
    assert!(column.container().markup.contains("top: 450px;"));

    column.container_mut().set_height(2400.0);
    column.render("20230615", build());
    assert!(column.container().markup.contains("top: 900px;"));
}

#[test]
fn test_split_variant_wraps_rows() {
    let mut options = full_day_options();
    options.grid = GridVariant::Split;
    let matrix = PlacementMatrix::new(vec![
        vec![Some(events::timed("a", 9, 0, 30))],
        vec![Some(events::timed("b", 11, 0, 30))],
    ]);

    let mut column = TimeColumn::new(options, FixedPanel::new(1200.0)).unwrap();
    column.render("20230615", vec![matrix]);

    let markup = &column.container().markup;
    assert_eq!(markup.matches("timegrid-row").count(), 2);
}

#[test]
fn test_today_column_is_tagged_and_positioned() {
    let mut options = full_day_options();
    options.index = 2;
    options.is_today = true;
    let column = TimeColumn::new(options, FixedPanel::new(1200.0)).unwrap();

    assert!(column.container().has_class(TODAY_CLASS));
    assert!((column.container().left_percent - 2.0 * 14.285).abs() < 1e-9);
}

#[test]
fn test_get_date_matches_configured_key() {
    let column = TimeColumn::new(full_day_options(), FixedPanel::new(1200.0)).unwrap();
    assert_eq!(column.get_date(), Some(fixtures::dates::jun_15_2023()));
}

#[test]
fn test_empty_day_renders_empty_wrapper() {
    let mut column = TimeColumn::new(full_day_options(), FixedPanel::new(1200.0)).unwrap();
    column.render("20230615", vec![]);
    assert_eq!(
        column.container().markup,
        "<div class=\"timegrid-events\">\n</div>\n"
    );
}
