use std::sync::Arc;

use csv_insight::data::data_view::DataView;
use csv_insight::data::demo::demo_dataset;

#[test]
fn test_sort_demo_by_sales_descending() {
    let view = DataView::new(Arc::new(demo_dataset()))
        .sort_by("sales", false)
        .unwrap();

    let sales: Vec<&str> = view
        .rows()
        .iter()
        .map(|row| row.get("sales").unwrap().as_str())
        .collect();

    assert_eq!(sales.first(), Some(&"1520"));
    assert_eq!(sales.last(), Some(&"410"));
}

#[test]
fn test_filter_demo_by_region() {
    let view = DataView::new(Arc::new(demo_dataset())).filter_contains("west");

    assert_eq!(view.matched_row_count(), 3);
    assert!(view
        .rows()
        .iter()
        .all(|row| row.get("region").unwrap() == "West"));
}

#[test]
fn test_filter_and_sort_compose() {
    let view = DataView::new(Arc::new(demo_dataset()))
        .filter_contains("technology")
        .sort_by("profit", true)
        .unwrap();

    let profits: Vec<&str> = view
        .rows()
        .iter()
        .map(|row| row.get("profit").unwrap().as_str())
        .collect();

    assert_eq!(profits, vec!["110", "140", "180", "220"]);
}

#[test]
fn test_display_cap_leaves_match_count_intact() {
    let view = DataView::new(Arc::new(demo_dataset())).with_limit(4);

    assert_eq!(view.row_count(), 4);
    assert_eq!(view.matched_row_count(), 10);
    assert_eq!(view.rows().len(), 4);
}

#[test]
fn test_view_does_not_mutate_source() {
    let dataset = Arc::new(demo_dataset());
    let _sorted = DataView::new(dataset.clone())
        .sort_by("sales", true)
        .unwrap();

    // source order is untouched
    assert_eq!(dataset.get(0, "region"), Some("West"));
    assert_eq!(dataset.get(0, "sales"), Some("1200"));
}
