//! Unit tests for table reduction

use colsift::pipeline::{degenerate_columns, drop_columns, drop_degenerate};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_drop_degenerate_removes_exactly_the_flagged_columns() {
    let df = common::create_attrition_frame();
    let degenerate = degenerate_columns(&df).unwrap();

    let (reduced, _) = drop_degenerate(&df, &degenerate);

    common::assert_missing_columns(&reduced, &["employee_count", "standard_hours", "over_18"]);
    common::assert_has_columns(
        &reduced,
        &[
            "age",
            "years_total",
            "years_double",
            "distance",
            "over_time",
            "department",
        ],
    );
}

#[test]
fn test_drop_degenerate_preserves_remaining_order() {
    let df = common::create_attrition_frame();
    let degenerate = degenerate_columns(&df).unwrap();

    let (reduced, _) = drop_degenerate(&df, &degenerate);

    let names: Vec<String> = reduced
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "age",
            "years_total",
            "years_double",
            "distance",
            "over_time",
            "department"
        ],
        "Remaining columns keep their original relative order"
    );
}

#[test]
fn test_shape_arithmetic() {
    let df = common::create_attrition_frame();
    let degenerate = degenerate_columns(&df).unwrap();

    let (_, shape) = drop_degenerate(&df, &degenerate);

    assert_eq!(shape.before, (6, 9));
    assert_eq!(
        shape.after.1,
        shape.before.1 - degenerate.len(),
        "Column count must shrink by exactly the number of dropped names"
    );
    assert_eq!(shape.after.0, shape.before.0, "Row count is unchanged");
}

#[test]
fn test_no_degenerate_column_survives_the_drop() {
    let df = common::create_attrition_frame();
    let degenerate = degenerate_columns(&df).unwrap();

    let (reduced, _) = drop_degenerate(&df, &degenerate);

    assert!(
        degenerate_columns(&reduced).unwrap().is_empty(),
        "No remaining column may have cardinality 1"
    );
}

#[test]
fn test_drop_to_zero_columns() {
    let df = common::create_degenerate_only_frame();
    let degenerate = degenerate_columns(&df).unwrap();

    let (reduced, shape) = drop_degenerate(&df, &degenerate);

    assert_eq!(reduced.width(), 0, "All columns dropped");
    assert_eq!(shape.before.1, 1);
    assert_eq!(shape.after.1, 0);
}

#[test]
fn test_dropping_nonexistent_name_is_a_no_op() {
    let df = common::create_attrition_frame();

    let result = drop_columns(&df, &["DoesNotExist".to_string()]);

    assert_eq!(result.shape(), df.shape(), "Frame must come back unchanged");
    assert_eq!(
        result.get_column_names(),
        df.get_column_names(),
        "No column may be touched"
    );
}

#[test]
fn test_mixed_existing_and_missing_names() {
    let df = common::create_attrition_frame();

    let result = drop_columns(
        &df,
        &["over_18".to_string(), "NotARealColumn".to_string()],
    );

    common::assert_missing_columns(&result, &["over_18"]);
    assert_eq!(
        result.width(),
        df.width() - 1,
        "Only the existing name is dropped; the missing one is skipped"
    );
}

#[test]
fn test_drop_with_empty_name_list() {
    let df = common::create_attrition_frame();

    let result = drop_columns(&df, &[]);

    assert_eq!(result.shape(), df.shape());
}
