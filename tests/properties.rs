use std::collections::HashMap;

use chart_inference::{
    classify::{ColumnKind, ColumnRole, classify},
    data::{Row, TabularResult, Value},
    plan,
    plot::MAX_PLOT_RECORDS,
    select::{DataShape, available_types, decide, select},
};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ColumnKind> {
    prop_oneof![
        Just(ColumnKind::Measure),
        Just(ColumnKind::Dimension),
        Just(ColumnKind::Temporal),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        (-1.0e9f64..1.0e9).prop_map(Value::Number),
        "[A-Za-z/ ]{0,8}".prop_map(Value::String),
    ]
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z]{1,10}",
        "[A-Z]{1,6}_(ID|CODE|KEY|NO|DATE|MONTH|YEAR|TOTAL)",
        "[a-z]{1,6}(id|code|quarter)",
    ]
}

proptest! {
    #[test]
    fn classification_is_deterministic(
        cells in proptest::collection::vec((name_strategy(), value_strategy()), 0..8)
    ) {
        let columns = cells.iter().map(|(name, _)| name.clone()).collect::<Vec<_>>();
        let row: Row = cells.into_iter().collect::<HashMap<_, _>>();
        let first = classify(&columns, &row);
        let second = classify(&columns, &row);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), columns.len());
    }

    #[test]
    fn automatic_choice_is_always_available(
        row_count in 0usize..50,
        kinds in proptest::collection::vec(kind_strategy(), 0..7)
    ) {
        let roles = kinds
            .iter()
            .enumerate()
            .map(|(idx, kind)| ColumnRole { name: format!("C{idx}"), kind: *kind })
            .collect::<Vec<_>>();
        let shape = DataShape::from_roles(&roles, row_count);
        prop_assert!(available_types(&shape).contains(&decide(&shape).chart));

        match select(&roles, row_count, None) {
            Some(selection) => {
                prop_assert!(shape.measures > 0);
                prop_assert!(selection.available_types.contains(&selection.auto_type));
                prop_assert!(!selection.value_columns.is_empty());
                prop_assert!(roles.iter().any(|r| r.name == selection.label_column));
            }
            None => {
                prop_assert_eq!(shape.measures, 0);
            }
        }
    }

    #[test]
    fn rendering_never_exceeds_the_record_cap(
        cells in proptest::collection::vec(
            proptest::collection::vec(value_strategy(), 3),
            1..60
        )
    ) {
        let mut records = cells;
        records[0][1] = Value::Number(1.0);
        let result = TabularResult::from_records(&["LABEL", "AMOUNT", "NOTE"], records);
        let plan = plan::render(&result, None).expect("first row makes AMOUNT a measure");
        prop_assert!(plan.records.len() <= MAX_PLOT_RECORDS);
        prop_assert_eq!(plan.records.len(), result.rows.len().min(MAX_PLOT_RECORDS));
        prop_assert!(plan.selection.is_available(plan.chart_type));
        for record in &plan.records {
            prop_assert!(record.values.iter().all(|v| v.value.is_finite()));
        }
    }
}
