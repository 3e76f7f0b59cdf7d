// Property-based tests for grid storage, selection and the insertion shift.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use sumgrid_core::prelude::*;
use sumgrid_core::MAX_COLS;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

/// Grid dimensions plus an address inside them
fn arb_grid_and_address() -> impl Strategy<Value = (u16, u32, GridAddress)> {
    (2..=MAX_COLS, 1u32..40).prop_flat_map(|(cols, rows)| {
        (Just(cols), Just(rows), (0..cols, 0..rows))
            .prop_map(|(cols, rows, (col, row))| (cols, rows, GridAddress::new(col, row)))
    })
}

#[derive(Debug, Clone)]
enum Click {
    Cell(u16, u32),
    RowLabel(u32),
    ColumnHeader(u16),
}

fn arb_click(cols: u16, rows: u32) -> impl Strategy<Value = Click> {
    prop_oneof![
        (1..cols, 0..rows).prop_map(|(c, r)| Click::Cell(c, r)),
        (0..rows).prop_map(Click::RowLabel),
        (1..cols).prop_map(Click::ColumnHeader),
    ]
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn store_round_trip((cols, rows, addr) in arb_grid_and_address(), text in ".{0,12}") {
        let mut store = GridStore::new(cols, rows).unwrap();
        prop_assert_eq!(store.value(addr), "");

        store.set_value(addr, text.clone()).unwrap();
        prop_assert_eq!(store.value(addr), text.as_str());
    }

    #[test]
    fn selection_is_exactly_one_mode(clicks in prop::collection::vec(arb_click(6, 8), 1..20)) {
        let mut w = SheetWidget::new(GridSettings::new(6, 8), NoopRenderer).unwrap();

        for click in clicks {
            match click {
                Click::Cell(c, r) => {
                    w.click_cell(c, r).unwrap();
                    prop_assert_eq!(w.selection(), Selection::Cell(GridAddress::new(c, r)));
                    prop_assert_eq!(w.view().highlighted_count(), 1);
                    prop_assert!(w.view().editor.enabled);
                }
                Click::RowLabel(r) => {
                    w.click_row_label(r).unwrap();
                    prop_assert_eq!(w.selection().row().map(DisplayRow::zero_based), Some(r));
                    prop_assert_eq!(w.view().highlighted_count(), 6);
                    prop_assert!(!w.view().editor.enabled);
                }
                Click::ColumnHeader(c) => {
                    w.click_column_header(c).unwrap();
                    prop_assert_eq!(w.selection().column(), Some(c));
                    prop_assert_eq!(w.view().highlighted_count(), 8);
                    prop_assert!(!w.view().editor.enabled);
                }
            }
        }
    }

    #[test]
    fn insert_preserves_values(
        values in prop::collection::vec((1u16..5, 0u32..5, "[a-z0-9]{1,4}"), 0..12),
        anchor in 1u16..5,
        by_row in any::<bool>(),
    ) {
        let mut w = SheetWidget::new(GridSettings::new(5, 5), NoopRenderer).unwrap();
        for (col, row, value) in &values {
            w.click_cell(*col, *row).unwrap();
            w.commit_editor(value).unwrap();
        }
        let before = w.store().non_empty_count();

        if by_row {
            w.click_row_label(anchor as u32).unwrap();
            w.add_row().unwrap();
        } else {
            w.click_column_header(anchor).unwrap();
            w.add_column().unwrap();
        }

        prop_assert_eq!(w.store().non_empty_count(), before);
    }
}
