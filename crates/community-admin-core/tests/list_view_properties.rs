//! Property tests for the filter -> sort -> paginate pipeline.

use community_admin_core::list_view::sort_indices;
use community_admin_core::{FieldType, FieldValue, ListConfig, ListView, Record, SortSpec};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    pos: usize,
    name: String,
    city: String,
    amount: u32,
}

impl Record for Row {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "city" => Some(FieldValue::Text(&self.city)),
            "amount" => Some(FieldValue::Number(f64::from(self.amount))),
            _ => None,
        }
    }
}

fn config(page_size: usize) -> ListConfig {
    ListConfig::new(page_size)
        .searchable("name")
        .searchable("city")
        .sortable("name", FieldType::Text)
        .sortable("amount", FieldType::Number)
}

fn rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(("[a-cA-C ]{0,6}", "[a-dA-D]{0,4}", 0u32..5), 0..40).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(pos, (name, city, amount))| Row {
                pos,
                name,
                city,
                amount,
            })
            .collect()
    })
}

fn positions(rows: &[&Row]) -> Vec<usize> {
    rows.iter().map(|r| r.pos).collect()
}

proptest! {
    #[test]
    fn filter_matches_any_searchable_field(source in rows(), query in "[a-dA-D]{0,2}") {
        let mut view = ListView::new(source.clone(), config(10)).unwrap();
        view.set_query(&query);

        let needle = query.to_lowercase();
        let expected: Vec<usize> = source
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle) || r.city.to_lowercase().contains(&needle)
            })
            .map(|r| r.pos)
            .collect();
        prop_assert_eq!(positions(&view.ordered()), expected);
    }

    #[test]
    fn empty_query_is_identity(source in rows()) {
        let view = ListView::new(source.clone(), config(10)).unwrap();
        let all: Vec<usize> = (0..source.len()).collect();
        prop_assert_eq!(positions(&view.ordered()), all);
    }

    #[test]
    fn sort_is_stable_and_idempotent(source in rows(), descending in any::<bool>()) {
        let mut view = ListView::new(source.clone(), config(10)).unwrap();
        view.set_sort("amount").unwrap();
        if descending {
            view.set_sort("amount").unwrap();
        }
        let ordered = view.ordered();

        for pair in ordered.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if descending {
                prop_assert!(a.amount >= b.amount);
            } else {
                prop_assert!(a.amount <= b.amount);
            }
            if a.amount == b.amount {
                prop_assert!(a.pos < b.pos);
            }
        }

        let spec = view.sort().cloned().unwrap();
        let mut once: Vec<usize> = (0..source.len()).collect();
        sort_indices(&source, &mut once, &spec);
        let mut twice = once.clone();
        sort_indices(&source, &mut twice, &spec);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn double_toggle_restores_order(
        source in rows(),
        field in prop::sample::select(vec!["name", "amount"]),
    ) {
        let mut view = ListView::new(source, config(10)).unwrap();
        view.set_sort(field).unwrap();
        let before = positions(&view.ordered());

        view.set_sort(field).unwrap();
        view.set_sort(field).unwrap();
        prop_assert_eq!(positions(&view.ordered()), before);
        prop_assert_eq!(view.sort().cloned(), Some(SortSpec::ascending(field)));
    }

    #[test]
    fn pages_cover_result_exactly(source in rows(), page_size in 1usize..8, query in "[a-c]{0,1}") {
        let mut view = ListView::new(source, config(page_size)).unwrap();
        view.set_query(&query);
        view.set_sort("name").unwrap();
        let expected = positions(&view.ordered());

        let page_count = view.page_count();
        prop_assert_eq!(page_count, expected.len().div_ceil(page_size));

        let mut seen = Vec::new();
        for page in 1..=page_count {
            view.set_page(page);
            let shown = view.display();
            prop_assert_eq!(shown.page, page);
            prop_assert!(!shown.rows.is_empty() && shown.rows.len() <= page_size);
            seen.extend(positions(&shown.rows));
        }
        prop_assert_eq!(seen, expected);

        if page_count == 0 {
            prop_assert!(view.display().rows.is_empty());
        }
    }

    #[test]
    fn page_index_is_clamped(source in rows(), page in 0usize..20) {
        let mut view = ListView::new(source, config(5)).unwrap();
        view.set_page(page);
        prop_assert!(view.page() >= 1);
        prop_assert!(view.page() <= view.page_count().max(1));
    }
}
