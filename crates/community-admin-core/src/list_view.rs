//! List View
//!
//! Filter -> sort -> paginate pipeline shared by every table in the dashboard.
//! The view owns only transient UI state; the displayed rows are always
//! recomputed from the full source collection.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::record::{FieldType, ListConfig, Record};

/// Sort direction for the active sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Ascending,
        }
    }
}

/// Transient UI state of one list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub query: String,
    pub sort: Option<SortSpec>,
    /// 1-based page index
    pub page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page: 1,
        }
    }
}

/// One page of display rows
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, R> {
    pub rows: Vec<&'a R>,
    /// 1-based page index actually shown (after clamping)
    pub page: usize,
    /// Zero when the filtered set is empty
    pub page_count: usize,
    /// Number of rows after filtering
    pub total: usize,
}

impl<R> Page<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based position of the first row on this page, zero when empty
    pub fn first_row(&self, page_size: usize) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.page - 1) * page_size + 1
        }
    }
}

/// Indices of records matching `query` on any searchable field, in source order
pub fn filter_indices<R: Record>(source: &[R], config: &ListConfig, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return (0..source.len()).collect();
    }

    source
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            config.searchable_fields().any(|spec| {
                record
                    .field(&spec.name)
                    .is_some_and(|value| value.contains_lowercase(&needle))
            })
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Stable sort of `indices` by the given column
///
/// Equal values keep their relative order in both directions.
pub fn sort_indices<R: Record>(source: &[R], indices: &mut [usize], sort: &SortSpec) {
    indices.sort_by(|&a, &b| {
        let ord = match (source[a].field(&sort.field), source[b].field(&sort.field)) {
            (Some(x), Some(y)) => x.compare(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Number of pages needed for `len` rows
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamp a 1-based page index into `1..=max(1, page_count)`
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Slice out one 1-based page; out-of-range pages clamp to the nearest valid one
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 || items.is_empty() {
        return &[];
    }
    let page = clamp_page(page, page_count(items.len(), page_size));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// A list view over an immutable record collection
pub struct ListView<R> {
    source: Arc<[R]>,
    config: Arc<ListConfig>,
    state: ListState,
}

impl<R> Clone for ListView<R> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            config: Arc::clone(&self.config),
            state: self.state.clone(),
        }
    }
}

impl<R: Record> ListView<R> {
    /// Build a view, validating the configuration against every record
    pub fn new(source: impl Into<Arc<[R]>>, config: ListConfig) -> Result<Self> {
        let source = source.into();
        validate(&source, &config)?;
        Ok(Self {
            source,
            config: Arc::new(config),
            state: ListState::default(),
        })
    }

    /// Swap in a new source collection, keeping query and sort
    pub fn replace_source(&mut self, source: impl Into<Arc<[R]>>) -> Result<()> {
        let source = source.into();
        validate(&source, &self.config)?;
        self.source = source;
        self.state.page = clamp_page(self.state.page, self.page_count());
        Ok(())
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.state.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.state.page
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    pub fn total_len(&self) -> usize {
        self.source.len()
    }

    pub fn filtered_len(&self) -> usize {
        filter_indices(&self.source, &self.config, &self.state.query).len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered_len(), self.config.page_size)
    }

    /// Replace the search text and go back to the first page
    pub fn set_query(&mut self, text: &str) {
        debug!(query = text, "list query changed");
        self.state.query = text.to_string();
        self.state.page = 1;
    }

    /// Sort by `field`, flipping direction if it is already the sort column
    pub fn set_sort(&mut self, field: &str) -> Result<()> {
        match self.config.spec(field) {
            None => {
                return Err(CoreError::UnknownField {
                    field: field.to_string(),
                })
            }
            Some(spec) if !spec.sortable => {
                return Err(CoreError::NotSortable {
                    field: field.to_string(),
                })
            }
            Some(_) => {}
        }

        let next = match self.state.sort.take() {
            Some(current) if current.field == field => SortSpec {
                field: current.field,
                direction: current.direction.flip(),
            },
            _ => SortSpec::ascending(field),
        };
        debug!(field, direction = ?next.direction, "list sort changed");
        self.state.sort = Some(next);
        self.state.page = 1;
        Ok(())
    }

    /// Return to source order
    pub fn clear_sort(&mut self) {
        self.state.sort = None;
        self.state.page = 1;
    }

    /// Jump to a page, clamped into the valid range
    pub fn set_page(&mut self, page: usize) {
        let clamped = clamp_page(page, self.page_count());
        if clamped != page {
            debug!(requested = page, clamped, "page index clamped");
        }
        self.state.page = clamped;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.state.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.state.page.saturating_sub(1));
    }

    /// Filtered and sorted records, all pages
    pub fn ordered(&self) -> Vec<&R> {
        self.ordered_indices()
            .into_iter()
            .map(|idx| &self.source[idx])
            .collect()
    }

    /// Rows of the current page
    pub fn display(&self) -> Page<'_, R> {
        let indices = self.ordered_indices();
        let total = indices.len();
        let page_count = page_count(total, self.config.page_size);
        let page = clamp_page(self.state.page, page_count);
        let rows = paginate(&indices, page, self.config.page_size)
            .iter()
            .map(|&idx| &self.source[idx])
            .collect();

        Page {
            rows,
            page,
            page_count,
            total,
        }
    }

    fn ordered_indices(&self) -> Vec<usize> {
        let mut indices = filter_indices(&self.source, &self.config, &self.state.query);
        if let Some(sort) = &self.state.sort {
            sort_indices(&self.source, &mut indices, sort);
        }
        indices
    }
}

fn validate<R: Record>(source: &[R], config: &ListConfig) -> Result<()> {
    if config.page_size == 0 {
        return Err(CoreError::InvalidPageSize);
    }

    for spec in &config.fields {
        if spec.searchable && spec.field_type != FieldType::Text {
            return Err(CoreError::InvalidConfig {
                message: format!("searchable field '{}' must be text", spec.name),
            });
        }
        if !spec.searchable && !spec.sortable {
            continue;
        }
        for (idx, record) in source.iter().enumerate() {
            let value = record.field(&spec.name).ok_or_else(|| CoreError::MissingField {
                field: spec.name.clone(),
                record: idx,
            })?;
            if value.field_type() != spec.field_type {
                return Err(CoreError::FieldTypeMismatch {
                    field: spec.name.clone(),
                    record: idx,
                    expected: spec.field_type,
                    found: value.field_type(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        amount: f64,
    }

    impl Record for Row {
        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "name" => Some(FieldValue::Text(&self.name)),
                "amount" => Some(FieldValue::Number(self.amount)),
                _ => None,
            }
        }
    }

    fn row(name: &str, amount: f64) -> Row {
        Row {
            name: name.to_string(),
            amount,
        }
    }

    fn config(page_size: usize) -> ListConfig {
        ListConfig::new(page_size)
            .searchable("name")
            .sortable("name", FieldType::Text)
            .sortable("amount", FieldType::Number)
    }

    fn amounts(view: &ListView<Row>) -> Vec<f64> {
        view.display().rows.iter().map(|r| r.amount).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![row("John Doe", 1.0), row("Jane Roe", 2.0)];
        let mut view = ListView::new(rows, config(10)).unwrap();
        view.set_query("jane");
        let page = view.display();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].name, "Jane Roe");
    }

    #[test]
    fn test_sort_and_flip() {
        let rows = vec![row("a", 100.0), row("b", 50.0), row("c", 75.0)];
        let mut view = ListView::new(rows, config(10)).unwrap();

        view.set_sort("amount").unwrap();
        assert_eq!(amounts(&view), vec![50.0, 75.0, 100.0]);

        view.set_sort("amount").unwrap();
        assert_eq!(amounts(&view), vec![100.0, 75.0, 50.0]);
        assert_eq!(view.sort().unwrap().direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_direction_defaults_ascending() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.flip(), SortDirection::Descending);
        assert_eq!(
            SortSpec::ascending("name"),
            SortSpec {
                field: "name".to_string(),
                direction: SortDirection::Ascending,
            }
        );
    }

    #[test]
    fn test_new_field_resets_direction() {
        let mut view = ListView::new(vec![row("b", 1.0), row("a", 2.0)], config(10)).unwrap();
        view.set_sort("amount").unwrap();
        view.set_sort("amount").unwrap();
        view.set_sort("name").unwrap();
        assert_eq!(view.sort(), Some(&SortSpec::ascending("name")));
    }

    #[test]
    fn test_descending_sort_is_stable() {
        let mut view = ListView::new(
            vec![row("first", 10.0), row("x", 20.0), row("second", 10.0)],
            config(10),
        )
        .unwrap();
        view.set_sort("amount").unwrap();
        view.set_sort("amount").unwrap();
        let names: Vec<&str> = view.display().rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["x", "first", "second"]);
    }

    #[test]
    fn test_pagination_and_clamp() {
        let rows: Vec<Row> = (1..=25).map(|i| row(&format!("r{i}"), i as f64)).collect();
        let mut view = ListView::new(rows, config(10)).unwrap();

        assert_eq!(view.page_count(), 3);
        assert_eq!(amounts(&view), (1..=10).map(|i| i as f64).collect::<Vec<_>>());

        view.set_page(2);
        assert_eq!(amounts(&view), (11..=20).map(|i| i as f64).collect::<Vec<_>>());

        view.set_page(4);
        assert_eq!(view.page(), 3);
        assert_eq!(amounts(&view), (21..=25).map(|i| i as f64).collect::<Vec<_>>());

        view.set_page(0);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_query_resets_page() {
        let rows: Vec<Row> = (1..=25).map(|i| row(&format!("r{i}"), i as f64)).collect();
        let mut view = ListView::new(rows, config(10)).unwrap();
        view.set_page(3);
        view.set_query("r1");
        assert_eq!(view.page(), 1);
        // r1, r10..r19
        assert_eq!(view.display().total, 11);
        assert!(!view.display().is_empty());
    }

    #[test]
    fn test_empty_result_has_zero_pages() {
        let mut view = ListView::new(vec![row("a", 1.0)], config(10)).unwrap();
        view.set_query("zzz");
        let page = view.display();
        assert_eq!(page.page_count, 0);
        assert_eq!(page.page, 1);
        assert!(page.is_empty());
        assert_eq!(page.first_row(10), 0);
    }

    #[test]
    fn test_sort_rejects_unconfigured_fields() {
        let config = ListConfig::new(10).searchable("name");
        let mut view = ListView::new(vec![row("a", 1.0)], config).unwrap();
        assert!(matches!(view.set_sort("amount"), Err(CoreError::UnknownField { .. })));
        assert!(matches!(view.set_sort("name"), Err(CoreError::NotSortable { .. })));
        assert!(view.sort().is_none());
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(matches!(
            ListView::new(vec![row("a", 1.0)], config(0)),
            Err(CoreError::InvalidPageSize)
        ));
    }

    #[test]
    fn test_rejects_mismatched_field_type() {
        let config = ListConfig::new(10).sortable("amount", FieldType::Text);
        let err = ListView::new(vec![row("a", 1.0)], config).err().unwrap();
        assert!(matches!(
            err,
            CoreError::FieldTypeMismatch {
                expected: FieldType::Text,
                found: FieldType::Number,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_missing_field() {
        let config = ListConfig::new(10).sortable("date", FieldType::Date);
        assert!(matches!(
            ListView::new(vec![row("a", 1.0)], config),
            Err(CoreError::MissingField { record: 0, .. })
        ));
    }

    #[test]
    fn test_replace_source_clamps_page() {
        let rows: Vec<Row> = (1..=25).map(|i| row(&format!("r{i}"), i as f64)).collect();
        let mut view = ListView::new(rows, config(10)).unwrap();
        view.set_page(3);
        view.replace_source(vec![row("a", 1.0), row("b", 2.0)]).unwrap();
        assert_eq!(view.page(), 1);
        assert_eq!(view.total_len(), 2);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
        assert_eq!(paginate(&items, 9, 10), &[21, 22, 23, 24, 25]);
        assert!(paginate::<u32>(&[], 1, 10).is_empty());
    }
}
