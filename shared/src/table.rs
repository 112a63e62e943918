use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Itinerary;

/// Rows-per-page choices offered by the pagination controls.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 15, 25];

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// Keep the search API's relevance order.
    None,
    Price,
    Stops,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Stable sort by the chosen field's projection. `SortField::None` preserves
/// the input order. Returns a derived view; the canonical list is untouched.
pub fn sort_itineraries<'a>(
    itineraries: &'a [Itinerary],
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a Itinerary> {
    let mut view: Vec<&Itinerary> = itineraries.iter().collect();
    let compare: fn(&Itinerary, &Itinerary) -> Ordering = match field {
        SortField::None => return view,
        SortField::Price => |a, b| a.price.raw.total_cmp(&b.price.raw),
        SortField::Stops => |a, b| stop_count(a).cmp(&stop_count(b)),
        SortField::Duration => |a, b| duration(a).cmp(&duration(b)),
    };
    view.sort_by(|a, b| match direction {
        SortDirection::Ascending => compare(a, b),
        SortDirection::Descending => compare(a, b).reverse(),
    });
    view
}

fn stop_count(itinerary: &Itinerary) -> u32 {
    itinerary.primary_leg().map(|leg| leg.stop_count).unwrap_or(0)
}

fn duration(itinerary: &Itinerary) -> u32 {
    itinerary
        .primary_leg()
        .map(|leg| leg.duration_in_minutes)
        .unwrap_or(0)
}

/// The sub-slice of `items` shown on a 1-based `page`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = (page.max(1) - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Total page count; never below 1, even for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Presentation state of one result table: current page, page size, sort,
/// and the at-most-one expanded row.
///
/// Any change to page, page size, sort, or the underlying result list clears
/// the expansion, since row identity on a new page is not stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub page: usize,
    pub page_size: usize,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub expanded: Option<String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_field: SortField::None,
            sort_direction: SortDirection::Ascending,
            expanded: None,
        }
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered page of results to display for the current state.
    pub fn visible_page<'a>(&self, itineraries: &'a [Itinerary]) -> Vec<&'a Itinerary> {
        let sorted = sort_itineraries(itineraries, self.sort_field, self.sort_direction);
        paginate(&sorted, self.page, self.page_size).to_vec()
    }

    pub fn total_pages(&self, result_count: usize) -> usize {
        total_pages(result_count, self.page_size)
    }

    /// Move to `page`, clamped to the valid range for `result_count` results.
    pub fn set_page(&mut self, page: usize, result_count: usize) {
        self.page = page.clamp(1, self.total_pages(result_count));
        self.expanded = None;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if !PAGE_SIZES.contains(&page_size) {
            return;
        }
        self.page_size = page_size;
        self.page = 1;
        self.expanded = None;
    }

    /// Clicking a sortable header: same field flips the direction, a new
    /// field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
        self.page = 1;
        self.expanded = None;
    }

    /// Toggle semantics: the expanded row collapses, a different row replaces
    /// any previous expansion. Exactly one row may be expanded at a time.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Reset after the result list itself changes (new search).
    pub fn reset_for_new_results(&mut self) {
        self.page = 1;
        self.sort_field = SortField::None;
        self.sort_direction = SortDirection::Ascending;
        self.expanded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Leg, Price};

    fn itinerary(id: &str, price: f64, stops: u32, minutes: u32) -> Itinerary {
        Itinerary {
            id: id.to_string(),
            price: Price {
                raw: price,
                formatted: format!("${:.0}", price),
            },
            legs: vec![Leg {
                stop_count: stops,
                duration_in_minutes: minutes,
                ..Leg::default()
            }],
        }
    }

    fn sample_list() -> Vec<Itinerary> {
        vec![
            itinerary("f1", 420.0, 1, 500),
            itinerary("f2", 310.0, 0, 620),
            itinerary("f3", 580.0, 2, 380),
            itinerary("f4", 310.0, 1, 450),
        ]
    }

    #[test]
    fn test_pages_cover_list_without_overflow() {
        let items: Vec<u32> = (0..12).collect();
        for &size in &PAGE_SIZES {
            let pages = total_pages(items.len(), size);
            let mut seen = 0;
            for page in 1..=pages {
                let chunk = paginate(&items, page, size);
                assert!(chunk.len() <= size);
                seen += chunk.len();
            }
            assert_eq!(seen, items.len());
        }
    }

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 10), 2);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<u32> = (0..3).collect();
        assert!(paginate(&items, 2, 5).is_empty());
    }

    #[test]
    fn test_sort_none_preserves_relevance_order() {
        let list = sample_list();
        let view = sort_itineraries(&list, SortField::None, SortDirection::Ascending);
        let ids: Vec<&str> = view.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["f1", "f2", "f3", "f4"]);
    }

    #[test]
    fn test_sort_price_descending_reverses_ascending_without_ties() {
        let list = vec![
            itinerary("a", 300.0, 0, 100),
            itinerary("b", 100.0, 0, 100),
            itinerary("c", 200.0, 0, 100),
        ];
        let asc: Vec<&str> =
            sort_itineraries(&list, SortField::Price, SortDirection::Ascending)
                .iter()
                .map(|i| i.id.as_str())
                .collect();
        let mut desc: Vec<&str> =
            sort_itineraries(&list, SortField::Price, SortDirection::Descending)
                .iter()
                .map(|i| i.id.as_str())
                .collect();
        desc.reverse();
        assert_eq!(asc, ["b", "c", "a"]);
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let list = sample_list();
        let view = sort_itineraries(&list, SortField::Price, SortDirection::Ascending);
        let ids: Vec<&str> = view.iter().map(|i| i.id.as_str()).collect();
        // f2 and f4 tie at 310; f2 comes first in the input and must stay first.
        assert_eq!(ids, ["f2", "f4", "f1", "f3"]);
    }

    #[test]
    fn test_sort_projections_use_primary_leg() {
        let list = sample_list();
        let by_stops: Vec<&str> =
            sort_itineraries(&list, SortField::Stops, SortDirection::Ascending)
                .iter()
                .map(|i| i.id.as_str())
                .collect();
        assert_eq!(by_stops, ["f2", "f1", "f4", "f3"]);

        let by_duration: Vec<&str> =
            sort_itineraries(&list, SortField::Duration, SortDirection::Descending)
                .iter()
                .map(|i| i.id.as_str())
                .collect();
        assert_eq!(by_duration, ["f2", "f1", "f4", "f3"]);
    }

    #[test]
    fn test_sort_does_not_mutate_canonical_list() {
        let list = sample_list();
        let before = list.clone();
        let _ = sort_itineraries(&list, SortField::Duration, SortDirection::Descending);
        assert_eq!(list, before);
    }

    #[test]
    fn test_visible_page_recompute_is_idempotent() {
        let list = sample_list();
        let mut state = TableState::new();
        state.toggle_sort(SortField::Price);
        let first: Vec<String> = state
            .visible_page(&list)
            .iter()
            .map(|i| i.id.clone())
            .collect();
        let second: Vec<String> = state
            .visible_page(&list)
            .iter()
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_page_size_change_resets_page_and_expansion() {
        // 12 results, page size 5, page 3 shows items 11-12 with one expanded.
        let list: Vec<Itinerary> = (1..=12)
            .map(|n| itinerary(&format!("f{}", n), n as f64, 0, 60))
            .collect();
        let mut state = TableState::new();
        state.set_page(3, list.len());
        state.toggle_expanded("f11");
        assert_eq!(state.visible_page(&list).len(), 2);
        assert!(state.is_expanded("f11"));

        state.set_page_size(10);
        assert_eq!(state.page, 1);
        assert_eq!(state.expanded, None);
        let visible: Vec<&str> = state
            .visible_page(&list)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(visible.len(), 10);
        assert_eq!(visible[0], "f1");
    }

    #[test]
    fn test_unknown_page_size_is_ignored() {
        let mut state = TableState::new();
        state.set_page_size(7);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_expansion_toggle_keeps_at_most_one_row() {
        let mut state = TableState::new();
        state.toggle_expanded("a");
        assert!(state.is_expanded("a"));

        state.toggle_expanded("b");
        assert!(state.is_expanded("b"));
        assert!(!state.is_expanded("a"));

        state.toggle_expanded("b");
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_toggle_sort_same_field_flips_direction() {
        let mut state = TableState::new();
        state.toggle_expanded("a");
        state.toggle_sort(SortField::Price);
        assert_eq!(state.sort_field, SortField::Price);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
        assert_eq!(state.expanded, None);

        state.toggle_sort(SortField::Price);
        assert_eq!(state.sort_direction, SortDirection::Descending);

        state.toggle_sort(SortField::Stops);
        assert_eq!(state.sort_field, SortField::Stops);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_set_page_clamps_to_valid_range() {
        let mut state = TableState::new();
        state.set_page(9, 12);
        assert_eq!(state.page, 3);
        state.set_page(0, 12);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_reset_for_new_results() {
        let mut state = TableState::new();
        state.toggle_sort(SortField::Duration);
        state.set_page(2, 20);
        state.toggle_expanded("a");

        state.reset_for_new_results();
        assert_eq!(state.page, 1);
        assert_eq!(state.sort_field, SortField::None);
        assert_eq!(state.expanded, None);
    }
}
