// Copyright 2026 Wares Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Applied query parameters and the partial-update merge that produces a new
//! parameter set from an in-progress filter edit. Price and search text are
//! normalized at this boundary; invalid numeric input resolves to the nearest
//! valid bound rather than an error.

use std::collections::BTreeSet;

pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PRICE_FLOOR: f64 = 0.0;
pub const PRICE_CEILING: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub fn as_label(self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn from_label(label: &str) -> Option<SortKey> {
        match label {
            "" => Some(SortKey::None),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            _ => None,
        }
    }
}

/// The applied filter/sort/page state. Never mutated in place; every change
/// goes through [`QueryParams::apply`] and yields a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub search_term: String,
    pub selected_categories: BTreeSet<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock_only: bool,
    pub sort_key: SortKey,
    pub page_size: usize,
    pub page_index: usize,
}

impl QueryParams {
    /// The default parameter set. All categories selected; an empty selection
    /// is a deliberate "show nothing" state, not the default.
    pub fn defaults(categories: &[String]) -> QueryParams {
        QueryParams {
            search_term: String::new(),
            selected_categories: categories.iter().cloned().collect(),
            min_price: None,
            max_price: None,
            in_stock_only: false,
            sort_key: SortKey::None,
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
        }
    }

    /// Merge a partial update: present fields overwrite, absent fields carry
    /// over. An unrecognized page size is ignored rather than applied.
    pub fn apply(&self, update: &PartialUpdate) -> QueryParams {
        let mut next = self.clone();
        if let Some(term) = &update.search_term {
            next.search_term = term.clone();
        }
        if let Some(categories) = &update.categories {
            next.selected_categories = categories.iter().cloned().collect();
        }
        if let Some(min) = update.min_price {
            next.min_price = min;
        }
        if let Some(max) = update.max_price {
            next.max_price = max;
        }
        if let Some(in_stock_only) = update.in_stock_only {
            next.in_stock_only = in_stock_only;
        }
        if let Some(sort_key) = update.sort_key {
            next.sort_key = sort_key;
        }
        if let Some(page_size) = update.page_size
            && PAGE_SIZES.contains(&page_size)
        {
            next.page_size = page_size;
        }
        if let Some(page_index) = update.page_index {
            next.page_index = page_index;
        }
        if update.reset_page {
            next.page_index = 0;
        }
        next
    }
}

/// One filter-form submission. `None` fields were not part of the update; for
/// the price bounds the inner `Option` distinguishes a concrete bound from
/// "unbounded on that side".
#[derive(Debug, Clone, Default)]
pub struct PartialUpdate {
    pub search_term: Option<String>,
    pub categories: Option<Vec<String>>,
    pub min_price: Option<Option<f64>>,
    pub max_price: Option<Option<f64>>,
    pub in_stock_only: Option<bool>,
    pub sort_key: Option<SortKey>,
    pub page_size: Option<usize>,
    pub page_index: Option<usize>,
    pub reset_page: bool,
}

/// Trim surrounding whitespace before a search term is applied.
pub fn normalize_search_term(raw: &str) -> String {
    raw.trim().to_string()
}

/// Normalize raw price-range text from the filter input. Empty text leaves
/// that side unbounded; unparsable or non-finite input falls back to the
/// respective bound (0 for min, 100000 for max); values are clamped to
/// [0, 100000] and inverted pairs are swapped so min <= max.
pub fn normalize_price_range(min_raw: &str, max_raw: &str) -> (Option<f64>, Option<f64>) {
    let min = parse_bound(min_raw, PRICE_FLOOR);
    let max = parse_bound(max_raw, PRICE_CEILING);
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        pair => pair,
    }
}

fn parse_bound(raw: &str, fallback: f64) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let value = match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    };
    Some(value.clamp(PRICE_FLOOR, PRICE_CEILING))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        vec!["Furniture".to_string(), "Stationery".to_string()]
    }

    #[test]
    fn defaults_select_all_categories() {
        let params = QueryParams::defaults(&categories());
        assert_eq!(params.selected_categories.len(), 2);
        assert_eq!(params.search_term, "");
        assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(params.page_index, 0);
        assert_eq!(params.sort_key, SortKey::None);
        assert!(!params.in_stock_only);
        assert!(params.min_price.is_none());
        assert!(params.max_price.is_none());
    }

    #[test]
    fn apply_overwrites_present_fields_only() {
        let current = QueryParams::defaults(&categories());
        let update = PartialUpdate {
            search_term: Some("desk".to_string()),
            page_index: Some(3),
            ..Default::default()
        };
        let next = current.apply(&update);
        assert_eq!(next.search_term, "desk");
        assert_eq!(next.page_index, 3);
        assert_eq!(next.selected_categories, current.selected_categories);
        assert_eq!(next.page_size, current.page_size);
    }

    #[test]
    fn apply_reset_page_forces_index_zero() {
        let current = QueryParams::defaults(&categories()).apply(&PartialUpdate {
            page_index: Some(5),
            ..Default::default()
        });
        let next = current.apply(&PartialUpdate {
            search_term: Some("pen".to_string()),
            reset_page: true,
            ..Default::default()
        });
        assert_eq!(next.page_index, 0);
    }

    #[test]
    fn apply_ignores_unrecognized_page_size() {
        let current = QueryParams::defaults(&categories());
        let next = current.apply(&PartialUpdate {
            page_size: Some(13),
            ..Default::default()
        });
        assert_eq!(next.page_size, DEFAULT_PAGE_SIZE);

        let next = current.apply(&PartialUpdate {
            page_size: Some(50),
            ..Default::default()
        });
        assert_eq!(next.page_size, 50);
    }

    #[test]
    fn apply_can_clear_price_bounds() {
        let current = QueryParams::defaults(&categories()).apply(&PartialUpdate {
            min_price: Some(Some(10.0)),
            max_price: Some(Some(20.0)),
            ..Default::default()
        });
        let next = current.apply(&PartialUpdate {
            min_price: Some(None),
            max_price: Some(None),
            ..Default::default()
        });
        assert!(next.min_price.is_none());
        assert!(next.max_price.is_none());
    }

    #[test]
    fn price_range_swaps_inverted_bounds() {
        let (min, max) = normalize_price_range("500", "100");
        assert_eq!(min, Some(100.0));
        assert_eq!(max, Some(500.0));
    }

    #[test]
    fn price_range_empty_text_is_unbounded() {
        assert_eq!(normalize_price_range("", ""), (None, None));
        assert_eq!(normalize_price_range("10", ""), (Some(10.0), None));
        assert_eq!(normalize_price_range("", "10"), (None, Some(10.0)));
    }

    #[test]
    fn price_range_invalid_text_defaults_to_bound() {
        let (min, max) = normalize_price_range("abc", "xyz");
        assert_eq!(min, Some(PRICE_FLOOR));
        assert_eq!(max, Some(PRICE_CEILING));

        let (min, max) = normalize_price_range("NaN", "inf");
        assert_eq!(min, Some(PRICE_FLOOR));
        assert_eq!(max, Some(PRICE_CEILING));
    }

    #[test]
    fn price_range_clamps_out_of_range_values() {
        let (min, max) = normalize_price_range("-50", "2000000");
        assert_eq!(min, Some(PRICE_FLOOR));
        assert_eq!(max, Some(PRICE_CEILING));
    }

    #[test]
    fn search_term_is_trimmed() {
        assert_eq!(normalize_search_term("  desk  "), "desk");
        assert_eq!(normalize_search_term("   "), "");
    }

    #[test]
    fn sort_key_labels_round_trip() {
        for key in [SortKey::None, SortKey::PriceAsc, SortKey::PriceDesc] {
            assert_eq!(SortKey::from_label(key.as_label()), Some(key));
        }
        assert_eq!(SortKey::from_label("price"), None);
    }
}
