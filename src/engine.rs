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

//! The query engine: a pure function from the full collection and the applied
//! parameters to one page of results. No I/O, deterministic for identical
//! inputs, safe to re-run or discard.

use crate::model::Product;
use crate::model::ResultPage;
use crate::params::QueryParams;
use crate::params::SortKey;

/// Filter, sort, and paginate. Stages run in pipeline order: name search,
/// category membership, price range, stock flag, price sort, slice.
///
/// An empty category selection yields zero matches by policy. `SortKey::None`
/// keeps the post-filter order, which is the source collection order. A page
/// index past the end yields an empty page with the correct total, never an
/// error.
pub fn evaluate(all: &[Product], params: &QueryParams) -> ResultPage {
    let needle = params.search_term.to_lowercase();
    let mut matching: Vec<Product> = all
        .iter()
        .filter(|product| needle.is_empty() || product.name.to_lowercase().contains(&needle))
        .filter(|product| params.selected_categories.contains(&product.category))
        .filter(|product| params.min_price.is_none_or(|min| product.price >= min))
        .filter(|product| params.max_price.is_none_or(|max| product.price <= max))
        .filter(|product| !params.in_stock_only || product.in_stock)
        .cloned()
        .collect();

    // Vec::sort_by is stable, so equal prices keep their filtered order.
    match params.sort_key {
        SortKey::None => {}
        SortKey::PriceAsc => matching.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => matching.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    let total_matching = matching.len();
    let start = params
        .page_index
        .saturating_mul(params.page_size)
        .min(total_matching);
    let end = start.saturating_add(params.page_size).min(total_matching);
    ResultPage {
        items: matching[start..end].to_vec(),
        total_matching,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn product(name: &str, category: &str, price: f64, in_stock: bool) -> Product {
        Product {
            name: name.to_string(),
            category: category.to_string(),
            price,
            in_stock,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("A", "X", 10.0, true),
            product("B", "Y", 20.0, false),
        ]
    }

    fn params_for(categories: &[&str]) -> QueryParams {
        let categories: Vec<String> = categories.iter().map(|c| c.to_string()).collect();
        QueryParams::defaults(&categories)
    }

    #[test]
    fn stock_filter_scenario() {
        let mut params = params_for(&["X", "Y"]);
        params.in_stock_only = true;
        let page = evaluate(&sample(), &params);
        assert_eq!(page.total_matching, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "A");
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut params = params_for(&["X", "Y"]);
        params.search_term = "b".to_string();
        let page = evaluate(&sample(), &params);
        assert_eq!(page.total_matching, 1);
        assert_eq!(page.items[0].name, "B");
    }

    #[test]
    fn second_page_of_size_one_holds_second_cheapest() {
        let mut params = params_for(&["X", "Y"]);
        params.sort_key = SortKey::PriceAsc;
        params.page_size = 1;
        params.page_index = 1;
        let page = evaluate(&sample(), &params);
        assert_eq!(page.total_matching, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "B");
    }

    #[test]
    fn empty_category_selection_matches_nothing() {
        let mut params = params_for(&["X", "Y"]);
        params.selected_categories = BTreeSet::new();
        params.search_term = "a".to_string();
        let page = evaluate(&sample(), &params);
        assert_eq!(page.total_matching, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let all = vec![
            product("Cheap", "X", 5.0, true),
            product("Mid", "X", 10.0, true),
            product("Dear", "X", 15.0, true),
        ];
        let mut params = params_for(&["X"]);
        params.min_price = Some(5.0);
        params.max_price = Some(10.0);
        let page = evaluate(&all, &params);
        assert_eq!(page.total_matching, 2);
        assert_eq!(page.items[0].name, "Cheap");
        assert_eq!(page.items[1].name, "Mid");
    }

    #[test]
    fn page_index_past_end_yields_empty_page_with_total() {
        let mut params = params_for(&["X", "Y"]);
        params.page_index = 7;
        let page = evaluate(&sample(), &params);
        assert_eq!(page.total_matching, 2);
        assert!(page.items.is_empty());
    }

    #[test]
    fn evaluate_is_idempotent() {
        let mut params = params_for(&["X", "Y"]);
        params.sort_key = SortKey::PriceDesc;
        params.search_term = "a".to_string();
        let first = evaluate(&sample(), &params);
        let second = evaluate(&sample(), &params);
        assert_eq!(first, second);
    }

    #[test]
    fn sort_none_keeps_source_order() {
        let all = vec![
            product("Late", "X", 30.0, true),
            product("Early", "X", 10.0, true),
            product("Middle", "X", 20.0, true),
        ];
        let params = params_for(&["X"]);
        let page = evaluate(&all, &params);
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Late", "Early", "Middle"]);
    }

    #[test]
    fn sort_is_stable_across_equal_prices() {
        let all = vec![
            product("First", "X", 10.0, true),
            product("Second", "X", 10.0, true),
            product("Cheapest", "X", 5.0, true),
        ];
        let mut params = params_for(&["X"]);
        params.sort_key = SortKey::PriceAsc;
        let page = evaluate(&all, &params);
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cheapest", "First", "Second"]);
    }

    #[test]
    fn pages_partition_the_filtered_sequence() {
        let all: Vec<Product> = (0..25)
            .map(|i| product(&format!("P{i:02}"), "X", i as f64, i % 2 == 0))
            .collect();
        let mut params = params_for(&["X"]);
        params.sort_key = SortKey::PriceDesc;
        params.page_size = 10;

        params.page_index = 0;
        let full = {
            let mut collected = Vec::new();
            let total = evaluate(&all, &params).total_matching;
            let pages = total.div_ceil(params.page_size);
            for index in 0..pages {
                params.page_index = index;
                collected.extend(evaluate(&all, &params).items);
            }
            collected
        };

        assert_eq!(full.len(), 25);
        let names: BTreeSet<&str> = full.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 25);
        for pair in full.windows(2) {
            assert!(pair[0].price >= pair[1].price);
        }
    }
}
