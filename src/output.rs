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

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::model::Product;
use crate::model::ResultPage;
use crate::params::QueryParams;

#[derive(Debug, Clone, Serialize, Default)]
pub struct StatsOut {
    pub took_ms: i64,
    pub total_matching: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock_count: Option<i64>,
}

/// Echo of the applied query parameters, so a JSON consumer can see what its
/// partial update resolved to.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOut {
    pub search: String,
    pub categories: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock_only: bool,
    pub sort: String,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorOut {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct JsonResponse {
    pub ok: bool,
    pub schema_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorOut>,
}

impl JsonResponse {
    pub fn ok() -> Self {
        Self {
            ok: true,
            schema_version: "1".to_string(),
            ..Default::default()
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            ok: false,
            schema_version: "1".to_string(),
            error: Some(ErrorOut {
                code: code.to_string(),
                message: message.to_string(),
            }),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, params: &QueryParams) -> Self {
        self.query = Some(QueryOut {
            search: params.search_term.clone(),
            categories: params.selected_categories.iter().cloned().collect(),
            min_price: params.min_price,
            max_price: params.max_price,
            in_stock_only: params.in_stock_only,
            sort: params.sort_key.as_label().to_string(),
            page: params.page_index as i64,
            page_size: params.page_size as i64,
        });
        self
    }

    pub fn with_results(mut self, items: &[Product]) -> Self {
        let results = items
            .iter()
            .map(|product| serde_json::to_value(product).unwrap_or(Value::Null))
            .collect();
        self.results = Some(results);
        self
    }

    pub fn with_categories(mut self, categories: &[String]) -> Self {
        self.categories = Some(categories.to_vec());
        self
    }

    pub fn with_stats(mut self, stats: StatsOut) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

pub fn print_json(resp: &JsonResponse) -> Result<()> {
    let text = serde_json::to_string_pretty(resp)?;
    println!("{text}");
    Ok(())
}

pub fn print_table(page: &ResultPage) {
    for product in &page.items {
        let stock = if product.in_stock {
            "in-stock"
        } else {
            "out-of-stock"
        };
        println!(
            "{}\t{}\t{:.2}\t{}",
            product.name, product.category, product.price, stock
        );
    }
}
