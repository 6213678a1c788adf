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

//! Shared domain types used across loading, querying, and output.

use serde::Deserialize;
use serde::Serialize;

/// One catalog entry. `name` is the identity key; the dataset is expected to
/// keep it unique across the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

/// One page of matching products plus the pre-pagination match count.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    pub items: Vec<Product>,
    pub total_matching: usize,
}

impl ResultPage {
    pub fn page_count(&self, page_size: usize) -> usize {
        self.total_matching.div_ceil(page_size)
    }
}
