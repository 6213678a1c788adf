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

//! Dataset loading. The catalog is read once per invocation and is read-only
//! afterwards; a failed read or parse surfaces as an error with no retry.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;

use crate::model::Product;

/// The full product collection plus the sorted set of distinct categories.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Catalog> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read dataset {}", path.display()))?;
        let products: Vec<Product> = serde_json::from_str(&text)
            .with_context(|| format!("parse dataset {}", path.display()))?;
        Ok(Catalog::from_products(products))
    }

    pub fn from_products(products: Vec<Product>) -> Catalog {
        let mut categories: Vec<String> = products
            .iter()
            .map(|product| product.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Catalog {
            products,
            categories,
        }
    }

    /// Non-fatal dataset problems: duplicate names make display identity
    /// ambiguous, negative prices violate currency semantics. Both are
    /// reported as warnings, never errors.
    pub fn warnings(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut warnings = Vec::new();
        for product in &self.products {
            if !seen.insert(product.name.as_str()) {
                warnings.push(format!("duplicate product name {:?}", product.name));
            }
            if product.price < 0.0 {
                warnings.push(format!(
                    "negative price {} for {:?}",
                    product.price, product.name
                ));
            }
        }
        warnings
    }
}
