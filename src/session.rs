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

//! Session state: gates evaluation on the one-shot catalog load and tags each
//! parameter change with a generation so a result computed for a superseded
//! parameter set can be recognized and discarded (last write wins).

use anyhow::Result;
use anyhow::bail;

use crate::engine;
use crate::model::ResultPage;
use crate::params::PartialUpdate;
use crate::params::QueryParams;
use crate::source::Catalog;

#[derive(Debug, Default)]
pub struct Session {
    catalog: Option<Catalog>,
    params: Option<QueryParams>,
    generation: u64,
}

/// A result page tagged with the generation it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub generation: u64,
    pub page: ResultPage,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    /// Install the loaded catalog and the default parameters. One-shot: a
    /// second attach is an error, the collection is read-only afterwards.
    pub fn attach(&mut self, catalog: Catalog) -> Result<()> {
        if self.catalog.is_some() {
            bail!("catalog already attached");
        }
        self.params = Some(QueryParams::defaults(&catalog.categories));
        self.catalog = Some(catalog);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn params(&self) -> Option<&QueryParams> {
        self.params.as_ref()
    }

    /// Merge a partial update into the applied parameters and return the new
    /// generation. A no-op before the catalog is attached.
    pub fn apply(&mut self, update: &PartialUpdate) -> Option<u64> {
        let params = self.params.as_ref()?;
        self.params = Some(params.apply(update));
        self.generation += 1;
        Some(self.generation)
    }

    /// Restore every parameter to its default, with the full category set
    /// selected.
    pub fn reset(&mut self) -> Option<u64> {
        let catalog = self.catalog.as_ref()?;
        self.params = Some(QueryParams::defaults(&catalog.categories));
        self.generation += 1;
        Some(self.generation)
    }

    /// Evaluate the current parameters against the attached catalog. `None`
    /// before attach; evaluations never see a partially loaded collection.
    pub fn evaluate(&self) -> Option<Evaluation> {
        let catalog = self.catalog.as_ref()?;
        let params = self.params.as_ref()?;
        Some(Evaluation {
            generation: self.generation,
            page: engine::evaluate(&catalog.products, params),
        })
    }

    /// Whether a previously computed evaluation still reflects the latest
    /// parameter set.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
