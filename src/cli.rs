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

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(name = "wares", version, about = "CLI product catalog browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default wares.toml
    Init {
        /// Directory to initialize
        path: Option<PathBuf>,
    },

    /// Filter, sort, and page through the catalog
    Browse(BrowseArgs),

    /// List the distinct product categories
    Categories(CategoriesArgs),

    /// Show catalog stats
    Stats(StatsArgs),

    /// Run dataset sanity checks
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Dataset file (overrides wares.toml)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Case-insensitive name search
    #[arg(long)]
    pub search: Option<String>,

    /// Category to include (repeatable; all categories when omitted)
    #[arg(long)]
    pub category: Vec<String>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<String>,

    /// Only in-stock products
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order: price-asc or price-desc
    #[arg(long)]
    pub sort: Option<String>,

    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Products per page: 10, 20, or 50
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Dataset file (overrides wares.toml)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Dataset file (overrides wares.toml)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Dataset file (overrides wares.toml)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}
