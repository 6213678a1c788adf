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

mod cli;
mod config;
mod engine;
mod model;
mod output;
mod params;
mod session;
mod source;

use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context as _;
use anyhow::Result;
use clap::Parser;

use crate::cli::BrowseArgs;
use crate::cli::Cli;
use crate::cli::Commands;
use crate::config::CatalogCtx;
use crate::config::Config;
use crate::output::JsonResponse;
use crate::output::StatsOut;
use crate::output::print_json;
use crate::output::print_table;
use crate::params::PAGE_SIZES;
use crate::params::PartialUpdate;
use crate::params::SortKey;
use crate::params::normalize_price_range;
use crate::params::normalize_search_term;
use crate::session::Session;
use crate::source::Catalog;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init { path } => cmd_init(path),
        Commands::Browse(args) => handle_result(cmd_browse(&args), args.json),
        Commands::Categories(args) => handle_result(cmd_categories(args.data, args.json), args.json),
        Commands::Stats(args) => handle_result(cmd_stats(args.data, args.json), args.json),
        Commands::Check(args) => handle_result(cmd_check(args.data, args.json), args.json),
    }
}

fn handle_result(result: Result<()>, json: bool) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            if json {
                let resp = JsonResponse::error("error", &err.to_string());
                print_json(&resp)?;
                Ok(())
            } else {
                Err(err)
            }
        }
    }
}

fn cmd_init(path: Option<PathBuf>) -> Result<()> {
    let root = path.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&root).with_context(|| format!("create dir {root:?}"))?;

    let config_path = root.join(config::CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("wares.toml already exists at {}", config_path.display());
    }

    let config = Config::default();
    config::write_config(&config_path, &config)?;

    println!("Initialized wares config at {}", config_path.display());
    Ok(())
}

/// Load the catalog once, from the explicit override or the configured path.
fn load_catalog(data: Option<&Path>) -> Result<(Catalog, Config)> {
    match data {
        Some(path) => Ok((Catalog::load(path)?, Config::default())),
        None => {
            let ctx = CatalogCtx::load_from_cwd()?;
            let catalog = Catalog::load(&ctx.dataset_path())?;
            Ok((catalog, ctx.config))
        }
    }
}

fn cmd_browse(args: &BrowseArgs) -> Result<()> {
    let started = Instant::now();
    let (catalog, config) = load_catalog(args.data.as_deref())?;
    let warnings = catalog.warnings();

    let mut session = Session::new();
    session.attach(catalog)?;

    let update = partial_from_args(args, &config)?;
    session.apply(&update).context("catalog not loaded")?;
    let mut eval = session.evaluate().context("catalog not loaded")?;

    // The engine tolerates an out-of-range index; the caller clamps to the
    // last page so the user still sees results.
    let page_size = session.params().context("catalog not loaded")?.page_size;
    let page_count = eval.page.page_count(page_size);
    if page_count > 0 && args.page >= page_count {
        session
            .apply(&PartialUpdate {
                page_index: Some(page_count - 1),
                ..Default::default()
            })
            .context("catalog not loaded")?;
        eval = session.evaluate().context("catalog not loaded")?;
    }

    let params = session.params().context("catalog not loaded")?;
    if args.json {
        let resp = JsonResponse::ok()
            .with_query(params)
            .with_results(&eval.page.items)
            .with_stats(StatsOut {
                took_ms: started.elapsed().as_millis() as i64,
                total_matching: eval.page.total_matching as i64,
                page_count: Some(eval.page.page_count(params.page_size) as i64),
                ..Default::default()
            })
            .with_warnings(warnings);
        print_json(&resp)?;
    } else {
        for warn in warnings {
            eprintln!("warning: {warn}");
        }
        if eval.page.items.is_empty() {
            println!("No matching products.");
        } else {
            print_table(&eval.page);
        }
        println!(
            "{} matching, page {}/{}",
            eval.page.total_matching,
            params.page_index + 1,
            eval.page.page_count(params.page_size).max(1)
        );
    }

    Ok(())
}

/// Map the command-line flags onto a partial parameter update, running the
/// filter-input normalization at this boundary.
fn partial_from_args(args: &BrowseArgs, config: &Config) -> Result<PartialUpdate> {
    let mut update = PartialUpdate::default();

    if let Some(term) = &args.search {
        update.search_term = Some(normalize_search_term(term));
    }
    if !args.category.is_empty() {
        update.categories = Some(args.category.clone());
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let (min, max) = normalize_price_range(
            args.min_price.as_deref().unwrap_or(""),
            args.max_price.as_deref().unwrap_or(""),
        );
        update.min_price = Some(min);
        update.max_price = Some(max);
    }
    if args.in_stock {
        update.in_stock_only = Some(true);
    }
    if let Some(label) = &args.sort {
        let sort_key = SortKey::from_label(label).ok_or_else(|| {
            anyhow::anyhow!("unknown sort order {label:?}; expected price-asc or price-desc")
        })?;
        update.sort_key = Some(sort_key);
    }
    let page_size = args.page_size.unwrap_or(config.page_size);
    if !PAGE_SIZES.contains(&page_size) {
        anyhow::bail!("page size must be one of 10, 20, 50");
    }
    update.page_size = Some(page_size);
    update.page_index = Some(args.page);

    Ok(update)
}

fn cmd_categories(data: Option<PathBuf>, json: bool) -> Result<()> {
    let (catalog, _) = load_catalog(data.as_deref())?;

    if json {
        let resp = JsonResponse::ok().with_categories(&catalog.categories);
        print_json(&resp)?;
    } else {
        for category in &catalog.categories {
            println!("{category}");
        }
    }
    Ok(())
}

fn cmd_stats(data: Option<PathBuf>, json: bool) -> Result<()> {
    let started = Instant::now();
    let (catalog, _) = load_catalog(data.as_deref())?;
    let in_stock = catalog.products.iter().filter(|p| p.in_stock).count();
    let stats = StatsOut {
        took_ms: started.elapsed().as_millis() as i64,
        total_matching: 0,
        product_count: Some(catalog.products.len() as i64),
        category_count: Some(catalog.categories.len() as i64),
        in_stock_count: Some(in_stock as i64),
        ..Default::default()
    };

    if json {
        let resp = JsonResponse::ok().with_stats(stats);
        print_json(&resp)?;
    } else {
        println!("Products: {}", catalog.products.len());
        println!("Categories: {}", catalog.categories.len());
        println!("In stock: {in_stock}");
    }
    Ok(())
}

fn cmd_check(data: Option<PathBuf>, json: bool) -> Result<()> {
    let (catalog, _) = load_catalog(data.as_deref())?;
    let warnings = catalog.warnings();

    if json {
        let resp = JsonResponse::ok()
            .with_stats(StatsOut {
                product_count: Some(catalog.products.len() as i64),
                ..Default::default()
            })
            .with_warnings(warnings);
        print_json(&resp)?;
    } else if warnings.is_empty() {
        println!("Dataset OK ({} products)", catalog.products.len());
    } else {
        for warn in &warnings {
            println!("warning: {warn}");
        }
        println!("{} problems found", warnings.len());
    }
    Ok(())
}
