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

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::params::DEFAULT_PAGE_SIZE;
use crate::params::PAGE_SIZES;

pub const CONFIG_FILE: &str = "wares.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("items.json"),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Resolved configuration: the directory holding `wares.toml` (or the working
/// directory when none was found) plus the parsed settings.
#[derive(Debug, Clone)]
pub struct CatalogCtx {
    pub root: PathBuf,
    pub config: Config,
}

impl CatalogCtx {
    pub fn load_from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir().context("get current dir")?;
        Self::load_from(&cwd)
    }

    pub fn load_from(start: &Path) -> Result<Self> {
        match find_config_root(start) {
            Some(root) => {
                let config = read_config(&root.join(CONFIG_FILE))?;
                Ok(Self { root, config })
            }
            None => Ok(Self {
                root: start.to_path_buf(),
                config: Config::default(),
            }),
        }
    }

    pub fn dataset_path(&self) -> PathBuf {
        if self.config.dataset_path.is_absolute() {
            self.config.dataset_path.clone()
        } else {
            self.root.join(&self.config.dataset_path)
        }
    }
}

pub fn find_config_root(start: &Path) -> Option<PathBuf> {
    let mut cur = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    loop {
        if cur.join(CONFIG_FILE).exists() {
            return Some(cur);
        }
        match cur.parent() {
            Some(parent) => cur = parent.to_path_buf(),
            None => return None,
        }
    }
}

pub fn read_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut config: Config = toml::from_str(&text).context("parse wares.toml")?;
    if !PAGE_SIZES.contains(&config.page_size) {
        config.page_size = DEFAULT_PAGE_SIZE;
    }
    Ok(config)
}

pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let text = toml::to_string_pretty(config).context("serialize wares.toml")?;
    std::fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
