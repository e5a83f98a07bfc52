//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::view::{Filter, SortOrder};

#[derive(Debug, Parser)]
#[command(name = "recipe-deck", version, about = "Browse, filter and search a recipe catalog")]
pub struct Cli {
    /// Config file (default: <config_dir>/recipe-deck/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON recipe catalog to load instead of the builtin one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Key-value storage file holding favorites
    #[arg(long, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Initial filter: all, favorites, quick, easy, medium, hard
    #[arg(long, default_value = "all")]
    pub filter: String,

    /// Initial sort: none, name, time
    #[arg(long, default_value = "none")]
    pub sort: String,

    /// Initial search text
    #[arg(long, default_value = "")]
    pub search: String,

    /// Print the matching recipes and exit instead of starting the UI
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Unknown tags fall back to showing everything unsorted.
    pub fn initial_filter(&self) -> Filter {
        Filter::parse(&self.filter)
    }

    pub fn initial_sort(&self) -> SortOrder {
        SortOrder::parse(&self.sort)
    }
}
