use anyhow::Context;
use clap::Parser;
use recipe_deck::args::Cli;
use recipe_deck::catalog::RecipeStore;
use recipe_deck::config::Config;
use recipe_deck::logging::{init_tracing, LogTarget};
use recipe_deck::storage::{FavoritesRepository, FileStore};
use recipe_deck::ui::app::App;
use recipe_deck::ui::plain::render_plain;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let log_target = if cli.print {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.log_path())
    };
    init_tracing(log_target).context("Failed to initialize logging")?;

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let store = match catalog_path {
        Some(path) => RecipeStore::load_from(&path)?,
        None => RecipeStore::builtin(),
    };

    let storage_path = cli.storage.clone().unwrap_or_else(|| config.storage_path());
    tracing::debug!(path = %storage_path.display(), "Using storage file");
    let favorites = FavoritesRepository::new(Box::new(FileStore::new(storage_path)));

    let mut app = App::new(store, favorites, config.ui.debounce());
    app.start_with(cli.initial_filter(), cli.initial_sort(), &cli.search);

    if cli.print {
        print!("{}", render_plain(&app));
        return Ok(());
    }

    recipe_deck::ui::run(app, config.ui.tick_rate()).context("Terminal UI failed")
}
