use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context as _;
use catalog_application::{AppContext, SystemPreference};
use catalog_core::{Catalog, Settings};
use catalog_ui::Ui;
use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let project_dirs =
        ProjectDirs::from("dev", "catalog", "catalog").context("resolve project dirs")?;

    let data_dir = project_dirs.data_dir();
    fs::create_dir_all(data_dir)
        .with_context(|| format!("create data dir {}", data_dir.display()))?;
    init_logging(&data_dir.join("catalog.log"))?;

    let settings_path = project_dirs.config_dir().join("settings.json");
    let settings = catalog_storage::load_settings(&settings_path)?;

    let catalog = load_catalog(&settings)?;
    let system = SystemPreference::detect(
        std::env::var("CATALOG_COLOR_SCHEME").ok().as_deref(),
        std::env::var("COLORFGBG").ok().as_deref(),
    );

    let ctx = Ui::new(AppContext::new(settings, catalog, system)).run()?;
    info!(
        matches = ctx.match_count(),
        shown = ctx.previews.len(),
        theme = %ctx.theme.theme,
        "session closed"
    );

    Ok(())
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("CATALOG_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("install tracing subscriber: {err}"))
}

/// CLI argument, then `CATALOG_PATH`, then the settings file, then the bundled sample.
fn load_catalog(settings: &Settings) -> anyhow::Result<Catalog> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("CATALOG_PATH").map(PathBuf::from))
        .or_else(|| settings.catalog_path.as_ref().map(PathBuf::from));

    let catalog = match path {
        Some(path) => catalog_storage::load_catalog(&path)?,
        None => {
            info!("no catalog configured, using bundled sample");
            catalog_storage::sample_catalog()?
        }
    };
    Ok(catalog)
}
