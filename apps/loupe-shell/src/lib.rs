pub mod command;
pub mod render;
pub mod session;

use std::{fs, io, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use loupe_config::Config;
use loupe_engine::NoteBrowser;
use loupe_store::NoteStore;

#[derive(Debug, Parser)]
#[command(
	version = loupe_cli::VERSION,
	rename_all = "kebab",
	styles = loupe_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// Seed file overriding the one named in config.
	#[arg(long, short = 's', value_name = "FILE")]
	pub seed: Option<PathBuf>,
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = match args.config.as_deref() {
		Some(path) => loupe_config::load(path)?,
		None => Config::default(),
	};

	init_tracing(&config);

	let browser = build_browser(&config, args.seed)?;
	let stdin = io::stdin();
	let mut stdout = io::stdout();

	session::run_session(browser, stdin.lock(), &mut stdout)?;

	Ok(())
}

fn build_browser(config: &Config, seed_override: Option<PathBuf>) -> color_eyre::Result<NoteBrowser> {
	let seed_path =
		seed_override.or_else(|| config.seed.as_ref().and_then(|seed| seed.path.clone()));
	let store = match seed_path {
		Some(path) => {
			let raw = fs::read_to_string(&path)
				.wrap_err_with(|| format!("Failed to read seed file at {path:?}."))?;
			let store = NoteStore::from_seed_json(&raw)?;

			tracing::info!(count = store.len(), ?path, "Seeded note store.");

			store
		},
		None => NoteStore::new(),
	};
	let browser = NoteBrowser::with_order(store, config.browse.group_order())
		.reset_expansion_on_change(config.browse.reset_expansion_on_change);

	Ok(browser)
}

fn init_tracing(config: &Config) {
	let filter = EnvFilter::try_new(&config.service.log_level)
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
