mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Browse, Config, Seed, Service};

use std::{fs, path::Path, str::FromStr};

use loupe_domain::Facet;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.browse.group_by.is_empty() {
		return Err(Error::Validation {
			message: "browse.group_by must list at least one facet.".to_string(),
		});
	}

	let mut seen = Vec::with_capacity(cfg.browse.group_by.len());

	for name in &cfg.browse.group_by {
		let facet = Facet::from_str(name).map_err(|_| Error::Validation {
			message: format!(
				"browse.group_by entry '{name}' must be one of region, rating, brand, category, or section."
			),
		})?;

		if seen.contains(&facet) {
			return Err(Error::Validation {
				message: format!("browse.group_by lists '{name}' more than once."),
			});
		}

		seen.push(facet);
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if let Some(seed) = cfg.seed.as_mut()
		&& seed.path.as_deref().map(|path| path.as_os_str().is_empty()).unwrap_or(false)
	{
		seed.path = None;
	}
}
