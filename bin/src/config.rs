//! Allowed-unit configuration, from command line flags or a YAML file.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Args;
use extract::AllowedUnits;
use serde::Deserialize;

pub const XDG_PREFIX: &str = "tablecopy";
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Contents of a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub allowed_units: AllowedUnits,
}

/// Loads the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<Config> {
    let rdr = File::open(path).with_context(|| format!("opening configuration file {path:?}"))?;
    serde_yaml_ng::from_reader(rdr).with_context(|| format!("parsing configuration file {path:?}"))
}

/// CLI arguments relating to [AllowedUnits].
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// Unit tokens that mark a cell as a unit fragment, such as "$" or "bps".
    /// Overrides any configuration file.
    #[arg(long, value_delimiter(','))]
    units: Option<Vec<String>>,

    /// Path to a YAML configuration file. Defaults to
    /// $XDG_CONFIG_HOME/tablecopy/config.yaml if that exists.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Resolves the unit tokens to use, in order of precedence: `--units`,
    /// `--config`, the XDG configuration file, then the built-in defaults.
    pub fn allowed_units(&self, xdg_dirs: &xdg::BaseDirectories) -> Result<AllowedUnits> {
        if let Some(units) = &self.units {
            return AllowedUnits::new(units.iter().cloned()).context("parsing --units");
        }

        let path = match &self.config {
            Some(path) => path.clone(),
            None => match xdg_dirs.find_config_file(CONFIG_FILENAME) {
                Some(path) => path,
                None => {
                    log::debug!("no configuration file found, using default units");
                    return Ok(AllowedUnits::default());
                }
            },
        };

        log::debug!("loading configuration from {path:?}");
        Ok(load_config(&path)?.allowed_units)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use googletest::prelude::*;

    use super::*;

    fn write_config(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    fn units(tokens: &[&str]) -> AllowedUnits {
        AllowedUnits::new(tokens.iter().copied()).expect("valid units")
    }

    #[gtest]
    fn loads_units_from_file() -> anyhow::Result<()> {
        let file = write_config("allowed_units: ['€', 'bp']\n")?;
        let config = load_config(file.path())?;
        expect_that!(config.allowed_units, eq(&units(&["€", "bp"])));
        Ok(())
    }

    #[gtest]
    fn missing_key_uses_defaults() -> anyhow::Result<()> {
        let file = write_config("{}\n")?;
        let config = load_config(file.path())?;
        expect_that!(config.allowed_units, eq(&AllowedUnits::default()));
        Ok(())
    }

    #[gtest]
    fn rejects_unknown_keys() -> anyhow::Result<()> {
        let file = write_config("allowed_unit: ['$']\n")?;
        expect_that!(load_config(file.path()).is_err(), eq(true));
        Ok(())
    }

    #[gtest]
    fn rejects_empty_unit_in_file() -> anyhow::Result<()> {
        let file = write_config("allowed_units: ['$', '']\n")?;
        expect_that!(load_config(file.path()).is_err(), eq(true));
        Ok(())
    }

    #[gtest]
    fn units_flag_takes_precedence_over_config_file() -> anyhow::Result<()> {
        let file = write_config("allowed_units: ['€']\n")?;
        let args = ConfigArgs {
            units: Some(vec!["x".to_string()]),
            config: Some(file.path().to_path_buf()),
        };
        let xdg_dirs = xdg::BaseDirectories::with_prefix(XDG_PREFIX);
        expect_that!(args.allowed_units(&xdg_dirs)?, eq(&units(&["x"])));
        Ok(())
    }

    #[gtest]
    fn config_flag_is_loaded() -> anyhow::Result<()> {
        let file = write_config("allowed_units: ['€']\n")?;
        let args = ConfigArgs {
            units: None,
            config: Some(file.path().to_path_buf()),
        };
        let xdg_dirs = xdg::BaseDirectories::with_prefix(XDG_PREFIX);
        expect_that!(args.allowed_units(&xdg_dirs)?, eq(&units(&["€"])));
        Ok(())
    }

    #[gtest]
    fn missing_config_flag_path_is_an_error() {
        let args = ConfigArgs {
            units: None,
            config: Some(PathBuf::from("/nonexistent/tablecopy/config.yaml")),
        };
        let xdg_dirs = xdg::BaseDirectories::with_prefix(XDG_PREFIX);
        expect_that!(args.allowed_units(&xdg_dirs).is_err(), eq(true));
    }
}
