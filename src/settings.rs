use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::report::OutputFormat;

pub const CONFIG_FILE: &str = "cdir_offices.toml";
pub const ENV_PREFIX: &str = "CDIR";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub file_prefix: String,
    pub file_extension: String,
    pub chunk_size: usize,
    /// Rayon worker count; 0 keeps rayon's default.
    pub threads: usize,
}

impl Settings {
    /// Defaults, then `cdir_offices.toml` if present, then `CDIR_*` variables.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE), Some(Environment::with_prefix(ENV_PREFIX).try_parsing(true)))
    }

    pub fn load_from(file: &Path, env: Option<Environment>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("input_dir", ".")?
            .set_default("output", "office_locations.csv")?
            .set_default("format", "csv")?
            .set_default("file_prefix", "CDIR-")?
            .set_default("file_extension", ".txt")?
            .set_default("chunk_size", 500_i64)?
            .set_default("threads", 0_i64)?
            .add_source(File::from(file).required(false));
        if let Some(env) = env {
            builder = builder.add_source(env);
        }
        Ok(builder.build()?.try_deserialize()?)
    }
}
