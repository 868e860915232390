use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::{self, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "randpick")]
#[command(about = "Paste a list, then draw items at random without repeats")]
pub struct Cli {
    /// File with one item per line to pre-fill the editor ("-" reads stdin)
    pub file: Option<PathBuf>,

    #[arg(long, env = "RANDPICK_SEED", help = "Seed the random generator for a reproducible session")]
    pub seed: Option<u64>,

    #[arg(long, help = "Start with the built-in sample list", default_value_t = false)]
    pub sample: bool,

    #[arg(long = "frame-ms", help = "Milliseconds between animation frames")]
    pub frame_ms: Option<u64>,
}

impl Cli {
    /// Read the initial editor text from the positional argument, if any.
    pub fn initial_text(&self) -> Result<Option<String>, ConfigError> {
        let Some(path) = &self.file else {
            return Ok(None);
        };

        let text = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| ConfigError::Read(path.clone(), e))?;
            buf
        } else {
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.clone(), e))?
        };

        Ok(Some(text))
    }

    /// Effective config (file, then env, then flags) and the initial editor text.
    pub fn resolve(&self) -> error::Result<(Config, Option<String>)> {
        let config = Config::load()
            .with_env()?
            .with_overrides(self.frame_ms, self.seed, self.sample);
        config.validate()?;
        let initial_text = self.initial_text()?;
        Ok((config, initial_text))
    }
}
