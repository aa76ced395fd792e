//! Command-line arguments and the inputs they point at.

use std::fs;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use level::{GeneratorConfig, Level, LevelGenerator};
use rl::EpisodeConfig;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "runtime_main", about = "Plays platformer episodes with a seeded random policy")]
pub struct Args {
    /// JSON level file.
    #[arg(long, conflicts_with = "generate")]
    pub level: Option<PathBuf>,
    /// Read `--level` as a tile-grid export instead of a level file.
    #[arg(long, requires = "level")]
    pub tilemap: bool,
    /// Generate a level from this seed. Used when no `--level` is given.
    #[arg(long)]
    pub generate: Option<u64>,
    /// JSON run config; missing fields keep their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, default_value_t = 10)]
    pub episodes: usize,
    /// Seed of the random policy.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Probability of pressing jump on any tick.
    #[arg(long, default_value_t = 0.05)]
    pub jump_prob: f64,
}

/// Contents of the `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub episode: EpisodeConfig,
    pub generator: GeneratorConfig,
}

impl RunConfig {
    pub fn parse(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source).context("parsing run config")?;
        config.episode.validate()?;
        Ok(config)
    }
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.jump_prob),
            "--jump-prob must lie in [0, 1], found {}",
            self.jump_prob
        );
        Ok(())
    }

    pub fn run_config(&self) -> Result<RunConfig> {
        match &self.config {
            Some(path) => {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                RunConfig::parse(&source)
            }
            None => Ok(RunConfig::default()),
        }
    }

    pub fn load_level(&self, generator: &GeneratorConfig) -> Result<Level> {
        if let Some(path) = &self.level {
            if self.tilemap {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("reading tilemap {}", path.display()))?;
                return Level::from_tilemap_json(&source)
                    .with_context(|| format!("importing tilemap {}", path.display()));
            }
            return Level::from_path(path)
                .with_context(|| format!("loading level {}", path.display()));
        }
        let seed = self.generate.unwrap_or(self.seed);
        let level = LevelGenerator::new(generator.clone())?.generate(seed)?;
        tracing::info!(
            seed,
            length = level.length(),
            obstacles = level.obstacles().len(),
            "Generated level"
        );
        Ok(level)
    }
}
