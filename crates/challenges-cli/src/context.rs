use challenges_core::AppConfig;
use challenges_domain::{BundledSource, Catalog, ChallengeSource, DirectorySource};
use std::path::{Path, PathBuf};

/// Config and catalog shared by every subcommand and the TUI.
pub struct CliContext {
    pub config: AppConfig,
    pub catalog: Catalog,
}

impl CliContext {
    /// An explicit config path must load; the default location falls back to defaults.
    pub fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => AppConfig::load_from(path)
                .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?,
            None => AppConfig::load(),
        };

        let data_dir = data_dir.or_else(|| config.data_dir.clone());
        let catalog = match data_dir {
            Some(dir) => {
                tracing::info!("Loading extra challenges from {}", dir.display());
                let extra = DirectorySource::new(dir);
                let sources: [&dyn ChallengeSource; 2] = [&BundledSource, &extra];
                Catalog::from_sources(&sources)?
            }
            None => Catalog::bundled()?,
        };

        Ok(Self { config, catalog })
    }
}
