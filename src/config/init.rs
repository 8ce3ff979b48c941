use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use super::Config;
use crate::budget::DEFAULT_BUDGET_LIMIT;
use crate::ranking::SortKey;
use crate::scoring::WeightConfig;

/// Config written by `house-rank init`: every default spelled out so it can
/// be edited in place.
fn default_config() -> Config {
    Config {
        listings: None,
        budget_limit: Some(DEFAULT_BUDGET_LIMIT),
        sort_by: Some(SortKey::Score),
        search: None,
        weights: Some(WeightConfig::default()),
    }
}

/// Write the default config to `path` atomically.
///
/// Refuses to replace an existing file unless `force` is set. Creates parent
/// directories as needed.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let yaml = serde_saphyr::to_string(&default_config())
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(())
}
