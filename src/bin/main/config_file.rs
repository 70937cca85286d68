use std::{fs, path::Path};

use anyhow::{Context, Result};
use kiosk_core::settings::KioskConfig;
use log::info;

use super::cli::Args;

pub(super) const DEFAULT_CONFIG_NAME: &str = "kiosk.toml";

/// Resolve the session configuration: file (explicit or under the content
/// root), then CLI overrides, then normalization.
pub(super) fn load(args: &Args) -> Result<KioskConfig> {
    let mut config = match args.config.as_deref() {
        Some(path) => read(path)?,
        None => {
            let fallback = args.content_root.join(DEFAULT_CONFIG_NAME);
            if fallback.is_file() {
                read(&fallback)?
            } else {
                info!("config: no {} found; using defaults", DEFAULT_CONFIG_NAME);
                KioskConfig::default()
            }
        }
    };

    if let Some(seed) = args.seed {
        config.shuffle_seed = Some(seed);
    }
    if let Some(start) = args.start_poem.as_ref() {
        config.start_poem_id = Some(start.clone());
    }

    Ok(config.normalized())
}

fn read(path: &Path) -> Result<KioskConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = parse(&text).with_context(|| format!("parsing config {}", path.display()))?;
    info!("config: loaded {}", path.display());
    Ok(config)
}

pub(super) fn parse(text: &str) -> Result<KioskConfig> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(root: &Path) -> Args {
        Args {
            config: None,
            content_root: root.to_path_buf(),
            seed: None,
            start_poem: None,
            tick_ms: 16,
            snapshot_dir: None,
            max_ticks: None,
            demo: false,
        }
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = parse("dwell_seconds = 12\nstart_poem_id = \"ozymandias\"\n").unwrap();

        assert_eq!(config.dwell_seconds, 12);
        assert_eq!(config.fade_in_seconds, 2);
        assert_eq!(config.start_poem_id.as_deref(), Some("ozymandias"));
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("dwell_ms = 100\n").is_err());
    }

    #[test]
    fn content_root_config_is_picked_up_and_overridden() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            "shuffle_seed = 5\nbacklight_max_percent = 180\n",
        )
        .unwrap();

        let mut args = args(dir.path());
        assert_eq!(load(&args).unwrap().shuffle_seed, Some(5));
        assert_eq!(load(&args).unwrap().backlight_max_percent, 100);

        args.seed = Some(9);
        args.start_poem = Some("the-tyger".into());
        let config = load(&args).unwrap();
        assert_eq!(config.shuffle_seed, Some(9));
        assert_eq!(config.start_poem_id.as_deref(), Some("the-tyger"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(dir.path());
        args.config = Some(dir.path().join("nope.toml"));

        assert!(load(&args).is_err());
    }
}
