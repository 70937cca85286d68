use std::path::PathBuf;

use clap::Parser;

/// Photo and poem slideshow for a 480x480 touch kiosk.
///
/// Taps are read from stdin: each line is one tap, optionally `x y`.
#[derive(Debug, Parser)]
#[command(name = "poetry-kiosk", version, about)]
pub(super) struct Args {
    /// TOML configuration. Defaults to `<content-root>/kiosk.toml` when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding `poems/<id>.json` and `photos/<id>.jpg`.
    #[arg(long, default_value = "/data")]
    pub content_root: PathBuf,

    /// Shuffle seed; overrides `shuffle_seed`.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Poem id to show first; overrides `start_poem_id`.
    #[arg(long)]
    pub start_poem: Option<String>,

    /// Tick period of the playback loop.
    #[arg(long, default_value_t = 16)]
    pub tick_ms: u64,

    /// Write every rendered frame here as a PPM image.
    #[arg(long)]
    pub snapshot_dir: Option<PathBuf>,

    /// Stop after this many ticks.
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Play the bundled sample poems instead of reading `--content-root`.
    #[arg(long)]
    pub demo: bool,
}
