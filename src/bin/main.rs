use std::{
    thread,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

use anyhow::{Result, bail};
use clap::Parser;
use kiosk_core::{
    app::{SlideController, SlideState, TickResult},
    content::{ContentSource, build_playlist, playlist_ids, sample_source},
    report::LogReporter,
    settings::KioskConfig,
};
use log::{info, warn};
use presto_frame::{SlideRenderer, font_metrics};

use cli::Args;
use fs_source::FsContentSource;
use log_backlight::LogBacklight;
use snapshots::SnapshotWriter;
use stdin_touch::StdinTouch;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/config_file.rs"]
mod config_file;
#[path = "main/fs_source.rs"]
mod fs_source;
#[path = "main/log_backlight.rs"]
mod log_backlight;
#[path = "main/snapshots.rs"]
mod snapshots;
#[path = "main/stdin_touch.rs"]
mod stdin_touch;

const IDLE_TICK_MS: u64 = 1_000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = config_file::load(&args)?;

    if args.demo {
        info!("kiosk: demo mode with bundled sample poems");
        return run(sample_source(), &config, &args);
    }

    if !args.content_root.is_dir() {
        bail!(
            "content root {} is not a directory",
            args.content_root.display()
        );
    }
    info!("kiosk: content root {}", args.content_root.display());
    run(FsContentSource::new(&args.content_root), &config, &args)
}

fn run<CS: ContentSource>(mut source: CS, config: &KioskConfig, args: &Args) -> Result<()> {
    let seed = config.shuffle_seed.unwrap_or_else(clock_seed);
    let mut reporter = LogReporter::new();
    let playlist = build_playlist(
        &mut source,
        config.start_poem_id.as_deref(),
        seed,
        &mut reporter,
    );
    info!("kiosk: playlist order={:?}", playlist_ids(&playlist));

    let timing = config.timing();
    info!(
        "kiosk: dwell_ms={} fade_in_ms={} fade_out_ms={} backlight_max={}% tick_ms={}",
        timing.dwell_ms,
        timing.fade_in_ms,
        timing.fade_out_ms,
        config.backlight_max_percent,
        args.tick_ms
    );

    let mut renderer = SlideRenderer::new(config.layout());
    let mut snapshots = args
        .snapshot_dir
        .as_deref()
        .map(SnapshotWriter::create)
        .transpose()?;

    let mut app = SlideController::new(
        playlist,
        source,
        StdinTouch::spawn(),
        LogBacklight::new(),
        font_metrics(),
        reporter,
        config,
    );

    let tick = Duration::from_millis(args.tick_ms.max(1));
    let start = Instant::now();
    let mut ticks: u64 = 0;

    loop {
        let now_ms = start.elapsed().as_millis() as u64;
        if app.tick(now_ms) == TickResult::RenderRequested {
            app.render_to(&mut renderer).unwrap_or_else(|never| match never {});

            if let Some(writer) = snapshots.as_mut()
                && let Err(err) = writer.write(renderer.frame())
            {
                warn!("snapshot: {:#}; disabling snapshots", err);
                snapshots = None;
            }
        }

        ticks = ticks.saturating_add(1);
        if args.max_ticks.is_some_and(|max| ticks >= max) {
            break;
        }

        // Nothing moves in IDLE_ERROR; only the tick budget ends the loop.
        if app.state() == SlideState::IdleError {
            thread::sleep(Duration::from_millis(IDLE_TICK_MS).max(tick));
        } else {
            thread::sleep(tick);
        }
    }

    info!(
        "kiosk: stopped after {} ticks (frames={} state={})",
        ticks,
        renderer.frames_drawn(),
        app.state().as_str()
    );
    Ok(())
}

/// Seed for unseeded sessions, logged so a run can be replayed.
fn clock_seed() -> u64 {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    info!("kiosk: no shuffle_seed configured; using seed={}", seed);
    seed
}
