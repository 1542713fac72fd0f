use std::env;
use std::error::Error;
use std::path::Path;

use tracing::{info, warn};

use crate::config::Settings;
use crate::library::scan;
use crate::manifest;

mod settings;


/// Outcome of one generator run.
#[derive(Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The manifest was written with this many tracks.
    Written { tracks: usize },
    /// The music directory was missing; nothing was written.
    MissingMusicDir,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut cfg = settings::load_settings();

    // A positional argument overrides the configured music directory.
    if let Some(dir) = env::args().nth(1) {
        cfg.scan.music_dir = dir;
    }

    build(&cfg)?;
    Ok(())
}

/// Run the whole scan-and-generate pipeline once.
///
/// A missing music directory is reported and skipped rather than treated as
/// an error; any pre-existing manifest is left as it was. Everything else
/// (unreadable listing, unwritable output) propagates to the caller.
pub fn build(cfg: &Settings) -> Result<BuildOutcome, Box<dyn Error>> {
    let dir = Path::new(&cfg.scan.music_dir);

    info!("Scanning {} for music", dir.display());
    if !dir.is_dir() {
        warn!(
            "Music directory {} does not exist; nothing written",
            dir.display()
        );
        return Ok(BuildOutcome::MissingMusicDir);
    }

    let tracks = scan(dir, cfg);
    manifest::write_manifest(
        Path::new(&cfg.manifest.output_path),
        &tracks,
        &cfg.manifest.export_name,
    )?;

    info!(
        "Wrote {} tracks to {}",
        tracks.len(),
        cfg.manifest.output_path
    );
    Ok(BuildOutcome::Written {
        tracks: tracks.len(),
    })
}
