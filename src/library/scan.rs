use std::path::Path;

use rand::seq::IndexedRandom;
use tracing::info;
use walkdir::WalkDir;

use crate::config::Settings;

use super::model::Track;
use super::parse::artist_and_title;

fn is_audio_file(name: &str, extension: &str) -> bool {
    let want = extension.trim().trim_start_matches('.').to_ascii_lowercase();
    if want.is_empty() {
        return false;
    }

    Path::new(name)
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.to_ascii_lowercase() == want)
        .unwrap_or(false)
}

/// Find the cover image co-located with an audio file, if any.
///
/// `.jpg` wins over `.jpeg` wins over `.png` when several exist.
fn find_cover(stem: &str, names: &[String]) -> Option<String> {
    ["jpg", "jpeg", "png"].into_iter().find_map(|ext| {
        let candidate = format!("{stem}.{ext}");
        names.iter().any(|n| *n == candidate).then_some(candidate)
    })
}

/// Scan `dir` (flat, non-recursive) and build the ordered track list.
///
/// Audio files are matched on `settings.scan.extension`; everything else in
/// the listing only serves as cover-image candidates. Tracks without a
/// matching cover get a random placeholder from the configured list.
pub fn scan(dir: &Path, settings: &Settings) -> Vec<Track> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect();

    // Filesystem enumeration order is platform-dependent; sort so ids stay
    // stable between runs.
    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));

    let mut rng = rand::rng();
    let mut tracks: Vec<Track> = Vec::new();

    for name in &names {
        if !is_audio_file(name, &settings.scan.extension) {
            continue;
        }

        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let (artist, title) = artist_and_title(stem);

        let cover = match find_cover(stem, &names) {
            Some(image) => {
                info!("Found cover for {title}: {image}");
                format!("{}{}", settings.manifest.url_prefix, image)
            }
            None => settings
                .manifest
                .placeholders
                .choose(&mut rng)
                .cloned()
                .unwrap_or_default(),
        };

        tracks.push(Track {
            id: tracks.len() as u32 + 1,
            category: settings.manifest.category.clone(),
            title,
            artist,
            cover,
            audio_url: format!("{}{}", settings.manifest.url_prefix, name),
            color: settings.manifest.color.clone(),
            lyrics: Vec::new(),
        });
    }

    tracks
}
