use serde::Serialize;

/// Artist credited when a filename has no `Artist - Title` separator.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One manifest entry.
///
/// Field order matters: it is the order the front-end expects in the
/// generated file, so the struct serializes as declared.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub artist: String,
    pub cover: String,
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
    pub color: String,
    pub lyrics: Vec<String>,
}
