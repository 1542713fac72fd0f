use super::model::UNKNOWN_ARTIST;

/// Derive `(artist, title)` from a filename stem.
///
/// Stems are expected to follow the `Artist Name - Song Title` convention.
/// Only the first ` - ` splits, so titles may themselves contain ` - `.
/// Stems without a separator keep the whole stem as title and credit
/// [`UNKNOWN_ARTIST`], as does a blank artist segment.
pub fn artist_and_title(stem: &str) -> (String, String) {
    match stem.split_once(" - ") {
        Some((artist, title)) => {
            let artist = artist.trim();
            let artist = if artist.is_empty() {
                UNKNOWN_ARTIST
            } else {
                artist
            };
            (artist.to_string(), title.trim().to_string())
        }
        None => (UNKNOWN_ARTIST.to_string(), stem.trim().to_string()),
    }
}
