use serde::Deserialize;

/// Top-level generator settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/setlist/config.toml` or `~/.config/setlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SETLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
    pub manifest: ManifestSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan: ScanSettings::default(),
            manifest: ManifestSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Directory scanned for audio files and their cover images.
    ///
    /// Overridable per run with the first positional argument.
    pub music_dir: String,
    /// File extension to treat as audio (case-insensitive, without dot).
    pub extension: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            music_dir: "public/music".to_string(),
            extension: "mp3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ManifestSettings {
    /// URL prefix under which the web application serves `music_dir`.
    pub url_prefix: String,
    /// Where the generated manifest file is written.
    pub output_path: String,
    /// Name of the constant the manifest exports.
    pub export_name: String,
    /// Category stamped on every track.
    pub category: String,
    /// Background gradient classes stamped on every track.
    pub color: String,
    /// Fallback cover URLs for tracks without a matching image,
    /// picked at random per track.
    pub placeholders: Vec<String>,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            url_prefix: "/music/".to_string(),
            output_path: "src/database.js".to_string(),
            export_name: "songs".to_string(),
            category: "My Music".to_string(),
            color: "from-purple-900 to-black".to_string(),
            placeholders: vec![
                "https://images.unsplash.com/photo-1614613535308-eb5fbd3d2c17?q=80&w=1000"
                    .to_string(),
                "https://images.unsplash.com/photo-1493225255756-d9584f8606e9?q=80&w=1000"
                    .to_string(),
                "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?q=80&w=1000"
                    .to_string(),
                "https://images.unsplash.com/photo-1514525253440-b393452e8d26?q=80&w=1000"
                    .to_string(),
            ],
        }
    }
}
