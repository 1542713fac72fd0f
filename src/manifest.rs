use std::error::Error;
use std::fs;
use std::path::Path;

use crate::library::Track;

/// Render the track list as the single `export const` statement the
/// front-end imports.
pub fn render(tracks: &[Track], export_name: &str) -> serde_json::Result<String> {
    let body = serde_json::to_string_pretty(tracks)?;
    Ok(format!("export const {export_name} = {body};\n"))
}

/// Render `tracks` and overwrite `path` with the result.
pub fn write_manifest(
    path: &Path,
    tracks: &[Track],
    export_name: &str,
) -> Result<(), Box<dyn Error>> {
    let contents = render(tracks, export_name)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests;
