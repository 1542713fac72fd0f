use super::{render, write_manifest};
use crate::library::Track;
use std::fs;
use tempfile::tempdir;

fn sample_track() -> Track {
    Track {
        id: 1,
        category: "My Music".to_string(),
        title: "One More Time".to_string(),
        artist: "Daft Punk".to_string(),
        cover: "/music/Daft Punk - One More Time.jpg".to_string(),
        audio_url: "/music/Daft Punk - One More Time.mp3".to_string(),
        color: "from-purple-900 to-black".to_string(),
        lyrics: Vec::new(),
    }
}

#[test]
fn render_empty_list_declares_empty_array() {
    assert_eq!(render(&[], "songs").unwrap(), "export const songs = [];\n");
}

#[test]
fn render_uses_export_name() {
    assert_eq!(render(&[], "tracks").unwrap(), "export const tracks = [];\n");
}

#[test]
fn render_emits_two_space_indented_records_in_field_order() {
    let rendered = render(&[sample_track()], "songs").unwrap();
    assert_eq!(
        rendered,
        r#"export const songs = [
  {
    "id": 1,
    "category": "My Music",
    "title": "One More Time",
    "artist": "Daft Punk",
    "cover": "/music/Daft Punk - One More Time.jpg",
    "audioUrl": "/music/Daft Punk - One More Time.mp3",
    "color": "from-purple-900 to-black",
    "lyrics": []
  }
];
"#
    );
}

#[test]
fn write_manifest_overwrites_previous_content() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("database.js");
    fs::write(&out, "stale content that should disappear").unwrap();

    write_manifest(&out, &[sample_track()], "songs").unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("export const songs = ["));
    assert!(!written.contains("stale content"));
}
