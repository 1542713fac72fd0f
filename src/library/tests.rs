use super::model::UNKNOWN_ARTIST;
use super::parse::artist_and_title;

#[test]
fn artist_and_title_splits_on_first_separator_only() {
    assert_eq!(
        artist_and_title("Daft Punk - One More Time"),
        ("Daft Punk".to_string(), "One More Time".to_string())
    );
    assert_eq!(
        artist_and_title("Orbital - Halcyon - On and On"),
        ("Orbital".to_string(), "Halcyon - On and On".to_string())
    );
}

#[test]
fn artist_and_title_trims_both_segments() {
    assert_eq!(
        artist_and_title("  Daft Punk   -   One More Time  "),
        ("Daft Punk".to_string(), "One More Time".to_string())
    );
}

#[test]
fn artist_and_title_without_separator_credits_unknown_artist() {
    assert_eq!(
        artist_and_title("One More Time"),
        (UNKNOWN_ARTIST.to_string(), "One More Time".to_string())
    );
    // A bare hyphen is not the ` - ` separator.
    assert_eq!(
        artist_and_title("AC-DC"),
        (UNKNOWN_ARTIST.to_string(), "AC-DC".to_string())
    );
}

#[test]
fn artist_and_title_with_blank_artist_segment_credits_unknown_artist() {
    assert_eq!(
        artist_and_title(" - One More Time"),
        (UNKNOWN_ARTIST.to_string(), "One More Time".to_string())
    );
}

#[test]
fn artist_and_title_of_empty_stem_is_empty_title() {
    assert_eq!(
        artist_and_title(""),
        (UNKNOWN_ARTIST.to_string(), String::new())
    );
}
