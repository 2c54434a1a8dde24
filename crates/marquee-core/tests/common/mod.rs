#![allow(dead_code)]

use marquee_core::{
    clock::FixedClock,
    params::{ArtistFields, CreateShow, VenueFields},
    Directory, DirectoryBuilder,
};
use tempfile::TempDir;

/// 2030-01-01, between the 2019 sample shows and the 2035 ones.
pub const NOW: &str = "2030-01-01T00:00:00Z";

/// Helper function to create a test directory with a pinned clock
pub async fn create_test_directory() -> (TempDir, Directory) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let directory = DirectoryBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(FixedClock::new(NOW.parse().expect("valid timestamp")))
        .build()
        .await
        .expect("Failed to create directory");
    (temp_dir, directory)
}

pub fn venue_fields(name: &str, city: &str, state: &str) -> VenueFields {
    VenueFields {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        ..Default::default()
    }
}

pub fn artist_fields(name: &str) -> ArtistFields {
    ArtistFields {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        ..Default::default()
    }
}

/// IDs of the records created by [`seed_sample`].
pub struct Sample {
    pub musical_hop: u64,
    pub dueling_pianos: u64,
    pub park_square: u64,
    pub guns_n_petals: u64,
    pub matt_quevado: u64,
    pub wild_sax_band: u64,
}

/// Three venues, three artists and five shows, two of them in the past.
pub async fn seed_sample(directory: &Directory) -> Sample {
    let mut hop = venue_fields("The Musical Hop", "San Francisco", "CA");
    hop.genres = vec!["Jazz".into(), "Reggae".into(), "Swing".into()];
    hop.address = Some("1015 Folsom Street".into());
    hop.website_link = Some("https://www.themusicalhop.com".into());
    hop.seeking_talent = true;

    let musical_hop = directory.create_venue(&hop).await.unwrap().id;
    let dueling_pianos = directory
        .create_venue(&venue_fields("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap()
        .id;
    let park_square = directory
        .create_venue(&venue_fields(
            "Park Square Live Music & Coffee",
            "San Francisco",
            "CA",
        ))
        .await
        .unwrap()
        .id;

    let guns_n_petals = directory
        .create_artist(&artist_fields("Guns N Petals"))
        .await
        .unwrap()
        .id;
    let matt_quevado = directory
        .create_artist(&artist_fields("Matt Quevado"))
        .await
        .unwrap()
        .id;
    let wild_sax_band = directory
        .create_artist(&artist_fields("The Wild Sax Band"))
        .await
        .unwrap()
        .id;

    for (artist_id, venue_id, start_time) in [
        (guns_n_petals, musical_hop, "2019-05-21T21:30:00Z"),
        (matt_quevado, park_square, "2019-06-15T23:00:00Z"),
        (wild_sax_band, park_square, "2035-04-01T20:00:00Z"),
        (wild_sax_band, park_square, "2035-04-08T20:00:00Z"),
        (wild_sax_band, park_square, "2035-04-15T20:00:00Z"),
    ] {
        directory
            .create_show(&CreateShow {
                artist_id,
                venue_id,
                start_time: start_time.to_string(),
            })
            .await
            .unwrap();
    }

    Sample {
        musical_hop,
        dueling_pianos,
        park_square,
        guns_n_petals,
        matt_quevado,
        wild_sax_band,
    }
}
