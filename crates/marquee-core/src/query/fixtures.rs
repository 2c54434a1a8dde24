//! Sample directory shared by the query tests.

use jiff::Timestamp;

use crate::{
    clock::FixedClock,
    models::{Artist, Show, Venue},
    store::MemoryStore,
};

pub(crate) fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp")
}

/// 2030-01-01, between the 2019 shows and the 2035 shows.
pub(crate) fn clock() -> FixedClock {
    FixedClock::new(ts("2030-01-01T00:00:00Z"))
}

pub(crate) fn venue(id: u64, name: &str, city: &str, state: &str) -> Venue {
    Venue {
        id,
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: None,
        phone: None,
        image_link: Some(format!("https://img.example/venue/{id}.jpg")),
        facebook_link: None,
        website_link: None,
        genres: Vec::new(),
        seeking_talent: false,
        seeking_description: None,
    }
}

pub(crate) fn artist(id: u64, name: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: None,
        genres: Vec::new(),
        image_link: Some(format!("https://img.example/artist/{id}.jpg")),
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}

pub(crate) fn show(id: u64, artist_id: u64, venue_id: u64, start: &str) -> Show {
    Show {
        id,
        artist_id,
        venue_id,
        start_time: ts(start),
    }
}

/// Three venues, three artists, five shows (two past, three upcoming).
pub(crate) fn sample_store() -> MemoryStore {
    let mut hop = venue(1, "The Musical Hop", "San Francisco", "CA");
    hop.genres = vec!["Jazz".into(), "Reggae".into(), "Swing".into()];
    hop.address = Some("1015 Folsom Street".into());
    hop.website_link = Some("https://www.themusicalhop.com".into());
    hop.seeking_talent = true;
    hop.seeking_description = Some("We are on the lookout for a local artist.".into());

    MemoryStore::from_parts(
        vec![
            hop,
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
        ],
        vec![
            artist(4, "Guns N Petals"),
            artist(5, "Matt Quevado"),
            artist(6, "The Wild Sax Band"),
        ],
        vec![
            show(1, 4, 1, "2019-05-21T21:30:00Z"),
            show(2, 5, 3, "2019-06-15T23:00:00Z"),
            show(3, 6, 3, "2035-04-01T20:00:00Z"),
            show(4, 6, 3, "2035-04-08T20:00:00Z"),
            show(5, 6, 3, "2035-04-15T20:00:00Z"),
        ],
    )
}
