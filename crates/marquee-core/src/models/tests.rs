#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::models::{Record, RecordKind, SearchHit, SearchResult, Show, VenueDetail};
    use crate::query::fixtures::{artist, venue};

    fn ts(s: &str) -> Timestamp {
        s.parse().expect("valid timestamp")
    }

    #[test]
    fn test_record_kind_parses_case_insensitively() {
        assert_eq!("venue".parse::<RecordKind>(), Ok(RecordKind::Venue));
        assert_eq!("Artists".parse::<RecordKind>(), Ok(RecordKind::Artist));
        assert_eq!("VENUES".parse::<RecordKind>(), Ok(RecordKind::Venue));
        assert!("show".parse::<RecordKind>().is_err());
        assert_eq!(RecordKind::default(), RecordKind::Venue);
    }

    #[test]
    fn test_record_kind_display_and_serde() {
        assert_eq!(RecordKind::Artist.to_string(), "Artist");
        assert_eq!(RecordKind::Artist.as_str(), "artist");
        assert_eq!(
            serde_json::to_string(&RecordKind::Venue).unwrap(),
            "\"venue\""
        );
        let kind: RecordKind = serde_json::from_str("\"artist\"").unwrap();
        assert_eq!(kind, RecordKind::Artist);
    }

    #[test]
    fn test_record_trait_exposes_listing_fields() {
        let hop = venue(1, "The Musical Hop", "San Francisco", "CA");
        assert_eq!(<crate::models::Venue as Record>::KIND, RecordKind::Venue);
        assert_eq!(hop.id(), 1);
        assert_eq!(Record::name(&hop), "The Musical Hop");
        assert_eq!(
            Record::image_link(&hop),
            Some("https://img.example/venue/1.jpg")
        );

        let band = artist(6, "The Wild Sax Band");
        assert_eq!(<crate::models::Artist as Record>::KIND, RecordKind::Artist);
        assert_eq!(Record::name(&band), "The Wild Sax Band");
    }

    #[test]
    fn test_show_upcoming_boundary() {
        let now = ts("2030-01-01T00:00:00Z");
        let show = |start: &str| Show {
            id: 1,
            artist_id: 1,
            venue_id: 1,
            start_time: ts(start),
        };

        assert!(!show("2029-12-31T23:59:59Z").is_upcoming(now));
        assert!(show("2030-01-01T00:00:00Z").is_upcoming(now));
        assert!(show("2030-01-01T00:00:01Z").is_upcoming(now));
    }

    #[test]
    fn test_show_serializes_start_time_as_rfc3339() {
        let show = Show {
            id: 1,
            artist_id: 4,
            venue_id: 1,
            start_time: ts("2019-05-21T21:30:00Z"),
        };
        let json = serde_json::to_value(&show).unwrap();
        assert_eq!(json["start_time"], "2019-05-21T21:30:00Z");
    }

    #[test]
    fn test_venue_deserializes_with_missing_defaults() {
        let json = r#"{
            "id": 2,
            "name": "The Dueling Pianos Bar",
            "city": "New York",
            "state": "NY",
            "address": null,
            "phone": null,
            "image_link": null,
            "facebook_link": null,
            "website_link": null,
            "seeking_description": null
        }"#;
        let venue: crate::models::Venue = serde_json::from_str(json).unwrap();
        assert!(venue.genres.is_empty());
        assert!(!venue.seeking_talent);
    }

    #[test]
    fn test_search_result_count_tracks_data() {
        let result = SearchResult::new(vec![SearchHit {
            id: 1,
            name: "The Musical Hop".to_string(),
            num_upcoming_shows: 0,
        }]);
        assert_eq!(result.count, result.data.len());
        assert_eq!(SearchResult::default().count, 0);
    }

    #[test]
    fn test_venue_detail_serializes_website_key() {
        let detail = VenueDetail {
            id: 1,
            name: "The Musical Hop".to_string(),
            genres: vec!["Jazz".to_string()],
            address: None,
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            website: Some("https://www.themusicalhop.com".to_string()),
            facebook_link: None,
            seeking_talent: false,
            seeking_description: None,
            image_link: None,
            past_shows: vec![],
            upcoming_shows: vec![],
            past_shows_count: 0,
            upcoming_shows_count: 0,
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["website"], "https://www.themusicalhop.com");
        assert_eq!(json["upcoming_shows_count"], 0);
    }
}
