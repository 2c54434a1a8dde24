//! Display implementations for records and detail views.
//!
//! Output is markdown for the terminal renderer. Records print their stored
//! fields; detail views add the partitioned show lists.

use std::fmt;

use super::datetime::{DateStyle, LocalDateTime, ShowTime};
use crate::models::{Artist, ArtistDetail, ArtistShow, Show, Venue, VenueDetail, VenueShow};

fn write_optional(f: &mut fmt::Formatter<'_>, label: &str, value: Option<&str>) -> fmt::Result {
    match value {
        Some(value) if !value.is_empty() => writeln!(f, "- **{label}**: {value}"),
        _ => Ok(()),
    }
}

fn write_genres(f: &mut fmt::Formatter<'_>, genres: &[String]) -> fmt::Result {
    if genres.is_empty() {
        Ok(())
    } else {
        writeln!(f, "- **Genres**: {}", genres.join(", "))
    }
}

fn write_seeking(
    f: &mut fmt::Formatter<'_>,
    seeking: bool,
    what: &str,
    description: Option<&str>,
) -> fmt::Result {
    if !seeking {
        return Ok(());
    }
    writeln!(f)?;
    match description {
        Some(text) if !text.is_empty() => writeln!(f, "> Seeking {what}: {text}"),
        _ => writeln!(f, "> Seeking {what}"),
    }
}

/// Writes a "## Upcoming Shows" style section.
fn write_show_section<T>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    entries: &[T],
    line: impl Fn(&T) -> String,
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "## {title} ({})", entries.len())?;
    writeln!(f)?;
    if entries.is_empty() {
        writeln!(f, "None.")?;
    }
    for entry in entries {
        writeln!(f, "- {}", line(entry))?;
    }
    Ok(())
}

fn venue_show_line(show: &VenueShow) -> String {
    format!(
        "**{}** (artist {}), {}",
        show.artist_name,
        show.artist_id,
        ShowTime::render_canonical(&show.start_time, DateStyle::Full)
    )
}

fn artist_show_line(show: &ArtistShow) -> String {
    format!(
        "**{}** (venue {}), {}",
        show.venue_name,
        show.venue_id,
        ShowTime::render_canonical(&show.start_time, DateStyle::Full)
    )
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- **Location**: {}, {}", self.city, self.state)?;
        write_optional(f, "Address", self.address.as_deref())?;
        write_optional(f, "Phone", self.phone.as_deref())?;
        write_genres(f, &self.genres)?;
        write_optional(f, "Website", self.website_link.as_deref())?;
        write_optional(f, "Facebook", self.facebook_link.as_deref())?;
        write_optional(f, "Image", self.image_link.as_deref())?;
        write_seeking(
            f,
            self.seeking_talent,
            "talent",
            self.seeking_description.as_deref(),
        )
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- **Location**: {}, {}", self.city, self.state)?;
        write_optional(f, "Phone", self.phone.as_deref())?;
        write_genres(f, &self.genres)?;
        write_optional(f, "Website", self.website_link.as_deref())?;
        write_optional(f, "Facebook", self.facebook_link.as_deref())?;
        write_optional(f, "Image", self.image_link.as_deref())?;
        write_seeking(
            f,
            self.seeking_venue,
            "venues",
            self.seeking_description.as_deref(),
        )
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Show {}: artist {} at venue {}, {}",
            self.id,
            self.artist_id,
            self.venue_id,
            LocalDateTime(&self.start_time)
        )
    }
}

impl fmt::Display for VenueDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- **Location**: {}, {}", self.city, self.state)?;
        write_optional(f, "Address", self.address.as_deref())?;
        write_optional(f, "Phone", self.phone.as_deref())?;
        write_genres(f, &self.genres)?;
        write_optional(f, "Website", self.website.as_deref())?;
        write_optional(f, "Facebook", self.facebook_link.as_deref())?;
        write_seeking(
            f,
            self.seeking_talent,
            "talent",
            self.seeking_description.as_deref(),
        )?;

        write_show_section(f, "Upcoming Shows", &self.upcoming_shows, venue_show_line)?;
        write_show_section(f, "Past Shows", &self.past_shows, venue_show_line)
    }
}

impl fmt::Display for ArtistDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- **Location**: {}, {}", self.city, self.state)?;
        write_optional(f, "Phone", self.phone.as_deref())?;
        write_genres(f, &self.genres)?;
        write_optional(f, "Website", self.website.as_deref())?;
        write_optional(f, "Facebook", self.facebook_link.as_deref())?;
        write_seeking(
            f,
            self.seeking_venue,
            "venues",
            self.seeking_description.as_deref(),
        )?;

        write_show_section(f, "Upcoming Shows", &self.upcoming_shows, artist_show_line)?;
        write_show_section(f, "Past Shows", &self.past_shows, artist_show_line)
    }
}
