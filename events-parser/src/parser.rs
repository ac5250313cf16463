use thiserror::Error;

use crate::locations::resolve_coordinate;
use crate::markup::clean_fragment;
use crate::structs::{EventRecord, RawFeedEntry};
use crate::timerange::parse_time_range;

/// Description text used when the summary carries no description segment.
pub const DESCRIPTION_UNAVAILABLE: &str = "Unavailable";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The summary is absent or no `>`-split fragment of it matched the
    /// metadata heuristic, so the entry has no date or location to extract.
    /// Whether such an entry is dropped or passed through is the caller's
    /// policy decision.
    #[error("summary contains no metadata fragment")]
    MissingMetadata,
}

/// Transforms one feed entry into a normalized [`EventRecord`].
///
/// The summary is split on `>` into fragments. A non-first fragment ending in
/// `"strong"` is the pipe-delimited metadata fragment (date, optional time
/// range, location); every other fragment is description text, cleaned
/// independently and concatenated in order. This mirrors the literal
/// formatting of the upstream feed, which is the actual input contract, and
/// deliberately stops short of real markup parsing.
pub fn parse_entry(entry: &RawFeedEntry) -> Result<EventRecord, ParseError> {
    let title = entry.title.as_ref().map(|title| title.replace("amp;", "&"));

    // Titles like "Library hours: 10AM-6PM" carry their time range in the
    // title itself; a time found in the metadata fragment overrides it.
    let mut time = title.as_deref().and_then(time_from_title);
    let (mut start_time, mut end_time) = parse_time_range(time.as_deref());

    let summary = entry
        .summary
        .as_deref()
        .ok_or(ParseError::MissingMetadata)?;

    let mut date = None;
    let mut location = None;
    let mut coordinate = None;
    let mut description = String::new();

    for (idx, fragment) in summary.split('>').enumerate() {
        if idx > 0 && fragment.ends_with("strong") {
            let parts = fragment.split('|').collect::<Vec<_>>();

            date = Some(parts[0].trim().to_string());

            if parts.len() > 2 {
                let text = parts[1].trim().replace("&#8211;", " -");
                (start_time, end_time) = parse_time_range(Some(&text));
                time = Some(text);
            }

            let raw_location = parts[parts.len() - 1];
            let raw_location = raw_location
                .strip_suffix("</strong")
                .unwrap_or(raw_location)
                .trim();

            coordinate = resolve_coordinate(raw_location);
            location = Some(raw_location.replace("&amp;", "&"));
        } else {
            description.push_str(&clean_fragment(fragment));
        }
    }

    if date.is_none() {
        return Err(ParseError::MissingMetadata);
    }

    let description = description.trim().replace("amp;", "&");
    let description = if description.is_empty() {
        DESCRIPTION_UNAVAILABLE.to_string()
    } else {
        description
    };

    Ok(EventRecord {
        id: entry.id.clone(),
        title,
        link: entry.link.clone(),
        date,
        time,
        start_time,
        end_time,
        location,
        coordinate,
        description,
    })
}

/// Derives a splittable display time from a `"Library hours: ..."` title.
///
/// The compact remainder (for example `10AM-6PM` or `10-6`) is uppercased and
/// rewritten in one pass: a space goes in front of every `A` and `P`, and
/// every `-` gains surrounding spaces, producing tokens the time-range parser
/// can split.
fn time_from_title(title: &str) -> Option<String> {
    if !title.to_lowercase().starts_with("library hours") {
        return None;
    }

    let rest = title.strip_prefix("Library hours: ").unwrap_or(title);

    let mut time = String::with_capacity(rest.len());
    for c in rest.to_uppercase().chars() {
        match c {
            'A' | 'P' => {
                time.push(' ');
                time.push(c);
            }
            '-' => time.push_str(" - "),
            _ => time.push(c),
        }
    }

    Some(time)
}
