use chrono::NaiveTime;

#[cfg(feature = "serde")]
use chrono::Timelike;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

/// One entry as delivered by the upstream syndication feed. The upstream
/// enforces nothing, so every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawFeedEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
}

/// A `(latitude, longitude)` pair, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate(pub f64, pub f64);

/// The normalized record produced from one [`RawFeedEntry`]. Constructed once
/// by [`parse_entry`](crate::parse_entry) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EventRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub date: Option<String>,
    /// Free-form display text for the time range, as extracted from the
    /// metadata fragment or derived from the title.
    pub time: Option<String>,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_naive_time"))]
    pub start_time: Option<NaiveTime>,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_naive_time"))]
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub coordinate: Option<Coordinate>,
    pub description: String,
}

#[cfg(feature = "serde")]
fn serialize_naive_time<S: Serializer>(
    time: &Option<NaiveTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match time {
        Some(time) => {
            let formatted_time = format!("{:02}:{:02}", time.hour(), time.minute());
            serializer.serialize_str(&formatted_time)
        }
        None => serializer.serialize_none(),
    }
}
