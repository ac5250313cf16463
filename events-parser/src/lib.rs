mod locations;
mod markup;
mod parser;
mod structs;
mod timerange;

pub use locations::resolve_coordinate;
pub use markup::clean_fragment;
pub use parser::{parse_entry, ParseError, DESCRIPTION_UNAVAILABLE};
pub use structs::{Coordinate, EventRecord, RawFeedEntry};
pub use timerange::parse_time_range;
