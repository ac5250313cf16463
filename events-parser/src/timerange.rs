use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::NaiveTime;

/// 12-hour clock shapes observed in the feed, tried in order.
const TIME_FORMATS: [&str; 4] = ["%I:%M %p", "%I %p", "%I:%M%p", "%I%p"];

fn parse_clock(part: &str) -> Option<NaiveTime> {
    TIME_FORMATS.iter().find_map(|format| {
        let mut parsed = Parsed::new();
        parse(&mut parsed, part, StrftimeItems::new(format)).ok()?;

        // The minute-less formats leave no minute behind, which is not
        // enough to build a `NaiveTime`; a bare hour means on the hour.
        // When the format did parse a minute this is a rejected no-op.
        let _ = parsed.set_minute(0);

        parsed.to_naive_time().ok()
    })
}

/// Splits a free-form `"start - end"` display string into a canonical
/// start/end pair.
///
/// Anything that does not split into exactly two parts on `-` is unparsable
/// and yields `(None, None)`. The two sides are resolved independently, so
/// one side may parse while the other does not.
pub fn parse_time_range(text: Option<&str>) -> (Option<NaiveTime>, Option<NaiveTime>) {
    let Some(text) = text else {
        return (None, None);
    };

    let parts = text.split('-').collect::<Vec<_>>();
    if parts.len() != 2 {
        return (None, None);
    }

    (parse_clock(parts[0].trim()), parse_clock(parts[1].trim()))
}
