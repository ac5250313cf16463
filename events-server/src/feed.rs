use events_parser::RawFeedEntry;
use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Clone, Copy)]
enum Field {
    Id,
    Title,
    Link,
    Summary,
}

/// Decodes an RSS document into raw feed entries, preserving document order.
/// Only the `guid`, `title`, `link`, and `description` of each `item` are
/// kept; channel-level elements and anything else are ignored.
pub fn parse_feed(xml: &str) -> Result<Vec<RawFeedEntry>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut entries = Vec::new();
    let mut current: Option<RawFeedEntry> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                field = match start.name().as_ref() {
                    b"item" => {
                        current = Some(RawFeedEntry::default());
                        None
                    }
                    b"guid" => Some(Field::Id),
                    b"title" => Some(Field::Title),
                    b"link" => Some(Field::Link),
                    b"description" => Some(Field::Summary),
                    _ => None,
                };
            }
            Event::End(end) => {
                if end.name().as_ref() == b"item" {
                    entries.extend(current.take());
                }
                field = None;
            }
            Event::Text(text) => {
                let value = text.unescape()?.into_owned();
                assign(current.as_mut(), field, value);
            }
            Event::CData(cdata) => {
                let value = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                assign(current.as_mut(), field, value);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

fn assign(entry: Option<&mut RawFeedEntry>, field: Option<Field>, value: String) {
    let (Some(entry), Some(field)) = (entry, field) else {
        return;
    };

    match field {
        Field::Id => entry.id = Some(value),
        Field::Title => entry.title = Some(value),
        Field::Link => entry.link = Some(value),
        Field::Summary => entry.summary = Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Campus Events</title>
    <link>https://webapps.example.edu/eventscalendar/</link>
    <item>
      <title>Test RSS Event</title>
      <link>https://webapps.example.edu/event/123</link>
      <guid isPermaLink="false">rss-id-123</guid>
      <description>&lt;strong&gt;November 15, 2025 | 2:00 PM - 4:00 PM | Library&lt;/strong&gt;&lt;p&gt;Event description&lt;/p&gt;</description>
    </item>
    <item>
      <title>Another RSS Event</title>
      <link>https://webapps.example.edu/event/456</link>
      <guid isPermaLink="false">rss-id-456</guid>
      <description><![CDATA[<strong>November 20, 2025 | 10:00 AM - 12:00 PM | Humanities</strong><p>Another event</p>]]></description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn decodes_items_in_document_order() {
        let entries = parse_feed(SAMPLE_FEED).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id.as_deref(), Some("rss-id-123"));
        assert_eq!(entries[0].title.as_deref(), Some("Test RSS Event"));
        assert_eq!(
            entries[0].link.as_deref(),
            Some("https://webapps.example.edu/event/123")
        );
        assert_eq!(
            entries[0].summary.as_deref(),
            Some(
                "<strong>November 15, 2025 | 2:00 PM - 4:00 PM | Library</strong>\
                 <p>Event description</p>"
            )
        );
        assert_eq!(entries[1].id.as_deref(), Some("rss-id-456"));
    }

    #[test]
    fn cdata_descriptions_pass_through() {
        let entries = parse_feed(SAMPLE_FEED).unwrap();

        assert_eq!(
            entries[1].summary.as_deref(),
            Some(
                "<strong>November 20, 2025 | 10:00 AM - 12:00 PM | Humanities</strong>\
                 <p>Another event</p>"
            )
        );
    }

    #[test]
    fn missing_item_fields_stay_absent() {
        let entries = parse_feed(
            "<rss><channel><item><title>Bare</title></item></channel></rss>",
        )
        .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title.as_deref(), Some("Bare"));
        assert_eq!(entries[0].id, None);
        assert_eq!(entries[0].link, None);
        assert_eq!(entries[0].summary, None);
    }

    #[test]
    fn empty_channel_yields_no_entries() {
        let entries = parse_feed("<rss><channel></channel></rss>").unwrap();
        assert!(entries.is_empty());
    }
}
