use std::{collections::HashMap, env, io, net::SocketAddr, process, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use chrono::{NaiveTime, Timelike};
use log::{error, warn};
use serde::Serialize;
use tokio::{net::TcpListener, signal, sync::RwLock, task, time};

use events_parser::{parse_entry, Coordinate, EventRecord, RawFeedEntry};

mod feed;

const EVENTS_SERVER_ADDR: &str = "EVENTS_SERVER_ADDR";
const EVENTS_FEED_URL: &str = "EVENTS_FEED_URL";

const DEFAULT_FEED_URL: &str = "https://webapps.macalester.edu/eventscalendar/events/rss/";
const CACHE_TTL_SECS: u64 = 60 * 60;

struct AppState {
    feed_url: String,
    cache: RwLock<HashMap<String, Arc<Vec<EventRecord>>>>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    setup_logging();

    let Ok(addr) = env::var(EVENTS_SERVER_ADDR).map_or_else(
        |_| Ok(SocketAddr::from(([127, 0, 0, 1], 8080))),
        |value| value.parse(),
    ) else {
        eprintln!("Failed to parse `{EVENTS_SERVER_ADDR}` environment variable");
        process::exit(1);
    };

    let feed_url = env::var(EVENTS_FEED_URL).unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());

    let state = Arc::new(AppState {
        feed_url,
        cache: RwLock::new(HashMap::new()),
    });

    let router = Router::new()
        .route("/events", get(handle_events))
        .fallback(|| async { Redirect::permanent("/events") })
        .with_state(state);

    let listener = TcpListener::bind(addr).await?;
    eprintln!("Listening at http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
        })
        .await
}

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "events_server=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

/// One record in the wire shape the JSON consumers expect.
#[derive(Serialize)]
struct ApiEvent<'a> {
    id: Option<&'a str>,
    title: Option<&'a str>,
    location: Option<&'a str>,
    date: Option<&'a str>,
    time: Option<&'a str>,
    starttime: Option<String>,
    endtime: Option<String>,
    link: Option<&'a str>,
    coord: Option<Coordinate>,
    description: &'a str,
}

fn clock(time: &NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

impl<'a> From<&'a EventRecord> for ApiEvent<'a> {
    fn from(record: &'a EventRecord) -> Self {
        Self {
            id: record.id.as_deref(),
            title: record.title.as_deref(),
            location: record.location.as_deref(),
            date: record.date.as_deref(),
            time: record.time.as_deref(),
            starttime: record.start_time.as_ref().map(clock),
            endtime: record.end_time.as_ref().map(clock),
            link: record.link.as_deref(),
            coord: record.coordinate,
            description: &record.description,
        }
    }
}

async fn handle_events(State(state): State<Arc<AppState>>) -> Response {
    let Some(events) = fetch_events(&state).await else {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch events feed").into_response();
    };

    // Feed order is oldest-polled first; consumers want most recent first.
    let payload = events.iter().rev().map(ApiEvent::from).collect::<Vec<_>>();

    Json(payload).into_response()
}

/// Parses a polled batch in feed order. Entries the parser rejects are
/// dropped with a warning; one malformed entry must not take down the batch.
fn parse_batch(entries: &[RawFeedEntry]) -> Vec<EventRecord> {
    let mut records = Vec::with_capacity(entries.len());

    for entry in entries {
        match parse_entry(entry) {
            Ok(record) => records.push(record),
            Err(err) => warn!("skipping entry {:?}: {err}", entry.id),
        }
    }

    records
}

async fn fetch_events(state: &Arc<AppState>) -> Option<Arc<Vec<EventRecord>>> {
    if let Some(events) = state.cache.read().await.get(&state.feed_url) {
        return Some(Arc::clone(events));
    }

    let body = reqwest::get(&state.feed_url).await.ok()?.text().await.ok()?;

    let entries = match feed::parse_feed(&body) {
        Ok(entries) => entries,
        Err(err) => {
            error!("failed to decode feed: {err}");
            return None;
        }
    };

    let records = Arc::new(parse_batch(&entries));

    state
        .cache
        .write()
        .await
        .insert(state.feed_url.clone(), Arc::clone(&records));

    let state = Arc::clone(state);
    task::spawn(async move {
        time::sleep(time::Duration::from_secs(CACHE_TTL_SECS)).await;
        state.cache.write().await.remove(&state.feed_url);
    });

    Some(records)
}
