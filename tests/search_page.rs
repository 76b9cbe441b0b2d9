use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use tv_series_info::{
    DEFAULT_API_BASE, Locator, MetadataRetrievalError, Page, PageConfig, Phase, RenderOptions,
    Show, Tab, Transport,
};

const STRANGER_THINGS: &str = include_str!("fixtures/stranger_things.json");

type Response = Result<Show, MetadataRetrievalError>;

/// Serves scripted responses, each held back until the test releases it
#[derive(Clone, Default)]
struct GatedTransport {
    gates: Arc<Mutex<HashMap<String, Receiver<Response>>>>,
}

impl GatedTransport {
    fn gate(&self, query: &str) -> Sender<Response> {
        let (sender, receiver) = mpsc::channel();
        let locator = Locator::for_query(DEFAULT_API_BASE, query);
        self.gates
            .lock()
            .unwrap()
            .insert(locator.as_str().to_string(), receiver);
        sender
    }
}

impl Transport for GatedTransport {
    type Payload = Show;

    fn fetch(&self, locator: &Locator) -> Response {
        let gate = self.gates.lock().unwrap().remove(locator.as_str());
        match gate {
            Some(receiver) => receiver
                .recv()
                .unwrap_or_else(|_| Err(MetadataRetrievalError::RequestError("gate dropped".into()))),
            None => Err(MetadataRetrievalError::SeriesNotFound(
                locator.query().unwrap_or_default(),
            )),
        }
    }
}

fn stranger_things() -> Show {
    serde_json::from_str(STRANGER_THINGS).unwrap()
}

fn show_named(name: &str) -> Show {
    serde_json::from_value(serde_json::json!({ "id": 42, "name": name })).unwrap()
}

fn config(tab: Tab) -> PageConfig {
    PageConfig {
        tab,
        ..PageConfig::default()
    }
}

#[test]
fn initial_load_renders_title_and_episodes() {
    let transport = GatedTransport::default();
    let gate = transport.gate("stranger things");
    let mut page = Page::open(transport, config(Tab::Episodes));

    assert_eq!(page.phase(), Phase::Loading);
    assert!(page.render(&RenderOptions::default()).contains('░'));

    gate.send(Ok(stranger_things())).unwrap();
    let state = page.wait();
    assert!(!state.is_loading());
    assert!(state.error().is_none());

    let rendered = page.render(&RenderOptions::default());
    assert!(rendered.contains("=== Stranger Things ==="));
    assert!(rendered.contains("S1E1: Chapter One: The Vanishing of Will Byers"));
    assert!(rendered.contains("S1E2: "));
    assert!(rendered.contains("S2E1: "));
    assert!(rendered.contains("S2E2: "));
}

#[test]
fn superseded_search_never_becomes_visible() {
    let transport = GatedTransport::default();
    let initial = transport.gate("stranger things");
    let newer = transport.gate("dark");
    let mut page = Page::open(transport, PageConfig::default());

    page.submit("dark");
    newer.send(Ok(show_named("Dark"))).unwrap();
    page.wait();
    assert_eq!(page.state().payload().unwrap().name, "Dark");

    initial.send(Ok(stranger_things())).unwrap();
    let deadline = Instant::now() + Duration::from_secs(5);
    while page.discarded_responses() == 0 {
        assert!(Instant::now() < deadline, "stale response never arrived");
        page.poll();
        thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(page.phase(), Phase::Success);
    assert_eq!(page.state().payload().unwrap().name, "Dark");
    assert!(!page.render(&RenderOptions::default()).contains("Stranger Things"));
}

#[test]
fn empty_query_renders_error_panel_only() {
    let transport = GatedTransport::default();
    let initial = transport.gate("stranger things");
    let mut page = Page::open(transport, config(Tab::All));
    initial.send(Ok(stranger_things())).unwrap();
    page.wait();

    page.submit("");
    assert!(page.locator().as_str().contains("?q=&embed[]=cast"));
    let state = page.wait();
    assert!(state.payload().is_none());
    assert!(!state.error().unwrap().is_empty());

    let rendered = page.render(&RenderOptions::default());
    assert!(rendered.contains("!!! Error !!!"));
    assert!(!rendered.contains("--- Cast ---"));
    assert!(!rendered.contains("Stranger Things"));
}

#[test]
fn missing_rating_renders_fallback() {
    let transport = GatedTransport::default();
    let gate = transport.gate("stranger things");
    let mut page = Page::open(transport, PageConfig::default());

    let mut show = stranger_things();
    show.rating = None;
    gate.send(Ok(show)).unwrap();
    page.wait();

    assert!(
        page.render(&RenderOptions::default())
            .contains("Rating:      N/A\n")
    );
}

#[test]
fn failed_request_clears_previous_payload() {
    let transport = GatedTransport::default();
    let initial = transport.gate("stranger things");
    let failing = transport.gate("broken");
    let mut page = Page::open(transport, PageConfig::default());
    initial.send(Ok(stranger_things())).unwrap();
    page.wait();

    page.submit("broken");
    assert!(page.state().payload().is_none());
    failing
        .send(Err(MetadataRetrievalError::HttpStatus {
            status: 503,
            reason: "Service Unavailable".to_string(),
        }))
        .unwrap();

    assert_eq!(page.wait().error(), Some("HTTP 503 Service Unavailable"));
}
