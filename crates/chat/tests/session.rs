// File: crates/chat/tests/session.rs
// Purpose: Chat turn behavior against a recording renderer.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chart_core::RenderError;
use datachat::session::{FAILURE_REPLY, NO_DATA_REPLY};
use datachat::{Author, ChartHandle, ChatSession, Renderer, TurnOutcome};
use extract_core::{ChartKind, ChartSpec};

type Log = Rc<RefCell<Vec<String>>>;

struct Recording {
    log: Log,
    fail: bool,
    next_id: usize,
}

struct Handle {
    id: usize,
    log: Log,
}

impl ChartHandle for Handle {
    fn resize(&mut self, width: i32, height: i32) -> Result<(), RenderError> {
        self.log.borrow_mut().push(format!("resize {} {width}x{height}", self.id));
        Ok(())
    }
    fn destroy(self) {
        self.log.borrow_mut().push(format!("destroy {}", self.id));
    }
}

impl Renderer for Recording {
    type Handle = Handle;
    fn draw(&mut self, spec: &ChartSpec) -> Result<Handle, RenderError> {
        if self.fail {
            self.log.borrow_mut().push("draw failed".into());
            return Err(RenderError::Surface { width: 0, height: 0 });
        }
        self.next_id += 1;
        self.log.borrow_mut().push(format!("create {} {}", self.next_id, spec.kind()));
        Ok(Handle { id: self.next_id, log: self.log.clone() })
    }
}

fn session() -> (ChatSession<Recording>, Log) {
    let log: Log = Rc::default();
    let renderer = Recording { log: log.clone(), fail: false, next_id: 0 };
    (ChatSession::with_delay(renderer, Duration::from_millis(900)), log)
}

#[tokio::test(start_paused = true)]
async fn blank_input_changes_nothing() {
    let (mut s, log) = session();
    assert!(s.send_message("   \n\t").await.is_none());
    assert!(s.transcript().is_empty());
    assert!(!s.chart_visible());
    assert!(!s.is_loading());
    assert!(log.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn charted_turn_replies_with_labels_and_values() {
    let (mut s, log) = session();
    let outcome = s.send_message("  Sales: Jan 100, Feb 150, Mar 120 ").await;
    let spec = match outcome {
        Some(TurnOutcome::Charted(spec)) => spec,
        other => panic!("expected chart, got {other:?}"),
    };
    assert_eq!(spec.kind(), ChartKind::Line);

    let msgs = s.transcript().messages();
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[0].author, Author::User);
    assert_eq!(msgs[0].text, "Sales: Jan 100, Feb 150, Mar 120");
    assert_eq!(
        msgs[1].text,
        "Perfect! Here is your chart based on the provided data: Jan, Feb, Mar with values 100, 150, 120"
    );
    assert!(s.chart_visible());
    assert_eq!(*log.borrow(), vec!["create 1 line"]);
}

#[tokio::test(start_paused = true)]
async fn text_without_numbers_gets_guidance() {
    let (mut s, log) = session();
    assert_eq!(s.send_message("hello there").await, Some(TurnOutcome::NoData));
    assert_eq!(s.transcript().last().map(|m| m.text.as_str()), Some(NO_DATA_REPLY));
    assert!(!s.chart_visible());
    assert!(log.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn previous_chart_is_destroyed_before_next_is_created() {
    let (mut s, log) = session();
    s.send_message("10, 20, 30").await;
    s.send_message("Excellent: 55%, Good: 33%").await;
    assert_eq!(*log.borrow(), vec!["create 1 bar", "destroy 1", "create 2 doughnut"]);
    assert!(s.chart_visible());
}

#[tokio::test(start_paused = true)]
async fn render_failure_reports_and_leaves_slot_empty() {
    let (mut s, log) = session();
    s.send_message("10, 20").await;
    s.renderer_mut().fail = true;

    assert_eq!(s.send_message("30, 40").await, Some(TurnOutcome::Failed));
    assert_eq!(s.transcript().last().map(|m| m.text.as_str()), Some(FAILURE_REPLY));
    assert!(!s.chart_visible());
    assert_eq!(*log.borrow(), vec!["create 1 bar", "destroy 1", "draw failed"]);
}

#[tokio::test(start_paused = true)]
async fn submit_is_deferred_by_the_processing_delay() {
    let (mut s, _log) = session();
    let pending = s.submit("1, 2").expect("pending turn");
    assert!(s.is_loading());
    assert_eq!(s.transcript().len(), 1);
    assert_eq!(pending.input(), "1, 2");

    let start = tokio::time::Instant::now();
    let pending = pending.ready().await;
    assert!(start.elapsed() >= Duration::from_millis(900));

    assert!(matches!(s.complete(pending), TurnOutcome::Charted(_)));
    assert!(!s.is_loading());
    assert_eq!(s.transcript().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn abandoned_turn_stops_loading() {
    let (mut s, log) = session();
    let pending = s.submit("10, 20").expect("pending turn");
    assert!(s.is_loading());
    drop(pending);
    assert!(!s.is_loading());
    assert_eq!(s.transcript().len(), 1);
    assert!(log.borrow().is_empty());

    // a cancelled wait behaves the same
    let pending = s.submit("30, 40").expect("pending turn");
    let waited = tokio::time::timeout(Duration::from_millis(10), pending.ready()).await;
    assert!(waited.is_err());
    assert!(!s.is_loading());
}

#[tokio::test(start_paused = true)]
async fn loading_tracks_each_outstanding_turn() {
    let (mut s, _log) = session();
    let first = s.submit("1").expect("first");
    let second = s.submit("2").expect("second");
    s.complete(first.ready().await);
    assert!(s.is_loading(), "second turn still outstanding");
    s.complete(second.ready().await);
    assert!(!s.is_loading());
}

#[tokio::test(start_paused = true)]
async fn resize_reaches_the_live_chart_only() {
    let (mut s, log) = session();
    s.resize(800, 430).expect("no-op without chart");
    assert!(log.borrow().is_empty());

    s.send_message("Mon 5, Tue 6").await;
    s.resize(800, 430).expect("resize");
    assert_eq!(log.borrow().last().map(String::as_str), Some("resize 1 800x430"));
}
