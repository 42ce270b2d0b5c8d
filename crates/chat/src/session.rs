// File: crates/chat/src/session.rs
// Summary: Chat session orchestration: submit, deferred processing, reply, chart replacement.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chart_core::RenderError;
use extract_core::{ChartSpec, ExtractError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::render::{ChartSlot, Renderer};
use crate::transcript::{Author, Transcript};

/// Delay before a submitted message is processed.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(900);

pub const NO_DATA_REPLY: &str = "I couldn't extract numerical data from your input. \
Try providing data in formats like: \"Sales: Jan 100, Feb 150, Mar 120\" or paste CSV data.";

pub const FAILURE_REPLY: &str = "Sorry, there was an error processing your data. Please try a different format.";

/// Number text as a browser prints it: plain decimals between 1e-6 and 1e21,
/// `1e+21`-style exponents outside, `Infinity` for overflowed values.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let magnitude = v.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return v.to_string();
    }
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

/// Reply for a successfully charted turn.
pub fn success_reply(spec: &ChartSpec) -> String {
    let values: Vec<String> = spec.values().iter().copied().map(format_value).collect();
    format!(
        "Perfect! Here is your chart based on the provided data: {} with values {}",
        spec.labels().join(", "),
        values.join(", ")
    )
}

#[derive(Debug, Error)]
pub enum TurnError {
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum TurnOutcome {
    Charted(ChartSpec),
    NoData,
    Failed,
}

/// Counts a turn as outstanding until dropped.
#[derive(Debug)]
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A submitted message waiting out its processing delay.
/// The session reports loading until the turn is completed or dropped.
#[derive(Debug)]
#[must_use = "a pending turn does nothing until completed"]
pub struct PendingTurn {
    input: String,
    delay: Duration,
    _in_flight: InFlight,
}

impl PendingTurn {
    pub fn input(&self) -> &str { &self.input }

    /// Resolve once the processing delay has elapsed.
    pub async fn ready(self) -> Self {
        tokio::time::sleep(self.delay).await;
        self
    }
}

pub struct ChatSession<R: Renderer> {
    renderer: R,
    slot: ChartSlot<R::Handle>,
    transcript: Transcript,
    delay: Duration,
    in_flight: Arc<AtomicUsize>,
}

impl<R: Renderer> ChatSession<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_delay(renderer, DEFAULT_PROCESSING_DELAY)
    }

    pub fn with_delay(renderer: R, delay: Duration) -> Self {
        Self { renderer, slot: ChartSlot::new(), transcript: Transcript::new(), delay, in_flight: Arc::default() }
    }

    pub fn transcript(&self) -> &Transcript { &self.transcript }
    pub fn is_loading(&self) -> bool { self.in_flight.load(Ordering::SeqCst) > 0 }
    pub fn chart_visible(&self) -> bool { self.slot.is_live() }
    pub fn chart(&self) -> Option<&R::Handle> { self.slot.get() }
    pub fn renderer(&self) -> &R { &self.renderer }
    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }

    /// Record the user's message and start the processing delay.
    /// Blank input is ignored and returns `None`.
    pub fn submit(&mut self, input: &str) -> Option<PendingTurn> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.transcript.push(Author::User, text);
        debug!(len = text.len(), "message submitted");
        Some(PendingTurn { input: text.to_owned(), delay: self.delay, _in_flight: InFlight::enter(&self.in_flight) })
    }

    /// Process a submitted message and append the assistant's reply.
    pub fn complete(&mut self, turn: PendingTurn) -> TurnOutcome {
        let PendingTurn { input, _in_flight: in_flight, .. } = turn;
        drop(in_flight);
        match self.process(&input) {
            Ok(spec) => {
                self.transcript.push(Author::Assistant, success_reply(&spec));
                TurnOutcome::Charted(spec)
            }
            Err(TurnError::Extract(ExtractError::NoNumericData)) => {
                info!("no numeric data in message");
                self.transcript.push(Author::Assistant, NO_DATA_REPLY);
                TurnOutcome::NoData
            }
            Err(e) => {
                warn!(error = %e, "turn failed");
                self.transcript.push(Author::Assistant, FAILURE_REPLY);
                TurnOutcome::Failed
            }
        }
    }

    /// Submit, wait out the delay, and complete in one call.
    pub async fn send_message(&mut self, input: &str) -> Option<TurnOutcome> {
        let turn = self.submit(input)?.ready().await;
        Some(self.complete(turn))
    }

    /// Extraction pipeline plus chart replacement for one message.
    pub fn process(&mut self, input: &str) -> Result<ChartSpec, TurnError> {
        let spec = ChartSpec::from_text(input)?;
        self.slot.replace(&mut self.renderer, &spec)?;
        Ok(spec)
    }

    /// Forward a surface resize to the live chart.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), RenderError> {
        self.slot.resize(width, height)
    }
}
