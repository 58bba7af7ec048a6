//! Flat time-series samples and the sink they flow into.
//!
//! A [`Sample`] is one already-classified record: metric identity, counter or
//! gauge kind, numeric value and an ordered label-value tuple. The exporters
//! hand batches of samples to a [`Sink`]; the concrete transport behind the
//! sink (in-process scrape registry, push, file dump) is not this crate's
//! concern.

use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::warn;

/// Whether a metric accumulates monotonically or can move both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Monotonically non-decreasing since device boot/reset.
    Counter,
    /// Instantaneous value that may rise or fall.
    Gauge,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

/// One flat output record, ready for the metrics backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    /// Metric identity, resolvable to a full name via the registry.
    pub id: &'static str,
    pub kind: MetricKind,
    pub value: f64,
    /// Ordered label values; the label names live in the registry schema.
    pub labels: Vec<String>,
}

/// Wireless sub-population a stat belongs to.
///
/// The population is a label value, never a separate metric: the same metric
/// identity is emitted once per population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    User,
    Guest,
}

impl Population {
    pub fn as_str(&self) -> &'static str {
        match self {
            Population::User => "user",
            Population::Guest => "guest",
        }
    }
}

/// Append-only channel for sample batches.
///
/// Implementations must accept concurrent submissions and preserve ordering
/// within a batch; ordering across batches is not guaranteed. `send` must not
/// block the exporter indefinitely.
pub trait Sink: Send + Sync {
    fn send(&self, batch: Vec<Sample>);
}

/// Mutex-guarded in-memory sink.
///
/// Used by tests and by callers that want to inspect a full scrape cycle
/// before forwarding it.
#[derive(Debug, Default)]
pub struct BufferSink {
    inner: Mutex<Vec<Sample>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything accepted so far.
    pub fn take(&self) -> Vec<Sample> {
        std::mem::take(&mut self.inner.lock())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Sink for BufferSink {
    fn send(&self, mut batch: Vec<Sample>) {
        self.inner.lock().append(&mut batch);
    }
}

/// Bounded asynchronous hand-off to a consumer task.
///
/// A full or closed channel drops the batch with a warning rather than
/// blocking the scrape.
pub struct ChannelSink {
    tx: mpsc::Sender<Vec<Sample>>,
}

impl ChannelSink {
    /// Create a sink and the receiving end for the consumer task.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Vec<Sample>>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

impl Sink for ChannelSink {
    fn send(&self, batch: Vec<Sample>) {
        if let Err(err) = self.tx.try_send(batch) {
            let dropped = match &err {
                mpsc::error::TrySendError::Full(b) => b.len(),
                mpsc::error::TrySendError::Closed(b) => b.len(),
            };
            warn!(dropped, "sample batch dropped, sink not keeping up");
        }
    }
}
