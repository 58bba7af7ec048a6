//! UniFi controller telemetry to time-series mapping engine.
//!
//! This crate turns hierarchical device/client snapshots from a UniFi-style
//! network inventory into a flat stream of labeled, classified samples for a
//! metrics backend. It walks nested sub-tables, joins radio tables by key,
//! splits user/guest populations into label values, normalizes ratios and
//! millisecond latencies, and hands finished batches to a [`sample::Sink`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │ Device inventory │────>│ Category exporter │────>│     Sink     │
//! │   (snapshots)    │     │ (join/filter/map) │     │  (batches)   │
//! └──────────────────┘     └───────────────────┘     └──────────────┘
//! ```
//!
//! Snapshot acquisition and the metrics wire protocol are both outside this
//! crate: a collection orchestrator fetches snapshots and calls the
//! exporters; whatever sits behind the sink handles transport. Exporters are
//! pure functions of `(snapshot, registry)` and hold no shared mutable
//! state, so they may run in parallel across devices and categories.

pub mod clients;
pub mod config;
pub mod flex;
pub mod registry;
pub mod sample;
pub mod snapshot;
pub mod uap;

pub use clients::ClientExporter;
pub use config::ExporterConfig;
pub use flex::FlexNum;
pub use registry::{Descriptor, Registry};
pub use sample::{BufferSink, ChannelSink, MetricKind, Population, Sample, Sink};
pub use uap::UapExporter;
