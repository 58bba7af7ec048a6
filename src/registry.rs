//! Descriptor registry: metric identities, label schemas and naming.
//!
//! Every metric this crate can emit is declared once as a [`Def`] constant in
//! its category module (`uap`, `clients`). [`Registry::new`] walks those
//! declarative tables and renders the immutable identity → descriptor map the
//! external collector consumes. Construction is pure: there are no runtime
//! error paths here.

use std::collections::HashMap;

use crate::flex::FlexNum;
use crate::sample::{MetricKind, Sample, Sink};

/// Unit conversion applied when a raw field value becomes a sample.
///
/// Conversions are part of the mapping contract, not a display concern:
/// source-side ratios land on the `[0,1]` interval and milliseconds become
/// seconds before the sample leaves the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// No conversion, no unit suffix.
    None,
    /// Source value on a 0-1000 scale, exported as a `[0,1]` ratio.
    Permille,
    /// Source value in percent, exported as a `[0,1]` ratio.
    Percent,
    /// Source value in milliseconds, exported as seconds.
    Millis,
    /// Already seconds; suffix only.
    Seconds,
}

impl Unit {
    /// Rescale a raw field value to the exported unit.
    pub fn convert(&self, raw: f64) -> f64 {
        match self {
            Unit::Permille | Unit::Millis => raw / 1000.0,
            Unit::Percent => raw / 100.0,
            Unit::None | Unit::Seconds => raw,
        }
    }

    /// Metric name suffix for this unit and kind. Counters without a unit
    /// suffix follow the `_total` convention.
    pub fn suffix(&self, kind: MetricKind) -> &'static str {
        match self {
            Unit::Permille | Unit::Percent => "_ratio",
            Unit::Millis | Unit::Seconds => "_seconds",
            Unit::None => match kind {
                MetricKind::Counter => "_total",
                MetricKind::Gauge => "",
            },
        }
    }
}

/// Fixed label-name schemas, one per metric class.
///
/// A sample's label tuple is always built by the function paired with its
/// schema, so tuple length and order cannot drift from what the registry
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSchema {
    /// Device identity metadata on the constant-1 info gauge.
    DeviceInfo,
    /// Device-level gauges and byte counters.
    Device,
    /// Device stat-block counters split by wireless population.
    Population,
    /// Per virtual-interface (VAP) metrics.
    Vap,
    /// Per physical-radio metrics.
    Radio,
    /// Radio station counts, split by population.
    RadioStation,
    /// Connected-client metrics.
    Client,
}

impl LabelSchema {
    /// Ordered label names for this schema.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            LabelSchema::DeviceInfo => &[
                "type", "site_name", "name", "version", "model", "serial", "mac", "ip", "id",
                "bytes", "uptime",
            ],
            LabelSchema::Device => &["type", "site_name", "name"],
            LabelSchema::Population => &["population", "site_name", "name"],
            LabelSchema::Vap => &[
                "vap_name",
                "bssid",
                "radio",
                "radio_name",
                "essid",
                "usage",
                "site_name",
                "name",
            ],
            LabelSchema::Radio => &["radio_name", "radio", "site_name", "name"],
            LabelSchema::RadioStation => &["radio_name", "radio", "site_name", "name", "population"],
            LabelSchema::Client => &[
                "id",
                "mac",
                "user_id",
                "site_id",
                "site_name",
                "network_id",
                "ap_mac",
                "gw_mac",
                "sw_mac",
                "ap_name",
                "gw_name",
                "sw_name",
                "radio_name",
                "radio",
                "radio_proto",
                "name",
                "channel",
                "vlan",
                "ip",
                "essid",
                "bssid",
                "radio_desc",
            ],
        }
    }
}

/// Declarative metric definition.
///
/// The classification (kind), unit conversion and label schema are paired at
/// the definition site, so a sample constructed through [`Def::sample`] can
/// only carry the conversion and kind its registry entry was built from.
#[derive(Debug)]
pub struct Def {
    pub id: &'static str,
    pub kind: MetricKind,
    pub unit: Unit,
    pub schema: LabelSchema,
    pub help: &'static str,
}

impl Def {
    pub const fn new(
        id: &'static str,
        kind: MetricKind,
        unit: Unit,
        schema: LabelSchema,
        help: &'static str,
    ) -> Self {
        Self {
            id,
            kind,
            unit,
            schema,
            help,
        }
    }

    /// Full rendered metric name under a namespace prefix.
    pub fn name(&self, ns: &str) -> String {
        format!("{}_{}{}", ns, self.id, self.unit.suffix(self.kind))
    }

    /// Build a sample from a raw field value, applying the unit conversion.
    pub fn sample(&self, v: &FlexNum, labels: Vec<String>) -> Sample {
        self.sample_value(v.val, labels)
    }

    /// Build a sample from an already-numeric value.
    pub fn sample_value(&self, raw: f64, labels: Vec<String>) -> Sample {
        Sample {
            id: self.id,
            kind: self.kind,
            value: self.unit.convert(raw),
            labels,
        }
    }
}

/// Rendered descriptor for one metric identity.
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Full metric name including namespace prefix and unit suffix.
    pub name: String,
    pub kind: MetricKind,
    pub help: &'static str,
    /// Ordered label names every sample for this identity must match.
    pub labels: &'static [&'static str],
}

/// Immutable identity → descriptor map, built once per process.
#[derive(Debug)]
pub struct Registry {
    prefix: String,
    descs: HashMap<&'static str, Descriptor>,
}

impl Registry {
    /// Build the registry for a namespace prefix from the category tables.
    pub fn new(prefix: &str) -> Self {
        let defs = crate::uap::METRICS.iter().chain(crate::clients::METRICS);

        let mut descs = HashMap::new();
        for def in defs {
            descs.insert(
                def.id,
                Descriptor {
                    name: def.name(prefix),
                    kind: def.kind,
                    help: def.help,
                    labels: def.schema.names(),
                },
            );
        }

        Self {
            prefix: prefix.to_string(),
            descs,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn get(&self, id: &str) -> Option<&Descriptor> {
        self.descs.get(id)
    }

    pub fn len(&self) -> usize {
        self.descs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descs.is_empty()
    }

    /// Iterate all registered descriptors.
    pub fn descriptors(&self) -> impl Iterator<Item = (&'static str, &Descriptor)> {
        self.descs.iter().map(|(id, d)| (*id, d))
    }
}

/// Pairs a registry with a sink for one exporter invocation.
///
/// In debug builds every outgoing sample is checked against its registered
/// schema; an arity mismatch is a programming defect, not a runtime
/// condition, so release builds carry no guard.
pub struct Reporter<'a> {
    registry: &'a Registry,
    sink: &'a dyn Sink,
}

impl<'a> Reporter<'a> {
    pub fn new(registry: &'a Registry, sink: &'a dyn Sink) -> Self {
        Self { registry, sink }
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    pub fn send(&self, batch: Vec<Sample>) {
        #[cfg(debug_assertions)]
        for s in &batch {
            match self.registry.get(s.id) {
                Some(d) => debug_assert_eq!(
                    s.labels.len(),
                    d.labels.len(),
                    "label arity mismatch for {}",
                    s.id
                ),
                None => debug_assert!(false, "sample for unregistered metric {}", s.id),
            }
        }
        self.sink.send(batch);
    }
}
