//! Connected-client exporter.
//!
//! One flat batch per station: every metric field maps to exactly one sample
//! over the same fixed 22-value label tuple. No joins, no filtering, no
//! population split. The DPI sub-structure is flattened into the tuple with
//! the classification carried as metric identity, not as an extra label.
//!
//! Two quirks of the legacy mapping are deliberately fixed here: wired
//! transmit bytes now read the wired counter instead of the transmit rate,
//! and the transmit rate is a gauge like its receive counterpart.

use crate::flex::FlexNum;
use crate::registry::{Def, LabelSchema::Client, Registry, Reporter, Unit};
use crate::sample::{MetricKind::Counter, MetricKind::Gauge, Sink};
use crate::snapshot::ClientSnapshot;

const ANOMALIES: Def = Def::new("client_anomalies", Counter, Unit::None, Client, "Client anomalies");
const BYTES_RATE: Def = Def::new("client_bytes_rate", Gauge, Unit::None, Client, "Client data rate");
const CCQ: Def = Def::new("client_ccq", Gauge, Unit::None, Client, "Client connection quality");
const NOISE: Def = Def::new("client_noise", Gauge, Unit::None, Client, "Client AP noise");
const ROAMS: Def = Def::new("client_roams", Counter, Unit::None, Client, "Client roam count");
const RSSI: Def = Def::new("client_rssi", Gauge, Unit::None, Client, "Client RSSI");
const RX_BYTES: Def = Def::new("client_receive_bytes", Counter, Unit::None, Client, "Client bytes received");
const RX_BYTES_RATE: Def = Def::new("client_receive_bytes_rate", Gauge, Unit::None, Client, "Client receive data rate");
const RX_PACKETS: Def = Def::new("client_receive_packets", Counter, Unit::None, Client, "Client packets received");
const RX_RATE: Def = Def::new("client_receive_rate", Gauge, Unit::None, Client, "Client receive rate");
const SIGNAL: Def = Def::new("client_signal", Gauge, Unit::None, Client, "Client signal strength");
const TX_BYTES: Def = Def::new("client_transmit_bytes", Counter, Unit::None, Client, "Client bytes transmitted");
const TX_BYTES_RATE: Def = Def::new("client_transmit_bytes_rate", Gauge, Unit::None, Client, "Client transmit data rate");
const TX_PACKETS: Def = Def::new("client_transmit_packets", Counter, Unit::None, Client, "Client packets transmitted");
const TX_POWER: Def = Def::new("client_transmit_power", Gauge, Unit::None, Client, "Client transmit power");
const TX_RATE: Def = Def::new("client_transmit_rate", Gauge, Unit::None, Client, "Client transmit rate");
const UPTIME: Def = Def::new("client_uptime", Gauge, Unit::Seconds, Client, "Client uptime");
const WIFI_TX_ATTEMPTS: Def = Def::new("client_wifi_transmit_attempts", Counter, Unit::None, Client, "Client wifi transmit attempts");
const WIRED_RX_BYTES: Def = Def::new("client_wired_receive_bytes", Counter, Unit::None, Client, "Client wired bytes received");
const WIRED_RX_BYTES_RATE: Def = Def::new("client_wired_receive_bytes_rate", Gauge, Unit::None, Client, "Client wired receive data rate");
const WIRED_RX_PACKETS: Def = Def::new("client_wired_receive_packets", Counter, Unit::None, Client, "Client wired packets received");
const WIRED_TX_BYTES: Def = Def::new("client_wired_transmit_bytes", Counter, Unit::None, Client, "Client wired bytes transmitted");
const WIRED_TX_BYTES_RATE: Def = Def::new("client_wired_transmit_bytes_rate", Gauge, Unit::None, Client, "Client wired transmit data rate");
const WIRED_TX_PACKETS: Def = Def::new("client_wired_transmit_packets", Counter, Unit::None, Client, "Client wired packets transmitted");
const DPI_APP: Def = Def::new("client_dpi_application", Gauge, Unit::None, Client, "Client DPI application classification");
const DPI_CAT: Def = Def::new("client_dpi_category", Gauge, Unit::None, Client, "Client DPI category classification");
const DPI_RX_BYTES: Def = Def::new("client_dpi_receive_bytes", Counter, Unit::None, Client, "Client DPI bytes received");
const DPI_RX_PACKETS: Def = Def::new("client_dpi_receive_packets", Counter, Unit::None, Client, "Client DPI packets received");
const DPI_TX_BYTES: Def = Def::new("client_dpi_transmit_bytes", Counter, Unit::None, Client, "Client DPI bytes transmitted");
const DPI_TX_PACKETS: Def = Def::new("client_dpi_transmit_packets", Counter, Unit::None, Client, "Client DPI packets transmitted");

/// Every metric the client exporter can emit.
pub(crate) const METRICS: &[&Def] = &[
    &ANOMALIES,
    &BYTES_RATE,
    &CCQ,
    &NOISE,
    &ROAMS,
    &RSSI,
    &RX_BYTES,
    &RX_BYTES_RATE,
    &RX_PACKETS,
    &RX_RATE,
    &SIGNAL,
    &TX_BYTES,
    &TX_BYTES_RATE,
    &TX_PACKETS,
    &TX_POWER,
    &TX_RATE,
    &UPTIME,
    &WIFI_TX_ATTEMPTS,
    &WIRED_RX_BYTES,
    &WIRED_RX_BYTES_RATE,
    &WIRED_RX_PACKETS,
    &WIRED_TX_BYTES,
    &WIRED_TX_BYTES_RATE,
    &WIRED_TX_PACKETS,
    &DPI_APP,
    &DPI_CAT,
    &DPI_RX_BYTES,
    &DPI_RX_PACKETS,
    &DPI_TX_BYTES,
    &DPI_TX_PACKETS,
];

/// Exporter for connected stations.
pub struct ClientExporter<'a> {
    rep: Reporter<'a>,
}

impl<'a> ClientExporter<'a> {
    pub fn new(registry: &'a Registry, sink: &'a dyn Sink) -> Self {
        Self {
            rep: Reporter::new(registry, sink),
        }
    }

    /// Produce the flat sample batch for one station snapshot.
    pub fn export(&self, c: &ClientSnapshot) {
        let labels = client_labels(c);
        let batch = client_metrics(c)
            .into_iter()
            .map(|(def, field)| def.sample(field, labels.clone()))
            .collect();
        self.rep.send(batch);
    }
}

fn client_labels(c: &ClientSnapshot) -> Vec<String> {
    vec![
        c.id.clone(),
        c.mac.clone(),
        c.user_id.clone(),
        c.site_id.clone(),
        c.site_name.clone(),
        c.network_id.clone(),
        c.ap_mac.clone(),
        c.gw_mac.clone(),
        c.sw_mac.clone(),
        c.ap_name.clone(),
        c.gw_name.clone(),
        c.sw_name.clone(),
        c.radio_name.clone(),
        c.radio.clone(),
        c.radio_proto.clone(),
        c.name.clone(),
        c.channel.txt.clone(),
        c.vlan.txt.clone(),
        c.ip.clone(),
        c.essid.clone(),
        c.bssid.clone(),
        c.radio_description.clone(),
    ]
}

fn client_metrics(c: &ClientSnapshot) -> [(&'static Def, &FlexNum); 30] {
    [
        (&ANOMALIES, &c.anomalies),
        (&BYTES_RATE, &c.bytes_r),
        (&CCQ, &c.ccq),
        (&NOISE, &c.noise),
        (&ROAMS, &c.roam_count),
        (&RSSI, &c.rssi),
        (&RX_BYTES, &c.rx_bytes),
        (&RX_BYTES_RATE, &c.rx_bytes_r),
        (&RX_PACKETS, &c.rx_packets),
        (&RX_RATE, &c.rx_rate),
        (&SIGNAL, &c.signal),
        (&TX_BYTES, &c.tx_bytes),
        (&TX_BYTES_RATE, &c.tx_bytes_r),
        (&TX_PACKETS, &c.tx_packets),
        (&TX_POWER, &c.tx_power),
        (&TX_RATE, &c.tx_rate),
        (&UPTIME, &c.uptime),
        (&WIFI_TX_ATTEMPTS, &c.wifi_tx_attempts),
        (&WIRED_RX_BYTES, &c.wired_rx_bytes),
        (&WIRED_RX_BYTES_RATE, &c.wired_rx_bytes_r),
        (&WIRED_RX_PACKETS, &c.wired_rx_packets),
        (&WIRED_TX_BYTES, &c.wired_tx_bytes),
        (&WIRED_TX_BYTES_RATE, &c.wired_tx_bytes_r),
        (&WIRED_TX_PACKETS, &c.wired_tx_packets),
        (&DPI_APP, &c.dpi_stats.app),
        (&DPI_CAT, &c.dpi_stats.cat),
        (&DPI_RX_BYTES, &c.dpi_stats.rx_bytes),
        (&DPI_RX_PACKETS, &c.dpi_stats.rx_packets),
        (&DPI_TX_BYTES, &c.dpi_stats.tx_bytes),
        (&DPI_TX_PACKETS, &c.dpi_stats.tx_packets),
    ]
}
