//! Access-point exporter.
//!
//! Walks one [`UapSnapshot`] and produces its full sample set: identity
//! gauges, the user/guest stat-block counters, the per-VAP table and the
//! radio table joined with its stats table. Each step sends its own batch
//! and writes disjoint metric identities, so the steps are independent; the
//! snapshot-provided table order is kept for deterministic output.

use tracing::debug;

use crate::flex::FlexNum;
use crate::registry::{Def, LabelSchema, Registry, Reporter, Unit};
use crate::sample::{MetricKind::Counter, MetricKind::Gauge, Population, Sink};
use crate::snapshot::{ApStats, RadioEntry, RadioStatsEntry, UapSnapshot, VapEntry};

use LabelSchema::{Device, DeviceInfo, Population as PopulationSchema, Radio, RadioStation, Vap};

// Device identity and byte accounting.
const DEVICE_INFO: Def = Def::new("device_info", Gauge, Unit::None, DeviceInfo, "Device identity metadata");
const DEVICE_UPTIME: Def = Def::new("device_uptime", Gauge, Unit::Seconds, Device, "Device uptime");
const DEVICE_BYTES_D: Def = Def::new("device_bytes_d", Counter, Unit::None, Device, "Device bytes (delta)");
const DEVICE_TX_BYTES_D: Def = Def::new("device_transmit_bytes_d", Counter, Unit::None, Device, "Device transmit bytes (delta)");
const DEVICE_RX_BYTES_D: Def = Def::new("device_receive_bytes_d", Counter, Unit::None, Device, "Device receive bytes (delta)");
const DEVICE_BYTES_R: Def = Def::new("device_bytes_rate", Gauge, Unit::None, Device, "Device byte rate");
const DEVICE_TX_BYTES: Def = Def::new("device_transmit_bytes", Counter, Unit::None, Device, "Device total bytes transmitted");
const DEVICE_RX_BYTES: Def = Def::new("device_receive_bytes", Counter, Unit::None, Device, "Device total bytes received");
const DEVICE_STATIONS: Def = Def::new("device_stations", Gauge, Unit::None, PopulationSchema, "Device station count");

// Host-level system figures.
const DEVICE_LOAD_1: Def = Def::new("device_load_average_1", Gauge, Unit::None, Device, "Device one-minute load average");
const DEVICE_LOAD_5: Def = Def::new("device_load_average_5", Gauge, Unit::None, Device, "Device five-minute load average");
const DEVICE_LOAD_15: Def = Def::new("device_load_average_15", Gauge, Unit::None, Device, "Device fifteen-minute load average");
const DEVICE_MEM_BUFFER: Def = Def::new("device_memory_buffer", Gauge, Unit::None, Device, "Device buffer memory");
const DEVICE_MEM_TOTAL: Def = Def::new("device_memory_total", Gauge, Unit::None, Device, "Device total memory");
const DEVICE_MEM_USED: Def = Def::new("device_memory_used", Gauge, Unit::None, Device, "Device used memory");
const DEVICE_CPU: Def = Def::new("device_cpu_utilization", Gauge, Unit::Percent, Device, "Device CPU utilization");
const DEVICE_MEM: Def = Def::new("device_memory_utilization", Gauge, Unit::Percent, Device, "Device memory utilization");

// Stat-block wireless counters, emitted once per population.
const STAT_WIFI_TX_DROPPED: Def = Def::new("stat_wifi_transmit_dropped", Counter, Unit::None, PopulationSchema, "Wifi transmissions dropped");
const STAT_RX_ERRORS: Def = Def::new("stat_receive_errors", Counter, Unit::None, PopulationSchema, "Receive errors");
const STAT_RX_DROPPED: Def = Def::new("stat_receive_dropped", Counter, Unit::None, PopulationSchema, "Receive dropped");
const STAT_RX_FRAGS: Def = Def::new("stat_receive_frags", Counter, Unit::None, PopulationSchema, "Received frags");
const STAT_RX_CRYPTS: Def = Def::new("stat_receive_crypts", Counter, Unit::None, PopulationSchema, "Receive crypts");
const STAT_TX_PACKETS: Def = Def::new("stat_transmit_packets", Counter, Unit::None, PopulationSchema, "Transmit packets");
const STAT_TX_BYTES: Def = Def::new("stat_transmit_bytes", Counter, Unit::None, PopulationSchema, "Transmit bytes");
const STAT_TX_ERRORS: Def = Def::new("stat_transmit_errors", Counter, Unit::None, PopulationSchema, "Transmit errors");
const STAT_TX_DROPPED: Def = Def::new("stat_transmit_dropped", Counter, Unit::None, PopulationSchema, "Transmit dropped");
const STAT_TX_RETRIES: Def = Def::new("stat_transmit_retries", Counter, Unit::None, PopulationSchema, "Transmit retries");
const STAT_RX_PACKETS: Def = Def::new("stat_receive_packets", Counter, Unit::None, PopulationSchema, "Receive packets");
const STAT_RX_BYTES: Def = Def::new("stat_receive_bytes", Counter, Unit::None, PopulationSchema, "Receive bytes");
const STAT_WIFI_TX_ATTEMPTS: Def = Def::new("stat_wifi_transmit_attempts", Counter, Unit::None, PopulationSchema, "Wifi transmission attempts");
const STAT_MAC_FILTER_REJECTS: Def = Def::new("stat_mac_filter_rejects", Counter, Unit::None, PopulationSchema, "MAC filter rejections");

// Per virtual-interface metrics.
const VAP_CCQ: Def = Def::new("vap_ccq", Gauge, Unit::Permille, Vap, "VAP client connection quality");
const VAP_MAC_FILTER_REJECTS: Def = Def::new("vap_mac_filter_rejects", Counter, Unit::None, Vap, "VAP MAC filter rejections");
const VAP_SATISFACTION_STATIONS: Def = Def::new("vap_satisfaction_stations", Gauge, Unit::None, Vap, "VAP number of satisfaction stations");
const VAP_AVG_CLIENT_SIGNAL: Def = Def::new("vap_average_client_signal", Gauge, Unit::None, Vap, "VAP average client signal");
const VAP_SATISFACTION: Def = Def::new("vap_satisfaction", Gauge, Unit::Percent, Vap, "VAP satisfaction");
const VAP_SATISFACTION_NOW: Def = Def::new("vap_satisfaction_now", Gauge, Unit::Percent, Vap, "VAP satisfaction now");
const VAP_DNS_LATENCY_AVG: Def = Def::new("vap_dns_latency_average", Gauge, Unit::Millis, Vap, "VAP DNS latency average");
const VAP_RX_BYTES: Def = Def::new("vap_receive_bytes", Counter, Unit::None, Vap, "VAP bytes received");
const VAP_RX_CRYPTS: Def = Def::new("vap_receive_crypts", Counter, Unit::None, Vap, "VAP crypts received");
const VAP_RX_DROPPED: Def = Def::new("vap_receive_dropped", Counter, Unit::None, Vap, "VAP dropped received");
const VAP_RX_ERRORS: Def = Def::new("vap_receive_errors", Counter, Unit::None, Vap, "VAP errors received");
const VAP_RX_FRAGS: Def = Def::new("vap_receive_frags", Counter, Unit::None, Vap, "VAP frags received");
const VAP_RX_NWIDS: Def = Def::new("vap_receive_nwids", Counter, Unit::None, Vap, "VAP nwids received");
const VAP_RX_PACKETS: Def = Def::new("vap_receive_packets", Counter, Unit::None, Vap, "VAP packets received");
const VAP_TX_BYTES: Def = Def::new("vap_transmit_bytes", Counter, Unit::None, Vap, "VAP bytes transmitted");
const VAP_TX_DROPPED: Def = Def::new("vap_transmit_dropped", Counter, Unit::None, Vap, "VAP dropped transmitted");
const VAP_TX_ERRORS: Def = Def::new("vap_transmit_errors", Counter, Unit::None, Vap, "VAP errors transmitted");
const VAP_TX_PACKETS: Def = Def::new("vap_transmit_packets", Counter, Unit::None, Vap, "VAP packets transmitted");
const VAP_TX_POWER: Def = Def::new("vap_transmit_power", Gauge, Unit::None, Vap, "VAP transmit power");
const VAP_TX_RETRIES: Def = Def::new("vap_transmit_retries", Counter, Unit::None, Vap, "VAP retries transmitted");
const VAP_TX_RETRIES_COMBINED: Def = Def::new("vap_transmit_retries_combined", Counter, Unit::None, Vap, "VAP combined retries transmitted");
const VAP_TX_DATA_MPDU_BYTES: Def = Def::new("vap_data_mpdu_transmit_bytes", Counter, Unit::None, Vap, "VAP data MPDU bytes transmitted");
const VAP_TX_RTS_RETRIES: Def = Def::new("vap_transmit_rts_retries", Counter, Unit::None, Vap, "VAP RTS retries transmitted");
const VAP_TX_SUCCESS: Def = Def::new("vap_transmit_success", Counter, Unit::None, Vap, "VAP successful transmits");
const VAP_TX_TOTAL: Def = Def::new("vap_transmit", Counter, Unit::None, Vap, "VAP transmit total");
const VAP_TX_GOODBYTES: Def = Def::new("vap_transmit_goodbytes", Counter, Unit::None, Vap, "VAP TCP goodbytes transmitted");
const VAP_TX_LAT_AVG: Def = Def::new("vap_transmit_latency_average", Gauge, Unit::Millis, Vap, "VAP TCP latency average, transmit");
const VAP_TX_LAT_MAX: Def = Def::new("vap_transmit_latency_maximum", Gauge, Unit::Millis, Vap, "VAP TCP latency maximum, transmit");
const VAP_TX_LAT_MIN: Def = Def::new("vap_transmit_latency_minimum", Gauge, Unit::Millis, Vap, "VAP TCP latency minimum, transmit");
const VAP_RX_GOODBYTES: Def = Def::new("vap_receive_goodbytes", Counter, Unit::None, Vap, "VAP TCP goodbytes received");
const VAP_RX_LAT_AVG: Def = Def::new("vap_receive_latency_average", Gauge, Unit::Millis, Vap, "VAP TCP latency average, receive");
const VAP_RX_LAT_MAX: Def = Def::new("vap_receive_latency_maximum", Gauge, Unit::Millis, Vap, "VAP TCP latency maximum, receive");
const VAP_RX_LAT_MIN: Def = Def::new("vap_receive_latency_minimum", Gauge, Unit::Millis, Vap, "VAP TCP latency minimum, receive");
const VAP_TX_LAT_MOV_AVG: Def = Def::new("vap_transmit_latency_moving_average", Gauge, Unit::Millis, Vap, "VAP moving latency average, transmit");
const VAP_TX_LAT_MOV_MAX: Def = Def::new("vap_transmit_latency_moving_maximum", Gauge, Unit::Millis, Vap, "VAP moving latency maximum, transmit");
const VAP_TX_LAT_MOV_MIN: Def = Def::new("vap_transmit_latency_moving_minimum", Gauge, Unit::Millis, Vap, "VAP moving latency minimum, transmit");
const VAP_TX_LAT_MOV_TOTAL: Def = Def::new("vap_transmit_latency_moving", Counter, Unit::None, Vap, "VAP moving latency total, transmit");
const VAP_TX_LAT_MOV_COUNT: Def = Def::new("vap_transmit_latency_moving_count", Counter, Unit::None, Vap, "VAP moving latency sample count, transmit");

// Static radio capabilities.
const RADIO_ANTENNA_GAIN: Def = Def::new("radio_current_antenna_gain", Gauge, Unit::None, Radio, "Radio current antenna gain");
const RADIO_HT: Def = Def::new("radio_ht", Gauge, Unit::None, Radio, "Radio HT mode");
const RADIO_MAX_TX_POWER: Def = Def::new("radio_max_transmit_power", Gauge, Unit::None, Radio, "Radio maximum transmit power");
const RADIO_MIN_TX_POWER: Def = Def::new("radio_min_transmit_power", Gauge, Unit::None, Radio, "Radio minimum transmit power");
const RADIO_NSS: Def = Def::new("radio_nss", Gauge, Unit::None, Radio, "Radio spatial streams");
const RADIO_CAPS: Def = Def::new("radio_caps", Gauge, Unit::None, Radio, "Radio capability bitmask");

// Dynamic radio stats, joined by radio name.
const RADIO_TX_POWER: Def = Def::new("radio_transmit_power", Gauge, Unit::None, Radio, "Radio transmit power");
const RADIO_AST_BE_XMIT: Def = Def::new("radio_ast_be_xmit", Gauge, Unit::None, Radio, "Radio AstBe transmit");
const RADIO_CHANNEL: Def = Def::new("radio_channel", Gauge, Unit::None, Radio, "Radio channel");
const RADIO_CU_SELF_RX: Def = Def::new("radio_channel_utilization_receive", Gauge, Unit::Percent, Radio, "Radio channel utilization, receive");
const RADIO_CU_SELF_TX: Def = Def::new("radio_channel_utilization_transmit", Gauge, Unit::Percent, Radio, "Radio channel utilization, transmit");
const RADIO_EXT_CHANNEL: Def = Def::new("radio_ext_channel", Gauge, Unit::None, Radio, "Radio extension channel");
const RADIO_GAIN: Def = Def::new("radio_gain", Gauge, Unit::None, Radio, "Radio gain");
const RADIO_STATIONS: Def = Def::new("radio_stations", Gauge, Unit::None, RadioStation, "Radio station count");
const RADIO_TX_PACKETS: Def = Def::new("radio_transmit_packets", Gauge, Unit::None, Radio, "Radio transmitted packets");
const RADIO_TX_RETRIES: Def = Def::new("radio_transmit_retries", Gauge, Unit::None, Radio, "Radio transmit retries");

/// Every metric the access-point exporter can emit; the registry is built
/// from this table.
pub(crate) const METRICS: &[&Def] = &[
    &DEVICE_INFO,
    &DEVICE_UPTIME,
    &DEVICE_BYTES_D,
    &DEVICE_TX_BYTES_D,
    &DEVICE_RX_BYTES_D,
    &DEVICE_BYTES_R,
    &DEVICE_TX_BYTES,
    &DEVICE_RX_BYTES,
    &DEVICE_STATIONS,
    &DEVICE_LOAD_1,
    &DEVICE_LOAD_5,
    &DEVICE_LOAD_15,
    &DEVICE_MEM_BUFFER,
    &DEVICE_MEM_TOTAL,
    &DEVICE_MEM_USED,
    &DEVICE_CPU,
    &DEVICE_MEM,
    &STAT_WIFI_TX_DROPPED,
    &STAT_RX_ERRORS,
    &STAT_RX_DROPPED,
    &STAT_RX_FRAGS,
    &STAT_RX_CRYPTS,
    &STAT_TX_PACKETS,
    &STAT_TX_BYTES,
    &STAT_TX_ERRORS,
    &STAT_TX_DROPPED,
    &STAT_TX_RETRIES,
    &STAT_RX_PACKETS,
    &STAT_RX_BYTES,
    &STAT_WIFI_TX_ATTEMPTS,
    &STAT_MAC_FILTER_REJECTS,
    &VAP_CCQ,
    &VAP_MAC_FILTER_REJECTS,
    &VAP_SATISFACTION_STATIONS,
    &VAP_AVG_CLIENT_SIGNAL,
    &VAP_SATISFACTION,
    &VAP_SATISFACTION_NOW,
    &VAP_DNS_LATENCY_AVG,
    &VAP_RX_BYTES,
    &VAP_RX_CRYPTS,
    &VAP_RX_DROPPED,
    &VAP_RX_ERRORS,
    &VAP_RX_FRAGS,
    &VAP_RX_NWIDS,
    &VAP_RX_PACKETS,
    &VAP_TX_BYTES,
    &VAP_TX_DROPPED,
    &VAP_TX_ERRORS,
    &VAP_TX_PACKETS,
    &VAP_TX_POWER,
    &VAP_TX_RETRIES,
    &VAP_TX_RETRIES_COMBINED,
    &VAP_TX_DATA_MPDU_BYTES,
    &VAP_TX_RTS_RETRIES,
    &VAP_TX_SUCCESS,
    &VAP_TX_TOTAL,
    &VAP_TX_GOODBYTES,
    &VAP_TX_LAT_AVG,
    &VAP_TX_LAT_MAX,
    &VAP_TX_LAT_MIN,
    &VAP_RX_GOODBYTES,
    &VAP_RX_LAT_AVG,
    &VAP_RX_LAT_MAX,
    &VAP_RX_LAT_MIN,
    &VAP_TX_LAT_MOV_AVG,
    &VAP_TX_LAT_MOV_MAX,
    &VAP_TX_LAT_MOV_MIN,
    &VAP_TX_LAT_MOV_TOTAL,
    &VAP_TX_LAT_MOV_COUNT,
    &RADIO_ANTENNA_GAIN,
    &RADIO_HT,
    &RADIO_MAX_TX_POWER,
    &RADIO_MIN_TX_POWER,
    &RADIO_NSS,
    &RADIO_CAPS,
    &RADIO_TX_POWER,
    &RADIO_AST_BE_XMIT,
    &RADIO_CHANNEL,
    &RADIO_CU_SELF_RX,
    &RADIO_CU_SELF_TX,
    &RADIO_EXT_CHANNEL,
    &RADIO_GAIN,
    &RADIO_STATIONS,
    &RADIO_TX_PACKETS,
    &RADIO_TX_RETRIES,
];

/// Exporter for the access-point device category.
pub struct UapExporter<'a> {
    rep: Reporter<'a>,
}

impl<'a> UapExporter<'a> {
    pub fn new(registry: &'a Registry, sink: &'a dyn Sink) -> Self {
        Self {
            rep: Reporter::new(registry, sink),
        }
    }

    /// Produce the full sample set for one access-point snapshot.
    pub fn export(&self, d: &UapSnapshot) {
        let labels = device_labels(d);

        self.export_stats(d, &labels);
        self.export_system(d, &labels);
        self.export_vaps(d, &labels);
        self.export_radios(d, &labels);

        self.rep.send(vec![
            DEVICE_INFO.sample_value(1.0, info_labels(d)),
            DEVICE_UPTIME.sample(&d.uptime, labels.to_vec()),
        ]);
    }

    /// Stat-block counters, one pass per population, plus the device-level
    /// byte accounting some firmware variants omit.
    fn export_stats(&self, d: &UapSnapshot, labels: &[String; 3]) {
        let Some(ap) = d.stat.as_ref().and_then(|s| s.ap.as_ref()) else {
            debug!(device = %d.name, "snapshot has no access-point stat block, skipping");
            return;
        };

        let mut batch = Vec::with_capacity(4 + 2 * 14);

        let bytes = [
            (&DEVICE_BYTES_D, &d.bytes_d),
            (&DEVICE_TX_BYTES_D, &d.tx_bytes_d),
            (&DEVICE_RX_BYTES_D, &d.rx_bytes_d),
            (&DEVICE_BYTES_R, &d.bytes_r),
        ];
        for (def, field) in bytes {
            // Absent is absent, not zero.
            if let Some(v) = field {
                batch.push(def.sample(v, labels.to_vec()));
            }
        }

        for pop in [Population::User, Population::Guest] {
            let pop_labels = vec![
                pop.as_str().to_string(),
                labels[1].clone(),
                labels[2].clone(),
            ];
            for (def, v) in wifi_counters(ap, pop) {
                batch.push(def.sample(v, pop_labels.clone()));
            }
        }

        self.rep.send(batch);
    }

    /// Device-level aggregates: total byte counters, host system figures
    /// and the station count per population.
    fn export_system(&self, d: &UapSnapshot, labels: &[String; 3]) {
        let mut batch: Vec<_> = system_metrics(d)
            .into_iter()
            .map(|(def, field)| def.sample(field, labels.to_vec()))
            .collect();

        for (pop, count) in [
            (Population::User, &d.user_num_sta),
            (Population::Guest, &d.guest_num_sta),
        ] {
            let pop_labels = vec![
                pop.as_str().to_string(),
                labels[1].clone(),
                labels[2].clone(),
            ];
            batch.push(DEVICE_STATIONS.sample(count, pop_labels));
        }

        self.rep.send(batch);
    }

    /// Per-VAP metrics; entries with the up flag unset are suppressed.
    fn export_vaps(&self, d: &UapSnapshot, labels: &[String; 3]) {
        for v in &d.vap_table {
            if !v.up {
                continue;
            }

            let vl = vap_labels(v, labels);
            let batch = vap_metrics(v)
                .into_iter()
                .map(|(def, field)| def.sample(field, vl.clone()))
                .collect();
            self.rep.send(batch);
        }
    }

    /// Static radio gauges, then dynamic stats joined by radio name.
    ///
    /// The join takes the first stats row whose name matches; duplicate
    /// names would silently pick the first. A radio with no stats row
    /// exports its static fields only.
    fn export_radios(&self, d: &UapSnapshot, labels: &[String; 3]) {
        for radio in &d.radio_table {
            let rl = radio_labels(radio, labels);

            let batch = radio_static_metrics(radio)
                .into_iter()
                .map(|(def, field)| def.sample(field, rl.clone()))
                .collect();
            self.rep.send(batch);

            let Some(stats) = d.radio_table_stats.iter().find(|t| t.name == radio.name) else {
                debug!(radio = %radio.name, device = %d.name, "no stats row for radio, static fields only");
                continue;
            };

            let mut batch: Vec<_> = radio_dynamic_metrics(stats)
                .into_iter()
                .map(|(def, field)| def.sample(field, rl.clone()))
                .collect();
            for (pop, count) in [
                (Population::User, &stats.user_num_sta),
                (Population::Guest, &stats.guest_num_sta),
            ] {
                let mut sl = rl.clone();
                sl.push(pop.as_str().to_string());
                batch.push(RADIO_STATIONS.sample(count, sl));
            }
            self.rep.send(batch);
        }
    }
}

fn device_labels(d: &UapSnapshot) -> [String; 3] {
    [d.kind.clone(), d.site_name.clone(), d.name.clone()]
}

fn info_labels(d: &UapSnapshot) -> Vec<String> {
    vec![
        d.kind.clone(),
        d.site_name.clone(),
        d.name.clone(),
        d.version.clone(),
        d.model.clone(),
        d.serial.clone(),
        d.mac.clone(),
        d.ip.clone(),
        d.id.clone(),
        d.bytes.txt.clone(),
        d.uptime.txt.clone(),
    ]
}

fn vap_labels(v: &VapEntry, labels: &[String; 3]) -> Vec<String> {
    vec![
        v.name.clone(),
        v.bssid.clone(),
        v.radio.clone(),
        v.radio_name.clone(),
        v.essid.clone(),
        v.usage.clone(),
        labels[1].clone(),
        labels[2].clone(),
    ]
}

fn radio_labels(r: &RadioEntry, labels: &[String; 3]) -> Vec<String> {
    vec![
        r.name.clone(),
        r.radio.clone(),
        labels[1].clone(),
        labels[2].clone(),
    ]
}

/// Field selection for one wireless population. Both populations reuse the
/// same metric identities; only the label value differs.
fn wifi_counters(ap: &ApStats, pop: Population) -> [(&'static Def, &FlexNum); 14] {
    match pop {
        Population::User => [
            (&STAT_WIFI_TX_DROPPED, &ap.user_wifi_tx_dropped),
            (&STAT_RX_ERRORS, &ap.user_rx_errors),
            (&STAT_RX_DROPPED, &ap.user_rx_dropped),
            (&STAT_RX_FRAGS, &ap.user_rx_frags),
            (&STAT_RX_CRYPTS, &ap.user_rx_crypts),
            (&STAT_TX_PACKETS, &ap.user_tx_packets),
            (&STAT_TX_BYTES, &ap.user_tx_bytes),
            (&STAT_TX_ERRORS, &ap.user_tx_errors),
            (&STAT_TX_DROPPED, &ap.user_tx_dropped),
            (&STAT_TX_RETRIES, &ap.user_tx_retries),
            (&STAT_RX_PACKETS, &ap.user_rx_packets),
            (&STAT_RX_BYTES, &ap.user_rx_bytes),
            (&STAT_WIFI_TX_ATTEMPTS, &ap.user_wifi_tx_attempts),
            (&STAT_MAC_FILTER_REJECTS, &ap.user_mac_filter_rejections),
        ],
        Population::Guest => [
            (&STAT_WIFI_TX_DROPPED, &ap.guest_wifi_tx_dropped),
            (&STAT_RX_ERRORS, &ap.guest_rx_errors),
            (&STAT_RX_DROPPED, &ap.guest_rx_dropped),
            (&STAT_RX_FRAGS, &ap.guest_rx_frags),
            (&STAT_RX_CRYPTS, &ap.guest_rx_crypts),
            (&STAT_TX_PACKETS, &ap.guest_tx_packets),
            (&STAT_TX_BYTES, &ap.guest_tx_bytes),
            (&STAT_TX_ERRORS, &ap.guest_tx_errors),
            (&STAT_TX_DROPPED, &ap.guest_tx_dropped),
            (&STAT_TX_RETRIES, &ap.guest_tx_retries),
            (&STAT_RX_PACKETS, &ap.guest_rx_packets),
            (&STAT_RX_BYTES, &ap.guest_rx_bytes),
            (&STAT_WIFI_TX_ATTEMPTS, &ap.guest_wifi_tx_attempts),
            (&STAT_MAC_FILTER_REJECTS, &ap.guest_mac_filter_rejections),
        ],
    }
}

fn system_metrics(d: &UapSnapshot) -> [(&'static Def, &FlexNum); 10] {
    [
        (&DEVICE_TX_BYTES, &d.tx_bytes),
        (&DEVICE_RX_BYTES, &d.rx_bytes),
        (&DEVICE_LOAD_1, &d.sys_stats.loadavg_1),
        (&DEVICE_LOAD_5, &d.sys_stats.loadavg_5),
        (&DEVICE_LOAD_15, &d.sys_stats.loadavg_15),
        (&DEVICE_MEM_BUFFER, &d.sys_stats.mem_buffer),
        (&DEVICE_MEM_TOTAL, &d.sys_stats.mem_total),
        (&DEVICE_MEM_USED, &d.sys_stats.mem_used),
        (&DEVICE_CPU, &d.system_stats.cpu),
        (&DEVICE_MEM, &d.system_stats.mem),
    ]
}

fn vap_metrics(v: &VapEntry) -> [(&'static Def, &FlexNum); 38] {
    [
        (&VAP_CCQ, &v.ccq),
        (&VAP_MAC_FILTER_REJECTS, &v.mac_filter_rejections),
        (&VAP_SATISFACTION_STATIONS, &v.num_satisfaction_sta),
        (&VAP_AVG_CLIENT_SIGNAL, &v.avg_client_signal),
        (&VAP_SATISFACTION, &v.satisfaction),
        (&VAP_SATISFACTION_NOW, &v.satisfaction_now),
        (&VAP_DNS_LATENCY_AVG, &v.dns_avg_latency),
        (&VAP_RX_BYTES, &v.rx_bytes),
        (&VAP_RX_CRYPTS, &v.rx_crypts),
        (&VAP_RX_DROPPED, &v.rx_dropped),
        (&VAP_RX_ERRORS, &v.rx_errors),
        (&VAP_RX_FRAGS, &v.rx_frags),
        (&VAP_RX_NWIDS, &v.rx_nwids),
        (&VAP_RX_PACKETS, &v.rx_packets),
        (&VAP_TX_BYTES, &v.tx_bytes),
        (&VAP_TX_DROPPED, &v.tx_dropped),
        (&VAP_TX_ERRORS, &v.tx_errors),
        (&VAP_TX_PACKETS, &v.tx_packets),
        (&VAP_TX_POWER, &v.tx_power),
        (&VAP_TX_RETRIES, &v.tx_retries),
        (&VAP_TX_RETRIES_COMBINED, &v.tx_combined_retries),
        (&VAP_TX_DATA_MPDU_BYTES, &v.tx_data_mpdu_bytes),
        (&VAP_TX_RTS_RETRIES, &v.tx_rts_retries),
        (&VAP_TX_SUCCESS, &v.tx_success),
        (&VAP_TX_TOTAL, &v.tx_total),
        (&VAP_TX_GOODBYTES, &v.tx_tcp_stats.goodbytes),
        (&VAP_TX_LAT_AVG, &v.tx_tcp_stats.lat_avg),
        (&VAP_TX_LAT_MAX, &v.tx_tcp_stats.lat_max),
        (&VAP_TX_LAT_MIN, &v.tx_tcp_stats.lat_min),
        (&VAP_RX_GOODBYTES, &v.rx_tcp_stats.goodbytes),
        (&VAP_RX_LAT_AVG, &v.rx_tcp_stats.lat_avg),
        (&VAP_RX_LAT_MAX, &v.rx_tcp_stats.lat_max),
        (&VAP_RX_LAT_MIN, &v.rx_tcp_stats.lat_min),
        (&VAP_TX_LAT_MOV_AVG, &v.wifi_tx_latency_mov.avg),
        (&VAP_TX_LAT_MOV_MAX, &v.wifi_tx_latency_mov.max),
        (&VAP_TX_LAT_MOV_MIN, &v.wifi_tx_latency_mov.min),
        (&VAP_TX_LAT_MOV_TOTAL, &v.wifi_tx_latency_mov.total),
        (&VAP_TX_LAT_MOV_COUNT, &v.wifi_tx_latency_mov.total_count),
    ]
}

fn radio_static_metrics(r: &RadioEntry) -> [(&'static Def, &FlexNum); 6] {
    [
        (&RADIO_ANTENNA_GAIN, &r.current_antenna_gain),
        (&RADIO_HT, &r.ht),
        (&RADIO_MAX_TX_POWER, &r.max_txpower),
        (&RADIO_MIN_TX_POWER, &r.min_txpower),
        (&RADIO_NSS, &r.nss),
        (&RADIO_CAPS, &r.radio_caps),
    ]
}

fn radio_dynamic_metrics(t: &RadioStatsEntry) -> [(&'static Def, &FlexNum); 9] {
    [
        (&RADIO_TX_POWER, &t.tx_power),
        (&RADIO_AST_BE_XMIT, &t.ast_be_xmit),
        (&RADIO_CHANNEL, &t.channel),
        (&RADIO_CU_SELF_RX, &t.cu_self_rx),
        (&RADIO_CU_SELF_TX, &t.cu_self_tx),
        (&RADIO_EXT_CHANNEL, &t.extchannel),
        (&RADIO_GAIN, &t.gain),
        (&RADIO_TX_PACKETS, &t.tx_packets),
        (&RADIO_TX_RETRIES, &t.tx_retries),
    ]
}
