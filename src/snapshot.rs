//! Raw controller snapshots: the immutable, scrape-cycle-scoped inputs.
//!
//! Field names follow the controller JSON. Everything numeric is a
//! [`FlexNum`] because the controller mixes number and string encodings
//! across firmware versions; sub-objects that some firmware omits are
//! `Option` so their absence can be skipped instead of zero-filled.

use serde::Deserialize;

use crate::flex::FlexNum;

/// One access-point snapshot as fetched from the device inventory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UapSnapshot {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site_name: String,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub uptime: FlexNum,
    #[serde(default)]
    pub bytes: FlexNum,
    #[serde(default)]
    pub tx_bytes: FlexNum,
    #[serde(default)]
    pub rx_bytes: FlexNum,
    #[serde(rename = "user-num_sta", default)]
    pub user_num_sta: FlexNum,
    #[serde(rename = "guest-num_sta", default)]
    pub guest_num_sta: FlexNum,
    #[serde(default)]
    pub sys_stats: SysStats,
    #[serde(rename = "system-stats", default)]
    pub system_stats: SystemStats,

    // Device-level byte accounting; absent on some firmware variants.
    #[serde(rename = "bytes-d", default)]
    pub bytes_d: Option<FlexNum>,
    #[serde(rename = "tx_bytes-d", default)]
    pub tx_bytes_d: Option<FlexNum>,
    #[serde(rename = "rx_bytes-d", default)]
    pub rx_bytes_d: Option<FlexNum>,
    #[serde(rename = "bytes-r", default)]
    pub bytes_r: Option<FlexNum>,

    #[serde(default)]
    pub stat: Option<DeviceStat>,
    #[serde(default)]
    pub vap_table: Vec<VapEntry>,
    #[serde(default)]
    pub radio_table: Vec<RadioEntry>,
    #[serde(default)]
    pub radio_table_stats: Vec<RadioStatsEntry>,
}

fn default_type() -> String {
    "uap".to_string()
}

/// Host-level load and memory figures reported by the device OS.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysStats {
    #[serde(default)]
    pub loadavg_1: FlexNum,
    #[serde(default)]
    pub loadavg_5: FlexNum,
    #[serde(default)]
    pub loadavg_15: FlexNum,
    #[serde(default)]
    pub mem_buffer: FlexNum,
    #[serde(default)]
    pub mem_total: FlexNum,
    #[serde(default)]
    pub mem_used: FlexNum,
}

/// Controller-computed utilization percentages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemStats {
    #[serde(default)]
    pub cpu: FlexNum,
    #[serde(default)]
    pub mem: FlexNum,
}

/// Nested stat container; the access-point block itself may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceStat {
    #[serde(default)]
    pub ap: Option<ApStats>,
}

/// Wireless counters split into user and guest sub-populations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApStats {
    #[serde(rename = "user-wifi_tx_dropped", default)]
    pub user_wifi_tx_dropped: FlexNum,
    #[serde(rename = "user-rx_errors", default)]
    pub user_rx_errors: FlexNum,
    #[serde(rename = "user-rx_dropped", default)]
    pub user_rx_dropped: FlexNum,
    #[serde(rename = "user-rx_frags", default)]
    pub user_rx_frags: FlexNum,
    #[serde(rename = "user-rx_crypts", default)]
    pub user_rx_crypts: FlexNum,
    #[serde(rename = "user-tx_packets", default)]
    pub user_tx_packets: FlexNum,
    #[serde(rename = "user-tx_bytes", default)]
    pub user_tx_bytes: FlexNum,
    #[serde(rename = "user-tx_errors", default)]
    pub user_tx_errors: FlexNum,
    #[serde(rename = "user-tx_dropped", default)]
    pub user_tx_dropped: FlexNum,
    #[serde(rename = "user-tx_retries", default)]
    pub user_tx_retries: FlexNum,
    #[serde(rename = "user-rx_packets", default)]
    pub user_rx_packets: FlexNum,
    #[serde(rename = "user-rx_bytes", default)]
    pub user_rx_bytes: FlexNum,
    #[serde(rename = "user-wifi_tx_attempts", default)]
    pub user_wifi_tx_attempts: FlexNum,
    #[serde(rename = "user-mac_filter_rejections", default)]
    pub user_mac_filter_rejections: FlexNum,

    #[serde(rename = "guest-wifi_tx_dropped", default)]
    pub guest_wifi_tx_dropped: FlexNum,
    #[serde(rename = "guest-rx_errors", default)]
    pub guest_rx_errors: FlexNum,
    #[serde(rename = "guest-rx_dropped", default)]
    pub guest_rx_dropped: FlexNum,
    #[serde(rename = "guest-rx_frags", default)]
    pub guest_rx_frags: FlexNum,
    #[serde(rename = "guest-rx_crypts", default)]
    pub guest_rx_crypts: FlexNum,
    #[serde(rename = "guest-tx_packets", default)]
    pub guest_tx_packets: FlexNum,
    #[serde(rename = "guest-tx_bytes", default)]
    pub guest_tx_bytes: FlexNum,
    #[serde(rename = "guest-tx_errors", default)]
    pub guest_tx_errors: FlexNum,
    #[serde(rename = "guest-tx_dropped", default)]
    pub guest_tx_dropped: FlexNum,
    #[serde(rename = "guest-tx_retries", default)]
    pub guest_tx_retries: FlexNum,
    #[serde(rename = "guest-rx_packets", default)]
    pub guest_rx_packets: FlexNum,
    #[serde(rename = "guest-rx_bytes", default)]
    pub guest_rx_bytes: FlexNum,
    #[serde(rename = "guest-wifi_tx_attempts", default)]
    pub guest_wifi_tx_attempts: FlexNum,
    #[serde(rename = "guest-mac_filter_rejections", default)]
    pub guest_mac_filter_rejections: FlexNum,
}

/// One configured wireless network (VAP) bound to a physical radio.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VapEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bssid: String,
    #[serde(default)]
    pub radio: String,
    #[serde(default)]
    pub radio_name: String,
    #[serde(default)]
    pub essid: String,
    #[serde(default)]
    pub usage: String,
    /// Gates export: down entries are suppressed, not zeroed.
    #[serde(default)]
    pub up: bool,

    #[serde(default)]
    pub ccq: FlexNum,
    #[serde(default)]
    pub mac_filter_rejections: FlexNum,
    #[serde(default)]
    pub num_satisfaction_sta: FlexNum,
    #[serde(default)]
    pub avg_client_signal: FlexNum,
    #[serde(default)]
    pub satisfaction: FlexNum,
    #[serde(default)]
    pub satisfaction_now: FlexNum,
    #[serde(default)]
    pub dns_avg_latency: FlexNum,
    #[serde(default)]
    pub rx_bytes: FlexNum,
    #[serde(default)]
    pub rx_crypts: FlexNum,
    #[serde(default)]
    pub rx_dropped: FlexNum,
    #[serde(default)]
    pub rx_errors: FlexNum,
    #[serde(default)]
    pub rx_frags: FlexNum,
    #[serde(default)]
    pub rx_nwids: FlexNum,
    #[serde(default)]
    pub rx_packets: FlexNum,
    #[serde(default)]
    pub tx_bytes: FlexNum,
    #[serde(default)]
    pub tx_dropped: FlexNum,
    #[serde(default)]
    pub tx_errors: FlexNum,
    #[serde(default)]
    pub tx_packets: FlexNum,
    #[serde(default)]
    pub tx_power: FlexNum,
    #[serde(default)]
    pub tx_retries: FlexNum,
    #[serde(default)]
    pub tx_combined_retries: FlexNum,
    #[serde(default)]
    pub tx_data_mpdu_bytes: FlexNum,
    #[serde(default)]
    pub tx_rts_retries: FlexNum,
    #[serde(default)]
    pub tx_success: FlexNum,
    #[serde(default)]
    pub tx_total: FlexNum,

    #[serde(default)]
    pub tx_tcp_stats: TcpLatency,
    #[serde(default)]
    pub rx_tcp_stats: TcpLatency,
    #[serde(default)]
    pub wifi_tx_latency_mov: MovingLatency,
}

/// TCP goodput and latency stats for one direction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TcpLatency {
    #[serde(default)]
    pub goodbytes: FlexNum,
    #[serde(default)]
    pub lat_avg: FlexNum,
    #[serde(default)]
    pub lat_max: FlexNum,
    #[serde(default)]
    pub lat_min: FlexNum,
}

/// Firmware-maintained moving-average latency summary, consumed verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovingLatency {
    #[serde(default)]
    pub avg: FlexNum,
    #[serde(default)]
    pub max: FlexNum,
    #[serde(default)]
    pub min: FlexNum,
    #[serde(default)]
    pub total: FlexNum,
    #[serde(default)]
    pub total_count: FlexNum,
}

/// Static per-radio capabilities; a radio has no counters of its own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RadioEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub radio: String,
    #[serde(default)]
    pub current_antenna_gain: FlexNum,
    #[serde(default)]
    pub ht: FlexNum,
    #[serde(default)]
    pub max_txpower: FlexNum,
    #[serde(default)]
    pub min_txpower: FlexNum,
    #[serde(default)]
    pub nss: FlexNum,
    #[serde(default)]
    pub radio_caps: FlexNum,
}

/// Dynamic per-radio stats, joined against [`RadioEntry`] by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RadioStatsEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tx_power: FlexNum,
    #[serde(default)]
    pub ast_be_xmit: FlexNum,
    #[serde(default)]
    pub channel: FlexNum,
    #[serde(default)]
    pub cu_self_rx: FlexNum,
    #[serde(default)]
    pub cu_self_tx: FlexNum,
    #[serde(default)]
    pub extchannel: FlexNum,
    #[serde(default)]
    pub gain: FlexNum,
    #[serde(rename = "user-num_sta", default)]
    pub user_num_sta: FlexNum,
    #[serde(rename = "guest-num_sta", default)]
    pub guest_num_sta: FlexNum,
    #[serde(default)]
    pub tx_packets: FlexNum,
    #[serde(default)]
    pub tx_retries: FlexNum,
}

/// One connected station.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientSnapshot {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub site_id: String,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub network_id: String,
    #[serde(default)]
    pub ap_mac: String,
    #[serde(default)]
    pub gw_mac: String,
    #[serde(default)]
    pub sw_mac: String,
    #[serde(default)]
    pub ap_name: String,
    #[serde(default)]
    pub gw_name: String,
    #[serde(default)]
    pub sw_name: String,
    #[serde(default)]
    pub radio_name: String,
    #[serde(default)]
    pub radio: String,
    #[serde(default)]
    pub radio_proto: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub channel: FlexNum,
    #[serde(default)]
    pub vlan: FlexNum,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub essid: String,
    #[serde(default)]
    pub bssid: String,
    #[serde(default)]
    pub radio_description: String,

    #[serde(default)]
    pub anomalies: FlexNum,
    #[serde(rename = "bytes-r", default)]
    pub bytes_r: FlexNum,
    #[serde(default)]
    pub ccq: FlexNum,
    #[serde(default)]
    pub noise: FlexNum,
    #[serde(default)]
    pub roam_count: FlexNum,
    #[serde(default)]
    pub rssi: FlexNum,
    #[serde(default)]
    pub rx_bytes: FlexNum,
    #[serde(rename = "rx_bytes-r", default)]
    pub rx_bytes_r: FlexNum,
    #[serde(default)]
    pub rx_packets: FlexNum,
    #[serde(default)]
    pub rx_rate: FlexNum,
    #[serde(default)]
    pub signal: FlexNum,
    #[serde(default)]
    pub tx_bytes: FlexNum,
    #[serde(rename = "tx_bytes-r", default)]
    pub tx_bytes_r: FlexNum,
    #[serde(default)]
    pub tx_packets: FlexNum,
    #[serde(default)]
    pub tx_power: FlexNum,
    #[serde(default)]
    pub tx_rate: FlexNum,
    #[serde(default)]
    pub uptime: FlexNum,
    #[serde(default)]
    pub wifi_tx_attempts: FlexNum,
    #[serde(rename = "wired-rx_bytes", default)]
    pub wired_rx_bytes: FlexNum,
    #[serde(rename = "wired-rx_bytes-r", default)]
    pub wired_rx_bytes_r: FlexNum,
    #[serde(rename = "wired-rx_packets", default)]
    pub wired_rx_packets: FlexNum,
    #[serde(rename = "wired-tx_bytes", default)]
    pub wired_tx_bytes: FlexNum,
    #[serde(rename = "wired-tx_bytes-r", default)]
    pub wired_tx_bytes_r: FlexNum,
    #[serde(rename = "wired-tx_packets", default)]
    pub wired_tx_packets: FlexNum,

    #[serde(default)]
    pub dpi_stats: DpiStats,
}

/// Deep-packet-inspection classification plus its traffic counters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DpiStats {
    #[serde(default)]
    pub app: FlexNum,
    #[serde(default)]
    pub cat: FlexNum,
    #[serde(default)]
    pub rx_bytes: FlexNum,
    #[serde(default)]
    pub rx_packets: FlexNum,
    #[serde(default)]
    pub tx_bytes: FlexNum,
    #[serde(default)]
    pub tx_packets: FlexNum,
}

/// A full scrape-cycle dump as handed over by the collection orchestrator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ControllerDump {
    #[serde(default)]
    pub uaps: Vec<UapSnapshot>,
    #[serde(default)]
    pub clients: Vec<ClientSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uap_snapshot_tolerates_sparse_json() {
        let json = r#"{
            "_id": "abc123",
            "name": "office-ap",
            "site_name": "default",
            "uptime": "86400",
            "stat": {}
        }"#;

        let snap: UapSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.name, "office-ap");
        assert_eq!(snap.kind, "uap");
        assert_eq!(snap.uptime.val, 86400.0);
        assert!(snap.stat.as_ref().unwrap().ap.is_none());
        assert!(snap.bytes_d.is_none());
        assert!(snap.vap_table.is_empty());
    }

    #[test]
    fn test_uap_snapshot_system_fields() {
        let json = r#"{
            "name": "office-ap",
            "tx_bytes": 70000,
            "rx_bytes": "53456",
            "user-num_sta": 3,
            "guest-num_sta": 1,
            "sys_stats": {"loadavg_1": "0.52", "mem_total": 512000000, "mem_used": 256000000},
            "system-stats": {"cpu": "25.0", "mem": 50}
        }"#;

        let snap: UapSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.tx_bytes.val, 70000.0);
        assert_eq!(snap.rx_bytes.val, 53456.0);
        assert_eq!(snap.user_num_sta.val, 3.0);
        assert_eq!(snap.guest_num_sta.val, 1.0);
        assert_eq!(snap.sys_stats.loadavg_1.val, 0.52);
        assert_eq!(snap.system_stats.cpu.val, 25.0);
        assert_eq!(snap.system_stats.mem.val, 50.0);
    }

    #[test]
    fn test_vap_entry_nested_latency() {
        let json = r#"{
            "name": "guest-wifi",
            "up": true,
            "ccq": 900,
            "tx_tcp_stats": {"goodbytes": 1000, "lat_avg": "12", "lat_max": 40, "lat_min": 2},
            "wifi_tx_latency_mov": {"avg": 5, "max": 20, "min": 1, "total": 500, "total_count": 100}
        }"#;

        let vap: VapEntry = serde_json::from_str(json).unwrap();
        assert!(vap.up);
        assert_eq!(vap.ccq.val, 900.0);
        assert_eq!(vap.tx_tcp_stats.lat_avg.val, 12.0);
        assert_eq!(vap.wifi_tx_latency_mov.total_count.val, 100.0);
        // rx stats absent from the payload, present flag says so.
        assert!(!vap.rx_tcp_stats.goodbytes.present);
    }

    #[test]
    fn test_client_snapshot_wired_and_dpi_fields() {
        let json = r#"{
            "_id": "c1",
            "mac": "aa:bb:cc:dd:ee:ff",
            "vlan": 30,
            "channel": "36",
            "wired-tx_bytes": 4096,
            "dpi_stats": {"app": 4, "cat": 10, "tx_bytes": 99}
        }"#;

        let c: ClientSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(c.vlan.txt, "30");
        assert_eq!(c.channel.txt, "36");
        assert_eq!(c.wired_tx_bytes.val, 4096.0);
        assert_eq!(c.dpi_stats.tx_bytes.val, 99.0);
    }
}
