//! Integration tests for the snapshot-to-sample mapping.
//!
//! These exercise the full exporter paths: population splitting, VAP
//! suppression, the radio table join, unit conversions and the label-arity
//! contract against the descriptor registry.

use unisight::snapshot::{
    ApStats, ClientSnapshot, DeviceStat, RadioEntry, RadioStatsEntry, SysStats, SystemStats,
    UapSnapshot, VapEntry,
};
use unisight::{BufferSink, ClientExporter, FlexNum, Registry, Sample, UapExporter};

fn registry() -> Registry {
    Registry::new("unifi")
}

/// An access point with a stat block, one up and one down VAP, and two
/// radios of which only one has a stats row.
fn ap_fixture() -> UapSnapshot {
    UapSnapshot {
        id: "ap-id-1".to_string(),
        name: "office-ap".to_string(),
        site_name: "default".to_string(),
        kind: "uap".to_string(),
        model: "U6-Pro".to_string(),
        serial: "SER123".to_string(),
        version: "7.0.20".to_string(),
        mac: "aa:bb:cc:00:11:22".to_string(),
        ip: "10.0.0.5".to_string(),
        uptime: FlexNum::from(86400u64),
        bytes: FlexNum::from(123456.0),
        tx_bytes: FlexNum::from(70000.0),
        rx_bytes: FlexNum::from(53456.0),
        user_num_sta: FlexNum::from(3.0),
        guest_num_sta: FlexNum::from(1.0),
        sys_stats: SysStats {
            loadavg_1: FlexNum::from(0.52),
            mem_total: FlexNum::from(512_000_000.0),
            mem_used: FlexNum::from(256_000_000.0),
            ..Default::default()
        },
        system_stats: SystemStats {
            cpu: FlexNum::from(25.0),
            mem: FlexNum::from(50.0),
        },
        bytes_d: Some(FlexNum::from(1000.0)),
        tx_bytes_d: Some(FlexNum::from(600.0)),
        rx_bytes_d: Some(FlexNum::from(400.0)),
        bytes_r: Some(FlexNum::from(50.0)),
        stat: Some(DeviceStat {
            ap: Some(ApStats {
                user_rx_bytes: FlexNum::from(9000.0),
                guest_rx_bytes: FlexNum::from(100.0),
                user_tx_packets: FlexNum::from(777.0),
                ..Default::default()
            }),
        }),
        vap_table: vec![
            VapEntry {
                name: "guest-wifi".to_string(),
                bssid: "aa:bb:cc:00:11:23".to_string(),
                radio: "na".to_string(),
                radio_name: "wifi1".to_string(),
                essid: "guest".to_string(),
                usage: "guest".to_string(),
                up: true,
                ccq: FlexNum::from(900.0),
                satisfaction: FlexNum::from(95.0),
                dns_avg_latency: FlexNum::from(1500.0),
                ..Default::default()
            },
            VapEntry {
                name: "down-wifi".to_string(),
                bssid: "aa:bb:cc:00:11:24".to_string(),
                up: false,
                ccq: FlexNum::from(500.0),
                ..Default::default()
            },
        ],
        radio_table: vec![
            RadioEntry {
                name: "wifi0".to_string(),
                radio: "ng".to_string(),
                current_antenna_gain: FlexNum::from(3.0),
                ht: FlexNum::from(20.0),
                max_txpower: FlexNum::from(22.0),
                min_txpower: FlexNum::from(5.0),
                nss: FlexNum::from(2.0),
                radio_caps: FlexNum::from(1365.0),
            },
            RadioEntry {
                name: "wifi1".to_string(),
                radio: "na".to_string(),
                nss: FlexNum::from(4.0),
                ..Default::default()
            },
        ],
        radio_table_stats: vec![RadioStatsEntry {
            name: "wifi1".to_string(),
            tx_power: FlexNum::from(20.0),
            channel: FlexNum::from(44.0),
            cu_self_rx: FlexNum::from(12.0),
            cu_self_tx: FlexNum::from(8.0),
            user_num_sta: FlexNum::from(7.0),
            guest_num_sta: FlexNum::from(2.0),
            ..Default::default()
        }],
    }
}

fn client_fixture() -> ClientSnapshot {
    ClientSnapshot {
        id: "client-1".to_string(),
        mac: "de:ad:be:ef:00:01".to_string(),
        site_name: "default".to_string(),
        ap_name: "office-ap".to_string(),
        name: "laptop".to_string(),
        channel: FlexNum::from("44"),
        vlan: FlexNum::from(30u64),
        tx_rate: FlexNum::from(866_000.0),
        wired_tx_bytes: FlexNum::from(4096.0),
        rx_bytes: FlexNum::from(1_000_000.0),
        ..Default::default()
    }
}

fn export_ap(snap: &UapSnapshot) -> Vec<Sample> {
    let registry = registry();
    let sink = BufferSink::new();
    UapExporter::new(&registry, &sink).export(snap);
    sink.take()
}

fn export_client(snap: &ClientSnapshot) -> Vec<Sample> {
    let registry = registry();
    let sink = BufferSink::new();
    ClientExporter::new(&registry, &sink).export(snap);
    sink.take()
}

fn with_id<'a>(samples: &'a [Sample], id: &str) -> Vec<&'a Sample> {
    samples.iter().filter(|s| s.id == id).collect()
}

#[test]
fn test_down_vap_contributes_nothing() {
    let samples = export_ap(&ap_fixture());
    assert!(
        !samples
            .iter()
            .any(|s| s.labels.iter().any(|l| l == "down-wifi")),
        "down VAP must be suppressed, not zeroed"
    );
}

#[test]
fn test_vap_ccq_end_to_end() {
    let samples = export_ap(&ap_fixture());
    let ccq = with_id(&samples, "vap_ccq");
    assert_eq!(ccq.len(), 1, "only the up VAP exports ccq");

    let s = ccq[0];
    assert_eq!(s.value, 0.9);
    assert_eq!(s.labels[0], "guest-wifi");
    assert_eq!(s.labels[s.labels.len() - 2], "default");
    assert_eq!(s.labels[s.labels.len() - 1], "office-ap");
}

#[test]
fn test_ratio_and_latency_conversions() {
    let mut snap = ap_fixture();
    snap.vap_table[0].ccq = FlexNum::from(250.0);
    let samples = export_ap(&snap);

    assert_eq!(with_id(&samples, "vap_ccq")[0].value, 0.25);
    assert_eq!(with_id(&samples, "vap_satisfaction")[0].value, 0.95);
    assert_eq!(with_id(&samples, "vap_dns_latency_average")[0].value, 1.5);
}

#[test]
fn test_radio_without_stats_exports_static_only() {
    let samples = export_ap(&ap_fixture());
    let wifi0: Vec<_> = samples
        .iter()
        .filter(|s| s.id.starts_with("radio_") && s.labels[0] == "wifi0")
        .collect();

    let mut ids: Vec<_> = wifi0.iter().map(|s| s.id).collect();
    ids.sort_unstable();
    assert_eq!(
        ids,
        vec![
            "radio_caps",
            "radio_current_antenna_gain",
            "radio_ht",
            "radio_max_transmit_power",
            "radio_min_transmit_power",
            "radio_nss",
        ],
        "unjoined radio must emit static gauges only, no zero-filled dynamics"
    );
}

#[test]
fn test_radio_static_labels_match_radio_identity() {
    let samples = export_ap(&ap_fixture());
    for s in with_id(&samples, "radio_nss") {
        assert_eq!(s.labels.len(), 4);
        assert!(s.labels[0] == "wifi0" || s.labels[0] == "wifi1");
        assert_eq!(s.labels[2], "default");
        assert_eq!(s.labels[3], "office-ap");
    }
}

#[test]
fn test_radio_join_station_counts_per_population() {
    let samples = export_ap(&ap_fixture());
    let stations = with_id(&samples, "radio_stations");
    assert_eq!(stations.len(), 2, "one station count per population");

    let user = stations
        .iter()
        .find(|s| s.labels.last().unwrap() == "user")
        .unwrap();
    let guest = stations
        .iter()
        .find(|s| s.labels.last().unwrap() == "guest")
        .unwrap();
    assert_eq!(user.value, 7.0);
    assert_eq!(guest.value, 2.0);
    assert_eq!(user.labels[0], "wifi1");

    // Channel utilization is rescaled from percent.
    assert_eq!(
        with_id(&samples, "radio_channel_utilization_receive")[0].value,
        0.12
    );
}

#[test]
fn test_radio_join_takes_first_match() {
    let mut snap = ap_fixture();
    snap.radio_table_stats.push(RadioStatsEntry {
        name: "wifi1".to_string(),
        channel: FlexNum::from(161.0),
        ..Default::default()
    });

    let samples = export_ap(&snap);
    let channels = with_id(&samples, "radio_channel");
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].value, 44.0, "duplicate rows pick the first");
}

#[test]
fn test_stat_block_population_split() {
    let samples = export_ap(&ap_fixture());
    let rx_bytes = with_id(&samples, "stat_receive_bytes");
    assert_eq!(rx_bytes.len(), 2, "same identity, one sample per population");

    let user = rx_bytes.iter().find(|s| s.labels[0] == "user").unwrap();
    let guest = rx_bytes.iter().find(|s| s.labels[0] == "guest").unwrap();
    assert_eq!(user.value, 9000.0);
    assert_eq!(guest.value, 100.0);

    // All 14 counters appear exactly twice.
    let stat_count = samples
        .iter()
        .filter(|s| s.id.starts_with("stat_"))
        .count();
    assert_eq!(stat_count, 28);
}

#[test]
fn test_device_aggregate_metrics() {
    let samples = export_ap(&ap_fixture());

    assert_eq!(with_id(&samples, "device_transmit_bytes")[0].value, 70000.0);
    assert_eq!(with_id(&samples, "device_receive_bytes")[0].value, 53456.0);
    assert_eq!(with_id(&samples, "device_load_average_1")[0].value, 0.52);
    assert_eq!(with_id(&samples, "device_memory_used")[0].value, 256_000_000.0);
    // Utilization percentages land on the unit interval.
    assert_eq!(with_id(&samples, "device_cpu_utilization")[0].value, 0.25);
    assert_eq!(with_id(&samples, "device_memory_utilization")[0].value, 0.5);
}

#[test]
fn test_device_station_counts_per_population() {
    let samples = export_ap(&ap_fixture());
    let stations = with_id(&samples, "device_stations");
    assert_eq!(stations.len(), 2, "one station count per population");

    let user = stations.iter().find(|s| s.labels[0] == "user").unwrap();
    let guest = stations.iter().find(|s| s.labels[0] == "guest").unwrap();
    assert_eq!(user.value, 3.0);
    assert_eq!(guest.value, 1.0);
    assert_eq!(user.labels[1..], guest.labels[1..]);
}

#[test]
fn test_missing_stat_block_skips_stats_only() {
    let mut snap = ap_fixture();
    snap.stat = None;

    let samples = export_ap(&snap);
    assert!(!samples.iter().any(|s| s.id.starts_with("stat_")));
    assert!(!samples.iter().any(|s| s.id.starts_with("device_bytes")));
    // The rest of the device still exports.
    assert_eq!(with_id(&samples, "device_info").len(), 1);
    assert_eq!(with_id(&samples, "device_uptime").len(), 1);
    assert_eq!(with_id(&samples, "device_transmit_bytes").len(), 1);
    assert_eq!(with_id(&samples, "device_stations").len(), 2);
    assert_eq!(with_id(&samples, "vap_ccq").len(), 1);
}

#[test]
fn test_absent_byte_accounting_is_omitted() {
    let mut snap = ap_fixture();
    snap.bytes_d = None;
    snap.bytes_r = None;

    let samples = export_ap(&snap);
    assert!(with_id(&samples, "device_bytes_d").is_empty());
    assert!(with_id(&samples, "device_bytes_rate").is_empty());
    // The ones still present keep exporting.
    assert_eq!(with_id(&samples, "device_transmit_bytes_d")[0].value, 600.0);
}

#[test]
fn test_device_info_sample() {
    let samples = export_ap(&ap_fixture());
    let info = with_id(&samples, "device_info");
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].value, 1.0);
    assert_eq!(info[0].labels.len(), 11);
    // Byte count and uptime ride along as text renderings.
    assert!(info[0].labels.contains(&"123456".to_string()));
    assert!(info[0].labels.contains(&"86400".to_string()));
}

#[test]
fn test_label_arity_matches_registry() {
    let registry = registry();
    let mut samples = export_ap(&ap_fixture());
    samples.extend(export_client(&client_fixture()));

    for s in &samples {
        let desc = registry
            .get(s.id)
            .unwrap_or_else(|| panic!("unregistered metric {}", s.id));
        assert_eq!(
            s.labels.len(),
            desc.labels.len(),
            "label arity mismatch for {}",
            s.id
        );
    }
}

#[test]
fn test_export_is_idempotent() {
    let snap = ap_fixture();
    let first = export_ap(&snap);
    let second = export_ap(&snap);
    assert_eq!(first, second);

    let client = client_fixture();
    assert_eq!(export_client(&client), export_client(&client));
}

#[test]
fn test_client_flat_batch() {
    let samples = export_client(&client_fixture());
    assert_eq!(samples.len(), 30);
    for s in &samples {
        assert_eq!(s.labels.len(), 22);
        assert_eq!(s.labels[1], "de:ad:be:ef:00:01");
        // Channel and VLAN appear as their text renderings.
        assert_eq!(s.labels[16], "44");
        assert_eq!(s.labels[17], "30");
    }
}

#[test]
fn test_client_wired_transmit_bytes_reads_wired_counter() {
    let samples = export_client(&client_fixture());
    let wired = with_id(&samples, "client_wired_transmit_bytes");
    assert_eq!(
        wired[0].value, 4096.0,
        "wired transmit bytes must come from the wired counter, not the transmit rate"
    );
    assert_eq!(with_id(&samples, "client_transmit_rate")[0].value, 866_000.0);
}

#[test]
fn test_client_dpi_fields_flattened() {
    let mut snap = client_fixture();
    snap.dpi_stats.app = FlexNum::from(4.0);
    snap.dpi_stats.tx_bytes = FlexNum::from(2048.0);

    let samples = export_client(&snap);
    let app = with_id(&samples, "client_dpi_application");
    let tx = with_id(&samples, "client_dpi_transmit_bytes");
    assert_eq!(app[0].value, 4.0);
    assert_eq!(tx[0].value, 2048.0);
    // Same label tuple as every other client metric.
    assert_eq!(app[0].labels, samples[0].labels);
}
