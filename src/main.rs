//! Map a controller snapshot dump to time-series samples.
//!
//! Reads a JSON dump as fetched by a collection orchestrator, runs the
//! category exporters over it and writes the resulting samples to stdout as
//! JSON lines. Snapshot fetching itself lives outside this binary.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde_json::json;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use unisight::config::LogFormat;
use unisight::snapshot::ControllerDump;
use unisight::{ChannelSink, ClientExporter, ExporterConfig, Registry, UapExporter};

/// Map UniFi controller telemetry to time-series samples.
#[derive(Parser, Debug)]
#[command(name = "unisight")]
#[command(about = "Map UniFi controller snapshots to labeled time-series samples")]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON5 format).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a controller snapshot dump (JSON).
    #[arg(short, long, required_unless_present = "describe")]
    input: Option<PathBuf>,

    /// Print every registered metric descriptor as JSON lines and exit.
    #[arg(long)]
    describe: bool,

    /// Metric namespace prefix (overrides config).
    #[arg(long)]
    prefix: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides config.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = if let Some(path) = &args.config {
        ExporterConfig::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?
    } else {
        ExporterConfig::default()
    };

    if let Some(prefix) = args.prefix {
        config.metrics.prefix = prefix;
        config.validate()?;
    }

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let filter =
        EnvFilter::from_default_env().add_directive(format!("unisight={level}").parse()?);
    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    let registry = Arc::new(Registry::new(&config.metrics.prefix));
    info!(
        prefix = %config.metrics.prefix,
        metrics = registry.len(),
        "descriptor registry built"
    );

    if args.describe {
        let mut descs: Vec<_> = registry.descriptors().map(|(_, d)| d).collect();
        descs.sort_by(|a, b| a.name.cmp(&b.name));
        for d in descs {
            let line = json!({
                "metric": d.name,
                "kind": d.kind.as_str(),
                "help": d.help,
                "labels": d.labels,
            });
            println!("{line}");
        }
        return Ok(());
    }

    let input = args.input.context("--input is required")?;
    let content = std::fs::read_to_string(&input)
        .with_context(|| format!("reading snapshot dump {}", input.display()))?;
    let dump: ControllerDump =
        serde_json::from_str(&content).context("decoding snapshot dump")?;

    let (sink, mut rx) = ChannelSink::new(1024);

    // Drain batches concurrently and print one JSON line per sample, with
    // label values zipped against the registered label names.
    let printer_registry = registry.clone();
    let printer = tokio::spawn(async move {
        let mut total = 0usize;
        while let Some(batch) = rx.recv().await {
            for s in &batch {
                let Some(desc) = printer_registry.get(s.id) else {
                    error!(id = s.id, "sample for unregistered metric");
                    continue;
                };
                let labels: serde_json::Map<String, serde_json::Value> = desc
                    .labels
                    .iter()
                    .zip(&s.labels)
                    .map(|(k, v)| (k.to_string(), json!(v)))
                    .collect();
                let line = json!({
                    "metric": desc.name,
                    "kind": s.kind.as_str(),
                    "value": s.value,
                    "labels": labels,
                });
                println!("{line}");
            }
            total += batch.len();
        }
        total
    });

    let uap_exporter = UapExporter::new(&registry, &sink);
    for uap in &dump.uaps {
        debug!(device = %uap.name, "exporting access point");
        uap_exporter.export(uap);
    }

    let client_exporter = ClientExporter::new(&registry, &sink);
    for client in &dump.clients {
        debug!(mac = %client.mac, "exporting client");
        client_exporter.export(client);
    }

    drop(sink);
    let total = printer.await.context("printer task failed")?;

    info!(
        devices = dump.uaps.len(),
        clients = dump.clients.len(),
        samples = total,
        "export finished"
    );

    Ok(())
}
