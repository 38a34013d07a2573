use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "chromagraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Criterion baseline to save results under
        #[arg(long, default_value = "current")]
        baseline: String,
    },
}

const BENCHES: &[&str] = &[
    "sequence_benchmark",
    "coloring_benchmark",
    "shortest_path_benchmark",
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            baseline,
        } => {
            if !report_only {
                run_benchmarks(quick, &baseline)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--benches", "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for &bench in BENCHES {
        println!("\n>>> Running {bench}");
        let start = Instant::now();
        let status = Command::new("cargo")
            .args(["bench", "--bench", bench, "--"])
            .args(criterion_args(quick, baseline))
            .status()
            .with_context(|| format!("Failed to run bench {bench}"))?;

        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark {bench} failed");
        }
    }

    Ok(())
}

/// Arguments handed to the criterion runner after `--`.
fn criterion_args(quick: bool, baseline: &str) -> Vec<String> {
    let mut args = vec!["--save-baseline".to_string(), baseline.to_string()];
    if quick {
        args.extend(
            ["--measurement-time", "0.1", "--noplot", "--sample-size", "10"].map(String::from),
        );
    }
    args
}

/// Ops/s per workload, keyed by baseline.
type Results = BTreeMap<String, HashMap<String, f64>>;

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(report_path, render_report(&results))
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// One markdown row per workload, one column per baseline.
fn render_report(results: &Results) -> String {
    let baselines: BTreeSet<&str> = results
        .values()
        .flat_map(|by_baseline| by_baseline.keys().map(String::as_str))
        .collect();

    let row = |cells: Vec<String>| format!("| {} |\n", cells.join(" | "));
    let mut header = vec!["Workload".to_string()];
    header.extend(baselines.iter().map(|baseline| format!("{baseline} (Ops/s)")));
    let rule = vec!["---".to_string(); header.len()];

    let mut report = String::from("# Benchmark Report\n\n");
    report.push_str(&row(header));
    report.push_str(&row(rule));
    for (workload, by_baseline) in results {
        let mut cells = vec![workload.clone()];
        cells.extend(baselines.iter().map(|&baseline| {
            by_baseline
                .get(baseline)
                .map_or_else(|| "N/A".to_string(), |&ops| format_ops(ops))
        }));
        report.push_str(&row(cells));
    }
    report
}

fn format_ops(ops: f64) -> String {
    const UNITS: [(f64, &str); 2] = [(1e6, "M"), (1e3, "K")];
    UNITS
        .iter()
        .find(|&&(scale, _)| ops >= scale)
        .map_or_else(|| format!("{ops:.0}"), |&(scale, unit)| format!("{:.2}{unit}", ops / scale))
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_string)
}

fn collect_results(dir: &Path, results: &mut Results) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: .../workload/baseline/estimates.json
        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let (Some(baseline), Some(workload)) = (file_name(baseline_dir), file_name(workload_dir)) else {
            continue;
        };
        if baseline == "report" || baseline == "new" || baseline == "base" || workload == "report" {
            continue;
        }

        let elements = read_json(&workload_dir.join("benchmark.json"))
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64());

        let Some(time_ns) = read_json(&path)
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64())
        else {
            continue;
        };
        if time_ns <= 0.0 {
            continue;
        }

        let metric = elements.unwrap_or(1.0) * 1e9 / time_ns;
        results.entry(workload).or_default().insert(baseline, metric);
    }
}
