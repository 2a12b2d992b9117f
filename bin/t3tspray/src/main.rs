//! Spray preview.
//!
//! Loads a configuration, prints the planned candidates with their binary
//! records, then drives both trigger handlers against a recording target so
//! the output shows exactly which calls a live host would receive.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use t3tspray_config::SprayConfig;
use t3tspray_primitives::ShortCodePolicy;
use t3tspray_spray::{EntryOutcome, PlannedEntry, RecordingTarget, SprayEntry, SprayReport};
use tracing::info;

/// Preview command line arguments.
#[derive(Parser, Debug)]
#[command(name = "t3tspray")]
#[command(about = "Preview the identifiers a spray configuration would register")]
struct Args {
	/// TOML configuration file; built-in defaults when omitted
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Short code canonicalization policy
	#[arg(short, long, value_enum, default_value_t = PolicyArg::PadLeft)]
	policy: PolicyArg,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
	PadLeft,
	ExactTail,
}

impl From<PolicyArg> for ShortCodePolicy {
	fn from(arg: PolicyArg) -> Self {
		match arg {
			PolicyArg::PadLeft => Self::PadLeft,
			PolicyArg::ExactTail => Self::ExactTail,
		}
	}
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let config = match &args.config {
		Some(path) => SprayConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
		None => SprayConfig::default(),
	};
	let entry = SprayEntry::with_policy(config, args.policy.into());
	info!(
		enabled = entry.config().enabled,
		codes = entry.config().short_codes.len(),
		"configuration loaded"
	);
	print_plan(entry.plan());

	let target = RecordingTarget::new();
	print_report("identifier", &entry.on_cache_constructed(&target));
	print_report("binary", &entry.on_binary_register(&target));

	Ok(())
}

fn print_plan(plan: &[PlannedEntry]) {
	println!("plan:");
	for entry in plan {
		let ordinal = entry.ordinal();
		match entry {
			PlannedEntry::Candidate(candidate) => println!(
				"  #{ordinal:<3} SC={} IDm={} record=[{}]",
				candidate.short_code,
				candidate.idm,
				candidate.record()
			),
			PlannedEntry::Rejected { raw, .. } => println!("  #{ordinal:<3} rejected {raw:?}"),
		}
	}
}

fn print_report(surface: &str, report: &SprayReport) {
	match report {
		SprayReport::Disabled => println!("{surface}: disabled"),
		SprayReport::AlreadyFired => println!("{surface}: already fired"),
		SprayReport::Unavailable(error) => println!("{surface}: unavailable ({error})"),
		SprayReport::Completed(outcomes) => {
			println!(
				"{surface}: {} registered, {} failed, {} skipped",
				report.registered(),
				report.failed(),
				report.skipped()
			);
			for outcome in outcomes {
				if let EntryOutcome::Failed { candidate, error } = outcome {
					println!("  #{} SC={} failed: {error}", outcome.ordinal(), candidate.short_code);
				}
			}
		}
	}
}
