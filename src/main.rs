use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use reconcile_lib::audit::match_audit_findings;
use reconcile_lib::models::{AuditFinding, BuyerIsq, MatchedSpecPair, Specification, WebsiteIsqs};
use reconcile_lib::pipeline::run_reconciliation;
use reconcile_lib::reconcile::selector::DEFAULT_BUYER_ISQ_COUNT;

/// Reconcile seller-drafted specifications against website-derived ISQs and
/// surface buyer-facing search questions.
#[derive(Parser, Debug)]
#[command(name = "reconcile", version)]
struct Args {
    /// Path to the seller specification JSON (array of specifications)
    seller_specs: PathBuf,

    /// Path to the website ISQ JSON ({config, keys, buyers})
    website_isqs: PathBuf,

    /// Optional path to audit findings JSON; matched spec names are reported
    #[arg(long)]
    audit: Option<PathBuf>,

    /// Number of buyer ISQs to surface (falls back to BUYER_ISQ_LIMIT, then 2)
    #[arg(long)]
    top: Option<usize>,

    /// Write the report here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct AuditMatch {
    specification: String,
    matched_spec: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report {
    matched_pairs: Vec<MatchedSpecPair>,
    buyer_isqs: Vec<BuyerIsq>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audit_matches: Option<Vec<AuditMatch>>,
}

fn buyer_isq_limit(args: &Args) -> usize {
    if let Some(top) = args.top {
        return top;
    }
    std::env::var("BUYER_ISQ_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_BUYER_ISQ_COUNT)
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let seller_raw = fs::read_to_string(&args.seller_specs)
        .with_context(|| format!("Failed to read seller specs from {:?}", args.seller_specs))?;
    let seller_specs: Vec<Specification> =
        serde_json::from_str(&seller_raw).context("Failed to parse seller specs JSON")?;

    let website_raw = fs::read_to_string(&args.website_isqs)
        .with_context(|| format!("Failed to read website ISQs from {:?}", args.website_isqs))?;
    let website_isqs: WebsiteIsqs =
        serde_json::from_str(&website_raw).context("Failed to parse website ISQ JSON")?;

    info!(
        "Loaded {} seller specs and website ISQs (config: {}, keys: {}, buyers: {})",
        seller_specs.len(),
        website_isqs.config.is_some(),
        website_isqs.keys.len(),
        website_isqs.buyers.len()
    );

    let (matched_pairs, buyer_isqs) =
        run_reconciliation(&seller_specs, &website_isqs, buyer_isq_limit(&args));

    let audit_matches = match &args.audit {
        Some(path) => {
            let audit_raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read audit findings from {:?}", path))?;
            let findings: Vec<AuditFinding> =
                serde_json::from_str(&audit_raw).context("Failed to parse audit findings JSON")?;
            let matches = match_audit_findings(&findings, &seller_specs);
            Some(
                findings
                    .iter()
                    .zip(matches)
                    .map(|(finding, idx)| AuditMatch {
                        specification: finding.specification.clone(),
                        matched_spec: idx.map(|i| seller_specs[i].name.clone()),
                    })
                    .collect(),
            )
        }
        None => None,
    };

    let report = Report {
        matched_pairs,
        buyer_isqs,
        audit_matches,
    };
    let rendered =
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {:?}", path))?;
            info!("Report written to {:?}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
