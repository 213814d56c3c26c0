mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use config::{ConfigMerger, ReportFormat};
use fencecalc_domain::{Estimator, InputError, PRICED_KINDS, diff_price_lists};
use fencecalc_render::{render_estimate_md, render_price_changes_md};
use fencecalc_types::estimate::ToolInfo;
use fencecalc_types::job::EstimationInput;
use fencecalc_types::pricing::MaterialKind;
use fs_err as fs;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "fencecalc",
    version,
    about = "Chainlink-fence material and cost estimator."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the bill of materials (and price, if prices are known) for a job.
    Estimate(EstimateArgs),
    /// Show what changed between two price lists.
    PriceDiff(PriceDiffArgs),
    /// List every material kind with its price key and unit.
    ListMaterials(ListMaterialsArgs),
}

#[derive(Debug, Parser)]
struct EstimateArgs {
    /// Job file (JSON, as produced by the job form).
    #[arg(long)]
    job: Utf8PathBuf,

    /// Price list file (TOML, or JSON when the extension is .json).
    /// Replaces the [prices] table of the config file.
    #[arg(long)]
    prices: Option<Utf8PathBuf>,

    /// Single price override, `material=price` (repeatable).
    #[arg(long = "price")]
    price: Vec<String>,

    /// Output format (default: config file, else json).
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Write the report here instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Config file (default: ./fencecalc.toml if present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct PriceDiffArgs {
    /// Price list before the edit.
    #[arg(long)]
    from: Utf8PathBuf,

    /// Price list after the edit.
    #[arg(long)]
    to: Utf8PathBuf,

    /// Timestamp to record on each change, RFC 3339 (default: now).
    #[arg(long)]
    at: Option<DateTime<Utc>>,

    #[arg(long, value_enum, default_value = "json")]
    format: ReportFormat,
}

#[derive(Debug, Parser)]
struct ListMaterialsArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(exit_code_for(&e));
    }
    ExitCode::from(0)
}

/// Invalid job input exits 2; everything else exits 1.
fn exit_code_for(e: &anyhow::Error) -> u8 {
    e.downcast_ref::<InputError>()
        .map(InputError::exit_code)
        .unwrap_or(1)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Estimate(args) => cmd_estimate(args),
        Command::PriceDiff(args) => cmd_price_diff(args),
        Command::ListMaterials(args) => cmd_list_materials(args),
    }
}

fn cmd_estimate(args: EstimateArgs) -> anyhow::Result<()> {
    let file_config = config::load_or_default(args.config.as_deref(), Utf8Path::new("."))
        .context("load fencecalc.toml config")?;
    let price_file = args
        .prices
        .as_deref()
        .map(config::load_price_list)
        .transpose()?;
    let overrides = config::parse_cli_prices(&args.price)?;
    let merged =
        ConfigMerger::new(file_config).merge_estimate_args(price_file, &overrides, args.format);

    debug!(
        "merged config: priced={}, format={:?}",
        merged.prices.is_some(),
        merged.format
    );

    let job_str = fs::read_to_string(&args.job).with_context(|| format!("read {}", args.job))?;
    let input: EstimationInput =
        serde_json::from_str(&job_str).with_context(|| format!("parse job {}", args.job))?;

    let estimate = Estimator::new(tool_info()).estimate(&input, merged.prices.as_ref())?;

    let rendered = match merged.format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&estimate).context("serialize json")? + "\n"
        }
        ReportFormat::Md => render_estimate_md(&estimate),
    };
    emit(args.out.as_deref(), &rendered)?;

    info!(id = %estimate.id, "estimated job {}", args.job);
    Ok(())
}

fn cmd_price_diff(args: PriceDiffArgs) -> anyhow::Result<()> {
    let old = config::load_price_list(&args.from)?;
    let new = config::load_price_list(&args.to)?;
    let changed_at = args.at.unwrap_or_else(Utc::now);

    let changes = diff_price_lists(&old, &new, changed_at);
    debug!(count = changes.len(), "diffed price lists");

    match args.format {
        ReportFormat::Json => {
            let doc = serde_json::json!({
                "schema": fencecalc_types::schema::FENCECALC_PRICE_CHANGES_V1,
                "changes": changes,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        ReportFormat::Md => print!("{}", render_price_changes_md(&changes)),
    }
    Ok(())
}

fn cmd_list_materials(args: ListMaterialsArgs) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Text => {
            println!("Materials:\n");
            println!("  {:<20} {:<6} {:<6} LABEL", "KEY", "UNIT", "PRICED");
            println!("  {:<20} {:<6} {:<6} -----", "---", "----", "------");
            for kind in MaterialKind::ALL {
                println!(
                    "  {:<20} {:<6} {:<6} {}",
                    kind.key(),
                    kind.unit(),
                    if PRICED_KINDS.contains(&kind) { "yes" } else { "no" },
                    kind.label()
                );
            }
            println!();
            println!("Items marked PRICED=no are quoted separately from the estimate total.");
        }
        OutputFormat::Json => {
            let kinds: Vec<_> = MaterialKind::ALL
                .iter()
                .map(|k| {
                    serde_json::json!({
                        "key": k.key(),
                        "label": k.label(),
                        "unit": k.unit(),
                        "priced": PRICED_KINDS.contains(k),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&kinds)?);
        }
    }
    Ok(())
}

fn emit(out: Option<&Utf8Path>, contents: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            fs::write(path, contents).with_context(|| format!("write {}", path))?;
            info!("wrote estimate to {}", path);
        }
        None => print!("{}", contents),
    }
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "fencecalc".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
