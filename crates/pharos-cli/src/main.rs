use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use pharos_pairwise::consolidate::consolidate;
use pharos_pairwise::generate::generate_suite;
use pharos_pairwise::rng::SeededFiller;
use pharos_pairwise::universe::universe_size;
use pharos_table::read::read_parameters_from_path;
use pharos_table::write::write_suite_to_path;

#[derive(Parser, Debug)]
#[command(name = "pharos")]
#[command(about = "Reduce a parameter cross-product to a pairwise-covering test suite")]
struct Args {
    /// Input table: CSV parameter columns, or a JSON parameter list
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV path for the generated suite
    #[arg(short, long)]
    output: PathBuf,

    /// Seed for filler values in forced cases
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Keep every generated case instead of consolidating
    #[arg(long)]
    no_consolidate: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let parameters = if args.input.extension().is_some_and(|ext| ext == "json") {
        let json = fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read {}", args.input.display()))?;
        pharos_ir::parse::parse_parameters(&json)?
    } else {
        read_parameters_from_path(&args.input)?
    };

    let exhaustive: usize = parameters.iter().map(|p| p.values.len()).product();

    let mut filler = SeededFiller::new(args.seed);
    let suite = generate_suite(&parameters, &mut filler)?;
    info!(
        cases = suite.len(),
        pairs = universe_size(&parameters),
        exhaustive,
        "generated pairwise suite"
    );

    let suite = if args.no_consolidate {
        suite
    } else {
        let before = suite.len();
        let kept = consolidate(&suite);
        info!(kept = kept.len(), dropped = before - kept.len(), "consolidated suite");
        kept
    };

    write_suite_to_path(&args.output, &parameters, &suite)?;
    info!(path = %args.output.display(), "suite written");

    Ok(())
}
