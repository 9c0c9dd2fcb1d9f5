// Name Cleaver - CLI
// One-off parsing, comparison and CSV batch cleaning.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use name_cleaver::batch::run_batch;
use name_cleaver::{
    compare_organizations, compare_persons, parse_name, telemetry, BatchConfig, Cleaved,
    CleaverOptions, HasPoliticalMetadata, NameCleaver, NameKind, OutputFormat, ParsedName,
    PoliticianNameCleaver,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "name-cleaver",
    about = "Parse, normalize and compare messy person and organization names",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an individual's name
    Individual(ParseArgs),
    /// Parse a politician's name (or a running-mates ticket)
    Politician(PoliticianArgs),
    /// Normalize an organization name
    Organization(ParseArgs),
    /// Score how likely two names refer to the same entity
    Compare(CompareArgs),
    /// Clean a CSV column of raw names
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct ParseArgs {
    /// Raw name as it appears in the source data
    name: String,
    /// Print the input back instead of failing when it can't be parsed
    #[arg(long)]
    safe: bool,
    /// Print the structured result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct PoliticianArgs {
    #[command(flatten)]
    parse: ParseArgs,
    /// Party code shown in the rendered name, e.g. "D"
    #[arg(long)]
    party: Option<String>,
    /// State code shown in the rendered name, e.g. "NY"
    #[arg(long)]
    state: Option<String>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// How to parse both names (politicians compare as individuals)
    #[arg(long, value_enum, default_value_t = NameKind::Individual)]
    kind: NameKind,
    first: String,
    second: String,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV file with a header row
    #[arg(long)]
    input: PathBuf,
    /// Output file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = NameKind::Individual)]
    kind: NameKind,
    /// Header of the column holding raw names
    #[arg(long, default_value = "name")]
    column: String,
    /// Pass unparseable names through instead of stopping
    #[arg(long)]
    safe: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    telemetry::init().context("Failed to initialise logging")?;

    match Cli::parse().command {
        Command::Individual(args) => run_parse(NameKind::Individual, &args),
        Command::Organization(args) => run_parse(NameKind::Organization, &args),
        Command::Politician(args) => run_politician(&args),
        Command::Compare(args) => run_compare(&args),
        Command::Batch(args) => {
            let config = BatchConfig {
                input: args.input,
                output: args.output,
                kind: args.kind,
                column: args.column,
                options: CleaverOptions::from_flag(args.safe),
                format: args.format,
            };
            let summary = run_batch(&config)?;
            info!(
                "✓ Cleaned {} records ({} parsed, {} passed through, {} empty)",
                summary.total, summary.parsed, summary.passthrough, summary.empty
            );
            Ok(())
        }
    }
}

fn run_parse(kind: NameKind, args: &ParseArgs) -> Result<()> {
    let cleaved = parse_name(kind, &args.name, CleaverOptions::from_flag(args.safe))?;
    print_cleaved(&cleaved, args.json)
}

fn run_politician(args: &PoliticianArgs) -> Result<()> {
    let cleaved = PoliticianNameCleaver::new(&args.parse.name)
        .with_options(CleaverOptions::from_flag(args.parse.safe))
        .parse()?
        .map(|parsed| parsed.plus_metadata(args.party.as_deref(), args.state.as_deref()))
        .map(ParsedName::from);
    print_cleaved(&cleaved, args.parse.json)
}

fn run_compare(args: &CompareArgs) -> Result<()> {
    let parse = |raw: &str| -> Result<ParsedName> {
        match parse_name(args.kind, raw, CleaverOptions::strict())? {
            Cleaved::Parsed(parsed) => Ok(parsed),
            _ => bail!("nothing to compare in '{raw}'"),
        }
    };
    let (first, second) = (parse(&args.first)?, parse(&args.second)?);

    let score = match (&first, &second) {
        (ParsedName::Organization(a), ParsedName::Organization(b)) => compare_organizations(a, b),
        _ => match (first.as_person(), second.as_person()) {
            (Some(a), Some(b)) => compare_persons(a, b),
            _ => bail!("running-mates tickets can't be compared"),
        },
    };

    println!("{first} ⟷ {second}: {score}");
    Ok(())
}

fn print_cleaved(cleaved: &Cleaved<ParsedName>, json: bool) -> Result<()> {
    if json {
        let value = match cleaved {
            Cleaved::Parsed(parsed) => serde_json::to_string_pretty(parsed)?,
            other => serde_json::to_string(&other.to_string())?,
        };
        println!("{value}");
    } else {
        println!("{cleaved}");
    }
    Ok(())
}
