use std::io::Write;
use std::str::FromStr;

use anyhow::{Context, Result};
use cellular_automata::{
    domain::Population, Algorithm, BrainConfig, BrainSession, ElementaryConfig, ElementarySession,
    Snapshot,
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use serde::Serialize;
use tracing::info;

/// One Brian's Brain generation as printed on stdout
#[derive(Serialize)]
struct BrainFrame<'a> {
    generation: u64,
    on: usize,
    dying: usize,
    grid: &'a Snapshot,
}

#[derive(Serialize)]
struct ElementaryOutput<'a> {
    rule: u8,
    history: &'a Snapshot,
}

fn init_tracing() -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("cellular_automata=info"))?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(filter),
    )?;
    Ok(())
}

fn parse_arg<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .value_of(name)
        .map(str::parse)
        .transpose()
        .with_context(|| format!("invalid value for --{}", name))
}

fn algorithm_arg(matches: &ArgMatches) -> Algorithm {
    if matches.is_present("parallel") {
        Algorithm::Parallel
    } else {
        Algorithm::Serial
    }
}

fn value_arg<'a>(name: &'a str, help: &'a str) -> Arg<'a, 'a> {
    Arg::with_name(name).long(name).takes_value(true).help(help)
}

fn parallel_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name("parallel")
        .long("parallel")
        .help("step cells on the rayon thread pool")
}

fn brain_config(matches: &ArgMatches) -> Result<BrainConfig> {
    let mut config = BrainConfig::default().with_algorithm(algorithm_arg(matches));
    if let Some(rows) = parse_arg(matches, "rows")? {
        config.rows = rows;
    }
    if let Some(cols) = parse_arg(matches, "cols")? {
        config.cols = cols;
    }
    if let Some(p) = parse_arg(matches, "probability")? {
        config = config.with_on_probability(p);
    }
    if let Some(max_frames) = parse_arg(matches, "max-frames")? {
        config = config.with_max_frames(max_frames);
    }
    if let Some(seed) = parse_arg(matches, "seed")? {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn run_brain(matches: &ArgMatches) -> Result<()> {
    let steps: u64 = parse_arg(matches, "steps")?.unwrap_or(10);
    let mut session = BrainSession::new(brain_config(matches)?)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for _ in 0..steps {
        session.tick();
        let Population { on, dying, .. } = session.population();
        let snapshot = session.snapshot();
        let frame = BrainFrame {
            generation: session.generation,
            on,
            dying,
            grid: &snapshot,
        };
        serde_json::to_writer(&mut out, &frame)?;
        writeln!(out)?;
    }

    info!(
        generations = session.generation,
        recorded = session.recorder.len(),
        "brian's brain run finished"
    );
    Ok(())
}

fn elementary_config(matches: &ArgMatches) -> Result<ElementaryConfig> {
    let mut config = ElementaryConfig::default().with_algorithm(algorithm_arg(matches));
    if let Some(rule) = parse_arg(matches, "rule")? {
        config = config.with_rule(rule);
    }
    if let Some(rows) = parse_arg(matches, "rows")? {
        config = config.with_rows(rows);
    }
    if let Some(row_length) = parse_arg(matches, "row-length")? {
        config = config.with_row_length(row_length);
    }
    if let Some(width) = parse_arg(matches, "width")? {
        config = config.with_visible_width(width);
    }
    Ok(config)
}

fn run_elementary(matches: &ArgMatches) -> Result<()> {
    let session = ElementarySession::new(elementary_config(matches)?)?;
    let history = if matches.is_present("full") {
        session.snapshot()
    } else {
        session.visible()
    };

    let output = ElementaryOutput {
        rule: session.rule(),
        history: &history,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &output)?;
    writeln!(out)?;

    info!(
        rule = session.rule(),
        live_cells = session.history().live_cells(),
        "elementary run finished"
    );
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;

    let matches = App::new("cellular_automata")
        .about("Steps Brian's Brain and elementary automata, printing JSON snapshots")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("brain")
                .about("run Brian's Brain from a random grid, one JSON line per generation")
                .arg(value_arg("rows", "grid rows (default 60)"))
                .arg(value_arg("cols", "grid columns (default 60)"))
                .arg(value_arg("probability", "chance a cell starts ON (default 0.2)"))
                .arg(value_arg("steps", "generations to print (default 10)"))
                .arg(value_arg("max-frames", "frames kept by the recorder (default 100)"))
                .arg(value_arg("seed", "seed for a reproducible grid"))
                .arg(parallel_arg()),
        )
        .subcommand(
            SubCommand::with_name("elementary")
                .about("build the space-time diagram of an elementary rule")
                .arg(value_arg("rule", "rule code 0-255 (default 110)"))
                .arg(value_arg("rows", "generations, row is simulated twice as wide (default 150)"))
                .arg(value_arg("row-length", "simulated row width (default 300)"))
                .arg(value_arg("width", "visible columns, centered (default 200)"))
                .arg(
                    Arg::with_name("full")
                        .long("full")
                        .help("print every simulated column instead of the visible window"),
                )
                .arg(parallel_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        ("brain", Some(sub)) => run_brain(sub),
        ("elementary", Some(sub)) => run_elementary(sub),
        _ => unreachable!("clap requires a subcommand"),
    }
}
