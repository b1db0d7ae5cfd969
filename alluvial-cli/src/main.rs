use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "alluvial", version)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print relative stratum sizes and flow matrices as JSON.
    Aggregate(AggregateArgs),
    /// Lay out the full diagram and write it as JSON.
    Layout(LayoutArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input table: `.json` (records or columns) or delimited text.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Field delimiter for delimited input.
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Group column.
    #[arg(long)]
    x: String,

    /// Stratum column.
    #[arg(long)]
    stratum: String,

    /// Alluvium (identity) column.
    #[arg(long)]
    alluvium: String,

    /// Optional hue column used for colouring.
    #[arg(long)]
    hue: Option<String>,

    /// Sort groups and strata instead of keeping first-seen order.
    #[arg(long, default_value_t = false)]
    sorted: bool,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

impl InputArgs {
    fn columns(&self) -> alluvial::ColumnMap {
        let cols = alluvial::ColumnMap::new(&self.x, &self.stratum, &self.alluvium);
        match &self.hue {
            Some(hue) => cols.with_hue(hue),
            None => cols,
        }
    }

    fn order(&self) -> alluvial::KeyOrder {
        if self.sorted {
            alluvial::KeyOrder::Sorted
        } else {
            alluvial::KeyOrder::FirstSeen
        }
    }
}

#[derive(Args, Debug)]
struct AggregateArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Diagram config JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use sigmoid ribbon edges instead of the polynomial fit.
    #[arg(long, default_value_t = false)]
    sigmoid: bool,

    /// Samples per curve segment.
    #[arg(long)]
    resolution: Option<usize>,

    /// Comma-separated hex colours picked by stratum position.
    /// Defaults to evenly spaced hues.
    #[arg(long, value_delimiter = ',')]
    colors: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Aggregate(args) => cmd_aggregate(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_aggregate(args: AggregateArgs) -> anyhow::Result<()> {
    let input = &args.input;
    let table = read_table(&input.in_path, input.delimiter)?;
    let spec = alluvial::AggregateSpec::new(input.columns()).with_order(input.order());
    let aggregation = alluvial::aggregate(&table, &spec)?;

    let json = serde_json::to_string_pretty(&aggregation).context("serialize aggregation")?;
    write_output(input.out.as_deref(), &json)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let input = &args.input;
    let mut config = match &args.config {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            serde_json::from_str::<alluvial::DiagramConfig>(&s)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => alluvial::DiagramConfig::default(),
    };
    if input.sorted {
        config.order = alluvial::KeyOrder::Sorted;
    }
    if args.sigmoid {
        config.fit = alluvial::FitMode::Sigmoid;
    }
    if let Some(resolution) = args.resolution {
        config.resolution = resolution;
    }
    config.validate()?;

    let table = read_table(&input.in_path, input.delimiter)?;
    let aggregation = alluvial::aggregate(&table, &config.aggregate_spec(input.columns()))?;

    let palette: Box<dyn alluvial::Palette> = if args.colors.is_empty() {
        let n = aggregation
            .strata_by_group
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(1);
        Box::new(alluvial::HuePalette::new(n))
    } else {
        Box::new(alluvial::IndexPalette::from_hex(args.colors.as_slice())?)
    };

    let diagram = alluvial::Diagram::from_aggregation(aggregation, &config, &*palette)?;
    tracing::info!(
        columns = diagram.columns.len(),
        ribbons = diagram.ribbons.len(),
        "diagram laid out"
    );

    let json = serde_json::to_string_pretty(&diagram).context("serialize diagram")?;
    write_output(input.out.as_deref(), &json)
}

fn read_table(path: &Path, delimiter: char) -> anyhow::Result<alluvial::Table> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read table '{}'", path.display()))?;
        return alluvial::Table::from_json_str(&s)
            .with_context(|| format!("parse table '{}'", path.display()));
    }

    let delimiter = u8::try_from(delimiter).context("delimiter must be a single-byte character")?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("open table '{}'", path.display()))?;

    let names: Vec<String> = rdr
        .headers()
        .with_context(|| format!("read header of '{}'", path.display()))?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();
    let mut values = vec![Vec::new(); names.len()];
    for (line, record) in rdr.records().enumerate() {
        let record = record
            .with_context(|| format!("read record {} of '{}'", line + 1, path.display()))?;
        for (column, field) in values.iter_mut().zip(record.iter()) {
            column.push(alluvial::Datum::infer(field.trim()));
        }
    }
    tracing::debug!(columns = names.len(), path = %path.display(), "read delimited table");

    Ok(alluvial::Table::from_columns(names.into_iter().zip(values))?)
}

fn write_output(out: Option<&Path>, json: &str) -> anyhow::Result<()> {
    let Some(out) = out else {
        println!("{json}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
