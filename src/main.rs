// Tue Jan 13 2026 - Alex

use anyhow::{bail, Context};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use xref_usage::{
    config::{ApplyMode, Config},
    model::{ProgramDescription, RootNode},
    utils::{format_duration, logging::scoped_timer, pluralize, LoggingUtils},
    xref::{UnusedEntities, UsageAnalyzer, UsageInfo, UsageSnapshot, UsageStats},
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Usage and dependency tables for decompiled programs", long_about = None)]
struct Args {
    /// Program description (classes, classpath, references) as JSON
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the usage snapshot
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only refresh usage data of this class and its members
    #[arg(long, conflicts_with = "stream_only")]
    class: Option<String>,

    /// Stream usage data to the snapshot without storing it on the model
    #[arg(long)]
    stream_only: bool,

    #[arg(long)]
    sequential: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args)?;

    let level = if args.verbose > 0 {
        LoggingUtils::level_from_verbosity(args.verbose)
    } else {
        LoggingUtils::level_from_str(&config.log_level)
    };
    LoggingUtils::init_logger(level);

    let start_time = Instant::now();
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner.set_message("Loading program...");
    let program = ProgramDescription::from_file(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let (root, refs) = {
        let _timer = scoped_timer("model build");
        program.into_root().context("failed to build program model")?
    };
    spinner.println(format!(
        "{} Loaded {}, {}, {}",
        "[+]".green(),
        pluralize(root.classes().len(), "class", "classes"),
        pluralize(root.methods().len(), "method", "methods"),
        pluralize(root.fields().len(), "field", "fields")
    ));

    spinner.set_message("Collecting usage...");
    let usage = UsageAnalyzer::new(&root)
        .with_parallel(config.parallel_accumulation)
        .with_max_threads(config.max_threads)
        .analyze(&refs)
        .context("usage analysis failed")?;

    spinner.set_message("Finalizing...");
    finalize(&root, &usage, &config.apply_mode)?;
    let snapshot = UsageSnapshot::from_usage(&usage);
    spinner.finish_and_clear();

    print_summary(&root, &usage, &config.apply_mode);

    match &config.output_file {
        Some(path) => {
            snapshot
                .write_json(path, config.pretty_output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{} Snapshot saved to: {}", "[+]".green(), path.display());
        }
        None => println!("{} No output file given, snapshot not written", "[*]".blue()),
    }

    println!(
        "{} Done in {}",
        "[+]".green(),
        format_duration(start_time.elapsed())
    );
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::new(),
    };

    if let Some(output) = &args.output {
        config = config.with_output_file(output.clone());
    }
    if let Some(class) = &args.class {
        config = config.with_apply_mode(ApplyMode::Class(class.clone()));
    } else if args.stream_only {
        config = config.with_apply_mode(ApplyMode::StreamOnly);
    }
    if args.sequential {
        config = config.with_parallel_accumulation(false);
    }
    if let Some(level) = &args.log_level {
        config = config.with_log_level(level);
    }

    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(config)
}

fn finalize(root: &RootNode, usage: &UsageInfo<'_>, mode: &ApplyMode) -> anyhow::Result<()> {
    let _timer = scoped_timer("finalize");
    match mode {
        ApplyMode::Global => usage.apply(),
        ApplyMode::Class(name) => {
            let Some(cls) = root.class_by_name(name) else {
                bail!("class `{}` is not part of the program", name);
            };
            usage.apply_for_class(cls);
        }
        ApplyMode::StreamOnly => {}
    }
    Ok(())
}

fn print_summary(root: &RootNode, usage: &UsageInfo<'_>, mode: &ApplyMode) {
    let stats = UsageStats::from_usage(usage);

    println!();
    println!("{}", "Usage Summary".cyan().bold());
    println!("{}", "-".repeat(40).cyan());
    for (label, row) in stats.rows() {
        println!(
            "  {:<22} {:>6} owners {:>8} edges",
            label,
            row.owners.to_string().green(),
            row.edges.to_string().green()
        );
    }
    println!("  {:<22} {:>22}", "total edges", stats.total_edges().to_string().green());
    if stats.use_apache_http_legacy() {
        println!("  {}", "Apache HTTP legacy client is used".yellow());
    }

    if let ApplyMode::Global = mode {
        let unused = UnusedEntities::find(root);
        if unused.total() > 0 {
            println!();
            println!("{}", "Unused:".yellow().bold());
            println!("  {}", pluralize(unused.classes.len(), "class", "classes"));
            println!("  {}", pluralize(unused.methods.len(), "method", "methods"));
            println!("  {}", pluralize(unused.fields.len(), "field", "fields"));
            for &cls in &unused.classes {
                log::debug!("unused class {}", root.class(cls).full_name());
            }
        }
    }
    println!();
}
