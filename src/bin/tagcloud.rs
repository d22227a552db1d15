use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use env_logger::Env;
use log::info;
use tagcloud::{CloudBuilder, CloudConfig, Pipeline, TagCloudError};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the most frequent words of a document as an HTML tag cloud",
    long_about = None
)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    quiet: u8,

    /// Number of most frequent words to keep
    #[arg(value_name = "COUNT", requires = "input")]
    count: Option<usize>,

    /// Text document to visualise
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write the page here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// JSON file with cloud settings; flags below override it
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Common-word list replacing the bundled one
    #[arg(long, value_name = "PATH")]
    ignore_file: Option<PathBuf>,

    /// Occurrences per size group
    #[arg(long, value_name = "COUNT")]
    group_size: Option<usize>,

    /// Number of size classes in the stylesheet
    #[arg(long, value_name = "COUNT")]
    num_groups: Option<usize>,

    /// Font size (pt) of the smallest group
    #[arg(long, value_name = "PT")]
    min_font: Option<usize>,

    /// Font size step (pt) between groups
    #[arg(long, value_name = "PT")]
    increment: Option<usize>,

    /// Page title
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Emit the selected words as JSON instead of HTML
    #[arg(long)]
    json: bool,

    /// Emit pretty JSON
    #[arg(long, requires = "json")]
    pretty: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let (Some(count), Some(input)) = (cli.count, cli.input.as_deref()) else {
        println!("{}", Cli::command().render_usage());
        return Ok(ExitCode::SUCCESS);
    };

    match run(&cli, count, input) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<TagCloudError>() {
            Some(TagCloudError::InputNotFound(path)) => {
                eprintln!("File not found: {}", path.display());
                Ok(ExitCode::FAILURE)
            }
            _ => Err(err),
        },
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let level = if quiet > 0 {
        match quiet {
            1 => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn build_config(cli: &Cli) -> Result<CloudConfig> {
    let base = match &cli.config {
        Some(path) => CloudConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CloudConfig::default(),
    };
    let mut cfg = CloudBuilder::from_config(base);
    if let Some(group_size) = cli.group_size {
        cfg = cfg.group_size(group_size);
    }
    if let Some(num_groups) = cli.num_groups {
        cfg = cfg.num_groups(num_groups);
    }
    if let Some(min_font) = cli.min_font {
        cfg = cfg.min_font(min_font);
    }
    if let Some(increment) = cli.increment {
        cfg = cfg.increment(increment);
    }
    if let Some(title) = &cli.title {
        cfg = cfg.title(title.clone());
    }
    if cli.ignore_file.is_some() {
        cfg = cfg.ignore_file(cli.ignore_file.clone());
    }
    Ok(cfg.build()?)
}

fn run(cli: &Cli, count: usize, input: &Path) -> Result<()> {
    let cfg = build_config(cli)?;
    let pipeline = Pipeline::from_config(cfg)?;
    let cloud = pipeline.generate_from_path(input, count)?;

    let mut rendered = if cli.json {
        cloud.to_json(cli.pretty)?
    } else {
        pipeline.render(&cloud)
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                "wrote tag cloud with {} words to {}",
                cloud.words().len(),
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}
