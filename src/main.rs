use std::path::{Path, PathBuf};

use cardstock::{config, content, feed, output, thumbs};
use chrono::Utc;
use clap::{Parser, Subcommand};

/// Shared flags for commands that render cards.
#[derive(clap::Args, Clone)]
struct StyleArgs {
    /// Override the rendering style from config ("sketch" or "clean")
    #[arg(long)]
    style: Option<String>,
}

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}+{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "cardstock")]
#[command(about = "Hand-drawn social cards and an RSS feed for static blogs")]
#[command(long_about = "\
Hand-drawn social cards and an RSS feed for static blogs

Your config is the data source. Each [themes.*] entry becomes a 1200x630
PNG link preview; your content directory's front matter becomes the RSS
document.

Project structure:

  cardstock.toml                   # Site identity + theme table
  content/
  ├── small-samples.md             # Front matter feeds the RSS document
  └── mapping-institutions.md
  public/
  ├── rss.xml                      # feed output
  └── images/blog/
      ├── small-samples.png        # thumbs output, one per theme entry
      └── mapping-institutions.png

Cards are deterministic: a theme entry renders the same bytes on every
run, so regenerated images diff cleanly in version control.

Run 'cardstock gen-config' to generate a documented cardstock.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(short, long, default_value = "cardstock.toml", global = true)]
    config: PathBuf,

    /// Override the content directory from config
    #[arg(long, global = true)]
    content: Option<String>,

    /// Override both output directories from config
    #[arg(long, global = true)]
    out: Option<String>,

    /// Cap the number of parallel rendering workers
    #[arg(long, global = true)]
    processes: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one PNG card per theme entry
    Thumbs(StyleArgs),
    /// Write the RSS document from content front matter
    Feed,
    /// Run both pipelines: thumbs + feed
    Build(StyleArgs),
    /// Validate config and cross-reference content without writing
    Check,
    /// Print a stock cardstock.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Thumbs(style_args) => {
            let config = load_config_with_overrides(&cli)?;
            run_thumbs(&config, style_args.style.clone())?;
        }
        Command::Feed => {
            let config = load_config_with_overrides(&cli)?;
            run_feed(&config)?;
        }
        Command::Build(style_args) => {
            let config = load_config_with_overrides(&cli)?;

            println!("==> Stage 1: Rendering cards");
            run_thumbs(&config, style_args.style.clone())?;

            println!("==> Stage 2: Writing feed");
            run_feed(&config)?;

            println!("==> Build complete");
        }
        Command::Check => {
            let config = load_config_with_overrides(&cli)?;
            println!("==> Checking {}", cli.config.display());
            let records = content::load_content(Path::new(&config.content_root))?;
            let report = output::build_check_report(&config, &records);
            output::print_check_report(&report);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config and fold CLI overrides into it.
fn load_config_with_overrides(cli: &Cli) -> Result<config::SiteConfig, config::ConfigError> {
    let mut config = config::load_config(&cli.config)?;
    if let Some(n) = cli.processes {
        config.processing.max_processes = Some(n);
    }
    if let Some(dir) = &cli.content {
        config.content_root = dir.clone();
    }
    if let Some(dir) = &cli.out {
        config.thumbs.out_dir = dir.clone();
        config.feed.out_dir = dir.clone();
    }
    Ok(config)
}

/// Render the card batch, printing progress from a single thread.
fn run_thumbs(
    config: &config::SiteConfig,
    style: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = config.clone();
    if let Some(style) = style {
        config.thumbs.style = style;
    }
    init_thread_pool(&config.processing);

    let out_dir = PathBuf::from(&config.thumbs.out_dir);
    println!(
        "{}",
        output::format_thumbs_header(config.themes.len(), &config.thumbs.style)
    );

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            println!("{}", output::format_card_event(&event));
        }
    });
    let summary = thumbs::generate_cards(&config, &out_dir, Some(tx))?;
    printer.join().unwrap();

    println!("{}", output::format_run_summary(&summary));
    if summary.generated == 0 && summary.failed > 0 {
        return Err(format!("all {} cards failed to render", summary.failed).into());
    }
    Ok(())
}

/// Load content, serialize the feed, and write it out.
fn run_feed(config: &config::SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    let records = content::load_content(Path::new(&config.content_root))?;
    let drafts = records.iter().filter(|r| r.draft).count();

    let xml = feed::serialize(config, &records, Utc::now())?;
    let path = config.feed_file();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &xml)?;

    println!(
        "{}",
        output::format_feed_summary(&path, records.len() - drafts, drafts)
    );
    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
