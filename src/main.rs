use clap::{Parser, Subcommand};
use section_pager::{config, content, emit, output, pipeline};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "section-pager")]
#[command(about = "Paginated listing pages for one category of a static site")]
#[command(long_about = "\
Paginated listing pages for one category of a static site

Selects every content item filed under the configured category, orders
them (configured field first, then sticky priority), and splits them into
fixed-size pages. The result is written as pages.json for the renderer.

Content layout:

  content/
  ├── config.toml                  # [section] and [pagination] settings
  ├── posts/
  │   ├── 2024-01-10-winter.md     # +++ TOML front matter +++, body ignored
  │   └── 2024-02-02-harbour.md
  └── drafts/
      └── ideas.md                 # No front matter = skipped

Addresses: page 1 is path_base itself (featured/); later pages are
path_base/page_dir/N/ (featured/page/2/).

Run 'section-pager gen-config' to generate a documented config.toml.
Set RUST_LOG=debug for pipeline diagnostics on stderr.")]
#[command(version)]
struct Cli {
    /// Content directory, or a JSON file holding an array of items
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Config file (default: config.toml next to the content)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory for pages.json
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Select, order and paginate the section, then write pages.json
    Paginate,
    /// Run the pipeline and show the pages without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Paginate => {
            let listing = load_listing(&cli)?;
            let collection = content::load_collection(&cli.source)?;
            let pages = pipeline::run(collection.as_deref(), &listing)?;

            std::fs::create_dir_all(&cli.output)?;
            let manifest_path = cli.output.join("pages.json");
            let manifest = emit::Manifest::new(&listing.category, &pages);
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;

            output::print_listing_output(&listing.category, &pages);
            println!("==> Wrote {}", manifest_path.display());
        }
        Command::Check => {
            let listing = load_listing(&cli)?;
            println!("==> Checking {}", cli.source.display());
            let collection = content::load_collection(&cli.source)?;
            let pages = pipeline::run(collection.as_deref(), &listing)?;
            output::print_listing_output(&listing.category, &pages);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve and validate the listing configuration.
///
/// An explicit `--config` wins. Otherwise `config.toml` is read from the
/// content directory, or from next to the content file.
fn load_listing(cli: &Cli) -> Result<config::ListingConfig, config::ConfigError> {
    let site_config = match &cli.config {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(config::config_dir(&cli.source))?,
    };
    site_config.listing()
}
