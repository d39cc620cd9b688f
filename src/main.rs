use clap::{Parser, Subcommand};
use distr_site::assets::{self, AssetIndex, RasterProbe};
use distr_site::check::{self, Report};
use distr_site::config::{self, SiteConfig};
use distr_site::types::SiteContent;
use distr_site::{content, export, output};
use std::path::{Path, PathBuf};

/// Shared flags for commands that lint.
#[derive(clap::Args, Clone)]
struct CheckArgs {
    /// Skip resolving image references
    #[arg(long)]
    no_assets: bool,
}

#[derive(Parser)]
#[command(name = "distr-site")]
#[command(about = "Content tables for the Distr marketing site")]
#[command(long_about = "\
Content tables for the Distr marketing site

Case studies, navigation, mega-menus, menus and the product catalog are
compiled into this binary. The check command lints them; the export command
writes them as JSON for the page templates.

Project layout:

  .
  ├── config.toml               # Build config (optional)
  └── src/assets/               # Images referenced by the tables
      ├── case-studies/
      └── testimonials/

Run 'distr-site gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Project directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Assets directory (overrides assets_root from config.toml)
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print an inventory of every table
    List,
    /// Lint the content tables and their image references
    Check {
        #[command(flatten)]
        args: CheckArgs,
        /// Lint a directory written by `export` instead of the built-in tables
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Lint, then write the tables (and resolved image metadata) as JSON
    Export {
        #[command(flatten)]
        args: CheckArgs,
        /// Output directory (overrides export.output_dir from config.toml)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            output::print_content(content::site_content());
        }
        Command::Check { args, from } => {
            let (site_config, assets_root) = load_settings(&cli.root, cli.assets.as_deref())?;
            let loaded;
            let site = match &from {
                Some(dir) => {
                    println!("==> Loading {}", dir.display());
                    loaded = export::load(dir)?;
                    &loaded
                }
                None => content::site_content(),
            };
            let index = build_index(site, &assets_root, &args);
            run_check(site, &site_config, index.as_ref())?;
        }
        Command::Export { args, out } => {
            let (site_config, assets_root) = load_settings(&cli.root, cli.assets.as_deref())?;
            let site = content::site_content();
            let index = build_index(site, &assets_root, &args);
            run_check(site, &site_config, index.as_ref())?;

            let out_dir = out.unwrap_or_else(|| cli.root.join(&site_config.export.output_dir));
            println!("==> Exporting → {}", out_dir.display());
            let pretty = site_config.export.pretty;
            let mut files = export::export(site, &out_dir, pretty)?;
            if let Some(index) = &index {
                files.push(export::export_images(index, &out_dir, pretty)?);
            }
            output::print_export(&files);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `config.toml` from `root` and resolve the assets directory.
///
/// The `--assets` flag wins over `assets_root`, which is relative to `root`.
fn load_settings(
    root: &Path,
    assets: Option<&Path>,
) -> Result<(SiteConfig, PathBuf), config::ConfigError> {
    let site_config = config::load_config(root)?;
    let assets_root = assets
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(&site_config.assets_root));
    Ok((site_config, assets_root))
}

/// Resolve every image `site` references, unless `--no-assets` was given.
fn build_index(site: &SiteContent, assets_root: &Path, args: &CheckArgs) -> Option<AssetIndex> {
    if args.no_assets {
        println!("==> Checking content (images skipped)");
        return None;
    }
    println!("==> Checking content, images under {}", assets_root.display());
    Some(AssetIndex::build(
        assets_root,
        assets::referenced_assets(site),
        &RasterProbe,
    ))
}

/// Lint `site`, print the report, and fail on errors (or on warnings when
/// `check.deny_warnings` is set).
fn run_check(
    site: &SiteContent,
    site_config: &SiteConfig,
    index: Option<&AssetIndex>,
) -> Result<Report, check::CheckError> {
    let report = check::check_with_assets(site, site_config, index);
    output::print_report(&report);
    report.into_result(site_config.check.deny_warnings)
}
