use clap::{Parser, Subcommand};
use photo_folio::config::{self, SiteConfig};
use photo_folio::generate;
use photo_folio::output;
use photo_folio::paths;
use photo_folio::render::{self, PhotoLargeOptions};
use photo_folio::resolve::{self, Resolution, ShareOutcome};
use photo_folio::share::{self, ShareFlags};
use photo_folio::store::{CachedStore, JsonDirStore, PhotoStore};
use std::path::{Path, PathBuf};

/// Share context flags. OR-ed with the `[share]` section of the config.
#[derive(clap::Args, Clone, Copy)]
struct ShareArgs {
    /// Carry the browsing tag in share links
    #[arg(long)]
    share_tag: bool,
    /// Carry the camera in share links
    #[arg(long)]
    share_camera: bool,
    /// Carry the film simulation in share links
    #[arg(long)]
    share_simulation: bool,
}

impl ShareArgs {
    fn flags(self, config: &SiteConfig) -> ShareFlags {
        ShareFlags {
            tag: self.share_tag,
            camera: self.share_camera,
            simulation: self.share_simulation,
        }
        .or(config.share.flags())
    }
}

#[derive(Parser)]
#[command(name = "photo-folio")]
#[command(about = "Photo detail and share pages for a photography portfolio")]
#[command(long_about = "\
Photo detail and share pages for a photography portfolio

Each photo is a JSON record named after its id:

  content/
  ├── config.toml        # Site config (optional)
  ├── dscf1234.json      # Photo record, id \"dscf1234\"
  └── 2024/
      └── dscf1300.json  # Subdirectories are fine, ids stay unique

Routes:
  /p/{id}                       photo page
  /tag/{tag}/{id}               photo page browsed by tag
  .../share?camera=..&simulation=..  share view

Run 'photo-folio gen-config' to generate a documented config.toml.")]
#[command(version = env!("PHOTO_FOLIO_VERSION"))]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten)]
    Content(ContentCommand),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

/// Commands that read the content directory.
#[derive(Subcommand)]
enum ContentCommand {
    /// Generate the static site
    Build,
    /// Load and validate every photo record
    Check,
    /// Print a photo page
    Page {
        id: String,
        /// Tag the photo is browsed by
        #[arg(long)]
        tag: Option<String>,
        #[command(flatten)]
        share: ShareArgs,
    },
    /// Print a share view, or the redirect for a missing photo
    Share {
        id: String,
        #[arg(long)]
        tag: Option<String>,
    },
    /// Print the share path of a photo
    SharePath {
        id: String,
        #[arg(long)]
        tag: Option<String>,
        #[command(flatten)]
        share: ShareArgs,
    },
    /// Resolve a share path like a visitor following it
    Open { path: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::annotated_config());
            Ok(())
        }
        Command::Content(command) => run(command, &cli.source, &cli.output).await,
    }
}

/// Run a command that reads the content directory.
async fn run(
    command: ContentCommand,
    source: &Path,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::load(source)?;
    let store = CachedStore::new(JsonDirStore::open(source)?);

    match command {
        ContentCommand::Build => {
            init_thread_pool(&config.processing);
            println!(
                "==> Building {} \u{2192} {}",
                source.display(),
                output_dir.display()
            );
            let summary = generate::build_site(&store, &config, output_dir).await?;
            output::print_generate_output(&summary);
            println!("==> Build complete: {}", output_dir.display());
        }
        ContentCommand::Check => {
            println!("==> Checking {}", source.display());
            let mut photos = store.all_photos().await?;
            photos.sort_by(|a, b| a.id.cmp(&b.id));
            output::print_check_output(&photos);
            println!("==> Content is valid");
        }
        ContentCommand::Page { id, tag, share } => match resolve::resolve(&store, &id).await? {
            Resolution::Found(photo) => {
                let options = PhotoLargeOptions {
                    primary_tag: tag.as_deref(),
                    display: config.display.options(),
                    share: share.flags(&config),
                };
                let css = render::site_css(&config);
                let page = render::render_photo_page(&photo, &options, &config, &css);
                println!("{}", page.into_string());
            }
            Resolution::NotFound => {
                println!("{}", output::format_not_found(&id, paths::PATH_ROOT));
            }
        },
        ContentCommand::Share { id, tag } => {
            let outcome = resolve::resolve_share(&store, &id, tag.as_deref()).await?;
            print_share_outcome(&id, &outcome, &config)?;
        }
        ContentCommand::SharePath { id, tag, share } => match resolve::resolve(&store, &id).await? {
            Resolution::Found(photo) => {
                let path = share::build_share_path(&photo, tag.as_deref(), share.flags(&config));
                println!("{path}");
            }
            Resolution::NotFound => {
                println!("{}", output::format_not_found(&id, paths::PATH_ROOT));
            }
        },
        ContentCommand::Open { path } => {
            let route = paths::parse_share_path(&path)
                .ok_or_else(|| format!("Not a share path: {path}"))?;
            println!("{}", output::format_share_route(&route));
            let outcome =
                resolve::resolve_share(&store, &route.photo_id, route.tag.as_deref()).await?;
            print_share_outcome(&route.photo_id, &outcome, &config)?;
        }
    }

    Ok(())
}

/// Print the share view, or describe the redirect.
fn print_share_outcome(
    id: &str,
    outcome: &ShareOutcome,
    config: &SiteConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match outcome {
        ShareOutcome::Render(view) => {
            log::info!("{}", output::format_share_outcome(id, outcome));
            let css = render::site_css(config);
            let page = render::render_share_page(view, config, &css)?;
            println!("{}", page.into_string());
        }
        ShareOutcome::Redirect(target) => {
            println!("{}", output::format_share_outcome(id, outcome));
            println!("{}", render::render_redirect_page(target).into_string());
        }
    }
    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    rayon::ThreadPoolBuilder::new()
        .num_threads(processing.worker_count())
        .build_global()
        .ok();
}
