use std::sync::Arc;

use clap::{Parser, Subcommand};

use herobar_core::{
    classify, Engine, LocationProvider, NullLocation, PageMeta, PageRequest, RequestFlags,
    StaticLocation,
};

#[derive(Debug, Parser)]
#[command(name = "herobar-cli")]
#[command(about = "Inspect conversion-banner decisions offline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a page view into an intent.
    Classify {
        #[arg(long)]
        path: String,
        #[arg(long, default_value = "")]
        title: String,
        /// Explicit intent override (emergency, same_day, planned, off).
        #[arg(long = "override")]
        explicit: Option<String>,
    },
    /// Run the full decision pipeline against the page registry.
    Decide {
        #[arg(long)]
        path: String,
        /// Title to use when the path is not in the registry.
        #[arg(long)]
        title: Option<String>,
        /// Treat the request as an admin/internal context.
        #[arg(long)]
        admin: bool,
    },
    /// List registered pages and their overrides.
    Pages,
    /// Load and validate the page registry, reporting errors.
    Check,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = herobar_core::load_app_config_from_env()?;

    match cli.command {
        Commands::Classify {
            path,
            title,
            explicit,
        } => {
            let intent = classify(&path, &title, explicit.as_deref());
            println!("{intent}");
        }
        Commands::Decide { path, title, admin } => {
            let registry = herobar_core::load_pages(&config.pages_path)?;

            let provider: Arc<dyn LocationProvider> = if config.has_location() {
                Arc::new(StaticLocation {
                    name: config.location_name.clone(),
                    telephone: config.site_phone.clone(),
                })
            } else {
                Arc::new(NullLocation)
            };
            let engine = Engine::new(provider);

            let page = registry.find_by_path(&path);
            let request = PageRequest {
                title: title
                    .or_else(|| page.map(|p| p.title.clone()))
                    .unwrap_or_default(),
                meta: page.map(|p| p.meta.clone()).unwrap_or_else(PageMeta::default),
                flags: RequestFlags {
                    is_admin: admin,
                    ..RequestFlags::default()
                },
                path,
            };

            let decision = engine.decide(&request);
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        Commands::Pages => {
            let registry = herobar_core::load_pages(&config.pages_path)?;
            for page in registry.entries() {
                let overrides = page.meta.overrides();
                println!(
                    "{}\t{}\toverrides={}\thero_off={}",
                    page.slug,
                    page.title,
                    overrides.fields.len(),
                    page.meta.hero_off()
                );
            }
        }
        Commands::Check => {
            match herobar_core::load_pages(&config.pages_path) {
                Ok(registry) => {
                    println!(
                        "{}: {} pages ok",
                        config.pages_path.display(),
                        registry.len()
                    );
                }
                Err(e) => {
                    eprintln!("{}: {e}", config.pages_path.display());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
