mod adapter;
mod assembler;
mod catalog;
mod cipher;
mod config;
mod embed;
mod errors;
mod logger;
mod metrics;
mod policy;
mod sink;

use adapter::LinkGateway;
use catalog::ResourceCatalog;
use clap::Parser;
use embed::EmbedResolver;
use errors::AppError;
use metrics::Metrics;
use sink::StdoutSink;
use tracing::info;

#[derive(Parser)]
#[command(name = "linkcloak", version)]
struct Cli {
    /// Catalog index of a download link to resolve and open
    #[arg(short, long)]
    index: Option<usize>,

    /// Module key of an embed payload to resolve and render
    #[arg(long, conflicts_with = "index")]
    module: Option<String>,

    #[arg(long, default_value = "config/catalog.json")]
    catalog: String,

    #[arg(long, default_value = "config/embeds.json")]
    embeds: String,
}

fn main() -> Result<(), AppError> {
    logger::init();
    let cli = Cli::parse();

    let (catalog_path, embeds_path) = config::resolve_paths(&cli.catalog, &cli.embeds)?;
    let catalog = ResourceCatalog::new(config::load_catalog(&catalog_path)?);
    let resolver = EmbedResolver::new(config::load_registry(&embeds_path)?);

    let metrics = Metrics::new();
    let mut gateway = LinkGateway::new(catalog, resolver, StdoutSink);

    if let Some(index) = cli.index {
        info!("Resolving download link {}", index);
        if gateway.open_download(index) {
            metrics.downloads_opened.inc();
        }
    } else if let Some(ref module_key) = cli.module {
        info!("Resolving embed module {}", module_key);
        if gateway.resolve_and_render(module_key) {
            metrics.embeds_resolved.inc();
        }
    } else {
        info!("No selection given; resolving first listed module");
        if gateway.initialize() {
            metrics.embeds_resolved.inc();
        }
    }

    Ok(())
}
