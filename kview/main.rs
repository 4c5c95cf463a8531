use anyhow::Result;
use clap::Parser;
use k8s_openapi::serde_json;
use kube::api::DynamicObject;
use kview_config::{APP_NAME, APP_VERSION, Config};
use kview_kube::{CacheQuery, Kind, MemoryCache, ObjectCache, PathBuilder};
use kview_printer::{Options, Registry};
use kview_view::overview_navigation;
use serde::Serialize;
use std::sync::Arc;
use tokio::runtime::Builder;
use tracing::{error, info};

pub mod cli;
pub mod manifests;
pub mod render;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let _logging_guard = kview_common::logging::initialize(APP_NAME)?;
    info!("{} v{} started", APP_NAME, APP_VERSION);

    if let Err(error) = run_application(&args) {
        error!("{} v{} terminated with an error: {}", APP_NAME, APP_VERSION, error);
        Err(error)
    } else {
        info!("{} v{} stopped", APP_NAME, APP_VERSION);
        Ok(())
    }
}

fn run_application(args: &cli::Args) -> Result<()> {
    let rt = Builder::new_current_thread().enable_all().build()?;

    let config = rt.block_on(Config::load_or_default(args.config.as_deref()))?;
    if args.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let objects = rt.block_on(read_manifests(args))?;
    let cache = Arc::new(MemoryCache::from_objects(objects.iter().cloned())?);
    info!("Loaded {} objects from {} manifests", cache.len(), args.manifests.len());

    let options = Options::new(cache.clone())
        .with_paths(PathBuilder::new(config.content_root.as_str()))
        .with_context(args.context(&config.context));
    let registry = Registry::with_defaults();

    if args.navigation {
        let navigation = overview_navigation(&options.paths, args.namespace())?;
        print_json(&navigation, config.pretty)
    } else if let Some(kind) = &args.list {
        let kind = Kind::from(config.resolve_kind(kind));
        let objects = cache.list(&CacheQuery::new(args.namespace(), kind.clone()))?;
        let table = registry.render_list(&kind, &objects, &options)?;
        print_json(&table, config.pretty)
    } else {
        let components = render::render_objects(&registry, &objects, &options)?;
        print_json(&components, config.pretty)
    }
}

async fn read_manifests(args: &cli::Args) -> Result<Vec<DynamicObject>> {
    let mut objects = Vec::new();
    for path in &args.manifests {
        objects.extend(manifests::read(path, args.namespace()).await?);
    }

    Ok(objects)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    println!("{json}");
    Ok(())
}
