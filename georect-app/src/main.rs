use anyhow::Context;
use georect::{constants::COMPLETION_MESSAGE, prelude::*};
use std::time::Duration;

/// Bootstraps the map into a headless document and prints what was built.
///
/// Usage: `georect-app [config.json]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    georect::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => MapConfig::load(&path)
            .with_context(|| format!("failed to load map config from {path}"))?,
        None => MapConfig::default(),
    };

    let mut document = HeadlessDocument::new();
    let map = Bootstrapper::new(config)
        .on_complete(|map| log::debug!("{} with {} layer(s)", COMPLETION_MESSAGE, map.layers().len()))
        .run(
            &TimeoutLoader::new(StaticLoader::default(), Duration::from_secs(5)),
            &mut document,
        )
        .await
        .context("map bootstrap failed")?;

    print_summary(&map, &document);
    Ok(())
}

fn print_summary(map: &Map, document: &HeadlessDocument) {
    let range = map.zoom_range();
    println!("container : {:?}", map.container());
    println!("body      : {} element(s)", document.body().len());
    println!("zoom      : {} in [{}, {}]", map.zoom(), range.min, range.max);
    println!("center    : {:.5}, {:.5}", map.center().lat, map.center().lng);

    for layer in map.layers() {
        println!("layer     : {} ({}) {}", layer.id(), layer.layer_type(), layer.options());
    }
    for behavior in map.behaviors() {
        println!("behavior  : {} {}", behavior.kind(), behavior.options());
    }

    let tiles = map.visible_tiles();
    println!("tiles     : {} visible", tiles.len());
    for tile in tiles.iter().take(4) {
        println!("            {}", tile.url);
    }
}
