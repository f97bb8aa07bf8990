extern crate pretty_env_logger;
#[macro_use] extern crate log;

use openstreetmap::{OpenStreetMapAPI, DEFAULT_TILE};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    pretty_env_logger::init();

    info!("OpenStreetMap tile fetch check");

    let api = OpenStreetMapAPI::new()?;
    let tile = api.download_tile(&DEFAULT_TILE).await?;

    println!("Fetched {} ({}x{})", tile.url, tile.width(), tile.height());

    Ok(())
}
