use openstreetmap::{FetchedTile, OpenStreetMapAPI, TileSource, DEFAULT_TILE};

/// Fetch and decode the inspected tile from the public server
pub fn load_tile() -> Result<FetchedTile, anyhow::Error> {
    load_tile_from(TileSource::default())
}

/// Fetch and decode the inspected tile, blocking the calling thread until the
/// download has finished or failed
pub fn load_tile_from(source: TileSource) -> Result<FetchedTile, anyhow::Error> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let api = OpenStreetMapAPI::with_source(source)?;
        api.download_tile(&DEFAULT_TILE).await
    })
}
