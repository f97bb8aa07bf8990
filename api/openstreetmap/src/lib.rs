#[macro_use] extern crate log;

use anyhow::{anyhow, Context};
use image::DynamicImage;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

/// Public tile server the viewer fetches from
pub const TILE_SERVER: &str = "http://tile.openstreetmap.org";

/// Client identification sent with every request
pub const USER_AGENT: &str = "curl/7.66.0";

/// The tile the viewer inspects
pub const DEFAULT_TILE: TileCoord = TileCoord { z: 17, x: 68084, y: 43784 };

/// Zoom/x/y address of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    pub z: u32,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }

    /// Path of the tile relative to the server root
    pub fn path(&self) -> String {
        format!("{}/{}/{}.png", self.z, self.x, self.y)
    }
}

/// Where tiles come from and how the client identifies itself
#[derive(Debug, Clone)]
pub struct TileSource {
    pub base_url: String,
    pub user_agent: String,
}

impl TileSource {
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Full locator for a tile on this source
    pub fn tile_url(&self, tile: &TileCoord) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), tile.path())
    }
}

impl Default for TileSource {
    fn default() -> Self {
        Self::new(TILE_SERVER, USER_AGENT)
    }
}

/// A decoded tile together with the locator it came from
#[derive(Debug, Clone)]
pub struct FetchedTile {
    pub url: String,
    pub image: DynamicImage,
}

impl FetchedTile {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Decode raw tile bytes, detecting the format from the content
pub fn decode_tile(bytes: &[u8]) -> Result<DynamicImage, anyhow::Error> {
    image::load_from_memory(bytes).context("Failed to decode tile image")
}

/// OpenStreetMap tile API client
pub struct OpenStreetMapAPI {
    client: Client,
    source: TileSource,
}

impl OpenStreetMapAPI {
    /// Create a client for the public tile server
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::with_source(TileSource::default())
    }

    /// Create a client for an arbitrary tile source
    pub fn with_source(source: TileSource) -> Result<Self, anyhow::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = Client::builder()
            .user_agent(source.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, source })
    }

    /// Fetch the raw bytes of a single tile. One request, no retry.
    pub async fn fetch_tile_bytes(&self, tile: &TileCoord) -> Result<Vec<u8>, anyhow::Error> {
        let url = self.source.tile_url(tile);
        info!("Downloading {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        let status = resp.status();
        debug!("{} answered HTTP {}", url, status);
        if !status.is_success() {
            return Err(anyhow!("Failed to download tile: HTTP {}", status));
        }

        let bytes = resp.bytes().await.context("Failed to read tile body")?;
        if bytes.is_empty() {
            return Err(anyhow!("Failed to download tile: empty response body"));
        }
        debug!("Received {} bytes", bytes.len());

        Ok(bytes.to_vec())
    }

    /// Download a single tile and decode it
    pub async fn download_tile(&self, tile: &TileCoord) -> Result<FetchedTile, anyhow::Error> {
        let bytes = self.fetch_tile_bytes(tile).await?;
        let image = decode_tile(&bytes)?;
        info!("Decoded tile {}x{}", image.width(), image.height());

        Ok(FetchedTile {
            url: self.source.tile_url(tile),
            image,
        })
    }
}
