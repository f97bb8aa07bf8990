use openstreetmap::FetchedTile;
use slint::ComponentHandle;
use anyhow::Context;
use crate::MainWindow;
use crate::app::utils::to_slint_image;

/// Margin added around the tile on each axis
pub const WINDOW_PADDING: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
}

/// Window size for an image of the given dimensions
pub fn window_geometry(image_width: u32, image_height: u32) -> WindowGeometry {
    WindowGeometry {
        width: image_width.saturating_add(WINDOW_PADDING),
        height: image_height.saturating_add(WINDOW_PADDING),
    }
}

/// Open the viewer window on the tile and run the event loop until it is closed
pub fn show_tile(tile: FetchedTile) -> Result<(), anyhow::Error> {
    let main_window = MainWindow::new().context("Failed to create viewer window")?;

    let geometry = window_geometry(tile.width(), tile.height());
    info!("Showing {} in a {}x{} window", tile.url, geometry.width, geometry.height);

    main_window.set_tile_url(tile.url.as_str().into());
    main_window.set_tile_image(to_slint_image(&tile.image));
    main_window
        .window()
        .set_size(slint::LogicalSize::new(geometry.width as f32, geometry.height as f32));

    main_window.run().context("Viewer event loop failed")?;
    Ok(())
}
