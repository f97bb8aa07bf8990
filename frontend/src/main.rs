mod app;

slint::include_modules!();

extern crate pretty_env_logger;
#[macro_use] extern crate log;

fn main() -> Result<(), anyhow::Error> {
    pretty_env_logger::init();

    info!("Starting tile viewer...");

    // Nothing is shown unless the tile was fetched and decoded
    let tile = app::tile::load_tile()?;

    // Blocks until the window is closed
    app::window::show_tile(tile)?;

    info!("Viewer window closed, shutting down");
    Ok(())
}
