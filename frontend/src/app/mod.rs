pub mod tile;
pub mod utils;
pub mod window;
