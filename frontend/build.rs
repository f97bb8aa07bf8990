fn main() {
    // Compile the SLINT UI
    slint_build::compile("ui/tile_viewer.slint").unwrap();
}
