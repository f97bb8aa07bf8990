use image::DynamicImage;
use slint::{Rgba8Pixel, SharedPixelBuffer};

/// Convert a decoded raster into a Slint image (RGBA8 pixel buffer)
pub fn to_slint_image(img: &DynamicImage) -> slint::Image {
    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    let pixel_buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(rgba_img.as_raw(), width, height);
    slint::Image::from_rgba8(pixel_buffer)
}
