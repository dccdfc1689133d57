use image::RgbaImage;

use crate::compositing::domain::overlay_placement::VisibleRegion;

/// Nearest-neighbour scaling of `source` to `scaled_width` x `scaled_height`,
/// producing only the pixels inside `visible`.
///
/// Memory is bounded by the visible window, not the scaled size, so a face
/// far larger than the image costs no more than the image itself. Source
/// columns and rows are picked with integer arithmetic.
pub(super) fn resize_visible(
    source: &RgbaImage,
    scaled_width: u32,
    scaled_height: u32,
    visible: &VisibleRegion,
) -> RgbaImage {
    let (src_w, src_h) = source.dimensions();
    let cols: Vec<u32> = (0..visible.width)
        .map(|x| nearest_index(visible.offset_x + x, scaled_width, src_w))
        .collect();
    let rows: Vec<u32> = (0..visible.height)
        .map(|y| nearest_index(visible.offset_y + y, scaled_height, src_h))
        .collect();

    RgbaImage::from_fn(visible.width, visible.height, |x, y| {
        *source.get_pixel(cols[x as usize], rows[y as usize])
    })
}

/// Source index whose pixel centre is closest to destination pixel `i`'s centre.
fn nearest_index(i: u32, dst_len: u32, src_len: u32) -> u32 {
    let i = i as u64;
    let index = (2 * i + 1) * src_len as u64 / (2 * dst_len as u64);
    index.min(src_len as u64 - 1) as u32
}
