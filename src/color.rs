//! YCbCr to RGB conversion, the final in-place pipeline stage.

use crate::scan_decoder::Mcu;

/// Converts one pixel. `y`, `cb` and `cr` are centered on zero as produced
/// by the inverse DCT; the +128 level shift happens here. Channels clamp to
/// the 8-bit range.
pub fn ycbcr_to_rgb_pixel(y: i32, cb: i32, cr: i32) -> (i32, i32, i32) {
    let (y, cb, cr) = (y as f64, cb as f64, cr as f64);
    let r = (y + 1.402 * cr + 128.0) as i32;
    let g = (y - 0.344136 * cb - 0.714136 * cr + 128.0) as i32;
    let b = (y + 1.772 * cb + 128.0) as i32;
    (r.clamp(0, 255), g.clamp(0, 255), b.clamp(0, 255))
}

/// Converts every pixel of every MCU, overwriting the Y/Cb/Cr channels with
/// R/G/B. Grayscale images have all-zero chroma channels, which this maps to
/// R = G = B = Y + 128 and leaves the MCU uniform across channels for the
/// BMP writer.
pub fn ycbcr_to_rgb(mcus: &mut [Mcu]) {
    for mcu in mcus.iter_mut() {
        for i in 0..64 {
            let (r, g, b) = ycbcr_to_rgb_pixel(mcu.y[i], mcu.cb[i], mcu.cr[i]);
            mcu.y[i] = r;
            mcu.cb[i] = g;
            mcu.cr[i] = b;
        }
    }
}
