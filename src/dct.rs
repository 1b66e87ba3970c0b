//! Inverse Discrete Cosine Transform for 8x8 coefficient blocks.

use std::f64::consts::PI;

use crate::scan_decoder::Mcu;
use crate::stream_reader::Header;

pub const BLOCK_SIZE: usize = 8;

/// Cosine basis map: `map[i * 8 + j] = C(i)/2 * cos((2j+1) * i * pi / 16)`
/// with `C(0) = 1/sqrt(2)` and `C(k) = 1` otherwise. Row `i` is the i-th
/// basis function sampled at the eight half-sample offsets.
fn basis_map() -> [f64; 64] {
    let mut map = [0.0f64; 64];
    for i in 0..BLOCK_SIZE {
        let c = if i == 0 {
            1.0 / f64::sqrt(2.0) / 2.0
        } else {
            1.0 / 2.0
        };
        for j in 0..BLOCK_SIZE {
            map[i * 8 + j] = c * f64::cos((2 * j + 1) as f64 * i as f64 * PI / 16.0);
        }
    }
    map
}

/// 2-D IDCT of one block: a 1-D pass down each column into a floating-point
/// scratch block, then a 1-D pass along each row, truncated back to
/// integers. Samples stay centered on zero; the +128 level shift is folded
/// into color conversion.
pub fn idct_block(map: &[f64; 64], block: &mut [i32; 64]) {
    let mut scratch = [0.0f64; 64];
    for column in 0..BLOCK_SIZE {
        for i in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for j in 0..BLOCK_SIZE {
                sum += block[j * 8 + column] as f64 * map[j * 8 + i];
            }
            scratch[i * 8 + column] = sum;
        }
    }
    for row in 0..BLOCK_SIZE {
        for i in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for j in 0..BLOCK_SIZE {
                sum += scratch[row * 8 + j] * map[j * 8 + i];
            }
            block[row * 8 + i] = sum as i32;
        }
    }
}

/// Transforms every component of every MCU from the frequency domain back to
/// spatial samples.
pub fn inverse_dct(header: &Header, mcus: &mut [Mcu]) {
    let map = basis_map();
    for c in 0..header.frame_info.component_count as usize {
        for mcu in mcus.iter_mut() {
            idct_block(&map, mcu.channel_mut(c));
        }
    }
}
