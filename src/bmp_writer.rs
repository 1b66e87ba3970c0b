//! Serialization of the decoded raster as a 24-bit BMP.

use crate::scan_decoder::Mcu;
use crate::FrameInfo;

const FILE_HEADER_SIZE: u32 = 14;
const CORE_HEADER_SIZE: u32 = 12;
const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + CORE_HEADER_SIZE;

/// Encodes color-converted MCUs as a BMP file image.
///
/// The layout is the legacy one: a BITMAPFILEHEADER followed by a 12-byte
/// BITMAPCOREHEADER, then pixel rows bottom-to-top in B, G, R byte order,
/// each row zero-padded to a multiple of four bytes. Columns and rows beyond
/// the frame geometry (MCU overhang on non-multiple-of-8 sizes) are not
/// emitted.
pub fn encode_bmp(frame: &FrameInfo, mcus: &[Mcu]) -> Vec<u8> {
    let width = frame.width as usize;
    let height = frame.height as usize;
    let mcu_width = frame.mcu_width();
    let padding = (4 - (width * 3) % 4) % 4;
    let size = PIXEL_DATA_OFFSET as usize + height * (width * 3 + padding);

    let mut out = Vec::with_capacity(size);
    out.push(b'B');
    out.push(b'M');
    put_u32(&mut out, size as u32);
    put_u32(&mut out, 0);
    put_u32(&mut out, PIXEL_DATA_OFFSET);
    put_u32(&mut out, CORE_HEADER_SIZE);
    put_u16(&mut out, frame.width as u16);
    put_u16(&mut out, frame.height as u16);
    put_u16(&mut out, 1); // color planes
    put_u16(&mut out, 24); // bits per pixel

    for row in (0..height).rev() {
        let mcu_row = row / 8;
        let pixel_row = row % 8;
        for column in 0..width {
            let mcu = &mcus[mcu_row * mcu_width + column / 8];
            let pixel = pixel_row * 8 + column % 8;
            out.push(mcu.b()[pixel] as u8);
            out.push(mcu.g()[pixel] as u8);
            out.push(mcu.r()[pixel] as u8);
        }
        for _ in 0..padding {
            out.push(0);
        }
    }
    out
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}
