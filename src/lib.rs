/*!
# jpeg2bmp

`jpeg2bmp` is a pure Rust decoder for baseline sequential JPEG images
(ISO/IEC 10918-1 / ITU-T T.81, SOF0) that renders the decoded raster as a
24-bit uncompressed BMP file.

The decoder handles 8-bit precision grayscale and YCbCr streams whose
components are all sampled at 1:1, including restart intervals and custom
quantization and Huffman tables.

## Example

```rust,no_run
use jpeg2bmp::decoder::JpegDecoder;

let data = std::fs::read("photo.jpg").unwrap();
let image = JpegDecoder::new(&data).decode().unwrap();
std::fs::write("photo.bmp", image.to_bmp()).unwrap();
```

## Pipeline

Decoding is a fixed sequence of stages, each consuming the previous stage's
output in full: header parse, entropy decode, dequantization, inverse DCT,
color conversion, BMP serialization.

Progressive and hierarchical modes, arithmetic coding, and subsampled chroma
are out of scope; such streams are rejected with a descriptive error.
*/

pub mod bmp_writer;
pub mod color;
pub mod constants;
pub mod dct;
pub mod decoder;
pub mod error;
pub mod huffman;
pub mod marker_code;
pub mod quantization;
pub mod scan_decoder;
pub mod stream_reader;

pub use error::{ErrorKind, JpegError};

/// Basic geometry of a decoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInfo {
    /// Width of the frame in pixels. At most 65535 for baseline JPEG.
    pub width: u32,
    /// Height of the frame in pixels.
    pub height: u32,
    /// Number of color components (1 for grayscale, 3 for YCbCr).
    pub component_count: u8,
}

impl FrameInfo {
    /// Number of 8x8 MCU columns covering the frame width.
    pub fn mcu_width(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    /// Number of 8x8 MCU rows covering the frame height.
    pub fn mcu_height(&self) -> usize {
        (self.height as usize + 7) / 8
    }
}
