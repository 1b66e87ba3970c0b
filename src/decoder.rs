//! Pipeline orchestration: header parse through color conversion.

use log::debug;

use crate::bmp_writer;
use crate::color;
use crate::dct;
use crate::error::JpegError;
use crate::quantization;
use crate::scan_decoder::{self, Mcu};
use crate::stream_reader::{Header, JpegStreamReader};
use crate::FrameInfo;

/// Baseline JPEG decoder over an in-memory byte stream.
pub struct JpegDecoder<'a> {
    source: &'a [u8],
}

impl<'a> JpegDecoder<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self { source }
    }

    /// Parses the marker structure and entropy payload without decoding
    /// pixels. Useful for inspecting a file's tables and geometry.
    pub fn read_header(&self) -> Result<Header, JpegError> {
        JpegStreamReader::new(self.source).read_header()
    }

    /// Runs the full pipeline and returns the decoded raster.
    pub fn decode(&self) -> Result<DecodedImage, JpegError> {
        let header = self.read_header()?;
        let mut mcus = scan_decoder::decode_scan(&header)?;
        debug!("entropy decode: {} MCU(s)", mcus.len());
        quantization::dequantize(&header, &mut mcus)?;
        dct::inverse_dct(&header, &mut mcus);
        color::ycbcr_to_rgb(&mut mcus);
        debug!(
            "decoded {}x{} pixels",
            header.frame_info.width, header.frame_info.height
        );
        Ok(DecodedImage {
            frame_info: header.frame_info,
            mcus,
        })
    }
}

/// A fully decoded raster: one RGB triple per pixel, stored per MCU.
#[derive(Debug)]
pub struct DecodedImage {
    pub frame_info: FrameInfo,
    mcus: Vec<Mcu>,
}

impl DecodedImage {
    /// The decoded blocks in scan order, RGB in the channel arrays.
    pub fn mcus(&self) -> &[Mcu] {
        &self.mcus
    }

    /// Serializes the raster as a 24-bit BMP file image.
    pub fn to_bmp(&self) -> Vec<u8> {
        bmp_writer::encode_bmp(&self.frame_info, &self.mcus)
    }
}
