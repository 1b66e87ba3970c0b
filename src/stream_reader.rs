//! Marker-segment parsing and entropy-payload extraction.
//!
//! [`JpegStreamReader`] walks the marker structure of a baseline JPEG stream,
//! collects tables and frame geometry into a [`Header`], and strips marker
//! stuffing from the entropy-coded payload. A `Header` is only handed out
//! once the whole structure up to the scan data has been read and validated.

use std::convert::TryFrom;

use log::debug;

use crate::constants::{MAX_HUFFMAN_SYMBOL_COUNT, MAX_TABLE_ID};
use crate::error::JpegError;
use crate::huffman::HuffmanTable;
use crate::marker_code::{
    MarkerCode, MARKER_START_BYTE, RESTART_MARKER_BASE, RESTART_MARKER_COUNT,
};
use crate::FrameInfo;

/// A dequantization table from a DQT segment, stored in zigzag order.
#[derive(Debug, Clone)]
pub struct QuantizationTable {
    pub values: [u16; 64],
}

/// Per-component coding parameters, collected from SOF (sampling factors,
/// quantization table) and SOS (entropy table selectors).
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorComponent {
    /// Selected by the current scan.
    pub used: bool,
    pub horizontal_sampling_factor: u8,
    pub vertical_sampling_factor: u8,
    pub quantization_table_id: u8,
    pub dc_table_id: u8,
    pub ac_table_id: u8,
}

/// Everything the decode pipeline needs: geometry, tables, scan parameters,
/// and the unstuffed entropy-coded payload.
#[derive(Debug, Default)]
pub struct Header {
    pub frame_info: FrameInfo,
    pub quantization_tables: [Option<QuantizationTable>; 4],
    pub huffman_dc_tables: [Option<HuffmanTable>; 4],
    pub huffman_ac_tables: [Option<HuffmanTable>; 4],
    /// Components indexed by biased ID minus one; only the first
    /// `frame_info.component_count` entries are meaningful.
    pub components: [ColorComponent; 3],
    /// MCUs between restart markers; 0 disables restarts.
    pub restart_interval: u16,
    pub start_of_selection: u8,
    pub end_of_selection: u8,
    pub successive_approximation_high: u8,
    pub successive_approximation_low: u8,
    /// Component IDs in this file start at 0 rather than 1; all IDs are
    /// biased by +1 from the first 0 seen onward, in both SOF and SOS.
    pub zero_based_ids: bool,
    /// Entropy-coded payload with `FF 00` stuffing and restart markers
    /// removed.
    pub huffman_data: Vec<u8>,
}

/// Sequential reader over a JPEG byte stream.
pub struct JpegStreamReader<'a> {
    source: &'a [u8],
    position: usize,
}

impl<'a> JpegStreamReader<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Parses everything up to and including the scan header, extracts the
    /// entropy-coded payload, and validates table references.
    pub fn read_header(mut self) -> Result<Header, JpegError> {
        let mut header = Header::default();

        self.read_start_of_image()?;
        loop {
            let marker = self.read_marker()?;
            match marker {
                MarkerCode::StartOfFrameBaseline => self.read_start_of_frame(&mut header)?,
                MarkerCode::DefineQuantizationTable => {
                    self.read_quantization_tables(&mut header)?
                }
                MarkerCode::DefineHuffmanTable => self.read_huffman_tables(&mut header)?,
                MarkerCode::DefineRestartInterval => self.read_restart_interval(&mut header)?,
                MarkerCode::StartOfScan => {
                    self.read_start_of_scan(&mut header)?;
                    break;
                }
                MarkerCode::Comment
                | MarkerCode::DefineNumberOfLines
                | MarkerCode::DefineHierarchicalProgression
                | MarkerCode::ExpandReferenceComponents => self.skip_segment()?,
                // TEM carries no length field.
                MarkerCode::Temporary => {}
                MarkerCode::StartOfImage => return Err(JpegError::EmbeddedJpegNotSupported),
                MarkerCode::EndOfImage => return Err(JpegError::EndOfImageBeforeScan),
                MarkerCode::DefineArithmeticConditioning => {
                    return Err(JpegError::ArithmeticCodingNotSupported)
                }
                m if m.is_application_data() || m.is_reserved_extension() => {
                    self.skip_segment()?
                }
                m if m.is_frame() => return Err(JpegError::UnsupportedFrameType(m as u8)),
                m if m.is_restart() => return Err(JpegError::RestartMarkerBeforeScan),
                m => return Err(JpegError::UnknownMarker(m as u8)),
            }
        }
        self.read_entropy_coded_data(&mut header)?;
        Self::validate(&header)?;
        Ok(header)
    }

    fn read_byte(&mut self) -> Result<u8, JpegError> {
        if self.position >= self.source.len() {
            return Err(JpegError::UnexpectedEndOfStream);
        }
        let value = self.source[self.position];
        self.position += 1;
        Ok(value)
    }

    fn read_u16(&mut self) -> Result<u16, JpegError> {
        let hi = self.read_byte()? as u16;
        let lo = self.read_byte()? as u16;
        Ok((hi << 8) | lo)
    }

    /// Reads the next marker, tolerating any number of `FF` fill bytes
    /// between the start byte and the code.
    fn read_marker(&mut self) -> Result<MarkerCode, JpegError> {
        if self.read_byte()? != MARKER_START_BYTE {
            return Err(JpegError::MarkerExpected);
        }
        let mut code = self.read_byte()?;
        while code == MARKER_START_BYTE {
            code = self.read_byte()?;
        }
        MarkerCode::try_from(code)
    }

    /// The stream must open with exactly `FF D8`.
    fn read_start_of_image(&mut self) -> Result<(), JpegError> {
        if self.read_byte().ok() != Some(MARKER_START_BYTE)
            || self.read_byte().ok() != Some(MarkerCode::StartOfImage as u8)
        {
            return Err(JpegError::StartOfImageMarkerNotFound);
        }
        Ok(())
    }

    fn read_start_of_frame(&mut self, header: &mut Header) -> Result<(), JpegError> {
        if header.frame_info.component_count != 0 {
            return Err(JpegError::DuplicateStartOfFrame);
        }

        let length = self.read_u16()?;

        let precision = self.read_byte()?;
        if precision != 8 {
            return Err(JpegError::UnsupportedPrecision(precision));
        }

        let height = self.read_u16()?;
        let width = self.read_u16()?;
        if height == 0 || width == 0 {
            return Err(JpegError::InvalidDimensions);
        }

        let component_count = self.read_byte()?;
        if component_count == 4 {
            return Err(JpegError::CmykNotSupported);
        }
        if component_count == 0 {
            return Err(JpegError::InvalidComponentCount(0));
        }

        for _ in 0..component_count {
            let mut id = self.read_byte()?;
            // IDs are usually 1, 2, 3 but are occasionally 0-based; once a 0
            // is seen, bias every ID so components index consistently.
            if id == 0 {
                header.zero_based_ids = true;
            }
            if header.zero_based_ids {
                id = id.wrapping_add(1);
            }
            if id == 4 || id == 5 {
                return Err(JpegError::YiqNotSupported);
            }
            if id == 0 || id > 3 {
                return Err(JpegError::InvalidComponentId(id));
            }

            let component = &mut header.components[(id - 1) as usize];
            if component.used {
                return Err(JpegError::DuplicateComponentId(id));
            }
            component.used = true;

            let sampling = self.read_byte()?;
            component.horizontal_sampling_factor = sampling >> 4;
            component.vertical_sampling_factor = sampling & 0x0F;
            component.quantization_table_id = self.read_byte()?;
            if component.quantization_table_id > MAX_TABLE_ID {
                return Err(JpegError::InvalidQuantizationTableId(
                    component.quantization_table_id,
                ));
            }
        }

        header.frame_info = FrameInfo {
            width: width as u32,
            height: height as u32,
            component_count,
        };
        debug!(
            "SOF0: {}x{}, {} component(s)",
            width, height, component_count
        );

        if length as i32 - 8 - 3 * component_count as i32 != 0 {
            return Err(JpegError::SofSegmentInvalid);
        }
        Ok(())
    }

    fn read_quantization_tables(&mut self, header: &mut Header) -> Result<(), JpegError> {
        let length = self.read_u16()?;
        let mut remaining = length as i32 - 2;

        while remaining > 0 {
            let table_info = self.read_byte()?;
            remaining -= 1;

            let table_id = table_info & 0x0F;
            if table_id > MAX_TABLE_ID {
                return Err(JpegError::InvalidQuantizationTableId(table_id));
            }

            let mut values = [0u16; 64];
            if table_info >> 4 != 0 {
                // 16-bit precision table
                for value in values.iter_mut() {
                    *value = self.read_u16()?;
                }
                remaining -= 128;
            } else {
                for value in values.iter_mut() {
                    *value = self.read_byte()? as u16;
                }
                remaining -= 64;
            }
            debug!(
                "DQT: table {} ({}-bit)",
                table_id,
                if table_info >> 4 != 0 { 16 } else { 8 }
            );
            header.quantization_tables[table_id as usize] = Some(QuantizationTable { values });
        }

        if remaining != 0 {
            return Err(JpegError::DqtSegmentInvalid);
        }
        Ok(())
    }

    fn read_huffman_tables(&mut self, header: &mut Header) -> Result<(), JpegError> {
        let length = self.read_u16()?;
        let mut remaining = length as i32 - 2;

        while remaining > 0 {
            let table_info = self.read_byte()?;
            let table_id = table_info & 0x0F;
            let is_ac = table_info >> 4 != 0;
            if table_id > MAX_TABLE_ID {
                return Err(JpegError::InvalidHuffmanTableId(table_id));
            }

            let mut counts = [0u8; 16];
            for count in counts.iter_mut() {
                *count = self.read_byte()?;
            }
            let total: usize = counts.iter().map(|&c| c as usize).sum();
            if total > MAX_HUFFMAN_SYMBOL_COUNT {
                return Err(JpegError::TooManyHuffmanSymbols);
            }

            let mut symbols = [0u8; MAX_HUFFMAN_SYMBOL_COUNT];
            for symbol in symbols[..total].iter_mut() {
                *symbol = self.read_byte()?;
            }

            let table = HuffmanTable::from_counts(&counts, &symbols[..total])?;
            debug!(
                "DHT: {} table {}, {} symbols",
                if is_ac { "AC" } else { "DC" },
                table_id,
                total
            );
            if is_ac {
                header.huffman_ac_tables[table_id as usize] = Some(table);
            } else {
                header.huffman_dc_tables[table_id as usize] = Some(table);
            }

            remaining -= 17 + total as i32;
        }

        if remaining != 0 {
            return Err(JpegError::DhtSegmentInvalid);
        }
        Ok(())
    }

    fn read_restart_interval(&mut self, header: &mut Header) -> Result<(), JpegError> {
        let length = self.read_u16()?;
        header.restart_interval = self.read_u16()?;
        debug!("DRI: restart every {} MCU(s)", header.restart_interval);
        if length != 4 {
            return Err(JpegError::DriSegmentInvalid);
        }
        Ok(())
    }

    fn read_start_of_scan(&mut self, header: &mut Header) -> Result<(), JpegError> {
        if header.frame_info.component_count == 0 {
            return Err(JpegError::StartOfScanBeforeFrame);
        }

        let length = self.read_u16()?;

        for component in header.components.iter_mut() {
            component.used = false;
        }

        // The scan may select fewer components than the frame declares.
        let scan_component_count = self.read_byte()?;
        for _ in 0..scan_component_count {
            let mut id = self.read_byte()?;
            if header.zero_based_ids {
                id = id.wrapping_add(1);
            }
            if id == 0 || id > header.frame_info.component_count {
                return Err(JpegError::InvalidComponentId(id));
            }

            let component = &mut header.components[(id - 1) as usize];
            if component.used {
                return Err(JpegError::DuplicateComponentId(id));
            }
            component.used = true;

            let table_ids = self.read_byte()?;
            component.dc_table_id = table_ids >> 4;
            component.ac_table_id = table_ids & 0x0F;
            if component.dc_table_id > MAX_TABLE_ID {
                return Err(JpegError::InvalidHuffmanTableId(component.dc_table_id));
            }
            if component.ac_table_id > MAX_TABLE_ID {
                return Err(JpegError::InvalidHuffmanTableId(component.ac_table_id));
            }
        }

        header.start_of_selection = self.read_byte()?;
        header.end_of_selection = self.read_byte()?;
        let approximation = self.read_byte()?;
        header.successive_approximation_high = approximation >> 4;
        header.successive_approximation_low = approximation & 0x0F;

        // Baseline scans cover the full spectrum in one pass.
        if header.start_of_selection != 0 || header.end_of_selection != 63 {
            return Err(JpegError::InvalidSpectralSelection);
        }
        if header.successive_approximation_high != 0 || header.successive_approximation_low != 0 {
            return Err(JpegError::InvalidSuccessiveApproximation);
        }

        debug!("SOS: {} component(s) in scan", scan_component_count);

        if length as i32 - 6 - 2 * scan_component_count as i32 != 0 {
            return Err(JpegError::SosSegmentInvalid);
        }
        Ok(())
    }

    fn skip_segment(&mut self) -> Result<(), JpegError> {
        let length = self.read_u16()? as usize;
        if length < 2 {
            return Err(JpegError::InvalidSegmentLength);
        }
        let payload = length - 2;
        if self.source.len() - self.position < payload {
            return Err(JpegError::UnexpectedEndOfStream);
        }
        self.position += payload;
        Ok(())
    }

    /// Collects scan data up to EOI, resolving marker escapes: `FF 00`
    /// becomes a literal `FF`, restart markers and `FF` fill bytes are
    /// dropped, and any other marker is fatal.
    fn read_entropy_coded_data(&mut self, header: &mut Header) -> Result<(), JpegError> {
        let mut current = self.read_byte()?;
        loop {
            let last = current;
            current = self.read_byte()?;
            if last == MARKER_START_BYTE {
                if current == MarkerCode::EndOfImage as u8 {
                    break;
                } else if current == 0x00 {
                    header.huffman_data.push(MARKER_START_BYTE);
                    current = self.read_byte()?;
                } else if (RESTART_MARKER_BASE..RESTART_MARKER_BASE + RESTART_MARKER_COUNT)
                    .contains(&current)
                {
                    // Restart markers only delimit; alignment is recreated
                    // during entropy decode.
                    current = self.read_byte()?;
                } else if current == MARKER_START_BYTE {
                    continue;
                } else {
                    return Err(JpegError::InvalidMarkerInScan(current));
                }
            } else {
                header.huffman_data.push(last);
            }
        }
        debug!("entropy-coded payload: {} bytes", header.huffman_data.len());
        Ok(())
    }

    /// Cross-segment checks once the scan header has been seen: component
    /// count, sampling factors, and that every referenced table was defined.
    fn validate(header: &Header) -> Result<(), JpegError> {
        let count = header.frame_info.component_count;
        if count != 1 && count != 3 {
            return Err(JpegError::InvalidComponentCount(count));
        }

        for component in &header.components[..count as usize] {
            if component.horizontal_sampling_factor != 1
                || component.vertical_sampling_factor != 1
            {
                return Err(JpegError::UnsupportedSamplingFactor);
            }
            if header.quantization_tables[component.quantization_table_id as usize].is_none() {
                return Err(JpegError::UninitializedQuantizationTable);
            }
            if header.huffman_dc_tables[component.dc_table_id as usize].is_none() {
                return Err(JpegError::UninitializedHuffmanDcTable);
            }
            if header.huffman_ac_tables[component.ac_table_id as usize].is_none() {
                return Err(JpegError::UninitializedHuffmanAcTable);
            }
        }
        Ok(())
    }
}
