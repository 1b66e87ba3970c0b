//! Huffman tables and the bit-level reader for entropy-coded data.

use crate::constants::{MAX_HUFFMAN_CODE_LENGTH, MAX_HUFFMAN_SYMBOL_COUNT};
use crate::error::JpegError;

/// A canonical Huffman table as carried by a DHT segment.
///
/// Codes are regenerated from the per-length symbol counts: the first code of
/// each length is the previous length's last code plus one, shifted left, and
/// codes of equal length are consecutive.
#[derive(Debug, Clone)]
pub struct HuffmanTable {
    /// `offsets[i]` is the number of codes with length <= `i` bits;
    /// `offsets[0]` is 0 and `offsets[16]` is the total symbol count.
    pub offsets: [u32; MAX_HUFFMAN_CODE_LENGTH + 1],
    /// Symbol values in code order.
    pub symbols: [u8; MAX_HUFFMAN_SYMBOL_COUNT],
    codes: [u32; MAX_HUFFMAN_SYMBOL_COUNT],
}

impl HuffmanTable {
    /// Builds a table from the 16 per-length code counts and the flat symbol
    /// list of a DHT segment.
    pub fn from_counts(counts: &[u8; 16], symbols: &[u8]) -> Result<Self, JpegError> {
        let mut offsets = [0u32; MAX_HUFFMAN_CODE_LENGTH + 1];
        let mut total = 0u32;
        for (i, &count) in counts.iter().enumerate() {
            total += count as u32;
            offsets[i + 1] = total;
        }
        if total as usize > MAX_HUFFMAN_SYMBOL_COUNT || symbols.len() < total as usize {
            return Err(JpegError::TooManyHuffmanSymbols);
        }

        let mut table = Self {
            offsets,
            symbols: [0; MAX_HUFFMAN_SYMBOL_COUNT],
            codes: [0; MAX_HUFFMAN_SYMBOL_COUNT],
        };
        table.symbols[..total as usize].copy_from_slice(&symbols[..total as usize]);

        let mut code = 0u32;
        for length in 0..MAX_HUFFMAN_CODE_LENGTH {
            for k in table.offsets[length]..table.offsets[length + 1] {
                table.codes[k as usize] = code;
                code += 1;
            }
            code <<= 1;
        }
        Ok(table)
    }

    /// Total number of symbols in the table.
    pub fn symbol_count(&self) -> usize {
        self.offsets[MAX_HUFFMAN_CODE_LENGTH] as usize
    }

    /// Reads bits until they form a code of this table and returns its symbol.
    ///
    /// Codes are matched shortest-first; a prefix code guarantees at most one
    /// match per length. Failing to match within 16 bits is fatal, as is
    /// running out of data mid-code.
    pub fn decode(&self, reader: &mut BitReader<'_>) -> Result<u8, JpegError> {
        let mut code = 0u32;
        for length in 0..MAX_HUFFMAN_CODE_LENGTH {
            let bit = reader.read_bit().ok_or(JpegError::EndOfBitStream)?;
            code = (code << 1) | bit as u32;
            for k in self.offsets[length]..self.offsets[length + 1] {
                if self.codes[k as usize] == code {
                    return Ok(self.symbols[k as usize]);
                }
            }
        }
        Err(JpegError::HuffmanCodeNotFound)
    }
}

/// Recovers a signed coefficient from its magnitude bits (ISO/IEC 10918-1,
/// F.2.2.1 EXTEND). A leading 0 bit marks a negative value.
pub fn extend(value: u32, length: u8) -> i32 {
    if length == 0 {
        return 0;
    }
    if value < (1 << (length - 1)) {
        value as i32 - (1 << length) + 1
    } else {
        value as i32
    }
}

/// Reads individual bits from an entropy-coded payload, MSB first.
///
/// The payload has already had marker stuffing removed, so the reader never
/// interprets bytes. Exhaustion is reported as `None` and is sticky.
pub struct BitReader<'a> {
    data: &'a [u8],
    next_byte: usize,
    next_bit: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            next_byte: 0,
            next_bit: 0,
        }
    }

    /// Next bit of the stream, or `None` once all bits have been read.
    pub fn read_bit(&mut self) -> Option<u8> {
        if self.next_byte >= self.data.len() {
            return None;
        }
        let bit = (self.data[self.next_byte] >> (7 - self.next_bit)) & 1;
        self.next_bit += 1;
        if self.next_bit == 8 {
            self.next_bit = 0;
            self.next_byte += 1;
        }
        Some(bit)
    }

    /// Reads `count` bits into an unsigned value, first bit most significant.
    pub fn read_bits(&mut self, count: u8) -> Option<u32> {
        let mut bits = 0u32;
        for _ in 0..count {
            bits = (bits << 1) | self.read_bit()? as u32;
        }
        Some(bits)
    }

    /// Advances to the next byte boundary; no-op when already aligned or
    /// exhausted. Used to step over the position a restart marker occupied.
    pub fn align(&mut self) {
        if self.next_byte >= self.data.len() {
            return;
        }
        if self.next_bit != 0 {
            self.next_bit = 0;
            self.next_byte += 1;
        }
    }
}
