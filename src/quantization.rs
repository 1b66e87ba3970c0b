//! Dequantization of entropy-decoded coefficient blocks.

use crate::constants::ZIGZAG_ORDER;
use crate::error::JpegError;
use crate::scan_decoder::Mcu;
use crate::stream_reader::{Header, QuantizationTable};

/// Scales one block in place. The table travels in zigzag order while the
/// block is already spatial, so the multiply routes through the zigzag map.
pub fn dequantize_block(table: &QuantizationTable, block: &mut [i32; 64]) {
    for i in 0..64 {
        block[ZIGZAG_ORDER[i]] *= table.values[i] as i32;
    }
}

/// Dequantizes every component of every MCU with the table its frame header
/// entry selects.
pub fn dequantize(header: &Header, mcus: &mut [Mcu]) -> Result<(), JpegError> {
    for c in 0..header.frame_info.component_count as usize {
        let table_id = header.components[c].quantization_table_id as usize;
        let table = header.quantization_tables[table_id]
            .as_ref()
            .ok_or(JpegError::UninitializedQuantizationTable)?;
        for mcu in mcus.iter_mut() {
            dequantize_block(table, mcu.channel_mut(c));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{dequantize_block, QuantizationTable};
    use crate::constants::ZIGZAG_ORDER;

    #[test]
    fn identity_table_leaves_the_block_alone() {
        let table = QuantizationTable { values: [1; 64] };
        let mut block = [0i32; 64];
        for (i, value) in block.iter_mut().enumerate() {
            *value = i as i32 - 32;
        }
        let original = block;
        dequantize_block(&table, &mut block);
        assert_eq!(block, original);
    }

    #[test]
    fn table_entries_apply_through_the_zigzag() {
        let mut values = [0u16; 64];
        for (i, value) in values.iter_mut().enumerate() {
            *value = i as u16 + 1;
        }
        let table = QuantizationTable { values };
        let mut block = [1i32; 64];
        dequantize_block(&table, &mut block);
        // The k-th zigzag coefficient was scaled by k + 1.
        for k in 0..64 {
            assert_eq!(block[ZIGZAG_ORDER[k]], k as i32 + 1);
        }
    }
}
