/// Zigzag scan order as defined in ISO/IEC 10918-1, Figure 5.
///
/// `ZIGZAG_ORDER[k]` is the row-major position inside an 8x8 block of the
/// k-th coefficient in transmission order. Quantization tables travel in this
/// order too, so dequantization indexes blocks through this table.
pub const ZIGZAG_ORDER: [usize; 64] = [
    0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

// Limits from ISO/IEC 10918-1, Annex B and Annex F.
pub const MAX_HUFFMAN_SYMBOL_COUNT: usize = 162;
pub const MAX_HUFFMAN_CODE_LENGTH: usize = 16;
pub const MAX_TABLE_ID: u8 = 3;

// An 8-bit sample bounds the magnitude categories of DCT coefficients
// (table F.1): up to 11 bits for a DC difference, 10 for an AC coefficient.
pub const MAX_DC_CATEGORY: u8 = 11;
pub const MAX_AC_CATEGORY: u8 = 10;

#[cfg(test)]
mod tests {
    use super::ZIGZAG_ORDER;

    #[test]
    fn zigzag_is_a_permutation() {
        let mut seen = [false; 64];
        for &index in &ZIGZAG_ORDER {
            assert!(index < 64);
            assert!(!seen[index], "position {} mapped twice", index);
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn zigzag_inverts_itself_through_its_inverse() {
        let mut inverse = [0usize; 64];
        for (k, &pos) in ZIGZAG_ORDER.iter().enumerate() {
            inverse[pos] = k;
        }
        for k in 0..64 {
            assert_eq!(inverse[ZIGZAG_ORDER[k]], k);
            assert_eq!(ZIGZAG_ORDER[inverse[k]], k);
        }
    }

    #[test]
    fn zigzag_walks_the_diagonals() {
        // Low-frequency coefficients come first: the first three entries
        // cover the top-left corner of the block.
        assert_eq!(&ZIGZAG_ORDER[..3], &[0, 1, 8]);
        assert_eq!(ZIGZAG_ORDER[63], 63);
    }
}
