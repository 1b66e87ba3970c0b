// End-to-end decoding tests over hand-assembled baseline JPEG streams.
//
// Each helper emits one marker segment; tests compose them into complete
// files, decode, and check the BMP output or the rejection category.

#[cfg(test)]
mod baseline_decode_validation {
    use jpeg2bmp::decoder::JpegDecoder;
    use jpeg2bmp::ErrorKind;

    fn segment(out: &mut Vec<u8>, marker: u8, payload: &[u8]) {
        out.push(0xFF);
        out.push(marker);
        let length = (payload.len() + 2) as u16;
        out.extend_from_slice(&length.to_be_bytes());
        out.extend_from_slice(payload);
    }

    /// 8-bit DQT with the given values in zigzag order.
    fn dqt(out: &mut Vec<u8>, id: u8, values: &[u16; 64]) {
        let mut payload = vec![id];
        payload.extend(values.iter().map(|&v| v as u8));
        segment(out, 0xDB, &payload);
    }

    /// SOF0, 8-bit precision, 1x1 sampling, quantization table 0 everywhere.
    fn sof0(out: &mut Vec<u8>, width: u16, height: u16, component_ids: &[u8]) {
        let mut payload = vec![8];
        payload.extend_from_slice(&height.to_be_bytes());
        payload.extend_from_slice(&width.to_be_bytes());
        payload.push(component_ids.len() as u8);
        for &id in component_ids {
            payload.extend_from_slice(&[id, 0x11, 0]);
        }
        segment(out, 0xC0, &payload);
    }

    fn dht(out: &mut Vec<u8>, class: u8, id: u8, counts: &[u8; 16], symbols: &[u8]) {
        let mut payload = vec![(class << 4) | id];
        payload.extend_from_slice(counts);
        payload.extend_from_slice(symbols);
        segment(out, 0xC4, &payload);
    }

    /// SOS selecting DC/AC tables 0 for every listed component.
    fn sos(out: &mut Vec<u8>, component_ids: &[u8]) {
        let mut payload = vec![component_ids.len() as u8];
        for &id in component_ids {
            payload.extend_from_slice(&[id, 0x00]);
        }
        payload.extend_from_slice(&[0, 63, 0]);
        segment(out, 0xDA, &payload);
    }

    fn dri(out: &mut Vec<u8>, interval: u16) {
        let mut payload = Vec::new();
        payload.extend_from_slice(&interval.to_be_bytes());
        segment(out, 0xDD, &payload);
    }

    /// One code of length 1 mapping to `symbol`.
    fn counts_one() -> [u8; 16] {
        let mut counts = [0u8; 16];
        counts[0] = 1;
        counts
    }

    /// DC table covering categories 0..=2 with codes 0, 10, 110.
    fn counts_three() -> [u8; 16] {
        let mut counts = [0u8; 16];
        counts[0] = 1;
        counts[1] = 1;
        counts[2] = 1;
        counts
    }

    #[test]
    fn solid_gray_8x8_decodes_to_uniform_mid_gray() {
        let mut file = vec![0xFF, 0xD8];
        dqt(&mut file, 0, &[1; 64]);
        sof0(&mut file, 8, 8, &[1, 2, 3]);
        dht(&mut file, 0, 0, &counts_one(), &[0x00]);
        dht(&mut file, 1, 0, &counts_one(), &[0x00]);
        sos(&mut file, &[1, 2, 3]);
        // Three components, each DC category 0 then EOB: six 0 bits.
        file.push(0x00);
        file.extend_from_slice(&[0xFF, 0xD9]);

        let image = JpegDecoder::new(&file).decode().unwrap();
        let bmp = image.to_bmp();
        // 8 rows of 24 pixel bytes, no padding.
        assert_eq!(bmp.len(), 14 + 12 + 8 * (8 * 3));
        assert!(bmp[26..].iter().all(|&b| b == 128));
    }

    #[test]
    fn restart_interval_of_one_matches_unrestarted_encoding() {
        // The same four-MCU grayscale image, encoded once as a plain scan
        // with differential DC and once with a restart marker after every
        // MCU (absolute DC values, byte-aligned).
        let mut quant = [1u16; 64];
        quant[0] = 16;

        let mut plain = vec![0xFF, 0xD8];
        dqt(&mut plain, 0, &quant);
        sof0(&mut plain, 16, 16, &[1]);
        dht(&mut plain, 0, 0, &counts_three(), &[0, 1, 2]);
        dht(&mut plain, 1, 0, &counts_one(), &[0x00]);
        sos(&mut plain, &[1]);
        // DC differences +3, -2, +1, 0 -> DC values 3, 1, 2, 2:
        // 110 11 0 | 110 01 0 | 10 1 0 | 0 0
        plain.extend_from_slice(&[0b1101_1011, 0b0010_1010, 0b0000_0000]);
        plain.extend_from_slice(&[0xFF, 0xD9]);

        let mut restarted = vec![0xFF, 0xD8];
        dqt(&mut restarted, 0, &quant);
        sof0(&mut restarted, 16, 16, &[1]);
        dht(&mut restarted, 0, 0, &counts_three(), &[0, 1, 2]);
        dht(&mut restarted, 1, 0, &counts_one(), &[0x00]);
        dri(&mut restarted, 1);
        sos(&mut restarted, &[1]);
        // Absolute DC values 3, 1, 2, 2, one byte per MCU, RSTn between.
        restarted.extend_from_slice(&[0b1101_1000]); // 110 11 0, padded
        restarted.extend_from_slice(&[0xFF, 0xD0]);
        restarted.extend_from_slice(&[0b1010_0000]); // 10 1 0, padded
        restarted.extend_from_slice(&[0xFF, 0xD1]);
        restarted.extend_from_slice(&[0b1101_0000]); // 110 10 0, padded
        restarted.extend_from_slice(&[0xFF, 0xD2]);
        restarted.extend_from_slice(&[0b1101_0000]);
        restarted.extend_from_slice(&[0xFF, 0xD9]);

        let bmp_plain = JpegDecoder::new(&plain).decode().unwrap().to_bmp();
        let bmp_restarted = JpegDecoder::new(&restarted).decode().unwrap().to_bmp();
        assert_eq!(bmp_plain.len(), 14 + 12 + 16 * (16 * 3));
        assert_eq!(bmp_plain, bmp_restarted);
    }

    #[test]
    fn stuffed_ff_bytes_decode_like_their_unstuffed_equivalent() {
        // AC table: code 0 -> run 0 / category 10, code 1 -> EOB. The
        // 10-bit coefficient value 0b0000001111 places four 1 bits at the
        // start of the second payload byte; padding with ones completes a
        // literal 0xFF that must be stuffed. Padding the same data with
        // zeros instead yields 0xF8 and no stuffing, but the identical
        // coefficients.
        let build = |payload: &[u8]| {
            let mut file = vec![0xFF, 0xD8];
            dqt(&mut file, 0, &[1; 64]);
            sof0(&mut file, 8, 8, &[1]);
            dht(&mut file, 0, 0, &counts_one(), &[0x00]);
            let mut ac_counts = [0u8; 16];
            ac_counts[0] = 2;
            dht(&mut file, 1, 0, &ac_counts, &[0x0A, 0x00]);
            sos(&mut file, &[1]);
            file.extend_from_slice(payload);
            file.extend_from_slice(&[0xFF, 0xD9]);
            file
        };

        let stuffed = build(&[0x00, 0xFF, 0x00]);
        let unstuffed = build(&[0x00, 0xF8]);
        assert!(stuffed.windows(2).any(|w| w == [0xFF, 0x00]));

        let bmp_stuffed = JpegDecoder::new(&stuffed).decode().unwrap().to_bmp();
        let bmp_unstuffed = JpegDecoder::new(&unstuffed).decode().unwrap().to_bmp();
        assert_eq!(bmp_stuffed, bmp_unstuffed);
    }

    #[test]
    fn solid_color_image_keeps_channel_ordering() {
        // Y flat at 0, Cb slightly positive, Cr slightly negative: blue
        // above green above red everywhere.
        let mut quant = [1u16; 64];
        quant[0] = 8;
        let mut file = vec![0xFF, 0xD8];
        dqt(&mut file, 0, &quant);
        sof0(&mut file, 8, 8, &[1, 2, 3]);
        dht(&mut file, 0, 0, &counts_three(), &[0, 1, 2]);
        dht(&mut file, 1, 0, &counts_one(), &[0x00]);
        sos(&mut file, &[1, 2, 3]);
        // Y: 0 0 | Cb: 110 10 0 (+2) | Cr: 110 01 0 (-2), padded:
        file.extend_from_slice(&[0b0011_0100, 0b1100_1000]);
        file.extend_from_slice(&[0xFF, 0xD9]);

        let image = JpegDecoder::new(&file).decode().unwrap();
        let bmp = image.to_bmp();
        let pixels = &bmp[26..];
        let (b, g, r) = (pixels[0], pixels[1], pixels[2]);
        assert!(b > g && g > r, "expected B > G > R, got {} {} {}", b, g, r);
        assert!((127..=129).contains(&g));
        // Uniform across the whole raster.
        for pixel in pixels.chunks(3) {
            assert_eq!(pixel, [b, g, r]);
        }
    }

    #[test]
    fn cmyk_component_count_is_rejected() {
        let mut file = vec![0xFF, 0xD8];
        dqt(&mut file, 0, &[1; 64]);
        sof0(&mut file, 8, 8, &[1, 2, 3, 4]);
        let err = JpegDecoder::new(&file).decode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn progressive_sof_is_rejected() {
        let mut file = vec![0xFF, 0xD8];
        segment(&mut file, 0xC2, &[8, 0, 8, 0, 8, 1, 1, 0x11, 0]);
        let err = JpegDecoder::new(&file).decode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn sof_length_mismatch_is_rejected() {
        let mut file = vec![0xFF, 0xD8];
        file.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x0C]); // length should be 0x0B
        file.extend_from_slice(&[8, 0, 8, 0, 8, 1, 1, 0x11, 0]);
        let err = JpegDecoder::new(&file).decode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn empty_scan_payload_is_a_decode_error() {
        let mut file = vec![0xFF, 0xD8];
        dqt(&mut file, 0, &[1; 64]);
        sof0(&mut file, 8, 8, &[1]);
        dht(&mut file, 0, 0, &counts_one(), &[0x00]);
        dht(&mut file, 1, 0, &counts_one(), &[0x00]);
        sos(&mut file, &[1]);
        file.extend_from_slice(&[0xFF, 0xD9]);
        let err = JpegDecoder::new(&file).decode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn skipped_metadata_segments_do_not_disturb_decoding() {
        let mut file = vec![0xFF, 0xD8];
        segment(&mut file, 0xE0, b"JFIF\0extra"); // APP0
        segment(&mut file, 0xFE, b"made by hand"); // COM
        dqt(&mut file, 0, &[1; 64]);
        segment(&mut file, 0xED, &[0u8; 9]); // APP13
        sof0(&mut file, 8, 8, &[1]);
        dht(&mut file, 0, 0, &counts_one(), &[0x00]);
        dht(&mut file, 1, 0, &counts_one(), &[0x00]);
        sos(&mut file, &[1]);
        file.push(0x00);
        file.extend_from_slice(&[0xFF, 0xD9]);

        let image = JpegDecoder::new(&file).decode().unwrap();
        let bmp = image.to_bmp();
        assert!(bmp[26..].iter().all(|&b| b == 128));
    }

    #[test]
    fn sixteen_bit_quantization_tables_are_accepted() {
        let mut file = vec![0xFF, 0xD8];
        // Hand-build a 16-bit DQT: precision nibble 1, table 0.
        let mut payload = vec![0x10];
        for i in 0..64u16 {
            let value: u16 = if i == 0 { 256 } else { 1 };
            payload.extend_from_slice(&value.to_be_bytes());
        }
        segment(&mut file, 0xDB, &payload);
        sof0(&mut file, 8, 8, &[1]);
        dht(&mut file, 0, 0, &counts_three(), &[0, 1, 2]);
        dht(&mut file, 1, 0, &counts_one(), &[0x00]);
        sos(&mut file, &[1]);
        // DC +1, scaled by 256: a visibly bright flat block. 10 1 0 padded.
        file.push(0b1010_0000);
        file.extend_from_slice(&[0xFF, 0xD9]);

        let image = JpegDecoder::new(&file).decode().unwrap();
        let bmp = image.to_bmp();
        let first = bmp[26];
        assert!(first > 128 + 20, "sample {} not brightened", first);
        assert!(bmp[26..].iter().all(|&b| b == first));
    }
}
