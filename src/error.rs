use thiserror::Error;

/// Broad failure categories, useful when the exact variant does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed byte stream: bad lengths, bad marker sequences, bad IDs.
    Format,
    /// Well-formed but outside the baseline subset this decoder handles.
    Unsupported,
    /// Entropy-coded data could not be decoded.
    Decode,
    /// The image would exceed addressable memory.
    Resource,
    /// Reading the input or writing the output failed.
    Io,
}

#[derive(Error, Debug)]
pub enum JpegError {
    // Malformed streams
    #[error("File does not begin with an SOI marker")]
    StartOfImageMarkerNotFound,
    #[error("Expected a marker")]
    MarkerExpected,
    #[error("File ended prematurely")]
    UnexpectedEndOfStream,
    #[error("Unknown marker: 0x{0:02X}")]
    UnknownMarker(u8),
    #[error("Invalid segment length")]
    InvalidSegmentLength,
    #[error("SOF segment length does not match its contents")]
    SofSegmentInvalid,
    #[error("DQT segment length does not match its contents")]
    DqtSegmentInvalid,
    #[error("DHT segment length does not match its contents")]
    DhtSegmentInvalid,
    #[error("SOS segment length does not match its contents")]
    SosSegmentInvalid,
    #[error("DRI segment length does not match its contents")]
    DriSegmentInvalid,
    #[error("Invalid quantization table ID: {0}")]
    InvalidQuantizationTableId(u8),
    #[error("Invalid Huffman table ID: {0}")]
    InvalidHuffmanTableId(u8),
    #[error("Too many symbols in Huffman table")]
    TooManyHuffmanSymbols,
    #[error("Invalid color component ID: {0}")]
    InvalidComponentId(u8),
    #[error("Duplicate color component ID: {0}")]
    DuplicateComponentId(u8),
    #[error("{0} color components given (1 or 3 required)")]
    InvalidComponentCount(u8),
    #[error("Frame dimensions must be nonzero")]
    InvalidDimensions,
    #[error("Multiple SOF markers detected")]
    DuplicateStartOfFrame,
    #[error("SOS detected before SOF")]
    StartOfScanBeforeFrame,
    #[error("EOI detected before SOS")]
    EndOfImageBeforeScan,
    #[error("RSTN detected before SOS")]
    RestartMarkerBeforeScan,
    #[error("Invalid marker during compressed data scan: 0x{0:02X}")]
    InvalidMarkerInScan(u8),
    #[error("Color component references an uninitialized quantization table")]
    UninitializedQuantizationTable,
    #[error("Color component references an uninitialized Huffman DC table")]
    UninitializedHuffmanDcTable,
    #[error("Color component references an uninitialized Huffman AC table")]
    UninitializedHuffmanAcTable,

    // Outside the baseline subset
    #[error("SOF marker not supported: 0x{0:02X}")]
    UnsupportedFrameType(u8),
    #[error("Invalid precision: {0} (8 required)")]
    UnsupportedPrecision(u8),
    #[error("Arithmetic coding mode not supported")]
    ArithmeticCodingNotSupported,
    #[error("Embedded JPEGs not supported")]
    EmbeddedJpegNotSupported,
    #[error("CMYK color mode not supported")]
    CmykNotSupported,
    #[error("YIQ color mode not supported")]
    YiqNotSupported,
    #[error("Unsupported sampling factor")]
    UnsupportedSamplingFactor,
    #[error("Invalid spectral selection (baseline requires 0..63)")]
    InvalidSpectralSelection,
    #[error("Invalid successive approximation (baseline requires 0)")]
    InvalidSuccessiveApproximation,

    // Entropy decode failures
    #[error("Entropy-coded data ended prematurely")]
    EndOfBitStream,
    #[error("Huffman code not found in table")]
    HuffmanCodeNotFound,
    #[error("DC coefficient length greater than 11")]
    DcCoefficientLengthTooLong,
    #[error("AC coefficient length greater than 10")]
    AcCoefficientLengthTooLong,
    #[error("Zero run-length exceeded the block")]
    ZeroRunTooLong,

    // Resource limits
    #[error("Image dimensions exceed addressable memory")]
    ImageTooLarge,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JpegError {
    /// Category of this error per the taxonomy above.
    pub fn kind(&self) -> ErrorKind {
        use JpegError::*;
        match self {
            StartOfImageMarkerNotFound
            | MarkerExpected
            | UnexpectedEndOfStream
            | UnknownMarker(_)
            | InvalidSegmentLength
            | SofSegmentInvalid
            | DqtSegmentInvalid
            | DhtSegmentInvalid
            | SosSegmentInvalid
            | DriSegmentInvalid
            | InvalidQuantizationTableId(_)
            | InvalidHuffmanTableId(_)
            | TooManyHuffmanSymbols
            | InvalidComponentId(_)
            | DuplicateComponentId(_)
            | InvalidComponentCount(_)
            | InvalidDimensions
            | DuplicateStartOfFrame
            | StartOfScanBeforeFrame
            | EndOfImageBeforeScan
            | RestartMarkerBeforeScan
            | InvalidMarkerInScan(_)
            | UninitializedQuantizationTable
            | UninitializedHuffmanDcTable
            | UninitializedHuffmanAcTable => ErrorKind::Format,

            UnsupportedFrameType(_)
            | UnsupportedPrecision(_)
            | ArithmeticCodingNotSupported
            | EmbeddedJpegNotSupported
            | CmykNotSupported
            | YiqNotSupported
            | UnsupportedSamplingFactor
            | InvalidSpectralSelection
            | InvalidSuccessiveApproximation => ErrorKind::Unsupported,

            EndOfBitStream
            | HuffmanCodeNotFound
            | DcCoefficientLengthTooLong
            | AcCoefficientLengthTooLong
            | ZeroRunTooLong => ErrorKind::Decode,

            ImageTooLarge => ErrorKind::Resource,

            Io(_) => ErrorKind::Io,
        }
    }
}
