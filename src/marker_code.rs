use crate::error::JpegError;

/// Marker bytes recognized in a baseline JPEG stream.
///
/// Every marker is introduced by [`MARKER_START_BYTE`]; any number of extra
/// `0xFF` fill bytes may precede the code itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MarkerCode {
    /// TEM: temporary private use in arithmetic coding. Carries no length.
    Temporary = 0x01,

    /// SOF0: Start of Frame (Baseline DCT). The only frame type supported.
    StartOfFrameBaseline = 0xC0,
    /// SOF1: Extended sequential DCT.
    StartOfFrameExtendedSequential = 0xC1,
    /// SOF2: Progressive DCT.
    StartOfFrameProgressive = 0xC2,
    /// SOF3: Lossless (sequential).
    StartOfFrameLossless = 0xC3,
    /// DHT: Defines one or more Huffman tables.
    DefineHuffmanTable = 0xC4,
    /// SOF5: Differential sequential DCT.
    StartOfFrameDifferentialSequential = 0xC5,
    /// SOF6: Differential progressive DCT.
    StartOfFrameDifferentialProgressive = 0xC6,
    /// SOF7: Differential lossless.
    StartOfFrameDifferentialLossless = 0xC7,
    /// JPG: reserved for JPEG extensions.
    JpegExtension = 0xC8,
    /// SOF9: Extended sequential DCT, arithmetic coding.
    StartOfFrameExtendedArithmetic = 0xC9,
    /// SOF10: Progressive DCT, arithmetic coding.
    StartOfFrameProgressiveArithmetic = 0xCA,
    /// SOF11: Lossless, arithmetic coding.
    StartOfFrameLosslessArithmetic = 0xCB,
    /// DAC: Defines arithmetic coding conditioning.
    DefineArithmeticConditioning = 0xCC,
    /// SOF13: Differential sequential DCT, arithmetic coding.
    StartOfFrameDifferentialSequentialArithmetic = 0xCD,
    /// SOF14: Differential progressive DCT, arithmetic coding.
    StartOfFrameDifferentialProgressiveArithmetic = 0xCE,
    /// SOF15: Differential lossless, arithmetic coding.
    StartOfFrameDifferentialLosslessArithmetic = 0xCF,

    /// RST0: Restart marker 0.
    Rst0 = 0xD0,
    /// RST1: Restart marker 1.
    Rst1 = 0xD1,
    /// RST2: Restart marker 2.
    Rst2 = 0xD2,
    /// RST3: Restart marker 3.
    Rst3 = 0xD3,
    /// RST4: Restart marker 4.
    Rst4 = 0xD4,
    /// RST5: Restart marker 5.
    Rst5 = 0xD5,
    /// RST6: Restart marker 6.
    Rst6 = 0xD6,
    /// RST7: Restart marker 7.
    Rst7 = 0xD7,

    /// SOI: Marks the start of an image.
    StartOfImage = 0xD8,
    /// EOI: Marks the end of an image.
    EndOfImage = 0xD9,
    /// SOS: Marks the start of scan.
    StartOfScan = 0xDA,
    /// DQT: Defines one or more quantization tables.
    DefineQuantizationTable = 0xDB,
    /// DNL: Defines the number of lines in a scan.
    DefineNumberOfLines = 0xDC,
    /// DRI: Defines the restart interval used in succeeding scans.
    DefineRestartInterval = 0xDD,
    /// DHP: Defines hierarchical progression.
    DefineHierarchicalProgression = 0xDE,
    /// EXP: Expands reference components.
    ExpandReferenceComponents = 0xDF,

    /// APP0: Application data 0, used for the JFIF header.
    ApplicationData0 = 0xE0,
    /// APP1: Application data 1, used for EXIF or XMP metadata.
    ApplicationData1 = 0xE1,
    /// APP2: Application data 2, used for ICC profiles.
    ApplicationData2 = 0xE2,
    /// APP3: Application data 3.
    ApplicationData3 = 0xE3,
    /// APP4: Application data 4.
    ApplicationData4 = 0xE4,
    /// APP5: Application data 5.
    ApplicationData5 = 0xE5,
    /// APP6: Application data 6.
    ApplicationData6 = 0xE6,
    /// APP7: Application data 7.
    ApplicationData7 = 0xE7,
    /// APP8: Application data 8.
    ApplicationData8 = 0xE8,
    /// APP9: Application data 9.
    ApplicationData9 = 0xE9,
    /// APP10: Application data 10.
    ApplicationData10 = 0xEA,
    /// APP11: Application data 11.
    ApplicationData11 = 0xEB,
    /// APP12: Application data 12, used for picture info.
    ApplicationData12 = 0xEC,
    /// APP13: Application data 13, used by Photoshop IRB.
    ApplicationData13 = 0xED,
    /// APP14: Application data 14, used by Adobe.
    ApplicationData14 = 0xEE,
    /// APP15: Application data 15.
    ApplicationData15 = 0xEF,

    /// JPG0: reserved extension 0.
    JpegExtension0 = 0xF0,
    /// JPG1: reserved extension 1.
    JpegExtension1 = 0xF1,
    /// JPG2: reserved extension 2.
    JpegExtension2 = 0xF2,
    /// JPG3: reserved extension 3.
    JpegExtension3 = 0xF3,
    /// JPG4: reserved extension 4.
    JpegExtension4 = 0xF4,
    /// JPG5: reserved extension 5.
    JpegExtension5 = 0xF5,
    /// JPG6: reserved extension 6.
    JpegExtension6 = 0xF6,
    /// JPG7: reserved extension 7.
    JpegExtension7 = 0xF7,
    /// JPG8: reserved extension 8.
    JpegExtension8 = 0xF8,
    /// JPG9: reserved extension 9.
    JpegExtension9 = 0xF9,
    /// JPG10: reserved extension 10.
    JpegExtension10 = 0xFA,
    /// JPG11: reserved extension 11.
    JpegExtension11 = 0xFB,
    /// JPG12: reserved extension 12.
    JpegExtension12 = 0xFC,
    /// JPG13: reserved extension 13.
    JpegExtension13 = 0xFD,

    /// COM: Comment block.
    Comment = 0xFE,
}

impl MarkerCode {
    /// APP0 through APP15.
    pub fn is_application_data(self) -> bool {
        matches!(self as u8, 0xE0..=0xEF)
    }

    /// RST0 through RST7.
    pub fn is_restart(self) -> bool {
        matches!(self as u8, 0xD0..=0xD7)
    }

    /// Any SOFn (or the reserved JPG code sharing their range) other than
    /// DHT and DAC. SOF0 itself matches too; callers dispatch it first.
    pub fn is_frame(self) -> bool {
        matches!(self as u8, 0xC0..=0xCF)
            && self != MarkerCode::DefineHuffmanTable
            && self != MarkerCode::DefineArithmeticConditioning
    }

    /// JPG0 through JPG13, skipped like comments.
    pub fn is_reserved_extension(self) -> bool {
        matches!(self as u8, 0xF0..=0xFD)
    }
}

impl std::convert::TryFrom<u8> for MarkerCode {
    type Error = JpegError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Self::Temporary),
            0xC0 => Ok(Self::StartOfFrameBaseline),
            0xC1 => Ok(Self::StartOfFrameExtendedSequential),
            0xC2 => Ok(Self::StartOfFrameProgressive),
            0xC3 => Ok(Self::StartOfFrameLossless),
            0xC4 => Ok(Self::DefineHuffmanTable),
            0xC5 => Ok(Self::StartOfFrameDifferentialSequential),
            0xC6 => Ok(Self::StartOfFrameDifferentialProgressive),
            0xC7 => Ok(Self::StartOfFrameDifferentialLossless),
            0xC8 => Ok(Self::JpegExtension),
            0xC9 => Ok(Self::StartOfFrameExtendedArithmetic),
            0xCA => Ok(Self::StartOfFrameProgressiveArithmetic),
            0xCB => Ok(Self::StartOfFrameLosslessArithmetic),
            0xCC => Ok(Self::DefineArithmeticConditioning),
            0xCD => Ok(Self::StartOfFrameDifferentialSequentialArithmetic),
            0xCE => Ok(Self::StartOfFrameDifferentialProgressiveArithmetic),
            0xCF => Ok(Self::StartOfFrameDifferentialLosslessArithmetic),
            0xD0 => Ok(Self::Rst0),
            0xD1 => Ok(Self::Rst1),
            0xD2 => Ok(Self::Rst2),
            0xD3 => Ok(Self::Rst3),
            0xD4 => Ok(Self::Rst4),
            0xD5 => Ok(Self::Rst5),
            0xD6 => Ok(Self::Rst6),
            0xD7 => Ok(Self::Rst7),
            0xD8 => Ok(Self::StartOfImage),
            0xD9 => Ok(Self::EndOfImage),
            0xDA => Ok(Self::StartOfScan),
            0xDB => Ok(Self::DefineQuantizationTable),
            0xDC => Ok(Self::DefineNumberOfLines),
            0xDD => Ok(Self::DefineRestartInterval),
            0xDE => Ok(Self::DefineHierarchicalProgression),
            0xDF => Ok(Self::ExpandReferenceComponents),
            0xE0 => Ok(Self::ApplicationData0),
            0xE1 => Ok(Self::ApplicationData1),
            0xE2 => Ok(Self::ApplicationData2),
            0xE3 => Ok(Self::ApplicationData3),
            0xE4 => Ok(Self::ApplicationData4),
            0xE5 => Ok(Self::ApplicationData5),
            0xE6 => Ok(Self::ApplicationData6),
            0xE7 => Ok(Self::ApplicationData7),
            0xE8 => Ok(Self::ApplicationData8),
            0xE9 => Ok(Self::ApplicationData9),
            0xEA => Ok(Self::ApplicationData10),
            0xEB => Ok(Self::ApplicationData11),
            0xEC => Ok(Self::ApplicationData12),
            0xED => Ok(Self::ApplicationData13),
            0xEE => Ok(Self::ApplicationData14),
            0xEF => Ok(Self::ApplicationData15),
            0xF0 => Ok(Self::JpegExtension0),
            0xF1 => Ok(Self::JpegExtension1),
            0xF2 => Ok(Self::JpegExtension2),
            0xF3 => Ok(Self::JpegExtension3),
            0xF4 => Ok(Self::JpegExtension4),
            0xF5 => Ok(Self::JpegExtension5),
            0xF6 => Ok(Self::JpegExtension6),
            0xF7 => Ok(Self::JpegExtension7),
            0xF8 => Ok(Self::JpegExtension8),
            0xF9 => Ok(Self::JpegExtension9),
            0xFA => Ok(Self::JpegExtension10),
            0xFB => Ok(Self::JpegExtension11),
            0xFC => Ok(Self::JpegExtension12),
            0xFD => Ok(Self::JpegExtension13),
            0xFE => Ok(Self::Comment),
            _ => Err(JpegError::UnknownMarker(value)),
        }
    }
}

pub const MARKER_START_BYTE: u8 = 0xFF;
pub const RESTART_MARKER_BASE: u8 = 0xD0;
pub const RESTART_MARKER_COUNT: u8 = 8;
