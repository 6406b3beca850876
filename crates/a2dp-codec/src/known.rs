use core::fmt;

use tracing::trace;

use crate::CodecIdentifier;

/// Well-known codec identifiers, for display and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnownCodec {
    /// Subband codec.
    Sbc,
    /// Advanced Audio Coding.
    Aac,
    /// aptX (APT Ltd., company `0x004F`, codec `0x0001`).
    AptX,
    /// aptX HD (Qualcomm, company `0x00D7`, codec `0x0024`).
    AptXHd,
    /// LDAC (Sony, company `0x012D`, codec `0x00AA`).
    Ldac,
    /// Opus (Google, company `0x00E0`, codec `0x0001`).
    Opus,
}

const KNOWN_CODECS: [(CodecIdentifier, KnownCodec); 6] = [
    (CodecIdentifier::SBC, KnownCodec::Sbc),
    (CodecIdentifier::AAC, KnownCodec::Aac),
    (CodecIdentifier::APTX, KnownCodec::AptX),
    (CodecIdentifier::APTX_HD, KnownCodec::AptXHd),
    (CodecIdentifier::LDAC, KnownCodec::Ldac),
    (CodecIdentifier::OPUS, KnownCodec::Opus),
];

impl KnownCodec {
    /// All the well-known codecs.
    pub const ALL: [Self; 6] = [Self::Sbc, Self::Aac, Self::AptX, Self::AptXHd, Self::Ldac, Self::Opus];

    /// Returns the well-known codec matching the given identifier.
    pub fn lookup(id: &CodecIdentifier) -> Option<Self> {
        let found = KNOWN_CODECS
            .iter()
            .find(|(known_id, _)| known_id == id)
            .map(|(_, codec)| *codec);

        if found.is_none() {
            trace!(codec_id = id.to_u64(), "Codec identifier not in the well-known table");
        }

        found
    }

    /// Codec identifier of this codec.
    pub const fn identifier(self) -> CodecIdentifier {
        match self {
            Self::Sbc => CodecIdentifier::SBC,
            Self::Aac => CodecIdentifier::AAC,
            Self::AptX => CodecIdentifier::APTX,
            Self::AptXHd => CodecIdentifier::APTX_HD,
            Self::Ldac => CodecIdentifier::LDAC,
            Self::Opus => CodecIdentifier::OPUS,
        }
    }

    /// Human readable codec name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sbc => "SBC",
            Self::Aac => "AAC",
            Self::AptX => "aptX",
            Self::AptXHd => "aptX HD",
            Self::Ldac => "LDAC",
            Self::Opus => "Opus",
        }
    }
}

impl fmt::Display for KnownCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
