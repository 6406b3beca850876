//! Supported features field of the A2DP service record.
//!
//! The same 16 bits carry different capabilities for a source and for a sink, so the mask is only
//! ever interpreted together with a [`Role`].

use core::fmt;

use a2dp_core::{ensure_fixed_part_size, Decode, DecodeResult, Encode, EncodeResult, ReadCursor, WriteCursor};
use bitflags::bitflags;

bitflags! {
    /// Supported features of an A2DP source.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SourceFeatures: u16 {
        const PLAYER = 0x0001;
        const MIC = 0x0002;
        const TUNER = 0x0004;
        const MIXER = 0x0008;
        // Reserved bits must round-trip
        const _ = !0;
    }
}

bitflags! {
    /// Supported features of an A2DP sink.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SinkFeatures: u16 {
        const HEADPHONE = 0x0001;
        const SPEAKER = 0x0002;
        const RECORDER = 0x0004;
        const AMP = 0x0008;
        // Reserved bits must round-trip
        const _ = !0;
    }
}

/// Device role a feature mask is describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Device sending the audio stream.
    Source,
    /// Device receiving the audio stream.
    Sink,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Sink => write!(f, "sink"),
        }
    }
}

/// A single capability bit, belonging to exactly one [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Source bit 0.
    Player,
    /// Source bit 1.
    Mic,
    /// Source bit 2.
    Tuner,
    /// Source bit 3.
    Mixer,
    /// Sink bit 0.
    Headphone,
    /// Sink bit 1.
    Speaker,
    /// Sink bit 2.
    Recorder,
    /// Sink bit 3.
    Amp,
}

impl Capability {
    /// Role this capability is defined for.
    pub const fn role(self) -> Role {
        match self {
            Self::Player | Self::Mic | Self::Tuner | Self::Mixer => Role::Source,
            Self::Headphone | Self::Speaker | Self::Recorder | Self::Amp => Role::Sink,
        }
    }

    const fn bit(self) -> u16 {
        match self {
            Self::Player => SourceFeatures::PLAYER.bits(),
            Self::Mic => SourceFeatures::MIC.bits(),
            Self::Tuner => SourceFeatures::TUNER.bits(),
            Self::Mixer => SourceFeatures::MIXER.bits(),
            Self::Headphone => SinkFeatures::HEADPHONE.bits(),
            Self::Speaker => SinkFeatures::SPEAKER.bits(),
            Self::Recorder => SinkFeatures::RECORDER.bits(),
            Self::Amp => SinkFeatures::AMP.bits(),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Player => "player",
            Self::Mic => "microphone",
            Self::Tuner => "tuner",
            Self::Mixer => "mixer",
            Self::Headphone => "headphone",
            Self::Speaker => "speaker",
            Self::Recorder => "recorder",
            Self::Amp => "amplifier",
        };

        f.write_str(name)
    }
}

pub type FeatureResult<T> = Result<T, FeatureError>;

pub type FeatureError = a2dp_error::Error<FeatureErrorKind>;

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureErrorKind {
    /// The capability is not defined for the role the mask was read with.
    ///
    /// This is a caller bug, such as checking a sink capability against a source mask.
    InvalidCapabilityForRole { role: Role, capability: Capability },
}

#[cfg(feature = "std")]
impl std::error::Error for FeatureErrorKind {}

impl fmt::Display for FeatureErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapabilityForRole { role, capability } => {
                write!(
                    f,
                    "{capability} capability is not defined for the {role} role (it belongs to the {} role)",
                    capability.role()
                )
            }
        }
    }
}

/// Raw 16-bit supported features field (little-endian on the wire, bit 0 is the LSB).
///
/// Bits 4 to 15 are reserved. They are kept as-is by every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeatureMask(u16);

impl FeatureMask {
    const NAME: &'static str = "A2DP_SUPPORTED_FEATURES";

    /// Size of the field on the wire.
    pub const FIXED_PART_SIZE: usize = 2 /* supportedFeatures */;

    /// Mask with no bit set.
    pub const EMPTY: Self = Self(0);

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn from_source(features: SourceFeatures) -> Self {
        Self(features.bits())
    }

    pub const fn from_sink(features: SinkFeatures) -> Self {
        Self(features.bits())
    }

    /// Reads the mask as the features of a source, reserved bits included.
    pub const fn source(self) -> SourceFeatures {
        SourceFeatures::from_bits_retain(self.0)
    }

    /// Reads the mask as the features of a sink, reserved bits included.
    pub const fn sink(self) -> SinkFeatures {
        SinkFeatures::from_bits_retain(self.0)
    }

    /// Returns whether the capability bit is set.
    ///
    /// Fails with `InvalidCapabilityForRole` if `capability` is not defined for `role`.
    pub fn has_capability(self, role: Role, capability: Capability) -> FeatureResult<bool> {
        let bit = Self::checked_bit(role, capability)?;
        Ok((self.0 & bit) != 0)
    }

    /// Returns a copy of this mask with the capability bit set.
    ///
    /// Fails with `InvalidCapabilityForRole` if `capability` is not defined for `role`.
    pub fn set_capability(self, role: Role, capability: Capability) -> FeatureResult<Self> {
        let bit = Self::checked_bit(role, capability)?;
        Ok(Self(self.0 | bit))
    }

    /// Returns a copy of this mask with the capability bit cleared.
    ///
    /// Fails with `InvalidCapabilityForRole` if `capability` is not defined for `role`.
    pub fn clear_capability(self, role: Role, capability: Capability) -> FeatureResult<Self> {
        let bit = Self::checked_bit(role, capability)?;
        Ok(Self(self.0 & !bit))
    }

    fn checked_bit(role: Role, capability: Capability) -> FeatureResult<u16> {
        if capability.role() != role {
            return Err(FeatureError::new(
                Self::NAME,
                FeatureErrorKind::InvalidCapabilityForRole { role, capability },
            ));
        }

        Ok(capability.bit())
    }
}

impl From<SourceFeatures> for FeatureMask {
    fn from(features: SourceFeatures) -> Self {
        Self::from_source(features)
    }
}

impl From<SinkFeatures> for FeatureMask {
    fn from(features: SinkFeatures) -> Self {
        Self::from_sink(features)
    }
}

impl fmt::Display for FeatureMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

impl Encode for FeatureMask {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        ensure_fixed_part_size!(in: dst);

        dst.write_u16(self.0);

        Ok(())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn size(&self) -> usize {
        Self::FIXED_PART_SIZE
    }
}

impl<'de> Decode<'de> for FeatureMask {
    fn decode(src: &mut ReadCursor<'de>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        Ok(Self(src.read_u16()))
    }
}
