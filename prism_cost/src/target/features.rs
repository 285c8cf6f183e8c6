//! CPU feature flags and the immutable feature set.

use super::TargetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Architecture
// =============================================================================

/// Target instruction set architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    /// x86-64 (AMD64).
    #[serde(rename = "x86_64")]
    X86_64,
    /// 64-bit ARM.
    #[serde(rename = "aarch64")]
    AArch64,
    /// Any other architecture; no feature flags are tracked.
    #[serde(rename = "generic")]
    Generic,
}

impl Architecture {
    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Architecture::X86_64 => "x86_64",
            Architecture::AArch64 => "aarch64",
            Architecture::Generic => "generic",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Architecture {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x86_64" | "x86-64" | "amd64" => Ok(Architecture::X86_64),
            "aarch64" | "arm64" => Ok(Architecture::AArch64),
            "generic" => Ok(Architecture::Generic),
            other => Err(TargetError::UnknownArchitecture(other.to_string())),
        }
    }
}

// =============================================================================
// CPU Features
// =============================================================================

/// A single instruction-set extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum CpuFeature {
    #[serde(rename = "sse")]
    Sse = 0,
    #[serde(rename = "sse2")]
    Sse2 = 1,
    #[serde(rename = "sse3")]
    Sse3 = 2,
    #[serde(rename = "ssse3")]
    Ssse3 = 3,
    /// SSE4.1: `ptest`, `pcmpeqq`, blends. Enables 16-byte array compares.
    #[serde(rename = "sse4.1")]
    Sse41 = 4,
    #[serde(rename = "sse4.2")]
    Sse42 = 5,
    #[serde(rename = "popcnt")]
    Popcnt = 6,
    #[serde(rename = "lzcnt")]
    Lzcnt = 7,
    #[serde(rename = "bmi1")]
    Bmi1 = 8,
    #[serde(rename = "bmi2")]
    Bmi2 = 9,
    #[serde(rename = "avx")]
    Avx = 10,
    /// AVX2: 256-bit integer vectors. Enables 32-byte array compares.
    #[serde(rename = "avx2")]
    Avx2 = 11,
    #[serde(rename = "fma")]
    Fma = 12,
    #[serde(rename = "avx512f")]
    Avx512F = 13,
    /// Advanced SIMD (NEON).
    #[serde(rename = "asimd")]
    Asimd = 14,
    #[serde(rename = "crc32")]
    Crc32 = 15,
    /// Large System Extensions (atomics).
    #[serde(rename = "lse")]
    Lse = 16,
}

impl CpuFeature {
    /// All known features.
    pub const ALL: [CpuFeature; 17] = [
        CpuFeature::Sse,
        CpuFeature::Sse2,
        CpuFeature::Sse3,
        CpuFeature::Ssse3,
        CpuFeature::Sse41,
        CpuFeature::Sse42,
        CpuFeature::Popcnt,
        CpuFeature::Lzcnt,
        CpuFeature::Bmi1,
        CpuFeature::Bmi2,
        CpuFeature::Avx,
        CpuFeature::Avx2,
        CpuFeature::Fma,
        CpuFeature::Avx512F,
        CpuFeature::Asimd,
        CpuFeature::Crc32,
        CpuFeature::Lse,
    ];

    /// Canonical lowercase name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            CpuFeature::Sse => "sse",
            CpuFeature::Sse2 => "sse2",
            CpuFeature::Sse3 => "sse3",
            CpuFeature::Ssse3 => "ssse3",
            CpuFeature::Sse41 => "sse4.1",
            CpuFeature::Sse42 => "sse4.2",
            CpuFeature::Popcnt => "popcnt",
            CpuFeature::Lzcnt => "lzcnt",
            CpuFeature::Bmi1 => "bmi1",
            CpuFeature::Bmi2 => "bmi2",
            CpuFeature::Avx => "avx",
            CpuFeature::Avx2 => "avx2",
            CpuFeature::Fma => "fma",
            CpuFeature::Avx512F => "avx512f",
            CpuFeature::Asimd => "asimd",
            CpuFeature::Crc32 => "crc32",
            CpuFeature::Lse => "lse",
        }
    }

    /// The architecture this feature belongs to.
    pub const fn architecture(self) -> Architecture {
        match self {
            CpuFeature::Asimd | CpuFeature::Crc32 | CpuFeature::Lse => Architecture::AArch64,
            _ => Architecture::X86_64,
        }
    }

    #[inline]
    const fn bit(self) -> u32 {
        1 << (self as u8)
    }
}

impl fmt::Display for CpuFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CpuFeature {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = match name.as_str() {
            "sse4_1" => "sse4.1",
            "sse4_2" => "sse4.2",
            "neon" => "asimd",
            other => other,
        };
        CpuFeature::ALL
            .iter()
            .copied()
            .find(|f| f.name() == name)
            .ok_or_else(|| TargetError::UnknownFeature(s.trim().to_string()))
    }
}

// =============================================================================
// Feature Set
// =============================================================================

/// Immutable set of CPU features.
///
/// Stored as a bitmask, so copies are free and membership tests are O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<CpuFeature>", from = "Vec<CpuFeature>")]
pub struct CpuFeatureSet {
    bits: u32,
}

impl CpuFeatureSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Return a copy of this set with `feature` added.
    #[must_use]
    pub const fn with(self, feature: CpuFeature) -> Self {
        Self {
            bits: self.bits | feature.bit(),
        }
    }

    /// Check if `feature` is in the set.
    #[inline]
    pub const fn contains(&self, feature: CpuFeature) -> bool {
        self.bits & feature.bit() != 0
    }

    /// Check if the set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of features in the set.
    #[inline]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over the features in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = CpuFeature> + '_ {
        CpuFeature::ALL
            .iter()
            .copied()
            .filter(move |f| self.contains(*f))
    }
}

impl FromIterator<CpuFeature> for CpuFeatureSet {
    fn from_iter<I: IntoIterator<Item = CpuFeature>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CpuFeatureSet::empty(), CpuFeatureSet::with)
    }
}

impl From<Vec<CpuFeature>> for CpuFeatureSet {
    fn from(features: Vec<CpuFeature>) -> Self {
        features.into_iter().collect()
    }
}

impl From<CpuFeatureSet> for Vec<CpuFeature> {
    fn from(set: CpuFeatureSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for CpuFeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CpuFeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, feature) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(feature.name())?;
        }
        Ok(())
    }
}
