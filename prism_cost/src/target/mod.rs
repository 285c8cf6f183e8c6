//! Target descriptors: architecture plus the CPU features available on it.
//!
//! A [`TargetDescription`] is resolved once per compilation session and handed
//! to the cost model, which reads the flags it cares about at construction.
//!
//! # Textual Form
//!
//! ```text
//! x86_64+sse4.1,avx2
//! aarch64+asimd,lse
//! generic
//! ```
//!
//! The architecture name comes first, optionally followed by `+` and a
//! comma-separated feature list.

mod features;

pub use features::{Architecture, CpuFeature, CpuFeatureSet};

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Environment variable overriding the host target.
pub const TARGET_ENV_VAR: &str = "PRISM_JIT_TARGET";

// =============================================================================
// Errors
// =============================================================================

/// Error resolving a target description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("empty target description")]
    Empty,
    #[error("target description is not valid UTF-8: {0:?}")]
    InvalidEncoding(String),
    #[error("unknown architecture `{0}`")]
    UnknownArchitecture(String),
    #[error("unknown CPU feature `{0}`")]
    UnknownFeature(String),
    #[error("CPU feature `{feature}` is not available on {arch}")]
    FeatureNotOnArch {
        feature: CpuFeature,
        arch: Architecture,
    },
}

// =============================================================================
// Target Description
// =============================================================================

/// Architecture and available instruction-set extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTarget")]
pub struct TargetDescription {
    arch: Architecture,
    features: CpuFeatureSet,
}

/// Unvalidated serialized form.
#[derive(Deserialize)]
struct RawTarget {
    arch: Architecture,
    #[serde(default)]
    features: CpuFeatureSet,
}

impl TryFrom<RawTarget> for TargetDescription {
    type Error = TargetError;

    fn try_from(raw: RawTarget) -> Result<Self, Self::Error> {
        TargetDescription::new(raw.arch, raw.features)
    }
}

impl TargetDescription {
    /// Create a target, checking that every feature belongs to `arch`.
    pub fn new(arch: Architecture, features: CpuFeatureSet) -> Result<Self, TargetError> {
        if let Some(feature) = features.iter().find(|f| f.architecture() != arch) {
            return Err(TargetError::FeatureNotOnArch { feature, arch });
        }
        Ok(Self { arch, features })
    }

    /// x86-64 with the given features.
    pub fn x86_64<I: IntoIterator<Item = CpuFeature>>(features: I) -> Result<Self, TargetError> {
        Self::new(Architecture::X86_64, features.into_iter().collect())
    }

    /// A target with no tracked features.
    pub const fn generic() -> Self {
        Self {
            arch: Architecture::Generic,
            features: CpuFeatureSet::empty(),
        }
    }

    /// The target architecture.
    #[inline]
    pub const fn arch(&self) -> Architecture {
        self.arch
    }

    /// The available features.
    #[inline]
    pub const fn features(&self) -> CpuFeatureSet {
        self.features
    }

    /// Check if `feature` is available.
    #[inline]
    pub const fn contains(&self, feature: CpuFeature) -> bool {
        self.features.contains(feature)
    }

    /// The machine this process runs on. Detected once and cached.
    pub fn host() -> Self {
        static HOST: OnceLock<TargetDescription> = OnceLock::new();
        *HOST.get_or_init(detect_host)
    }

    /// Resolve the session target from `PRISM_JIT_TARGET`, falling back to
    /// the host when the variable is unset.
    ///
    /// A set value that is not valid UTF-8 or does not parse is an error.
    pub fn from_env() -> Result<Self, TargetError> {
        Self::resolve(env::var(TARGET_ENV_VAR))
    }

    fn resolve(value: Result<String, VarError>) -> Result<Self, TargetError> {
        let result = match value {
            Err(VarError::NotPresent) => return Ok(Self::host()),
            Err(VarError::NotUnicode(raw)) => Err(TargetError::InvalidEncoding(
                raw.to_string_lossy().into_owned(),
            )),
            Ok(text) => text.parse(),
        };
        result.map_err(|err| {
            tracing::warn!("invalid {}: {}", TARGET_ENV_VAR, err);
            err
        })
    }
}

impl FromStr for TargetDescription {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TargetError::Empty);
        }
        let (arch, features) = match s.split_once('+') {
            Some((arch, features)) => (arch, Some(features)),
            None => (s, None),
        };
        let arch: Architecture = arch.parse()?;
        let features = features
            .into_iter()
            .flat_map(|list| list.split(','))
            .filter(|name| !name.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<CpuFeature>, _>>()?;
        Self::new(arch, features.into())
    }
}

impl fmt::Display for TargetDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arch)?;
        if !self.features.is_empty() {
            write!(f, "+{}", self.features)?;
        }
        Ok(())
    }
}

// =============================================================================
// Host Detection
// =============================================================================

#[cfg(target_arch = "x86_64")]
fn detect_host() -> TargetDescription {
    let mut features = CpuFeatureSet::empty();
    macro_rules! probe {
        ($($name:tt => $feature:expr),* $(,)?) => {
            $(if is_x86_feature_detected!($name) {
                features = features.with($feature);
            })*
        };
    }
    probe! {
        "sse" => CpuFeature::Sse,
        "sse2" => CpuFeature::Sse2,
        "sse3" => CpuFeature::Sse3,
        "ssse3" => CpuFeature::Ssse3,
        "sse4.1" => CpuFeature::Sse41,
        "sse4.2" => CpuFeature::Sse42,
        "popcnt" => CpuFeature::Popcnt,
        "lzcnt" => CpuFeature::Lzcnt,
        "bmi1" => CpuFeature::Bmi1,
        "bmi2" => CpuFeature::Bmi2,
        "avx" => CpuFeature::Avx,
        "avx2" => CpuFeature::Avx2,
        "fma" => CpuFeature::Fma,
        "avx512f" => CpuFeature::Avx512F,
    }
    TargetDescription {
        arch: Architecture::X86_64,
        features,
    }
}

#[cfg(target_arch = "aarch64")]
fn detect_host() -> TargetDescription {
    let mut features = CpuFeatureSet::empty();
    if std::arch::is_aarch64_feature_detected!("asimd") {
        features = features.with(CpuFeature::Asimd);
    }
    if std::arch::is_aarch64_feature_detected!("crc") {
        features = features.with(CpuFeature::Crc32);
    }
    if std::arch::is_aarch64_feature_detected!("lse") {
        features = features.with(CpuFeature::Lse);
    }
    TargetDescription {
        arch: Architecture::AArch64,
        features,
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_host() -> TargetDescription {
    TargetDescription::generic()
}

// =============================================================================
// Tests
// =============================================================================
