use crate::constants::{BASE_RATE, RESIZE_QUIET, REVEAL_RATE_MULTIPLIER, SETTLE_TOLERANCE};
use crate::converge::Rates;
use crate::error::TuningError;
use crate::params::RateClass;
use crate::timeline::TimelineSchedule;
use std::time::Duration;

/// Tunables for one effect instance. Defaults come from `constants.rs`.
///
/// Deserialized configs are checked with [`EffectConfig::validate`];
/// `attach` checks again for configs built in code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "file::EffectConfigFile", into = "file::EffectConfigFile")
)]
pub struct EffectConfig {
    /// Fraction of the remaining distance covered per tick by size/position fields.
    pub base_rate: f32,
    /// Rate multiplier for the opacity and text-rise fields.
    pub reveal_multiplier: f32,
    /// Per-field settle threshold, in each field's native unit.
    pub tolerance: f32,
    /// Quiet period before a burst of resizes triggers a recompute.
    pub resize_quiet: Duration,
    pub schedule: TimelineSchedule,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            base_rate: BASE_RATE,
            reveal_multiplier: REVEAL_RATE_MULTIPLIER,
            tolerance: SETTLE_TOLERANCE,
            resize_quiet: RESIZE_QUIET,
            schedule: TimelineSchedule::default(),
        }
    }
}

impl EffectConfig {
    pub fn rates(&self) -> Rates {
        Rates::from_base(self.base_rate, self.reveal_multiplier)
    }

    /// Both rate classes must lie in `(0, 1]` (no overshoot, always
    /// progressing) and the tolerance must be positive.
    pub fn validate(&self) -> Result<(), TuningError> {
        let rates = self.rates();
        for (class, rate) in [
            (RateClass::Transform, rates.transform),
            (RateClass::Reveal, rates.reveal),
        ] {
            if rate.is_nan() || rate <= 0.0 || rate > 1.0 {
                return Err(TuningError::RateOutOfRange { class, rate });
            }
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(TuningError::Tolerance(self.tolerance));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod file {
    use super::EffectConfig;
    use crate::error::TuningError;
    use crate::timeline::TimelineSchedule;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    /// On-disk form; missing keys fall back to the defaults.
    #[derive(Serialize, Deserialize)]
    #[serde(default)]
    pub struct EffectConfigFile {
        base_rate: f32,
        reveal_multiplier: f32,
        tolerance: f32,
        #[serde(rename = "resize_quiet_ms", with = "millis")]
        resize_quiet: Duration,
        schedule: TimelineSchedule,
    }

    impl Default for EffectConfigFile {
        fn default() -> Self {
            EffectConfig::default().into()
        }
    }

    impl From<EffectConfig> for EffectConfigFile {
        fn from(c: EffectConfig) -> Self {
            Self {
                base_rate: c.base_rate,
                reveal_multiplier: c.reveal_multiplier,
                tolerance: c.tolerance,
                resize_quiet: c.resize_quiet,
                schedule: c.schedule,
            }
        }
    }

    impl TryFrom<EffectConfigFile> for EffectConfig {
        type Error = TuningError;

        fn try_from(f: EffectConfigFile) -> Result<Self, Self::Error> {
            let config = Self {
                base_rate: f.base_rate,
                reveal_multiplier: f.reveal_multiplier,
                tolerance: f.tolerance,
                resize_quiet: f.resize_quiet,
                schedule: f.schedule,
            };
            config.validate()?;
            Ok(config)
        }
    }

    mod millis {
        use serde::{Deserialize, Deserializer, Serializer};
        use std::time::Duration;

        pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_u64(d.as_millis() as u64)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
            u64::deserialize(d).map(Duration::from_millis)
        }
    }
}
