use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{cycle, ParseCatalogError};
use crate::dsp::{filter::FilterType, oscillator::Waveform};

/// How a preset voices a note: the oscillator shape and one fixed filter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimbreSpec {
    pub waveform: Waveform,
    pub filter: FilterType,
    pub cutoff_hz: f32,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timbre {
    #[default]
    WarmPad,
    LofiDreams,
    EtherealBells,
    SynthWave,
    AmbientChoir,
}

impl Timbre {
    /// Catalog order, which is also the cycling order.
    pub const ALL: [Timbre; 5] = [
        Timbre::WarmPad,
        Timbre::LofiDreams,
        Timbre::EtherealBells,
        Timbre::SynthWave,
        Timbre::AmbientChoir,
    ];

    pub fn spec(self) -> TimbreSpec {
        let (waveform, filter, cutoff_hz) = match self {
            Timbre::WarmPad => (Waveform::Sawtooth, FilterType::LowPass, 800.0),
            Timbre::LofiDreams => (Waveform::Triangle, FilterType::LowPass, 400.0),
            Timbre::EtherealBells => (Waveform::Sine, FilterType::HighPass, 200.0),
            Timbre::SynthWave => (Waveform::Square, FilterType::BandPass, 1000.0),
            Timbre::AmbientChoir => (Waveform::Sine, FilterType::LowPass, 600.0),
        };
        TimbreSpec {
            waveform,
            filter,
            cutoff_hz,
        }
    }

    /// Catalog key, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Timbre::WarmPad => "warm-pad",
            Timbre::LofiDreams => "lofi-dreams",
            Timbre::EtherealBells => "ethereal-bells",
            Timbre::SynthWave => "synth-wave",
            Timbre::AmbientChoir => "ambient-choir",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Timbre::WarmPad => "Warm Pad",
            Timbre::LofiDreams => "Lofi Dreams",
            Timbre::EtherealBells => "Ethereal Bells",
            Timbre::SynthWave => "Synth Wave",
            Timbre::AmbientChoir => "Ambient Choir",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

impl fmt::Display for Timbre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timbre {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|timbre| timbre.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCatalogError::Timbre(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_catalog() {
        let warm = Timbre::WarmPad.spec();
        assert_eq!(warm.waveform, Waveform::Sawtooth);
        assert_eq!(warm.filter, FilterType::LowPass);
        assert_eq!(warm.cutoff_hz, 800.0);

        let bells = Timbre::EtherealBells.spec();
        assert_eq!(bells.waveform, Waveform::Sine);
        assert_eq!(bells.filter, FilterType::HighPass);
        assert_eq!(bells.cutoff_hz, 200.0);

        let wave = Timbre::SynthWave.spec();
        assert_eq!(wave.waveform, Waveform::Square);
        assert_eq!(wave.filter, FilterType::BandPass);
        assert_eq!(wave.cutoff_hz, 1000.0);

        assert_eq!(Timbre::LofiDreams.spec().cutoff_hz, 400.0);
        assert_eq!(Timbre::AmbientChoir.spec().cutoff_hz, 600.0);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        assert_eq!(Timbre::AmbientChoir.next(), Timbre::WarmPad);
        assert_eq!(Timbre::WarmPad.previous(), Timbre::AmbientChoir);
        assert_eq!(Timbre::LofiDreams.previous().next(), Timbre::LofiDreams);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for timbre in Timbre::ALL {
            assert_eq!(timbre.name().parse::<Timbre>(), Ok(timbre));
        }
        assert!("choir".parse::<Timbre>().is_err());
    }
}
