//! Chip variant selection
//!
//! The variant is fixed at build time by a Cargo feature and exposed as
//! [`ChipVariant::SELECTED`]. All variants remain available at runtime so a
//! board layer supporting several packages can pick one explicitly.

use crate::channel_map::{self, ChannelMap};

/// SAM0 package family with its own AIN pin table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipVariant {
    /// SAMD20E / SAMD21E (32 pins)
    Samd2xE,
    /// SAMD20G / SAMD21G (48 pins)
    Samd2xG,
    /// SAMD20J / SAMD21J (64 pins)
    Samd2xJ,
    /// SAMR21E
    Samr21E,
    /// SAMR21G
    Samr21G,
    /// SAMD10C / SAMD11C (14 pins)
    Samd1xC,
    /// SAMD10DS / SAMD11DS (20 pins, SOIC)
    Samd1xDs,
    /// SAMD10DM / SAMD11DM (24 pins, QFN)
    Samd1xDm,
}

impl ChipVariant {
    /// Every supported variant
    pub const ALL: [ChipVariant; 8] = [
        ChipVariant::Samd2xE,
        ChipVariant::Samd2xG,
        ChipVariant::Samd2xJ,
        ChipVariant::Samr21E,
        ChipVariant::Samr21G,
        ChipVariant::Samd1xC,
        ChipVariant::Samd1xDs,
        ChipVariant::Samd1xDm,
    ];

    /// The variant chosen by the enabled chip feature
    pub const SELECTED: ChipVariant = SELECTED;

    /// AIN pin table for this variant
    pub fn channel_map(self) -> &'static ChannelMap {
        match self {
            ChipVariant::Samd2xE => &channel_map::SAMD2X_E,
            ChipVariant::Samd2xG => &channel_map::SAMD2X_G,
            ChipVariant::Samd2xJ => &channel_map::SAMD2X_J,
            ChipVariant::Samr21E => &channel_map::SAMR21_E,
            ChipVariant::Samr21G => &channel_map::SAMR21_G,
            ChipVariant::Samd1xC => &channel_map::SAMD1X_C,
            ChipVariant::Samd1xDs => &channel_map::SAMD1X_DS,
            ChipVariant::Samd1xDm => &channel_map::SAMD1X_DM,
        }
    }

    /// Look up a variant by its Cargo feature name
    ///
    /// Accepts either member of a family, e.g. "samd20g" and "samd21g"
    /// both give [`ChipVariant::Samd2xG`].
    pub fn from_name(name: &str) -> Option<Self> {
        let variant = match name.trim() {
            "samd20e" | "samd21e" => ChipVariant::Samd2xE,
            "samd20g" | "samd21g" => ChipVariant::Samd2xG,
            "samd20j" | "samd21j" => ChipVariant::Samd2xJ,
            "samr21e" => ChipVariant::Samr21E,
            "samr21g" => ChipVariant::Samr21G,
            "samd10c" | "samd11c" => ChipVariant::Samd1xC,
            "samd10ds" | "samd11ds" => ChipVariant::Samd1xDs,
            "samd10dm" | "samd11dm" => ChipVariant::Samd1xDm,
            _ => return None,
        };
        Some(variant)
    }
}

#[cfg(any(feature = "samd20e", feature = "samd21e"))]
const SELECTED: ChipVariant = ChipVariant::Samd2xE;
#[cfg(any(feature = "samd20g", feature = "samd21g"))]
const SELECTED: ChipVariant = ChipVariant::Samd2xG;
#[cfg(any(feature = "samd20j", feature = "samd21j"))]
const SELECTED: ChipVariant = ChipVariant::Samd2xJ;
#[cfg(feature = "samr21e")]
const SELECTED: ChipVariant = ChipVariant::Samr21E;
#[cfg(feature = "samr21g")]
const SELECTED: ChipVariant = ChipVariant::Samr21G;
#[cfg(any(feature = "samd10c", feature = "samd11c"))]
const SELECTED: ChipVariant = ChipVariant::Samd1xC;
#[cfg(any(feature = "samd10ds", feature = "samd11ds"))]
const SELECTED: ChipVariant = ChipVariant::Samd1xDs;
#[cfg(any(feature = "samd10dm", feature = "samd11dm"))]
const SELECTED: ChipVariant = ChipVariant::Samd1xDm;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feature_selects_samd2x_j() {
        #[cfg(feature = "samd21j")]
        assert_eq!(ChipVariant::SELECTED, ChipVariant::Samd2xJ);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ChipVariant::from_name("samd21g"), Some(ChipVariant::Samd2xG));
        assert_eq!(ChipVariant::from_name("samd20g"), Some(ChipVariant::Samd2xG));
        assert_eq!(ChipVariant::from_name("samr21e"), Some(ChipVariant::Samr21E));
        assert_eq!(ChipVariant::from_name("samd11dm"), Some(ChipVariant::Samd1xDm));
        assert_eq!(ChipVariant::from_name("stm32f042"), None);
    }

    #[test]
    fn test_all_variants_have_distinct_tables() {
        for (i, a) in ChipVariant::ALL.iter().enumerate() {
            for b in &ChipVariant::ALL[i + 1..] {
                assert_ne!(a.channel_map(), b.channel_map(), "{:?} vs {:?}", a, b);
            }
        }
    }
}
