//! ADC channel to GPIO pin tables
//!
//! Index `n` of a table holds the pin carrying AIN`n` on that package, or
//! `None` where the package does not bond out that input. Tables come from
//! the PIN_Pxxx_ADC_AINn definitions in the device headers.

use sam0_hal::GpioPin;

/// Number of external ADC inputs (AIN0-AIN19)
pub const CHANNEL_COUNT: usize = 20;

/// Highest external AIN selector (ADC_EXTCHANNEL_MSB)
///
/// Internal selectors (temperature, bandgap, GND) sit above this.
pub const MAX_CHANNEL_INDEX: u8 = (CHANNEL_COUNT - 1) as u8;

/// AIN index -> physical pin, `None` if unbonded
pub type ChannelMap = [Option<GpioPin>; CHANNEL_COUNT];

/// Why a channel could not be mapped to a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// Selector above [`MAX_CHANNEL_INDEX`] (internal input)
    OutOfRange,
    /// External input not available on this package
    Unmapped,
}

const INVALID: Option<GpioPin> = None;

const fn pa(n: u8) -> Option<GpioPin> {
    Some(GpioPin::pa(n))
}

const fn pb(n: u8) -> Option<GpioPin> {
    Some(GpioPin::pb(n))
}

/// SAMD20E / SAMD21E
#[rustfmt::skip]
pub const SAMD2X_E: ChannelMap = [
    pa(2),   pa(3),
    INVALID, INVALID,
    pa(4),   pa(5),
    pa(6),   pa(7),
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    pa(8),   pa(9),
    pa(10),  pa(11),
];

/// SAMD20G / SAMD21G
#[rustfmt::skip]
pub const SAMD2X_G: ChannelMap = [
    pa(2),   pa(3),
    pb(8),   pb(9),
    pa(4),   pa(5),
    pa(6),   pa(7),
    INVALID, INVALID,
    pb(2),   pb(3),
    INVALID, INVALID,
    INVALID, INVALID,
    pa(8),   pa(9),
    pa(10),  pa(11),
];

/// SAMD20J / SAMD21J
#[rustfmt::skip]
pub const SAMD2X_J: ChannelMap = [
    pa(2),   pa(3),
    pb(8),   pb(9),
    pa(4),   pa(5),
    pa(6),   pa(7),
    pb(0),   pb(1),
    pb(2),   pb(3),
    pb(4),   pb(5),
    pb(6),   pb(7),
    pa(8),   pa(9),
    pa(10),  pa(11),
];

/// SAMR21E
#[rustfmt::skip]
pub const SAMR21_E: ChannelMap = [
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    pa(6),   pa(7),
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    pa(8),   pa(9),
    INVALID, INVALID,
];

/// SAMR21G
#[rustfmt::skip]
pub const SAMR21_G: ChannelMap = [
    INVALID, INVALID,
    INVALID, INVALID,
    pa(4),   pa(5),
    pa(6),   pa(7),
    INVALID, INVALID,
    pb(2),   pb(3),
    INVALID, INVALID,
    INVALID, INVALID,
    pa(8),   pa(9),
    INVALID, INVALID,
];

/// SAMD10C / SAMD11C
#[rustfmt::skip]
pub const SAMD1X_C: ChannelMap = [
    pa(2),   INVALID,
    pa(4),   pa(5),
    INVALID, INVALID,
    pa(14),  pa(15),
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
];

/// SAMD10DS / SAMD11DS
#[rustfmt::skip]
pub const SAMD1X_DS: ChannelMap = [
    pa(2),   INVALID,
    pa(4),   pa(5),
    pa(6),   pa(7),
    pa(14),  pa(15),
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
];

/// SAMD10DM / SAMD11DM
#[rustfmt::skip]
pub const SAMD1X_DM: ChannelMap = [
    pa(2),   pa(3),
    pa(4),   pa(5),
    pa(6),   pa(7),
    pa(14),  pa(15),
    pa(10),  pa(11),
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
    INVALID, INVALID,
];

/// Look up the pin carrying a channel
pub fn lookup(map: &ChannelMap, channel: u8) -> Result<GpioPin, ChannelError> {
    if channel > MAX_CHANNEL_INDEX {
        return Err(ChannelError::OutOfRange);
    }
    map[channel as usize].ok_or(ChannelError::Unmapped)
}

/// Reverse lookup: which channel a pin carries, if any
pub fn channel_for_pin(map: &ChannelMap, pin: GpioPin) -> Option<u8> {
    map.iter()
        .position(|entry| *entry == Some(pin))
        .map(|idx| idx as u8)
}

/// Number of channels the package actually bonds out
pub fn mapped_count(map: &ChannelMap) -> usize {
    map.iter().filter(|entry| entry.is_some()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::ChipVariant;

    #[test]
    fn test_lookup_valid_channel() {
        assert_eq!(lookup(&SAMD2X_J, 0), Ok(GpioPin::pa(2)));
        assert_eq!(lookup(&SAMD2X_J, 2), Ok(GpioPin::pb(8)));
        assert_eq!(lookup(&SAMD2X_J, 19), Ok(GpioPin::pa(11)));
    }

    #[test]
    fn test_lookup_unmapped_channel() {
        assert_eq!(lookup(&SAMD2X_E, 2), Err(ChannelError::Unmapped));
        assert_eq!(lookup(&SAMR21_E, 4), Err(ChannelError::Unmapped));
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert_eq!(lookup(&SAMD2X_J, MAX_CHANNEL_INDEX + 1), Err(ChannelError::OutOfRange));
        // GND negative input selector
        assert_eq!(lookup(&SAMD2X_J, 0x18), Err(ChannelError::OutOfRange));
    }

    #[test]
    fn test_no_duplicate_pins_in_any_table() {
        for variant in ChipVariant::ALL {
            let map = variant.channel_map();
            for (i, a) in map.iter().enumerate() {
                let Some(a) = a else { continue };
                for b in map[i + 1..].iter().flatten() {
                    assert_ne!(a, b, "{:?} maps {:?} twice", variant, a);
                }
            }
        }
    }

    #[test]
    fn test_channel_for_pin() {
        assert_eq!(channel_for_pin(&SAMD2X_G, GpioPin::pb(3)), Some(11));
        assert_eq!(channel_for_pin(&SAMD2X_G, GpioPin::pa(8)), Some(16));
        assert_eq!(channel_for_pin(&SAMD2X_G, GpioPin::pb(0)), None);
        // Same pin, different AIN on the D1x parts
        assert_eq!(channel_for_pin(&SAMD1X_DM, GpioPin::pa(4)), Some(2));
    }

    #[test]
    fn test_mapped_count() {
        assert_eq!(mapped_count(&SAMD2X_J), CHANNEL_COUNT);
        assert_eq!(mapped_count(&SAMD2X_G), 14);
        assert_eq!(mapped_count(&SAMR21_E), 4);
        assert_eq!(mapped_count(&SAMD1X_C), 5);
    }
}
