//! Board pin names
//!
//! The closed set of pin identifiers the board layer hands to
//! [`AdcManager::init`](crate::analogin::AdcManager::init). Each name maps
//! to exactly one physical pin, except [`PinName::NC`].

use sam0_hal::GpioPin;

/// Logical pin name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[rustfmt::skip]
pub enum PinName {
    PA00 = 0,
    PA01 = 1,
    PA02 = 2,
    PA03 = 3,
    PA04 = 4,
    PA05 = 5,
    PA06 = 6,
    PA07 = 7,
    PA08 = 8,
    PA09 = 9,
    PA10 = 10,
    PA11 = 11,
    PA12 = 12,
    PA13 = 13,
    PA14 = 14,
    PA15 = 15,
    PA16 = 16,
    PA17 = 17,
    PA18 = 18,
    PA19 = 19,
    PA20 = 20,
    PA21 = 21,
    PA22 = 22,
    PA23 = 23,
    PA24 = 24,
    PA25 = 25,
    PA26 = 26,
    PA27 = 27,
    PA28 = 28,
    PA29 = 29,
    PA30 = 30,
    PA31 = 31,
    PB00 = 32,
    PB01 = 33,
    PB02 = 34,
    PB03 = 35,
    PB04 = 36,
    PB05 = 37,
    PB06 = 38,
    PB07 = 39,
    PB08 = 40,
    PB09 = 41,
    PB10 = 42,
    PB11 = 43,
    PB12 = 44,
    PB13 = 45,
    PB14 = 46,
    PB15 = 47,
    PB16 = 48,
    PB17 = 49,
    PB18 = 50,
    PB19 = 51,
    PB20 = 52,
    PB21 = 53,
    PB22 = 54,
    PB23 = 55,
    PB24 = 56,
    PB25 = 57,
    PB26 = 58,
    PB27 = 59,
    PB28 = 60,
    PB29 = 61,
    PB30 = 62,
    PB31 = 63,
    /// Not connected
    NC = 0xFF,
}

impl PinName {
    /// Every connectable pin, indexed by port-linear pin id
    #[rustfmt::skip]
    pub const ALL: [PinName; 64] = [
        PinName::PA00, PinName::PA01, PinName::PA02, PinName::PA03, PinName::PA04, PinName::PA05, PinName::PA06, PinName::PA07,
        PinName::PA08, PinName::PA09, PinName::PA10, PinName::PA11, PinName::PA12, PinName::PA13, PinName::PA14, PinName::PA15,
        PinName::PA16, PinName::PA17, PinName::PA18, PinName::PA19, PinName::PA20, PinName::PA21, PinName::PA22, PinName::PA23,
        PinName::PA24, PinName::PA25, PinName::PA26, PinName::PA27, PinName::PA28, PinName::PA29, PinName::PA30, PinName::PA31,
        PinName::PB00, PinName::PB01, PinName::PB02, PinName::PB03, PinName::PB04, PinName::PB05, PinName::PB06, PinName::PB07,
        PinName::PB08, PinName::PB09, PinName::PB10, PinName::PB11, PinName::PB12, PinName::PB13, PinName::PB14, PinName::PB15,
        PinName::PB16, PinName::PB17, PinName::PB18, PinName::PB19, PinName::PB20, PinName::PB21, PinName::PB22, PinName::PB23,
        PinName::PB24, PinName::PB25, PinName::PB26, PinName::PB27, PinName::PB28, PinName::PB29, PinName::PB30, PinName::PB31,
    ];

    /// Physical pin behind this name
    pub fn gpio(self) -> Option<GpioPin> {
        match self {
            PinName::NC => None,
            name => GpioPin::from_id(name as u8),
        }
    }

    /// Name for a physical pin
    pub fn from_gpio(pin: GpioPin) -> Self {
        Self::ALL[pin.id() as usize]
    }

    /// Parse a pin name from config
    ///
    /// Supports formats:
    /// - "PA04" / "PA4" -> [`PinName::PA04`]
    /// - "NC" -> [`PinName::NC`]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("NC") {
            return Some(PinName::NC);
        }
        GpioPin::parse(s).map(Self::from_gpio)
    }
}

impl From<GpioPin> for PinName {
    fn from(pin: GpioPin) -> Self {
        Self::from_gpio(pin)
    }
}
