//! Pin multiplexer abstractions
//!
//! Every SAM0 pin can be routed to one of several peripheral functions
//! (mux positions A-H) or left as plain GPIO. The analog functions all
//! sit on mux position B.

use crate::gpio::GpioPin;

/// Mux position value meaning "plain GPIO, peripheral mux disabled"
pub const MUX_POSITION_GPIO: u8 = 0x80;

/// Mux position B, which carries every ADC AIN function
pub const MUX_POSITION_ANALOG: u8 = 1;

/// Pin pull resistor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinPull {
    /// No pull resistor
    None,
    /// Pull up
    #[default]
    Up,
    /// Pull down
    Down,
}

/// Pin direction while routed through the multiplexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    #[default]
    Input,
    Output,
    OutputWithReadback,
}

/// Pin multiplexer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinmuxConfig {
    /// Peripheral function (0-7) or [`MUX_POSITION_GPIO`]
    pub mux_position: u8,
    /// Pin direction
    pub direction: PinDirection,
    /// Pull resistor
    pub input_pull: PinPull,
    /// Disable the input buffer when idle
    pub powersave: bool,
}

impl Default for PinmuxConfig {
    fn default() -> Self {
        Self {
            mux_position: MUX_POSITION_GPIO,
            direction: PinDirection::Input,
            input_pull: PinPull::Up,
            powersave: false,
        }
    }
}

impl PinmuxConfig {
    /// Whether this config routes the pin to a peripheral function
    pub fn is_peripheral(&self) -> bool {
        self.mux_position != MUX_POSITION_GPIO
    }
}

/// Pin multiplexer driver
///
/// Implementations write the PMUX/PINCFG registers for the given pin.
pub trait Pinmux {
    /// Default configuration for a pin
    fn default_config(&self) -> PinmuxConfig {
        PinmuxConfig::default()
    }

    /// Apply a configuration to a physical pin
    fn set_config(&mut self, pin: GpioPin, config: &PinmuxConfig);
}
