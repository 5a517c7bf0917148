//! AIN pin routing
//!
//! Routes the physical pin behind an ADC channel selector to the analog
//! function of the pin multiplexer.

use sam0_hal::pinmux::{PinPull, Pinmux, MUX_POSITION_ANALOG};

use crate::channel_map::{self, ChannelError, ChannelMap};

/// Route the pin carrying `channel` to the ADC
///
/// Selectors above [`MAX_CHANNEL_INDEX`](channel_map::MAX_CHANNEL_INDEX)
/// are internal inputs (GND, temperature, bandgap) with no pin behind
/// them; these are skipped without touching the multiplexer.
///
/// # Panics
///
/// If `channel` is an external input that this package does not bond out.
/// That is a board configuration error, not something to recover from.
pub fn configure_ain_pin<P: Pinmux>(pinmux: &mut P, map: &ChannelMap, channel: u8) {
    let pin = match channel_map::lookup(map, channel) {
        Ok(pin) => pin,
        Err(ChannelError::OutOfRange) => {
            debug!("AIN selector {=u8} is internal, pin config skipped", channel);
            return;
        }
        Err(ChannelError::Unmapped) => {
            panic!("ADC channel {} has no pin on this device", channel);
        }
    };

    let mut config = pinmux.default_config();
    config.input_pull = PinPull::None;
    config.mux_position = MUX_POSITION_ANALOG;

    trace!("AIN{=u8} -> {}", channel, pin);
    pinmux.set_config(pin, &config);
}

#[cfg(test)]
pub(crate) mod mock {
    use heapless::Vec;
    use sam0_hal::{GpioPin, Pinmux, PinmuxConfig};

    /// Pin multiplexer that records every call
    #[derive(Default)]
    pub struct MockPinmux {
        pub calls: Vec<(GpioPin, PinmuxConfig), 16>,
    }

    impl Pinmux for MockPinmux {
        fn set_config(&mut self, pin: GpioPin, config: &PinmuxConfig) {
            self.calls.push((pin, *config)).unwrap();
        }
    }

    impl MockPinmux {
        pub fn pins(&self) -> Vec<GpioPin, 16> {
            self.calls.iter().map(|(pin, _)| *pin).collect()
        }
    }
}
