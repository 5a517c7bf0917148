//! Single-shot analog input
//!
//! [`AdcManager`] owns the one ADC instance and the pin multiplexer. The
//! first [`init`](AdcManager::init) brings the peripheral up; every later
//! call only re-routes pins. Handles ([`AnalogIn`]) are plain config
//! snapshots and all conversions go through the manager.
//!
//! # Concurrency
//!
//! There is no internal locking. Every operation takes `&mut self`, so
//! sharing a manager between interrupt priorities or tasks needs an outer
//! lock (e.g. `critical_section::Mutex<RefCell<AdcManager<..>>>`).
//!
//! # Example
//!
//! ```ignore
//! let mut adc = AdcManager::new(vendor_adc, vendor_pinmux);
//! let pot = adc.init(PinName::PA04);
//! let raw = adc.read_u16(&pot);
//! let ratio = adc.read(&pot);
//! ```

use sam0_hal::adc::{AdcConfig, AdcPeripheral, NegativeInput, PositiveInput, Resolution};
use sam0_hal::pinmux::Pinmux;

use crate::channel_map::ChannelMap;
use crate::pins::PinName;
use crate::resolver::configure_ain_pin;
use crate::variant::ChipVariant;

/// Raw sample at full scale (12-bit)
pub const FULL_SCALE: u16 = Resolution::Bits12.full_scale();

/// Positive input used when a pin has no AIN function here
pub const FALLBACK_INPUT: PositiveInput = PositiveInput::PIN4;

/// Peripheral lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcState {
    /// Peripheral not configured yet
    Uninitialized,
    /// Configured, enabled, first conversion started
    Ready,
}

/// Positive input selector for a board pin
///
/// Returns the selector and whether the pin was recognized. Unrecognized
/// pins get [`FALLBACK_INPUT`].
pub fn positive_input_for(pin: PinName) -> (PositiveInput, bool) {
    match pin {
        PinName::PA04 => (PositiveInput::PIN4, true),
        PinName::PA05 => (PositiveInput::PIN5, true),
        PinName::PA06 => (PositiveInput::PIN6, true),
        PinName::PA07 => (PositiveInput::PIN7, true),
        PinName::PA08 => (PositiveInput::PIN16, true),
        PinName::PA09 => (PositiveInput::PIN17, true),
        PinName::PB02 => (PositiveInput::PIN10, true),
        PinName::PB03 => (PositiveInput::PIN11, true),
        _ => (FALLBACK_INPUT, false),
    }
}

/// Analog input handle
///
/// Holds the ADC configuration resolved at [`AdcManager::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogIn {
    config: AdcConfig,
}

impl AnalogIn {
    /// Positive input this handle samples
    pub fn positive_input(&self) -> PositiveInput {
        self.config.positive_input
    }

    /// Negative input this handle samples against
    pub fn negative_input(&self) -> NegativeInput {
        self.config.negative_input
    }

    /// Full configuration snapshot
    pub fn config(&self) -> &AdcConfig {
        &self.config
    }
}

/// Owner of the ADC peripheral
pub struct AdcManager<ADC, PMX> {
    adc: ADC,
    pinmux: PMX,
    channel_map: &'static ChannelMap,
    variant: ChipVariant,
    state: AdcState,
    fallback_count: u32,
}

impl<ADC: AdcPeripheral, PMX: Pinmux> AdcManager<ADC, PMX> {
    /// Create a manager for the build-time selected chip variant
    pub fn new(adc: ADC, pinmux: PMX) -> Self {
        Self::with_variant(adc, pinmux, ChipVariant::SELECTED)
    }

    /// Create a manager for an explicit chip variant
    pub fn with_variant(adc: ADC, pinmux: PMX, variant: ChipVariant) -> Self {
        Self {
            adc,
            pinmux,
            channel_map: variant.channel_map(),
            variant,
            state: AdcState::Uninitialized,
            fallback_count: 0,
        }
    }

    /// Set up an analog input on `pin`
    ///
    /// The first call initializes, enables and starts the ADC with the
    /// resulting config. Later calls leave the peripheral alone and only
    /// route the handle's positive and negative input pins.
    ///
    /// Pins without an AIN mapping here silently fall back to
    /// [`FALLBACK_INPUT`]; see [`fallback_count`](Self::fallback_count).
    ///
    /// # Panics
    ///
    /// On a later call, if the resolved channel has no pin on this chip
    /// variant.
    pub fn init(&mut self, pin: PinName) -> AnalogIn {
        let (positive_input, recognized) = positive_input_for(pin);
        if !recognized {
            self.fallback_count = self.fallback_count.saturating_add(1);
            warn!("{} has no AIN mapping, using fallback input", pin);
        }

        let mut config = self.adc.default_config();
        config.positive_input = positive_input;

        match self.state {
            AdcState::Uninitialized => {
                self.adc.init(&config);
                self.adc.enable();
                self.adc.start_conversion();
                self.state = AdcState::Ready;
                info!("ADC initialized ({}), AIN{=u8}", self.variant, positive_input.bits());
            }
            AdcState::Ready => {
                configure_ain_pin(&mut self.pinmux, self.channel_map, config.positive_input.bits());
                configure_ain_pin(&mut self.pinmux, self.channel_map, config.negative_input.bits());
            }
        }

        AnalogIn { config }
    }

    /// Convert once and return the raw sample
    ///
    /// Blocks until the conversion completes. There is no timeout.
    pub fn read_u16(&mut self, ain: &AnalogIn) -> u16 {
        self.adc.set_positive_input(ain.config.positive_input);
        self.adc.set_negative_input(ain.config.negative_input);
        self.adc.start_conversion();

        while !self.adc.is_result_ready() {
            core::hint::spin_loop();
        }

        self.adc.read_result()
    }

    /// Convert once and return the sample as a fraction of full scale
    pub fn read(&mut self, ain: &AnalogIn) -> f32 {
        let value = self.read_u16(ain);
        value as f32 / FULL_SCALE as f32
    }

    /// Current peripheral state
    pub fn state(&self) -> AdcState {
        self.state
    }

    /// Whether the peripheral has been brought up
    pub fn is_initialized(&self) -> bool {
        self.state == AdcState::Ready
    }

    /// Chip variant whose channel map is in use
    pub fn variant(&self) -> ChipVariant {
        self.variant
    }

    /// Channel map in use
    pub fn channel_map(&self) -> &'static ChannelMap {
        self.channel_map
    }

    /// Number of `init` calls that fell back to [`FALLBACK_INPUT`]
    pub fn fallback_count(&self) -> u32 {
        self.fallback_count
    }

    /// Borrow the ADC driver
    pub fn adc(&self) -> &ADC {
        &self.adc
    }

    /// Borrow the pin multiplexer driver
    pub fn pinmux(&self) -> &PMX {
        &self.pinmux
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{AdcCall, MockAdc};
    use super::*;
    use crate::resolver::mock::MockPinmux;
    use sam0_hal::GpioPin;

    fn manager(sample: u16) -> AdcManager<MockAdc, MockPinmux> {
        AdcManager::with_variant(MockAdc::with_sample(sample), MockPinmux::default(), ChipVariant::Samd2xJ)
    }

    fn is_init(call: &AdcCall) -> bool {
        matches!(call, AdcCall::Init(_))
    }

    #[test]
    fn test_first_init_brings_up_peripheral() {
        let mut adc = manager(0);
        assert_eq!(adc.state(), AdcState::Uninitialized);

        let ain = adc.init(PinName::PA05);

        assert_eq!(adc.state(), AdcState::Ready);
        assert_eq!(ain.positive_input(), PositiveInput::PIN5);
        let mut expected = AdcConfig::default();
        expected.positive_input = PositiveInput::PIN5;
        assert_eq!(
            adc.adc().calls.as_slice(),
            &[AdcCall::Init(expected), AdcCall::Enable, AdcCall::StartConversion]
        );
        // Peripheral init routes its own pins
        assert!(adc.pinmux().calls.is_empty());
    }

    #[test]
    fn test_second_init_does_not_reinit_peripheral() {
        let mut adc = manager(0);
        adc.init(PinName::PA04);
        adc.init(PinName::PA06);

        assert_eq!(adc.adc().count(is_init), 1);
        assert_eq!(adc.adc().count(|c| *c == AdcCall::Enable), 1);
        assert!(adc.is_initialized());
    }

    #[test]
    fn test_later_inits_route_their_pins() {
        let mut adc = manager(0);
        adc.init(PinName::PA04);
        adc.init(PinName::PB03);
        adc.init(PinName::PA08);

        // Negative input is GND, which has no pin
        assert_eq!(adc.pinmux().pins().as_slice(), &[GpioPin::pb(3), GpioPin::pa(8)]);
    }

    #[test]
    fn test_recognized_pin_table() {
        let cases = [
            (PinName::PA04, PositiveInput::PIN4),
            (PinName::PA05, PositiveInput::PIN5),
            (PinName::PA06, PositiveInput::PIN6),
            (PinName::PA07, PositiveInput::PIN7),
            (PinName::PA08, PositiveInput::PIN16),
            (PinName::PA09, PositiveInput::PIN17),
            (PinName::PB02, PositiveInput::PIN10),
            (PinName::PB03, PositiveInput::PIN11),
        ];

        let mut adc = manager(0);
        for (pin, input) in cases {
            assert_eq!(positive_input_for(pin), (input, true));
            assert_eq!(adc.init(pin).positive_input(), input);
        }
        assert_eq!(adc.fallback_count(), 0);
    }

    #[test]
    fn test_unrecognized_pin_falls_back_to_pa04() {
        let mut adc = manager(0);
        let reference = adc.init(PinName::PA04);

        for pin in [PinName::PA02, PinName::PB08, PinName::PA31, PinName::NC] {
            let ain = adc.init(pin);
            assert_eq!(ain.positive_input(), reference.positive_input());
        }
        assert_eq!(adc.fallback_count(), 4);
    }

    #[test]
    fn test_fallback_on_first_init() {
        let mut adc = manager(0);
        let ain = adc.init(PinName::NC);

        assert_eq!(ain.positive_input(), PositiveInput::PIN4);
        assert_eq!(adc.state(), AdcState::Ready);
        assert_eq!(adc.fallback_count(), 1);
    }

    #[test]
    fn test_read_u16_selects_inputs_then_converts() {
        let mut adc = manager(1234);
        let ain = adc.init(PinName::PB02);
        let before = adc.adc().calls.len();

        assert_eq!(adc.read_u16(&ain), 1234);
        assert_eq!(
            &adc.adc().calls[before..],
            &[
                AdcCall::SetPositive(PositiveInput::PIN10),
                AdcCall::SetNegative(NegativeInput::GND),
                AdcCall::StartConversion,
                AdcCall::ReadResult,
            ]
        );
    }

    #[test]
    fn test_read_u16_waits_for_result() {
        let mut mock = MockAdc::with_sample(7);
        mock.busy_polls = 5;
        let mut adc = AdcManager::with_variant(mock, MockPinmux::default(), ChipVariant::Samd2xJ);
        let ain = adc.init(PinName::PA07);

        assert_eq!(adc.read_u16(&ain), 7);
        assert_eq!(adc.adc().polls.get(), 6);
    }

    #[test]
    fn test_read_scaling() {
        let mut adc = manager(4095);
        let ain = adc.init(PinName::PA04);
        assert_eq!(adc.read(&ain), 1.0);

        let mut adc = manager(0);
        let ain = adc.init(PinName::PA04);
        assert_eq!(adc.read(&ain), 0.0);

        let mut adc = manager(2048);
        let ain = adc.init(PinName::PA04);
        let expected = 2048.0 / 4095.0;
        assert!((adc.read(&ain) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_handles_share_peripheral() {
        let mut adc = manager(100);
        let a = adc.init(PinName::PA04);
        let b = adc.init(PinName::PA09);

        adc.read_u16(&a);
        adc.read_u16(&b);

        let selected: heapless::Vec<PositiveInput, 4> = adc
            .adc()
            .calls
            .iter()
            .filter_map(|c| match c {
                AdcCall::SetPositive(input) => Some(*input),
                _ => None,
            })
            .collect();
        assert_eq!(selected.as_slice(), &[PositiveInput::PIN4, PositiveInput::PIN17]);
    }

    #[test]
    #[should_panic(expected = "has no pin")]
    fn test_later_init_on_unbonded_channel_panics() {
        let mut adc = AdcManager::with_variant(MockAdc::default(), MockPinmux::default(), ChipVariant::Samr21E);
        adc.init(PinName::PA06);
        // AIN4 is not bonded out on SAMR21E
        adc.init(PinName::PA04);
    }

    #[test]
    fn test_new_uses_selected_variant() {
        let adc = AdcManager::new(MockAdc::default(), MockPinmux::default());
        assert_eq!(adc.variant(), ChipVariant::SELECTED);
        assert_eq!(adc.channel_map(), ChipVariant::SELECTED.channel_map());
    }
}
