//! ADC peripheral abstractions
//!
//! Provides the configuration types and the driver trait for the SAM0 ADC.
//! The trait is the boundary to the vendor driver: it is assumed correct
//! and is only ever invoked, never inspected.

/// ADC positive input selector (INPUTCTRL.MUXPOS)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositiveInput(pub u8);

impl PositiveInput {
    pub const PIN0: Self = Self(0x00);
    pub const PIN1: Self = Self(0x01);
    pub const PIN2: Self = Self(0x02);
    pub const PIN3: Self = Self(0x03);
    pub const PIN4: Self = Self(0x04);
    pub const PIN5: Self = Self(0x05);
    pub const PIN6: Self = Self(0x06);
    pub const PIN7: Self = Self(0x07);
    pub const PIN8: Self = Self(0x08);
    pub const PIN9: Self = Self(0x09);
    pub const PIN10: Self = Self(0x0A);
    pub const PIN11: Self = Self(0x0B);
    pub const PIN12: Self = Self(0x0C);
    pub const PIN13: Self = Self(0x0D);
    pub const PIN14: Self = Self(0x0E);
    pub const PIN15: Self = Self(0x0F);
    pub const PIN16: Self = Self(0x10);
    pub const PIN17: Self = Self(0x11);
    pub const PIN18: Self = Self(0x12);
    pub const PIN19: Self = Self(0x13);
    /// Temperature reference
    pub const TEMP: Self = Self(0x18);
    /// Bandgap voltage
    pub const BANDGAP: Self = Self(0x19);
    /// 1/4 scaled core supply
    pub const SCALED_CORE_VCC: Self = Self(0x1A);
    /// 1/4 scaled I/O supply
    pub const SCALED_IO_VCC: Self = Self(0x1B);
    /// DAC output
    pub const DAC: Self = Self(0x1C);

    /// Raw MUXPOS value
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// ADC negative input selector (INPUTCTRL.MUXNEG)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NegativeInput(pub u8);

impl NegativeInput {
    pub const PIN0: Self = Self(0x00);
    pub const PIN1: Self = Self(0x01);
    pub const PIN2: Self = Self(0x02);
    pub const PIN3: Self = Self(0x03);
    pub const PIN4: Self = Self(0x04);
    pub const PIN5: Self = Self(0x05);
    pub const PIN6: Self = Self(0x06);
    pub const PIN7: Self = Self(0x07);
    /// Internal ground (single-ended mode)
    pub const GND: Self = Self(0x18);
    /// I/O ground
    pub const IOGND: Self = Self(0x19);

    /// Raw MUXNEG value
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Voltage reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reference {
    /// 1.0V internal bandgap reference
    #[default]
    Int1V,
    /// 1/1.48 VDDANA
    IntVcc0,
    /// 1/2 VDDANA (only for VDDANA > 2.0V)
    IntVcc1,
    /// External reference A
    ArefA,
    /// External reference B
    ArefB,
}

/// ADC clock prescaler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockPrescaler {
    #[default]
    Div4,
    Div8,
    Div16,
    Div32,
    Div64,
    Div128,
    Div256,
    Div512,
}

/// Conversion result resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    #[default]
    Bits12,
    Bits10,
    Bits8,
}

impl Resolution {
    /// Largest raw sample at this resolution
    pub const fn full_scale(self) -> u16 {
        match self {
            Resolution::Bits12 => 0x0FFF,
            Resolution::Bits10 => 0x03FF,
            Resolution::Bits8 => 0x00FF,
        }
    }
}

/// Input gain stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GainFactor {
    #[default]
    X1,
    X2,
    X4,
    X8,
    X16,
    Div2,
}

/// ADC configuration snapshot
///
/// Passed to [`AdcPeripheral::init`]. The defaults match the vendor
/// driver's: single-ended, 12-bit, internal 1V reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcConfig {
    /// Voltage reference
    pub reference: Reference,
    /// Clock prescaler
    pub clock_prescaler: ClockPrescaler,
    /// Result resolution
    pub resolution: Resolution,
    /// Gain stage
    pub gain_factor: GainFactor,
    /// Positive input (MUXPOS)
    pub positive_input: PositiveInput,
    /// Negative input (MUXNEG); GND for single-ended
    pub negative_input: NegativeInput,
    /// Differential mode
    pub differential_mode: bool,
    /// Free-running conversions
    pub freerunning: bool,
    /// Left-adjust the result register
    pub left_adjust: bool,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            reference: Reference::Int1V,
            clock_prescaler: ClockPrescaler::Div4,
            resolution: Resolution::Bits12,
            gain_factor: GainFactor::X1,
            positive_input: PositiveInput::PIN1,
            negative_input: NegativeInput::GND,
            differential_mode: false,
            freerunning: false,
            left_adjust: false,
        }
    }
}

/// ADC peripheral driver
///
/// Implemented by the vendor driver wrapper for a specific ADC instance.
/// None of these calls can fail; a stalled conversion shows up as
/// [`is_result_ready`](Self::is_result_ready) never returning true.
pub trait AdcPeripheral {
    /// Default configuration for this peripheral
    fn default_config(&self) -> AdcConfig {
        AdcConfig::default()
    }

    /// Apply a full configuration (clocks, reference, inputs)
    ///
    /// Also routes the configured input pins to the ADC.
    fn init(&mut self, config: &AdcConfig);

    /// Enable the peripheral
    fn enable(&mut self);

    /// Trigger a single conversion
    fn start_conversion(&mut self);

    /// Check if a conversion result is available
    fn is_result_ready(&self) -> bool;

    /// Read the latest conversion result
    ///
    /// Clears the result-ready condition.
    fn read_result(&mut self) -> u16;

    /// Select the positive input for subsequent conversions
    fn set_positive_input(&mut self, input: PositiveInput);

    /// Select the negative input for subsequent conversions
    fn set_negative_input(&mut self, input: NegativeInput);
}
