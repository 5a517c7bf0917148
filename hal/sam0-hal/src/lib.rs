//! SAM0 Hardware Abstraction Layer
//!
//! This crate defines the collaborator traits the analog input driver
//! consumes: the vendor ADC peripheral driver and the pin multiplexer.
//! Chip-specific crates build on these without knowing how the registers
//! are actually written.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application / board layer              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sam0-hal-samd (channel maps, AnalogIn) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sam0-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  vendor ADC   │       │ vendor pinmux │
//! │    driver     │       │    driver     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`adc::AdcPeripheral`] - Single-shot ADC conversions
//! - [`pinmux::Pinmux`] - Pin function routing
//!
//! # Types
//!
//! - [`gpio::GpioPin`] - Port-linear physical pin number

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod pinmux;

// Re-export key traits at crate root for convenience
pub use adc::{AdcConfig, AdcPeripheral, NegativeInput, PositiveInput};
pub use gpio::{GpioPin, Port};
pub use pinmux::{PinPull, Pinmux, PinmuxConfig};
