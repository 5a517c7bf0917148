//! Analog input driver for SAM D1x/D2x/R21 microcontrollers
//!
//! This crate maps board pins to ADC channels and performs single-shot
//! conversions on top of the `sam0-hal` collaborator traits. It supports
//! one mode: single-ended, 12-bit, fixed reference.
//!
//! # Features
//!
//! Exactly one chip variant feature must be enabled; the build fails
//! otherwise. `samd21j` is on by default, so firmware should use
//! `default-features = false`.
//!
//! - `samd20e` / `samd21e`
//! - `samd20g` / `samd21g`
//! - `samd20j` / `samd21j`
//! - `samr21e`, `samr21g`
//! - `samd10c` / `samd11c`
//! - `samd10ds` / `samd11ds`
//! - `samd10dm` / `samd11dm`
//! - `defmt` - Enable debug formatting and logging
//!
//! # Usage
//!
//! Wrap the vendor ADC and pinmux drivers in [`sam0_hal::AdcPeripheral`]
//! and [`sam0_hal::Pinmux`], hand both to [`AdcManager::new`], then call
//! [`AdcManager::init`] once per analog input.

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod analogin;
pub mod channel_map;
pub mod pins;
pub mod resolver;
pub mod variant;

pub use analogin::{AdcManager, AdcState, AnalogIn};
pub use channel_map::{ChannelError, ChannelMap, CHANNEL_COUNT, MAX_CHANNEL_INDEX};
pub use pins::PinName;
pub use variant::ChipVariant;

// Re-export shared types from sam0-hal
pub use sam0_hal::{GpioPin, NegativeInput, PositiveInput};
