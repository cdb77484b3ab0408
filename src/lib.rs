//! Platform-agnostic driver for the PCA9685 16-channel 12-bit I2C PWM controller.
//!
//! The driver owns an [`embedded_hal::i2c::I2c`] bus handle and a
//! [`embedded_hal::delay::DelayNs`] provider and exposes per-channel duty-cycle
//! control ([`Pca9685::set_channel`]) and global output-frequency configuration
//! ([`Pca9685::set_output_frequency`]). Several chips can share one bus: every
//! bus operation can be directed at a caller-supplied [`Address`], and a
//! software reset can be broadcast to all chips at once.
//!
//! With the `async` feature the same driver is available in [`asynch`] on top of
//! [`embedded_hal_async`](https://docs.rs/embedded-hal-async/latest/embedded_hal_async).
//!
//! ## Feature flags
#![cfg_attr(not(test), no_std)]
#![doc = document_features::document_features!()]

#[cfg(feature = "async")]
pub mod asynch;
mod driver;
mod encoding;
mod output_enable;
pub mod registers;
mod util;

pub use driver::Pca9685;
pub use output_enable::OutputEnable;

/// Output frequency requested during [`Pca9685::init`].
///
/// Above the chip maximum on purpose: the request saturates to the highest
/// frequency the chip supports.
pub const DEFAULT_OUTPUT_FREQUENCY_HZ: f32 = 1600.0;

/// 7-bit bus address of a chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::From)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(pub(crate) u8);

impl Address {
    /// Factory-default address of a chip with all address pins low.
    pub const DEFAULT: Self = Self(registers::DEFAULT_ADDRESS);
    /// All-call address every chip on the bus responds to.
    pub const ALL_CALL: Self = Self(registers::ALL_CALL_ADDRESS);
}

impl Default for Address {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Driver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Address used by operations that are not given one explicitly.
    pub address: Address,
    /// Output frequency programmed by [`Pca9685::init`].
    pub output_frequency_hz: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: Address::DEFAULT,
            output_frequency_hz: DEFAULT_OUTPUT_FREQUENCY_HZ,
        }
    }
}

/// Coarse lifecycle state of the driver.
///
/// The chip powers up in [`State::Uninitialized`] and must be taken through
/// [`Pca9685::init`] before its outputs run. [`State::Sleeping`] is entered
/// while the prescale register is being reprogrammed; the oscillator is halted
/// until the wake write completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Uninitialized,
    Sleeping,
    Running,
}

/// Driver error.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus transport reported an error.
    I2c(E),
    /// A mode register selector outside `1..=2` was passed to `set_mode`.
    InvalidModeRegister(u8),
}
