//! Async driver, mirroring the blocking [`Pca9685`](crate::Pca9685) over
//! [`embedded_hal_async::i2c::I2c`]. Settle delays come from
//! [`embassy_time`], so no delay provider is needed.

use crate::util::debug;
use crate::{Address, Config, Error, State, encoding, registers};
use embassy_time::Timer;
use embedded_hal_async::i2c::I2c;

/// Async driver for one or more PCA9685 chips on an I2C bus.
///
/// The operations and their bus traffic are identical to the blocking driver;
/// see [`crate::Pca9685`] for the contract of each method.
pub struct Pca9685<I2C> {
    i2c: I2C,
    address: Address,
    output_frequency_hz: f32,
    state: State,
}

impl<I2C> Pca9685<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, config: Config) -> Self {
        Self {
            i2c,
            address: config.address,
            output_frequency_hz: config.output_frequency_hz,
            state: State::Uninitialized,
        }
    }

    pub async fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        debug!("initializing chip at address {}", self.address.0);
        self.write_register(self.address, registers::MODE1, registers::MODE1_DEFAULT)
            .await?;
        self.write_register(self.address, registers::MODE2, registers::MODE2_DEFAULT)
            .await?;
        self.set_output_frequency(self.output_frequency_hz).await
    }

    pub async fn set_mode(&mut self, register: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        let register = match register {
            1 => registers::MODE1,
            2 => registers::MODE2,
            other => return Err(Error::InvalidModeRegister(other)),
        };
        self.write_register(self.address, register, value).await
    }

    pub async fn set_output_frequency(
        &mut self,
        frequency_hz: f32,
    ) -> Result<(), Error<I2C::Error>> {
        if frequency_hz <= 0.0 {
            return self.clear().await;
        }
        let prescale = encoding::prescale(frequency_hz);
        debug!("programming prescale {} for a {} Hz request", prescale, frequency_hz);
        self.write_register(self.address, registers::MODE1, registers::MODE1_SLEEPING)
            .await?;
        self.state = State::Sleeping;
        Timer::after_micros(registers::OSCILLATOR_SETTLE_US as u64).await;
        self.write_register(self.address, registers::PRE_SCALE, prescale)
            .await?;
        self.write_register(self.address, registers::MODE1, registers::MODE1_DEFAULT)
            .await?;
        Timer::after_micros(registers::OSCILLATOR_SETTLE_US as u64).await;
        self.state = State::Running;
        Ok(())
    }

    pub async fn reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_register(Address::ALL_CALL, registers::MODE1, registers::MODE1_RESET)
            .await?;
        self.state = State::Uninitialized;
        Ok(())
    }

    pub async fn clear(&mut self) -> Result<(), Error<I2C::Error>> {
        for channel in 0..registers::CHANNEL_COUNT as u8 {
            self.set_channel(channel, 0).await?;
        }
        Ok(())
    }

    pub async fn set_channel(&mut self, channel: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        self.set_channel_to(self.address, channel, value).await
    }

    pub async fn set_channel_to(
        &mut self,
        address: Address,
        channel: u8,
        value: u16,
    ) -> Result<(), Error<I2C::Error>> {
        let payload = encoding::channel_payload(channel, value);
        self.i2c.write(address.0, &payload).await.map_err(Error::I2c)
    }

    pub async fn read_register(
        &mut self,
        address: Address,
        register: u8,
    ) -> Result<u8, Error<I2C::Error>> {
        let mut value = [0];
        self.i2c
            .write_read(address.0, &[register], &mut value)
            .await
            .map_err(Error::I2c)?;
        Ok(value[0])
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    async fn write_register(
        &mut self,
        address: Address,
        register: u8,
        value: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(address.0, &[register, value])
            .await
            .map_err(Error::I2c)
    }
}
