use crate::util::debug;
use crate::{Address, Config, Error, State, encoding, registers};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Blocking driver for one or more PCA9685 chips on an I2C bus.
///
/// The driver owns the bus handle for the lifetime of the instance; every
/// operation is a single run-to-completion sequence of bus transactions with
/// no retries. Operations default to the configured device address, and the
/// per-call `*_to` variants reach other chips sharing the bus.
pub struct Pca9685<I2C, D> {
    i2c: I2C,
    delay: D,
    address: Address,
    output_frequency_hz: f32,
    state: State,
}

impl<I2C, D> Pca9685<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Creates a driver from an already-configured bus handle.
    ///
    /// The chip accepts bus clocks up to
    /// [`registers::RECOMMENDED_BUS_CLOCK_HZ`]; configuring the peripheral is
    /// the HAL's business. Call [`init`](Self::init) before driving outputs.
    pub fn new(i2c: I2C, delay: D, config: Config) -> Self {
        Self {
            i2c,
            delay,
            address: config.address,
            output_frequency_hz: config.output_frequency_hz,
            state: State::Uninitialized,
        }
    }

    /// Brings the chip into its operating state: mode registers to known-good
    /// defaults (auto-increment, totem-pole outputs, not sleeping), then the
    /// configured output frequency.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        debug!("initializing chip at address {}", self.address.0);
        self.write_register(self.address, registers::MODE1, registers::MODE1_DEFAULT)?;
        self.write_register(self.address, registers::MODE2, registers::MODE2_DEFAULT)?;
        self.set_output_frequency(self.output_frequency_hz)
    }

    /// Writes a raw value to mode register 1 or 2.
    ///
    /// Meant for manual configuration beyond what [`init`](Self::init) sets
    /// up. Fails without touching the bus if `register` is not 1 or 2.
    pub fn set_mode(&mut self, register: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        let register = match register {
            1 => registers::MODE1,
            2 => registers::MODE2,
            other => return Err(Error::InvalidModeRegister(other)),
        };
        self.write_register(self.address, register, value)
    }

    /// Programs the PWM output frequency, shared by all 16 channels.
    ///
    /// Requests outside the chip's 24–1526 Hz range saturate to the nearest
    /// bound. A request of zero or below blanks all outputs instead (see
    /// [`clear`](Self::clear)) and leaves the frequency untouched.
    ///
    /// The prescale register only accepts writes while the oscillator is
    /// halted, so the write is bracketed by a sleep/wake pair of mode-1
    /// writes, each followed by the oscillator settle time. Skipping the
    /// sleep step would silently corrupt the prescale on real hardware.
    pub fn set_output_frequency(&mut self, frequency_hz: f32) -> Result<(), Error<I2C::Error>> {
        if frequency_hz <= 0.0 {
            return self.clear();
        }
        let prescale = encoding::prescale(frequency_hz);
        debug!("programming prescale {} for a {} Hz request", prescale, frequency_hz);
        self.write_register(self.address, registers::MODE1, registers::MODE1_SLEEPING)?;
        self.state = State::Sleeping;
        self.delay.delay_us(registers::OSCILLATOR_SETTLE_US);
        self.write_register(self.address, registers::PRE_SCALE, prescale)?;
        self.write_register(self.address, registers::MODE1, registers::MODE1_DEFAULT)?;
        self.delay.delay_us(registers::OSCILLATOR_SETTLE_US);
        self.state = State::Running;
        Ok(())
    }

    /// Broadcasts a software reset to every chip on the bus.
    ///
    /// All chips return to their power-on defaults; call
    /// [`init`](Self::init) again before further use.
    pub fn reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_register(Address::ALL_CALL, registers::MODE1, registers::MODE1_RESET)?;
        self.state = State::Uninitialized;
        Ok(())
    }

    /// Forces all 16 channels to 0% duty. Mode registers are untouched.
    pub fn clear(&mut self) -> Result<(), Error<I2C::Error>> {
        for channel in 0..registers::CHANNEL_COUNT as u8 {
            self.set_channel(channel, 0)?;
        }
        Ok(())
    }

    /// Sets the duty count of one channel at the default address.
    ///
    /// `value` ranges over 0..=4095 for duty cycles of 0–100%; out-of-range
    /// channels and values saturate. The four on/off registers are written in
    /// one bus transaction, so a channel can never be observed with mismatched
    /// on and off counts.
    pub fn set_channel(&mut self, channel: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        self.set_channel_to(self.address, channel, value)
    }

    /// Like [`set_channel`](Self::set_channel), addressed at a specific chip.
    pub fn set_channel_to(
        &mut self,
        address: Address,
        channel: u8,
        value: u16,
    ) -> Result<(), Error<I2C::Error>> {
        let payload = encoding::channel_payload(channel, value);
        self.i2c.write(address.0, &payload).map_err(Error::I2c)
    }

    /// Reads one register of the chip at `address`.
    ///
    /// Returns whatever the bus reports, unvalidated.
    pub fn read_register(&mut self, address: Address, register: u8) -> Result<u8, Error<I2C::Error>> {
        let mut value = [0];
        self.i2c
            .write_read(address.0, &[register], &mut value)
            .map_err(Error::I2c)?;
        Ok(value[0])
    }

    /// Current lifecycle state of the driver.
    pub fn state(&self) -> State {
        self.state
    }

    /// Destroys the driver and returns the bus and delay handles.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn write_register(
        &mut self,
        address: Address,
        register: u8,
        value: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(address.0, &[register, value])
            .map_err(Error::I2c)
    }
}
