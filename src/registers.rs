//! Register map and fixed chip parameters.

/// Factory-default 7-bit device address (all address pins low).
pub const DEFAULT_ADDRESS: u8 = 0x40;
/// All-call address; every chip on the bus acknowledges it.
pub const ALL_CALL_ADDRESS: u8 = 0x70;

/// Mode register 1.
pub const MODE1: u8 = 0x00;
/// Mode register 2.
pub const MODE2: u8 = 0x01;
/// Frequency prescaler. Writable only while the sleep bit of `MODE1` is set.
pub const PRE_SCALE: u8 = 0xFE;

/// `MODE1` restart bit.
pub const MODE1_RESTART: u8 = 1 << 7;
/// `MODE1` register auto-increment bit.
pub const MODE1_AUTO_INCREMENT: u8 = 1 << 5;
/// `MODE1` sleep bit; halts the internal oscillator.
pub const MODE1_SLEEP: u8 = 1 << 4;
/// `MODE1` all-call response bit.
pub const MODE1_ALL_CALL: u8 = 1 << 0;

/// Normal operating value of `MODE1`: restart capable, auto-increment,
/// all-call enabled, not sleeping.
pub const MODE1_DEFAULT: u8 = MODE1_RESTART | MODE1_AUTO_INCREMENT | MODE1_ALL_CALL;
/// `MODE1_DEFAULT` with the sleep bit set.
pub const MODE1_SLEEPING: u8 = MODE1_DEFAULT | MODE1_SLEEP;
/// Software-reset pattern written to `MODE1` at the all-call address.
pub const MODE1_RESET: u8 = 0b0000_0110;

/// Default value of `MODE2`: totem-pole output driver.
pub const MODE2_DEFAULT: u8 = 0b0000_0100;

/// First of the four on/off registers of each channel, indexed by channel.
pub const CHANNEL_BASE: [u8; CHANNEL_COUNT] = [
    0x06, 0x0A, 0x0E, 0x12, 0x16, 0x1A, 0x1E, 0x22, 0x26, 0x2A, 0x2E, 0x32, 0x36, 0x3A, 0x3E, 0x42,
];

/// Number of PWM output channels.
pub const CHANNEL_COUNT: usize = 16;
/// Steps per PWM cycle. Also the full-on/full-off count (bit 12).
pub const PWM_STEPS: u16 = 4096;
/// Largest regular duty count; encoded as full-on.
pub const MAX_DUTY: u16 = PWM_STEPS - 1;

/// Internal oscillator frequency the prescaler divides.
pub const OSCILLATOR_HZ: u32 = 25_000_000;
/// Lowest output frequency the prescaler can produce.
pub const MIN_OUTPUT_FREQUENCY_HZ: f32 = 24.0;
/// Highest output frequency the prescaler can produce.
pub const MAX_OUTPUT_FREQUENCY_HZ: f32 = 1526.0;
/// Time the oscillator needs to settle after the sleep bit changes.
pub const OSCILLATOR_SETTLE_US: u32 = 500;

/// Fast-mode bus clock the chip is usually run at. The I2C peripheral handed
/// to the driver owns its own clock configuration.
pub const RECOMMENDED_BUS_CLOCK_HZ: u32 = 400_000;
