//! Pure register-value computation: duty encoding and frequency prescale.

use crate::registers::{
    CHANNEL_BASE, CHANNEL_COUNT, MAX_DUTY, MAX_OUTPUT_FREQUENCY_HZ, MIN_OUTPUT_FREQUENCY_HZ,
    OSCILLATOR_HZ, PWM_STEPS,
};
use crate::util::warn;

/// Splits a duty count into the (on, off) counts of a channel's four registers.
///
/// The boundaries use the chip's dedicated full-on/full-off encoding (count
/// 4096, bit 12 set) so that 0 and 4095 produce true 0% and 100% duty cycles
/// instead of one-step approximations. Everything in between starts the on
/// phase at cycle position 0 and only moves the off edge, for a duty cycle of
/// `value / 4096`.
pub(crate) fn split_duty(value: u16) -> (u16, u16) {
    if value >= MAX_DUTY {
        (PWM_STEPS, 0)
    } else if value == 0 {
        (0, PWM_STEPS)
    } else {
        (0, value)
    }
}

/// Builds the 5-byte frame that updates one channel: the channel's base
/// register followed by on-low, on-high, off-low, off-high.
///
/// Out-of-range channels and duty values saturate to the nearest bound.
pub(crate) fn channel_payload(channel: u8, value: u16) -> [u8; 5] {
    let (on, off) = split_duty(clamp_duty(value));
    let [on_lo, on_hi] = on.to_le_bytes();
    let [off_lo, off_hi] = off.to_le_bytes();
    let base = CHANNEL_BASE[clamp_channel(channel) as usize];
    [base, on_lo, on_hi, off_lo, off_hi]
}

/// Computes the prescale byte for an output frequency, saturating the request
/// to the chip's supported range first.
///
/// The division truncates: `prescale = trunc(25 MHz / (4096 * f))`.
pub(crate) fn prescale(frequency_hz: f32) -> u8 {
    let clamped = clamp_frequency(frequency_hz);
    (OSCILLATOR_HZ as f32 / (PWM_STEPS as f32 * clamped)) as u8
}

fn clamp_channel(channel: u8) -> u8 {
    let max = CHANNEL_COUNT as u8 - 1;
    if channel > max {
        warn!("channel {} is out of range, clipping to {}", channel, max);
        max
    } else {
        channel
    }
}

fn clamp_duty(value: u16) -> u16 {
    if value > MAX_DUTY {
        warn!("duty count {} is out of range, clipping to {}", value, MAX_DUTY);
        MAX_DUTY
    } else {
        value
    }
}

// Callers rule out zero and negative requests before coming here.
fn clamp_frequency(hz: f32) -> f32 {
    if hz > MAX_OUTPUT_FREQUENCY_HZ {
        warn!(
            "output frequency {} Hz is above the chip maximum, clipping to {} Hz",
            hz, MAX_OUTPUT_FREQUENCY_HZ
        );
        MAX_OUTPUT_FREQUENCY_HZ
    } else if hz < MIN_OUTPUT_FREQUENCY_HZ {
        warn!(
            "output frequency {} Hz is below the chip minimum, clipping to {} Hz",
            hz, MIN_OUTPUT_FREQUENCY_HZ
        );
        MIN_OUTPUT_FREQUENCY_HZ
    } else {
        hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duty_boundaries_use_bit_12() {
        assert_eq!(split_duty(4095), (4096, 0));
        assert_eq!(split_duty(0), (0, 4096));
    }

    #[test]
    fn intermediate_duty_moves_only_the_off_edge() {
        assert_eq!(split_duty(1), (0, 1));
        assert_eq!(split_duty(0x0123), (0, 0x0123));
        assert_eq!(split_duty(4094), (0, 4094));
    }

    #[test]
    fn payload_layout_is_base_then_on_then_off_little_endian() {
        assert_eq!(channel_payload(4, 0x0123), [0x16, 0x00, 0x00, 0x23, 0x01]);
        assert_eq!(channel_payload(0, 4095), [0x06, 0x00, 0x10, 0x00, 0x00]);
        assert_eq!(channel_payload(15, 0), [0x42, 0x00, 0x00, 0x00, 0x10]);
    }

    #[test]
    fn out_of_range_inputs_saturate() {
        // Channel clips to 15, duty to 4095 (which encodes as full-on).
        assert_eq!(channel_payload(20, 5000), [0x42, 0x00, 0x10, 0x00, 0x00]);
    }

    #[test]
    fn prescale_truncates() {
        // 25 MHz / (4096 * 50) = 122.07
        assert_eq!(prescale(50.0), 122);
        // 25 MHz / (4096 * 200) = 30.52
        assert_eq!(prescale(200.0), 30);
    }

    #[test]
    fn prescale_saturates_to_chip_limits() {
        // Above the maximum behaves like the maximum: 25 MHz / (4096 * 1526) = 3.9997
        assert_eq!(prescale(1600.0), 3);
        assert_eq!(prescale(1526.0), 3);
        assert_eq!(prescale(100_000.0), 3);
        // Below the minimum behaves like the minimum: 25 MHz / (4096 * 24) = 254.3
        assert_eq!(prescale(24.0), 254);
        assert_eq!(prescale(10.0), 254);
    }
}
