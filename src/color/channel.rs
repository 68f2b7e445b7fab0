//! Conversions between 8-bit channels and unit-range floats

/// Largest 8-bit channel value as a float
pub const CHANNEL_MAX: f64 = 255.0;

/// Map an 8-bit channel onto `[0, 1]`
pub fn normalize(channel: u8) -> f64 {
    f64::from(channel) / CHANNEL_MAX
}

/// Map a unit-range value back to an 8-bit channel
///
/// Scales by 255 and truncates toward zero. Values outside `[0, 1]` and NaN
/// saturate instead of wrapping.
pub fn quantize(value: f64) -> u8 {
    (value * CHANNEL_MAX).clamp(0.0, CHANNEL_MAX) as u8
}

/// Clamp a colour component to `[0, 1]`
pub fn clamp_unit(value: f64) -> f64 {
    num_traits::clamp(value, 0.0, 1.0)
}
