//! Linear conversion between the 15-bit RTD code and degrees Celsius.
//!
//! The coefficients are a straight-line fit for a PT100 probe with the reference resistor of
//! the board it was calibrated on. They are kept as-is so readings stay comparable with installed units.

/// Codes per degree.
pub const SLOPE: f32 = 30.904;

/// Code at 0 °C.
pub const INTERCEPT: f32 = 8234.257;

/// Largest code the ADC can produce (15 bits).
pub const MAX_CODE: u16 = 0x7FFF;

/// Converts an RTD code into degrees Celsius.
pub fn raw_to_scaled(raw: u16) -> f32 {
    (raw as f32 - INTERCEPT) / SLOPE
}

/// Converts degrees Celsius into an RTD code, truncating towards zero.
///
/// Values outside the code range saturate at `0` and [`MAX_CODE`]. The conversion is lossy,
/// which is fine for fault thresholds but not for measurements.
pub fn scaled_to_raw(value: f32) -> u16 {
    // float to int `as` casts saturate and map NaN to 0
    let code = (value * SLOPE + INTERCEPT) as i32;
    code.clamp(0, MAX_CODE as i32) as u16
}
