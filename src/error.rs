//! Errors that can occur when using the MAX31865 device.
//!
//! A missing measurement is not an error: [`Max31865::read_raw`](crate::Max31865::read_raw)
//! reports it as `Ok(None)`. This type only carries conditions the caller cannot retry its way
//! out of on the next poll. It is generic over the underlying bus error type.

/// This represents all possible errors that can occur when using the MAX31865 device.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max31865Error<BusError> {
    /// An error has occurred in the SPI driver
    Bus(BusError),

    /// The handle was deinitialized, so register access is refused.
    ///
    /// Only returned by the register accessors; the measurement methods report `Ok(None)` instead.
    NotInitialized,
}

/// Type alias used to simplify return types throughout the driver
pub type Max31865Result<T, BusError> = Result<T, Max31865Error<BusError>>;
