use crate::register::{Readable, Reg};

/// Marker struct for the RTD MSB/LSB (0x01 - 0x02) registers.
/// Both bytes are read in one burst so the code and its fault flag come from the same
/// conversion. Note that this is the unscaled ADC code; most users want
/// [`Max31865::read_raw()`](crate::Max31865::read_raw) or
/// [`Max31865::read_scaled()`](crate::Max31865::read_scaled), which run a full conversion first.
///
/// - **Length:** 2 bytes
/// - **Access:** Read-only
pub struct Rtd;
impl Reg for Rtd { const ADDR: u8 = 0x01; }

/// Raw content of the RTD registers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtdSample(u16);

impl RtdSample {
    pub fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// The 15-bit ADC code (D15:D1).
    pub fn code(&self) -> u16 { self.0 >> 1 }

    /// D0 is set when the chip flagged a fault during the conversion.
    pub fn fault(&self) -> bool { self.0 & 1 != 0 }

    pub fn bits(&self) -> u16 { self.0 }
}

impl Readable for Rtd {
    type Out = RtdSample;

    const N: usize = 2;

    fn decode(b: &[u8]) -> Self::Out {
        RtdSample(u16::from_be_bytes([b[0], b[1]]))
    }
}
