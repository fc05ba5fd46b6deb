use crate::register::{Readable, Reg};

/// Marker struct for the FAULT STATUS (0x07) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Used with [`Max31865::read::<FaultStatusReg>()`](crate::Max31865::read) or the convenience
/// method [`Max31865::fault_status`](crate::Max31865::fault_status).
pub struct FaultStatusReg;
impl Reg for FaultStatusReg { const ADDR: u8 = 0x07; }

/// Content of the fault status register.
///
/// The raw byte is kept as-is; the accessors only name the bits listed in the datasheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultStatus(u8);

impl FaultStatus {
    const RTD_HIGH_THRESHOLD: u8 = 1 << 7;
    const RTD_LOW_THRESHOLD: u8 = 1 << 6;
    const REFIN_HIGH: u8 = 1 << 5;
    const REFIN_LOW_FORCE_OPEN: u8 = 1 << 4;
    const RTDIN_LOW_FORCE_OPEN: u8 = 1 << 3;
    const OVER_UNDER_VOLTAGE: u8 = 1 << 2;

    pub fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 { self.0 }

    /// Any bit set, including the two unnamed low bits.
    pub fn has_fault(&self) -> bool { self.0 != 0 }

    /// RTD code above the high fault threshold.
    pub fn rtd_high_threshold(&self) -> bool { self.0 & Self::RTD_HIGH_THRESHOLD != 0 }

    /// RTD code below the low fault threshold.
    pub fn rtd_low_threshold(&self) -> bool { self.0 & Self::RTD_LOW_THRESHOLD != 0 }

    /// REFIN- > 0.85 x V<sub>BIAS</sub>
    pub fn refin_high(&self) -> bool { self.0 & Self::REFIN_HIGH != 0 }

    /// REFIN- < 0.85 x V<sub>BIAS</sub> (FORCE- open)
    pub fn refin_low_force_open(&self) -> bool { self.0 & Self::REFIN_LOW_FORCE_OPEN != 0 }

    /// RTDIN- < 0.85 x V<sub>BIAS</sub> (FORCE- open)
    pub fn rtdin_low_force_open(&self) -> bool { self.0 & Self::RTDIN_LOW_FORCE_OPEN != 0 }

    pub fn over_under_voltage(&self) -> bool { self.0 & Self::OVER_UNDER_VOLTAGE != 0 }
}

impl Readable for FaultStatusReg {
    type Out = FaultStatus;

    fn decode(b: &[u8]) -> Self::Out {
        FaultStatus(b[0])
    }
}
