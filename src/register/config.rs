//! ### CONFIGURATION (`0x00`, 1 byte, R/W)
//!
//! Bias voltage, conversion mode, one-shot trigger, wiring, fault detection cycle,
//! fault status clear and mains filter selection, all packed into one byte.
//!
//! | Bit | Field |
//! |-----|-------|
//! | D7  | V<sub>BIAS</sub> (1 = on) |
//! | D6  | Conversion mode (1 = auto) |
//! | D5  | 1-shot (auto-clear) |
//! | D4  | 3-wire (1 = 3-wire, 0 = 2- or 4-wire) |
//! | D3:D2 | Fault detection cycle control |
//! | D1  | Fault status clear |
//! | D0  | 50/60 Hz filter select (1 = 50 Hz) |
//!
//! ### Default values
//! 0x00

use crate::register::{Readable, Reg, Writable};

/// Marker type for the CONFIGURATION (0x00) register
pub struct Config;
impl Reg for Config { const ADDR: u8 = 0x00; }

/// The payload for the CONFIGURATION (0x00) register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigFields {
    /// Bias voltage applied to the RTD.
    pub vbias: bool,
    pub conversion_mode: ConversionMode,
    /// Requests a single conversion. The chip clears this bit once the conversion is done.
    pub one_shot: bool,
    pub wiring: Wiring,
    pub fault_detection: FaultDetection,
    pub fault_clear: FaultClear,
    pub filter: Filter,
}

impl ConfigFields {
    const VBIAS: u8 = 0b1000_0000;
    const CONVERSION_MODE: u8 = 0b0100_0000;
    const ONE_SHOT: u8 = 0b0010_0000;
    const THREE_WIRE: u8 = 0b0001_0000;
    const FAULT_DETECTION_SHIFT: u8 = 2;
    const FAULT_DETECTION_MASK: u8 = 0b11;
    const FAULT_CLEAR: u8 = 0b0000_0010;
    const FILTER: u8 = 0b0000_0001;

    pub fn from_bits(v: u8) -> Self {
        Self {
            vbias: v & Self::VBIAS != 0,
            conversion_mode: ConversionMode::from(v & Self::CONVERSION_MODE != 0),
            one_shot: v & Self::ONE_SHOT != 0,
            wiring: Wiring::from(v & Self::THREE_WIRE != 0),
            fault_detection: FaultDetection::from(
                (v >> Self::FAULT_DETECTION_SHIFT) & Self::FAULT_DETECTION_MASK,
            ),
            fault_clear: FaultClear::from(v & Self::FAULT_CLEAR != 0),
            filter: Filter::from(v & Self::FILTER != 0),
        }
    }

    pub fn bits(&self) -> u8 {
        let mut value = 0u8;
        if self.vbias {
            value |= Self::VBIAS;
        }
        if self.conversion_mode == ConversionMode::Auto {
            value |= Self::CONVERSION_MODE;
        }
        if self.one_shot {
            value |= Self::ONE_SHOT;
        }
        if self.wiring == Wiring::ThreeWire {
            value |= Self::THREE_WIRE;
        }
        let fault_detection: u8 = self.fault_detection.into();
        value |= (fault_detection & Self::FAULT_DETECTION_MASK) << Self::FAULT_DETECTION_SHIFT;
        if self.fault_clear == FaultClear::Auto {
            value |= Self::FAULT_CLEAR;
        }
        if self.filter == Filter::Hz50 {
            value |= Self::FILTER;
        }
        value
    }
}

impl Readable for Config {
    type Out = ConfigFields;

    fn decode(b: &[u8]) -> Self::Out {
        ConfigFields::from_bits(b[0])
    }
}

impl Writable for Config {
    type In = ConfigFields;

    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = v.bits();
    }
}

/// Continuous (auto) conversion or conversions on request only.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionMode {
    /// Normally off. Each conversion is triggered through the 1-shot bit.
    OneShot,
    /// Conversions run continuously at the filter-dependent rate.
    Auto,
}

impl From<bool> for ConversionMode {
    fn from(bit: bool) -> Self {
        if bit { ConversionMode::Auto } else { ConversionMode::OneShot }
    }
}

/// RTD connection as seen by the chip. 2-wire and 4-wire share the same setting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wiring {
    TwoOrFourWire,
    ThreeWire,
}

impl From<bool> for Wiring {
    fn from(bit: bool) -> Self {
        if bit { Wiring::ThreeWire } else { Wiring::TwoOrFourWire }
    }
}

/// Fault detection cycle control (D3:D2).
///
/// See the datasheet, table 3, for the timing requirements of the manual cycles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultDetection {
    /// No action (and the value read back once a detection cycle has finished)
    NoAction = 0b00,
    /// Fault detection with automatic delay
    Automatic = 0b01,
    /// Run fault detection with manual delay, cycle 1
    ManualCycle1 = 0b10,
    /// Finish fault detection with manual delay, cycle 2
    ManualCycle2 = 0b11,
}

impl From<FaultDetection> for u8 {
    fn from(v: FaultDetection) -> u8 {
        match v {
            FaultDetection::NoAction => 0b00,
            FaultDetection::Automatic => 0b01,
            FaultDetection::ManualCycle1 => 0b10,
            FaultDetection::ManualCycle2 => 0b11,
        }
    }
}

impl From<u8> for FaultDetection {
    fn from(field: u8) -> Self {
        match field & 0b11 {
            0b00 => FaultDetection::NoAction,
            0b01 => FaultDetection::Automatic,
            0b10 => FaultDetection::ManualCycle1,
            _ => FaultDetection::ManualCycle2,
        }
    }
}

/// Fault status clear (D1).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultClear {
    Manual,
    Auto,
}

impl From<bool> for FaultClear {
    fn from(bit: bool) -> Self {
        if bit { FaultClear::Auto } else { FaultClear::Manual }
    }
}

/// Mains frequency rejected by the input filter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Filter {
    Hz60,
    Hz50,
}

impl From<bool> for Filter {
    fn from(bit: bool) -> Self {
        if bit { Filter::Hz50 } else { Filter::Hz60 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_decode() {
        let reg = Config::decode(&[0b0000_0000]);
        assert!(!reg.vbias);
        assert_eq!(ConversionMode::OneShot, reg.conversion_mode);
        assert!(!reg.one_shot);
        assert_eq!(Wiring::TwoOrFourWire, reg.wiring);
        assert_eq!(FaultDetection::NoAction, reg.fault_detection);
        assert_eq!(FaultClear::Manual, reg.fault_clear);
        assert_eq!(Filter::Hz60, reg.filter);

        let reg = Config::decode(&[0b1000_0000]);
        assert!(reg.vbias);

        let reg = Config::decode(&[0b0100_0000]);
        assert_eq!(ConversionMode::Auto, reg.conversion_mode);

        let reg = Config::decode(&[0b0010_0000]);
        assert!(reg.one_shot);

        let reg = Config::decode(&[0b0001_0000]);
        assert_eq!(Wiring::ThreeWire, reg.wiring);

        let reg = Config::decode(&[0b0000_0100]);
        assert_eq!(FaultDetection::Automatic, reg.fault_detection);

        let reg = Config::decode(&[0b0000_1000]);
        assert_eq!(FaultDetection::ManualCycle1, reg.fault_detection);

        let reg = Config::decode(&[0b0000_1100]);
        assert_eq!(FaultDetection::ManualCycle2, reg.fault_detection);

        let reg = Config::decode(&[0b0000_0010]);
        assert_eq!(FaultClear::Auto, reg.fault_clear);

        let reg = Config::decode(&[0b0000_0001]);
        assert_eq!(Filter::Hz50, reg.filter);
    }

    #[test]
    fn config_encode() {
        let mut buffer = [0u8; 1];
        Config::encode(&ConfigFields {
            vbias: false,
            conversion_mode: ConversionMode::OneShot,
            one_shot: false,
            wiring: Wiring::TwoOrFourWire,
            fault_detection: FaultDetection::NoAction,
            fault_clear: FaultClear::Auto,
            filter: Filter::Hz50,
        }, &mut buffer);
        assert_eq!([0b0000_0011], buffer);

        Config::encode(&ConfigFields {
            vbias: true,
            conversion_mode: ConversionMode::Auto,
            one_shot: false,
            wiring: Wiring::ThreeWire,
            fault_detection: FaultDetection::ManualCycle1,
            fault_clear: FaultClear::Manual,
            filter: Filter::Hz60,
        }, &mut buffer);
        assert_eq!([0b1101_1000], buffer);

        Config::encode(&ConfigFields {
            vbias: false,
            conversion_mode: ConversionMode::OneShot,
            one_shot: true,
            wiring: Wiring::TwoOrFourWire,
            fault_detection: FaultDetection::Automatic,
            fault_clear: FaultClear::Manual,
            filter: Filter::Hz60,
        }, &mut buffer);
        assert_eq!([0b0010_0100], buffer);
    }

    #[test]
    fn config_every_byte_survives_decode_and_encode() {
        // All 256 patterns are distinct field combinations, so this covers every combination.
        for byte in 0..=u8::MAX {
            let fields = Config::decode(&[byte]);
            let mut buffer = [0u8; 1];
            Config::encode(&fields, &mut buffer);
            assert_eq!(byte, buffer[0]);
            assert_eq!(fields, ConfigFields::from_bits(fields.bits()));
        }
    }

    #[test]
    fn fault_detection_ignores_upper_bits() {
        assert_eq!(FaultDetection::Automatic, FaultDetection::from(0b1111_1101));
    }
}
