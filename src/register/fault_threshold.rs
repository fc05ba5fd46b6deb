//! ### High/Low fault threshold (`0x03 - 0x04` and `0x05 - 0x06`, 2 bytes each, R/W)
//!
//! The thresholds use the layout of the RTD result registers: the 15-bit code sits in D15:D1
//! and D0 is don't-care. A conversion whose code is above the high threshold or below the low
//! threshold sets the corresponding bit in the fault status register.
//!
//! ### Default values
//! High: 0xFFFF, Low: 0x0000

use crate::register::{Readable, Reg, Writable};

/// Marker struct for the high fault threshold MSB/LSB (0x03 - 0x04) registers.
///
/// The value type is the 15-bit code, in the same domain as
/// [`RtdSample::code`](crate::register::rtd::RtdSample::code).
pub struct HighFaultThreshold;
impl Reg for HighFaultThreshold { const ADDR: u8 = 0x03; }

/// Marker struct for the low fault threshold MSB/LSB (0x05 - 0x06) registers.
pub struct LowFaultThreshold;
impl Reg for LowFaultThreshold { const ADDR: u8 = 0x05; }

fn decode_code(b: &[u8]) -> u16 {
    u16::from_be_bytes([b[0], b[1]]) >> 1
}

// Codes wider than 15 bits lose their top bit.
fn encode_code(code: u16, out: &mut [u8]) {
    out[..2].copy_from_slice(&(code << 1).to_be_bytes());
}

impl Readable for HighFaultThreshold {
    type Out = u16;
    const N: usize = 2;

    fn decode(b: &[u8]) -> Self::Out {
        decode_code(b)
    }
}

impl Writable for HighFaultThreshold {
    type In = u16;
    const N: usize = 2;

    fn encode(v: &Self::In, out: &mut [u8]) {
        encode_code(*v, out)
    }
}

impl Readable for LowFaultThreshold {
    type Out = u16;
    const N: usize = 2;

    fn decode(b: &[u8]) -> Self::Out {
        decode_code(b)
    }
}

impl Writable for LowFaultThreshold {
    type In = u16;
    const N: usize = 2;

    fn encode(v: &Self::In, out: &mut [u8]) {
        encode_code(*v, out)
    }
}
