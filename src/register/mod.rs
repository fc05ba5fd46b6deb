//! Register catalog for the MAX31865.
//!
//! Every register is a marker type implementing [`Reg`] plus [`Readable`] and/or [`Writable`].
//! Encoding and decoding are pure bit transforms: every bit pattern decodes, and no validation
//! happens at this layer.

pub mod config;
pub mod fault_status;
pub mod fault_threshold;
pub mod rtd;

/// Bit 7 of the address byte selects a write access.
pub const WRITE_FLAG: u8 = 0x80;

/// Address byte for a read of the register at `addr`.
pub const fn read_address(addr: u8) -> u8 {
    addr & !WRITE_FLAG
}

/// Address byte for a write of the register at `addr`.
pub const fn write_address(addr: u8) -> u8 {
    addr | WRITE_FLAG
}

pub trait Reg { const ADDR: u8; }

pub trait Readable: Reg {
    type Out;
    const N: usize = 1;
    fn decode(b: &[u8]) -> Self::Out;
}

pub trait Writable: Reg {
    type In;
    const N: usize = 1;
    fn encode(v: &Self::In, out: &mut [u8]);
}
