use crate::bus::Bus;
use crate::register::{read_address, WRITE_FLAG};
use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

const ONE_SHOT: u8 = 0b0010_0000;

/// One transfer as seen on the wire, with the address byte exactly as sent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transfer {
    ReadByte(u8),
    WriteByte(u8, u8),
    ReadWord(u8),
    WriteWord(u8, u16),
}

#[derive(Debug, PartialEq, Eq)]
pub struct FakeBusError;

/// Simulated MAX31865 register file that logs every transfer.
///
/// A write that sets the 1-shot bit completes the conversion immediately (the bit reads back
/// as cleared) unless [`FakeBus::with_stuck_one_shot`] was called.
pub struct FakeBus {
    pub regs: [u8; 8],
    log: Vec<Transfer, 32>,
    one_shot_stuck: bool,
    fail_after: Option<usize>,
}

impl FakeBus {
    pub fn new() -> Self {
        FakeBus {
            regs: [0u8; 8],
            log: Vec::new(),
            one_shot_stuck: false,
            fail_after: None,
        }
    }

    /// Content of the RTD MSB/LSB registers, fault bit included.
    pub fn with_rtd(mut self, bits: u16) -> Self {
        self.regs[1..3].copy_from_slice(&bits.to_be_bytes());
        self
    }

    pub fn with_stuck_one_shot(mut self) -> Self {
        self.one_shot_stuck = true;
        self
    }

    /// Every transfer after the first `transfers` fails.
    pub fn failing_after(mut self, transfers: usize) -> Self {
        self.fail_after = Some(transfers);
        self
    }

    pub fn config(&self) -> u8 {
        self.regs[0]
    }

    pub fn log(&self) -> &[Transfer] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    fn record(&mut self, transfer: Transfer) -> Result<(), FakeBusError> {
        if let Some(limit) = self.fail_after {
            if self.log.len() >= limit {
                return Err(FakeBusError);
            }
        }
        self.log.push(transfer).unwrap();
        Ok(())
    }

    fn index(addr: u8) -> usize {
        read_address(addr) as usize
    }
}

impl Bus for FakeBus {
    type Error = FakeBusError;

    async fn write_byte(&mut self, addr: u8, value: u8) -> Result<(), Self::Error> {
        assert!(addr & WRITE_FLAG != 0, "write to read address 0x{:x}", addr);
        self.record(Transfer::WriteByte(addr, value))?;

        let i = Self::index(addr);
        self.regs[i] = if i == 0 && !self.one_shot_stuck {
            value & !ONE_SHOT
        } else {
            value
        };
        Ok(())
    }

    async fn read_byte(&mut self, addr: u8) -> Result<u8, Self::Error> {
        assert!(addr & WRITE_FLAG == 0, "read from write address 0x{:x}", addr);
        self.record(Transfer::ReadByte(addr))?;

        Ok(self.regs[Self::index(addr)])
    }

    async fn write_word(&mut self, addr: u8, value: u16) -> Result<(), Self::Error> {
        assert!(addr & WRITE_FLAG != 0, "write to read address 0x{:x}", addr);
        self.record(Transfer::WriteWord(addr, value))?;

        let i = Self::index(addr);
        self.regs[i..i + 2].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    async fn read_word(&mut self, addr: u8) -> Result<u16, Self::Error> {
        assert!(addr & WRITE_FLAG == 0, "read from write address 0x{:x}", addr);
        self.record(Transfer::ReadWord(addr))?;

        let i = Self::index(addr);
        Ok(u16::from_be_bytes([self.regs[i], self.regs[i + 1]]))
    }
}

/// Returns immediately and remembers how long it was asked to wait.
pub struct FakeDelay {
    waits_ns: Vec<u32, 16>,
}

impl FakeDelay {
    pub fn new() -> Self {
        FakeDelay { waits_ns: Vec::new() }
    }

    pub fn waits_ms(&self) -> Vec<u32, 16> {
        self.waits_ns.iter().map(|ns| ns / 1_000_000).collect()
    }
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(ns).unwrap();
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delay_ns(ms * 1_000_000).await
    }
}
