//! Transport between the driver and the chip.
//!
//! [`Bus`] is the only thing the driver needs from the outside world: byte and word transfers
//! at an address byte that already carries the read/write flag
//! (see [`register::read_address`](crate::register::read_address) and
//! [`register::write_address`](crate::register::write_address)).

use core::future::Future;
use embedded_hal_async::spi::{Operation, SpiDevice};

/// Widest register block transferred in one go (the 16-bit RTD and threshold registers).
pub const MAX_REG_BYTES: usize = 2;

pub trait Bus {
    type Error;

    fn write_byte(&mut self, addr: u8, value: u8) -> impl Future<Output = Result<(), Self::Error>>;

    fn read_byte(&mut self, addr: u8) -> impl Future<Output = Result<u8, Self::Error>>;

    /// Writes `value` to `addr` and `addr + 1`, MSB first.
    fn write_word(&mut self, addr: u8, value: u16) -> impl Future<Output = Result<(), Self::Error>>;

    /// Reads `addr` and `addr + 1` in one transfer, MSB first.
    fn read_word(&mut self, addr: u8) -> impl Future<Output = Result<u16, Self::Error>>;
}

/// [`Bus`] over an SPI device (SPI mode 1 or 3, see [`crate::MODE`]).
///
/// Chip select and clock setup are owned by the [`SpiDevice`] implementation.
pub struct Spi<SpiType> {
    spi: SpiType,
}

impl<SpiType> Spi<SpiType>
where
    SpiType: SpiDevice,
{
    pub(crate) fn new(spi: SpiType) -> Self {
        Self { spi }
    }

    /// Gives back the SPI device.
    pub fn release(self) -> SpiType {
        self.spi
    }
}

impl<SpiType> Bus for Spi<SpiType>
where
    SpiType: SpiDevice,
{
    type Error = SpiType::Error;

    async fn write_byte(&mut self, addr: u8, value: u8) -> Result<(), Self::Error> {
        self.spi.write(&[addr, value]).await?;

        Ok(())
    }

    async fn read_byte(&mut self, addr: u8) -> Result<u8, Self::Error> {
        let mut data = [0u8; 1];
        self.spi.transaction(
            &mut [Operation::Write(&[addr]), Operation::Read(&mut data)],
        ).await?;

        Ok(data[0])
    }

    async fn write_word(&mut self, addr: u8, value: u16) -> Result<(), Self::Error> {
        let [msb, lsb] = value.to_be_bytes();
        self.spi.write(&[addr, msb, lsb]).await?;

        Ok(())
    }

    async fn read_word(&mut self, addr: u8) -> Result<u16, Self::Error> {
        let mut data = [0u8; MAX_REG_BYTES];
        self.spi.transaction(
            &mut [Operation::Write(&[addr]), Operation::Read(&mut data)],
        ).await?;

        Ok(u16::from_be_bytes(data))
    }
}
