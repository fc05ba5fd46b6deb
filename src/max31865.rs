use crate::bus::{Bus, Spi, MAX_REG_BYTES};
use crate::config::Configuration;
use crate::error::{Max31865Error, Max31865Result};
use crate::register::config::{Config, ConfigFields, ConversionMode, FaultClear, FaultDetection};
use crate::register::fault_status::{FaultStatus, FaultStatusReg};
use crate::register::fault_threshold::{HighFaultThreshold, LowFaultThreshold};
use crate::register::rtd::Rtd;
use crate::register::{read_address, write_address, Readable, Writable};
use crate::scaling;
use embedded_hal_async::delay::DelayNs;

/// Type alias for a MAX31865 chip communicating over SPI
pub type Max31865Spi<T, D> = Max31865<Spi<T>, D>;

/// Time for the bias voltage to settle before a conversion, in milliseconds.
pub const BIAS_SETTLE_MS: u32 = 10;

/// Wait after triggering a one-shot conversion, in milliseconds.
///
/// Covers the 52 ms (60 Hz) / 62.5 ms (50 Hz) conversion window of the datasheet only loosely;
/// a conversion that has not finished by then is reported as unavailable.
pub const CONVERSION_MS: u32 = 50;

/// Main MAX31865 driver struct
///
/// Owns the bus and the delay provider. The handle can be moved but never duplicated, so there
/// is always exactly one owner driving a given chip.
pub struct Max31865<B, D> {
    bus: B,
    delay: D,
    initialized: bool,
}

impl<T, D> Max31865Spi<T, D>
where
    T: embedded_hal_async::spi::SpiDevice,
    D: DelayNs,
{
    /// Constructs a new MAX31865 driver instance that communicates over SPI.
    ///
    /// The SPI device must be set up for [`MODE`](crate::MODE) (or SPI mode 1). See
    /// [`Max31865::new`] for what happens on the bus.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use embedded_hal_async::delay::DelayNs;
    /// # use embedded_hal_async::spi::SpiDevice;
    /// # use max31865_rs::Max31865Result;
    ///  use max31865_rs::Max31865;
    ///  use max31865_rs::config::Configuration;
    /// # async fn demo<S: SpiDevice, D: DelayNs>(spi: S, delay: D) -> Max31865Result<(), S::Error> {
    ///
    ///  let mut device = Max31865::new_spi(spi, delay, Configuration::default()).await?;
    ///  if let Some(celsius) = device.read_scaled().await? {
    ///      // ...
    ///  }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new_spi(
        spi: T,
        delay: D,
        config: Configuration,
    ) -> Max31865Result<Self, <Spi<T> as Bus>::Error> {
        Self::new(Spi::new(spi), delay, config).await
    }
}

impl<B, D> Max31865<B, D>
where
    B: Bus,
    D: DelayNs,
{
    /// Creates a new instance of the driver and programs the chip.
    ///
    /// This function writes, in order:
    /// - the configuration register, built from `config` with bias and 1-shot off
    /// - the high fault threshold
    /// - the low fault threshold
    ///
    /// and then marks the handle initialized. Nothing is read from the chip.
    pub async fn new(bus: B, delay: D, config: Configuration) -> Max31865Result<Self, B::Error> {
        let mut device = Max31865 {
            bus,
            delay,
            initialized: false,
        };

        device.apply_configuration(&config).await?;
        device.initialized = true;

        Ok(device)
    }

    async fn apply_configuration(&mut self, config: &Configuration) -> Max31865Result<(), B::Error> {
        let fields = ConfigFields {
            vbias: false,
            conversion_mode: config.conversion_mode,
            one_shot: false,
            wiring: config.wires.into(),
            fault_detection: config.fault_detection,
            fault_clear: config.fault_clear,
            filter: config.filter,
        };
        debug!("writing configuration {:#x}", fields.bits());
        self.write_register::<Config>(&fields).await?;

        let high = scaling::scaled_to_raw(config.threshold_high);
        let low = scaling::scaled_to_raw(config.threshold_low);
        debug!("fault thresholds low {} high {}", low, high);
        self.write_register::<HighFaultThreshold>(&high).await?;
        self.write_register::<LowFaultThreshold>(&low).await?;

        Ok(())
    }

    /// Marks the handle uninitialized. No register is touched, the chip keeps its last state.
    ///
    /// Afterwards [`read_raw`](Self::read_raw) and [`read_scaled`](Self::read_scaled) return
    /// `Ok(None)` and the register accessors return [`Max31865Error::NotInitialized`].
    pub fn deinitialize(&mut self) {
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Destroys the driver and gives back the bus and the delay provider.
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Runs one conversion and returns the 15-bit RTD code.
    ///
    /// The sequence is:
    /// 1. Turn the bias voltage on. This also clears the 1-shot, fault detection and fault
    ///    clear fields, whatever they were configured to.
    /// 2. Wait [`BIAS_SETTLE_MS`].
    /// 3. In one-shot mode, set the 1-shot bit and wait [`CONVERSION_MS`].
    /// 4. If the 1-shot bit has not cleared yet, there is no result.
    /// 5. Read the RTD registers. If the fault bit is set, there is no result.
    /// 6. Turn the bias voltage off again, to limit self-heating.
    ///
    /// Returns `Ok(None)` when no measurement is available: the handle is deinitialized (no bus
    /// traffic at all in that case), the conversion did not finish in time, or the chip flagged
    /// a fault. The three cases are not told apart; poll again on the next cycle. Bus errors
    /// are passed through as [`Max31865Error::Bus`].
    pub async fn read_raw(&mut self) -> Max31865Result<Option<u16>, B::Error> {
        if !self.initialized {
            return Ok(None);
        }

        self.set_bias(true).await?;
        self.delay.delay_ms(BIAS_SETTLE_MS).await;

        let code = self.convert().await;
        self.set_bias(false).await?;

        code
    }

    /// Runs one conversion and returns the temperature in degrees Celsius.
    ///
    /// Same availability rules as [`read_raw`](Self::read_raw).
    pub async fn read_scaled(&mut self) -> Max31865Result<Option<f32>, B::Error> {
        Ok(self.read_raw().await?.map(scaling::raw_to_scaled))
    }

    /// Like [`read_scaled`](Self::read_scaled), as a `uom` quantity.
    #[cfg(feature = "uom")]
    pub async fn read_temperature_uom(
        &mut self,
    ) -> Max31865Result<Option<uom::si::f32::ThermodynamicTemperature>, B::Error> {
        use uom::si::f32::ThermodynamicTemperature;
        use uom::si::thermodynamic_temperature::degree_celsius;

        Ok(self
            .read_scaled()
            .await?
            .map(|celsius| ThermodynamicTemperature::new::<degree_celsius>(celsius)))
    }

    async fn convert(&mut self) -> Max31865Result<Option<u16>, B::Error> {
        if self.read_register::<Config>().await?.conversion_mode == ConversionMode::OneShot {
            self.start_one_shot().await?;
            self.delay.delay_ms(CONVERSION_MS).await;
        }

        if self.read_register::<Config>().await?.one_shot {
            warn!("conversion still pending after {} ms", CONVERSION_MS);
            return Ok(None);
        }

        let sample = self.read_register::<Rtd>().await?;
        if sample.fault() {
            warn!("fault bit set in RTD result {:#x}", sample.bits());
            return Ok(None);
        }

        trace!("RTD code {}", sample.code());
        Ok(Some(sample.code()))
    }

    // The chip must not be asked for a fault detection cycle while the bias is switched, so
    // the fault control fields are dropped every time.
    // TODO: check against the datasheet whether fault_clear has to be cleared here as well;
    // doing so discards the mode configured at construction after the first reading.
    async fn set_bias(&mut self, enabled: bool) -> Max31865Result<(), B::Error> {
        let mut cfg = self.read_register::<Config>().await?;
        cfg.vbias = enabled;
        cfg.one_shot = false;
        cfg.fault_detection = FaultDetection::NoAction;
        cfg.fault_clear = FaultClear::Manual;
        trace!("bias {}", enabled);

        self.write_register::<Config>(&cfg).await
    }

    async fn start_one_shot(&mut self) -> Max31865Result<(), B::Error> {
        let mut cfg = self.read_register::<Config>().await?;
        cfg.one_shot = true;
        trace!("starting one-shot conversion");

        self.write_register::<Config>(&cfg).await
    }

    /// Read a register using a **typed marker** from [`crate::register`].
    ///
    /// The transfer width and address come from `R::N` and `R::ADDR`; the read flag is added
    /// here. Fails with [`Max31865Error::NotInitialized`] on a deinitialized handle.
    ///
    /// # Examples
    /// ```rust,no_run
    /// # use max31865_rs::{register, Max31865, Max31865Result};
    /// # use max31865_rs::bus::Bus;
    /// # use embedded_hal_async::delay::DelayNs;
    /// # async fn demo<B: Bus, D: DelayNs>(mut device: Max31865<B, D>) -> Max31865Result<(), B::Error> {
    /// use max31865_rs::register::config::Config;
    /// let cfg = device.read::<Config>().await?;
    /// # Ok(()) }
    /// ```
    pub async fn read<R: Readable>(&mut self) -> Max31865Result<R::Out, B::Error> {
        self.ensure_initialized()?;
        self.read_register::<R>().await
    }

    /// Write a register using a **typed marker** from [`crate::register`].
    ///
    /// This is a direct write of the given value. To keep unrelated fields of the
    /// configuration register, read it first, change what you need and write it back.
    /// Fails with [`Max31865Error::NotInitialized`] on a deinitialized handle.
    pub async fn write<W: Writable>(&mut self, v: &W::In) -> Max31865Result<(), B::Error> {
        self.ensure_initialized()?;
        self.write_register::<W>(v).await
    }

    /// Returns the decoded CONFIGURATION (0x00) register.
    pub async fn configuration(&mut self) -> Max31865Result<ConfigFields, B::Error> {
        self.read::<Config>().await
    }

    /// Returns the high fault threshold as an RTD code.
    pub async fn high_fault_threshold(&mut self) -> Max31865Result<u16, B::Error> {
        self.read::<HighFaultThreshold>().await
    }

    /// Returns the low fault threshold as an RTD code.
    pub async fn low_fault_threshold(&mut self) -> Max31865Result<u16, B::Error> {
        self.read::<LowFaultThreshold>().await
    }

    /// Returns the FAULT STATUS (0x07) register.
    ///
    /// Purely diagnostic, [`read_raw`](Self::read_raw) never looks at it.
    pub async fn fault_status(&mut self) -> Max31865Result<FaultStatus, B::Error> {
        self.read::<FaultStatusReg>().await
    }

    fn ensure_initialized(&self) -> Max31865Result<(), B::Error> {
        if self.initialized {
            Ok(())
        } else {
            Err(Max31865Error::NotInitialized)
        }
    }

    async fn read_register<R: Readable>(&mut self) -> Max31865Result<R::Out, B::Error> {
        let addr = read_address(R::ADDR);
        let mut buf = [0u8; MAX_REG_BYTES];
        if R::N == 1 {
            buf[0] = self.bus.read_byte(addr).await.map_err(Max31865Error::Bus)?;
        } else {
            buf = self.bus.read_word(addr).await.map_err(Max31865Error::Bus)?.to_be_bytes();
        }

        Ok(R::decode(&buf[..R::N]))
    }

    async fn write_register<W: Writable>(&mut self, v: &W::In) -> Max31865Result<(), B::Error> {
        let addr = write_address(W::ADDR);
        let mut buf = [0u8; MAX_REG_BYTES];
        W::encode(v, &mut buf[..W::N]);
        if W::N == 1 {
            self.bus.write_byte(addr, buf[0]).await.map_err(Max31865Error::Bus)
        } else {
            self.bus.write_word(addr, u16::from_be_bytes(buf)).await.map_err(Max31865Error::Bus)
        }
    }
}
