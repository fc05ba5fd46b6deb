use crate::register::config::{ConversionMode, FaultClear, FaultDetection, Filter, Wiring};

/// Everything written to the chip when the driver is constructed.
///
/// Start from [`Configuration::default()`] and adjust with the builder methods:
///
/// ```rust
/// use max31865_rs::config::{Configuration, Wires};
/// use max31865_rs::register::config::{ConversionMode, Filter};
///
/// let config = Configuration::default()
///     .wires(Wires::Three)
///     .filter(Filter::Hz60)
///     .conversion_mode(ConversionMode::Auto)
///     .fault_thresholds(-20.0, 120.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub(crate) threshold_low: f32,
    pub(crate) threshold_high: f32,
    pub(crate) wires: Wires,
    pub(crate) fault_detection: FaultDetection,
    pub(crate) fault_clear: FaultClear,
    pub(crate) filter: Filter,
    pub(crate) conversion_mode: ConversionMode,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            threshold_low: 0.0,
            threshold_high: 180.0,
            wires: Wires::Two,
            fault_detection: FaultDetection::NoAction,
            fault_clear: FaultClear::Auto,
            filter: Filter::Hz50,
            conversion_mode: ConversionMode::OneShot,
        }
    }
}

impl Configuration {
    /// Low and high fault thresholds in degrees Celsius.
    ///
    /// They are converted to RTD codes with [`scaled_to_raw`](crate::scaling::scaled_to_raw),
    /// so they are only as precise as one code step.
    pub fn fault_thresholds(mut self, low: f32, high: f32) -> Self {
        self.threshold_low = low;
        self.threshold_high = high;

        self
    }

    pub fn wires(mut self, wires: Wires) -> Self {
        self.wires = wires;

        self
    }

    /// Fault detection cycle written at construction.
    ///
    /// **Note:** every measurement rewrites the configuration register with this field set to
    /// [`FaultDetection::NoAction`], so the setting only lasts until the first reading.
    pub fn fault_detection(mut self, fault_detection: FaultDetection) -> Self {
        self.fault_detection = fault_detection;

        self
    }

    pub fn fault_clear(mut self, fault_clear: FaultClear) -> Self {
        self.fault_clear = fault_clear;

        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;

        self
    }

    pub fn conversion_mode(mut self, conversion_mode: ConversionMode) -> Self {
        self.conversion_mode = conversion_mode;

        self
    }

    pub fn threshold_low(&self) -> f32 { self.threshold_low }

    pub fn threshold_high(&self) -> f32 { self.threshold_high }
}

/// Number of wires connecting the RTD probe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wires {
    Two,
    Three,
    Four,
}

impl From<Wires> for Wiring {
    fn from(wires: Wires) -> Self {
        match wires {
            Wires::Two | Wires::Four => Wiring::TwoOrFourWire,
            Wires::Three => Wiring::ThreeWire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wires_map_to_register_field() {
        assert_eq!(Wiring::TwoOrFourWire, Wiring::from(Wires::Two));
        assert_eq!(Wiring::ThreeWire, Wiring::from(Wires::Three));
        assert_eq!(Wiring::TwoOrFourWire, Wiring::from(Wires::Four));
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = Configuration::default()
            .fault_thresholds(-10.0, 90.0)
            .wires(Wires::Four)
            .filter(Filter::Hz60);

        assert_eq!(-10.0, config.threshold_low());
        assert_eq!(90.0, config.threshold_high());
        assert_eq!(Wires::Four, config.wires);
        assert_eq!(Filter::Hz60, config.filter);
        assert_eq!(ConversionMode::OneShot, config.conversion_mode);
        assert_eq!(FaultClear::Auto, config.fault_clear);
    }
}
