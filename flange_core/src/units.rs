//! # Unit Normalizer
//!
//! Converts user-facing pressure and temperature units to the engine's
//! internal units. These are simple f64 conversions rather than a full
//! units library because:
//! - The engine works in one consistent internal system
//! - JSON serialization stays clean (a number plus a unit tag)
//! - Minimal runtime overhead
//!
//! ## Internal units
//!
//! - Stress / pressure: megapascals (MPa)
//! - Temperature: degrees Celsius (°C)
//! - Length: millimetres (mm)
//! - Force: newtons (N) — mm² × MPa products come out in N directly
//!
//! ## Example
//!
//! ```rust
//! use flange_core::units::{PressureUnit, TemperatureUnit};
//!
//! let p_mpa = PressureUnit::Bar.to_mpa(10.0);
//! assert!((p_mpa - 1.0).abs() < 1e-12);
//!
//! let t_c = TemperatureUnit::Fahrenheit.to_celsius(212.0);
//! assert!((t_c - 100.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Pressure unit tag for design inputs.
///
/// `MPa` is the internal unit; all other variants carry a fixed multiplier
/// to MPa. The enum makes unrecognized tags unrepresentable, so the §-style
/// "identity fallback" is simply the `MPa` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressureUnit {
    /// Megapascals (internal unit)
    #[default]
    MPa,
    /// Bar
    Bar,
    /// Pounds per square inch
    Psi,
    /// Kilogram-force per square centimetre
    KgfCm2,
}

impl PressureUnit {
    /// Multiplier from this unit to MPa
    pub fn factor_to_mpa(self) -> f64 {
        match self {
            PressureUnit::MPa => 1.0,
            PressureUnit::Bar => 0.1,
            PressureUnit::Psi => 0.00689476,
            PressureUnit::KgfCm2 => 0.0980665,
        }
    }

    /// Convert a value in this unit to MPa
    pub fn to_mpa(self, value: f64) -> f64 {
        value * self.factor_to_mpa()
    }

    /// Convert an MPa value back to this unit (inverse of [`to_mpa`](Self::to_mpa))
    pub fn from_mpa(self, value_mpa: f64) -> f64 {
        value_mpa / self.factor_to_mpa()
    }
}

/// Temperature unit tag for design inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius (internal unit)
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl TemperatureUnit {
    /// Convert a value in this unit to °C
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }
}

/// Conversion constant between effective-width regimes (Cul), mm per inch.
pub const CUL_MM: f64 = 25.4;

/// Division that yields zero for a zero or non-finite denominator.
///
/// The engine is total: area/stress ratios with degenerate denominators
/// report 0 rather than infinity or NaN.
pub fn safe_div(num: f64, den: f64) -> f64 {
    if den == 0.0 || !den.is_finite() {
        0.0
    } else {
        num / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure_round_trip() {
        for unit in [
            PressureUnit::MPa,
            PressureUnit::Bar,
            PressureUnit::Psi,
            PressureUnit::KgfCm2,
        ] {
            let original = 17.3;
            let internal = unit.to_mpa(original);
            let back = unit.from_mpa(internal);
            assert!(
                (back - original).abs() < 1e-9,
                "round trip failed for {:?}",
                unit
            );
        }
    }

    #[test]
    fn test_pressure_factors() {
        assert!((PressureUnit::Bar.to_mpa(1.0) - 0.1).abs() < 1e-12);
        assert!((PressureUnit::Psi.to_mpa(1000.0) - 6.89476).abs() < 1e-9);
        assert!((PressureUnit::KgfCm2.to_mpa(10.0) - 0.980665).abs() < 1e-12);
    }

    #[test]
    fn test_temperature_conversions() {
        assert_eq!(TemperatureUnit::Celsius.to_celsius(120.0), 120.0);
        assert!((TemperatureUnit::Fahrenheit.to_celsius(32.0)).abs() < 1e-12);
        assert!((TemperatureUnit::Kelvin.to_celsius(273.15)).abs() < 1e-12);
    }

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(10.0, 2.0), 5.0);
        assert_eq!(safe_div(10.0, 0.0), 0.0);
        assert_eq!(safe_div(10.0, f64::NAN), 0.0);
        assert_eq!(safe_div(10.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PressureUnit::KgfCm2).unwrap();
        let roundtrip: PressureUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, PressureUnit::KgfCm2);
    }
}
