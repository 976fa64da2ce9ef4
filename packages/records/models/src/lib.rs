#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Raw vehicle-theft record types.
//!
//! This crate defines the canonical observation type shared across the
//! entire theft-trends system. Records arrive from the dataset loader
//! already deduplicated and validated; everything downstream treats them
//! as immutable.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Which of the two parallel theft datasets is active.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VehicleType {
    /// Cars and other four-wheeled motor vehicles (`Automotor`).
    Car,
    /// Motorcycles (`Motocicleta`).
    Motorcycle,
}

impl VehicleType {
    /// All vehicle types, in dataset order.
    pub const ALL: &[Self] = &[Self::Car, Self::Motorcycle];

    /// Human-readable Spanish label, as the source data names them.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Car => "Automotor",
            Self::Motorcycle => "Motocicleta",
        }
    }
}

/// One theft observation for a department and period.
///
/// `month` is `Some` for rows from the monthly table and `None` for
/// annual totals. `(department_code, year, month)` is unique within a
/// validated dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheftRecord {
    /// Stable department identifier. Kept as a string because the
    /// DANE codes carry significant leading zeros (`"05"`, `"08"`).
    pub department_code: String,
    /// Display name for the department.
    pub department_name: String,
    /// Calendar year of the observation.
    pub year: i32,
    /// Month 1-12 for monthly records, `None` for annual totals.
    pub month: Option<u8>,
    /// Number of reported thefts. Non-negative by construction.
    pub theft_count: u64,
}

impl TheftRecord {
    /// Log-compressed count for color-scale use: `ln(count + 1)`.
    ///
    /// Always derived on demand so it can never drift from
    /// [`theft_count`](Self::theft_count).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn log_theft_count(&self) -> f64 {
        ((self.theft_count + 1) as f64).ln()
    }
}
