//! CSV parsing and invariant validation.
//!
//! The processed exports keep the Spanish column headers of the open-data
//! source (`cod_depto`, `departamento`, `año`, `mes`, `num_hurtos`).
//! Department codes are deserialized as strings because the DANE codes
//! carry significant leading zeros. Any precomputed log column in the
//! files is ignored: the log scale is always derived from the raw count.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use theft_trends_records_models::{TheftRecord, VehicleType};

use crate::DatasetError;

/// One row of an annual export.
#[derive(Debug, Deserialize)]
struct AnnualRow {
    #[serde(rename = "cod_depto")]
    code: String,
    #[serde(rename = "departamento")]
    name: String,
    #[serde(rename = "año")]
    year: i32,
    #[serde(rename = "num_hurtos")]
    theft_count: u64,
}

/// One row of a monthly export.
#[derive(Debug, Deserialize)]
struct MonthlyRow {
    #[serde(rename = "cod_depto")]
    code: String,
    #[serde(rename = "departamento")]
    name: String,
    #[serde(rename = "año")]
    year: i32,
    #[serde(rename = "mes")]
    month: u8,
    #[serde(rename = "num_hurtos")]
    theft_count: u64,
}

/// A validated snapshot of one vehicle type's records.
///
/// Once constructed, the snapshot is held read-only for the duration of
/// all aggregate queries; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Which vehicle dataset this snapshot holds.
    pub vehicle_type: VehicleType,
    /// Annual records, one per `(department, year)`.
    pub annual: Vec<TheftRecord>,
    /// Monthly records, one per `(department, year, month)`.
    pub monthly: Vec<TheftRecord>,
}

impl Dataset {
    /// Loads and validates both exports for `vehicle_type` from
    /// `data_dir`, using the shipped file names.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if a file cannot be read, a row fails to
    /// parse, or a record invariant is violated.
    pub fn load(data_dir: &Path, vehicle_type: VehicleType) -> Result<Self, DatasetError> {
        let annual_path = data_dir.join(annual_file_name(vehicle_type));
        let monthly_path = data_dir.join(monthly_file_name(vehicle_type));

        log::info!("loading {vehicle_type} dataset from {}", data_dir.display());

        let annual = load_annual(&annual_path)?;
        let monthly = load_monthly(&monthly_path)?;

        log::info!(
            "loaded {} annual and {} monthly {vehicle_type} records",
            annual.len(),
            monthly.len()
        );

        Ok(Self {
            vehicle_type,
            annual,
            monthly,
        })
    }

    /// Minimum and maximum year present in the annual records, or
    /// `None` if the snapshot is empty. Derived from the data itself;
    /// nothing hardcodes the source's 2003-2024 span.
    #[must_use]
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.annual.iter().map(|r| r.year).min()?;
        let max = self.annual.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Distinct years present, newest first, as selection lists show
    /// them.
    #[must_use]
    pub fn years_descending(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.annual.iter().map(|r| r.year).collect();
        years.into_iter().rev().collect()
    }
}

/// File name of the processed annual export for a vehicle type.
#[must_use]
pub const fn annual_file_name(vehicle_type: VehicleType) -> &'static str {
    match vehicle_type {
        VehicleType::Car => "hurto_autos_2003-2024.csv",
        VehicleType::Motorcycle => "hurto_motos_2003-2024.csv",
    }
}

/// File name of the processed monthly export for a vehicle type.
#[must_use]
pub const fn monthly_file_name(vehicle_type: VehicleType) -> &'static str {
    match vehicle_type {
        VehicleType::Car => "hurto_autos_mensual_2003-2024.csv",
        VehicleType::Motorcycle => "hurto_motos_mensual_2003-2024.csv",
    }
}

/// Loads and validates an annual export.
///
/// # Errors
///
/// Returns [`DatasetError`] on read, parse, or validation failure.
pub fn load_annual(path: &Path) -> Result<Vec<TheftRecord>, DatasetError> {
    read_annual(csv::Reader::from_path(path)?)
}

/// Loads and validates a monthly export.
///
/// # Errors
///
/// Returns [`DatasetError`] on read, parse, or validation failure.
pub fn load_monthly(path: &Path) -> Result<Vec<TheftRecord>, DatasetError> {
    read_monthly(csv::Reader::from_path(path)?)
}

fn read_annual<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<TheftRecord>, DatasetError> {
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: AnnualRow = row?;
        records.push(TheftRecord {
            department_code: row.code,
            department_name: row.name,
            year: row.year,
            month: None,
            theft_count: row.theft_count,
        });
    }
    validate(&records)?;
    Ok(records)
}

fn read_monthly<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<TheftRecord>, DatasetError> {
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: MonthlyRow = row?;
        if !(1..=12).contains(&row.month) {
            return Err(DatasetError::InvalidMonth {
                code: row.code,
                year: row.year,
                month: row.month,
            });
        }
        records.push(TheftRecord {
            department_code: row.code,
            department_name: row.name,
            year: row.year,
            month: Some(row.month),
            theft_count: row.theft_count,
        });
    }
    validate(&records)?;
    Ok(records)
}

/// Enforces key uniqueness and name consistency over a record slice.
fn validate(records: &[TheftRecord]) -> Result<(), DatasetError> {
    let mut seen: BTreeSet<(&str, i32, Option<u8>)> = BTreeSet::new();
    let mut names: BTreeMap<&str, &str> = BTreeMap::new();

    for record in records {
        if !seen.insert((record.department_code.as_str(), record.year, record.month)) {
            return Err(DatasetError::DuplicateKey {
                code: record.department_code.clone(),
                year: record.year,
                month: record.month,
            });
        }

        match names.get(record.department_code.as_str()) {
            Some(name) if *name != record.department_name => {
                return Err(DatasetError::InconsistentName {
                    code: record.department_code.clone(),
                    first: (*name).to_string(),
                    second: record.department_name.clone(),
                });
            }
            Some(_) => {}
            None => {
                names.insert(
                    record.department_code.as_str(),
                    record.department_name.as_str(),
                );
            }
        }
    }

    Ok(())
}
