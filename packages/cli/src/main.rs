#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive terminal front end for the theft trends toolchain.
//!
//! Mirrors the panels of the original dashboard as text: annual trend
//! with cumulative totals, the departments with the largest
//! year-over-year increase and decrease, the increase/decrease
//! percentage summary, the log-scaled per-department distribution,
//! monthly behavior for the selected year, and the top-10 table.
//!
//! Selections not supplied as flags are prompted with `dialoguer`
//! menus, the same choices the original sidebar offered.

mod report;

use std::path::PathBuf;

use clap::Parser;
use dialoguer::Select;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use theft_trends_dataset::DatasetCache;
use theft_trends_records_models::VehicleType;

/// Color palette for the downstream plot backends. Opaque to the
/// aggregation engine; carried through for presentation only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ColorTheme {
    /// Diverging blue/red palette.
    Balance,
    /// Perceptually uniform blue/yellow palette.
    Cividis,
    /// Perceptually uniform green/yellow palette.
    Viridis,
}

impl ColorTheme {
    const ALL: &[Self] = &[Self::Balance, Self::Cividis, Self::Viridis];
}

/// Vehicle theft trend report for Colombian departments.
#[derive(Debug, Parser)]
#[command(name = "theft_trends_cli")]
struct Args {
    /// Directory holding the processed CSV exports.
    #[arg(long, default_value = "Data/Processed")]
    data_dir: PathBuf,

    /// Vehicle type to analyze (car or motorcycle). Prompted if omitted.
    #[arg(long)]
    vehicle_type: Option<VehicleType>,

    /// Year to analyze. Prompted if omitted.
    #[arg(long)]
    year: Option<i32>,

    /// Color theme passed through to plot backends.
    #[arg(long)]
    color_theme: Option<ColorTheme>,

    /// Print the report as JSON instead of formatted text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let args = Args::parse();

    let vehicle_type = match args.vehicle_type {
        Some(vehicle_type) => vehicle_type,
        None => prompt_vehicle_type()?,
    };

    let mut cache = DatasetCache::default();
    let dataset = cache.get_or_load(&args.data_dir, vehicle_type)?;

    let Some(year) = (match args.year {
        Some(year) => Some(year),
        None => prompt_year(&dataset.years_descending())?,
    }) else {
        log::warn!("dataset is empty; nothing to report");
        return Ok(());
    };

    let color_theme = match args.color_theme {
        Some(theme) => theme,
        None => prompt_color_theme()?,
    };
    log::debug!("using color theme {color_theme}");

    let report = report::build(&dataset, year)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print(&report);
    }

    Ok(())
}

fn prompt_vehicle_type() -> Result<VehicleType, dialoguer::Error> {
    let labels: Vec<&str> = VehicleType::ALL.iter().map(|v| v.label()).collect();
    let idx = Select::new()
        .with_prompt("Seleccionar tipo vehículo")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(VehicleType::ALL[idx])
}

/// Prompts for a year, newest first. Returns `None` when the dataset
/// holds no years at all.
fn prompt_year(years: &[i32]) -> Result<Option<i32>, dialoguer::Error> {
    if years.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = years.iter().map(i32::to_string).collect();
    let idx = Select::new()
        .with_prompt("Seleccionar año")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(years[idx]))
}

fn prompt_color_theme() -> Result<ColorTheme, dialoguer::Error> {
    let labels: Vec<String> = ColorTheme::ALL.iter().map(ColorTheme::to_string).collect();
    let idx = Select::new()
        .with_prompt("Seleccionar paleta de color")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(ColorTheme::ALL[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    #[test]
    fn color_theme_parses_from_flag_values() {
        assert_eq!(ColorTheme::from_str("balance").unwrap(), ColorTheme::Balance);
        assert_eq!(ColorTheme::from_str("viridis").unwrap(), ColorTheme::Viridis);
        assert!(ColorTheme::from_str("plasma").is_err());
    }
}
