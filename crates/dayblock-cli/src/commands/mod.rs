pub mod check;
pub mod energy;
pub mod goals;
pub mod remind;
pub mod suggest;

use dayblock_core::{EnergyLevel, PeakEnergyWindow};

/// Parse an energy level from a CLI argument.
pub fn parse_energy(s: &str) -> Result<EnergyLevel, String> {
    match s.to_lowercase().as_str() {
        "high" => Ok(EnergyLevel::High),
        "medium" | "med" => Ok(EnergyLevel::Medium),
        "low" => Ok(EnergyLevel::Low),
        _ => Err(format!("Invalid energy level: '{s}'. Use high/medium/low")),
    }
}

/// Parse a peak-energy window from a CLI argument.
pub fn parse_window(s: &str) -> Result<PeakEnergyWindow, String> {
    match s.to_lowercase().as_str() {
        "morning" => Ok(PeakEnergyWindow::Morning),
        "afternoon" => Ok(PeakEnergyWindow::Afternoon),
        "evening" => Ok(PeakEnergyWindow::Evening),
        _ => Err(format!(
            "Invalid peak window: '{s}'. Use morning/afternoon/evening"
        )),
    }
}

/// Read and deserialize a JSON snapshot file.
pub fn read_snapshot<T: for<'de> serde::Deserialize<'de>>(
    path: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
