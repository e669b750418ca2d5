//! Human-readable and structured rendering of reentry results.
//!
//! The text report is nine lines, one per derived quantity, in the order the
//! quantities are computed. The JSON report carries the same values as plain
//! numbers in joules, tonnes, and currency units.

use serde::Serialize;
use uom::si::{energy::joule, mass::ton, ratio::percent, ratio::ratio};

use crate::models::reentry::{Config, Results};

/// Renders the nine-line text report.
///
/// Energies use scientific notation with two decimals, the water mass is in
/// whole tonnes, and the cost is grouped by thousands.
#[must_use]
pub fn render_text(config: &Config, results: &Results) -> String {
    let max_heating_pct = config.max_heating_fraction.as_ref().get::<percent>();
    let heat_fraction = config.heat_transfer_fraction.as_ref().get::<ratio>();

    let lines = [
        format!(
            "Total kinetic energy: {:.2e} J",
            results.kinetic_energy.get::<joule>()
        ),
        format!(
            "KE during max heating ({max_heating_pct:.1}%): {:.2e} J",
            results.max_heating_energy.get::<joule>()
        ),
        format!(
            "Heat during max heating (heat_fraction {heat_fraction}): {:.2e} J",
            results.heat_load.get::<joule>()
        ),
        format!(
            "Fraction absorbed by water: {:.2}",
            results.absorbed_fraction.get::<ratio>()
        ),
        format!(
            "Energy to steam: {:.2e} J",
            results.vaporization_energy.get::<joule>()
        ),
        format!(
            "Required water mass: {:.0} metric tonnes",
            results.water_mass.get::<ton>()
        ),
        format!("Number of flights needed: {}", results.flights_required),
        format!(
            "Total cost to deliver water to orbit: ${} USD",
            format_currency(results.total_cost)
        ),
        format!(
            "Reentries supplied per launch (including freighter): {}",
            results.reentries_per_launch
        ),
    ];

    lines.join("\n") + "\n"
}

/// Flat, serializable view of [`Results`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub kinetic_energy_j: f64,
    pub max_heating_energy_j: f64,
    pub heat_load_j: f64,
    pub absorbed_fraction: f64,
    pub vaporization_energy_j: f64,
    pub water_mass_t: f64,
    pub flights_required: u64,
    pub total_cost: f64,
    /// `None` when no water is needed.
    pub reentries_per_launch: Option<u64>,
}

impl From<&Results> for Summary {
    fn from(results: &Results) -> Self {
        Self {
            kinetic_energy_j: results.kinetic_energy.get::<joule>(),
            max_heating_energy_j: results.max_heating_energy.get::<joule>(),
            heat_load_j: results.heat_load.get::<joule>(),
            absorbed_fraction: results.absorbed_fraction.get::<ratio>(),
            vaporization_energy_j: results.vaporization_energy.get::<joule>(),
            water_mass_t: results.water_mass.get::<ton>(),
            flights_required: results.flights_required,
            total_cost: results.total_cost,
            reentries_per_launch: results.reentries_per_launch.bound(),
        }
    }
}

/// Renders results as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(results: &Results) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Summary::from(results))
}

/// Rounds to whole currency units and groups by thousands.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = amount.round() as u64;
    format_with_separators(whole)
}

/// Formats an integer with comma thousands separators.
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::reentry::{Parameters, ReentryCooling};

    fn run(params: Parameters) -> (Config, Results) {
        let config = Config::new(&params).unwrap();
        let results = ReentryCooling::compute(&config).unwrap();
        (config, results)
    }

    #[test]
    fn separators() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(999), "999");
        assert_eq!(format_with_separators(1_000), "1,000");
        assert_eq!(format_with_separators(500_000), "500,000");
        assert_eq!(format_with_separators(1_234_567), "1,234,567");
        assert_eq!(
            format_with_separators(u64::MAX),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn currency_rounds_to_whole_units() {
        assert_eq!(format_currency(2_501.0), "2,501");
        assert_eq!(format_currency(999.6), "1,000");
        assert_eq!(format_currency(0.0), "0");
    }

    #[test]
    fn default_text_report() {
        let (config, results) = run(Parameters::default());

        let expected = "\
Total kinetic energy: 3.65e12 J
KE during max heating (30.0%): 1.10e12 J
Heat during max heating (heat_fraction 0.01): 1.10e10 J
Fraction absorbed by water: 0.59
Energy to steam: 6.47e9 J
Required water mass: 3 metric tonnes
Number of flights needed: 1
Total cost to deliver water to orbit: $500,000 USD
Reentries supplied per launch (including freighter): 52
";
        assert_eq!(render_text(&config, &results), expected);
    }

    #[test]
    fn degenerate_text_report_still_has_nine_lines() {
        let (config, results) = run(Parameters {
            tile_temperature_fraction: 1.0,
            ..Parameters::default()
        });

        let text = render_text(&config, &results);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[5], "Required water mass: 0 metric tonnes");
        assert_eq!(lines[6], "Number of flights needed: 0");
        assert_eq!(lines[7], "Total cost to deliver water to orbit: $0 USD");
        assert_eq!(
            lines[8],
            "Reentries supplied per launch (including freighter): unbounded (no water required)"
        );
    }

    #[test]
    fn json_report() {
        let (_, results) = run(Parameters::default());
        let value: serde_json::Value = serde_json::from_str(&render_json(&results).unwrap()).unwrap();

        assert_eq!(value["flights_required"], 1);
        assert_eq!(value["reentries_per_launch"], 52);
        assert_eq!(value["total_cost"], 500_000.0);
        assert!(value["water_mass_t"].as_f64().unwrap() > 2.86);
    }

    #[test]
    fn json_report_marks_unbounded_as_null() {
        let (_, results) = run(Parameters {
            tile_temperature_fraction: 1.0,
            ..Parameters::default()
        });
        let value: serde_json::Value = serde_json::from_str(&render_json(&results).unwrap()).unwrap();

        assert!(value["reentries_per_launch"].is_null());
        assert_eq!(value["water_mass_t"], 0.0);
    }
}
