//! Human-readable terminal output.
//!
//! Formatting lives here so the engine and estimators stay free of
//! presentation concerns.

use crate::data::tables::renewable_potential;
use crate::domain::{
    ExampleProfile, HydroEstimate, LocationCode, Profile, SolarEstimate, WeatherReport, WindEstimate, group_thousands,
};
use crate::io::ingest::RowError;
use crate::report::{BatchResult, summarize_batch};

/// Format a full household analysis.
pub fn format_profile(profile: &Profile) -> String {
    let mut out = String::new();

    out.push_str("=== eco - Household Energy Plan ===\n");
    out.push_str(&format!("Location: {}\n", profile.location));
    let tags: Vec<String> = profile.tags.iter().map(|t| t.label()).collect();
    out.push_str(&format!("Profile: {}\n", tags.join(" | ")));
    out.push('\n');

    out.push_str(&format!("{:<20} {:>12}\n", "Load", format!("{:.1} kW", profile.load_kw)));
    out.push_str(&format!("{:<20} {:>12}\n", "Monthly usage", format!("{:.0} kWh", profile.monthly_kwh)));
    out.push_str(&format!("{:<20} {:>12}\n", "Carbon footprint", format!("{:.2} kg", profile.carbon_kg)));
    out.push_str(&format!("{:<20} {:>12}\n", "Trees to offset", profile.trees_to_offset));
    out.push_str(&format!("{:<20} {:>12}\n", "Annual cost", profile.annual_cost.to_string()));
    out.push_str(&format!("{:<20} {:>12}\n", "Potential savings", profile.potential_savings.to_string()));
    out.push_str(&format!("{:<20} {:>12}\n", "Payback period", format!("{} yrs", profile.payback.label())));

    out.push_str("\nAction plan:\n");
    for step in &profile.action_plan {
        out.push_str(&format!("- {step}\n"));
    }

    out.push_str("\nRenewable strategy:\n");
    if profile.renewables.is_empty() {
        out.push_str("- (no renewable upgrade stands out for this location)\n");
    }
    for rec in &profile.renewables {
        out.push_str(&format!("- {}\n", rec.message()));
    }

    out.push_str("\nEfficiency tips:\n");
    for tip in &profile.tips {
        out.push_str(&format!("- {tip}\n"));
    }

    out.push('\n');
    out.push_str(&profile.summary);
    out.push('\n');
    out
}

pub fn format_solar(location: LocationCode, roof_sqft: f64, est: &SolarEstimate) -> String {
    format!(
        "Solar ({location}, {roof_sqft} sq ft roof)\nSite rating: {}\nCost: {}\nSavings: {}/yr\n",
        renewable_potential(location).solar.label(),
        est.total_cost,
        est.annual_savings
    )
}

pub fn format_wind(location: LocationCode, turbine_kw: f64, est: &WindEstimate) -> String {
    format!(
        "Wind ({location}, {turbine_kw} kW turbine)\nSite rating: {}\nCost: {}\nEnergy: {} kWh/yr\n",
        renewable_potential(location).wind.label(),
        est.total_cost,
        group_thousands(est.annual_energy_kwh)
    )
}

pub fn format_hydro(location: LocationCode, flow_lps: f64, head_m: f64, est: &HydroEstimate) -> String {
    format!(
        "Hydro ({location}, {flow_lps} L/s, {head_m} m head)\nSite rating: {}\nCost: {}\nSize: {:.2} kW\n",
        renewable_potential(location).hydro.label(),
        est.total_cost,
        est.system_size_kw
    )
}

pub fn format_weather(location: LocationCode, report: Option<&WeatherReport>) -> String {
    match report {
        Some(w) => {
            let mut out = format!(
                "Weather ({location}): {}°C, {}, humidity {}%",
                w.temperature, w.description, w.humidity
            );
            if let Some(at) = w.observed_at {
                out.push_str(&format!(" (as of {})", at.format("%Y-%m-%d %H:%M")));
            }
            out.push('\n');
            out
        }
        None => format!("Weather ({location}): unavailable\n"),
    }
}

/// Format a list of names, one per line, under a heading.
pub fn format_list(heading: &str, items: &[&str]) -> String {
    let mut out = format!("{heading}:\n");
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
    out
}

pub fn format_examples(examples: &[ExampleProfile]) -> String {
    let mut out = String::from("Quick-start profiles:\n");
    for (idx, ex) in examples.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}) {:<20} {} {:>5}h  {}\n",
            idx + 1,
            ex.name,
            ex.location,
            ex.daily_hours,
            ex.habits
        ));
    }
    out
}

/// Table of batch results followed by any rejected rows.
pub fn format_batch(results: &[BatchResult], row_errors: &[RowError]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<16} {:<4} {:>8} {:>10} {:>10} {:>6} {:>14} {:<5}\n",
            "id", "loc", "load_kw", "kwh/month", "co2_kg", "trees", "savings/yr", "payback"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<16} {:-<4} {:-<8} {:-<10} {:-<10} {:-<6} {:-<14} {:-<5}\n",
            "", "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for r in results {
        let p = &r.profile;
        out.push_str(
            format!(
                "{:<16} {:<4} {:>8.1} {:>10.0} {:>10.2} {:>6} {:>14} {:<5}\n",
                truncate(&r.id, 16),
                p.location.code(),
                p.load_kw,
                p.monthly_kwh,
                p.carbon_kg,
                p.trees_to_offset,
                p.potential_savings.to_string(),
                p.payback.label(),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    let totals = summarize_batch(results);
    out.push_str(&format!(
        "\n{} household(s), {} high consumer(s), {:.2} kg CO2/month total ({:.2} mean), {} trees to offset\n",
        totals.households,
        totals.high_consumers,
        totals.carbon_kg,
        totals.mean_carbon_kg(),
        totals.trees_to_offset
    ));

    if !row_errors.is_empty() {
        out.push_str(&format!("\nSkipped {} row(s):\n", row_errors.len()));
        for e in row_errors {
            let id = e.id.as_deref().map(|id| format!(" [{id}]")).unwrap_or_default();
            out.push_str(&format!("  line {}{id}: {}\n", e.line, e.message));
        }
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
