use super::cp_polynomial::{
    A_CORRECTION, AggregatedCoefficients, B_CORRECTION, C_CORRECTION, CpPolynomial, D_CORRECTION,
};
use super::group_table::{CoefficientTable, GroupCoefficients, joback_table};
use super::joback_api::{CpIntegrator, Integrator, JobackError};
use log::{info, warn};
use prettytable::{Table, row};
use serde::Serialize;
use std::collections::BTreeMap;

/// functional group label -> number of occurrences in the molecule
pub type GroupCount = BTreeMap<String, f64>;

/// share of one group in the aggregated coefficients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupContribution {
    pub label: String,
    pub count: f64,
    /// count * (a, b, c, d)
    pub coefficients: GroupCoefficients,
}

/// result of one Joback estimation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpEstimate {
    /// integral of Cp(T) over [t_min, t_max]
    pub value: f64,
    pub formula: String,
    pub t_min: f64,
    pub t_max: f64,
    pub aggregated: AggregatedCoefficients,
    /// Cp(T) with the Joback corrections applied
    pub polynomial: CpPolynomial,
    pub contributions: Vec<GroupContribution>,
    pub method: &'static str,
    pub abs_error: f64,
}

/// sums count * coefficients over all groups; the first unknown label aborts the sum
pub fn aggregate(
    table: &CoefficientTable,
    groups: &GroupCount,
) -> Result<(AggregatedCoefficients, Vec<GroupContribution>), JobackError> {
    let mut aggregated = AggregatedCoefficients::default();
    let mut contributions = Vec::with_capacity(groups.len());
    for (label, &count) in groups {
        let coefficients = table.lookup(label)?.scaled(count);
        aggregated.add(&coefficients);
        contributions.push(GroupContribution {
            label: label.clone(),
            count,
            coefficients,
        });
    }
    Ok((aggregated, contributions))
}

/// Joback Cp estimation with an explicit table and integration method.
/// The interval is not validated here.
pub fn estimate_in(
    table: &CoefficientTable,
    groups: &GroupCount,
    t_min: f64,
    t_max: f64,
    integrator: &Integrator,
) -> Result<CpEstimate, JobackError> {
    let (aggregated, contributions) = aggregate(table, groups).inspect_err(|e| warn!("{}", e))?;
    let polynomial = aggregated.corrected();
    let integral = integrator
        .integrate(&polynomial, t_min, t_max)
        .inspect_err(|e| warn!("integration failed: {}", e))?;
    let estimate = CpEstimate {
        value: integral.value,
        formula: polynomial.to_string(),
        t_min,
        t_max,
        aggregated,
        polynomial,
        contributions,
        method: integrator.name(),
        abs_error: integral.abs_error,
    };
    info!(
        "{} groups, [{} K, {} K] -> {} ({}), {}",
        groups.len(),
        t_min,
        t_max,
        estimate.value,
        estimate.method,
        estimate.formula
    );
    Ok(estimate)
}

/// Joback estimation over the built-in table with a chosen integration method
pub fn estimate_with(
    groups: &GroupCount,
    t_min: f64,
    t_max: f64,
    integrator: &Integrator,
) -> Result<CpEstimate, JobackError> {
    estimate_in(joback_table(), groups, t_min, t_max, integrator)
}

/// integral of the Joback Cp(T) over [t_min, t_max] and the formula of Cp(T)
pub fn estimate(groups: &GroupCount, t_min: f64, t_max: f64) -> Result<(f64, String), JobackError> {
    let estimate = estimate_with(groups, t_min, t_max, &Integrator::default())?;
    Ok((estimate.value, estimate.formula))
}

impl CpEstimate {
    /// per-group breakdown: contributions, their sum, the correction and the final Cp
    pub fn breakdown_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Group", "Count", "A", "B", "C", "D"]);
        for c in &self.contributions {
            let g = &c.coefficients;
            table.add_row(row![c.label, c.count, g.a, g.b, g.c, g.d]);
        }
        let s = &self.aggregated;
        table.add_row(row!["sum", "", s.A, s.B, s.C, s.D]);
        table.add_row(row![
            "correction",
            "",
            A_CORRECTION,
            B_CORRECTION,
            C_CORRECTION,
            D_CORRECTION
        ]);
        let p = &self.polynomial;
        table.add_row(row!["Cp", "", p.a0, p.a1, p.a2, p.a3]);
        table
    }

    pub fn pretty_print(&self) {
        self.breakdown_table().printstd();
        println!(
            "integral of Cp over [{}, {}] K = {} ({})",
            self.t_min, self.t_max, self.value, self.method
        );
        println!("{}", self.formula);
    }
}
