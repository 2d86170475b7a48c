//! Definite integrals of Cp(T)
//!
//! `AnalyticIntegrator` evaluates the closed-form antiderivative of the cubic
//! directly. `SymbolicIntegrator` builds the antiderivative as a symbolic
//! expression in "T" and integrates through its lambdified form.
use super::cp_polynomial::CpPolynomial;
use super::joback_api::{CpIntegrator, JobackError};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntegralResult {
    pub value: f64,
    /// round-off bound of H(t_max) - H(t_min)
    pub abs_error: f64,
}

/// turns H(t_min), H(t_max) into a result, or names what overflowed
fn difference<F>(
    cp: F,
    h_min: f64,
    h_max: f64,
    t_min: f64,
    t_max: f64,
) -> Result<IntegralResult, JobackError>
where
    F: Fn(f64) -> f64,
{
    let value = h_max - h_min;
    if value.is_finite() {
        return Ok(IntegralResult {
            value,
            abs_error: f64::EPSILON * (h_max.abs() + h_min.abs()),
        });
    }
    for temperature in [t_min, t_max] {
        if !cp(temperature).is_finite() {
            return Err(JobackError::NonFiniteIntegrand { temperature });
        }
    }
    Err(JobackError::IntegralOverflow { t_min, t_max })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticIntegrator {}

impl CpIntegrator for AnalyticIntegrator {
    fn integrate(
        &self,
        poly: &CpPolynomial,
        t_min: f64,
        t_max: f64,
    ) -> Result<IntegralResult, JobackError> {
        difference(
            |t| poly.eval(t),
            poly.antiderivative(t_min),
            poly.antiderivative(t_max),
            t_min,
            t_max,
        )
    }
    fn name(&self) -> &'static str {
        "analytic"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolicIntegrator {}

impl CpIntegrator for SymbolicIntegrator {
    fn integrate(
        &self,
        poly: &CpPolynomial,
        t_min: f64,
        t_max: f64,
    ) -> Result<IntegralResult, JobackError> {
        let h_sym = poly.antiderivative_sym();
        debug!("symbolic antiderivative: {}", h_sym);
        let h = h_sym.lambdify1D();
        let cp_sym = poly.Cp_sym();
        let cp = cp_sym.lambdify1D();
        difference(cp, h(t_min), h(t_max), t_min, t_max)
    }
    fn name(&self) -> &'static str {
        "symbolic"
    }
}
