use super::cp_polynomial::CpPolynomial;
use super::integration::{AnalyticIntegrator, IntegralResult, SymbolicIntegrator};
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// error types of the Joback estimation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JobackError {
    #[error("functional group not found: '{0}'")]
    UnknownGroup(String),
    #[error("La temperatura mínima debe ser menor que la temperatura máxima.")]
    InvalidInterval { t_min: f64, t_max: f64 },
    #[error("Cp is not finite at T = {temperature:e} K")]
    NonFiniteIntegrand { temperature: f64 },
    #[error("integral of Cp over [{t_min:e}, {t_max:e}] K is not finite")]
    IntegralOverflow { t_min: f64, t_max: f64 },
}

/// integration of a Cp polynomial over [t_min, t_max]
#[enum_dispatch]
pub trait CpIntegrator {
    fn integrate(
        &self,
        poly: &CpPolynomial,
        t_min: f64,
        t_max: f64,
    ) -> Result<IntegralResult, JobackError>;
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
#[enum_dispatch(CpIntegrator)]
pub enum Integrator {
    /// exact antiderivative of the cubic
    Analytic(AnalyticIntegrator),
    /// lambdified symbolic antiderivative
    Symbolic(SymbolicIntegrator),
}

impl Default for Integrator {
    fn default() -> Self {
        Integrator::Analytic(AnalyticIntegrator::default())
    }
}

pub fn create_integrator_by_name(name: &str) -> Option<Integrator> {
    match name {
        "analytic" | "exact" => Some(Integrator::Analytic(AnalyticIntegrator::default())),
        "symbolic" | "sym" => Some(Integrator::Symbolic(SymbolicIntegrator::default())),
        _ => None,
    }
}

/// rejects the interval unless t_min < t_max
pub fn check_interval(t_min: f64, t_max: f64) -> Result<(), JobackError> {
    // written so that NaN bounds are rejected as well
    if !(t_min < t_max) {
        return Err(JobackError::InvalidInterval { t_min, t_max });
    }
    Ok(())
}
