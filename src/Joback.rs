/// Joback group-contribution coefficients and the global coefficient table
pub mod group_table;
/// error type, integrator interface and the integrator enum
pub mod joback_api;
/// corrected Cp(T) polynomial: evaluation, antiderivative and symbolic forms
pub mod cp_polynomial;
/// analytic and symbolic integration of Cp(T)
pub mod integration;
/// estimation of Cp(T) from functional groups and its integral over a temperature range
/// # Examples
/// ```
/// use joback_cp::Joback::cp_estimator::{GroupCount, estimate};
/// // ethanol: CH3-CH2-OH
/// let mut groups = GroupCount::new();
/// groups.insert("-CH3".to_string(), 1.0);
/// groups.insert(">CH2".to_string(), 1.0);
/// groups.insert("-OH(alcohol)".to_string(), 1.0);
/// let (integral, formula) = estimate(&groups, 298.15, 500.0).unwrap();
/// println!("{} \n integral of Cp from 298.15 to 500 K: {}", formula, integral);
/// assert!(integral > 0.0);
/// assert!(estimate(&GroupCount::from([("-XYZ".to_string(), 1.0)]), 298.15, 500.0).is_err());
/// ```
pub mod cp_estimator;
/// tests
pub mod cp_estimator_tests;
