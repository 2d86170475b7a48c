///////////////////////////TESTING////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::Joback::cp_estimator::{
        CpEstimate, GroupCount, aggregate, estimate, estimate_in, estimate_with,
    };
    use crate::Joback::cp_polynomial::CpPolynomial;
    use crate::Joback::group_table::{CoefficientTable, joback_table};
    use crate::Joback::integration::SymbolicIntegrator;
    use crate::Joback::joback_api::{Integrator, JobackError, create_integrator_by_name};
    use approx::assert_relative_eq;

    fn groups(pairs: &[(&str, f64)]) -> GroupCount {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn ethanol() -> GroupCount {
        groups(&[("-CH3", 1.0), (">CH2", 1.0), ("-OH(alcohol)", 1.0)])
    }

    /// numbers between the parentheses of the formula
    fn formula_numbers(formula: &str) -> Vec<f64> {
        formula
            .split('(')
            .skip(1)
            .filter_map(|part| part.split(')').next())
            .map(|s| s.parse::<f64>().unwrap())
            .collect()
    }

    #[test]
    fn test_empty_groups_give_correction_polynomial() {
        let (value, formula) = estimate(&GroupCount::new(), 298.15, 300.0).unwrap();
        assert_eq!(
            formula,
            "CP = (-37.93) + (0.21) * T + (-0.000391) * T^2 + (0.000000206) * T^3"
        );
        let antiderivative = |t: f64| {
            -37.93 * t + 0.210 * t.powi(2) / 2.0 - 0.000391 * t.powi(3) / 3.0
                + 0.000000206 * t.powi(4) / 4.0
        };
        let reference = antiderivative(300.0) - antiderivative(298.15);
        assert_relative_eq!(value, reference, max_relative = 1e-9);
        assert_relative_eq!(value, -8.485817505611521, max_relative = 1e-9);
    }

    #[test]
    fn test_ethanol() {
        let estimate = estimate_with(&ethanol(), 298.15, 500.0, &Integrator::default()).unwrap();
        let p = estimate.polynomial;
        assert_relative_eq!(p.a0, 6.361, epsilon = 1e-12);
        assert_relative_eq!(p.a1, 0.22782, epsilon = 1e-12);
        assert_relative_eq!(p.a2, -0.0001154, epsilon = 1e-15);
        assert_relative_eq!(p.a3, 2.24e-8, epsilon = 1e-18);
        // Cp of ethanol vapour at 298.15 K
        assert_relative_eq!(p.eval(298.15), 64.62091209927159, epsilon = 1e-9);
        assert_relative_eq!(estimate.value, 16152.537475928082, max_relative = 1e-10);
        assert_eq!(estimate.contributions.len(), 3);
        assert_eq!(estimate.method, "analytic");
    }

    #[test]
    fn test_formula_has_four_coefficients() {
        let g = groups(&[("-CH3", 2.0), (">C=O(nonring)", 1.0), ("-CL", 3.0)]);
        let estimate = estimate_with(&g, 300.0, 600.0, &Integrator::default()).unwrap();
        assert!(estimate.value.is_finite());
        let numbers = formula_numbers(&estimate.formula);
        assert_eq!(numbers.len(), 4);
        // the formula shows exactly the integrated coefficients
        assert_eq!(numbers, estimate.polynomial.coefficients().to_vec());
    }

    #[test]
    fn test_unknown_group_aborts() {
        let g = groups(&[("-CH3", 1.0), ("-XYZ", 2.0)]);
        let result = estimate(&g, 298.15, 400.0);
        assert_eq!(result, Err(JobackError::UnknownGroup("-XYZ".to_string())));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("functional group not found"));
        assert!(message.contains("-XYZ"));
    }

    #[test]
    fn test_idempotent() {
        let g = groups(&[("-CH3", 2.0), (">CH2", 4.0), ("-OH(phenol)", 1.0)]);
        let first = estimate(&g, 298.15, 800.0).unwrap();
        let second = estimate(&g, 298.15, 800.0).unwrap();
        assert_eq!(first, second);
        let first = estimate_with(&g, 298.15, 800.0, &Integrator::default()).unwrap();
        let second = estimate_with(&g, 298.15, 800.0, &Integrator::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_narrow_interval() {
        // four methyl groups: A - 37.93 = 40.07 > 0
        let g = groups(&[("-CH3", 4.0)]);
        let (t_min, t_max) = (1000.0, 1000.01);
        let estimate = estimate_with(&g, t_min, t_max, &Integrator::default()).unwrap();
        assert!(estimate.polynomial.a0 > 0.0);
        let cp_mid = estimate.polynomial.eval(0.5 * (t_min + t_max));
        assert_relative_eq!(estimate.value, cp_mid * (t_max - t_min), max_relative = 1e-6);
        assert!(estimate.value > 0.0);

        // near 0 K the T-terms contribute about a1 * t_max / (2 * a0) = 2.2e-6 of the value
        let (t_min, t_max) = (0.0, 0.001);
        let estimate = estimate_with(&g, t_min, t_max, &Integrator::default()).unwrap();
        assert_relative_eq!(
            estimate.value,
            estimate.polynomial.a0 * (t_max - t_min),
            max_relative = 1e-5
        );
        assert_relative_eq!(estimate.polynomial.a0, 4.0 * 19.5 - 37.93, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_cp_integral() {
        // a group list whose T-terms cancel the correction exactly leaves Cp = A - 37.93
        let table = CoefficientTable::from_entries(vec![
            ("X", (50.0, -0.210, 0.000391, -0.000000206)),
        ]);
        let g = groups(&[("X", 1.0)]);
        let estimate = estimate_in(&table, &g, 500.0, 510.0, &Integrator::default()).unwrap();
        assert_relative_eq!(estimate.polynomial.a0, 50.0 - 37.93, epsilon = 1e-12);
        assert_relative_eq!(estimate.value, (50.0 - 37.93) * 10.0, max_relative = 1e-6);
    }

    #[test]
    fn test_analytic_and_symbolic_agree() {
        let symbolic = create_integrator_by_name("symbolic").unwrap();
        for g in [
            ethanol(),
            groups(&[("-CH3", 2.0), (">CH2", 6.0)]),
            groups(&[("=CH2", 1.0), ("=CH-", 1.0), ("-CN", 1.0)]),
            GroupCount::new(),
        ] {
            let exact = estimate_with(&g, 298.15, 1500.0, &Integrator::default()).unwrap();
            let from_expr = estimate_with(&g, 298.15, 1500.0, &symbolic).unwrap();
            assert_relative_eq!(from_expr.value, exact.value, max_relative = 1e-9);
            assert_eq!(from_expr.formula, exact.formula);
            assert_eq!(from_expr.method, "symbolic");
        }
    }

    #[test]
    fn test_reversed_interval_not_validated() {
        let forward = estimate(&ethanol(), 300.0, 400.0).unwrap().0;
        let backward = estimate(&ethanol(), 400.0, 300.0).unwrap().0;
        assert_relative_eq!(forward, -backward, max_relative = 1e-12);
        let symbolic = Integrator::Symbolic(SymbolicIntegrator::default());
        let backward_sym = estimate_with(&ethanol(), 400.0, 300.0, &symbolic).unwrap().value;
        assert_relative_eq!(backward_sym, backward, max_relative = 1e-9);
    }

    #[test]
    fn test_fractional_counts() {
        let half = estimate(&groups(&[("-CH3", 0.5)]), 300.0, 400.0).unwrap().0;
        let one = estimate(&groups(&[("-CH3", 1.0)]), 300.0, 400.0).unwrap().0;
        let none = estimate(&GroupCount::new(), 300.0, 400.0).unwrap().0;
        assert_relative_eq!(half - none, 0.5 * (one - none), max_relative = 1e-9);
    }

    #[test]
    fn test_duplicate_label_override_used() {
        // >CH- resolves to the second tabulated definition
        let (agg, _) = aggregate(joback_table(), &groups(&[(">CH-", 1.0)])).unwrap();
        assert_eq!(agg.A, -20.5);
        assert_eq!(agg.B, 0.162);
        assert_eq!(agg.C, -0.00016);
        assert_eq!(agg.D, 0.0000000624);
    }

    #[test]
    fn test_breakdown_table() {
        let estimate: CpEstimate =
            estimate_with(&ethanol(), 298.15, 400.0, &Integrator::default()).unwrap();
        let table = estimate.breakdown_table();
        // header, 3 groups, sum, correction, Cp
        assert_eq!(table.len(), 7);
        let rendered = table.to_string();
        assert!(rendered.contains("-OH(alcohol)"));
        assert!(rendered.contains("correction"));
    }

    #[test]
    fn test_polynomial_matches_formula_display() {
        let estimate = estimate_with(&ethanol(), 298.15, 400.0, &Integrator::default()).unwrap();
        let p: CpPolynomial = estimate.polynomial;
        assert_eq!(p.to_string(), estimate.formula);
    }
}
