use super::group_table::GroupCoefficients;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Joback corrections added to the summed group contributions
pub const A_CORRECTION: f64 = -37.93;
pub const B_CORRECTION: f64 = 0.210;
pub const C_CORRECTION: f64 = -0.000391;
pub const D_CORRECTION: f64 = 0.000000206;

/// sum over groups of count * (a, b, c, d), before correction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedCoefficients {
    pub A: f64,
    pub B: f64,
    pub C: f64,
    pub D: f64,
}

impl AggregatedCoefficients {
    pub fn add(&mut self, contribution: &GroupCoefficients) {
        self.A += contribution.a;
        self.B += contribution.b;
        self.C += contribution.c;
        self.D += contribution.d;
    }

    pub fn corrected(&self) -> CpPolynomial {
        CpPolynomial {
            a0: self.A + A_CORRECTION,
            a1: self.B + B_CORRECTION,
            a2: self.C + C_CORRECTION,
            a3: self.D + D_CORRECTION,
        }
    }
}

/// Cp(T) = a0 + a1*T + a2*T^2 + a3*T^3
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpPolynomial {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
}

impl CpPolynomial {
    pub fn new(a0: f64, a1: f64, a2: f64, a3: f64) -> Self {
        Self { a0, a1, a2, a3 }
    }

    pub fn coefficients(&self) -> [f64; 4] {
        [self.a0, self.a1, self.a2, self.a3]
    }

    pub fn eval(&self, t: f64) -> f64 {
        self.a0 + t * (self.a1 + t * (self.a2 + t * self.a3))
    }
    /// F(T) with F' = Cp and F(0) = 0
    pub fn antiderivative(&self, t: f64) -> f64 {
        t * (self.a0 + t * (self.a1 / 2.0 + t * (self.a2 / 3.0 + t * self.a3 / 4.0)))
    }

    pub fn integral(&self, t_min: f64, t_max: f64) -> f64 {
        self.antiderivative(t_max) - self.antiderivative(t_min)
    }

    /// symbolic Cp in the variable "T"
    #[allow(non_snake_case)]
    pub fn Cp_sym(&self) -> Expr {
        let t = Expr::Var("T".to_owned());
        let (a0, a1, a2, a3) = (
            Expr::Const(self.a0),
            Expr::Const(self.a1),
            Expr::Const(self.a2),
            Expr::Const(self.a3),
        );
        a0 + a1 * t.clone()
            + a2 * t.clone().pow(Expr::Const(2.0))
            + a3 * t.clone().pow(Expr::Const(3.0))
    }
    /// symbolic F(T) with F' = Cp and F(0) = 0
    pub fn antiderivative_sym(&self) -> Expr {
        let t = Expr::Var("T".to_owned());
        let (a0, a1, a2, a3) = (
            Expr::Const(self.a0),
            Expr::Const(self.a1),
            Expr::Const(self.a2),
            Expr::Const(self.a3),
        );
        a0 * t.clone()
            + a1 * t.clone().pow(Expr::Const(2.0)) / Expr::Const(2.0)
            + a2 * t.clone().pow(Expr::Const(3.0)) / Expr::Const(3.0)
            + a3 * t.clone().pow(Expr::Const(4.0)) / Expr::Const(4.0)
    }
}

impl fmt::Display for CpPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CP = ({}) + ({}) * T + ({}) * T^2 + ({}) * T^3",
            self.a0, self.a1, self.a2, self.a3
        )
    }
}
