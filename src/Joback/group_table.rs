//! Joback group-contribution coefficients for the ideal-gas heat capacity
//!
//! Every functional group contributes `a + b*T + c*T^2 + d*T^3` to Cp(T).
//! The source list below is kept exactly as it was tabulated, including
//! the three labels (`>CH-`, `>C<`, `=CH-`) which are defined twice.
//! The table is built with "last definition wins", so only the second
//! tuple of a repeated label can be looked up.
use super::joback_api::JobackError;
use log::debug;
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// contribution of one functional group to the Cp polynomial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl GroupCoefficients {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
    /// coefficients multiplied by the number of occurrences of the group
    pub fn scaled(&self, count: f64) -> Self {
        Self {
            a: count * self.a,
            b: count * self.b,
            c: count * self.c,
            d: count * self.d,
        }
    }
}

impl From<(f64, f64, f64, f64)> for GroupCoefficients {
    fn from((a, b, c, d): (f64, f64, f64, f64)) -> Self {
        Self { a, b, c, d }
    }
}

/// tabulated Joback Cp coefficients (a, b, c, d) in source order
pub const JOBACK_GROUPS: [(&str, (f64, f64, f64, f64)); 41] = [
    ("-CH3", (19.5, -0.00808, 0.000153, -0.0000000967)),
    (">CH2", (-0.909, 0.095, -0.0000544, 0.0000000119)),
    (">CH-", (-23.0, 0.204, -0.000265, 0.00000012)),
    (">C<", (-66.2, 0.427, -0.000641, 0.000000301)),
    ("=CH2", (23.6, -0.0381, 0.000172, -0.000000103)),
    ("=CH-", (-8.00, 0.105, -0.0000963, 0.0000000356)),
    ("=C<", (-28.1, 0.208, -0.000306, 0.000000146)),
    ("=C=", (27.4, -0.0557, 0.000101, -0.0000000502)),
    ("≡CH", (24.5, -0.02716, 0.000111, -0.0000000678)),
    ("≡C-", (7.87, 0.0201, -0.00000833, 0.00000000139)),
    ("-CH2-", (-6.03, 0.0854, -0.00000800, -0.0000000180)),
    (">CH-", (-20.5, 0.162, -0.00016, 0.0000000624)),
    (">C<", (-90.9, 0.557, -0.0009, 0.000000469)),
    ("=CH-", (-2.14, 0.0574, -0.00000164, -0.0000000159)),
    ("-C<", (-8.25, 0.101, -0.000142, 0.000000678)),
    ("-F", (26.8, -0.0913, 0.000191, -0.000000103)),
    ("-CL", (33.3, -0.0963, 0.000187, -0.0000000996)),
    ("-BR", (28.6, -0.0649, 0.000136, -0.0000000745)),
    ("-I", (32.1, -0.0641, 0.000126, -0.0000000687)),
    ("-OH(alcohol)", (25.7, -0.0691, 0.000177, -0.0000000988)),
    ("-OH(phenol)", (-2.81, 0.111, -0.000116, 0.0000000494)),
    ("-O-(nonring)", (25.5, -0.0632, 0.000111, -0.0000000548)),
    ("-O-(ring)", (12.2, -0.0296, 0.0000603, -0.0000000356)),
    (">C=O(nonring)", (6.45, -0.067, 0.0000357, -0.000000311)),
    (">C=O(ring)", (30.4, -0.0327, 0.000236, -0.0000000195)),
    ("O=CH-(aldehyde)", (30.9, -0.0336, 0.000194, -0.0000000986)),
    ("-COOH(acid)", (24.5, 0.0472, 0.0000402, -0.0000000452)),
    ("-COO-(ester)", (24.5, 0.0196, 0.0000402, -0.0000000452)),
    ("=O(except as above)", (6.82, 0.0196, 0.0000127, -0.0000000178)),
    ("-NH2", (26.9, -0.0412, 0.000164, -0.0000000976)),
    (">NH(nonring)", (-1.21, 0.0762, -0.0000486, 0.0000000105)),
    (">NH(ring)", (-11.8, -0.023, 0.000107, -0.0000000628)),
    (">N-(nonring)", (31.1, 0.227, -0.00032, 0.000000146)),
    ("-N=(nonring)", (0.0, 0.0, 0.0, 0.0)),
    ("-N=(ring)", (8.83, -0.00384, 0.0000435, -0.000000026)),
    ("=NH", (5.69, -0.00412, 0.000128, -0.0000000888)),
    ("-CN", (35.6, -0.0332, 0.000184, -0.000000103)),
    ("-NO2", (25.9, -0.00374, 0.000129, -0.0000000888)),
    ("-SH", (35.3, -0.0758, 0.000185, -0.000000103)),
    ("-S-(nonring)", (19.6, -0.00561, 0.0000402, -0.0000000276)),
    ("-S-(ring)", (16.7, 0.00481, 0.0000277, -0.0000000211)),
];

/// read-only map: group label -> coefficients
#[derive(Debug, Clone, Default)]
pub struct CoefficientTable {
    groups: HashMap<String, GroupCoefficients>,
}

impl CoefficientTable {
    /// builds the table from a source list; a repeated label replaces the earlier definition
    pub fn from_entries<I, S, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<GroupCoefficients>,
    {
        let mut groups = HashMap::new();
        for (label, coeffs) in entries {
            let label: String = label.into();
            let coeffs: GroupCoefficients = coeffs.into();
            if let Some(previous) = groups.insert(label.clone(), coeffs) {
                debug!(
                    "group '{}' defined twice: {:?} replaced by {:?}",
                    label, previous, coeffs
                );
            }
        }
        Self { groups }
    }

    pub fn get(&self, label: &str) -> Option<&GroupCoefficients> {
        self.groups.get(label)
    }

    pub fn lookup(&self, label: &str) -> Result<GroupCoefficients, JobackError> {
        self.groups
            .get(label)
            .copied()
            .ok_or_else(|| JobackError::UnknownGroup(label.to_string()))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.groups.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
    /// all labels, sorted
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.groups.keys().map(|k| k.as_str()).collect();
        labels.sort_unstable();
        labels
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Group", "a", "b", "c", "d"]);
        for label in self.labels() {
            if let Some(g) = self.groups.get(label) {
                table.add_row(row![label, g.a, g.b, g.c, g.d]);
            }
        }
        table
    }

    pub fn pretty_print(&self) {
        self.table().printstd();
    }
}

static JOBACK_TABLE: OnceLock<CoefficientTable> = OnceLock::new();

/// process-wide Joback table, built on first use
pub fn joback_table() -> &'static CoefficientTable {
    JOBACK_TABLE.get_or_init(|| CoefficientTable::from_entries(JOBACK_GROUPS))
}
