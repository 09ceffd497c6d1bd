//! Pairwise correlation between the forecast metrics.

use serde::Serialize;
use std::fmt;

/// The numeric forecast metrics that take part in the correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Temperature,
    Pressure,
    Humidity,
    WindSpeed,
}

impl Metric {
    /// All metrics in matrix order.
    pub const ALL: [Metric; 4] = [
        Metric::Temperature,
        Metric::Pressure,
        Metric::Humidity,
        Metric::WindSpeed,
    ];

    /// Column name used in the metric table and as the heatmap axis label.
    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Pressure => "Pressure",
            Metric::Humidity => "Humidity",
            Metric::WindSpeed => "Wind Speed",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Metric::Temperature => 0,
            Metric::Pressure => 1,
            Metric::Humidity => 2,
            Metric::WindSpeed => 3,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Square, symmetric matrix of Pearson coefficients over [`Metric::ALL`].
///
/// A cell is `None` when the coefficient is undefined for that pair: fewer than
/// two rows where both values are present, or no variance in one of the two
/// columns. Defined cells lie in `[-1, 1]` and the defined diagonal is exactly
/// `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    cells: [[Option<f64>; 4]; 4],
}

impl CorrelationMatrix {
    pub(crate) fn from_cells(cells: [[Option<f64>; 4]; 4]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: Metric, column: Metric) -> Option<f64> {
        self.cells[row.index()][column.index()]
    }

    /// Rows of the matrix in [`Metric::ALL`] order.
    pub fn rows(&self) -> &[[Option<f64>; 4]; 4] {
        &self.cells
    }

    pub fn metrics(&self) -> &'static [Metric; 4] {
        &Metric::ALL
    }
}
