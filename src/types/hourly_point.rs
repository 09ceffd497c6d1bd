use serde::Serialize;

/// A point of the next-24-hours temperature series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPoint {
    /// 12-hour clock label, e.g. "03 PM".
    pub hour: String,
    /// `None` when the sample carried no temperature; drawn as a gap.
    pub temperature: Option<f64>,
}
