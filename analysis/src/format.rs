//! Human scaling for report cells. Pure and total, identical input always
//! renders the identical string.

/// A raw cell value. Integer values keep their natural rendering, floats are
/// scaled into K/M ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(u64),
    Float(f64),
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(u64::from(value))
    }
}

/// Scale a value into the K/M range, absent values render as N/A
pub fn format_scaled(value: Option<Scalar>, unit: &str) -> String {
    match value {
        None => "N/A".to_owned(),
        Some(Scalar::Float(value)) if value >= 1e6 => format!("{:.2}M{unit}", value / 1e6),
        Some(Scalar::Float(value)) if value >= 1e3 => format!("{:.2}K{unit}", value / 1e3),
        Some(Scalar::Float(value)) => format!("{value:.2}{unit}"),
        Some(Scalar::Int(value)) => format!("{value}{unit}"),
    }
}

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;

/// Render a byte count with the largest fitting unit, absent or zero as "0"
pub fn format_bytes(value: Option<u64>) -> String {
    match value.unwrap_or(0) {
        0 => "0".to_owned(),
        value if value >= GIB => format!("{:.2} GB", value as f64 / GIB as f64),
        value if value >= MIB => format!("{:.2} MB", value as f64 / MIB as f64),
        value if value >= KIB => format!("{:.2} KB", value as f64 / KIB as f64),
        value => format!("{value} B"),
    }
}
