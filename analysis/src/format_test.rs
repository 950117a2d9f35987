use crate::format::{format_bytes, format_scaled, Scalar};

#[test]
pub fn scaled_plain_float() {
    assert_eq!(format_scaled(Some(500.0.into()), "ns"), "500.00ns");
}

#[test]
pub fn scaled_kilo() {
    assert_eq!(format_scaled(Some(1500.0.into()), "ns"), "1.50Kns");
}

#[test]
pub fn scaled_mega() {
    assert_eq!(format_scaled(Some(2_500_000.0.into()), "ns"), "2.50Mns");
}

#[test]
pub fn scaled_absent() {
    assert_eq!(format_scaled(None, "ns"), "N/A");
}

#[test]
pub fn scaled_integer_keeps_natural_form() {
    assert_eq!(format_scaled(Some(Scalar::Int(1500)), "ns"), "1500ns");
    assert_eq!(format_scaled(Some(7u32.into()), ""), "7");
}

#[test]
pub fn scaled_without_unit() {
    assert_eq!(format_scaled(Some(1_250_000.5.into()), ""), "1.25M");
}

#[test]
pub fn bytes_zero_and_absent() {
    assert_eq!(format_bytes(Some(0)), "0");
    assert_eq!(format_bytes(None), "0");
}

#[test]
pub fn bytes_plain() {
    assert_eq!(format_bytes(Some(512)), "512 B");
}

#[test]
pub fn bytes_kilo() {
    assert_eq!(format_bytes(Some(2048)), "2.00 KB");
}

#[test]
pub fn bytes_mega() {
    assert_eq!(format_bytes(Some(3 << 20)), "3.00 MB");
}

#[test]
pub fn bytes_giga() {
    assert_eq!(format_bytes(Some(1 << 30)), "1.00 GB");
}

#[test]
pub fn bytes_threshold_is_inclusive() {
    assert_eq!(format_bytes(Some(1024)), "1.00 KB");
    assert_eq!(format_bytes(Some(1023)), "1023 B");
}
