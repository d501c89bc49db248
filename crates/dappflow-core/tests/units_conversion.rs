use alloy::primitives::U256;
use dappflow_core::units::{format_native, from_minimal_units, to_minimal_units, ZERO_BALANCE};

#[test]
fn decimal_to_minimal_units_is_exact() {
    let minimal = to_minimal_units("1.5", 18).expect("1.5 ether");
    assert_eq!(minimal, U256::from(1_500_000_000_000_000_000u64));

    let minimal = to_minimal_units("0.000001", 6).expect("one usdc base unit");
    assert_eq!(minimal, U256::from(1u64));

    let minimal = to_minimal_units("2500", 6).expect("2500 usdc");
    assert_eq!(minimal, U256::from(2_500_000_000u64));
}

#[test]
fn conversion_round_trips_within_precision() {
    for (amount, decimals) in [
        ("1.5", 18u8),
        ("0.000001", 18),
        ("123456.654321", 18),
        ("1.5", 6),
        ("0.000001", 6),
        ("42", 6),
    ] {
        let minimal = to_minimal_units(amount, decimals).expect("parse");
        let rendered = from_minimal_units(minimal, decimals).expect("format");
        let round_tripped = to_minimal_units(&rendered, decimals).expect("re-parse");
        assert_eq!(round_tripped, minimal, "{amount} at {decimals} decimals");
    }
}

#[test]
fn rejects_non_positive_and_malformed_amounts() {
    for bad in ["", "0", "0.0", "-1", "+1", "abc", "1..5", "1,5"] {
        assert!(to_minimal_units(bad, 18).is_err(), "accepted '{bad}'");
    }
}

#[test]
fn rejects_amounts_below_resolution() {
    // Half a base unit of a 6-decimal token cannot be represented.
    assert!(to_minimal_units("0.0000005", 6).is_err());
}

#[test]
fn balance_display_uses_six_fractional_digits() {
    assert_eq!(format_native(U256::ZERO, 18), ZERO_BALANCE);
    assert_eq!(
        format_native(U256::from(1_500_000_000_000_000_000u64), 18),
        "1.500000"
    );
    // Truncation, not rounding, below the sixth place.
    assert_eq!(
        format_native(U256::from(1_999_999_999_999_999_999u64), 18),
        "1.999999"
    );
    assert_eq!(format_native(U256::from(2_500_000u64), 6), "2.500000");
    assert_eq!(format_native(U256::from(1u64), 6), "0.000001");
}
