use rstest::rstest;

use super::*;

#[rstest]
#[case(1_000_000_000, "1")]
#[case(100_000_000, "100m")]
#[case(100_000_000, "0.1")]
#[case(500, "500n")]
#[case(2_000_000_000_000, "2k")]
#[case(1_536_000_000_000, "1.5Ki")]
#[case(17_825_792_000_000_000, "17Mi")]
#[case(0, "0")]
#[case(0, "0m")]
#[case(1_000_000_000_000, "1e3")]
#[case(1_000_000_000_000, "1E3")]
#[case(10_000_000, "1e-2")]
fn from_str_test(#[case] expected: u128, #[case] input: &str) {
    assert_eq!(expected, ResourceQuantity::from_str(input).unwrap().nanos);
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("1.2.3")]
#[case("10X")]
#[case("1e")]
#[case("1e-12")]
#[case(".")]
fn from_str_error_test(#[case] input: &str) {
    assert_eq!(
        Err(QuantityError::ParseError(input.to_owned())),
        ResourceQuantity::from_str(input)
    );
}

#[test]
fn try_from_quantity_test() {
    let q = |s: &str| ResourceQuantity::try_from(&Quantity(s.to_owned()));

    assert_eq!(q("1"), q("1000m"));
    assert_eq!(q("1Gi"), q("1024Mi"));
    assert_ne!(q("1G"), q("1Gi"));
    assert_eq!(q("1e3"), q("1k"));
    assert!(q("1x3").is_err());
    assert!(q("0Mi").unwrap().is_zero());
    assert!(!q("1m").unwrap().is_zero());
}
