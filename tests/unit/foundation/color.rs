use super::*;

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(Color::from_hex("#D147BD").unwrap(), PINK);
    assert_eq!(Color::from_hex("d147bd").unwrap(), PINK);
    assert_eq!(PINK.to_hex(), "#D147BD");
}

#[test]
fn hex_rejects_malformed_input() {
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#GG0000").is_err());
    assert!(Color::from_hex("#ééé").is_err());
}

#[test]
fn palette_lookup_is_case_insensitive() {
    assert_eq!(Color::named("pink"), Some(PINK));
    assert_eq!(Color::named("Blue"), Some(BLUE));
    assert_eq!(Color::named("chartreuse"), None);
    assert_eq!(Color::parse("white").unwrap(), WHITE);
    assert_eq!(Color::parse("#000000").unwrap(), BLACK);
}

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    assert_eq!(Color::lerp(&WHITE, &PINK, 0.0), WHITE);
    assert_eq!(Color::lerp(&WHITE, &PINK, 1.0), PINK);
    assert_eq!(
        Color::lerp(&WHITE, &PINK, 0.5),
        Color::rgb(0xE8, 0xA3, 0xDE)
    );
}
