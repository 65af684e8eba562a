use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.token_key, "token");
    assert_eq!(cfg.startup_deposit, None);
}

#[test]
fn from_values_trims_trailing_slash() {
    let cfg = ClientConfig::from_values(Some("https://auction.example.test/api/"), None).unwrap();
    assert_eq!(cfg.api_base_url, "https://auction.example.test/api");
}

#[test]
fn from_values_blank_base_url_falls_back_to_default() {
    let cfg = ClientConfig::from_values(Some("   "), None).unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_values_parses_startup_deposit() {
    let cfg = ClientConfig::from_values(None, Some(" 500 ")).unwrap();
    assert_eq!(cfg.startup_deposit, Some(500));
}

#[test]
fn from_values_blank_deposit_is_none() {
    let cfg = ClientConfig::from_values(None, Some("")).unwrap();
    assert_eq!(cfg.startup_deposit, None);
}

#[test]
fn from_values_rejects_zero_deposit() {
    let err = ClientConfig::from_values(None, Some("0")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidDeposit("0".to_owned()));
}

#[test]
fn from_values_rejects_non_numeric_deposit() {
    let err = ClientConfig::from_values(None, Some("lots")).unwrap_err();
    assert_eq!(err.to_string(), "invalid AUCTION_STARTUP_DEPOSIT: lots");
}
