use super::*;

#[test]
fn from_raw_defaults_when_unset() {
    let cfg = ClientConfig::from_raw(None, None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, "http://localhost:3000");
    assert_eq!(cfg.retry.retries, 1);
}

#[test]
fn from_raw_trims_trailing_slash() {
    let cfg = ClientConfig::from_raw(Some("https://library.example.com/"), None);
    assert_eq!(cfg.api_base_url, "https://library.example.com");
}

#[test]
fn from_raw_treats_blank_url_as_unset() {
    let cfg = ClientConfig::from_raw(Some("   "), None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
}

#[test]
fn from_raw_parses_retries() {
    assert_eq!(ClientConfig::from_raw(None, Some("0")).retry.retries, 0);
    assert_eq!(ClientConfig::from_raw(None, Some(" 3 ")).retry.retries, 3);
}

#[test]
fn from_raw_ignores_unparseable_retries() {
    assert_eq!(ClientConfig::from_raw(None, Some("many")).retry.retries, DEFAULT_FETCH_RETRIES);
}
