use super::*;

#[test]
fn new_defaults_to_same_origin_root() {
    let cfg = ApiConfig::new(None);
    assert_eq!(cfg.base_url, "");
    assert_eq!(cfg.endpoint("/profiles/7"), "/profiles/7");
}

#[test]
fn new_treats_blank_as_default() {
    assert_eq!(ApiConfig::new(Some("   ")), ApiConfig::default());
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new(Some("https://api.example.test/v1//"));
    assert_eq!(cfg.base_url, "https://api.example.test/v1");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ApiConfig::new(Some("https://api.example.test/"));
    assert_eq!(cfg.endpoint("profiles/7"), "https://api.example.test/profiles/7");
    assert_eq!(cfg.endpoint("/profiles/7"), "https://api.example.test/profiles/7");
}
