//! Property-based tests for DSM parameter validation and host normalization.
//!
//! Test coverage:
//! - check_dsm_params: true exactly for three non-empty elements
//! - dsm_connection_config: positions map onto host, user id and password
//! - base_url_for_host: bare hosts gain `https://`, explicit URLs keep their scheme

use proptest::prelude::*;
use secrecy::ExposeSecret;

use dsm_config::{base_url_for_host, check_dsm_params, dsm_connection_config};

/// Strategy for generating DSM host names with an optional port.
fn host_strategy() -> impl Strategy<Value = String> {
    let name = prop_oneof![Just("dsm"), Just("dsm-prod"), Just("dataservices")];
    let domain = prop_oneof![Just("example.com"), Just("corp.local"), Just("vmware.test")];
    let port = proptest::option::of(1u16..=65535u16);

    (name, domain, port).prop_map(|(name, domain, port)| match port {
        Some(port) => format!("{name}.{domain}:{port}"),
        None => format!("{name}.{domain}"),
    })
}

proptest! {
    #[test]
    fn prop_three_non_empty_params_are_valid(
        host in ".{1,40}",
        user in ".{1,40}",
        password in ".{1,40}",
    ) {
        prop_assert!(check_dsm_params(&[host, user, password]));
    }

    #[test]
    fn prop_any_empty_param_is_invalid(
        values in proptest::collection::vec(".{1,20}", 3),
        empty_at in 0usize..3,
    ) {
        let mut values = values;
        values[empty_at].clear();
        prop_assert!(!check_dsm_params(values.as_slice()));
    }

    #[test]
    fn prop_wrong_length_is_invalid(values in proptest::collection::vec(".{1,20}", 0..8)) {
        prop_assume!(values.len() != 3);
        prop_assert!(!check_dsm_params(values.as_slice()));
    }

    #[test]
    fn prop_connection_config_keeps_positions(
        host in host_strategy(),
        user in "[a-z]{1,12}@example\\.com",
        password in "[ -~]{1,32}",
    ) {
        let config = dsm_connection_config([host.clone(), user.clone(), password.clone()]);
        prop_assert_eq!(config.dsm_host, host);
        prop_assert_eq!(config.dsm_user_id, user);
        prop_assert_eq!(config.dsm_password.expose_secret(), password.as_str());
    }

    #[test]
    fn prop_bare_host_gets_https(host in host_strategy()) {
        prop_assert_eq!(base_url_for_host(&host).unwrap(), format!("https://{host}"));
    }

    #[test]
    fn prop_explicit_scheme_is_kept(host in host_strategy(), https in any::<bool>()) {
        let scheme = if https { "https" } else { "http" };
        let url = format!("{scheme}://{host}/");
        prop_assert_eq!(base_url_for_host(&url).unwrap(), format!("{scheme}://{host}"));
    }
}
