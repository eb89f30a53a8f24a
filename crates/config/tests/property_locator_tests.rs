//! Property-based tests for configuration file locations.
//!
//! These tests generate arbitrary combinations of set, unset and empty
//! environment variables and check that the candidate list always follows
//! the platform policy.
//!
//! Test coverage:
//! - Windows: only APPDATA/LOCALAPPDATA, in that order, unset or empty skipped
//! - Unix: XDG_CONFIG_DIRS entries in order, empty segments skipped
//! - Unix: home fallback only when XDG yields nothing

use proptest::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use prowl_config::constants::CONFIG_SUBPATH;
use prowl_config::{Platform, locations_for};

/// Strategy for an environment variable that may be unset, empty, or a directory.
fn env_value_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "/[a-z]{1,8}(/[a-z]{1,8}){0,2}".prop_map(Some),
    ]
}

/// Strategy for an `XDG_CONFIG_DIRS` value with possibly empty segments.
fn xdg_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::collection::vec(
            prop_oneof![Just(String::new()), "/[a-z]{1,8}(/[a-z]{1,8}){0,2}"],
            0..5
        )
        .prop_map(|segments| Some(segments.join(":"))),
    ]
}

/// Strategy for an optional home directory.
fn home_strategy() -> impl Strategy<Value = Option<PathBuf>> {
    prop_oneof![
        Just(None),
        "/home/[a-z]{1,8}".prop_map(|h| Some(PathBuf::from(h))),
    ]
}

fn lookup(env: HashMap<&'static str, Option<String>>) -> impl Fn(&str) -> Option<String> {
    move |key| env.get(key).cloned().flatten()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_windows_locations_follow_policy(
        appdata in env_value_strategy(),
        localappdata in env_value_strategy(),
        xdg in xdg_strategy(),
        home in home_strategy(),
    ) {
        let env = HashMap::from([
            ("APPDATA", appdata.clone()),
            ("LOCALAPPDATA", localappdata.clone()),
            ("XDG_CONFIG_DIRS", xdg),
        ]);
        let locations = locations_for(Platform::Windows, lookup(env), home.as_deref(), CONFIG_SUBPATH);

        let expected: Vec<PathBuf> = [appdata, localappdata]
            .into_iter()
            .flatten()
            .filter(|dir| !dir.is_empty())
            .map(|dir| Path::new(&dir).join(CONFIG_SUBPATH))
            .collect();

        prop_assert_eq!(locations, expected);
    }

    #[test]
    fn test_unix_locations_follow_policy(
        appdata in env_value_strategy(),
        xdg in xdg_strategy(),
        home in home_strategy(),
    ) {
        let env = HashMap::from([
            ("APPDATA", appdata),
            ("XDG_CONFIG_DIRS", xdg.clone()),
        ]);
        let locations = locations_for(Platform::Unix, lookup(env), home.as_deref(), CONFIG_SUBPATH);

        let xdg_dirs: Vec<PathBuf> = xdg
            .unwrap_or_default()
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| Path::new(dir).join(CONFIG_SUBPATH))
            .collect();

        if xdg_dirs.is_empty() {
            let expected: Vec<PathBuf> = home
                .iter()
                .map(|h| h.join(".config").join(CONFIG_SUBPATH))
                .collect();
            prop_assert_eq!(locations, expected);
        } else {
            prop_assert_eq!(locations, xdg_dirs);
        }
    }

    #[test]
    fn test_every_location_ends_with_subpath(
        xdg in xdg_strategy(),
        home in home_strategy(),
    ) {
        let env = HashMap::from([("XDG_CONFIG_DIRS", xdg)]);
        let locations = locations_for(Platform::Unix, lookup(env), home.as_deref(), CONFIG_SUBPATH);

        for location in locations {
            prop_assert!(location.ends_with(CONFIG_SUBPATH));
        }
    }
}
