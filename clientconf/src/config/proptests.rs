//! Property-based tests for configuration resolution.

use std::time::Duration;

use super::duration::{format_duration, parse_duration, MAX_NANOS};
use super::merger::ConfigResolver;
use super::schema::{Field, Provenance, RawEnvConfig, RawFileConfig};
use crate::error::Error;
use proptest::prelude::*;

// Strategy for valid duration strings
fn duration_string_strategy() -> impl Strategy<Value = String> {
    (0u64..100, prop::sample::select(vec!["ns", "us", "ms", "s", "m", "h"]))
        .prop_map(|(n, unit)| format!("{n}{unit}"))
}

// Strategy for raw values that may be absent, empty or set
fn raw_value_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-z0-9:.]{1,16}".prop_map(Some),
    ]
}

fn raw_duration_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), duration_string_strategy().prop_map(Some)]
}

fn file_strategy() -> impl Strategy<Value = RawFileConfig> {
    (
        raw_value_strategy(),
        raw_value_strategy(),
        raw_duration_strategy(),
        raw_duration_strategy(),
    )
        .prop_map(|(server_address, id, loop_lapse, loop_period)| RawFileConfig {
            server_address,
            id,
            loop_lapse,
            loop_period,
        })
}

fn env_strategy() -> impl Strategy<Value = RawEnvConfig> {
    (
        raw_value_strategy(),
        raw_value_strategy(),
        raw_duration_strategy(),
        raw_duration_strategy(),
    )
        .prop_map(|(server_address, id, loop_lapse, loop_period)| RawEnvConfig {
            server_address,
            id,
            loop_lapse,
            loop_period,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A present environment value always wins, whatever the file holds
    #[test]
    fn env_presence_always_wins(
        env in env_strategy(),
        file in prop::option::of(file_strategy()),
    ) {
        let resolution = ConfigResolver::resolve(&env, file.as_ref()).unwrap();

        for field in Field::ALL {
            if let Some(raw) = env.get(field) {
                prop_assert_eq!(resolution.provenance(field), Provenance::Environment);
                if !field.is_duration() {
                    prop_assert_eq!(resolution.config.display_value(field), raw);
                }
            }
        }
    }

    // With no environment and no file, every field is its default
    #[test]
    fn missing_sources_fall_back_to_defaults(_dummy in any::<u8>()) {
        let resolution = ConfigResolver::resolve(&RawEnvConfig::default(), None).unwrap();
        for field in Field::ALL {
            prop_assert_eq!(resolution.provenance(field), Provenance::Default);
        }
        prop_assert_eq!(resolution.config.loop_lapse, Duration::from_secs(62));
        prop_assert_eq!(resolution.config.loop_period, Duration::from_secs(10));
    }

    // The file only contributes non-empty values, and only where env is absent
    #[test]
    fn file_used_only_below_env(file in file_strategy()) {
        let resolution = ConfigResolver::resolve(&RawEnvConfig::default(), Some(&file)).unwrap();

        for field in Field::ALL {
            let expected = match file.get(field) {
                Some(v) if !v.is_empty() => Provenance::File,
                _ => Provenance::Default,
            };
            prop_assert_eq!(resolution.provenance(field), expected);
        }
    }

    // Same inputs, same output
    #[test]
    fn resolution_is_deterministic(
        env in env_strategy(),
        file in prop::option::of(file_strategy()),
    ) {
        let first = ConfigResolver::resolve(&env, file.as_ref()).unwrap();
        let second = ConfigResolver::resolve(&env, file.as_ref()).unwrap();
        prop_assert_eq!(first, second);
    }

    // A malformed winning duration is always an error naming the field
    #[test]
    fn malformed_winning_duration_is_error(
        garbage in "[a-z ]{1,10}",
        file in prop::option::of(file_strategy()),
    ) {
        let env = RawEnvConfig {
            loop_period: Some(garbage.clone()),
            ..Default::default()
        };
        match ConfigResolver::resolve(&env, file.as_ref()) {
            Err(Error::Coercion { field, value, .. }) => {
                prop_assert_eq!(field, "LoopPeriod");
                prop_assert_eq!(value, garbage);
            }
            other => prop_assert!(false, "expected coercion error, got {:?}", other),
        }
    }

    // Canonical formatting parses back to the same duration
    #[test]
    fn format_then_parse_is_identity(nanos in 0..=MAX_NANOS) {
        let duration = Duration::from_nanos(nanos);
        let rendered = format_duration(duration);
        prop_assert_eq!(parse_duration(&rendered), Ok(duration), "rendered as {}", rendered);
    }
}
