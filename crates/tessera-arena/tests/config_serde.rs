// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used)]
use tessera_arena::{Arena, ArenaConfig, ArenaError, DEFAULT_BLOCK_SIZE};

#[test]
fn config_loads_from_json() {
    let config = ArenaConfig::from_json(r#"{"block_size": 600}"#).unwrap();
    assert_eq!(config, ArenaConfig::new(600));
    assert_eq!(Arena::with_config(&config).unwrap().block_size(), 600);
}

#[test]
fn missing_fields_take_defaults() {
    let config = ArenaConfig::from_json("{}").unwrap();
    assert_eq!(config.block_size, DEFAULT_BLOCK_SIZE);
}

#[test]
fn bad_json_and_bad_values_are_reported() {
    assert!(matches!(
        ArenaConfig::from_json("{\"block_size\": \"big\"}"),
        Err(ArenaError::Config(_))
    ));
    assert!(matches!(
        ArenaConfig::from_json(r#"{"block_size": 0}"#),
        Err(ArenaError::ZeroBlockSize)
    ));
}

#[test]
fn config_round_trips() {
    let config = ArenaConfig::new(4096);
    let json = config.to_json().unwrap();
    assert_eq!(json, r#"{"block_size":4096}"#);
    assert_eq!(ArenaConfig::from_json(&json).unwrap(), config);
}
