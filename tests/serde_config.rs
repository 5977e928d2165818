// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loading device ranges and speed lists from integration config payloads.

use percent_scale::speed::{NamedSpeeds, RangedSpeed, SpeedCommand};
use percent_scale::types::{OrderedList, Percentage, Range};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct FanConfig {
    speed_range: Option<Range>,
    preset_speeds: Option<OrderedList<String>>,
}

#[test]
fn range_from_json_array() {
    let range: Range = serde_json::from_str("[1, 255]").unwrap();
    assert_eq!(range, Range::new(1.0, 255.0).unwrap());
    assert_eq!(serde_json::to_string(&range).unwrap(), "[1.0,255.0]");
}

#[test]
fn inverted_range_is_rejected() {
    let err = serde_json::from_str::<Range>("[255, 1]").unwrap_err();
    assert!(err.to_string().contains("invalid range"));
}

#[test]
fn percentage_from_json() {
    let pct: Percentage = serde_json::from_str("42").unwrap();
    assert_eq!(pct.value(), 42);
    assert_eq!(serde_json::to_string(&pct).unwrap(), "42");
    assert!(serde_json::from_str::<Percentage>("101").is_err());
}

#[test]
fn ordered_list_from_json() {
    let list: OrderedList<String> =
        serde_json::from_str(r#"["low", "medium", "high"]"#).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(
        serde_json::to_string(&list).unwrap(),
        r#"["low","medium","high"]"#
    );

    let err = serde_json::from_str::<OrderedList<String>>("[]").unwrap_err();
    assert!(err.to_string().contains("empty"));

    let err = serde_json::from_str::<OrderedList<String>>(r#"["low", "low"]"#).unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn fan_config_drives_adapters() {
    let config: FanConfig = serde_json::from_str(
        r#"{
            "speed_range": [0, 3],
            "preset_speeds": ["silent", "normal", "boost"]
        }"#,
    )
    .unwrap();

    let ranged = RangedSpeed::new(config.speed_range.unwrap()).unwrap();
    assert_eq!(ranged.command(100.0), SpeedCommand::Set(3));
    assert_eq!(ranged.percentage(Some(1.0)).value(), 50);

    let named = NamedSpeeds::new(config.preset_speeds.unwrap());
    assert_eq!(
        named.command(10.0),
        SpeedCommand::Set(&"silent".to_string())
    );
    assert_eq!(
        named.percentage(Some(&"boost".to_string())).unwrap(),
        Percentage::FULL
    );
}
