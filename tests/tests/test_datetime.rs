// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use jolt::{DateFormat, Error, Jolt, JoltObject};
use std::collections::BTreeMap;

const DAY_FIRST: DateFormat = DateFormat::new("%d.%m.%Y");

#[derive(JoltObject, Debug, PartialEq)]
struct Booking {
    day: NaiveDate,
    #[jolt(with = DAY_FIRST)]
    paid_on: NaiveDate,
    check_in: NaiveTime,
    created: NaiveDateTime,
    updated: DateTime<Utc>,
}

fn booking() -> Booking {
    let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    Booking {
        day,
        paid_on: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        check_in: NaiveTime::from_hms_milli_opt(14, 30, 0, 250).unwrap(),
        created: day.and_hms_opt(9, 15, 0).unwrap(),
        updated: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn test_date_text() {
    let jolt = Jolt::default();
    let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(jolt.encode_to_string(&day).unwrap(), r#""2024-02-29""#);
    assert_eq!(jolt.decode_str::<NaiveDate>(r#""2024-02-29""#).unwrap(), day);
    assert!(matches!(
        jolt.decode_str::<NaiveDate>(r#""2023-02-29""#),
        Err(Error::InvalidData(_))
    ));
}

#[test]
fn test_struct_round_trip() {
    let jolt = Jolt::default();
    let booking = booking();
    let text = jolt.encode_to_string(&booking).unwrap();
    assert!(text.starts_with(r#"{"day":"2024-02-29","paid_on":"05.01.2024","check_in":"14:30:00.250","created":"2024-02-29T09:15:00""#));
    assert_eq!(jolt.decode_str::<Booking>(&text).unwrap(), booking);
}

#[test]
fn test_timestamp_offsets() {
    let jolt = Jolt::default();
    let parsed: DateTime<Utc> = jolt.decode_str(r#""2024-03-01T14:00:00+02:00""#).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    assert!(jolt.decode_str::<DateTime<Utc>>(r#""yesterday""#).is_err());
}

#[test]
fn test_dates_as_map_keys() {
    let jolt = Jolt::default();
    let mut visits = BTreeMap::new();
    visits.insert(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), 3u32);
    let text = jolt.encode_to_string(&visits).unwrap();
    assert_eq!(text, r#"{"2024-05-01":3}"#);
    assert_eq!(
        jolt.decode_str::<BTreeMap<NaiveDate, u32>>(&text).unwrap(),
        visits
    );
}

const BROKEN: DateFormat = DateFormat::new("%Q");

#[derive(JoltObject, Debug, PartialEq)]
struct Stamped {
    #[jolt(with = BROKEN)]
    on: NaiveDate,
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let jolt = Jolt::default();
    let stamped = Stamped {
        on: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    };
    match jolt.encode_to_string(&stamped) {
        Err(Error::InvalidData(message)) => assert!(message.contains("%Q")),
        other => panic!("expected InvalidData, got {:?}", other),
    }
}
