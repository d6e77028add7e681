/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt::Debug;

use serde_json::Value;

use crate::{from_value, to_value, Parsable};

/// Assert the expected result of serialization, including property order.
pub fn assert_serialized_content<T: Parsable + ?Sized>(data: &T, expected: Value) {
    let actual = to_value(data).unwrap();
    assert_eq!(actual, expected);

    // `Value` equality ignores the order of object members.
    assert_eq!(
        serde_json::to_string(&actual).unwrap(),
        serde_json::to_string(&expected).unwrap()
    );
}

/// Assert the expected result of deserialization.
pub fn assert_deserialized_content<T>(content: &Value, expected: T)
where
    T: Parsable + PartialEq + Debug,
{
    let deserialized: T = from_value(content).unwrap();
    assert_eq!(deserialized, expected);
}

/// Assert that `content` deserializes to a model which serializes back to
/// `content`, and that the model survives a second pass unchanged.
pub fn assert_round_trip<T>(content: &Value) -> T
where
    T: Parsable + PartialEq + Debug,
{
    let deserialized: T = from_value(content).unwrap();
    assert_serialized_content(&deserialized, content.clone());

    let reparsed: T = from_value(&to_value(&deserialized).unwrap()).unwrap();
    assert_eq!(reparsed, deserialized);
    deserialized
}
