/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to Entity."]
use crate::serialization::{parsable, set_if_present, AdditionalData, Field, ODATA_TYPE};

/// The base of every addressable Graph resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    #[doc = "The unique identifier for an entity. Read-only."]
    pub id: Option<String>,
    #[doc = "The fully-qualified schema type of the payload."]
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<Entity>] = &[
    Field {
        name: "id",
        read: |m, n| set_if_present(&mut m.id, n.string_value()),
        write: |m, w| w.write_string_value("id", m.id.as_deref()),
    },
    Field {
        name: ODATA_TYPE,
        read: |m, n| set_if_present(&mut m.odata_type, n.string_value()),
        write: |m, w| w.write_string_value(ODATA_TYPE, m.odata_type.as_deref()),
    },
];

parsable!(root Entity, FIELDS);
