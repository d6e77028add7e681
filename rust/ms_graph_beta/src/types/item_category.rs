/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to ItemCategory."]
use time::OffsetDateTime;

use crate::serialization::{parsable, set_if_present, Field};
use crate::types::entity::Entity;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemCategory {
    pub entity: Entity,
    pub code: Option<String>,
    pub display_name: Option<String>,
    pub last_modified_date_time: Option<OffsetDateTime>,
}

impl ItemCategory {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<ItemCategory>] = &[
    Field {
        name: "code",
        read: |m, n| set_if_present(&mut m.code, n.string_value()),
        write: |m, w| w.write_string_value("code", m.code.as_deref()),
    },
    Field {
        name: "displayName",
        read: |m, n| set_if_present(&mut m.display_name, n.string_value()),
        write: |m, w| w.write_string_value("displayName", m.display_name.as_deref()),
    },
    Field {
        name: "lastModifiedDateTime",
        read: |m, n| set_if_present(&mut m.last_modified_date_time, n.date_time_value()),
        write: |m, w| {
            w.write_date_time_value("lastModifiedDateTime", m.last_modified_date_time.as_ref())
        },
    },
];

parsable!(ItemCategory, extends entity: Entity, FIELDS);
