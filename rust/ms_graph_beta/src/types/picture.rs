/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to Picture."]
use crate::serialization::{parsable, set_if_present, Field};
use crate::types::entity::Entity;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Picture {
    pub entity: Entity,
    pub content: Option<Vec<u8>>,
    pub content_type: Option<String>,
    pub height: Option<i32>,
    pub width: Option<i32>,
}

impl Picture {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<Picture>] = &[
    Field {
        name: "content",
        read: |m, n| set_if_present(&mut m.content, n.byte_array_value()),
        write: |m, w| w.write_byte_array_value("content", m.content.as_deref()),
    },
    Field {
        name: "contentType",
        read: |m, n| set_if_present(&mut m.content_type, n.string_value()),
        write: |m, w| w.write_string_value("contentType", m.content_type.as_deref()),
    },
    Field {
        name: "height",
        read: |m, n| set_if_present(&mut m.height, n.i32_value()),
        write: |m, w| w.write_i32_value("height", m.height),
    },
    Field {
        name: "width",
        read: |m, n| set_if_present(&mut m.width, n.i32_value()),
        write: |m, w| w.write_i32_value("width", m.width),
    },
];

parsable!(Picture, extends entity: Entity, FIELDS);
