/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to Item, an inventory item in Dynamics 365 Business Central."]
use time::OffsetDateTime;
use uuid::Uuid;

use crate::serialization::{
    collection_of_object_values, object_value, parsable, set_if_present, write_object,
    write_object_collection, Field,
};
use crate::types::entity::Entity;
use crate::types::item_category::ItemCategory;
use crate::types::picture::Picture;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
    pub entity: Entity,
    pub base_unit_of_measure_id: Option<Uuid>,
    pub blocked: Option<bool>,
    pub display_name: Option<String>,
    pub gtin: Option<String>,
    pub inventory: Option<f64>,
    pub item_category: Option<ItemCategory>,
    pub item_category_code: Option<String>,
    pub item_category_id: Option<Uuid>,
    pub last_modified_date_time: Option<OffsetDateTime>,
    pub number: Option<String>,
    pub picture: Option<Vec<Picture>>,
    pub price_includes_tax: Option<bool>,
    pub tax_group_code: Option<String>,
    pub tax_group_id: Option<Uuid>,
    pub r#type: Option<String>,
    pub unit_cost: Option<f64>,
    pub unit_price: Option<f64>,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<Item>] = &[
    Field {
        name: "baseUnitOfMeasureId",
        read: |m, n| set_if_present(&mut m.base_unit_of_measure_id, n.uuid_value()),
        write: |m, w| w.write_uuid_value("baseUnitOfMeasureId", m.base_unit_of_measure_id.as_ref()),
    },
    Field {
        name: "blocked",
        read: |m, n| set_if_present(&mut m.blocked, n.bool_value()),
        write: |m, w| w.write_bool_value("blocked", m.blocked),
    },
    Field {
        name: "displayName",
        read: |m, n| set_if_present(&mut m.display_name, n.string_value()),
        write: |m, w| w.write_string_value("displayName", m.display_name.as_deref()),
    },
    Field {
        name: "gtin",
        read: |m, n| set_if_present(&mut m.gtin, n.string_value()),
        write: |m, w| w.write_string_value("gtin", m.gtin.as_deref()),
    },
    Field {
        name: "inventory",
        read: |m, n| set_if_present(&mut m.inventory, n.f64_value()),
        write: |m, w| w.write_f64_value("inventory", m.inventory),
    },
    Field {
        name: "itemCategory",
        read: |m, n| set_if_present(&mut m.item_category, object_value(n)),
        write: |m, w| write_object(w, "itemCategory", m.item_category.as_ref()),
    },
    Field {
        name: "itemCategoryCode",
        read: |m, n| set_if_present(&mut m.item_category_code, n.string_value()),
        write: |m, w| w.write_string_value("itemCategoryCode", m.item_category_code.as_deref()),
    },
    Field {
        name: "itemCategoryId",
        read: |m, n| set_if_present(&mut m.item_category_id, n.uuid_value()),
        write: |m, w| w.write_uuid_value("itemCategoryId", m.item_category_id.as_ref()),
    },
    Field {
        name: "lastModifiedDateTime",
        read: |m, n| set_if_present(&mut m.last_modified_date_time, n.date_time_value()),
        write: |m, w| {
            w.write_date_time_value("lastModifiedDateTime", m.last_modified_date_time.as_ref())
        },
    },
    Field {
        name: "number",
        read: |m, n| set_if_present(&mut m.number, n.string_value()),
        write: |m, w| w.write_string_value("number", m.number.as_deref()),
    },
    Field {
        name: "picture",
        read: |m, n| set_if_present(&mut m.picture, collection_of_object_values(n)),
        write: |m, w| write_object_collection(w, "picture", m.picture.as_deref()),
    },
    Field {
        name: "priceIncludesTax",
        read: |m, n| set_if_present(&mut m.price_includes_tax, n.bool_value()),
        write: |m, w| w.write_bool_value("priceIncludesTax", m.price_includes_tax),
    },
    Field {
        name: "taxGroupCode",
        read: |m, n| set_if_present(&mut m.tax_group_code, n.string_value()),
        write: |m, w| w.write_string_value("taxGroupCode", m.tax_group_code.as_deref()),
    },
    Field {
        name: "taxGroupId",
        read: |m, n| set_if_present(&mut m.tax_group_id, n.uuid_value()),
        write: |m, w| w.write_uuid_value("taxGroupId", m.tax_group_id.as_ref()),
    },
    Field {
        name: "type",
        read: |m, n| set_if_present(&mut m.r#type, n.string_value()),
        write: |m, w| w.write_string_value("type", m.r#type.as_deref()),
    },
    Field {
        name: "unitCost",
        read: |m, n| set_if_present(&mut m.unit_cost, n.f64_value()),
        write: |m, w| w.write_f64_value("unitCost", m.unit_cost),
    },
    Field {
        name: "unitPrice",
        read: |m, n| set_if_present(&mut m.unit_price, n.f64_value()),
        write: |m, w| w.write_f64_value("unitPrice", m.unit_price),
    },
];

parsable!(Item, extends entity: Entity, FIELDS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_round_trip;
    use crate::Error;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn item_round_trips() {
        let content = json!({
            "id": "7d2c9d2f-0b1f-4d4e-8a2b-5b7c3d9e1f00",
            "baseUnitOfMeasureId": "0f8fad5b-d9cb-469f-a165-70867728950e",
            "blocked": false,
            "displayName": "ATHENS Desk",
            "inventory": 4.5,
            "itemCategory": {
                "id": "c1",
                "code": "TABLE",
                "displayName": "Assorted Tables",
            },
            "lastModifiedDateTime": "2019-01-15T22:02:01.547Z",
            "number": "1896-S",
            "picture": [
                {
                    "id": "p1",
                    "content": "iVBORw0KGgo=",
                    "contentType": "image/png",
                    "height": 64,
                    "width": 64,
                },
            ],
            "type": "Inventory",
            "unitPrice": 1000.8,
        });
        let item: Item = assert_round_trip(&content);
        assert_eq!(
            item.base_unit_of_measure_id,
            Some(Uuid::from_u128(0x0f8fad5b_d9cb_469f_a165_70867728950e))
        );
        assert_eq!(
            item.last_modified_date_time,
            Some(datetime!(2019-01-15 22:02:01.547 UTC))
        );
        assert_eq!(item.item_category.unwrap().code.as_deref(), Some("TABLE"));
        assert_eq!(item.picture.unwrap()[0].content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn whole_number_amounts_keep_their_wire_form() {
        let content = json!({"inventory": 5, "unitCost": 0, "unitPrice": 19.99});
        let item: Item = assert_round_trip(&content);
        assert_eq!(item.inventory, Some(5.0));
        assert_eq!(item.unit_cost, Some(0.0));
    }

    #[test]
    fn null_collection_elements_are_skipped() {
        let content = json!({"picture": [null, {"width": 10}, null]});
        let item: Item = crate::from_value(&content).unwrap();
        let pictures = item.picture.unwrap();
        assert_eq!(pictures.len(), 1);
        assert_eq!(pictures[0].width, Some(10));
    }

    #[test]
    fn malformed_uuid_aborts_decode() {
        let content = json!({"displayName": "Desk", "taxGroupId": "TAXABLE"});
        let result = crate::from_value::<Item>(&content);
        assert!(matches!(
            result,
            Err(Error::InvalidValue { kind: "uuid", .. })
        ));
    }

    #[test]
    fn non_finite_price_cannot_be_written() {
        let item = Item {
            unit_cost: Some(f64::NAN),
            ..Item::new()
        };
        let result = crate::to_value(&item);
        assert!(matches!(
            result,
            Err(Error::InvalidValue { kind: "double", .. })
        ));
    }
}
