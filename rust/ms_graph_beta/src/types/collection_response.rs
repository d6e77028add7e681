/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "One page of a collection returned by a list request."]
use http::Uri;

use crate::serialization::{
    collection_of_object_values, set_if_present, write_object_collection, AdditionalData,
    Parsable, ParseNode, SerializationWriter,
};
use crate::Error;

const ODATA_COUNT: &str = "@odata.count";
const ODATA_NEXT_LINK: &str = "@odata.nextLink";
const VALUE: &str = "value";

/// A page of `T`. Each element of `value` is dispatched on its own
/// `@odata.type`, so `T` may be a hierarchy such as
/// [`crate::types::device_configuration::AnyDeviceConfiguration`].
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionResponse<T> {
    pub odata_count: Option<i64>,
    pub odata_next_link: Option<String>,
    pub value: Option<Vec<T>>,
    pub additional_data: AdditionalData,
}

impl<T> CollectionResponse<T> {
    pub fn new() -> Self {
        CollectionResponse {
            odata_count: None,
            odata_next_link: None,
            value: None,
            additional_data: AdditionalData::new(),
        }
    }

    /// The link to the next page, if there is one.
    pub fn next_link_uri(&self) -> Result<Option<Uri>, Error> {
        self.odata_next_link
            .as_deref()
            .map(|link| {
                link.parse::<Uri>()
                    .map_err(|_| Error::invalid("next link", link))
            })
            .transpose()
    }
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Parsable> Parsable for CollectionResponse<T> {
    fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, Error> {
        Ok(Self::new())
    }

    fn read_property(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        match name {
            ODATA_COUNT => set_if_present(&mut self.odata_count, node.i64_value())?,
            ODATA_NEXT_LINK => set_if_present(&mut self.odata_next_link, node.string_value())?,
            VALUE => set_if_present(&mut self.value, collection_of_object_values(node))?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_properties(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        writer.write_i64_value(ODATA_COUNT, self.odata_count)?;
        writer.write_string_value(ODATA_NEXT_LINK, self.odata_next_link.as_deref())?;
        write_object_collection(writer, VALUE, self.value.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_round_trip;
    use crate::types::device_configuration::AnyDeviceConfiguration;
    use crate::types::office365_active_user_detail::Office365ActiveUserDetail;
    use serde_json::json;

    #[test]
    fn page_dispatches_each_element() {
        let content = json!({
            "@odata.count": 3,
            "@odata.nextLink": "https://graph.microsoft.com/beta/deviceManagement/deviceConfigurations?$skiptoken=abc",
            "value": [
                {"@odata.type": "#microsoft.graph.iosTrustedRootCertificate", "certFileName": "a.cer"},
                {"@odata.type": "#microsoft.graph.windowsWifiConfiguration", "ssid": "corp"},
                {"@odata.type": "#microsoft.graph.macOSCustomConfiguration", "displayName": "custom"},
            ],
            "@odata.context": "https://graph.microsoft.com/beta/$metadata#deviceManagement/deviceConfigurations",
        });
        let page: CollectionResponse<AnyDeviceConfiguration> = assert_round_trip(&content);
        assert_eq!(page.odata_count, Some(3));

        let value = page.value.as_deref().unwrap();
        assert!(matches!(value[0], AnyDeviceConfiguration::IosTrustedRootCertificate(_)));
        assert!(matches!(value[1], AnyDeviceConfiguration::WindowsWifiConfiguration(_)));
        assert!(matches!(value[2], AnyDeviceConfiguration::DeviceConfiguration(_)));

        let next = page.next_link_uri().unwrap().unwrap();
        assert_eq!(next.host(), Some("graph.microsoft.com"));
        assert_eq!(next.query(), Some("$skiptoken=abc"));
    }

    #[test]
    fn last_page_has_no_next_link() {
        let page: CollectionResponse<Office365ActiveUserDetail> =
            crate::from_value(&json!({"value": []})).unwrap();
        assert_eq!(page.value, Some(vec![]));
        assert!(page.next_link_uri().unwrap().is_none());
    }

    #[test]
    fn malformed_next_link_is_reported() {
        let page = CollectionResponse::<Office365ActiveUserDetail> {
            odata_next_link: Some("not a uri".to_string()),
            ..CollectionResponse::new()
        };
        assert!(matches!(
            page.next_link_uri(),
            Err(Error::InvalidValue {
                kind: "next link",
                ..
            })
        ));
    }
}
