/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to AndroidTrustedRootCertificate."]
use crate::serialization::{parsable, set_if_present, Field};
use crate::types::device_configuration::DeviceConfiguration;

/// Android trusted certificate configuration profile.
#[derive(Clone, Debug, PartialEq)]
pub struct AndroidTrustedRootCertificate {
    pub device_configuration: DeviceConfiguration,
    #[doc = "File name to display in UI."]
    pub cert_file_name: Option<String>,
    #[doc = "Trusted root certificate."]
    pub trusted_root_certificate: Option<Vec<u8>>,
}

impl AndroidTrustedRootCertificate {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.androidTrustedRootCertificate";

    pub fn new() -> Self {
        let mut device_configuration = DeviceConfiguration::new();
        device_configuration.odata_type = Some(Self::ODATA_TYPE.to_string());
        AndroidTrustedRootCertificate {
            device_configuration,
            cert_file_name: None,
            trusted_root_certificate: None,
        }
    }
}

impl Default for AndroidTrustedRootCertificate {
    fn default() -> Self {
        Self::new()
    }
}

const FIELDS: &[Field<AndroidTrustedRootCertificate>] = &[
    Field {
        name: "certFileName",
        read: |m, n| set_if_present(&mut m.cert_file_name, n.string_value()),
        write: |m, w| w.write_string_value("certFileName", m.cert_file_name.as_deref()),
    },
    Field {
        name: "trustedRootCertificate",
        read: |m, n| set_if_present(&mut m.trusted_root_certificate, n.byte_array_value()),
        write: |m, w| {
            w.write_byte_array_value(
                "trustedRootCertificate",
                m.trusted_root_certificate.as_deref(),
            )
        },
    },
];

parsable!(AndroidTrustedRootCertificate, extends device_configuration: DeviceConfiguration, FIELDS);
