/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to IosEnterpriseWiFiConfiguration."]
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::serialization::{
    collection_of_object_values, collection_of_primitive_values, enum_value, parsable,
    set_if_present, write_enum, write_object_collection, write_primitive_collection, Field,
    GraphEnum,
};
use crate::types::ios_trusted_root_certificate::IosTrustedRootCertificate;
use crate::types::ios_wi_fi_configuration::IosWiFiConfiguration;

/// Wi-Fi authentication method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum WiFiAuthenticationMethod {
    Certificate,
    UsernameAndPassword,
    DerivedCredential,
}

impl GraphEnum for WiFiAuthenticationMethod {
    const NAME: &'static str = "wiFiAuthenticationMethod";
}

/// Options for how EAP-FAST handles Protected Access Credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum EapFastConfiguration {
    NoProtectedAccessCredential,
    UseProtectedAccessCredential,
    UseProtectedAccessCredentialAndProvision,
    UseProtectedAccessCredentialAndProvisionAnonymously,
}

impl GraphEnum for EapFastConfiguration {
    const NAME: &'static str = "eapFastConfiguration";
}

/// Extensible Authentication Protocol (EAP) types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum EapType {
    EapTls,
    Leap,
    EapSim,
    EapTtls,
    Peap,
    EapFast,
    Teap,
}

impl GraphEnum for EapType {
    const NAME: &'static str = "eapType";
}

/// Non-EAP methods for inner authentication when EAP-TTLS is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum NonEapAuthenticationMethodForEapTtlsType {
    UnencryptedPassword,
    ChallengeHandshakeAuthenticationProtocol,
    MicrosoftChap,
    MicrosoftChapVersionTwo,
}

impl GraphEnum for NonEapAuthenticationMethodForEapTtlsType {
    const NAME: &'static str = "nonEapAuthenticationMethodForEapTtlsType";
}

/// iOS Wi-Fi profile for networks using enterprise (802.1X) authentication.
#[derive(Clone, Debug, PartialEq)]
pub struct IosEnterpriseWiFiConfiguration {
    pub ios_wi_fi_configuration: IosWiFiConfiguration,
    pub authentication_method: Option<WiFiAuthenticationMethod>,
    pub eap_fast_configuration: Option<EapFastConfiguration>,
    pub eap_type: Option<EapType>,
    pub inner_authentication_protocol_for_eap_ttls: Option<NonEapAuthenticationMethodForEapTtlsType>,
    #[doc = "Enable identity privacy (Outer Identity) when EAP Type is configured to EAP - TTLS, EAP - FAST or PEAP."]
    pub outer_identity_privacy_temporary_value: Option<String>,
    #[doc = "Password format string used to build the password to connect to wifi"]
    pub password_format_string: Option<String>,
    #[doc = "Trusted Root Certificates for Server Validation when EAP Type is configured to EAP-TLS/TTLS/FAST or PEAP."]
    pub root_certificates_for_server_validation: Option<Vec<IosTrustedRootCertificate>>,
    #[doc = "Trusted server certificate names when EAP Type is configured to EAP-TLS/TTLS/FAST or PEAP."]
    pub trusted_server_certificate_names: Option<Vec<String>>,
    #[doc = "Username format string used to build the username to connect to wifi"]
    pub username_format_string: Option<String>,
}

impl IosEnterpriseWiFiConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.iosEnterpriseWiFiConfiguration";

    pub fn new() -> Self {
        IosEnterpriseWiFiConfiguration {
            ios_wi_fi_configuration: IosWiFiConfiguration::with_odata_type(Self::ODATA_TYPE),
            authentication_method: None,
            eap_fast_configuration: None,
            eap_type: None,
            inner_authentication_protocol_for_eap_ttls: None,
            outer_identity_privacy_temporary_value: None,
            password_format_string: None,
            root_certificates_for_server_validation: None,
            trusted_server_certificate_names: None,
            username_format_string: None,
        }
    }
}

impl Default for IosEnterpriseWiFiConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

const FIELDS: &[Field<IosEnterpriseWiFiConfiguration>] = &[
    Field {
        name: "authenticationMethod",
        read: |m, n| set_if_present(&mut m.authentication_method, enum_value(n)),
        write: |m, w| write_enum(w, "authenticationMethod", m.authentication_method),
    },
    Field {
        name: "eapFastConfiguration",
        read: |m, n| set_if_present(&mut m.eap_fast_configuration, enum_value(n)),
        write: |m, w| write_enum(w, "eapFastConfiguration", m.eap_fast_configuration),
    },
    Field {
        name: "eapType",
        read: |m, n| set_if_present(&mut m.eap_type, enum_value(n)),
        write: |m, w| write_enum(w, "eapType", m.eap_type),
    },
    Field {
        name: "innerAuthenticationProtocolForEapTtls",
        read: |m, n| {
            set_if_present(
                &mut m.inner_authentication_protocol_for_eap_ttls,
                enum_value(n),
            )
        },
        write: |m, w| {
            write_enum(
                w,
                "innerAuthenticationProtocolForEapTtls",
                m.inner_authentication_protocol_for_eap_ttls,
            )
        },
    },
    Field {
        name: "outerIdentityPrivacyTemporaryValue",
        read: |m, n| set_if_present(&mut m.outer_identity_privacy_temporary_value, n.string_value()),
        write: |m, w| {
            w.write_string_value(
                "outerIdentityPrivacyTemporaryValue",
                m.outer_identity_privacy_temporary_value.as_deref(),
            )
        },
    },
    Field {
        name: "passwordFormatString",
        read: |m, n| set_if_present(&mut m.password_format_string, n.string_value()),
        write: |m, w| w.write_string_value("passwordFormatString", m.password_format_string.as_deref()),
    },
    Field {
        name: "rootCertificatesForServerValidation",
        read: |m, n| {
            set_if_present(
                &mut m.root_certificates_for_server_validation,
                collection_of_object_values(n),
            )
        },
        write: |m, w| {
            write_object_collection(
                w,
                "rootCertificatesForServerValidation",
                m.root_certificates_for_server_validation.as_deref(),
            )
        },
    },
    Field {
        name: "trustedServerCertificateNames",
        read: |m, n| {
            set_if_present(
                &mut m.trusted_server_certificate_names,
                collection_of_primitive_values(n),
            )
        },
        write: |m, w| {
            write_primitive_collection(
                w,
                "trustedServerCertificateNames",
                m.trusted_server_certificate_names.as_deref(),
            )
        },
    },
    Field {
        name: "usernameFormatString",
        read: |m, n| set_if_present(&mut m.username_format_string, n.string_value()),
        write: |m, w| w.write_string_value("usernameFormatString", m.username_format_string.as_deref()),
    },
];

parsable!(
    IosEnterpriseWiFiConfiguration,
    extends ios_wi_fi_configuration: IosWiFiConfiguration,
    FIELDS
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_round_trip;
    use crate::types::device_configuration::AnyDeviceConfiguration;
    use crate::types::ios_wi_fi_configuration::WiFiSecurityType;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn eap_type_literals() {
        let literals: Vec<String> = EapType::iter().map(|v| v.to_string()).collect();
        assert_eq!(
            literals,
            ["eapTls", "leap", "eapSim", "eapTtls", "peap", "eapFast", "teap"]
        );
    }

    #[test]
    fn inner_authentication_literals() {
        let literals: Vec<String> = NonEapAuthenticationMethodForEapTtlsType::iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(
            literals,
            [
                "unencryptedPassword",
                "challengeHandshakeAuthenticationProtocol",
                "microsoftChap",
                "microsoftChapVersionTwo"
            ]
        );
        assert_eq!(
            EapFastConfiguration::UseProtectedAccessCredentialAndProvisionAnonymously.as_ref(),
            "useProtectedAccessCredentialAndProvisionAnonymously"
        );
        assert_eq!(
            WiFiAuthenticationMethod::UsernameAndPassword.to_string(),
            "usernameAndPassword"
        );
    }

    #[test]
    fn two_levels_of_inheritance_round_trip() {
        let content = json!({
            "id": "wifi-1",
            "@odata.type": "#microsoft.graph.iosEnterpriseWiFiConfiguration",
            "displayName": "Corp 802.1X",
            "version": 1,
            "connectAutomatically": true,
            "ssid": "corp-secure",
            "wiFiSecurityType": "wpaEnterprise",
            "authenticationMethod": "certificate",
            "eapType": "eapTls",
            "rootCertificatesForServerValidation": [
                {
                    "id": "root-1",
                    "@odata.type": "#microsoft.graph.iosTrustedRootCertificate",
                    "certFileName": "root.cer",
                },
            ],
            "trustedServerCertificateNames": ["radius.contoso.com"],
            "usernameFormatString": "{{username}}@contoso.com",
        });

        let parsed: AnyDeviceConfiguration = assert_round_trip(&content);
        let AnyDeviceConfiguration::IosEnterpriseWiFiConfiguration(profile) = parsed else {
            panic!("expected an enterprise Wi-Fi profile");
        };
        // Properties from each level of the hierarchy.
        assert_eq!(profile.id.as_deref(), Some("wifi-1"));
        assert_eq!(profile.version, Some(1));
        assert_eq!(profile.wi_fi_security_type, Some(WiFiSecurityType::WpaEnterprise));
        assert_eq!(profile.eap_type, Some(EapType::EapTls));

        let roots = profile.root_certificates_for_server_validation.unwrap();
        assert_eq!(roots[0].cert_file_name.as_deref(), Some("root.cer"));
    }

    #[test]
    fn derived_properties_do_not_leak_into_base_type() {
        let content = json!({
            "@odata.type": "#microsoft.graph.iosWiFiConfiguration",
            "ssid": "corp",
            "eapType": "peap",
        });
        let parsed: AnyDeviceConfiguration = crate::from_value(&content).unwrap();
        let AnyDeviceConfiguration::IosWiFiConfiguration(profile) = parsed else {
            panic!("expected a plain iOS Wi-Fi profile");
        };
        assert_eq!(profile.additional_data.get("eapType"), Some(&json!("peap")));
    }
}
