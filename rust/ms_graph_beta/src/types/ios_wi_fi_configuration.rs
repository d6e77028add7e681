/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to IosWiFiConfiguration."]
use std::sync::LazyLock;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::serialization::discriminator::{DiscriminatorRegistry, Variant};
use crate::serialization::{
    enum_value, parsable, set_if_present, write_enum, AdditionalData, Field, GraphEnum, Parsable,
    ParseNode, SerializationWriter,
};
use crate::types::device_configuration::{AnyDeviceConfiguration, DeviceConfiguration};
use crate::types::ios_enterprise_wi_fi_configuration::IosEnterpriseWiFiConfiguration;
use crate::Error;

/// Wi-Fi security types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum WiFiSecurityType {
    Open,
    WpaPersonal,
    WpaEnterprise,
    Wep,
    #[strum(to_string = "wpa2Personal")]
    Wpa2Personal,
    #[strum(to_string = "wpa2Enterprise")]
    Wpa2Enterprise,
}

impl GraphEnum for WiFiSecurityType {
    const NAME: &'static str = "wiFiSecurityType";
}

/// How a device finds its Wi-Fi proxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum WiFiProxySetting {
    None,
    Manual,
    Automatic,
}

impl GraphEnum for WiFiProxySetting {
    const NAME: &'static str = "wiFiProxySetting";
}

/// By providing the configurations in this profile you can instruct the iOS
/// device to connect to desired Wi-Fi endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct IosWiFiConfiguration {
    pub device_configuration: DeviceConfiguration,
    #[doc = "Connect automatically when this network is in range."]
    pub connect_automatically: Option<bool>,
    #[doc = "Connect when the network is not broadcasting its name (SSID)."]
    pub connect_when_network_name_is_hidden: Option<bool>,
    #[doc = "If set to true, forces devices connecting using this Wi-Fi profile to present their actual Wi-Fi MAC address instead of a random MAC address."]
    pub disable_mac_address_randomization: Option<bool>,
    #[doc = "Network Name"]
    pub network_name: Option<String>,
    #[doc = "Pre-shared key for WEP or WPA personal Wi-Fi network."]
    pub pre_shared_key: Option<String>,
    #[doc = "URL of the proxy server automatic configuration script when automatic configuration is selected."]
    pub proxy_automatic_configuration_url: Option<String>,
    #[doc = "IP Address or DNS hostname of the proxy server when manual configuration is selected."]
    pub proxy_manual_address: Option<String>,
    #[doc = "Port of the proxy server when manual configuration is selected."]
    pub proxy_manual_port: Option<i32>,
    pub proxy_settings: Option<WiFiProxySetting>,
    #[doc = "This is the name of the Wi-Fi network that is broadcast to all devices."]
    pub ssid: Option<String>,
    pub wi_fi_security_type: Option<WiFiSecurityType>,
}

impl IosWiFiConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.iosWiFiConfiguration";

    pub fn new() -> Self {
        Self::with_odata_type(Self::ODATA_TYPE)
    }

    /// Build the shared Wi-Fi properties for a profile type extending this one.
    pub(crate) fn with_odata_type(odata_type: &str) -> Self {
        let mut device_configuration = DeviceConfiguration::new();
        device_configuration.odata_type = Some(odata_type.to_string());
        IosWiFiConfiguration {
            device_configuration,
            connect_automatically: None,
            connect_when_network_name_is_hidden: None,
            disable_mac_address_randomization: None,
            network_name: None,
            pre_shared_key: None,
            proxy_automatic_configuration_url: None,
            proxy_manual_address: None,
            proxy_manual_port: None,
            proxy_settings: None,
            ssid: None,
            wi_fi_security_type: None,
        }
    }
}

impl Default for IosWiFiConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

const FIELDS: &[Field<IosWiFiConfiguration>] = &[
    Field {
        name: "connectAutomatically",
        read: |m, n| set_if_present(&mut m.connect_automatically, n.bool_value()),
        write: |m, w| w.write_bool_value("connectAutomatically", m.connect_automatically),
    },
    Field {
        name: "connectWhenNetworkNameIsHidden",
        read: |m, n| set_if_present(&mut m.connect_when_network_name_is_hidden, n.bool_value()),
        write: |m, w| {
            w.write_bool_value(
                "connectWhenNetworkNameIsHidden",
                m.connect_when_network_name_is_hidden,
            )
        },
    },
    Field {
        name: "disableMacAddressRandomization",
        read: |m, n| set_if_present(&mut m.disable_mac_address_randomization, n.bool_value()),
        write: |m, w| {
            w.write_bool_value(
                "disableMacAddressRandomization",
                m.disable_mac_address_randomization,
            )
        },
    },
    Field {
        name: "networkName",
        read: |m, n| set_if_present(&mut m.network_name, n.string_value()),
        write: |m, w| w.write_string_value("networkName", m.network_name.as_deref()),
    },
    Field {
        name: "preSharedKey",
        read: |m, n| set_if_present(&mut m.pre_shared_key, n.string_value()),
        write: |m, w| w.write_string_value("preSharedKey", m.pre_shared_key.as_deref()),
    },
    Field {
        name: "proxyAutomaticConfigurationUrl",
        read: |m, n| set_if_present(&mut m.proxy_automatic_configuration_url, n.string_value()),
        write: |m, w| {
            w.write_string_value(
                "proxyAutomaticConfigurationUrl",
                m.proxy_automatic_configuration_url.as_deref(),
            )
        },
    },
    Field {
        name: "proxyManualAddress",
        read: |m, n| set_if_present(&mut m.proxy_manual_address, n.string_value()),
        write: |m, w| w.write_string_value("proxyManualAddress", m.proxy_manual_address.as_deref()),
    },
    Field {
        name: "proxyManualPort",
        read: |m, n| set_if_present(&mut m.proxy_manual_port, n.i32_value()),
        write: |m, w| w.write_i32_value("proxyManualPort", m.proxy_manual_port),
    },
    Field {
        name: "proxySettings",
        read: |m, n| set_if_present(&mut m.proxy_settings, enum_value(n)),
        write: |m, w| write_enum(w, "proxySettings", m.proxy_settings),
    },
    Field {
        name: "ssid",
        read: |m, n| set_if_present(&mut m.ssid, n.string_value()),
        write: |m, w| w.write_string_value("ssid", m.ssid.as_deref()),
    },
    Field {
        name: "wiFiSecurityType",
        read: |m, n| set_if_present(&mut m.wi_fi_security_type, enum_value(n)),
        write: |m, w| write_enum(w, "wiFiSecurityType", m.wi_fi_security_type),
    },
];

parsable!(IosWiFiConfiguration, extends device_configuration: DeviceConfiguration, FIELDS);

/// An iOS Wi-Fi profile or one of its specializations, as chosen by the
/// payload's `@odata.type`.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyIosWiFiConfiguration {
    IosWiFiConfiguration(IosWiFiConfiguration),
    IosEnterpriseWiFiConfiguration(IosEnterpriseWiFiConfiguration),
}

static REGISTRY: LazyLock<DiscriminatorRegistry<AnyIosWiFiConfiguration>> = LazyLock::new(|| {
    DiscriminatorRegistry::new(
        || AnyIosWiFiConfiguration::IosWiFiConfiguration(IosWiFiConfiguration::new()),
        &[
            Variant {
                tag: IosWiFiConfiguration::ODATA_TYPE,
                create: || AnyIosWiFiConfiguration::IosWiFiConfiguration(IosWiFiConfiguration::new()),
            },
            Variant {
                tag: IosEnterpriseWiFiConfiguration::ODATA_TYPE,
                create: || {
                    AnyIosWiFiConfiguration::IosEnterpriseWiFiConfiguration(
                        IosEnterpriseWiFiConfiguration::new(),
                    )
                },
            },
        ],
    )
});

impl AnyIosWiFiConfiguration {
    /// The Wi-Fi properties shared by every variant.
    pub fn base(&self) -> &IosWiFiConfiguration {
        match self {
            Self::IosWiFiConfiguration(m) => m,
            Self::IosEnterpriseWiFiConfiguration(m) => m,
        }
    }

    pub fn base_mut(&mut self) -> &mut IosWiFiConfiguration {
        match self {
            Self::IosWiFiConfiguration(m) => m,
            Self::IosEnterpriseWiFiConfiguration(m) => m,
        }
    }

    fn as_parsable(&self) -> &dyn Parsable {
        match self {
            Self::IosWiFiConfiguration(m) => m,
            Self::IosEnterpriseWiFiConfiguration(m) => m,
        }
    }

    fn as_parsable_mut(&mut self) -> &mut dyn Parsable {
        match self {
            Self::IosWiFiConfiguration(m) => m,
            Self::IosEnterpriseWiFiConfiguration(m) => m,
        }
    }
}

impl Parsable for AnyIosWiFiConfiguration {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        REGISTRY.create(node)
    }

    fn read_property(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        self.as_parsable_mut().read_property(name, node)
    }

    fn write_properties(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.as_parsable().write_properties(writer)
    }

    fn additional_data(&self) -> &AdditionalData {
        self.as_parsable().additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.as_parsable_mut().additional_data_mut()
    }
}

impl From<IosWiFiConfiguration> for AnyIosWiFiConfiguration {
    fn from(value: IosWiFiConfiguration) -> Self {
        Self::IosWiFiConfiguration(value)
    }
}

impl From<IosEnterpriseWiFiConfiguration> for AnyIosWiFiConfiguration {
    fn from(value: IosEnterpriseWiFiConfiguration) -> Self {
        Self::IosEnterpriseWiFiConfiguration(value)
    }
}

impl From<AnyIosWiFiConfiguration> for AnyDeviceConfiguration {
    fn from(value: AnyIosWiFiConfiguration) -> Self {
        match value {
            AnyIosWiFiConfiguration::IosWiFiConfiguration(m) => m.into(),
            AnyIosWiFiConfiguration::IosEnterpriseWiFiConfiguration(m) => m.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_round_trip, assert_serialized_content};
    use crate::Error;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn security_type_literals() {
        let literals: Vec<String> = WiFiSecurityType::iter().map(|v| v.to_string()).collect();
        assert_eq!(
            literals,
            [
                "open",
                "wpaPersonal",
                "wpaEnterprise",
                "wep",
                "wpa2Personal",
                "wpa2Enterprise"
            ]
        );
        for variant in WiFiSecurityType::iter() {
            assert_eq!(WiFiSecurityType::parse(variant.as_ref()).unwrap(), variant);
        }
    }

    #[test]
    fn proxy_setting_literals() {
        let literals: Vec<String> = WiFiProxySetting::iter().map(|v| v.to_string()).collect();
        assert_eq!(literals, ["none", "manual", "automatic"]);
    }

    #[test]
    fn enum_literals_are_case_sensitive() {
        let result = WiFiProxySetting::parse("Manual");
        assert!(matches!(
            result,
            Err(Error::UnknownEnumValue {
                enum_name: "wiFiProxySetting",
                ref value,
            }) if value == "Manual"
        ));
    }

    #[test]
    fn unknown_enum_literal_fails_the_decode() {
        let content = json!({
            "ssid": "corp",
            "wiFiSecurityType": "wpa3Personal",
        });
        let result = crate::from_value::<IosWiFiConfiguration>(&content);
        assert!(matches!(
            result,
            Err(Error::UnknownEnumValue { value, .. }) if value == "wpa3Personal"
        ));
    }

    #[test]
    fn enterprise_tag_routes_to_the_enterprise_profile() {
        let content = json!({
            "@odata.type": "#microsoft.graph.iosEnterpriseWiFiConfiguration",
            "ssid": "corp",
            "eapType": "eapTls",
        });
        let parsed: AnyIosWiFiConfiguration = assert_round_trip(&content);
        let AnyIosWiFiConfiguration::IosEnterpriseWiFiConfiguration(enterprise) = &parsed else {
            panic!("expected an enterprise profile, got {parsed:?}");
        };
        assert!(enterprise.additional_data.is_empty());
        assert_eq!(parsed.base().ssid.as_deref(), Some("corp"));

        let widened = AnyDeviceConfiguration::from(parsed);
        assert!(matches!(
            widened,
            AnyDeviceConfiguration::IosEnterpriseWiFiConfiguration(_)
        ));
    }

    #[test]
    fn unknown_wi_fi_tag_falls_back_to_the_plain_profile() {
        let content = json!({
            "@odata.type": "#microsoft.graph.iosPasspointWiFiConfiguration",
            "ssid": "hotspot",
            "realm": "example.net",
        });
        let parsed: AnyIosWiFiConfiguration = assert_round_trip(&content);
        let AnyIosWiFiConfiguration::IosWiFiConfiguration(profile) = &parsed else {
            panic!("expected the plain profile, got {parsed:?}");
        };
        assert_eq!(profile.ssid.as_deref(), Some("hotspot"));
        assert_eq!(
            profile.odata_type.as_deref(),
            Some("#microsoft.graph.iosPasspointWiFiConfiguration")
        );
        assert_eq!(profile.additional_data.get("realm"), Some(&json!("example.net")));

        let options = crate::ParseOptions {
            unknown_discriminator: crate::UnknownDiscriminator::Reject,
        };
        let result = crate::from_value_with_options::<AnyIosWiFiConfiguration>(&content, &options);
        assert!(matches!(result, Err(Error::UnknownDiscriminator(_))));
    }

    #[test]
    fn profile_round_trips() {
        let content = json!({
            "@odata.type": "#microsoft.graph.iosWiFiConfiguration",
            "displayName": "Corp Wi-Fi",
            "connectAutomatically": true,
            "connectWhenNetworkNameIsHidden": false,
            "networkName": "Corp",
            "proxyManualAddress": "proxy.contoso.com",
            "proxyManualPort": 8080,
            "proxySettings": "manual",
            "ssid": "corp",
            "wiFiSecurityType": "wpa2Personal",
        });
        let profile: IosWiFiConfiguration = assert_round_trip(&content);
        assert_eq!(profile.proxy_settings, Some(WiFiProxySetting::Manual));
        assert_eq!(
            profile.wi_fi_security_type,
            Some(WiFiSecurityType::Wpa2Personal)
        );
    }

    #[test]
    fn unset_enums_are_skipped_even_when_emitting_nulls() {
        let mut profile = IosWiFiConfiguration::new();
        profile.ssid = Some("corp".to_string());
        assert_serialized_content(
            &profile,
            json!({
                "@odata.type": "#microsoft.graph.iosWiFiConfiguration",
                "ssid": "corp",
            }),
        );

        let written = crate::to_value_with_options(
            &profile,
            &crate::WriterOptions {
                emit_null_values: true,
            },
        )
        .unwrap();
        let written = written.as_object().unwrap();
        assert_eq!(written["connectAutomatically"], json!(null));
        assert!(!written.contains_key("proxySettings"));
        assert!(!written.contains_key("roleScopeTagIds"));
    }
}
