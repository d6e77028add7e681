/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to WindowsWifiConfiguration."]
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::serialization::{enum_value, parsable, set_if_present, write_enum, Field, GraphEnum};
use crate::types::device_configuration::DeviceConfiguration;
use crate::types::ios_wi_fi_configuration::{WiFiProxySetting, WiFiSecurityType};

/// Metered connection limit type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum MeteredConnectionLimitType {
    Unrestricted,
    Fixed,
    Variable,
}

impl GraphEnum for MeteredConnectionLimitType {
    const NAME: &'static str = "meteredConnectionLimitType";
}

#[derive(Clone, Debug, PartialEq)]
pub struct WindowsWifiConfiguration {
    pub device_configuration: DeviceConfiguration,
    pub connect_automatically: Option<bool>,
    pub connect_to_preferred_network: Option<bool>,
    pub connect_when_network_name_is_hidden: Option<bool>,
    #[doc = "Force FIPS compliance."]
    pub force_fips_compliance: Option<bool>,
    pub metered_connection_limit: Option<MeteredConnectionLimitType>,
    pub network_name: Option<String>,
    pub pre_shared_key: Option<String>,
    pub proxy_automatic_configuration_url: Option<String>,
    pub proxy_manual_address: Option<String>,
    pub proxy_manual_port: Option<i32>,
    pub proxy_setting: Option<WiFiProxySetting>,
    pub ssid: Option<String>,
    pub wifi_security_type: Option<WiFiSecurityType>,
}

impl WindowsWifiConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsWifiConfiguration";

    pub fn new() -> Self {
        let mut device_configuration = DeviceConfiguration::new();
        device_configuration.odata_type = Some(Self::ODATA_TYPE.to_string());
        WindowsWifiConfiguration {
            device_configuration,
            connect_automatically: None,
            connect_to_preferred_network: None,
            connect_when_network_name_is_hidden: None,
            force_fips_compliance: None,
            metered_connection_limit: None,
            network_name: None,
            pre_shared_key: None,
            proxy_automatic_configuration_url: None,
            proxy_manual_address: None,
            proxy_manual_port: None,
            proxy_setting: None,
            ssid: None,
            wifi_security_type: None,
        }
    }
}

impl Default for WindowsWifiConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

const FIELDS: &[Field<WindowsWifiConfiguration>] = &[
    Field {
        name: "connectAutomatically",
        read: |m, n| set_if_present(&mut m.connect_automatically, n.bool_value()),
        write: |m, w| w.write_bool_value("connectAutomatically", m.connect_automatically),
    },
    Field {
        name: "connectToPreferredNetwork",
        read: |m, n| set_if_present(&mut m.connect_to_preferred_network, n.bool_value()),
        write: |m, w| w.write_bool_value("connectToPreferredNetwork", m.connect_to_preferred_network),
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
        name: "forceFIPSCompliance",
        read: |m, n| set_if_present(&mut m.force_fips_compliance, n.bool_value()),
        write: |m, w| w.write_bool_value("forceFIPSCompliance", m.force_fips_compliance),
    },
    Field {
        name: "meteredConnectionLimit",
        read: |m, n| set_if_present(&mut m.metered_connection_limit, enum_value(n)),
        write: |m, w| write_enum(w, "meteredConnectionLimit", m.metered_connection_limit),
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
        name: "proxySetting",
        read: |m, n| set_if_present(&mut m.proxy_setting, enum_value(n)),
        write: |m, w| write_enum(w, "proxySetting", m.proxy_setting),
    },
    Field {
        name: "ssid",
        read: |m, n| set_if_present(&mut m.ssid, n.string_value()),
        write: |m, w| w.write_string_value("ssid", m.ssid.as_deref()),
    },
    Field {
        name: "wifiSecurityType",
        read: |m, n| set_if_present(&mut m.wifi_security_type, enum_value(n)),
        write: |m, w| write_enum(w, "wifiSecurityType", m.wifi_security_type),
    },
];

parsable!(WindowsWifiConfiguration, extends device_configuration: DeviceConfiguration, FIELDS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_round_trip;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn profile_round_trips() {
        let content = json!({
            "@odata.type": "#microsoft.graph.windowsWifiConfiguration",
            "connectAutomatically": true,
            "forceFIPSCompliance": false,
            "meteredConnectionLimit": "fixed",
            "proxyManualPort": 3128,
            "proxySetting": "automatic",
            "proxyAutomaticConfigurationUrl": "https://proxy.contoso.com/wpad.dat",
            "ssid": "corp",
            "wifiSecurityType": "wpa2Enterprise",
        });
        // The payload lists `proxyAutomaticConfigurationUrl` out of declaration
        // order, so compare against the written form rather than the input.
        let parsed: WindowsWifiConfiguration = crate::from_value(&content).unwrap();
        assert_eq!(
            parsed.metered_connection_limit,
            Some(MeteredConnectionLimitType::Fixed)
        );

        let written = crate::to_value(&parsed).unwrap();
        assert_eq!(written, content);
        let reparsed: WindowsWifiConfiguration = assert_round_trip(&written);
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn proxy_port_must_fit_in_int32() {
        let content = json!({"proxyManualPort": 1u64 << 40});
        let result = crate::from_value::<WindowsWifiConfiguration>(&content);
        assert!(matches!(
            result,
            Err(Error::InvalidValue { kind: "int32", .. })
        ));
    }
}
