/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to DeviceManagementApplicabilityRuleOsVersion."]
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::serialization::{
    enum_value, parsable, set_if_present, write_enum, AdditionalData, Field, GraphEnum, ODATA_TYPE,
};

/// Supported applicability rule types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum DeviceManagementApplicabilityRuleType {
    Include,
    Exclude,
}

impl GraphEnum for DeviceManagementApplicabilityRuleType {
    const NAME: &'static str = "deviceManagementApplicabilityRuleType";
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceManagementApplicabilityRuleOsVersion {
    #[doc = "Max OS version for Applicability Rule."]
    pub max_os_version: Option<String>,
    #[doc = "Min OS version for Applicability Rule."]
    pub min_os_version: Option<String>,
    #[doc = "Name for object."]
    pub name: Option<String>,
    pub odata_type: Option<String>,
    pub rule_type: Option<DeviceManagementApplicabilityRuleType>,
    pub additional_data: AdditionalData,
}

impl DeviceManagementApplicabilityRuleOsVersion {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<DeviceManagementApplicabilityRuleOsVersion>] = &[
    Field {
        name: "maxOSVersion",
        read: |m, n| set_if_present(&mut m.max_os_version, n.string_value()),
        write: |m, w| w.write_string_value("maxOSVersion", m.max_os_version.as_deref()),
    },
    Field {
        name: "minOSVersion",
        read: |m, n| set_if_present(&mut m.min_os_version, n.string_value()),
        write: |m, w| w.write_string_value("minOSVersion", m.min_os_version.as_deref()),
    },
    Field {
        name: "name",
        read: |m, n| set_if_present(&mut m.name, n.string_value()),
        write: |m, w| w.write_string_value("name", m.name.as_deref()),
    },
    Field {
        name: ODATA_TYPE,
        read: |m, n| set_if_present(&mut m.odata_type, n.string_value()),
        write: |m, w| w.write_string_value(ODATA_TYPE, m.odata_type.as_deref()),
    },
    Field {
        name: "ruleType",
        read: |m, n| set_if_present(&mut m.rule_type, enum_value(n)),
        write: |m, w| write_enum(w, "ruleType", m.rule_type),
    },
];

parsable!(root DeviceManagementApplicabilityRuleOsVersion, FIELDS);
