/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to DeviceConfiguration, the root of the Intune device configuration profile hierarchy."]
use std::sync::LazyLock;

use time::OffsetDateTime;

use crate::serialization::discriminator::{DiscriminatorRegistry, Variant};
use crate::serialization::{
    collection_of_object_values, collection_of_primitive_values, object_value, parsable,
    set_if_present, write_object, write_object_collection, write_primitive_collection,
    AdditionalData, Field, Parsable, ParseNode, SerializationWriter,
};
use crate::types::android_trusted_root_certificate::AndroidTrustedRootCertificate;
use crate::types::device_configuration_assignment::DeviceConfigurationAssignment;
use crate::types::device_configuration_device_overview::DeviceConfigurationDeviceOverview;
use crate::types::device_management_applicability_rule_os_version::DeviceManagementApplicabilityRuleOsVersion;
use crate::types::entity::Entity;
use crate::types::ios_enterprise_wi_fi_configuration::IosEnterpriseWiFiConfiguration;
use crate::types::ios_trusted_root_certificate::IosTrustedRootCertificate;
use crate::types::ios_wi_fi_configuration::IosWiFiConfiguration;
use crate::types::shared_pc_configuration::SharedPcConfiguration;
use crate::types::windows_wifi_configuration::WindowsWifiConfiguration;
use crate::Error;

/// Device configuration properties shared by every platform profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceConfiguration {
    pub entity: Entity,
    #[doc = "The list of assignments for the device configuration profile."]
    pub assignments: Option<Vec<DeviceConfigurationAssignment>>,
    #[doc = "DateTime the object was created."]
    pub created_date_time: Option<OffsetDateTime>,
    #[doc = "Admin provided description of the Device Configuration."]
    pub description: Option<String>,
    #[doc = "The OS version applicability rule for this policy."]
    pub device_management_applicability_rule_os_version:
        Option<DeviceManagementApplicabilityRuleOsVersion>,
    #[doc = "Device Configuration devices status overview."]
    pub device_status_overview: Option<DeviceConfigurationDeviceOverview>,
    #[doc = "Admin provided name of the device configuration."]
    pub display_name: Option<String>,
    #[doc = "DateTime the object was last modified."]
    pub last_modified_date_time: Option<OffsetDateTime>,
    #[doc = "List of Scope Tags for this Entity instance."]
    pub role_scope_tag_ids: Option<Vec<String>>,
    #[doc = "Indicates whether or not the underlying Device Configuration supports the assignment of scope tags."]
    pub supports_scope_tags: Option<bool>,
    #[doc = "Version of the device configuration."]
    pub version: Option<i32>,
}

impl DeviceConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceConfiguration";

    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<DeviceConfiguration>] = &[
    Field {
        name: "assignments",
        read: |m, n| set_if_present(&mut m.assignments, collection_of_object_values(n)),
        write: |m, w| write_object_collection(w, "assignments", m.assignments.as_deref()),
    },
    Field {
        name: "createdDateTime",
        read: |m, n| set_if_present(&mut m.created_date_time, n.date_time_value()),
        write: |m, w| w.write_date_time_value("createdDateTime", m.created_date_time.as_ref()),
    },
    Field {
        name: "description",
        read: |m, n| set_if_present(&mut m.description, n.string_value()),
        write: |m, w| w.write_string_value("description", m.description.as_deref()),
    },
    Field {
        name: "deviceManagementApplicabilityRuleOsVersion",
        read: |m, n| {
            set_if_present(
                &mut m.device_management_applicability_rule_os_version,
                object_value(n),
            )
        },
        write: |m, w| {
            write_object(
                w,
                "deviceManagementApplicabilityRuleOsVersion",
                m.device_management_applicability_rule_os_version.as_ref(),
            )
        },
    },
    Field {
        name: "deviceStatusOverview",
        read: |m, n| set_if_present(&mut m.device_status_overview, object_value(n)),
        write: |m, w| write_object(w, "deviceStatusOverview", m.device_status_overview.as_ref()),
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
    Field {
        name: "roleScopeTagIds",
        read: |m, n| set_if_present(&mut m.role_scope_tag_ids, collection_of_primitive_values(n)),
        write: |m, w| write_primitive_collection(w, "roleScopeTagIds", m.role_scope_tag_ids.as_deref()),
    },
    Field {
        name: "supportsScopeTags",
        read: |m, n| set_if_present(&mut m.supports_scope_tags, n.bool_value()),
        write: |m, w| w.write_bool_value("supportsScopeTags", m.supports_scope_tags),
    },
    Field {
        name: "version",
        read: |m, n| set_if_present(&mut m.version, n.i32_value()),
        write: |m, w| w.write_i32_value("version", m.version),
    },
];

parsable!(DeviceConfiguration, extends entity: Entity, FIELDS);

/// Any member of the device configuration hierarchy, as chosen by the
/// payload's `@odata.type`.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyDeviceConfiguration {
    DeviceConfiguration(DeviceConfiguration),
    IosTrustedRootCertificate(IosTrustedRootCertificate),
    AndroidTrustedRootCertificate(AndroidTrustedRootCertificate),
    IosWiFiConfiguration(IosWiFiConfiguration),
    IosEnterpriseWiFiConfiguration(IosEnterpriseWiFiConfiguration),
    WindowsWifiConfiguration(WindowsWifiConfiguration),
    SharedPcConfiguration(SharedPcConfiguration),
}

static REGISTRY: LazyLock<DiscriminatorRegistry<AnyDeviceConfiguration>> = LazyLock::new(|| {
    DiscriminatorRegistry::new(
        || AnyDeviceConfiguration::DeviceConfiguration(DeviceConfiguration::new()),
        &[
            Variant {
                tag: DeviceConfiguration::ODATA_TYPE,
                create: || AnyDeviceConfiguration::DeviceConfiguration(DeviceConfiguration::new()),
            },
            Variant {
                tag: IosTrustedRootCertificate::ODATA_TYPE,
                create: || {
                    AnyDeviceConfiguration::IosTrustedRootCertificate(
                        IosTrustedRootCertificate::new(),
                    )
                },
            },
            Variant {
                tag: AndroidTrustedRootCertificate::ODATA_TYPE,
                create: || {
                    AnyDeviceConfiguration::AndroidTrustedRootCertificate(
                        AndroidTrustedRootCertificate::new(),
                    )
                },
            },
            Variant {
                tag: IosWiFiConfiguration::ODATA_TYPE,
                create: || AnyDeviceConfiguration::IosWiFiConfiguration(IosWiFiConfiguration::new()),
            },
            Variant {
                tag: IosEnterpriseWiFiConfiguration::ODATA_TYPE,
                create: || {
                    AnyDeviceConfiguration::IosEnterpriseWiFiConfiguration(
                        IosEnterpriseWiFiConfiguration::new(),
                    )
                },
            },
            Variant {
                tag: WindowsWifiConfiguration::ODATA_TYPE,
                create: || {
                    AnyDeviceConfiguration::WindowsWifiConfiguration(WindowsWifiConfiguration::new())
                },
            },
            Variant {
                tag: SharedPcConfiguration::ODATA_TYPE,
                create: || AnyDeviceConfiguration::SharedPcConfiguration(SharedPcConfiguration::new()),
            },
        ],
    )
});

impl AnyDeviceConfiguration {
    /// Whether `tag` names a member of this hierarchy.
    pub fn is_known_type(tag: &str) -> bool {
        REGISTRY.contains(tag)
    }

    /// The properties common to every device configuration.
    pub fn base(&self) -> &DeviceConfiguration {
        match self {
            Self::DeviceConfiguration(m) => m,
            Self::IosTrustedRootCertificate(m) => m,
            Self::AndroidTrustedRootCertificate(m) => m,
            Self::IosWiFiConfiguration(m) => m,
            Self::IosEnterpriseWiFiConfiguration(m) => m,
            Self::WindowsWifiConfiguration(m) => m,
            Self::SharedPcConfiguration(m) => m,
        }
    }

    pub fn base_mut(&mut self) -> &mut DeviceConfiguration {
        match self {
            Self::DeviceConfiguration(m) => m,
            Self::IosTrustedRootCertificate(m) => m,
            Self::AndroidTrustedRootCertificate(m) => m,
            Self::IosWiFiConfiguration(m) => m,
            Self::IosEnterpriseWiFiConfiguration(m) => m,
            Self::WindowsWifiConfiguration(m) => m,
            Self::SharedPcConfiguration(m) => m,
        }
    }

    fn as_parsable(&self) -> &dyn Parsable {
        match self {
            Self::DeviceConfiguration(m) => m,
            Self::IosTrustedRootCertificate(m) => m,
            Self::AndroidTrustedRootCertificate(m) => m,
            Self::IosWiFiConfiguration(m) => m,
            Self::IosEnterpriseWiFiConfiguration(m) => m,
            Self::WindowsWifiConfiguration(m) => m,
            Self::SharedPcConfiguration(m) => m,
        }
    }

    fn as_parsable_mut(&mut self) -> &mut dyn Parsable {
        match self {
            Self::DeviceConfiguration(m) => m,
            Self::IosTrustedRootCertificate(m) => m,
            Self::AndroidTrustedRootCertificate(m) => m,
            Self::IosWiFiConfiguration(m) => m,
            Self::IosEnterpriseWiFiConfiguration(m) => m,
            Self::WindowsWifiConfiguration(m) => m,
            Self::SharedPcConfiguration(m) => m,
        }
    }
}

impl Default for AnyDeviceConfiguration {
    fn default() -> Self {
        Self::DeviceConfiguration(DeviceConfiguration::new())
    }
}

impl Parsable for AnyDeviceConfiguration {
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

macro_rules! impl_from_variant {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for AnyDeviceConfiguration {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_variant!(
    DeviceConfiguration,
    IosTrustedRootCertificate,
    AndroidTrustedRootCertificate,
    IosWiFiConfiguration,
    IosEnterpriseWiFiConfiguration,
    WindowsWifiConfiguration,
    SharedPcConfiguration,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_round_trip, assert_serialized_content};
    use crate::types::device_and_app_management_assignment_target::AnyDeviceAndAppManagementAssignmentTarget;
    use crate::types::device_configuration_assignment::DeviceConfigAssignmentIntent;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn every_variant_is_registered() {
        let variants: Vec<AnyDeviceConfiguration> = vec![
            DeviceConfiguration::new().into(),
            IosTrustedRootCertificate::new().into(),
            AndroidTrustedRootCertificate::new().into(),
            IosWiFiConfiguration::new().into(),
            IosEnterpriseWiFiConfiguration::new().into(),
            WindowsWifiConfiguration::new().into(),
            SharedPcConfiguration::new().into(),
        ];
        for variant in variants {
            let tag = variant
                .base()
                .odata_type
                .clone()
                .unwrap_or_else(|| DeviceConfiguration::ODATA_TYPE.to_string());
            assert!(AnyDeviceConfiguration::is_known_type(&tag), "{tag}");

            let parsed: AnyDeviceConfiguration =
                crate::from_value(&json!({"@odata.type": tag})).unwrap();
            assert_eq!(
                std::mem::discriminant(&parsed),
                std::mem::discriminant(&variant)
            );
        }
    }

    #[test]
    fn base_properties_round_trip() {
        let content = json!({
            "id": "b1c1a2f5-0000-4000-8000-000000000001",
            "@odata.type": "#microsoft.graph.deviceConfiguration",
            "assignments": [
                {
                    "id": "assignment-1",
                    "intent": "apply",
                    "target": {
                        "@odata.type": "#microsoft.graph.groupAssignmentTarget",
                        "groupId": "group-1",
                    },
                },
            ],
            "createdDateTime": "2023-01-02T03:04:05Z",
            "description": "Baseline",
            "deviceStatusOverview": {
                "id": "overview",
                "errorCount": 2,
                "successCount": 40,
            },
            "displayName": "Corporate baseline",
            "roleScopeTagIds": ["0", "7"],
            "supportsScopeTags": true,
            "version": 4,
        });

        let parsed: AnyDeviceConfiguration = assert_round_trip(&content);
        let base = parsed.base();
        assert_eq!(
            base.created_date_time,
            Some(datetime!(2023-01-02 03:04:05 UTC))
        );
        assert_eq!(
            base.role_scope_tag_ids.as_deref(),
            Some(&["0".to_string(), "7".to_string()][..])
        );
        assert_eq!(
            base.device_status_overview
                .as_ref()
                .and_then(|overview| overview.success_count),
            Some(40)
        );

        let assignments = base.assignments.as_deref().unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].intent, Some(DeviceConfigAssignmentIntent::Apply));
        let Some(AnyDeviceAndAppManagementAssignmentTarget::GroupAssignmentTarget(target)) =
            &assignments[0].target
        else {
            panic!("expected a group assignment target");
        };
        assert_eq!(target.group_id.as_deref(), Some("group-1"));
    }

    #[test]
    fn error_in_nested_value_aborts_decode() {
        let content = json!({
            "@odata.type": "#microsoft.graph.iosTrustedRootCertificate",
            "displayName": "Root",
            "deviceStatusOverview": {"errorCount": "two"},
        });
        let result = crate::from_value::<AnyDeviceConfiguration>(&content);
        assert!(matches!(
            result,
            Err(Error::UnexpectedType {
                expected: "integer",
                ..
            })
        ));
    }

    #[test]
    fn additional_data_written_after_inherited_and_own_properties() {
        let mut configuration = IosTrustedRootCertificate::new();
        configuration
            .additional_data
            .insert("deviceSettingStateSummaries".to_string(), json!([]));
        configuration.cert_file_name = Some("root.cer".to_string());
        configuration.display_name = Some("Root".to_string());
        configuration.id = Some("1".to_string());

        assert_serialized_content(
            &AnyDeviceConfiguration::from(configuration),
            json!({
                "id": "1",
                "@odata.type": "#microsoft.graph.iosTrustedRootCertificate",
                "displayName": "Root",
                "certFileName": "root.cer",
                "deviceSettingStateSummaries": [],
            }),
        );
    }

    #[test]
    fn base_mut_reaches_shared_properties() {
        let mut configuration = AnyDeviceConfiguration::from(WindowsWifiConfiguration::new());
        configuration.base_mut().version = Some(9);
        let AnyDeviceConfiguration::WindowsWifiConfiguration(windows) = &configuration else {
            panic!("variant changed");
        };
        assert_eq!(windows.version, Some(9));
    }
}
