/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to DeviceAndAppManagementAssignmentTarget, the base of every assignment target."]
use std::sync::LazyLock;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::serialization::discriminator::{DiscriminatorRegistry, Variant};
use crate::serialization::{
    enum_value, parsable, set_if_present, write_enum, AdditionalData, Field, GraphEnum, Parsable,
    ParseNode, SerializationWriter, ODATA_TYPE,
};
use crate::types::all_devices_assignment_target::AllDevicesAssignmentTarget;
use crate::types::all_licensed_users_assignment_target::AllLicensedUsersAssignmentTarget;
use crate::types::exclusion_group_assignment_target::ExclusionGroupAssignmentTarget;
use crate::types::group_assignment_target::GroupAssignmentTarget;
use crate::Error;

/// How an assignment filter applies to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum DeviceAndAppManagementAssignmentFilterType {
    None,
    Include,
    Exclude,
}

impl GraphEnum for DeviceAndAppManagementAssignmentFilterType {
    const NAME: &'static str = "deviceAndAppManagementAssignmentFilterType";
}

/// Base type for assignment targets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceAndAppManagementAssignmentTarget {
    #[doc = "The ID of the filter for the target assignment."]
    pub device_and_app_management_assignment_filter_id: Option<String>,
    pub device_and_app_management_assignment_filter_type:
        Option<DeviceAndAppManagementAssignmentFilterType>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl DeviceAndAppManagementAssignmentTarget {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceAndAppManagementAssignmentTarget";

    pub fn new() -> Self {
        Self::default()
    }

    /// A base carrying the tag of the subtype being built.
    pub(crate) fn with_odata_type(odata_type: &str) -> Self {
        DeviceAndAppManagementAssignmentTarget {
            odata_type: Some(odata_type.to_string()),
            ..Self::default()
        }
    }
}

const FIELDS: &[Field<DeviceAndAppManagementAssignmentTarget>] = &[
    Field {
        name: "deviceAndAppManagementAssignmentFilterId",
        read: |m, n| {
            set_if_present(
                &mut m.device_and_app_management_assignment_filter_id,
                n.string_value(),
            )
        },
        write: |m, w| {
            w.write_string_value(
                "deviceAndAppManagementAssignmentFilterId",
                m.device_and_app_management_assignment_filter_id.as_deref(),
            )
        },
    },
    Field {
        name: "deviceAndAppManagementAssignmentFilterType",
        read: |m, n| {
            set_if_present(
                &mut m.device_and_app_management_assignment_filter_type,
                enum_value(n),
            )
        },
        write: |m, w| {
            write_enum(
                w,
                "deviceAndAppManagementAssignmentFilterType",
                m.device_and_app_management_assignment_filter_type,
            )
        },
    },
    Field {
        name: ODATA_TYPE,
        read: |m, n| set_if_present(&mut m.odata_type, n.string_value()),
        write: |m, w| w.write_string_value(ODATA_TYPE, m.odata_type.as_deref()),
    },
];

parsable!(root DeviceAndAppManagementAssignmentTarget, FIELDS);

/// Any assignment target, as chosen by the payload's `@odata.type`.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyDeviceAndAppManagementAssignmentTarget {
    DeviceAndAppManagementAssignmentTarget(DeviceAndAppManagementAssignmentTarget),
    AllDevicesAssignmentTarget(AllDevicesAssignmentTarget),
    AllLicensedUsersAssignmentTarget(AllLicensedUsersAssignmentTarget),
    GroupAssignmentTarget(GroupAssignmentTarget),
    ExclusionGroupAssignmentTarget(ExclusionGroupAssignmentTarget),
}

static REGISTRY: LazyLock<DiscriminatorRegistry<AnyDeviceAndAppManagementAssignmentTarget>> =
    LazyLock::new(|| {
        use AnyDeviceAndAppManagementAssignmentTarget as Any;

        DiscriminatorRegistry::new(
            || Any::DeviceAndAppManagementAssignmentTarget(DeviceAndAppManagementAssignmentTarget::new()),
            &[
                Variant {
                    tag: DeviceAndAppManagementAssignmentTarget::ODATA_TYPE,
                    create: || {
                        Any::DeviceAndAppManagementAssignmentTarget(
                            DeviceAndAppManagementAssignmentTarget::new(),
                        )
                    },
                },
                Variant {
                    tag: AllDevicesAssignmentTarget::ODATA_TYPE,
                    create: || Any::AllDevicesAssignmentTarget(AllDevicesAssignmentTarget::new()),
                },
                Variant {
                    tag: AllLicensedUsersAssignmentTarget::ODATA_TYPE,
                    create: || {
                        Any::AllLicensedUsersAssignmentTarget(AllLicensedUsersAssignmentTarget::new())
                    },
                },
                Variant {
                    tag: GroupAssignmentTarget::ODATA_TYPE,
                    create: || Any::GroupAssignmentTarget(GroupAssignmentTarget::new()),
                },
                Variant {
                    tag: ExclusionGroupAssignmentTarget::ODATA_TYPE,
                    create: || Any::ExclusionGroupAssignmentTarget(ExclusionGroupAssignmentTarget::new()),
                },
            ],
        )
    });

impl AnyDeviceAndAppManagementAssignmentTarget {
    pub fn base(&self) -> &DeviceAndAppManagementAssignmentTarget {
        match self {
            Self::DeviceAndAppManagementAssignmentTarget(m) => m,
            Self::AllDevicesAssignmentTarget(m) => m,
            Self::AllLicensedUsersAssignmentTarget(m) => m,
            Self::GroupAssignmentTarget(m) => m,
            Self::ExclusionGroupAssignmentTarget(m) => m,
        }
    }

    fn as_parsable(&self) -> &dyn Parsable {
        match self {
            Self::DeviceAndAppManagementAssignmentTarget(m) => m,
            Self::AllDevicesAssignmentTarget(m) => m,
            Self::AllLicensedUsersAssignmentTarget(m) => m,
            Self::GroupAssignmentTarget(m) => m,
            Self::ExclusionGroupAssignmentTarget(m) => m,
        }
    }

    fn as_parsable_mut(&mut self) -> &mut dyn Parsable {
        match self {
            Self::DeviceAndAppManagementAssignmentTarget(m) => m,
            Self::AllDevicesAssignmentTarget(m) => m,
            Self::AllLicensedUsersAssignmentTarget(m) => m,
            Self::GroupAssignmentTarget(m) => m,
            Self::ExclusionGroupAssignmentTarget(m) => m,
        }
    }
}

impl Parsable for AnyDeviceAndAppManagementAssignmentTarget {
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

impl From<GroupAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: GroupAssignmentTarget) -> Self {
        Self::GroupAssignmentTarget(value)
    }
}

impl From<ExclusionGroupAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: ExclusionGroupAssignmentTarget) -> Self {
        Self::ExclusionGroupAssignmentTarget(value)
    }
}

impl From<AllDevicesAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: AllDevicesAssignmentTarget) -> Self {
        Self::AllDevicesAssignmentTarget(value)
    }
}

impl From<AllLicensedUsersAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: AllLicensedUsersAssignmentTarget) -> Self {
        Self::AllLicensedUsersAssignmentTarget(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_round_trip;
    use serde_json::json;

    #[test]
    fn exclusion_group_inherits_group_id() {
        let content = json!({
            "deviceAndAppManagementAssignmentFilterId": "filter-1",
            "deviceAndAppManagementAssignmentFilterType": "exclude",
            "@odata.type": "#microsoft.graph.exclusionGroupAssignmentTarget",
            "groupId": "group-9",
        });
        let target: AnyDeviceAndAppManagementAssignmentTarget = assert_round_trip(&content);
        let AnyDeviceAndAppManagementAssignmentTarget::ExclusionGroupAssignmentTarget(exclusion) =
            &target
        else {
            panic!("expected an exclusion target, got {target:?}");
        };
        assert_eq!(exclusion.group_id.as_deref(), Some("group-9"));
        assert_eq!(
            target.base().device_and_app_management_assignment_filter_type,
            Some(DeviceAndAppManagementAssignmentFilterType::Exclude)
        );
    }

    #[test]
    fn targets_without_properties_still_carry_their_tag() {
        let written = crate::to_value(&AnyDeviceAndAppManagementAssignmentTarget::from(
            AllLicensedUsersAssignmentTarget::new(),
        ))
        .unwrap();
        assert_eq!(
            written,
            json!({"@odata.type": "#microsoft.graph.allLicensedUsersAssignmentTarget"})
        );

        let parsed: AnyDeviceAndAppManagementAssignmentTarget = crate::from_value(&written).unwrap();
        assert!(matches!(
            parsed,
            AnyDeviceAndAppManagementAssignmentTarget::AllLicensedUsersAssignmentTarget(_)
        ));
    }

    #[test]
    fn unknown_target_keeps_its_properties() {
        let content = json!({
            "@odata.type": "#microsoft.graph.configurationManagerCollectionAssignmentTarget",
            "collectionId": "SMS00001",
        });
        let target: AnyDeviceAndAppManagementAssignmentTarget = assert_round_trip(&content);
        assert!(matches!(
            target,
            AnyDeviceAndAppManagementAssignmentTarget::DeviceAndAppManagementAssignmentTarget(_)
        ));
        assert_eq!(
            target.additional_data().get("collectionId"),
            Some(&json!("SMS00001"))
        );
    }
}
