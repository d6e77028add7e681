/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to GroupAssignmentTarget."]
use std::sync::LazyLock;

use crate::serialization::discriminator::{DiscriminatorRegistry, Variant};
use crate::serialization::{
    parsable, set_if_present, AdditionalData, Field, Parsable, ParseNode, SerializationWriter,
};
use crate::types::device_and_app_management_assignment_target::{
    AnyDeviceAndAppManagementAssignmentTarget, DeviceAndAppManagementAssignmentTarget,
};
use crate::types::exclusion_group_assignment_target::ExclusionGroupAssignmentTarget;
use crate::Error;

/// Represents an assignment to a group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupAssignmentTarget {
    pub device_and_app_management_assignment_target: DeviceAndAppManagementAssignmentTarget,
    #[doc = "The group Id that is the assignment target."]
    pub group_id: Option<String>,
}

impl GroupAssignmentTarget {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.groupAssignmentTarget";

    pub fn new() -> Self {
        Self::with_odata_type(Self::ODATA_TYPE)
    }

    pub(crate) fn with_odata_type(odata_type: &str) -> Self {
        GroupAssignmentTarget {
            device_and_app_management_assignment_target:
                DeviceAndAppManagementAssignmentTarget::with_odata_type(odata_type),
            group_id: None,
        }
    }
}

impl Default for GroupAssignmentTarget {
    fn default() -> Self {
        Self::new()
    }
}

const FIELDS: &[Field<GroupAssignmentTarget>] = &[Field {
    name: "groupId",
    read: |m, n| set_if_present(&mut m.group_id, n.string_value()),
    write: |m, w| w.write_string_value("groupId", m.group_id.as_deref()),
}];

parsable!(
    GroupAssignmentTarget,
    extends device_and_app_management_assignment_target: DeviceAndAppManagementAssignmentTarget,
    FIELDS
);

/// A group target, included or excluded, as chosen by the payload's
/// `@odata.type`.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyGroupAssignmentTarget {
    GroupAssignmentTarget(GroupAssignmentTarget),
    ExclusionGroupAssignmentTarget(ExclusionGroupAssignmentTarget),
}

static REGISTRY: LazyLock<DiscriminatorRegistry<AnyGroupAssignmentTarget>> = LazyLock::new(|| {
    DiscriminatorRegistry::new(
        || AnyGroupAssignmentTarget::GroupAssignmentTarget(GroupAssignmentTarget::new()),
        &[
            Variant {
                tag: GroupAssignmentTarget::ODATA_TYPE,
                create: || AnyGroupAssignmentTarget::GroupAssignmentTarget(GroupAssignmentTarget::new()),
            },
            Variant {
                tag: ExclusionGroupAssignmentTarget::ODATA_TYPE,
                create: || {
                    AnyGroupAssignmentTarget::ExclusionGroupAssignmentTarget(
                        ExclusionGroupAssignmentTarget::new(),
                    )
                },
            },
        ],
    )
});

impl AnyGroupAssignmentTarget {
    pub fn base(&self) -> &GroupAssignmentTarget {
        match self {
            Self::GroupAssignmentTarget(m) => m,
            Self::ExclusionGroupAssignmentTarget(m) => m,
        }
    }

    /// Whether members of the group are left out of the assignment.
    pub fn is_exclusion(&self) -> bool {
        matches!(self, Self::ExclusionGroupAssignmentTarget(_))
    }

    fn as_parsable(&self) -> &dyn Parsable {
        match self {
            Self::GroupAssignmentTarget(m) => m,
            Self::ExclusionGroupAssignmentTarget(m) => m,
        }
    }

    fn as_parsable_mut(&mut self) -> &mut dyn Parsable {
        match self {
            Self::GroupAssignmentTarget(m) => m,
            Self::ExclusionGroupAssignmentTarget(m) => m,
        }
    }
}

impl Parsable for AnyGroupAssignmentTarget {
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

impl From<GroupAssignmentTarget> for AnyGroupAssignmentTarget {
    fn from(value: GroupAssignmentTarget) -> Self {
        Self::GroupAssignmentTarget(value)
    }
}

impl From<ExclusionGroupAssignmentTarget> for AnyGroupAssignmentTarget {
    fn from(value: ExclusionGroupAssignmentTarget) -> Self {
        Self::ExclusionGroupAssignmentTarget(value)
    }
}

impl From<AnyGroupAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: AnyGroupAssignmentTarget) -> Self {
        match value {
            AnyGroupAssignmentTarget::GroupAssignmentTarget(m) => m.into(),
            AnyGroupAssignmentTarget::ExclusionGroupAssignmentTarget(m) => m.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_round_trip;
    use crate::{ParseOptions, UnknownDiscriminator};
    use serde_json::json;

    #[test]
    fn exclusion_tag_routes_to_exclusion_target() {
        let content = json!({
            "@odata.type": "#microsoft.graph.exclusionGroupAssignmentTarget",
            "groupId": "group-2",
        });
        let target: AnyGroupAssignmentTarget = assert_round_trip(&content);
        assert!(target.is_exclusion());
        assert_eq!(target.base().group_id.as_deref(), Some("group-2"));

        let widened = AnyDeviceAndAppManagementAssignmentTarget::from(target);
        assert!(matches!(
            widened,
            AnyDeviceAndAppManagementAssignmentTarget::ExclusionGroupAssignmentTarget(_)
        ));
    }

    #[test]
    fn plain_and_missing_tags_build_a_group_target() {
        let content = json!({
            "@odata.type": "#microsoft.graph.groupAssignmentTarget",
            "groupId": "group-1",
        });
        let target: AnyGroupAssignmentTarget = assert_round_trip(&content);
        assert!(!target.is_exclusion());

        let target: AnyGroupAssignmentTarget =
            crate::from_value(&json!({"groupId": "group-1"})).unwrap();
        assert!(matches!(target, AnyGroupAssignmentTarget::GroupAssignmentTarget(_)));
    }

    #[test]
    fn unknown_group_tag_falls_back_or_is_rejected() {
        let content = json!({
            "@odata.type": "#microsoft.graph.dynamicGroupAssignmentTarget",
            "groupId": "group-3",
            "rule": "user.department -eq \"Sales\"",
        });
        let target: AnyGroupAssignmentTarget = assert_round_trip(&content);
        assert!(!target.is_exclusion());
        assert_eq!(
            target.additional_data().get("rule"),
            Some(&json!("user.department -eq \"Sales\""))
        );

        let options = ParseOptions {
            unknown_discriminator: UnknownDiscriminator::Reject,
        };
        let result = crate::from_value_with_options::<AnyGroupAssignmentTarget>(&content, &options);
        assert!(matches!(result, Err(Error::UnknownDiscriminator(_))));
    }
}
