/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to DeviceConfigurationAssignment."]
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::serialization::{
    enum_value, object_value, parsable, set_if_present, write_enum, write_object, Field, GraphEnum,
};
use crate::types::device_and_app_management_assignment_target::AnyDeviceAndAppManagementAssignmentTarget;
use crate::types::entity::Entity;

/// Whether an assignment applies or removes its configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum DeviceConfigAssignmentIntent {
    Apply,
    Remove,
}

impl GraphEnum for DeviceConfigAssignmentIntent {
    const NAME: &'static str = "deviceConfigAssignmentIntent";
}

/// Where an assignment came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum DeviceAndAppManagementAssignmentSource {
    Direct,
    PolicySets,
}

impl GraphEnum for DeviceAndAppManagementAssignmentSource {
    const NAME: &'static str = "deviceAndAppManagementAssignmentSource";
}

/// The device configuration assignment entity assigns an AAD group to a
/// specific device configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceConfigurationAssignment {
    pub entity: Entity,
    pub intent: Option<DeviceConfigAssignmentIntent>,
    pub source: Option<DeviceAndAppManagementAssignmentSource>,
    #[doc = "The identifier of the source of the assignment."]
    pub source_id: Option<String>,
    #[doc = "The assignment target for the device configuration."]
    pub target: Option<AnyDeviceAndAppManagementAssignmentTarget>,
}

impl DeviceConfigurationAssignment {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<DeviceConfigurationAssignment>] = &[
    Field {
        name: "intent",
        read: |m, n| set_if_present(&mut m.intent, enum_value(n)),
        write: |m, w| write_enum(w, "intent", m.intent),
    },
    Field {
        name: "source",
        read: |m, n| set_if_present(&mut m.source, enum_value(n)),
        write: |m, w| write_enum(w, "source", m.source),
    },
    Field {
        name: "sourceId",
        read: |m, n| set_if_present(&mut m.source_id, n.string_value()),
        write: |m, w| w.write_string_value("sourceId", m.source_id.as_deref()),
    },
    Field {
        name: "target",
        read: |m, n| set_if_present(&mut m.target, object_value(n)),
        write: |m, w| write_object(w, "target", m.target.as_ref()),
    },
];

parsable!(DeviceConfigurationAssignment, extends entity: Entity, FIELDS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_serialized_content;
    use crate::types::group_assignment_target::GroupAssignmentTarget;
    use crate::{Error, ParseOptions, UnknownDiscriminator};
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn assignment_enum_literals() {
        let intents: Vec<String> = DeviceConfigAssignmentIntent::iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(intents, ["apply", "remove"]);

        let sources: Vec<String> = DeviceAndAppManagementAssignmentSource::iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(sources, ["direct", "policySets"]);
    }

    #[test]
    fn nested_target_is_written_with_its_tag() {
        let mut target = GroupAssignmentTarget::new();
        target.group_id = Some("group-1".to_string());

        let mut assignment = DeviceConfigurationAssignment::new();
        assignment.id = Some("assignment-1".to_string());
        assignment.source = Some(DeviceAndAppManagementAssignmentSource::PolicySets);
        assignment.target = Some(target.into());

        assert_serialized_content(
            &assignment,
            json!({
                "id": "assignment-1",
                "source": "policySets",
                "target": {
                    "@odata.type": "#microsoft.graph.groupAssignmentTarget",
                    "groupId": "group-1",
                },
            }),
        );
    }

    #[test]
    fn reject_mode_reaches_nested_dispatch() {
        let content = json!({
            "id": "assignment-1",
            "target": {"@odata.type": "#microsoft.graph.someNewTarget"},
        });
        let options = ParseOptions {
            unknown_discriminator: UnknownDiscriminator::Reject,
        };
        let result =
            crate::from_value_with_options::<DeviceConfigurationAssignment>(&content, &options);
        assert!(matches!(result, Err(Error::UnknownDiscriminator(_))));
    }
}
