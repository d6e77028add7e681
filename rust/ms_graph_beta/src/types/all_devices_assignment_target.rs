/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to AllDevicesAssignmentTarget."]
use crate::serialization::{parsable, Field};
use crate::types::device_and_app_management_assignment_target::DeviceAndAppManagementAssignmentTarget;

/// Represents an assignment to all managed devices in the tenant.
#[derive(Clone, Debug, PartialEq)]
pub struct AllDevicesAssignmentTarget {
    pub device_and_app_management_assignment_target: DeviceAndAppManagementAssignmentTarget,
}

impl AllDevicesAssignmentTarget {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.allDevicesAssignmentTarget";

    pub fn new() -> Self {
        AllDevicesAssignmentTarget {
            device_and_app_management_assignment_target:
                DeviceAndAppManagementAssignmentTarget::with_odata_type(Self::ODATA_TYPE),
        }
    }
}

impl Default for AllDevicesAssignmentTarget {
    fn default() -> Self {
        Self::new()
    }
}

// No properties beyond the inherited ones.
const FIELDS: &[Field<AllDevicesAssignmentTarget>] = &[];

parsable!(
    AllDevicesAssignmentTarget,
    extends device_and_app_management_assignment_target: DeviceAndAppManagementAssignmentTarget,
    FIELDS
);
