/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to AllLicensedUsersAssignmentTarget."]
use crate::serialization::{parsable, Field};
use crate::types::device_and_app_management_assignment_target::DeviceAndAppManagementAssignmentTarget;

/// Represents an assignment to all licensed users in the tenant.
#[derive(Clone, Debug, PartialEq)]
pub struct AllLicensedUsersAssignmentTarget {
    pub device_and_app_management_assignment_target: DeviceAndAppManagementAssignmentTarget,
}

impl AllLicensedUsersAssignmentTarget {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.allLicensedUsersAssignmentTarget";

    pub fn new() -> Self {
        AllLicensedUsersAssignmentTarget {
            device_and_app_management_assignment_target:
                DeviceAndAppManagementAssignmentTarget::with_odata_type(Self::ODATA_TYPE),
        }
    }
}

impl Default for AllLicensedUsersAssignmentTarget {
    fn default() -> Self {
        Self::new()
    }
}

// No properties beyond the inherited ones.
const FIELDS: &[Field<AllLicensedUsersAssignmentTarget>] = &[];

parsable!(
    AllLicensedUsersAssignmentTarget,
    extends device_and_app_management_assignment_target: DeviceAndAppManagementAssignmentTarget,
    FIELDS
);
