/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to ExclusionGroupAssignmentTarget."]
use crate::serialization::{parsable, Field};
use crate::types::group_assignment_target::GroupAssignmentTarget;

/// Represents a group that should be excluded from an assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct ExclusionGroupAssignmentTarget {
    pub group_assignment_target: GroupAssignmentTarget,
}

impl ExclusionGroupAssignmentTarget {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.exclusionGroupAssignmentTarget";

    pub fn new() -> Self {
        ExclusionGroupAssignmentTarget {
            group_assignment_target: GroupAssignmentTarget::with_odata_type(Self::ODATA_TYPE),
        }
    }
}

impl Default for ExclusionGroupAssignmentTarget {
    fn default() -> Self {
        Self::new()
    }
}

const FIELDS: &[Field<ExclusionGroupAssignmentTarget>] = &[];

parsable!(
    ExclusionGroupAssignmentTarget,
    extends group_assignment_target: GroupAssignmentTarget,
    FIELDS
);
