/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to DeviceConfigurationDeviceOverview."]
use time::OffsetDateTime;

use crate::serialization::{parsable, set_if_present, Field};
use crate::types::entity::Entity;

/// Per-device rollup of a configuration's deployment state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceConfigurationDeviceOverview {
    pub entity: Entity,
    #[doc = "Version of the policy for that overview"]
    pub configuration_version: Option<i32>,
    #[doc = "Number of devices in conflict"]
    pub conflict_count: Option<i32>,
    #[doc = "Number of error devices"]
    pub error_count: Option<i32>,
    #[doc = "Number of failed devices"]
    pub failed_count: Option<i32>,
    #[doc = "Last update time"]
    pub last_update_date_time: Option<OffsetDateTime>,
    #[doc = "Number of not applicable devices"]
    pub not_applicable_count: Option<i32>,
    #[doc = "Number of not applicable devices due to mismatch platform and policy"]
    pub not_applicable_platform_count: Option<i32>,
    #[doc = "Number of pending devices"]
    pub pending_count: Option<i32>,
    #[doc = "Number of succeeded devices"]
    pub success_count: Option<i32>,
}

impl DeviceConfigurationDeviceOverview {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<DeviceConfigurationDeviceOverview>] = &[
    Field {
        name: "configurationVersion",
        read: |m, n| set_if_present(&mut m.configuration_version, n.i32_value()),
        write: |m, w| w.write_i32_value("configurationVersion", m.configuration_version),
    },
    Field {
        name: "conflictCount",
        read: |m, n| set_if_present(&mut m.conflict_count, n.i32_value()),
        write: |m, w| w.write_i32_value("conflictCount", m.conflict_count),
    },
    Field {
        name: "errorCount",
        read: |m, n| set_if_present(&mut m.error_count, n.i32_value()),
        write: |m, w| w.write_i32_value("errorCount", m.error_count),
    },
    Field {
        name: "failedCount",
        read: |m, n| set_if_present(&mut m.failed_count, n.i32_value()),
        write: |m, w| w.write_i32_value("failedCount", m.failed_count),
    },
    Field {
        name: "lastUpdateDateTime",
        read: |m, n| set_if_present(&mut m.last_update_date_time, n.date_time_value()),
        write: |m, w| w.write_date_time_value("lastUpdateDateTime", m.last_update_date_time.as_ref()),
    },
    Field {
        name: "notApplicableCount",
        read: |m, n| set_if_present(&mut m.not_applicable_count, n.i32_value()),
        write: |m, w| w.write_i32_value("notApplicableCount", m.not_applicable_count),
    },
    Field {
        name: "notApplicablePlatformCount",
        read: |m, n| set_if_present(&mut m.not_applicable_platform_count, n.i32_value()),
        write: |m, w| w.write_i32_value("notApplicablePlatformCount", m.not_applicable_platform_count),
    },
    Field {
        name: "pendingCount",
        read: |m, n| set_if_present(&mut m.pending_count, n.i32_value()),
        write: |m, w| w.write_i32_value("pendingCount", m.pending_count),
    },
    Field {
        name: "successCount",
        read: |m, n| set_if_present(&mut m.success_count, n.i32_value()),
        write: |m, w| w.write_i32_value("successCount", m.success_count),
    },
];

parsable!(DeviceConfigurationDeviceOverview, extends entity: Entity, FIELDS);
