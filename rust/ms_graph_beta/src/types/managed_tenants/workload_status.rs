/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to WorkloadStatus."]
use strum::{AsRefStr, Display, EnumIter, EnumString};
use time::OffsetDateTime;

use crate::serialization::{
    enum_value, parsable, set_if_present, write_enum, AdditionalData, Field, GraphEnum, ODATA_TYPE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum WorkloadOnboardingStatus {
    NotOnboarded,
    Onboarded,
    UnknownFutureValue,
}

impl GraphEnum for WorkloadOnboardingStatus {
    const NAME: &'static str = "managedTenants.workloadOnboardingStatus";
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkloadStatus {
    #[doc = "The display name for the workload. Required. Read-only."]
    pub display_name: Option<String>,
    pub odata_type: Option<String>,
    #[doc = "The date and time the workload was offboarded. Optional. Read-only."]
    pub offboarded_date_time: Option<OffsetDateTime>,
    #[doc = "The date and time the workload was onboarded. Optional. Read-only."]
    pub onboarded_date_time: Option<OffsetDateTime>,
    pub onboarding_status: Option<WorkloadOnboardingStatus>,
    pub additional_data: AdditionalData,
}

impl WorkloadStatus {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<WorkloadStatus>] = &[
    Field {
        name: "displayName",
        read: |m, n| set_if_present(&mut m.display_name, n.string_value()),
        write: |m, w| w.write_string_value("displayName", m.display_name.as_deref()),
    },
    Field {
        name: ODATA_TYPE,
        read: |m, n| set_if_present(&mut m.odata_type, n.string_value()),
        write: |m, w| w.write_string_value(ODATA_TYPE, m.odata_type.as_deref()),
    },
    Field {
        name: "offboardedDateTime",
        read: |m, n| set_if_present(&mut m.offboarded_date_time, n.date_time_value()),
        write: |m, w| {
            w.write_date_time_value("offboardedDateTime", m.offboarded_date_time.as_ref())
        },
    },
    Field {
        name: "onboardedDateTime",
        read: |m, n| set_if_present(&mut m.onboarded_date_time, n.date_time_value()),
        write: |m, w| w.write_date_time_value("onboardedDateTime", m.onboarded_date_time.as_ref()),
    },
    Field {
        name: "onboardingStatus",
        read: |m, n| set_if_present(&mut m.onboarding_status, enum_value(n)),
        write: |m, w| write_enum(w, "onboardingStatus", m.onboarding_status),
    },
];

parsable!(root WorkloadStatus, FIELDS);
