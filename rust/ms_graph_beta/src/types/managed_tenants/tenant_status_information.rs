/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to TenantStatusInformation."]
use strum::{AsRefStr, Display, EnumIter, EnumString};
use time::OffsetDateTime;

use crate::serialization::{
    collection_of_object_values, enum_value, parsable, set_if_present, write_enum,
    write_object_collection, AdditionalData, Field, GraphEnum, ODATA_TYPE,
};
use crate::types::managed_tenants::workload_status::WorkloadStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum DelegatedPrivilegeStatus {
    None,
    DelegatedAdminPrivileges,
    UnknownFutureValue,
    GranularDelegatedAdminPrivileges,
    // The service spells this literal "Delegeted".
    DelegatedAndGranularDelegetedAdminPrivileges,
}

impl GraphEnum for DelegatedPrivilegeStatus {
    const NAME: &'static str = "managedTenants.delegatedPrivilegeStatus";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum TenantOnboardingStatus {
    Ineligible,
    InProcess,
    Active,
    Inactive,
    UnknownFutureValue,
}

impl GraphEnum for TenantOnboardingStatus {
    const NAME: &'static str = "managedTenants.tenantOnboardingStatus";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum TenantOnboardingEligibilityReason {
    None,
    ContractType,
    DelegatedAdminPrivileges,
    UsersCount,
    License,
    UnknownFutureValue,
}

impl GraphEnum for TenantOnboardingEligibilityReason {
    const NAME: &'static str = "managedTenants.tenantOnboardingEligibilityReason";
}

/// Onboarding state of a tenant managed through Microsoft 365 Lighthouse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TenantStatusInformation {
    pub delegated_privilege_status: Option<DelegatedPrivilegeStatus>,
    #[doc = "The date and time the delegated admin privileges status was updated. Optional. Read-only."]
    pub last_delegated_privilege_refresh_date_time: Option<OffsetDateTime>,
    pub odata_type: Option<String>,
    #[doc = "The identifier for the account that offboarded the managed tenant. Optional. Read-only."]
    pub offboarded_by_user_id: Option<String>,
    #[doc = "The date and time when the managed tenant was offboarded. Optional. Read-only."]
    pub offboarded_date_time: Option<OffsetDateTime>,
    #[doc = "The identifier for the account that onboarded the managed tenant. Optional. Read-only."]
    pub onboarded_by_user_id: Option<String>,
    #[doc = "The date and time when the managed tenant was onboarded. Optional. Read-only."]
    pub onboarded_date_time: Option<OffsetDateTime>,
    pub onboarding_status: Option<TenantOnboardingStatus>,
    pub tenant_onboarding_eligibility_reason: Option<TenantOnboardingEligibilityReason>,
    #[doc = "The collection of workload statues for the managed tenant. Optional. Read-only."]
    pub workload_statuses: Option<Vec<WorkloadStatus>>,
    pub additional_data: AdditionalData,
}

impl TenantStatusInformation {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<TenantStatusInformation>] = &[
    Field {
        name: "delegatedPrivilegeStatus",
        read: |m, n| set_if_present(&mut m.delegated_privilege_status, enum_value(n)),
        write: |m, w| write_enum(w, "delegatedPrivilegeStatus", m.delegated_privilege_status),
    },
    Field {
        name: "lastDelegatedPrivilegeRefreshDateTime",
        read: |m, n| {
            set_if_present(&mut m.last_delegated_privilege_refresh_date_time, n.date_time_value())
        },
        write: |m, w| {
            w.write_date_time_value(
                "lastDelegatedPrivilegeRefreshDateTime",
                m.last_delegated_privilege_refresh_date_time.as_ref(),
            )
        },
    },
    Field {
        name: ODATA_TYPE,
        read: |m, n| set_if_present(&mut m.odata_type, n.string_value()),
        write: |m, w| w.write_string_value(ODATA_TYPE, m.odata_type.as_deref()),
    },
    Field {
        name: "offboardedByUserId",
        read: |m, n| set_if_present(&mut m.offboarded_by_user_id, n.string_value()),
        write: |m, w| {
            w.write_string_value("offboardedByUserId", m.offboarded_by_user_id.as_deref())
        },
    },
    Field {
        name: "offboardedDateTime",
        read: |m, n| set_if_present(&mut m.offboarded_date_time, n.date_time_value()),
        write: |m, w| {
            w.write_date_time_value("offboardedDateTime", m.offboarded_date_time.as_ref())
        },
    },
    Field {
        name: "onboardedByUserId",
        read: |m, n| set_if_present(&mut m.onboarded_by_user_id, n.string_value()),
        write: |m, w| w.write_string_value("onboardedByUserId", m.onboarded_by_user_id.as_deref()),
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
    Field {
        name: "tenantOnboardingEligibilityReason",
        read: |m, n| set_if_present(&mut m.tenant_onboarding_eligibility_reason, enum_value(n)),
        write: |m, w| {
            write_enum(w, "tenantOnboardingEligibilityReason", m.tenant_onboarding_eligibility_reason)
        },
    },
    Field {
        name: "workloadStatuses",
        read: |m, n| set_if_present(&mut m.workload_statuses, collection_of_object_values(n)),
        write: |m, w| {
            write_object_collection(w, "workloadStatuses", m.workload_statuses.as_deref())
        },
    },
];

parsable!(root TenantStatusInformation, FIELDS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_round_trip;
    use crate::types::managed_tenants::workload_status::WorkloadOnboardingStatus;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn privilege_status_literals() {
        let literals: Vec<String> = DelegatedPrivilegeStatus::iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(
            literals,
            [
                "none",
                "delegatedAdminPrivileges",
                "unknownFutureValue",
                "granularDelegatedAdminPrivileges",
                "delegatedAndGranularDelegetedAdminPrivileges"
            ]
        );

        let literals: Vec<String> = TenantOnboardingStatus::iter().map(|v| v.to_string()).collect();
        assert_eq!(
            literals,
            ["ineligible", "inProcess", "active", "inactive", "unknownFutureValue"]
        );

        let literals: Vec<String> = TenantOnboardingEligibilityReason::iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(
            literals,
            [
                "none",
                "contractType",
                "delegatedAdminPrivileges",
                "usersCount",
                "license",
                "unknownFutureValue"
            ]
        );
    }

    #[test]
    fn status_round_trips_with_workloads() {
        let content = json!({
            "delegatedPrivilegeStatus": "granularDelegatedAdminPrivileges",
            "@odata.type": "#microsoft.graph.managedTenants.tenantStatusInformation",
            "onboardedDateTime": "2022-11-04T18:12:44Z",
            "onboardingStatus": "active",
            "workloadStatuses": [
                {
                    "displayName": "Intune",
                    "@odata.type": "#microsoft.graph.managedTenants.workloadStatus",
                    "onboardingStatus": "onboarded",
                },
                {
                    "displayName": "Defender",
                    "onboardingStatus": "notOnboarded",
                    "retiredSetting": 1,
                },
            ],
        });
        let status: TenantStatusInformation = assert_round_trip(&content);
        assert_eq!(status.onboarding_status, Some(TenantOnboardingStatus::Active));

        let workloads = status.workload_statuses.unwrap();
        assert_eq!(
            workloads[1].onboarding_status,
            Some(WorkloadOnboardingStatus::NotOnboarded)
        );
        assert_eq!(workloads[1].additional_data["retiredSetting"], json!(1));
    }
}
