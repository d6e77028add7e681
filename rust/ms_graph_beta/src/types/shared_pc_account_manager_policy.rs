/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to SharedPcAccountManagerPolicy."]
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::serialization::{
    enum_value, parsable, set_if_present, write_enum, AdditionalData, Field, GraphEnum, ODATA_TYPE,
};

/// When a shared PC removes cached accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SharedPcAccountDeletionPolicyType {
    Immediate,
    DiskSpaceThreshold,
    DiskSpaceThresholdOrInactiveThreshold,
}

impl GraphEnum for SharedPcAccountDeletionPolicyType {
    const NAME: &'static str = "sharedPCAccountDeletionPolicyType";
}

/// Account deletion settings for a shared PC.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SharedPcAccountManagerPolicy {
    pub account_deletion_policy: Option<SharedPcAccountDeletionPolicyType>,
    #[doc = "Sets the percentage of available disk space a PC should have before it stops deleting cached shared PC accounts. Only applies when AccountDeletionPolicy is DiskSpaceThreshold or DiskSpaceThresholdOrInactiveThreshold. Valid values 0 to 100"]
    pub cache_accounts_above_disk_free_percentage: Option<i32>,
    #[doc = "Specifies when the accounts will start being deleted when they have not been logged on during the specified period, given as number of days. Only applies when AccountDeletionPolicy is DiskSpaceThreshold or DiskSpaceThresholdOrInactiveThreshold."]
    pub inactive_threshold_days: Option<i32>,
    pub odata_type: Option<String>,
    #[doc = "Sets the percentage of disk space remaining on a PC before cached accounts will be deleted to free disk space. Accounts that have been inactive the longest will be deleted first. Only applies when AccountDeletionPolicy is DiskSpaceThresholdOrInactiveThreshold. Valid values 0 to 100"]
    pub remove_accounts_below_disk_free_percentage: Option<i32>,
    pub additional_data: AdditionalData,
}

impl SharedPcAccountManagerPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<SharedPcAccountManagerPolicy>] = &[
    Field {
        name: "accountDeletionPolicy",
        read: |m, n| set_if_present(&mut m.account_deletion_policy, enum_value(n)),
        write: |m, w| write_enum(w, "accountDeletionPolicy", m.account_deletion_policy),
    },
    Field {
        name: "cacheAccountsAboveDiskFreePercentage",
        read: |m, n| set_if_present(&mut m.cache_accounts_above_disk_free_percentage, n.i32_value()),
        write: |m, w| {
            w.write_i32_value(
                "cacheAccountsAboveDiskFreePercentage",
                m.cache_accounts_above_disk_free_percentage,
            )
        },
    },
    Field {
        name: "inactiveThresholdDays",
        read: |m, n| set_if_present(&mut m.inactive_threshold_days, n.i32_value()),
        write: |m, w| w.write_i32_value("inactiveThresholdDays", m.inactive_threshold_days),
    },
    Field {
        name: ODATA_TYPE,
        read: |m, n| set_if_present(&mut m.odata_type, n.string_value()),
        write: |m, w| w.write_string_value(ODATA_TYPE, m.odata_type.as_deref()),
    },
    Field {
        name: "removeAccountsBelowDiskFreePercentage",
        read: |m, n| set_if_present(&mut m.remove_accounts_below_disk_free_percentage, n.i32_value()),
        write: |m, w| {
            w.write_i32_value(
                "removeAccountsBelowDiskFreePercentage",
                m.remove_accounts_below_disk_free_percentage,
            )
        },
    },
];

parsable!(root SharedPcAccountManagerPolicy, FIELDS);
