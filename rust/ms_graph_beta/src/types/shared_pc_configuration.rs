/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to SharedPcConfiguration."]
use strum::{AsRefStr, Display, EnumIter, EnumString};
use time::Time;

use crate::serialization::{
    enum_value, object_value, parsable, set_if_present, write_enum, write_object, Field, GraphEnum,
};
use crate::types::device_configuration::DeviceConfiguration;
use crate::types::shared_pc_account_manager_policy::SharedPcAccountManagerPolicy;

/// Tri-state setting used across Intune policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum Enablement {
    NotConfigured,
    Enabled,
    Disabled,
}

impl GraphEnum for Enablement {
    const NAME: &'static str = "enablement";
}

/// Windows shared PC mode profile.
#[derive(Clone, Debug, PartialEq)]
pub struct SharedPcConfiguration {
    pub device_configuration: DeviceConfiguration,
    #[doc = "Specifies how accounts are managed on a shared PC. Only applies when disableAccountManager is false."]
    pub account_manager_policy: Option<SharedPcAccountManagerPolicy>,
    #[doc = "Specifies whether local storage is allowed on a shared PC."]
    pub allow_local_storage: Option<bool>,
    #[doc = "Disables the account manager for shared PC mode."]
    pub disable_account_manager: Option<bool>,
    #[doc = "Specifies whether the default shared PC education environment policies should be disabled. For Windows 10 RS2 and later, this policy will be applied without setting Enabled to true."]
    pub disable_edu_policies: Option<bool>,
    #[doc = "Specifies whether the default shared PC power policies should be disabled."]
    pub disable_power_policies: Option<bool>,
    #[doc = "Disables the requirement to sign in whenever the device wakes up from sleep mode."]
    pub disable_sign_in_on_resume: Option<bool>,
    #[doc = "Enables shared PC mode and applies the shared pc policies."]
    pub enabled: Option<bool>,
    pub fast_first_sign_in: Option<Enablement>,
    #[doc = "Specifies the time in seconds that a device must sit idle before the PC goes to sleep. Setting this value to 0 prevents the sleep timeout from occurring."]
    pub idle_time_before_sleep_in_seconds: Option<i32>,
    #[doc = "Specifies the display text for the account shown on the sign-in screen which launches the app specified by SetKioskAppUserModelId. Only applies when KioskAppUserModelId is set."]
    pub kiosk_app_display_name: Option<String>,
    #[doc = "Specifies the application user model ID of the app to use with assigned access."]
    pub kiosk_app_user_model_id: Option<String>,
    pub local_storage: Option<Enablement>,
    #[doc = "Specifies the daily start time of maintenance hour."]
    pub maintenance_start_time: Option<Time>,
    pub set_account_manager: Option<Enablement>,
    pub set_edu_policies: Option<Enablement>,
    pub set_power_policies: Option<Enablement>,
    pub sign_in_on_resume: Option<Enablement>,
}

impl SharedPcConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.sharedPCConfiguration";

    pub fn new() -> Self {
        let mut device_configuration = DeviceConfiguration::new();
        device_configuration.odata_type = Some(Self::ODATA_TYPE.to_string());
        SharedPcConfiguration {
            device_configuration,
            account_manager_policy: None,
            allow_local_storage: None,
            disable_account_manager: None,
            disable_edu_policies: None,
            disable_power_policies: None,
            disable_sign_in_on_resume: None,
            enabled: None,
            fast_first_sign_in: None,
            idle_time_before_sleep_in_seconds: None,
            kiosk_app_display_name: None,
            kiosk_app_user_model_id: None,
            local_storage: None,
            maintenance_start_time: None,
            set_account_manager: None,
            set_edu_policies: None,
            set_power_policies: None,
            sign_in_on_resume: None,
        }
    }
}

impl Default for SharedPcConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

const FIELDS: &[Field<SharedPcConfiguration>] = &[
    Field {
        name: "accountManagerPolicy",
        read: |m, n| set_if_present(&mut m.account_manager_policy, object_value(n)),
        write: |m, w| write_object(w, "accountManagerPolicy", m.account_manager_policy.as_ref()),
    },
    Field {
        name: "allowLocalStorage",
        read: |m, n| set_if_present(&mut m.allow_local_storage, n.bool_value()),
        write: |m, w| w.write_bool_value("allowLocalStorage", m.allow_local_storage),
    },
    Field {
        name: "disableAccountManager",
        read: |m, n| set_if_present(&mut m.disable_account_manager, n.bool_value()),
        write: |m, w| w.write_bool_value("disableAccountManager", m.disable_account_manager),
    },
    Field {
        name: "disableEduPolicies",
        read: |m, n| set_if_present(&mut m.disable_edu_policies, n.bool_value()),
        write: |m, w| w.write_bool_value("disableEduPolicies", m.disable_edu_policies),
    },
    Field {
        name: "disablePowerPolicies",
        read: |m, n| set_if_present(&mut m.disable_power_policies, n.bool_value()),
        write: |m, w| w.write_bool_value("disablePowerPolicies", m.disable_power_policies),
    },
    Field {
        name: "disableSignInOnResume",
        read: |m, n| set_if_present(&mut m.disable_sign_in_on_resume, n.bool_value()),
        write: |m, w| w.write_bool_value("disableSignInOnResume", m.disable_sign_in_on_resume),
    },
    Field {
        name: "enabled",
        read: |m, n| set_if_present(&mut m.enabled, n.bool_value()),
        write: |m, w| w.write_bool_value("enabled", m.enabled),
    },
    Field {
        name: "fastFirstSignIn",
        read: |m, n| set_if_present(&mut m.fast_first_sign_in, enum_value(n)),
        write: |m, w| write_enum(w, "fastFirstSignIn", m.fast_first_sign_in),
    },
    Field {
        name: "idleTimeBeforeSleepInSeconds",
        read: |m, n| set_if_present(&mut m.idle_time_before_sleep_in_seconds, n.i32_value()),
        write: |m, w| {
            w.write_i32_value(
                "idleTimeBeforeSleepInSeconds",
                m.idle_time_before_sleep_in_seconds,
            )
        },
    },
    Field {
        name: "kioskAppDisplayName",
        read: |m, n| set_if_present(&mut m.kiosk_app_display_name, n.string_value()),
        write: |m, w| w.write_string_value("kioskAppDisplayName", m.kiosk_app_display_name.as_deref()),
    },
    Field {
        name: "kioskAppUserModelId",
        read: |m, n| set_if_present(&mut m.kiosk_app_user_model_id, n.string_value()),
        write: |m, w| {
            w.write_string_value("kioskAppUserModelId", m.kiosk_app_user_model_id.as_deref())
        },
    },
    Field {
        name: "localStorage",
        read: |m, n| set_if_present(&mut m.local_storage, enum_value(n)),
        write: |m, w| write_enum(w, "localStorage", m.local_storage),
    },
    Field {
        name: "maintenanceStartTime",
        read: |m, n| set_if_present(&mut m.maintenance_start_time, n.time_only_value()),
        write: |m, w| w.write_time_only_value("maintenanceStartTime", m.maintenance_start_time.as_ref()),
    },
    Field {
        name: "setAccountManager",
        read: |m, n| set_if_present(&mut m.set_account_manager, enum_value(n)),
        write: |m, w| write_enum(w, "setAccountManager", m.set_account_manager),
    },
    Field {
        name: "setEduPolicies",
        read: |m, n| set_if_present(&mut m.set_edu_policies, enum_value(n)),
        write: |m, w| write_enum(w, "setEduPolicies", m.set_edu_policies),
    },
    Field {
        name: "setPowerPolicies",
        read: |m, n| set_if_present(&mut m.set_power_policies, enum_value(n)),
        write: |m, w| write_enum(w, "setPowerPolicies", m.set_power_policies),
    },
    Field {
        name: "signInOnResume",
        read: |m, n| set_if_present(&mut m.sign_in_on_resume, enum_value(n)),
        write: |m, w| write_enum(w, "signInOnResume", m.sign_in_on_resume),
    },
];

parsable!(SharedPcConfiguration, extends device_configuration: DeviceConfiguration, FIELDS);
