/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

pub mod all_devices_assignment_target;
pub mod all_licensed_users_assignment_target;
pub mod android_trusted_root_certificate;
pub mod collection_response;
pub mod device_and_app_management_assignment_target;
pub mod device_configuration;
pub mod device_configuration_assignment;
pub mod device_configuration_device_overview;
pub mod device_management_applicability_rule_os_version;
pub mod entity;
pub mod exclusion_group_assignment_target;
pub mod group_assignment_target;
pub mod hardware_information;
pub mod ios_enterprise_wi_fi_configuration;
pub mod ios_trusted_root_certificate;
pub mod ios_wi_fi_configuration;
pub mod item;
pub mod item_category;
pub mod managed_tenants;
pub mod office365_active_user_detail;
pub mod picture;
pub mod shared_pc_account_manager_policy;
pub mod shared_pc_configuration;
pub mod windows_wifi_configuration;
