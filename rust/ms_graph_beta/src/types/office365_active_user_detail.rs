/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to Office365ActiveUserDetail, one row of the Microsoft 365 active user report."]
use time::Date;

use crate::serialization::{
    collection_of_primitive_values, parsable, set_if_present, write_primitive_collection, Field,
};
use crate::types::entity::Entity;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Office365ActiveUserDetail {
    pub entity: Entity,
    #[doc = "All the products assigned for the user."]
    pub assigned_products: Option<Vec<String>>,
    #[doc = "The date when the delete operation happened. Default value is 'null' when the user has not been deleted."]
    pub deleted_date: Option<Date>,
    #[doc = "The name displayed in the address book for the user."]
    pub display_name: Option<String>,
    pub exchange_last_activity_date: Option<Date>,
    pub exchange_license_assign_date: Option<Date>,
    pub has_exchange_license: Option<bool>,
    pub has_one_drive_license: Option<bool>,
    pub has_share_point_license: Option<bool>,
    pub has_skype_for_business_license: Option<bool>,
    pub has_teams_license: Option<bool>,
    pub has_yammer_license: Option<bool>,
    #[doc = "Whether this user has been deleted or soft deleted."]
    pub is_deleted: Option<bool>,
    pub one_drive_last_activity_date: Option<Date>,
    pub one_drive_license_assign_date: Option<Date>,
    #[doc = "The latest date of the content."]
    pub report_refresh_date: Option<Date>,
    pub share_point_last_activity_date: Option<Date>,
    pub share_point_license_assign_date: Option<Date>,
    pub skype_for_business_last_activity_date: Option<Date>,
    pub skype_for_business_license_assign_date: Option<Date>,
    pub teams_last_activity_date: Option<Date>,
    pub teams_license_assign_date: Option<Date>,
    #[doc = "The user principal name (UPN) of the user."]
    pub user_principal_name: Option<String>,
    pub yammer_last_activity_date: Option<Date>,
    pub yammer_license_assign_date: Option<Date>,
}

impl Office365ActiveUserDetail {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<Office365ActiveUserDetail>] = &[
    Field {
        name: "assignedProducts",
        read: |m, n| set_if_present(&mut m.assigned_products, collection_of_primitive_values(n)),
        write: |m, w| {
            write_primitive_collection(w, "assignedProducts", m.assigned_products.as_deref())
        },
    },
    Field {
        name: "deletedDate",
        read: |m, n| set_if_present(&mut m.deleted_date, n.date_only_value()),
        write: |m, w| w.write_date_only_value("deletedDate", m.deleted_date.as_ref()),
    },
    Field {
        name: "displayName",
        read: |m, n| set_if_present(&mut m.display_name, n.string_value()),
        write: |m, w| w.write_string_value("displayName", m.display_name.as_deref()),
    },
    Field {
        name: "exchangeLastActivityDate",
        read: |m, n| set_if_present(&mut m.exchange_last_activity_date, n.date_only_value()),
        write: |m, w| {
            w.write_date_only_value("exchangeLastActivityDate", m.exchange_last_activity_date.as_ref())
        },
    },
    Field {
        name: "exchangeLicenseAssignDate",
        read: |m, n| set_if_present(&mut m.exchange_license_assign_date, n.date_only_value()),
        write: |m, w| {
            w.write_date_only_value("exchangeLicenseAssignDate", m.exchange_license_assign_date.as_ref())
        },
    },
    Field {
        name: "hasExchangeLicense",
        read: |m, n| set_if_present(&mut m.has_exchange_license, n.bool_value()),
        write: |m, w| w.write_bool_value("hasExchangeLicense", m.has_exchange_license),
    },
    Field {
        name: "hasOneDriveLicense",
        read: |m, n| set_if_present(&mut m.has_one_drive_license, n.bool_value()),
        write: |m, w| w.write_bool_value("hasOneDriveLicense", m.has_one_drive_license),
    },
    Field {
        name: "hasSharePointLicense",
        read: |m, n| set_if_present(&mut m.has_share_point_license, n.bool_value()),
        write: |m, w| w.write_bool_value("hasSharePointLicense", m.has_share_point_license),
    },
    Field {
        name: "hasSkypeForBusinessLicense",
        read: |m, n| set_if_present(&mut m.has_skype_for_business_license, n.bool_value()),
        write: |m, w| {
            w.write_bool_value("hasSkypeForBusinessLicense", m.has_skype_for_business_license)
        },
    },
    Field {
        name: "hasTeamsLicense",
        read: |m, n| set_if_present(&mut m.has_teams_license, n.bool_value()),
        write: |m, w| w.write_bool_value("hasTeamsLicense", m.has_teams_license),
    },
    Field {
        name: "hasYammerLicense",
        read: |m, n| set_if_present(&mut m.has_yammer_license, n.bool_value()),
        write: |m, w| w.write_bool_value("hasYammerLicense", m.has_yammer_license),
    },
    Field {
        name: "isDeleted",
        read: |m, n| set_if_present(&mut m.is_deleted, n.bool_value()),
        write: |m, w| w.write_bool_value("isDeleted", m.is_deleted),
    },
    Field {
        name: "oneDriveLastActivityDate",
        read: |m, n| set_if_present(&mut m.one_drive_last_activity_date, n.date_only_value()),
        write: |m, w| {
            w.write_date_only_value("oneDriveLastActivityDate", m.one_drive_last_activity_date.as_ref())
        },
    },
    Field {
        name: "oneDriveLicenseAssignDate",
        read: |m, n| set_if_present(&mut m.one_drive_license_assign_date, n.date_only_value()),
        write: |m, w| {
            w.write_date_only_value("oneDriveLicenseAssignDate", m.one_drive_license_assign_date.as_ref())
        },
    },
    Field {
        name: "reportRefreshDate",
        read: |m, n| set_if_present(&mut m.report_refresh_date, n.date_only_value()),
        write: |m, w| w.write_date_only_value("reportRefreshDate", m.report_refresh_date.as_ref()),
    },
    Field {
        name: "sharePointLastActivityDate",
        read: |m, n| set_if_present(&mut m.share_point_last_activity_date, n.date_only_value()),
        write: |m, w| {
            w.write_date_only_value("sharePointLastActivityDate", m.share_point_last_activity_date.as_ref())
        },
    },
    Field {
        name: "sharePointLicenseAssignDate",
        read: |m, n| set_if_present(&mut m.share_point_license_assign_date, n.date_only_value()),
        write: |m, w| {
            w.write_date_only_value("sharePointLicenseAssignDate", m.share_point_license_assign_date.as_ref())
        },
    },
    Field {
        name: "skypeForBusinessLastActivityDate",
        read: |m, n| {
            set_if_present(&mut m.skype_for_business_last_activity_date, n.date_only_value())
        },
        write: |m, w| {
            w.write_date_only_value("skypeForBusinessLastActivityDate", m.skype_for_business_last_activity_date.as_ref())
        },
    },
    Field {
        name: "skypeForBusinessLicenseAssignDate",
        read: |m, n| {
            set_if_present(&mut m.skype_for_business_license_assign_date, n.date_only_value())
        },
        write: |m, w| {
            w.write_date_only_value("skypeForBusinessLicenseAssignDate", m.skype_for_business_license_assign_date.as_ref())
        },
    },
    Field {
        name: "teamsLastActivityDate",
        read: |m, n| set_if_present(&mut m.teams_last_activity_date, n.date_only_value()),
        write: |m, w| {
            w.write_date_only_value("teamsLastActivityDate", m.teams_last_activity_date.as_ref())
        },
    },
    Field {
        name: "teamsLicenseAssignDate",
        read: |m, n| set_if_present(&mut m.teams_license_assign_date, n.date_only_value()),
        write: |m, w| {
            w.write_date_only_value("teamsLicenseAssignDate", m.teams_license_assign_date.as_ref())
        },
    },
    Field {
        name: "userPrincipalName",
        read: |m, n| set_if_present(&mut m.user_principal_name, n.string_value()),
        write: |m, w| w.write_string_value("userPrincipalName", m.user_principal_name.as_deref()),
    },
    Field {
        name: "yammerLastActivityDate",
        read: |m, n| set_if_present(&mut m.yammer_last_activity_date, n.date_only_value()),
        write: |m, w| {
            w.write_date_only_value("yammerLastActivityDate", m.yammer_last_activity_date.as_ref())
        },
    },
    Field {
        name: "yammerLicenseAssignDate",
        read: |m, n| set_if_present(&mut m.yammer_license_assign_date, n.date_only_value()),
        write: |m, w| {
            w.write_date_only_value("yammerLicenseAssignDate", m.yammer_license_assign_date.as_ref())
        },
    },
];

parsable!(Office365ActiveUserDetail, extends entity: Entity, FIELDS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_round_trip;
    use crate::Error;
    use serde_json::json;
    use time::macros::date;

    #[test]
    fn report_row_round_trips() {
        let content = json!({
            "id": "row-1",
            "assignedProducts": ["OFFICE 365 E5", "MICROSOFT 365 BUSINESS"],
            "displayName": "Adele Vance",
            "exchangeLastActivityDate": "2023-08-30",
            "hasExchangeLicense": true,
            "hasTeamsLicense": false,
            "isDeleted": false,
            "reportRefreshDate": "2023-09-01",
            "userPrincipalName": "adele@contoso.com",
        });
        let row: Office365ActiveUserDetail = assert_round_trip(&content);
        assert_eq!(row.report_refresh_date, Some(date!(2023-09-01)));
        assert_eq!(row.deleted_date, None);
        assert_eq!(row.assigned_products.map(|p| p.len()), Some(2));
    }

    #[test]
    fn date_only_values_reject_timestamps() {
        let content = json!({"reportRefreshDate": "2023-09-01T00:00:00Z"});
        let result = crate::from_value::<Office365ActiveUserDetail>(&content);
        assert!(matches!(
            result,
            Err(Error::InvalidValue { kind: "date", .. })
        ));
    }
}
