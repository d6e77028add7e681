/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to HardwareInformation."]
use crate::serialization::{
    collection_of_primitive_values, parsable, set_if_present, write_primitive_collection,
    AdditionalData, Field, ODATA_TYPE,
};

/// Hardware information of a given device.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HardwareInformation {
    #[doc = "The number of charge cycles the device's current battery has gone through. Valid values 0 to 2147483647"]
    pub battery_charge_cycles: Option<i32>,
    #[doc = "The device's current battery's health percentage. Valid values 0 to 100"]
    pub battery_health_percentage: Option<i32>,
    #[doc = "The battery level, between 0.0 and 100, or null if the battery level cannot be determined. The update frequency of this property is per-checkin. Note this property is currently supported only on devices running iOS 5.0 and later, and is available only when Device Information access right is obtained. Valid values 0 to 100"]
    pub battery_level_percentage: Option<f64>,
    #[doc = "The serial number of the device's current battery"]
    pub battery_serial_number: Option<String>,
    #[doc = "Cellular technology of the device"]
    pub cellular_technology: Option<String>,
    #[doc = "Returns the fully qualified domain name of the device (if any). If the device is not domain-joined, it returns an empty string."]
    pub device_full_qualified_domain_name: Option<String>,
    #[doc = "eSIM identifier"]
    pub esim_identifier: Option<String>,
    #[doc = "Free storage space of the device."]
    pub free_storage_space: Option<i64>,
    #[doc = "IMEI"]
    pub imei: Option<String>,
    #[doc = "IPAddressV4"]
    pub ip_address_v4: Option<String>,
    #[doc = "Encryption status of the device"]
    pub is_encrypted: Option<bool>,
    #[doc = "Shared iPad"]
    pub is_shared_device: Option<bool>,
    #[doc = "Supervised mode of the device"]
    pub is_supervised: Option<bool>,
    #[doc = "Manufacturer of the device"]
    pub manufacturer: Option<String>,
    #[doc = "MEID"]
    pub meid: Option<String>,
    #[doc = "Model of the device"]
    pub model: Option<String>,
    pub odata_type: Option<String>,
    #[doc = "String that specifies the OS edition."]
    pub operating_system_edition: Option<String>,
    #[doc = "Operating system language of the device"]
    pub operating_system_language: Option<String>,
    #[doc = "Operating System Build Number on Android device"]
    pub os_build_number: Option<String>,
    #[doc = "Phone number of the device"]
    pub phone_number: Option<String>,
    #[doc = "The product name, e.g. iPad8,12 etc."]
    pub product_name: Option<String>,
    #[doc = "The number of users currently on this device, or null (default) if the value of this property cannot be determined."]
    pub resident_users_count: Option<i32>,
    #[doc = "Serial number."]
    pub serial_number: Option<String>,
    #[doc = "SubnetAddress"]
    pub subnet_address: Option<String>,
    #[doc = "Subscriber carrier of the device"]
    pub subscriber_carrier: Option<String>,
    #[doc = "BIOS version as reported by SMBIOS"]
    pub system_management_bios_version: Option<String>,
    #[doc = "Total storage space of the device."]
    pub total_storage_space: Option<i64>,
    #[doc = "The identifying information that uniquely names the TPM manufacturer"]
    pub tpm_manufacturer: Option<String>,
    #[doc = "String that specifies the specification version."]
    pub tpm_specification_version: Option<String>,
    #[doc = "The version of the TPM, as specified by the manufacturer"]
    pub tpm_version: Option<String>,
    #[doc = "WiFi MAC address of the device"]
    pub wifi_mac: Option<String>,
    #[doc = "A list of wired IPv4 addresses. The update frequency (the maximum delay for the change of property value to be synchronized from the device to the cloud storage) of this property is daily. Note this property is currently supported only on devices running on Windows."]
    pub wired_ipv4_addresses: Option<Vec<String>>,
    pub additional_data: AdditionalData,
}

impl HardwareInformation {
    pub fn new() -> Self {
        Self::default()
    }
}

const FIELDS: &[Field<HardwareInformation>] = &[
    Field {
        name: "batteryChargeCycles",
        read: |m, n| set_if_present(&mut m.battery_charge_cycles, n.i32_value()),
        write: |m, w| w.write_i32_value("batteryChargeCycles", m.battery_charge_cycles),
    },
    Field {
        name: "batteryHealthPercentage",
        read: |m, n| set_if_present(&mut m.battery_health_percentage, n.i32_value()),
        write: |m, w| w.write_i32_value("batteryHealthPercentage", m.battery_health_percentage),
    },
    Field {
        name: "batteryLevelPercentage",
        read: |m, n| set_if_present(&mut m.battery_level_percentage, n.f64_value()),
        write: |m, w| w.write_f64_value("batteryLevelPercentage", m.battery_level_percentage),
    },
    Field {
        name: "batterySerialNumber",
        read: |m, n| set_if_present(&mut m.battery_serial_number, n.string_value()),
        write: |m, w| {
            w.write_string_value("batterySerialNumber", m.battery_serial_number.as_deref())
        },
    },
    Field {
        name: "cellularTechnology",
        read: |m, n| set_if_present(&mut m.cellular_technology, n.string_value()),
        write: |m, w| w.write_string_value("cellularTechnology", m.cellular_technology.as_deref()),
    },
    Field {
        name: "deviceFullQualifiedDomainName",
        read: |m, n| set_if_present(&mut m.device_full_qualified_domain_name, n.string_value()),
        write: |m, w| {
            w.write_string_value("deviceFullQualifiedDomainName", m.device_full_qualified_domain_name.as_deref())
        },
    },
    Field {
        name: "esimIdentifier",
        read: |m, n| set_if_present(&mut m.esim_identifier, n.string_value()),
        write: |m, w| w.write_string_value("esimIdentifier", m.esim_identifier.as_deref()),
    },
    Field {
        name: "freeStorageSpace",
        read: |m, n| set_if_present(&mut m.free_storage_space, n.i64_value()),
        write: |m, w| w.write_i64_value("freeStorageSpace", m.free_storage_space),
    },
    Field {
        name: "imei",
        read: |m, n| set_if_present(&mut m.imei, n.string_value()),
        write: |m, w| w.write_string_value("imei", m.imei.as_deref()),
    },
    Field {
        name: "ipAddressV4",
        read: |m, n| set_if_present(&mut m.ip_address_v4, n.string_value()),
        write: |m, w| w.write_string_value("ipAddressV4", m.ip_address_v4.as_deref()),
    },
    Field {
        name: "isEncrypted",
        read: |m, n| set_if_present(&mut m.is_encrypted, n.bool_value()),
        write: |m, w| w.write_bool_value("isEncrypted", m.is_encrypted),
    },
    Field {
        name: "isSharedDevice",
        read: |m, n| set_if_present(&mut m.is_shared_device, n.bool_value()),
        write: |m, w| w.write_bool_value("isSharedDevice", m.is_shared_device),
    },
    Field {
        name: "isSupervised",
        read: |m, n| set_if_present(&mut m.is_supervised, n.bool_value()),
        write: |m, w| w.write_bool_value("isSupervised", m.is_supervised),
    },
    Field {
        name: "manufacturer",
        read: |m, n| set_if_present(&mut m.manufacturer, n.string_value()),
        write: |m, w| w.write_string_value("manufacturer", m.manufacturer.as_deref()),
    },
    Field {
        name: "meid",
        read: |m, n| set_if_present(&mut m.meid, n.string_value()),
        write: |m, w| w.write_string_value("meid", m.meid.as_deref()),
    },
    Field {
        name: "model",
        read: |m, n| set_if_present(&mut m.model, n.string_value()),
        write: |m, w| w.write_string_value("model", m.model.as_deref()),
    },
    Field {
        name: ODATA_TYPE,
        read: |m, n| set_if_present(&mut m.odata_type, n.string_value()),
        write: |m, w| w.write_string_value(ODATA_TYPE, m.odata_type.as_deref()),
    },
    Field {
        name: "operatingSystemEdition",
        read: |m, n| set_if_present(&mut m.operating_system_edition, n.string_value()),
        write: |m, w| {
            w.write_string_value("operatingSystemEdition", m.operating_system_edition.as_deref())
        },
    },
    Field {
        name: "operatingSystemLanguage",
        read: |m, n| set_if_present(&mut m.operating_system_language, n.string_value()),
        write: |m, w| {
            w.write_string_value("operatingSystemLanguage", m.operating_system_language.as_deref())
        },
    },
    Field {
        name: "osBuildNumber",
        read: |m, n| set_if_present(&mut m.os_build_number, n.string_value()),
        write: |m, w| w.write_string_value("osBuildNumber", m.os_build_number.as_deref()),
    },
    Field {
        name: "phoneNumber",
        read: |m, n| set_if_present(&mut m.phone_number, n.string_value()),
        write: |m, w| w.write_string_value("phoneNumber", m.phone_number.as_deref()),
    },
    Field {
        name: "productName",
        read: |m, n| set_if_present(&mut m.product_name, n.string_value()),
        write: |m, w| w.write_string_value("productName", m.product_name.as_deref()),
    },
    Field {
        name: "residentUsersCount",
        read: |m, n| set_if_present(&mut m.resident_users_count, n.i32_value()),
        write: |m, w| w.write_i32_value("residentUsersCount", m.resident_users_count),
    },
    Field {
        name: "serialNumber",
        read: |m, n| set_if_present(&mut m.serial_number, n.string_value()),
        write: |m, w| w.write_string_value("serialNumber", m.serial_number.as_deref()),
    },
    Field {
        name: "subnetAddress",
        read: |m, n| set_if_present(&mut m.subnet_address, n.string_value()),
        write: |m, w| w.write_string_value("subnetAddress", m.subnet_address.as_deref()),
    },
    Field {
        name: "subscriberCarrier",
        read: |m, n| set_if_present(&mut m.subscriber_carrier, n.string_value()),
        write: |m, w| w.write_string_value("subscriberCarrier", m.subscriber_carrier.as_deref()),
    },
    Field {
        name: "systemManagementBIOSVersion",
        read: |m, n| set_if_present(&mut m.system_management_bios_version, n.string_value()),
        write: |m, w| {
            w.write_string_value("systemManagementBIOSVersion", m.system_management_bios_version.as_deref())
        },
    },
    Field {
        name: "totalStorageSpace",
        read: |m, n| set_if_present(&mut m.total_storage_space, n.i64_value()),
        write: |m, w| w.write_i64_value("totalStorageSpace", m.total_storage_space),
    },
    Field {
        name: "tpmManufacturer",
        read: |m, n| set_if_present(&mut m.tpm_manufacturer, n.string_value()),
        write: |m, w| w.write_string_value("tpmManufacturer", m.tpm_manufacturer.as_deref()),
    },
    Field {
        name: "tpmSpecificationVersion",
        read: |m, n| set_if_present(&mut m.tpm_specification_version, n.string_value()),
        write: |m, w| {
            w.write_string_value("tpmSpecificationVersion", m.tpm_specification_version.as_deref())
        },
    },
    Field {
        name: "tpmVersion",
        read: |m, n| set_if_present(&mut m.tpm_version, n.string_value()),
        write: |m, w| w.write_string_value("tpmVersion", m.tpm_version.as_deref()),
    },
    Field {
        name: "wifiMac",
        read: |m, n| set_if_present(&mut m.wifi_mac, n.string_value()),
        write: |m, w| w.write_string_value("wifiMac", m.wifi_mac.as_deref()),
    },
    Field {
        name: "wiredIPv4Addresses",
        read: |m, n| {
            set_if_present(&mut m.wired_ipv4_addresses, collection_of_primitive_values(n))
        },
        write: |m, w| {
            write_primitive_collection(w, "wiredIPv4Addresses", m.wired_ipv4_addresses.as_deref())
        },
    },
];

parsable!(root HardwareInformation, FIELDS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_round_trip;
    use serde_json::json;

    #[test]
    fn storage_sizes_use_64_bits() {
        let content = json!({
            "batteryLevelPercentage": 87.5,
            "freeStorageSpace": 51_539_607_552u64,
            "isSupervised": true,
            "model": "iPad8,12",
            "@odata.type": "microsoft.graph.hardwareInformation",
            "systemManagementBIOSVersion": "1.4.2",
            "totalStorageSpace": 274_877_906_944u64,
            "wiredIPv4Addresses": ["10.0.0.4"],
        });
        let hardware: HardwareInformation = assert_round_trip(&content);
        assert_eq!(hardware.free_storage_space, Some(51_539_607_552));
        assert_eq!(hardware.battery_level_percentage, Some(87.5));
        assert_eq!(
            hardware.wired_ipv4_addresses.as_deref(),
            Some(&["10.0.0.4".to_string()][..])
        );
    }
}
