/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Types in the `microsoft.graph.managedTenants` namespace, used by
//! Microsoft 365 Lighthouse.

pub mod tenant_status_information;
pub mod workload_status;
