/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Knobs for the JSON parse node and serialization writer.

/// What a discriminator dispatcher does with an `@odata.type` it has no
/// variant registered for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownDiscriminator {
    /// Build the hierarchy's base type. Properties belonging to the unknown
    /// subtype end up in its additional data.
    #[default]
    Fallback,

    /// Fail with [`crate::Error::UnknownDiscriminator`].
    Reject,
}

/// Options carried by a parse node to every value read through it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub unknown_discriminator: UnknownDiscriminator,
}

/// Options carried by a serialization writer into every nested writer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriterOptions {
    /// Write unset properties as explicit `null` instead of omitting them.
    /// Graph treats a `null` in a `PATCH` body as a request to clear the
    /// property.
    pub emit_null_values: bool,
}
