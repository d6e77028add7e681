/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Models for the Microsoft Graph beta API, together with the codec that moves
//! them to and from their JSON wire form.
//!
//! Every model implements [`Parsable`]. Hierarchy roots such as
//! [`types::device_configuration::AnyDeviceConfiguration`] pick their concrete
//! variant from the payload's `@odata.type` before populating it.

use serde_json::Value;
use thiserror::Error;

pub mod options;
pub mod serialization;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use options::{ParseOptions, UnknownDiscriminator, WriterOptions};
pub use serialization::json::{JsonParseNode, JsonSerializationWriter};
pub use serialization::{AdditionalData, Parsable, ParseNode, SerializationWriter};

#[derive(Debug, Error)]
pub enum Error {
    #[error("property has an unexpected type: expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: String,
    },

    #[error("invalid {kind} value: {value}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("unknown {enum_name} value: {value}")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("no type registered for discriminator value {0}")]
    UnknownDiscriminator(String),

    #[error("an error occurred while (de)serializing JSON")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn unexpected(expected: &'static str, found: &Value) -> Self {
        Error::UnexpectedType {
            expected,
            found: found.to_string(),
        }
    }

    pub(crate) fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}

/// Deserialize a model from a parsed JSON value.
pub fn from_value<T: Parsable>(value: &Value) -> Result<T, Error> {
    from_value_with_options(value, &ParseOptions::default())
}

pub fn from_value_with_options<T: Parsable>(
    value: &Value,
    options: &ParseOptions,
) -> Result<T, Error> {
    let node = JsonParseNode::new(value, options);
    serialization::object_value(&node)?.ok_or_else(|| Error::unexpected("object", value))
}

/// Deserialize a model from JSON text.
pub fn from_str<T: Parsable>(json: &str) -> Result<T, Error> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

/// Deserialize a model from a JSON response body.
pub fn from_slice<T: Parsable>(body: &[u8]) -> Result<T, Error> {
    let value: Value = serde_json::from_slice(body)?;
    from_value(&value)
}

/// Serialize a model, including its additional data, to a JSON value.
pub fn to_value<T: Parsable + ?Sized>(model: &T) -> Result<Value, Error> {
    to_value_with_options(model, &WriterOptions::default())
}

pub fn to_value_with_options<T: Parsable + ?Sized>(
    model: &T,
    options: &WriterOptions,
) -> Result<Value, Error> {
    let mut writer = JsonSerializationWriter::new(*options);
    serialization::write_model(model, &mut writer)?;
    Ok(writer.into_value())
}

pub fn to_string<T: Parsable + ?Sized>(model: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(&to_value(model)?)?)
}

/// Serialize a model into a request body.
pub fn to_vec<T: Parsable + ?Sized>(model: &T) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(&to_value(model)?)?)
}
