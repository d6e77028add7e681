/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Format-independent (de)serialization machinery shared by every model.
//!
//! Models never touch JSON directly. They read from a [`ParseNode`] and write
//! to a [`SerializationWriter`], driven by a static table of [`Field`]
//! descriptors per type. The generic loops in this module walk those tables.

use std::str::FromStr;

use serde_json::{Map, Number, Value};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};
use uuid::Uuid;

use crate::options::ParseOptions;
use crate::Error;

pub mod discriminator;
pub mod json;

/// The property holding a payload's fully-qualified schema type, e.g.
/// `#microsoft.graph.iosTrustedRootCertificate`.
pub const ODATA_TYPE: &str = "@odata.type";

/// Wire properties not described by a model's schema, preserved verbatim.
pub type AdditionalData = Map<String, Value>;

/// A model which can be populated from a [`ParseNode`] and written to a
/// [`SerializationWriter`].
pub trait Parsable {
    /// Create the zero-valued instance a payload should be read into. Types at
    /// the root of a hierarchy inspect `@odata.type` to pick a variant.
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error>
    where
        Self: Sized;

    /// Read a single wire property. Returns `false` if the property is not
    /// declared by this type or any type it extends.
    fn read_property(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error>;

    /// Write every declared property, inherited ones first.
    fn write_properties(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error>;

    fn additional_data(&self) -> &AdditionalData;

    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// A node of a parsed payload.
pub trait ParseNode {
    fn options(&self) -> &ParseOptions;

    fn is_null(&self) -> bool;

    /// The named member of an object node, if there is one.
    fn child_node(&self, name: &str) -> Option<Box<dyn ParseNode + '_>>;

    /// The members of an object node, in payload order.
    fn properties(&self) -> Result<Vec<(&str, Box<dyn ParseNode + '_>)>, Error>;

    /// The elements of an array node, or `None` for `null`.
    fn elements(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, Error>;

    fn string_value(&self) -> Result<Option<String>, Error>;

    fn bool_value(&self) -> Result<Option<bool>, Error>;

    fn i64_value(&self) -> Result<Option<i64>, Error>;

    fn f64_value(&self) -> Result<Option<f64>, Error>;

    /// The node as an untyped value, for storing in [`AdditionalData`].
    fn untyped_value(&self) -> Value;

    fn i32_value(&self) -> Result<Option<i32>, Error> {
        self.i64_value()?
            .map(|v| i32::try_from(v).map_err(|_| Error::invalid("int32", v.to_string())))
            .transpose()
    }

    fn byte_array_value(&self) -> Result<Option<Vec<u8>>, Error> {
        self.string_value()?
            .map(|v| base64::decode(&v).map_err(|_| Error::invalid("base64", v)))
            .transpose()
    }

    fn date_time_value(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.string_value()?
            .map(|v| OffsetDateTime::parse(&v, &Rfc3339).map_err(|_| Error::invalid("date-time", v)))
            .transpose()
    }

    fn date_only_value(&self) -> Result<Option<Date>, Error> {
        self.string_value()?
            .map(|v| {
                Date::parse(&v, format_description!("[year]-[month]-[day]"))
                    .map_err(|_| Error::invalid("date", v))
            })
            .transpose()
    }

    fn time_only_value(&self) -> Result<Option<Time>, Error> {
        self.string_value()?
            .map(|v| {
                Time::parse(&v, format_description!("[hour]:[minute]:[second].[subsecond]"))
                    .or_else(|_| Time::parse(&v, format_description!("[hour]:[minute]:[second]")))
                    .map_err(|_| Error::invalid("time", v))
            })
            .transpose()
    }

    fn uuid_value(&self) -> Result<Option<Uuid>, Error> {
        self.string_value()?
            .map(|v| Uuid::parse_str(&v).map_err(|_| Error::invalid("uuid", v)))
            .transpose()
    }
}

/// A sink for the properties of one object.
///
/// Unset (`None`) values are handled per the writer's own convention: the
/// JSON writer omits them unless asked to emit `null`.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), Error>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), Error>;

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), Error>;

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), Error>;

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>)
        -> Result<(), Error>;

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: &[&dyn Parsable],
    ) -> Result<(), Error>;

    fn write_collection_of_primitive_values(
        &mut self,
        key: &str,
        values: Vec<Value>,
    ) -> Result<(), Error>;

    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), Error>;

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), Error> {
        self.write_i64_value(key, value.map(i64::from))
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), Error> {
        let encoded = value.map(base64::encode);
        self.write_string_value(key, encoded.as_deref())
    }

    fn write_date_time_value(
        &mut self,
        key: &str,
        value: Option<&OffsetDateTime>,
    ) -> Result<(), Error> {
        let formatted = value
            .map(|v| {
                v.format(&Rfc3339)
                    .map_err(|_| Error::invalid("date-time", v.to_string()))
            })
            .transpose()?;
        self.write_string_value(key, formatted.as_deref())
    }

    fn write_date_only_value(&mut self, key: &str, value: Option<&Date>) -> Result<(), Error> {
        let formatted = value
            .map(|v| {
                v.format(format_description!("[year]-[month]-[day]"))
                    .map_err(|_| Error::invalid("date", v.to_string()))
            })
            .transpose()?;
        self.write_string_value(key, formatted.as_deref())
    }

    fn write_time_only_value(&mut self, key: &str, value: Option<&Time>) -> Result<(), Error> {
        let formatted = value
            .map(|v| {
                let formatted = if v.nanosecond() == 0 {
                    v.format(format_description!("[hour]:[minute]:[second]"))
                } else {
                    v.format(format_description!("[hour]:[minute]:[second].[subsecond]"))
                };
                formatted.map_err(|_| Error::invalid("time", v.to_string()))
            })
            .transpose()?;
        self.write_string_value(key, formatted.as_deref())
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<&Uuid>) -> Result<(), Error> {
        let formatted = value.map(Uuid::to_string);
        self.write_string_value(key, formatted.as_deref())
    }
}

/// One entry of a model's field table: the wire name, and how to move the
/// value between the wire and the struct.
pub struct Field<T> {
    pub name: &'static str,
    pub read: fn(&mut T, &dyn ParseNode) -> Result<(), Error>,
    pub write: fn(&T, &mut dyn SerializationWriter) -> Result<(), Error>,
}

/// Route `name` to the matching entry of `fields`, if any.
pub fn read_declared<T>(
    model: &mut T,
    fields: &[Field<T>],
    name: &str,
    node: &dyn ParseNode,
) -> Result<bool, Error> {
    match fields.iter().find(|field| field.name == name) {
        Some(field) => {
            (field.read)(model, node)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Write every entry of `fields` in table order.
pub fn write_declared<T>(
    model: &T,
    fields: &[Field<T>],
    writer: &mut dyn SerializationWriter,
) -> Result<(), Error> {
    fields.iter().try_for_each(|field| (field.write)(model, writer))
}

/// Store a successfully read value. A `None` read leaves the field untouched.
pub fn set_if_present<V>(slot: &mut Option<V>, value: Result<Option<V>, Error>) -> Result<(), Error> {
    if let Some(value) = value? {
        *slot = Some(value);
    }
    Ok(())
}

/// Populate `model` from an object node. Properties no field claims are kept
/// in the model's additional data.
pub fn populate<T: Parsable + ?Sized>(model: &mut T, node: &dyn ParseNode) -> Result<(), Error> {
    for (name, child) in node.properties()? {
        if !model.read_property(name, child.as_ref())? {
            log::trace!("keeping unmodeled property `{name}` as additional data");
            model
                .additional_data_mut()
                .insert(name.to_owned(), child.untyped_value());
        }
    }
    Ok(())
}

/// Write all of `model`'s properties, then its additional data.
pub fn write_model<T: Parsable + ?Sized>(
    model: &T,
    writer: &mut dyn SerializationWriter,
) -> Result<(), Error> {
    model.write_properties(writer)?;
    writer.write_additional_data(model.additional_data())
}

/// Read a nested object, dispatching on its discriminator.
pub fn object_value<T: Parsable>(node: &dyn ParseNode) -> Result<Option<T>, Error> {
    if node.is_null() {
        return Ok(None);
    }
    let mut model = T::create_from_discriminator_value(node)?;
    populate(&mut model, node)?;
    Ok(Some(model))
}

pub fn collection_of_object_values<T: Parsable>(
    node: &dyn ParseNode,
) -> Result<Option<Vec<T>>, Error> {
    let Some(elements) = node.elements()? else {
        return Ok(None);
    };
    elements
        .iter()
        .filter_map(|element| object_value(element.as_ref()).transpose())
        .collect::<Result<_, _>>()
        .map(Some)
}

/// A scalar which may appear as the element of a primitive collection.
pub trait Primitive: Sized {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error>;

    fn to_untyped(&self) -> Result<Value, Error>;
}

impl Primitive for String {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.string_value()
    }

    fn to_untyped(&self) -> Result<Value, Error> {
        Ok(Value::String(self.clone()))
    }
}

impl Primitive for bool {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.bool_value()
    }

    fn to_untyped(&self) -> Result<Value, Error> {
        Ok(Value::Bool(*self))
    }
}

impl Primitive for i32 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.i32_value()
    }

    fn to_untyped(&self) -> Result<Value, Error> {
        Ok(Value::from(*self))
    }
}

impl Primitive for i64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.i64_value()
    }

    fn to_untyped(&self) -> Result<Value, Error> {
        Ok(Value::from(*self))
    }
}

impl Primitive for f64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.f64_value()
    }

    fn to_untyped(&self) -> Result<Value, Error> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| Error::invalid("double", self.to_string()))
    }
}

impl Primitive for Uuid {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.uuid_value()
    }

    fn to_untyped(&self) -> Result<Value, Error> {
        Ok(Value::String(self.to_string()))
    }
}

pub fn collection_of_primitive_values<T: Primitive>(
    node: &dyn ParseNode,
) -> Result<Option<Vec<T>>, Error> {
    let Some(elements) = node.elements()? else {
        return Ok(None);
    };
    elements
        .iter()
        .filter_map(|element| T::read(element.as_ref()).transpose())
        .collect::<Result<_, _>>()
        .map(Some)
}

/// A closed set of string literals. `as_ref` is the wire literal.
pub trait GraphEnum: Copy + AsRef<str> + FromStr {
    /// The schema name of the enum, used in error messages.
    const NAME: &'static str;

    /// Exact, case-sensitive match against the declared literals.
    fn parse(value: &str) -> Result<Self, Error> {
        value.parse::<Self>().map_err(|_| Error::UnknownEnumValue {
            enum_name: Self::NAME,
            value: value.to_owned(),
        })
    }
}

pub fn enum_value<E: GraphEnum>(node: &dyn ParseNode) -> Result<Option<E>, Error> {
    node.string_value()?.map(|v| E::parse(&v)).transpose()
}

pub fn collection_of_enum_values<E: GraphEnum>(
    node: &dyn ParseNode,
) -> Result<Option<Vec<E>>, Error> {
    let Some(elements) = node.elements()? else {
        return Ok(None);
    };
    elements
        .iter()
        .filter_map(|element| enum_value(element.as_ref()).transpose())
        .collect::<Result<_, _>>()
        .map(Some)
}

pub fn write_object<T: Parsable>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    value: Option<&T>,
) -> Result<(), Error> {
    writer.write_object_value(key, value.map(|v| v as &dyn Parsable))
}

/// Collections are only written when present.
pub fn write_object_collection<T: Parsable>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    values: Option<&[T]>,
) -> Result<(), Error> {
    let Some(values) = values else {
        return Ok(());
    };
    let values: Vec<&dyn Parsable> = values.iter().map(|v| v as &dyn Parsable).collect();
    writer.write_collection_of_object_values(key, &values)
}

pub fn write_primitive_collection<T: Primitive>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    values: Option<&[T]>,
) -> Result<(), Error> {
    let Some(values) = values else {
        return Ok(());
    };
    let values = values
        .iter()
        .map(Primitive::to_untyped)
        .collect::<Result<_, _>>()?;
    writer.write_collection_of_primitive_values(key, values)
}

/// Enums are only written when set.
pub fn write_enum<E: GraphEnum>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    value: Option<E>,
) -> Result<(), Error> {
    match value {
        Some(value) => writer.write_string_value(key, Some(value.as_ref())),
        None => Ok(()),
    }
}

pub fn write_enum_collection<E: GraphEnum>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    values: Option<&[E]>,
) -> Result<(), Error> {
    let Some(values) = values else {
        return Ok(());
    };
    let values = values
        .iter()
        .map(|v| Value::String(v.as_ref().to_owned()))
        .collect();
    writer.write_collection_of_primitive_values(key, values)
}

/// Implements [`Parsable`] for a model described by a [`Field`] table.
///
/// `root` types own their additional data. Other types name the field holding
/// the type they extend; they also deref to it, so inherited properties read
/// like their own.
macro_rules! parsable {
    (root $model:ty, $fields:expr) => {
        impl $crate::serialization::Parsable for $model {
            fn create_from_discriminator_value(
                _node: &dyn $crate::serialization::ParseNode,
            ) -> Result<Self, $crate::Error> {
                Ok(Self::new())
            }

            fn read_property(
                &mut self,
                name: &str,
                node: &dyn $crate::serialization::ParseNode,
            ) -> Result<bool, $crate::Error> {
                $crate::serialization::read_declared(self, $fields, name, node)
            }

            fn write_properties(
                &self,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> Result<(), $crate::Error> {
                $crate::serialization::write_declared(self, $fields, writer)
            }

            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                &mut self.additional_data
            }
        }
    };
    ($model:ty, extends $base:ident: $base_ty:ty, $fields:expr) => {
        impl std::ops::Deref for $model {
            type Target = $base_ty;

            fn deref(&self) -> &Self::Target {
                &self.$base
            }
        }

        impl std::ops::DerefMut for $model {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.$base
            }
        }

        impl $crate::serialization::Parsable for $model {
            fn create_from_discriminator_value(
                _node: &dyn $crate::serialization::ParseNode,
            ) -> Result<Self, $crate::Error> {
                Ok(Self::new())
            }

            fn read_property(
                &mut self,
                name: &str,
                node: &dyn $crate::serialization::ParseNode,
            ) -> Result<bool, $crate::Error> {
                if $crate::serialization::read_declared(self, $fields, name, node)? {
                    return Ok(true);
                }
                $crate::serialization::Parsable::read_property(&mut self.$base, name, node)
            }

            fn write_properties(
                &self,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> Result<(), $crate::Error> {
                $crate::serialization::Parsable::write_properties(&self.$base, writer)?;
                $crate::serialization::write_declared(self, $fields, writer)
            }

            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                $crate::serialization::Parsable::additional_data(&self.$base)
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                $crate::serialization::Parsable::additional_data_mut(&mut self.$base)
            }
        }
    };
}

pub(crate) use parsable;
