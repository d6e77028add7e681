/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! JSON implementations of [`ParseNode`] and [`SerializationWriter`].

use serde_json::{Map, Value};

use crate::options::{ParseOptions, WriterOptions};
use crate::serialization::{write_model, AdditionalData, Parsable, ParseNode, SerializationWriter};
use crate::Error;

/// A borrowed view of one JSON value.
#[derive(Clone, Copy, Debug)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
    options: &'a ParseOptions,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value, options: &'a ParseOptions) -> Self {
        JsonParseNode { value, options }
    }

    fn child(&self, value: &'a Value) -> Box<dyn ParseNode + 'a> {
        Box::new(JsonParseNode::new(value, self.options))
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn options(&self) -> &ParseOptions {
        self.options
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn child_node(&self, name: &str) -> Option<Box<dyn ParseNode + '_>> {
        self.value
            .as_object()
            .and_then(|object| object.get(name))
            .map(|value| self.child(value))
    }

    fn properties(&self) -> Result<Vec<(&str, Box<dyn ParseNode + '_>)>, Error> {
        let object = self
            .value
            .as_object()
            .ok_or_else(|| Error::unexpected("object", self.value))?;
        Ok(object
            .iter()
            .map(|(name, value)| (name.as_str(), self.child(value)))
            .collect())
    }

    fn elements(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(elements) => Ok(Some(
                elements.iter().map(|value| self.child(value)).collect(),
            )),
            other => Err(Error::unexpected("array", other)),
        }
    }

    fn string_value(&self) -> Result<Option<String>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value.clone())),
            other => Err(Error::unexpected("string", other)),
        }
    }

    fn bool_value(&self) -> Result<Option<bool>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(*value)),
            other => Err(Error::unexpected("boolean", other)),
        }
    }

    fn i64_value(&self) -> Result<Option<i64>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().and_then(integral_f64))
                .map(Some)
                .ok_or_else(|| Error::invalid("int64", number.to_string())),
            other => Err(Error::unexpected("integer", other)),
        }
    }

    fn f64_value(&self) -> Result<Option<f64>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_f64()
                .map(Some)
                .ok_or_else(|| Error::invalid("double", number.to_string())),
            other => Err(Error::unexpected("number", other)),
        }
    }

    fn untyped_value(&self) -> Value {
        self.value.clone()
    }
}

/// Integers up to this magnitude are exact in an `f64`.
const MAX_EXACT_F64_INTEGER: u64 = 1 << 53;

/// `value` as an `i64` when it has no fractional part and fits.
fn integral_f64(value: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, which is out of range.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| value as i64)
}

fn is_negative_zero(value: f64) -> bool {
    value == 0.0 && value.is_sign_negative()
}

/// Builds one JSON object. Properties keep the order they were written in.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    options: WriterOptions,
    properties: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new(options: WriterOptions) -> Self {
        JsonSerializationWriter {
            options,
            properties: Map::new(),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.properties)
    }

    fn write(&mut self, key: &str, value: Option<Value>) {
        match value {
            Some(value) => {
                self.properties.insert(key.to_owned(), value);
            }
            None if self.options.emit_null_values => {
                self.properties.insert(key.to_owned(), Value::Null);
            }
            None => {}
        }
    }

    fn nested(&self, model: &dyn Parsable) -> Result<Value, Error> {
        let mut writer = JsonSerializationWriter::new(self.options);
        write_model(model, &mut writer)?;
        Ok(writer.into_value())
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), Error> {
        self.write(key, value.map(Value::from));
        Ok(())
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), Error> {
        self.write(key, value.map(Value::Bool));
        Ok(())
    }

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), Error> {
        self.write(key, value.map(Value::from));
        Ok(())
    }

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), Error> {
        let value = value
            .map(|v| match integral_f64(v) {
                // Whole numbers go out as `5`, not `5.0`.
                Some(whole)
                    if whole.unsigned_abs() <= MAX_EXACT_F64_INTEGER && !is_negative_zero(v) =>
                {
                    Ok(Value::from(whole))
                }
                _ => serde_json::Number::from_f64(v)
                    .map(Value::Number)
                    .ok_or_else(|| Error::invalid("double", v.to_string())),
            })
            .transpose()?;
        self.write(key, value);
        Ok(())
    }

    fn write_object_value(
        &mut self,
        key: &str,
        value: Option<&dyn Parsable>,
    ) -> Result<(), Error> {
        let value = value.map(|model| self.nested(model)).transpose()?;
        self.write(key, value);
        Ok(())
    }

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: &[&dyn Parsable],
    ) -> Result<(), Error> {
        let values = values
            .iter()
            .map(|model| self.nested(*model))
            .collect::<Result<_, _>>()?;
        self.write(key, Some(Value::Array(values)));
        Ok(())
    }

    fn write_collection_of_primitive_values(
        &mut self,
        key: &str,
        values: Vec<Value>,
    ) -> Result<(), Error> {
        self.write(key, Some(Value::Array(values)));
        Ok(())
    }

    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), Error> {
        for (key, value) in data {
            self.properties.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn properties_keep_payload_order() {
        let value = json!({"zeta": 1, "alpha": 2, "mid": null});
        let options = ParseOptions::default();
        let node = JsonParseNode::new(&value, &options);
        let names: Vec<&str> = node
            .properties()
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn child_node_of_non_object_is_absent() {
        let value = json!([1, 2]);
        let options = ParseOptions::default();
        let node = JsonParseNode::new(&value, &options);
        assert!(node.child_node("length").is_none());
        assert_eq!(node.elements().unwrap().map(|e| e.len()), Some(2));
    }

    #[test]
    fn integers_with_fractions_are_rejected() {
        let value = json!(1.5);
        let options = ParseOptions::default();
        let node = JsonParseNode::new(&value, &options);
        assert!(matches!(
            node.i64_value(),
            Err(Error::InvalidValue { kind: "int64", .. })
        ));
        assert_eq!(node.f64_value().unwrap(), Some(1.5));
    }

    #[test]
    fn whole_number_doubles_are_accepted_as_integers() {
        let options = ParseOptions::default();
        let value = json!(3.0);
        let node = JsonParseNode::new(&value, &options);
        assert_eq!(node.i64_value().unwrap(), Some(3));
        assert_eq!(node.i32_value().unwrap(), Some(3));

        let value = json!(-1e19);
        let node = JsonParseNode::new(&value, &options);
        assert!(matches!(
            node.i64_value(),
            Err(Error::InvalidValue { kind: "int64", .. })
        ));
    }

    #[test]
    fn whole_number_doubles_are_written_without_a_fraction() {
        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        writer.write_f64_value("inventory", Some(5.0)).unwrap();
        writer.write_f64_value("unitCost", Some(-0.0)).unwrap();
        writer.write_f64_value("unitPrice", Some(12.25)).unwrap();
        writer.write_f64_value("huge", Some(1e300)).unwrap();
        let written = writer.into_value();
        assert!(written["inventory"].is_i64());
        assert!(written["unitCost"].is_f64());
        assert!(written["unitCost"].as_f64().unwrap().is_sign_negative());
        assert!(written["huge"].is_f64());
        assert_eq!(
            serde_json::to_string(&written["unitPrice"]).unwrap(),
            "12.25"
        );
        assert_eq!(serde_json::to_string(&written["inventory"]).unwrap(), "5");
    }

    #[test]
    fn unset_values_are_omitted_by_default() {
        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        writer.write_string_value("displayName", None).unwrap();
        writer.write_i32_value("version", Some(2)).unwrap();
        writer.write_bool_value("enabled", None).unwrap();
        assert_eq!(writer.into_value(), json!({"version": 2}));
    }

    #[test]
    fn unset_values_written_as_null_when_requested() {
        let mut writer = JsonSerializationWriter::new(WriterOptions {
            emit_null_values: true,
        });
        writer.write_string_value("displayName", None).unwrap();
        writer.write_i32_value("version", Some(2)).unwrap();
        writer.write_object_value("deviceStatusOverview", None).unwrap();
        assert_eq!(
            writer.into_value(),
            json!({"displayName": null, "version": 2, "deviceStatusOverview": null})
        );
    }

    #[test]
    fn additional_data_overwrites_nothing_it_does_not_name() {
        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        writer.write_string_value("id", Some("1")).unwrap();
        let mut extra = AdditionalData::new();
        extra.insert("extra".to_string(), json!([1, "two"]));
        writer.write_additional_data(&extra).unwrap();

        let written = writer.into_value();
        let keys: Vec<&String> = written.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["id", "extra"]);
        assert_eq!(written["extra"], json!([1, "two"]));
    }

    #[test]
    fn non_finite_doubles_are_write_errors() {
        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        assert!(writer.write_f64_value("price", Some(f64::INFINITY)).is_err());
    }
}
