/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Selection of a concrete model from a payload's `@odata.type`.

use std::collections::HashMap;

use crate::options::UnknownDiscriminator;
use crate::serialization::{ParseNode, ODATA_TYPE};
use crate::Error;

/// One known subtype of a hierarchy.
pub struct Variant<T> {
    pub tag: &'static str,
    pub create: fn() -> T,
}

/// Maps discriminator literals to constructors for one hierarchy root.
///
/// Registries are built once from a static [`Variant`] table and only read
/// afterwards.
pub struct DiscriminatorRegistry<T> {
    base: fn() -> T,
    variants: HashMap<&'static str, fn() -> T>,
}

impl<T> DiscriminatorRegistry<T> {
    pub fn new(base: fn() -> T, variants: &[Variant<T>]) -> Self {
        DiscriminatorRegistry {
            base,
            variants: variants
                .iter()
                .map(|variant| (variant.tag, variant.create))
                .collect(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.variants.contains_key(tag)
    }

    /// Create the fresh instance `node` should be populated into.
    pub fn create(&self, node: &dyn ParseNode) -> Result<T, Error> {
        let tag = match node.child_node(ODATA_TYPE) {
            Some(child) => child.string_value()?,
            None => None,
        };
        let Some(tag) = tag else {
            return Ok((self.base)());
        };

        if let Some(create) = self.variants.get(tag.as_str()) {
            return Ok(create());
        }

        match node.options().unknown_discriminator {
            UnknownDiscriminator::Fallback => {
                log::debug!("no variant registered for `{tag}`, using the base type");
                Ok((self.base)())
            }
            UnknownDiscriminator::Reject => Err(Error::UnknownDiscriminator(tag)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::serialization::json::JsonParseNode;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Shape {
        Base,
        Circle,
        Square,
    }

    fn registry() -> DiscriminatorRegistry<Shape> {
        DiscriminatorRegistry::new(
            || Shape::Base,
            &[
                Variant {
                    tag: "#test.circle",
                    create: || Shape::Circle,
                },
                Variant {
                    tag: "#test.square",
                    create: || Shape::Square,
                },
            ],
        )
    }

    fn create(value: serde_json::Value, options: ParseOptions) -> Result<Shape, Error> {
        registry().create(&JsonParseNode::new(&value, &options))
    }

    #[test]
    fn registered_tags_select_their_variant() {
        let options = ParseOptions::default();
        assert_eq!(
            create(json!({"@odata.type": "#test.circle"}), options).unwrap(),
            Shape::Circle
        );
        assert_eq!(
            create(json!({"@odata.type": "#test.square"}), options).unwrap(),
            Shape::Square
        );
    }

    #[test]
    fn absent_or_null_tag_selects_base() {
        let options = ParseOptions {
            unknown_discriminator: UnknownDiscriminator::Reject,
        };
        assert_eq!(create(json!({}), options).unwrap(), Shape::Base);
        assert_eq!(
            create(json!({"@odata.type": null}), options).unwrap(),
            Shape::Base
        );
    }

    #[test]
    fn tags_are_case_sensitive() {
        let options = ParseOptions::default();
        assert_eq!(
            create(json!({"@odata.type": "#test.Circle"}), options).unwrap(),
            Shape::Base
        );
    }

    #[test]
    fn non_string_tag_is_an_error() {
        let result = create(json!({"@odata.type": 3}), ParseOptions::default());
        assert!(matches!(
            result,
            Err(Error::UnexpectedType {
                expected: "string",
                ..
            })
        ));
    }
}
