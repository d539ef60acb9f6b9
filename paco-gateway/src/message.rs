// Paco Gateway - Queue message transform gateway
// Copyright (c) 2026 Rui Calado
//
// Licensed under the MIT License.
// See LICENSE file for details.

//! Queue message abstraction
//!
//! The minimal view of a queue message the codec touches: a text body plus
//! a typed attribute map. The transport that actually sends and receives
//! messages is an external collaborator.

use paco::{AttributeMap, AttributeValue};

/// A queue message: body text and attributes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueMessage {
    /// Message body in its transportable string form
    pub body: String,
    /// Message attributes, caller-defined and codec-reserved alike
    pub attributes: AttributeMap,
}

impl QueueMessage {
    /// Create a message with the given body and no attributes.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            attributes: AttributeMap::new(),
        }
    }

    /// Attach an attribute, consuming and returning the message.
    pub fn with_attribute(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Look up an attribute's string form.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(AttributeValue::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_lookup() {
        let message = QueueMessage::new("payload-42")
            .with_attribute("shopId", AttributeValue::string("shop-1"));

        assert_eq!(message.body, "payload-42");
        assert_eq!(message.attribute("shopId"), Some("shop-1"));
        assert_eq!(message.attribute("missing"), None);
    }
}
