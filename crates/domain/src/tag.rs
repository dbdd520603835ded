//! Classification output
//!
//! One `Tag` per rule that matched an ability text; the `TagSet` of all
//! matches is the ability's classification, cached per ability by
//! consumers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::number::NumberRange;
use crate::target::AbilityTarget;

/// A typed value extracted by one submatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagValue {
    /// Numeric value or range, sentinel-normalized
    Number(NumberRange),
    /// Verbatim captured text
    Text(String),
    /// Option presence flag
    Flag(bool),
}

impl TagValue {
    pub fn as_number(&self) -> Option<NumberRange> {
        match self {
            Self::Number(range) => Some(*range),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }
}

/// The structured output of one rule matching one ability text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Rule name with the target placeholder already resolved
    pub rule_name: String,
    pub group: String,
    pub target: AbilityTarget,
    /// Submatcher description -> extracted value. Separators emit
    /// nothing and never appear here.
    pub values: BTreeMap<String, TagValue>,
}

impl Tag {
    /// The extracted value for a submatcher description.
    pub fn value(&self, description: &str) -> Option<&TagValue> {
        self.values.get(description)
    }
}

/// All tags extracted from one ability text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSet(pub Vec<Tag>);

impl TagSet {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self(tags)
    }

    /// The tag for an exact (target, group, rule name) triple, if the
    /// ability matched that rule.
    pub fn find(&self, target: AbilityTarget, group: &str, rule_name: &str) -> Option<&Tag> {
        self.0
            .iter()
            .find(|t| t.target == target && t.group == group && t.rule_name == rule_name)
    }

    pub fn contains(&self, target: AbilityTarget, group: &str, rule_name: &str) -> bool {
        self.find(target, group, rule_name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for TagSet {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
