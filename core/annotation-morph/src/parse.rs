use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::tags;

/// One `+`-separated run of tags between derivational boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct InflectionalGroup {
    tags: Vec<String>,
}

impl InflectionalGroup {
    pub fn new(group: &str) -> Self {
        Self {
            tags: group
                .split('+')
                .filter(|tag| !tag.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The part-of-speech tag that opens the group.
    pub fn pos(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A morphological analysis such as `ev+NOUN+A3SG+PNON+LOC^DB+ADJ+REL`.
///
/// The text is kept verbatim so that writing the layer back out
/// reproduces exactly what was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct MorphologicalParse {
    text: String,
    root: String,
    groups: Vec<InflectionalGroup>,
}

impl MorphologicalParse {
    pub fn new(parse: &str) -> Self {
        // A '+' root (the plus sign itself) is written "++TAG".
        let (root, rest) = match parse.strip_prefix("++") {
            Some(rest) => ("+", rest),
            None => parse.split_once('+').unwrap_or((parse, "")),
        };

        let groups = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(tags::DERIVATIONAL_BOUNDARY)
                .map(InflectionalGroup::new)
                .collect()
        };

        Self {
            text: parse.to_owned(),
            root: root.to_owned(),
            groups,
        }
    }

    /// Lemma of the analysed word.
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn groups(&self) -> &[InflectionalGroup] {
        &self.groups
    }

    pub fn root_pos(&self) -> Option<&str> {
        self.groups.first().and_then(InflectionalGroup::pos)
    }

    /// Part of speech of the whole word, i.e. of the last group.
    pub fn pos(&self) -> Option<&str> {
        self.groups.last().and_then(InflectionalGroup::pos)
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.groups.iter().any(|group| group.contains_tag(tag))
    }

    pub fn last_group_contains(&self, tag: &str) -> bool {
        self.groups
            .last()
            .map_or(false, |group| group.contains_tag(tag))
    }

    pub fn is_verb(&self) -> bool {
        self.last_group_contains(tags::VERB)
    }

    pub fn is_noun(&self) -> bool {
        self.pos() == Some(tags::NOUN)
    }

    pub fn is_proper_noun(&self) -> bool {
        self.groups
            .first()
            .map_or(false, |group| group.contains_tag(tags::PROPER_NOUN))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for MorphologicalParse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Metamorpheme segmentation such as `ev+lAr+DA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct MetamorphicParse {
    text: String,
    root: String,
    morphemes: Vec<String>,
}

impl MetamorphicParse {
    pub fn new(parse: &str) -> Self {
        if parse == "+" {
            return Self {
                text: parse.to_owned(),
                root: parse.to_owned(),
                morphemes: Vec::new(),
            };
        }
        let mut pieces = parse.split('+');
        let root = pieces.next().unwrap_or_default().to_owned();
        Self {
            text: parse.to_owned(),
            root,
            morphemes: pieces.map(ToOwned::to_owned).collect(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn morphemes(&self) -> &[String] {
        &self.morphemes
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for MetamorphicParse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
