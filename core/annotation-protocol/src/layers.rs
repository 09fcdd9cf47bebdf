use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;

use crate::score::ParserEvaluationScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum NamedEntityType {
    None = 0,
    Person = 1,
    Organization = 2,
    Location = 3,
    Time = 4,
    Money = 5,
}

impl NamedEntityType {
    /// Case-insensitive; anything outside the tag set maps to `None`.
    pub fn from_tag(tag: &str) -> NamedEntityType {
        match tag.to_ascii_uppercase().as_str() {
            "PERSON" => NamedEntityType::Person,
            "ORGANIZATION" => NamedEntityType::Organization,
            "LOCATION" => NamedEntityType::Location,
            "TIME" => NamedEntityType::Time,
            "MONEY" => NamedEntityType::Money,
            _ => NamedEntityType::None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            NamedEntityType::None => "NONE",
            NamedEntityType::Person => "PERSON",
            NamedEntityType::Organization => "ORGANIZATION",
            NamedEntityType::Location => "LOCATION",
            NamedEntityType::Time => "TIME",
            NamedEntityType::Money => "MONEY",
        }
    }
}

impl fmt::Display for NamedEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Polarity {
    Positive = 0,
    Negative = 1,
    Neutral = 2,
}

impl Polarity {
    /// `positive`/`pos` and `negative`/`neg` in any case; everything else is neutral.
    pub fn from_tag(tag: &str) -> Polarity {
        match tag.to_ascii_lowercase().as_str() {
            "positive" | "pos" => Polarity::Positive,
            "negative" | "neg" => Polarity::Negative,
            _ => Polarity::Neutral,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PropBank semantic role, written `ROLE` or `ROLE$id` where `id` names
/// the predicate the role is connected to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Argument {
    pub role: String,
    pub id: Option<String>,
}

impl Argument {
    pub const PREDICATE: &'static str = "PREDICATE";

    pub fn new(argument: &str) -> Self {
        match argument.split_once('$') {
            Some((role, id)) => Self {
                role: role.to_owned(),
                id: Some(id.to_owned()),
            },
            None => Self {
                role: argument.to_owned(),
                id: None,
            },
        }
    }

    /// The `NONE` role assigned to freshly analysed words.
    pub fn none() -> Self {
        Self::new("NONE")
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}${}", self.role, id),
            None => f.write_str(&self.role),
        }
    }
}

/// FrameNet element, written `ROLE` or `ROLE$frame$id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct FrameElement {
    pub role: String,
    pub frame: Option<String>,
    pub id: Option<String>,
}

impl FrameElement {
    pub fn new(element: &str) -> Self {
        let (Some(first), Some(last)) = (element.find('$'), element.rfind('$')) else {
            return Self {
                role: element.to_owned(),
                frame: None,
                id: None,
            };
        };
        // A single '$' leaves the frame empty.
        let frame = if first < last { &element[first + 1..last] } else { "" };
        Self {
            role: element[..first].to_owned(),
            frame: Some(frame.to_owned()),
            id: Some(element[last + 1..].to_owned()),
        }
    }
}

impl fmt::Display for FrameElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(
                f,
                "{}${}${}",
                self.role,
                self.frame.as_deref().unwrap_or(""),
                id
            ),
            None => f.write_str(&self.role),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum SlotType {
    Begin = 0,
    Inside = 1,
    Outside = 2,
}

/// Slot-filling tag in IOB form: `O`, `B-tag` or `I-tag`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Slot {
    pub kind: SlotType,
    pub tag: Option<String>,
}

impl Slot {
    /// Anything that is not `B-…`/`I-…` is read as `O`.
    pub fn new(slot: &str) -> Self {
        let kind = match slot.get(..2) {
            Some("B-") => SlotType::Begin,
            Some("I-") => SlotType::Inside,
            _ => {
                return Self {
                    kind: SlotType::Outside,
                    tag: None,
                }
            }
        };
        Self {
            kind,
            tag: Some(slot[2..].to_owned()),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag.as_deref().unwrap_or("");
        match self.kind {
            SlotType::Begin => write!(f, "B-{}", tag),
            SlotType::Inside => write!(f, "I-{}", tag),
            SlotType::Outside => f.write_str("O"),
        }
    }
}

/// Head/label pair of the universal dependency layer. `to` is the 1-based
/// index of the head word, 0 for the root of the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct UniversalDependencyRelation {
    to: i32,
    label: String,
}

impl UniversalDependencyRelation {
    pub fn new(to: i32, label: impl Into<String>) -> Self {
        Self {
            to,
            label: label.into(),
        }
    }

    pub fn to(&self) -> i32 {
        self.to
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Scores this relation against a reference relation: attachment is
    /// the head index, labels are compared case-insensitively.
    pub fn compare(&self, other: &UniversalDependencyRelation) -> ParserEvaluationScore {
        let attached = self.to == other.to;
        let labelled = self.label.eq_ignore_ascii_case(&other.label);
        ParserEvaluationScore::single(attached && labelled, attached, labelled)
    }
}

impl fmt::Display for UniversalDependencyRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Universal Dependencies part-of-speech tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum UniversalPos {
    Adj = 0,
    Adp = 1,
    Adv = 2,
    Aux = 3,
    Cconj = 4,
    Det = 5,
    Intj = 6,
    Noun = 7,
    Num = 8,
    Part = 9,
    Pron = 10,
    Propn = 11,
    Punct = 12,
    Sconj = 13,
    Sym = 14,
    Verb = 15,
    X = 16,
}

impl UniversalPos {
    pub const fn as_str(self) -> &'static str {
        match self {
            UniversalPos::Adj => "ADJ",
            UniversalPos::Adp => "ADP",
            UniversalPos::Adv => "ADV",
            UniversalPos::Aux => "AUX",
            UniversalPos::Cconj => "CCONJ",
            UniversalPos::Det => "DET",
            UniversalPos::Intj => "INTJ",
            UniversalPos::Noun => "NOUN",
            UniversalPos::Num => "NUM",
            UniversalPos::Part => "PART",
            UniversalPos::Pron => "PRON",
            UniversalPos::Propn => "PROPN",
            UniversalPos::Punct => "PUNCT",
            UniversalPos::Sconj => "SCONJ",
            UniversalPos::Sym => "SYM",
            UniversalPos::Verb => "VERB",
            UniversalPos::X => "X",
        }
    }
}

impl fmt::Display for UniversalPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
