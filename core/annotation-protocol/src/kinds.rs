use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// The closed vocabulary of annotation layers.
///
/// Declaration order is the canonical output order of the word format;
/// `ALL` lists the kinds in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum LayerKind {
    MorphologicalAnalysis = 0,
    MetaMorphemes = 1,
    Semantics = 2,
    NamedEntity = 3,
    Propbank = 4,
    Framenet = 5,
    ShallowParse = 6,
    UniversalDependency = 7,
    Slot = 8,
    Polarity = 9,
    Ccg = 10,
    PosTag = 11,
}

impl LayerKind {
    pub const ALL: [LayerKind; 12] = [
        LayerKind::MorphologicalAnalysis,
        LayerKind::MetaMorphemes,
        LayerKind::Semantics,
        LayerKind::NamedEntity,
        LayerKind::Propbank,
        LayerKind::Framenet,
        LayerKind::ShallowParse,
        LayerKind::UniversalDependency,
        LayerKind::Slot,
        LayerKind::Polarity,
        LayerKind::Ccg,
        LayerKind::PosTag,
    ];

    /// Layer type string used inside `{type=value}`.
    pub const fn tag(self) -> &'static str {
        match self {
            LayerKind::MorphologicalAnalysis => "morphologicalAnalysis",
            LayerKind::MetaMorphemes => "metaMorphemes",
            LayerKind::Semantics => "semantics",
            LayerKind::NamedEntity => "namedEntity",
            LayerKind::Propbank => "propbank",
            LayerKind::Framenet => "framenet",
            LayerKind::ShallowParse => "shallowParse",
            LayerKind::UniversalDependency => "universalDependency",
            LayerKind::Slot => "slot",
            LayerKind::Polarity => "polarity",
            LayerKind::Ccg => "ccg",
            LayerKind::PosTag => "posTag",
        }
    }

    /// Case-sensitive lookup; unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<LayerKind> {
        LayerKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub const fn flag(self) -> LayerFlags {
        LayerFlags::from_bits_truncate(1u16 << (self as u16))
    }
}

bitflags! {
    /// Presence set over [`LayerKind`], one bit per kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct LayerFlags: u16 {
        const MORPHOLOGICAL_ANALYSIS = 1;
        const META_MORPHEMES = 2;
        const SEMANTICS = 4;
        const NAMED_ENTITY = 8;
        const PROPBANK = 16;
        const FRAMENET = 32;
        const SHALLOW_PARSE = 64;
        const UNIVERSAL_DEPENDENCY = 128;
        const SLOT = 256;
        const POLARITY = 512;
        const CCG = 1024;
        const POS_TAG = 2048;
    }
}

impl LayerFlags {
    /// Kinds contained in the set, in canonical order.
    pub fn kinds(self) -> impl Iterator<Item = LayerKind> {
        LayerKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(kind.flag()))
    }
}
