use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Language of an annotated word. Selects the column sources used for
/// universal dependency output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Language {
    #[default]
    Turkish = 0,
    English = 1,
    Persian = 2,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Turkish, Language::English, Language::Persian];

    /// The layer tag that carries the surface name in the word format,
    /// e.g. `{turkish=ev}`.
    pub const fn tag(self) -> &'static str {
        match self {
            Language::Turkish => "turkish",
            Language::English => "english",
            Language::Persian => "persian",
        }
    }

    /// Exact, case-sensitive match against the language tags.
    pub fn from_tag(tag: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.tag() == tag)
    }
}
