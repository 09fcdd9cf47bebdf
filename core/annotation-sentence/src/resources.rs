//! Lookups the sentence views consult but do not own: gazetteers, frame
//! inventories and a lexical database.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use annotation_morph::{MetamorphicParse, MorphologicalParse};
use tracing::debug;

use crate::error::{AnnotationError, Result};

/// Lowercases with Turkish dotted/dotless `i` rules.
pub fn to_turkish_lowercase(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            'I' => 'ı'.to_lowercase(),
            'İ' => 'i'.to_lowercase(),
            _ => c.to_lowercase(),
        })
        .collect()
}

/// A named list of entity surface forms, e.g. a list of city names whose
/// name is the entity tag `LOCATION`.
pub trait Gazetteer {
    fn name(&self) -> &str;
    fn contains(&self, word: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct WordListGazetteer {
    name: String,
    words: HashSet<String>,
}

impl WordListGazetteer {
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            words: words
                .into_iter()
                .map(|w| to_turkish_lowercase(w.as_ref().trim()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// One entry per line.
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| AnnotationError::io(path, e))?;
        let gazetteer = Self::new(name, data.lines());
        debug!(path = %path.display(), entries = gazetteer.words.len(), "loaded gazetteer");
        Ok(gazetteer)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Gazetteer for WordListGazetteer {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// PropBank frameset inventory keyed by synset id.
pub trait FramesetLookup {
    fn frame_exists(&self, synset_id: &str) -> bool;
}

/// FrameNet lexical units keyed by synset id.
pub trait FrameNetLookup {
    fn lexical_unit_exists(&self, synset_id: &str) -> bool;
}

macro_rules! impl_lookup_for_sets {
    ($($set:ident),*) => {
        $(
            impl FramesetLookup for $set<String> {
                fn frame_exists(&self, synset_id: &str) -> bool {
                    self.contains(synset_id)
                }
            }

            impl FrameNetLookup for $set<String> {
                fn lexical_unit_exists(&self, synset_id: &str) -> bool {
                    self.contains(synset_id)
                }
            }
        )*
    };
}

impl_lookup_for_sets!(HashSet, BTreeSet);

/// The two parse layers of one word, as handed to a lexical resource.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParsePair<'a> {
    pub parse: Option<&'a MorphologicalParse>,
    pub metamorphic_parse: Option<&'a MetamorphicParse>,
}

/// A WordNet-like database that proposes literals and synsets for single
/// words and for two- or three-word idioms.
pub trait LexicalResource {
    type Literal;
    type SynSet;

    fn construct_literals(
        &self,
        root: &str,
        parse: &MorphologicalParse,
        metamorphic_parse: Option<&MetamorphicParse>,
    ) -> Vec<Self::Literal>;

    /// `window` holds two or three consecutive words.
    fn construct_idiom_literals(&self, window: &[ParsePair<'_>]) -> Vec<Self::Literal>;

    fn construct_synsets(
        &self,
        root: &str,
        parse: &MorphologicalParse,
        metamorphic_parse: Option<&MetamorphicParse>,
    ) -> Vec<Self::SynSet>;

    /// `window` holds two or three consecutive words.
    fn construct_idiom_synsets(&self, window: &[ParsePair<'_>]) -> Vec<Self::SynSet>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_turkish_lowercase() {
        assert_eq!(to_turkish_lowercase("IŞIK"), "ışık");
        assert_eq!(to_turkish_lowercase("İstanbul'da"), "istanbul'da");
        assert_eq!(to_turkish_lowercase("Ankara"), "ankara");
    }

    #[test]
    fn test_gazetteer_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "İstanbul\nANKARA\n\nizmir").unwrap();

        let gazetteer = WordListGazetteer::from_file("LOCATION", file.path()).unwrap();
        assert_eq!(gazetteer.name(), "LOCATION");
        assert_eq!(gazetteer.len(), 3);
        assert!(gazetteer.contains("istanbul"));
        assert!(gazetteer.contains("ankara"));
        assert!(!gazetteer.contains("Ankara"));
    }

    #[test]
    fn test_missing_gazetteer_file() {
        let err = WordListGazetteer::from_file("LOCATION", "/nonexistent/gazetteer.txt");
        assert!(matches!(err, Err(AnnotationError::Io { .. })));
    }

    #[test]
    fn test_set_lookups() {
        let frames: HashSet<String> = ["TUR10-0001".to_owned()].into_iter().collect();
        assert!(frames.frame_exists("TUR10-0001"));
        assert!(!frames.lexical_unit_exists("TUR10-0002"));
    }
}
