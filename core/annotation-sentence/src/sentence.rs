use std::fmt;
use std::fs;
use std::path::Path;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use annotation_protocol::{Argument, ParserEvaluationScore};
use tracing::debug;

use crate::error::{AnnotationError, Result};
use crate::word::AnnotatedWord;

/// An ordered sequence of annotated words, optionally tied to the file it
/// was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AnnotatedSentence {
    words: Vec<AnnotatedWord>,
    file_name: Option<String>,
}

impl AnnotatedSentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The word annotation strings of one sentence line. Empty tokens
    /// and a trailing `\r` are skipped.
    pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
        line.split(' ')
            .map(|token| token.trim_end_matches('\r'))
            .filter(|token| !token.is_empty())
    }

    /// Splits `line` on spaces and decodes every non-empty token.
    pub fn from_line(line: &str) -> Self {
        Self {
            words: Self::tokens(line)
                .map(AnnotatedWord::from_annotation_string)
                .collect(),
            file_name: None,
        }
    }

    /// Reads the first line of `path`; later lines are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| AnnotationError::io(path, e))?;
        let mut sentence = Self::from_line(data.lines().next().unwrap_or_default());
        sentence.file_name = Some(path.display().to_string());
        debug!(path = %path.display(), words = sentence.word_count(), "loaded sentence");
        Ok(sentence)
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = Some(file_name.into());
    }

    pub fn add_word(&mut self, word: AnnotatedWord) {
        self.words.push(word);
    }

    pub fn word(&self, index: usize) -> Option<&AnnotatedWord> {
        self.words.get(index)
    }

    pub fn word_mut(&mut self, index: usize) -> Option<&mut AnnotatedWord> {
        self.words.get_mut(index)
    }

    pub fn words(&self) -> &[AnnotatedWord] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Removes the word at `index`, first re-pointing every dependency
    /// head: heads on the removed word are cleared, heads after it move
    /// down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.word_count()`.
    pub fn remove_word(&mut self, index: usize) {
        let removed = index as i32 + 1;
        let mut renumbered = 0usize;

        for word in &mut self.words {
            let Some(relation) = word.universal_dependency() else {
                continue;
            };
            let (to, label) = (relation.to(), relation.label().to_owned());
            if to == removed {
                word.set_universal_dependency(-1, "ROOT");
                renumbered += 1;
            } else if to > removed {
                word.set_universal_dependency(to - 1, &label);
                renumbered += 1;
            }
        }

        self.words.remove(index);
        debug!(index, renumbered, "removed word");
    }

    pub fn to_words(&self) -> String {
        self.words
            .iter()
            .map(AnnotatedWord::name)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parse roots joined by spaces; words without a parse contribute
    /// their surface name.
    pub fn to_stems(&self) -> String {
        self.words
            .iter()
            .map(|word| word.parse().map_or(word.name(), |parse| parse.root()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn contains_predicate(&self) -> bool {
        self.words.iter().any(|word| {
            word.argument()
                .map_or(false, |arg| arg.role == Argument::PREDICATE)
        })
    }

    pub fn contains_frame_predicate(&self) -> bool {
        self.words.iter().any(|word| {
            word.frame_element()
                .map_or(false, |fe| fe.role == Argument::PREDICATE)
        })
    }

    /// Moves every argument and frame element connected to `previous_id`
    /// over to `current_id`. Returns whether anything changed.
    pub fn update_connected_predicate(&mut self, previous_id: &str, current_id: &str) -> bool {
        let mut modified = false;
        for word in &mut self.words {
            let argument = word
                .argument()
                .filter(|arg| arg.id.as_deref() == Some(previous_id))
                .map(|arg| format!("{}${}", arg.role, current_id));
            if let Some(argument) = argument {
                word.set_argument(Some(&argument));
                modified = true;
            }

            let frame_element = word
                .frame_element()
                .filter(|fe| fe.id.as_deref() == Some(previous_id))
                .map(|fe| {
                    format!(
                        "{}${}${}",
                        fe.role,
                        fe.frame.as_deref().unwrap_or(""),
                        current_id
                    )
                });
            if let Some(frame_element) = frame_element {
                word.set_frame_element(Some(&frame_element));
                modified = true;
            }
        }
        modified
    }

    /// Scores the dependency relations of this sentence against `other`,
    /// position by position. Positions where either side has no relation
    /// are skipped; extra words on the longer side are ignored.
    pub fn compare_parses(&self, other: &AnnotatedSentence) -> ParserEvaluationScore {
        let mut score = ParserEvaluationScore::new();
        for (mine, theirs) in self.words.iter().zip(&other.words) {
            if let (Some(r1), Some(r2)) = (mine.universal_dependency(), theirs.universal_dependency())
            {
                score += r1.compare(r2);
            }
        }
        score
    }

    /// Writes the sentence as a single line of annotation strings.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, format!("{}\n", self)).map_err(|e| AnnotationError::io(path, e))
    }
}

impl fmt::Display for AnnotatedSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}
