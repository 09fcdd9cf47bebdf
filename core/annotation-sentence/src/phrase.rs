use crate::word::AnnotatedWord;

/// A run of consecutive words of one sentence sharing a shallow-parse tag.
/// Borrowed from the sentence; never stored.
#[derive(Debug, Clone, Copy)]
pub struct AnnotatedPhrase<'a> {
    word_index: usize,
    tag: Option<&'a str>,
    words: &'a [AnnotatedWord],
}

impl<'a> AnnotatedPhrase<'a> {
    pub(crate) fn new(word_index: usize, tag: Option<&'a str>, words: &'a [AnnotatedWord]) -> Self {
        Self {
            word_index,
            tag,
            words,
        }
    }

    /// Position of the first word in the sentence.
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// Tag of the first word.
    pub fn tag(&self) -> Option<&'a str> {
        self.tag
    }

    pub fn words(&self) -> &'a [AnnotatedWord] {
        self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Surface names joined by spaces.
    pub fn to_words(&self) -> String {
        self.words
            .iter()
            .map(AnnotatedWord::name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
