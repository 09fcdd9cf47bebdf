use crate::phrase::AnnotatedPhrase;
use crate::sentence::AnnotatedSentence;
use crate::word::AnnotatedWord;

/// Lazy left-to-right chunking of a sentence by shallow-parse tag. A new
/// phrase starts where a tagged word is followed by a word with a
/// different tag; an untagged word never closes a phrase.
///
/// Clone the iterator (or ask the sentence again) to restart.
#[derive(Debug, Clone)]
pub struct ShallowParseGroups<'a> {
    words: &'a [AnnotatedWord],
    position: usize,
}

impl<'a> Iterator for ShallowParseGroups<'a> {
    type Item = AnnotatedPhrase<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.position;
        let first = self.words.get(start)?;

        let mut end = start + 1;
        while let Some(word) = self.words.get(end) {
            let previous = self.words[end - 1].shallow_parse();
            if previous.is_some() && previous != word.shallow_parse() {
                break;
            }
            end += 1;
        }

        self.position = end;
        Some(AnnotatedPhrase::new(
            start,
            first.shallow_parse(),
            &self.words[start..end],
        ))
    }
}

impl AnnotatedSentence {
    pub fn shallow_parse_groups(&self) -> ShallowParseGroups<'_> {
        ShallowParseGroups {
            words: self.words(),
            position: 0,
        }
    }
}
