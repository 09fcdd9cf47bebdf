use crate::resources::{LexicalResource, ParsePair};
use crate::sentence::AnnotatedSentence;
use crate::word::AnnotatedWord;

fn pair(word: &AnnotatedWord) -> ParsePair<'_> {
    ParsePair {
        parse: word.parse(),
        metamorphic_parse: word.metamorphic_parse(),
    }
}

impl AnnotatedSentence {
    /// Pairs for positions `start..start + len`, or `None` when the window
    /// leaves the sentence.
    fn window(&self, start: Option<usize>, len: usize) -> Option<Vec<ParsePair<'_>>> {
        let start = start?;
        let words = self.words().get(start..start.checked_add(len)?)?;
        Some(words.iter().map(pair).collect())
    }

    /// Literal candidates for the word at `word_index`: the word itself,
    /// then the idioms it opens (`[w, w+1, w+2]`, `[w, w+1]`).
    pub fn construct_literals<R>(&self, resource: &R, word_index: usize) -> Vec<R::Literal>
    where
        R: LexicalResource + ?Sized,
    {
        let mut literals = Vec::new();
        let Some(word) = self.word(word_index) else {
            return literals;
        };
        if let Some(parse) = word.parse() {
            literals.extend(resource.construct_literals(
                parse.root(),
                parse,
                word.metamorphic_parse(),
            ));
        }
        for len in [3, 2] {
            if let Some(window) = self.window(Some(word_index), len) {
                literals.extend(resource.construct_idiom_literals(&window));
            }
        }
        literals
    }

    /// Synset candidates for the word at `word_index`: the word itself,
    /// then every idiom window around it (`[w-2, w-1, w]`, `[w-1, w]`,
    /// `[w-1, w, w+1]`, `[w, w+1, w+2]`, `[w, w+1]`).
    pub fn construct_synsets<R>(&self, resource: &R, word_index: usize) -> Vec<R::SynSet>
    where
        R: LexicalResource + ?Sized,
    {
        let mut synsets = Vec::new();
        let Some(word) = self.word(word_index) else {
            return synsets;
        };
        if let Some(parse) = word.parse() {
            synsets.extend(resource.construct_synsets(
                parse.root(),
                parse,
                word.metamorphic_parse(),
            ));
        }
        let windows = [
            (word_index.checked_sub(2), 3),
            (word_index.checked_sub(1), 2),
            (word_index.checked_sub(1), 3),
            (Some(word_index), 3),
            (Some(word_index), 2),
        ];
        for (start, len) in windows {
            if let Some(window) = self.window(start, len) {
                synsets.extend(resource.construct_idiom_synsets(&window));
            }
        }
        synsets
    }
}
