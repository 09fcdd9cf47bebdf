//! Sentence strings with selected words marked up for display.

use std::ops::RangeInclusive;

use crate::sentence::AnnotatedSentence;
use crate::word::AnnotatedWord;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Plain,
    Focus,
    Related,
}

fn render<'a>(words: impl Iterator<Item = (&'a AnnotatedWord, Mark)>) -> String {
    let mut result = String::new();
    for (word, mark) in words {
        let color = match mark {
            Mark::Plain => {
                result.push(' ');
                result.push_str(word.name());
                continue;
            }
            Mark::Focus => "red",
            Mark::Related => "blue",
        };
        result.push_str(&format!(
            " <b><font color=\"{}\">{}</font></b>",
            color,
            word.name()
        ));
    }
    result
}

impl AnnotatedSentence {
    /// The word at `word_index` in red, its dependency head in blue.
    pub fn to_dependency_string(&self, word_index: usize) -> String {
        let head = self
            .word(word_index)
            .and_then(AnnotatedWord::universal_dependency)
            .map(|relation| relation.to());
        render(self.words().iter().enumerate().map(|(k, word)| {
            let mark = if k == word_index {
                Mark::Focus
            } else if head == Some(k as i32 + 1) {
                Mark::Related
            } else {
                Mark::Plain
            };
            (word, mark)
        }))
    }

    /// The chunk around `word_index` in blue.
    pub fn to_shallow_parse_string(&self, word_index: usize) -> String {
        let span = self.run_around(word_index, |w| w.shallow_parse().map(str::to_owned));
        self.render_span(span)
    }

    /// The named entity around `word_index` in blue.
    pub fn to_named_entity_string(&self, word_index: usize) -> String {
        let span = self.run_around(word_index, AnnotatedWord::named_entity_type);
        self.render_span(span)
    }

    fn render_span(&self, span: RangeInclusive<usize>) -> String {
        render(self.words().iter().enumerate().map(|(k, word)| {
            let mark = if span.contains(&k) {
                Mark::Related
            } else {
                Mark::Plain
            };
            (word, mark)
        }))
    }

    /// Widest run of neighbours around `index` whose key is set and equal
    /// to the key of the word at `index`.
    fn run_around<T, F>(&self, index: usize, key: F) -> RangeInclusive<usize>
    where
        T: PartialEq,
        F: Fn(&AnnotatedWord) -> Option<T>,
    {
        let words = self.words();
        let Some(center) = words.get(index) else {
            return index..=index;
        };
        let target = key(center);
        let same = |word: &AnnotatedWord| {
            let k = key(word);
            k.is_some() && k == target
        };

        let mut start = index;
        while start > 0 && same(&words[start - 1]) {
            start -= 1;
        }
        let mut end = index;
        while end + 1 < words.len() && same(&words[end + 1]) {
            end += 1;
        }
        start..=end
    }
}
