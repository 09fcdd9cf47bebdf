use annotation_morph::tags;

use crate::resources::{FrameNetLookup, FramesetLookup};
use crate::sentence::AnnotatedSentence;
use crate::word::AnnotatedWord;

fn is_verb_root_and_surface(word: &AnnotatedWord) -> bool {
    word.parse().map_or(false, |parse| {
        parse.root_pos() == Some(tags::VERB) && parse.pos() == Some(tags::VERB)
    })
}

impl AnnotatedSentence {
    /// The verb nearest to `index`, looking both ways. With a backward
    /// distance strictly larger than the forward one the backward verb
    /// wins, otherwise the forward one; a missing side counts as 0, so
    /// with no verb at all the word at `index` itself comes back.
    ///
    /// Returns `None` only when `index` is out of range.
    pub fn predicate(&self, index: usize) -> Option<&AnnotatedWord> {
        let words = self.words();
        if index >= words.len() {
            return None;
        }

        let backward = (0..=index)
            .rev()
            .find(|&i| is_verb_root_and_surface(&words[i]))
            .map_or(0, |i| index - i);
        // The forward window is `len - index` positions starting at `index`.
        let forward = (index..words.len())
            .find(|&i| is_verb_root_and_surface(&words[i]))
            .map_or(0, |i| i - index);

        if backward > forward {
            words.get(index - backward)
        } else {
            words.get(index + forward)
        }
    }

    /// Verbs whose sense has a PropBank frameset, plus the words that
    /// extend them leftwards into a multiword predicate.
    pub fn predicate_candidates<F>(&self, frameset: &F) -> Vec<&AnnotatedWord>
    where
        F: FramesetLookup + ?Sized,
    {
        self.candidates(|semantic| frameset.frame_exists(semantic))
    }

    /// Verbs whose sense is a FrameNet lexical unit, plus the words that
    /// extend them leftwards into a multiword predicate.
    pub fn predicate_frame_candidates<F>(&self, frame_net: &F) -> Vec<&AnnotatedWord>
    where
        F: FrameNetLookup + ?Sized,
    {
        self.candidates(|semantic| frame_net.lexical_unit_exists(semantic))
    }

    fn candidates(&self, has_frame: impl Fn(&str) -> bool) -> Vec<&AnnotatedWord> {
        let words = self.words();
        let mut selected = vec![false; words.len()];
        let mut order: Vec<usize> = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let is_verb = word.parse().map_or(false, |parse| parse.is_verb());
            if is_verb && word.semantic().map_or(false, &has_frame) {
                selected[i] = true;
                order.push(i);
            }
        }

        // Exactly two leftward passes: a predicate spans at most three words.
        for pass in 0..2 {
            for j in 0..words.len().saturating_sub(pass + 1) {
                let same_sense = words[j].semantic().is_some()
                    && words[j].semantic() == words[j + 1].semantic();
                if !selected[j] && selected[j + 1] && same_sense {
                    selected[j] = true;
                    order.push(j);
                }
            }
        }

        order.into_iter().map(|i| &words[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ran_and_came() -> AnnotatedSentence {
        AnnotatedSentence::from_line(
            "{turkish=Ali}{morphologicalAnalysis=Ali+NOUN+PROP+A3SG+PNON+NOM} \
             {turkish=okulda}{morphologicalAnalysis=okul+NOUN+A3SG+PNON+LOC} \
             {turkish=koştu}{morphologicalAnalysis=koş+VERB+POS+PAST+A3SG} \
             {turkish=ve}{morphologicalAnalysis=ve+CONJ} \
             {turkish=geldi}{morphologicalAnalysis=gel+VERB+POS+PAST+A3SG}",
        )
    }

    #[test]
    fn test_predicate_tie_prefers_forward() {
        let sentence = ran_and_came();
        assert_eq!(sentence.predicate(3).map(AnnotatedWord::name), Some("geldi"));
    }

    #[test]
    fn test_predicate_forward_window_reaches_sentence_end() {
        // Bounding the forward scan at position `len - index` (2 here)
        // would find nothing forward, and reading the backward distance
        // as a position would give "okulda". The window runs to the end.
        let sentence = ran_and_came();
        assert_ne!(sentence.predicate(3).map(AnnotatedWord::name), Some("okulda"));
        assert_eq!(sentence.predicate(3).map(AnnotatedWord::name), Some("geldi"));
        assert_eq!(sentence.predicate(4).map(AnnotatedWord::name), Some("geldi"));
    }

    #[test]
    fn test_predicate_nearest_side() {
        let sentence = ran_and_came();
        assert_eq!(sentence.predicate(2).map(AnnotatedWord::name), Some("koştu"));
        assert_eq!(sentence.predicate(1).map(AnnotatedWord::name), Some("koştu"));
        assert_eq!(sentence.predicate(0).map(AnnotatedWord::name), Some("koştu"));
        assert!(sentence.predicate(5).is_none());
    }

    #[test]
    fn test_predicate_backward_only() {
        let sentence = AnnotatedSentence::from_line(
            "{turkish=geldi}{morphologicalAnalysis=gel+VERB+POS+PAST+A3SG} {turkish=ve} {turkish=.}",
        );
        assert_eq!(sentence.predicate(2).map(AnnotatedWord::name), Some("geldi"));
    }

    #[test]
    fn test_derived_verb_is_not_a_predicate() {
        // Root POS is NOUN, so the verbal last group does not count.
        let sentence = AnnotatedSentence::from_line(
            "{turkish=a} {turkish=evlendi}{morphologicalAnalysis=ev+NOUN+A3SG+PNON+NOM^DB+VERB+BECOME+POS+PAST+A3SG}",
        );
        assert_eq!(sentence.predicate(0).map(AnnotatedWord::name), Some("a"));
    }

    #[test]
    fn test_candidate_propagation_is_bounded() {
        let verb = "{morphologicalAnalysis=et+VERB+POS+PAST+A3SG}";
        let sentence = AnnotatedSentence::from_line(&format!(
            "{{turkish=w0}}{{semantics=S1}} {{turkish=w1}}{{semantics=S1}} \
             {{turkish=w2}}{{semantics=S1}} {{turkish=w3}}{{semantics=S1}} \
             {{turkish=w4}}{{semantics=S1}}{}",
            verb
        ));
        let frames: HashSet<String> = ["S1".to_owned()].into_iter().collect();

        let names: Vec<&str> = sentence
            .predicate_candidates(&frames)
            .into_iter()
            .map(AnnotatedWord::name)
            .collect();
        assert_eq!(names, ["w4", "w3", "w2"]);

        let names: Vec<&str> = sentence
            .predicate_frame_candidates(&frames)
            .into_iter()
            .map(AnnotatedWord::name)
            .collect();
        assert_eq!(names, ["w4", "w3", "w2"]);
    }

    #[test]
    fn test_candidates_need_a_known_frame() {
        let sentence = ran_and_came();
        let frames: HashSet<String> = HashSet::new();
        assert!(sentence.predicate_candidates(&frames).is_empty());
    }
}
