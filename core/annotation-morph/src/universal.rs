use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use annotation_protocol::UniversalPos;

use crate::parse::MorphologicalParse;
use crate::tags;

/// Universal features contributed by a single tag. Later groups override
/// earlier ones, so a derived word reports the case of its last group.
const TAG_FEATURES: &[(&str, &[(&str, &str)])] = &[
    // Case
    ("NOM", &[("Case", "Nom")]),
    ("ACC", &[("Case", "Acc")]),
    ("DAT", &[("Case", "Dat")]),
    ("LOC", &[("Case", "Loc")]),
    ("ABL", &[("Case", "Abl")]),
    ("GEN", &[("Case", "Gen")]),
    ("INS", &[("Case", "Ins")]),
    ("EQU", &[("Case", "Equ")]),
    // Agreement
    ("A1SG", &[("Number", "Sing"), ("Person", "1")]),
    ("A2SG", &[("Number", "Sing"), ("Person", "2")]),
    ("A3SG", &[("Number", "Sing"), ("Person", "3")]),
    ("A1PL", &[("Number", "Plur"), ("Person", "1")]),
    ("A2PL", &[("Number", "Plur"), ("Person", "2")]),
    ("A3PL", &[("Number", "Plur"), ("Person", "3")]),
    // Possessive
    ("P1SG", &[("Number[psor]", "Sing"), ("Person[psor]", "1")]),
    ("P2SG", &[("Number[psor]", "Sing"), ("Person[psor]", "2")]),
    ("P3SG", &[("Number[psor]", "Sing"), ("Person[psor]", "3")]),
    ("P1PL", &[("Number[psor]", "Plur"), ("Person[psor]", "1")]),
    ("P2PL", &[("Number[psor]", "Plur"), ("Person[psor]", "2")]),
    ("P3PL", &[("Number[psor]", "Plur"), ("Person[psor]", "3")]),
    // Polarity
    ("POS", &[("Polarity", "Pos")]),
    ("NEG", &[("Polarity", "Neg")]),
    // Tense / aspect / evidentiality
    ("PAST", &[("Tense", "Past"), ("Evident", "Fh")]),
    ("NARR", &[("Tense", "Past"), ("Evident", "Nfh")]),
    ("FUT", &[("Tense", "Fut")]),
    ("AOR", &[("Tense", "Pres"), ("Aspect", "Hab")]),
    ("PROG1", &[("Tense", "Pres"), ("Aspect", "Prog")]),
    ("PROG2", &[("Tense", "Pres"), ("Aspect", "Prog")]),
    // Mood
    ("COND", &[("Mood", "Cnd")]),
    ("IMP", &[("Mood", "Imp")]),
    ("OPT", &[("Mood", "Opt")]),
    ("NECES", &[("Mood", "Nec")]),
    ("DESR", &[("Mood", "Des")]),
    ("ABLE", &[("Mood", "Pot")]),
    // Voice
    ("PASS", &[("Voice", "Pass")]),
    ("CAUS", &[("Voice", "Cau")]),
    ("RECIP", &[("Voice", "Rcp")]),
    ("REFLEX", &[("Voice", "Rfl")]),
    // Non-finite forms
    ("INF", &[("VerbForm", "Vnoun")]),
    ("INF2", &[("VerbForm", "Vnoun")]),
    ("INF3", &[("VerbForm", "Vnoun")]),
    ("PASTPART", &[("VerbForm", "Part")]),
    ("FUTPART", &[("VerbForm", "Part")]),
    ("PRESPART", &[("VerbForm", "Part")]),
    ("WHEN", &[("VerbForm", "Conv")]),
    ("SINCE", &[("VerbForm", "Conv")]),
    ("WHILE", &[("VerbForm", "Conv")]),
    ("BYDOINGSO", &[("VerbForm", "Conv")]),
    ("AFTERDOINGSO", &[("VerbForm", "Conv")]),
    ("WITHOUTHAVINGDONESO", &[("VerbForm", "Conv")]),
    ("ADAMANTLY", &[("VerbForm", "Conv")]),
    ("ASIF", &[("VerbForm", "Conv")]),
    // Numerals
    ("CARD", &[("NumType", "Card")]),
    ("ORD", &[("NumType", "Ord")]),
    ("DISTRIB", &[("NumType", "Dist")]),
    // Pronoun types
    ("PERSP", &[("PronType", "Prs")]),
    ("DEMONSP", &[("PronType", "Dem")]),
    ("QUESP", &[("PronType", "Int")]),
    ("QUANTP", &[("PronType", "Ind")]),
    ("REFLEXP", &[("Reflex", "Yes")]),
];

fn tag_features(tag: &str) -> &'static [(&'static str, &'static str)] {
    TAG_FEATURES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, features)| *features)
        .unwrap_or(&[])
}

impl MorphologicalParse {
    /// Maps the analysis onto the universal part-of-speech tag set.
    /// Every parse maps to some tag; `X` is the fallback.
    pub fn universal_dependency_pos(&self) -> UniversalPos {
        let root = self.root();
        let pos = self.pos();

        if root == "değil" {
            return UniversalPos::Aux;
        }
        if self.is_proper_noun() {
            return UniversalPos::Propn;
        }
        if self.is_noun() {
            return UniversalPos::Noun;
        }
        match pos {
            Some(tags::ADJ) => return UniversalPos::Adj,
            Some(tags::ADV) => return UniversalPos::Adv,
            Some(tags::INTERJ) => return UniversalPos::Intj,
            _ => {}
        }
        if self.is_verb() {
            return UniversalPos::Verb;
        }
        if pos == Some(tags::PUNC) || self.contains_tag(tags::HASHTAG) {
            return UniversalPos::Punct;
        }
        if self.contains_tag(tags::DET) {
            return UniversalPos::Det;
        }
        let numeric = [tags::DATE, tags::TIME, tags::ORDINAL, tags::FRACTION, tags::PERCENT];
        if pos == Some(tags::NUM) || numeric.iter().any(|tag| self.contains_tag(tag)) {
            return UniversalPos::Num;
        }
        match pos {
            Some(tags::PRON) => UniversalPos::Pron,
            Some(tags::POSTP) => UniversalPos::Adp,
            Some(tags::QUES) => UniversalPos::Aux,
            Some(tags::CONJ) => match root {
                "ki" | "mi" | "da" | "de" => UniversalPos::Part,
                _ => UniversalPos::Cconj,
            },
            _ => UniversalPos::X,
        }
    }

    /// Universal features as sorted `Name=Value` strings.
    pub fn universal_dependency_features(&self, upos: UniversalPos) -> Vec<String> {
        let verbal = matches!(upos, UniversalPos::Verb | UniversalPos::Aux);
        let mut features: BTreeMap<&str, &str> = BTreeMap::new();

        for group in self.groups() {
            for tag in group.tags() {
                for (name, value) in tag_features(tag) {
                    features.insert(*name, *value);
                }
            }
        }

        if !verbal {
            // Tense/mood/polarity belong to the verbal reading only.
            for name in ["Polarity", "Tense", "Mood", "Aspect", "Evident", "Voice"] {
                features.remove(name);
            }
        } else if !features.contains_key("VerbForm")
            && tags::AGREEMENT.iter().any(|tag| self.contains_tag(tag))
        {
            features.insert("VerbForm", "Fin");
        }

        features
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect()
    }
}
