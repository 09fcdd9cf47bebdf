use std::fmt;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use annotation_codec::{decode, encode, DecodedWord, LayerSet};
use annotation_morph::{tags, MetamorphicParse, MorphologicalParse};
use annotation_protocol::{
    Argument, FrameElement, Language, LayerFlags, LayerKind, NamedEntityType, Polarity, Slot,
    UniversalDependencyRelation, UniversalPos,
};

use crate::penn;
use crate::resources::{to_turkish_lowercase, Gazetteer};

/// One word of a sentence together with every annotation layer it
/// carries. Each layer is independent: setting one never touches another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AnnotatedWord {
    name: String,
    language: Language,
    layers: LayerSet,
}

impl AnnotatedWord {
    /// Reads `name{type=value}...`; unknown layers are dropped.
    pub fn from_annotation_string(annotation: &str) -> Self {
        Self::from(decode(annotation))
    }

    /// Wraps an analyser result. Named entity and argument start as `NONE`.
    pub fn from_morphological_parse(name: impl Into<String>, parse: MorphologicalParse) -> Self {
        let mut word = Self::from_named_entity_tag(name, NamedEntityType::None);
        word.layers.parse = Some(parse);
        word
    }

    /// Like [`from_morphological_parse`](Self::from_morphological_parse),
    /// also keeping the metamorpheme segmentation.
    pub fn from_parses(
        name: impl Into<String>,
        parse: MorphologicalParse,
        metamorphic_parse: MetamorphicParse,
    ) -> Self {
        let mut word = Self::from_morphological_parse(name, parse);
        word.layers.metamorphic_parse = Some(metamorphic_parse);
        word
    }

    pub fn from_named_entity_tag(name: impl Into<String>, named_entity: NamedEntityType) -> Self {
        let mut layers = LayerSet::new();
        layers.named_entity = Some(named_entity);
        layers.argument = Some(Argument::none());
        Self {
            name: name.into(),
            language: Language::Turkish,
            layers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    /// Serialized value of one layer, as written inside `{type=value}`.
    pub fn layer_value(&self, kind: LayerKind) -> Option<String> {
        self.layers.value(kind)
    }

    pub fn layer_kinds(&self) -> LayerFlags {
        self.layers.kinds()
    }

    pub fn parse(&self) -> Option<&MorphologicalParse> {
        self.layers.parse.as_ref()
    }

    pub fn set_parse(&mut self, parse: Option<&str>) {
        self.layers.parse = parse.map(MorphologicalParse::new);
    }

    pub fn metamorphic_parse(&self) -> Option<&MetamorphicParse> {
        self.layers.metamorphic_parse.as_ref()
    }

    pub fn set_metamorphic_parse(&mut self, parse: Option<&str>) {
        self.layers.metamorphic_parse = parse.map(MetamorphicParse::new);
    }

    pub fn semantic(&self) -> Option<&str> {
        self.layers.semantic.as_deref()
    }

    pub fn set_semantic(&mut self, semantic: Option<&str>) {
        self.layers.semantic = semantic.map(ToOwned::to_owned);
    }

    pub fn named_entity_type(&self) -> Option<NamedEntityType> {
        self.layers.named_entity
    }

    pub fn set_named_entity_type(&mut self, named_entity: Option<&str>) {
        self.layers.named_entity = named_entity.map(NamedEntityType::from_tag);
    }

    pub fn argument(&self) -> Option<&Argument> {
        self.layers.argument.as_ref()
    }

    pub fn set_argument(&mut self, argument: Option<&str>) {
        self.layers.argument = argument.map(Argument::new);
    }

    pub fn frame_element(&self) -> Option<&FrameElement> {
        self.layers.frame_element.as_ref()
    }

    pub fn set_frame_element(&mut self, frame_element: Option<&str>) {
        self.layers.frame_element = frame_element.map(FrameElement::new);
    }

    pub fn slot(&self) -> Option<&Slot> {
        self.layers.slot.as_ref()
    }

    pub fn set_slot(&mut self, slot: Option<&str>) {
        self.layers.slot = slot.map(Slot::new);
    }

    pub fn polarity(&self) -> Option<Polarity> {
        self.layers.polarity
    }

    pub fn set_polarity(&mut self, polarity: Option<&str>) {
        self.layers.polarity = polarity.map(Polarity::from_tag);
    }

    pub fn shallow_parse(&self) -> Option<&str> {
        self.layers.shallow_parse.as_deref()
    }

    pub fn set_shallow_parse(&mut self, shallow_parse: Option<&str>) {
        self.layers.shallow_parse = shallow_parse.map(ToOwned::to_owned);
    }

    pub fn universal_dependency(&self) -> Option<&UniversalDependencyRelation> {
        self.layers.universal_dependency.as_ref()
    }

    /// A negative `to` clears the relation. No bound check here; the
    /// sentence length is only consulted when formatting.
    pub fn set_universal_dependency(&mut self, to: i32, label: &str) {
        self.layers.universal_dependency = if to < 0 {
            None
        } else {
            Some(UniversalDependencyRelation::new(to, label))
        };
    }

    pub fn ccg(&self) -> Option<&str> {
        self.layers.ccg.as_deref()
    }

    pub fn set_ccg(&mut self, ccg: Option<&str>) {
        self.layers.ccg = ccg.map(ToOwned::to_owned);
    }

    pub fn pos_tag(&self) -> Option<&str> {
        self.layers.pos_tag.as_deref()
    }

    pub fn set_pos_tag(&mut self, pos_tag: Option<&str>) {
        self.layers.pos_tag = pos_tag.map(ToOwned::to_owned);
    }

    /// Turkish words map their morphological parse, English words their
    /// Penn tag. `None` when neither applies.
    pub fn universal_dependency_pos(&self) -> Option<UniversalPos> {
        match (self.language, self.parse(), self.pos_tag()) {
            (Language::Turkish, Some(parse), _) => Some(parse.universal_dependency_pos()),
            (Language::English, _, Some(pos_tag)) => penn::universal_pos(pos_tag),
            _ => None,
        }
    }

    pub fn universal_dependency_features(&self) -> Vec<String> {
        match (self.language, self.parse(), self.pos_tag()) {
            (Language::Turkish, Some(parse), _) => {
                parse.universal_dependency_features(parse.universal_dependency_pos())
            }
            (Language::English, _, Some(pos_tag)) => penn::universal_features(pos_tag)
                .iter()
                .map(|f| (*f).to_owned())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The nine CoNLL-U columns after the word index. Head and relation
    /// are written only when the head fits in `sentence_length`.
    pub fn universal_dependency_format(&self, sentence_length: usize) -> String {
        let Some(upos) = self.universal_dependency_pos() else {
            return format!("{0}\t{0}\t_\t_\t_\t_\t_\t_\t_", self.name);
        };

        let lemma = match self.language {
            Language::English => self.metamorphic_parse().map_or(&*self.name, |m| m.root()),
            _ => self.parse().map_or(&*self.name, |p| p.root()),
        };
        let features = self.universal_dependency_features();
        let features = if features.is_empty() {
            "_".to_owned()
        } else {
            features.join("|")
        };
        let relation = match self.universal_dependency() {
            Some(rel) if usize::try_from(rel.to()).map_or(true, |to| to <= sentence_length) => {
                format!("{}\t{}", rel.to(), rel.label().to_lowercase())
            }
            _ => "_\t_".to_owned(),
        };

        format!(
            "{}\t{}\t{}\t_\t{}\t{}\t_\t_",
            self.name, lemma, upos, features, relation
        )
    }

    /// Tags the word with the gazetteer's name when the word (or the part
    /// before an apostrophe) is listed and the parse marks a proper noun.
    /// Never clears an existing tag.
    pub fn check_gazetteer<G: Gazetteer + ?Sized>(&mut self, gazetteer: &G) {
        let Some(parse) = self.parse() else {
            return;
        };
        if !parse.contains_tag(tags::PROPER_NOUN) {
            return;
        }
        let lowercase = to_turkish_lowercase(&self.name);
        let listed = gazetteer.contains(&lowercase)
            || lowercase
                .split_once('\'')
                .map_or(false, |(stem, _)| gazetteer.contains(stem));
        if listed {
            self.layers.named_entity = Some(NamedEntityType::from_tag(gazetteer.name()));
        }
    }
}

impl From<DecodedWord> for AnnotatedWord {
    fn from(word: DecodedWord) -> Self {
        Self {
            name: word.name,
            language: word.language,
            layers: word.layers,
        }
    }
}

impl fmt::Display for AnnotatedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&self.name, self.language, &self.layers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::WordListGazetteer;
    use proptest::prelude::*;

    #[test]
    fn test_named_constructors() {
        let word = AnnotatedWord::from_morphological_parse(
            "evde",
            MorphologicalParse::new("ev+NOUN+A3SG+PNON+LOC"),
        );
        assert_eq!(word.named_entity_type(), Some(NamedEntityType::None));
        assert_eq!(word.argument().map(ToString::to_string).as_deref(), Some("NONE"));
        assert_eq!(
            word.to_string(),
            "{turkish=evde}{morphologicalAnalysis=ev+NOUN+A3SG+PNON+LOC}\
             {namedEntity=NONE}{propbank=NONE}"
        );

        let word = AnnotatedWord::from_parses(
            "evde",
            MorphologicalParse::new("ev+NOUN+A3SG+PNON+LOC"),
            MetamorphicParse::new("ev+DA"),
        );
        assert_eq!(word.metamorphic_parse().map(|m| m.root()), Some("ev"));

        let word = AnnotatedWord::from_named_entity_tag("Ali", NamedEntityType::Person);
        assert!(word.parse().is_none());
        assert_eq!(
            word.layer_kinds(),
            LayerFlags::NAMED_ENTITY | LayerFlags::PROPBANK
        );
    }

    #[test]
    fn test_layer_value() {
        let word = AnnotatedWord::from_annotation_string(
            "{turkish=gitti}{universalDependency=0$ROOT}{polarity=neg}",
        );
        assert_eq!(
            word.layer_value(LayerKind::UniversalDependency).as_deref(),
            Some("0$ROOT")
        );
        assert_eq!(
            word.layer_value(LayerKind::Polarity).as_deref(),
            Some("negative")
        );
        assert_eq!(word.layer_value(LayerKind::Ccg), None);
    }

    #[test]
    fn test_negative_head_clears_relation() {
        let mut word = AnnotatedWord::from_annotation_string("{turkish=ev}{universalDependency=2$OBJ}");
        word.set_universal_dependency(7, "NMOD");
        assert_eq!(word.universal_dependency().map(|r| r.to()), Some(7));
        word.set_universal_dependency(-1, "ROOT");
        assert!(word.universal_dependency().is_none());
    }

    #[test]
    fn test_turkish_conllu_columns() {
        let word = AnnotatedWord::from_annotation_string(
            "{turkish=Ali}{morphologicalAnalysis=Ali+NOUN+PROP+A3SG+PNON+NOM}\
             {universalDependency=2$NSUBJ}",
        );
        assert_eq!(
            word.universal_dependency_format(3),
            "Ali\tAli\tPROPN\t_\tCase=Nom|Number=Sing|Person=3\t2\tnsubj\t_\t_"
        );
    }

    #[test]
    fn test_head_past_sentence_end_is_blank() {
        let word = AnnotatedWord::from_annotation_string(
            "{turkish=ev}{morphologicalAnalysis=ev+NOUN+A3SG+PNON+NOM}{universalDependency=5$OBJ}",
        );
        assert!(word.universal_dependency_format(3).ends_with("\t_\t_\t_\t_"));
        assert!(word.universal_dependency_format(5).contains("\t5\tobj\t"));
    }

    #[test]
    fn test_english_conllu_columns() {
        let word = AnnotatedWord::from_annotation_string(
            "{english=runs}{metaMorphemes=run+s}{universalDependency=0$ROOT}{posTag=VBZ}",
        );
        assert_eq!(word.universal_dependency_pos(), Some(UniversalPos::Verb));
        assert_eq!(
            word.universal_dependency_format(1),
            "runs\trun\tVERB\t_\tMood=Ind|Number=Sing|Person=3|Tense=Pres|VerbForm=Fin\t0\troot\t_\t_"
        );

        let bare = AnnotatedWord::from_annotation_string("{english=it}{posTag=MD}");
        assert_eq!(bare.universal_dependency_format(1), "it\tit\tAUX\t_\t_\t_\t_\t_\t_");
    }

    #[test]
    fn test_no_pos_gives_blank_line() {
        let persian = AnnotatedWord::from_annotation_string("{persian=ketab}{posTag=NN}");
        assert_eq!(persian.universal_dependency_pos(), None);
        assert_eq!(
            persian.universal_dependency_format(1),
            "ketab\tketab\t_\t_\t_\t_\t_\t_\t_"
        );
    }

    #[test]
    fn test_check_gazetteer() {
        let gazetteer = WordListGazetteer::new("LOCATION", ["istanbul", "ankara"]);

        let mut word = AnnotatedWord::from_annotation_string(
            "{turkish=İstanbul'da}{morphologicalAnalysis=istanbul+NOUN+PROP+A3SG+PNON+LOC}",
        );
        word.check_gazetteer(&gazetteer);
        assert_eq!(word.named_entity_type(), Some(NamedEntityType::Location));

        // Not a proper noun: untouched.
        let mut word = AnnotatedWord::from_annotation_string(
            "{turkish=Ankara}{morphologicalAnalysis=ankara+NOUN+A3SG+PNON+NOM}{namedEntity=PERSON}",
        );
        word.check_gazetteer(&gazetteer);
        assert_eq!(word.named_entity_type(), Some(NamedEntityType::Person));

        // No parse at all: skipped.
        let mut word = AnnotatedWord::from_annotation_string("Ankara");
        word.check_gazetteer(&gazetteer);
        assert_eq!(word.named_entity_type(), None);
    }

    fn snapshot(word: &AnnotatedWord) -> Vec<Option<String>> {
        LayerKind::ALL.iter().map(|k| word.layer_value(*k)).collect()
    }

    proptest! {
        #[test]
        fn prop_setting_a_layer_leaves_the_others(
            index in 0usize..12,
            value in "[A-Za-z0-9]{1,8}",
            clear in any::<bool>(),
        ) {
            let mut word = AnnotatedWord::from_annotation_string(
                "{turkish=Ali}{morphologicalAnalysis=Ali+NOUN+PROP+A3SG+PNON+NOM}\
                 {metaMorphemes=Ali}{semantics=TUR10-1}{namedEntity=PERSON}\
                 {propbank=ARG0$TUR10-2}{framenet=Agent$Motion$TUR10-2}{shallowParse=ÖZNE}\
                 {universalDependency=3$NSUBJ}{slot=B-person}{polarity=pos}{ccg=NP}{posTag=NNP}",
            );
            let before = snapshot(&word);
            let kind = LayerKind::ALL[index];
            let new_value = if clear { None } else { Some(value.as_str()) };

            match kind {
                LayerKind::MorphologicalAnalysis => word.set_parse(new_value),
                LayerKind::MetaMorphemes => word.set_metamorphic_parse(new_value),
                LayerKind::Semantics => word.set_semantic(new_value),
                LayerKind::NamedEntity => word.set_named_entity_type(new_value),
                LayerKind::Propbank => word.set_argument(new_value),
                LayerKind::Framenet => word.set_frame_element(new_value),
                LayerKind::ShallowParse => word.set_shallow_parse(new_value),
                LayerKind::UniversalDependency => {
                    word.set_universal_dependency(if clear { -1 } else { 4 }, &value)
                }
                LayerKind::Slot => word.set_slot(new_value),
                LayerKind::Polarity => word.set_polarity(new_value),
                LayerKind::Ccg => word.set_ccg(new_value),
                LayerKind::PosTag => word.set_pos_tag(new_value),
            }

            let after = snapshot(&word);
            for (i, (b, a)) in before.iter().zip(&after).enumerate() {
                if i != index {
                    prop_assert_eq!(b, a);
                }
            }
            prop_assert_eq!(after[index].is_none(), clear);
            prop_assert_eq!(word.name(), "Ali");
        }
    }
}
