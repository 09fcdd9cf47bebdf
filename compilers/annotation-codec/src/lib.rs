pub mod error;
pub mod layer;
pub mod scanner;
pub mod segment;
pub mod table;

use std::fmt;

use annotation_protocol::{Language, LayerKind};
use tracing::trace;

pub use crate::error::CodecWarning;
pub use crate::layer::{AnnotationLayer, LayerSet};
use crate::scanner::scan_segments;
use crate::segment::Segment;

/// The content of one `{language=name}{type=value}...` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedWord {
    pub name: String,
    pub language: Language,
    pub layers: LayerSet,
}

/// Decodes a word annotation string. Total: malformed input degrades to
/// fewer layers, never to an error.
pub fn decode(input: &str) -> DecodedWord {
    decode_with_diagnostics(input).0
}

/// Like [`decode`], also reporting everything that was ignored or
/// defaulted along the way.
pub fn decode_with_diagnostics(input: &str) -> (DecodedWord, Vec<CodecWarning>) {
    let mut word = DecodedWord::default();
    let mut warnings = Vec::new();

    for (span, segment) in scan_segments(input) {
        match segment {
            Segment::Name(name) => word.name = name.to_owned(),
            Segment::Layer { tag, value } => {
                // A language segment carries the surface name.
                if let Some(language) = Language::from_tag(tag) {
                    word.language = language;
                    word.name = value.to_owned();
                    continue;
                }
                match LayerKind::from_tag(tag) {
                    Some(kind) => {
                        let layer = (table::entry(kind).build)(value, &mut warnings);
                        word.layers.insert(layer);
                    }
                    None => {
                        trace!(tag, "ignoring unknown layer");
                        warnings.push(CodecWarning::UnknownLayer {
                            tag: tag.to_owned(),
                            span,
                        });
                    }
                }
            }
        }
    }

    (word, warnings)
}

/// Writes `{language=name}` followed by every present layer in canonical
/// order.
pub fn encode(name: &str, language: Language, layers: &LayerSet) -> String {
    let mut out = String::new();
    push_segment(&mut out, language.tag(), name);
    for (kind, value) in layers.values() {
        push_segment(&mut out, kind.tag(), &value);
    }
    out
}

fn push_segment(out: &mut String, tag: &str, value: &str) {
    out.push('{');
    out.push_str(tag);
    out.push('=');
    out.push_str(value);
    out.push('}');
}

impl fmt::Display for DecodedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&self.name, self.language, &self.layers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotation_protocol::{
        Argument, FrameElement, NamedEntityType, Polarity, Slot, UniversalDependencyRelation,
    };
    use annotation_morph::{MetamorphicParse, MorphologicalParse};
    use proptest::prelude::*;

    const ALI: &str = "{turkish=Ali}{morphologicalAnalysis=Ali+NOUN+PROP+A3SG+PNON+NOM}\
        {metaMorphemes=Ali}{semantics=TUR10-0000000}{namedEntity=PERSON}\
        {propbank=ARG0$TUR10-0123}{shallowParse=ÖZNE}{universalDependency=3$NSUBJ}";

    #[test]
    fn test_decode_full_word() {
        let word = decode(ALI);

        assert_eq!(word.name, "Ali");
        assert_eq!(word.language, Language::Turkish);
        assert_eq!(word.layers.parse.as_ref().map(|p| p.root()), Some("Ali"));
        assert_eq!(word.layers.named_entity, Some(NamedEntityType::Person));
        assert_eq!(
            word.layers.argument.as_ref().and_then(|a| a.id.as_deref()),
            Some("TUR10-0123")
        );
        assert_eq!(
            word.layers.universal_dependency,
            Some(UniversalDependencyRelation::new(3, "NSUBJ"))
        );
        assert_eq!(word.to_string(), ALI);
    }

    #[test]
    fn test_output_is_in_canonical_order() {
        let word = decode("{posTag=NN}{english=house}{ccg=N}{semantics=ENG31-1}");
        assert_eq!(word.language, Language::English);
        assert_eq!(
            word.to_string(),
            "{english=house}{semantics=ENG31-1}{ccg=N}{posTag=NN}"
        );
    }

    #[test]
    fn test_bare_name_and_empty_input() {
        let word = decode("ev");
        assert_eq!(word.name, "ev");
        assert_eq!(word.language, Language::Turkish);
        assert!(word.layers.is_empty());
        assert_eq!(word.to_string(), "{turkish=ev}");

        let empty = decode("");
        assert_eq!(empty.name, "");
        assert!(empty.layers.is_empty());
    }

    #[test]
    fn test_unknown_layers_are_dropped() {
        let (word, warnings) =
            decode_with_diagnostics("{turkish=ev}{sentiment=good}{Semantics=x}{posTag=NN}");

        assert_eq!(word.to_string(), "{turkish=ev}{posTag=NN}");
        assert_eq!(warnings.len(), 2);
        assert!(matches!(
            &warnings[0],
            CodecWarning::UnknownLayer { tag, .. } if tag == "sentiment"
        ));
    }

    #[test]
    fn test_last_value_of_a_kind_wins() {
        let word = decode("{turkish=ev}{posTag=NN}{posTag=NNS}ev2");
        assert_eq!(word.layers.pos_tag.as_deref(), Some("NNS"));
        assert_eq!(word.name, "ev2");
    }

    #[test]
    fn test_lenient_values() {
        let word = decode("{turkish=ev}{namedEntity=person}{polarity=Good}{slot=X-city}");
        assert_eq!(word.layers.named_entity, Some(NamedEntityType::Person));
        assert_eq!(word.layers.polarity, Some(Polarity::Neutral));
        assert_eq!(word.layers.slot, Some(Slot::new("O")));

        let (word, warnings) = decode_with_diagnostics("{turkish=ev}{universalDependency=x$OBJ}");
        assert_eq!(
            word.layers.universal_dependency,
            Some(UniversalDependencyRelation::new(-1, "OBJ"))
        );
        assert_eq!(warnings.len(), 1);
    }

    fn layer_sets() -> impl Strategy<Value = LayerSet> {
        let head = (
            prop::option::of("[a-zçğıöşü]{1,6}(\\+[A-Z0-9]{1,5}){0,4}"),
            prop::option::of("[a-zçğıöşü]{1,6}(\\+[a-zA-Z]{1,3}){0,3}"),
            prop::option::of("[A-Z]{3}[0-9]{2}-[0-9]{4}"),
            prop::option::of(prop::sample::select(vec![
                NamedEntityType::None,
                NamedEntityType::Person,
                NamedEntityType::Organization,
                NamedEntityType::Location,
                NamedEntityType::Time,
                NamedEntityType::Money,
            ])),
            prop::option::of("[A-Z0-9]{1,6}(\\$[a-z0-9]{1,6})?"),
            prop::option::of("[A-Za-z]{1,6}(\\$[A-Za-z]{1,6}\\$[a-z0-9]{1,6})?"),
        );
        let tail = (
            prop::option::of("[A-ZÖÜ]{1,6}"),
            prop::option::of((-1i32..40, "[A-Z]{1,6}(:[a-z]{1,4})?")),
            prop::option::of(prop_oneof![
                Just("O".to_owned()),
                "B-[a-z]{1,5}",
                "I-[a-z]{1,5}"
            ]),
            prop::option::of(prop::sample::select(vec![
                Polarity::Positive,
                Polarity::Negative,
                Polarity::Neutral,
            ])),
            prop::option::of("[A-Z/\\\\()]{1,6}"),
            prop::option::of("[A-Z$]{1,4}"),
        );
        (head, tail).prop_map(
            |((parse, meta, semantic, ne, arg, fe), (shallow, ud, slot, polarity, ccg, pos))| {
                LayerSet {
                    parse: parse.as_deref().map(MorphologicalParse::new),
                    metamorphic_parse: meta.as_deref().map(MetamorphicParse::new),
                    semantic,
                    named_entity: ne,
                    argument: arg.as_deref().map(Argument::new),
                    frame_element: fe.as_deref().map(FrameElement::new),
                    shallow_parse: shallow,
                    universal_dependency: ud
                        .map(|(to, label)| UniversalDependencyRelation::new(to, label)),
                    slot: slot.as_deref().map(Slot::new),
                    polarity,
                    ccg,
                    pos_tag: pos,
                }
            },
        )
    }

    proptest! {
        #[test]
        fn prop_encode_decode_is_identity(
            name in "[a-zA-Zçğıöşü0-9.,']{0,8}",
            language in prop::sample::select(Language::ALL.to_vec()),
            layers in layer_sets(),
        ) {
            let text = encode(&name, language, &layers);
            let word = decode(&text);

            prop_assert_eq!(&word.name, &name);
            prop_assert_eq!(word.language, language);
            prop_assert_eq!(&word.layers, &layers);
            prop_assert_eq!(word.to_string(), text);
        }
    }
}
