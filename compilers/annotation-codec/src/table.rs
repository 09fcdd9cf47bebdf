use annotation_morph::{MetamorphicParse, MorphologicalParse};
use annotation_protocol::{
    Argument, FrameElement, LayerKind, NamedEntityType, Polarity, Slot,
    UniversalDependencyRelation,
};

use crate::error::CodecWarning;
use crate::layer::AnnotationLayer;

type Builder = fn(&str, &mut Vec<CodecWarning>) -> AnnotationLayer;

pub struct LayerEntry {
    pub kind: LayerKind,
    pub build: Builder,
}

/// One constructor per layer kind, indexed by `LayerKind as usize`.
pub static LAYER_TABLE: [LayerEntry; 12] = [
    LayerEntry {
        kind: LayerKind::MorphologicalAnalysis,
        build: |v, _| AnnotationLayer::MorphologicalAnalysis(MorphologicalParse::new(v)),
    },
    LayerEntry {
        kind: LayerKind::MetaMorphemes,
        build: |v, _| AnnotationLayer::MetaMorphemes(MetamorphicParse::new(v)),
    },
    LayerEntry {
        kind: LayerKind::Semantics,
        build: |v, _| AnnotationLayer::Semantics(v.to_owned()),
    },
    LayerEntry {
        kind: LayerKind::NamedEntity,
        build: |v, _| AnnotationLayer::NamedEntity(NamedEntityType::from_tag(v)),
    },
    LayerEntry {
        kind: LayerKind::Propbank,
        build: |v, _| AnnotationLayer::Propbank(Argument::new(v)),
    },
    LayerEntry {
        kind: LayerKind::Framenet,
        build: |v, _| AnnotationLayer::Framenet(FrameElement::new(v)),
    },
    LayerEntry {
        kind: LayerKind::ShallowParse,
        build: |v, _| AnnotationLayer::ShallowParse(v.to_owned()),
    },
    LayerEntry {
        kind: LayerKind::UniversalDependency,
        build: universal_dependency,
    },
    LayerEntry {
        kind: LayerKind::Slot,
        build: |v, _| AnnotationLayer::Slot(Slot::new(v)),
    },
    LayerEntry {
        kind: LayerKind::Polarity,
        build: |v, _| AnnotationLayer::Polarity(Polarity::from_tag(v)),
    },
    LayerEntry {
        kind: LayerKind::Ccg,
        build: |v, _| AnnotationLayer::Ccg(v.to_owned()),
    },
    LayerEntry {
        kind: LayerKind::PosTag,
        build: |v, _| AnnotationLayer::PosTag(v.to_owned()),
    },
];

pub fn entry(kind: LayerKind) -> &'static LayerEntry {
    &LAYER_TABLE[kind as usize]
}

/// `to$label`. A head that is not a number becomes -1, a missing label
/// becomes empty.
fn universal_dependency(value: &str, warnings: &mut Vec<CodecWarning>) -> AnnotationLayer {
    let (head, label) = match value.split_once('$') {
        Some(parts) => parts,
        None => {
            warnings.push(CodecWarning::MissingLabel {
                value: value.to_owned(),
            });
            (value, "")
        }
    };
    let to = head.trim().parse::<i32>().unwrap_or_else(|_| {
        warnings.push(CodecWarning::MalformedHead {
            value: value.to_owned(),
        });
        -1
    });
    AnnotationLayer::UniversalDependency(UniversalDependencyRelation::new(to, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_kind() {
        for kind in LayerKind::ALL {
            assert_eq!(entry(kind).kind, kind);
            let mut warnings = Vec::new();
            assert_eq!((entry(kind).build)("0$x", &mut warnings).kind(), kind);
        }
    }

    #[test]
    fn test_universal_dependency_defaults() {
        let mut warnings = Vec::new();
        let layer = universal_dependency("root$NSUBJ", &mut warnings);
        assert_eq!(
            layer,
            AnnotationLayer::UniversalDependency(UniversalDependencyRelation::new(-1, "NSUBJ"))
        );
        assert_eq!(warnings.len(), 1);

        warnings.clear();
        let layer = universal_dependency("4", &mut warnings);
        assert_eq!(
            layer,
            AnnotationLayer::UniversalDependency(UniversalDependencyRelation::new(4, ""))
        );
        assert_eq!(
            warnings,
            vec![CodecWarning::MissingLabel {
                value: "4".to_owned()
            }]
        );
    }
}
