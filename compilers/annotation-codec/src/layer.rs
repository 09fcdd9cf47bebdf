use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use annotation_morph::{MetamorphicParse, MorphologicalParse};
use annotation_protocol::{
    Argument, FrameElement, LayerFlags, LayerKind, NamedEntityType, Polarity, Slot,
    UniversalDependencyRelation,
};

/// A single decoded layer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationLayer {
    MorphologicalAnalysis(MorphologicalParse),
    MetaMorphemes(MetamorphicParse),
    Semantics(String),
    NamedEntity(NamedEntityType),
    Propbank(Argument),
    Framenet(FrameElement),
    ShallowParse(String),
    UniversalDependency(UniversalDependencyRelation),
    Slot(Slot),
    Polarity(Polarity),
    Ccg(String),
    PosTag(String),
}

impl AnnotationLayer {
    pub fn kind(&self) -> LayerKind {
        match self {
            AnnotationLayer::MorphologicalAnalysis(_) => LayerKind::MorphologicalAnalysis,
            AnnotationLayer::MetaMorphemes(_) => LayerKind::MetaMorphemes,
            AnnotationLayer::Semantics(_) => LayerKind::Semantics,
            AnnotationLayer::NamedEntity(_) => LayerKind::NamedEntity,
            AnnotationLayer::Propbank(_) => LayerKind::Propbank,
            AnnotationLayer::Framenet(_) => LayerKind::Framenet,
            AnnotationLayer::ShallowParse(_) => LayerKind::ShallowParse,
            AnnotationLayer::UniversalDependency(_) => LayerKind::UniversalDependency,
            AnnotationLayer::Slot(_) => LayerKind::Slot,
            AnnotationLayer::Polarity(_) => LayerKind::Polarity,
            AnnotationLayer::Ccg(_) => LayerKind::Ccg,
            AnnotationLayer::PosTag(_) => LayerKind::PosTag,
        }
    }
}

/// At most one value per layer kind. Field order follows the canonical
/// output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LayerSet {
    pub parse: Option<MorphologicalParse>,
    pub metamorphic_parse: Option<MetamorphicParse>,
    pub semantic: Option<String>,
    pub named_entity: Option<NamedEntityType>,
    pub argument: Option<Argument>,
    pub frame_element: Option<FrameElement>,
    pub shallow_parse: Option<String>,
    pub universal_dependency: Option<UniversalDependencyRelation>,
    pub slot: Option<Slot>,
    pub polarity: Option<Polarity>,
    pub ccg: Option<String>,
    pub pos_tag: Option<String>,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `layer`, replacing any earlier value of the same kind.
    pub fn insert(&mut self, layer: AnnotationLayer) {
        match layer {
            AnnotationLayer::MorphologicalAnalysis(v) => self.parse = Some(v),
            AnnotationLayer::MetaMorphemes(v) => self.metamorphic_parse = Some(v),
            AnnotationLayer::Semantics(v) => self.semantic = Some(v),
            AnnotationLayer::NamedEntity(v) => self.named_entity = Some(v),
            AnnotationLayer::Propbank(v) => self.argument = Some(v),
            AnnotationLayer::Framenet(v) => self.frame_element = Some(v),
            AnnotationLayer::ShallowParse(v) => self.shallow_parse = Some(v),
            AnnotationLayer::UniversalDependency(v) => self.universal_dependency = Some(v),
            AnnotationLayer::Slot(v) => self.slot = Some(v),
            AnnotationLayer::Polarity(v) => self.polarity = Some(v),
            AnnotationLayer::Ccg(v) => self.ccg = Some(v),
            AnnotationLayer::PosTag(v) => self.pos_tag = Some(v),
        }
    }

    pub fn clear(&mut self, kind: LayerKind) {
        match kind {
            LayerKind::MorphologicalAnalysis => self.parse = None,
            LayerKind::MetaMorphemes => self.metamorphic_parse = None,
            LayerKind::Semantics => self.semantic = None,
            LayerKind::NamedEntity => self.named_entity = None,
            LayerKind::Propbank => self.argument = None,
            LayerKind::Framenet => self.frame_element = None,
            LayerKind::ShallowParse => self.shallow_parse = None,
            LayerKind::UniversalDependency => self.universal_dependency = None,
            LayerKind::Slot => self.slot = None,
            LayerKind::Polarity => self.polarity = None,
            LayerKind::Ccg => self.ccg = None,
            LayerKind::PosTag => self.pos_tag = None,
        }
    }

    /// The value of `kind` exactly as it is written inside `{type=value}`.
    pub fn value(&self, kind: LayerKind) -> Option<String> {
        match kind {
            LayerKind::MorphologicalAnalysis => self.parse.as_ref().map(ToString::to_string),
            LayerKind::MetaMorphemes => self.metamorphic_parse.as_ref().map(ToString::to_string),
            LayerKind::Semantics => self.semantic.clone(),
            LayerKind::NamedEntity => self.named_entity.map(|ne| ne.as_str().to_owned()),
            LayerKind::Propbank => self.argument.as_ref().map(ToString::to_string),
            LayerKind::Framenet => self.frame_element.as_ref().map(ToString::to_string),
            LayerKind::ShallowParse => self.shallow_parse.clone(),
            LayerKind::UniversalDependency => self
                .universal_dependency
                .as_ref()
                .map(|ud| format!("{}${}", ud.to(), ud.label())),
            LayerKind::Slot => self.slot.as_ref().map(ToString::to_string),
            LayerKind::Polarity => self.polarity.map(|p| p.as_str().to_owned()),
            LayerKind::Ccg => self.ccg.clone(),
            LayerKind::PosTag => self.pos_tag.clone(),
        }
    }

    pub fn contains(&self, kind: LayerKind) -> bool {
        match kind {
            LayerKind::MorphologicalAnalysis => self.parse.is_some(),
            LayerKind::MetaMorphemes => self.metamorphic_parse.is_some(),
            LayerKind::Semantics => self.semantic.is_some(),
            LayerKind::NamedEntity => self.named_entity.is_some(),
            LayerKind::Propbank => self.argument.is_some(),
            LayerKind::Framenet => self.frame_element.is_some(),
            LayerKind::ShallowParse => self.shallow_parse.is_some(),
            LayerKind::UniversalDependency => self.universal_dependency.is_some(),
            LayerKind::Slot => self.slot.is_some(),
            LayerKind::Polarity => self.polarity.is_some(),
            LayerKind::Ccg => self.ccg.is_some(),
            LayerKind::PosTag => self.pos_tag.is_some(),
        }
    }

    pub fn kinds(&self) -> LayerFlags {
        LayerKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .fold(LayerFlags::empty(), |flags, kind| flags | kind.flag())
    }

    pub fn is_empty(&self) -> bool {
        self.kinds().is_empty()
    }

    /// Present layers in canonical order, paired with their written values.
    pub fn values(&self) -> impl Iterator<Item = (LayerKind, String)> + '_ {
        LayerKind::ALL
            .into_iter()
            .filter_map(move |kind| self.value(kind).map(|value| (kind, value)))
    }
}
