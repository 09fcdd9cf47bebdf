pub mod corpus;
pub mod error;
pub mod penn;
pub mod phrase;
pub mod resources;
pub mod sentence;
pub mod views;
pub mod word;

pub use corpus::AnnotatedCorpus;
pub use error::{AnnotationError, Result};
pub use phrase::AnnotatedPhrase;
pub use resources::{
    FrameNetLookup, FramesetLookup, Gazetteer, LexicalResource, ParsePair, WordListGazetteer,
};
pub use sentence::AnnotatedSentence;
pub use views::ShallowParseGroups;
pub use word::AnnotatedWord;
