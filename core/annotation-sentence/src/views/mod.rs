//! Read views derived from the whole word sequence of a sentence.

pub mod conllu;
pub mod highlight;
pub mod lexical;
pub mod predicate;
pub mod shallow_parse;

pub use shallow_parse::ShallowParseGroups;
