//! Tag names used in morphological parse strings.

// Parts of speech (first tag of an inflectional group)
pub const NOUN: &str = "NOUN";
pub const VERB: &str = "VERB";
pub const ADJ: &str = "ADJ";
pub const ADV: &str = "ADV";
pub const PRON: &str = "PRON";
pub const CONJ: &str = "CONJ";
pub const DET: &str = "DET";
pub const NUM: &str = "NUM";
pub const INTERJ: &str = "INTERJ";
pub const POSTP: &str = "POSTP";
pub const QUES: &str = "QUES";
pub const PUNC: &str = "PUNC";

// Markers checked outside the feature table
pub const PROPER_NOUN: &str = "PROP";
pub const DATE: &str = "DATE";
pub const TIME: &str = "TIME";
pub const ORDINAL: &str = "ORD";
pub const FRACTION: &str = "FRACTION";
pub const PERCENT: &str = "PERCENT";
pub const HASHTAG: &str = "HASHTAG";

/// Separator between inflectional groups.
pub const DERIVATIONAL_BOUNDARY: &str = "^DB+";

/// Person/number agreement tags; a verb carrying one is finite.
pub const AGREEMENT: [&str; 6] = ["A1SG", "A2SG", "A3SG", "A1PL", "A2PL", "A3PL"];
