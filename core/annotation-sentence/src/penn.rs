//! Penn Treebank tag tables for English words.

use annotation_protocol::UniversalPos;

static PENN_POS: &[(&str, UniversalPos)] = &[
    ("#", UniversalPos::Sym),
    ("$", UniversalPos::Sym),
    ("SYM", UniversalPos::Sym),
    ("\"", UniversalPos::Punct),
    (",", UniversalPos::Punct),
    ("-LRB-", UniversalPos::Punct),
    ("-RRB-", UniversalPos::Punct),
    (".", UniversalPos::Punct),
    (":", UniversalPos::Punct),
    ("``", UniversalPos::Punct),
    ("HYPH", UniversalPos::Punct),
    ("AFX", UniversalPos::Adj),
    ("JJ", UniversalPos::Adj),
    ("JJR", UniversalPos::Adj),
    ("JJS", UniversalPos::Adj),
    ("CC", UniversalPos::Cconj),
    ("CD", UniversalPos::Num),
    ("DT", UniversalPos::Det),
    ("PDT", UniversalPos::Det),
    ("PRP$", UniversalPos::Det),
    ("WDT", UniversalPos::Det),
    ("WP$", UniversalPos::Det),
    ("IN", UniversalPos::Adp),
    ("RP", UniversalPos::Adp),
    ("FW", UniversalPos::X),
    ("LS", UniversalPos::X),
    ("NIL", UniversalPos::X),
    ("VB", UniversalPos::Verb),
    ("VBD", UniversalPos::Verb),
    ("VBG", UniversalPos::Verb),
    ("VBN", UniversalPos::Verb),
    ("VBP", UniversalPos::Verb),
    ("VBZ", UniversalPos::Verb),
    ("MD", UniversalPos::Aux),
    ("AUX:VB", UniversalPos::Aux),
    ("AUX:VBD", UniversalPos::Aux),
    ("AUX:VBG", UniversalPos::Aux),
    ("AUX:VBN", UniversalPos::Aux),
    ("AUX:VBP", UniversalPos::Aux),
    ("AUX:VBZ", UniversalPos::Aux),
    ("NN", UniversalPos::Noun),
    ("NNS", UniversalPos::Noun),
    ("NNP", UniversalPos::Propn),
    ("NNPS", UniversalPos::Propn),
    ("POS", UniversalPos::Part),
    ("TO", UniversalPos::Part),
    ("EX", UniversalPos::Pron),
    ("PRP", UniversalPos::Pron),
    ("WP", UniversalPos::Pron),
    ("RB", UniversalPos::Adv),
    ("RBR", UniversalPos::Adv),
    ("RBS", UniversalPos::Adv),
    ("WRB", UniversalPos::Adv),
    ("UH", UniversalPos::Intj),
];

// Tags missing here (MD, RP, POS, TO, ...) carry no features.
static PENN_FEATURES: &[(&str, &[&str])] = &[
    ("\"", &["PunctSide=Fin", "PunctType=Quot"]),
    (",", &["PunctType=Comm"]),
    ("-LRB-", &["PunctSide=Ini", "PunctType=Brck"]),
    ("-RRB-", &["PunctSide=Fin", "PunctType=Brck"]),
    (".", &["PunctType=Peri"]),
    ("``", &["PunctSide=Ini", "PunctType=Quot"]),
    ("HYPH", &["PunctType=Dash"]),
    ("AFX", &["Hyph=Yes"]),
    ("JJ", &["Degree=Pos"]),
    ("RB", &["Degree=Pos"]),
    ("JJR", &["Degree=Cmp"]),
    ("RBR", &["Degree=Cmp"]),
    ("JJS", &["Degree=Sup"]),
    ("RBS", &["Degree=Sup"]),
    ("CD", &["NumType=Card"]),
    ("DT", &["PronType=Art"]),
    ("PDT", &["AdjType=Pdt"]),
    ("PRP$", &["Poss=Yes", "PronType=Prs"]),
    ("WDT", &["PronType=Int,Rel"]),
    ("WP", &["PronType=Int,Rel"]),
    ("WRB", &["PronType=Int,Rel"]),
    ("WP$", &["Poss=Yes", "PronType=Int,Rel"]),
    ("FW", &["Foreign=Yes"]),
    ("LS", &["NumType=Ord"]),
    ("VB", &["VerbForm=Inf"]),
    ("AUX:VB", &["VerbForm=Inf"]),
    ("VBD", &["Mood=Ind", "Tense=Past", "VerbForm=Fin"]),
    ("AUX:VBD", &["Mood=Ind", "Tense=Past", "VerbForm=Fin"]),
    ("VBG", &["Tense=Pres", "VerbForm=Part"]),
    ("AUX:VBG", &["Tense=Pres", "VerbForm=Part"]),
    ("VBN", &["Tense=Past", "VerbForm=Part"]),
    ("AUX:VBN", &["Tense=Past", "VerbForm=Part"]),
    ("VBP", &["Mood=Ind", "Tense=Pres", "VerbForm=Fin"]),
    ("AUX:VBP", &["Mood=Ind", "Tense=Pres", "VerbForm=Fin"]),
    (
        "VBZ",
        &["Mood=Ind", "Number=Sing", "Person=3", "Tense=Pres", "VerbForm=Fin"],
    ),
    (
        "AUX:VBZ",
        &["Mood=Ind", "Number=Sing", "Person=3", "Tense=Pres", "VerbForm=Fin"],
    ),
    ("NN", &["Number=Sing"]),
    ("NNP", &["Number=Sing"]),
    ("NNS", &["Number=Plur"]),
    ("NNPS", &["Number=Plur"]),
    ("EX", &["PronType=Dem"]),
    ("PRP", &["PronType=Prs"]),
];

pub fn universal_pos(pos_tag: &str) -> Option<UniversalPos> {
    PENN_POS
        .iter()
        .find(|(tag, _)| *tag == pos_tag)
        .map(|(_, upos)| *upos)
}

pub fn universal_features(pos_tag: &str) -> &'static [&'static str] {
    PENN_FEATURES
        .iter()
        .find(|(tag, _)| *tag == pos_tag)
        .map(|(_, features)| *features)
        .unwrap_or(&[])
}
