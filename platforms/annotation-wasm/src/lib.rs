use wasm_bindgen::prelude::*;

use annotation_codec::decode_with_diagnostics;
use annotation_graph::validate_dependencies;
use annotation_sentence::{AnnotatedCorpus, AnnotatedSentence, AnnotatedWord};
use rkyv::{check_archived_root, AlignedVec, Deserialize, Infallible};
use serde::Serialize;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to JavaScript
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub words: Vec<WordReport>,
    pub groups: Vec<PhraseReport>,
    pub dependency_issues: Vec<String>,
    pub conllu: String,
}

#[derive(Debug, Serialize)]
pub struct WordReport {
    pub name: String,
    pub language: String,
    pub layers: Vec<LayerReport>,
    pub upos: Option<String>,
    pub features: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LayerReport {
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct PhraseReport {
    pub word_index: usize,
    pub tag: Option<String>,
    pub text: String,
}

fn word_report(word: &AnnotatedWord, warnings: Vec<String>) -> WordReport {
    WordReport {
        name: word.name().to_owned(),
        language: word.language().tag().to_owned(),
        layers: word
            .layers()
            .values()
            .map(|(kind, value)| LayerReport {
                kind: kind.tag().to_owned(),
                value,
            })
            .collect(),
        upos: word.universal_dependency_pos().map(|p| p.as_str().to_owned()),
        features: word.universal_dependency_features(),
        warnings,
    }
}

/// Text -> Words (+ diagnostics) -> Views -> Report
pub fn analyze(line: &str) -> AnalysisReport {
    let mut sentence = AnnotatedSentence::new();
    let mut warnings = Vec::new();
    for token in AnnotatedSentence::tokens(line) {
        let (decoded, diagnostics) = decode_with_diagnostics(token);
        sentence.add_word(AnnotatedWord::from(decoded));
        warnings.push(diagnostics.iter().map(ToString::to_string).collect());
    }

    let words = sentence
        .words()
        .iter()
        .zip(warnings)
        .map(|(word, warnings)| word_report(word, warnings))
        .collect();

    let groups = sentence
        .shallow_parse_groups()
        .map(|phrase| PhraseReport {
            word_index: phrase.word_index(),
            tag: phrase.tag().map(ToOwned::to_owned),
            text: phrase.to_words(),
        })
        .collect();

    AnalysisReport {
        words,
        groups,
        dependency_issues: validate_dependencies(&sentence)
            .iter()
            .map(ToString::to_string)
            .collect(),
        conllu: sentence.universal_dependency_format(None),
    }
}

#[wasm_bindgen]
pub fn analyze_line(line: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&analyze(line)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validates a packed corpus snapshot and unpacks it.
pub fn load_archive(data: &[u8]) -> Result<AnnotatedCorpus, String> {
    // Bytes handed over from JavaScript carry no alignment guarantee.
    let mut aligned = AlignedVec::with_capacity(data.len());
    aligned.extend_from_slice(data);

    let archived = check_archived_root::<AnnotatedCorpus>(&aligned[..])
        .map_err(|e| format!("invalid corpus archive: {}", e))?;
    match archived.deserialize(&mut Infallible) {
        Ok(corpus) => Ok(corpus),
        Err(never) => match never {},
    }
}

/// A packed corpus (written by `corpus-tool pack`) loaded in the browser
#[wasm_bindgen]
pub struct CorpusArchive {
    corpus: AnnotatedCorpus,
}

#[wasm_bindgen]
impl CorpusArchive {
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<CorpusArchive, JsValue> {
        load_archive(&data)
            .map(|corpus| Self { corpus })
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn sentence_count(&self) -> usize {
        self.corpus.sentence_count()
    }

    /// The sentence in its file form.
    pub fn sentence_line(&self, index: usize) -> Option<String> {
        self.corpus.sentence(index).map(ToString::to_string)
    }

    pub fn sentence_conllu(&self, index: usize) -> Option<String> {
        self.corpus
            .sentence(index)
            .map(|sentence| sentence.universal_dependency_format(None))
    }

    pub fn analyze_sentence(&self, index: usize) -> Result<JsValue, JsValue> {
        let line = self.sentence_line(index).unwrap_or_default();
        analyze_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::ser::{serializers::AllocSerializer, Serializer};

    #[test]
    fn test_analyze_report() {
        let report = analyze(
            "{turkish=Ali}{morphologicalAnalysis=Ali+NOUN+PROP+A3SG+PNON+NOM}{shallowParse=ÖZNE}{universalDependency=2$NSUBJ} \
             {turkish=geldi}{morphologicalAnalysis=gel+VERB+POS+PAST+A3SG}{shallowParse=YÜKLEM}{universalDependency=0$ROOT}{mood=x}",
        );

        assert_eq!(report.words.len(), 2);
        assert_eq!(report.words[0].upos.as_deref(), Some("PROPN"));
        assert_eq!(report.words[0].layers[0].kind, "morphologicalAnalysis");
        assert!(report.words[0].warnings.is_empty());
        assert_eq!(report.words[1].warnings.len(), 1);
        assert_eq!(report.groups.len(), 2);
        assert_eq!(report.groups[1].tag.as_deref(), Some("YÜKLEM"));
        assert!(report.dependency_issues.is_empty());
        assert!(report.conllu.contains("2\tgeldi\tgel\tVERB"));
    }

    #[test]
    fn test_analyze_matches_sentence_tokens() {
        let line = "{turkish=Ali}{mood=x}  {turkish=geldi} \r";
        let report = analyze(line);
        let sentence = AnnotatedSentence::from_line(line);

        let names: Vec<&str> = report.words.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Ali", "geldi"]);
        assert_eq!(report.words.len(), sentence.word_count());
        assert_eq!(report.words[0].warnings.len(), 1);
        assert!(report.words[1].warnings.is_empty());
    }

    #[test]
    fn test_analyze_reports_dependency_issues() {
        let report = analyze("{turkish=a}{universalDependency=1$DEP}");
        assert_eq!(report.dependency_issues, ["word 0 is its own head"]);
    }

    #[test]
    fn test_load_archive() {
        let corpus = AnnotatedCorpus::from_sentences(vec![AnnotatedSentence::from_line(
            "{turkish=a}{universalDependency=0$ROOT}",
        )]);
        let mut serializer = AllocSerializer::<256>::default();
        serializer.serialize_value(&corpus).unwrap();
        let bytes = serializer.into_serializer().into_inner();

        let loaded = load_archive(&bytes).unwrap();
        assert_eq!(loaded, corpus);
        assert!(load_archive(&[1, 2, 3]).is_err());
    }
}
