use std::fs;
use std::path::Path;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use annotation_protocol::ParserEvaluationScore;
use tracing::{debug, warn};

use crate::error::{AnnotationError, Result};
use crate::sentence::AnnotatedSentence;

/// Sentences of a corpus directory, one per file, in file name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AnnotatedCorpus {
    sentences: Vec<AnnotatedSentence>,
}

impl AnnotatedCorpus {
    /// Loads every regular file of `folder` whose name contains `pattern`
    /// (all files without a pattern). Files that cannot be read are
    /// skipped with a warning.
    pub fn load(folder: impl AsRef<Path>, pattern: Option<&str>) -> Result<Self> {
        let folder = folder.as_ref();
        let entries = fs::read_dir(folder).map_err(|e| AnnotationError::io(folder, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AnnotationError::io(folder, e))?;
            if !entry.file_type().map_or(false, |t| t.is_file()) {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => warn!(?name, "skipping file with a non UTF-8 name"),
            }
        }
        names.sort();

        let mut sentences = Vec::new();
        for name in names {
            if pattern.map_or(false, |p| !name.contains(p)) {
                continue;
            }
            match AnnotatedSentence::from_file(folder.join(&name)) {
                Ok(sentence) => sentences.push(sentence),
                Err(e) => warn!(error = %e, "skipping unreadable sentence file"),
            }
        }

        debug!(folder = %folder.display(), sentences = sentences.len(), "loaded corpus");
        Ok(Self { sentences })
    }

    pub fn from_sentences(sentences: Vec<AnnotatedSentence>) -> Self {
        Self { sentences }
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn sentence(&self, index: usize) -> Option<&AnnotatedSentence> {
        self.sentences.get(index)
    }

    pub fn sentences(&self) -> &[AnnotatedSentence] {
        &self.sentences
    }

    /// Sums the sentence scores against `other`, pairing sentences by
    /// position up to the shorter corpus.
    pub fn compare_parses(&self, other: &AnnotatedCorpus) -> ParserEvaluationScore {
        let mut score = ParserEvaluationScore::new();
        for (mine, theirs) in self.sentences.iter().zip(&other.sentences) {
            score += mine.compare_parses(theirs);
        }
        score
    }

    /// CoNLL-U blocks of every sentence, concatenated.
    pub fn universal_dependency_format(&self, path: Option<&str>) -> String {
        self.sentences
            .iter()
            .map(|sentence| sentence.universal_dependency_format(path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_corpus() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let files = [
            ("0002.train", "{turkish=b}{universalDependency=0$ROOT}"),
            ("0001.train", "{turkish=a}{universalDependency=0$ROOT}\nsecond line"),
            ("0001.dev", "{turkish=x}"),
        ];
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        fs::create_dir(dir.path().join("nested.train")).unwrap();
        dir
    }

    #[test]
    fn test_load_sorted_and_filtered() {
        let dir = write_corpus();

        let corpus = AnnotatedCorpus::load(dir.path(), Some(".train")).unwrap();
        assert_eq!(corpus.sentence_count(), 2);
        assert_eq!(corpus.sentence(0).map(|s| s.to_words()).as_deref(), Some("a"));
        assert_eq!(corpus.sentence(1).map(|s| s.to_words()).as_deref(), Some("b"));
        assert!(corpus.sentence(0).unwrap().file_name().unwrap().ends_with("0001.train"));

        let all = AnnotatedCorpus::load(dir.path(), None).unwrap();
        assert_eq!(all.sentence_count(), 3);
        assert_eq!(all.sentence(0).map(|s| s.to_words()).as_deref(), Some("x"));
    }

    #[test]
    fn test_missing_folder() {
        let result = AnnotatedCorpus::load("/nonexistent/corpus", None);
        assert!(matches!(result, Err(AnnotationError::Io { .. })));
    }

    #[test]
    fn test_compare_and_format() {
        let dir = write_corpus();
        let corpus = AnnotatedCorpus::load(dir.path(), Some("train")).unwrap();

        let score = corpus.compare_parses(&corpus);
        assert_eq!(score.total, 2);
        assert_eq!(score.las(), 1.0);

        let shorter = AnnotatedCorpus::from_sentences(vec![AnnotatedSentence::from_line(
            "{turkish=a}{universalDependency=1$ROOT}",
        )]);
        let score = corpus.compare_parses(&shorter);
        assert_eq!(score.total, 1);
        assert_eq!(score.unlabeled_attachment, 0);

        let conllu = corpus.universal_dependency_format(None);
        assert_eq!(conllu.matches("# sent_id = ").count(), 2);
        assert!(conllu.ends_with("\n\n"));
    }
}
