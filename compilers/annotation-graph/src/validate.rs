use petgraph::algo::tarjan_scc;
use thiserror::Error;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use annotation_sentence::AnnotatedSentence;

use crate::graph::DependencyGraph;

/// A structural problem in the dependency layer of a sentence. Word
/// indices are 0-based; heads are as written (1-based, 0 for root).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DependencyIssue {
    #[error("word {word} points at head {head}, outside the sentence")]
    HeadOutOfRange { word: usize, head: i32 },

    #[error("word {word} is its own head")]
    SelfLoop { word: usize },

    #[error("sentence has {} roots: {roots:?}", roots.len())]
    MultipleRoots { roots: Vec<usize> },

    #[error("words {words:?} form a cycle")]
    Cycle { words: Vec<usize> },
}

/// Checks the universal dependency layer for structural problems. Words
/// without a relation are not reported.
pub fn validate_dependencies(sentence: &AnnotatedSentence) -> Vec<DependencyIssue> {
    let mut issues = Vec::new();
    let count = sentence.word_count();

    for (word, w) in sentence.words().iter().enumerate() {
        let Some(relation) = w.universal_dependency() else {
            continue;
        };
        let head = relation.to();
        match usize::try_from(head) {
            Ok(h) if h > count => issues.push(DependencyIssue::HeadOutOfRange { word, head }),
            Err(_) => issues.push(DependencyIssue::HeadOutOfRange { word, head }),
            Ok(h) if h == word + 1 => issues.push(DependencyIssue::SelfLoop { word }),
            Ok(_) => {}
        }
    }

    let graph = DependencyGraph::from_sentence(sentence);
    if graph.roots().len() > 1 {
        issues.push(DependencyIssue::MultipleRoots {
            roots: graph.roots().to_vec(),
        });
    }

    // Self loops are already reported; only longer cycles remain.
    for component in tarjan_scc(graph.inner()) {
        if component.len() > 1 {
            let mut words: Vec<usize> = component.iter().map(|n| graph.inner()[*n]).collect();
            words.sort_unstable();
            issues.push(DependencyIssue::Cycle { words });
        }
    }

    debug!(words = count, issues = issues.len(), "validated dependencies");
    issues
}
