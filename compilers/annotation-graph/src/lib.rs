pub mod graph;
pub mod validate;

pub use graph::DependencyGraph;
pub use validate::{validate_dependencies, DependencyIssue};

#[cfg(test)]
mod tests {
    use super::*;
    use annotation_sentence::AnnotatedSentence;

    fn sentence(heads: &[(i32, &str)]) -> AnnotatedSentence {
        let line = heads
            .iter()
            .enumerate()
            .map(|(i, (head, label))| format!("{{turkish=w{}}}{{universalDependency={}${}}}", i, head, label))
            .collect::<Vec<_>>()
            .join(" ");
        AnnotatedSentence::from_line(&line)
    }

    #[test]
    fn test_tree_structure() {
        // w0 <- w2 -> w1, w2 is root, w3 hangs off w1.
        let s = sentence(&[(3, "NSUBJ"), (3, "OBJ"), (0, "ROOT"), (2, "AMOD")]);
        let graph = DependencyGraph::from_sentence(&s);

        assert_eq!(graph.roots(), [2]);
        assert_eq!(graph.head(3), Some(1));
        assert_eq!(graph.head(2), None);
        assert_eq!(graph.children(2), vec![(0, "NSUBJ"), (1, "OBJ")]);
        assert_eq!(graph.subtree(1), vec![1, 3]);
        assert_eq!(graph.subtree(2), vec![0, 1, 2, 3]);
        assert!(!graph.has_cycle());
        assert!(graph.is_tree());
        assert!(validate_dependencies(&s).is_empty());
    }

    #[test]
    fn test_unattached_word_breaks_tree() {
        let mut s = sentence(&[(2, "NSUBJ"), (0, "ROOT")]);
        s.add_word(annotation_sentence::AnnotatedWord::from_annotation_string("{turkish=.}"));

        let graph = DependencyGraph::from_sentence(&s);
        assert!(!graph.is_tree());
        // Missing relations are not an issue by themselves.
        assert!(validate_dependencies(&s).is_empty());
    }

    #[test]
    fn test_issues() {
        let s = sentence(&[(7, "NSUBJ"), (2, "DEP"), (0, "ROOT"), (0, "ROOT"), (6, "DEP"), (5, "DEP")]);
        let issues = validate_dependencies(&s);

        assert_eq!(
            issues,
            vec![
                DependencyIssue::HeadOutOfRange { word: 0, head: 7 },
                DependencyIssue::SelfLoop { word: 1 },
                DependencyIssue::MultipleRoots { roots: vec![2, 3] },
                DependencyIssue::Cycle { words: vec![4, 5] },
            ]
        );
        assert!(DependencyGraph::from_sentence(&s).has_cycle());
        assert_eq!(issues[2].to_string(), "sentence has 2 roots: [2, 3]");
    }
}
