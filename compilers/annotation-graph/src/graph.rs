use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::{Dfs, EdgeRef};
use petgraph::{Directed, Direction};

use annotation_sentence::AnnotatedSentence;

/// Dependency tree of one sentence. Node `i` is the `i`-th word (0-based);
/// an edge runs from a head to each of its dependents, weighted with the
/// relation label.
pub struct DependencyGraph {
    graph: Graph<usize, String, Directed>,
    nodes: Vec<NodeIndex>,
    roots: Vec<usize>,
}

impl DependencyGraph {
    /// Heads outside `1..=word_count` contribute no edge; head 0 marks a root.
    pub fn from_sentence(sentence: &AnnotatedSentence) -> Self {
        let count = sentence.word_count();
        let mut graph = Graph::with_capacity(count, count);
        let nodes: Vec<NodeIndex> = (0..count).map(|i| graph.add_node(i)).collect();
        let mut roots = Vec::new();

        for (i, word) in sentence.words().iter().enumerate() {
            let Some(relation) = word.universal_dependency() else {
                continue;
            };
            match usize::try_from(relation.to()) {
                Ok(0) => roots.push(i),
                Ok(head) if head <= count => {
                    graph.add_edge(nodes[head - 1], nodes[i], relation.label().to_owned());
                }
                _ => {}
            }
        }

        Self {
            graph,
            nodes,
            roots,
        }
    }

    pub fn word_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Words attached to the artificial root (head 0).
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// The head of `word`, if it has one inside the sentence.
    pub fn head(&self, word: usize) -> Option<usize> {
        let node = *self.nodes.get(word)?;
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .next()
            .map(|head| self.graph[head])
    }

    /// Direct dependents of `word`, sorted, each with its label.
    pub fn children(&self, word: usize) -> Vec<(usize, &str)> {
        let Some(&node) = self.nodes.get(word) else {
            return Vec::new();
        };
        let mut children: Vec<(usize, &str)> = self
            .graph
            .edges(node)
            .map(|edge| (self.graph[edge.target()], edge.weight().as_str()))
            .collect();
        children.sort_unstable();
        children
    }

    /// `word` and everything below it, sorted.
    pub fn subtree(&self, word: usize) -> Vec<usize> {
        let Some(&node) = self.nodes.get(word) else {
            return Vec::new();
        };
        let mut words = Vec::new();
        let mut dfs = Dfs::new(&self.graph, node);
        while let Some(next) = dfs.next(&self.graph) {
            words.push(self.graph[next]);
        }
        words.sort_unstable();
        words
    }

    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// One root, no cycle, and every word reachable from the root.
    pub fn is_tree(&self) -> bool {
        match self.roots.as_slice() {
            [root] => !self.has_cycle() && self.subtree(*root).len() == self.word_count(),
            _ => false,
        }
    }

    pub(crate) fn inner(&self) -> &Graph<usize, String, Directed> {
        &self.graph
    }
}
