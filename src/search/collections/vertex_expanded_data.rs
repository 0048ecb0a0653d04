use crate::graphs::{Graph, VertexId};

/// Settled vertices of a single query.
pub struct VertexExpandedData {
    expanded: Vec<bool>,
}

impl VertexExpandedData {
    pub fn new(graph: &dyn Graph) -> Self {
        VertexExpandedData {
            expanded: vec![false; graph.number_of_vertices() as usize],
        }
    }

    /// Marks `vertex` as settled and returns whether it already was.
    pub fn expand(&mut self, vertex: VertexId) -> bool {
        let is_expanded = self.expanded[vertex as usize];
        self.expanded[vertex as usize] = true;
        is_expanded
    }

    pub fn is_expanded(&self, vertex: VertexId) -> bool {
        self.expanded.get(vertex as usize).copied().unwrap_or(false)
    }

    pub fn clear(&mut self, graph: &dyn Graph) {
        self.expanded.clear();
        self.expanded.resize(graph.number_of_vertices() as usize, false);
    }
}
