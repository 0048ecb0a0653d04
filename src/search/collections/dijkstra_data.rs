use crate::{
    graphs::{Distance, EdgeId, Graph, VertexId},
    search::path::Route,
};

/// Tentative distances and predecessor roads of a single query.
///
/// The data belongs to one search, never to the graph. It has to be cleared
/// before it is reused for the next query.
pub struct DijkstraData {
    distances: Vec<Distance>,
    predecessors: Vec<Option<EdgeId>>,
}

impl DijkstraData {
    pub fn new(graph: &dyn Graph) -> Self {
        let number_of_vertices = graph.number_of_vertices() as usize;
        DijkstraData {
            distances: vec![Distance::INFINITY; number_of_vertices],
            predecessors: vec![None; number_of_vertices],
        }
    }

    /// Resets every vertex to unreached, resizing to `graph` if it grew.
    pub fn clear(&mut self, graph: &dyn Graph) {
        let number_of_vertices = graph.number_of_vertices() as usize;
        self.distances.clear();
        self.distances.resize(number_of_vertices, Distance::INFINITY);
        self.predecessors.clear();
        self.predecessors.resize(number_of_vertices, None);
    }

    pub fn get_distance(&self, vertex: VertexId) -> Distance {
        self.distances
            .get(vertex as usize)
            .copied()
            .unwrap_or(Distance::INFINITY)
    }

    pub fn set_distance(&mut self, vertex: VertexId, distance: Distance) {
        self.distances[vertex as usize] = distance;
    }

    pub fn get_predecessor(&self, vertex: VertexId) -> Option<EdgeId> {
        self.predecessors.get(vertex as usize).copied().flatten()
    }

    pub fn set_predecessor(&mut self, vertex: VertexId, edge: EdgeId) {
        self.predecessors[vertex as usize] = Some(edge);
    }

    pub fn is_reached(&self, vertex: VertexId) -> bool {
        self.get_distance(vertex).is_finite()
    }

    /// Walks the predecessor roads back from `target` to `source`.
    ///
    /// Returns `None` if `target` was not reached. For `source == target` the
    /// route is empty with distance zero.
    pub fn get_route(&self, graph: &dyn Graph, source: VertexId, target: VertexId) -> Option<Route> {
        if source == target {
            return Some(Route::empty());
        }
        self.get_predecessor(target)?;

        let mut edges = Vec::new();
        let mut current = target;
        while current != source {
            let edge = self.get_predecessor(current)?;
            edges.push(edge);
            current = graph.road(edge)?.tail();

            // a chain longer than the graph can only come from stale data
            if edges.len() > graph.number_of_vertices() as usize {
                return None;
            }
        }
        edges.reverse();

        Some(Route {
            distance: self.get_distance(target),
            edges,
        })
    }
}
