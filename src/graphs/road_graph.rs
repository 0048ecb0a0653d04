use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};

use super::{Distance, EdgeId, Graph, Road, VertexId};
use crate::error::GraphError;

/// Adjacency list of named locations connected by directed roads.
///
/// Vertices are created once per distinct name and never removed. At most one
/// road exists per ordered pair of vertices.
#[derive(Clone, Default)]
pub struct RoadGraph {
    names: Vec<String>,
    name_to_vertex: HashMap<String, VertexId>,
    roads: Vec<Road>,
    out_edges: Vec<Vec<EdgeId>>,
    connected_pairs: HashSet<(VertexId, VertexId)>,
}

impl RoadGraph {
    pub fn new() -> Self {
        RoadGraph {
            names: Vec::new(),
            name_to_vertex: HashMap::new(),
            roads: Vec::new(),
            out_edges: Vec::new(),
            connected_pairs: HashSet::new(),
        }
    }

    /// Returns the vertex called `name`, creating it first if needed.
    pub fn insert_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&vertex) = self.name_to_vertex.get(name) {
            return vertex;
        }

        let vertex = self.names.len() as VertexId;
        self.names.push(name.to_string());
        self.name_to_vertex.insert(name.to_string(), vertex);
        self.out_edges.push(Vec::new());
        vertex
    }

    /// Adds the directed road `tail -> head`.
    pub fn insert_edge(
        &mut self,
        tail: VertexId,
        head: VertexId,
        distance: Distance,
        name: &str,
    ) -> Result<EdgeId, GraphError> {
        for vertex in [tail, head] {
            if !self.contains_vertex(vertex) {
                return Err(GraphError::UnknownVertex(vertex));
            }
        }
        if !distance.is_valid_road_distance() {
            return Err(GraphError::InvalidDistance(distance));
        }
        if !self.connected_pairs.insert((tail, head)) {
            return Err(GraphError::DuplicateEdge { tail, head });
        }

        let edge = self.roads.len() as EdgeId;
        self.roads.push(Road::new(tail, head, distance, name));
        self.out_edges[tail as usize].push(edge);
        Ok(edge)
    }

    pub fn has_edge(&self, tail: VertexId, head: VertexId) -> bool {
        self.connected_pairs.contains(&(tail, head))
    }

    /// Looks up the road from `tail` to `head`, if there is one.
    pub fn find_edge(&self, tail: VertexId, head: VertexId) -> Option<EdgeId> {
        if !self.has_edge(tail, head) {
            return None;
        }
        self.out_edges
            .get(tail as usize)?
            .iter()
            .copied()
            .find(|&edge| self.roads[edge as usize].head() == head)
    }

    pub fn roads(&self) -> impl ExactSizeIterator<Item = &Road> + '_ {
        self.roads.iter()
    }
}

impl Graph for RoadGraph {
    fn number_of_vertices(&self) -> u32 {
        self.names.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.roads.len() as u32
    }

    fn out_edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = EdgeId> + Send + '_> {
        match self.out_edges.get(tail as usize) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn road(&self, edge: EdgeId) -> Option<&Road> {
        self.roads.get(edge as usize)
    }

    fn vertex(&self, name: &str) -> Option<VertexId> {
        self.name_to_vertex.get(name).copied()
    }

    fn vertex_name(&self, vertex: VertexId) -> Option<&str> {
        self.names.get(vertex as usize).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::RoadGraph;
    use crate::{
        error::GraphError,
        graphs::{add_road_bidirectional, Distance, Graph},
    };

    #[test]
    fn insert_vertex_is_idempotent() {
        let mut graph = RoadGraph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        assert_ne!(a, b);
        assert_eq!(graph.insert_vertex("A"), a);
        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(graph.vertex_name(b), Some("B"));
        assert_eq!(graph.vertex("C"), None);
    }

    #[test]
    fn duplicate_ordered_pair_is_rejected() {
        let mut graph = RoadGraph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");

        let first = graph.insert_edge(a, b, Distance::new(5.0), "Main").unwrap();
        assert_eq!(
            graph.insert_edge(a, b, Distance::new(1.0), "Other"),
            Err(GraphError::DuplicateEdge { tail: a, head: b })
        );
        // the reverse direction is a different ordered pair
        assert!(graph.insert_edge(b, a, Distance::new(5.0), "Main").is_ok());

        let road = graph.road(first).unwrap();
        assert_eq!(road.name(), "Main");
        assert_eq!(road.distance(), Distance::new(5.0));
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn invalid_edges_are_rejected() {
        let mut graph = RoadGraph::new();
        let a = graph.insert_vertex("A");

        assert_eq!(
            graph.insert_edge(a, 7, Distance::new(1.0), "Nowhere"),
            Err(GraphError::UnknownVertex(7))
        );
        assert_eq!(
            graph.insert_edge(a, a, Distance::new(-1.0), "Loop"),
            Err(GraphError::InvalidDistance(Distance::new(-1.0)))
        );
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn traversal_is_restartable() {
        let mut graph = RoadGraph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        add_road_bidirectional(&mut graph, a, b, Distance::new(5.0), "Main").unwrap();
        add_road_bidirectional(&mut graph, a, c, Distance::new(2.0), "Elm").unwrap();

        assert_eq!(graph.vertices().collect_vec(), vec![a, b, c]);
        assert_eq!(graph.vertices().count(), 3);

        let heads = graph
            .out_edges(a)
            .map(|edge| graph.endpoints(edge).unwrap())
            .collect_vec();
        assert_eq!(heads, vec![(a, b), (a, c)]);
        assert_eq!(graph.out_edges(a).len(), 2);
        assert_eq!(graph.out_edges(42).len(), 0);
    }

    #[test]
    fn bidirectional_insertion_reports_each_direction() {
        let mut graph = RoadGraph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");

        let first = add_road_bidirectional(&mut graph, a, b, Distance::new(5.0), "Main").unwrap();
        assert_eq!(first.inserted(), 2);

        let again = add_road_bidirectional(&mut graph, b, a, Distance::new(3.0), "Oak").unwrap();
        assert_eq!(again.inserted(), 0);

        let reverse = graph.road(first.backward.unwrap()).unwrap();
        assert_eq!(reverse, &graph.road(first.forward.unwrap()).unwrap().reversed());
        assert_eq!(graph.find_edge(b, a), first.backward);
    }

    #[test]
    fn self_loop_is_inserted_once() {
        let mut graph = RoadGraph::new();
        let a = graph.insert_vertex("A");

        let insertion = add_road_bidirectional(&mut graph, a, a, Distance::new(1.0), "Loop").unwrap();
        assert_eq!(insertion.inserted(), 1);
        assert_eq!(graph.number_of_edges(), 1);
    }
}
