use log::debug;

use crate::error::GraphError;

pub mod distance;
pub mod edge;
pub mod network_loader;
pub mod road_graph;

pub use distance::Distance;
pub use edge::Road;

pub type VertexId = u32;
pub type EdgeId = u32;

/// Read access to a road network, everything a search needs.
///
/// Implementors hold no per-query state, so a single graph can be shared
/// between any number of searches.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32;

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + Send + '_> {
        Box::new(0..self.number_of_vertices())
    }

    /// Ids of the roads leaving `tail`. Empty for an unknown vertex.
    fn out_edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = EdgeId> + Send + '_>;

    fn road(&self, edge: EdgeId) -> Option<&Road>;

    fn endpoints(&self, edge: EdgeId) -> Option<(VertexId, VertexId)> {
        self.road(edge).map(Road::endpoints)
    }

    fn vertex(&self, name: &str) -> Option<VertexId>;

    fn vertex_name(&self, vertex: VertexId) -> Option<&str>;

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.number_of_vertices()
    }
}

/// Which halves of a two-way road made it into the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidirectionalInsertion {
    pub forward: Option<EdgeId>,
    pub backward: Option<EdgeId>,
}

impl BidirectionalInsertion {
    pub fn inserted(&self) -> usize {
        self.forward.is_some() as usize + self.backward.is_some() as usize
    }
}

/// Inserts `from -> to` and `to -> from` with the same distance and name.
///
/// Each direction is inserted on its own; a direction that already exists
/// is skipped and logged while the other one is still added. Any error other
/// than a duplicate is returned.
pub fn add_road_bidirectional(
    graph: &mut road_graph::RoadGraph,
    from: VertexId,
    to: VertexId,
    distance: Distance,
    name: &str,
) -> Result<BidirectionalInsertion, GraphError> {
    let mut insert = |tail: VertexId, head: VertexId| match graph
        .insert_edge(tail, head, distance, name)
    {
        Ok(edge) => Ok(Some(edge)),
        Err(GraphError::DuplicateEdge { tail, head }) => {
            debug!("discarding duplicate road {} from {} to {}", name, tail, head);
            Ok(None)
        }
        Err(err) => Err(err),
    };

    let forward = insert(from, to)?;
    let backward = insert(to, from)?;

    Ok(BidirectionalInsertion { forward, backward })
}
