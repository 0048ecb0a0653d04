use path::Route;

use crate::{
    error::SearchError,
    graphs::{Distance, VertexId},
};

pub mod collections;
pub mod dijkstra;
pub mod path;

/// `Ok(None)` means there is no path, an unknown vertex is an error.
pub trait PathFinding: Send + Sync {
    fn shortest_path(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Route>, SearchError>;

    fn shortest_path_distance(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Distance>, SearchError> {
        Ok(self.shortest_path(source, target)?.map(|route| route.distance))
    }
}

/// Path finding that reuses buffers between queries and therefore needs
/// exclusive access.
pub trait PathFindingWithInternalState {
    fn shortest_path(
        &mut self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Route>, SearchError>;

    fn shortest_path_distance(
        &mut self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Distance>, SearchError> {
        Ok(self.shortest_path(source, target)?.map(|route| route.distance))
    }
}
