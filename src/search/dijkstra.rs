use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use log::trace;

use super::{
    collections::{
        dijkstra_data::DijkstraData, vertex_distance_queue::VertexDistanceQueue,
        vertex_expanded_data::VertexExpandedData,
    },
    path::Route,
    PathFinding, PathFindingWithInternalState,
};
use crate::{
    error::SearchError,
    graphs::{Distance, Graph, VertexId},
};

/// Where a [`Dijkstra`] searcher is within its current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Query state was reset and the source is queued.
    Initialized,
    /// Vertices are being extracted and their roads relaxed.
    Relaxing,
    /// The target was extracted or the queue ran empty.
    Settled,
    /// The route was reconstructed or reported missing.
    Done,
}

/// Limits checked once per extracted vertex.
#[derive(Debug, Clone, Default)]
pub struct StopCondition {
    deadline: Option<Instant>,
    cancelled: Option<Arc<AtomicBool>>,
}

impl StopCondition {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_cancel_flag(mut self, cancelled: Arc<AtomicBool>) -> Self {
        self.cancelled = Some(cancelled);
        self
    }

    fn check(&self) -> Result<(), SearchError> {
        if let Some(cancelled) = &self.cancelled {
            if cancelled.load(Ordering::Relaxed) {
                return Err(SearchError::Cancelled);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(SearchError::DeadlineExceeded);
            }
        }
        Ok(())
    }
}

/// Reusable single source search over a shared graph.
///
/// All query state lives in the searcher and is reset at the start of every
/// query. Use one searcher per thread.
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
    data: DijkstraData,
    expanded: VertexExpandedData,
    queue: VertexDistanceQueue,
    state: SearchState,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Self {
        Dijkstra {
            graph,
            data: DijkstraData::new(graph),
            expanded: VertexExpandedData::new(graph),
            queue: VertexDistanceQueue::new(),
            state: SearchState::Done,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn data(&self) -> &DijkstraData {
        &self.data
    }

    fn set_state(&mut self, state: SearchState) {
        trace!("search state {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    fn initialize(&mut self, source: VertexId) -> Result<(), SearchError> {
        if !self.graph.contains_vertex(source) {
            return Err(SearchError::UnknownVertex(source));
        }

        self.data.clear(self.graph);
        self.expanded.clear(self.graph);
        self.queue.clear();

        self.data.set_distance(source, Distance::ZERO);
        self.queue.insert(source, Distance::ZERO);
        self.set_state(SearchState::Initialized);
        Ok(())
    }

    /// Extracts and relaxes vertices until `target` is settled or every
    /// reachable vertex is.
    fn relax_until(&mut self, target: Option<VertexId>, stop: &StopCondition) -> Result<(), SearchError> {
        let graph = self.graph;
        self.set_state(SearchState::Relaxing);

        while let Some((tail, _)) = self.queue.pop() {
            if let Err(err) = stop.check() {
                self.set_state(SearchState::Done);
                return Err(err);
            }
            if self.expanded.expand(tail) {
                continue;
            }
            if Some(tail) == target {
                break;
            }

            let distance_tail = self.data.get_distance(tail);
            for edge in graph.out_edges(tail) {
                let Some(road) = graph.road(edge) else {
                    continue;
                };
                let head = road.head();
                if self.expanded.is_expanded(head) {
                    continue;
                }

                let alternative_distance_head = distance_tail + road.distance();
                if alternative_distance_head < self.data.get_distance(head) {
                    self.data.set_distance(head, alternative_distance_head);
                    self.data.set_predecessor(head, edge);
                    self.queue.insert(head, alternative_distance_head);
                }
            }
        }

        self.set_state(SearchState::Settled);
        Ok(())
    }

    /// Shortest route from `source` to `target`, `Ok(None)` if there is none.
    pub fn one_to_one(
        &mut self,
        source: VertexId,
        target: VertexId,
        stop: &StopCondition,
    ) -> Result<Option<Route>, SearchError> {
        if !self.graph.contains_vertex(target) {
            return Err(SearchError::UnknownVertex(target));
        }
        self.initialize(source)?;
        self.relax_until(Some(target), stop)?;

        let route = self.data.get_route(self.graph, source, target);
        self.set_state(SearchState::Done);
        Ok(route)
    }

    /// Settles every vertex reachable from `source`. The distances are read
    /// through [`Dijkstra::data`] afterwards.
    pub fn one_to_all(&mut self, source: VertexId, stop: &StopCondition) -> Result<(), SearchError> {
        self.initialize(source)?;
        self.relax_until(None, stop)?;
        self.set_state(SearchState::Done);
        Ok(())
    }
}

impl<'a> PathFindingWithInternalState for Dijkstra<'a> {
    fn shortest_path(
        &mut self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Route>, SearchError> {
        self.one_to_one(source, target, &StopCondition::none())
    }
}

/// Stateless front end: every query gets its own search state, so one
/// instance can answer queries from many threads at once.
#[derive(Clone, Copy)]
pub struct DijkstraPathFinding<'a> {
    pub graph: &'a dyn Graph,
}

impl<'a> PathFinding for DijkstraPathFinding<'a> {
    fn shortest_path(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Route>, SearchError> {
        dijkstra_one_to_one(self.graph, source, target)
    }
}

pub fn dijkstra_one_to_one(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Route>, SearchError> {
    Dijkstra::new(graph).shortest_path(source, target)
}

pub fn dijkstra_one_to_all(graph: &dyn Graph, source: VertexId) -> Result<DijkstraData, SearchError> {
    let mut dijkstra = Dijkstra::new(graph);
    dijkstra.one_to_all(source, &StopCondition::none())?;
    Ok(dijkstra.data)
}
