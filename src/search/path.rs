use serde::{Deserialize, Serialize};

use crate::{
    error::QueryError,
    graphs::{Distance, EdgeId, Graph, VertexId},
};

/// Represents a request for finding a shortest path in a graph.
///
/// Both endpoints are known vertices of the graph the request was resolved
/// against. Source and target may be the same vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: VertexId,
    pub target: VertexId,
}

impl ShortestPathRequest {
    pub fn new(source: VertexId, target: VertexId) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }

    /// Looks up both location names. The start is checked before the end, so
    /// the error names the first unknown location.
    pub fn resolve(
        graph: &dyn Graph,
        start: &str,
        end: &str,
    ) -> Result<ShortestPathRequest, QueryError> {
        let lookup = |name: &str| {
            graph
                .vertex(name)
                .ok_or_else(|| QueryError::InvalidEndpoint(name.to_string()))
        };

        Ok(ShortestPathRequest {
            source: lookup(start)?,
            target: lookup(end)?,
        })
    }
}

/// A shortest route as a sequence of directed roads from source to target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub distance: Distance,
    pub edges: Vec<EdgeId>,
}

impl Route {
    pub fn empty() -> Route {
        Route {
            distance: Distance::ZERO,
            edges: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Resolves the roads of the route to names. Roads unknown to `graph`
    /// are left out.
    pub fn segments<'a>(&'a self, graph: &'a dyn Graph) -> impl Iterator<Item = RouteSegment<'a>> + 'a {
        self.edges.iter().filter_map(move |&edge| {
            let road = graph.road(edge)?;
            Some(RouteSegment {
                from: graph.vertex_name(road.tail())?,
                to: graph.vertex_name(road.head())?,
                road: road.name(),
                distance: road.distance(),
            })
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteSegment<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub road: &'a str,
    pub distance: Distance,
}

/// Result of a query. `NoPath` is never confused with a distance.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum QueryOutcome<'a> {
    Found {
        distance: Distance,
        segments: Vec<RouteSegment<'a>>,
    },
    NoPath,
}

impl<'a> QueryOutcome<'a> {
    pub fn new(graph: &'a dyn Graph, route: Option<&'a Route>) -> QueryOutcome<'a> {
        match route {
            Some(route) => QueryOutcome::Found {
                distance: route.distance,
                segments: route.segments(graph).collect(),
            },
            None => QueryOutcome::NoPath,
        }
    }
}
