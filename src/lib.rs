//! Shortest routes over a network of named locations joined by named
//! two-way roads.
//!
//! A [`graphs::road_graph::RoadGraph`] is loaded once with a
//! [`graphs::network_loader::NetworkLoader`] and then queried with
//! [`search::dijkstra::Dijkstra`]. Query state is kept outside the graph,
//! so any number of queries can share one loaded network.

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;
