use proptest::prelude::*;
use street_paths::{
    error::SearchError,
    graphs::{add_road_bidirectional, road_graph::RoadGraph, Distance, Graph},
    search::{
        dijkstra::{dijkstra_one_to_all, Dijkstra, DijkstraPathFinding},
        path::ShortestPathRequest,
        PathFinding, PathFindingWithInternalState,
    },
    utility::{gen_requests, par_shortest_path_distances},
};

fn build_graph(number_of_vertices: u32, roads: &[(u32, u32, u32)]) -> RoadGraph {
    let mut graph = RoadGraph::new();
    for vertex in 0..number_of_vertices {
        graph.insert_vertex(&format!("L{}", vertex));
    }
    for (index, &(from, to, distance)) in roads.iter().enumerate() {
        add_road_bidirectional(
            &mut graph,
            from % number_of_vertices,
            to % number_of_vertices,
            Distance::new(distance as f64),
            &format!("R{}", index),
        )
        .unwrap();
    }
    graph
}

/// All pairs distances computed without any priority queue.
fn floyd_warshall(graph: &RoadGraph) -> Vec<Vec<Distance>> {
    let n = graph.number_of_vertices() as usize;
    let mut distances = vec![vec![Distance::INFINITY; n]; n];
    for (vertex, row) in distances.iter_mut().enumerate() {
        row[vertex] = Distance::ZERO;
    }
    for road in graph.roads() {
        let cell = &mut distances[road.tail() as usize][road.head() as usize];
        if road.distance() < *cell {
            *cell = road.distance();
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through_k = distances[i][k] + distances[k][j];
                if through_k < distances[i][j] {
                    distances[i][j] = through_k;
                }
            }
        }
    }
    distances
}

fn roads_strategy() -> impl Strategy<Value = (u32, Vec<(u32, u32, u32)>)> {
    (2u32..12).prop_flat_map(|number_of_vertices| {
        (
            Just(number_of_vertices),
            prop::collection::vec((0u32..12, 0u32..12, 0u32..20), 0..30),
        )
    })
}

proptest! {
    #[test]
    fn distances_match_floyd_warshall((number_of_vertices, roads) in roads_strategy()) {
        let graph = build_graph(number_of_vertices, &roads);
        let expected = floyd_warshall(&graph);
        let mut dijkstra = Dijkstra::new(&graph);

        for source in graph.vertices() {
            for target in graph.vertices() {
                let oracle = expected[source as usize][target as usize];
                let oracle = oracle.is_finite().then_some(oracle);
                prop_assert_eq!(dijkstra.shortest_path_distance(source, target), Ok(oracle));
            }
        }
    }

    #[test]
    fn triangle_inequality((number_of_vertices, roads) in roads_strategy()) {
        let graph = build_graph(number_of_vertices, &roads);
        let all: Vec<_> = graph
            .vertices()
            .map(|source| dijkstra_one_to_all(&graph, source).unwrap())
            .collect();

        for a in graph.vertices() {
            for b in graph.vertices() {
                for c in graph.vertices() {
                    let ab = all[a as usize].get_distance(b);
                    let bc = all[b as usize].get_distance(c);
                    let ac = all[a as usize].get_distance(c);
                    if ab.is_finite() && bc.is_finite() {
                        prop_assert!(ac <= ab + bc);
                    }
                }
            }
        }
    }

    #[test]
    fn distances_are_symmetric_and_repeatable((number_of_vertices, roads) in roads_strategy()) {
        let graph = build_graph(number_of_vertices, &roads);
        let mut dijkstra = Dijkstra::new(&graph);

        for source in graph.vertices() {
            for target in graph.vertices() {
                let forward = dijkstra.shortest_path_distance(source, target);
                prop_assert_eq!(forward, dijkstra.shortest_path_distance(target, source));
                prop_assert_eq!(forward, dijkstra.shortest_path_distance(source, target));
            }
        }
    }

    #[test]
    fn route_length_matches_distance((number_of_vertices, roads) in roads_strategy()) {
        let graph = build_graph(number_of_vertices, &roads);
        let pathfinder = DijkstraPathFinding { graph: &graph };

        for source in graph.vertices() {
            for target in graph.vertices() {
                let Some(route) = pathfinder.shortest_path(source, target).unwrap() else {
                    continue;
                };
                let mut current = source;
                let mut length = Distance::ZERO;
                for &edge in &route.edges {
                    let road = graph.road(edge).unwrap();
                    prop_assert_eq!(road.tail(), current);
                    current = road.head();
                    length += road.distance();
                }
                prop_assert_eq!(current, target);
                prop_assert_eq!(length, route.distance);
            }
        }
    }
}

#[test_log::test]
fn parallel_queries_match_sequential_queries() {
    let roads: Vec<_> = (0..200u32)
        .map(|index| (index, (index * 7 + 3) % 97, index % 13 + 1))
        .collect();
    let graph = build_graph(97, &roads);
    let mut requests = gen_requests(&graph, 300);
    assert_eq!(requests.len(), 300);
    requests.push(ShortestPathRequest::new(0, 500));

    let parallel = par_shortest_path_distances(&graph, &requests);
    assert_eq!(parallel.last(), Some(&Err(SearchError::UnknownVertex(500))));

    let mut dijkstra = Dijkstra::new(&graph);
    for (ShortestPathRequest { source, target }, distance) in requests.iter().zip(parallel) {
        assert_eq!(dijkstra.shortest_path_distance(*source, *target), distance);
    }
}
