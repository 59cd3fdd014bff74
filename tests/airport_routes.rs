//! End-to-end: a small route network over an external airport table.

use std::collections::HashMap;

use keyed_graph::{DataIndex, GraphBuilder, GraphKind, KeyedGraph};

/// Caller-owned record table. The graph only ever sees row numbers.
struct Airport {
    id: i64,
    iata: &'static str,
}

const AIRPORTS: [Airport; 7] = [
    Airport { id: 120, iata: "LHR" },
    Airport { id: 130, iata: "MAD" },
    Airport { id: 140, iata: "FRA" },
    Airport { id: 150, iata: "CDG" },
    Airport { id: 160, iata: "BER" },
    Airport { id: 170, iata: "HKG" },
    Airport { id: 100, iata: "MEX" },
];

fn route_graph() -> KeyedGraph {
    let mut graph = KeyedGraph::new(AIRPORTS.len(), GraphKind::Undirected).unwrap();
    for (row, airport) in AIRPORTS.iter().enumerate() {
        graph.add_vertex(airport.id, DataIndex(row));
    }
    graph
}

/// Neighbor key -> weight for the vertex with `key`.
fn neighbor_weights(graph: &KeyedGraph, key: i64) -> HashMap<i64, f64> {
    let vertex = graph.vertex_by_key(key).unwrap();
    let mut out = HashMap::new();
    let mut cursor = vertex.cursor();
    cursor.start();
    while !cursor.at_end() {
        let neighbor = graph.vertex_by_index(cursor.current());
        out.insert(neighbor.key(), cursor.weight());
        cursor.advance();
    }
    out
}

#[test]
fn test_frankfurt_neighbors() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut graph = route_graph();
    graph.add_weighted_edge(140, 160, 1.5).unwrap();
    graph.add_weighted_edge(140, 120, 3.0).unwrap();
    graph.add_weighted_edge(100, 140, 10.0).unwrap();

    let fra = neighbor_weights(&graph, 140);
    let expected: HashMap<i64, f64> = [(160, 1.5), (120, 3.0), (100, 10.0)].into_iter().collect();
    assert_eq!(fra, expected);

    let ber = neighbor_weights(&graph, 160);
    assert_eq!(ber.get(&140), Some(&1.5));
}

#[test]
fn test_data_index_maps_back_to_records() {
    let mut graph = route_graph();
    graph.add_weighted_edge(100, 150, 9.0).unwrap();

    let mex = graph.vertex_by_key(100).unwrap();
    assert_eq!(AIRPORTS[mex.data_index().as_usize()].iata, "MEX");

    let cdg = graph.vertex_by_index(mex.first_edge().unwrap().target);
    assert_eq!(AIRPORTS[cdg.data_index().as_usize()].iata, "CDG");
}

#[test]
fn test_full_route_table() {
    let routes = [
        (140, 160, 1.5),
        (140, 120, 3.0),
        (100, 140, 10.0),
        (100, 150, 9.0),
        (100, 130, 9.5),
        (150, 100, 9.0),
        (150, 170, 14.0),
        (170, 150, 14.0),
        (150, 120, 2.5),
        (120, 160, 2.0),
        (130, 150, 1.5),
        (130, 120, 2.0),
        (160, 100, 14.0),
    ];

    let mut builder = GraphBuilder::new(AIRPORTS.len(), GraphKind::Undirected);
    for (row, airport) in AIRPORTS.iter().enumerate() {
        builder.vertex(airport.id, DataIndex(row));
    }
    let mut graph = builder.build().unwrap();

    let mut duplicates = 0;
    for &(a, b, w) in &routes {
        if graph.add_weighted_edge(a, b, w).unwrap().is_duplicate() {
            duplicates += 1;
        }
    }
    // CDG-MEX and HKG-CDG are listed in both directions.
    assert_eq!(duplicates, 2);
    assert_eq!(graph.edge_count(), 2 * (routes.len() - duplicates));

    let mex = neighbor_weights(&graph, 100);
    assert_eq!(mex.len(), 4);
    assert_eq!(mex[&160], 14.0);
    assert_eq!(mex[&130], 9.5);

    assert_eq!(graph.weight(170, 150), Some(14.0));
    assert_eq!(graph.weight(120, 150), Some(2.5));
    assert_eq!(graph.weight(170, 100), None);

    // Walking every vertex visits every adjacency entry exactly once.
    let walked: usize = graph
        .vertices()
        .map(|(_, v)| v.cursor().count())
        .sum();
    assert_eq!(walked, graph.edge_count());
}
