// tests/unit_graph_build.rs
//! Tests for link graph construction.

use linkrank_core::graph::GraphBuilder;
use linkrank_core::input::MemorySource;
use linkrank_core::LinkRankError;

#[test]
fn test_ids_assigned_source_then_target() {
    let src = MemorySource::from_text("Home\tAbout\nAbout\tContact\nBlog\tHome\n");
    let graph = GraphBuilder::build(&src).unwrap();
    let index = graph.index();
    assert_eq!(index.id("Home"), Some(0));
    assert_eq!(index.id("About"), Some(1));
    assert_eq!(index.id("Contact"), Some(2));
    assert_eq!(index.id("Blog"), Some(3));
    assert_eq!(index.name(3), Some("Blog"));
}

#[test]
fn test_target_only_pages_get_empty_slots() {
    let src = MemorySource::from_pairs([("a", "b"), ("a", "c")]);
    let graph = GraphBuilder::build(&src).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.dangling_count(), 2);
    assert_eq!(graph.links_from("b"), Some(vec![]));
}

#[test]
fn test_parallel_edges_and_self_loops_are_kept() {
    let src = MemorySource::from_pairs([("a", "b"), ("a", "a"), ("a", "b")]);
    let graph = GraphBuilder::build(&src).unwrap();
    assert_eq!(graph.links_from("a"), Some(vec!["b", "a", "b"]));
    assert_eq!(graph.adjacency().out_degree(0), 3);
}

#[test]
fn test_malformed_line_aborts_build() {
    let src = MemorySource::from_text("a\tb\nbroken\nc\td\n");
    match GraphBuilder::build(&src) {
        Err(LinkRankError::MalformedEdge { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "broken");
        }
        other => panic!("expected MalformedEdge, got {other:?}"),
    }
}

#[test]
fn test_identifiers_are_not_trimmed() {
    let src = MemorySource::from_text("a \tb\na\tb\n");
    let graph = GraphBuilder::build(&src).unwrap();
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_empty_input_gives_empty_graph() {
    let graph = GraphBuilder::build(&MemorySource::default()).unwrap();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_build_is_deterministic() {
    let text = "x\ty\ny\tz\nz\tx\nw\tx\nx\tw\n";
    let first = GraphBuilder::build(&MemorySource::from_text(text)).unwrap();
    let second = GraphBuilder::build(&MemorySource::from_text(text)).unwrap();
    assert_eq!(first, second);
}
