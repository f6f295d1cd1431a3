//! Loading corpora from files and readers.

use crate::common::{corpus_file, MUGAR, NURSERY};
use affinity_graph::{EdgeListGraph, WeightedGraph};
use affinity_poet::{AffinityPoet, CorpusBuilder, Error, Segmentation};
use std::io::Cursor;

#[test]
fn test_from_path() {
    let file = corpus_file(MUGAR);
    let poet: AffinityPoet = AffinityPoet::from_path(file.path()).unwrap();
    assert_eq!(poet.poem("Test the system."), "Test of the system.");
    assert_eq!(poet.stats().lines, 1);
    assert_eq!(poet.stats().edges, 10);
}

#[test]
fn test_from_path_matches_from_corpus() {
    let file = corpus_file(NURSERY);
    let from_file: AffinityPoet = AffinityPoet::from_path(file.path()).unwrap();
    let from_memory: AffinityPoet = AffinityPoet::from_corpus(NURSERY);
    assert_eq!(from_file.stats(), from_memory.stats());
    assert_eq!(
        affinity_graph::render(from_file.graph()),
        affinity_graph::render(from_memory.graph())
    );
}

#[test]
fn test_missing_corpus_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let result: Result<AffinityPoet, Error> = AffinityPoet::from_path(&missing);
    let err = result.unwrap_err();
    assert!(matches!(err, Error::CorpusUnreadable { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_directory_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let result: Result<AffinityPoet, Error> = AffinityPoet::from_path(dir.path());
    assert!(matches!(result, Err(Error::CorpusUnreadable { .. })));
}

#[test]
fn test_from_reader() {
    let poet: AffinityPoet = AffinityPoet::from_reader(Cursor::new(NURSERY)).unwrap();
    assert_eq!(poet.stats().lines, 6);
}

#[test]
fn test_builder_combines_sources() {
    let file = corpus_file("seek and find");
    let mut builder = CorpusBuilder::new(EdgeListGraph::<String>::new());
    builder.add_path(file.path()).unwrap();
    builder.add_text("seek and find\nlost and found");
    let (graph, stats) = builder.build();

    assert_eq!(graph.weight(&"seek".to_string(), &"and".to_string()), 2);
    assert_eq!(graph.weight(&"and".to_string(), &"found".to_string()), 1);
    assert_eq!(stats.lines, 3);
}

#[test]
fn test_whitespace_segmentation_round_trip() {
    let mut builder = CorpusBuilder::new(EdgeListGraph::<String>::new())
        .with_segmentation(Segmentation::Whitespace);
    builder.add_text("Hello, HELLO, hello, goodbye!");
    let (graph, _) = builder.build();

    let mut edges = graph.edges();
    edges.sort();
    assert_eq!(
        edges,
        vec![
            ("hello,".to_string(), "goodbye!".to_string(), 1),
            ("hello,".to_string(), "hello,".to_string(), 2),
        ]
    );
}
