//! Turtle serialization and parsing for triple graphs, with the registry's
//! prefix bindings applied to the output.

use crate::errors::SaveError;
use crate::namespaces::Vocabulary;
use anyhow::Result;
use log::{debug, info};
use oxigraph::io::{RdfFormat, RdfParser, RdfSerializer};
use oxigraph::model::{Graph, Triple};
use std::io::BufReader;
use std::path::Path;

fn turtle_serializer() -> Result<RdfSerializer> {
    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
    for vocab in Vocabulary::ALL {
        serializer = serializer.with_prefix(vocab.prefix(), vocab.base())?;
    }
    Ok(serializer)
}

/// Serializes `graph` as Turtle to the file at `path`. Failures are reported
/// as a [`SaveError`]; the in-memory graph is unaffected.
pub fn write_graph_to_file(graph: &Graph, path: &Path) -> Result<()> {
    let save_err = |reason: String| SaveError {
        path: path.to_path_buf(),
        reason,
    };
    let file = std::fs::File::create(path).map_err(|e| save_err(e.to_string()))?;
    let mut serializer = turtle_serializer()?.for_writer(file);
    for triple in graph.iter() {
        serializer
            .serialize_triple(triple)
            .map_err(|e| save_err(e.to_string()))?;
    }
    serializer.finish().map_err(|e| save_err(e.to_string()))?;
    info!(
        "Wrote {} triples as Turtle to {}",
        graph.len(),
        path.display()
    );
    Ok(())
}

/// Serializes `graph` as a Turtle string.
pub fn graph_to_turtle(graph: &Graph) -> Result<String> {
    let mut serializer = turtle_serializer()?.for_writer(Vec::new());
    for triple in graph.iter() {
        serializer.serialize_triple(triple)?;
    }
    let bytes = serializer.finish()?;
    Ok(String::from_utf8(bytes)?)
}

/// Parses a Turtle file back into a graph.
pub fn read_graph(path: &Path) -> Result<Graph> {
    debug!("Reading Turtle from {}", path.display());
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let parser = RdfParser::from_format(RdfFormat::Turtle).for_reader(reader);
    let mut graph = Graph::new();
    for quad in parser {
        let quad = quad?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        graph.insert(&triple);
    }
    Ok(graph)
}

/// Parses Turtle text into a graph.
pub fn parse_turtle(input: &str) -> Result<Graph> {
    let parser =
        RdfParser::from_format(RdfFormat::Turtle).for_reader(std::io::Cursor::new(input));
    let mut graph = Graph::new();
    for quad in parser {
        let quad = quad?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        graph.insert(&triple);
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::model::{Literal, NamedNode};

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        let subject = NamedNode::new("http://oerschema.org/Book").unwrap();
        let label = NamedNode::new("http://www.w3.org/2000/01/rdf-schema#label").unwrap();
        graph.insert(&Triple::new(
            subject,
            label,
            Literal::new_simple_literal("Book"),
        ));
        graph
    }

    #[test]
    fn turtle_output_uses_registered_prefixes() {
        let ttl = graph_to_turtle(&sample_graph()).unwrap();
        assert!(ttl.contains("@prefix oer: <http://oerschema.org/>"));
        assert!(ttl.contains("oer:Book"));
        assert!(ttl.contains("rdfs:label"));
    }

    #[test]
    fn write_to_unwritable_path_is_a_save_error() {
        let err = write_graph_to_file(&sample_graph(), Path::new("/no/such/dir/out.ttl"))
            .unwrap_err();
        assert!(err.downcast_ref::<SaveError>().is_some());
    }

    #[test]
    fn serialized_turtle_parses_back_to_the_same_set() {
        let graph = sample_graph();
        let ttl = graph_to_turtle(&graph).unwrap();
        let reparsed = parse_turtle(&ttl).unwrap();
        assert_eq!(graph.len(), reparsed.len());
        for triple in graph.iter() {
            assert!(reparsed.contains(triple));
        }
    }
}
