//! The graph builder: one pass over a [`SchemaDocument`], emitting triples
//! into an `oxigraph` graph. The graph deduplicates, so emission order never
//! matters. Malformed entries (empty keys, names that do not form a valid
//! URI) are skipped with a warning rather than failing the build.

use crate::consts;
use crate::namespaces::Vocabulary;
use crate::schema::{ClassDef, PropertyDef, SchemaDocument};
use log::{info, warn};
use oxigraph::model::{Graph, LiteralRef, NamedNode, NamedNodeRef, TripleRef};

/// The literal token a `subClassOf` entry uses to reference rdfs:Datatype.
const RDFS_DATATYPE_TOKEN: &str = "rdfs:datatype";
const RDFS_PREFIX: &str = "rdfs:";

/// Where a `subClassOf` entry points, decided purely by the shape of the
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentRef {
    /// A full, already-resolved URI, used verbatim.
    Uri(String),
    /// The built-in rdfs:Datatype term.
    Datatype,
    /// A term in the RDFS vocabulary, by local name.
    RdfsTerm(String),
    /// A class in the domain vocabulary.
    DomainClass(String),
}

/// Classifies a `subClassOf` entry. Checked in precedence order: a full URI
/// wins over the datatype token, which wins over an `rdfs:`-prefixed term;
/// anything else is a same-vocabulary class reference.
pub fn classify_parent(parent: &str) -> ParentRef {
    if parent.starts_with("http:") {
        ParentRef::Uri(parent.to_string())
    } else if parent == RDFS_DATATYPE_TOKEN {
        ParentRef::Datatype
    } else if let Some(local) = parent.strip_prefix(RDFS_PREFIX) {
        ParentRef::RdfsTerm(local.to_string())
    } else {
        ParentRef::DomainClass(parent.to_string())
    }
}

/// Builds the triple graph for `document`. Total and side-effect-free apart
/// from diagnostic logging; a fresh graph is returned for every call.
pub fn build(document: &SchemaDocument) -> Graph {
    let mut graph = Graph::new();
    for (name, def) in &document.classes {
        if name.is_empty() {
            // known input-quality issue upstream, tolerated
            warn!("Skipping class entry with an empty name");
            continue;
        }
        let subject = match Vocabulary::Domain.term(name) {
            Ok(subject) => subject,
            Err(e) => {
                warn!("Skipping class {:?}: {}", name, e);
                continue;
            }
        };
        add_class(&mut graph, subject.as_ref(), name, def);
    }
    for (name, def) in &document.properties {
        if name.is_empty() {
            warn!("Skipping property entry with an empty name");
            continue;
        }
        let subject = match Vocabulary::Domain.term(name) {
            Ok(subject) => subject,
            Err(e) => {
                warn!("Skipping property {:?}: {}", name, e);
                continue;
            }
        };
        add_property(&mut graph, subject.as_ref(), name, def);
    }
    info!("Converted schema description to {} triples", graph.len());
    graph
}

fn add_class(graph: &mut Graph, subject: NamedNodeRef<'_>, name: &str, def: &ClassDef) {
    graph.insert(TripleRef::new(subject, consts::TYPE, consts::CLASS));
    if let Some(label) = &def.label {
        graph.insert(TripleRef::new(
            subject,
            consts::LABEL,
            LiteralRef::new_simple_literal(label),
        ));
    }
    // Unlike properties, a class comment is emitted even when it is the
    // empty string.
    if let Some(comment) = &def.comment {
        graph.insert(TripleRef::new(
            subject,
            consts::COMMENT,
            LiteralRef::new_simple_literal(comment),
        ));
    }
    if let Some(parents) = &def.sub_class_of {
        for parent in parents {
            let object = match classify_parent(parent) {
                ParentRef::Uri(uri) => NamedNode::new(uri),
                ParentRef::Datatype => Ok(consts::DATATYPE.into_owned()),
                ParentRef::RdfsTerm(local) => Vocabulary::Rdfs.term(&local),
                ParentRef::DomainClass(class) => Vocabulary::Domain.term(&class),
            };
            match object {
                Ok(object) => {
                    graph.insert(TripleRef::new(
                        subject,
                        consts::SUB_CLASS_OF,
                        object.as_ref(),
                    ));
                }
                Err(e) => warn!(
                    "Skipping subClassOf entry {:?} on class {:?}: {}",
                    parent, name, e
                ),
            }
        }
    }
}

fn add_property(graph: &mut Graph, subject: NamedNodeRef<'_>, name: &str, def: &PropertyDef) {
    // every property is both a generic RDF property and an instance of the
    // domain vocabulary's Property class
    graph.insert(TripleRef::new(subject, consts::TYPE, consts::PROPERTY));
    graph.insert(TripleRef::new(subject, consts::TYPE, consts::DOMAIN_PROPERTY));
    if let Some(label) = &def.label {
        graph.insert(TripleRef::new(
            subject,
            consts::LABEL,
            LiteralRef::new_simple_literal(label),
        ));
    }
    if let Some(comment) = &def.comment {
        if !comment.is_empty() {
            graph.insert(TripleRef::new(
                subject,
                consts::COMMENT,
                LiteralRef::new_simple_literal(comment),
            ));
        }
    }
    if let Some(range) = &def.range {
        emit_includes(graph, subject, name, consts::RANGE_INCLUDES, range);
    }
    if let Some(domain) = &def.domain {
        emit_includes(graph, subject, name, consts::DOMAIN_INCLUDES, domain);
    }
}

fn emit_includes(
    graph: &mut Graph,
    subject: NamedNodeRef<'_>,
    name: &str,
    predicate: NamedNodeRef<'_>,
    entries: &[String],
) {
    for entry in entries {
        match Vocabulary::Domain.term(entry) {
            Ok(object) => {
                graph.insert(TripleRef::new(subject, predicate, object.as_ref()));
            }
            Err(e) => warn!(
                "Skipping {} entry {:?} on property {:?}: {}",
                predicate, entry, name, e
            ),
        }
    }
}
