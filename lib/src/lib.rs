//! Convert a YAML description of schema classes and properties into an RDFS
//! graph and emit it as Turtle.
//!
//! The crate is organized the way the data flows: [`schema`] parses the YAML
//! document into typed class/property definitions, [`builder`] turns a
//! document into an `oxigraph` triple graph under the fixed namespaces in
//! [`namespaces`], and [`util`] serializes a graph as Turtle (or reads one
//! back).

pub mod builder;
pub mod consts;
pub mod errors;
pub mod namespaces;
pub mod schema;
pub mod util;

pub use builder::build;
pub use schema::{load_document, SchemaDocument};
pub use util::{graph_to_turtle, write_graph_to_file};
