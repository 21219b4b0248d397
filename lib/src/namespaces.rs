//! The fixed namespace registry. Term URIs are built by concatenating a
//! vocabulary base with a local name; the same table provides the prefix
//! bindings used when serializing Turtle.

use oxigraph::model::{IriParseError, NamedNode};

/// The four vocabularies the converter knows about. The table is fixed at
/// compile time; call sites never ask for anything else.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Vocabulary {
    /// The domain vocabulary all user-defined classes and properties live in.
    Domain,
    Rdf,
    Rdfs,
    /// schema.org, used for the rangeIncludes/domainIncludes predicates.
    Schema,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 4] = [
        Vocabulary::Domain,
        Vocabulary::Rdf,
        Vocabulary::Rdfs,
        Vocabulary::Schema,
    ];

    pub fn base(self) -> &'static str {
        match self {
            Vocabulary::Domain => "http://oerschema.org/",
            Vocabulary::Rdf => "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
            Vocabulary::Rdfs => "http://www.w3.org/2000/01/rdf-schema#",
            Vocabulary::Schema => "http://schema.org/",
        }
    }

    /// The abbreviation bound for this vocabulary in serialized output.
    pub fn prefix(self) -> &'static str {
        match self {
            Vocabulary::Domain => "oer",
            Vocabulary::Rdf => "rdf",
            Vocabulary::Rdfs => "rdfs",
            Vocabulary::Schema => "sdo",
        }
    }

    /// Builds a validated term URI for a local name under this vocabulary.
    /// Local names come from user input, so the result is checked rather than
    /// constructed unchecked.
    pub fn term(self, local: &str) -> Result<NamedNode, IriParseError> {
        NamedNode::new(format!("{}{}", self.base(), local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_concatenates_base_and_local_name() {
        let node = Vocabulary::Domain.term("Book").unwrap();
        assert_eq!(node.as_str(), "http://oerschema.org/Book");
        let node = Vocabulary::Rdfs.term("Resource").unwrap();
        assert_eq!(node.as_str(), "http://www.w3.org/2000/01/rdf-schema#Resource");
    }

    #[test]
    fn term_rejects_names_that_break_the_uri() {
        assert!(Vocabulary::Domain.term("has space").is_err());
    }
}
