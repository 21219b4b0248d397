//! Constant NamedNodeRefs for the fixed RDF, RDFS and schema.org terms the
//! graph builder emits.

use oxigraph::model::NamedNodeRef;

// rdf
pub const TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
pub const PROPERTY: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#Property");
// rdfs
pub const CLASS: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#Class");
pub const SUB_CLASS_OF: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#subClassOf");
pub const LABEL: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label");
pub const COMMENT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#comment");
pub const DATATYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#Datatype");
// schema.org range/domain predicates
pub const RANGE_INCLUDES: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://schema.org/rangeIncludes");
pub const DOMAIN_INCLUDES: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://schema.org/domainIncludes");
// the domain vocabulary's own Property marker class
pub const DOMAIN_PROPERTY: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://oerschema.org/Property");
