use apollo_parser::cst;
use std::fmt;

/// The kind of an executable operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// What a document holds, as far as filename conventions are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Query,
    Mutation,
    Subscription,
    Fragment,
}

impl DocumentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
            Self::Fragment => "fragment",
        }
    }
}

impl From<OperationKind> for DocumentType {
    fn from(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Query => Self::Query,
            OperationKind::Mutation => Self::Mutation,
            OperationKind::Subscription => Self::Subscription,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level definition of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Operation {
        kind: OperationKind,
        name: Option<String>,
    },
    Fragment {
        name: String,
    },
    /// Type system definitions and extensions
    Other,
}

/// The definition whose name a document's filename is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoverningDefinition<'a> {
    pub name: &'a str,
    pub document_type: DocumentType,
}

/// Top-level definitions of a document, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    #[must_use]
    pub const fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Lower a parsed document. A fragment whose name did not parse is kept as `Other`.
    #[must_use]
    pub fn from_cst(document: &cst::Document) -> Self {
        let definitions = document
            .definitions()
            .map(|definition| match definition {
                cst::Definition::OperationDefinition(operation) => Definition::Operation {
                    kind: operation_kind(&operation),
                    name: operation.name().map(|name| name.text().to_string()),
                },
                cst::Definition::FragmentDefinition(fragment) => fragment
                    .fragment_name()
                    .and_then(|fragment_name| fragment_name.name())
                    .map_or(Definition::Other, |name| Definition::Fragment {
                        name: name.text().to_string(),
                    }),
                _ => Definition::Other,
            })
            .collect();

        Self { definitions }
    }

    /// Select the definition that names this document.
    ///
    /// The first operation wins, even over a fragment declared before it;
    /// otherwise the first fragment. An anonymous governing operation yields
    /// `None`, as does a document with neither kind of definition.
    #[must_use]
    pub fn classify(&self) -> Option<GoverningDefinition<'_>> {
        let first_operation = self.definitions.iter().find_map(|definition| match definition {
            Definition::Operation { kind, name } => Some((*kind, name.as_deref())),
            _ => None,
        });

        if let Some((kind, name)) = first_operation {
            return name.map(|name| GoverningDefinition {
                name,
                document_type: kind.into(),
            });
        }

        self.definitions.iter().find_map(|definition| match definition {
            Definition::Fragment { name } => Some(GoverningDefinition {
                name,
                document_type: DocumentType::Fragment,
            }),
            _ => None,
        })
    }
}

/// Shorthand `{ ... }` operations have no operation type and are queries
fn operation_kind(operation: &cst::OperationDefinition) -> OperationKind {
    match operation.operation_type() {
        Some(op_type) if op_type.mutation_token().is_some() => OperationKind::Mutation,
        Some(op_type) if op_type.subscription_token().is_some() => OperationKind::Subscription,
        _ => OperationKind::Query,
    }
}
