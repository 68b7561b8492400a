use crate::ast;
use crate::ir::EntityId;
use crate::ir::FragmentRegistry;
use crate::ir::OperationKind;
use crate::ir::SelectionSetId;
use crate::ir::Variable;
use crate::loc;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;
use sha2::Digest;
use sha2::Sha256;
use std::sync::OnceLock;

/// A compiled operation: the root of one IR tree, plus everything an
/// emitter needs to generate a typed client for it.
#[derive(Clone, Debug)]
pub struct Operation {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) definition: ast::operation::OperationDefinition,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) identifier: OnceLock<String>,
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) referenced_fragments: Vec<String>,
    pub(crate) root_entity: EntityId,
    pub(crate) selection_set: SelectionSetId,
    pub(crate) variables: IndexMap<String, Variable>,
}
impl Operation {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The underlying AST this operation was built from.
    pub fn definition(&self) -> &ast::operation::OperationDefinition {
        &self.definition
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The persisted-query identifier for this operation: the lowercase-hex
    /// SHA-256 digest of the operation's normalized source text concatenated
    /// with the normalized source text of every referenced fragment, in
    /// [`Operation::referenced_fragments`] order.
    ///
    /// Computed on first call and memoized for the lifetime of this
    /// `Operation`.
    pub fn operation_identifier(&self, fragments: &FragmentRegistry) -> &str {
        self.identifier.get_or_init(|| {
            let mut source = normalized_definition_text(
                ast::operation::Definition::Operation(self.definition.clone()),
            );
            for fragment_name in &self.referenced_fragments {
                if let Some(fragment) = fragments.fragment_named(fragment_name) {
                    source.push('\n');
                    source.push_str(&normalized_definition_text(
                        ast::operation::Definition::Fragment(
                            fragment.definition().clone(),
                        ),
                    ));
                }
            }
            hex::encode(Sha256::digest(source.as_bytes()))
        })
    }

    /// The names of every fragment this operation transitively spreads, in
    /// first-encountered order, deduplicated.
    pub fn referenced_fragments(&self) -> &[String] {
        self.referenced_fragments.as_slice()
    }

    /// This operation's root entity (field path `[]`, rooted at the
    /// schema's root operation type).
    pub fn root_entity(&self) -> EntityId {
        self.root_entity
    }

    /// This operation's root selection set.
    pub fn selection_set(&self) -> SelectionSetId {
        self.selection_set
    }

    /// A map from VariableName -> [`Variable`] for the variables defined on
    /// this operation, in definition order.
    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }
}

/// Canonical text for one executable definition: the parser's formatter
/// applied to a single-definition document, so authored whitespace and
/// comments never influence the identifier.
fn normalized_definition_text(definition: ast::operation::Definition) -> String {
    let doc = ast::operation::Document {
        definitions: vec![definition],
    };
    format!("{doc}")
}
