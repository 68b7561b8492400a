use crate::ast;
use crate::ir::selection_merger::MergeCandidate;
use crate::ir::EntityId;
use crate::ir::SelectionSetId;
use crate::loc;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;

/// A compiled named fragment.
///
/// Fragments are built once per distinct name (on first use), memoized in
/// the [`FragmentRegistry`], immutable after construction, and shared
/// (read-only) by every spread site; spreads reference them by name.
#[derive(Clone, Debug)]
pub struct Fragment {
    pub(crate) candidate_table: Vec<MergeCandidate>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) definition: ast::operation::FragmentDefinition,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) referenced_fragments: Vec<String>,
    pub(crate) root_entity: EntityId,
    pub(crate) selection_set: SelectionSetId,
    pub(crate) type_condition: String,
}
impl Fragment {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The underlying AST this fragment was built from.
    pub fn definition(&self) -> &ast::operation::FragmentDefinition {
        &self.definition
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The names of every fragment this fragment transitively spreads, in
    /// first-encountered order, deduplicated.
    pub fn referenced_fragments(&self) -> &[String] {
        self.referenced_fragments.as_slice()
    }

    /// This fragment's root entity (field path `[]`, rooted at the type
    /// condition).
    pub fn root_entity(&self) -> EntityId {
        self.root_entity
    }

    /// This fragment's root selection set.
    pub fn selection_set(&self) -> SelectionSetId {
        self.selection_set
    }

    /// The type named by `on ...` in this fragment's definition.
    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

/// The set of [`Fragment`]s compiled from a document, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct FragmentRegistry {
    pub(crate) fragments: IndexMap<String, Fragment>,
}
impl FragmentRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn fragment_named(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    pub fn fragments(&self) -> &IndexMap<String, Fragment> {
        &self.fragments
    }
}
