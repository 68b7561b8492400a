use crate::ir::EntityId;
use crate::ir::ScopeDescriptor;
use crate::ir::Selection;
use crate::ir::SelectionSetId;

/// The canonical, deduplicated selections at one node of the IR tree.
///
/// `direct` holds the selections authored at this exact node (after field,
/// type-case, and fragment-spread deduplication); `merged` holds selections
/// pulled in from other type-compatible scopes, each with provenance.
/// Within `direct ∪ merged`, every field's response key, every inline
/// fragment's type condition, and every fragment spread's fragment name is
/// unique.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub(crate) direct: Vec<Selection>,
    pub(crate) entity: EntityId,
    pub(crate) merged: Vec<MergedSelection>,
    pub(crate) parent_type: String,
    pub(crate) scope_path: Vec<ScopeDescriptor>,
}
impl SelectionSet {
    /// The selections authored at this exact node.
    pub fn direct(&self) -> &[Selection] {
        self.direct.as_slice()
    }

    /// Every selection in this set's effective shape: authored ones first,
    /// then those merged in from other scopes.
    pub fn effective_selections(
        &self,
    ) -> impl Iterator<Item = &Selection> + '_ {
        self.direct.iter().chain(
            self.merged.iter().map(|merged| &merged.selection),
        )
    }

    /// The entity this set selects against. Sibling type cases share one
    /// entity; nested fields produce new ones.
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Selections contributed by other eligible scopes, with provenance.
    pub fn merged(&self) -> &[MergedSelection] {
        self.merged.as_slice()
    }

    /// The type the selections in this set apply to (the narrowed type for
    /// a type case's set).
    pub fn parent_type(&self) -> &str {
        self.parent_type.as_str()
    }

    /// One [`ScopeDescriptor`] per entity level from the operation/fragment
    /// root down to this set.
    pub fn scope_path(&self) -> &[ScopeDescriptor] {
        self.scope_path.as_slice()
    }
}

/// A selection pulled into a [`SelectionSet`]'s effective shape from another
/// scope, tagged with every origin that contributed it.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedSelection {
    pub(crate) selection: Selection,
    pub(crate) sources: Vec<MergedSource>,
}
impl MergedSelection {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The originating selection sets or fragments, deduplicated.
    pub fn sources(&self) -> &[MergedSource] {
        self.sources.as_slice()
    }
}

/// Identifies where a merged selection came from.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum MergedSource {
    /// The root selection set of the named fragment (resolve it through the
    /// [`FragmentRegistry`](crate::ir::FragmentRegistry)).
    Fragment(String),

    /// Another selection set of the same operation or fragment.
    SelectionSet(SelectionSetId),
}
