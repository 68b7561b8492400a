use crate::ir::DocumentCompileError;
use crate::ir::FieldCollector;
use crate::ir::FragmentRegistry;
use crate::ir::IrArena;
use crate::ir::Operation;
use crate::ir::ReferencedTypes;

/// Everything produced by compiling one executable document: the IR trees
/// for every operation and fragment that built cleanly, the side tables an
/// emitter consumes, and every error encountered along the way.
#[derive(Debug)]
pub struct CompiledDocument {
    pub(crate) arena: IrArena,
    pub(crate) errors: Vec<DocumentCompileError>,
    pub(crate) field_collector: FieldCollector,
    pub(crate) fragments: FragmentRegistry,
    pub(crate) operations: Vec<Operation>,
    pub(crate) referenced_types: ReferencedTypes,
}
impl CompiledDocument {
    /// The arena holding every [`Entity`](crate::ir::Entity) and
    /// [`SelectionSet`](crate::ir::SelectionSet) of this document's IR.
    pub fn arena(&self) -> &IrArena {
        &self.arena
    }

    /// Every failure encountered across the document set. Operations and
    /// fragments that failed to build are absent from
    /// [`CompiledDocument::operations`]/[`CompiledDocument::fragments`];
    /// the ones present are complete and internally consistent.
    pub fn errors(&self) -> &[DocumentCompileError] {
        self.errors.as_slice()
    }

    /// The per-concrete-type response-key table accumulated while walking
    /// the document set.
    pub fn field_collector(&self) -> &FieldCollector {
        &self.field_collector
    }

    /// Every successfully compiled fragment, keyed by name.
    pub fn fragments(&self) -> &FragmentRegistry {
        &self.fragments
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Convenience wrapper around
    /// [`Operation::operation_identifier`] using this document's fragment
    /// registry.
    pub fn operation_identifier<'a>(
        &'a self,
        operation: &'a Operation,
    ) -> &'a str {
        operation.operation_identifier(&self.fragments)
    }

    /// Look up a successfully compiled operation by name.
    pub fn operation_named(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|operation| {
            operation.name() == Some(name)
        })
    }

    /// Every successfully compiled operation, in document order.
    pub fn operations(&self) -> &[Operation] {
        self.operations.as_slice()
    }

    /// The closure of schema types referenced by the document set, split by
    /// kind.
    pub fn referenced_types(&self) -> &ReferencedTypes {
        &self.referenced_types
    }
}
