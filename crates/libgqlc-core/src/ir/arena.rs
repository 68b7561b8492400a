use crate::ir::Entity;
use crate::ir::SelectionSet;

/// Stable handle to an [`Entity`] stored in an [`IrArena`].
///
/// Identity comparisons between IR nodes are made with these indices rather
/// than by reference identity, so built IR can be freely moved, shared, and
/// serialized.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd,
    serde::Deserialize, serde::Serialize,
)]
pub struct EntityId(pub(crate) usize);

/// Stable handle to a [`SelectionSet`] stored in an [`IrArena`].
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd,
    serde::Deserialize, serde::Serialize,
)]
pub struct SelectionSetId(pub(crate) usize);

/// Owns every [`Entity`] and [`SelectionSet`] produced while compiling a
/// document.
///
/// All IR nodes reference each other through [`EntityId`]/[`SelectionSetId`]
/// indices into a single arena, including across operation/fragment
/// boundaries (a merged selection originating in a fragment points at the
/// fragment-owned set).
#[derive(Debug, Default)]
pub struct IrArena {
    entities: Vec<Entity>,
    selection_sets: Vec<SelectionSet>,
}
impl IrArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn alloc_entity(&mut self, entity: Entity) -> EntityId {
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    pub(crate) fn alloc_selection_set(
        &mut self,
        selection_set: SelectionSet,
    ) -> SelectionSetId {
        self.selection_sets.push(selection_set);
        SelectionSetId(self.selection_sets.len() - 1)
    }

    /// Snapshot the current allocation high-water marks so that a failed
    /// operation/fragment build can be rolled back without leaving partial
    /// IR behind.
    pub(crate) fn checkpoint(&self) -> ArenaCheckpoint {
        ArenaCheckpoint {
            entities: self.entities.len(),
            selection_sets: self.selection_sets.len(),
        }
    }

    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }

    pub fn num_entities(&self) -> usize {
        self.entities.len()
    }

    pub fn num_selection_sets(&self) -> usize {
        self.selection_sets.len()
    }

    pub(crate) fn rollback_to(&mut self, checkpoint: ArenaCheckpoint) {
        self.entities.truncate(checkpoint.entities);
        self.selection_sets.truncate(checkpoint.selection_sets);
    }

    pub fn selection_set(&self, id: SelectionSetId) -> &SelectionSet {
        &self.selection_sets[id.0]
    }

    pub(crate) fn selection_set_mut(
        &mut self,
        id: SelectionSetId,
    ) -> &mut SelectionSet {
        &mut self.selection_sets[id.0]
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ArenaCheckpoint {
    entities: usize,
    selection_sets: usize,
}
