mod arena;
mod compiled_document;
mod document_compiler;
mod entity;
mod field_collector;
mod fragment;
mod operation;
mod operation_kind;
mod referenced_types;
mod scope;
mod selection;
mod selection_merger;
mod selection_set;
mod selection_set_builder;
mod variable;

pub use arena::EntityId;
pub use arena::IrArena;
pub use arena::SelectionSetId;
pub use compiled_document::CompiledDocument;
pub use document_compiler::DocumentCompileError;
pub use document_compiler::DocumentCompiler;
pub use document_compiler::FragmentBuildError;
pub use document_compiler::OperationBuildError;
pub use entity::Entity;
pub use field_collector::FieldCollector;
pub use fragment::Fragment;
pub use fragment::FragmentRegistry;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use referenced_types::ReferencedTypes;
pub use scope::ScopeDescriptor;
pub use selection::FieldSelection;
pub use selection::FragmentSpreadSelection;
pub use selection::InlineFragmentSelection;
pub use selection::Selection;
pub use selection_set::MergedSelection;
pub use selection_set::MergedSource;
pub use selection_set::SelectionSet;
pub use selection_set_builder::SelectionSetBuildError;
pub use variable::NamedVariableRef;
pub use variable::Variable;

#[cfg(test)]
mod tests;
