mod schema_index;
pub(crate) mod schema_index_builder;
mod type_validation_error;

pub use schema_index::SchemaIndex;
pub use schema_index_builder::SchemaBuildError;
pub use schema_index_builder::SchemaIndexBuilder;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
