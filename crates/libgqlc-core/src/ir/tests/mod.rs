mod document_compiler_tests;
mod operation_identifier_tests;
mod referenced_types_tests;
mod selection_merger_tests;
mod utils;
