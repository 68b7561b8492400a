mod schema_index_builder;
