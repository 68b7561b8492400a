use super::utils::compile_document;
use super::utils::single_operation;
use crate::schema::SchemaIndex;
use crate::schema::SchemaIndexBuilder;

fn store_schema() -> SchemaIndex {
    SchemaIndexBuilder::from_str(
        None,
        r#"
        type Query {
            products(filter: ProductFilter): [Product!]!
        }

        type Product {
            id: ID!
            name: String!
            addedAt: Date!
            color: Color
        }

        scalar Date

        enum Color {
            BLUE
            GREEN
            RED
        }

        input ProductFilter {
            colors: [Color!]
            addedAfter: Date
        }
        "#,
    )
    .unwrap()
    .build()
    .unwrap()
}

#[test]
fn referenced_types_are_split_by_kind() {
    let schema = store_schema();
    let document = compile_document(
        &schema,
        r#"
        query Products($filter: ProductFilter) {
            products(filter: $filter) {
                id
                name
                addedAt
                color
            }
        }
        "#,
    );
    single_operation(&document);

    let referenced = document.referenced_types();
    assert!(referenced.objects().contains("Query"));
    assert!(referenced.objects().contains("Product"));
    assert!(referenced.custom_scalars().contains("Date"));
    assert!(referenced.enums().contains("Color"));
    assert!(referenced.input_objects().contains("ProductFilter"));
    assert!(referenced.builtin_scalars().contains("ID"));
    assert!(referenced.builtin_scalars().contains("String"));
}

#[test]
fn input_object_closure_pulls_in_field_types() {
    let schema = store_schema();
    let document = compile_document(
        &schema,
        r#"
        query Products($filter: ProductFilter) {
            products(filter: $filter) {
                id
            }
        }
        "#,
    );
    single_operation(&document);

    // Color and Date are referenced only through ProductFilter's fields.
    let referenced = document.referenced_types();
    assert!(referenced.enums().contains("Color"));
    assert!(referenced.custom_scalars().contains("Date"));
}

#[test]
fn unreferenced_types_are_absent() {
    let schema = store_schema();
    let document = compile_document(&schema, "{ products { id } }");
    single_operation(&document);

    let referenced = document.referenced_types();
    assert!(!referenced.enums().contains("Color"));
    assert!(!referenced.custom_scalars().contains("Date"));
    assert!(!referenced.input_objects().contains("ProductFilter"));
    assert!(!referenced.builtin_scalars().contains("String"));
}

#[test]
fn interfaces_and_unions_are_tracked() {
    let schema = SchemaIndexBuilder::from_str(
        None,
        r#"
        type Query {
            node: Node
            search: SearchResult
        }

        interface Node { id: ID! }
        type User implements Node { id: ID! name: String! }
        type Post implements Node { id: ID! title: String! }
        union SearchResult = User | Post
        "#,
    ).unwrap().build().unwrap();

    let document = compile_document(
        &schema,
        r#"
        {
            node { id }
            search {
                ... on User { name }
            }
        }
        "#,
    );
    single_operation(&document);

    let referenced = document.referenced_types();
    assert!(referenced.interfaces().contains("Node"));
    assert!(referenced.unions().contains("SearchResult"));
    assert!(referenced.objects().contains("User"));
    assert!(!referenced.objects().contains("Post"));
}
