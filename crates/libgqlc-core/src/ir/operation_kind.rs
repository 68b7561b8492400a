/// The kind of a GraphQL
/// [operation](https://spec.graphql.org/October2021/#sec-Language.Operations).
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq,
    serde::Deserialize, serde::Serialize,
)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
