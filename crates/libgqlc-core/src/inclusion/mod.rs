mod inclusion_conditions;

pub use inclusion_conditions::InclusionCondition;
pub use inclusion_conditions::InclusionConditions;
pub use inclusion_conditions::InclusionConjunction;
pub use inclusion_conditions::ReducedConditions;

#[cfg(test)]
mod tests;
