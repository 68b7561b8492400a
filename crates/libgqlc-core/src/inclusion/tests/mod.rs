mod inclusion_conditions;
