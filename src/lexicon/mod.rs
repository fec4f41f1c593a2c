/// Precompiled word-boundary matchers and the process-wide lexicon instances.
pub mod matcher;
/// Static surface-form tables for roles, data fields, actions, and direct identifiers.
pub mod tables;
