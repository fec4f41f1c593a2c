/// Policy assembly: the `generate_policy` pipeline over the extractors.
pub mod assembler;
/// Policy record types: actions, transformations, restrictions, and the generated policy.
pub mod policy;
/// Heuristic risk scoring of generated policies.
pub mod risk;
/// Data-transformation inference from the detected action and raw text cues.
pub mod transformation;
