/// Conditional-access clause triggers.
pub mod conditional;
/// Restricted-field clause and direct-mention extraction.
pub mod restricted;
/// Role, data-field, and action extraction over the lexicons.
pub mod subjects;
/// Time-restriction extraction.
pub mod temporal;
