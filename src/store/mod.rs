/// Clipboard-style JSON export projection for saved policies.
pub mod export;
/// File-backed key-value store for the saved-policy list.
pub mod kv;
/// Saved policy records.
pub mod saved;
