use crate::engine::policy::{DataTransformation, PolicyAction};

/// Infer the data transformation from the detected action and raw text cues.
///
/// Cues are case-insensitive substring checks, deliberately looser than the
/// word-boundary matching used by the lexicons. The priority order is fixed;
/// note that the "tokeniz" cue also fires on "detokeniz" text, so the
/// detokenization branch is only reached when the action alone implies it.
pub fn infer_data_transformation(action: PolicyAction, text: &str) -> DataTransformation {
    let lower = text.to_lowercase();
    if action == PolicyAction::Tokenize || lower.contains("tokeniz") {
        return DataTransformation::Tokenization;
    }
    if action == PolicyAction::Detokenize || lower.contains("detokeniz") {
        return DataTransformation::Detokenization;
    }
    if lower.contains("encrypt") {
        return DataTransformation::Encryption;
    }
    if lower.contains("mask") {
        return DataTransformation::Masked;
    }
    if action == PolicyAction::Analyze || lower.contains("analyze") {
        return DataTransformation::Aggregated;
    }
    DataTransformation::None
}
