/// Errors surfaced by move parsing and application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnightsError {
    #[error("invalid move label {0:?}")]
    InvalidLabel(String),

    #[error("illegal move {label} (legal: {legal:?})")]
    IllegalMove { label: String, legal: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_label_display() {
        let err = KnightsError::InvalidLabel("Z0".to_string());
        assert_eq!(err.to_string(), "invalid move label \"Z0\"");
    }

    #[test]
    fn test_illegal_move_display() {
        let err = KnightsError::IllegalMove {
            label: "A2".to_string(),
            legal: vec!["B3".to_string(), "C2".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "illegal move A2 (legal: [\"B3\", \"C2\"])"
        );
    }
}
