use core::fmt;
use shared_context::Span;
use shared_context::source_map::SourceMap;

#[derive(Debug)]
pub enum ErrorType {
    /// The left-hand side of an assignment is not a variable.
    InvalidLeftValue(Span),
}

#[derive(Debug)]
pub struct SemanticErr {
    formated_error: String,
}

impl SemanticErr {
    pub fn new(err: ErrorType, source_map: &SourceMap) -> Self {
        let formated_error = match err {
            ErrorType::InvalidLeftValue(span) => Self::format_invalid_left_value_err(source_map, span),
        };

        Self { formated_error }
    }

    fn format_invalid_left_value_err(source_map: &SourceMap, span: Span) -> String {
        source_map.format_message("invalid left-hand side of assignment".to_string(), span)
    }
}

impl fmt::Display for SemanticErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formated_error)
    }
}

impl std::error::Error for SemanticErr {}
