use serde::{Deserialize, Serialize};

/// A forbidden-function call that was not covered by an exemption
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForbiddenCall {
    pub file_path: String,
    /// 1-based
    pub line_number: usize,
    /// The offending line without its line terminator
    pub line: String,
    /// Every forbidden token found on the line, e.g. `strcpy(`
    pub functions: Vec<String>,
}

impl ForbiddenCall {
    pub fn new(file_path: String, line_number: usize, line: String, functions: Vec<String>) -> Self {
        Self {
            file_path,
            line_number,
            line,
            functions,
        }
    }

    /// Function names rendered the way the diagnostic line shows them,
    /// e.g. `['strcpy(', 'strcat(']`
    pub fn functions_display(&self) -> String {
        let quoted: Vec<String> = self.functions.iter().map(|f| format!("'{}'", f)).collect();
        format!("[{}]", quoted.join(", "))
    }
}
