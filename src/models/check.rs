use serde::{Deserialize, Serialize};

/// The two hygiene checks the scanner knows how to run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    #[serde(rename = "headers")]
    Headers,
    #[serde(rename = "functions")]
    Functions,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Headers => "headers",
            CheckKind::Functions => "functions",
        }
    }

    /// Map the optional second CLI argument to a check.
    ///
    /// Only the literal `functions` selects the forbidden-function check;
    /// anything else, including no argument at all, runs the header check.
    pub fn from_mode_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("functions") => CheckKind::Functions,
            _ => CheckKind::Headers,
        }
    }

    /// Line printed before the scan starts
    pub fn banner(&self) -> &'static str {
        match self {
            CheckKind::Headers => "Check for missing headers",
            CheckKind::Functions => "Check for forbidden functions",
        }
    }

    /// Line printed when no file failed the check
    pub fn success_message(&self) -> &'static str {
        match self {
            CheckKind::Headers => "Success: All files have headers",
            CheckKind::Functions => "Success: All files checked for forbidden functions",
        }
    }

    /// Heading printed above the list of failing paths
    pub fn failure_heading(&self) -> &'static str {
        match self {
            CheckKind::Headers => "## No header files detected:",
            CheckKind::Functions => "## Forbidden functions detected:",
        }
    }
}
