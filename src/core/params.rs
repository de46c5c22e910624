/// Suffix appended to every derived output file name.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_output.txt";

/// Per-run knobs consumed by the dump handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpParams {
    /// Appended to the input name to form the output file name
    pub suffix: String,
}

impl Default for DumpParams {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}
