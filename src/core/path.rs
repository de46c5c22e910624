//! Output name derivation for both dump modes.

/// Returns the part of `path` after the last `/` or `\`, or `path` itself
/// when it contains neither.
pub fn bare_filename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Output file for console mode: the input path itself plus `suffix`.
pub fn console_output_path(input: &str, suffix: &str) -> String {
    format!("{}{}", input, suffix)
}

/// Output file for redirect mode. `target_dir` is used verbatim, so callers
/// pass it with its trailing separator.
pub fn redirect_output_path(target_dir: &str, input: &str, suffix: &str) -> String {
    format!("{}{}{}", target_dir, bare_filename(input), suffix)
}
