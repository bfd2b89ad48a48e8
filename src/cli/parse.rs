use graphwalk_core::format::OutputFormat;

/// Parse the --format flag
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
