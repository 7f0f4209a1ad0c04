use kb_core::format::OutputFormat;
use kb_core::resource::Scope;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse resource scope from string
pub fn parse_scope(s: &str) -> std::result::Result<Scope, String> {
    s.parse::<Scope>().map_err(|e| e.to_string())
}
