/// Wraps an identifier in double quotes, doubling any embedded quote.
///
/// Every string is quotable, so this never fails. It is meant for table and
/// column names only; search values are always bound as parameters.
pub fn quote_identifier(ident: &str) -> String {
    let mut quoted = String::with_capacity(ident.len() + 2);
    quoted.push('"');
    for c in ident.chars() {
        if c == '"' {
            quoted.push_str("\"\"");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('"');
    quoted
}

/// Reverses [`quote_identifier`]. Returns `None` when `quoted` is not a
/// well-formed quoted identifier (missing outer quotes or a lone inner quote).
pub fn unquote_identifier(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut ident = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '"' && chars.next() != Some('"') {
            return None;
        }
        ident.push(c);
    }
    Some(ident)
}
