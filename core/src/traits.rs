/// Backend-specific string literal escaping.
///
/// The binder never implements this primitive itself; the surrounding driver
/// layer supplies it. Implementations must escape every character significant
/// to the target SQL dialect and wrap the result in single quotes.
pub trait LiteralEscaper {
    /// Escape `raw` and append it to `out` wrapped in single quotes.
    fn write_quoted(&self, raw: &str, out: &mut String);

    /// Convenience wrapper returning the quoted literal as a fresh string.
    fn quoted(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + 2);
        self.write_quoted(raw, &mut out);
        out
    }
}

impl<T: LiteralEscaper + ?Sized> LiteralEscaper for &T {
    fn write_quoted(&self, raw: &str, out: &mut String) {
        (**self).write_quoted(raw, out);
    }
}
