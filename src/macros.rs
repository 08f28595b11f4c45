#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! matcher {
    (
        name: $name:expr,
        pattern: $pattern:expr
        $(, buckets: $buckets:expr)?
        $(, confidence: $confidence:expr)?
        , prod: |$caps:ident, $ctx:ident| -> $ret_ty:ty $body:block
        $(,)?
    ) => {{
        $crate::Matcher {
            name: $name,
            regex: $pattern,
            buckets: $crate::engine::SignalMask::empty() $(| $buckets)?,
            confidence: { 0 $(+ $confidence)? },
            production: |$caps: &regex::Captures<'_>, $ctx: &$crate::engine::ScanContext<'_>| -> $ret_ty { $body },
        }
    }};
}
