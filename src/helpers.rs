use crate::compat::Vec;

/// Drop a single leading `?` from a query string
pub fn strip_query_prefix(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

/// Split a raw query string into undecoded `(name, value)` pairs.
/// Empty pairs are skipped; a pair without `=` has an empty value.
/// Optimization: Uses SIMD-accelerated memchr for the `&` and `=` scans
pub fn split_pairs(query: &str) -> Vec<(&str, &str)> {
    let query = strip_query_prefix(query);
    let bytes = query.as_bytes();

    let mut pairs = Vec::with_capacity(memchr::memchr_iter(b'&', bytes).count() + 1);
    let mut start = 0;
    for end in memchr::memchr_iter(b'&', bytes).chain(core::iter::once(bytes.len())) {
        let pair = &query[start..end];
        let pair_bytes = &bytes[start..end];
        start = end + 1;
        if pair.is_empty() {
            continue;
        }
        let split = memchr::memchr(b'=', pair_bytes)
            .map_or((pair, ""), |pos| (&pair[..pos], &pair[pos + 1..]));
        pairs.push(split);
    }
    pairs
}
