use uuid::Uuid;

/// Separator between scope path segments
pub const SCOPE_SEPARATOR: char = '/';

/// Label of the stream returned by [`RandomStream::new`](crate::RandomStream::new)
pub const ROOT_SCOPE: &str = "root";

/// Derive the 64-bit ChaCha seed for a `(seed, scope)` pair.
///
/// The pair is hashed into a name-based (v5) UUID, the same derivation used
/// for named planetary systems, and the first half of that UUID becomes the
/// generator seed. The result depends only on the two strings.
///
/// # Examples
/// ```
/// use seeded_random::derive_seed;
///
/// assert_eq!(derive_seed("alpha", "root"), derive_seed("alpha", "root"));
/// assert_ne!(derive_seed("alpha", "root"), derive_seed("alpha", "root/stellar"));
/// ```
pub fn derive_seed(seed: &str, scope: &str) -> u64 {
    let name = format!("{seed}\u{1f}{scope}");
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
        .as_u64_pair()
        .0
}

/// Join a parent scope path and a child label.
pub fn child_scope(parent: &str, label: &str) -> String {
    format!("{parent}{SCOPE_SEPARATOR}{label}")
}
