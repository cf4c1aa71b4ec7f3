//! Garment size ordering

use std::collections::BTreeSet;

use podpublish_domain::constants::SIZE_ORDER;

/// Position of `size` in the display order; unknown sizes rank last.
pub fn size_rank(size: &str) -> usize {
    SIZE_ORDER
        .iter()
        .position(|known| known.eq_ignore_ascii_case(size))
        .unwrap_or(SIZE_ORDER.len())
}

/// Deduplicate and order sizes XS → 5XL, unknown sizes last by name.
pub fn sort_sizes<'a, I>(sizes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let unique: BTreeSet<&str> = sizes.into_iter().collect();
    let mut sorted: Vec<&str> = unique.into_iter().collect();
    sorted.sort_by_key(|size| size_rank(size));
    sorted.into_iter().map(str::to_string).collect()
}
