//! Item-name similarity predicate.

use super::equivalence::EQUIVALENCE_GROUPS;
use super::normalizer::normalize;

/// Decide whether two item names refer to the same component.
///
/// Checks, in order, short-circuiting:
/// 1. Normalized-equal
/// 2. Substring containment, either direction
/// 3. Both names carry a member of the same equivalence group
///
/// Symmetric and reflexive; empty names only ever match empty names
/// (an empty string is a substring of everything, so equality handles it
/// first and containment is guarded below).
pub fn is_similar(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return true;
    }
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a.contains(&b) || b.contains(&a) {
        return true;
    }

    for group in EQUIVALENCE_GROUPS {
        let hits_a = group.iter().any(|member| a.contains(member));
        if hits_a && group.iter().any(|member| b.contains(member)) {
            return true;
        }
    }

    false
}
