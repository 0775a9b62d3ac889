//! Wildcard matching for string patterns and unit suffixes.

/// Check if a value matches a wildcard pattern.
///
/// Supports two wildcards, everything else matching literally and
/// case-sensitively:
/// - `*` matches any sequence of characters, including `/` and the empty string
/// - `?` matches exactly one character
///
/// Runs in `O(pattern * value)` time without allocating a compiled matcher.
pub fn matches_pattern(pattern: &str, value: &str) -> bool {
    if !pattern.contains(['*', '?']) {
        return pattern == value;
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let value: Vec<char> = value.chars().collect();

    let (mut p, mut v) = (0, 0);
    // Position of the last `*` and the value index it is currently absorbing up to.
    let mut star: Option<(usize, usize)> = None;

    while v < value.len() {
        match pattern.get(p) {
            Some('*') => {
                star = Some((p, v));
                p += 1;
            }
            Some('?') => {
                p += 1;
                v += 1;
            }
            Some(&c) if c == value[v] => {
                p += 1;
                v += 1;
            }
            _ => match star {
                Some((star_p, star_v)) => {
                    star = Some((star_p, star_v + 1));
                    p = star_p + 1;
                    v = star_v + 1;
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
