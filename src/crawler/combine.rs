//! Keyword combination generation
//!
//! Query strings are built from every non-empty proper subset of the base
//! keyword list, rendered in a fixed order so identical input always yields
//! the identical query sequence.

/// Generates all search query strings for the given base keywords.
///
/// For each subset size `r` from 1 to `n - 1`, every index-increasing
/// combination of `r` keywords is joined with `join_char`, size classes
/// emitted in ascending order. The full keyword set is never produced as a
/// single query. Fewer than two keywords yield an empty sequence.
///
/// For `n` keywords this produces exactly `2^n - 2` queries.
pub fn generate_combinations(keywords: &[String], join_char: &str) -> Vec<String> {
    let n = keywords.len();
    let mut queries = Vec::new();

    if n < 2 {
        return queries;
    }

    for r in 1..n {
        let mut indices: Vec<usize> = (0..r).collect();

        'size_class: loop {
            let combo: Vec<&str> = indices.iter().map(|&i| keywords[i].as_str()).collect();
            queries.push(combo.join(join_char));

            // Advance to the next index-increasing combination: bump the
            // rightmost index that has room, reset everything after it.
            let mut i = r;
            while i > 0 {
                i -= 1;
                if indices[i] != i + n - r {
                    indices[i] += 1;
                    for j in i + 1..r {
                        indices[j] = indices[j - 1] + 1;
                    }
                    continue 'size_class;
                }
            }

            break;
        }
    }

    queries
}
