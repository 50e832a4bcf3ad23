#![deny(clippy::disallowed_methods)]

use probe_table::ProbingHashTable;

#[cfg(test)]
mod tests;

/// Whether some permutation of `word` reads the same backwards, i.e. at most
/// one UTF-16 code unit occurs an odd number of times.
///
/// Works on code units like [`code_sum`] and [`probe_table::hash`], so a lone
/// astral character such as "😀" (two distinct surrogates) is not a palindrome.
pub fn can_form_palindrome(word: &str) -> bool {
    // holds exactly the code units seen an odd number of times so far
    let mut odd = ProbingHashTable::new();
    for unit in word.encode_utf16() {
        let key = unit.to_string();
        if odd.remove(&key).is_err() {
            odd.set(key, ());
        }
    }
    odd.len() <= 1
}

// sum of UTF-16 code units
pub fn code_sum(word: &str) -> u64 {
    word.encode_utf16().map(u64::from).sum()
}

/// Groups `words` by [`code_sum`]. Groups come out in order of first
/// appearance, and each group lists its words most recent first.
///
/// Distinct letter multisets can share a sum ("ad" and "bc"), and such words
/// land in the same group.
pub fn group_anagrams<'a>(words: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut index: ProbingHashTable<usize> = ProbingHashTable::new();
    let mut groups: Vec<Vec<&'a str>> = vec![];
    for &word in words {
        let key = code_sum(word).to_string();
        match index.get(&key).ok().copied() {
            Some(i) => groups[i].insert(0, word),
            None => {
                index.set(key, groups.len());
                groups.push(vec![word]);
            }
        }
    }
    groups
}
