use crate::{can_form_palindrome, code_sum, group_anagrams};
use proptest::{collection::vec, prelude::*, test_runner::TestRunner};
use std::collections::HashMap;

#[test]
fn palindromes() {
    assert!(can_form_palindrome("acecarr"));
    assert!(can_form_palindrome("racecar"));
    assert!(can_form_palindrome(""));
    assert!(can_form_palindrome("a"));
    assert!(can_form_palindrome("aab"));
    assert!(can_form_palindrome("abcabcd"));
    assert!(can_form_palindrome("ééa"));
    assert!(!can_form_palindrome("north"));
    assert!(!can_form_palindrome("ab"));
    assert!(!can_form_palindrome("aabbcd"));
    // one astral character is a surrogate pair of two distinct code units
    assert!(!can_form_palindrome("😀"));
    assert!(can_form_palindrome("😀😀"));
    assert!(can_form_palindrome("😀a😀"));
}

#[test]
fn palindrome_matches_code_unit_counts() {
    let mut runner = TestRunner::default();
    runner
        .run(&"[a-e]{0,12}", |word| {
            let mut counts = HashMap::new();
            for c in word.encode_utf16() {
                *counts.entry(c).or_insert(0) += 1;
            }
            let odd = counts.values().filter(|&&n| n % 2 == 1).count();
            prop_assert_eq!(can_form_palindrome(&word), odd <= 1);
            Ok(())
        })
        .unwrap();
}

#[test]
fn mirrored_words_are_palindromes() {
    let mut runner = TestRunner::default();
    runner
        .run(
            &(
                "\\PC{0,8}",
                // a BMP middle is a single code unit
                proptest::option::of(proptest::char::range('\0', '\u{D7FF}')),
            ),
            |(half, middle)| {
                let word: String = half
                    .chars()
                    .chain(middle)
                    .chain(half.chars().rev())
                    .collect();
                prop_assert!(can_form_palindrome(&word));
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn code_sums() {
    assert_eq!(code_sum(""), 0);
    assert_eq!(code_sum("east"), 429);
    assert_eq!(code_sum("acre"), 411);
}

#[test]
fn groups_by_first_appearance_most_recent_first() {
    let words = ["east", "cars", "acre", "arcs", "teas", "eats", "race"];
    assert_eq!(
        group_anagrams(&words),
        vec![
            vec!["eats", "teas", "east"],
            vec!["arcs", "cars"],
            vec!["race", "acre"],
        ]
    );
}

#[test]
fn equal_sums_share_a_group() {
    assert_eq!(group_anagrams(&["ad", "bc"]), vec![vec!["bc", "ad"]]);
    assert!(group_anagrams(&[]).is_empty());
}

#[test]
fn grouping_partitions_words() {
    let mut runner = TestRunner::default();
    runner
        .run(&vec("[a-d]{0,3}", 0..40), |words| {
            let words = words.iter().map(String::as_str).collect::<Vec<_>>();
            let groups = group_anagrams(&words);
            prop_assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), words.len());
            let mut sums = vec![];
            for group in &groups {
                prop_assert!(!group.is_empty());
                let sum = code_sum(group[0]);
                prop_assert!(group.iter().all(|w| code_sum(w) == sum));
                sums.push(sum);
            }
            sums.sort_unstable();
            sums.dedup();
            prop_assert_eq!(sums.len(), groups.len());
            Ok(())
        })
        .unwrap();
}
