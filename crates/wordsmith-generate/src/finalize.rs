use wordsmith_core::LengthBounds;

use crate::model::CandidatePool;

/// Length-filter the pool and sort it by code point order.
pub fn finalize(pool: CandidatePool, bounds: LengthBounds) -> Vec<String> {
    let mut words: Vec<String> = pool
        .into_inner()
        .into_iter()
        .filter(|candidate| bounds.admits(candidate))
        .collect();
    words.sort_unstable();
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(values: &[&str]) -> CandidatePool {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn filter_is_exclusive_on_both_ends() {
        let words = finalize(
            pool(&["abcde", "abcdef", "abcdefghijk", "abcdefghijkl"]),
            LengthBounds::new(5, 12),
        );
        assert_eq!(words, ["abcdef", "abcdefghijk"]);
    }

    #[test]
    fn sorts_by_code_point() {
        let words = finalize(
            pool(&["oof1990", "Foo1990", "foo1990", "ooF1990", "_under1", "123456"]),
            LengthBounds::new(5, 12),
        );
        assert_eq!(
            words,
            ["123456", "Foo1990", "_under1", "foo1990", "ooF1990", "oof1990"]
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let words = finalize(pool(&["ççççç", "çççççç"]), LengthBounds::new(5, 12));
        assert_eq!(words, ["çççççç"]);
    }

    #[test]
    fn is_idempotent() {
        let bounds = LengthBounds::new(5, 12);
        let first = finalize(pool(&["zzzzzz", "aaaaaa", "bb", "aaaaaa"]), bounds);
        let second = finalize(first.iter().cloned().collect(), bounds);
        assert_eq!(first, second);
    }
}
