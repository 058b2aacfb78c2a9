use wordsmith_core::NumericRange;

/// Every `left + right`, left-major.
///
/// The iterator borrows both inputs and can be rebuilt at will.
pub fn concat<'a, L, R>(left: &'a [L], right: &'a [R]) -> impl Iterator<Item = String> + 'a
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    left.iter().flat_map(move |head| {
        right
            .iter()
            .map(move |tail| format!("{}{}", head.as_ref(), tail.as_ref()))
    })
}

/// Every `value + n` for `n` in the half-open numeric range.
pub fn suffix_numbers<'a, T>(
    values: &'a [T],
    range: NumericRange,
) -> impl Iterator<Item = String> + 'a
where
    T: AsRef<str>,
{
    values.iter().flat_map(move |value| {
        range
            .range()
            .map(move |number| format!("{}{number}", value.as_ref()))
    })
}

/// All one, two and three character suffixes over `chars`, repetition allowed.
///
/// Yields `n + n^2 + n^3` entries for `n` characters.
pub fn special_suffixes<T>(chars: &[T]) -> Vec<String>
where
    T: AsRef<str>,
{
    let n = chars.len();
    let mut suffixes = Vec::with_capacity(n + n * n + n * n * n);
    for first in chars {
        let first = first.as_ref();
        suffixes.push(first.to_string());
        for second in chars {
            let second = second.as_ref();
            suffixes.push(format!("{first}{second}"));
            for third in chars {
                suffixes.push(format!("{first}{second}{}", third.as_ref()));
            }
        }
    }
    suffixes
}

/// Every ordered pair of distinct positions, concatenated.
///
/// Equal values at different positions still combine.
pub fn pairwise_concat<T>(values: &[T]) -> Vec<String>
where
    T: AsRef<str>,
{
    let n = values.len();
    let mut pairs = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)));
    for (i, head) in values.iter().enumerate() {
        for (j, tail) in values.iter().enumerate() {
            if i != j {
                pairs.push(format!("{}{}", head.as_ref(), tail.as_ref()));
            }
        }
    }
    pairs
}
