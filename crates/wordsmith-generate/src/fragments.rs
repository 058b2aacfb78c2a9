/// Number of scalar fragments cut from a date.
pub const BASE_FRAGMENTS: usize = 7;

/// Date fragments and their ordered combinations.
///
/// The base list is `[yy, yyy, yyyy, xd, xm, dd, mm]` for a `DDMMYYYY` date.
/// Combinations hold every fragment alone, every ordered pair of distinct
/// positions and every ordered triple of pairwise distinct positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSet {
    base: [String; BASE_FRAGMENTS],
    combinations: Vec<String>,
}

impl FragmentSet {
    /// Cut `date` into fragments.
    ///
    /// An empty date yields empty fragments; the length filter drops them later.
    pub fn derive(date: &str) -> Self {
        let len = date.len();
        let slice = |start: usize, end: usize| date.get(start..end).unwrap_or("").to_string();
        let base = [
            slice(len.saturating_sub(2), len),
            slice(len.saturating_sub(3), len),
            slice(len.saturating_sub(4), len),
            slice(1, 2),
            slice(3, 4),
            slice(0, 2.min(len)),
            slice(2.min(len), 4.min(len)),
        ];
        let combinations = combine(&base);
        Self { base, combinations }
    }

    pub fn base(&self) -> &[String] {
        &self.base
    }

    pub fn year_two(&self) -> &str {
        &self.base[0]
    }

    pub fn year_four(&self) -> &str {
        &self.base[2]
    }

    pub fn day(&self) -> &str {
        &self.base[5]
    }

    pub fn month(&self) -> &str {
        &self.base[6]
    }

    pub fn combinations(&self) -> &[String] {
        &self.combinations
    }
}

fn combine(base: &[String]) -> Vec<String> {
    let n = base.len();
    let mut out = Vec::with_capacity(n + n * (n - 1) + n * (n - 1) * (n - 2));
    for (i, first) in base.iter().enumerate() {
        out.push(first.clone());
        for (j, second) in base.iter().enumerate() {
            if i == j {
                continue;
            }
            out.push(format!("{first}{second}"));
            for (k, third) in base.iter().enumerate() {
                if k != i && k != j {
                    out.push(format!("{first}{second}{third}"));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuts_reference_date() {
        let set = FragmentSet::derive("12101990");
        assert_eq!(set.base(), ["90", "990", "1990", "2", "0", "12", "10"]);
        assert_eq!(set.year_two(), "90");
        assert_eq!(set.year_four(), "1990");
        assert_eq!(set.day(), "12");
        assert_eq!(set.month(), "10");
    }

    #[test]
    fn combination_count_is_fixed() {
        let set = FragmentSet::derive("12101990");
        assert_eq!(set.combinations().len(), 7 + 42 + 210);
        assert_eq!(&set.combinations()[..3], ["90", "90990", "909901990"]);
    }

    #[test]
    fn pairs_appear_in_both_orders() {
        let set = FragmentSet::derive("12101990");
        let combos = set.combinations();
        assert!(combos.contains(&"1210".to_string()));
        assert!(combos.contains(&"1012".to_string()));
        assert!(combos.contains(&"121990".to_string()));
        assert!(combos.contains(&"12101990".to_string()));
        assert!(!combos.contains(&"1212".to_string()));
    }

    #[test]
    fn equal_fragments_at_different_positions_combine() {
        // xd and xm are both "1" here.
        let set = FragmentSet::derive("01012000");
        assert_eq!(set.base()[3], "1");
        assert_eq!(set.base()[4], "1");
        assert!(set.combinations().contains(&"11".to_string()));
    }

    #[test]
    fn empty_date_yields_empty_fragments() {
        let set = FragmentSet::derive("");
        assert!(set.base().iter().all(String::is_empty));
        assert_eq!(set.combinations().len(), 259);
        assert!(set.combinations().iter().all(String::is_empty));
    }
}
