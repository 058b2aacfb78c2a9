use wordsmith_core::ProfileRecord;

use crate::generators::{reverse, title_case};

/// Ordered list of name-like values that is combined with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGroup {
    members: Vec<String>,
}

impl NameGroup {
    pub fn new(members: Vec<String>) -> Self {
        Self { members }
    }

    /// Lowercase members followed by their title-cased forms, then `tail`.
    fn with_titles(bases: &[&str], tail: &[&str]) -> Self {
        let mut members: Vec<String> = bases.iter().map(|base| base.to_string()).collect();
        members.extend(bases.iter().map(|base| title_case(base)));
        members.extend(tail.iter().map(|value| value.to_string()));
        Self { members }
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Each member on its own plus every allowed ordered pair.
    ///
    /// A pair `(i, j)` is allowed when the positions differ and the title-cased
    /// forms of the two members resolve to different positions. `foo` + `Foo`
    /// is therefore skipped, and so is any pair of members whose titles match.
    pub fn self_cross(&self) -> Vec<String> {
        let title_slots: Vec<usize> = (0..self.members.len())
            .map(|index| self.title_slot(index))
            .collect();
        let mut out = Vec::new();
        for (i, first) in self.members.iter().enumerate() {
            out.push(first.clone());
            for (j, second) in self.members.iter().enumerate() {
                if i != j && title_slots[i] != title_slots[j] {
                    out.push(format!("{first}{second}"));
                }
            }
        }
        out
    }

    /// First position holding the title-cased form of the member at `index`.
    fn title_slot(&self, index: usize) -> usize {
        let titled = title_case(&self.members[index]);
        self.members
            .iter()
            .position(|member| *member == titled)
            .unwrap_or(index)
    }
}

/// Reversed spellings of the people in a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReversedNames {
    pub subject: Vec<String>,
    pub partner: Vec<String>,
    pub child: Vec<String>,
}

impl ReversedNames {
    /// Every reversed spelling, subject first.
    pub fn all(&self) -> Vec<String> {
        self.subject
            .iter()
            .chain(&self.partner)
            .chain(&self.child)
            .cloned()
            .collect()
    }
}

/// Name-derived inputs of the profile pipeline.
#[derive(Debug, Clone)]
pub struct ProfileVariants {
    pub subject: NameGroup,
    pub partner: NameGroup,
    pub child: NameGroup,
    /// Pet and company names; never combined with each other.
    pub extras: Vec<String>,
    /// Keywords followed by their title-cased forms.
    pub keywords: Vec<String>,
    pub reversed: ReversedNames,
}

impl ProfileVariants {
    pub fn from_profile(record: &ProfileRecord) -> Self {
        let surname = record.surname.as_str();
        let surname_title = title_case(surname);

        let subject = NameGroup::with_titles(
            &[record.name.as_str(), surname, record.nickname.as_str()],
            &[],
        );
        let partner = NameGroup::with_titles(
            &[
                record.partner_name.as_str(),
                record.partner_nickname.as_str(),
            ],
            &[surname, surname_title.as_str()],
        );
        let child = NameGroup::with_titles(
            &[record.child_name.as_str(), record.child_nickname.as_str()],
            &[surname, surname_title.as_str()],
        );

        let extras = vec![
            record.pet.clone(),
            title_case(&record.pet),
            record.company.clone(),
            title_case(&record.company),
        ];

        let mut keywords = record.keywords.clone();
        keywords.extend(record.keywords.iter().map(|keyword| title_case(keyword)));

        let reversed = ReversedNames {
            subject: cased_reversals(&[record.name.as_str(), record.nickname.as_str()]),
            partner: cased_reversals(&[record.partner_name.as_str()]),
            child: cased_reversals(&[record.child_name.as_str()]),
        };

        Self {
            subject,
            partner,
            child,
            extras,
            keywords,
            reversed,
        }
    }
}

/// `reverse(value)` and `reverse(Title(value))` for each value.
fn cased_reversals(values: &[&str]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| [reverse(value), reverse(&title_case(value))])
        .collect()
}
