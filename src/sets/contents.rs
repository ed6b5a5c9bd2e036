//! Property values that may contain strings.
//!
//! Most Unicode properties are plain sets of code points, but the emoji sequence properties
//! (`RGI_Emoji_ZWJ_Sequence` and friends) also contain multi-code-point strings. A
//! [`ClassSetContents`] models both shapes as a tagged union, since the two kinds compose
//! differently: code point properties are diffed with add/sub sets, properties of strings only
//! ever grow through [`ClassSetContents::union_unicode_property_of_strings`].

use std::{collections::BTreeSet, sync::Arc};

use crate::sets::CodePointSet;

/// The value of a property lookup that may contain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassSetContents {
    /// A plain character class, i.e. a set of single code points.
    CharacterClass(CodePointSet),
    /// A property of strings, holding single code points plus multi-code-point members.
    PropertyOfStrings {
        /// Members that consist of exactly one code point
        code_points: CodePointSet,
        /// Members that consist of zero or several code points
        strings: Arc<BTreeSet<String>>,
    },
}

impl ClassSetContents {
    /// Wraps a code point set as a character class.
    #[must_use]
    pub fn character_class(set: CodePointSet) -> Self {
        ClassSetContents::CharacterClass(set)
    }

    /// Creates a property of strings.
    ///
    /// String members consisting of a single code point are folded into `code_points`, so that
    /// equal values always have equal representations.
    #[must_use]
    pub fn property_of_strings<I, S>(code_points: CodePointSet, strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut singles = Vec::new();
        let mut sequences = BTreeSet::new();

        for member in strings {
            let member = member.into();
            let mut chars = member.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => singles.push(c),
                _ => {
                    sequences.insert(member);
                }
            }
        }

        let code_points = if singles.is_empty() {
            code_points
        } else {
            code_points.union(&CodePointSet::from_chars(singles))
        };

        ClassSetContents::PropertyOfStrings {
            code_points,
            strings: Arc::new(sequences),
        }
    }

    /// The single code point members.
    #[must_use]
    pub fn code_points(&self) -> &CodePointSet {
        match self {
            ClassSetContents::CharacterClass(set) => set,
            ClassSetContents::PropertyOfStrings { code_points, .. } => code_points,
        }
    }

    /// The multi-code-point members. Always empty for a character class.
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        let strings = match self {
            ClassSetContents::CharacterClass(_) => None,
            ClassSetContents::PropertyOfStrings { strings, .. } => Some(strings.iter()),
        };

        strings.into_iter().flatten().map(String::as_str)
    }

    /// Returns `true` if this value is a property of strings.
    #[must_use]
    pub fn is_property_of_strings(&self) -> bool {
        matches!(self, ClassSetContents::PropertyOfStrings { .. })
    }

    /// Returns `true` if this value actually has multi-code-point members.
    #[must_use]
    pub fn may_contain_strings(&self) -> bool {
        match self {
            ClassSetContents::CharacterClass(_) => false,
            ClassSetContents::PropertyOfStrings { strings, .. } => !strings.is_empty(),
        }
    }

    /// Returns `true` if the value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code_points().is_empty() && !self.may_contain_strings()
    }

    /// Returns `true` if `member` belongs to this value, either as a single code point or as a
    /// string member.
    #[must_use]
    pub fn contains_str(&self, member: &str) -> bool {
        let mut chars = member.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.code_points().contains_char(c),
            _ => match self {
                ClassSetContents::CharacterClass(_) => false,
                ClassSetContents::PropertyOfStrings { strings, .. } => strings.contains(member),
            },
        }
    }

    /// Returns `true` if every member of `self` is a member of `other`.
    #[must_use]
    pub fn is_subset(&self, other: &ClassSetContents) -> bool {
        self.code_points().is_subset(other.code_points())
            && self.strings().all(|member| other.contains_str(member))
    }

    /// Unions two properties of strings.
    ///
    /// The result is always a property of strings. A character class operand contributes its
    /// code points only.
    #[must_use]
    pub fn union_unicode_property_of_strings(&self, other: &ClassSetContents) -> ClassSetContents {
        let code_points = self.code_points().union(other.code_points());

        let strings = match (self, other) {
            (
                ClassSetContents::PropertyOfStrings { strings: left, .. },
                ClassSetContents::PropertyOfStrings { strings: right, .. },
            ) => {
                if right.is_subset(left) {
                    Arc::clone(left)
                } else if left.is_subset(right) {
                    Arc::clone(right)
                } else {
                    Arc::new(left.union(right).cloned().collect())
                }
            }
            (ClassSetContents::PropertyOfStrings { strings, .. }, _)
            | (_, ClassSetContents::PropertyOfStrings { strings, .. }) => Arc::clone(strings),
            _ => Arc::new(BTreeSet::new()),
        };

        ClassSetContents::PropertyOfStrings {
            code_points,
            strings,
        }
    }
}

impl From<CodePointSet> for ClassSetContents {
    fn from(set: CodePointSet) -> Self {
        ClassSetContents::CharacterClass(set)
    }
}
