//! Immutable sets of Unicode code points.
//!
//! [`CodePointSet`] wraps an ICU4X [`CodePointInversionList`]: a sorted list of range
//! boundaries that is canonical by construction, so two sets with the same members always
//! compare equal. All set algebra goes through [`CodePointInversionListBuilder`].
//!
//! The inversion list lives behind an [`Arc`], so handing a parent layer's set to a caller (or
//! composing it with an empty diff) never copies the table data.
//!
//! # Examples
//!
//! ```rust
//! use unidelta::CodePointSet;
//!
//! let abc = CodePointSet::from_chars(['A', 'B', 'C']);
//! let d = CodePointSet::from_chars(['D']);
//! let b = CodePointSet::from_chars(['B']);
//!
//! let result = abc.union(&d).subtract(&b);
//! assert_eq!(result, CodePointSet::from_chars(['A', 'C', 'D']));
//! assert_eq!(result.range_count(), 2);
//! ```

use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::RangeInclusive,
    sync::Arc,
};

use icu_collections::codepointinvlist::{CodePointInversionList, CodePointInversionListBuilder};

use crate::{Error, Result};

/// The largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// An immutable, ordered set of Unicode code points.
///
/// Cloning is cheap: the inversion list is reference counted and shared between clones.
/// All operations return new sets and leave their operands untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct CodePointSet {
    list: Arc<CodePointInversionList<'static>>,
}

impl CodePointSet {
    /// Creates an empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_builder(CodePointInversionListBuilder::new())
    }

    /// Creates a set from inclusive `(start, end)` pairs, in any order, overlaps allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end` and [`Error::InvalidCodePoint`] if `end`
    /// lies above [`MAX_CODE_POINT`].
    pub fn from_ranges<I>(ranges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut builder = CodePointInversionListBuilder::new();
        for (start, end) in ranges {
            if start > end {
                return Err(Error::InvalidRange { start, end });
            }
            if end > MAX_CODE_POINT {
                return Err(Error::InvalidCodePoint(end));
            }
            builder.add_range32(start..=end);
        }

        Ok(Self::from_builder(builder))
    }

    /// Creates a set from individual code point values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCodePoint`] for any value above [`MAX_CODE_POINT`].
    pub fn from_code_points<I>(code_points: I) -> Result<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        Self::from_ranges(code_points.into_iter().map(|cp| (cp, cp)))
    }

    /// Creates a set from characters. Infallible, since every `char` is a valid code point.
    #[must_use]
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        chars.into_iter().collect()
    }

    /// Creates a set from inclusive character ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] for a pair whose start lies after its end.
    pub fn from_char_ranges(ranges: &[(char, char)]) -> Result<Self> {
        Self::from_ranges(
            ranges
                .iter()
                .map(|&(start, end)| (u32::from(start), u32::from(end))),
        )
    }

    fn from_builder(builder: CodePointInversionListBuilder) -> Self {
        Self {
            list: Arc::new(builder.build()),
        }
    }

    fn builder(&self) -> CodePointInversionListBuilder {
        let mut builder = CodePointInversionListBuilder::new();
        builder.add_set(&self.list);
        builder
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Number of code points in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.size()
    }

    /// Number of maximal ranges the set consists of.
    #[must_use]
    pub fn range_count(&self) -> usize {
        self.list.get_range_count()
    }

    /// Iterates the maximal inclusive ranges of this set in ascending order.
    pub fn ranges(&self) -> impl Iterator<Item = RangeInclusive<u32>> + '_ {
        self.list.iter_ranges()
    }

    /// Returns `true` if `cp` is a member.
    #[must_use]
    pub fn contains(&self, cp: u32) -> bool {
        self.list.contains32(cp)
    }

    /// Returns `true` if `c` is a member.
    #[must_use]
    pub fn contains_char(&self, c: char) -> bool {
        self.list.contains(c)
    }

    /// Iterates all member code points in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.list.iter_ranges().flatten()
    }

    /// The underlying inversion list.
    #[must_use]
    pub fn as_inversion_list(&self) -> &CodePointInversionList<'static> {
        &self.list
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &CodePointSet) -> CodePointSet {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let mut builder = self.builder();
        builder.add_set(&other.list);
        Self::from_builder(builder)
    }

    /// Returns the members of `self` that are not in `other`.
    #[must_use]
    pub fn subtract(&self, other: &CodePointSet) -> CodePointSet {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }

        let mut builder = self.builder();
        builder.remove_set(&other.list);
        Self::from_builder(builder)
    }

    /// Returns the members present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &CodePointSet) -> CodePointSet {
        let mut builder = self.builder();
        builder.retain_set(&other.list);
        Self::from_builder(builder)
    }

    /// Returns `true` if every member of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &CodePointSet) -> bool {
        other.list.contains_set(&self.list)
    }
}

impl Default for CodePointSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl Hash for CodePointSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for range in self.list.iter_ranges() {
            range.start().hash(state);
            range.end().hash(state);
        }
    }
}

impl FromIterator<char> for CodePointSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut builder = CodePointInversionListBuilder::new();
        for c in iter {
            builder.add_char(c);
        }
        Self::from_builder(builder)
    }
}

impl From<CodePointInversionList<'static>> for CodePointSet {
    fn from(list: CodePointInversionList<'static>) -> Self {
        Self {
            list: Arc::new(list),
        }
    }
}

impl fmt::Debug for CodePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for CodePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, range) in self.list.iter_ranges().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            if range.start() == range.end() {
                write!(f, "U+{:04X}", range.start())?;
            } else {
                write!(f, "U+{:04X}-U+{:04X}", range.start(), range.end())?;
            }
        }
        write!(f, "]")
    }
}
