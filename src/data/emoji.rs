//! Emoji properties of strings and the `RGI_Emoji` aggregate.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{data::PropertyData, sets::ClassSetContents};

/// Name of the aggregate property covering every [`EmojiProperty`].
pub const RGI_EMOJI: &str = "RGI_Emoji";

/// The emoji properties of strings that make up `RGI_Emoji`.
///
/// The set is fixed across versions; what changes from version to version are the members of
/// each property.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
)]
pub enum EmojiProperty {
    /// Single emoji and presentation sequences
    #[strum(serialize = "Basic_Emoji")]
    BasicEmoji,
    /// Keycap sequences such as `#️⃣`
    #[strum(serialize = "Emoji_Keycap_Sequence")]
    EmojiKeycapSequence,
    /// Skin tone modifier sequences
    #[strum(serialize = "RGI_Emoji_Modifier_Sequence")]
    RgiEmojiModifierSequence,
    /// Regional indicator flag pairs
    #[strum(serialize = "RGI_Emoji_Flag_Sequence")]
    RgiEmojiFlagSequence,
    /// Tag sequences (subdivision flags)
    #[strum(serialize = "RGI_Emoji_Tag_Sequence")]
    RgiEmojiTagSequence,
    /// Zero width joiner sequences
    #[strum(serialize = "RGI_Emoji_ZWJ_Sequence")]
    RgiEmojiZwjSequence,
}

impl EmojiProperty {
    /// The property spec this emoji property is stored under.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Every emoji property, in declaration order.
    pub fn all() -> impl Iterator<Item = EmojiProperty> {
        EmojiProperty::iter()
    }
}

/// Unions every emoji property `layer` knows about.
pub(crate) fn aggregate<L>(layer: &L) -> Option<ClassSetContents>
where
    L: PropertyData + ?Sized,
{
    EmojiProperty::all()
        .filter_map(|property| layer.stored_property_of_strings(property.name()))
        .reduce(|acc, contents| acc.union_unicode_property_of_strings(&contents))
        .map(|contents| match contents {
            // a lone component stays a property of strings in the aggregate
            ClassSetContents::CharacterClass(set) => {
                ClassSetContents::property_of_strings(set, Vec::<String>::new())
            }
            contents => contents,
        })
}
