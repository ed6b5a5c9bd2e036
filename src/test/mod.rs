//! Fixtures shared by the unit tests.

use crate::{
    data::PropertyDataBase,
    names::AliasNamespace,
    sets::{ClassSetContents, CodePointSet},
    versions::UnicodeVersion,
};

pub const V15_0: UnicodeVersion = UnicodeVersion::new(15, 0, 0);
pub const V15_1: UnicodeVersion = UnicodeVersion::new(15, 1, 0);
pub const V16_0: UnicodeVersion = UnicodeVersion::new(16, 0, 0);

/// Regional indicators D + E
pub const FLAG_DE: &str = "\u{1F1E9}\u{1F1EA}";
/// Regional indicators F + R
pub const FLAG_FR: &str = "\u{1F1EB}\u{1F1F7}";
/// `#` + VS16 + combining enclosing keycap
pub const KEYCAP_HASH: &str = "#\u{FE0F}\u{20E3}";
/// Black flag + tag letters `gbeng` + cancel tag
pub const TAG_ENGLAND: &str = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";

// Helper function to create a set from the chars of a literal
pub fn set(chars: &str) -> CodePointSet {
    chars.chars().collect()
}

// Helper function to create a base with one code point property and an alias per namespace
pub fn alpha_base() -> PropertyDataBase {
    PropertyDataBase::builder(V15_0)
        .property("Alpha", set("ABC"))
        .alias(AliasNamespace::Property, "Alphabetic", "Alpha")
        .alias(AliasNamespace::GeneralCategory, "Uppercase_Letter", "Lu")
        .alias(AliasNamespace::Script, "Latn", "Latin")
        .alias(AliasNamespace::Block, "ASCII", "Basic_Latin")
        .build()
        .unwrap()
}

// Helper function to create a base with a few emoji properties, but no tag sequences
pub fn emoji_base() -> PropertyDataBase {
    PropertyDataBase::builder(V15_0)
        .property("Alpha", set("ABC"))
        .property_of_strings(
            "Basic_Emoji",
            ClassSetContents::property_of_strings(set("\u{231A}\u{231B}"), ["\u{A9}\u{FE0F}"]),
        )
        .property_of_strings(
            "Emoji_Keycap_Sequence",
            ClassSetContents::property_of_strings(CodePointSet::empty(), [KEYCAP_HASH]),
        )
        .property_of_strings(
            "RGI_Emoji_Flag_Sequence",
            ClassSetContents::property_of_strings(CodePointSet::empty(), [FLAG_DE]),
        )
        .build()
        .unwrap()
}
