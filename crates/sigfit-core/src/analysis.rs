//! Lightweight text introspection for the sizing heuristics
//!
//! Character counts here mean user-perceived characters (grapheme clusters),
//! so an accented name or an emoji counts the way it will roughly occupy
//! glyph slots, not by its byte or code-unit length.

use unicode_segmentation::UnicodeSegmentation;

/// Name length buckets used by the device pipeline and size helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLengthClass {
    /// 1-5 characters
    Short,
    /// 6-10 characters
    Medium,
    /// 11-15 characters
    Long,
    /// 16 characters and up
    VeryLong,
}

impl NameLengthClass {
    pub fn of(text: &str) -> Self {
        match text.graphemes(true).count() {
            0..=5 => Self::Short,
            6..=10 => Self::Medium,
            11..=15 => Self::Long,
            _ => Self::VeryLong,
        }
    }

    /// Multiplier applied to the working size
    pub fn scale_factor(&self) -> f32 {
        match self {
            Self::Short => 1.1,
            Self::Medium => 1.0,
            Self::Long => 0.9,
            Self::VeryLong => 0.8,
        }
    }

    /// Flat pixel bonus applied after the multiplier
    pub fn size_bonus(&self) -> i32 {
        match self {
            Self::Short => 15,
            Self::Medium => 0,
            Self::Long => -10,
            Self::VeryLong => -20,
        }
    }
}

/// Everything the heuristics want to know about a piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnalysis {
    /// User-perceived character count
    pub length: usize,
    pub word_count: usize,
    pub average_word_length: f32,
    pub has_special_characters: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digits: bool,
    pub has_spaces: bool,
    /// 0-100 estimate of how hard this text is to fit
    pub complexity: f32,
}

impl TextAnalysis {
    pub fn of(text: &str) -> Self {
        let length = text.graphemes(true).count();
        let word_count = text.split_whitespace().count();
        let letter_count: usize = text
            .split_whitespace()
            .map(|word| word.graphemes(true).count())
            .sum();
        let average_word_length = if word_count > 0 {
            letter_count as f32 / word_count as f32
        } else {
            0.0
        };

        let has_special_characters = text
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace());
        let has_uppercase = text.chars().any(|c| c.is_ascii_uppercase());
        let has_lowercase = text.chars().any(|c| c.is_ascii_lowercase());
        let has_digits = text.chars().any(|c| c.is_ascii_digit());
        let has_spaces = text.chars().any(char::is_whitespace);

        let mut complexity = (length as f32 / 20.0).min(1.0) * 30.0;
        if has_special_characters {
            complexity += 20.0;
        }
        if has_uppercase && has_lowercase {
            complexity += 15.0;
        }
        if has_digits {
            complexity += 10.0;
        }
        if word_count > 1 {
            complexity += 25.0;
        }

        Self {
            length,
            word_count,
            average_word_length,
            has_special_characters,
            has_uppercase,
            has_lowercase,
            has_digits,
            has_spaces,
            complexity: complexity.min(100.0),
        }
    }

    pub fn length_class(&self) -> NameLengthClass {
        match self.length {
            0..=5 => NameLengthClass::Short,
            6..=10 => NameLengthClass::Medium,
            11..=15 => NameLengthClass::Long,
            _ => NameLengthClass::VeryLong,
        }
    }
}
