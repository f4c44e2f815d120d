// src/models.rs
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const FALLBACK_NOTICE: &str = "At least one character type must be selected";

// Character classes in enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    /// Literal alphabet sampled for this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Digits => "0123456789",
            CharacterClass::Special => "!@#$%^&*()_-+=<>?{}[]|:;,.",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase letters",
            CharacterClass::Lowercase => "Lowercase letters",
            CharacterClass::Digits => "Numbers",
            CharacterClass::Special => "Special characters",
        }
    }

    /// Name accepted on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "upper",
            CharacterClass::Lowercase => "lower",
            CharacterClass::Digits => "digits",
            CharacterClass::Special => "special",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown character class '{0}' (expected upper, lower, digits or special)")]
pub struct UnknownClassError(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "digits" | "digit" | "numbers" => Ok(CharacterClass::Digits),
            "special" | "symbols" => Ok(CharacterClass::Special),
            other => Err(UnknownClassError(other.to_string())),
        }
    }
}

/// Set of character classes. Iterates in enumeration order no matter how
/// it was built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet {
    bits: u8,
}

impl ClassSet {
    pub fn empty() -> Self {
        ClassSet { bits: 0 }
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn only(class: CharacterClass) -> Self {
        ClassSet { bits: class.bit() }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.bits & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.bits |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.bits &= !class.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Flip one class, refusing to switch off the last enabled one.
    pub fn toggle(&mut self, class: CharacterClass) -> Option<Notice> {
        if self.contains(class) {
            if self.len() == 1 {
                return Some(Notice::new(FALLBACK_NOTICE));
            }
            self.remove(class);
        } else {
            self.insert(class);
        }
        None
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl Serialize for ClassSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorConfig {
    pub length: usize,
    pub classes: ClassSet,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 12,
            classes: ClassSet::all(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn new(text: String) -> Self {
        GeneratedPassword(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = 100;

    /// Builds a score, clamping anything above 100.
    pub fn new(raw: u32) -> Self {
        StrengthScore(raw.min(Self::MAX as u32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> StrengthLabel {
        match self.0 {
            0..=39 => StrengthLabel::Weak,
            40..=69 => StrengthLabel::Moderate,
            _ => StrengthLabel::Strong,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// Text shown under the strength meter.
    pub fn display_text(self) -> String {
        format!("{} Password", self.as_str())
    }

    pub fn color(self) -> console::Color {
        match self {
            StrengthLabel::Weak => console::Color::Red,
            StrengthLabel::Moderate => console::Color::Yellow,
            StrengthLabel::Strong => console::Color::Green,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-fatal message returned next to a successful result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Notice(String);

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Notice(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub password: GeneratedPassword,
    pub score: StrengthScore,
    pub label: StrengthLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_non_empty_with_expected_sizes() {
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
        assert!(!CharacterClass::Special.alphabet().is_empty());
    }

    #[test]
    fn class_set_iterates_in_enumeration_order() {
        let set: ClassSet = [CharacterClass::Special, CharacterClass::Uppercase, CharacterClass::Digits]
            .into_iter()
            .collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![CharacterClass::Uppercase, CharacterClass::Digits, CharacterClass::Special]);
    }

    #[test]
    fn toggle_refuses_to_clear_last_class() {
        let mut set = ClassSet::only(CharacterClass::Digits);
        let notice = set.toggle(CharacterClass::Digits);
        assert_eq!(notice.map(|n| n.message().to_string()), Some(FALLBACK_NOTICE.to_string()));
        assert!(set.contains(CharacterClass::Digits));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn toggle_flips_membership_otherwise() {
        let mut set = ClassSet::all();
        assert!(set.toggle(CharacterClass::Special).is_none());
        assert!(!set.contains(CharacterClass::Special));
        assert!(set.toggle(CharacterClass::Special).is_none());
        assert!(set.contains(CharacterClass::Special));
    }

    #[test]
    fn character_class_serializes_lowercase() {
        let json = serde_json::to_value(ClassSet::only(CharacterClass::Digits)).unwrap();
        assert_eq!(json, serde_json::json!(["digits"]));
    }

    #[test]
    fn class_names_parse() {
        assert_eq!("upper".parse::<CharacterClass>(), Ok(CharacterClass::Uppercase));
        assert_eq!(" Numbers ".parse::<CharacterClass>(), Ok(CharacterClass::Digits));
        assert!("emoji".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn score_clamps_and_labels() {
        assert_eq!(StrengthScore::new(110).value(), 100);
        assert_eq!(StrengthScore::new(39).label(), StrengthLabel::Weak);
        assert_eq!(StrengthScore::new(40).label(), StrengthLabel::Moderate);
        assert_eq!(StrengthScore::new(69).label(), StrengthLabel::Moderate);
        assert_eq!(StrengthScore::new(70).label(), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::Weak.display_text(), "Weak Password");
    }

    #[test]
    fn outcome_serializes_without_empty_notice() {
        let outcome = GenerationOutcome {
            password: GeneratedPassword::new("abc".to_string()),
            score: StrengthScore::new(10),
            label: StrengthLabel::Weak,
            notice: None,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["password"], "abc");
        assert_eq!(json["score"], 10);
        assert_eq!(json["label"], "Weak");
        assert!(json.get("notice").is_none());
    }
}
