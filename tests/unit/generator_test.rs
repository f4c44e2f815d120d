use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_passgen::models::FALLBACK_NOTICE;
use rust_passgen::{CharacterClass, ClassSet, GeneratorConfig, PasswordGenerator, StrengthLabel};

fn config(length: usize, classes: &[CharacterClass]) -> GeneratorConfig {
    GeneratorConfig {
        length,
        classes: classes.iter().copied().collect(),
    }
}

// === Generation ===

#[test]
fn every_character_comes_from_enabled_classes() {
    let generator = PasswordGenerator::new();
    let enabled = [CharacterClass::Uppercase, CharacterClass::Special];
    let allowed: String = enabled.iter().map(|c| c.alphabet()).collect();

    for length in [1, 4, 12, 50, 128] {
        let outcome = generator.generate(&config(length, &enabled));
        assert_eq!(outcome.password.len(), length);
        assert!(outcome.password.as_str().chars().all(|c| allowed.contains(c)));
        assert!(outcome.notice.is_none());
    }
}

#[test]
fn empty_selection_uses_uppercase_and_emits_one_notice() {
    let outcome = PasswordGenerator::new().generate(&config(32, &[]));

    assert_eq!(outcome.password.len(), 32);
    assert!(outcome.password.as_str().chars().all(|c| c.is_ascii_uppercase()));
    let notice = outcome.notice.expect("fallback notice");
    assert_eq!(notice.message(), FALLBACK_NOTICE);
}

#[test]
fn zero_length_gives_empty_weak_password() {
    let outcome = PasswordGenerator::new().generate(&config(0, &[]));
    assert!(outcome.password.is_empty());
    assert_eq!(outcome.score.value(), 0);
    assert_eq!(outcome.label, StrengthLabel::Weak);
}

#[test]
fn same_seed_same_password() {
    let generator = PasswordGenerator::new();
    let cfg = GeneratorConfig { length: 24, classes: ClassSet::all() };

    let first = generator.generate_with_rng(&cfg, &mut ChaCha8Rng::seed_from_u64(7));
    let second = generator.generate_with_rng(&cfg, &mut ChaCha8Rng::seed_from_u64(7));

    assert_eq!(first.password, second.password);
}

#[test]
fn draws_cover_the_whole_alphabet() {
    // 2000 draws from 10 digits: missing one is vanishingly unlikely
    let outcome = PasswordGenerator::new()
        .generate_with_rng(&config(2000, &[CharacterClass::Digits]), &mut ChaCha8Rng::seed_from_u64(42));
    for digit in CharacterClass::Digits.alphabet().chars() {
        assert!(outcome.password.as_str().contains(digit), "digit {} never drawn", digit);
    }
}

// === Strength of generated output ===

#[test]
fn label_matches_score() {
    let outcome = PasswordGenerator::new().generate(&GeneratorConfig::default());
    assert_eq!(outcome.label, outcome.score.label());
}
