//! Property-based tests for password generation.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_passgen::{CharacterClass, ClassSet, GeneratorConfig, PasswordGenerator};

fn class_set() -> impl Strategy<Value = ClassSet> {
    proptest::collection::vec(prop::sample::select(CharacterClass::ALL.to_vec()), 0..=4)
        .prop_map(|classes| classes.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_matches_length_and_alphabet(length in 0usize..=128, classes in class_set(), seed in any::<u64>()) {
        let config = GeneratorConfig { length, classes };
        let outcome = PasswordGenerator::new().generate_with_rng(&config, &mut ChaCha8Rng::seed_from_u64(seed));

        let effective = if classes.is_empty() { ClassSet::only(CharacterClass::Uppercase) } else { classes };
        let allowed: String = effective.iter().map(|c| c.alphabet()).collect();

        prop_assert_eq!(outcome.password.len(), length);
        prop_assert!(outcome.password.as_str().chars().all(|c| allowed.contains(c)));
        prop_assert_eq!(outcome.notice.is_some(), classes.is_empty());
    }
}
