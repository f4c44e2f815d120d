//! Property-based tests for the strength heuristic.

use proptest::prelude::*;
use rust_passgen::analyze_password_strength;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Score never leaves [0, 100]
    #[test]
    fn score_is_bounded(password in ".{0,64}") {
        prop_assert!(analyze_password_strength(&password).value() <= 100);
    }

    // Repeating the same composition for longer never lowers the score
    #[test]
    fn score_non_decreasing_in_length(unit in "[A-Za-z0-9!@#]{1,4}", n in 1usize..20) {
        let shorter = unit.repeat(n);
        let longer = unit.repeat(n + 1);
        prop_assert!(
            analyze_password_strength(&longer) >= analyze_password_strength(&shorter),
            "{} scored lower than {}", longer, shorter
        );
    }

    // Appending a character from a class already present cannot lower the score
    #[test]
    fn appending_present_class_never_lowers(password in "[a-z]{1,30}", extra in "[a-z]") {
        let longer = format!("{}{}", password, extra);
        prop_assert!(analyze_password_strength(&longer) >= analyze_password_strength(&password));
    }
}
