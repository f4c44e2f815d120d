// src/generators/password.rs
use rand::Rng;

use crate::generators::strength::analyze_password_strength;
use crate::models::{
    CharacterClass, ClassSet, GeneratedPassword, GenerationOutcome, GeneratorConfig, Notice,
    FALLBACK_NOTICE,
};

/// Builds passwords from the enabled character classes and scores them.
///
/// The default source is `rand::thread_rng()`. This generator makes no
/// claim of being suitable for real credentials; callers that need that
/// must hand their own CSPRNG to [`PasswordGenerator::generate_with_rng`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate(&self, config: &GeneratorConfig) -> GenerationOutcome {
        let mut rng = rand::thread_rng();
        self.generate_with_rng(config, &mut rng)
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&self, config: &GeneratorConfig, rng: &mut R) -> GenerationOutcome {
        let (classes, notice) = effective_classes(config.classes);
        let alphabet = effective_alphabet(classes);

        let text: String = (0..config.length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();

        log::debug!(
            "Generated password of length {} from {} classes ({} symbols)",
            config.length,
            classes.len(),
            alphabet.len()
        );

        let score = analyze_password_strength(&text);
        GenerationOutcome {
            password: GeneratedPassword::new(text),
            score,
            label: score.label(),
            notice,
        }
    }
}

/// Substitutes Uppercase when nothing is enabled.
fn effective_classes(classes: ClassSet) -> (ClassSet, Option<Notice>) {
    if classes.is_empty() {
        log::warn!("No character class selected, falling back to uppercase");
        (ClassSet::only(CharacterClass::Uppercase), Some(Notice::new(FALLBACK_NOTICE)))
    } else {
        (classes, None)
    }
}

/// Alphabets of the given classes, concatenated in enumeration order.
pub fn effective_alphabet(classes: ClassSet) -> Vec<char> {
    classes
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect()
}
