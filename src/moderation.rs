//! Word-level redaction of chirp bodies.

/// Words that never appear verbatim in a stored or returned chirp.
pub const FORBIDDEN_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// What a forbidden word is replaced with.
pub const MASK: &str = "****";

/// Replaces every forbidden word in `text` with [`MASK`].
///
/// Tokens are split on single ASCII spaces only, and a token is redacted
/// when its lowercase form equals a forbidden word exactly. Punctuation
/// sticks to its token, so `"fornax!"` and `"kerfuffled"` pass through.
pub fn moderate(text: &str) -> String {
    text.split(' ')
        .map(|word| if is_forbidden(word) { MASK } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_forbidden(word: &str) -> bool {
    FORBIDDEN_WORDS.contains(&word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("I had a Kerfuffle this morning", "I had a **** this morning")]
    #[case("kerfuffled sharbert", "kerfuffled ****")]
    #[case("FORNAX Sharbert kerfuffle", "**** **** ****")]
    #[case("fornax! is fine", "fornax! is fine")]
    #[case("no bad words here", "no bad words here")]
    #[case("", "")]
    fn redacts_whole_tokens_only(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(moderate(input), expected);
    }

    #[rstest]
    #[case("two  spaces kerfuffle", "two  spaces ****")]
    #[case(" kerfuffle ", " **** ")]
    #[case("tab\tkerfuffle", "tab\tkerfuffle")]
    fn splits_on_single_spaces_only(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(moderate(input), expected);
    }

    #[rstest]
    #[case("I had a Kerfuffle this morning")]
    #[case("**** kerfuffle  sharbert\tfornax")]
    #[case("")]
    fn is_idempotent(#[case] input: &str) {
        let once = moderate(input);
        assert_eq!(moderate(&once), once);
    }

    #[test]
    fn never_lengthens_text() {
        for input in ["kerfuffle", "Fornax sharbert", "a b c"] {
            assert!(moderate(input).chars().count() <= input.chars().count());
        }
    }
}
