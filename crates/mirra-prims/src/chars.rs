//! Character classification helpers
//!
//! Classification is ASCII-scoped: the tables and predicates answer
//! questions about the English alphabet, not Unicode categories.

/// Lowercase ASCII vowels
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Lowercase ASCII consonants
pub const CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w',
    'x', 'y', 'z',
];

/// Check whether a character is an ASCII vowel (either case)
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Check whether a character is an ASCII consonant (either case)
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c.to_ascii_lowercase())
}

/// Check whether a character is an ASCII letter
pub fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check whether a character is an ASCII decimal digit
pub fn is_ascii_digit_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// Numeric value of a decimal digit character, if it is one
pub fn to_digit_value(c: char) -> Option<u32> {
    c.to_digit(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels() {
        assert!(is_vowel('a'));
        assert!(is_vowel('E'));
        assert!(!is_vowel('b'));
        assert!(!is_vowel('1'));
    }

    #[test]
    fn test_consonants() {
        assert!(is_consonant('b'));
        assert!(is_consonant('Z'));
        assert!(!is_consonant('a'));
        assert!(!is_consonant(' '));
    }

    #[test]
    fn test_tables_cover_the_alphabet() {
        assert_eq!(VOWELS.len() + CONSONANTS.len(), 26);
        for c in 'a'..='z' {
            assert!(is_vowel(c) != is_consonant(c));
        }
    }

    #[test]
    fn test_letters_and_digits() {
        assert!(is_ascii_letter('q'));
        assert!(!is_ascii_letter('é'));
        assert!(is_ascii_digit_char('7'));
        assert!(!is_ascii_digit_char('x'));
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(to_digit_value('7'), Some(7));
        assert_eq!(to_digit_value('0'), Some(0));
        assert_eq!(to_digit_value('x'), None);
    }
}
