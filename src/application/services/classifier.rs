/// Symbols that mark a seed/test account when they appear in a name.
const TEST_SYMBOLS: &str = "+!@#$%^&*(),.?\":{}|<>";

/// True when the combined "first last" name looks like a test account:
/// contains "test"/"тест" in any case, an ASCII digit, or one of the symbols
/// above. Deliveries for such profiles are suppressed.
pub fn is_test_account(first_name: &str, last_name: &str) -> bool {
    let combined = format!("{first_name} {last_name}");
    let lowered = combined.to_lowercase();

    if lowered.contains("test") || lowered.contains("тест") {
        return true;
    }

    combined
        .chars()
        .any(|c| c.is_ascii_digit() || TEST_SYMBOLS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_alphabetic_names_pass() {
        assert!(!is_test_account("Иван", "Петров"));
        assert!(!is_test_account("Anna", "Karenina"));
    }

    #[test]
    fn test_token_matches_in_any_case_and_language() {
        assert!(is_test_account("Test", "User"));
        assert!(is_test_account("ТЕСТовый", "Аккаунт"));
        assert!(is_test_account("Иван", "тестов"));
        assert!(is_test_account("Contest", "Winner")); // token anywhere in the string
    }

    #[test]
    fn digits_mark_test_accounts() {
        assert!(is_test_account("Test", "User1"));
        assert!(is_test_account("Иван", "Петров2"));
    }

    #[test]
    fn listed_symbols_mark_test_accounts() {
        assert!(is_test_account("Ivan", "Petrov+"));
        assert!(is_test_account("QA", "!bot"));
        assert!(is_test_account("Иван", "Пет,ров"));
    }

    #[test]
    fn unlisted_punctuation_is_allowed() {
        assert!(!is_test_account("О'Брайен", "Анна"));
        assert!(!is_test_account("Анна-Мария", "Петрова"));
    }

    #[test]
    fn predicate_is_pure() {
        assert_eq!(
            is_test_account("Иван", "Петров"),
            is_test_account("Иван", "Петров")
        );
        assert_eq!(is_test_account("Test", "User"), is_test_account("Test", "User"));
    }
}
