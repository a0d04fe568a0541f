//! Property-based tests for the tokenizer
//!
//! These make sure the scanner never panics on arbitrary input and configuration, and
//! that unquoted splitting loses nothing but the delimiters themselves.

use proptest::prelude::*;
use textmorse::tokenizer::{tokenize, Tokenized, TokenizerConfig};
use textmorse::tokenize_str;

fn char_set() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop_oneof![Just(','), Just(' '), Just('"'), Just('\''), Just('\\')], 0..3)
}

fn config_strategy() -> impl Strategy<Value = TokenizerConfig> {
    (
        char_set(),
        char_set(),
        char_set(),
        any::<[bool; 4]>(),
    )
        .prop_map(|(delimiters, qualifiers, escapes, flags)| {
            let mut config = TokenizerConfig::new()
                .with_delimiters(delimiters)
                .with_qualifiers(qualifiers)
                .with_escapes(escapes);
            config.double_qualifier_escape = flags[0];
            config.span = flags[1];
            config.group_lines = flags[2];
            config.ignore_consecutive_delimiters = flags[3];
            config
        })
}

proptest! {
    #[test]
    fn never_panics(
        lines in prop::collection::vec("[a-c ,\"'\\\\\r\n]{0,20}", 0..5),
        config in config_strategy(),
    ) {
        let items: Vec<_> = tokenize(&lines, &config).collect();
        if !config.group_lines {
            prop_assert!(items.iter().all(|item| matches!(item, Tokenized::Token(_))));
        }
    }

    #[test]
    fn unquoted_split_rejoins_to_input(text in "[a-c,]{0,30}") {
        prop_assume!(!text.ends_with(','));
        let config = TokenizerConfig::new().with_delimiters([',']);
        prop_assert_eq!(tokenize_str(&text, &config).join(","), text);
    }

    #[test]
    fn collapsed_split_has_no_empty_tokens(text in "[a-c,]{0,30}") {
        let config = TokenizerConfig::new()
            .with_delimiters([','])
            .ignoring_consecutive_delimiters();
        let tokens = tokenize_str(&text, &config);
        prop_assert!(tokens.iter().all(|t| !t.is_empty()));
        prop_assert_eq!(tokens.concat(), text.replace(',', ""));
    }

    #[test]
    fn groups_hold_the_same_tokens(
        lines in prop::collection::vec("[a-c ,\"]{0,12}", 0..5),
    ) {
        let plain = TokenizerConfig::new()
            .with_delimiters([','])
            .with_qualifiers(['"']);
        let grouped = plain.clone().grouping_lines();

        let flat: Vec<String> = tokenize(&lines, &plain)
            .flat_map(Tokenized::into_tokens)
            .collect();
        let regrouped: Vec<String> = tokenize(&lines, &grouped)
            .flat_map(Tokenized::into_tokens)
            .collect();
        prop_assert_eq!(flat, regrouped);
    }
}
