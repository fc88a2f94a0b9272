mod prop_tests {
    use crate::unicode::classify;
    use crate::{AcronymSet, Converter, Style, parse, segment, snake};
    use proptest::prelude::*;

    fn non_boundary_chars(text: &str) -> String {
        text.chars().filter(|&c| !classify(c).is_boundary()).collect()
    }

    proptest! {
        #[test]
        fn conversions_are_total(s in ".{0,200}") {
            let conv = Converter::builder().acronyms(["HTTP", "XML"]).build().unwrap();
            for &style in Style::ALL {
                prop_assert!(conv.convert(style, Some(&s)).is_ok());
            }
        }

        #[test]
        fn tokens_are_never_empty(s in ".{0,200}") {
            let set = AcronymSet::new(["HTTP"]).unwrap();
            for token in segment(&s, &set) {
                prop_assert!(!token.text.is_empty());
            }
        }

        #[test]
        fn tokens_partition_the_non_boundary_chars(s in ".{0,200}") {
            let set = AcronymSet::new(["HTTP"]).unwrap();
            let joined: String = segment(&s, &set).iter().map(|t| t.text).collect();
            prop_assert_eq!(joined, non_boundary_chars(&s));
        }

        #[test]
        fn snake_is_idempotent(s in "[a-zA-Z0-9óéñ_. /-]{0,80}") {
            let once = snake(&s, &[]).unwrap();
            let twice = snake(&once, &[]).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn snake_round_trip_keeps_word_count(s in "[a-zA-Z0-9óéñ_. /-]{0,80}") {
            let set = AcronymSet::default();
            let words = parse(&s, &set).tokens.len();
            let rendered = snake(&s, &[]).unwrap();
            prop_assert_eq!(parse(&rendered, &set).tokens.len(), words);
        }

        #[test]
        fn camel_round_trip_keeps_lowercase_words(s in "[a-z]{1,4}[a-zA-Z]{0,40}") {
            // Words survive a camel render/re-segment cycle, modulo the
            // casing shape an acronym picks up. A leading acronym would
            // uppercase the whole first word and can turn the output
            // caps-only, which legitimately re-segments differently.
            let set = AcronymSet::new(["HTTP"]).unwrap();
            let tokens = parse(&s, &set).tokens;
            prop_assume!(!tokens[0].is_acronym);
            let before: Vec<String> = tokens
                .iter()
                .map(|t| t.text.to_lowercase())
                .collect();
            let rendered = crate::camel(&s, &["HTTP"]).unwrap();
            let after: Vec<String> = parse(&rendered, &set)
                .tokens
                .iter()
                .map(|t| t.text.to_lowercase())
                .collect();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn boundary_runs_collapse(seps in "[-_./ ]{1,6}") {
            let set = AcronymSet::default();
            let input = format!("foo{seps}bar");
            let tokens = segment(&input, &set);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].text, "foo");
            prop_assert_eq!(tokens[1].text, "bar");

            let trailing = format!("{seps}foo{seps}");
            prop_assert_eq!(segment(&trailing, &set).len(), 1);
        }

        #[test]
        fn unhinted_caps_runs_are_one_token(s in "[A-Z]{1,30}") {
            let tokens = segment(&s, &AcronymSet::default());
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].shape, crate::Shape::AllUpper);
        }
    }
}
