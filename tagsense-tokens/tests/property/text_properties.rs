use proptest::prelude::*;

use tagsense_tokens::text::{clean_text, has_chinese, is_chinese_char, is_chinese_punct};
use tagsense_tokens::Tokenizer;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn segmentation_preserves_chinese_text(text in "[\u{4e00}-\u{9fa5}]{0,24}") {
        let words = Tokenizer::shared().cut(&text);
        prop_assert_eq!(words.concat(), text);
    }

    #[test]
    fn clean_text_keeps_only_supported_chars(text in "\\PC{0,40}") {
        let cleaned = clean_text(&text);
        for c in cleaned.chars() {
            prop_assert!(
                is_chinese_char(c)
                    || is_chinese_punct(c)
                    || c.is_ascii_alphanumeric()
                    || c.is_ascii_punctuation()
                    || c == ' '
            );
        }
        prop_assert_eq!(has_chinese(&cleaned), has_chinese(&text));
    }
}
