use serde::{Deserialize, Serialize};
use std::fmt;

/// Naming convention a filename can be required to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStyle {
    #[serde(rename = "camelCase")]
    Camel,
    #[serde(rename = "PascalCase")]
    Pascal,
    #[serde(rename = "snake_case")]
    Snake,
    #[serde(rename = "UPPER_CASE")]
    Upper,
    #[serde(rename = "kebab-case")]
    Kebab,
    /// Keep the document name exactly as written
    #[serde(rename = "matchDocumentStyle")]
    MatchDocument,
}

impl CaseStyle {
    /// Every accepted style, in the order they are documented
    pub const ALL: [Self; 6] = [
        Self::Camel,
        Self::Pascal,
        Self::Snake,
        Self::Upper,
        Self::Kebab,
        Self::MatchDocument,
    ];

    /// Configuration name of the style
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Snake => "snake_case",
            Self::Upper => "UPPER_CASE",
            Self::Kebab => "kebab-case",
            Self::MatchDocument => "matchDocumentStyle",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite `name` in the given style.
///
/// Words are split on `_`, `-`, `.` and whitespace, on lower-to-upper case
/// changes, before the last capital of an acronym run (`HTTPServer` becomes
/// `HTTP` `Server`), and between digits and non-digits. The conversion is lossy
/// but idempotent: converting an already converted name returns it unchanged.
#[must_use]
pub fn convert_case(style: CaseStyle, name: &str) -> String {
    match style {
        CaseStyle::MatchDocument => name.to_string(),
        CaseStyle::Snake => join_mapped(&split_words(name), "_", str::to_lowercase),
        CaseStyle::Upper => join_mapped(&split_words(name), "_", str::to_uppercase),
        CaseStyle::Kebab => join_mapped(&split_words(name), "-", str::to_lowercase),
        CaseStyle::Pascal => merge_single_letters(split_words(name))
            .iter()
            .map(|word| capitalize(word))
            .collect(),
        CaseStyle::Camel => merge_single_letters(split_words(name))
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == 0 {
                    word.to_lowercase()
                } else {
                    capitalize(word)
                }
            })
            .collect(),
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '_' | '-' | '.') || c.is_whitespace()
}

fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_delimiter(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            let lower_to_upper = prev.is_lowercase() && c.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && next.is_some_and(char::is_lowercase);
            let digit_edge = prev.is_ascii_digit() != c.is_ascii_digit();

            if lower_to_upper || acronym_end || digit_edge {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn join_mapped(words: &[String], separator: &str, map: fn(&str) -> String) -> String {
    words
        .iter()
        .map(|word| map(word))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Adjacent one-letter words are joined into one word. Concatenated, `A` `B`
/// would read back as the acronym `AB` and convert differently the second time.
fn merge_single_letters(words: Vec<String>) -> Vec<String> {
    let is_single_letter = |word: &str| {
        let mut chars = word.chars();
        chars.next().is_some_and(char::is_alphabetic) && chars.next().is_none()
    };

    let mut merged: Vec<String> = Vec::with_capacity(words.len());
    let mut previous_single = false;

    for word in words {
        let single = is_single_letter(&word);
        match merged.last_mut() {
            Some(last) if single && previous_single => last.push_str(&word),
            _ => merged.push(word),
        }
        previous_single = single;
    }

    merged
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pascal_from_snake() {
        assert_eq!(convert_case(CaseStyle::Pascal, "user_by_id"), "UserById");
    }

    #[test]
    fn test_kebab_from_pascal() {
        assert_eq!(convert_case(CaseStyle::Kebab, "UserById"), "user-by-id");
    }

    #[test]
    fn test_match_document_style_is_identity() {
        assert_eq!(convert_case(CaseStyle::MatchDocument, "UserById"), "UserById");
        assert_eq!(
            convert_case(CaseStyle::MatchDocument, "user_BY-id.x"),
            "user_BY-id.x"
        );
    }

    #[test]
    fn test_every_style_from_one_name() {
        let name = "getUserByID";
        assert_eq!(convert_case(CaseStyle::Camel, name), "getUserById");
        assert_eq!(convert_case(CaseStyle::Pascal, name), "GetUserById");
        assert_eq!(convert_case(CaseStyle::Snake, name), "get_user_by_id");
        assert_eq!(convert_case(CaseStyle::Upper, name), "GET_USER_BY_ID");
        assert_eq!(convert_case(CaseStyle::Kebab, name), "get-user-by-id");
    }

    #[test]
    fn test_acronym_boundary() {
        assert_eq!(convert_case(CaseStyle::Snake, "HTTPServer"), "http_server");
        assert_eq!(convert_case(CaseStyle::Camel, "XMLHttpRequest"), "xmlHttpRequest");
    }

    #[test]
    fn test_dots_and_dashes_separate_words() {
        assert_eq!(convert_case(CaseStyle::Pascal, "user.fields-list"), "UserFieldsList");
        assert_eq!(convert_case(CaseStyle::Upper, "user.fields"), "USER_FIELDS");
    }

    #[test]
    fn test_digits_are_words() {
        assert_eq!(convert_case(CaseStyle::Snake, "user2Fa"), "user_2_fa");
        assert_eq!(convert_case(CaseStyle::Pascal, "v2_api"), "V2Api");
    }

    #[test]
    fn test_single_letters_are_merged_for_concatenated_styles() {
        assert_eq!(convert_case(CaseStyle::Pascal, "a_b_cd"), "AbCd");
        assert_eq!(convert_case(CaseStyle::Camel, "cd_a_ef"), "cdAEf");
        assert_eq!(convert_case(CaseStyle::Snake, "a_b_cd"), "a_b_cd");
    }

    #[test]
    fn test_acronym_casing_does_not_survive_round_trip() {
        let snake = convert_case(CaseStyle::Snake, "UserByID");
        assert_eq!(snake, "user_by_id");
        assert_eq!(convert_case(CaseStyle::Pascal, &snake), "UserById");
    }

    #[test]
    fn test_empty_and_delimiter_only_names() {
        assert_eq!(convert_case(CaseStyle::Pascal, ""), "");
        assert_eq!(convert_case(CaseStyle::Snake, "__"), "");
    }

    #[test]
    fn test_style_names() {
        let names: Vec<_> = CaseStyle::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            [
                "camelCase",
                "PascalCase",
                "snake_case",
                "UPPER_CASE",
                "kebab-case",
                "matchDocumentStyle"
            ]
        );
        for style in CaseStyle::ALL {
            let parsed: CaseStyle = serde_json::from_value(serde_json::json!(style.as_str())).unwrap();
            assert_eq!(parsed, style);
        }
    }

    proptest! {
        #[test]
        fn prop_conversion_is_idempotent(
            name in "[_A-Za-z][_0-9A-Za-z.-]{0,24}",
            index in 0..CaseStyle::ALL.len(),
        ) {
            let style = CaseStyle::ALL[index];
            let once = convert_case(style, &name);
            let twice = convert_case(style, &once);
            prop_assert_eq!(twice, once);
        }
    }
}
