use once_cell::sync::Lazy;
use regex::Regex;
use crate::position::FilePosition;
use crate::tokenization::token::{Category, Token};

/// Category patterns. Order matters: a word gets the first category whose
/// pattern matches it entirely, so earlier entries shadow later ones.
const PATTERNS: &[(Category, &str)] = &[
    (Category::Condition, r"<=|>=|==|<|>|!=|&&|\|\|"),
    (Category::Arithmetic, r"[+\-*/=%]"),
    (Category::Delimiter, r#"[\[\](){}.,!?;:'"\\]"#),
    (Category::Builtin, r"sin|cos|tan|log|exp|max|min"),
    (Category::Float, r"\d+\.\d+"),
    (Category::Integer, r"\d+"),
    (
        Category::Coordinates,
        r"\s*\(\s*-?[0-9]+(\.[0-9]+)?\s*,\s*-?[0-9]+(\.[0-9]+)?\s*\)",
    ),
    (
        Category::Reserved,
        concat!(
            r"if|else|while|char|double|float|String|int|void|false|true|null|",
            r"private|public|static|return|",
            r"ЗАДАНО|ПОСТАВИТИ|З['ʼ’]ЄДНАТИ|ПРОВЕСТИ|ПОБУДУВАТИ|ЧЕРЕЗ|ЗА|ТА|ЗІ|ДВІ|ДО|",
            r"задано|поставити|з['ʼ’]єднати|провести|побудувати|через|за|та|зі|дві|до",
        ),
    ),
    (
        Category::Geometry,
        concat!(
            r"(ТОЧК|ТРИКУТН|ВІДРІЗ|ПЕРПЕНДИКУЛ|СТОРОН|КВАДРАТ|ПРЯМ|БІСЕКТР|КУТ)[А-ЯІЇЄҐ]*|",
            r"(точк|трикутн|відріз|перпендикул|сторон|квадрат|прям|бісектр|кут)[а-яіїєґ]*",
        ),
    ),
    (
        Category::Name,
        r"[А-Яа-яІіЇїЄєҐґA-Za-z][А-Яа-яІіЇїЄєҐґA-Za-z0-9]*",
    ),
];

static CLASSIFIERS: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    PATTERNS.iter()
        .map(|(category, pattern)| {
            let anchored = format!("^(?:{})$", pattern);
            let regex = Regex::new(&anchored)
                .unwrap_or_else(|e| panic!("bad {} pattern: {}", category, e));
            (*category, regex)
        })
        .collect()
});

/// Returns the category of a single whitespace-free word.
pub fn category(word: &str) -> Category {
    CLASSIFIERS.iter()
        .find(|(_, regex)| regex.is_match(word))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Error)
}

pub fn classify(word: &str, pos: FilePosition) -> Token {
    Token::new(word, category(word), pos)
}

/// Splits `text` on whitespace runs and classifies every word.
pub fn analyse(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = FilePosition::new(1, 1);
    let mut word = String::new();
    let mut start = pos;

    for c in text.chars() {
        if c.is_whitespace() {
            if !word.is_empty() {
                tokens.push(classify(&word, start));
                word.clear();
            }
        } else {
            if word.is_empty() {
                start = pos;
            }
            word.push(c);
        }
        pos.advance(c);
    }

    if !word.is_empty() {
        tokens.push(classify(&word, start));
    }

    log::trace!("classified {} words", tokens.len());
    tokens
}

#[cfg(test)]
mod classifier_tests {
    use super::*;

    #[test]
    fn test_category_priority() {
        let cases = [
            ("<=", Category::Condition),
            ("=", Category::Arithmetic),
            ("-", Category::Arithmetic),
            (";", Category::Delimiter),
            (",", Category::Delimiter),
            ("sin", Category::Builtin),
            ("2.5", Category::Float),
            ("42", Category::Integer),
            ("(3,1)", Category::Coordinates),
            ("(-5,5)", Category::Coordinates),
            ("(1.5,-2)", Category::Coordinates),
            ("поставити", Category::Reserved),
            ("ПРОВЕСТИ", Category::Reserved),
            ("while", Category::Reserved),
            ("точку", Category::Geometry),
            ("ВІДРІЗОК", Category::Geometry),
            ("квадрат", Category::Geometry),
            ("A", Category::Name),
            ("AB", Category::Name),
            ("A1", Category::Name),
            ("Ї", Category::Name),
        ];

        for (word, expected) in cases.iter() {
            assert_eq!(category(word), *expected, "word {:?}", word);
        }
    }

    #[test]
    fn test_reserved_shadows_name() {
        // "за" and "до" are valid names too, but reserved words come first
        assert_eq!(category("за"), Category::Reserved);
        assert_eq!(category("до"), Category::Reserved);
        assert_eq!(category("minimum"), Category::Name);
        assert_eq!(category("min"), Category::Builtin);
    }

    #[test]
    fn test_apostrophe_variants() {
        assert_eq!(category("зʼєднати"), Category::Reserved);
        assert_eq!(category("з'єднати"), Category::Reserved);
        assert_eq!(category("З'ЄДНАТИ"), Category::Reserved);
    }

    #[test]
    fn test_unknown_words_are_errors() {
        assert_eq!(category("A,"), Category::Error);
        assert_eq!(category("(1,"), Category::Error);
        assert_eq!(category("2)"), Category::Error);
        assert_eq!(category("1A"), Category::Error);
        assert_eq!(category("@"), Category::Error);
    }

    #[test]
    fn test_analyse_splits_on_whitespace_only() {
        let tokens = analyse("  поставити точку A (1, 2)\n;");
        let lexemes: Vec<&str> = tokens.iter()
            .map(|t| t.lexeme.as_str())
            .collect();

        assert_eq!(lexemes, ["поставити", "точку", "A", "(1,", "2)", ";"]);
        assert_eq!(tokens[3].category, Category::Error);
        assert_eq!(tokens[4].category, Category::Error);
    }

    #[test]
    fn test_analyse_positions() {
        let tokens = analyse("поставити точку A\n  ; B");

        assert_eq!(tokens[0].pos, FilePosition::new(1, 1));
        assert_eq!(tokens[1].pos, FilePosition::new(1, 11));
        assert_eq!(tokens[2].pos, FilePosition::new(1, 17));
        assert_eq!(tokens[3].pos, FilePosition::new(2, 3));
        assert_eq!(tokens[4].pos, FilePosition::new(2, 5));
    }

    #[test]
    fn test_analyse_empty() {
        assert!(analyse("").is_empty());
        assert!(analyse(" \t\n ").is_empty());
    }
}
