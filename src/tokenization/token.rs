use std::fmt::{Display, Formatter};
use crate::position::FilePosition;

/// Lexical categories, listed in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Condition,
    Arithmetic,
    Delimiter,
    Builtin,
    Float,
    Integer,
    Coordinates,
    Reserved,
    Geometry,
    Name,
    Error,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Condition => "CONDITION_SIGN",
            Category::Arithmetic => "ARITHMETIC_OPERATOR",
            Category::Delimiter => "DELIMITER",
            Category::Builtin => "BUILTIN_FUNCTION",
            Category::Float => "FLOAT",
            Category::Integer => "INTEGER",
            Category::Coordinates => "COORDINATES",
            Category::Reserved => "RESERVED_WORD",
            Category::Geometry => "GEOMETRY",
            Category::Name => "NAME",
            Category::Error => "ERROR",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reserved words of the command language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Given,
    Place,
    Connect,
    Draw,
    Build,
    Through,
    By,
    And,
    With,
    Two,
    To,
}

impl Keyword {
    const WORDS: [(&'static str, Keyword); 11] = [
        ("задано", Keyword::Given),
        ("поставити", Keyword::Place),
        ("зʼєднати", Keyword::Connect),
        ("провести", Keyword::Draw),
        ("побудувати", Keyword::Build),
        ("через", Keyword::Through),
        ("за", Keyword::By),
        ("та", Keyword::And),
        ("зі", Keyword::With),
        ("дві", Keyword::Two),
        ("до", Keyword::To),
    ];

    /// Looks a reserved word up by its lexeme, ignoring case and the
    /// apostrophe variant.
    pub fn of(lexeme: &str) -> Option<Keyword> {
        let word = normalize(lexeme);
        Self::WORDS.iter()
            .find(|(w, _)| *w == word)
            .map(|(_, k)| *k)
    }

    pub fn word(&self) -> &'static str {
        Self::WORDS.iter()
            .find(|(_, k)| k == self)
            .map(|(w, _)| *w)
            .unwrap_or("")
    }
}

/// Geometry nouns, recognized by stem so that any inflection matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Noun {
    Point,
    Triangle,
    Segment,
    Perpendicular,
    Side,
    Square,
    Line,
    Bisector,
    Angle,
}

impl Noun {
    const STEMS: [(&'static str, Noun); 9] = [
        ("точк", Noun::Point),
        ("трикутн", Noun::Triangle),
        ("відріз", Noun::Segment),
        ("перпендикул", Noun::Perpendicular),
        ("сторон", Noun::Side),
        ("квадрат", Noun::Square),
        ("прям", Noun::Line),
        ("бісектр", Noun::Bisector),
        ("кут", Noun::Angle),
    ];

    pub fn of(lexeme: &str) -> Option<Noun> {
        let word = lexeme.to_lowercase();
        Self::STEMS.iter()
            .find(|(stem, _)| word.starts_with(stem))
            .map(|(_, n)| *n)
    }

    pub fn stem(&self) -> &'static str {
        Self::STEMS.iter()
            .find(|(_, n)| n == self)
            .map(|(s, _)| *s)
            .unwrap_or("")
    }
}

/// Lowercases `lexeme` and unifies the apostrophe used inside words.
pub fn normalize(lexeme: &str) -> String {
    lexeme.to_lowercase()
        .chars()
        .map(|c| match c {
            '\'' | '\u{2019}' => '\u{02bc}',
            c => c,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub category: Category,
    pub pos: FilePosition,
}

impl Token {
    pub fn new(lexeme: &str, category: Category, pos: FilePosition) -> Self {
        Token {
            lexeme: lexeme.to_string(),
            category,
            pos,
        }
    }

    pub fn keyword(&self) -> Option<Keyword> {
        if self.category == Category::Reserved {
            Keyword::of(&self.lexeme)
        } else {
            None
        }
    }

    pub fn noun(&self) -> Option<Noun> {
        if self.category == Category::Geometry {
            Noun::of(&self.lexeme)
        } else {
            None
        }
    }

    pub fn is_delimiter(&self, symbol: &str) -> bool {
        self.category == Category::Delimiter && self.lexeme == symbol
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{}: {}]", self.category, self.lexeme)
    }
}
