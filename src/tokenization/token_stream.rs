use std::collections::VecDeque;
use crate::position::{FilePosition, START_POSITION};
use crate::tokenization::{classifier, token::*};

/// A stream of classified words
pub struct TokenStream {
    tokens: VecDeque<Token>,
    end_pos: FilePosition,
    prev_pos: FilePosition,
    path: Option<String>,
}

impl TokenStream {
    /// Splits and classifies `text`.
    pub fn new(text: &str, path: Option<String>) -> TokenStream {
        let mut end_pos = START_POSITION;
        for c in text.chars() {
            end_pos.advance(c);
        }

        let tokens = classifier::analyse(text);
        for t in &tokens {
            log::trace!("{} at {}", t, t.pos);
        }

        TokenStream {
            tokens: tokens.into(),
            end_pos,
            prev_pos: START_POSITION,
            path,
        }
    }

    pub fn filepath(&self) -> &Option<String> {
        &self.path
    }

    /// Position of the last token handed out.
    pub fn prev_pos(&self) -> FilePosition {
        self.prev_pos
    }

    /// Position just past the end of the input.
    pub fn end_pos(&self) -> FilePosition {
        self.end_pos
    }

    /// Takes the next token, or `None` at the end of input.
    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front();
        if let Some(t) = &token {
            self.prev_pos = t.pos;
        }
        token
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
