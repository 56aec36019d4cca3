use std::iter::Peekable;
use std::str::CharIndices;

pub const COMMENT: char = '.';
const QUOTE: char = '\'';
const COMMA: char = ',';

/// Splits one source line into whitespace separated words.
///
/// - Everything from a `.` outside a quoted literal is a comment.
/// - A single-quoted run is opaque: `C'A B'` stays one word.
/// - Whitespace around a comma is dropped: `BUF , X` is the word `BUF,X`.
pub struct LineLexer<'a> {
    iter: Peekable<CharIndices<'a>>,
}

impl<'a> LineLexer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            iter: line.char_indices().peekable(),
        }
    }
}

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

impl<'a> LineLexer<'a> {
    fn peek(&mut self) -> Option<char> {
        self.iter.peek().map(|&(_, ch)| ch)
    }
    fn consume(&mut self) -> Option<char> {
        self.iter.next().map(|(_, ch)| ch)
    }
    fn skip_whitespace(&mut self) {
        while self.iter.next_if(|(_, ch)| ch.is_whitespace()).is_some() {}
    }
    fn next_significant(&self) -> Option<char> {
        self.iter.clone().map(|(_, ch)| ch).find(|ch| !ch.is_whitespace())
    }
}

// ----------------------------------------------------------------------------
// Lexer
// ----------------------------------------------------------------------------

impl<'a> LineLexer<'a> {
    pub fn parse(mut self) -> Vec<String> {
        let mut words = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some(COMMENT) => break,
                Some(_) => {}
            }
            let (word, comment) = self.word();
            words.push(word);
            if comment {
                break;
            }
        }
        words
    }

    // Returns the word, and whether a comment cut it short.
    fn word(&mut self) -> (String, bool) {
        let mut word = String::new();
        let mut quoted = false;
        while let Some(ch) = self.peek() {
            if quoted {
                self.consume();
                word.push(ch);
                if ch == QUOTE {
                    quoted = false;
                }
                continue;
            }
            match ch {
                COMMENT => return (word, true),
                QUOTE => {
                    self.consume();
                    word.push(ch);
                    quoted = true;
                }
                COMMA => {
                    self.consume();
                    word.push(ch);
                    self.skip_whitespace();
                }
                ch if ch.is_whitespace() => {
                    if self.next_significant() == Some(COMMA) {
                        self.skip_whitespace();
                    } else {
                        break;
                    }
                }
                ch => {
                    self.consume();
                    word.push(ch);
                }
            }
        }
        (word, false)
    }
}
