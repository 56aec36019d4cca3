use std::fmt;

use crate::error::Error;

/// BYTE operand: `C'text'` or `X'hex'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Char(String),
    Hex(String),
}

impl Literal {
    pub fn parse(operand: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = operand.split('\'').collect();
        let (kind, value) = match parts.as_slice() {
            [kind, value, ""] => (*kind, *value),
            _ => return Err(Error::ByteFormat(operand.to_string())),
        };
        match kind.to_ascii_uppercase().as_str() {
            "X" => {
                if value.is_empty() {
                    Err(Error::EmptyHex)
                } else if value.len() % 2 != 0 {
                    Err(Error::OddHex(value.to_string()))
                } else if !value.chars().all(|c| c.is_ascii_hexdigit()) {
                    Err(Error::InvalidHex(value.to_string()))
                } else {
                    Ok(Literal::Hex(value.to_string()))
                }
            }
            "C" => {
                if value.is_empty() {
                    Err(Error::EmptyChar)
                } else {
                    Ok(Literal::Char(value.to_string()))
                }
            }
            _ => Err(Error::ByteType(kind.to_string())),
        }
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        match self {
            Literal::Char(text) => text.len(),
            Literal::Hex(digits) => digits.len() / 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cut into pieces of at most `max` bytes, in order.
    pub fn split(&self, max: usize) -> Vec<Literal> {
        match self {
            Literal::Char(text) => {
                let mut chunks = vec![];
                let mut chunk = String::new();
                for ch in text.chars() {
                    if !chunk.is_empty() && chunk.len() + ch.len_utf8() > max {
                        chunks.push(Literal::Char(std::mem::take(&mut chunk)));
                    }
                    chunk.push(ch);
                }
                if !chunk.is_empty() {
                    chunks.push(Literal::Char(chunk));
                }
                chunks
            }
            // Hex digits are ASCII, so byte slicing is safe.
            Literal::Hex(digits) => digits
                .as_bytes()
                .chunks(max * 2)
                .map(|chunk| Literal::Hex(String::from_utf8_lossy(chunk).into_owned()))
                .collect(),
        }
    }

    pub fn object_code(&self) -> String {
        match self {
            Literal::Char(text) => text.bytes().map(|b| format!("{:02X}", b)).collect(),
            Literal::Hex(digits) => digits.to_ascii_uppercase(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Char(text) => write!(f, "C'{}'", text),
            Literal::Hex(digits) => write!(f, "X'{}'", digits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_literal {
        ($($name:ident: $operand:expr => $len:expr, $code:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let literal = Literal::parse($operand).unwrap();
                    assert_eq!(literal.len(), $len);
                    assert_eq!(literal.object_code(), $code);
                }
            )*
        }
    }

    test_literal! {
        char_eof: "C'EOF'" => 3, "454F46",
        char_lower_kind: "c'AB'" => 2, "4142",
        char_space: "C'A B'" => 3, "412042",
        hex_one: "X'F1'" => 1, "F1",
        hex_device: "X'05'" => 1, "05",
        hex_lower: "x'0aff'" => 2, "0AFF",
    }

    #[test]
    fn invalid() {
        assert!(matches!(Literal::parse("EOF"), Err(Error::ByteFormat(_))));
        assert!(matches!(Literal::parse("C'EOF"), Err(Error::ByteFormat(_))));
        assert!(matches!(Literal::parse("C'EOF'X"), Err(Error::ByteFormat(_))));
        assert!(matches!(Literal::parse("C'A'B'"), Err(Error::ByteFormat(_))));
        assert!(matches!(Literal::parse("Z'00'"), Err(Error::ByteType(_))));
        assert!(matches!(Literal::parse("XX'00'"), Err(Error::ByteType(_))));
        assert!(matches!(Literal::parse("X''"), Err(Error::EmptyHex)));
        assert!(matches!(Literal::parse("X'F'"), Err(Error::OddHex(_))));
        assert!(matches!(Literal::parse("X'FG'"), Err(Error::InvalidHex(_))));
        assert!(matches!(Literal::parse("C''"), Err(Error::EmptyChar)));
    }

    #[test]
    fn split_char() {
        let literal = Literal::parse("C'HELLOWORLDHELLOWORLDHELLOWORLD12'").unwrap();
        assert_eq!(literal.len(), 32);
        let chunks = literal.split(30);
        assert_eq!(
            chunks,
            vec![
                Literal::Char("HELLOWORLDHELLOWORLDHELLOWORLD".to_string()),
                Literal::Char("12".to_string()),
            ]
        );
        assert_eq!(chunks[1].to_string(), "C'12'");
    }

    #[test]
    fn split_multibyte() {
        let literal = Literal::Char("é".repeat(16));
        assert_eq!(literal.len(), 32);
        let chunks = literal.split(30);
        assert_eq!(
            chunks,
            vec![
                Literal::Char("é".repeat(15)),
                Literal::Char("é".to_string()),
            ]
        );
        assert_eq!(chunks.iter().map(Literal::len).collect::<Vec<_>>(), vec![30, 2]);
    }

    #[test]
    fn split_hex() {
        let digits = "0123456789ABCDEF".repeat(4);
        let literal = Literal::Hex(digits.clone());
        assert_eq!(literal.len(), 32);
        let chunks = literal.split(30);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], Literal::Hex(digits[..60].to_string()));
        assert_eq!(chunks[1], Literal::Hex(digits[60..].to_string()));
    }

    #[test]
    fn split_short() {
        let literal = Literal::Char("EOF".to_string());
        assert_eq!(literal.split(30), vec![literal.clone()]);
    }
}
