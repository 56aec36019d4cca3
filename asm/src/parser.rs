use arch::{directive::Directive, op::RSUB, optab::OpTable};
use std::fmt;

use crate::{error::Error, lexer::LineLexer};

// ----------------------------------------------------------------------------
// Mnemonic

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mnemonic {
    Directive(Directive),
    Rsub,
    Op { name: String, code: u8 },
}

impl Mnemonic {
    /// Directive, RSUB, or a mnemonic from the opcode table.
    pub fn classify(word: &str, optab: &OpTable) -> Option<Mnemonic> {
        if let Some(directive) = Directive::parse(word) {
            return Some(Mnemonic::Directive(directive));
        }
        let name = word.to_ascii_uppercase();
        if name == RSUB {
            return Some(Mnemonic::Rsub);
        }
        optab.get(&name).map(|code| Mnemonic::Op { name, code })
    }

    pub fn is(&self, directive: Directive) -> bool {
        *self == Mnemonic::Directive(directive)
    }

    fn needs_operand(&self) -> bool {
        !matches!(self, Mnemonic::Rsub | Mnemonic::Directive(Directive::END))
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mnemonic::Directive(directive) => write!(f, "{}", directive),
            Mnemonic::Rsub => write!(f, "{}", RSUB),
            Mnemonic::Op { name, .. } => write!(f, "{}", name),
        }
    }
}

// ----------------------------------------------------------------------------
// Statement

/// One classified source line: `[label] mnemonic [operand]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub label: Option<String>,
    pub mnemonic: Mnemonic,
    pub operand: Option<String>,
}

impl Stmt {
    /// `Ok(None)` for blank and comment-only lines.
    pub fn parse(line: &str, optab: &OpTable) -> Result<Option<Stmt>, Error> {
        let words = LineLexer::new(line).parse();

        if words.is_empty() {
            return Ok(None);
        }
        if words.len() > 3 {
            return Err(Error::FieldCount);
        }

        // MNEMONIC [OPERAND]
        if let Some(mnemonic) = Mnemonic::classify(&words[0], optab) {
            if words.len() > 2 {
                return Err(Error::FieldCount);
            }
            let operand = Self::operand(words.get(1), &mnemonic, optab)?;
            return Ok(Some(Stmt {
                label: None,
                mnemonic,
                operand,
            }));
        }

        // LABEL MNEMONIC [OPERAND]
        match words.get(1) {
            Some(word) => match Mnemonic::classify(word, optab) {
                Some(mnemonic) => {
                    let operand = Self::operand(words.get(2), &mnemonic, optab)?;
                    Ok(Some(Stmt {
                        label: Some(words[0].clone()),
                        mnemonic,
                        operand,
                    }))
                }
                None => Err(Error::InvalidOpcode(words[0].clone())),
            },
            None => Err(Error::InvalidInstruction(words[0].clone())),
        }
    }

    fn operand(
        word: Option<&String>,
        mnemonic: &Mnemonic,
        optab: &OpTable,
    ) -> Result<Option<String>, Error> {
        match word {
            Some(word) => {
                if Mnemonic::classify(word, optab).is_some() {
                    return Err(Error::OperandIsMnemonic(word.clone()));
                }
                Ok(Some(word.clone()))
            }
            None if mnemonic.needs_operand() => Err(Error::MissingOperand),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch::optab::STANDARD;

    fn parse(line: &str) -> Result<Option<Stmt>, Error> {
        Stmt::parse(line, &STANDARD)
    }

    fn stmt(label: Option<&str>, mnemonic: Mnemonic, operand: Option<&str>) -> Option<Stmt> {
        Some(Stmt {
            label: label.map(str::to_string),
            mnemonic,
            operand: operand.map(str::to_string),
        })
    }

    fn op(name: &str) -> Mnemonic {
        Mnemonic::classify(name, &STANDARD).unwrap()
    }

    #[test]
    fn classify() {
        assert_eq!(op("start"), Mnemonic::Directive(Directive::START));
        assert_eq!(op("rsub"), Mnemonic::Rsub);
        assert_eq!(
            op("lda"),
            Mnemonic::Op {
                name: "LDA".to_string(),
                code: 0x00
            }
        );
        assert_eq!(Mnemonic::classify("BUFFER", &STANDARD), None);
        assert_eq!(op("jsub").to_string(), "JSUB");
        assert!(op("RESW").is(Directive::RESW));
    }

    #[test]
    fn skip() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse(". COPY FILE FROM INPUT TO OUTPUT").unwrap(), None);
    }

    #[test]
    fn fields() {
        assert_eq!(
            parse("COPY START 1000").unwrap(),
            stmt(Some("COPY"), op("START"), Some("1000"))
        );
        assert_eq!(
            parse("  LDA  ZERO  . clear").unwrap(),
            stmt(None, op("LDA"), Some("ZERO"))
        );
        assert_eq!(parse("RSUB").unwrap(), stmt(None, Mnemonic::Rsub, None));
        assert_eq!(
            parse("RLOOP TD INPUT").unwrap(),
            stmt(Some("RLOOP"), op("TD"), Some("INPUT"))
        );
        assert_eq!(
            parse("EXIT RSUB").unwrap(),
            stmt(Some("EXIT"), Mnemonic::Rsub, None)
        );
        assert_eq!(parse("END").unwrap(), stmt(None, op("END"), None));
    }

    #[test]
    fn indexed_operand_merged() {
        assert_eq!(
            parse("LOOP STCH BUFFER , X").unwrap(),
            stmt(Some("LOOP"), op("STCH"), Some("BUFFER,X"))
        );
    }

    #[test]
    fn quoted_operand() {
        assert_eq!(
            parse("MSG BYTE C'HELLO WORLD'").unwrap(),
            stmt(Some("MSG"), op("BYTE"), Some("C'HELLO WORLD'"))
        );
    }

    #[test]
    fn errors() {
        assert!(matches!(parse("A B C D"), Err(Error::FieldCount)));
        assert!(matches!(parse("LDA ZERO EXTRA"), Err(Error::FieldCount)));
        assert!(matches!(parse("LDA RSUB"), Err(Error::OperandIsMnemonic(w)) if w == "RSUB"));
        assert!(matches!(parse("L1 LDA STA"), Err(Error::OperandIsMnemonic(_))));
        assert!(matches!(parse("LDA"), Err(Error::MissingOperand)));
        assert!(matches!(parse("BUF RESW"), Err(Error::MissingOperand)));
        assert!(matches!(parse("LOOP FOO BAR"), Err(Error::InvalidOpcode(w)) if w == "LOOP"));
        assert!(matches!(parse("LOOP"), Err(Error::InvalidInstruction(w)) if w == "LOOP"));
    }
}
