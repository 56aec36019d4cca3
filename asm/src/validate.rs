//! Operand syntax checks. Pure functions, no assembler state.

use arch::directive::Directive;

use crate::error::Error;

pub const INDEX_REGISTER: &str = "X";

pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

pub fn parse_hex(s: &str) -> Option<u32> {
    if !is_hex(s) {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}

/// Optional sign followed by decimal digits.
pub fn parse_decimal(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

pub fn is_decimal(s: &str) -> bool {
    parse_decimal(s).is_some()
}

/// WORD: a decimal constant.
pub fn word_operand(operand: Option<&str>) -> Result<i64, Error> {
    let operand = operand.ok_or(Error::MissingOperand)?;
    parse_decimal(operand)
        .ok_or_else(|| Error::NotDecimal(Directive::WORD.to_string(), operand.to_string()))
}

/// RESW / RESB: a non-negative decimal count.
pub fn count_operand(directive: Directive, operand: Option<&str>) -> Result<u32, Error> {
    let operand = operand.ok_or(Error::MissingOperand)?;
    let value = parse_decimal(operand)
        .ok_or_else(|| Error::NotDecimal(directive.to_string(), operand.to_string()))?;
    u32::try_from(value).map_err(|_| Error::InvalidCount(directive.to_string(), operand.to_string()))
}

/// Indexed addressing: `BASE,X`, whitespace anywhere ignored.
///
/// Returns `None` when there is no comma (not indexed), otherwise the
/// operand with all whitespace removed.
pub fn index_operand(operand: &str) -> Result<Option<String>, Error> {
    let normalized: String = operand.chars().filter(|c| !c.is_whitespace()).collect();
    if !normalized.contains(',') {
        return Ok(None);
    }
    let parts: Vec<&str> = normalized.split(',').collect();
    match parts.as_slice() {
        [base, index] => {
            if base.is_empty() {
                Err(Error::IndexBase(operand.to_string()))
            } else if !index.eq_ignore_ascii_case(INDEX_REGISTER) {
                Err(Error::IndexRegister(operand.to_string()))
            } else {
                Ok(Some(normalized))
            }
        }
        _ => Err(Error::IndexCommas(operand.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        assert!(is_hex("1000"));
        assert!(is_hex("abcDEF09"));
        assert!(!is_hex(""));
        assert!(!is_hex("0x10"));
        assert!(!is_hex("10G"));
        assert_eq!(parse_hex("1000"), Some(0x1000));
        assert_eq!(parse_hex("ffff"), Some(0xFFFF));
        assert_eq!(parse_hex("+10"), None);
        assert_eq!(parse_hex("123456789"), None);
    }

    #[test]
    fn decimal() {
        assert_eq!(parse_decimal("4096"), Some(4096));
        assert_eq!(parse_decimal("-1"), Some(-1));
        assert_eq!(parse_decimal("+3"), Some(3));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("3A"), None);
        assert_eq!(parse_decimal("1.5"), None);
        assert!(is_decimal("007"));
        assert!(!is_decimal("BUFFER"));
    }

    #[test]
    fn word() {
        assert_eq!(word_operand(Some("3")).unwrap(), 3);
        assert_eq!(word_operand(Some("-7")).unwrap(), -7);
        assert!(matches!(word_operand(None), Err(Error::MissingOperand)));
        assert!(matches!(
            word_operand(Some("ZERO")),
            Err(Error::NotDecimal(d, op)) if d == "WORD" && op == "ZERO"
        ));
    }

    #[test]
    fn count() {
        assert_eq!(count_operand(Directive::RESB, Some("4096")).unwrap(), 4096);
        assert_eq!(count_operand(Directive::RESW, Some("0")).unwrap(), 0);
        assert!(matches!(
            count_operand(Directive::RESW, None),
            Err(Error::MissingOperand)
        ));
        assert!(matches!(
            count_operand(Directive::RESB, Some("TEN")),
            Err(Error::NotDecimal(d, _)) if d == "RESB"
        ));
        assert!(matches!(
            count_operand(Directive::RESW, Some("-1")),
            Err(Error::InvalidCount(d, _)) if d == "RESW"
        ));
    }

    #[test]
    fn index() {
        assert_eq!(index_operand("BUFFER").unwrap(), None);
        assert_eq!(index_operand("BUFFER,X").unwrap().as_deref(), Some("BUFFER,X"));
        assert_eq!(index_operand("BUFFER , X").unwrap().as_deref(), Some("BUFFER,X"));
        assert_eq!(index_operand("BUFFER,x").unwrap().as_deref(), Some("BUFFER,x"));
        assert!(matches!(index_operand("A,X,X"), Err(Error::IndexCommas(_))));
        assert!(matches!(index_operand(",X"), Err(Error::IndexBase(_))));
        assert!(matches!(index_operand("BUFFER,Y"), Err(Error::IndexRegister(_))));
        assert!(matches!(index_operand("BUFFER,"), Err(Error::IndexRegister(_))));
    }
}
