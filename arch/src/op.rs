use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Standard SIC instruction set. The discriminant is the opcode byte.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum OpKind {
    LDA = 0x00,
    LDX = 0x04,
    LDL = 0x08,
    STA = 0x0C,
    STX = 0x10,
    STL = 0x14,
    ADD = 0x18,
    SUB = 0x1C,
    MUL = 0x20,
    DIV = 0x24,
    COMP = 0x28,
    TIX = 0x2C,
    JEQ = 0x30,
    JGT = 0x34,
    JLT = 0x38,
    J = 0x3C,
    AND = 0x40,
    OR = 0x44,
    JSUB = 0x48,
    RSUB = 0x4C,
    LDCH = 0x50,
    STCH = 0x54,
    RD = 0xD8,
    WD = 0xDC,
    TD = 0xE0,
    STSW = 0xE8,
}

impl OpKind {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_ascii_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }

    pub fn code(self) -> u8 {
        self.into()
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

/// Return from subroutine. Takes no operand; assembles to its opcode and `0000`.
pub const RSUB: &str = "RSUB";

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_op {
        ($($name:ident: $text:expr => $op:expr, $code:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let op = OpKind::parse($text).unwrap();
                    assert_eq!(op, $op);
                    assert_eq!(op.code(), $code);
                    assert_eq!(OpKind::from_code($code), Some($op));
                }
            )*
        }
    }

    test_op! {
        test_lda: "LDA" => OpKind::LDA, 0x00,
        test_lower_sta: "sta" => OpKind::STA, 0x0C,
        test_mixed_jsub: "JSub" => OpKind::JSUB, 0x48,
        test_rsub: "RSUB" => OpKind::RSUB, 0x4C,
        test_j: "j" => OpKind::J, 0x3C,
        test_stsw: "STSW" => OpKind::STSW, 0xE8,
    }

    #[test]
    fn unknown() {
        assert!(OpKind::parse("hoge").is_err());
        assert_eq!(OpKind::from_code(0x01), None);
    }

    #[test]
    fn display() {
        assert_eq!(OpKind::LDCH.to_string(), "LDCH");
        assert_eq!(OpKind::RSUB.to_string(), RSUB);
    }
}
