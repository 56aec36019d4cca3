use strum::{Display, EnumIter, EnumString};

/// Assembler directives. They never map to a machine opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
#[strum(ascii_case_insensitive)]
pub enum Directive {
    START,
    END,
    BYTE,
    WORD,
    RESW,
    RESB,
}

impl Directive {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    /// RESW / RESB: reserved space, never backed by object bytes.
    pub fn is_reserve(&self) -> bool {
        matches!(self, Directive::RESW | Directive::RESB)
    }
}
