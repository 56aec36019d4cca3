use arch::directive::Directive;

use crate::{literal::Literal, parser::Mnemonic, pass1::Entry, symtab::SymbolTable, validate};

/// Set in the address field for `BASE,X`.
pub const INDEX_BIT: u16 = 0x8000;

/// Object code of one entry as hex digits, or `None` when it produces no bytes.
pub fn generate(entry: &Entry, symtab: &SymbolTable) -> Option<String> {
    let Some(opcode) = entry.opcode else {
        // Only BYTE carries data without an opcode. A rejected WORD or
        // instruction takes no space, so it must not emit bytes either.
        if !entry.mnemonic.is(Directive::BYTE) {
            return None;
        }
        let literal = Literal::parse(entry.operand.as_deref()?).ok()?;
        return Some(literal.object_code());
    };

    // Matched by name, so a custom table may give RSUB any opcode.
    if entry.mnemonic == Mnemonic::Rsub {
        return Some(format!("{:02X}0000", opcode));
    }

    let operand = entry.operand.as_deref()?;
    if let Some((base, _)) = operand.split_once(',') {
        let addr = symtab.get(base)?;
        return Some(format!("{:02X}{:04X}", opcode, addr as u16 | INDEX_BIT));
    }
    if let Some(addr) = symtab.get(operand) {
        return Some(format!("{:02X}{:04X}", opcode, addr as u16));
    }
    // Immediate: low 16 bits, two's complement when negative.
    validate::parse_decimal(operand).map(|value| format!("{:02X}{:04X}", opcode, value as u16))
}
