use color_print::{cformat, cprintln};
use std::fmt;

use crate::{
    pass1::{Addressing, Deferred, Entry, Program},
    symtab::SymbolTable,
};

/// Shown for an absent label, operand, or opcode.
pub const PLACEHOLDER: &str = "***";

fn field(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}

fn opcode(value: Option<u8>) -> String {
    match value {
        Some(code) => format!("{:02X}", code),
        None => PLACEHOLDER.to_string(),
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:04X} {} {} {} {} {}",
            self.line,
            self.loc,
            field(self.label.as_deref()),
            self.mnemonic,
            field(self.operand.as_deref()),
            opcode(self.opcode),
            self.addressing
        )
    }
}

/// The intermediate-listing artifact: one entry per line.
pub fn render(entries: &[Entry]) -> String {
    entries.iter().map(|entry| format!("{}\n", entry)).collect()
}

// ----------------------------------------------------------------------------
// Console tables

pub fn print_program(program: &Program) {
    println!("+-[Program]-------------------");
    cprintln!("| Start Address  : <green>{:04X}</>", program.start);
    cprintln!("| End Address    : <green>{:04X}</>", program.end);
    cprintln!("| End Location   : <green>{:04X}</>", program.end_loc);
    cprintln!("| Program Length : <green>{:04X}</>", program.length());
    println!("+-----------------------------");
}

pub fn print_symbols(symtab: &SymbolTable) {
    println!("+-[Symbols]-+-----------------");
    for (label, symbol) in symtab.iter() {
        cprintln!("| <green>{:04X}</>      | <m>{}</>", symbol.addr, label);
    }
    println!("+-----------+-----------------");
}

pub fn print_deferred(deferred: &[Deferred]) {
    println!("+-[Deferred]+-----------------");
    for item in deferred {
        cprintln!("| {:>9} | <underline>{}</>", item.line, item.operand);
    }
    println!("+-----------+-----------------");
}

pub fn print_entries(entries: &[Entry]) {
    println!("+-[Intermediate]---+----------+----------+-------------+--------+---------");
    println!("| Line | Loc       | Label    | Mnemonic | Operand     | OpCode | Mode");
    println!("+------+-----------+----------+----------+-------------+--------+---------");
    for entry in entries {
        let label = match &entry.label {
            Some(label) => cformat!("<m>{:<8}</>", label),
            None => format!("{:<8}", PLACEHOLDER),
        };
        let code = match entry.opcode {
            Some(code) => cformat!("<yellow>{:02X}</>    ", code),
            None => format!("{:<6}", PLACEHOLDER),
        };
        let mode = match entry.addressing {
            Addressing::Direct => entry.addressing.to_string(),
            Addressing::Indexed => cformat!("<blue>{}</>", entry.addressing),
        };
        cprintln!(
            "| {:>4} | <green>{:04X}</>      | {} | {:<8} | {:<11} | {} | {}",
            entry.line,
            entry.loc,
            label,
            entry.mnemonic.to_string(),
            field(entry.operand.as_deref()),
            code,
            mode
        );
    }
    println!("+------+-----------+----------+----------+-------------+--------+---------");
}
