use arch::{
    directive::Directive,
    op::{OpKind, RSUB},
    optab::OpTable,
};
use std::fmt;

use crate::{
    error::Error,
    literal::Literal,
    msg::Msgs,
    parser::{Mnemonic, Stmt},
    record::TEXT_MAX,
    symtab::SymbolTable,
    validate,
};

/// Opcode byte of a WORD constant.
pub const WORD_OPCODE: u8 = 0x00;

const WORD_SIZE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    Direct,
    Indexed,
}

impl fmt::Display for Addressing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Addressing::Direct => write!(f, "direct"),
            Addressing::Indexed => write!(f, "indexed"),
        }
    }
}

/// One row of the intermediate listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub line: usize,
    pub loc: u32,
    pub label: Option<String>,
    pub mnemonic: Mnemonic,
    pub operand: Option<String>,
    /// `None` for directives and for lines that failed validation.
    pub opcode: Option<u8>,
    pub addressing: Addressing,
}

/// An operand that must name a label once the symbol table is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred {
    pub line: usize,
    pub operand: String,
}

impl Deferred {
    /// Symbol part of the operand, without the index suffix.
    pub fn base(&self) -> &str {
        match self.operand.split_once(',') {
            Some((base, _)) => base,
            None => &self.operand,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Program {
    pub start: u32,
    /// Highest location counter reached by a non-END instruction.
    pub end: u32,
    /// Location of the END instruction.
    pub end_loc: u32,
}

impl Program {
    pub fn length(&self) -> u32 {
        if self.end > self.start {
            self.end - self.start
        } else {
            self.end_loc.saturating_sub(self.start)
        }
    }
}

/// Products of pass one, consumed read-only by pass two.
#[derive(Debug, Clone, Default)]
pub struct PassOne {
    pub symtab: SymbolTable,
    pub entries: Vec<Entry>,
    pub deferred: Vec<Deferred>,
    pub program: Program,
}

pub fn pass_one<I, S>(lines: I, optab: &OpTable) -> (PassOne, Msgs)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ctx = Context::new(optab);
    for (idx, raw) in lines.into_iter().enumerate() {
        ctx.line(idx + 1, raw.as_ref());
    }
    ctx.finish()
}

// ----------------------------------------------------------------------------
// Context

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    AwaitStart,
    Body,
}

struct Context<'a> {
    optab: &'a OpTable,
    mode: Mode,
    locctr: u32,
    started: bool,
    ended: bool,
    out: PassOne,
    msgs: Msgs,
}

impl<'a> Context<'a> {
    fn new(optab: &'a OpTable) -> Self {
        Context {
            optab,
            mode: Mode::AwaitStart,
            locctr: 0,
            started: false,
            ended: false,
            out: PassOne::default(),
            msgs: Msgs::new(),
        }
    }

    fn line(&mut self, no: usize, raw: &str) {
        let stmt = match Stmt::parse(raw, self.optab) {
            Ok(Some(stmt)) => stmt,
            Ok(None) => return,
            Err(err) => {
                self.msgs.error(err, Some(no));
                return;
            }
        };
        match self.mode {
            Mode::AwaitStart => {
                self.mode = Mode::Body;
                self.start(no, stmt);
            }
            Mode::Body => self.body(no, stmt),
        }
    }

    fn finish(mut self) -> (PassOne, Msgs) {
        if !self.started {
            self.msgs.error(Error::MissingStart, None);
        }
        if !self.ended {
            self.msgs.error(Error::MissingEnd, None);
        }
        (self.out, self.msgs)
    }
}

// ----------------------------------------------------------------------------
// Helpers

impl<'a> Context<'a> {
    fn define(&mut self, label: &str, no: usize) {
        if let Err(prev) = self.out.symtab.define(label, self.locctr, no) {
            self.msgs
                .error(Error::RedefinedLabel(label.to_string()), Some(no));
            self.msgs.note(
                Error::FirstDefinition(label.to_string(), prev.line),
                Some(prev.line),
            );
        }
    }

    fn emit(&mut self, no: usize, stmt: Stmt, opcode: Option<u8>, addressing: Addressing) {
        self.out.entries.push(Entry {
            line: no,
            loc: self.locctr,
            label: stmt.label,
            mnemonic: stmt.mnemonic,
            operand: stmt.operand,
            opcode,
            addressing,
        });
    }

    fn advance(&mut self, size: u32) {
        self.locctr = self.locctr.saturating_add(size);
    }

    fn defer(&mut self, no: usize, operand: &str) {
        self.out.deferred.push(Deferred {
            line: no,
            operand: operand.to_string(),
        });
    }
}

// ----------------------------------------------------------------------------
// Statements

impl<'a> Context<'a> {
    fn start(&mut self, no: usize, stmt: Stmt) {
        if !stmt.mnemonic.is(Directive::START) {
            self.msgs.error(Error::ExpectedStart, Some(no));
            return;
        }
        let operand = stmt.operand.clone().unwrap_or_default();
        let Some(addr) = validate::parse_hex(&operand) else {
            self.msgs.error(Error::InvalidStartAddress(operand), Some(no));
            return;
        };
        self.locctr = addr;
        self.started = true;
        self.out.program.start = addr;
        self.out.program.end = addr;
        if let Some(label) = &stmt.label {
            self.define(label, no);
        }
        self.emit(no, stmt, None, Addressing::Direct);
    }

    fn body(&mut self, no: usize, stmt: Stmt) {
        if let Some(label) = &stmt.label {
            self.define(label, no);
        }
        let mnemonic = stmt.mnemonic.clone();
        match mnemonic {
            Mnemonic::Directive(Directive::START) => {
                self.msgs.error(Error::RepeatedStart, Some(no));
                self.emit(no, stmt, None, Addressing::Direct);
            }
            Mnemonic::Directive(Directive::END) => {
                self.end(no, stmt);
                return;
            }
            Mnemonic::Directive(Directive::BYTE) => self.byte(no, stmt),
            Mnemonic::Directive(Directive::WORD) => self.word(no, stmt),
            Mnemonic::Directive(directive @ (Directive::RESW | Directive::RESB)) => {
                self.reserve(no, stmt, directive)
            }
            Mnemonic::Rsub => self.rsub(no, stmt),
            Mnemonic::Op { code, .. } => self.op(no, stmt, code),
        }
        self.out.program.end = self.out.program.end.max(self.locctr);
    }

    fn end(&mut self, no: usize, stmt: Stmt) {
        match &stmt.operand {
            Some(operand) => self.defer(no, operand),
            None => self.msgs.error(Error::MissingOperand, Some(no)),
        }
        self.ended = true;
        self.out.program.end_loc = self.locctr;
        self.emit(no, stmt, None, Addressing::Direct);
    }

    fn byte(&mut self, no: usize, stmt: Stmt) {
        let literal = match Literal::parse(stmt.operand.as_deref().unwrap_or_default()) {
            Ok(literal) => literal,
            Err(err) => {
                self.msgs.error(err, Some(no));
                self.emit(no, stmt, None, Addressing::Direct);
                return;
            }
        };
        // Long literals become one entry per text-record sized chunk.
        for (idx, chunk) in literal.split(TEXT_MAX).into_iter().enumerate() {
            let size = chunk.len() as u32;
            let piece = Stmt {
                label: if idx == 0 { stmt.label.clone() } else { None },
                mnemonic: stmt.mnemonic.clone(),
                operand: Some(chunk.to_string()),
            };
            self.emit(no, piece, None, Addressing::Direct);
            self.advance(size);
        }
    }

    fn word(&mut self, no: usize, stmt: Stmt) {
        match validate::word_operand(stmt.operand.as_deref()) {
            Ok(_) => {
                self.emit(no, stmt, Some(WORD_OPCODE), Addressing::Direct);
                self.advance(WORD_SIZE);
            }
            Err(err) => {
                self.msgs.error(err, Some(no));
                self.emit(no, stmt, None, Addressing::Direct);
            }
        }
    }

    fn reserve(&mut self, no: usize, stmt: Stmt, directive: Directive) {
        let size = match validate::count_operand(directive, stmt.operand.as_deref()) {
            Ok(count) if directive == Directive::RESW => count.saturating_mul(WORD_SIZE),
            Ok(count) => count,
            Err(err) => {
                self.msgs.error(err, Some(no));
                0
            }
        };
        self.emit(no, stmt, None, Addressing::Direct);
        self.advance(size);
    }

    fn rsub(&mut self, no: usize, mut stmt: Stmt) {
        if stmt.operand.take().is_some() {
            self.msgs
                .error(Error::UnexpectedOperand(RSUB.to_string()), Some(no));
        }
        let code = self.optab.get(RSUB).unwrap_or(OpKind::RSUB.code());
        self.emit(no, stmt, Some(code), Addressing::Direct);
        self.advance(WORD_SIZE);
    }

    fn op(&mut self, no: usize, mut stmt: Stmt, code: u8) {
        let operand = stmt.operand.clone().unwrap_or_default();
        let (operand, addressing) = match validate::index_operand(&operand) {
            Ok(Some(indexed)) => (indexed, Addressing::Indexed),
            Ok(None) => (operand, Addressing::Direct),
            Err(err) => {
                self.msgs.error(err, Some(no));
                self.emit(no, stmt, None, Addressing::Direct);
                return;
            }
        };
        if !validate::is_decimal(&operand) && !operand.contains('\'') {
            self.defer(no, &operand);
        }
        stmt.operand = Some(operand);
        self.emit(no, stmt, Some(code), addressing);
        self.advance(WORD_SIZE);
    }
}
