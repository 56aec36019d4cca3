use color_print::cprintln;
use std::ops::Range;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgKind {
    Error,
    Warn,
    Note,
}

#[derive(Debug)]
pub struct Msg {
    pub kind: MsgKind,
    pub err: Error,
    /// 1-based source line, if the message points at one.
    pub line: Option<usize>,
}

impl Msg {
    /// Print with diagnostic information showing file location and line content
    pub fn print<S: AsRef<str>>(&self, file: &str, source: &[S]) {
        match self.kind {
            MsgKind::Error => cprintln!("<red,bold>error</>: {}", self.err),
            MsgKind::Warn => cprintln!("<yellow,bold>warn</>: {}", self.err),
            MsgKind::Note => cprintln!("<green,bold>note</>: {}", self.err),
        }
        match self.line {
            Some(no) => {
                let raw = source
                    .get(no.wrapping_sub(1))
                    .map(|s| s.as_ref())
                    .unwrap_or("");
                cprintln!("     <blue>--></> <underline>{}:{}</>", file, no);
                cprintln!("      <blue>|</>");
                cprintln!(" <blue>{:>4} |</> {}", no, raw);
                cprintln!("      <blue>|</>");
            }
            None => cprintln!("     <blue>--></> <underline>{}</>", file),
        }
    }
}

/// Ordered, append-only diagnostics of one assembly run.
#[derive(Debug, Default)]
pub struct Msgs(Vec<Msg>);

impl Msgs {
    pub fn new() -> Self {
        Msgs(Vec::new())
    }

    pub fn error(&mut self, err: Error, line: Option<usize>) {
        self.push(MsgKind::Error, err, line);
    }

    pub fn warn(&mut self, err: Error, line: Option<usize>) {
        self.push(MsgKind::Warn, err, line);
    }

    pub fn note(&mut self, err: Error, line: Option<usize>) {
        self.push(MsgKind::Note, err, line);
    }

    fn push(&mut self, kind: MsgKind, err: Error, line: Option<usize>) {
        self.0.push(Msg { kind, err, line });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Msg> {
        self.0.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Msg> {
        self.0.iter().filter(|msg| msg.kind == MsgKind::Error)
    }

    pub fn has_error(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Print the messages in `range`, clamped to what has been collected.
    pub fn dump_range<S: AsRef<str>>(&self, range: Range<usize>, file: &str, source: &[S]) {
        let end = range.end.min(self.0.len());
        for msg in self.0.get(range.start..end).unwrap_or_default() {
            msg.print(file, source);
        }
    }

    pub fn dump<S: AsRef<str>>(&self, file: &str, source: &[S]) {
        self.dump_range(0..self.0.len(), file, source);
    }
}
