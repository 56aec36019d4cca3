pub mod error;
pub mod lexer;
pub mod listing;
pub mod literal;
pub mod msg;
pub mod objcode;
pub mod parser;
pub mod pass1;
pub mod pass2;
pub mod record;
pub mod symtab;
pub mod validate;

use arch::optab::OpTable;

pub use error::Error;
pub use msg::{Msg, MsgKind, Msgs};
pub use pass1::PassOne;
pub use record::ObjectProgram;

/// Result of one assembly run.
#[derive(Debug)]
pub struct Assembly {
    pub pass1: PassOne,
    /// Diagnostics of both passes, in the order they were found.
    pub msgs: Msgs,
    /// Number of diagnostics produced by pass one.
    pub pass1_msgs: usize,
    /// `Err` when some deferred operand names no label.
    pub object: Result<ObjectProgram, Error>,
}

/// Run both passes over `source`.
pub fn assemble(source: &str, optab: &OpTable) -> Assembly {
    let (pass1, mut msgs) = pass1::pass_one(source.lines(), optab);
    let pass1_msgs = msgs.len();
    let object = pass2::pass_two(&pass1, &mut msgs);
    Assembly {
        pass1,
        msgs,
        pass1_msgs,
        object,
    }
}
