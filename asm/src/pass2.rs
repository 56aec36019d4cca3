use arch::directive::Directive;

use crate::{
    error::Error,
    msg::Msgs,
    objcode,
    parser::Mnemonic,
    pass1::PassOne,
    record::{ObjectProgram, Record, TextRecord},
};

/// Program name when START has no label.
pub const DEFAULT_NAME: &str = "PROG";

/// Resolve deferred operands, then build the object program.
///
/// Resolution is all-or-nothing: any undefined symbol is reported and
/// no records are produced.
pub fn pass_two(pass1: &PassOne, msgs: &mut Msgs) -> Result<ObjectProgram, Error> {
    let undefined = resolve(pass1, msgs);
    if undefined > 0 {
        return Err(Error::Unresolved(undefined));
    }

    let mut records = vec![header(pass1)];
    let entry = entry_point(pass1, msgs);

    let mut text: Option<TextRecord> = None;
    for entry in &pass1.entries {
        match entry.mnemonic {
            Mnemonic::Directive(Directive::START | Directive::END) => continue,
            Mnemonic::Directive(directive) if directive.is_reserve() => {
                records.extend(text.take().map(Record::Text));
                continue;
            }
            _ => {}
        }
        let Some(code) = objcode::generate(entry, &pass1.symtab) else {
            continue;
        };
        match text.as_mut() {
            Some(open) if open.fits(&code) => open.push(code),
            _ => {
                records.extend(text.take().map(Record::Text));
                let mut open = TextRecord::new(entry.loc);
                open.push(code);
                text = Some(open);
            }
        }
    }
    records.extend(text.take().map(Record::Text));

    records.push(Record::End { entry });
    Ok(ObjectProgram(records))
}

/// Number of deferred operands that name no label.
fn resolve(pass1: &PassOne, msgs: &mut Msgs) -> usize {
    let mut undefined = 0;
    for deferred in &pass1.deferred {
        let base = deferred.base();
        if !pass1.symtab.contains(base) {
            msgs.error(Error::UndefinedSymbol(base.to_string()), Some(deferred.line));
            undefined += 1;
        }
    }
    undefined
}

fn header(pass1: &PassOne) -> Record {
    let name = pass1
        .entries
        .iter()
        .find(|entry| entry.mnemonic.is(Directive::START))
        .and_then(|entry| entry.label.clone())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());
    Record::Header {
        name,
        start: pass1.program.start,
        length: pass1.program.length(),
    }
}

fn entry_point(pass1: &PassOne, msgs: &mut Msgs) -> u32 {
    let start = pass1.program.start;
    let Some(end) = pass1
        .entries
        .iter()
        .find(|entry| entry.mnemonic.is(Directive::END))
    else {
        return start;
    };
    match &end.operand {
        Some(operand) => match pass1.symtab.get(operand) {
            Some(addr) => addr,
            None => {
                msgs.warn(Error::UndefinedEntry(operand.clone()), Some(end.line));
                start
            }
        },
        None => {
            msgs.warn(Error::MissingEntry, Some(end.line));
            start
        }
    }
}
