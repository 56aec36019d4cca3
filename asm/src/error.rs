use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Line classification
    #[error("Too many fields")]
    FieldCount,

    #[error("Invalid opcode: `{0}`")]
    InvalidOpcode(String),

    #[error("Invalid instruction: `{0}`")]
    InvalidInstruction(String),

    #[error("Operand cannot be a mnemonic: `{0}`")]
    OperandIsMnemonic(String),

    #[error("Missing operand")]
    MissingOperand,

    #[error("{0} takes no operand")]
    UnexpectedOperand(String),

    // Program structure
    #[error("Program must begin with START")]
    ExpectedStart,

    #[error("START address must be hexadecimal, not `{0}`")]
    InvalidStartAddress(String),

    #[error("START may only appear as the first instruction")]
    RepeatedStart,

    #[error("Missing START")]
    MissingStart,

    #[error("Missing END")]
    MissingEnd,

    // Operand format
    #[error("BYTE operand must be X'..' or C'..', not `{0}`")]
    ByteFormat(String),

    #[error("BYTE literal type must be X or C, not `{0}`")]
    ByteType(String),

    #[error("X'..' literal cannot be empty")]
    EmptyHex,

    #[error("X'..' literal needs an even number of hex digits: `{0}`")]
    OddHex(String),

    #[error("X'..' literal has invalid hex digits: `{0}`")]
    InvalidHex(String),

    #[error("C'..' literal cannot be empty")]
    EmptyChar,

    #[error("{0} operand must be a decimal number, not `{1}`")]
    NotDecimal(String, String),

    #[error("{0} operand must be a non-negative count, not `{1}`")]
    InvalidCount(String, String),

    #[error("Indexed operand has more than one comma: `{0}`")]
    IndexCommas(String),

    #[error("Indexed operand needs a base before the comma: `{0}`")]
    IndexBase(String),

    #[error("Only X may follow the comma in an indexed operand: `{0}`")]
    IndexRegister(String),

    // Symbols
    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("`{0}` was first defined at line {1}; that definition is kept")]
    FirstDefinition(String, usize),

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("{0} undefined symbol(s); no object program generated")]
    Unresolved(usize),

    #[error("END operand `{0}` is not a label, using the start address as entry point")]
    UndefinedEntry(String),

    #[error("END has no operand, using the start address as entry point")]
    MissingEntry,

    // IO
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to load opcode table: {0}")]
    Optab(String, #[source] arch::optab::Error),

    #[error("Failed to serialize symbol table")]
    Yaml(#[from] serde_yaml::Error),
}
