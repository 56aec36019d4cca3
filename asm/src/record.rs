use std::fmt;

/// Maximum payload of one text record, in bytes.
pub const TEXT_MAX: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    pub start: u32,
    pub codes: Vec<String>,
}

impl TextRecord {
    pub fn new(start: u32) -> Self {
        TextRecord {
            start,
            codes: Vec::new(),
        }
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.codes.iter().map(|code| code.len() / 2).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn fits(&self, code: &str) -> bool {
        self.len() + code.len() / 2 <= TEXT_MAX
    }

    pub fn push(&mut self, code: String) {
        self.codes.push(code);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Header { name: String, start: u32, length: u32 },
    Text(TextRecord),
    End { entry: u32 },
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Header {
                name,
                start,
                length,
            } => write!(f, "H {:<6.6} {:06X} {:06X}", name, start, length),
            Record::Text(text) => write!(
                f,
                "T {:06X} {:02X} {}",
                text.start,
                text.len(),
                text.codes.join(" ")
            ),
            Record::End { entry } => write!(f, "E {:06X}", entry),
        }
    }
}

/// The object-program artifact: one record per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectProgram(pub Vec<Record>);

impl ObjectProgram {
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.0.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRecord> {
        self.0.iter().filter_map(|record| match record {
            Record::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl fmt::Display for ObjectProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.0 {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
