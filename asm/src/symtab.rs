use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub addr: u32,
    /// Line of the definition that is kept.
    pub line: usize,
}

/// Label -> address, in definition order. The first definition wins.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable(IndexMap<String, Symbol>);

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable(IndexMap::new())
    }

    /// Never overwrites: on a duplicate the existing symbol is returned.
    pub fn define(&mut self, label: &str, addr: u32, line: usize) -> Result<(), Symbol> {
        if let Some(prev) = self.0.get(label) {
            return Err(*prev);
        }
        self.0.insert(label.to_string(), Symbol { addr, line });
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.0.get(label).map(|symbol| symbol.addr)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.0.iter().map(|(label, symbol)| (label.as_str(), symbol))
    }

    /// `label: "ADDR"` mapping with 4-digit hex addresses.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        let map: IndexMap<&str, String> = self
            .iter()
            .map(|(label, symbol)| (label, format!("{:04X}", symbol.addr)))
            .collect();
        serde_yaml::to_string(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_definition_wins() {
        let mut symtab = SymbolTable::new();
        assert!(symtab.define("LOOP", 0x1003, 2).is_ok());
        assert_eq!(
            symtab.define("LOOP", 0x2000, 7),
            Err(Symbol {
                addr: 0x1003,
                line: 2
            })
        );
        assert_eq!(symtab.get("LOOP"), Some(0x1003));
        assert_eq!(symtab.len(), 1);
    }

    #[test]
    fn case_sensitive() {
        let mut symtab = SymbolTable::new();
        symtab.define("buf", 0x10, 1).unwrap();
        assert!(symtab.contains("buf"));
        assert!(!symtab.contains("BUF"));
        assert_eq!(symtab.get("BUF"), None);
    }

    #[test]
    fn yaml() {
        let mut symtab = SymbolTable::new();
        symtab.define("COPY", 0x1000, 1).unwrap();
        symtab.define("EOF", 0x102A, 9).unwrap();
        let yaml = symtab.to_yaml().unwrap();
        let back: IndexMap<String, String> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.get("COPY").map(String::as_str), Some("1000"));
        assert_eq!(back.get("EOF").map(String::as_str), Some("102A"));
        assert_eq!(back.get_index(0).map(|(k, _)| k.as_str()), Some("COPY"));
    }
}
