//! Header row detection and side-by-side table partitioning
//!
//! A single header row may describe several tables laid next to each other
//! (a common layout when one sheet holds a ledger per salesperson). A field
//! appearing a second time on the row marks the start of the next table.

use serde::Serialize;

use super::field_aliases::FieldAliasTable;
use crate::app::models::SaleField;

/// Column layout of one logical table within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Section {
    columns: [Option<usize>; SaleField::COUNT],
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column index mapped to `field`, if any
    pub fn column(&self, field: SaleField) -> Option<usize> {
        self.columns[field.index()]
    }

    pub fn contains(&self, field: SaleField) -> bool {
        self.column(field).is_some()
    }

    /// Map `field` to `column`; returns false if the field was already mapped
    pub fn insert(&mut self, field: SaleField, column: usize) -> bool {
        let slot = &mut self.columns[field.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(column);
        true
    }

    /// Number of mapped fields
    pub fn len(&self) -> usize {
        self.columns.iter().filter(|column| column.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A section is usable with two or more fields, one of them an anchor
    pub fn is_valid(&self) -> bool {
        self.len() >= 2 && SaleField::ALL.iter().any(|f| f.is_anchor() && self.contains(*f))
    }

    /// Both anchor fields mapped, so a row can be read through this section
    pub fn has_required_columns(&self) -> bool {
        self.contains(SaleField::DataVenda) && self.contains(SaleField::Carro)
    }

    /// Mapped `(field, column)` pairs in field order
    pub fn mapped(&self) -> impl Iterator<Item = (SaleField, usize)> + '_ {
        SaleField::ALL
            .iter()
            .filter_map(|field| self.column(*field).map(|column| (*field, column)))
    }
}

impl Serialize for Section {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, column) in self.mapped() {
            map.serialize_entry(field.as_str(), &column)?;
        }
        map.end()
    }
}

/// Outcome of analyzing one row as a potential header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderAnalysis {
    pub sections: Vec<Section>,
}

impl HeaderAnalysis {
    /// A row is a header only when it yields at least one valid section
    pub fn is_header(&self) -> bool {
        !self.sections.is_empty()
    }
}

/// Resolve a row's cells and partition them into sections
pub fn analyze_header_row(row: &[String], aliases: &FieldAliasTable) -> HeaderAnalysis {
    let mut sections = Vec::new();
    let mut current = Section::new();

    for (column, cell) in row.iter().enumerate() {
        let Some(field) = aliases.resolve(cell) else {
            continue;
        };

        if !current.insert(field, column) {
            finalize(current, &mut sections);
            current = Section::new();
            current.insert(field, column);
        }
    }
    finalize(current, &mut sections);

    HeaderAnalysis { sections }
}

fn finalize(section: Section, sections: &mut Vec<Section>) {
    if section.is_valid() {
        sections.push(section);
    }
}
