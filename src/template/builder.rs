//! In-memory workbook model for data-entry templates
//!
//! The model is plain data so it can be inspected without an xlsx reader;
//! `writer` renders it to bytes.

use crate::flows::{AnalysisFlow, FieldType};
use serde::Serialize;
use std::collections::HashSet;

pub const INSTRUCTIONS_SHEET: &str = "Instrucciones";
pub const REQUIRED_SUFFIX: &str = " (*)";
pub const MIN_COLUMN_WIDTH: usize = 15;
pub const BLANK_ROWS: usize = 3;

const MAX_SHEET_NAME: usize = 31;
const INVALID_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

const INSTRUCTIONS: [&str; 5] = [
    "1. Complete los datos en las hojas correspondientes a cada paso del análisis.",
    "2. Los campos marcados con (*) son obligatorios.",
    "3. Puede encontrar ejemplos de datos en cada hoja.",
    "4. No modifique los nombres de las columnas.",
    "5. Si tiene datos faltantes, deje la celda vacía.",
];

/// Example value shown under a column header
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldExample {
    Text(String),
    Number(f64),
}

impl FieldExample {
    /// Numeric fields whose example parses as a number are written as numbers
    pub fn for_field(example: &str, field_type: FieldType) -> Self {
        if field_type == FieldType::Numeric {
            if let Ok(value) = example.trim().parse::<f64>() {
                if value.is_finite() {
                    return Self::Number(value);
                }
            }
        }
        Self::Text(example.to_string())
    }
}

impl From<&str> for FieldExample {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for FieldExample {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateField {
    pub name: String,
    pub description: String,
    pub example: FieldExample,
    pub required: bool,
    pub field_type: FieldType,
}

impl TemplateField {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        example: impl Into<FieldExample>,
        required: bool,
        field_type: FieldType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            example: example.into(),
            required,
            field_type,
        }
    }

    pub fn header(&self) -> String {
        if self.required {
            format!("{}{}", self.name, REQUIRED_SUFFIX)
        } else {
            self.name.clone()
        }
    }
}

/// One data-entry sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateSection {
    pub name: String,
    pub fields: Vec<TemplateField>,
}

impl TemplateSection {
    pub fn new(name: impl Into<String>, fields: Vec<TemplateField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// One section per flow step, named after the step
pub fn sections_from_flow(flow: &AnalysisFlow) -> Vec<TemplateSection> {
    flow.steps
        .iter()
        .map(|step| TemplateSection {
            name: step.name.to_string(),
            fields: step
                .input_fields
                .iter()
                .map(|field| TemplateField {
                    name: field.name.to_string(),
                    description: field.description.to_string(),
                    example: FieldExample::for_field(field.example, field.field_type),
                    required: field.required,
                    field_type: field.field_type,
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<&FieldExample> for Cell {
    fn from(example: &FieldExample) -> Self {
        match example {
            FieldExample::Text(text) if text.is_empty() => Cell::Empty,
            FieldExample::Text(text) => Cell::Text(text.clone()),
            FieldExample::Number(value) => Cell::Number(*value),
        }
    }
}

/// Comment attached to a header cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderNote {
    pub column: u16,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetModel {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
    pub notes: Vec<HeaderNote>,
    pub column_widths: Vec<f64>,
}

impl SheetModel {
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    /// Header row as text; empty for sheets without one
    pub fn headers(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.iter().filter_map(Cell::as_text).collect())
            .unwrap_or_default()
    }

    /// True if any cell in the sheet holds exactly `text`
    pub fn contains_text(&self, text: &str) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|cell| cell.as_text() == Some(text))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateWorkbook {
    pub flow_id: String,
    pub flow_name: String,
    pub sheets: Vec<SheetModel>,
}

impl TemplateWorkbook {
    /// Instructions sheet followed by one sheet per section
    pub fn build(flow_id: &str, flow_name: &str, sections: &[TemplateSection]) -> Self {
        let mut used = HashSet::new();
        let mut sheets = Vec::with_capacity(sections.len() + 1);

        sheets.push(instructions_sheet(
            sanitize_sheet_name(INSTRUCTIONS_SHEET, &mut used),
            flow_id,
            flow_name,
        ));

        for section in sections {
            let name = sanitize_sheet_name(&section.name, &mut used);
            sheets.push(section_sheet(name, section));
        }

        Self {
            flow_id: flow_id.to_string(),
            flow_name: flow_name.to_string(),
            sheets,
        }
    }

    pub fn from_flow(flow: &AnalysisFlow) -> Self {
        Self::build(flow.id, flow.name, &sections_from_flow(flow))
    }

    pub fn file_name(&self) -> String {
        format!("Plantilla_{}.xlsx", self.flow_id)
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetModel> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

fn instructions_sheet(name: String, flow_id: &str, flow_name: &str) -> SheetModel {
    let mut rows = vec![
        vec![text("Plantilla de Análisis:"), text(flow_name)],
        vec![text("ID:"), text(flow_id)],
        vec![Cell::Empty],
        vec![text("INSTRUCCIONES:")],
    ];
    rows.extend(INSTRUCTIONS.iter().map(|line| vec![text(line)]));
    rows.push(vec![Cell::Empty]);

    SheetModel {
        name,
        rows,
        notes: Vec::new(),
        column_widths: Vec::new(),
    }
}

fn section_sheet(name: String, section: &TemplateSection) -> SheetModel {
    let headers: Vec<String> = section.fields.iter().map(TemplateField::header).collect();

    let column_widths = headers
        .iter()
        .map(|header| header.chars().count().max(MIN_COLUMN_WIDTH) as f64)
        .collect();

    let notes = section
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| !field.description.is_empty())
        .map(|(column, field)| HeaderNote {
            column: column as u16,
            text: field.description.clone(),
        })
        .collect();

    let mut rows = Vec::with_capacity(2 + BLANK_ROWS);
    rows.push(headers.into_iter().map(Cell::Text).collect());
    rows.push(section.fields.iter().map(|f| Cell::from(&f.example)).collect());
    for _ in 0..BLANK_ROWS {
        rows.push(vec![Cell::Empty; section.fields.len()]);
    }

    SheetModel {
        name,
        rows,
        notes,
        column_widths,
    }
}

/// Make `name` a valid, unused worksheet name
///
/// Excel limits names to 31 characters, forbids `[]:*?/\`, forbids a
/// leading or trailing apostrophe and compares names case-insensitively.
/// The returned name is recorded in `used`.
pub fn sanitize_sheet_name(name: &str, used: &mut HashSet<String>) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if INVALID_SHEET_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let cleaned = trim_sheet_name(&cleaned);

    let base: String = if cleaned.is_empty() {
        "Hoja".to_string()
    } else {
        truncate_sheet_name(cleaned, MAX_SHEET_NAME)
    };

    let mut candidate = base.clone();
    let mut counter = 2;
    while used.contains(&candidate.to_lowercase()) {
        let suffix = format!(" ({})", counter);
        let keep = MAX_SHEET_NAME - suffix.chars().count();
        candidate = format!("{}{}", truncate_sheet_name(&base, keep), suffix);
        counter += 1;
    }

    used.insert(candidate.to_lowercase());
    candidate
}

fn trim_sheet_name(name: &str) -> &str {
    name.trim().trim_matches('\'').trim()
}

/// Cutting can expose an apostrophe or space, so trim again afterwards
fn truncate_sheet_name(name: &str, max: usize) -> String {
    let truncated: String = name.chars().take(max).collect();
    trim_sheet_name(&truncated).to_string()
}
