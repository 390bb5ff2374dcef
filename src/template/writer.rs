//! Render template workbooks to `.xlsx`

use crate::errors::{AppError, Result};
use crate::template::builder::{Cell, SheetModel, TemplateWorkbook};
use rust_xlsxwriter::{Note, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const NOTE_AUTHOR: &str = "Analítica";

/// Serialize the workbook to xlsx bytes
pub fn render(template: &TemplateWorkbook) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    for sheet in &template.sheets {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, sheet)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &SheetModel) -> Result<()> {
    worksheet.set_name(&sheet.name)?;

    for (row, cells) in sheet.rows.iter().enumerate() {
        for (column, cell) in cells.iter().enumerate() {
            let (row, column) = (row as u32, column as u16);
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row, column, text)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(row, column, *value)?;
                }
                Cell::Empty => {}
            }
        }
    }

    for note in &sheet.notes {
        let comment = Note::new(&note.text).set_author(NOTE_AUTHOR);
        worksheet.insert_note(0, note.column, &comment)?;
    }

    for (column, width) in sheet.column_widths.iter().enumerate() {
        worksheet.set_column_width(column as u16, *width)?;
    }

    debug!(sheet = %sheet.name, rows = sheet.rows.len(), "sheet written");
    Ok(())
}

/// Write `Plantilla_{flowId}.xlsx` into `dir` and return its path
pub async fn save_template(dir: &Path, template: &TemplateWorkbook) -> Result<PathBuf> {
    check_flow_id(&template.flow_id)?;
    let bytes = render(template)?;
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(template.file_name());
    tokio::fs::write(&path, &bytes).await?;

    info!(path = %path.display(), bytes = bytes.len(), "template written");
    Ok(path)
}

/// The flow id becomes part of a file name and must stay inside `dir`
fn check_flow_id(flow_id: &str) -> Result<()> {
    let unsafe_id = flow_id.trim().is_empty()
        || flow_id.contains("..")
        || flow_id.chars().any(|c| matches!(c, '/' | '\\') || c.is_control());

    if unsafe_id {
        return Err(AppError::InvalidInput(format!(
            "flow id '{}' cannot be used in a file name",
            flow_id.escape_debug()
        )));
    }
    Ok(())
}
