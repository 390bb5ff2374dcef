//! Excel data-entry templates
//!
//! Templates are built as an inspectable model first and rendered to xlsx
//! by `writer`.

pub mod builder;
pub mod writer;

pub use builder::{
    sanitize_sheet_name, sections_from_flow, Cell, FieldExample, SheetModel, TemplateField,
    TemplateSection, TemplateWorkbook, INSTRUCTIONS_SHEET, REQUIRED_SUFFIX,
};
pub use writer::{render, save_template};

use crate::errors::Result;
use std::path::{Path, PathBuf};

/// Build and save a template for arbitrary sections
pub async fn generate_excel_template(
    dir: &Path,
    flow_id: &str,
    flow_name: &str,
    sections: &[TemplateSection],
) -> Result<PathBuf> {
    let template = TemplateWorkbook::build(flow_id, flow_name, sections);
    save_template(dir, &template).await
}
