//! Spreadsheet export of lookup results

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::lookup::LookupResult;

/// Content type for .xlsx downloads
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Attachment filename for a drug's export
pub fn attachment_filename(drug_name: &str) -> String {
    format!("{drug_name}_drug_classes.xlsx")
}

/// Render a lookup result as an .xlsx workbook: one row per category label,
/// classes comma-joined in the second column.
pub fn to_xlsx(result: &LookupResult) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Drug Classes")?;

    let header = Format::new().set_bold();
    worksheet.write_string_with_format(0, 0, "Class Type", &header)?;
    worksheet.write_string_with_format(0, 1, "Classes", &header)?;

    for (row, (label, names)) in result.classes.iter().enumerate() {
        let row = (row + 1) as u32;
        worksheet.write_string(row, 0, label.as_str())?;
        worksheet.write_string(row, 1, names.join(", "))?;
    }

    let buffer = workbook.save_to_buffer()?;
    Ok(buffer)
}
