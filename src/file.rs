// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use rust_xlsxwriter::{ColNum, Format, FormatAlign, RowNum, Workbook, XlsxError};

use crate::config::options::ExportOptions;
use crate::data::DataSet;
use crate::error::{Result, ScrapeError};

/// Write the dataset to a single-sheet .xlsx at `export.out_path()`.
/// An empty dataset still produces a valid file (header row only).
/// Returns the final path written to.
pub fn write_xlsx(ds: &DataSet, export: &ExportOptions) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    if ds.is_empty() {
        logw!("Export: no products, writing header-only sheet");
    }

    let mut workbook = build_workbook(ds, export)?;
    workbook.save(&path)?;

    logf!("Export: {} row(s) → {}", ds.row_count(), path.display());
    Ok(path)
}

/// One sheet: bold centred header row, fixed width on every column.
pub fn build_workbook(ds: &DataSet, export: &ExportOptions) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&export.sheet_name)?;

    let header_fmt = Format::new().set_bold().set_align(FormatAlign::Center);

    let mut first_row: RowNum = 0;
    if let Some(headers) = &ds.headers {
        for (c, h) in headers.iter().enumerate() {
            sheet.write_string_with_format(0, col(c)?, h.as_str(), &header_fmt)?;
        }
        sheet.set_freeze_panes(1, 0)?;
        first_row = 1;
    }

    for (r, row) in ds.rows.iter().enumerate() {
        let r = RowNum::try_from(r)
            .ok()
            .and_then(|r| r.checked_add(first_row))
            .ok_or(XlsxError::RowColumnLimitError)?;
        for (c, cell) in row.iter().enumerate() {
            sheet.write_string(r, col(c)?, cell.as_str())?;
        }
    }

    for c in 0..ds.column_count() {
        sheet.set_column_width(col(c)?, export.column_width)?;
    }

    Ok(workbook)
}

fn col(c: usize) -> Result<ColNum> {
    ColNum::try_from(c).map_err(|_| ScrapeError::Xlsx(XlsxError::RowColumnLimitError))
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::InvalidOption(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
