use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Xlsx,
    Xls,
    Xlsb,
    Ods,
    Csv,
}

impl FileFormat {
    /// Picker filter for the spreadsheet panel.
    pub const SPREADSHEET_EXTENSIONS: [&'static str; 5] = ["xlsx", "xls", "xlsb", "ods", "csv"];

    /// Unknown or missing extensions decode as a workbook; nothing is
    /// validated before the parser sees the bytes.
    pub fn from_file_name(name: &str) -> Self {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => FileFormat::Csv,
            "xls" => FileFormat::Xls,
            "xlsb" => FileFormat::Xlsb,
            "ods" => FileFormat::Ods,
            _ => FileFormat::Xlsx,
        }
    }

    pub fn is_workbook(self) -> bool {
        !matches!(self, FileFormat::Csv)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileFormat::Xlsx => "XLSX",
            FileFormat::Xls => "XLS",
            FileFormat::Xlsb => "XLSB",
            FileFormat::Ods => "ODS",
            FileFormat::Csv => "CSV",
        };
        f.write_str(label)
    }
}

/// Bytes of one selected file, immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub name: String,
    pub format: FileFormat,
    pub bytes: Vec<u8>,
}

impl RawFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let format = FileFormat::from_file_name(&name);
        Self {
            name,
            format,
            bytes,
        }
    }
}

/// A picked file that is only tracked by name, never decoded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
}
