//! Fixed lookup tables from file names and conversion targets to [`DocType`].

use crate::models::DocType;

const DOCS_EXTENSIONS: &[&str] = &["doc", "docx", "rtf", "odt", "txt", "md"];
const EXCEL_EXTENSIONS: &[&str] = &["xls", "xlsx", "csv", "ods"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "svg"];

/// Category for a file extension (without the dot). Unknown extensions are
/// filed as [`DocType::Docs`].
pub fn ext_to_type(ext: &str) -> DocType {
    let ext = ext.trim().to_ascii_lowercase();
    let ext = ext.as_str();
    if ext == "pdf" {
        DocType::Pdf
    } else if DOCS_EXTENSIONS.contains(&ext) {
        DocType::Docs
    } else if EXCEL_EXTENSIONS.contains(&ext) {
        DocType::Excel
    } else if IMAGE_EXTENSIONS.contains(&ext) {
        DocType::Image
    } else {
        DocType::Docs
    }
}

/// Category of a converted document, keyed by the target format.
pub fn out_to_type(format: &str) -> DocType {
    match format.trim().to_ascii_lowercase().as_str() {
        "pdf" => DocType::Pdf,
        "xlsx" => DocType::Excel,
        _ => DocType::Docs,
    }
}

/// Text after the last dot, or `""` when the name has none.
pub fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

/// Name without its final extension.
pub fn stem_of(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Size label used by the upload list and library, rounded up to whole KB.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{} KB", bytes.div_ceil(1024))
}

/// Output formats offered by the convert dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Convert to PDF.
    Pdf,
    /// Convert to a Word document.
    Docx,
    /// Convert to a spreadsheet.
    Xlsx,
}

impl OutputFormat {
    /// Formats in selector order.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Pdf, OutputFormat::Docx, OutputFormat::Xlsx];

    /// File extension, also used as the `<option>` value.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Docx => "docx",
            OutputFormat::Xlsx => "xlsx",
        }
    }

    /// Parse a selector value; unknown values map to PDF.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "docx" => OutputFormat::Docx,
            "xlsx" => OutputFormat::Xlsx,
            _ => OutputFormat::Pdf,
        }
    }

    /// Category of documents produced in this format.
    pub fn doc_type(self) -> DocType {
        out_to_type(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_table_matches_library_categories() {
        assert_eq!(ext_to_type("pdf"), DocType::Pdf);
        assert_eq!(ext_to_type("docx"), DocType::Docs);
        assert_eq!(ext_to_type("md"), DocType::Docs);
        assert_eq!(ext_to_type("xlsx"), DocType::Excel);
        assert_eq!(ext_to_type("csv"), DocType::Excel);
        assert_eq!(ext_to_type("png"), DocType::Image);
        assert_eq!(ext_to_type("SVG"), DocType::Image);
        assert_eq!(ext_to_type("zip"), DocType::Docs);
        assert_eq!(ext_to_type(""), DocType::Docs);
    }

    #[test]
    fn conversion_targets_map_to_types() {
        assert_eq!(out_to_type("pdf"), DocType::Pdf);
        assert_eq!(out_to_type("XLSX"), DocType::Excel);
        assert_eq!(out_to_type("docx"), DocType::Docs);
        assert_eq!(out_to_type("odp"), DocType::Docs);
        assert_eq!(OutputFormat::parse("xlsx").doc_type(), DocType::Excel);
        assert_eq!(OutputFormat::parse("bogus"), OutputFormat::Pdf);
    }

    #[test]
    fn name_parts() {
        assert_eq!(extension_of("report.final.PDF"), "PDF");
        assert_eq!(extension_of("README"), "");
        assert_eq!(stem_of("report.final.pdf"), "report.final");
        assert_eq!(stem_of(".bashrc"), ".bashrc");
        assert_eq!(stem_of("notes"), "notes");
    }

    #[test]
    fn sizes_round_up_to_whole_kilobytes() {
        assert_eq!(format_size_kb(0), "0 KB");
        assert_eq!(format_size_kb(1), "1 KB");
        assert_eq!(format_size_kb(1024), "1 KB");
        assert_eq!(format_size_kb(2048), "2 KB");
        assert_eq!(format_size_kb(2049), "3 KB");
    }
}
