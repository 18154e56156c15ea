//! `.docx` export of a generated report.
//!
//! A `.docx` file is a zip archive; the body lives in `word/document.xml`.
//! The template is copied entry by entry and only the document part is
//! rewritten.

use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Marker in the template whose paragraph is replaced by the report
pub const REPORT_PLACEHOLDER: &str = "{{report}}";

const DOCUMENT_XML: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("template has no word/document.xml")]
    MissingDocument,

    #[error("document has no body")]
    MissingBody,
}

/// Export `report` as `.docx` bytes.
///
/// Falls back to a standalone document when the template cannot be used, so
/// an error here only comes from building the archive in memory.
pub fn export_report(template_path: &Path, report: &str) -> Result<Vec<u8>, ExportError> {
    match fill_template(template_path, report) {
        Ok(bytes) => {
            debug!(template = %template_path.display(), size = bytes.len(), "Report exported");
            Ok(bytes)
        }
        Err(e) => {
            warn!(
                template = %template_path.display(),
                error = %e,
                "Template unusable, exporting standalone document"
            );
            standalone_document(report)
        }
    }
}

/// Pour `report` into the template at `template_path`.
pub fn fill_template(template_path: &Path, report: &str) -> Result<Vec<u8>, ExportError> {
    let mut archive = ZipArchive::new(File::open(template_path)?)?;
    let mut out = ZipWriter::new(Cursor::new(Vec::new()));
    let mut found = false;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.name() == DOCUMENT_XML {
            let mut xml = String::new();
            entry.read_to_string(&mut xml)?;
            let filled = fill_document_xml(&xml, report)?;
            out.start_file(DOCUMENT_XML, file_options())?;
            out.write_all(filled.as_bytes())?;
            found = true;
        } else {
            out.raw_copy_file(entry)?;
        }
    }

    if !found {
        return Err(ExportError::MissingDocument);
    }

    Ok(out.finish()?.into_inner())
}

/// Minimal document holding only the report.
pub fn standalone_document(report: &str) -> Result<Vec<u8>, ExportError> {
    let mut out = ZipWriter::new(Cursor::new(Vec::new()));

    out.start_file("[Content_Types].xml", file_options())?;
    out.write_all(CONTENT_TYPES_XML.as_bytes())?;
    out.start_file("_rels/.rels", file_options())?;
    out.write_all(RELS_XML.as_bytes())?;
    out.start_file(DOCUMENT_XML, file_options())?;
    out.write_all(
        format!(
            "{}<w:body>{}<w:sectPr/></w:body></w:document>",
            DOCUMENT_XML_HEAD,
            report_paragraphs(report)
        )
        .as_bytes(),
    )?;

    Ok(out.finish()?.into_inner())
}

/// Replace the placeholder paragraph, or append before the section properties.
///
/// The placeholder must sit in a single run; Word splits text typed in
/// pieces across runs and such a template falls through to appending.
fn fill_document_xml(xml: &str, report: &str) -> Result<String, ExportError> {
    let paragraphs = report_paragraphs(report);

    if let Some((start, end)) = placeholder_paragraph(xml) {
        return Ok(format!("{}{}{}", &xml[..start], paragraphs, &xml[end..]));
    }

    let insert_at = xml
        .rfind("<w:sectPr")
        .or_else(|| xml.rfind("</w:body>"))
        .ok_or(ExportError::MissingBody)?;
    Ok(format!("{}{}{}", &xml[..insert_at], paragraphs, &xml[insert_at..]))
}

/// Byte range of the `<w:p>` element containing the placeholder
fn placeholder_paragraph(xml: &str) -> Option<(usize, usize)> {
    let marker = xml.find(REPORT_PLACEHOLDER)?;
    let head = &xml[..marker];
    // `<w:pPr` shares the prefix, so match the full tag forms only
    let start = match (head.rfind("<w:p>"), head.rfind("<w:p ")) {
        (Some(a), Some(b)) => a.max(b),
        (a, b) => a.or(b)?,
    };
    let end = marker + xml[marker..].find("</w:p>")? + "</w:p>".len();
    Some((start, end))
}

fn report_paragraphs(report: &str) -> String {
    report
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                "<w:p/>".to_string()
            } else {
                format!(
                    "<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
                    escape_xml(line)
                )
            }
        })
        .collect()
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            // Not allowed anywhere in XML 1.0
            '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `<company>_Report.docx`, safe for a `Content-Disposition` header
pub fn report_filename(company: &str) -> String {
    let safe: String = company
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let safe = if safe.is_empty() { "Company".to_string() } else { safe };
    format!("{}_Report.docx", safe)
}

fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

const DOCUMENT_XML_HEAD: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
);

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"</Types>"#,
);

const RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#,
);
