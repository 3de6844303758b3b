//! Single-page PDF summary of one visit.
//!
//! Fixed layout: A4, Helvetica 14 pt, every line at x = 50 pt and a fixed
//! vertical offset measured in points from the bottom of the page. The
//! file is regenerated on every request and named
//! `{name}_matrubot_report.pdf` after the name is made filesystem-safe.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

use crate::models::Visit;

pub const REPORT_TITLE: &str = "Matrubot Maternal Health Report";
pub const VERIFIED_BY: &str = "Obstetrician / Medical Guidelines";
pub const HELPLINE: &str = "+91-1800-123-456";

const FILE_SUFFIX: &str = "_matrubot_report.pdf";
const FONT_SIZE: f32 = 14.0;
const LEFT_MARGIN_PT: f32 = 50.0;
const PT_TO_MM: f32 = 25.4 / 72.0;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Cannot write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One line of text and its baseline, in points from the page bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub y_pt: f32,
    pub text: String,
}

/// A report written to disk, with the bytes kept for download.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub path: PathBuf,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The fixed text lines of the report, top to bottom.
pub fn report_lines(visit: &Visit) -> Vec<ReportLine> {
    let line = |y_pt: f32, text: String| ReportLine { y_pt, text };
    vec![
        line(800.0, REPORT_TITLE.to_string()),
        line(770.0, format!("Name: {}", visit.name)),
        line(750.0, format!("Age: {}", visit.age)),
        line(730.0, format!("Weight: {} kg", visit.weight)),
        line(710.0, format!("Pregnancy Weeks: {}", visit.weeks)),
        line(690.0, format!("Symptoms: {}", visit.symptoms_text())),
        line(670.0, format!("Risk Level: {}", visit.risk)),
        line(650.0, format!("Consulted Doctor: {}", visit.consulted_doc)),
        line(630.0, format!("Vaccination Status: {}", visit.vaccination)),
        line(610.0, format!("Appointments: {}", visit.appointments_text())),
        line(590.0, format!("Verified Symptoms by: {VERIFIED_BY}")),
        line(560.0, format!("Helpline: {HELPLINE}")),
    ]
}

/// `{name}_matrubot_report.pdf` with anything that could escape the report
/// directory or confuse a filesystem replaced by `_`.
pub fn report_filename(name: &str) -> String {
    let safe: String = name
        .trim()
        .chars()
        .map(|c| {
            let keep = c.is_ascii_alphanumeric()
                || c == '-'
                || c == '_'
                || (!c.is_ascii() && !c.is_whitespace() && !c.is_control());
            if keep {
                c
            } else {
                '_'
            }
        })
        .collect();

    if safe.is_empty() {
        format!("anonymous{FILE_SUFFIX}")
    } else {
        format!("{safe}{FILE_SUFFIX}")
    }
}

/// Builtin PDF fonts only cover Latin-1; drop what they cannot draw.
fn pdf_text(text: &str) -> String {
    text.chars()
        .filter(|c| (*c as u32) < 0x100 && !c.is_control())
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn pt(value: f32) -> Mm {
    Mm(value * PT_TO_MM)
}

/// Render the report. Returns PDF bytes.
pub fn render(visit: &Visit) -> Result<Vec<u8>, ReportError> {
    let (doc, page1, layer1) = PdfDocument::new(REPORT_TITLE, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;

    for line in report_lines(visit) {
        layer.use_text(pdf_text(&line.text), FONT_SIZE, pt(LEFT_MARGIN_PT), pt(line.y_pt), &font);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::Pdf(format!("buffer error: {e}")))
}

/// Render and write the report into `dir`, overwriting any previous copy.
pub fn write_report(dir: &Path, visit: &Visit) -> Result<GeneratedReport, ReportError> {
    let bytes = render(visit)?;
    let file_name = report_filename(&visit.name);
    let path = dir.join(&file_name);

    std::fs::write(&path, &bytes).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "Report generated");
    Ok(GeneratedReport { path, file_name, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::visit::sample_visit;

    #[test]
    fn filename_for_plain_name() {
        assert_eq!(report_filename("Ann"), "Ann_matrubot_report.pdf");
    }

    #[test]
    fn filename_strips_path_separators() {
        let name = report_filename("../etc/passwd");
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));
        assert_eq!(name, "___etc_passwd_matrubot_report.pdf");
        assert!(!report_filename("a\\b").contains('\\'));
    }

    #[test]
    fn filename_for_empty_name() {
        assert_eq!(report_filename("   "), "anonymous_matrubot_report.pdf");
    }

    #[test]
    fn filename_keeps_non_latin_letters() {
        assert_eq!(report_filename("सीता"), "सीता_matrubot_report.pdf");
    }

    #[test]
    fn lines_follow_fixed_layout() {
        let lines = report_lines(&sample_visit());
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0].text, REPORT_TITLE);
        assert_eq!(lines[0].y_pt, 800.0);
        assert_eq!(lines[5].text, "Symptoms: headache, nausea");
        assert_eq!(lines[6].text, "Risk Level: Moderate Risk ⚠️");
        assert_eq!(lines[9].text, "Appointments: 2026-11-02");
        assert_eq!(lines[11].text, "Helpline: +91-1800-123-456");
        assert_eq!(lines[11].y_pt, 560.0);
        assert!(lines.windows(2).all(|w| w[0].y_pt > w[1].y_pt));
    }

    #[test]
    fn appointments_line_says_none() {
        let mut visit = sample_visit();
        visit.appointments.clear();
        assert_eq!(report_lines(&visit)[9].text, "Appointments: None");
    }

    #[test]
    fn pdf_text_drops_emoji() {
        assert_eq!(pdf_text("Risk Level: High Risk ⚠️"), "Risk Level: High Risk");
        assert_eq!(pdf_text("Name: Zoë"), "Name: Zoë");
    }

    #[test]
    fn render_produces_pdf() {
        let bytes = render(&sample_visit()).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[0..4], b"%PDF");
    }

    #[test]
    fn write_report_to_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let report = write_report(tmp.path(), &sample_visit()).unwrap();
        assert_eq!(report.file_name, "Ann_matrubot_report.pdf");
        assert_eq!(report.path, tmp.path().join("Ann_matrubot_report.pdf"));
        assert_eq!(std::fs::read(&report.path).unwrap(), report.bytes);
    }

    #[test]
    fn write_report_missing_dir_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = write_report(&tmp.path().join("nope"), &sample_visit()).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
