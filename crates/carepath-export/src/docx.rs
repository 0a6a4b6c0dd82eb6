use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from rendered Markdown-ish template output.
///
/// Recognised lines:
/// - `# Title` → centred title
/// - `## Heading` / `### Heading` → section and subsection headings
/// - `- item` → bullet item
/// - everything else → body paragraph, with `**bold**` spans
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading2", "heading 2", styles.section_size))
        .add_style(heading_style("Heading3", "heading 3", styles.subsection_size));

    for line in rendered.lines().map(str::trim) {
        let paragraph = if line.is_empty() {
            Paragraph::new()
        } else if let Some(text) = line.strip_prefix("### ") {
            heading_paragraph(text, "Heading3", styles)
        } else if let Some(text) = line.strip_prefix("## ") {
            heading_paragraph(text, "Heading2", styles)
        } else if let Some(text) = line.strip_prefix("# ") {
            heading_paragraph(text, "Title", styles).align(AlignmentType::Center)
        } else if let Some(text) = line.strip_prefix("- ") {
            inline_paragraph(&format!("\u{2022} {text}"), styles)
        } else {
            inline_paragraph(line, styles)
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    tracing::debug!(bytes = bytes.len(), "docx generated");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // half-points
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn inline_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    split_bold(text)
        .into_iter()
        .fold(Paragraph::new().align(AlignmentType::Left), |para, (span, bold)| {
            let run = Run::new()
                .add_text(span)
                .size(styles.body_size * 2)
                .fonts(RunFonts::new().ascii(&styles.body_font));
            para.add_run(if bold { run.bold() } else { run })
        })
}

/// Split on `**` markers into `(text, bold)` spans. An unclosed marker
/// leaves the remainder plain.
fn split_bold(text: &str) -> Vec<(&str, bool)> {
    let mut spans = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("**") {
        let Some(len) = rest[start + 2..].find("**") else {
            break;
        };
        if start > 0 {
            spans.push((&rest[..start], false));
        }
        spans.push((&rest[start + 2..start + 2 + len], true));
        rest = &rest[start + 4 + len..];
    }
    if !rest.is_empty() {
        spans.push((rest, false));
    }
    spans
}
