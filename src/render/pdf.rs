/*!
 * PDF backend: draws a computed [`Layout`] with printpdf's builtin Helvetica fonts.
 */

use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::layout::{FontWeight, Layout, FONT_SIZE, PAGE_HEIGHT, PAGE_WIDTH};
use crate::errors::RenderError;

const MM_PER_POINT: f32 = 25.4 / 72.0;

fn mm(points: f32) -> Mm {
    Mm(points * MM_PER_POINT)
}

fn pdf_error(error: printpdf::Error) -> RenderError {
    RenderError::Pdf(error.to_string())
}

/// Draw every page of `layout` and return the encoded PDF.
///
/// Text uses the builtin Helvetica fonts, which are WinAnsi encoded. Characters
/// outside Latin-1 have no glyph there and come out garbled in the document.
pub fn write_pdf(layout: &Layout, title: &str) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?;

    let mut targets = vec![(first_page, first_layer)];
    for number in 2..=layout.page_count() {
        targets.push(doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), format!("Layer {}", number)));
    }

    for (page, (page_index, layer_index)) in layout.pages.iter().zip(targets) {
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for line in &page.lines {
            let font = match line.weight {
                FontWeight::Regular => &regular,
                FontWeight::Bold => &bold,
            };
            layer.use_text(line.text.as_str(), FONT_SIZE, mm(line.x), mm(line.y), font);
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}
