/*!
 * Tests for paginated layout and PDF output
 */

use yt2pdf::render::layout::{
    BULLET_INDENT, FIRST_LINE_Y, NORMAL_INDENT, STRUCTURED_LINE_HEIGHT, WRAP_WIDTH,
};
use yt2pdf::render::wrap::wrap_words;
use yt2pdf::render::{layout_lines, render_summary, render_transcript, FontWeight, RenderMode};

use crate::common::numbered_lines;

#[test]
fn test_plainLayout_withManyLines_shouldSpanPagesAndKeepEveryLine() {
    let lines = numbered_lines(100);
    let layout = layout_lines(&lines, RenderMode::Plain);

    assert_eq!(layout.page_count(), 3);
    assert_eq!(layout.pages[0].lines.len(), 48);
    assert_eq!(layout.pages[1].lines.len(), 48);
    assert_eq!(layout.pages[2].lines.len(), 4);
    assert_eq!(layout.line_count(), 100);

    let texts: Vec<&str> = layout.lines().map(|l| l.text.as_str()).collect();
    assert_eq!(texts.first(), Some(&"line 1"));
    assert_eq!(texts.last(), Some(&"line 100"));
}

#[test]
fn test_plainLayout_shouldNotWrapLongLines() {
    let long = "word ".repeat(60);
    let layout = layout_lines(&[long.clone()], RenderMode::Plain);
    assert_eq!(layout.line_count(), 1);
    assert_eq!(layout.pages[0].lines[0].text, long);
}

#[test]
fn test_structuredLayout_withBullet_shouldIndent() {
    let layout = layout_lines(&["- do the thing"], RenderMode::Structured);
    let line = &layout.pages[0].lines[0];
    assert_eq!(line.x, BULLET_INDENT);
    assert_eq!(line.x, 60.0);
    assert_eq!(line.weight, FontWeight::Regular);
    assert_eq!(line.text, "- do the thing");
}

#[test]
fn test_structuredLayout_withHeading_shouldBeBold() {
    let layout = layout_lines(&["# Heading", "**Bold lead**", "*starred"], RenderMode::Structured);
    let lines: Vec<_> = layout.lines().collect();

    assert_eq!(lines[0].weight, FontWeight::Bold);
    assert_eq!(lines[0].x, NORMAL_INDENT);
    assert_eq!(lines[1].weight, FontWeight::Bold);
    assert_eq!(lines[1].x, NORMAL_INDENT);
    assert_eq!(lines[2].weight, FontWeight::Regular);
    assert_eq!(lines[2].x, BULLET_INDENT);
}

#[test]
fn test_structuredLayout_withBlankLine_shouldAdvanceWithoutDrawing() {
    let layout = layout_lines(&["first", "", "second"], RenderMode::Structured);
    let lines: Vec<_> = layout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].y, FIRST_LINE_Y);
    assert_eq!(lines[1].y, FIRST_LINE_Y - STRUCTURED_LINE_HEIGHT - 9.0);
}

#[test]
fn test_structuredLayout_withExecutiveSummary_shouldMatchExpectedPlacement() {
    let input = ["Executive Summary", "", "- point one", "- point two"];
    let layout = layout_lines(&input, RenderMode::Structured);
    let lines: Vec<_> = layout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].text, "Executive Summary");
    assert_eq!(lines[0].x, NORMAL_INDENT);
    assert_eq!(lines[0].weight, FontWeight::Regular);
    assert_eq!(lines[1].x, BULLET_INDENT);
    assert_eq!(lines[2].x, BULLET_INDENT);
    assert_eq!(lines[1].y, 725.0);
    assert_eq!(lines[2].y, 707.0);
}

#[test]
fn test_structuredLayout_withLongParagraph_shouldWrapAtNinety() {
    let paragraph = "lorem ipsum dolor sit amet ".repeat(10);
    let layout = layout_lines(&[paragraph.as_str()], RenderMode::Structured);

    assert!(layout.line_count() > 1);
    for line in layout.lines() {
        assert!(line.text.chars().count() <= WRAP_WIDTH);
    }
}

#[test]
fn test_structuredLayout_withManyLines_shouldFit39OnFirstPage() {
    let lines = numbered_lines(40);
    let layout = layout_lines(&lines, RenderMode::Structured);
    assert_eq!(layout.page_count(), 2);
    assert_eq!(layout.pages[0].lines.len(), 39);
    assert_eq!(layout.pages[1].lines[0].y, FIRST_LINE_Y);
}

#[test]
fn test_wrapWords_shouldKeepSpacingAndSplitLongWords() {
    assert_eq!(wrap_words("a   b c", 10), vec!["a   b c"]);
    assert!(wrap_words("   ", 10).is_empty());
    let pieces = wrap_words(&"x".repeat(25), 10);
    assert!(pieces.iter().all(|p| p.chars().count() <= 10));
    assert_eq!(pieces.concat(), "x".repeat(25));
}

#[test]
fn test_structuredLayout_withHyphenatedWord_shouldBreakAfterHyphen() {
    let line = format!("- {} state-of-the-art approach", "a".repeat(80));
    let layout = layout_lines(&[line.as_str()], RenderMode::Structured);
    let texts: Vec<&str> = layout.lines().map(|l| l.text.as_str()).collect();

    assert_eq!(texts.len(), 2);
    assert!(texts[0].ends_with(" state-"));
    assert_eq!(texts[1], "of-the-art approach");
    assert!(layout.lines().all(|l| l.x == BULLET_INDENT));
}

#[test]
fn test_renderTranscript_withNoLines_shouldProduceOnePagePdf() {
    let doc = render_transcript::<&str>(&[]).unwrap();
    assert_eq!(doc.page_count(), 1);
    assert!(doc.as_bytes().starts_with(b"%PDF"));
}

#[test]
fn test_renderSummary_shouldSaveToDisk() {
    let dir = tempfile::TempDir::new().unwrap();
    let doc = render_summary("# Title\n- item").unwrap();
    let path = dir.path().join(doc.file_name());

    doc.save(&path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), doc.as_bytes());
}

#[test]
fn test_renderSummary_withNonLatinText_shouldStillProducePdf() {
    let doc = render_summary("# Résumé\n- 東京 growth plan").unwrap();
    assert_eq!(doc.page_count(), 1);
    assert!(doc.as_bytes().starts_with(b"%PDF"));
}
