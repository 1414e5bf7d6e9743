//! Syntax-highlighted code screenshots
//!
//! The source is tokenized with syntect and drawn as line-numbered
//! monospace text onto a white bitmap sized to the text's native extent.
//! That intermediate image is then resampled to exactly 1200x900 and the
//! temporary file removed.

use crate::{Result, RenderError, CODE_HEIGHT, CODE_WIDTH};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Lexical grammar used for a code screenshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLanguage {
    Python,
    Java,
    /// No grammar; every token is drawn in the default ink color
    PlainText,
}

impl CodeLanguage {
    fn syntax_token(&self) -> Option<&'static str> {
        match self {
            CodeLanguage::Python => Some("py"),
            CodeLanguage::Java => Some("java"),
            CodeLanguage::PlainText => None,
        }
    }
}

const FONT_SIZE: u32 = 16;
const LINE_HEIGHT: i32 = 22;
const CHAR_WIDTH: i32 = 9;
const MARGIN: i32 = 24;
const GUTTER_GAP: i32 = 14;

const GUTTER_COLOR: RGBColor = RGBColor(150, 150, 150);
const PLAIN_INK: RGBColor = RGBColor(40, 40, 40);

/// A single colored run of text within a line
struct TokenRun {
    text: String,
    color: RGBColor,
}

/// Render a source string as a 1200x900 code screenshot
pub fn render_code_screenshot(path: &Path, source: &str, language: CodeLanguage) -> Result<()> {
    if source.trim().is_empty() {
        return Err(RenderError::InvalidInput(
            "Refusing to render an empty source file".to_string(),
        ));
    }

    let lines = tokenize(source, language)?;

    let temp_path = temp_path_for(path);
    draw_native(&temp_path, &lines).map_err(|e| RenderError::Backend(e.to_string()))?;

    let resampled = image::open(&temp_path)?.resize_exact(
        CODE_WIDTH,
        CODE_HEIGHT,
        image::imageops::FilterType::Lanczos3,
    );
    resampled.save(path)?;
    fs::remove_file(&temp_path)?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension("native.png")
}

/// Tokenize the source into per-line colored runs
fn tokenize(source: &str, language: CodeLanguage) -> Result<Vec<Vec<TokenRun>>> {
    let Some(token) = language.syntax_token() else {
        return Ok(source
            .lines()
            .map(|line| {
                vec![TokenRun {
                    text: line.to_string(),
                    color: PLAIN_INK,
                }]
            })
            .collect());
    };

    let syntax_set = SyntaxSet::load_defaults_newlines();
    let theme_set = ThemeSet::load_defaults();
    let theme = theme_set
        .themes
        .get("InspiredGitHub")
        .ok_or_else(|| RenderError::Highlight("Missing default theme".to_string()))?;
    let syntax = syntax_set
        .find_syntax_by_token(token)
        .ok_or_else(|| RenderError::Highlight(format!("No grammar for '{}'", token)))?;

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut lines = Vec::new();

    for line in LinesWithEndings::from(source) {
        let ranges = highlighter
            .highlight_line(line, &syntax_set)
            .map_err(|e| RenderError::Highlight(e.to_string()))?;

        let runs: Vec<TokenRun> = ranges
            .into_iter()
            .filter_map(|(style, text)| {
                let trimmed = text.trim_end_matches('\n');
                if trimmed.is_empty() {
                    None
                } else {
                    Some(TokenRun {
                        text: trimmed.to_string(),
                        color: RGBColor(
                            style.foreground.r,
                            style.foreground.g,
                            style.foreground.b,
                        ),
                    })
                }
            })
            .collect();

        lines.push(runs);
    }

    Ok(lines)
}

/// Draw the highlighted lines at their native extent
fn draw_native(path: &Path, lines: &[Vec<TokenRun>]) -> std::result::Result<(), Box<dyn Error>> {
    let line_count = lines.len().max(1);
    let gutter_digits = line_count.to_string().len() as i32;
    let gutter_width = gutter_digits * CHAR_WIDTH + GUTTER_GAP;

    let max_columns = lines
        .iter()
        .map(|runs| runs.iter().map(|r| r.text.chars().count()).sum::<usize>())
        .max()
        .unwrap_or(0) as i32;

    let width = (2 * MARGIN + gutter_width + max_columns * CHAR_WIDTH).max(640) as u32;
    let height = (2 * MARGIN + line_count as i32 * LINE_HEIGHT).max(480) as u32;

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let gutter_style = TextStyle::from(("monospace", FONT_SIZE).into_font())
        .color(&GUTTER_COLOR)
        .pos(Pos::new(HPos::Right, VPos::Top));

    for (index, runs) in lines.iter().enumerate() {
        let y = MARGIN + index as i32 * LINE_HEIGHT;

        root.draw(&Text::new(
            format!("{}", index + 1),
            (MARGIN + gutter_width - GUTTER_GAP, y),
            gutter_style.clone(),
        ))?;

        let mut x = MARGIN + gutter_width;
        for run in runs {
            let style = TextStyle::from(("monospace", FONT_SIZE).into_font()).color(&run.color);
            root.draw(&Text::new(run.text.clone(), (x, y), style))?;
            x += run.text.chars().count() as i32 * CHAR_WIDTH;
        }
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_keeps_every_line() {
        let source = "first line\nsecond line\nthird";
        let lines = tokenize(source, CodeLanguage::PlainText).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0][0].text, "first line");
    }

    #[test]
    fn python_source_is_tokenized() {
        let source = "import os\n\nprint('hello')\n";
        let lines = tokenize(source, CodeLanguage::Python).unwrap();
        assert_eq!(lines.len(), 3);
        // Keyword and string should not share one run
        assert!(lines[0].len() >= 2);
    }

    #[test]
    fn empty_source_rejected() {
        let path = Path::new("unused.png");
        let result = render_code_screenshot(path, "   \n  ", CodeLanguage::Python);
        assert!(result.is_err());
    }
}
