//! Markdown → ratatui `Text` for the solution overlay.
//!
//! Handles the subset the catalog uses: paragraphs, ordered and unordered
//! lists, bold, italic, inline code, and fenced code blocks. Code blocks are
//! buffered until they close and then highlighted as a whole with syntect.

use std::sync::LazyLock;

use log::debug;
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const CODE_THEME: &str = "base16-ocean.dark";

fn plain_code_style() -> Style {
    Style::default().fg(Color::White)
}

fn inline_code_style() -> Style {
    Style::default().fg(Color::White).bg(Color::DarkGray)
}

/// Render markdown with `base_fg` as the body text color.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut renderer = Renderer::new(base_fg);
    for event in Parser::new(content) {
        renderer.event(event);
    }
    renderer.finish()
}

/// Highlight a bare source snippet. Unknown languages render as plain text.
pub fn render_code(source: &str, lang: &str) -> Text<'static> {
    Text::from(highlight(source, lang))
}

fn highlight(source: &str, lang: &str) -> Vec<Line<'static>> {
    // ratatui draws \t as zero-width
    let source = source.replace('\t', "    ");

    let syntax = SYNTAX_SET.find_syntax_by_token(lang);
    let theme = THEME_SET.themes.get(CODE_THEME);
    let (Some(syntax), Some(theme)) = (syntax, theme) else {
        return source
            .lines()
            .map(|l| Line::styled(l.to_string(), plain_code_style()))
            .collect();
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    LinesWithEndings::from(&source)
        .map(|line| match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => {
                let spans: Vec<Span<'static>> = ranges
                    .into_iter()
                    .map(|(style, fragment)| {
                        let fg =
                            Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b);
                        Span::styled(
                            fragment.trim_end_matches(['\r', '\n']).to_string(),
                            Style::default().fg(fg),
                        )
                    })
                    .collect();
                Line::from(spans)
            }
            Err(e) => {
                debug!("Highlighting failed, falling back to plain: {}", e);
                Line::styled(line.trim_end().to_string(), plain_code_style())
            }
        })
        .collect()
}

struct CodeBuffer {
    lang: String,
    body: String,
}

struct Renderer {
    base_fg: Color,
    lines: Vec<Line<'static>>,
    /// Spans of the line being built; `flush` moves them into `lines`.
    current: Vec<Span<'static>>,
    bold: usize,
    italic: usize,
    /// One entry per open list: `Some(next number)` when ordered.
    lists: Vec<Option<u64>>,
    code: Option<CodeBuffer>,
    /// A blank line goes before the next block.
    gap: bool,
}

impl Renderer {
    fn new(base_fg: Color) -> Self {
        Self {
            base_fg,
            lines: Vec::new(),
            current: Vec::new(),
            bold: 0,
            italic: 0,
            lists: Vec::new(),
            code: None,
            gap: false,
        }
    }

    fn finish(mut self) -> Text<'static> {
        self.flush();
        Text::from(self.lines)
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph) if self.lists.is_empty() => self.begin_block(),
            Event::End(TagEnd::Paragraph) => {
                self.flush();
                self.gap = self.lists.is_empty();
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                self.begin_block();
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) => lang.into_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code = Some(CodeBuffer {
                    lang,
                    body: String::new(),
                });
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(code) = self.code.take() {
                    self.lines.extend(highlight(&code.body, &code.lang));
                }
                self.gap = true;
            }
            Event::Start(Tag::List(start)) => {
                if self.lists.is_empty() {
                    self.begin_block();
                }
                self.flush();
                self.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.flush();
                self.lists.pop();
                self.gap = self.lists.is_empty();
            }
            Event::Start(Tag::Item) => {
                self.flush();
                let marker = self.item_marker();
                self.current.push(marker);
            }
            Event::End(TagEnd::Item) => self.flush(),
            Event::Start(Tag::Strong) => self.bold += 1,
            Event::End(TagEnd::Strong) => self.bold = self.bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => self.italic += 1,
            Event::End(TagEnd::Emphasis) => self.italic = self.italic.saturating_sub(1),
            Event::Text(text) => match &mut self.code {
                Some(code) => code.body.push_str(&text),
                None => {
                    let style = self.text_style();
                    self.current.push(Span::styled(text.into_string(), style));
                }
            },
            Event::Code(code) => self
                .current
                .push(Span::styled(code.into_string(), inline_code_style())),
            Event::SoftBreak => {
                let style = self.text_style();
                self.current.push(Span::styled(" ", style));
            }
            Event::HardBreak => self.flush(),
            _ => {}
        }
    }

    fn begin_block(&mut self) {
        self.flush();
        if self.gap && !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        self.gap = false;
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line::from(spans));
        }
    }

    fn text_style(&self) -> Style {
        let mut style = Style::default().fg(self.base_fg);
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn item_marker(&mut self) -> Span<'static> {
        let indent = 2 * self.lists.len().saturating_sub(1);
        let bullet = match self.lists.last_mut() {
            Some(Some(n)) => {
                let bullet = format!("{n}. ");
                *n += 1;
                bullet
            }
            _ => "- ".to_string(),
        };
        Span::styled(format!("{:indent$}{bullet}", ""), Style::default().fg(Color::DarkGray))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn bold_text_is_bold() {
        let text = render("Some **bold** text", Color::Blue);
        let bold_span = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "bold")
            .unwrap();
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(plain(&text), vec!["Some bold text".to_string()]);
    }

    #[test]
    fn ordered_list_is_numbered_after_a_gap() {
        let text = render("Steps:\n\n1. first\n2. second", Color::Blue);
        assert_eq!(plain(&text), vec!["Steps:", "", "1. first", "2. second"]);
    }

    #[test]
    fn nested_bullets_are_indented() {
        let text = render("- outer\n  - inner", Color::Blue);
        let lines = plain(&text);
        assert_eq!(lines[0], "- outer");
        assert_eq!(lines[1], "  - inner");
    }

    #[test]
    fn inline_code_styled() {
        let text = render("Use `a` and `b`", Color::Blue);
        let code_span = text.lines[0].spans.iter().find(|s| s.content == "a").unwrap();
        assert_eq!(code_span.style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn fenced_block_is_separated_from_paragraphs() {
        let text = render("Intro\n\n```rust\nlet x = 1;\n```\n\nOutro", Color::Blue);
        assert_eq!(plain(&text), vec!["Intro", "", "let x = 1;", "", "Outro"]);
    }

    #[test]
    fn code_keeps_every_source_line() {
        let text = render_code("fn main() {\n\tlet x = 1;\n}", "rust");
        let lines = plain(&text);
        assert_eq!(lines.len(), 3, "{lines:?}");
        assert!(lines[0].contains("fn main"));
        assert!(lines[1].starts_with("    let"));
    }

    #[test]
    fn unknown_language_falls_back_to_plain() {
        let text = render_code("x := 1", "no-such-lang");
        assert_eq!(plain(&text), vec!["x := 1".to_string()]);
        assert_eq!(text.lines[0].style.fg, Some(Color::White));
    }

    #[test]
    fn plain_text_uses_base_color() {
        let text = render("hello", Color::Green);
        assert_eq!(text.lines[0].spans[0].style.fg, Some(Color::Green));
    }
}
