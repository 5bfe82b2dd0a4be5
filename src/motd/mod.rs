//! MOTD markup rendering
//!
//! Turns a raw MOTD containing `§x` formatting codes into an ordered list of
//! styled spans that a view layer can embed safely. Rendering never fails:
//! unknown codes stay in the text as literals and a MOTD without any codes
//! comes back as a single plain span.
//!
//! The grammar is resolved in one forward scan that tracks the active color
//! and style and cuts a span at every code boundary. Region semantics:
//! - a color code changes only the color; an active style continues across it
//! - a style code replaces the active style and leaves the color alone
//! - `r` clears both, and the cleared state is tagged with
//!   [`StyleFlags::RESET`]
//!
//! Every visible character of the input lands in exactly one span, so the
//! span texts concatenate back to the code-stripped MOTD.

mod codes;

pub use codes::{Color, StyleFlags};

/// Marker character introducing a formatting code
pub const SECTION_SIGN: char = '§';

/// A contiguous run of text with one effective color and style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    /// Visible text of the span, formatting codes stripped
    pub text: String,
    /// Effective color, `None` meaning the default is inherited
    pub color: Option<Color>,
    /// Effective style effects
    pub style: StyleFlags,
}

/// An ordered sequence of [`StyledSpan`] covering a whole MOTD
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    spans: Vec<StyledSpan>,
}

impl StyledText {
    /// Get the spans in display order
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Number of spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the rendered text is empty
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Concatenate the span texts back into the code-stripped source
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a StyledText {
    type Item = &'a StyledSpan;
    type IntoIter = std::slice::Iter<'a, StyledSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Render a raw MOTD into styled spans
pub fn render(raw: &str) -> StyledText {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut color: Option<Color> = None;
    let mut style = StyleFlags::empty();

    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != SECTION_SIGN {
            text.push(ch);
            continue;
        }
        let Some(&code) = chars.peek() else {
            // Trailing lone section sign, keep it as text
            text.push(ch);
            break;
        };
        if let Some(next_color) = Color::from_code(code) {
            chars.next();
            flush(&mut spans, &mut text, color, style);
            color = Some(next_color);
            // A color after a reset starts a fresh region
            style.remove(StyleFlags::RESET);
        } else if let Some(next_style) = StyleFlags::from_code(code) {
            chars.next();
            flush(&mut spans, &mut text, color, style);
            if next_style.contains(StyleFlags::RESET) {
                color = None;
            }
            style = next_style;
        } else {
            // Unrecognized code: the section sign stays literal and the
            // following character is re-examined, so `§§6` still starts a
            // color region
            text.push(ch);
        }
    }
    flush(&mut spans, &mut text, color, style);

    StyledText { spans }
}

/// Cut the accumulated text into a span, skipping empty runs
fn flush(spans: &mut Vec<StyledSpan>, text: &mut String, color: Option<Color>, style: StyleFlags) {
    if text.is_empty() {
        return;
    }
    spans.push(StyledSpan {
        text: std::mem::take(text),
        color,
        style,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(text: &str, color: Option<Color>, style: StyleFlags) -> StyledSpan {
        StyledSpan {
            text: text.to_string(),
            color,
            style,
        }
    }

    #[test]
    fn plain_motd_is_one_default_span() {
        let styled = render("Plain server");
        assert_eq!(
            styled.spans(),
            &[span("Plain server", None, StyleFlags::empty())]
        );
    }

    #[test]
    fn empty_input_renders_to_no_spans() {
        assert!(render("").is_empty());
    }

    #[test]
    fn color_style_and_reset_ordering() {
        let styled = render("§6Hello §lWorld§r!");
        assert_eq!(
            styled.spans(),
            &[
                span("Hello ", Some(Color::Gold), StyleFlags::empty()),
                span("World", Some(Color::Gold), StyleFlags::BOLD),
                span("!", None, StyleFlags::RESET),
            ]
        );
        assert_eq!(styled.spans()[0].color.unwrap().hex(), "#FFAA00");
    }

    #[test]
    fn color_change_does_not_end_a_style_region() {
        let styled = render("§lBold §cand red");
        assert_eq!(
            styled.spans(),
            &[
                span("Bold ", None, StyleFlags::BOLD),
                span("and red", Some(Color::Red), StyleFlags::BOLD),
            ]
        );
    }

    #[test]
    fn style_code_replaces_the_active_style() {
        let styled = render("§lbold§nunderlined");
        assert_eq!(
            styled.spans(),
            &[
                span("bold", None, StyleFlags::BOLD),
                span("underlined", None, StyleFlags::UNDERLINE),
            ]
        );
    }

    #[test]
    fn marker_only_input_renders_to_no_spans() {
        assert!(render("§6§l§r").is_empty());
    }

    #[test]
    fn adjacent_markers_produce_no_empty_spans() {
        let styled = render("§6§lGold bold");
        assert_eq!(
            styled.spans(),
            &[span("Gold bold", Some(Color::Gold), StyleFlags::BOLD)]
        );
    }

    #[test]
    fn unknown_codes_stay_literal() {
        let styled = render("§zLiteral");
        assert_eq!(
            styled.spans(),
            &[span("§zLiteral", None, StyleFlags::empty())]
        );
    }

    #[test]
    fn doubled_section_sign_keeps_one_literal() {
        let styled = render("§§6gold");
        assert_eq!(
            styled.spans(),
            &[
                span("§", None, StyleFlags::empty()),
                span("gold", Some(Color::Gold), StyleFlags::empty()),
            ]
        );
    }

    #[test]
    fn trailing_section_sign_is_literal() {
        let styled = render("dangling§");
        assert_eq!(
            styled.spans(),
            &[span("dangling§", None, StyleFlags::empty())]
        );
    }

    #[test]
    fn uppercase_codes_work() {
        let styled = render("§AGreen §LBold");
        assert_eq!(
            styled.spans(),
            &[
                span("Green ", Some(Color::Green), StyleFlags::empty()),
                span("Bold", Some(Color::Green), StyleFlags::BOLD),
            ]
        );
    }

    #[test]
    fn obfuscated_region_has_no_style_effect() {
        let styled = render("§kscrambled");
        assert_eq!(
            styled.spans(),
            &[span("scrambled", None, StyleFlags::empty())]
        );
    }

    #[test]
    fn color_after_reset_drops_the_reset_flag() {
        let styled = render("§ca§rb§9c");
        assert_eq!(
            styled.spans(),
            &[
                span("a", Some(Color::Red), StyleFlags::empty()),
                span("b", None, StyleFlags::RESET),
                span("c", Some(Color::Blue), StyleFlags::empty()),
            ]
        );
    }

    #[test]
    fn span_texts_cover_the_stripped_source() {
        let raw = "§6Gold §l§nfancy§r plain §zodd§ tail§";
        let styled = render(raw);
        let mut stripped = String::new();
        let mut chars = raw.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == SECTION_SIGN {
                if let Some(&code) = chars.peek() {
                    if Color::from_code(code).is_some() || StyleFlags::from_code(code).is_some() {
                        chars.next();
                        continue;
                    }
                }
            }
            stripped.push(ch);
        }
        assert_eq!(styled.plain_text(), stripped);
    }

    #[test]
    fn rendering_is_idempotent_on_plain_output() {
        let first = render("§6Hello §lWorld§r!");
        let plain = first.plain_text();
        assert_eq!(plain, "Hello World!");

        let second = render(&plain);
        assert_eq!(second.spans(), &[span(&plain, None, StyleFlags::empty())]);
    }
}
