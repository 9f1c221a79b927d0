//! Render lines of text as a box-drawn tree.
//!
//! See [`render_lines`] for more details.

/// The box-drawing connector placed in front of a rendered line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Edge {
    Start,
    SubtreeStart,
    Item,
    End,
}

impl Edge {
    pub(crate) fn repr(&self) -> &'static str {
        match self {
            Self::Start => "┌",
            Self::SubtreeStart => "┬",
            Self::Item => "├",
            Self::End => "└",
        }
    }
}

const SPACER: &str = "─";

/// Renders an ordered sequence of lines as a tree.
///
/// The leading whitespace of the first line is taken as the indent shared by
/// every rendered line, and is stripped from any line that starts with it.
/// The indent is drawn as one space per whitespace character, so tabs do not
/// reach the output.
/// The first line opens the tree with `┌`, or with `┬` if `is_subtree` is
/// set. Interior lines use `├`. The final line uses `└` if `is_last` is set;
/// otherwise it uses `├` and a closing `└─` line is appended to show that
/// more siblings follow at the same depth.
///
/// Whitespace-only lines are dropped, and an empty input renders to an empty
/// string. A single line is always rendered as `┬ <line>`.
///
/// # Examples
///
/// ```
/// use metalog::formatter::tree::render_lines;
///
/// assert_eq!(render_lines(&["root"], false, true), "┬ root");
/// assert_eq!(
///     render_lines(&["  a", "  b", "  c"], false, true),
///     "  ┌ a\n  ├ b\n  └ c",
/// );
/// assert_eq!(render_lines(&["a", "b"], true, false), "┬ a\n├ b\n└─");
/// ```
pub fn render_lines<S: AsRef<str>>(lines: &[S], is_subtree: bool, is_last: bool) -> String {
    let lines: Vec<&str> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty())
        .collect();

    let (first, rest) = match lines.split_first() {
        None => return String::new(),
        Some((first, [])) => return format!("{} {}", Edge::SubtreeStart.repr(), first),
        Some(split) => split,
    };

    let content = first.trim_start();
    let raw_indent = &first[..first.len() - content.len()];
    let indent = " ".repeat(raw_indent.chars().count());

    let mut writer = String::with_capacity(lines.iter().map(|l| l.len() + 8).sum());

    let start = if is_subtree {
        Edge::SubtreeStart
    } else {
        Edge::Start
    };
    push_line(&mut writer, &indent, start, content);

    if let Some((last, interior)) = rest.split_last() {
        for line in interior {
            writer.push('\n');
            push_line(&mut writer, &indent, Edge::Item, strip_indent(line, raw_indent));
        }

        writer.push('\n');
        if is_last {
            push_line(&mut writer, &indent, Edge::End, strip_indent(last, raw_indent));
        } else {
            push_line(&mut writer, &indent, Edge::Item, strip_indent(last, raw_indent));
            writer.push('\n');
            writer.push_str(&indent);
            writer.push_str(Edge::End.repr());
            writer.push_str(SPACER);
        }
    }

    writer
}

/// Splits `text` on line breaks and renders the non-blank lines with
/// [`render_lines`].
///
/// # Examples
///
/// ```
/// use metalog::formatter::tree::render_text;
///
/// assert_eq!(render_text("first\r\n\r\nsecond", false, true), "┌ first\n└ second");
/// assert_eq!(render_text("", false, true), "");
/// ```
pub fn render_text(text: &str, is_subtree: bool, is_last: bool) -> String {
    let lines: Vec<&str> = text.lines().collect();
    render_lines(&lines, is_subtree, is_last)
}

fn push_line(writer: &mut String, indent: &str, edge: Edge, content: &str) {
    writer.push_str(indent);
    writer.push_str(edge.repr());
    writer.push(' ');
    writer.push_str(content);
}

fn strip_indent<'a>(line: &'a str, indent: &str) -> &'a str {
    line.strip_prefix(indent).unwrap_or(line)
}
