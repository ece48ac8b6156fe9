//! Text renderer for a list of [`ListItem`]s.
//!
//! Produces one line per render slot:
//!
//! ```text
//! ⠿ Beta                         ✕
//!   ╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌
//! ⠿ Gamma                        ✕
//! ⠿ Alpha                        ✕   ← floating row, highlighted
//! ```
//!
//! With a theme the output carries ANSI 24-bit color; without one it is
//! plain text.

use super::item::ListItem;
use super::theme::Theme;
use super::viewmodel::RenderSlot;
use crate::app::SortableList;
use std::fmt::Write;

const GRAB_GLYPH: char = '⠿';
const DELETE_GLYPH: char = '✕';
const PLACEHOLDER_GLYPH: char = '╌';
const EMPTY_MESSAGE: &str = "No items";

/// Renders `list` as `cols`-wide lines, colored when `theme` is given.
#[must_use]
pub fn render(list: &SortableList<ListItem>, theme: Option<&Theme>, cols: usize) -> String {
    let mut out = String::new();
    let rendered = list.render_order();

    if rendered.is_empty() {
        paint(&mut out, theme.map(|t| t.colors.empty_state_fg.as_str()), EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    let label_width = cols.saturating_sub(4);
    for slot in rendered {
        match slot {
            RenderSlot::Item(item) => render_row(&mut out, item, theme, label_width, false),
            RenderSlot::Placeholder { .. } => {
                let line: String = std::iter::repeat(PLACEHOLDER_GLYPH)
                    .take(cols.saturating_sub(2))
                    .collect();
                out.push_str("  ");
                paint(&mut out, theme.map(|t| t.colors.placeholder.as_str()), &line);
            }
            RenderSlot::Floating { item, .. } => {
                render_row(&mut out, item, theme, label_width, true);
            }
        }
        out.push('\n');
    }
    out
}

fn render_row(
    out: &mut String,
    item: &ListItem,
    theme: Option<&Theme>,
    label_width: usize,
    dragging: bool,
) {
    let label = truncate(item.label(), label_width);
    let label = format!("{label:<label_width$}");

    let Some(theme) = theme else {
        let _ = write!(out, "{GRAB_GLYPH} {label} {DELETE_GLYPH}");
        return;
    };

    if dragging {
        out.push_str(Theme::bold());
        out.push_str(&Theme::bg(&theme.colors.dragging_bg));
        out.push_str(&Theme::fg(&theme.colors.dragging_fg));
        let _ = write!(out, "{GRAB_GLYPH} {label} {DELETE_GLYPH}");
        out.push_str(Theme::reset());
        return;
    }

    paint(out, Some(&theme.colors.handle), &GRAB_GLYPH.to_string());
    out.push(' ');
    paint(out, Some(&theme.colors.text), &label);
    out.push(' ');
    paint(out, Some(&theme.colors.delete), &DELETE_GLYPH.to_string());
}

fn paint(out: &mut String, fg: Option<&str>, text: &str) {
    match fg {
        Some(fg) => {
            out.push_str(&Theme::fg(fg));
            out.push_str(text);
            out.push_str(Theme::reset());
        }
        None => out.push_str(text),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(1);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, NullSurface};
    use crate::domain::Point;
    use crate::ui::StackLayout;
    use std::rc::Rc;

    fn list() -> SortableList<ListItem> {
        let items = vec![
            Rc::new(ListItem::new("a", "Alpha", 50.0)),
            Rc::new(ListItem::new("b", "Beta", 50.0)),
        ];
        SortableList::new(items, Rc::new(NullSurface))
    }

    #[test]
    fn plain_rows_have_handles() {
        let out = render(&list(), None, 20);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "⠿ Alpha            ✕");
    }

    #[test]
    fn dragging_shows_placeholder_and_floating_row_last() {
        let mut list = list();
        StackLayout::new(300.0).reflow(&list);
        handle_event(&mut list, &Event::PointerDown(Point::new(5.0, 10.0)));

        let out = render(&list, None, 20);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  ╌"));
        assert!(lines[1].contains("Beta"));
        assert!(lines[2].contains("Alpha"));
    }

    #[test]
    fn themed_floating_row_is_bold_and_reset() {
        let mut list = list();
        StackLayout::new(300.0).reflow(&list);
        handle_event(&mut list, &Event::PointerDown(Point::new(5.0, 10.0)));

        let out = render(&list, Some(&Theme::default()), 20);
        let floating = out.lines().last().unwrap();
        assert!(floating.starts_with(Theme::bold()));
        assert!(floating.ends_with(Theme::reset()));
        assert!(floating.contains("Alpha"));
    }

    #[test]
    fn themed_output_is_colored() {
        let theme = Theme::default();
        let out = render(&list(), Some(&theme), 20);
        assert!(out.contains("\u{1b}[38;2;"));
        assert!(out.contains("Alpha"));
    }

    #[test]
    fn empty_list_says_so() {
        let empty: SortableList<ListItem> = SortableList::new(vec![], Rc::new(NullSurface));
        assert_eq!(render(&empty, None, 20), "No items\n");
    }

    #[test]
    fn long_labels_are_truncated() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        assert_eq!(truncate("abc", 5), "abc");
    }
}
