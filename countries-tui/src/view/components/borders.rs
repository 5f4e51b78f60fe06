//! 邻国徽章列表
//!
//! 每个邻国渲染为一个 " 名称 " 徽章，按可用宽度自动换行；
//! 选中的徽章高亮，Enter 打开该国详情页。

use countries_core::BorderLink;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::view::theme::Styles;

/// 徽章之间的间距
const GAP: &str = "  ";

/// 将徽章排布成若干行
pub fn badge_lines(links: &[BorderLink], selected: Option<usize>, width: u16) -> Vec<Line<'static>> {
    if links.is_empty() {
        return vec![Line::styled(t().country.no_borders, Styles::muted())];
    }

    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for (i, link) in links.iter().enumerate() {
        let text = format!(" {} ", link.target());
        let badge_width = text.width();
        let needed = if spans.is_empty() {
            badge_width
        } else {
            GAP.width() + badge_width
        };

        if !spans.is_empty() && used + needed > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(GAP));
            used += GAP.width();
        }
        spans.push(Span::styled(text, Styles::badge(selected == Some(i))));
        used += badge_width;
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str) -> BorderLink {
        BorderLink {
            id: name.to_uppercase(),
            name: Some(name.to_string()),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn badges_wrap_by_width() {
        let links = vec![link("France"), link("Austria"), link("Poland")];
        // " France " = 8, "  " + " Austria " = 11 → 19, 第三个放不下
        let lines = badge_lines(&links, None, 20);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), " France    Austria ");
        assert_eq!(line_text(&lines[1]), " Poland ");
    }

    #[test]
    fn single_row_when_wide() {
        let links = vec![link("France"), link("Austria")];
        assert_eq!(badge_lines(&links, Some(1), 80).len(), 1);
    }

    #[test]
    fn unresolved_badge_shows_identifier() {
        let links = vec![BorderLink {
            id: "XKX".to_string(),
            name: None,
        }];
        assert_eq!(line_text(&badge_lines(&links, None, 80)[0]), " XKX ");
    }
}
