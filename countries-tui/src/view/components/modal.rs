//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};

/// 渲染当前弹窗
pub fn render(app: &App, frame: &mut Frame) {
    match &app.modal.active {
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

/// 计算居中区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn entry(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.help;
    let keys = &texts.hints.keys;

    let area = centered_rect(64, 24, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        section(help.global),
        entry(keys.quit, help.actions.quit),
        entry("?/F1/Alt+h", help.actions.help),
        entry(keys.reload, help.actions.reload),
        entry(keys.language, help.actions.language),
        Line::from(""),
        section(help.home),
        entry("a-z", help.actions.type_to_search),
        entry(keys.arrows_ud, help.actions.move_selection),
        entry(keys.tab, help.actions.cycle_region),
        entry(keys.enter, help.actions.open_country),
        entry(keys.esc, help.actions.clear_search),
        Line::from(""),
        section(help.country),
        entry(keys.arrows_lr, help.actions.select_neighbor),
        entry(keys.enter, help.actions.open_neighbor),
        entry("Esc/⌫", help.actions.back),
        Line::from(""),
        Line::styled(
            format!("{} {}", keys.esc, texts.common.close),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
