//! 国家详情页渲染
//!
//! 三种状态：
//! - Loading：集合仍在后台加载
//! - NotFound：显示提示和 Home 链接
//! - Found：返回按钮、国旗、名称，以及地理 / 标识 / 邻国三个分区

use countries_core::utils::format::format_population;
use countries_core::{pluralize, CountryRecord, CountryView, NormalizedView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::borders::badge_lines;
use crate::view::theme::{colors, Styles};

/// 达到该宽度时地理和标识分区并排显示
const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

/// 渲染详情页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match app.detail.view() {
        CountryView::Loading => {
            let loading = Paragraph::new(t().common.loading).style(Styles::muted());
            frame.render_widget(loading, area);
        }
        CountryView::NotFound { .. } => render_not_found(frame, area),
        CountryView::Found(record) => render_found(app, record, frame, area),
    }
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let texts = t();
    let lines = vec![
        Line::styled(
            texts.country.not_found,
            Styles::title().fg(colors().warning),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.common.home), Styles::button()),
            Span::styled(format!("  ({})", texts.hints.keys.enter), Styles::muted()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_found(app: &App, record: &CountryRecord, frame: &mut Frame, area: Rect) {
    let view = NormalizedView::from_record(record);
    let geography = geography_lines(record, &view);
    let identity = identity_lines(&view);
    let wide = area.width >= WIDE_LAYOUT_MIN_WIDTH;

    let info_height = if wide {
        geography.len().max(identity.len())
    } else {
        geography.len() + 1 + identity.len()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 返回按钮
            Constraint::Length(3), // 国旗 + 名称
            Constraint::Length(u16::try_from(info_height).unwrap_or(u16::MAX)), // 地理 / 标识
            Constraint::Length(1),
            Constraint::Min(1), // 邻国
        ])
        .split(area);

    render_header(record, frame, chunks[0], chunks[1]);

    if wide {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        frame.render_widget(Paragraph::new(geography), columns[0]);
        frame.render_widget(Paragraph::new(identity), columns[1]);
    } else {
        let mut lines = geography;
        lines.push(Line::from(""));
        lines.extend(identity);
        frame.render_widget(Paragraph::new(lines), chunks[2]);
    }

    render_borders(app, frame, chunks[4]);
}

fn render_header(record: &CountryRecord, frame: &mut Frame, back_area: Rect, area: Rect) {
    let texts = t();

    let back = Line::from(vec![
        Span::styled(format!(" ← {} ", texts.common.back), Styles::button()),
        Span::styled(format!("  ({})", texts.hints.keys.esc), Styles::muted()),
    ]);
    frame.render_widget(Paragraph::new(back), back_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", texts.country.flag), Styles::muted()),
            Span::styled(record.image_alt().to_string(), Styles::value()),
            Span::raw("  "),
            Span::styled(record.image_url.clone(), Styles::muted()),
        ]),
        Line::from(""),
        Line::styled(
            record.name.clone(),
            Styles::title().add_modifier(Modifier::UNDERLINED),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// "标签 : 值" 行
fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label} : "), Styles::label()),
        Span::styled(value.into(), Styles::value()),
    ])
}

fn geography_lines(record: &CountryRecord, view: &NormalizedView) -> Vec<Line<'static>> {
    let texts = &t().country;
    vec![
        field(
            pluralize(
                view.native_names.len(),
                texts.native_name,
                texts.native_names,
            ),
            view.native_names.join(", "),
        ),
        field(texts.population, format_population(record.population)),
        field(texts.region, record.region.clone()),
        field(texts.sub_region, record.subregion.clone()),
        field(
            pluralize(view.capitals.len(), texts.capital, texts.capitals),
            view.capitals.join(", "),
        ),
    ]
}

fn identity_lines(view: &NormalizedView) -> Vec<Line<'static>> {
    let texts = &t().country;
    vec![
        field(
            texts.top_level_domain,
            view.domain.clone().unwrap_or_default(),
        ),
        field(texts.currencies, view.currencies.join(", ")),
        field(texts.languages, view.languages.join(", ")),
    ]
}

fn render_borders(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::styled(
        format!("{} :", t().country.border_countries),
        Styles::label(),
    )];
    lines.extend(badge_lines(
        &app.detail.borders,
        Some(app.detail.selected_border),
        area.width,
    ));
    frame.render_widget(Paragraph::new(lines), area);
}
