//! 主页渲染：搜索栏 + 地区筛选 + 国家列表

use countries_core::utils::format::format_population;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染主页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 搜索 + 地区
            Constraint::Min(1),    // 列表
        ])
        .split(area);

    render_filters(app, frame, chunks[0]);

    match app.collection() {
        None => {
            let loading = Paragraph::new(t().common.loading).style(Styles::muted());
            frame.render_widget(loading, chunks[1]);
        }
        Some(all) => render_list(app, all, frame, chunks[1]),
    }
}

fn render_filters(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().home;

    let query = if app.home.query.is_empty() {
        Span::styled(texts.search_placeholder, Styles::muted())
    } else {
        Span::styled(format!("{}▏", app.home.query), Styles::value())
    };
    let region = app.home.region.as_deref().unwrap_or(texts.all_regions);

    let line = Line::from(vec![
        Span::styled(format!("{}: ", texts.search), Styles::label()),
        query,
        Span::raw("    "),
        Span::styled(format!("{}: ", texts.region), Styles::label()),
        Span::styled(region.to_string(), Styles::value()),
    ]);

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_list(
    app: &App,
    all: &[countries_core::CountryRecord],
    frame: &mut Frame,
    area: Rect,
) {
    let texts = &t().home;

    if all.is_empty() {
        frame.render_widget(Paragraph::new(texts.no_data).style(Styles::muted()), area);
        return;
    }

    let visible = app.home.visible(all);
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(texts.no_results).style(Styles::muted()),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|country| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<32}", country.name), Styles::value()),
                Span::styled(format!("{:<12}", country.region), Styles::muted()),
                Span::styled(format_population(country.population), Styles::muted()),
            ]))
        })
        .collect();

    let title = format!(" {} {} ", visible.len(), texts.countries);
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::TOP)
                .border_style(Styles::border()),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.home.selected.min(visible.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use countries_core::{CountryRecord, NavState, Route};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::model::App;
    use crate::view::render;

    fn country(name: &str, region: &str, population: u64) -> CountryRecord {
        CountryRecord {
            region: region.to_string(),
            population,
            ..CountryRecord::named(name)
        }
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn lists_countries_with_formatted_population() {
        let mut app = App::new(Route::Home, NavState::direct());
        app.set_countries(vec![
            country("Germany", "Europe", 83_240_525),
            country("Japan", "Asia", 125_836_021),
        ]);

        let screen = draw(&app);
        assert!(screen.contains("Germany"));
        assert!(screen.contains("83,240,525"));
        assert!(screen.contains("Japan"));
    }

    #[test]
    fn shows_loading_before_collection_arrives() {
        let app = App::new(Route::Home, NavState::direct());
        assert!(draw(&app).contains("Loading..."));
    }
}
