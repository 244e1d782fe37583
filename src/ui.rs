//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`: the
//! navigation header, either the genre card grid or the paginated library
//! table, the player bar and the key help footer.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, Cell, Gauge, List, ListItem, ListState, Padding, Paragraph, Row, Table,
        TableState, Wrap,
    },
};

use crate::app::{App, View};
use crate::config::UiSettings;
use crate::library::SongId;
use crate::views::{CardRow, GenreCard, card_rows};

const ACCENT: Color = Color::Magenta;

const CATALOG_CONTROLS: &[(&str, &str)] = &[
    ("←/→", "card"),
    ("j/k", "row"),
    ("enter", "activate"),
    ("x", "expand"),
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("+/-", "volume"),
    ("tab", "library"),
    ("q", "quit"),
];

const LIBRARY_CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("gg/G", "top/bottom"),
    ("enter", "play/pause row"),
    ("/", "search"),
    ("[/]", "page"),
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("+/-", "volume"),
    ("tab", "genres"),
    ("q", "quit"),
];

/// Playhead facts read from the media element once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NowPlaying {
    pub elapsed: Duration,
    pub buffering: bool,
}

fn controls_text(view: View) -> String {
    let controls = match view {
        View::Catalog => CATALOG_CONTROLS,
        View::Library => LIBRARY_CONTROLS,
    };
    controls
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `m:ss`, matching how song lengths are shown.
fn format_mss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Glyph for a hovered song: pause when that song is playing, else play.
fn hover_glyph(app: &App, id: SongId) -> &'static str {
    if app.playback.is_playing_song(id) {
        "⏸"
    } else {
        "▶"
    }
}

fn left_padded() -> Padding {
    Padding {
        left: 1,
        right: 1,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, now: &NowPlaying, ui_settings: &UiSettings) {
    let player_height = if app.current_song().is_some() { 4 } else { 0 };
    let footer_height = if ui_settings.show_footer { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(player_height),
        Constraint::Length(footer_height),
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app, ui_settings);
    match app.view {
        View::Catalog => draw_catalog(frame, chunks[1], app, ui_settings),
        View::Library => draw_library(frame, chunks[1], app, ui_settings),
    }
    if player_height > 0 {
        draw_player_bar(frame, chunks[2], app, now, ui_settings);
    }
    if footer_height > 0 {
        let footer = Paragraph::new(controls_text(app.view))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" controls ")
                    .padding(left_padded()),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[3]);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, ui_settings: &UiSettings) {
    let tab = |label: &'static str, active: bool| {
        let span = Span::raw(format!(" {label} "));
        if active {
            span.fg(ACCENT).add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            span.dim()
        }
    };

    let brand = Line::from(vec![
        Span::raw("♪ ").fg(ACCENT),
        Span::raw(ui_settings.header_text.clone()).bold(),
    ]);
    let nav = Line::from(vec![
        tab("Genres", app.view == View::Catalog),
        Span::raw(" "),
        tab("Library", app.view == View::Library),
    ])
    .alignment(Alignment::Right);

    let block = Block::bordered().padding(left_padded());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let [brand_area, nav_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]).areas(inner);
    frame.render_widget(Paragraph::new(brand), brand_area);
    frame.render_widget(Paragraph::new(nav), nav_area);
}

fn draw_catalog(frame: &mut Frame, area: Rect, app: &App, ui_settings: &UiSettings) {
    let [tagline_area, grid_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

    let tagline = Paragraph::new(vec![
        Line::from(ui_settings.tagline.clone()).bold().fg(ACCENT),
        Line::from("Pick a genre to preview its songs").dim(),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(tagline, tagline_area);

    let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(grid_area);
    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(*row_area);
        for (c, card_area) in cols.iter().enumerate() {
            let index = r * 3 + c;
            if let Some(card) = GenreCard::ALL.get(index) {
                draw_card(frame, *card_area, app, index, card);
            }
        }
    }
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App, index: usize, card: &GenreCard) {
    let focused = app.catalog.focused_card == index;
    let expanded = app.catalog.is_expanded(index);
    let count = app.library.genre_count(card.genre);

    let border = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let block = Block::bordered()
        .border_style(border)
        .title(format!(" {} {} ", card.icon, card.title))
        .title_bottom(Line::from(format!(" {count} songs ")).right_aligned().dim())
        .padding(left_padded());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [about_area, rows_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
    let about = Paragraph::new(vec![
        Line::from(card.description),
        Line::from(card.image_url).dim().italic(),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(about, about_area);

    let rows = card_rows(&app.library, card.genre, expanded);
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let hovered = focused && app.catalog.focused_row == i;
            match row {
                CardRow::Toggle => {
                    let label = if expanded { "▾ Hide Songs" } else { "▸ View Songs" };
                    ListItem::new(Line::from(label).fg(ACCENT))
                }
                CardRow::Song(id) => {
                    let Some(song) = app.library.get(*id) else {
                        return ListItem::new("");
                    };
                    let marker = if hovered {
                        hover_glyph(app, song.id)
                    } else if app.playback.current() == Some(song.id) {
                        "♪"
                    } else {
                        " "
                    };
                    let mut line = Line::from(vec![
                        Span::raw(format!("{marker} ")),
                        Span::raw(song.title.clone()),
                        Span::raw(format!(" - {}", song.artist)).dim(),
                        Span::raw(format!("  {}", song.length)).dim(),
                    ]);
                    if app.playback.current() == Some(song.id) {
                        line = line.fg(ACCENT);
                    }
                    ListItem::new(line)
                }
                CardRow::ViewAll => {
                    ListItem::new(Line::from(format!("View all {count} songs →")).fg(ACCENT))
                }
            }
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if focused {
        state.select(Some(app.catalog.focused_row.min(rows.len().saturating_sub(1))));
    }
    frame.render_stateful_widget(list, rows_area, &mut state);
}

fn draw_library(frame: &mut Frame, area: Rect, app: &App, ui_settings: &UiSettings) {
    let [search_area, table_area, pages_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let browser = &app.browser;
    let term = browser.search_term();
    let search_line = if term.is_empty() && !browser.searching {
        Line::from("Search songs, artists, or genres...").dim()
    } else {
        Line::from(term.to_string())
    };
    let search_border = if browser.searching {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };
    let search_block = Block::bordered()
        .border_style(search_border)
        .title(" search [/] ")
        .padding(left_padded());
    let search_inner = search_block.inner(search_area);
    frame.render_widget(Paragraph::new(search_line).block(search_block), search_area);
    if browser.searching {
        let x = search_inner.x + (term.chars().count() as u16).min(search_inner.width);
        frame.set_cursor_position((x, search_inner.y));
    }

    let page = browser.page(&app.library);
    let table_block = Block::bordered().title(format!(
        " Your Library ({} songs) ",
        page.filtered_len
    ));

    if page.rows.is_empty() {
        let empty = Paragraph::new(format!("No songs match \"{term}\""))
            .alignment(Alignment::Center)
            .dim()
            .block(table_block);
        frame.render_widget(empty, table_area);
    } else {
        let rows: Vec<Row> = page
            .rows
            .iter()
            .enumerate()
            .filter_map(|(i, &pos)| app.library.at(pos).map(|song| (i, song)))
            .map(|(i, song)| {
                let number = if i == browser.cursor {
                    hover_glyph(app, song.id).to_string()
                } else {
                    page.row_number(i).to_string()
                };
                let title = Text::from(vec![
                    Line::from(song.title.clone()).bold(),
                    Line::from(format!(
                        "{}{}{}",
                        song.artist,
                        ui_settings.artist_genre_separator,
                        song.genre.as_str()
                    ))
                    .dim(),
                ]);
                let row = Row::new(vec![
                    Cell::from(number),
                    Cell::from(title),
                    Cell::from(song.length.to_string()),
                ])
                .height(2);
                if app.playback.current() == Some(song.id) {
                    row.fg(ACCENT)
                } else {
                    row
                }
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Min(10),
                Constraint::Length(9),
            ],
        )
        .header(Row::new(["#", "TITLE", "DURATION"]).dim().bottom_margin(1))
        .block(table_block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default();
        state.select(Some(browser.cursor.min(page.rows.len() - 1)));
        frame.render_stateful_widget(table, table_area, &mut state);
    }

    let nav = |label: &'static str, enabled: bool| {
        if enabled {
            Span::raw(label).fg(ACCENT)
        } else {
            Span::raw(label).dim()
        }
    };
    let pages = Line::from(vec![
        nav("◀ Previous", browser.has_prev()),
        Span::raw(format!(
            "   Page {} of {}   ",
            page.number,
            page.display_total()
        )),
        nav("Next ▶", browser.has_next(&app.library)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(pages), pages_area);
}

fn draw_player_bar(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    now: &NowPlaying,
    ui_settings: &UiSettings,
) {
    let Some(song) = app.current_song() else {
        return;
    };

    let block = Block::bordered().title(" now playing ").padding(left_padded());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [info_area, transport_area, volume_area] = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(35),
        Constraint::Percentage(25),
    ])
    .areas(inner);

    let info = Paragraph::new(vec![
        Line::from(song.title.clone()).bold(),
        Line::from(format!(
            "{}{}{}",
            song.artist,
            ui_settings.artist_genre_separator,
            song.genre.display_name()
        ))
        .dim(),
    ]);
    frame.render_widget(info, info_area);

    let play_glyph = if app.playback.is_playing() { "⏸" } else { "▶" };
    let mut status = vec![Span::raw(format!(
        "{} / {}",
        format_mss(now.elapsed),
        song.length
    ))];
    if let Some(msg) = &app.status {
        status.push(Span::raw(format!("  {msg}")).fg(Color::Red));
    } else if now.buffering {
        status.push(Span::raw("  buffering...").dim());
    }
    let transport = Paragraph::new(vec![
        Line::from(format!("⏮   {play_glyph}   ⏭")).bold(),
        Line::from(status),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(transport, transport_area);

    let volume = app.playback.volume();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ACCENT))
        .ratio(f64::from(volume).clamp(0.0, 1.0))
        .label(format!("vol {:.0}%", volume * 100.0));
    let [gauge_area, _] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(volume_area);
    frame.render_widget(gauge, gauge_area);
}
