//! Screen rendering functions for the TUI.

use crate::app::{App, MountedScreen};
use ratatui::{
    layout::Margin,
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use roster_core::card::DetailCard;
use roster_core::layout::AdaptiveLayout;
use roster_core::navigation::Route;
use roster_core::screen::{DetailScreen, RosterScreen};
use roster_core::theme::Rgb;
use std::rc::Rc;

/// Prompt above the roster.
pub const ROSTER_PROMPT: &str = "Escolha seu personagem abaixo";

/// Text next to the loading spinner.
pub const LOADING_TEXT: &str = "Carregando...";

const BANNER: &str = "DEMON SLAYER";
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Draw the whole frame for the current route.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = frame_chunks(frame.size());

    let route = app.current_route();
    draw_header(frame, chunks[0], route, app.can_go_back());

    match app.current_screen() {
        Some(MountedScreen::Roster(screen)) => {
            draw_roster(frame, chunks[1], screen, app.layout(), app.tick())
        }
        Some(MountedScreen::Details(screen)) => {
            draw_details(frame, chunks[1], screen, app.layout(), app.tick())
        }
        None => {}
    }

    draw_footer(frame, chunks[2], route);
}

/// Header, content and footer rows.
fn frame_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area)
}

/// Draw header
fn draw_header(frame: &mut Frame, area: Rect, route: Route, can_go_back: bool) {
    let title = if can_go_back {
        format!(" ← {} ", route.title())
    } else {
        format!(" {} ", route.title())
    };
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Draw footer with keybindings
fn draw_footer(frame: &mut Frame, area: Rect, route: Route) {
    let footer_text = match route {
        Route::Roster => " [Up/Down]Navigate | [Enter]Details | [q]Quit ",
        Route::Details { .. } => " [Up/Down]Scroll | [Esc]Back | [q]Quit ",
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Content area shrunk by the layout paddings.
fn padded(area: Rect, layout: &AdaptiveLayout) -> Rect {
    area.inner(&Margin {
        horizontal: layout.horizontal_padding,
        vertical: layout.vertical_padding,
    })
}

/// Draw the loading indicator centered in `area`.
fn draw_loading(frame: &mut Frame, area: Rect, tick: usize, style: Style) {
    let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    let indicator = Paragraph::new(format!("{} {}", spinner, LOADING_TEXT))
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(indicator, rows[1]);
}

/// Draw the roster screen
pub fn draw_roster(
    frame: &mut Frame,
    area: Rect,
    screen: &RosterScreen,
    layout: &AdaptiveLayout,
    tick: usize,
) {
    let area = padded(area, layout);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout.banner_height),
            Constraint::Length(1), // Prompt
            Constraint::Min(0),    // List
        ])
        .split(area);

    draw_banner(frame, chunks[0], layout.compact);

    let prompt = Paragraph::new(ROSTER_PROMPT).alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[1]);

    if screen.state().is_loading() {
        draw_loading(frame, chunks[2], tick, Style::default());
        return;
    }

    let items: Vec<ListItem> = screen
        .roster()
        .iter()
        .map(|character| {
            let mut spans = vec![
                Span::styled("▣ ", Style::default().fg(Color::Red)),
                Span::styled(
                    character.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];
            if !layout.compact {
                spans.push(Span::styled(
                    format!("  {}", character.image_url),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");

    let mut state = ListState::default().with_selected(Some(screen.selected_index()));
    frame.render_stateful_widget(list, chunks[2], &mut state);
}

/// Draw the logo banner, a single line in compact viewports.
fn draw_banner(frame: &mut Frame, area: Rect, compact: bool) {
    let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    if compact {
        frame.render_widget(
            Paragraph::new(BANNER).alignment(Alignment::Center).style(style),
            area,
        );
        return;
    }
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(BANNER, style)),
        Line::from(Span::styled(
            "Kimetsu no Yaiba",
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).padding(Padding::zero()));
    frame.render_widget(banner, area);
}

/// Draw the detail screen
pub fn draw_details(
    frame: &mut Frame,
    area: Rect,
    screen: &DetailScreen,
    layout: &AdaptiveLayout,
    tick: usize,
) {
    let Some(card) = screen.card() else {
        draw_loading(frame, area, tick, Style::default());
        return;
    };

    let palette = card.theme.palette();
    let background = Block::default().style(Style::default().bg(rgb(palette.background)));
    frame.render_widget(background, area);

    let chunks = detail_chunks(area, layout);
    draw_portrait(frame, chunks[0], card);
    draw_card(frame, chunks[1], card, screen.scroll());
}

/// Portrait and card areas: side by side in landscape, stacked otherwise.
fn detail_chunks(area: Rect, layout: &AdaptiveLayout) -> Rc<[Rect]> {
    let area = padded(area, layout);
    if layout.is_landscape() {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(layout.portrait_width), Constraint::Min(0)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(layout.portrait_height), Constraint::Min(0)])
            .split(area)
    }
}

/// Image panel: the portrait URL and the theme backdrop.
fn draw_portrait(frame: &mut Frame, area: Rect, card: &DetailCard) {
    let accent = rgb(card.theme.palette().accent);
    let portrait = Paragraph::new(vec![
        Line::from(Span::styled(
            card.image_url.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            card.theme.background_asset(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(" Retrato "),
    );
    frame.render_widget(portrait, area);
}

/// Lines of the character card.
pub fn card_lines(card: &DetailCard) -> Vec<Line<'static>> {
    let highlight = Style::default()
        .fg(rgb(card.theme.palette().highlight))
        .add_modifier(Modifier::BOLD);

    let mut badges = Vec::new();
    for (i, badge) in card.badges.iter().enumerate() {
        if i > 0 {
            badges.push(Span::raw("   "));
        }
        badges.push(Span::raw(format!("{}: ", badge.label)));
        badges.push(Span::styled(badge.value.clone(), highlight));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            card.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(badges).alignment(Alignment::Center),
        Line::from(""),
    ];

    if let Some(description) = &card.description {
        lines.extend(description.split('\n').map(|l| Line::from(l.to_string())));
    }

    if let Some(quote) = &card.quote {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {} ", quote),
            Style::default()
                .fg(Color::White)
                .bg(Color::Black)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

// Borders on every side plus one column of horizontal padding.
const CARD_CHROME_WIDTH: u16 = 4;
const CARD_CHROME_HEIGHT: u16 = 2;

/// Draw the character card
fn draw_card(frame: &mut Frame, area: Rect, card: &DetailCard, scroll: u16) {
    let accent = rgb(card.theme.palette().accent);
    let content = Paragraph::new(card_lines(card))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(content, area);
}

/// Rows `text` takes once word-wrapped at `width` columns.
fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }
    let mut rows = 1;
    let mut used = 0;
    for word in text.split_inclusive(' ') {
        let len = word.trim_end_matches(' ').chars().count();
        if used > 0 && used + len > width {
            rows += 1;
            used = 0;
        }
        if len > width {
            // a word wider than the row is broken across rows
            rows += (len - 1) / width;
            used = (len - 1) % width + 1;
        } else {
            used += len;
        }
        used += word.chars().count() - len;
    }
    rows
}

/// Largest scroll offset that still keeps the card's last row on screen.
///
/// Mirrors the geometry of [`draw`] for a terminal of the layout's viewport.
pub fn card_scroll_limit(card: &DetailCard, layout: &AdaptiveLayout) -> u16 {
    let viewport = Rect::new(0, 0, layout.viewport.width, layout.viewport.height);
    let area = detail_chunks(frame_chunks(viewport)[1], layout)[1];
    let width = usize::from(area.width.saturating_sub(CARD_CHROME_WIDTH));
    let height = usize::from(area.height.saturating_sub(CARD_CHROME_HEIGHT));

    let rows: usize = card_lines(card)
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            wrapped_line_count(&text, width)
        })
        .sum();
    u16::try_from(rows.saturating_sub(height)).unwrap_or(u16::MAX)
}
