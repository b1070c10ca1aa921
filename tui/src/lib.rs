//! TUI rendering for Maquette using ratatui.

mod format;
mod input;
mod picker;
mod theme;

pub use input::{InputPump, handle_events};
pub use picker::descriptor_from_path;
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Tabs, Wrap,
    },
};
use unicode_width::UnicodeWidthStr;

use maquette_engine::{App, DraftInput, ProfileRow};
use maquette_types::{ChatMessage, Tab};

use self::format::{format_clock_time, format_date_time, format_size, truncate_with_ellipsis};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Tab bar
            Constraint::Min(1),    // Panel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_tab_bar(frame, app, chunks[0], &palette);
    match app.active_tab() {
        Tab::Chat => draw_chat(frame, app, chunks[1], &palette, &glyphs),
        Tab::Images => draw_images(frame, app, chunks[1], &palette, &glyphs),
        Tab::Documents => draw_documents(frame, app, chunks[1], &palette, &glyphs),
        Tab::Profile => draw_profile(frame, app, chunks[1], &palette, &glyphs),
    }
    draw_status_bar(frame, app, chunks[2], &palette, &glyphs);
}

fn draw_tab_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab().index())
        .style(styles::tab_inactive(palette))
        .highlight_style(styles::tab_active(palette))
        .divider(Span::styled("·", Style::default().fg(palette.text_disabled)))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.bg_border))
                .title(Span::styled(
                    " Maquette ",
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )),
        );
    frame.render_widget(tabs, area);
}

// ----------------------------------------------------------------------
// Chat panel
// ----------------------------------------------------------------------

fn draw_chat(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    draw_transcript(frame, app, chunks[0], palette, glyphs);
    draw_input_line(frame, app.chat_draft(), chunks[1], "Message", glyphs.prompt, palette);
}

fn draw_transcript(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title(Span::styled(" Chat ", Style::default().fg(palette.text_secondary)));

    let mut lines: Vec<Line> = Vec::new();
    let mut msg_count = 0;

    for message in app.chat().messages() {
        if msg_count > 0 {
            lines.push(Line::from(""));
        }
        msg_count += 1;

        let (icon, name, name_style) = match message {
            ChatMessage::User(_) => (glyphs.user, "You", styles::user_name(palette)),
            ChatMessage::Assistant(_) => {
                (glyphs.assistant, "Assistant", styles::assistant_name(palette))
            }
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{icon} "), name_style),
            Span::styled(name, name_style),
            Span::styled(
                format!("  {}", format_clock_time(message.timestamp())),
                Style::default().fg(palette.text_muted),
            ),
        ]));
        for text_line in message.text().lines() {
            lines.push(Line::from(Span::styled(
                format!("  {text_line}"),
                Style::default().fg(palette.text_primary),
            )));
        }
    }

    if app.pending_replies() > 0 {
        lines.push(Line::from(""));
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        lines.push(Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(palette.primary)),
            Span::styled(
                "Assistant is typing...",
                Style::default()
                    .fg(palette.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    let inner = block.inner(area);
    let total_lines = wrapped_line_count(&lines, inner.width);
    let max_scroll = total_lines.saturating_sub(inner.height);

    // Pinned to the bottom unless the user scrolled back.
    let scroll_back = app.view().chat_scroll_back.min(max_scroll);
    app.view_mut().chat_scroll_back = scroll_back;
    let scroll_offset = max_scroll - scroll_back;

    let transcript = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset, 0));
    frame.render_widget(transcript, area);

    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(glyphs.arrow_up))
            .end_symbol(Some(glyphs.arrow_down))
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll as usize).position(scroll_offset as usize);
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn wrapped_line_count(lines: &[Line], width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut total: u16 = 0;
    for line in lines {
        let line_width = line.width();
        let rows = if line_width == 0 {
            1
        } else {
            ((line_width - 1) / width) + 1
        };
        total = total.saturating_add(rows as u16);
    }
    total
}

// ----------------------------------------------------------------------
// Images panel
// ----------------------------------------------------------------------

fn draw_images(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    if app.gallery().is_generating() {
        // Input is inert while busy; show progress where the prompt goes.
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        let prompt = app
            .gallery()
            .active()
            .map(|active| truncate_with_ellipsis(active.prompt(), 48))
            .unwrap_or_default();
        let busy = Paragraph::new(Line::from(vec![
            Span::styled(format!(" {spinner} "), Style::default().fg(palette.primary)),
            Span::styled(
                format!("Generating \"{prompt}\"..."),
                Style::default()
                    .fg(palette.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.warning)),
        );
        frame.render_widget(busy, chunks[0]);
    } else {
        draw_input_line(frame, app.prompt_draft(), chunks[0], "Prompt", glyphs.prompt, palette);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" Gallery ({}) ", app.gallery().len()),
            Style::default().fg(palette.text_secondary),
        ));

    let mut lines: Vec<Line> = Vec::new();
    if app.gallery().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No generated images yet. Describe one and press Enter.",
            Style::default().fg(palette.text_muted),
        )));
    } else {
        for image in app.gallery().images() {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", glyphs.image), Style::default().fg(palette.teal)),
                Span::styled(
                    truncate_with_ellipsis(image.prompt(), 60),
                    Style::default().fg(palette.text_primary),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}  {}", format_date_time(image.timestamp()), image.url()),
                Style::default().fg(palette.text_muted),
            )));
            lines.push(Line::from(""));
        }
    }

    let gallery = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(gallery, chunks[1]);
}

// ----------------------------------------------------------------------
// Documents panel
// ----------------------------------------------------------------------

fn draw_documents(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let attach_open = app.view().attach_draft.is_some();
    let constraints = if attach_open {
        vec![Constraint::Min(1), Constraint::Length(3)]
    } else {
        vec![Constraint::Min(1)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" Documents ({}) ", app.documents().len()),
            Style::default().fg(palette.text_secondary),
        ));

    let mut lines: Vec<Line> = Vec::new();
    if app.documents().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No uploaded files.",
            Style::default().fg(palette.text_muted),
        )));
        lines.push(Line::from(Span::styled(
            "Press o and type a path to attach a document.",
            Style::default().fg(palette.text_muted),
        )));
    } else {
        let selected = app.view().documents_selected;
        for (index, file) in app.documents().files().iter().enumerate() {
            let is_selected = index == selected;
            let marker = if is_selected { glyphs.selected } else { " " };
            let line_style = if is_selected {
                Style::default()
                    .fg(palette.text_primary)
                    .bg(palette.bg_highlight)
            } else {
                Style::default().fg(palette.text_secondary)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
                Span::styled(format!("{} ", glyphs.document), line_style),
                Span::styled(file.name().to_string(), line_style),
                Span::styled(
                    format!("  {}", format_size(file.size_bytes())),
                    Style::default().fg(palette.text_muted),
                ),
            ]));
        }
    }

    let list = Paragraph::new(lines).block(block);
    frame.render_widget(list, chunks[0]);

    if attach_open
        && let Some(draft) = app.view().attach_draft.as_ref()
    {
        draw_input_line(frame, draft, chunks[1], "Attach path", glyphs.prompt, palette);
    }
}

// ----------------------------------------------------------------------
// Profile panel
// ----------------------------------------------------------------------

fn draw_profile(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let editing = app.view().profile_edit.is_some();
    let constraints = if editing {
        vec![Constraint::Min(1), Constraint::Length(3)]
    } else {
        vec![Constraint::Min(1)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            " Profile ",
            Style::default().fg(palette.text_secondary),
        ));

    let profile = app.profile().profile();
    let focused = app.view().profile_row;
    let stats = app.usage_stats();

    let focus_marker = |row: ProfileRow| -> Span<'static> {
        if row == focused && !editing {
            Span::styled(
                format!("{} ", glyphs.selected),
                Style::default().fg(palette.accent),
            )
        } else {
            Span::raw("  ")
        }
    };
    let field_style = |row: ProfileRow| -> Style {
        if row == focused && !editing {
            Style::default()
                .fg(palette.text_primary)
                .bg(palette.bg_highlight)
        } else {
            Style::default().fg(palette.text_secondary)
        }
    };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.badge),
                Style::default().fg(palette.peach),
            ),
            Span::styled(
                "Pro Account",
                Style::default()
                    .fg(palette.peach)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for row in [ProfileRow::Name, ProfileRow::Email] {
        let value = match row {
            ProfileRow::Name => profile.name.as_str(),
            _ => profile.email.as_str(),
        };
        lines.push(Line::from(vec![
            focus_marker(row),
            Span::styled(format!("{:<10}", row.label()), field_style(row)),
            Span::styled(value.to_string(), Style::default().fg(palette.text_primary)),
        ]));
    }
    lines.push(Line::from(""));

    for (row, enabled) in [
        (ProfileRow::TwoFactor, profile.two_factor),
        (ProfileRow::Encryption, profile.encryption),
        (ProfileRow::AccessControl, profile.access_control),
    ] {
        let toggle = if enabled {
            Span::styled(glyphs.toggle_on, Style::default().fg(palette.success))
        } else {
            Span::styled(glyphs.toggle_off, Style::default().fg(palette.text_disabled))
        };
        lines.push(Line::from(vec![
            focus_marker(row),
            toggle,
            Span::raw(" "),
            Span::styled(row.label().to_string(), field_style(row)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Usage",
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {} Messages {}", glyphs.bullet, stats.messages),
            Style::default().fg(palette.text_primary),
        ),
        Span::styled(
            format!("   {} Images {}", glyphs.bullet, stats.images),
            Style::default().fg(palette.text_primary),
        ),
        Span::styled(
            format!("   {} Files {}", glyphs.bullet, stats.files),
            Style::default().fg(palette.text_primary),
        ),
    ]));

    let panel = Paragraph::new(lines).block(block);
    frame.render_widget(panel, chunks[0]);

    if editing
        && let Some(draft) = app.view().profile_edit.as_ref()
    {
        let title = match focused {
            ProfileRow::Email => "Edit email",
            _ => "Edit name",
        };
        draw_input_line(frame, draft, chunks[1], title, glyphs.prompt, palette);
    }
}

// ----------------------------------------------------------------------
// Shared widgets
// ----------------------------------------------------------------------

fn draw_input_line(
    frame: &mut Frame,
    draft: &DraftInput,
    area: Rect,
    title: &str,
    prompt_glyph: &str,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.green))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(palette.text_muted),
        ));
    let inner = block.inner(area);

    let content = Line::from(vec![
        Span::styled(
            format!("{prompt_glyph} "),
            Style::default().fg(palette.accent),
        ),
        Span::styled(
            draft.text().to_string(),
            Style::default().fg(palette.text_primary),
        ),
    ]);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if inner.width > 0 {
        let prefix_width = prompt_glyph.width() as u16 + 1;
        let cursor_x = inner.x
            + prefix_width.saturating_add(draft.text()[..draft.byte_index()].width() as u16);
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    if let Some(notice) = app.view().notice.as_ref() {
        spans.push(Span::styled(
            notice.clone(),
            Style::default().fg(palette.warning),
        ));
    } else if app.pending_completions() > 0 {
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        spans.push(Span::styled(
            format!(
                "{spinner} {} pending completion(s) {}",
                app.pending_completions(),
                glyphs.pending
            ),
            Style::default().fg(palette.primary),
        ));
    } else {
        let hints: &[(&str, &str)] = match app.active_tab() {
            Tab::Chat => &[("Enter", "send "), ("Tab", "panels "), ("Ctrl+C", "quit")],
            Tab::Images => &[("Enter", "generate "), ("Tab", "panels "), ("Ctrl+C", "quit")],
            Tab::Documents => &[
                ("o", "attach "),
                ("d", "delete "),
                ("↑↓", "select "),
                ("q", "quit"),
            ],
            Tab::Profile => &[("↑↓", "select "), ("Enter", "edit/toggle "), ("q", "quit")],
        };
        for (key, label) in hints {
            spans.push(Span::styled((*key).to_string(), styles::key_highlight(palette)));
            spans.push(Span::styled(format!(" {label} "), styles::key_hint(palette)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
