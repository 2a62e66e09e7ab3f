use crate::app::{App, AppMode};
use crate::components::render_popup_with_block;
use crate::input::InputState;
use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use todolist_domain::{DescriptionPolicy, Task, TaskField};
use todolist_persistence::KeyValueStore;

const CHECKED: &str = "[x] ";
const UNCHECKED: &str = "[ ] ";
const INDENT: &str = "    ";

pub fn render<S: KeyValueStore>(app: &App<S>, frame: &mut Frame) {
    let palette = Palette::for_preferences(app.store.preferences());
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(app, &palette, frame, chunks[0]);
    render_toolbar(app, &palette, frame, chunks[1]);
    render_tasks(app, &palette, frame, chunks[2]);
    render_footer(app, &palette, frame, chunks[3]);

    if app.mode == AppMode::CreateTask {
        render_create_task_popup(app, &palette, frame);
    }
}

fn render_header<S: KeyValueStore>(app: &App<S>, palette: &Palette, frame: &mut Frame, area: Rect) {
    let (total, done) = app.store.counts();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(area);

    let title = Paragraph::new(Span::styled("TODOLIST", palette.title())).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let counts = Paragraph::new(Span::styled(
        format!("{} notes, {} done ", total, done),
        palette.label_text(),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(counts, chunks[1]);
}

fn render_toolbar<S: KeyValueStore>(app: &App<S>, palette: &Palette, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(22),
            Constraint::Percentage(18),
        ])
        .split(area);

    let searching = app.mode == AppMode::Search;
    render_text_input(
        frame,
        palette,
        chunks[0],
        "Search (/)",
        &app.search,
        "Search note...",
        searching,
    );

    let filter = Paragraph::new(Span::styled(app.status_filter.as_str(), palette.accent())).block(
        Block::default()
            .title("Filter (f)")
            .borders(Borders::ALL)
            .border_style(palette.unfocused_border()),
    );
    frame.render_widget(filter, chunks[1]);

    let theme_label = if app.store.preferences().dark_mode {
        "Dark"
    } else {
        "Light"
    };
    let theme = Paragraph::new(Span::styled(theme_label, palette.normal_text())).block(
        Block::default()
            .title("Theme (t)")
            .borders(Borders::ALL)
            .border_style(palette.unfocused_border()),
    );
    frame.render_widget(theme, chunks[2]);
}

fn render_tasks<S: KeyValueStore>(app: &App<S>, palette: &Palette, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title("Notes")
        .borders(Borders::ALL)
        .border_style(if app.mode == AppMode::Normal {
            palette.focused_border()
        } else {
            palette.unfocused_border()
        });

    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        let empty = Paragraph::new(Span::styled("Empty..", palette.label_text()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let selected = app.selection.get() == Some(idx);
            let text = if app.mode == AppMode::EditTask(task.id) {
                editing_row(task, app.edit_field, &app.edit_input, palette)
            } else {
                task_row(task, palette)
            };
            ListItem::new(text).style(palette.selected_item(selected))
        })
        .collect();

    let mut state = ListState::default().with_selected(app.selection.get());
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

fn task_row<'a>(task: &'a Task, palette: &Palette) -> Text<'a> {
    let (checkbox, title_style) = if task.is_done {
        (CHECKED, palette.done_text())
    } else {
        (UNCHECKED, palette.normal_text().add_modifier(Modifier::BOLD))
    };
    let marker = if task.is_editing { "✎ " } else { "" };

    let mut lines = vec![Line::from(vec![
        Span::styled(checkbox, palette.accent()),
        Span::styled(marker, palette.accent()),
        Span::styled(task.title.as_str(), title_style),
    ])];
    if task.has_description() {
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(task.description.as_str(), palette.label_text()),
        ]));
    }
    Text::from(lines)
}

fn editing_row<'a>(
    task: &'a Task,
    active: TaskField,
    input: &'a InputState,
    palette: &Palette,
) -> Text<'a> {
    let checkbox = if task.is_done { CHECKED } else { UNCHECKED };
    let field_line = |field: TaskField, prefix: &'a str| -> Line<'a> {
        if field == active {
            let (before, after) = input.split_at_cursor();
            Line::from(vec![
                Span::styled(prefix, palette.accent()),
                Span::styled(before, palette.normal_text().add_modifier(Modifier::UNDERLINED)),
                Span::styled("▏", palette.accent()),
                Span::styled(after, palette.normal_text().add_modifier(Modifier::UNDERLINED)),
            ])
        } else {
            Line::from(vec![
                Span::styled(prefix, palette.accent()),
                Span::styled(task.field(field), palette.label_text()),
            ])
        }
    };

    Text::from(vec![
        field_line(TaskField::Title, checkbox),
        field_line(TaskField::Description, INDENT),
    ])
}

fn render_footer<S: KeyValueStore>(app: &App<S>, palette: &Palette, frame: &mut Frame, area: Rect) {
    let line = match &app.message {
        Some(message) => Line::from(Span::styled(message.as_str(), palette.error())),
        None => Line::from(Span::styled(help_text(app.mode), palette.label_text())),
    };
    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.unfocused_border()),
    );
    frame.render_widget(footer, area);
}

fn help_text(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Normal => {
            "n: new  /: search  f: filter  t: theme  space: done  e: edit  d: delete  q: quit"
        }
        AppMode::Search => "type to search  Enter: keep  Esc: clear",
        AppMode::CreateTask => "Tab: switch field  Enter: apply  Esc: cancel",
        AppMode::EditTask(_) => "Tab: switch field  Enter/Esc: finish editing",
    }
}

fn render_create_task_popup<S: KeyValueStore>(app: &App<S>, palette: &Palette, frame: &mut Frame) {
    let inner = render_popup_with_block(frame, palette, " NEW NOTE ", 60, 10);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let description_label = match app.store.policy() {
        DescriptionPolicy::Required => "Description",
        DescriptionPolicy::Optional => "Description (optional)",
    };

    render_text_input(
        frame,
        palette,
        chunks[0],
        "Note",
        &app.form.title,
        "Input your note...",
        app.form.focus == TaskField::Title,
    );
    render_text_input(
        frame,
        palette,
        chunks[1],
        description_label,
        &app.form.description,
        "Enter description...",
        app.form.focus == TaskField::Description,
    );
}

fn render_text_input(
    frame: &mut Frame,
    palette: &Palette,
    area: Rect,
    title: &str,
    input: &InputState,
    placeholder: &str,
    focused: bool,
) {
    let content = if input.is_empty() {
        Span::styled(placeholder, palette.label_text())
    } else {
        Span::styled(input.as_str(), palette.normal_text())
    };
    let border_style: Style = if focused {
        palette.focused_border()
    } else {
        palette.unfocused_border()
    };
    let widget = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(widget, area);

    if focused {
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(input.cursor_column())
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}
