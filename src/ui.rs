use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Terminal,
};
use std::io;
use taskgroups::{BoardError, TaskBoard, TaskGroup, TaskStatus};
use tracing::warn;

const HELP: &str = "←/→ list  ↑/↓ task  a add  Enter advance  m move  d delete  q quit";

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, board: &mut TaskBoard) -> io::Result<()> {
    let mut message = String::from(HELP);
    loop {
        terminal.draw(|f| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(3), Constraint::Length(1)])
                .split(f.area());
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Percentage(25); TaskGroup::ALL.len()])
                .split(rows[0]);

            for (i, group) in TaskGroup::ALL.iter().enumerate() {
                let info = group.info();
                let parts = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints(vec![Constraint::Min(3), Constraint::Length(4)])
                    .split(columns[i]);

                let items: Vec<ListItem> = board
                    .tasks_in_group(*group)
                    .iter()
                    .map(|t| {
                        ListItem::new(Line::from(vec![
                            Span::raw(format!("[#{}] ", t.id)),
                            Span::styled(&t.title, Style::default().fg(Color::White)),
                            Span::styled(
                                format!(" ({})", t.status),
                                Style::default().fg(status_color(t.status)),
                            ),
                        ]))
                    })
                    .collect();

                let selected = board.selected_group == i;
                let list = List::new(items)
                    .block(
                        Block::default()
                            .title(info.title)
                            .borders(Borders::ALL)
                            .border_style(if selected {
                                Style::default().fg(Color::Cyan)
                            } else {
                                Style::default()
                            }),
                    )
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                    .highlight_symbol("> ");

                let mut state = ListState::default();
                if selected {
                    state.select(Some(board.selected_task));
                }
                f.render_stateful_widget(list, parts[0], &mut state);

                let description = Paragraph::new(info.description)
                    .style(Style::default().fg(Color::DarkGray))
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(description, parts[1]);
            }

            f.render_widget(Paragraph::new(message.as_str()), rows[1]);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('a') => {
                    let group = board.selected_group();
                    if let Some(title) = prompt(&format!("New task for {}:", group.info().title)) {
                        message = match board.add_task(&title, group) {
                            Ok(id) => format!("added #{}", id),
                            Err(err) => report(err),
                        };
                    }
                }
                KeyCode::Enter => {
                    if let Some(id) = board.selected_task_id() {
                        message = match board.advance_task(id) {
                            Ok(status) => format!("#{} -> {}", id, status),
                            Err(err) => report(err),
                        };
                    }
                }
                KeyCode::Char('m') => {
                    if let Some(id) = board.selected_task_id() {
                        let target = board.selected_group().cycle_next();
                        message = match board.move_task(id, target) {
                            Ok(()) => format!("#{} moved to {}", id, target.info().title),
                            Err(err) => report(err),
                        };
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(id) = board.selected_task_id() {
                        message = match board.remove_task(id) {
                            Ok(task) => format!("deleted #{} {}", task.id, task.title),
                            Err(err) => report(err),
                        };
                    }
                }
                KeyCode::Left => board.select_previous_group(),
                KeyCode::Right => board.select_next_group(),
                KeyCode::Up => board.select_previous_task(),
                KeyCode::Down => board.select_next_task(),
                _ => {}
            }
        }
    }
}

fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Gray,
        TaskStatus::InProgress => Color::Yellow,
        TaskStatus::Review => Color::Magenta,
        TaskStatus::Testing => Color::Blue,
        TaskStatus::Done => Color::Green,
    }
}

fn report(err: BoardError) -> String {
    warn!(error = %err, "board action failed");
    err.to_string()
}

fn prompt(message: &str) -> Option<String> {
    disable_raw_mode().ok();
    println!("{}", message);
    let mut input = String::new();
    let result = io::stdin().read_line(&mut input);
    enable_raw_mode().ok();
    match result {
        Ok(_) => Some(input.trim().to_string()),
        Err(_) => None,
    }
}
