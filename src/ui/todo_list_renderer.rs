use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use std::time::{Duration, Instant};

use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Corner, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::{
    models::todo_model::Todo,
    todo_commands::ApiClient,
    ui::app::{ActiveBlock, App, InputMode, RouteId},
};

/// Interactive list view. Pending todos on the left, completed on the
/// right; `a` adds, `d` completes, `x` deletes, `q` quits.
pub fn render_todo_list(todos: Vec<Todo>, client: ApiClient) -> anyhow::Result<()> {
    // setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();

    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(250);
    let app = App::new(todos);

    let res = run_app(&mut terminal, app, &client, tick_rate);

    // restore terminal
    disable_raw_mode()?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    client: &ApiClient,
    tick_rate: Duration,
) -> std::io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm::event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match app.input_mode {
                    InputMode::None => match key.code {
                        KeyCode::Esc => {
                            // Pop navigation stack if required
                            match app.get_current_route().active_block {
                                ActiveBlock::Error | ActiveBlock::Message => {
                                    app.pop_navigation_stack();
                                }
                                ActiveBlock::NewTodo => {
                                    app.input_text = String::new();
                                    app.pop_navigation_stack();
                                    app.input_mode = InputMode::None;
                                }
                                _ => {}
                            }
                        }
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Left => app.pending.unselect(),
                        KeyCode::Down => app.pending.next(),
                        KeyCode::Up => app.pending.previous(),
                        KeyCode::Char('a') => {
                            if app.get_current_route().active_block == ActiveBlock::Home {
                                app.push_navigation_stack(RouteId::NewTodo, ActiveBlock::NewTodo);
                                app.input_mode = InputMode::Editing;
                                app.input_text = String::new();
                            }
                        }
                        KeyCode::Char('d') => {
                            if let Some(selected) = app.selected_pending() {
                                let todo_id = selected.id.to_string();

                                match client.set_completed(todo_id.as_str(), true) {
                                    Ok(_) => app.finish_selected(),
                                    Err(e) => app.handle_error(&e),
                                }
                            }
                        }
                        KeyCode::Char('x') => {
                            if let Some(selected) = app.selected_pending() {
                                let todo_id = selected.id.to_string();

                                match client.delete(todo_id.as_str()) {
                                    Ok(_) => {
                                        app.remove_selected();
                                        app.handle_new_message(String::from("Todo deleted"));
                                    }
                                    Err(e) => app.handle_error(&e),
                                }
                            }
                        }
                        _ => {}
                    },
                    InputMode::Editing => match key.code {
                        KeyCode::Char(c) => {
                            app.input_text.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input_text.pop();
                        }
                        KeyCode::Esc => {
                            app.pop_navigation_stack();
                            app.input_mode = InputMode::None;
                            app.input_text = String::new();
                        }
                        KeyCode::Enter => {
                            app.input_mode = InputMode::None;
                            let todo_title = app.input_text.clone();

                            app.input_text = String::new();
                            app.pop_navigation_stack();

                            match client.create(todo_title.as_str(), None) {
                                Ok(todo) => {
                                    app.add_pending(todo);
                                }
                                Err(e) => {
                                    app.handle_error(&e);
                                }
                            }
                        }
                        _ => {}
                    },
                }
            }
        }
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
}

// Draws transient message if present
fn draw_message_content<B>(f: &mut Frame<B>, app: &App)
where
    B: Backend,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(100)].as_ref())
        .margin(5)
        .split(f.size());

    let message_text = vec![Spans::from(vec![
        Span::raw("Message: "),
        Span::styled(&app.message, Style::default().fg(Color::LightBlue)),
    ])];

    let message_paragraph = Paragraph::new(message_text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "Message",
                    Style::default().fg(Color::LightBlue),
                ))
                .border_style(Style::default().fg(Color::LightCyan)),
        );

    f.render_widget(message_paragraph, chunks[0]);
}

fn draw_new_todo_content<B>(f: &mut Frame<B>, app: &App)
where
    B: Backend,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .margin(5)
        .split(f.size());

    let prompt_message = vec![
        Span::raw("Enter new todo title. Press "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" to stop editing, "),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" to add the todo item"),
    ];

    let help_text = Text::from(Spans::from(prompt_message));
    let help_para = Paragraph::new(help_text);

    f.render_widget(help_para, chunks[0]);

    let input = Paragraph::new(app.input_text.as_ref())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Input"));

    f.render_widget(input, chunks[1]);
}

// Draws error if occured
fn draw_error_content<B>(f: &mut Frame<B>, app: &App)
where
    B: Backend,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(100)].as_ref())
        .margin(5)
        .split(f.size());

    let error_text = vec![Spans::from(vec![
        Span::raw("Error occured: "),
        Span::styled(&app.error_message, Style::default().fg(Color::Red)),
    ])];

    let error_paragraph = Paragraph::new(error_text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Error", Style::default().fg(Color::Red)))
            .border_style(Style::default().fg(Color::LightRed)),
    );

    f.render_widget(error_paragraph, chunks[0]);
}

fn draw_home_content<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    // Pending on the left, done on the right
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(f.size());

    let items: Vec<ListItem> = app
        .pending
        .items
        .iter()
        .map(|todo| {
            let mut lines = vec![Spans::from(todo.title.as_str())];

            if let Some(description) = &todo.description {
                lines.push(Spans::from(Span::styled(
                    description.as_str(),
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }

            ListItem::new(lines).style(Style::default().fg(Color::Black).bg(Color::White))
        })
        .collect();

    let items = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Pending"))
        .highlight_style(
            Style::default()
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(items, chunks[0], &mut app.pending.state);

    // The done column has no selection state, it just shows what has
    // been finished and when
    let done_items: Vec<ListItem> = app
        .done
        .items
        .iter()
        .rev()
        .map(|todo| {
            let header = Spans::from(vec![
                Span::styled(format!("{:<12}", "Completed at"), Style::default()),
                Span::raw(" "),
                Span::styled(
                    todo.updated_at.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]);

            let log = Spans::from(vec![Span::styled(
                todo.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )]);

            ListItem::new(vec![
                Spans::from("-".repeat(chunks[1].width as usize)),
                header,
                Spans::from(""),
                log,
            ])
        })
        .collect();

    let done_list = List::new(done_items)
        .block(Block::default().borders(Borders::ALL).title("Done"))
        .start_corner(Corner::BottomLeft);

    f.render_widget(done_list, chunks[1]);
}

fn ui<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    let current_route = app.get_current_route();

    match current_route.active_block {
        ActiveBlock::Message => draw_message_content(f, app),
        ActiveBlock::Home => draw_home_content(f, app),
        ActiveBlock::Error => draw_error_content(f, app),
        ActiveBlock::NewTodo => draw_new_todo_content(f, app),
    }
}
