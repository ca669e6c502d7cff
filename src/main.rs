mod app;
mod catalog;
mod config;
mod quiz;
mod session;
mod translate;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::App;
use catalog::data;
use session::state::ActiveView;
use ui::components::category_chips::CategoryChips;
use ui::components::profile_card::ProfileCard;
use ui::components::tab_bar::TabBar;
use ui::components::test_list::TestList;
use ui::components::translator_panel::TranslatorPanel;
use ui::components::word_list::WordList;
use ui::layout::{AppLayout, centered_rect};

#[derive(Parser)]
#[command(name = "ruslingo", version, about = "Terminal Russian vocabulary trainer")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(
        short,
        long,
        help = "Initial tab (dictionary, translator, tests, favorites, profile)"
    )]
    view: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();
    if let Some(theme_name) = cli.theme {
        app.set_theme(&theme_name);
    }
    if let Some(view) = cli.view.as_deref().and_then(ActiveView::from_name) {
        app.select_view(view);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Session state is deliberately not persisted; the config (theme choice)
    // is.
    let _ = app.config.save();

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    app.status = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_view();
            return;
        }
        KeyCode::BackTab => {
            app.prev_view();
            return;
        }
        _ => {}
    }

    match app.session.active_view {
        ActiveView::Dictionary => handle_dictionary_key(app, key),
        ActiveView::Translator => handle_translator_key(app, key),
        ActiveView::Tests => handle_tests_key(app, key),
        ActiveView::Favorites => handle_favorites_key(app, key),
        ActiveView::Profile => handle_profile_key(app, key),
    }
}

fn handle_dictionary_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.session.search_query.is_empty() {
                app.should_quit = true;
            } else {
                app.clear_search();
            }
        }
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Left => app.category_prev(),
        KeyCode::Right => app.category_next(),
        KeyCode::Up => app.word_prev(),
        KeyCode::Down => app.word_next(),
        KeyCode::Enter => app.toggle_selected_word(),
        KeyCode::Char(ch) => app.search_push(ch),
        _ => {}
    }
}

fn handle_translator_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.session.translation.source.is_empty() {
                app.should_quit = true;
            } else {
                app.clear_source();
            }
        }
        KeyCode::Backspace => app.source_pop(),
        KeyCode::Enter => app.submit_translation(),
        KeyCode::Up => app.recall_older(),
        KeyCode::Down => app.recall_newer(),
        KeyCode::Char(ch) => app.source_push(ch),
        _ => {}
    }
}

fn handle_tests_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.test_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.test_next(),
        KeyCode::Enter => app.start_selected_test(),
        KeyCode::Char(ch) => handle_tab_digit(app, ch),
        _ => {}
    }
}

fn handle_favorites_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.favorite_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.favorite_next(),
        KeyCode::Enter | KeyCode::Char('x') | KeyCode::Delete => app.unfavorite_selected(),
        KeyCode::Char(ch) => handle_tab_digit(app, ch),
        _ => {}
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(ch) => handle_tab_digit(app, ch),
        _ => {}
    }
}

/// Direct tab jumps on the views that do not capture free text.
fn handle_tab_digit(app: &mut App, ch: char) {
    match ch {
        '1' => app.select_view(ActiveView::Dictionary),
        '2' => app.select_view(ActiveView::Translator),
        '3' => app.select_view(ActiveView::Tests),
        '4' => app.select_view(ActiveView::Favorites),
        '5' => app.select_view(ActiveView::Profile),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);

    render_header(frame, app, layout.header);
    frame.render_widget(TabBar::new(app.session.active_view, app.theme), layout.tabs);

    match app.session.active_view {
        ActiveView::Dictionary => render_dictionary(frame, app, layout.body),
        ActiveView::Translator => render_translator(frame, app, layout.body),
        ActiveView::Tests => render_tests(frame, app, layout.body),
        ActiveView::Favorites => render_favorites(frame, app, layout.body),
        ActiveView::Profile => render_profile(frame, app, layout.body),
    }

    render_footer(frame, app, layout.footer);
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            " РусскийLingo ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Учим русский язык вместе",
            Style::default().fg(colors.muted()),
        )),
    ]);
    frame.render_widget(header, area);
}

fn render_dictionary(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
        ])
        .split(area);

    let search_block = Block::bordered()
        .title(" Поиск слова ")
        .border_style(Style::default().fg(colors.border_focused()));
    let search_inner = search_block.inner(layout[0]);
    frame.render_widget(search_block, layout[0]);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                app.session.search_query.clone(),
                Style::default().fg(colors.fg()),
            ),
            Span::styled("▏", Style::default().fg(colors.accent())),
        ])),
        search_inner,
    );

    frame.render_widget(
        CategoryChips::new(&app.catalog, &app.session.selected_category, app.theme),
        layout[1],
    );

    let words = app.visible_words();
    frame.render_widget(
        WordList::new(
            &words,
            &app.session.favorites,
            app.word_selected,
            app.config.show_examples,
            app.theme,
        ),
        layout[2],
    );
}

fn render_translator(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    frame.render_widget(
        TranslatorPanel::new(
            &app.session.translation,
            &app.session.history,
            app.recall_cursor,
            app.theme,
        ),
        area,
    );
}

fn render_tests(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    frame.render_widget(
        TestList::new(data::TESTS, &data::PROGRESS, app.test_selected, app.theme),
        area,
    );
}

fn render_favorites(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let words = app.favorite_words();
    frame.render_widget(
        WordList::new(
            &words,
            &app.session.favorites,
            app.favorite_selected,
            app.config.show_examples,
            app.theme,
        )
        .empty_text("Здесь появятся избранные слова"),
        area,
    );
}

fn render_profile(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let centered = centered_rect(70, 100, area);
    frame.render_widget(ProfileCard::new(&data::PROGRESS, app.theme), centered);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;

    let line = if let Some(ref status) = app.status {
        Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(colors.warning()),
        ))
    } else {
        let hints = match app.session.active_view {
            ActiveView::Dictionary => {
                " [Tab] Вкладки  [←→] Категории  [↑↓] Слова  [Enter] В избранное  [Esc] Выход"
            }
            ActiveView::Translator => {
                " [Tab] Вкладки  [Enter] Перевести  [↑↓] История  [Esc] Выход"
            }
            ActiveView::Tests => " [Tab] Вкладки  [↑↓] Выбор  [Enter] Начать  [q] Выход",
            ActiveView::Favorites => " [Tab] Вкладки  [↑↓] Выбор  [Enter] Убрать  [q] Выход",
            ActiveView::Profile => " [Tab] Вкладки  [1-5] Вкладка  [q] Выход",
        };
        Line::from(Span::styled(hints, Style::default().fg(colors.muted())))
    };

    frame.render_widget(Paragraph::new(line), area);
}
