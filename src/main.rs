use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
};

use sundial::config::{self, Config};
use sundial::handlers;
use sundial::picker::{Phase, Picker, PickerContext};
use sundial::record::DateTimeRecord;
use sundial::ui;

fn main() -> Result<(), io::Error> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(String::as_str) == Some("init") {
        return match Config::init() {
            Ok(true) => {
                println!(
                    "Created config file at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Ok(false) => {
                println!(
                    "Config file already exists at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Failed to create config file: {e}");
                Err(e)
            }
        };
    }

    let config = Config::load().unwrap_or_default();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_picker(&mut terminal, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok((result, confirmed)) => {
            if let Some(record) = confirmed {
                println!("{record:?}");
            }
            println!("year: {}", result.year);
            println!("minutes: {}", result.minutes);
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Hosts the picker until it closes. Returns the getter's record and, when
/// the user confirmed, the record the callback received.
fn run_picker<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
) -> io::Result<(DateTimeRecord, Option<DateTimeRecord>)> {
    let confirmed: Rc<RefCell<Option<DateTimeRecord>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&confirmed);

    let size = terminal.size()?;
    let screen = Rect::new(0, 0, size.width, size.height);
    // No pointer position is known before the first mouse event; anchor at
    // the screen center.
    let ctx = PickerContext {
        screen,
        anchor: Position::new(screen.width / 2, screen.height / 2),
    };

    let mut picker = Picker::new(
        ctx,
        &config,
        Some(Box::new(move |record| {
            *sink.borrow_mut() = Some(record.clone());
        })),
    );

    loop {
        terminal.draw(|f| {
            let size = f.area();
            let hint_area = Rect {
                x: 0,
                y: size.height.saturating_sub(1),
                width: size.width,
                height: 1,
            };
            let hint = Paragraph::new(Span::styled(
                " click a date and time, OK or Enter confirms, Esc closes",
                Style::default().fg(Color::DarkGray),
            ));
            f.render_widget(hint, hint_area);

            ui::render_picker(f, &picker);
        })?;

        if event::poll(std::time::Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(&mut picker, key),
                Event::Mouse(mouse) => handlers::handle_mouse(&mut picker, mouse),
                _ => {}
            }
        }

        if matches!(picker.phase, Phase::Confirmed | Phase::Closed) {
            picker.close();
            break;
        }
    }

    let result = picker.date_time().clone();
    let confirmed = confirmed.borrow_mut().take();
    Ok((result, confirmed))
}
