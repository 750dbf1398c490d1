#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Terminal,
    backend::TestBackend,
    layout::{Position, Rect},
};

use sundial::calendar;
use sundial::config::Config;
use sundial::handlers;
use sundial::picker::{FieldId, Picker, PickerContext};
use sundial::record::DateTimeRecord;
use sundial::ui;
use sundial::ui::layout::{PickerLayout, SpinnerPart};

pub const SCREEN_WIDTH: u16 = 80;
pub const SCREEN_HEIGHT: u16 = 24;

pub struct TestContext {
    pub picker: Picker,
    pub confirmed: Rc<RefCell<Vec<DateTimeRecord>>>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::at(datetime(2026, 1, 15, 10, 30, 45))
    }

    pub fn at(now: NaiveDateTime) -> Self {
        Self::with_config(now, Config::default())
    }

    pub fn with_config(now: NaiveDateTime, config: Config) -> Self {
        let confirmed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&confirmed);

        let ctx = PickerContext {
            screen: Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
            anchor: Position::new(10, 3),
        };
        let picker = Picker::at_datetime(
            ctx,
            &config,
            now,
            Some(Box::new(move |record| {
                sink.borrow_mut().push(record.clone());
            })),
        );

        Self { picker, confirmed }
    }

    pub fn press(&mut self, code: KeyCode) {
        let event = KeyEvent::new(code, KeyModifiers::NONE);
        handlers::handle_key(&mut self.picker, event);
    }

    pub fn click(&mut self, x: u16, y: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), x, y);
    }

    pub fn right_click(&mut self, x: u16, y: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Right), x, y);
    }

    pub fn scroll_up(&mut self, x: u16, y: u16) {
        self.mouse(MouseEventKind::ScrollUp, x, y);
    }

    pub fn scroll_down(&mut self, x: u16, y: u16) {
        self.mouse(MouseEventKind::ScrollDown, x, y);
    }

    fn mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        let event = MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        handlers::handle_mouse(&mut self.picker, event);
    }

    pub fn layout(&self) -> PickerLayout {
        PickerLayout::new(self.picker.area)
    }

    /// Click the grid cell for the given day (1-indexed).
    pub fn click_day(&mut self, day: u32) {
        let slot = *self.picker.grid.slot(day).expect("day slot exists");
        let cell = self.layout().day_cell(&slot);
        self.click(cell.x + 1, cell.y);
    }

    pub fn click_spinner(&mut self, field: FieldId, part: SpinnerPart) {
        let rect = self.spinner_rect(field);
        let x = match part {
            SpinnerPart::Prev => rect.x,
            SpinnerPart::Next => rect.right() - 1,
            SpinnerPart::Label => rect.x + rect.width / 2,
        };
        self.click(x, rect.y);
    }

    pub fn right_click_spinner(&mut self, field: FieldId) {
        let rect = self.spinner_rect(field);
        self.right_click(rect.x + rect.width / 2, rect.y);
    }

    pub fn scroll_spinner(&mut self, field: FieldId, up: bool) {
        let rect = self.spinner_rect(field);
        if up {
            self.scroll_up(rect.x + 1, rect.y);
        } else {
            self.scroll_down(rect.x + 1, rect.y);
        }
    }

    fn spinner_rect(&self, field: FieldId) -> Rect {
        let layout = self.layout();
        match field {
            FieldId::Month => layout.month_field,
            FieldId::Year => layout.year_field,
            FieldId::Hour => layout.hour_field,
            FieldId::Minute => layout.minute_field,
            FieldId::Second => layout.second_field,
            FieldId::Day => panic!("the day is not a spinner field"),
        }
    }

    pub fn click_ok(&mut self) {
        let ok = self.layout().ok_button;
        self.click(ok.x + 1, ok.y);
    }

    pub fn render(&self) -> Vec<String> {
        let backend = TestBackend::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|f| ui::render_picker(f, &self.picker))
            .expect("draw");

        let buffer = terminal.backend().buffer().clone();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol()))
                    .collect()
            })
            .collect()
    }

    pub fn screen_contains(&self, text: &str) -> bool {
        self.render().iter().any(|line| line.contains(text))
    }

    pub fn callback_count(&self) -> usize {
        self.confirmed.borrow().len()
    }

    pub fn last_callback(&self) -> Option<DateTimeRecord> {
        self.confirmed.borrow().last().cloned()
    }

    /// Invariants that must hold after any operation. Call at the end of
    /// every test.
    pub fn verify_invariants(&self) {
        if let (Some(year), Some(month)) = (self.picker.selection.year, self.picker.selection.month)
        {
            assert_eq!(self.picker.grid.year, year, "grid year out of sync");
            assert_eq!(self.picker.grid.month, month, "grid month out of sync");
            assert_eq!(
                self.picker.grid.enabled_count() as u32,
                calendar::days_in_month(year, month),
                "enabled cells != month length"
            );
        }

        if let Some(day) = self.picker.selection.day {
            assert!((1..=31).contains(&day), "day {day} out of slot range");
        }
    }
}

pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, minute, second)
        .expect("valid time")
}
