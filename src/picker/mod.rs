mod ops;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use ratatui::layout::{Position, Rect};

use crate::calendar::DayGrid;
use crate::config::Config;
use crate::record::{DateTimeRecord, RecordCallback};
use crate::ui::layout::anchored_rect;
use crate::ui::theme::Theme;

/// Lifecycle of the popup. Confirm moves Open to Confirmed; the host
/// closes the overlay and moves Confirmed (or Open, on Esc) to Closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Open,
    Confirmed,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldId {
    Month,
    Year,
    Day,
    Hour,
    Minute,
    Second,
}

/// Live values of the six fields. `None` is an emptied field; confirm
/// requires all six.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
}

/// Host-supplied ambient state: the drawable screen and the pointer
/// position the popup should appear at.
#[derive(Clone, Copy, Debug)]
pub struct PickerContext {
    pub screen: Rect,
    pub anchor: Position,
}

pub struct Picker {
    pub phase: Phase,
    pub selection: Selection,
    pub grid: DayGrid,
    /// Fixed popup rect, anchored and clamped at construction.
    pub area: Rect,
    pub theme: Theme,
    pub year_min: i32,
    pub year_max: i32,
    /// Display strings, refreshed on every field edit.
    pub preview_date: String,
    pub preview_time: String,
    result: DateTimeRecord,
    callback: Option<RecordCallback>,
}

impl Picker {
    pub fn new(ctx: PickerContext, config: &Config, callback: Option<RecordCallback>) -> Self {
        Self::at_datetime(ctx, config, Local::now().naive_local(), callback)
    }

    /// Construction at an explicit instant. Every field starts on "now",
    /// including the day cell, and the unconfirmed result defaults to it.
    pub fn at_datetime(
        ctx: PickerContext,
        config: &Config,
        now: NaiveDateTime,
        callback: Option<RecordCallback>,
    ) -> Self {
        let selection = Selection {
            year: Some(now.year()),
            month: Some(now.month()),
            day: Some(now.day()),
            hour: Some(now.hour()),
            minute: Some(now.minute()),
            second: Some(now.second()),
        };

        let span = config.year_span as i32;
        let mut picker = Self {
            phase: Phase::Open,
            selection,
            grid: DayGrid::build(now.year(), now.month()),
            area: anchored_rect(ctx.anchor, ctx.screen),
            theme: Theme::from_overrides(&config.theme),
            year_min: now.year() - span,
            year_max: now.year() + span,
            preview_date: String::new(),
            preview_time: String::new(),
            result: DateTimeRecord::from_datetime(now),
            callback,
        };
        picker.refresh_preview();
        picker
    }

    /// The committed record, or the construction-time default when the
    /// picker was never confirmed.
    #[must_use]
    pub fn date_time(&self) -> &DateTimeRecord {
        &self.result
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open)
    }
}
