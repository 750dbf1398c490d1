use crate::calendar::{self, DayGrid};
use crate::record::DateTimeRecord;

use super::{FieldId, Phase, Picker, Selection};

impl Picker {
    /// Step a selector through its value list. Months and the time fields
    /// wrap; years clamp at the ends of the configured range. A cleared
    /// field re-enters its list at the nearest end.
    pub fn cycle_field(&mut self, field: FieldId, delta: i32) {
        if !self.is_open() {
            return;
        }

        match field {
            FieldId::Month => {
                let index = match self.selection.month {
                    Some(month) => (month as i32 - 1 + delta).rem_euclid(12),
                    None if delta >= 0 => 0,
                    None => 11,
                };
                self.selection.month = Some(index as u32 + 1);
                self.rebuild_grid();
            }
            FieldId::Year => {
                let year = match self.selection.year {
                    Some(year) => year + delta,
                    None => (self.year_min + self.year_max) / 2,
                };
                self.selection.year = Some(year.clamp(self.year_min, self.year_max));
                self.rebuild_grid();
            }
            FieldId::Hour => self.selection.hour = Some(cycled(self.selection.hour, delta, 24)),
            FieldId::Minute => {
                self.selection.minute = Some(cycled(self.selection.minute, delta, 60));
            }
            FieldId::Second => {
                self.selection.second = Some(cycled(self.selection.second, delta, 60));
            }
            // The day is picked from the grid, not cycled.
            FieldId::Day => {}
        }

        self.refresh_preview();
    }

    /// Empty a field. Confirm refuses while any field is empty.
    pub fn clear_field(&mut self, field: FieldId) {
        if !self.is_open() {
            return;
        }

        match field {
            FieldId::Month => self.selection.month = None,
            FieldId::Year => self.selection.year = None,
            FieldId::Day => self.selection.day = None,
            FieldId::Hour => self.selection.hour = None,
            FieldId::Minute => self.selection.minute = None,
            FieldId::Second => self.selection.second = None,
        }

        // The grid keeps its last computed enablement until month and year
        // are both set again.
        self.refresh_preview();
    }

    /// Select a day cell. Ignored for disabled cells and while month or
    /// year is cleared.
    pub fn select_day(&mut self, day: u32) {
        if !self.is_open() {
            return;
        }
        if self.selection.month.is_none() || self.selection.year.is_none() {
            return;
        }
        if !self.grid.is_enabled(day) {
            return;
        }

        self.selection.day = Some(day);
        self.refresh_preview();
    }

    /// Commit the selection. Returns the record on success; `None` when
    /// any field is empty or the selected day does not exist in the
    /// current month, in which case nothing changes and the popup stays
    /// open.
    pub fn confirm(&mut self) -> Option<&DateTimeRecord> {
        if !self.is_open() {
            return None;
        }

        let Selection {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
        } = self.selection
        else {
            return None;
        };

        if day > calendar::days_in_month(year, month) {
            return None;
        }

        let record = DateTimeRecord::compose(year, month, day, hour, minute, second);
        if let Some(callback) = self.callback.as_mut() {
            callback(&record);
        }
        self.result = record;
        self.phase = Phase::Confirmed;
        Some(&self.result)
    }

    /// Terminal transition; idempotent. Without a prior confirm the getter
    /// keeps returning the construction-time default.
    pub fn close(&mut self) {
        self.phase = Phase::Closed;
    }

    fn rebuild_grid(&mut self) {
        let (Some(year), Some(month)) = (self.selection.year, self.selection.month) else {
            return;
        };
        self.grid = DayGrid::build(year, month);
    }

    pub(super) fn refresh_preview(&mut self) {
        self.preview_date = match (self.selection.year, self.selection.month, self.selection.day) {
            (Some(year), Some(month), Some(day)) => format!("{year}-{month:02}-{day:02}"),
            _ => String::new(),
        };
        self.preview_time = match (
            self.selection.hour,
            self.selection.minute,
            self.selection.second,
        ) {
            (Some(hour), Some(minute), Some(second)) => {
                format!("{hour:02}:{minute:02}:{second:02}")
            }
            _ => String::new(),
        };
    }
}

fn cycled(current: Option<u32>, delta: i32, modulus: i32) -> u32 {
    let value = match current {
        Some(value) => (value as i32 + delta).rem_euclid(modulus),
        None if delta >= 0 => 0,
        None => modulus - 1,
    };
    value as u32
}
