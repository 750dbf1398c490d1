use ratatui::layout::{Position, Rect};

use crate::calendar::{DaySlot, GRID_ROWS};
use crate::picker::FieldId;

// The popup is fixed-size and non-resizable.
pub const POPUP_WIDTH: u16 = 32;
pub const POPUP_HEIGHT: u16 = 12;

const CELL_WIDTH: u16 = 4;
const MONTH_FIELD_WIDTH: u16 = 13;
const YEAR_FIELD_WIDTH: u16 = 8;
const TIME_FIELD_WIDTH: u16 = 4;
const CONTENT_WIDTH: u16 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinnerPart {
    Prev,
    Next,
    Label,
}

/// What a pointer position lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Spinner { field: FieldId, part: SpinnerPart },
    Day(u32),
    Ok,
}

/// Place the popup near the anchor, flipped left/up when it would run off
/// the screen edge, then clamped fully on-screen.
#[must_use]
pub fn anchored_rect(anchor: Position, screen: Rect) -> Rect {
    let width = POPUP_WIDTH.min(screen.width);
    let height = POPUP_HEIGHT.min(screen.height);

    let x = if anchor.x + width > screen.right() {
        anchor.x.saturating_sub(width)
    } else {
        anchor.x
    };
    let y = if anchor.y + height > screen.bottom() {
        anchor.y.saturating_sub(height)
    } else {
        anchor.y
    };

    Rect {
        x: x.clamp(screen.x, screen.right().saturating_sub(width)),
        y: y.clamp(screen.y, screen.bottom().saturating_sub(height)),
        width,
        height,
    }
}

/// Every sub-rect of the popup, derived from its outer area. The renderer
/// and the mouse handler share this so clicks always land on what was
/// drawn.
#[derive(Clone, Debug)]
pub struct PickerLayout {
    pub popup_area: Rect,
    pub month_field: Rect,
    pub year_field: Rect,
    pub weekday_row: Rect,
    pub grid_area: Rect,
    pub hour_field: Rect,
    pub minute_field: Rect,
    pub second_field: Rect,
    pub preview_area: Rect,
    pub ok_button: Rect,
}

impl PickerLayout {
    #[must_use]
    pub fn new(popup_area: Rect) -> Self {
        let inner = Rect {
            x: popup_area.x + 1,
            y: popup_area.y + 1,
            width: popup_area.width.saturating_sub(2),
            height: popup_area.height.saturating_sub(2),
        };
        let content_x = inner.x + 1;

        let row = |y_offset: u16, x: u16, width: u16| Rect {
            x,
            y: inner.y + y_offset,
            width,
            height: 1,
        };

        let time_x = content_x + (CONTENT_WIDTH - 3 * TIME_FIELD_WIDTH - 2 * 3) / 2;

        Self {
            popup_area,
            month_field: row(0, content_x, MONTH_FIELD_WIDTH),
            year_field: row(0, content_x + CONTENT_WIDTH - YEAR_FIELD_WIDTH, YEAR_FIELD_WIDTH),
            weekday_row: row(1, content_x, CONTENT_WIDTH),
            grid_area: Rect {
                x: content_x,
                y: inner.y + 2,
                width: CONTENT_WIDTH,
                height: GRID_ROWS,
            },
            hour_field: row(8, time_x, TIME_FIELD_WIDTH),
            minute_field: row(8, time_x + TIME_FIELD_WIDTH + 3, TIME_FIELD_WIDTH),
            second_field: row(8, time_x + 2 * (TIME_FIELD_WIDTH + 3), TIME_FIELD_WIDTH),
            preview_area: row(9, content_x, CONTENT_WIDTH - 5),
            ok_button: row(9, content_x + CONTENT_WIDTH - 4, 4),
        }
    }

    /// True when the host screen could not fit the full popup; nothing is
    /// drawn in that case.
    #[must_use]
    pub fn is_too_small(&self) -> bool {
        self.popup_area.width < POPUP_WIDTH || self.popup_area.height < POPUP_HEIGHT
    }

    #[must_use]
    pub fn day_cell(&self, slot: &DaySlot) -> Rect {
        Rect {
            x: self.grid_area.x + slot.col * CELL_WIDTH,
            y: self.grid_area.y + slot.row,
            width: CELL_WIDTH,
            height: 1,
        }
    }

    /// Column of the weekday header label for the given weekday column.
    #[must_use]
    pub fn weekday_cell(&self, col: u16) -> Rect {
        Rect {
            x: self.weekday_row.x + col * CELL_WIDTH,
            y: self.weekday_row.y,
            width: CELL_WIDTH,
            height: 1,
        }
    }

    /// Resolve a pointer position. Day cells are reported by day number
    /// regardless of enablement; the picker decides whether the click acts.
    #[must_use]
    pub fn hit(&self, position: Position, grid: &crate::calendar::DayGrid) -> Option<Region> {
        let spinners = [
            (self.month_field, FieldId::Month),
            (self.year_field, FieldId::Year),
            (self.hour_field, FieldId::Hour),
            (self.minute_field, FieldId::Minute),
            (self.second_field, FieldId::Second),
        ];
        for (rect, field) in spinners {
            if rect.contains(position) {
                let part = if position.x == rect.x {
                    SpinnerPart::Prev
                } else if position.x == rect.right() - 1 {
                    SpinnerPart::Next
                } else {
                    SpinnerPart::Label
                };
                return Some(Region::Spinner { field, part });
            }
        }

        if self.ok_button.contains(position) {
            return Some(Region::Ok);
        }

        if self.grid_area.contains(position) {
            for (day, slot) in grid.slots() {
                if self.day_cell(slot).contains(position) {
                    return Some(Region::Day(day));
                }
            }
        }

        None
    }
}
