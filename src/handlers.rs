use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::picker::Picker;
use crate::ui::layout::{PickerLayout, Region, SpinnerPart};

/// The keyboard surface is window lifecycle only: Enter confirms, Esc
/// closes without confirming.
pub fn handle_key(picker: &mut Picker, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            picker.confirm();
        }
        KeyCode::Esc => picker.close(),
        _ => {}
    }
}

pub fn handle_mouse(picker: &mut Picker, event: MouseEvent) {
    let layout = PickerLayout::new(picker.area);
    let position = Position::new(event.column, event.row);
    let region = layout.hit(position, &picker.grid);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => match region {
            Some(Region::Spinner {
                field,
                part: SpinnerPart::Prev,
            }) => picker.cycle_field(field, -1),
            Some(Region::Spinner {
                field,
                part: SpinnerPart::Next,
            }) => picker.cycle_field(field, 1),
            Some(Region::Day(day)) => picker.select_day(day),
            Some(Region::Ok) => {
                picker.confirm();
            }
            _ => {}
        },
        MouseEventKind::Down(MouseButton::Right) => {
            if let Some(Region::Spinner { field, .. }) = region {
                picker.clear_field(field);
            }
        }
        MouseEventKind::ScrollUp => {
            if let Some(Region::Spinner { field, .. }) = region {
                picker.cycle_field(field, 1);
            }
        }
        MouseEventKind::ScrollDown => {
            if let Some(Region::Spinner { field, .. }) = region {
                picker.cycle_field(field, -1);
            }
        }
        _ => {}
    }
}
