use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::calendar::{MONTH_NAMES, WEEKDAY_NAMES};
use crate::picker::Picker;

use super::layout::PickerLayout;
use super::theme;

pub fn render_picker(f: &mut Frame<'_>, picker: &Picker) {
    let layout = PickerLayout::new(picker.area);
    if layout.is_too_small() {
        return;
    }
    let colors = &picker.theme;

    f.render_widget(Clear, layout.popup_area);

    let block = Block::default()
        .title(Span::styled(" Calendar ", Style::new().fg(colors.accent)))
        .borders(Borders::ALL)
        .border_style(Style::new().fg(colors.border));
    f.render_widget(block, layout.popup_area);

    let month_label = picker
        .selection
        .month
        .map(|m| MONTH_NAMES[(m - 1) as usize])
        .unwrap_or(theme::EMPTY_MONTH);
    render_spinner(
        f,
        layout.month_field,
        month_label,
        picker.selection.month.is_none(),
        picker,
    );

    let year_label = picker
        .selection
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| theme::EMPTY_YEAR.to_string());
    render_spinner(
        f,
        layout.year_field,
        &year_label,
        picker.selection.year.is_none(),
        picker,
    );

    for (i, name) in WEEKDAY_NAMES.iter().enumerate() {
        let style = if i == 0 || i == 6 {
            Style::new().fg(colors.weekend).bold()
        } else {
            Style::new().fg(colors.text).bold()
        };
        let cell = layout.weekday_cell(i as u16);
        f.render_widget(Paragraph::new(Span::styled(*name, style)), cell);
    }

    for (day, slot) in picker.grid.slots() {
        let selected = picker.selection.day == Some(day);
        let mut style = if selected {
            Style::new().fg(colors.text_on_accent).bg(colors.selected)
        } else if slot.weekend {
            Style::new().fg(colors.weekend)
        } else {
            Style::new().fg(colors.text)
        };
        if !slot.enabled {
            // A stale selection stays visible, just dimmed out.
            if !selected {
                style = style.fg(colors.disabled);
            }
            style = style.dim();
        }

        let label = format!(" {day:2} ");
        f.render_widget(Paragraph::new(Span::styled(label, style)), layout.day_cell(slot));
    }

    let time_label = |value: Option<u32>| match value {
        Some(value) => format!("{value:02}"),
        None => theme::EMPTY_TIME.to_string(),
    };
    render_spinner(
        f,
        layout.hour_field,
        &time_label(picker.selection.hour),
        picker.selection.hour.is_none(),
        picker,
    );
    render_spinner(
        f,
        layout.minute_field,
        &time_label(picker.selection.minute),
        picker.selection.minute.is_none(),
        picker,
    );
    render_spinner(
        f,
        layout.second_field,
        &time_label(picker.selection.second),
        picker.selection.second.is_none(),
        picker,
    );

    let colon = Style::new().fg(colors.text);
    let colon_rect = |x: u16| Rect {
        x,
        y: layout.hour_field.y,
        width: 1,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Span::styled(":", colon)),
        colon_rect(layout.hour_field.right() + 1),
    );
    f.render_widget(
        Paragraph::new(Span::styled(":", colon)),
        colon_rect(layout.minute_field.right() + 1),
    );

    let preview = match (picker.preview_date.is_empty(), picker.preview_time.is_empty()) {
        (false, false) => format!("{} {}", picker.preview_date, picker.preview_time),
        (false, true) => picker.preview_date.clone(),
        (true, false) => picker.preview_time.clone(),
        (true, true) => String::new(),
    };
    f.render_widget(
        Paragraph::new(Span::styled(preview, Style::new().fg(colors.text).dim())),
        layout.preview_area,
    );

    let ok = Span::styled(
        theme::OK_LABEL,
        Style::new().fg(colors.text_on_accent).bg(colors.accent).bold(),
    );
    f.render_widget(Paragraph::new(ok), layout.ok_button);
}

/// One selector: arrow glyphs at either edge, the value centered between.
fn render_spinner(f: &mut Frame<'_>, rect: Rect, label: &str, cleared: bool, picker: &Picker) {
    let colors = &picker.theme;
    let inner_width = rect.width.saturating_sub(2) as usize;

    let label_width = label.width().min(inner_width);
    let left_pad = (inner_width - label_width) / 2;
    let right_pad = inner_width - label_width - left_pad;

    let value_style = if cleared {
        Style::new().fg(theme::CLEARED).dim()
    } else {
        Style::new().fg(colors.text)
    };

    let line = Line::from(vec![
        Span::styled(theme::GLYPH_PREV, Style::new().fg(colors.accent)),
        Span::raw(" ".repeat(left_pad)),
        Span::styled(label.to_string(), value_style),
        Span::raw(" ".repeat(right_pad)),
        Span::styled(theme::GLYPH_NEXT, Style::new().fg(colors.accent)),
    ]);
    f.render_widget(Paragraph::new(line), rect);
}
