use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::layout::{FieldLayout, APPLY_LABEL, PICKER_INDENT, RESET_LABEL};
use super::state::FocusTarget;
use super::SettingsPanel;
use crate::article::PickerKind;
use crate::config::DisplayConfig;
use crate::tui::widgets::{
    render_button, render_frame, render_horizontal_separator, render_radio_group, render_select,
    ArrowButton, RenderableWidget,
};

const HEADING: &str = "ARTICLE SETTINGS";

impl SettingsPanel {
    /// Lay out and draw the panel over whatever is already in `buf`
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        self.mount(area, config.panel_width, &config.box_chars);
        let Some(layout) = self.layout() else {
            return;
        };

        let base = Style::reset();

        if let Some(aside) = &layout.aside {
            render_frame(aside.frame, buf, &config.box_chars, base);
            if !aside.heading.is_empty() {
                buf.set_stringn(
                    aside.heading.x,
                    aside.heading.y,
                    HEADING,
                    aside.heading.width as usize,
                    base.add_modifier(Modifier::BOLD),
                );
            }

            for field in &aside.fields {
                self.render_field(field, buf, config);
            }

            render_horizontal_separator(
                0,
                aside.separator,
                aside.separator.y,
                buf,
                Style::default().add_modifier(Modifier::DIM),
                config,
            );

            render_button(RESET_LABEL, aside.reset, buf, self.control_style(FocusTarget::Reset, config));
            render_button(APPLY_LABEL, aside.apply, buf, self.control_style(FocusTarget::Apply, config));
        }

        ArrowButton::new(self.is_open()).render(layout.toggle, buf, config);
    }

    fn control_style(&self, target: FocusTarget, config: &DisplayConfig) -> Style {
        if self.state.focus == target {
            Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }

    fn render_field(&self, field: &FieldLayout, buf: &mut Buffer, config: &DisplayConfig) {
        let target = FocusTarget::Field(field.slot);
        let focused = self.state.focus == target;

        if !field.title.is_empty() {
            buf.set_stringn(
                field.title.x,
                field.title.y,
                field.slot.title(),
                field.title.width as usize,
                Style::default().add_modifier(Modifier::DIM),
            );
        }

        let picker = field.picker;
        if picker.is_empty() {
            return;
        }
        if focused {
            buf.set_string(picker.x, picker.y, &config.box_chars.selector, Style::default().fg(config.selection_fg));
        }

        let x = picker.x + PICKER_INDENT;
        let max_width = picker.width.saturating_sub(PICKER_INDENT);
        let selected = self.state.draft.get(field.slot);
        let style = self.control_style(target, config);

        match field.slot.picker() {
            PickerKind::Select => {
                render_select(&selected, x, picker.y, max_width, buf, style, config);
            }
            PickerKind::RadioGroup => {
                let selected_fg = if focused {
                    config.selection_fg
                } else {
                    config.unfocused_selection_fg()
                };
                render_radio_group(
                    field.slot.catalog(),
                    &selected,
                    x,
                    picker.y,
                    max_width,
                    buf,
                    Style::default(),
                    Style::default().fg(selected_fg),
                    config,
                );
            }
        }
    }
}
