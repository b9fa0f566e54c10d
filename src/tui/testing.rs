//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::article::SettingsRecord;
use super::events::GlobalEvents;
use super::panel::SettingsPanel;

/// Standard terminal size used by panel tests
pub const TEST_AREA: Rect = Rect { x: 0, y: 0, width: 80, height: 24 };

/// Records passed to `on_apply`, in call order
pub type AppliedLog = Rc<RefCell<Vec<SettingsRecord>>>;

/// Creates a panel whose `on_apply` calls are recorded.
///
/// Returns the panel, the global event registry it subscribes to, and the log.
pub fn recording_panel(current: &SettingsRecord) -> (SettingsPanel, GlobalEvents, AppliedLog) {
    let events = GlobalEvents::new();
    let applied: AppliedLog = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&applied);
    let panel = SettingsPanel::new(current, move |record| log.borrow_mut().push(record), &events);
    (panel, events, applied)
}

/// A key press without modifiers
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::DEFAULT_SETTINGS;

    #[test]
    fn test_recording_panel_starts_empty() {
        let (panel, events, applied) = recording_panel(&DEFAULT_SETTINGS);
        assert!(applied.borrow().is_empty());
        assert_eq!(events.count_for(panel.owner()), 0);
    }

    #[test]
    fn test_recording_panel_logs_applies() {
        let (mut panel, _events, applied) = recording_panel(&DEFAULT_SETTINGS);
        panel.reset();
        panel.submit();
        assert_eq!(applied.borrow().len(), 2);
    }

    #[test]
    fn test_buffer_lines() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 2));
        buf.set_string(0, 1, "abc", ratatui::style::Style::default());
        assert_eq!(buffer_lines(&buf), vec!["   ".to_string(), "abc".to_string()]);
    }
}
