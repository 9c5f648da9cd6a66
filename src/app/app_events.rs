use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::app_state::{App, DemographicsField, Focus};
use crate::wizard::Step;

impl App {
    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.wizard.step() {
            Step::Collecting => self.handle_collecting_key(key),
            Step::Demographics => self.handle_demographics_key(key),
            Step::Review => self.handle_review_key(key),
            Step::Results => self.handle_results_key(key),
        }
    }

    /// Keys that work on every step. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('r') if ctrl => {
                self.restart();
                true
            }
            KeyCode::Tab => {
                self.wizard.next();
                true
            }
            KeyCode::BackTab => {
                if self.wizard.back() && self.wizard.step() == Step::Collecting {
                    self.focus = Focus::SymptomInput;
                }
                true
            }
            _ => false,
        }
    }

    fn handle_collecting_key(&mut self, key: KeyEvent) {
        if self.focus != Focus::SymptomInput {
            self.focus = Focus::SymptomInput;
            self.wizard.focus();
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(',') => {
                self.wizard.commit();
            }
            KeyCode::Down => self.wizard.arrow_down(),
            KeyCode::Up => self.wizard.arrow_up(),
            KeyCode::Esc => self.wizard.escape(),
            KeyCode::Backspace => {
                if self.wizard.state().input.is_empty() {
                    self.wizard.remove_last_symptom();
                } else {
                    self.wizard.pop_char();
                }
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.wizard.push_char(ch);
            }
            _ => {}
        }
    }

    fn handle_demographics_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.demographics_field = self.demographics_field.toggle();
            }
            KeyCode::Enter => {
                self.wizard.next();
            }
            _ => match self.demographics_field {
                DemographicsField::Age => match key.code {
                    KeyCode::Char(ch) => self.wizard.push_age_digit(ch),
                    KeyCode::Backspace | KeyCode::Delete => self.wizard.pop_age_digit(),
                    _ => {}
                },
                DemographicsField::Gender => {
                    let gender = self.wizard.state().gender;
                    match key.code {
                        KeyCode::Left => self.wizard.set_gender(gender.previous()),
                        KeyCode::Right | KeyCode::Char(' ') => {
                            self.wizard.set_gender(gender.next())
                        }
                        _ => {}
                    }
                }
            },
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit();
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.restart();
        }
    }

    /// Handle mouse events on the symptom step
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if self.wizard.step() != Step::Collecting {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);

        if let Some(index) = self.suggestion_row_at(position) {
            self.wizard.commit_at(index);
            self.focus = Focus::SymptomInput;
            return;
        }

        if self.hit_areas.input.is_some_and(|area| area.contains(position)) {
            self.focus = Focus::SymptomInput;
            self.wizard.focus();
            return;
        }

        if self.focus == Focus::SymptomInput {
            self.focus = Focus::Elsewhere;
            self.wizard.blur(now);
        }
    }

    /// Suggestion index under `position`, if the overlay is showing one there
    fn suggestion_row_at(&self, position: Position) -> Option<usize> {
        let area: Rect = self.hit_areas.overlay?;
        if !self.wizard.state().overlay.is_visible() || !area.contains(position) {
            return None;
        }
        // First row inside the top border
        let first_row = area.y + 1;
        if position.y < first_row {
            return None;
        }
        let index = (position.y - first_row) as usize;
        (index < self.wizard.state().overlay.suggestions().len()).then_some(index)
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
