use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::{App, DemographicsField, Focus, HitAreas};
use crate::overlay::{overlay_area, render_overlay};
use crate::results::{SeverityTier, tips};
use crate::wizard::{Gender, Step};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [header_area, body_area, error_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.hit_areas = HitAreas::default();

        self.render_step_indicator(frame, header_area);
        match self.wizard.step() {
            Step::Collecting => self.render_collecting(frame, body_area),
            Step::Demographics => self.render_demographics(frame, body_area),
            Step::Review => self.render_review(frame, body_area),
            Step::Results => self.render_results(frame, body_area),
        }
        self.render_error(frame, error_area);
        self.render_footer(frame, footer_area);
    }

    fn render_step_indicator(&self, frame: &mut Frame, area: Rect) {
        let current = self.wizard.step();
        let mut spans = Vec::new();
        for (i, step) in Step::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
            }
            let label = format!("{} {}", step.number(), step.title());
            let style = if *step == current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if step.number() < current.number() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(label, style));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Symptom checker ")
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_collecting(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, selected_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

        let state = self.wizard.state();
        let focused = self.focus == Focus::SymptomInput;
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };

        let mut input_line = vec![Span::raw(state.input.clone())];
        if focused {
            input_line.push(Span::styled(" ", Style::default().bg(Color::Gray)));
        }
        if state.input.is_empty() && !focused {
            input_line = vec![Span::styled(
                "Type a symptom, e.g. fever",
                Style::default().fg(Color::DarkGray),
            )];
        }
        let input = Paragraph::new(Line::from(input_line)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Symptoms ")
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(input, input_area);

        let selected_lines: Vec<Line> = if state.selection.is_empty() {
            vec![Line::from(Span::styled(
                "No symptoms selected yet",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            state
                .selection
                .iter()
                .map(|symptom| Line::from(format!("• {symptom}")))
                .collect()
        };
        let selected = Paragraph::new(selected_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Selected ({}) ", state.selection.len()))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(selected, selected_area);

        let overlay = overlay_area(&state.overlay, input_area, area);
        if let Some(overlay_rect) = overlay {
            render_overlay(frame, &state.overlay, overlay_rect);
        }

        self.hit_areas = HitAreas {
            input: Some(input_area),
            overlay,
        };
    }

    fn render_demographics(&self, frame: &mut Frame, area: Rect) {
        let state = self.wizard.state();
        let age = state
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "not given".to_string());

        let field_style = |field: DemographicsField| {
            if self.demographics_field == field {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            }
        };

        let lines = vec![
            Line::from("Both fields are optional."),
            Line::from(""),
            Line::from(vec![
                Span::styled("Age:    ", field_style(DemographicsField::Age)),
                Span::raw(age),
            ]),
            Line::from(vec![
                Span::styled("Gender: ", field_style(DemographicsField::Gender)),
                Span::raw(format!("‹ {} ›", state.gender.label())),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" About you ")
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_review(&self, frame: &mut Frame, area: Rect) {
        let state = self.wizard.state();
        let mut lines = vec![Line::from(Span::styled(
            "Symptoms",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.extend(state.selection.iter().map(|s| Line::from(format!("  • {s}"))));
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "Age: {}",
            state.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
        )));
        let gender = match state.gender {
            Gender::Unspecified => "-",
            other => other.label(),
        };
        lines.push(Line::from(format!("Gender: {gender}")));
        lines.push(Line::from(""));

        let status = if state.loading {
            Span::styled("Analyzing…", Style::default().fg(Color::Yellow))
        } else {
            Span::styled("Press Enter to analyze", Style::default().fg(Color::Green))
        };
        lines.push(Line::from(status));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Review ")
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let Some(result) = self.wizard.state().result.as_ref() else {
            return;
        };

        let tier = SeverityTier::from_label(&result.severity);
        let severity_color = match tier {
            SeverityTier::High => Color::Red,
            SeverityTier::Medium => Color::Yellow,
            SeverityTier::General => Color::Green,
        };
        let severity = if result.severity.trim().is_empty() {
            "unknown".to_string()
        } else {
            result.severity.clone()
        };

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Severity: ", bold),
                Span::styled(
                    severity,
                    Style::default()
                        .fg(severity_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(tips(result)),
            Line::from(""),
        ];

        if let Some(condition) = &result.top_condition {
            lines.push(Line::from(vec![
                Span::styled("Most likely: ", bold),
                Span::raw(condition.clone()),
            ]));
            if let Some(details) = &result.condition_details {
                lines.push(Line::from(format!("  {details}")));
            }
            if let Some(treatment) = &result.treatment {
                lines.push(Line::from(format!("  Treatment: {treatment}")));
            }
            lines.push(Line::from(""));
        }

        if !result.insights.is_empty() {
            lines.push(Line::from(Span::styled("Insights", bold)));
            lines.extend(result.insights.iter().map(|i| Line::from(format!("  • {i}"))));
            lines.push(Line::from(""));
        }

        if !result.advice.trim().is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Advice: ", bold),
                Span::raw(result.advice.clone()),
            ]));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Results ")
            .border_style(Style::default().fg(severity_color));
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
            area,
        );
    }

    fn render_error(&self, frame: &mut Frame, area: Rect) {
        if let Some(error) = &self.wizard.state().error {
            let line = Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red));
            frame.render_widget(line, area);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.wizard.step() {
            Step::Collecting => "↑/↓ choose · Enter/, add · Bksp remove · Tab next · Ctrl+C quit",
            Step::Demographics => "↑/↓ field · digits age · ←/→ gender · Tab next · Shift+Tab back",
            Step::Review if self.wizard.is_loading() => "Waiting for analysis · Ctrl+R restart",
            Step::Review => "Enter analyze · Shift+Tab back · Ctrl+R restart",
            Step::Results => "Enter or Ctrl+R start over · Ctrl+C quit",
        };
        let footer =
            Paragraph::new(format!(" {hints}")).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
