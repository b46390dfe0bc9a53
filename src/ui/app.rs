use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::Contact;
use crate::store::ContactStore;
use crate::view::ContactView;

use super::forms::{
    AgeField, AgeForm, BmiField, BmiForm, ConfirmContactDelete, ContactField, ContactForm,
    ConverterField, ConverterForm,
};
use super::helpers::{centered_rect, surface_error};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the detail pane beneath the contact list.
const DETAIL_HEIGHT: u16 = 6;

/// The four utility tabs. Keeping this explicit makes it easy to reason about
/// which rendering path runs and what keyboard shortcuts should do.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Tab {
    Contacts,
    Converter,
    Age,
    Bmi,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Contacts, Tab::Converter, Tab::Age, Tab::Bmi];

    fn label(self) -> &'static str {
        match self {
            Tab::Contacts => "Contacts",
            Tab::Converter => "Converter",
            Tab::Age => "Age",
            Tab::Bmi => "BMI",
        }
    }

    fn offset(self, direction: isize) -> Tab {
        let all = Tab::ALL;
        let pos = all.iter().position(|t| *t == self).unwrap_or(0);
        let next = (pos as isize + direction).rem_euclid(all.len() as isize) as usize;
        all[next]
    }
}

/// Fine-grained modes layered over the active tab.
enum Mode {
    Normal,
    /// Contact add/edit modal. `index` is the store position being edited, or
    /// `None` when creating.
    ContactForm {
        index: Option<usize>,
        form: ContactForm,
    },
    ConfirmDelete(ConfirmContactDelete),
    Searching(SearchState),
    /// Keyboard focus is inside the active calculator panel.
    Panel,
}

/// State for an active inline search over the contact list.
struct SearchState {
    query: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    store: ContactStore,
    view: ContactView,
    tab: Tab,
    converter: ConverterForm,
    age: AgeForm,
    bmi: BmiForm,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: ContactStore) -> Self {
        let view = ContactView::new(store.contacts());
        Self {
            store,
            view,
            tab: Tab::Contacts,
            converter: ConverterForm::default(),
            age: AgeForm::default(),
            bmi: BmiForm::default(),
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::ContactForm { index, form } => self.handle_contact_form(code, index, form)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
            Mode::Searching(state) => self.handle_search(code, state)?,
            Mode::Panel => self.handle_panel_key(code)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
                return Ok(Mode::Normal);
            }
            KeyCode::Tab => {
                self.switch_tab(self.tab.offset(1));
                return Ok(Mode::Normal);
            }
            KeyCode::BackTab => {
                self.switch_tab(self.tab.offset(-1));
                return Ok(Mode::Normal);
            }
            KeyCode::Char('1') => {
                self.switch_tab(Tab::Contacts);
                return Ok(Mode::Normal);
            }
            KeyCode::Char('2') => {
                self.switch_tab(Tab::Converter);
                return Ok(Mode::Normal);
            }
            KeyCode::Char('3') => {
                self.switch_tab(Tab::Age);
                return Ok(Mode::Normal);
            }
            KeyCode::Char('4') => {
                self.switch_tab(Tab::Bmi);
                return Ok(Mode::Normal);
            }
            _ => {}
        }

        match self.tab {
            Tab::Contacts => {
                match code {
                    KeyCode::Up => self.view.move_selection(-1),
                    KeyCode::Down => self.view.move_selection(1),
                    KeyCode::PageUp => self.view.move_selection(-5),
                    KeyCode::PageDown => self.view.move_selection(5),
                    KeyCode::Home => self.view.select_first(),
                    KeyCode::End => self.view.select_last(),
                    KeyCode::Char('f') => {
                        self.clear_status();
                        let query = self.view.filter().unwrap_or_default().to_string();
                        return Ok(Mode::Searching(SearchState { query }));
                    }
                    KeyCode::Char('+') => {
                        self.clear_status();
                        return Ok(Mode::ContactForm {
                            index: None,
                            form: ContactForm::default(),
                        });
                    }
                    KeyCode::Char('e') | KeyCode::Char('E') => {
                        if let Some((index, contact)) = self.current_contact() {
                            let form = ContactForm::from_contact(contact);
                            self.clear_status();
                            return Ok(Mode::ContactForm {
                                index: Some(index),
                                form,
                            });
                        } else {
                            self.set_status("No contact selected to edit.", StatusKind::Error);
                        }
                    }
                    KeyCode::Char('-') => {
                        if let Some((index, contact)) = self.current_contact() {
                            let confirm = ConfirmContactDelete {
                                index,
                                name: contact.name.clone(),
                            };
                            self.clear_status();
                            return Ok(Mode::ConfirmDelete(confirm));
                        } else {
                            self.set_status("No contact selected to delete.", StatusKind::Error);
                        }
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
            Tab::Converter | Tab::Age | Tab::Bmi => match code {
                KeyCode::Enter | KeyCode::Char('i') => {
                    self.clear_status();
                    Ok(Mode::Panel)
                }
                _ => Ok(Mode::Normal),
            },
        }
    }

    fn handle_contact_form(
        &mut self,
        code: KeyCode,
        index: Option<usize>,
        mut form: ContactForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                let message = if index.is_some() {
                    "Edit cancelled."
                } else {
                    "Add contact cancelled."
                };
                self.set_status(message, StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab => form.toggle_field(),
            KeyCode::BackTab => form.toggle_field_back(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_contact(index, &form) {
                Ok(message) => {
                    self.set_status(message, StatusKind::Info);
                    keep_open = false;
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::ContactForm { index, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    /// Persist the form either as a new contact or over an existing position,
    /// then resync the view against the mutated list.
    fn save_contact(&mut self, index: Option<usize>, form: &ContactForm) -> Result<&'static str> {
        let contact = form.parse_inputs()?;
        let message = match index {
            Some(index) => {
                self.store.replace(index, contact)?;
                "Contact updated."
            }
            None => {
                self.store.add(contact)?;
                "Contact added."
            }
        };
        self.view.refresh(self.store.contacts());
        Ok(message)
    }

    fn handle_confirm_delete(
        &mut self,
        code: KeyCode,
        confirm: ConfirmContactDelete,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.store.remove(confirm.index) {
                    Ok(removed) => {
                        self.view.refresh(self.store.contacts());
                        self.set_status(
                            format!("Deleted {}.", removed.name),
                            StatusKind::Info,
                        );
                        Ok(Mode::Normal)
                    }
                    Err(err) => {
                        self.set_status(err.to_string(), StatusKind::Error);
                        Ok(Mode::ConfirmDelete(confirm))
                    }
                }
            }
            _ => Ok(Mode::ConfirmDelete(confirm)),
        }
    }

    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.view.set_filter(None, self.store.contacts());
                self.clear_status();
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => {
                // Keep the filter in place and return to browsing.
                return Ok(Mode::Normal);
            }
            KeyCode::Up => {
                self.view.move_selection(-1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Down => {
                self.view.move_selection(1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::PageUp => {
                self.view.move_selection(-5);
                return Ok(Mode::Searching(state));
            }
            KeyCode::PageDown => {
                self.view.move_selection(5);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Home => {
                self.view.select_first();
                return Ok(Mode::Searching(state));
            }
            KeyCode::End => {
                self.view.select_last();
                return Ok(Mode::Searching(state));
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    state.query.push(ch);
                }
            }
            _ => {}
        }

        // Reapply on every keystroke so the list narrows as the user types.
        if state.query.trim().is_empty() {
            self.view.set_filter(None, self.store.contacts());
        } else {
            self.view
                .set_filter(Some(state.query.clone()), self.store.contacts());
        }

        Ok(Mode::Searching(state))
    }

    fn handle_panel_key(&mut self, code: KeyCode) -> Result<Mode> {
        match self.tab {
            Tab::Converter => self.handle_converter_key(code),
            Tab::Age => self.handle_age_key(code),
            Tab::Bmi => self.handle_bmi_key(code),
            Tab::Contacts => Ok(Mode::Normal),
        }
    }

    fn handle_converter_key(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.clear_status();
                return Ok(Mode::Normal);
            }
            KeyCode::Tab => self.converter.toggle_field(),
            KeyCode::BackTab => self.converter.toggle_field_back(),
            KeyCode::Left => self.converter.cycle(-1),
            KeyCode::Right => self.converter.cycle(1),
            KeyCode::Backspace => self.converter.backspace(),
            KeyCode::Enter => match self.converter.compute() {
                Ok(()) => self.set_status("Converted.", StatusKind::Info),
                Err(err) => {
                    let message = err.to_string();
                    self.converter.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if self.converter.push_char(ch) {
                    self.converter.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::Panel)
    }

    fn handle_age_key(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.clear_status();
                return Ok(Mode::Normal);
            }
            KeyCode::Tab => self.age.toggle_field(),
            KeyCode::BackTab => self.age.toggle_field_back(),
            KeyCode::Backspace => self.age.backspace(),
            KeyCode::Enter => match self.age.compute() {
                Ok(()) => self.set_status("Age calculated.", StatusKind::Info),
                Err(err) => {
                    let message = err.to_string();
                    self.age.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if self.age.push_char(ch) {
                    self.age.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::Panel)
    }

    fn handle_bmi_key(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.clear_status();
                return Ok(Mode::Normal);
            }
            KeyCode::Tab => self.bmi.toggle_field(),
            KeyCode::BackTab => self.bmi.toggle_field_back(),
            KeyCode::Left => self.bmi.cycle(-1),
            KeyCode::Right => self.bmi.cycle(1),
            KeyCode::Backspace => self.bmi.backspace(),
            KeyCode::Enter => match self.bmi.compute() {
                Ok(()) => self.set_status("BMI calculated.", StatusKind::Info),
                Err(err) => {
                    let message = err.to_string();
                    self.bmi.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if self.bmi.push_char(ch) {
                    self.bmi.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::Panel)
    }

    fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.clear_status();
        }
        self.tab = tab;
    }

    /// Store index and record behind the highlighted row, if any.
    fn current_contact(&self) -> Option<(usize, &Contact)> {
        let index = self.view.selected_store_index()?;
        self.store.contacts().get(index).map(|c| (index, c))
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(footer_height),
            ])
            .split(area);

        self.draw_tab_bar(frame, chunks[0]);

        match self.tab {
            Tab::Contacts => self.draw_contacts(frame, chunks[1]),
            Tab::Converter => self.draw_converter(frame, chunks[1]),
            Tab::Age => self.draw_age(frame, chunks[1]),
            Tab::Bmi => self.draw_bmi(frame, chunks[1]),
        }

        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::ContactForm { index, form } => {
                let title = if index.is_some() {
                    "Edit Contact"
                } else {
                    "Add Contact"
                };
                self.draw_contact_form(frame, area, title, form);
            }
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Searching(state) => self.draw_search_bar(frame, area, state),
            Mode::Panel | Mode::Normal => {}
        }
    }

    fn draw_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (idx, tab) in Tab::ALL.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if tab == self.tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("[{}] {}", idx + 1, tab.label()), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_contacts(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(DETAIL_HEIGHT)])
            .split(area);

        self.draw_contact_list(frame, chunks[0]);
        self.draw_contact_detail(frame, chunks[1]);
    }

    fn draw_contact_list(&self, frame: &mut Frame, area: Rect) {
        let filtering = self
            .view
            .filter()
            .map(|q| !q.trim().is_empty())
            .unwrap_or(false);
        let title = if filtering {
            format!("Contacts ({} of {})", self.view.len(), self.store.len())
        } else {
            format!("Contacts ({})", self.store.len())
        };
        let block = Block::default().title(title).borders(Borders::ALL);

        if self.store.is_empty() {
            let message = Paragraph::new("No contacts yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        if self.view.is_empty() {
            let message = Paragraph::new("No contacts match the current search.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let capacity = inner_height.max(1);
        let selected = self.view.selected_row();
        let start = if selected >= capacity {
            selected + 1 - capacity
        } else {
            0
        };

        let lines: Vec<Line> = self
            .view
            .rows()
            .iter()
            .enumerate()
            .skip(start)
            .take(capacity)
            .map(|(row, &store_idx)| {
                let contact = &self.store.contacts()[store_idx];
                if row == selected {
                    Line::from(Span::styled(
                        format!("> {}", contact.summary()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(format!("  {}", contact.summary()))
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_contact_detail(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Details").borders(Borders::ALL);

        let lines = match self.current_contact() {
            Some((_, contact)) => vec![
                Line::from(vec![
                    Span::styled("Name: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(contact.name.clone()),
                ]),
                Line::from(format!("Phone: {}", contact.phone)),
                Line::from(format!("Email: {}", contact.email)),
                Line::from(format!("Address: {}", contact.address)),
            ],
            None => vec![Line::from("No contact selected.")],
        };

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_converter(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Unit Converter").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = self.converter.build_lines();
        lines.push(Line::from(""));
        if let Some(error) = &self.converter.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else if let Some(result) = &self.converter.result {
            lines.push(Line::from(Span::styled(
                result.clone(),
                Style::default().fg(Color::Green),
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        if matches!(self.mode, Mode::Panel) && self.converter.active == ConverterField::Value {
            let prefix = "Value: ".len() as u16;
            frame.set_cursor_position((
                inner.x + prefix + self.converter.value_len() as u16,
                inner.y + 1,
            ));
        }
    }

    fn draw_age(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Age Calculator").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = self.age.build_lines();
        lines.push(Line::from(""));
        if let Some(error) = &self.age.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else if let Some(age) = &self.age.result {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} years, {} months, {} days old",
                    age.years, age.months, age.days
                ),
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(format!("Total months: {}", age.total_months)));
            lines.push(Line::from(format!("Total days: {}", age.total_days)));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        if matches!(self.mode, Mode::Panel) {
            let (prefix, row, field) = match self.age.active {
                AgeField::Day => ("Day: ", 0u16, AgeField::Day),
                AgeField::Month => ("Month: ", 1, AgeField::Month),
                AgeField::Year => ("Year: ", 2, AgeField::Year),
            };
            frame.set_cursor_position((
                inner.x + prefix.len() as u16 + self.age.value_len(field) as u16,
                inner.y + row,
            ));
        }
    }

    fn draw_bmi(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("BMI Calculator").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = self.bmi.build_lines();
        lines.push(Line::from(""));
        if let Some(error) = &self.bmi.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else if let Some(reading) = &self.bmi.result {
            lines.push(Line::from(Span::styled(
                format!("BMI: {:.2} ({})", reading.bmi, reading.category.label()),
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(format!(
                "Computed from {:.1} kg and {:.2} m",
                reading.weight_kg, reading.height_m
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        if matches!(self.mode, Mode::Panel) {
            let (prefix, row, field) = match self.bmi.active {
                BmiField::Weight => ("Weight: ", 0u16, BmiField::Weight),
                BmiField::Height => ("Height: ", 2, BmiField::Height),
                _ => return,
            };
            frame.set_cursor_position((
                inner.x + prefix.len() as u16 + self.bmi.value_len(field) as u16,
                inner.y + row,
            ));
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.mode, self.tab) {
            (Mode::Searching(_), _) => Line::from(vec![
                Span::styled("[type]", key_style),
                Span::raw(" Filter   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Keep Filter   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear"),
            ]),
            (Mode::ContactForm { .. }, _) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch Field   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Mode::ConfirmDelete(_), _) => Line::from(vec![
                Span::styled("[y/Enter]", key_style),
                Span::raw(" Confirm   "),
                Span::styled("[n/Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Mode::Panel, Tab::Age) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch Field   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Calculate   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back"),
            ]),
            (Mode::Panel, _) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch Field   "),
                Span::styled("[←→]", key_style),
                Span::raw(" Change Unit   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Calculate   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back"),
            ]),
            (Mode::Normal, Tab::Contacts) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[f]", key_style),
                Span::raw(" Search   "),
                Span::styled("[+]", key_style),
                Span::raw(" Add   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[-]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[Tab/1-4]", key_style),
                Span::raw(" Switch Tab   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Mode::Normal, _) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Use Panel   "),
                Span::styled("[Tab/1-4]", key_style),
                Span::raw(" Switch Tab   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_contact_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &ContactForm) {
        let popup_area = centered_rect(60, 45, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            form.build_line("Name", ContactField::Name),
            form.build_line("Phone", ContactField::Phone),
            form.build_line("Email", ContactField::Email),
            form.build_line("Address", ContactField::Address),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save, Tab to switch, Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (prefix, row, field) = match form.active {
            ContactField::Name => ("Name: ", 0u16, ContactField::Name),
            ContactField::Phone => ("Phone: ", 1, ContactField::Phone),
            ContactField::Email => ("Email: ", 2, ContactField::Email),
            ContactField::Address => ("Address: ", 3, ContactField::Address),
        };
        frame.set_cursor_position((
            inner.x + prefix.len() as u16 + form.value_len(field) as u16,
            inner.y + row,
        ));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmContactDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Deletion")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Delete '{}'?", confirm.name)),
            Line::from("This cannot be undone."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, state: &SearchState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Search");
        let paragraph = Paragraph::new(Span::raw(format!("Search: {}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Search: ".len() as u16 + state.query.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
