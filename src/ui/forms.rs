//! Form state for every panel. Each form owns its raw text fields, the focus
//! position, and the last validation error, keeping keyboard handling out of
//! the draw code like the modal flows elsewhere in the app. The calculator
//! forms also hold their last result so it stays on screen between edits.

use anyhow::{anyhow, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::age::{calculate_age, AgeBreakdown};
use crate::bmi::{calculate_bmi, BmiReading, BodyHeightUnit, BodyWeightUnit};
use crate::convert::{parse_number, ConversionKind};
use crate::models::Contact;

/// Render a `Label: value` line with the shared focus/placeholder styling.
fn field_line(label: &str, value: &str, placeholder: &str, is_active: bool) -> Line<'static> {
    let display = if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    };

    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(format!("{label}: ")),
        Span::styled(display, style),
    ])
}

/// Render a picker line. The angle markers only appear while the picker is
/// focused, signalling that left/right cycles the choice.
fn choice_line(label: &str, value: &str, is_active: bool) -> Line<'static> {
    let (display, style) = if is_active {
        (
            format!("‹ {value} ›"),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (value.to_string(), Style::default())
    };

    Line::from(vec![
        Span::raw(format!("{label}: ")),
        Span::styled(display, style),
    ])
}

/// Fields available within the contact form.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum ContactField {
    #[default]
    Name,
    Phone,
    Email,
    Address,
}

/// Internal representation of the add/edit contact form.
#[derive(Default, Clone)]
pub(crate) struct ContactForm {
    pub(crate) name: String,
    pub(crate) phone: String,
    pub(crate) email: String,
    pub(crate) address: String,
    pub(crate) active: ContactField,
    pub(crate) error: Option<String>,
}

impl ContactForm {
    /// Populate the form from an existing contact when entering edit mode.
    pub(crate) fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            address: contact.address.clone(),
            active: ContactField::Name,
            error: None,
        }
    }

    /// Cycle focus across the four fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            ContactField::Name => ContactField::Phone,
            ContactField::Phone => ContactField::Email,
            ContactField::Email => ContactField::Address,
            ContactField::Address => ContactField::Name,
        };
    }

    pub(crate) fn toggle_field_back(&mut self) {
        self.active = match self.active {
            ContactField::Name => ContactField::Address,
            ContactField::Phone => ContactField::Name,
            ContactField::Email => ContactField::Phone,
            ContactField::Address => ContactField::Email,
        };
    }

    /// Insert a character into the active field.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            ContactField::Name => self.name.push(ch),
            ContactField::Phone => self.phone.push(ch),
            ContactField::Email => self.email.push(ch),
            ContactField::Address => self.address.push(ch),
        }
        true
    }

    /// Remove a character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            ContactField::Name => {
                self.name.pop();
            }
            ContactField::Phone => {
                self.phone.pop();
            }
            ContactField::Email => {
                self.email.pop();
            }
            ContactField::Address => {
                self.address.pop();
            }
        }
    }

    /// Validate and normalize form inputs before they reach the store.
    pub(crate) fn parse_inputs(&self) -> Result<Contact> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Name is required."));
        }
        Ok(Contact {
            name: name.to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
        })
    }

    /// Render a styled line for the modal form.
    pub(crate) fn build_line(&self, field_name: &str, field: ContactField) -> Line<'static> {
        let placeholder = match field {
            ContactField::Name => "<required>",
            _ => "<optional>",
        };
        field_line(
            field_name,
            self.value(field),
            placeholder,
            self.active == field,
        )
    }

    fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Address => &self.address,
        }
    }

    /// Character length of the requested field, for cursor placement.
    pub(crate) fn value_len(&self, field: ContactField) -> usize {
        self.value(field).chars().count()
    }
}

/// State for confirming deletion of the selected contact.
pub(crate) struct ConfirmContactDelete {
    pub(crate) index: usize,
    pub(crate) name: String,
}

/// Fields of the unit-converter panel.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum ConverterField {
    #[default]
    Kind,
    Value,
    From,
    To,
}

/// Panel state for the unit converter. `from`/`to` index into the unit list
/// of the active category.
pub(crate) struct ConverterForm {
    pub(crate) kind: ConversionKind,
    pub(crate) value: String,
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) active: ConverterField,
    pub(crate) error: Option<String>,
    pub(crate) result: Option<String>,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self {
            kind: ConversionKind::Temperature,
            value: String::new(),
            from: 0,
            to: 1,
            active: ConverterField::Kind,
            error: None,
            result: None,
        }
    }
}

impl ConverterForm {
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            ConverterField::Kind => ConverterField::Value,
            ConverterField::Value => ConverterField::From,
            ConverterField::From => ConverterField::To,
            ConverterField::To => ConverterField::Kind,
        };
    }

    pub(crate) fn toggle_field_back(&mut self) {
        self.active = match self.active {
            ConverterField::Kind => ConverterField::To,
            ConverterField::Value => ConverterField::Kind,
            ConverterField::From => ConverterField::Value,
            ConverterField::To => ConverterField::From,
        };
    }

    /// Cycle the focused picker. Switching the category resets the unit
    /// pickers to the first two entries, matching how the combo boxes have
    /// always behaved.
    pub(crate) fn cycle(&mut self, direction: isize) {
        match self.active {
            ConverterField::Kind => {
                let all = ConversionKind::ALL;
                let pos = all.iter().position(|k| *k == self.kind).unwrap_or(0);
                let next = (pos as isize + direction).rem_euclid(all.len() as isize) as usize;
                self.kind = all[next];
                self.from = 0;
                self.to = 1;
                self.result = None;
                self.error = None;
            }
            ConverterField::From => {
                self.from = cycle_index(self.from, self.kind.unit_labels().len(), direction);
            }
            ConverterField::To => {
                self.to = cycle_index(self.to, self.kind.unit_labels().len(), direction);
            }
            ConverterField::Value => {}
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if self.active != ConverterField::Value {
            return false;
        }
        if ch.is_ascii_digit() || ch == '.' || ch == '-' {
            self.value.push(ch);
            true
        } else {
            false
        }
    }

    pub(crate) fn backspace(&mut self) {
        if self.active == ConverterField::Value {
            self.value.pop();
        }
    }

    /// Run the conversion for the current inputs, storing the formatted
    /// result on success. Errors bubble up so the caller can mirror them in
    /// the footer.
    pub(crate) fn compute(&mut self) -> crate::error::Result<()> {
        let value = parse_number(&self.value)?;
        let units = self.kind.unit_labels();
        let converted = self.kind.convert(value, self.from, self.to)?;
        self.result = Some(format!(
            "{} {} = {:.4} {}",
            value, units[self.from], converted, units[self.to]
        ));
        self.error = None;
        Ok(())
    }

    pub(crate) fn build_lines(&self) -> Vec<Line<'static>> {
        let units = self.kind.unit_labels();
        vec![
            choice_line(
                "Type",
                self.kind.label(),
                self.active == ConverterField::Kind,
            ),
            field_line(
                "Value",
                &self.value,
                "<number>",
                self.active == ConverterField::Value,
            ),
            choice_line("From", units[self.from], self.active == ConverterField::From),
            choice_line("To", units[self.to], self.active == ConverterField::To),
        ]
    }

    pub(crate) fn value_len(&self) -> usize {
        self.value.chars().count()
    }
}

fn cycle_index(current: usize, len: usize, direction: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + direction).rem_euclid(len as isize) as usize
}

/// Fields of the age-calculator panel.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum AgeField {
    #[default]
    Day,
    Month,
    Year,
}

/// Panel state for the age calculator. The three date parts stay raw strings
/// until Enter so partially typed input never errors.
pub(crate) struct AgeForm {
    pub(crate) day: String,
    pub(crate) month: String,
    pub(crate) year: String,
    pub(crate) active: AgeField,
    pub(crate) error: Option<String>,
    pub(crate) result: Option<AgeBreakdown>,
}

impl Default for AgeForm {
    fn default() -> Self {
        Self {
            day: "1".to_string(),
            month: "1".to_string(),
            year: "2000".to_string(),
            active: AgeField::Day,
            error: None,
            result: None,
        }
    }
}

impl AgeForm {
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            AgeField::Day => AgeField::Month,
            AgeField::Month => AgeField::Year,
            AgeField::Year => AgeField::Day,
        };
    }

    pub(crate) fn toggle_field_back(&mut self) {
        self.active = match self.active {
            AgeField::Day => AgeField::Year,
            AgeField::Month => AgeField::Day,
            AgeField::Year => AgeField::Month,
        };
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() {
            return false;
        }
        self.active_value_mut().push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    pub(crate) fn compute(&mut self) -> crate::error::Result<()> {
        let day = parse_part(&self.day)?;
        let month = parse_part(&self.month)?;
        let year: i32 = self
            .year
            .trim()
            .parse()
            .map_err(|_| crate::error::Error::validation("Please enter a valid date."))?;
        self.result = Some(calculate_age(day, month, year)?);
        self.error = None;
        Ok(())
    }

    pub(crate) fn build_lines(&self) -> Vec<Line<'static>> {
        vec![
            field_line("Day", &self.day, "<1-31>", self.active == AgeField::Day),
            field_line("Month", &self.month, "<1-12>", self.active == AgeField::Month),
            field_line("Year", &self.year, "<year>", self.active == AgeField::Year),
        ]
    }

    pub(crate) fn value_len(&self, field: AgeField) -> usize {
        match field {
            AgeField::Day => self.day.chars().count(),
            AgeField::Month => self.month.chars().count(),
            AgeField::Year => self.year.chars().count(),
        }
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active {
            AgeField::Day => &mut self.day,
            AgeField::Month => &mut self.month,
            AgeField::Year => &mut self.year,
        }
    }
}

fn parse_part(input: &str) -> crate::error::Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| crate::error::Error::validation("Please enter a valid date."))
}

/// Fields of the BMI panel.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum BmiField {
    #[default]
    Weight,
    WeightUnit,
    Height,
    HeightUnit,
}

/// Panel state for the BMI calculator.
#[derive(Default)]
pub(crate) struct BmiForm {
    pub(crate) weight: String,
    pub(crate) weight_unit: usize,
    pub(crate) height: String,
    pub(crate) height_unit: usize,
    pub(crate) active: BmiField,
    pub(crate) error: Option<String>,
    pub(crate) result: Option<BmiReading>,
}

impl BmiForm {
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            BmiField::Weight => BmiField::WeightUnit,
            BmiField::WeightUnit => BmiField::Height,
            BmiField::Height => BmiField::HeightUnit,
            BmiField::HeightUnit => BmiField::Weight,
        };
    }

    pub(crate) fn toggle_field_back(&mut self) {
        self.active = match self.active {
            BmiField::Weight => BmiField::HeightUnit,
            BmiField::WeightUnit => BmiField::Weight,
            BmiField::Height => BmiField::WeightUnit,
            BmiField::HeightUnit => BmiField::Height,
        };
    }

    pub(crate) fn cycle(&mut self, direction: isize) {
        match self.active {
            BmiField::WeightUnit => {
                self.weight_unit =
                    cycle_index(self.weight_unit, BodyWeightUnit::ALL.len(), direction);
            }
            BmiField::HeightUnit => {
                self.height_unit =
                    cycle_index(self.height_unit, BodyHeightUnit::ALL.len(), direction);
            }
            _ => {}
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        let target = match self.active {
            BmiField::Weight => &mut self.weight,
            BmiField::Height => &mut self.height,
            _ => return false,
        };
        if ch.is_ascii_digit() || ch == '.' {
            target.push(ch);
            true
        } else {
            false
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            BmiField::Weight => {
                self.weight.pop();
            }
            BmiField::Height => {
                self.height.pop();
            }
            _ => {}
        }
    }

    pub(crate) fn compute(&mut self) -> crate::error::Result<()> {
        let weight = parse_number(&self.weight)?;
        let height = parse_number(&self.height)?;
        self.result = Some(calculate_bmi(
            weight,
            BodyWeightUnit::ALL[self.weight_unit],
            height,
            BodyHeightUnit::ALL[self.height_unit],
        )?);
        self.error = None;
        Ok(())
    }

    pub(crate) fn build_lines(&self) -> Vec<Line<'static>> {
        vec![
            field_line(
                "Weight",
                &self.weight,
                "<number>",
                self.active == BmiField::Weight,
            ),
            choice_line(
                "Weight unit",
                BodyWeightUnit::ALL[self.weight_unit].label(),
                self.active == BmiField::WeightUnit,
            ),
            field_line(
                "Height",
                &self.height,
                "<number>",
                self.active == BmiField::Height,
            ),
            choice_line(
                "Height unit",
                BodyHeightUnit::ALL[self.height_unit].label(),
                self.active == BmiField::HeightUnit,
            ),
        ]
    }

    pub(crate) fn value_len(&self, field: BmiField) -> usize {
        match field {
            BmiField::Weight => self.weight.chars().count(),
            BmiField::Height => self.height.chars().count(),
            _ => 0,
        }
    }
}
