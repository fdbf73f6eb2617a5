use dioxus::logger::tracing::{debug, warn};
use serde::{Deserialize, Serialize};

pub const VALUE_FLOOR: i32 = 0;
pub const VALUE_CEILING: i32 = 99;

const MAX_DIGITS: usize = 2;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("Entry is empty!")]
    Empty,
    #[error("Entry is too long! {0}")]
    TooLong(String),
    #[error("Entry is not a number! {0}")]
    NotDigits(String),
    #[error("Value {value} is out of range {min}..={max}!")]
    OutOfRange { value: u8, min: u8, max: u8 },
}

/// Optional bounds as a host would write them in its own config.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct BoundsConfig {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

/// Inclusive value range of a number field, always inside 0..=99.
///
/// `min <= max` is left to the caller.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(from = "BoundsConfig", into = "BoundsConfig")]
pub struct FieldBounds {
    min: u8,
    max: u8,
}

impl FieldBounds {
    pub fn new(min: Option<i32>, max: Option<i32>) -> Self {
        let min = min.unwrap_or(VALUE_FLOOR).clamp(VALUE_FLOOR, VALUE_CEILING);
        let max = max.unwrap_or(VALUE_CEILING).clamp(VALUE_FLOOR, VALUE_CEILING);
        Self {
            min: min as u8,
            max: max as u8,
        }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= i32::from(self.min) && value <= i32::from(self.max)
    }

    /// Rolls over to the opposite bound instead of saturating.
    pub fn wrap(&self, value: i32) -> u8 {
        if value > i32::from(self.max) {
            self.min
        } else if value < i32::from(self.min) {
            self.max
        } else {
            value as u8
        }
    }
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl From<BoundsConfig> for FieldBounds {
    fn from(config: BoundsConfig) -> Self {
        Self::new(config.min, config.max)
    }
}

impl From<FieldBounds> for BoundsConfig {
    fn from(bounds: FieldBounds) -> Self {
        Self {
            min: Some(i32::from(bounds.min)),
            max: Some(i32::from(bounds.max)),
        }
    }
}

/// Two characters, zero padded: 7 -> "07".
pub fn format_value(value: u8) -> String {
    format!("{value:02}")
}

fn parse_digits(raw: &str) -> Result<u8, EntryError> {
    if raw.is_empty() {
        return Err(EntryError::Empty);
    }
    if raw.len() > MAX_DIGITS {
        return Err(EntryError::TooLong(raw.to_string()));
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EntryError::NotDigits(raw.to_string()));
    }
    raw.parse::<u8>()
        .map_err(|_err| EntryError::NotDigits(raw.to_string()))
}

/// Validates typed text: one or two digits inside `bounds`.
pub fn parse_entry(raw: &str, bounds: FieldBounds) -> Result<u8, EntryError> {
    let value = parse_digits(raw)?;
    match bounds.contains(i32::from(value)) {
        true => Ok(value),
        false => Err(EntryError::OutOfRange {
            value,
            min: bounds.min,
            max: bounds.max,
        }),
    }
}

fn initial_text(bounds: FieldBounds, init_value: Option<i32>) -> String {
    match init_value {
        Some(value) if bounds.contains(value) => format_value(value as u8),
        Some(_value) => format_value(bounds.min),
        None => String::new(),
    }
}

/// What the user did to a number input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Step(i32),
    Focus,
    Edit(String),
    Commit,
}

/// Value slot of a number input. The rendered text is a projection of
/// `text`, which step and commit handlers update synchronously.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberField {
    bounds: FieldBounds,
    text: String,
    rollback: Option<u8>,
}

impl NumberField {
    pub fn new(bounds: FieldBounds, init_value: Option<i32>) -> Self {
        Self {
            bounds,
            text: initial_text(bounds, init_value),
            rollback: None,
        }
    }

    pub fn reset(&mut self, bounds: FieldBounds, init_value: Option<i32>) {
        self.bounds = bounds;
        self.text = initial_text(bounds, init_value);
        self.rollback = None;
    }

    pub fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number currently shown, if the text is one.
    pub fn value(&self) -> Option<u8> {
        parse_digits(&self.text).ok()
    }

    /// Applies one step and returns the new value for the observer.
    pub fn apply_step(&mut self, delta: i32) -> u8 {
        let new_value = match self.value() {
            Some(old_value) => self.bounds.wrap(i32::from(old_value) + delta),
            None if delta > 0 => self.bounds.min,
            None => self.bounds.max,
        };
        debug!("Stepping by {delta} to {new_value}");
        self.rollback = Some(new_value);
        self.text = format_value(new_value);
        new_value
    }

    /// Remembers the value to return to if the next entry is rejected.
    pub fn capture_rollback(&mut self) {
        self.rollback = self.value();
    }

    pub fn edit(&mut self, raw: String) {
        self.text = raw;
    }

    /// Applies `input`. Returns the value the observer must be told about.
    pub fn handle(&mut self, input: FieldInput) -> Option<u8> {
        match input {
            FieldInput::Step(delta) => Some(self.apply_step(delta)),
            FieldInput::Focus => {
                self.capture_rollback();
                None
            }
            FieldInput::Edit(raw) => {
                self.edit(raw);
                None
            }
            FieldInput::Commit => {
                let raw = self.text.clone();
                self.commit(&raw)
            }
        }
    }

    /// Validates `raw`. Returns the value to report, or `None` after
    /// rolling back to the captured value.
    pub fn commit(&mut self, raw: &str) -> Option<u8> {
        match parse_entry(raw, self.bounds) {
            Ok(value) => {
                debug!("Committed entry {value}");
                self.rollback = Some(value);
                self.text = format_value(value);
                Some(value)
            }
            Err(err) => {
                warn!("Rejected entry, rolling back! {err}");
                self.text = match self.rollback {
                    Some(value) => format_value(value),
                    None => String::new(),
                };
                None
            }
        }
    }
}
