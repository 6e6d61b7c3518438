//! Declarative payload validation.
//!
//! A [`Schema`] is a static table of field rules. [`validate`] walks a JSON
//! payload against it and reports violations through one formatter, either
//! stopping at the first one or collecting all of them.

pub(crate) mod extract;
pub(crate) mod schemas;

use std::fmt::{self, Display};
use std::ops::ControlFlow;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde_json::{Map, Value};
use url::Url;
use uuid::Uuid;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    FailFast,
    CollectAll,
}

/// Closed set of fields: anything not listed is rejected.
#[derive(Debug)]
pub struct Schema {
    fields: &'static [Field],
}

impl Schema {
    pub(crate) const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug)]
pub struct Field {
    name: &'static str,
    required: bool,
    kind: Kind,
}

impl Field {
    pub(crate) const fn required(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            required: true,
            kind,
        }
    }

    pub(crate) const fn optional(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            required: false,
            kind,
        }
    }
}

#[derive(Debug)]
pub enum Kind {
    String(&'static [Rule]),
    Boolean,
    StringArray,
    ObjectArray(&'static Schema),
}

#[derive(Debug)]
pub enum Rule {
    MinLength(usize),
    OneOf(&'static [&'static str]),
    Date,
    Uri,
    Email,
    Uuid,
}

impl Rule {
    fn accepts(&self, text: &str) -> bool {
        match self {
            Rule::MinLength(min) => text.chars().count() >= *min,
            Rule::OneOf(allowed) => allowed.iter().any(|option| *option == text),
            Rule::Date => is_iso_date(text),
            Rule::Uri => Url::parse(text).is_ok(),
            Rule::Email => EMAIL_PATTERN.is_match(text),
            Rule::Uuid => Uuid::parse_str(text).is_ok(),
        }
    }
}

// Accepts a calendar date or a full RFC 3339 timestamp.
fn is_iso_date(text: &str) -> bool {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok() || DateTime::parse_from_rfc3339(text).is_ok()
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", .messages.join("; "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

pub fn validate(payload: &Value, schema: &'static Schema, mode: Mode) -> Result<(), ValidationError> {
    let mut report = Report {
        mode,
        messages: Vec::new(),
    };

    // A break only means fail-fast mode already holds its violation.
    match payload.as_object() {
        Some(object) => {
            let _stopped = check_object(object, schema, None, &mut report);
        }
        None => {
            let _stopped = report.add(Violation::NotAnObject);
        }
    }

    report.finish()
}

struct Report {
    mode: Mode,
    messages: Vec<String>,
}

impl Report {
    fn add(&mut self, violation: Violation<'_>) -> ControlFlow<()> {
        self.messages.push(violation.to_string());

        match self.mode {
            Mode::FailFast => ControlFlow::Break(()),
            Mode::CollectAll => ControlFlow::Continue(()),
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                messages: self.messages,
            })
        }
    }
}

fn check_object(
    object: &Map<String, Value>,
    schema: &'static Schema,
    parent: Option<(&str, usize)>,
    report: &mut Report,
) -> ControlFlow<()> {
    // Unknown fields first, so they are reported whatever else is wrong.
    for key in object.keys() {
        if schema.field(key).is_none() {
            report.add(Violation::Unknown(Location::of(parent, key)))?;
        }
    }

    for field in schema.fields {
        let location = Location::of(parent, field.name);

        match object.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    report.add(Violation::Missing(location))?;
                }
            }
            Some(value) => check_value(value, field, location, report)?,
        }
    }

    ControlFlow::Continue(())
}

fn check_value(
    value: &Value,
    field: &'static Field,
    location: Location<'_>,
    report: &mut Report,
) -> ControlFlow<()> {
    match &field.kind {
        Kind::String(rules) => match value.as_str() {
            Some(text) => {
                for rule in rules.iter() {
                    if !rule.accepts(text) {
                        report.add(Violation::Rule(location, rule))?;
                    }
                }
                ControlFlow::Continue(())
            }
            None => report.add(Violation::Type(location, Expected::String)),
        },
        Kind::Boolean => match value.is_boolean() {
            true => ControlFlow::Continue(()),
            false => report.add(Violation::Type(location, Expected::Boolean)),
        },
        Kind::StringArray => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        let location = Location::Item {
                            array: field.name,
                            index,
                        };
                        report.add(Violation::Type(location, Expected::String))?;
                    }
                }
                ControlFlow::Continue(())
            }
            None => report.add(Violation::Type(location, Expected::Array)),
        },
        Kind::ObjectArray(schema) => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    match item.as_object() {
                        Some(element) => {
                            check_object(element, schema, Some((field.name, index)), report)?
                        }
                        None => {
                            let location = Location::Item {
                                array: field.name,
                                index,
                            };
                            report.add(Violation::Type(location, Expected::Object))?
                        }
                    }
                }
                ControlFlow::Continue(())
            }
            None => report.add(Violation::Type(location, Expected::Array)),
        },
    }
}

#[derive(Clone, Copy, Debug)]
enum Location<'a> {
    Field(&'a str),
    Item {
        array: &'a str,
        index: usize,
    },
    Element {
        array: &'a str,
        index: usize,
        field: &'a str,
    },
}

impl<'a> Location<'a> {
    fn of(parent: Option<(&'a str, usize)>, field: &'a str) -> Self {
        match parent {
            None => Location::Field(field),
            Some((array, index)) => Location::Element {
                array,
                index,
                field,
            },
        }
    }
}

impl Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Field(name) => write!(f, "{name}"),
            Location::Item { array, index } => write!(f, "{array}[{index}]"),
            Location::Element {
                array,
                index,
                field,
            } => write!(f, "{array}[{index}] field '{field}'"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Expected {
    String,
    Boolean,
    Array,
    Object,
}

impl Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expected::String => "a string",
            Expected::Boolean => "a boolean",
            Expected::Array => "an array",
            Expected::Object => "an object",
        })
    }
}

#[derive(Debug)]
enum Violation<'a> {
    NotAnObject,
    Unknown(Location<'a>),
    Missing(Location<'a>),
    Type(Location<'a>, Expected),
    Rule(Location<'a>, &'static Rule),
}

/// The single place where violation messages are worded.
impl Display for Violation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotAnObject => write!(f, "request body must be an object"),
            Violation::Unknown(Location::Field(name)) => write!(f, "field '{name}' is not allowed"),
            Violation::Unknown(location) => write!(f, "{location} is not allowed"),
            Violation::Missing(location) => write!(f, "{location} is required"),
            Violation::Type(location, expected) => write!(f, "{location} must be {expected}"),
            Violation::Rule(location, rule) => match rule {
                Rule::MinLength(min) => {
                    write!(f, "{location} must be at least {min} characters long")
                }
                Rule::OneOf(allowed) => {
                    write!(f, "{location} must be one of: {}", allowed.join(", "))
                }
                Rule::Date => write!(f, "{location} must be a valid ISO 8601 date"),
                Rule::Uri => write!(f, "{location} must be a valid URI"),
                Rule::Email => write!(f, "{location} must be a valid email"),
                Rule::Uuid => write!(f, "{location} must be a valid identifier"),
            },
        }
    }
}
