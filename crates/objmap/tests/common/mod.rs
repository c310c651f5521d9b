//! Fixture classes shared by the integration tests.

#![allow(dead_code)]

use objmap::{ConstructError, EnumDescriptor, Mappable, MappedEnum, Params, Value};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Normal,
    Urgent,
}

impl MappedEnum for Priority {
    const DESCRIPTOR: &'static EnumDescriptor = &EnumDescriptor::new(
        "Priority",
        &[("LOW", 1), ("NORMAL", 2), ("URGENT", 3)],
    );

    fn ordinal(self) -> usize {
        self as usize
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        [Self::Low, Self::Normal, Self::Urgent].get(ordinal).copied()
    }
}

impl From<Priority> for Value {
    fn from(priority: Priority) -> Self {
        Value::Enum(priority.to_enum_value())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub priority: Priority,
    pub assignee: Option<String>,
}

impl Mappable for Ticket {
    const CLASS_NAME: &'static str = "Ticket";
    const FIELDS: &'static [&'static str] = &["id", "title", "priority", "assignee"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.clone().into()),
            "priority" => Some(self.priority.into()),
            "assignee" => Some(self.assignee.clone().into()),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let ticket = Self {
            id: params.take("id")?,
            title: params.take("title")?,
            priority: params.take_enum("priority")?,
            assignee: params.take("assignee")?,
        };
        params.finish()?;
        Ok(ticket)
    }

    fn prototype() -> Option<Self> {
        Some(Self {
            id: 0,
            title: String::new(),
            priority: Priority::Normal,
            assignee: None,
        })
    }
}

pub fn sample_ticket() -> Ticket {
    Ticket {
        id: 7,
        title: "Printer jam".to_string(),
        priority: Priority::Urgent,
        assignee: Some("dana".to_string()),
    }
}

/// Storage row: priority as its number, assignee renamed to owner.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRow {
    pub id: i64,
    pub title: String,
    pub priority: i64,
    pub owner: Option<String>,
}

impl Mappable for TicketRow {
    const CLASS_NAME: &'static str = "TicketRow";
    const FIELDS: &'static [&'static str] = &["id", "title", "priority", "owner"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.clone().into()),
            "priority" => Some(self.priority.into()),
            "owner" => Some(self.owner.clone().into()),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let row = Self {
            id: params.take("id")?,
            title: params.take("title")?,
            priority: params.take("priority")?,
            owner: params.take("owner")?,
        };
        params.finish()?;
        Ok(row)
    }

    fn prototype() -> Option<Self> {
        Some(Self {
            id: 0,
            title: String::new(),
            priority: 0,
            owner: None,
        })
    }
}

/// Display form: priority as its symbolic name.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketLabel {
    pub id: i64,
    pub title: String,
    pub priority: String,
}

impl Mappable for TicketLabel {
    const CLASS_NAME: &'static str = "TicketLabel";
    const FIELDS: &'static [&'static str] = &["id", "title", "priority"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.clone().into()),
            "priority" => Some(self.priority.clone().into()),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let label = Self {
            id: params.take("id")?,
            title: params.take("title")?,
            priority: params.take("priority")?,
        };
        params.finish()?;
        Ok(label)
    }

    fn prototype() -> Option<Self> {
        Some(Self {
            id: 0,
            title: String::new(),
            priority: String::new(),
        })
    }
}

/// Requires a `summary` no ticket provides.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketSummary {
    pub id: i64,
    pub title: String,
    pub summary: String,
}

impl Mappable for TicketSummary {
    const CLASS_NAME: &'static str = "TicketSummary";
    const FIELDS: &'static [&'static str] = &["id", "title", "summary"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.clone().into()),
            "summary" => Some(self.summary.clone().into()),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let summary = Self {
            id: params.take("id")?,
            title: params.take("title")?,
            summary: params.take("summary")?,
        };
        params.finish()?;
        Ok(summary)
    }

    fn prototype() -> Option<Self> {
        Some(Self {
            id: 0,
            title: String::new(),
            summary: String::new(),
        })
    }
}

/// No prototype: only explicit mappings reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct Archive {
    pub reference: i64,
    pub title: Option<String>,
}

impl Mappable for Archive {
    const CLASS_NAME: &'static str = "Archive";
    const FIELDS: &'static [&'static str] = &["reference", "title"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "reference" => Some(self.reference.into()),
            "title" => Some(self.title.clone().into()),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let archive = Self {
            reference: params.take("reference")?,
            title: params.take("title")?,
        };
        params.finish()?;
        Ok(archive)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub number: i64,
}

impl Mappable for Invoice {
    const CLASS_NAME: &'static str = "Invoice";
    const FIELDS: &'static [&'static str] = &["number"];

    fn field(&self, name: &str) -> Option<Value> {
        (name == "number").then(|| self.number.into())
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let invoice = Self {
            number: params.take("number")?,
        };
        params.finish()?;
        Ok(invoice)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

impl Mappable for Customer {
    const CLASS_NAME: &'static str = "Customer";
    const FIELDS: &'static [&'static str] = &["name", "email"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(self.name.clone().into()),
            "email" => Some(self.email.clone().into()),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let customer = Self {
            name: params.take("name")?,
            email: params.take("email")?,
        };
        params.finish()?;
        Ok(customer)
    }

    fn prototype() -> Option<Self> {
        Some(Self::default())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerDto {
    pub name: String,
    pub email_address: String,
}

impl Mappable for CustomerDto {
    const CLASS_NAME: &'static str = "CustomerDto";
    const FIELDS: &'static [&'static str] = &["name", "email_address"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(self.name.clone().into()),
            "email_address" => Some(self.email_address.clone().into()),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let customer = Self {
            name: params.take("name")?,
            email_address: params.take("email_address")?,
        };
        params.finish()?;
        Ok(customer)
    }

    fn prototype() -> Option<Self> {
        Some(Self::default())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
    pub id: i64,
    pub customer: Customer,
}

impl Mappable for Order {
    const CLASS_NAME: &'static str = "Order";
    const FIELDS: &'static [&'static str] = &["id", "customer"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.into()),
            "customer" => Some(Value::object(self.customer.clone())),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let order = Self {
            id: params.take("id")?,
            customer: params.take_object("customer")?,
        };
        params.finish()?;
        Ok(order)
    }

    fn prototype() -> Option<Self> {
        Some(Self::default())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderDto {
    pub id: i64,
    pub customer: CustomerDto,
}

impl Mappable for OrderDto {
    const CLASS_NAME: &'static str = "OrderDto";
    const FIELDS: &'static [&'static str] = &["id", "customer"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.into()),
            "customer" => Some(Value::object(self.customer.clone())),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let order = Self {
            id: params.take("id")?,
            customer: params.take_object("customer")?,
        };
        params.finish()?;
        Ok(order)
    }

    fn prototype() -> Option<Self> {
        Some(Self::default())
    }
}

pub fn sample_order() -> Order {
    Order {
        id: 42,
        customer: Customer {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub label: String,
}

impl Mappable for Point {
    const CLASS_NAME: &'static str = "Point";
    const FIELDS: &'static [&'static str] = &["x", "y", "label"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "x" => Some(self.x.into()),
            "y" => Some(self.y.into()),
            "label" => Some(self.label.clone().into()),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let point = Self {
            x: params.take("x")?,
            y: params.take("y")?,
            label: params.take("label")?,
        };
        params.finish()?;
        Ok(point)
    }

    fn prototype() -> Option<Self> {
        Some(Self::default())
    }
}

/// Stores the label under a different name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointDto {
    pub x: i64,
    pub y: i64,
    pub name: String,
}

impl Mappable for PointDto {
    const CLASS_NAME: &'static str = "PointDto";
    const FIELDS: &'static [&'static str] = &["x", "y", "name"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "x" => Some(self.x.into()),
            "y" => Some(self.y.into()),
            "name" => Some(self.name.clone().into()),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let point = Self {
            x: params.take("x")?,
            y: params.take("y")?,
            name: params.take("name")?,
        };
        params.finish()?;
        Ok(point)
    }

    fn prototype() -> Option<Self> {
        Some(Self::default())
    }
}

/// Carries both a display name and a short handle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Person {
    pub full_name: String,
    pub name: Option<String>,
}

impl Mappable for Person {
    const CLASS_NAME: &'static str = "Person";
    const FIELDS: &'static [&'static str] = &["full_name", "name"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "full_name" => Some(self.full_name.clone().into()),
            "name" => Some(self.name.clone().into()),
            _ => None,
        }
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let person = Self {
            full_name: params.take("full_name")?,
            name: params.take("name")?,
        };
        params.finish()?;
        Ok(person)
    }

    fn prototype() -> Option<Self> {
        Some(Self::default())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contact {
    pub name: String,
}

impl Mappable for Contact {
    const CLASS_NAME: &'static str = "Contact";
    const FIELDS: &'static [&'static str] = &["name"];

    fn field(&self, name: &str) -> Option<Value> {
        (name == "name").then(|| self.name.clone().into())
    }

    fn construct(mut params: Params) -> Result<Self, ConstructError> {
        let contact = Self {
            name: params.take("name")?,
        };
        params.finish()?;
        Ok(contact)
    }

    fn prototype() -> Option<Self> {
        Some(Self::default())
    }
}
