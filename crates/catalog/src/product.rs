//! Product entity and the typed field selector used by search.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, Priced};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    category: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replace the price, returning the previous one.
    pub fn set_price(&mut self, price: f64) -> f64 {
        core::mem::replace(&mut self.price, price)
    }

    /// Read the value of a single field.
    pub fn field(&self, field: ProductField) -> FieldValue<'_> {
        match field {
            ProductField::Id => FieldValue::Text(&self.id),
            ProductField::Name => FieldValue::Text(&self.name),
            ProductField::Price => FieldValue::Price(self.price),
            ProductField::Category => FieldValue::Text(&self.category),
        }
    }

    /// Render as one line of the flat source format.
    pub fn to_record(&self) -> String {
        let price = self.price.to_string();
        [
            self.id.as_str(),
            self.name.as_str(),
            price.as_str(),
            self.category.as_str(),
        ]
        .join(crate::record::FIELD_DELIMITER)
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Priced for Product {
    fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Price: {}, Category: {}",
            self.id, self.name, self.price, self.category
        )
    }
}

/// Selector for one of the product fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Id,
    Name,
    Price,
    Category,
}

impl ProductField {
    pub const ALL: [ProductField; 4] = [
        ProductField::Id,
        ProductField::Name,
        ProductField::Price,
        ProductField::Category,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Id => "id",
            ProductField::Name => "name",
            ProductField::Price => "price",
            ProductField::Category => "category",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = DomainError;

    /// Field names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ProductField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| DomainError::unknown_field(s))
    }
}

/// A borrowed field value, typed by field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Price(f64),
}

impl<'a> FieldValue<'a> {
    /// Interpret a raw query string as a value of `field`.
    ///
    /// Price queries must parse as a number.
    pub fn parse(field: ProductField, raw: &'a str) -> DomainResult<Self> {
        match field {
            ProductField::Price => raw.trim().parse::<f64>().map(FieldValue::Price).map_err(|e| {
                DomainError::validation(format!("price query {raw:?} is not a number: {e}"))
            }),
            ProductField::Id | ProductField::Name | ProductField::Category => {
                Ok(FieldValue::Text(raw))
            }
        }
    }
}
