//! Feed stock entity with its usage log

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{finite, required_date, required_text, ValidationError};

/// One withdrawal from a feed lot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedUsage {
    pub date: NaiveDate,
    pub quantity: f64,
    /// Pen or group the feed went to
    pub target: String,
}

impl FeedUsage {
    pub fn builder() -> FeedUsageBuilder {
        FeedUsageBuilder::default()
    }
}

#[derive(Debug, Clone)]
pub struct FeedUsageBuilder {
    date: Option<NaiveDate>,
    quantity: f64,
    target: Option<String>,
}

impl Default for FeedUsageBuilder {
    fn default() -> Self {
        Self {
            date: None,
            quantity: 0.0,
            target: Some("all sheep".to_string()),
        }
    }
}

impl FeedUsageBuilder {
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn build(self) -> Result<FeedUsage, ValidationError> {
        Ok(FeedUsage {
            date: required_date("feed usage", "date", self.date)?,
            quantity: finite("feed usage", "quantity", self.quantity)?,
            target: required_text("feed usage", "target", self.target)?,
        })
    }
}

/// A lot of feed taken into stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub feed_type: String,
    pub in_date: NaiveDate,
    pub in_quantity: f64,
    #[serde(default)]
    pub usage_records: Vec<FeedUsage>,
    #[serde(default)]
    pub notes: String,
}

impl FeedRecord {
    pub fn builder() -> FeedRecordBuilder {
        FeedRecordBuilder::default()
    }

    /// Copy of this record with one more usage entry appended
    pub fn with_usage(&self, usage: FeedUsage) -> FeedRecord {
        let mut updated = self.clone();
        updated.usage_records.push(usage);
        updated
    }
}

#[derive(Debug, Clone)]
pub struct FeedRecordBuilder {
    id: Option<String>,
    name: Option<String>,
    feed_type: Option<String>,
    in_date: Option<NaiveDate>,
    in_quantity: f64,
    notes: String,
}

impl Default for FeedRecordBuilder {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            feed_type: Some("concentrate".to_string()),
            in_date: None,
            in_quantity: 0.0,
            notes: String::new(),
        }
    }
}

impl FeedRecordBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn feed_type(mut self, feed_type: impl Into<String>) -> Self {
        self.feed_type = Some(feed_type.into());
        self
    }

    pub fn in_date(mut self, date: NaiveDate) -> Self {
        self.in_date = Some(date);
        self
    }

    /// Zero is accepted; remaining percentages for such a lot are undefined.
    pub fn in_quantity(mut self, quantity: f64) -> Self {
        self.in_quantity = quantity;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// New lots always start with an empty usage log.
    pub fn build(self) -> Result<FeedRecord, ValidationError> {
        Ok(FeedRecord {
            id: required_text("feed record", "id", self.id)?,
            name: required_text("feed record", "name", self.name)?,
            feed_type: required_text("feed record", "type", self.feed_type)?,
            in_date: required_date("feed record", "inDate", self.in_date)?,
            in_quantity: finite("feed record", "inQuantity", self.in_quantity)?,
            usage_records: Vec::new(),
            notes: self.notes,
        })
    }
}
