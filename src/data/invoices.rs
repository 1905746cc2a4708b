use serde::Deserialize;

use crate::domain::{Record, RecordSet};

/// Wire model for the invoice export of the till backend's finance API.
///
/// Every field on the path to (location, date, price) is optional: the
/// export's data quality is uneven, and a missing field should degrade
/// the affected line item, never fail the whole document.
#[derive(Deserialize, Debug, Clone)]
pub struct InvoiceDocument {
    #[serde(default)]
    pub items: Vec<Invoice>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Invoice {
    #[serde(default)]
    pub location: Option<InvoiceLocation>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InvoiceLocation {
    #[serde(default)]
    pub store: Option<Store>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Store {
    #[serde(default)]
    pub name: Option<String>,
}

/// One sold article on an invoice. `dateAdded` and `totalPrice` are the
/// upstream field names.
#[derive(Deserialize, Debug, Clone)]
pub struct Article {
    #[serde(default, rename = "dateAdded")]
    pub date_added: Option<String>,
    #[serde(default, rename = "totalPrice")]
    pub total_price: Option<f64>,
}

impl InvoiceDocument {
    /// Flatten the document into one Record per article line item.
    /// The store name on the invoice applies to all of its articles.
    pub fn into_records(self) -> RecordSet {
        let mut records = Vec::new();
        for invoice in self.items {
            let store_name = invoice
                .location
                .as_ref()
                .and_then(|location| location.store.as_ref())
                .and_then(|store| store.name.clone());

            for article in invoice.articles {
                records.push(Record::from_raw(
                    store_name.clone(),
                    article.date_added.as_deref(),
                    article.total_price,
                ));
            }
        }
        records
    }
}
