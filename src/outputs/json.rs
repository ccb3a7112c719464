//! JSON output of a whole [`Listing`].

use serde_json::Value;

use crate::models::Listing;

/// Serialize `listing` as pretty JSON, dropping every `date` key unless `include_dates`.
pub fn render(listing: &Listing, include_dates: bool) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(listing)?;
    if !include_dates {
        if let Some(Value::Array(records)) = value.get_mut("records") {
            for record in records.iter_mut().filter_map(Value::as_object_mut) {
                record.remove("date");
            }
        }
    }
    serde_json::to_string_pretty(&value)
}
