//! [Security Intelligence](https://securityintelligence.com/) article list.
//!
//! The second date probe reads the parent of an `.article_date` marker inside
//! `.article__date`, keeping the lookup the original tool performed. That
//! parent sits inside `.article__date`, so it never has text when the first
//! probe is empty; a card without a date ends up with the fallback.

use super::{DATE_NOT_FOUND, DESCRIPTION_NOT_FOUND, Site, TITLE_NOT_FOUND};
use crate::schema::{ExtractionSchema, FieldSpec, Probe};

pub const ID: u8 = 3;
pub const URL: &str = "https://securityintelligence.com/";

pub fn site() -> Site {
    Site {
        id: ID,
        name: "Security Intelligence".to_string(),
        url: URL.to_string(),
        schema: ExtractionSchema {
            container: ".article__text_container".to_string(),
            title: FieldSpec::new(".article__title", TITLE_NOT_FOUND),
            description: FieldSpec::new(".article__excerpt", DESCRIPTION_NOT_FOUND),
            date: FieldSpec::new(".article__date", DATE_NOT_FOUND)
                .or_else(Probe::parent_of(".article__date .article_date")),
        },
    }
}
