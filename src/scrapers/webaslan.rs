//! [WebAslan](https://www.sondakika.com/webaslan/) news feed on sondakika.com.

use super::{DATE_NOT_FOUND, DESCRIPTION_NOT_FOUND, Site, TITLE_NOT_FOUND};
use crate::schema::{ExtractionSchema, FieldSpec};

pub const ID: u8 = 2;
pub const URL: &str = "https://www.sondakika.com/webaslan/";

pub fn site() -> Site {
    Site {
        id: ID,
        name: "WebAslan".to_string(),
        url: URL.to_string(),
        schema: ExtractionSchema {
            container: ".nws".to_string(),
            title: FieldSpec::new(".title", TITLE_NOT_FOUND),
            description: FieldSpec::new(".news-detail.news-column", DESCRIPTION_NOT_FOUND),
            date: FieldSpec::new(".date", DATE_NOT_FOUND),
        },
    }
}
