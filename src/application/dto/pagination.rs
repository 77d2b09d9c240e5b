// src/application/dto/pagination.rs
use serde::{Deserialize, Serialize};

/// One page of results plus its `metaData`. Serialized under a successful
/// envelope, the formatter hoists `results` into `data` and `metaData` to
/// the envelope's top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(rename = "metaData")]
    pub meta_data: PageMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub count: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: u64, page: u32, per_page: u32) -> Self {
        let total_pages = if count == 0 {
            0
        } else {
            count.div_ceil(u64::from(per_page)) as u32
        };
        Self {
            results,
            meta_data: PageMeta {
                count,
                page,
                per_page,
                total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_data_serializes_camel_case() {
        let page = Page::new(vec![1, 2, 3], 7, 2, 3);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["metaData"]["count"], 7);
        assert_eq!(json["metaData"]["perPage"], 3);
        assert_eq!(json["metaData"]["totalPages"], 3);
        assert_eq!(json["results"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn empty_result_set_has_zero_pages() {
        let page: Page<i32> = Page::new(vec![], 0, 1, 20);
        assert_eq!(page.meta_data.total_pages, 0);
    }
}
