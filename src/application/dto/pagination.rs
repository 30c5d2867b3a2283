// src/application/dto/pagination.rs
use crate::application::logs::paginate::Paged;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map_from<S>(paged: Paged<S>) -> Self
    where
        S: Into<T>,
    {
        Self {
            items: paged.items.into_iter().map(Into::into).collect(),
            page: paged.page,
            page_size: paged.page_size,
            total: paged.total,
            total_pages: paged.total_pages,
        }
    }
}
