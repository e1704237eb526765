// listing_client.rs
use crate::api::api_error::{error_message_from_body, ApiError};
use crate::domain::{NewProperty, Property, PropertyPage, PropertyType, PAGE_SIZE};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

const USER_AGENT: &str = concat!("propertyhub/", env!("CARGO_PKG_VERSION"));

/// Parameters of one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
    pub property_type: Option<PropertyType>,
}

impl PageQuery {
    pub fn new(page: u32, property_type: Option<PropertyType>) -> Self {
        Self {
            page,
            per_page: PAGE_SIZE,
            property_type,
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, None)
    }
}

/// The remote listing service, as seen by the rest of the app.
pub trait ListingSource: Send + Sync {
    fn fetch_page(&self, query: &PageQuery) -> Result<PropertyPage, ApiError>;

    fn fetch_property(&self, id: &str) -> Result<Property, ApiError>;

    fn create_property(&self, new: &NewProperty) -> Result<Property, ApiError>;
}

pub struct HttpListingSource {
    client: Client,
    list_url: Url,
    detail_url: Url,
}

impl HttpListingSource {
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(list_url: Url, detail_url: Url, timeout: Option<Duration>) -> Result<Self, ApiError> {
        for url in [&list_url, &detail_url] {
            if url.cannot_be_a_base() {
                return Err(ApiError::InvalidUrl(url.to_string()));
            }
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            list_url,
            detail_url,
        })
    }

    pub fn page_url(&self, query: &PageQuery) -> Url {
        let mut url = self.list_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("_page", &query.page.to_string());
            pairs.append_pair("_per_page", &query.per_page.to_string());
            if let Some(kind) = query.property_type {
                pairs.append_pair("property_type", kind.as_str());
            }
        }
        url
    }

    pub fn property_url(&self, id: &str) -> Url {
        let mut url = self.detail_url.clone();
        url.query_pairs_mut().append_pair("id", id);
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl ListingSource for HttpListingSource {
    fn fetch_page(&self, query: &PageQuery) -> Result<PropertyPage, ApiError> {
        let url = self.page_url(query);
        info!(%url, "fetching listing page");
        self.get_json(url)
    }

    fn fetch_property(&self, id: &str) -> Result<Property, ApiError> {
        let matches: Vec<Property> = self.get_json(self.property_url(id))?;
        matches
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    fn create_property(&self, new: &NewProperty) -> Result<Property, ApiError> {
        let resp = self
            .client
            .post(self.list_url.clone())
            .json(new)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "listing service rejected new property");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: error_message_from_body(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
