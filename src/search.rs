//! Remote image search with pagination.
//!
//! The canvas does not own a network stack. A provider turns a
//! [`SearchQuery`] into image URLs; the [`SearchSession`] tracks the current
//! term, page and results and discards responses that arrive after a newer
//! request was issued.
//!
//! ## Request lifecycle
//!
//! ```text
//! submit / next_page / prev_page  ->  SearchTicket (generation n)
//! host runs the provider          ->  complete(ticket, result)
//! complete with generation < latest is ignored
//! ```

use crate::constants::{SEARCH_PAGE_SIZE, UNSPLASH_SEARCH_ENDPOINT};
use crate::error::{CollageError, CollageResult};
use crate::settings::Settings;
use serde::Deserialize;
use tracing::{debug, error};

/// One search result: the image to place and the thumbnail to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub image_url: String,
    pub thumbnail_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    /// 1-indexed page number
    pub page: u32,
    pub per_page: u32,
}

/// Anything that can answer a search query.
pub trait ImageSearchProvider {
    fn search(&mut self, query: &SearchQuery) -> CollageResult<Vec<SearchHit>>;
}

/// Handle for an issued request; pass it back to [`SearchSession::complete`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pub query: SearchQuery,
}

/// What the results panel should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing searched yet
    #[default]
    Idle,
    /// A request is in flight; previous results stay visible
    Pending,
    /// The last completed request returned hits
    Results,
    /// The last completed request returned nothing or failed
    NoResults,
}

#[derive(Debug)]
pub struct SearchSession {
    term: String,
    page: u32,
    per_page: u32,
    results: Vec<SearchHit>,
    status: SearchStatus,
    /// Generation of the most recently issued request
    latest_generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SEARCH_PAGE_SIZE)
    }
}

impl SearchSession {
    pub fn new(per_page: u32) -> Self {
        Self {
            term: String::new(),
            page: 1,
            per_page: per_page.max(1),
            results: Vec::new(),
            status: SearchStatus::Idle,
            latest_generation: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.search_page_size)
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Submit a search form. A different term starts again from page 1.
    pub fn submit(&mut self, term: impl Into<String>) -> SearchTicket {
        let term = term.into();
        if term != self.term {
            self.page = 1;
        }
        self.term = term;
        self.issue()
    }

    /// Advance one page; re-queries only when a term is set.
    pub fn next_page(&mut self) -> Option<SearchTicket> {
        self.page += 1;
        self.requery()
    }

    /// Go back one page; a no-op on page 1.
    pub fn prev_page(&mut self) -> Option<SearchTicket> {
        if self.page <= 1 {
            return None;
        }
        self.page -= 1;
        self.requery()
    }

    fn requery(&mut self) -> Option<SearchTicket> {
        if self.term.is_empty() {
            None
        } else {
            Some(self.issue())
        }
    }

    fn issue(&mut self) -> SearchTicket {
        self.latest_generation += 1;
        self.status = SearchStatus::Pending;
        let ticket = SearchTicket {
            generation: self.latest_generation,
            query: SearchQuery {
                term: self.term.clone(),
                page: self.page,
                per_page: self.per_page,
            },
        };
        debug!(
            term = %ticket.query.term,
            page = ticket.query.page,
            generation = ticket.generation,
            "Search issued"
        );
        ticket
    }

    /// Apply a provider response. Returns false if the ticket was superseded.
    ///
    /// Failures are logged and shown as "no results"; they are never retried.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        result: CollageResult<Vec<SearchHit>>,
    ) -> bool {
        if ticket.generation != self.latest_generation {
            debug!(
                generation = ticket.generation,
                latest = self.latest_generation,
                "Discarding stale search response"
            );
            return false;
        }

        match result {
            Ok(hits) => {
                self.status = if hits.is_empty() {
                    SearchStatus::NoResults
                } else {
                    SearchStatus::Results
                };
                self.results = hits;
            }
            Err(e) => {
                error!(term = %ticket.query.term, error = %e, "Error fetching search results");
                self.results.clear();
                self.status = SearchStatus::NoResults;
            }
        }
        true
    }

    /// Run `ticket` against `provider` synchronously and apply the result.
    pub fn run(&mut self, provider: &mut dyn ImageSearchProvider, ticket: SearchTicket) -> bool {
        let result = provider.search(&ticket.query);
        self.complete(&ticket, result)
    }
}

// ============================================================================
// Unsplash
// ============================================================================

/// Minimal blocking HTTP GET, supplied by the host.
pub trait HttpGet {
    /// Returns the status code and the response body.
    fn get(&mut self, url: &str) -> CollageResult<(u16, String)>;
}

/// Build the Unsplash photo search URL for `query`.
pub fn unsplash_search_url(query: &SearchQuery, access_key: &str) -> String {
    format!(
        "{UNSPLASH_SEARCH_ENDPOINT}?query={}&per_page={}&page={}&client_id={}",
        urlencoding::encode(&query.term),
        query.per_page,
        query.page,
        urlencoding::encode(access_key),
    )
}

#[derive(Deserialize)]
struct UnsplashResponse {
    #[serde(default)]
    results: Option<Vec<UnsplashPhoto>>,
}

#[derive(Deserialize)]
struct UnsplashPhoto {
    urls: UnsplashUrls,
}

#[derive(Deserialize)]
struct UnsplashUrls {
    small: String,
    #[serde(default)]
    thumb: Option<String>,
}

/// Parse an Unsplash search response body.
///
/// A body without `results` yields no hits.
pub fn parse_unsplash_response(body: &str) -> CollageResult<Vec<SearchHit>> {
    let response: UnsplashResponse = serde_json::from_str(body)?;
    Ok(response
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|photo| SearchHit {
            thumbnail_url: photo.urls.thumb.unwrap_or_else(|| photo.urls.small.clone()),
            image_url: photo.urls.small,
        })
        .collect())
}

/// Search provider backed by the Unsplash API.
pub struct UnsplashProvider<H: HttpGet> {
    access_key: String,
    http: H,
}

impl<H: HttpGet> UnsplashProvider<H> {
    pub fn new(access_key: impl Into<String>, http: H) -> Self {
        Self {
            access_key: access_key.into(),
            http,
        }
    }
}

impl<H: HttpGet> ImageSearchProvider for UnsplashProvider<H> {
    fn search(&mut self, query: &SearchQuery) -> CollageResult<Vec<SearchHit>> {
        let url = unsplash_search_url(query, &self.access_key);
        let (status, body) = self.http.get(&url)?;
        if !(200..300).contains(&status) {
            return Err(CollageError::Search(format!(
                "Network response was not ok (status {status})"
            )));
        }
        parse_unsplash_response(&body)
    }
}
