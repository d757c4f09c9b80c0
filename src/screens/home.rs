//! Company overview screen: the list every other screen links back to.

use crate::client::ApiClient;
use crate::models::{Company, CompanyInput};
use crate::screens::{require, LoadState, ScreenError};

/// Name-sorted company listing with inline creation.
pub struct HomeScreen {
    companies: Vec<Company>,
    load_state: LoadState,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            companies: Vec::new(),
            load_state: LoadState::Loading,
        }
    }

    /// Fetch the company list. Failure leaves the screen in an error state
    /// that a later `load` can recover from.
    pub async fn load(&mut self, client: &ApiClient) {
        match client.list_companies().await {
            Ok(mut companies) => {
                companies.sort_by(|a, b| a.name.cmp(&b.name));
                self.companies = companies;
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!("failed to load companies: {}", e);
                self.load_state = LoadState::Error(e.to_string());
            }
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Create a company and slot it into the sorted listing.
    ///
    /// The client's create call already performs the relist-and-match id
    /// recovery, so the returned record carries a real backend id.
    pub async fn create_company(
        &mut self,
        client: &ApiClient,
        input: CompanyInput,
    ) -> Result<Company, ScreenError> {
        require("name", &input.name)?;
        require("location", &input.location)?;

        let company = client.create_company(&input).await?;
        tracing::info!(id = company.id, name = %company.name, "company created");

        self.companies.push(company.clone());
        self.companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(company)
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}
