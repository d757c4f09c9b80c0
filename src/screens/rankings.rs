//! Department ranking screen: every department ordered by headcount, with a
//! top-3 highlight panel.

use crate::client::ApiClient;
use crate::models::{Company, DepartmentWithEmployees};
use crate::screens::LoadState;
use crate::views::{self, CompanyLink};

pub struct RankingScreen {
    ranked: Vec<DepartmentWithEmployees>,
    companies: Vec<Company>,
    load_state: LoadState,
}

impl RankingScreen {
    pub fn new() -> Self {
        Self {
            ranked: Vec::new(),
            companies: Vec::new(),
            load_state: LoadState::Loading,
        }
    }

    /// Fetch the unwrap data and the company cache concurrently, then rank.
    pub async fn load(&mut self, client: &ApiClient) {
        let (groups, companies) = tokio::join!(
            client.list_departments_with_employees(),
            client.list_companies()
        );

        match (groups, companies) {
            (Ok(groups), Ok(companies)) => {
                self.ranked = views::rank_by_headcount(groups);
                self.companies = companies;
                self.load_state = LoadState::Loaded;
            }
            (groups, companies) => {
                let e = [
                    groups.err().map(|e| e.to_string()),
                    companies.err().map(|e| e.to_string()),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join("; ");
                tracing::error!("failed to load department ranking: {}", e);
                self.load_state = LoadState::Error(e);
            }
        }
    }

    /// All departments, descending by employee count.
    pub fn ranked(&self) -> &[DepartmentWithEmployees] {
        &self.ranked
    }

    /// The highlight panel: first min(3, n) of the ranking.
    pub fn top_three(&self) -> &[DepartmentWithEmployees] {
        views::top_three(&self.ranked)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Resolve a ranked department's owning company.
    pub fn company_of<'a>(&'a self, group: &'a DepartmentWithEmployees) -> CompanyLink<'a> {
        views::resolve_company(&self.companies, &group.department.company)
    }
}

impl Default for RankingScreen {
    fn default() -> Self {
        Self::new()
    }
}
