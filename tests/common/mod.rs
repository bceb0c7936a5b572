//! Shared fixtures for the integration tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use glowcast_admin::domain::relation::RelatedUser;
use glowcast_admin::domain::types::ObjectId;
use glowcast_admin::repository::errors::RepositoryError;
use glowcast_admin::services::{ServiceError, ServiceResult};

pub fn related(id: &str) -> RelatedUser {
    RelatedUser {
        id: ObjectId::new(id).unwrap(),
        name: format!("user-{id}"),
        user_name: None,
        image: None,
        related_at: None,
    }
}

pub fn related_page(ids: &[&str]) -> Vec<RelatedUser> {
    ids.iter().map(|id| related(id)).collect()
}

type PageScript = Result<(usize, Vec<RelatedUser>), String>;

/// Paged source answering from a pre-scripted queue of responses and
/// recording which pages were requested.
pub struct ScriptedPages {
    responses: RefCell<VecDeque<PageScript>>,
    calls: RefCell<Vec<usize>>,
}

impl ScriptedPages {
    pub fn new(responses: Vec<PageScript>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub async fn next(&self, page: usize) -> ServiceResult<(usize, Vec<RelatedUser>)> {
        self.calls.borrow_mut().push(page);
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(page)) => Ok(page),
            Some(Err(message)) => Err(ServiceError::from(RepositoryError::Rejected(message))),
            None => panic!("scripted source ran out of responses (page {page})"),
        }
    }

    pub fn requested_pages(&self) -> Vec<usize> {
        self.calls.borrow().clone()
    }
}
