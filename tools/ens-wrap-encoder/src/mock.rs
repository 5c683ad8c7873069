//! Mock chain reader for testing.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use alloy_primitives::{Address, FixedBytes};

pub use ens_wrap_types::{ChainReader, CollaboratorError};

/// Off-chain chain reader with canned answers.
///
/// Records every read so tests can assert which collaborators were touched.
pub struct MockChain {
    pub approved: bool,
    pub expiry: Option<u64>,
    reads: AtomicUsize,
    approval_queries: Mutex<Vec<(Address, Address)>>,
    expiry_queries: Mutex<Vec<FixedBytes<32>>>,
}

impl MockChain {
    pub fn new(approved: bool) -> Self {
        Self {
            approved,
            expiry: None,
            reads: AtomicUsize::new(0),
            approval_queries: Mutex::new(Vec::new()),
            expiry_queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_expiry(mut self, expiry: Option<u64>) -> Self {
        self.expiry = expiry;
        self
    }

    /// Total number of reads served.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn approval_queries(&self) -> Vec<(Address, Address)> {
        self.approval_queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    pub fn expiry_queries(&self) -> Vec<FixedBytes<32>> {
        self.expiry_queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

impl ChainReader for MockChain {
    async fn is_approved_for_all(
        &self,
        owner: Address,
        operator: Address,
    ) -> Result<bool, CollaboratorError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queries) = self.approval_queries.lock() {
            queries.push((owner, operator));
        }
        Ok(self.approved)
    }

    async fn name_expires(
        &self,
        label_hash: FixedBytes<32>,
    ) -> Result<Option<u64>, CollaboratorError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queries) = self.expiry_queries.lock() {
            queries.push(label_hash);
        }
        Ok(self.expiry)
    }
}

/// Reader whose calls always fail, for error propagation tests.
pub struct FailingChain;

impl ChainReader for FailingChain {
    async fn is_approved_for_all(
        &self,
        _owner: Address,
        _operator: Address,
    ) -> Result<bool, CollaboratorError> {
        Err(CollaboratorError::CallFailed("connection refused".to_string()))
    }
}
