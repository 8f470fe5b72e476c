//! In-memory gateway.

use super::PersistenceGateway;
use crate::error::{PersistenceError, Result};

/// Keeps the last saved blob in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    blob: Option<String>,
    save_count: usize,
    fail_saves: bool,
}

impl MemoryGateway {
    /// Creates an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway holding a previously saved blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            ..Self::default()
        }
    }

    /// Makes every `save` fail, leaving the stored blob untouched.
    pub fn failing(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// The stored blob, if any.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        if self.fail_saves {
            return Err(PersistenceError::Unavailable("memory gateway is read-only".into()));
        }
        self.blob = Some(blob.to_string());
        self.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_gateway() {
        let mut g = MemoryGateway::new();
        assert_eq!(g.load().unwrap(), None);
        g.save("{}").unwrap();
        assert_eq!(g.load().unwrap().as_deref(), Some("{}"));
        assert_eq!(g.save_count(), 1);
    }

    #[test]
    fn test_failing_gateway() {
        let mut g = MemoryGateway::with_blob("old").failing();
        assert!(g.save("new").is_err());
        assert_eq!(g.blob(), Some("old"));
        assert_eq!(g.save_count(), 0);
    }
}
