use std::collections::VecDeque;

use super::error::SourceError;
use super::traits::ProfileSource;
use crate::domain::Profile;

/// Replays a fixed list of profiles in order, then reports exhaustion
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    remaining: VecDeque<Profile>,
    generated: usize,
}

impl FixtureSource {
    pub fn new(profiles: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            remaining: profiles.into_iter().collect(),
            generated: 0,
        }
    }

    /// Profiles not yet handed out
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl ProfileSource for FixtureSource {
    fn generate_profile(&mut self) -> Result<Profile, SourceError> {
        let profile = self.remaining.pop_front().ok_or(SourceError::Exhausted {
            generated: self.generated,
        })?;
        self.generated += 1;
        Ok(profile)
    }
}
