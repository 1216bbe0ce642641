use tracing::debug;

use super::error::SourceError;
use crate::domain::{KeyedProfile, Profile};

/// Producer of synthetic profile records
///
/// Each call yields one independently generated profile. Implementations
/// may fail; callers propagate the error unchanged.
pub trait ProfileSource {
    fn generate_profile(&mut self) -> Result<Profile, SourceError>;
}

impl<S: ProfileSource + ?Sized> ProfileSource for &mut S {
    fn generate_profile(&mut self) -> Result<Profile, SourceError> {
        (**self).generate_profile()
    }
}

impl<S: ProfileSource + ?Sized> ProfileSource for Box<S> {
    fn generate_profile(&mut self) -> Result<Profile, SourceError> {
        (**self).generate_profile()
    }
}

/// Materialize exactly `count` named-field profiles
pub fn generate_profiles<S>(source: &mut S, count: usize) -> Result<Vec<Profile>, SourceError>
where
    S: ProfileSource + ?Sized,
{
    let mut profiles = Vec::with_capacity(count);
    for _ in 0..count {
        profiles.push(source.generate_profile()?);
    }
    debug!(count, "Generated named-field profiles");
    Ok(profiles)
}

/// Materialize exactly `count` keyed-mapping profiles
///
/// Each profile is generated in named-field form and then converted, so the
/// result equals `generate_profiles` followed by `KeyedProfile::from`, and
/// the conversion cost is part of any timing taken around this call.
pub fn generate_keyed_profiles<S>(
    source: &mut S,
    count: usize,
) -> Result<Vec<KeyedProfile>, SourceError>
where
    S: ProfileSource + ?Sized,
{
    let mut profiles = Vec::with_capacity(count);
    for _ in 0..count {
        profiles.push(KeyedProfile::from(source.generate_profile()?));
    }
    debug!(count, "Generated keyed-mapping profiles");
    Ok(profiles)
}
