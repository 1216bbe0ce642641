use chrono::NaiveDate;
use tracing::debug;

use super::error::EngineError;
use crate::domain::{BloodGroup, BloodTypeCount, Coordinate, OldestPerson, ProfileFields, Summary};

/// Days counted as one year when converting ages
pub const DAYS_PER_YEAR: i64 = 365;

/// Whole days between `birthdate` and `today`; negative for future birthdates
pub fn age_in_days(today: NaiveDate, birthdate: NaiveDate) -> i64 {
    (today - birthdate).num_days()
}

/// Whole years in `days`, rounding toward negative infinity
pub fn days_to_years(days: i64) -> i64 {
    days.div_euclid(DAYS_PER_YEAR)
}

/// Compute blood-type, location and age statistics in one pass
///
/// `today` is the reference date for every age computed in this call.
/// Profiles are read only through [`ProfileFields`], so any representation
/// works and identical inputs yield identical statistics.
///
/// - The average age floors twice: each age is floored to whole years
///   before summing, then the mean of those years is floored.
/// - The oldest person is the first profile whose age in days strictly
///   exceeds every earlier one, starting from zero. Profiles born today or
///   later never qualify.
/// - Ties for the largest blood type go to whichever group the frequency
///   table yields first. The table keeps groups in order of first
///   appearance, but which tied group wins is not part of the contract.
///
/// Fails with [`EngineError::DivisionByZero`] on empty input and with
/// [`EngineError::Field`] if a profile field cannot be read.
pub fn aggregate<P>(profiles: &[P], today: NaiveDate) -> Result<Summary<P>, EngineError>
where
    P: ProfileFields + Clone,
{
    let profile_count = profiles.len();
    if profile_count == 0 {
        return Err(EngineError::DivisionByZero);
    }

    let mut blood_groups: Vec<(BloodGroup, usize)> = Vec::with_capacity(BloodGroup::ALL.len());
    let mut oldest: Option<&P> = None;
    let mut oldest_age_days = 0;
    let mut location_sum = Coordinate::default();
    let mut age_years_sum: i64 = 0;

    for profile in profiles {
        let group = profile.blood_group()?;
        match blood_groups.iter_mut().find(|(seen, _)| *seen == group) {
            Some((_, count)) => *count += 1,
            None => blood_groups.push((group, 1)),
        }

        let age_days = age_in_days(today, profile.birthdate()?);
        if age_days > oldest_age_days {
            oldest_age_days = age_days;
            oldest = Some(profile);
        }

        location_sum = location_sum + profile.current_location()?;
        age_years_sum += days_to_years(age_days);
    }

    // non-empty input always records at least one group
    let (blood_group, count) = blood_groups
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .ok_or(EngineError::DivisionByZero)?;

    let summary = Summary {
        largest_blood_type: BloodTypeCount { blood_group, count },
        mean_current_location: location_sum.scaled_down(profile_count),
        oldest_person: oldest.map(|profile| OldestPerson {
            profile: profile.clone(),
            age_years: days_to_years(oldest_age_days),
        }),
        average_age: age_years_sum.div_euclid(profile_count as i64),
    };

    debug!(
        profile_count,
        largest_blood_type = %blood_group,
        largest_blood_type_count = count,
        average_age = summary.average_age,
        "Aggregated profiles"
    );

    Ok(summary)
}
