use serde::Serialize;

use super::blood_group::BloodGroup;
use super::coordinate::Coordinate;

/// Most frequent blood group and how many profiles carry it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BloodTypeCount {
    pub blood_group: BloodGroup,
    pub count: usize,
}

/// Profile with the greatest age in days, and that age in whole years
#[derive(Debug, Clone, PartialEq)]
pub struct OldestPerson<P> {
    pub profile: P,
    pub age_years: i64,
}

/// Aggregate statistics produced by one pass over a profile collection
///
/// When several blood groups share the maximum count, `largest_blood_type`
/// names one of them; callers must not rely on which.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<P> {
    pub largest_blood_type: BloodTypeCount,
    pub mean_current_location: Coordinate,
    /// `None` when no profile has a strictly positive age in days
    pub oldest_person: Option<OldestPerson<P>>,
    pub average_age: i64,
}

impl<P> Summary<P> {
    /// Age in years of the oldest person, if any
    pub fn oldest_age_years(&self) -> Option<i64> {
        self.oldest_person.as_ref().map(|oldest| oldest.age_years)
    }

    /// Compare the statistics of two summaries regardless of representation
    ///
    /// The oldest person is compared by age only. Location means are compared
    /// bit-for-bit, which holds when both were summed in the same order.
    pub fn same_statistics<Q>(&self, other: &Summary<Q>) -> bool {
        self.largest_blood_type == other.largest_blood_type
            && self.mean_current_location.latitude.to_bits()
                == other.mean_current_location.latitude.to_bits()
            && self.mean_current_location.longitude.to_bits()
                == other.mean_current_location.longitude.to_bits()
            && self.oldest_age_years() == other.oldest_age_years()
            && self.average_age == other.average_age
    }

    /// Convert the oldest person's profile into another representation
    pub fn map_profile<Q, E>(self, f: impl FnOnce(P) -> Result<Q, E>) -> Result<Summary<Q>, E> {
        let oldest_person = match self.oldest_person {
            Some(OldestPerson { profile, age_years }) => Some(OldestPerson {
                profile: f(profile)?,
                age_years,
            }),
            None => None,
        };

        Ok(Summary {
            largest_blood_type: self.largest_blood_type,
            mean_current_location: self.mean_current_location,
            oldest_person,
            average_age: self.average_age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary<P>(oldest: Option<OldestPerson<P>>) -> Summary<P> {
        Summary {
            largest_blood_type: BloodTypeCount {
                blood_group: BloodGroup::OPositive,
                count: 2,
            },
            mean_current_location: Coordinate::new(1.25, -3.5),
            oldest_person: oldest,
            average_age: 34,
        }
    }

    #[test]
    fn oldest_age_years_reads_through_option() {
        let with = summary(Some(OldestPerson {
            profile: "x",
            age_years: 100,
        }));
        let without = summary::<&str>(None);

        assert_eq!(with.oldest_age_years(), Some(100));
        assert_eq!(without.oldest_age_years(), None);
    }

    #[test]
    fn same_statistics_ignores_profile_type() {
        let a = summary(Some(OldestPerson {
            profile: "named",
            age_years: 100,
        }));
        let b = summary(Some(OldestPerson {
            profile: 42_u32,
            age_years: 100,
        }));

        assert!(a.same_statistics(&b));
    }

    #[test]
    fn same_statistics_detects_differences() {
        let a = summary(Some(OldestPerson {
            profile: "a",
            age_years: 100,
        }));
        let mut b = a.clone();
        b.average_age = 35;
        assert!(!a.same_statistics(&b));

        let mut c = a.clone();
        c.oldest_person = None;
        assert!(!a.same_statistics(&c));
    }

    #[test]
    fn map_profile_keeps_statistics() {
        let a = summary(Some(OldestPerson {
            profile: "7",
            age_years: 99,
        }));
        let mapped = a.clone().map_profile(|p| p.parse::<u32>()).unwrap();

        assert!(a.same_statistics(&mapped));
        assert_eq!(mapped.oldest_person.unwrap().profile, 7);
    }

    #[test]
    fn map_profile_propagates_errors() {
        let a = summary(Some(OldestPerson {
            profile: "not a number",
            age_years: 99,
        }));
        assert!(a.map_profile(|p| p.parse::<u32>()).is_err());
    }
}
