//! Manual destination search
//!
//! Filters tourist locations by country, city and place name. Each populated
//! criterion must appear, case-insensitively, somewhere in the matching field.

use serde::{Deserialize, Serialize};

use crate::places::TravelLocation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub country: String,
    pub city: String,
    pub name: String,
}

impl SearchCriteria {
    pub fn new(
        country: impl Into<String>,
        city: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
            name: name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_empty() && self.city.is_empty() && self.name.is_empty()
    }

    pub fn matches(&self, location: &TravelLocation) -> bool {
        field_matches(&location.country, &self.country)
            && field_matches(&location.city, &self.city)
            && field_matches(&location.name, &self.name)
    }
}

fn field_matches(value: &str, needle: &str) -> bool {
    needle.is_empty() || value.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns the locations that satisfy every criterion, in catalog order
pub fn search<'a>(locations: &'a [TravelLocation], criteria: &SearchCriteria) -> Vec<&'a TravelLocation> {
    locations.iter().filter(|location| criteria.matches(location)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::sample_locations;

    fn names<'a>(results: &[&'a TravelLocation]) -> Vec<&'a str> {
        results.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let locations = sample_locations();
        let results = search(&locations, &SearchCriteria::default());
        assert_eq!(results.len(), locations.len());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let locations = sample_locations();
        let results = search(&locations, &SearchCriteria::new("fRaN", "", ""));
        assert_eq!(names(&results), vec!["Eiffel Tower"]);

        let results = search(&locations, &SearchCriteria::new("", "new", ""));
        assert_eq!(names(&results), vec!["Statue of Liberty"]);
    }

    #[test]
    fn test_all_criteria_must_match() {
        let locations = sample_locations();
        let results = search(&locations, &SearchCriteria::new("Italy", "Rome", "colos"));
        assert_eq!(names(&results), vec!["Colosseum"]);

        let results = search(&locations, &SearchCriteria::new("Italy", "Paris", ""));
        assert!(results.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let locations = sample_locations();
        let results = search(&locations, &SearchCriteria::new("", "", "se"));
        assert_eq!(names(&results), vec!["Colosseum", "Sydney Opera House"]);
    }
}
