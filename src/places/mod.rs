//! Destination records
//!
//! Recommendation results, search-catalog locations and the place records
//! kept in local storage, together with the built-in sample data.

mod samples;

pub use samples::{sample_locations, sample_results};

use serde::{Deserialize, Serialize};

const MAPS_BASE_URL: &str = "https://www.google.com/maps";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Link that opens the point in Google Maps
    pub fn maps_url(&self) -> String {
        format!("{}?q={},{}", MAPS_BASE_URL, self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub city: String,
    pub coordinates: Coordinates,
}

/// A destination produced by the questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelResult {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub location: Location,
}

/// A tourist location offered by the manual search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelLocation {
    pub id: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub description: String,
    pub image: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: String,
}

/// Place record as kept under the `travelnexa_places` store key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPlace {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub country: String,
    pub city: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub image_url: String,
    pub location: PlaceLocation,
}

impl From<StoredPlace> for TravelLocation {
    fn from(place: StoredPlace) -> Self {
        TravelLocation {
            id: place.id,
            name: place.name,
            country: place.country,
            city: place.city,
            description: place.description,
            image: place.image_url,
            coordinates: Coordinates::new(place.location.latitude, place.location.longitude),
        }
    }
}

impl From<&TravelLocation> for StoredPlace {
    fn from(location: &TravelLocation) -> Self {
        StoredPlace {
            id: location.id.clone(),
            name: location.name.clone(),
            description: location.description.clone(),
            country: location.country.clone(),
            city: location.city.clone(),
            kind: "landmark".to_string(),
            image_url: location.image.clone(),
            location: PlaceLocation {
                latitude: location.coordinates.latitude,
                longitude: location.coordinates.longitude,
                address: format!("{}, {}", location.city, location.country),
            },
        }
    }
}

/// Common view over anything that can be shown as a destination card
pub trait Destination {
    fn name(&self) -> &str;
    fn city(&self) -> &str;
    fn country(&self) -> &str;
    fn description(&self) -> &str;
    fn image(&self) -> &str;
    fn coordinates(&self) -> Coordinates;
}

impl<T: Destination + ?Sized> Destination for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn city(&self) -> &str {
        (**self).city()
    }

    fn country(&self) -> &str {
        (**self).country()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn image(&self) -> &str {
        (**self).image()
    }

    fn coordinates(&self) -> Coordinates {
        (**self).coordinates()
    }
}

impl Destination for TravelResult {
    fn name(&self) -> &str {
        &self.name
    }

    fn city(&self) -> &str {
        &self.location.city
    }

    fn country(&self) -> &str {
        &self.location.country
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn image(&self) -> &str {
        &self.image
    }

    fn coordinates(&self) -> Coordinates {
        self.location.coordinates
    }
}

impl Destination for TravelLocation {
    fn name(&self) -> &str {
        &self.name
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn image(&self) -> &str {
        &self.image
    }

    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}
