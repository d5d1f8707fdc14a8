use super::{Coordinates, Location, TravelLocation, TravelResult};

fn result(
    id: &str,
    name: &str,
    description: &str,
    image: &str,
    (city, country): (&str, &str),
    (latitude, longitude): (f64, f64),
) -> TravelResult {
    TravelResult {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        location: Location {
            country: country.to_string(),
            city: city.to_string(),
            coordinates: Coordinates::new(latitude, longitude),
        },
    }
}

fn location(
    id: &str,
    name: &str,
    (city, country): (&str, &str),
    description: &str,
    image: &str,
    (latitude, longitude): (f64, f64),
) -> TravelLocation {
    TravelLocation {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        city: city.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        coordinates: Coordinates::new(latitude, longitude),
    }
}

/// Destinations returned by the questionnaire recommender
pub fn sample_results() -> Vec<TravelResult> {
    vec![
        result(
            "place1",
            "Bali, Indonesia",
            "Known for its tropical beaches, vibrant rice paddies, unique culture, and spiritual temples. \
             Bali offers both relaxation and adventure across its diverse landscape.",
            "https://images.unsplash.com/photo-1537996194471-e657df975ab4?auto=format&fit=crop&w=800&h=500",
            ("Bali", "Indonesia"),
            (-8.3405, 115.0920),
        ),
        result(
            "place2",
            "Barcelona, Spain",
            "A vibrant city known for its architectural marvels designed by Antoni Gaudí, delicious \
             Mediterranean cuisine, and beautiful beaches along the coast.",
            "https://images.unsplash.com/photo-1539037116277-4db20889f2d4?auto=format&fit=crop&w=800&h=500",
            ("Barcelona", "Spain"),
            (41.3851, 2.1734),
        ),
        result(
            "place3",
            "Kyoto, Japan",
            "A city of cultural heritage featuring ancient temples, traditional tea houses, stunning \
             gardens, and seasonal beauty, especially during cherry blossom season.",
            "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?auto=format&fit=crop&w=800&h=500",
            ("Kyoto", "Japan"),
            (35.0116, 135.7681),
        ),
    ]
}

/// Tourist locations offered by the manual search
pub fn sample_locations() -> Vec<TravelLocation> {
    vec![
        location(
            "loc1",
            "Eiffel Tower",
            ("Paris", "France"),
            "The iconic iron tower built in 1889 that has become the most recognized symbol of Paris \
             and one of the world's most famous landmarks.",
            "https://images.unsplash.com/photo-1543349689-9a4d426bee8e?auto=format&fit=crop&w=800&h=500",
            (48.8584, 2.2945),
        ),
        location(
            "loc2",
            "Colosseum",
            ("Rome", "Italy"),
            "An ancient Roman amphitheater built in 70-80 AD, it is the largest amphitheater ever \
             built and a symbol of Imperial Rome.",
            "https://images.unsplash.com/photo-1552832230-c0197dd311b5?auto=format&fit=crop&w=800&h=500",
            (41.8902, 12.4922),
        ),
        location(
            "loc3",
            "Statue of Liberty",
            ("New York", "USA"),
            "A colossal neoclassical sculpture on Liberty Island in New York Harbor, gifted to the \
             United States by France in 1886.",
            "https://images.unsplash.com/photo-1605130284535-11dd9eedc58a?auto=format&fit=crop&w=800&h=500",
            (40.6892, -74.0445),
        ),
        location(
            "loc4",
            "Sydney Opera House",
            ("Sydney", "Australia"),
            "A multi-venue performing arts centre featuring a distinctive sail-shaped design, it is \
             one of the most famous buildings of the 20th century.",
            "https://images.unsplash.com/photo-1528072164453-f4e8ef0d475a?auto=format&fit=crop&w=800&h=500",
            (-33.8568, 151.2153),
        ),
    ]
}
