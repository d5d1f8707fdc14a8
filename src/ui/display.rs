//! Terminal rendering for destination cards and detail views

use colored::*;

use crate::places::Destination;

/// Single-line card: name and "city, country"
pub fn card_line<D: Destination>(destination: &D) -> String {
    let place = format!("({}, {})", destination.city(), destination.country());
    format!("{} {}", destination.name().bold(), place.as_str().dimmed())
}

pub fn print_cards<D: Destination>(destinations: &[D]) {
    for (i, destination) in destinations.iter().enumerate() {
        println!("  {}. {}", i + 1, card_line(destination));
    }
}

pub fn print_detail<D: Destination>(destination: &D) {
    println!();
    println!("{}", destination.name().bright_blue().bold());
    println!("📍 {}, {}", destination.city(), destination.country());
    println!();
    println!("{}", destination.description());
    println!();
    println!("  {} {}", "Image:".dimmed(), destination.image());
    println!(
        "  {} {}",
        "View on Google Maps:".dimmed(),
        destination.coordinates().maps_url()
    );
    println!();
}

/// Text progress bar: one segment per question, filled up to the current one
pub fn progress_bar(reached: usize, total: usize) -> String {
    (0..total)
        .map(|i| if i < reached { "■" } else { "□" })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(1, 4), "■ □ □ □");
        assert_eq!(progress_bar(4, 4), "■ ■ ■ ■");
        assert_eq!(progress_bar(0, 0), "");
    }
}
