//! Airport reports: sorted views and derived facts, then text rendering.
//!
//! [`AirportReport::build`] is pure; [`render_text`] is the only place that
//! knows about layout.

use super::geo::great_circle_distance_km;
use super::types::{Airport, GeoPoint};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Write;

/// Lincoln Municipal Airport, the default reference point.
pub const LINCOLN: GeoPoint = GeoPoint::new(40.846176, -96.75471);

/// The orderings a report can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey {
    Id,
    Category,
    Name,
    NameDescending,
    CountryCity,
    LatitudeNorthToSouth,
    LongitudeWestToEast,
    DistanceFrom(GeoPoint),
}

impl SortKey {
    pub fn compare(&self, a: &Airport, b: &Airport) -> Ordering {
        match self {
            Self::Id => a.id().cmp(b.id()),
            Self::Category => a.category().cmp(b.category()),
            Self::Name => a.name().cmp(b.name()),
            Self::NameDescending => b.name().cmp(a.name()),
            Self::CountryCity => a
                .country_code()
                .cmp(b.country_code())
                .then_with(|| a.city().cmp(b.city())),
            Self::LatitudeNorthToSouth => b.latitude().total_cmp(&a.latitude()),
            Self::LongitudeWestToEast => a.longitude().total_cmp(&b.longitude()),
            Self::DistanceFrom(origin) => {
                let da = great_circle_distance_km(*origin, a.position());
                let db = great_circle_distance_km(*origin, b.position());
                da.total_cmp(&db)
            }
        }
    }
}

/// Stable sort of borrowed airports; the input is left untouched.
pub fn sorted_by(airports: &[Airport], key: SortKey) -> Vec<&Airport> {
    let mut view: Vec<&Airport> = airports.iter().collect();
    view.sort_by(|a, b| key.compare(a, b));
    view
}

pub fn closest_to(airports: &[Airport], point: GeoPoint) -> Option<&Airport> {
    sorted_by(airports, SortKey::DistanceFrom(point)).first().copied()
}

pub fn furthest_from(airports: &[Airport], point: GeoPoint) -> Option<&Airport> {
    sorted_by(airports, SortKey::DistanceFrom(point)).last().copied()
}

/// The median-longitude airport: index `len / 2` of the west-to-east order.
pub fn geographic_center(airports: &[Airport]) -> Option<&Airport> {
    let view = sorted_by(airports, SortKey::LongitudeWestToEast);
    view.get(view.len() / 2).copied()
}

pub fn find_first<P>(airports: &[Airport], predicate: P) -> Option<&Airport>
where
    P: Fn(&Airport) -> bool,
{
    airports.iter().find(|a| predicate(a))
}

pub fn find_city<'a>(airports: &'a [Airport], city: &str, country_code: &str) -> Option<&'a Airport> {
    find_first(airports, |a| a.city() == city && a.country_code() == country_code)
}

pub fn find_category<'a>(airports: &'a [Airport], category: &str) -> Option<&'a Airport> {
    find_first(airports, |a| a.category() == category)
}

// ─── Report assembly ────────────────────────────────────────────

/// Report settings: the reference point and the search targets.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub reference_name: String,
    pub reference: GeoPoint,
    pub target_city: String,
    pub target_country: String,
    /// Heading used for the city search; `"{city}, {country}"` when unset.
    pub target_city_label: Option<String>,
    pub target_category: String,
}

impl ReportConfig {
    pub fn city_label(&self) -> String {
        match &self.target_city_label {
            Some(label) => label.clone(),
            None => format!("{}, {}", self.target_city, self.target_country),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reference_name: "Lincoln".to_string(),
            reference: LINCOLN,
            target_city: "New York".to_string(),
            target_country: "US".to_string(),
            target_city_label: Some("New York, NY".to_string()),
            target_category: "large_airport".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub airports: Vec<Airport>,
}

/// A single derived fact. `airport` is `None` when nothing matched.
#[derive(Debug, Clone, Serialize)]
pub struct ReportFact {
    pub title: String,
    pub airport: Option<Airport>,
    #[serde(skip)]
    pub missing: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AirportReport {
    pub sections: Vec<ReportSection>,
    pub facts: Vec<ReportFact>,
}

impl AirportReport {
    /// Build every sorted view and derived fact. Empty input gives an empty report.
    pub fn build(airports: &[Airport], config: &ReportConfig) -> Self {
        if airports.is_empty() {
            return Self { sections: Vec::new(), facts: Vec::new() };
        }

        let reference = config.reference;
        let distance_title = format!("Airports By Distance from {}:", config.reference_name);
        let orderings: [(&str, SortKey); 8] = [
            ("Airports By GPS ID:", SortKey::Id),
            ("Airports By Type:", SortKey::Category),
            ("Airports By Name:", SortKey::Name),
            ("Airports By Name - Reversed:", SortKey::NameDescending),
            ("Airports By Country/City:", SortKey::CountryCity),
            ("Airports By Latitude:", SortKey::LatitudeNorthToSouth),
            ("Airports By Longitude:", SortKey::LongitudeWestToEast),
            (&distance_title, SortKey::DistanceFrom(reference)),
        ];

        let mut sections = vec![ReportSection {
            title: "Airports (original):".to_string(),
            airports: airports.to_vec(),
        }];
        sections.extend(orderings.iter().map(|(title, key)| ReportSection {
            title: title.to_string(),
            airports: sorted_by(airports, *key).into_iter().cloned().collect(),
        }));

        let fact = |title: String, airport: Option<&Airport>, missing: String| ReportFact {
            title,
            airport: airport.cloned(),
            missing,
        };
        let facts = vec![
            fact(
                format!("Closest Airport to {}:", config.reference_name),
                closest_to(airports, reference),
                "No airports found!".to_string(),
            ),
            fact(
                format!("Furthest Airport from {}:", config.reference_name),
                furthest_from(airports, reference),
                "No airports found!".to_string(),
            ),
            fact(
                "East-West Geographic Center:".to_string(),
                geographic_center(airports),
                "No airports found!".to_string(),
            ),
            fact(
                format!("{} airport:", config.city_label()),
                find_city(airports, &config.target_city, &config.target_country),
                format!("No {} airport found!", config.target_city),
            ),
            fact(
                format!("{} airport:", category_label(&config.target_category)),
                find_category(airports, &config.target_category),
                format!("No {} airport found!", category_label(&config.target_category).to_lowercase()),
            ),
        ];

        Self { sections, facts }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.facts.is_empty()
    }
}

/// "large_airport" → "Large".
fn category_label(category: &str) -> String {
    let word = category.split('_').next().unwrap_or(category);
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ─── Presentation ───────────────────────────────────────────────

fn write_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{} ", title);
    let _ = writeln!(out, "==============================");
}

/// Render a report the way the console listing expects it.
pub fn render_text(report: &AirportReport) -> String {
    let mut out = String::new();
    for section in &report.sections {
        write_header(&mut out, &section.title);
        for a in &section.airports {
            let _ = writeln!(out, "{}", a);
        }
    }
    for fact in &report.facts {
        write_header(&mut out, &fact.title);
        match &fact.airport {
            Some(a) => {
                let _ = writeln!(out, "{}", a);
            }
            None => {
                let _ = writeln!(out, "{}", fact.missing);
            }
        }
    }
    out
}
