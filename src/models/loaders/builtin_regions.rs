//! Region table compiled into the binary

use std::collections::BTreeMap;

use phf::phf_map;

const AMERICAS: &[&str] = &[
    "Home based - Americas, Asuncion",
    "Home based - Americas, Atlanta",
    "Home based - Americas, Austin",
    "Home based - Americas, Belo Horizonte",
    "Home based - Americas, Bogota",
    "Home based - Americas, Boston",
    "Home based - Americas, Brasilia",
    "Home based - Americas, Buenos Aires",
    "Home based - Americas, Calgary",
    "Home based - Americas, Caracas",
    "Home based - Americas, Charlotte",
    "Home based - Americas, Chicago",
    "Home based - Americas, Columbus",
    "Home based - Americas, Cordoba",
    "Home based - Americas, Curitiba",
    "Home based - Americas, Dallas",
    "Home based - Americas, Denver",
    "Home based - Americas, Detroit",
    "Home based - Americas, Edmonton",
    "Home based - Americas, Guadalajara",
    "Home based - Americas, Halifax",
    "Home based - Americas, Houston",
    "Home based - Americas, Kansas City",
    "Home based - Americas, Las Vegas",
    "Home based - Americas, Lima",
    "Home based - Americas, Los Angeles",
    "Home based - Americas, Medellin",
    "Home based - Americas, Mexico City",
    "Home based - Americas, Miami",
    "Home based - Americas, Minneapolis",
    "Home based - Americas, Monterrey",
    "Home based - Americas, Montevideo",
    "Home based - Americas, Montreal",
    "Home based - Americas, Nashville",
    "Home based - Americas, New York",
    "Home based - Americas, Orlando",
    "Home based - Americas, Ottawa",
    "Home based - Americas, Philadelphia",
    "Home based - Americas, Phoenix",
    "Home based - Americas, Pittsburgh",
    "Home based - Americas, Portland",
    "Home based - Americas, Porto Alegre",
    "Home based - Americas, Quito",
    "Home based - Americas, Raleigh",
    "Home based - Americas, Recife",
    "Home based - Americas, Rio de Janeiro",
    "Home based - Americas, Salt Lake City",
    "Home based - Americas, San Diego",
    "Home based - Americas, San Francisco",
    "Home based - Americas, San Jose, Costa Rica",
    "Home based - Americas, Santiago",
    "Home based - Americas, Sao Paulo",
    "Home based - Americas, Seattle",
    "Home based - Americas, St. Louis",
    "Home based - Americas, Toronto",
    "Home based - Americas, Vancouver",
    "Home based - Americas, Washington, DC",
    "Home based - Americas, Winnipeg",
    "Office based - Americas, Cranston, Rhode Island",
];

const EMEA: &[&str] = &[
    "Home based - EMEA, Amsterdam",
    "Home based - EMEA, Athens",
    "Home based - EMEA, Barcelona",
    "Home based - EMEA, Berlin",
    "Home based - EMEA, Bucharest",
    "Home based - EMEA, Budapest",
    "Home based - EMEA, Cape Town",
    "Home based - EMEA, Dublin",
    "Home based - EMEA, Edinburgh",
    "Home based - EMEA, Helsinki",
    "Home based - EMEA, Istanbul",
    "Home based - EMEA, Kyiv",
    "Home based - EMEA, Lisbon",
    "Home based - EMEA, Madrid",
    "Home based - EMEA, Milan",
    "Home based - EMEA, Munich",
    "Home based - EMEA, Nairobi",
    "Home based - EMEA, Paris",
    "Home based - EMEA, Prague",
    "Home based - EMEA, Stockholm",
    "Home based - EMEA, Tallinn",
    "Home based - EMEA, Warsaw",
    "Home based - EMEA, Zurich",
    "Office based - EMEA, London",
];

const APAC: &[&str] = &[
    "Home based - APAC, Auckland",
    "Home based - APAC, Bangalore",
    "Home based - APAC, Bangkok",
    "Home based - APAC, Brisbane",
    "Home based - APAC, Ho Chi Minh City",
    "Home based - APAC, Hong Kong",
    "Home based - APAC, Jakarta",
    "Home based - APAC, Kuala Lumpur",
    "Home based - APAC, Manila",
    "Home based - APAC, Melbourne",
    "Home based - APAC, Seoul",
    "Home based - APAC, Singapore",
    "Home based - APAC, Sydney",
    "Home based - APAC, Taipei",
    "Office based - APAC, Taipei",
    "Office based - APAC, Tokyo",
];

static BUILTIN_REGIONS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "americas" => AMERICAS,
    "emea" => EMEA,
    "apac" => APAC,
};

/// The compiled-in table as an owned map
pub fn builtin_region_table() -> BTreeMap<String, Vec<String>> {
    BUILTIN_REGIONS
        .entries()
        .map(|(name, locations)| {
            (
                name.to_string(),
                locations.iter().map(|l| l.to_string()).collect(),
            )
        })
        .collect()
}
