//! Spanish-format profile fields: names, postal addresses and phone numbers.
//!
//! `fake` ships no `es_ES` locale, so these are drawn from built-in tables.

use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Sex;

const MALE_FIRST_NAMES: &[&str] = &[
    "Alejandro", "Álvaro", "Andrés", "Antonio", "Carlos", "Daniel", "David", "Diego",
    "Enrique", "Fernando", "Francisco", "Gonzalo", "Hugo", "Ignacio", "Javier", "Jorge",
    "José", "Juan", "Luis", "Manuel", "Marcos", "Mario", "Miguel", "Pablo", "Pedro",
    "Rafael", "Ramón", "Raúl", "Sergio", "Víctor",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Alba", "Ana", "Andrea", "Beatriz", "Carmen", "Claudia", "Cristina", "Elena", "Eva",
    "Inés", "Irene", "Isabel", "Julia", "Laura", "Lucía", "Marta", "María", "Mercedes",
    "Natalia", "Nuria", "Paula", "Pilar", "Raquel", "Rocío", "Rosa", "Sara", "Silvia",
    "Sofía", "Teresa", "Valeria",
];

const SURNAMES: &[&str] = &[
    "Alonso", "Álvarez", "Blanco", "Castillo", "Castro", "Cruz", "Delgado", "Díaz",
    "Domínguez", "Fernández", "Garrido", "García", "Gil", "Gómez", "González", "Gutiérrez",
    "Hernández", "Iglesias", "Jiménez", "López", "Marín", "Martín", "Martínez", "Medina",
    "Molina", "Moreno", "Muñoz", "Navarro", "Ortega", "Ortiz", "Pérez", "Ramírez", "Ramos",
    "Romero", "Rubio", "Ruiz", "Sánchez", "Santos", "Serrano", "Suárez", "Torres", "Vázquez",
];

const STREET_TYPES: &[&str] = &[
    "Calle", "Avenida", "Paseo", "Plaza", "Camino", "Ronda", "Cuesta", "Pasaje", "Vía",
];

const STREET_NAMES: &[&str] = &[
    "Mayor", "Real", "del Sol", "de la Luna", "de Alcalá", "de Gracia", "del Carmen",
    "de la Paz", "de San Juan", "de Goya", "de Velázquez", "de Cervantes", "del Prado",
    "de la Constitución", "de los Olivos", "de la Estación", "del Mar", "de las Flores",
    "de Colón", "de Santa Ana",
];

/// City, province and the two-digit province code that prefixes its postcodes.
const CITIES: &[(&str, &str, u32)] = &[
    ("Madrid", "Madrid", 28),
    ("Barcelona", "Barcelona", 8),
    ("Valencia", "Valencia", 46),
    ("Sevilla", "Sevilla", 41),
    ("Zaragoza", "Zaragoza", 50),
    ("Málaga", "Málaga", 29),
    ("Murcia", "Murcia", 30),
    ("Palma", "Baleares", 7),
    ("Bilbao", "Vizcaya", 48),
    ("Alicante", "Alicante", 3),
    ("Córdoba", "Córdoba", 14),
    ("Valladolid", "Valladolid", 47),
    ("Vigo", "Pontevedra", 36),
    ("Gijón", "Asturias", 33),
    ("Granada", "Granada", 18),
    ("Salamanca", "Salamanca", 37),
    ("San Sebastián", "Guipúzcoa", 20),
    ("Santander", "Cantabria", 39),
    ("Toledo", "Toledo", 45),
    ("Cádiz", "Cádiz", 11),
];

fn pick<R: Rng>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

/// Given name plus two surnames.
pub fn full_name<R: Rng>(rng: &mut R, sex: Sex) -> String {
    let first = match sex {
        Sex::Male => pick(rng, MALE_FIRST_NAMES),
        Sex::Female => pick(rng, FEMALE_FIRST_NAMES),
    };
    format!("{} {} {}", first, pick(rng, SURNAMES), pick(rng, SURNAMES))
}

/// Two-line postal address, e.g. `Calle Mayor 12\n28014 Madrid (Madrid)`.
pub fn address<R: Rng>(rng: &mut R) -> String {
    let street_type = pick(rng, STREET_TYPES);
    let street = pick(rng, STREET_NAMES);
    let number: u32 = rng.gen_range(1..=250);
    let (city, province, code) = CITIES.choose(rng).copied().unwrap_or(CITIES[0]);
    let postcode = code * 1000 + rng.gen_range(1..=999);
    format!(
        "{} {} {}\n{:05} {} ({})",
        street_type, street, number, postcode, city, province
    )
}

/// Spanish mobile or landline number with the country prefix.
pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    let format = if rng.gen_bool(0.5) {
        "+34 6## ### ###"
    } else {
        "+34 9## ## ## ##"
    };
    NumberWithFormat(format).fake_with_rng(rng)
}
