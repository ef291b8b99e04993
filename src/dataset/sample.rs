//! Synthetic registry generator
//!
//! Produces a plausible registry for development and demos without shipping
//! the real export: Ukrainian place names, the real facility-type vocabulary,
//! and the same data defects the real registry has (literal "null" strings,
//! never-geocoded rows at 0,0, missing contact fields). Useful flag and
//! coordinate coverage is guaranteed only statistically, which is all the
//! dashboard needs.

use rand::prelude::*;

use crate::types::{ServiceCenter, TextField};

/// Region seed data: name, sample districts, map anchor.
const REGIONS: [(&str, [&str; 3], f64, f64); 8] = [
    ("Київська", ["Броварський", "Бучанський", "Обухівський"], 50.3, 30.5),
    ("Львівська", ["Львівський", "Стрийський", "Яворівський"], 49.8, 24.0),
    ("Одеська", ["Одеський", "Ізмаїльський", "Білгород-Дністровський"], 46.5, 30.7),
    ("Харківська", ["Харківський", "Чугуївський", "Лозівський"], 49.9, 36.2),
    ("Дніпропетровська", ["Дніпровський", "Криворізький", "Нікопольський"], 48.5, 35.0),
    ("Вінницька", ["Вінницький", "Гайсинський", "Жмеринський"], 49.2, 28.5),
    ("Полтавська", ["Полтавський", "Кременчуцький", "Миргородський"], 49.6, 34.5),
    ("Івано-Франківська", ["Івано-Франківський", "Калуський", "Коломийський"], 48.9, 24.7),
];

const SETTLEMENTS: [&str; 10] = [
    "Бровари", "Ірпінь", "Стрий", "Ізмаїл", "Чугуїв", "Кривий Ріг", "Гайсин", "Миргород",
    "Калуш", "Обухів",
];

const FACILITY_TYPES: [&str; 4] = ["ЦНАП", "ДІЯ ЦЕНТР", "МОБІЛЬНИЙ ЦНАП", "Віддалене робоче місце"];

const STREETS: [&str; 6] = [
    "вул. Незалежності",
    "вул. Соборна",
    "вул. Центральна",
    "просп. Миру",
    "вул. Шевченка",
    "вул. Гагаріна",
];

/// A flag column value: mostly "так"/"ні", with the registry's occasional
/// "null" entry (which normalizes to absent, exactly like the real export).
fn flag_value(rng: &mut impl Rng, yes_probability: f64) -> TextField {
    if rng.gen_bool(0.05) {
        TextField::from("null")
    } else if rng.gen_bool(yes_probability) {
        TextField::from("так")
    } else {
        TextField::from("ні")
    }
}

fn pick<'a>(rng: &mut impl Rng, values: &'a [&'a str]) -> &'a str {
    values.choose(rng).copied().unwrap_or(values[0])
}

/// Generate `count` synthetic registry records.
pub fn generate_sample(count: usize) -> Vec<ServiceCenter> {
    let mut rng = thread_rng();
    (0..count).map(|i| generate_record(&mut rng, i)).collect()
}

fn generate_record(rng: &mut impl Rng, index: usize) -> ServiceCenter {
    let (region, districts, anchor_lat, anchor_lng) =
        REGIONS[rng.gen_range(0..REGIONS.len())];
    let district = pick(rng, &districts);
    let settlement = pick(rng, &SETTLEMENTS);
    let facility_type = if rng.gen_bool(0.7) { FACILITY_TYPES[0] } else { pick(rng, &FACILITY_TYPES) };

    let mut center = ServiceCenter {
        id: format!("{}", 10_000 + index),
        name: TextField::from(format!("{facility_type} м. {settlement}").as_str()),
        facility_type: TextField::from(facility_type),
        region: TextField::from(region),
        district: TextField::from(district),
        settlement_type: TextField::from("місто"),
        settlement: TextField::from(settlement),
        street: TextField::from(pick(rng, &STREETS)),
        building: TextField::from(format!("{}", rng.gen_range(1..120)).as_str()),
        postal_code: TextField::from(format!("{:05}", rng.gen_range(10_000..99_999)).as_str()),
        schedule: TextField::from("Пн-Пт 09:00-18:00"),
        ..Default::default()
    };

    // A tenth of the rows were never geocoded and sit at 0,0 like the real
    // export; the rest scatter around the region anchor.
    if rng.gen_bool(0.9) {
        center.lat = Some(anchor_lat + rng.gen_range(-0.8..0.8));
        center.lng = Some(anchor_lng + rng.gen_range(-1.2..1.2));
    } else {
        center.lat = Some(0.0);
        center.lng = Some(0.0);
    }

    if rng.gen_bool(0.85) {
        center.phone = TextField::from(
            format!("+380{}", rng.gen_range(400_000_000u64..999_999_999)).as_str(),
        );
    }
    if rng.gen_bool(0.7) {
        center.email = TextField::from(format!("cnap{index}@example.gov.ua").as_str());
    }
    if rng.gen_bool(0.5) {
        center.website = TextField::from(format!("https://cnap{index}.gov.ua").as_str());
    }
    if rng.gen_bool(0.8) {
        center.manager = TextField::from("Іваненко Іван Іванович");
    }

    center.passport_services = flag_value(rng, 0.6);
    center.civil_registry = flag_value(rng, 0.5);
    center.social_services = flag_value(rng, 0.7);
    center.driver_services = flag_value(rng, 0.3);
    center.online_consulting = flag_value(rng, 0.5);
    center.phone_consulting = flag_value(rng, 0.8);
    center.ramp_access = flag_value(rng, 0.75);
    center.handrails = flag_value(rng, 0.6);
    center.sanitary_room = flag_value(rng, 0.55);
    center.accessible_parking = flag_value(rng, 0.4);
    center.transit_stop = flag_value(rng, 0.85);
    center.free_wifi = flag_value(rng, 0.65);
    center.electronic_queue = flag_value(rng, 0.45);
    center.stroller_space = flag_value(rng, 0.35);

    center
}
