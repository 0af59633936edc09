//! Sample Data
//!
//! People records and column definitions shown by the demo window.

use gpui::{div, prelude::*, SharedString};

use crate::i18n::{t, Locale};
use crate::table::column::ColumnDef;
use crate::theme::colors::TableColors;

/// A person record
#[derive(Debug, Clone)]
pub struct Person {
    pub id: SharedString,
    pub name: SharedString,
    pub age: u32,
    pub city: SharedString,
    pub email: SharedString,
}

const NAMES: [&str; 8] = ["Cy", "Dee", "Eli", "Fay", "Gus", "Hal", "Ivy", "Jo"];
const CITIES: [&str; 5] = ["Lisbon", "Oslo", "Kyoto", "Quito", "Accra"];

/// Ann and Bo followed by generated people, enough for a few pages
pub fn sample_people() -> Vec<Person> {
    let mut people = vec![
        person("1", "Ann", 30, "Lisbon"),
        person("2", "Bo", 40, "Oslo"),
    ];

    people.extend((3..=24).map(|id| {
        let name = NAMES[id % NAMES.len()];
        let city = CITIES[id % CITIES.len()];
        let age = 20 + (id * 7 % 45) as u32;
        person(&id.to_string(), &format!("{name} {id}"), age, city)
    }));

    people
}

fn person(id: &str, name: &str, age: u32, city: &str) -> Person {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    Person {
        id: SharedString::from(id.to_string()),
        name: SharedString::from(name.to_string()),
        age,
        city: SharedString::from(city.to_string()),
        email: email.into(),
    }
}

/// Name and Age, then a Contact group over City and Email
pub fn people_columns(locale: Locale) -> Vec<ColumnDef<Person>> {
    vec![
        ColumnDef::new("name", t(locale, "demo-col-name"))
            .accessor(|p: &Person| p.name.clone())
            .cell(|cx| {
                div()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(cx.record().name.clone())
                    .into_any_element()
            })
            .fixed_width(180.0),
        ColumnDef::new("age", t(locale, "demo-col-age"))
            .accessor(|p: &Person| p.age.to_string().into())
            .fixed_width(80.0),
        ColumnDef::group(
            "contact",
            t(locale, "demo-col-contact"),
            vec![
                ColumnDef::new("city", t(locale, "demo-col-city"))
                    .accessor(|p: &Person| p.city.clone())
                    .fixed_width(140.0),
                ColumnDef::<Person>::new("email", t(locale, "demo-col-email"))
                    .cell(|cx| {
                        div()
                            .text_color(TableColors::text_secondary())
                            .child(cx.record().email.clone())
                            .into_any_element()
                    })
                    .flex_width(Some(200.0), None),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_starts_with_ann_and_bo() {
        let people = sample_people();
        assert_eq!(people.len(), 24);
        assert_eq!(people[0].id.to_string(), "1");
        assert_eq!(people[0].name.to_string(), "Ann");
        assert_eq!(people[1].age, 40);
    }

    #[test]
    fn sample_ids_are_unique() {
        let people = sample_people();
        let mut ids: Vec<_> = people.iter().map(|p| p.id.to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), people.len());
    }

    #[test]
    fn sample_emails_are_derived_from_names() {
        let people = sample_people();
        assert_eq!(people[0].email.to_string(), "ann@example.com");
        assert_eq!(people[2].email.to_string(), "fay.3@example.com");
    }
}
