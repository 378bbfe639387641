//! Test fixtures

use rutafy::shared::{Location, Place, Route, User};
use serde_json::{json, Value};

pub const TOKEN: &str = "abc123";
pub const EMAIL: &str = "me@mail.com";

pub fn place(name: &str) -> Place {
    Place {
        name: name.to_string(),
        location: Location::point(42.14, -0.41),
        description: format!("Visit {}", name),
        municipality: "Huesca".to_string(),
        categories: vec!["history".to_string()],
    }
}

pub fn route(id: &str, names: &[&str]) -> Route {
    Route {
        id: id.to_string(),
        minutes: 95,
        categories: vec!["history".to_string()],
        places: names.iter().map(|n| place(n)).collect(),
    }
}

pub fn user(categories: &[&str]) -> User {
    User {
        email: EMAIL.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

/// JSON body as the server would send it.
pub fn route_json(id: &str, names: &[&str]) -> Value {
    json!({
        "id": id,
        "minutes": 95,
        "categories": ["history"],
        "places": names.iter().map(|n| json!({
            "name": n,
            "location": {"type": "Point", "coordinates": [42.14, -0.41]},
            "description": format!("Visit {}", n),
            "municipality": "Huesca",
            "categories": ["history"],
        })).collect::<Vec<_>>(),
    })
}
