//! Campus reference data: buildings and the incident description pool.
//!
//! Both tables are fixed for the lifetime of the program. Building order is
//! the default display order.

use serde::Serialize;

/// A campus building. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Building {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
}

pub const BUILDINGS: [Building; 8] = [
    Building {
        id: "B1",
        name: "Classroom Building, Grades 1-3",
        category: "Classroom",
    },
    Building {
        id: "B2",
        name: "Classroom Building, Grades 4-6",
        category: "Classroom",
    },
    Building {
        id: "B3",
        name: "Administration Office",
        category: "Administration",
    },
    Building {
        id: "B4",
        name: "Mab Ammarit Library",
        category: "Learning Resource",
    },
    Building {
        id: "B5",
        name: "Cafeteria",
        category: "Nutrition",
    },
    Building {
        id: "B6",
        name: "Assembly Hall / Gymnasium",
        category: "Special Activities",
    },
    Building {
        id: "B7",
        name: "Computer Lab",
        category: "Technology",
    },
    Building {
        id: "B8",
        name: "Sports Field",
        category: "Field / Outdoor",
    },
];

pub const INCIDENT_DESCRIPTIONS: [&str; 15] = [
    "Broken light bulbs / insufficient lighting",
    "Cracked floor tiles, students at risk of falling",
    "Classroom door does not close / loose hinges",
    "Faulty power socket, short-circuit risk",
    "No running water in the restroom",
    "Roof leaks during heavy rain",
    "Broken student desk, needs replacement",
    "Fire exit sign not working",
    "Blocked drain, water pooling in the walkway",
    "Dust / mould on the ceiling panels",
    "Cracked drain grate, water leaking",
    "Public address system not working",
    "Fire door does not close fully",
    "Window glass broken by storm winds",
    "Some sports field floodlights are out",
];

/// Look up a building by id.
pub fn find_building(id: &str) -> Option<&'static Building> {
    BUILDINGS.iter().find(|b| b.id == id)
}
