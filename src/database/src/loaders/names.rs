use serde::Deserialize;

const STATIC_NAMES_JSON: &str = include_str!("../data/names.json");

#[derive(Debug, Clone, Deserialize)]
pub struct NamesEntity {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub team_names: Vec<String>,
}

pub struct NamesLoader;

impl NamesLoader {
    pub fn load() -> NamesEntity {
        serde_json::from_str(STATIC_NAMES_JSON).expect("embedded names.json is malformed")
    }
}
