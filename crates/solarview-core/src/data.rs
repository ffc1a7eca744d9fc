use serde::{Deserialize, Serialize};

/// The complete contents of the local data file.
/// Every section is defaulted so a partial file still parses — the display
/// layer treats missing sections as empty, never as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolarSystemData {
    pub planets: Vec<Body>,
    pub sun: SunInfo,
    pub asteroid_belt: BeltInfo,
    pub kuiper_belt: BeltInfo,
    pub dwarf_planets: Vec<DwarfPlanet>,
    pub missions: Vec<Mission>,
    pub timeline: Vec<TimelineEvent>,
}

/// One orbiting body record.
///
/// `id` is a stable positive integer starting at 1; it determines the
/// body's orbital radius and period in the visualization. `category`
/// (the `type` field in JSON) only picks a render radius there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Body {
    pub id: u32,
    pub name: String,
    pub emoji: String,
    #[serde(rename = "type")]
    pub category: String,
    /// CSS hex color used for the body disc and its glow.
    pub color: String,
    pub description: String,
    pub distance_from_sun: String,
    pub distance_from_sun_km: f64,
    pub diameter: String,
    pub mass: String,
    pub temperature: String,
    pub atmosphere: String,
    pub gravity: String,
    pub orbital_period: String,
    pub rotation_period: String,
    pub moons: u32,
    pub moons_list: Vec<Moon>,
    pub ring_system: bool,
    pub discovered_by: String,
    pub discovery_year: String,
    pub fun_fact: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Moon {
    pub name: String,
    pub diameter: String,
    pub distance: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SunInfo {
    pub name: String,
    pub description: String,
    pub diameter: String,
    pub temperature: String,
    pub core_temperature: String,
    pub mass: String,
    pub age: String,
    pub luminosity: String,
}

/// Asteroid belt / Kuiper belt section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeltInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub distance_from_sun: String,
    pub composition: String,
    pub largest_object: String,
    pub estimated_objects: String,
    pub fun_fact: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DwarfPlanet {
    pub name: String,
    pub emoji: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub diameter: String,
    pub distance_from_sun: String,
    pub moons: u32,
    pub fun_fact: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mission {
    pub year: String,
    pub name: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    pub description: String,
}

impl SolarSystemData {
    /// Parse the data file from a JSON string.
    ///
    /// Ids are expected to run 1..=n in list order; anything else still
    /// parses but gets flagged, since the visualization derives orbits
    /// from ids.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let data: Self = serde_json::from_str(json)?;
        for (i, planet) in data.planets.iter().enumerate() {
            let expected = i as u32 + 1;
            if planet.id != expected {
                log::warn!(
                    "planet {:?} has id {}, expected {}",
                    planet.name,
                    planet.id,
                    expected
                );
            }
        }
        Ok(data)
    }

    /// Look up a planet record by id.
    pub fn planet(&self, id: u32) -> Option<&Body> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// All moons across all planets, each paired with its parent's name.
    pub fn all_moons(&self) -> Vec<(&Moon, &Body)> {
        self.planets
            .iter()
            .flat_map(|p| p.moons_list.iter().map(move |m| (m, p)))
            .collect()
    }
}
