use serde::Deserialize;

/// An external support site shown on the resources tab.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub url: String,
    pub region: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
}

impl Resource {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
