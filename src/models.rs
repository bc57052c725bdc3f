use serde::{Deserialize, Serialize};

use crate::options::Extras;

// Chat API models
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub length: String,
    #[serde(default = "default_creativity")]
    pub creativity: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub extras: Extras,
}

fn default_creativity() -> f64 {
    0.5
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

// Option-list models for the form page and API clients
#[derive(Serialize)]
pub struct OptionsResponse {
    pub roles: Vec<&'static str>,
    pub tones: Vec<&'static str>,
    pub formats: Vec<&'static str>,
    pub lengths: Vec<&'static str>,
}
