use serde::{Deserialize, Serialize};

/// Discriminator naming the Details family a Product is paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailsType {
    PhysicalGood,
    TrainingSession,
    Seminar,
    Course,
}

impl DetailsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailsType::PhysicalGood => "physical_good",
            DetailsType::TrainingSession => "training_session",
            DetailsType::Seminar => "seminar",
            DetailsType::Course => "course",
        }
    }
}

impl std::fmt::Display for DetailsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DetailsType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "physical_good" => Ok(DetailsType::PhysicalGood),
            "training_session" => Ok(DetailsType::TrainingSession),
            "seminar" => Ok(DetailsType::Seminar),
            "course" => Ok(DetailsType::Course),
            _ => Err(format!("Invalid details type: {}", s)),
        }
    }
}
