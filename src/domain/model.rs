use crate::utils::error::{RingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_WEIGHT: u32 = 125;
pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightClass {
    Featherweight,
    Lightweight,
    Middleweight,
    Heavyweight,
}

impl WeightClass {
    pub fn from_weight(weight: u32) -> Result<Self> {
        match weight {
            w if w >= 203 => Ok(WeightClass::Heavyweight),
            w if w >= 166 => Ok(WeightClass::Middleweight),
            w if w >= 133 => Ok(WeightClass::Lightweight),
            w if w >= MIN_WEIGHT => Ok(WeightClass::Featherweight),
            w => Err(RingError::validation(
                "weight",
                w,
                format!("Weight must be at least {}.", MIN_WEIGHT),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightClass::Featherweight => "FEATHERWEIGHT",
            WeightClass::Lightweight => "LIGHTWEIGHT",
            WeightClass::Middleweight => "MIDDLEWEIGHT",
            WeightClass::Heavyweight => "HEAVYWEIGHT",
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes of a boxer that does not have a store id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBoxer {
    pub name: String,
    pub weight: u32,
    pub height: u32,
    pub reach: f64,
    pub age: u32,
}

impl NewBoxer {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RingError::validation("name", "''", "Name cannot be empty."));
        }
        WeightClass::from_weight(self.weight)?;
        if self.height == 0 {
            return Err(RingError::validation(
                "height",
                self.height,
                "Height must be greater than 0.",
            ));
        }
        if !(self.reach.is_finite() && self.reach > 0.0) {
            return Err(RingError::validation(
                "reach",
                self.reach,
                "Reach must be greater than 0.",
            ));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(RingError::validation(
                "age",
                self.age,
                format!("Age must be between {} and {}.", MIN_AGE, MAX_AGE),
            ));
        }
        Ok(())
    }
}

/// A validated boxer. Fields are only reachable through accessors so a value
/// can never exist in an invalid state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boxer {
    id: u64,
    name: String,
    weight: u32,
    height: u32,
    reach: f64,
    age: u32,
    weight_class: WeightClass,
}

impl Boxer {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        weight: u32,
        height: u32,
        reach: f64,
        age: u32,
    ) -> Result<Self> {
        Self::from_new(
            id,
            NewBoxer {
                name: name.into(),
                weight,
                height,
                reach,
                age,
            },
        )
    }

    pub fn from_new(id: u64, new: NewBoxer) -> Result<Self> {
        if id == 0 {
            return Err(RingError::validation("id", id, "Id must be a positive integer."));
        }
        new.validate()?;
        let weight_class = WeightClass::from_weight(new.weight)?;
        Ok(Self {
            id,
            name: new.name,
            weight: new.weight,
            height: new.height,
            reach: new.reach,
            age: new.age,
            weight_class,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn reach(&self) -> f64 {
        self.reach
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight_class(&self) -> WeightClass {
        self.weight_class
    }
}

impl TryFrom<&serde_json::Value> for Boxer {
    type Error = RingError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| RingError::TypeMismatchError {
            expected: "Boxer".to_string(),
            found: json_kind(value).to_string(),
        })?;

        let mismatch = |field: &str| RingError::TypeMismatchError {
            expected: "Boxer".to_string(),
            found: format!("object with missing or invalid field '{}'", field),
        };
        let uint = |field: &str| -> Result<u64> {
            obj.get(field).and_then(|v| v.as_u64()).ok_or_else(|| mismatch(field))
        };
        let small = |field: &str| -> Result<u32> {
            u32::try_from(uint(field)?).map_err(|_| mismatch(field))
        };

        let name = obj
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| mismatch("name"))?;
        let reach = obj
            .get("reach")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| mismatch("reach"))?;

        Boxer::new(
            uint("id")?,
            name,
            small("weight")?,
            small("height")?,
            reach,
            small("age")?,
        )
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Catalog entry: the boxer plus the counters the store maintains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxerRecord {
    #[serde(flatten)]
    pub boxer: Boxer,
    pub fights: u32,
    pub wins: u32,
}

impl BoxerRecord {
    pub fn new(boxer: Boxer) -> Self {
        Self {
            boxer,
            fights: 0,
            wins: 0,
        }
    }

    pub fn apply(&mut self, outcome: FightOutcome) {
        self.fights += 1;
        if outcome == FightOutcome::Win {
            self.wins += 1;
        }
    }

    /// Wins over fights, `None` until the first fight.
    pub fn win_ratio(&self) -> Option<f64> {
        (self.fights > 0).then(|| f64::from(self.wins) / f64::from(self.fights))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FightOutcome {
    Win,
    Loss,
}

impl FromStr for FightOutcome {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "win" => Ok(FightOutcome::Win),
            "loss" => Ok(FightOutcome::Loss),
            other => Err(RingError::InvalidResultError {
                result: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FightOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FightOutcome::Win => f.write_str("win"),
            FightOutcome::Loss => f.write_str("loss"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Wins,
    WinPct,
}

impl FromStr for SortBy {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wins" => Ok(SortBy::Wins),
            "win_pct" => Ok(SortBy::WinPct),
            other => Err(RingError::InvalidSortByError {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Wins => f.write_str("wins"),
            SortBy::WinPct => f.write_str("win_pct"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub name: String,
    pub weight: u32,
    pub height: u32,
    pub reach: f64,
    pub age: u32,
    pub weight_class: WeightClass,
    pub fights: u32,
    pub wins: u32,
    /// Percentage rounded to one decimal place.
    pub win_pct: f64,
}
