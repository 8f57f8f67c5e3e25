use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::domain::{TalentCraft, TalentIntake, TalentProfile};
use super::repository::TalentRepository;
use super::service::{RosterService, RosterServiceError};

/// Importer hydrating the roster from the studio's scheduling sheet export.
///
/// The sheet is the system of record for availability today; its `Next
/// Available` and `Bookouts` columns are kept verbatim on the profile and
/// only interpreted by the availability evaluator.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TalentIntake>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut intakes = Vec::new();

        for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            let row = record?;
            let craft = parse_craft(&row.craft).ok_or_else(|| RosterImportError::UnknownCraft {
                row: index + 1,
                value: row.craft.clone(),
            })?;

            intakes.push(TalentIntake {
                display_name: row.name,
                craft,
                status: row.status,
                next_available: row.next_available,
                bookouts: row.bookouts,
            });
        }

        Ok(intakes)
    }

    /// Load a sheet export straight into a roster service, returning the
    /// provisioned profiles.
    pub fn hydrate<R, T>(
        reader: R,
        service: &RosterService<T>,
    ) -> Result<Vec<TalentProfile>, RosterImportError>
    where
        R: Read,
        T: TalentRepository + 'static,
    {
        let intakes = Self::from_reader(reader)?;
        let mut profiles = Vec::with_capacity(intakes.len());
        for intake in intakes {
            profiles.push(service.provision(intake)?);
        }
        Ok(profiles)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Craft")]
    craft: String,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(
        rename = "Next Available",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    next_available: Option<String>,
    #[serde(
        rename = "Bookouts",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    bookouts: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_craft(value: &str) -> Option<TalentCraft> {
    match value.trim().to_ascii_lowercase().as_str() {
        "narrator" => Some(TalentCraft::Narrator),
        "director" => Some(TalentCraft::Director),
        "audio engineer" | "engineer" => Some(TalentCraft::AudioEngineer),
        "proofer" | "proof listener" => Some(TalentCraft::Proofer),
        _ => None,
    }
}

/// Error raised while importing a roster sheet.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to parse roster sheet: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} has unknown craft '{value}'")]
    UnknownCraft { row: usize, value: String },
    #[error(transparent)]
    Service(#[from] RosterServiceError),
}
