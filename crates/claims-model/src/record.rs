//! Raw patient-service record.

use serde::{Deserialize, Serialize};

use crate::catalog::FieldId;

/// Number of fields in a record.
pub const FIELD_COUNT: usize = 5;

/// One extracted row of raw field values.
///
/// Fields are kept exactly as extracted; absent cells are `None`. Nothing is
/// parsed until validation and a record never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    patient_id: Option<String>,
    health_card_number: Option<String>,
    version_code: Option<String>,
    date_of_birth: Option<String>,
    service_date: Option<String>,
}

impl Record {
    pub fn new(
        patient_id: Option<String>,
        health_card_number: Option<String>,
        version_code: Option<String>,
        date_of_birth: Option<String>,
        service_date: Option<String>,
    ) -> Self {
        Self {
            patient_id,
            health_card_number,
            version_code,
            date_of_birth,
            service_date,
        }
    }

    /// Build a record from cell text in column order. Empty cells become absent.
    pub fn from_cells(cells: [&str; FIELD_COUNT]) -> Self {
        let [patient_id, health_card_number, version_code, date_of_birth, service_date] =
            cells.map(cell_value);
        Self::new(
            patient_id,
            health_card_number,
            version_code,
            date_of_birth,
            service_date,
        )
    }

    pub fn patient_id(&self) -> Option<&str> {
        self.patient_id.as_deref()
    }

    pub fn health_card_number(&self) -> Option<&str> {
        self.health_card_number.as_deref()
    }

    pub fn version_code(&self) -> Option<&str> {
        self.version_code.as_deref()
    }

    pub fn date_of_birth(&self) -> Option<&str> {
        self.date_of_birth.as_deref()
    }

    pub fn service_date(&self) -> Option<&str> {
        self.service_date.as_deref()
    }

    /// Value of a single field.
    pub fn get(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::PatientId => self.patient_id(),
            FieldId::HealthCardNumber => self.health_card_number(),
            FieldId::VersionCode => self.version_code(),
            FieldId::DateOfBirth => self.date_of_birth(),
            FieldId::ServiceDate => self.service_date(),
        }
    }

    /// All values in column order (see [`FieldId::all`]).
    pub fn values(&self) -> [Option<&str>; FIELD_COUNT] {
        [
            self.patient_id(),
            self.health_card_number(),
            self.version_code(),
            self.date_of_birth(),
            self.service_date(),
        ]
    }
}

/// Convert an extracted cell into a field value.
pub fn cell_value(cell: &str) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}
