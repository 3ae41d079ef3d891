use serde::Serialize;

/// A field the extractor knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    FullName,
    Email,
    ContactNo,
    #[serde(rename = "CNIC")]
    Cnic,
    Skills,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::ContactNo,
        Field::Cnic,
        Field::Skills,
    ];

    /// Key used for this field in the serialized record.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "FullName",
            Field::Email => "Email",
            Field::ContactNo => "ContactNo",
            Field::Cnic => "CNIC",
            Field::Skills => "Skills",
        }
    }
}

/// Fields extracted from one résumé. A missing field was not found; a present
/// field is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    #[serde(rename = "FullName", skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(rename = "ContactNo", skip_serializing_if = "Option::is_none")]
    contact_no: Option<String>,
    #[serde(rename = "CNIC", skip_serializing_if = "Option::is_none")]
    cnic: Option<String>,
    #[serde(rename = "Skills", skip_serializing_if = "Option::is_none")]
    skills: Option<String>,
}

impl CandidateRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.slot(field).is_some()
    }

    /// Stores `value` under `field`. Empty values are ignored so the record
    /// never carries an empty entry.
    pub(crate) fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        *self.slot_mut(field) = Some(value);
    }

    /// Present fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::ContactNo => &self.contact_no,
            Field::Cnic => &self.cnic,
            Field::Skills => &self.skills,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::ContactNo => &mut self.contact_no,
            Field::Cnic => &mut self.cnic,
            Field::Skills => &mut self.skills,
        }
    }
}
