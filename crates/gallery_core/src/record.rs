pub type RecordId = u64;
pub type RequestId = u64;

/// One catalog artwork as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: Option<i64>,
    pub date_end: Option<i64>,
}

/// Record fields that the grid can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnField {
    Title,
    PlaceOfOrigin,
    ArtistDisplay,
    Inscriptions,
    DateStart,
    DateEnd,
}

impl Record {
    pub fn field_text(&self, field: ColumnField) -> String {
        match field {
            ColumnField::Title => self.title.clone(),
            ColumnField::PlaceOfOrigin => self.place_of_origin.clone(),
            ColumnField::ArtistDisplay => self.artist_display.clone(),
            ColumnField::Inscriptions => self.inscriptions.clone(),
            ColumnField::DateStart => format_year(self.date_start),
            ColumnField::DateEnd => format_year(self.date_end),
        }
    }
}

fn format_year(year: Option<i64>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}
