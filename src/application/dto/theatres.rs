use serde::Deserialize;

use crate::domain::{Constraint, FieldRule, FieldValue, Validate};

static NAME: &[Constraint] = &[
    Constraint::Required,
    Constraint::MinLength(4),
    Constraint::MaxLength(30),
];
static NUMBER_OF_HALLS: &[Constraint] = &[Constraint::Range(1.0, 10.0)];
static DIRECTOR: &[Constraint] = &[
    Constraint::Required,
    Constraint::MinLength(4),
    Constraint::MaxLength(30),
];

static PRICE: &[Constraint] = &[Constraint::Range(1.00, 100.00)];
static ROW_NUMBER: &[Constraint] = &[Constraint::Range(1.0, 10.0)];

/// One theatre object of the JSON array
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TheatreRecord {
    pub name: String,
    pub number_of_halls: i8,
    pub director: String,
    /// `null` and a missing field both mean no tickets
    pub tickets: Option<Vec<TicketRecord>>,
}

/// One ticket nested under a theatre
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TicketRecord {
    pub price: f64,
    pub row_number: i8,
    pub play_id: i32,
}

impl Validate for TheatreRecord {
    /// Theatre-level fields only; tickets are checked one by one
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::new("Name", FieldValue::Text(&self.name), NAME),
            FieldRule::new(
                "NumberOfHalls",
                FieldValue::Number(f64::from(self.number_of_halls)),
                NUMBER_OF_HALLS,
            ),
            FieldRule::new("Director", FieldValue::Text(&self.director), DIRECTOR),
        ]
    }
}

impl Validate for TicketRecord {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::new("Price", FieldValue::Number(self.price), PRICE),
            FieldRule::new("RowNumber", FieldValue::Number(f64::from(self.row_number)), ROW_NUMBER),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theatre() -> TheatreRecord {
        TheatreRecord {
            name: "Old Vic".to_string(),
            number_of_halls: 2,
            director: "Matthew Warchus".to_string(),
            tickets: None,
        }
    }

    #[test]
    fn test_theatre_ignores_tickets() {
        let mut record = theatre();
        record.tickets = Some(vec![TicketRecord::default()]);
        assert!(record.is_valid());
    }

    #[test]
    fn test_halls_bounds() {
        let mut record = theatre();
        record.number_of_halls = 0;
        assert!(!record.is_valid());
        record.number_of_halls = 10;
        assert!(record.is_valid());
        record.number_of_halls = 11;
        assert!(!record.is_valid());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut record = theatre();
        record.name = "Vic".to_string();
        assert!(!record.is_valid());
    }

    #[test]
    fn test_ticket_bounds() {
        let ok = TicketRecord { price: 1.0, row_number: 10, play_id: 1 };
        assert!(ok.is_valid());
        assert!(!TicketRecord { price: 0.99, ..ok.clone() }.is_valid());
        assert!(!TicketRecord { price: 100.01, ..ok.clone() }.is_valid());
        assert!(!TicketRecord { row_number: 0, ..ok.clone() }.is_valid());
        assert!(!TicketRecord { row_number: 11, ..ok }.is_valid());
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{"Name":"Old Vic","NumberOfHalls":2,"Director":"Matthew Warchus",
                       "Tickets":[{"Price":12.5,"RowNumber":3,"PlayId":4}]}"#;
        let record: TheatreRecord = serde_json::from_str(json).unwrap();
        let tickets = record.tickets.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].price, 12.5);
        assert_eq!(tickets[0].row_number, 3);
        assert_eq!(tickets[0].play_id, 4);
    }

    #[test]
    fn test_null_and_missing_tickets() {
        let record: TheatreRecord = serde_json::from_str(r#"{"Name":"Old Vic","Tickets":null}"#).unwrap();
        assert!(record.tickets.is_none());
        let record: TheatreRecord = serde_json::from_str(r#"{"Name":"Old Vic"}"#).unwrap();
        assert!(record.tickets.is_none());
        assert_eq!(record.number_of_halls, 0);
    }
}
