/// A theatre together with the tickets it sells
#[derive(Debug, Clone, PartialEq)]
pub struct Theatre {
    /// Storage identifier, `None` until persisted
    pub id: Option<i64>,

    pub name: String,

    pub number_of_halls: i8,

    pub director: String,

    /// Accepted tickets, in input order
    pub tickets: Vec<Ticket>,
}

/// A ticket for a play, sold by its owning theatre
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    /// Storage identifier, `None` until persisted
    pub id: Option<i64>,

    pub price: f64,

    pub row_number: i8,

    pub play_id: i32,
}

impl Theatre {
    /// Create a Theatre with no tickets
    pub fn new(name: String, number_of_halls: i8, director: String) -> Self {
        Self {
            id: None,
            name,
            number_of_halls,
            director,
            tickets: Vec::new(),
        }
    }

    pub fn add_ticket(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }
}

impl Ticket {
    pub fn new(price: f64, row_number: i8, play_id: i32) -> Self {
        Self {
            id: None,
            price,
            row_number,
            play_id,
        }
    }
}
