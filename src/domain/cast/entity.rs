/// An actor cast in a play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    /// Storage identifier, `None` until persisted
    pub id: Option<i64>,

    pub full_name: String,

    pub is_main_character: bool,

    /// UK number, `+44-##-###-####`
    pub phone_number: String,

    /// Play this actor appears in
    pub play_id: i32,
}

impl Cast {
    pub fn new(full_name: String, is_main_character: bool, phone_number: String, play_id: i32) -> Self {
        Self {
            id: None,
            full_name,
            is_main_character,
            phone_number,
            play_id,
        }
    }

    /// "main" or "lesser"
    pub fn role_label(&self) -> &'static str {
        if self.is_main_character {
            "main"
        } else {
            "lesser"
        }
    }
}
