// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use search_derive::{Search, SearchValue, Value};

pub struct Email(String);

impl SearchValue for Email {
    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    fn to_value(&self) -> Value {
        Value::Text(self.0.to_lowercase())
    }
}

#[derive(Search)]
#[search(table = "users")]
pub struct UserSearch {
    #[search("type:iexact")]
    pub email: Email,

    #[search("type:order;column:created_at")]
    pub order: &'static str,

    #[search("type:eq")]
    pub r#type: Box<str>
}

fn main() {
    let search = UserSearch {
        email: Email("A@B.C".into()),
        order: "asc",
        r#type: "admin".into()
    };
    assert!(!Search::is_zero(&search));
}
