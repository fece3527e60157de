// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use search_derive::{Search, SearchValue};

#[derive(Search)]
#[search(table = "items")]
pub struct ItemSearch<T: SearchValue, R>
where
    R: Search
{
    #[search("type:eq")]
    pub value: T,

    #[search(flatten)]
    pub rest: R,

    #[search("type:in;column:id")]
    pub ids: Vec<u32>,

    #[search("type:isnull;column:deleted_at")]
    pub deleted: Option<bool>
}

#[derive(Search)]
pub struct Empty {}

fn main() {
    let search = ItemSearch {
        value:   String::new(),
        rest:    Empty {},
        ids:     Vec::new(),
        deleted: None
    };
    assert!(Search::is_zero(&search));
}
