// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use search_derive::{CompileOptions, Driver, Search, compile};

#[derive(Search)]
#[search(table = "category")]
pub struct CategorySearch {
    #[search("type:like")]
    pub name: String,

    #[search("type:eq;column:parent_id")]
    pub parent_id: u64,

    #[search("page")]
    pub page: i64,

    #[search("pageSize")]
    pub page_size: i64
}

fn main() {
    let filter = CategorySearch {
        name:      "bo".into(),
        parent_id: 5,
        page:      2,
        page_size: 10
    };
    let compiled = compile(&filter, &CompileOptions::new(Driver::Mysql)).unwrap();
    assert_eq!(compiled.tree().root.and.len(), 2);
}
