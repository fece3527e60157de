// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use search_derive::Search;

#[derive(Search, Default)]
#[search(table = "orders")]
pub struct OrderSearch {
    #[search("type:gte;column:total")]
    pub min_total: i64
}

#[derive(Search, Default)]
pub struct Paging {
    #[search("page")]
    pub page: i64,

    #[search("pageSize")]
    pub page_size: i64
}

#[derive(Search, Default)]
#[search(table = "users")]
pub struct UserSearch {
    #[search("type:left;join:orders;on:user_id:id")]
    pub orders: OrderSearch,

    #[search("type:left;join:orders;on:user_id:id")]
    pub maybe_orders: Option<OrderSearch>,

    #[search(flatten)]
    pub paging: Paging,

    #[search("-")]
    pub internal: std::collections::HashMap<String, String>,

    pub untouched: std::time::Duration
}

fn main() {
    assert!(search_derive::Search::is_zero(&UserSearch::default()));
}
