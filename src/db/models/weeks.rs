use diesel::prelude::*;
use serde::Serialize;

use crate::db::postgres::schema::weeks;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq, Serialize)]
#[diesel(table_name = weeks)]
#[diesel(primary_key(week_id))]
pub struct Week {
    pub week_id: i32,
    pub year: i32,
    pub week_num: i32,
    pub active: bool,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = weeks)]
pub struct NewWeek {
    pub year: i32,
    pub week_num: i32,
    pub active: bool,
}
